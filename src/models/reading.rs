use crate::error::{CropWiseError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A partial sensor reading. Any value may be absent while a sensor is not reporting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorReading {
    /// Air temperature in °C
    pub temperature: Option<f64>,
    /// Volumetric soil moisture in percent
    pub moisture: Option<f64>,
    pub ph_level: Option<f64>,
    /// Nitrogen in ppm
    pub npk_n: Option<f64>,
    /// Phosphorus in ppm
    pub npk_p: Option<f64>,
    /// Potassium in ppm
    pub npk_k: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl SensorReading {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_temperature(mut self, value: f64) -> Self {
        self.temperature = Some(value);
        self
    }

    pub fn with_moisture(mut self, value: f64) -> Self {
        self.moisture = Some(value);
        self
    }

    pub fn with_ph(mut self, value: f64) -> Self {
        self.ph_level = Some(value);
        self
    }

    pub fn with_npk(mut self, n: f64, p: f64, k: f64) -> Self {
        self.npk_n = Some(n);
        self.npk_p = Some(p);
        self.npk_k = Some(k);
        self
    }

    pub fn with_nitrogen(mut self, value: f64) -> Self {
        self.npk_n = Some(value);
        self
    }

    /// Parse a reading from a JSON object. Missing keys and `null` both mean absent.
    pub fn from_json(json: &str) -> Result<Self> {
        let reading: SensorReading = serde_json::from_str(json)?;
        reading.validate()?;
        Ok(reading)
    }

    /// True when no sensor has reported yet
    pub fn is_empty(&self) -> bool {
        self.values().iter().all(|(_, v)| v.is_none())
    }

    /// Overlay every value present in `other` onto this reading.
    pub fn merge(mut self, other: &SensorReading) -> Self {
        self.temperature = other.temperature.or(self.temperature);
        self.moisture = other.moisture.or(self.moisture);
        self.ph_level = other.ph_level.or(self.ph_level);
        self.npk_n = other.npk_n.or(self.npk_n);
        self.npk_p = other.npk_p.or(self.npk_p);
        self.npk_k = other.npk_k.or(self.npk_k);
        self.recorded_at = other.recorded_at.or(self.recorded_at);
        self
    }

    /// Reject NaN and infinite values at the boundary.
    pub fn validate(&self) -> Result<()> {
        for (label, value) in self.values() {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(CropWiseError::InvalidData(format!(
                        "{} must be a finite number, got {}",
                        label, v
                    )));
                }
            }
        }
        Ok(())
    }

    fn values(&self) -> [(&'static str, Option<f64>); 6] {
        [
            ("temperature", self.temperature),
            ("moisture", self.moisture),
            ("ph_level", self.ph_level),
            ("npk_n", self.npk_n),
            ("npk_p", self.npk_p),
            ("npk_k", self.npk_k),
        ]
    }
}
