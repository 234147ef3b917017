use crate::models::{FieldProfile, SensorReading, SoilInsight};

const DEFAULT_PH: f64 = 7.0;
const DEFAULT_MOISTURE: f64 = 50.0;
const DEFAULT_SOIL: &str = "Alluvial";

/// Soil health summary and soil amendment strategy.
///
/// Missing readings fall back to pH 7 and 50% moisture.
///
/// pH bands:
/// - <5.5: acidic, lime
/// - >7.5: alkaline, gypsum
/// - otherwise optimal, maintain organic matter
///
/// Moisture below 30% calls for immediate irrigation.
pub fn soil_insight(field: &FieldProfile, reading: &SensorReading) -> SoilInsight {
    let ph = reading.ph_level.unwrap_or(DEFAULT_PH);
    let moisture = reading.moisture.unwrap_or(DEFAULT_MOISTURE);

    let soil = match field.soil_type.trim() {
        "" => DEFAULT_SOIL,
        s => s,
    };

    let (ph_status, ph_strategy) = if ph < 5.5 {
        ("Soil is acidic.", "Apply Lime (Dolomite) to increase pH. ")
    } else if ph > 7.5 {
        ("Soil is alkaline.", "Apply Gypsum to lower pH. ")
    } else {
        ("pH level is optimal.", "Maintain organic matter. ")
    };

    let (moisture_status, moisture_strategy) = if moisture < 30.0 {
        (
            "Critically low moisture detected.",
            "Immediate irrigation required.",
        )
    } else {
        ("Moisture levels are stable.", "")
    };

    SoilInsight {
        summary: format!(
            "{} soil analysed against BARI and Kaggle crop guidelines. {} {}",
            soil, ph_status, moisture_status
        ),
        soil_fertilizer: format!("Recommended: {}{}", ph_strategy, moisture_strategy),
    }
}
