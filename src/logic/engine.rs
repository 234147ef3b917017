use super::advisors::{prescription, roadmap, soil_insight};
use super::scoring::{recommend, DEFAULT_TOP_N};
use super::CropAdvisor;
use crate::error::Result;
use crate::models::{
    FieldProfile, ManagementPrescription, ManagementTask, Recommendation, SensorReading,
    SoilInsight,
};
use serde::{Deserialize, Serialize};

/// Everything the dashboard shows for one field and reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldReport {
    pub recommendations: Vec<Recommendation>,
    pub insight: SoilInsight,
    pub prescription: ManagementPrescription,
    pub roadmap: Vec<ManagementTask>,
}

/// Rule-based expert that runs entirely on the compiled-in knowledge base.
pub struct LocalExpert;

impl LocalExpert {
    pub fn report(
        &self,
        field: &FieldProfile,
        reading: &SensorReading,
        top_n: usize,
    ) -> FieldReport {
        FieldReport {
            recommendations: recommend(field, reading, top_n),
            insight: soil_insight(field, reading),
            prescription: prescription(field, reading),
            roadmap: roadmap(field, reading),
        }
    }
}

impl CropAdvisor for LocalExpert {
    fn id(&self) -> &'static str {
        "local_expert"
    }

    fn name(&self) -> &'static str {
        "Local Expert System"
    }

    fn advise(
        &self,
        field: &FieldProfile,
        reading: &SensorReading,
        top_n: usize,
    ) -> Result<FieldReport> {
        Ok(self.report(field, reading, top_n))
    }
}

/// A report together with the advisor that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advice {
    pub source: &'static str,
    pub fallback: bool,
    #[serde(flatten)]
    pub report: FieldReport,
}

/// Asks the primary advisor first and falls back to the local expert when it fails.
pub struct AdvisoryEngine {
    primary: Option<Box<dyn CropAdvisor>>,
    fallback: LocalExpert,
    top_n: usize,
}

impl AdvisoryEngine {
    pub fn new() -> Self {
        Self {
            primary: None,
            fallback: LocalExpert,
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn with_primary(mut self, advisor: Box<dyn CropAdvisor>) -> Self {
        self.primary = Some(advisor);
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn advise(&self, field: &FieldProfile, reading: &SensorReading) -> Advice {
        if let Some(primary) = &self.primary {
            match primary.advise(field, reading, self.top_n) {
                Ok(report) => {
                    tracing::debug!("Advice for '{}' from {}", field.name, primary.name());
                    return Advice {
                        source: primary.id(),
                        fallback: false,
                        report,
                    };
                }
                Err(e) => {
                    tracing::warn!(
                        "{} failed, using {}: {}",
                        primary.name(),
                        self.fallback.name(),
                        e
                    );
                }
            }
        }

        Advice {
            source: self.fallback.id(),
            fallback: self.primary.is_some(),
            report: self.fallback.report(field, reading, self.top_n),
        }
    }

    pub fn list_advisors(&self) -> Vec<(&'static str, &'static str)> {
        let mut advisors: Vec<(&'static str, &'static str)> = self
            .primary
            .iter()
            .map(|a| (a.id(), a.name()))
            .collect();
        advisors.push((self.fallback.id(), self.fallback.name()));
        advisors
    }
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::new()
    }
}
