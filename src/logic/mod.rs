pub mod advisors;
pub mod catalogue;
pub mod engine;
pub mod scoring;

pub use advisors::{prescription, roadmap, soil_insight};
pub use engine::{Advice, AdvisoryEngine, FieldReport, LocalExpert};
pub use scoring::{recommend, score_crops, DEFAULT_TOP_N};

use crate::error::Result;
use crate::models::{FieldProfile, SensorReading};

/// Source of crop advice for a field, such as a hosted model or the local expert.
pub trait CropAdvisor: Send + Sync {
    /// Unique identifier for this advisor
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Produce a full report, or an error when the advisor cannot answer
    fn advise(
        &self,
        field: &FieldProfile,
        reading: &SensorReading,
        top_n: usize,
    ) -> Result<FieldReport>;
}
