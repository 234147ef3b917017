use super::crop::CropProfile;
use serde::{Deserialize, Serialize};

/// A ranked crop suggestion for a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    /// Suitability percentage, 0-100
    pub suitability: u8,
    #[serde(rename = "yield")]
    pub expected_yield: String,
    pub requirements: String,
    pub fertilizer: String,
    pub icon: String,
}

impl Recommendation {
    /// Build a recommendation from a profile and its raw score.
    pub fn from_profile(profile: &CropProfile, score: f64) -> Self {
        Self {
            name: profile.name.to_string(),
            suitability: score.round().clamp(0.0, 100.0) as u8,
            expected_yield: profile.expected_yield.to_string(),
            requirements: profile.requirements.to_string(),
            fertilizer: profile.fertilizer_plan.to_string(),
            icon: profile.icon.to_string(),
        }
    }
}
