use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoilInsight {
    pub summary: String,
    pub soil_fertilizer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrrigationPlan {
    pub needed: bool,
    pub volume: String,
    pub schedule: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FertilizerDose {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: String,
}

impl FertilizerDose {
    pub fn new(kind: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            amount: amount.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientPlan {
    pub needed: bool,
    pub fertilizers: Vec<FertilizerDose>,
    pub advice: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagementPrescription {
    pub irrigation: IrrigationPlan,
    pub nutrient: NutrientPlan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagementTask {
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl ManagementTask {
    pub fn new(
        priority: Priority,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            priority,
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), r#""HIGH""#);
        assert_eq!(
            serde_json::from_str::<Priority>(r#""MEDIUM""#).unwrap(),
            Priority::Medium
        );
    }

    #[test]
    fn priority_ordering() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn fertilizer_dose_uses_type_key() {
        let json = serde_json::to_string(&FertilizerDose::new("Urea", "40kg/Ha")).unwrap();
        assert_eq!(json, r#"{"type":"Urea","amount":"40kg/Ha"}"#);
    }
}
