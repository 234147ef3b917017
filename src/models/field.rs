use serde::{Deserialize, Serialize};

/// Sentinel soil type for fields whose soil has not been surveyed yet.
pub const UNKNOWN_SOIL: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilType {
    Alluvial,
    Clay,
    Loamy,
    Sandy,
    Peaty,
    Black,
    Red,
}

impl SoilType {
    pub const ALL: [SoilType; 7] = [
        SoilType::Alluvial,
        SoilType::Clay,
        SoilType::Loamy,
        SoilType::Sandy,
        SoilType::Peaty,
        SoilType::Black,
        SoilType::Red,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Alluvial => "Alluvial",
            SoilType::Clay => "Clay",
            SoilType::Loamy => "Loamy",
            SoilType::Sandy => "Sandy",
            SoilType::Peaty => "Peaty",
            SoilType::Black => "Black",
            SoilType::Red => "Red",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "alluvial" => Some(SoilType::Alluvial),
            "clay" => Some(SoilType::Clay),
            "loamy" | "loam" => Some(SoilType::Loamy),
            "sandy" | "sand" => Some(SoilType::Sandy),
            "peaty" | "peat" => Some(SoilType::Peaty),
            "black" | "black cotton" => Some(SoilType::Black),
            "red" => Some(SoilType::Red),
            _ => None,
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The slice of a field record the advisors need. Owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldProfile {
    pub name: String,
    /// Free-form soil type as entered for the field; may be empty or `Unknown`.
    #[serde(default)]
    pub soil_type: String,
}

impl FieldProfile {
    pub fn new(name: impl Into<String>, soil_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            soil_type: soil_type.into(),
        }
    }

    pub fn with_soil_type(mut self, soil_type: impl Into<String>) -> Self {
        self.soil_type = soil_type.into();
        self
    }

    /// Parsed soil type, if the free-form value names a known soil.
    pub fn known_soil(&self) -> Option<SoilType> {
        SoilType::from_str(&self.soil_type)
    }
}

impl Default for FieldProfile {
    fn default() -> Self {
        Self::new("Main Field", UNKNOWN_SOIL)
    }
}
