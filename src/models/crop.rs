use serde::Serialize;

/// Closed agronomic tolerance interval `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToleranceRange {
    pub low: f64,
    pub high: f64,
}

impl ToleranceRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Width of the range. A degenerate range reports 1 so it can be used as a divisor.
    pub fn span(&self) -> f64 {
        let span = self.high - self.low;
        if span == 0.0 {
            1.0
        } else {
            span
        }
    }
}

impl std::fmt::Display for ToleranceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// Static crop profile from the compiled-in knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropProfile {
    pub name: &'static str,
    pub nitrogen: ToleranceRange,
    pub phosphorus: ToleranceRange,
    pub potassium: ToleranceRange,
    pub ph: ToleranceRange,
    pub temperature: ToleranceRange,
    pub moisture: ToleranceRange,
    /// Lower-cased soil tags this crop favors
    pub soil_types: &'static [&'static str],
    pub expected_yield: &'static str,
    pub requirements: &'static str,
    pub fertilizer_plan: &'static str,
    pub icon: &'static str,
}

impl CropProfile {
    /// Case-insensitive soil match against the favored soil tags
    pub fn favors_soil(&self, soil_type: &str) -> bool {
        let soil = soil_type.to_lowercase();
        self.soil_types.iter().any(|s| *s == soil)
    }
}
