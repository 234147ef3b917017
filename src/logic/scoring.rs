use super::catalogue;
use crate::models::{
    CropProfile, FieldProfile, Recommendation, SensorReading, ToleranceRange, UNKNOWN_SOIL,
};
use serde::Serialize;

/// Points for a field whose soil matches one of the crop's favored soils.
pub const SOIL_WEIGHT: f64 = 10.0;

/// Factor applied to an attribute whose sensor has not reported.
pub const ABSENT_FACTOR: f64 = 0.5;

pub const DEFAULT_TOP_N: usize = 3;

/// Scored reading attributes. Weights plus [`SOIL_WEIGHT`] sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Attribute {
    Nitrogen,
    Phosphorus,
    Potassium,
    Ph,
    Temperature,
    Moisture,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Attribute::Nitrogen,
        Attribute::Phosphorus,
        Attribute::Potassium,
        Attribute::Ph,
        Attribute::Temperature,
        Attribute::Moisture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Nitrogen => "Nitrogen",
            Attribute::Phosphorus => "Phosphorus",
            Attribute::Potassium => "Potassium",
            Attribute::Ph => "pH",
            Attribute::Temperature => "Temperature",
            Attribute::Moisture => "Moisture",
        }
    }

    pub fn weight(&self) -> f64 {
        match self {
            Attribute::Nitrogen => 15.0,
            Attribute::Phosphorus => 10.0,
            Attribute::Potassium => 10.0,
            Attribute::Ph => 20.0,
            Attribute::Temperature => 15.0,
            Attribute::Moisture => 20.0,
        }
    }

    pub fn range(&self, crop: &CropProfile) -> ToleranceRange {
        match self {
            Attribute::Nitrogen => crop.nitrogen,
            Attribute::Phosphorus => crop.phosphorus,
            Attribute::Potassium => crop.potassium,
            Attribute::Ph => crop.ph,
            Attribute::Temperature => crop.temperature,
            Attribute::Moisture => crop.moisture,
        }
    }

    pub fn value(&self, reading: &SensorReading) -> Option<f64> {
        match self {
            Attribute::Nitrogen => reading.npk_n,
            Attribute::Phosphorus => reading.npk_p,
            Attribute::Potassium => reading.npk_k,
            Attribute::Ph => reading.ph_level,
            Attribute::Temperature => reading.temperature,
            Attribute::Moisture => reading.moisture,
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Match factor in `[0, 1]` for one reading value against a tolerance range.
///
/// - absent: [`ABSENT_FACTOR`]
/// - inside the range (inclusive): 1.0
/// - outside: decays linearly with distance from the midpoint, reaching zero
///   at twice the range width
pub fn range_factor(range: ToleranceRange, value: Option<f64>) -> f64 {
    let Some(value) = value else {
        return ABSENT_FACTOR;
    };

    if range.contains(value) {
        return 1.0;
    }

    let distance = (value - range.midpoint()).abs();
    (1.0 - distance / (2.0 * range.span())).max(0.0)
}

/// Soil contribution: full weight on a favored soil, half for the `Unknown`
/// sentinel (exact spelling), nothing otherwise.
pub fn soil_points(crop: &CropProfile, soil_type: &str) -> f64 {
    if crop.favors_soil(soil_type) {
        SOIL_WEIGHT
    } else if soil_type == UNKNOWN_SOIL {
        SOIL_WEIGHT / 2.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeFactor {
    pub attribute: Attribute,
    pub value: Option<f64>,
    pub factor: f64,
    pub points: f64,
}

/// Raw score of one crop with its per-attribute breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropScore<'a> {
    pub crop: &'a CropProfile,
    pub score: f64,
    pub factors: Vec<AttributeFactor>,
    pub soil_points: f64,
}

impl CropScore<'_> {
    pub fn to_recommendation(&self) -> Recommendation {
        Recommendation::from_profile(self.crop, self.score)
    }
}

pub fn score_crop<'a>(crop: &'a CropProfile, soil_type: &str, reading: &SensorReading) -> CropScore<'a> {
    let factors: Vec<AttributeFactor> = Attribute::ALL
        .iter()
        .map(|attribute| {
            let value = attribute.value(reading);
            let factor = range_factor(attribute.range(crop), value);
            AttributeFactor {
                attribute: *attribute,
                value,
                factor,
                points: factor * attribute.weight(),
            }
        })
        .collect();

    let soil_points = soil_points(crop, soil_type);
    let score = factors.iter().map(|f| f.points).sum::<f64>() + soil_points;

    CropScore {
        crop,
        score,
        factors,
        soil_points,
    }
}

/// Score every profile and sort by descending score. The sort is stable, so
/// equal scores keep declaration order.
pub fn rank<'a>(
    profiles: &'a [CropProfile],
    soil_type: &str,
    reading: &SensorReading,
) -> Vec<CropScore<'a>> {
    let mut scores: Vec<CropScore<'a>> = profiles
        .iter()
        .map(|crop| score_crop(crop, soil_type, reading))
        .collect();
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    scores
}

/// Rank the built-in catalogue.
pub fn score_crops(soil_type: &str, reading: &SensorReading) -> Vec<CropScore<'static>> {
    rank(catalogue::catalogue(), soil_type, reading)
}

/// Top `top_n` crops for a field. Returns fewer when the catalogue runs out.
pub fn recommend(field: &FieldProfile, reading: &SensorReading, top_n: usize) -> Vec<Recommendation> {
    let ranked = score_crops(&field.soil_type, reading);
    tracing::debug!(
        "Ranked {} crops for soil '{}', best: {}",
        ranked.len(),
        field.soil_type,
        ranked.first().map(|s| s.crop.name).unwrap_or("-")
    );

    ranked
        .iter()
        .take(top_n)
        .map(CropScore::to_recommendation)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::catalogue::{catalogue, find_crop};

    fn midpoint_reading(crop: &CropProfile) -> SensorReading {
        SensorReading::new()
            .with_temperature(crop.temperature.midpoint())
            .with_moisture(crop.moisture.midpoint())
            .with_ph(crop.ph.midpoint())
            .with_npk(
                crop.nitrogen.midpoint(),
                crop.phosphorus.midpoint(),
                crop.potassium.midpoint(),
            )
    }

    #[test]
    fn weights_sum_to_one_hundred() {
        let total: f64 = Attribute::ALL.iter().map(|a| a.weight()).sum::<f64>() + SOIL_WEIGHT;
        assert!((total - 100.0).abs() < 0.001);
    }

    #[test]
    fn range_factor_absent_is_neutral() {
        let range = ToleranceRange::new(5.5, 7.0);
        assert!((range_factor(range, None) - 0.5).abs() < 0.001);
    }

    #[test]
    fn range_factor_in_range_including_bounds() {
        let range = ToleranceRange::new(5.5, 7.0);
        assert!((range_factor(range, Some(5.5)) - 1.0).abs() < 0.001);
        assert!((range_factor(range, Some(7.0)) - 1.0).abs() < 0.001);
        assert!((range_factor(range, Some(6.1)) - 1.0).abs() < 0.001);
    }

    #[test]
    fn range_factor_decays_linearly_outside() {
        // midpoint 6.75, span 1.5: |9.0 - 6.75| / 3.0 = 0.75
        let range = ToleranceRange::new(6.0, 7.5);
        assert!((range_factor(range, Some(9.0)) - 0.25).abs() < 0.001);
        // just outside the low bound: |5.9 - 6.75| / 3.0 = 0.2833
        assert!((range_factor(range, Some(5.9)) - 0.716_666).abs() < 0.001);
    }

    #[test]
    fn range_factor_clamps_at_zero() {
        let range = ToleranceRange::new(6.0, 7.5);
        // exactly twice the width away from the midpoint
        assert!(range_factor(range, Some(9.75)).abs() < 0.001);
        assert!(range_factor(range, Some(40.0)).abs() < 0.001);
        assert!(range_factor(range, Some(-40.0)).abs() < 0.001);
    }

    #[test]
    fn range_factor_degenerate_range() {
        let range = ToleranceRange::new(5.0, 5.0);
        assert!((range_factor(range, Some(5.0)) - 1.0).abs() < 0.001);
        // span treated as 1: 1 - 1 / 2
        assert!((range_factor(range, Some(6.0)) - 0.5).abs() < 0.001);
    }

    #[test]
    fn soil_points_rules() {
        let rice = find_crop("Rice (Boro)").unwrap();
        assert!((soil_points(rice, "Clay") - 10.0).abs() < 0.001);
        assert!((soil_points(rice, "ALLUVIAL") - 10.0).abs() < 0.001);
        assert!((soil_points(rice, "Unknown") - 5.0).abs() < 0.001);
        assert!(soil_points(rice, "unknown").abs() < 0.001);
        assert!(soil_points(rice, "Sandy").abs() < 0.001);
        assert!(soil_points(rice, "").abs() < 0.001);
    }

    #[test]
    fn midpoint_reading_with_matching_soil_scores_full() {
        for crop in catalogue() {
            let score = score_crop(crop, crop.soil_types[0], &midpoint_reading(crop));
            assert!(
                (score.score - 100.0).abs() < 0.001,
                "{} scored {}",
                crop.name,
                score.score
            );
        }
    }

    #[test]
    fn empty_reading_with_unknown_soil_scores_fifty() {
        for scored in score_crops("Unknown", &SensorReading::new()) {
            assert!(
                (scored.score - 50.0).abs() < 0.001,
                "{} scored {}",
                scored.crop.name,
                scored.score
            );
        }
    }

    #[test]
    fn score_never_leaves_bounds() {
        let extreme = SensorReading::new()
            .with_temperature(-30.0)
            .with_moisture(500.0)
            .with_ph(14.0)
            .with_npk(1000.0, 1000.0, 1000.0);
        for scored in score_crops("Gravel", &extreme) {
            assert!(scored.score >= 0.0 && scored.score <= 100.0);
        }
    }

    #[test]
    fn breakdown_adds_up() {
        let reading = SensorReading::new().with_ph(8.2).with_moisture(35.0);
        let scored = score_crop(find_crop("Wheat").unwrap(), "Loamy", &reading);
        let total: f64 = scored.factors.iter().map(|f| f.points).sum::<f64>() + scored.soil_points;

        assert_eq!(scored.factors.len(), 6);
        assert!((total - scored.score).abs() < 1e-9);
        assert!((scored.soil_points - 10.0).abs() < 0.001);
        assert_eq!(scored.factors[3].attribute, Attribute::Ph);
        assert_eq!(scored.factors[3].value, Some(8.2));
    }

    #[test]
    fn clay_paddy_reading_ranks_rice_first() {
        let field = FieldProfile::new("Paddy", "Clay");
        let reading = SensorReading::new()
            .with_ph(5.5)
            .with_moisture(80.0)
            .with_temperature(25.0)
            .with_npk(70.0, 35.0, 35.0);

        let ranked = score_crops(&field.soil_type, &reading);
        assert_eq!(ranked[0].crop.name, "Rice (Boro)");
        assert!((ranked[0].score - 100.0).abs() < 0.001);

        let recs = recommend(&field, &reading, DEFAULT_TOP_N);
        assert_eq!(recs[0].name, "Rice (Boro)");
        assert_eq!(recs[0].suitability, 100);
    }

    #[test]
    fn recommend_is_sorted_descending() {
        let field = FieldProfile::new("Upland", "Sandy");
        let reading = SensorReading::new().with_temperature(30.0).with_moisture(38.0);
        let recs = recommend(&field, &reading, 20);
        for pair in recs.windows(2) {
            assert!(pair[0].suitability >= pair[1].suitability);
        }
    }

    #[test]
    fn ties_keep_catalogue_order() {
        let field = FieldProfile::new("Survey Pending", "Unknown");
        let recs = recommend(&field, &SensorReading::new(), 20);
        let names: Vec<&str> = recs.iter().map(|r| r.name.as_str()).collect();
        let expected: Vec<&str> = catalogue().iter().map(|c| c.name).collect();
        assert_eq!(names, expected);
        assert!(recs.iter().all(|r| r.suitability == 50));
    }

    #[test]
    fn soil_match_breaks_even_readings() {
        // favored-soil crops score 55, the rest 45; each group stays in catalogue order
        let field = FieldProfile::new("River Bank", "Sandy");
        let recs = recommend(&field, &SensorReading::new(), 20);
        let names: Vec<&str> = recs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Maize",
                "Potato",
                "Watermelon",
                "Millet",
                "Mustard",
                "Rice (Boro)",
                "Wheat",
                "Jute",
                "Cotton",
                "Pulses (Lentil)",
                "Soyabean",
            ]
        );
        assert_eq!(recs[0].suitability, 55);
        assert_eq!(recs[10].suitability, 45);
    }

    #[test]
    fn recommend_respects_top_n() {
        let field = FieldProfile::default();
        let reading = SensorReading::new();
        assert_eq!(recommend(&field, &reading, DEFAULT_TOP_N).len(), 3);
        assert_eq!(recommend(&field, &reading, 1).len(), 1);
        assert!(recommend(&field, &reading, 0).is_empty());
        assert_eq!(recommend(&field, &reading, 20).len(), catalogue().len());
    }

    #[test]
    fn recommend_is_deterministic() {
        let field = FieldProfile::new("Delta", "Alluvial");
        let reading = SensorReading::new()
            .with_ph(6.4)
            .with_moisture(55.0)
            .with_nitrogen(45.0);
        let first = serde_json::to_string(&recommend(&field, &reading, 3)).unwrap();
        let second = serde_json::to_string(&recommend(&field, &reading, 3)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_profile_set_ranks_nothing() {
        assert!(rank(&[], "Clay", &SensorReading::new()).is_empty());
    }
}
