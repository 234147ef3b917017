use crate::models::{
    FertilizerDose, FieldProfile, IrrigationPlan, ManagementPrescription, NutrientPlan,
    SensorReading,
};

const DEFAULT_MOISTURE: f64 = 50.0;
const DEFAULT_NITROGEN: f64 = 50.0;

/// Irrigation and nutrient prescription for the current reading.
///
/// Irrigation is needed below 40% moisture. Volume and schedule are always
/// filled in so the caller can show them either way:
/// - <20%: 25-30mm daily
/// - otherwise 15-20mm every 3 days
///
/// Nutrients are needed below 60 ppm nitrogen. Urea goes up to 75kg/Ha below 40 ppm.
pub fn prescription(_field: &FieldProfile, reading: &SensorReading) -> ManagementPrescription {
    let moisture = reading.moisture.unwrap_or(DEFAULT_MOISTURE);
    let nitrogen = reading.npk_n.unwrap_or(DEFAULT_NITROGEN);

    let (volume, schedule) = if moisture < 20.0 {
        ("25-30mm", "Daily")
    } else {
        ("15-20mm", "Every 3 days")
    };

    let urea = if nitrogen < 40.0 { "75kg/Ha" } else { "40kg/Ha" };

    ManagementPrescription {
        irrigation: IrrigationPlan {
            needed: moisture < 40.0,
            volume: volume.to_string(),
            schedule: schedule.to_string(),
        },
        nutrient: NutrientPlan {
            needed: nitrogen < 60.0,
            fertilizers: vec![
                FertilizerDose::new("Urea", urea),
                FertilizerDose::new("Organic Compost", "2 Ton/Ha"),
            ],
            advice: "Apply nitrogen in split doses for better absorption.".to_string(),
        },
    }
}
