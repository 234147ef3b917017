//! Plain-text rendering of advisor output for the terminal.

use crate::logic::scoring::CropScore;
use crate::logic::Advice;
use crate::models::{
    CropProfile, FieldProfile, ManagementPrescription, ManagementTask, Recommendation,
    SensorReading, SoilInsight,
};

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn reading_value(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{:.1}{}", v, unit),
        None => "--".to_string(),
    }
}

pub fn render_reading(field: &FieldProfile, reading: &SensorReading) -> String {
    let mut lines = vec![
        format!("Field: {} ({} soil)", field.name, field.soil_type),
        format!(
            "  Temp {}  Moisture {}  pH {}  N {}  P {}  K {}",
            reading_value(reading.temperature, "°C"),
            reading_value(reading.moisture, "%"),
            reading_value(reading.ph_level, ""),
            reading_value(reading.npk_n, ""),
            reading_value(reading.npk_p, ""),
            reading_value(reading.npk_k, ""),
        ),
    ];
    if let Some(at) = reading.recorded_at {
        lines.push(format!("  Recorded {}", at.format("%Y-%m-%d %H:%M UTC")));
    }
    lines.join("\n")
}

pub fn render_recommendations(recs: &[Recommendation]) -> String {
    if recs.is_empty() {
        return "No crop recommendations.".to_string();
    }

    let mut lines = vec!["Recommended Crops".to_string()];
    for (i, rec) in recs.iter().enumerate() {
        lines.push(format!(
            "{:>2}. [{}] {:<16} {:>3}%  yield {}",
            i + 1,
            rec.icon,
            rec.name,
            rec.suitability,
            rec.expected_yield
        ));
        lines.push(format!("      {}", rec.requirements));
        lines.push(format!("      Fertilizer: {}", rec.fertilizer));
    }
    lines.join("\n")
}

/// Per-attribute score breakdown for ranked crops.
pub fn render_breakdown(scores: &[CropScore<'_>]) -> String {
    let mut lines = vec!["Score Breakdown".to_string()];
    for scored in scores {
        lines.push(format!("{} ({:.1})", scored.crop.name, scored.score));
        for f in &scored.factors {
            let range = f.attribute.range(scored.crop);
            lines.push(format!(
                "    {:<12} {:>8} in {:<10} factor {:.2}  +{:.1}",
                f.attribute.as_str(),
                reading_value(f.value, ""),
                range.to_string(),
                f.factor,
                f.points
            ));
        }
        lines.push(format!("    {:<12} {:>8} {:<13} +{:.1}", "Soil", "", "", scored.soil_points));
    }
    lines.join("\n")
}

pub fn render_insight(insight: &SoilInsight) -> String {
    format!(
        "Soil Insight\n  {}\n  {}",
        insight.summary, insight.soil_fertilizer
    )
}

pub fn render_prescription(plan: &ManagementPrescription) -> String {
    let mut lines = vec![
        "Management Prescription".to_string(),
        format!(
            "  Irrigation needed: {}  ({} {})",
            yes_no(plan.irrigation.needed),
            plan.irrigation.volume,
            plan.irrigation.schedule
        ),
        format!("  Nutrients needed: {}", yes_no(plan.nutrient.needed)),
    ];
    for dose in &plan.nutrient.fertilizers {
        lines.push(format!("    - {}: {}", dose.kind, dose.amount));
    }
    lines.push(format!("  {}", plan.nutrient.advice));
    lines.join("\n")
}

pub fn render_roadmap(tasks: &[ManagementTask]) -> String {
    let mut lines = vec!["Management Roadmap".to_string()];
    for task in tasks {
        lines.push(format!(
            "  [{:<6}] {} ({})",
            task.priority.as_str(),
            task.title,
            task.icon
        ));
        lines.push(format!("           {}", task.description));
    }
    lines.join("\n")
}

pub fn render_report(field: &FieldProfile, reading: &SensorReading, advice: &Advice) -> String {
    let mut sections = vec![render_reading(field, reading)];
    if advice.fallback {
        sections.push("(primary advisor unavailable, showing local expert advice)".to_string());
    }
    sections.push(render_recommendations(&advice.report.recommendations));
    sections.push(render_insight(&advice.report.insight));
    sections.push(render_prescription(&advice.report.prescription));
    sections.push(render_roadmap(&advice.report.roadmap));
    sections.join("\n\n")
}

pub fn render_catalogue(crops: &[CropProfile]) -> String {
    let mut lines = vec![format!(
        "{:<16} {:>8} {:>7} {:>7} {:>8} {:>6} {:>7}  {}",
        "Crop", "N", "P", "K", "pH", "Temp", "Moist", "Soils"
    )];
    for crop in crops {
        lines.push(format!(
            "{:<16} {:>8} {:>7} {:>7} {:>8} {:>6} {:>7}  {}",
            crop.name,
            crop.nitrogen.to_string(),
            crop.phosphorus.to_string(),
            crop.potassium.to_string(),
            crop.ph.to_string(),
            crop.temperature.to_string(),
            crop.moisture.to_string(),
            crop.soil_types.join(", ")
        ));
    }
    lines.join("\n")
}
