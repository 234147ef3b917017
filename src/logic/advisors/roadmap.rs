use crate::models::{FieldProfile, ManagementTask, Priority, SensorReading};

/// Season management roadmap. The task list is fixed and does not depend on the field or reading.
pub fn roadmap(_field: &FieldProfile, _reading: &SensorReading) -> Vec<ManagementTask> {
    vec![
        ManagementTask::new(
            Priority::High,
            "Irrigation Check",
            "Inspect field channels and confirm even water distribution before the next growth stage.",
            "droplet",
        ),
        ManagementTask::new(
            Priority::Medium,
            "Nutrient Application",
            "Apply the prescribed NPK dose in split applications around irrigation events.",
            "flask",
        ),
        ManagementTask::new(
            Priority::Medium,
            "Pest Scouting",
            "Walk the field weekly and check leaf undersides for pests and disease lesions.",
            "bug",
        ),
        ManagementTask::new(
            Priority::Low,
            "Soil Testing",
            "Schedule a laboratory soil test after harvest to recalibrate next season's nutrient plan.",
            "clipboard",
        ),
    ]
}
