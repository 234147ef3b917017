use crate::error::{CropWiseError, Result};
use crate::models::{CropProfile, ToleranceRange};

const fn range(low: f64, high: f64) -> ToleranceRange {
    ToleranceRange::new(low, high)
}

/// Crop knowledge base, following BARI field guidelines and the Kaggle crop
/// recommendation dataset. Declaration order is the tie-break order for ranking.
static CATALOGUE: &[CropProfile] = &[
    CropProfile {
        name: "Rice (Boro)",
        nitrogen: range(60.0, 100.0),
        phosphorus: range(30.0, 60.0),
        potassium: range(30.0, 60.0),
        ph: range(5.5, 7.0),
        temperature: range(20.0, 35.0),
        moisture: range(70.0, 95.0),
        soil_types: &["clay", "peaty", "alluvial", "loamy"],
        expected_yield: "4.5-6.0 Ton/Ha",
        requirements: "Standing water of 2-5 cm through tillering. Transplant 35-45 day old seedlings.",
        fertilizer_plan: "Urea 260 kg/Ha, TSP 100 kg/Ha, MoP 120 kg/Ha, Gypsum 60 kg/Ha",
        icon: "rice",
    },
    CropProfile {
        name: "Wheat",
        nitrogen: range(40.0, 80.0),
        phosphorus: range(25.0, 50.0),
        potassium: range(25.0, 50.0),
        ph: range(6.0, 7.5),
        temperature: range(12.0, 25.0),
        moisture: range(40.0, 60.0),
        soil_types: &["loamy", "alluvial", "clay"],
        expected_yield: "3.0-4.0 Ton/Ha",
        requirements: "Cool dry winter. Sow by mid-November and irrigate at crown root, booting and grain filling.",
        fertilizer_plan: "Urea 220 kg/Ha, TSP 180 kg/Ha, MoP 50 kg/Ha",
        icon: "wheat",
    },
    CropProfile {
        name: "Maize",
        nitrogen: range(60.0, 120.0),
        phosphorus: range(30.0, 60.0),
        potassium: range(30.0, 60.0),
        ph: range(5.5, 7.5),
        temperature: range(18.0, 32.0),
        moisture: range(50.0, 70.0),
        soil_types: &["loamy", "sandy", "alluvial"],
        expected_yield: "7.0-10.0 Ton/Ha",
        requirements: "Well-drained soil. Avoid waterlogging at the knee-high stage.",
        fertilizer_plan: "Urea 500 kg/Ha, TSP 250 kg/Ha, MoP 200 kg/Ha, Zinc Sulphate 10 kg/Ha",
        icon: "corn",
    },
    CropProfile {
        name: "Jute",
        nitrogen: range(40.0, 80.0),
        phosphorus: range(20.0, 40.0),
        potassium: range(30.0, 60.0),
        ph: range(6.0, 7.5),
        temperature: range(24.0, 37.0),
        moisture: range(70.0, 90.0),
        soil_types: &["alluvial", "loamy", "clay"],
        expected_yield: "2.5-3.5 Ton/Ha",
        requirements: "Hot humid season with 150-250 cm rainfall. Clean retting water after harvest.",
        fertilizer_plan: "Urea 200 kg/Ha, TSP 50 kg/Ha, MoP 60 kg/Ha",
        icon: "leaf",
    },
    CropProfile {
        name: "Potato",
        nitrogen: range(50.0, 100.0),
        phosphorus: range(40.0, 80.0),
        potassium: range(50.0, 100.0),
        ph: range(5.0, 6.5),
        temperature: range(15.0, 25.0),
        moisture: range(60.0, 80.0),
        soil_types: &["sandy", "loamy", "alluvial"],
        expected_yield: "20.0-30.0 Ton/Ha",
        requirements: "Loose friable soil. Earth up at 30 days and stop irrigation 10 days before harvest.",
        fertilizer_plan: "Urea 350 kg/Ha, TSP 220 kg/Ha, MoP 250 kg/Ha",
        icon: "potato",
    },
    CropProfile {
        name: "Cotton",
        nitrogen: range(50.0, 100.0),
        phosphorus: range(25.0, 50.0),
        potassium: range(30.0, 60.0),
        ph: range(5.8, 8.0),
        temperature: range(21.0, 35.0),
        moisture: range(40.0, 60.0),
        soil_types: &["black", "clay", "loamy"],
        expected_yield: "1.5-2.5 Ton/Ha",
        requirements: "Long frost-free season on deep soils. Avoid waterlogging at boll formation.",
        fertilizer_plan: "Urea 250 kg/Ha, TSP 150 kg/Ha, MoP 150 kg/Ha",
        icon: "cotton",
    },
    CropProfile {
        name: "Watermelon",
        nitrogen: range(40.0, 80.0),
        phosphorus: range(30.0, 60.0),
        potassium: range(40.0, 80.0),
        ph: range(6.0, 7.0),
        temperature: range(22.0, 35.0),
        moisture: range(40.0, 60.0),
        soil_types: &["sandy", "loamy"],
        expected_yield: "25.0-35.0 Ton/Ha",
        requirements: "Sandy loam with good drainage and full sun. Mulch to keep fruit off wet soil.",
        fertilizer_plan: "Cowdung 10 Ton/Ha, Urea 150 kg/Ha, TSP 150 kg/Ha, MoP 200 kg/Ha",
        icon: "watermelon",
    },
    CropProfile {
        name: "Millet",
        nitrogen: range(20.0, 60.0),
        phosphorus: range(15.0, 40.0),
        potassium: range(15.0, 40.0),
        ph: range(5.5, 7.5),
        temperature: range(25.0, 35.0),
        moisture: range(30.0, 50.0),
        soil_types: &["sandy", "loamy", "red"],
        expected_yield: "1.5-2.5 Ton/Ha",
        requirements: "Tolerates drought and poor soils. One irrigation at flowering in a dry spell.",
        fertilizer_plan: "Urea 100 kg/Ha, TSP 80 kg/Ha, MoP 40 kg/Ha",
        icon: "grain",
    },
    CropProfile {
        name: "Pulses (Lentil)",
        nitrogen: range(10.0, 30.0),
        phosphorus: range(30.0, 60.0),
        potassium: range(20.0, 40.0),
        ph: range(6.0, 7.5),
        temperature: range(15.0, 25.0),
        moisture: range(30.0, 50.0),
        soil_types: &["loamy", "clay", "alluvial"],
        expected_yield: "1.2-1.8 Ton/Ha",
        requirements: "Grows on residual moisture after Aman rice. Inoculate seed with Rhizobium.",
        fertilizer_plan: "Urea 45 kg/Ha, TSP 85 kg/Ha, MoP 35 kg/Ha, Boric Acid 10 kg/Ha",
        icon: "bean",
    },
    CropProfile {
        name: "Mustard",
        nitrogen: range(40.0, 80.0),
        phosphorus: range(20.0, 40.0),
        potassium: range(20.0, 40.0),
        ph: range(6.0, 7.5),
        temperature: range(10.0, 25.0),
        moisture: range(35.0, 55.0),
        soil_types: &["loamy", "sandy", "alluvial"],
        expected_yield: "1.2-1.8 Ton/Ha",
        requirements: "Cool weather. Sow by early November with one irrigation at flowering.",
        fertilizer_plan: "Urea 250 kg/Ha, TSP 170 kg/Ha, MoP 85 kg/Ha, Gypsum 150 kg/Ha",
        icon: "flower",
    },
    CropProfile {
        name: "Soyabean",
        nitrogen: range(20.0, 50.0),
        phosphorus: range(30.0, 60.0),
        potassium: range(30.0, 60.0),
        ph: range(6.0, 7.0),
        temperature: range(20.0, 30.0),
        moisture: range(50.0, 70.0),
        soil_types: &["loamy", "clay", "alluvial"],
        expected_yield: "2.0-2.5 Ton/Ha",
        requirements: "Well-drained loam. Inoculate with Bradyrhizobium and avoid waterlogging.",
        fertilizer_plan: "Urea 60 kg/Ha, TSP 175 kg/Ha, MoP 120 kg/Ha",
        icon: "soybean",
    },
];

/// All known crop profiles in declaration order.
pub fn catalogue() -> &'static [CropProfile] {
    CATALOGUE
}

/// Case-insensitive lookup by display name.
pub fn find_crop(name: &str) -> Option<&'static CropProfile> {
    let name = name.trim().to_lowercase();
    CATALOGUE.iter().find(|c| c.name.to_lowercase() == name)
}

/// Check the structural invariants of a set of profiles.
pub fn validate_catalogue(profiles: &[CropProfile]) -> Result<()> {
    for (i, crop) in profiles.iter().enumerate() {
        let ranges = [
            ("nitrogen", crop.nitrogen),
            ("phosphorus", crop.phosphorus),
            ("potassium", crop.potassium),
            ("pH", crop.ph),
            ("temperature", crop.temperature),
            ("moisture", crop.moisture),
        ];
        for (label, r) in ranges {
            if r.low > r.high {
                return Err(CropWiseError::InvalidData(format!(
                    "{}: {} range {} has low above high",
                    crop.name, label, r
                )));
            }
        }

        if crop.soil_types.is_empty() {
            return Err(CropWiseError::InvalidData(format!(
                "{}: no favored soil types",
                crop.name
            )));
        }

        if let Some(tag) = crop.soil_types.iter().find(|s| s.to_lowercase() != **s) {
            return Err(CropWiseError::InvalidData(format!(
                "{}: soil tag '{}' is not lower-case",
                crop.name, tag
            )));
        }

        if profiles[..i].iter().any(|other| other.name == crop.name) {
            return Err(CropWiseError::InvalidData(format!(
                "duplicate crop name '{}'",
                crop.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_is_valid() {
        assert!(validate_catalogue(catalogue()).is_ok());
    }

    #[test]
    fn catalogue_order() {
        let names: Vec<&str> = catalogue().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "Rice (Boro)",
                "Wheat",
                "Maize",
                "Jute",
                "Potato",
                "Cotton",
                "Watermelon",
                "Millet",
                "Pulses (Lentil)",
                "Mustard",
                "Soyabean",
            ]
        );
    }

    #[test]
    fn find_crop_ignores_case() {
        assert_eq!(find_crop("wheat").map(|c| c.name), Some("Wheat"));
        assert_eq!(find_crop("RICE (BORO)").map(|c| c.name), Some("Rice (Boro)"));
        assert!(find_crop("Barley").is_none());
    }

    #[test]
    fn rice_profile_values() {
        let rice = find_crop("Rice (Boro)").unwrap();
        assert_eq!(rice.ph, ToleranceRange::new(5.5, 7.0));
        assert_eq!(rice.moisture, ToleranceRange::new(70.0, 95.0));
        assert!(rice.favors_soil("Clay"));
        assert!(rice.favors_soil("peaty"));
        assert_eq!(rice.expected_yield, "4.5-6.0 Ton/Ha");
    }

    #[test]
    fn validate_rejects_inverted_range() {
        let mut broken = catalogue()[1].clone();
        broken.ph = ToleranceRange::new(8.0, 6.0);
        let err = validate_catalogue(&[broken]).unwrap_err();
        assert!(err.to_string().contains("pH"));
    }

    #[test]
    fn validate_rejects_empty_soil_set() {
        let mut broken = catalogue()[1].clone();
        broken.soil_types = &[];
        assert!(validate_catalogue(&[broken]).is_err());
    }

    #[test]
    fn validate_rejects_duplicate_names() {
        let wheat = catalogue()[1].clone();
        let err = validate_catalogue(&[wheat.clone(), wheat]).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn validate_accepts_empty_catalogue() {
        assert!(validate_catalogue(&[]).is_ok());
    }
}
