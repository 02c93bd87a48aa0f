//! Soil compatibility

use super::{apply_rules, DimensionScore, ScoreRule, Trigger};
use crate::context::{SoilAnalysis, SoilDrainage};
use crate::data::{CropProfile, DrainageRequirement};

fn texture_not_preferred(crop: &CropProfile, soil: &SoilAnalysis) -> bool {
    !crop.soil.preferred_textures.contains(&soil.texture)
}

fn ph_out_of_range(crop: &CropProfile, soil: &SoilAnalysis) -> bool {
    !crop.soil.ph.contains(soil.ph)
}

fn organic_matter_below(crop: &CropProfile, soil: &SoilAnalysis) -> bool {
    soil.organic_matter < crop.soil.organic_matter
}

fn drainage_insufficient(crop: &CropProfile, soil: &SoilAnalysis) -> bool {
    crop.soil.drainage == DrainageRequirement::Good && soil.drainage != SoilDrainage::Good
}

fn fertility_below(crop: &CropProfile, soil: &SoilAnalysis) -> bool {
    soil.fertility < crop.soil.fertility
}

pub static RULES: &[ScoreRule<SoilAnalysis>] = &[
    ScoreRule {
        code: "soil.texture",
        reason: "Soil texture is not among the preferred textures",
        points: -25.0,
        trigger: Trigger::When(texture_not_preferred),
    },
    ScoreRule {
        code: "soil.ph",
        reason: "Soil pH outside the crop's range",
        points: -20.0,
        trigger: Trigger::When(ph_out_of_range),
    },
    ScoreRule {
        code: "soil.organic_matter",
        reason: "Organic matter below requirement",
        points: -15.0,
        trigger: Trigger::When(organic_matter_below),
    },
    ScoreRule {
        code: "soil.drainage",
        reason: "Crop needs good drainage",
        points: -20.0,
        trigger: Trigger::When(drainage_insufficient),
    },
    ScoreRule {
        code: "soil.fertility",
        reason: "Fertility below requirement",
        points: -15.0,
        trigger: Trigger::When(fertility_below),
    },
];

pub fn score_soil(crop: &CropProfile, soil: &SoilAnalysis) -> DimensionScore {
    apply_rules(crop, soil, &[], RULES)
}
