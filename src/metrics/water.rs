//! Water availability
//!
//! Crops that cannot be grown without irrigation score 0 when the field has
//! no irrigation access. This is a hard floor on the dimension only; the
//! aggregate score still weighs the other dimensions and does not veto.

use super::{apply_rules, DimensionScore, ScoreRule, Trigger};
use crate::context::WaterAvailability;
use crate::data::{CropProfile, IrrigationDependency, Level};

fn essential_without_access(crop: &CropProfile, water: &WaterAvailability) -> bool {
    crop.water.irrigation_dependency == IrrigationDependency::Essential && !water.irrigation_access
}

fn recommended_without_access(crop: &CropProfile, water: &WaterAvailability) -> bool {
    crop.water.irrigation_dependency == IrrigationDependency::Recommended && !water.irrigation_access
}

fn thirsty_crop_costly_irrigation(crop: &CropProfile, water: &WaterAvailability) -> bool {
    crop.water.requirement == Level::High && water.irrigation_cost == Level::High
}

fn unreliable_supply_drought_sensitive(crop: &CropProfile, water: &WaterAvailability) -> bool {
    water.reliability == Level::Low && crop.climate.drought_tolerance == Level::Low
}

pub static GATES: &[ScoreRule<WaterAvailability>] = &[ScoreRule {
    code: "water.irrigation_required",
    reason: "Irrigation is essential and the field has no irrigation access",
    points: -100.0,
    trigger: Trigger::When(essential_without_access),
}];

pub static RULES: &[ScoreRule<WaterAvailability>] = &[
    ScoreRule {
        code: "water.irrigation_recommended",
        reason: "Irrigation is recommended and the field has no irrigation access",
        points: -40.0,
        trigger: Trigger::When(recommended_without_access),
    },
    ScoreRule {
        code: "water.irrigation_cost",
        reason: "High water requirement with expensive irrigation",
        points: -25.0,
        trigger: Trigger::When(thirsty_crop_costly_irrigation),
    },
    ScoreRule {
        code: "water.reliability",
        reason: "Unreliable water supply for a drought-sensitive crop",
        points: -30.0,
        trigger: Trigger::When(unreliable_supply_drought_sensitive),
    },
];

pub fn score_water(crop: &CropProfile, water: &WaterAvailability) -> DimensionScore {
    apply_rules(crop, water, GATES, RULES)
}
