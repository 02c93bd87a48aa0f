//! Sustainability: environmental impact, pesticide load, soil conservation

use super::{apply_rules, DimensionScore, ScoreRule, Trigger};
use crate::data::{CropProfile, Level, PesticideUse, SoilConservation};

fn impact_high(crop: &CropProfile, _: &()) -> bool {
    crop.sustainability.environmental_impact == Level::High
}

fn impact_medium(crop: &CropProfile, _: &()) -> bool {
    crop.sustainability.environmental_impact == Level::Medium
}

fn pesticides_intensive(crop: &CropProfile, _: &()) -> bool {
    crop.sustainability.pesticide_use == PesticideUse::Intensive
}

fn pesticides_moderate(crop: &CropProfile, _: &()) -> bool {
    crop.sustainability.pesticide_use == PesticideUse::Moderate
}

fn conservation_excellent(crop: &CropProfile, _: &()) -> bool {
    crop.sustainability.soil_conservation == SoilConservation::Excellent
}

fn conservation_poor(crop: &CropProfile, _: &()) -> bool {
    crop.sustainability.soil_conservation == SoilConservation::Poor
}

pub static RULES: &[ScoreRule<()>] = &[
    ScoreRule {
        code: "sustainability.impact_high",
        reason: "High environmental impact",
        points: -30.0,
        trigger: Trigger::When(impact_high),
    },
    ScoreRule {
        code: "sustainability.impact_medium",
        reason: "Medium environmental impact",
        points: -15.0,
        trigger: Trigger::When(impact_medium),
    },
    ScoreRule {
        code: "sustainability.pesticides_intensive",
        reason: "Intensive pesticide use",
        points: -25.0,
        trigger: Trigger::When(pesticides_intensive),
    },
    ScoreRule {
        code: "sustainability.pesticides_moderate",
        reason: "Moderate pesticide use",
        points: -10.0,
        trigger: Trigger::When(pesticides_moderate),
    },
    ScoreRule {
        code: "sustainability.soil_conservation_excellent",
        reason: "Improves soil conservation",
        points: 10.0,
        trigger: Trigger::When(conservation_excellent),
    },
    ScoreRule {
        code: "sustainability.soil_conservation_poor",
        reason: "Degrades soil",
        points: -20.0,
        trigger: Trigger::When(conservation_poor),
    },
];

/// Depends on the crop alone
pub fn score_sustainability(crop: &CropProfile) -> DimensionScore {
    apply_rules(crop, &(), &[], RULES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::test_support::crop;

    #[test]
    fn test_bonus_capped_at_100() {
        // cowpea: low impact, minimal pesticides, excellent conservation
        let result = score_sustainability(&crop("cowpea"));
        assert_eq!(result.score, 100.0);
        assert_eq!(result.adjustments.len(), 1);
        assert_eq!(result.adjustments[0].points, 10.0);
    }

    #[test]
    fn test_penalties() {
        // rice: high impact (-30), intensive (-25)
        assert_eq!(score_sustainability(&crop("rice")).score, 45.0);
        // corn: medium impact (-15), moderate (-10)
        assert_eq!(score_sustainability(&crop("corn")).score, 75.0);
        // common bean: low impact, moderate (-10), excellent (+10)
        assert_eq!(score_sustainability(&crop("common_bean")).score, 100.0);
    }
}
