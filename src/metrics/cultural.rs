//! Cultural fit: local know-how, acceptance, food-security role

use super::{apply_rules, DimensionScore, ScoreRule, Trigger};
use crate::data::{CropProfile, FoodSecurityRole, Level, LocalKnowledge};

fn knowledge_wide(crop: &CropProfile, _: &()) -> bool {
    crop.cultural.local_knowledge == LocalKnowledge::Wide
}

fn knowledge_limited(crop: &CropProfile, _: &()) -> bool {
    crop.cultural.local_knowledge == LocalKnowledge::Limited
}

fn acceptance_high(crop: &CropProfile, _: &()) -> bool {
    crop.cultural.acceptance == Level::High
}

fn acceptance_low(crop: &CropProfile, _: &()) -> bool {
    crop.cultural.acceptance == Level::Low
}

fn staple(crop: &CropProfile, _: &()) -> bool {
    crop.cultural.food_security == FoodSecurityRole::Essential
}

fn marginal_food_role(crop: &CropProfile, _: &()) -> bool {
    crop.cultural.food_security == FoodSecurityRole::Basic
}

pub static RULES: &[ScoreRule<()>] = &[
    ScoreRule {
        code: "cultural.knowledge_wide",
        reason: "Widely known to local farmers",
        points: 10.0,
        trigger: Trigger::When(knowledge_wide),
    },
    ScoreRule {
        code: "cultural.knowledge_limited",
        reason: "Little local growing experience",
        points: -20.0,
        trigger: Trigger::When(knowledge_limited),
    },
    ScoreRule {
        code: "cultural.acceptance_high",
        reason: "High cultural acceptance",
        points: 5.0,
        trigger: Trigger::When(acceptance_high),
    },
    ScoreRule {
        code: "cultural.acceptance_low",
        reason: "Low cultural acceptance",
        points: -25.0,
        trigger: Trigger::When(acceptance_low),
    },
    ScoreRule {
        code: "cultural.food_security_essential",
        reason: "Staple food crop",
        points: 15.0,
        trigger: Trigger::When(staple),
    },
    ScoreRule {
        code: "cultural.food_security_basic",
        reason: "Minor role in household food security",
        points: -5.0,
        trigger: Trigger::When(marginal_food_role),
    },
];

pub fn score_cultural(crop: &CropProfile) -> DimensionScore {
    apply_rules(crop, &(), &[], RULES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::test_support::crop;

    #[test]
    fn test_staple_capped() {
        // corn: +10 +5 +15 clamps to 100
        let result = score_cultural(&crop("corn"));
        assert_eq!(result.score, 100.0);
        assert_eq!(result.adjustments.len(), 3);
    }

    #[test]
    fn test_cash_crops() {
        // sugarcane: limited (-20), medium acceptance, basic (-5)
        assert_eq!(score_cultural(&crop("sugarcane")).score, 75.0);
        // soybean: limited (-20), medium, important
        assert_eq!(score_cultural(&crop("soybean")).score, 80.0);
    }
}
