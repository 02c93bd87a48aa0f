//! Economic viability against local market conditions

use super::{apply_rules, DimensionScore, ScoreRule, Trigger};
use crate::context::{CreditAccess, LaborAvailability, LocalInfrastructure, MarketConditions};
use crate::data::{CropProfile, InfrastructureTier, Level, PriceStability};

fn demand_below_crop_market(crop: &CropProfile, m: &MarketConditions) -> bool {
    m.local_demand < crop.economic.market_demand
}

fn infrastructure_gap(crop: &CropProfile, m: &MarketConditions) -> bool {
    crop.economic.infrastructure_need == InfrastructureTier::Advanced
        && m.infrastructure != LocalInfrastructure::Good
}

fn labor_shortage(crop: &CropProfile, m: &MarketConditions) -> bool {
    crop.economic.labor_requirement == Level::High && m.labor_availability == LaborAvailability::Scarce
}

fn credit_gap(crop: &CropProfile, m: &MarketConditions) -> bool {
    crop.economic.investment_level == Level::High && m.credit_access == CreditAccess::Difficult
}

fn volatile_prices(crop: &CropProfile, _: &MarketConditions) -> bool {
    crop.economic.price_stability == PriceStability::Volatile
}

pub static RULES: &[ScoreRule<MarketConditions>] = &[
    ScoreRule {
        code: "economic.local_demand",
        reason: "Local demand below the crop's market demand",
        points: -20.0,
        trigger: Trigger::When(demand_below_crop_market),
    },
    ScoreRule {
        code: "economic.infrastructure",
        reason: "Advanced infrastructure needed but local infrastructure is not good",
        points: -30.0,
        trigger: Trigger::When(infrastructure_gap),
    },
    ScoreRule {
        code: "economic.labor",
        reason: "Labor-intensive crop with scarce labor",
        points: -25.0,
        trigger: Trigger::When(labor_shortage),
    },
    ScoreRule {
        code: "economic.credit",
        reason: "High investment with difficult credit access",
        points: -35.0,
        trigger: Trigger::When(credit_gap),
    },
    ScoreRule {
        code: "economic.price_volatility",
        reason: "Volatile prices",
        points: -15.0,
        trigger: Trigger::When(volatile_prices),
    },
];

pub fn score_economic(crop: &CropProfile, market: &MarketConditions) -> DimensionScore {
    apply_rules(crop, market, &[], RULES)
}
