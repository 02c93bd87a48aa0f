//! Risk exposure
//!
//! Climate vulnerability and market risk of the crop, plus one penalty per
//! locally reported biological risk that names one of the crop's pests.

use super::{apply_rules, DimensionScore, ScoreRule, Trigger};
use crate::context::RiskFactors;
use crate::data::{CropProfile, Level};

fn climate_high(crop: &CropProfile, _: &RiskFactors) -> bool {
    crop.risks.climate_vulnerability == Level::High
}

fn climate_medium(crop: &CropProfile, _: &RiskFactors) -> bool {
    crop.risks.climate_vulnerability == Level::Medium
}

fn market_high(crop: &CropProfile, _: &RiskFactors) -> bool {
    crop.risks.market_risk == Level::High
}

fn market_medium(crop: &CropProfile, _: &RiskFactors) -> bool {
    crop.risks.market_risk == Level::Medium
}

/// Local biological risks that appear (case-insensitive substring) in a pest name
pub fn matching_pest_risks<'a>(crop: &CropProfile, risks: &'a RiskFactors) -> Vec<&'a str> {
    let pests: Vec<String> = crop.risks.pests.iter().map(|p| p.to_lowercase()).collect();
    risks
        .biological
        .iter()
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .filter(|r| {
            let needle = r.to_lowercase();
            pests.iter().any(|p| p.contains(&needle))
        })
        .collect()
}

fn local_pest_matches(crop: &CropProfile, risks: &RiskFactors) -> usize {
    matching_pest_risks(crop, risks).len()
}

pub static RULES: &[ScoreRule<RiskFactors>] = &[
    ScoreRule {
        code: "risk.climate_high",
        reason: "High climate vulnerability",
        points: -25.0,
        trigger: Trigger::When(climate_high),
    },
    ScoreRule {
        code: "risk.climate_medium",
        reason: "Medium climate vulnerability",
        points: -10.0,
        trigger: Trigger::When(climate_medium),
    },
    ScoreRule {
        code: "risk.market_high",
        reason: "High market risk",
        points: -20.0,
        trigger: Trigger::When(market_high),
    },
    ScoreRule {
        code: "risk.market_medium",
        reason: "Medium market risk",
        points: -10.0,
        trigger: Trigger::When(market_medium),
    },
    ScoreRule {
        code: "risk.local_pests",
        reason: "Known pest of this crop reported locally",
        points: -5.0,
        trigger: Trigger::PerMatch(local_pest_matches),
    },
];

pub fn score_risk(crop: &CropProfile, risks: &RiskFactors) -> DimensionScore {
    apply_rules(crop, risks, &[], RULES)
}
