//! Dimension scorers
//!
//! Each dimension is an ordered list of rules. A rule carries a predicate over
//! (crop, context), a signed point adjustment and a reason. Scoring starts at
//! 100, applies every rule that fires, and clamps to [0, 100].
//!
//! Gate rules are checked before the ordinary rules: the first gate that fires
//! sets the score to 0 and no other rule is evaluated.

pub mod climate;
pub mod soil;
pub mod water;
pub mod economic;
pub mod risk;
pub mod sustainability;
pub mod cultural;

pub use climate::score_climate;
pub use soil::score_soil;
pub use water::score_water;
pub use economic::score_economic;
pub use risk::score_risk;
pub use sustainability::score_sustainability;
pub use cultural::score_cultural;

use crate::data::CropProfile;
use serde::{Deserialize, Serialize};

pub const BASELINE_SCORE: f64 = 100.0;

/// How a rule fires
pub enum Trigger<C> {
    /// Fires once when the predicate holds
    When(fn(&CropProfile, &C) -> bool),
    /// Fires once per counted match
    PerMatch(fn(&CropProfile, &C) -> usize),
}

/// One entry of a dimension's rule list
pub struct ScoreRule<C> {
    /// Stable identifier, e.g. "climate.temperature_out_of_range"
    pub code: &'static str,
    pub reason: &'static str,
    /// Negative for penalties, positive for bonuses
    pub points: f64,
    pub trigger: Trigger<C>,
}

impl<C> ScoreRule<C> {
    /// Points contributed by this rule, `None` when it does not fire
    pub fn evaluate(&self, crop: &CropProfile, ctx: &C) -> Option<f64> {
        match self.trigger {
            Trigger::When(pred) => pred(crop, ctx).then_some(self.points),
            Trigger::PerMatch(count) => {
                let n = count(crop, ctx);
                (n > 0).then(|| self.points * n as f64)
            }
        }
    }
}

/// A rule that fired, kept for explanation output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub code: String,
    pub reason: String,
    pub points: f64,
}

/// Score of one dimension plus the rules that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub score: f64,
    pub adjustments: Vec<Adjustment>,
    /// Set when a gate rule forced the score to 0
    pub gated: bool,
}

/// Evaluate gates, then rules, in order
pub fn apply_rules<C>(
    crop: &CropProfile,
    ctx: &C,
    gates: &[ScoreRule<C>],
    rules: &[ScoreRule<C>],
) -> DimensionScore {
    for gate in gates {
        if gate.evaluate(crop, ctx).is_some() {
            return DimensionScore {
                score: 0.0,
                adjustments: vec![Adjustment {
                    code: gate.code.to_string(),
                    reason: gate.reason.to_string(),
                    points: -BASELINE_SCORE,
                }],
                gated: true,
            };
        }
    }

    let mut score = BASELINE_SCORE;
    let mut adjustments = Vec::new();
    for rule in rules {
        if let Some(points) = rule.evaluate(crop, ctx) {
            score += points;
            adjustments.push(Adjustment {
                code: rule.code.to_string(),
                reason: rule.reason.to_string(),
                points,
            });
        }
    }

    DimensionScore {
        score: score.clamp(0.0, BASELINE_SCORE),
        adjustments,
        gated: false,
    }
}

/// All nine dimension scores of one crop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub climate: f64,
    pub soil: f64,
    pub water: f64,
    pub economic: f64,
    pub risk: f64,
    pub sustainability: f64,
    pub cultural: f64,
    pub timing: f64,
    pub phenology: f64,
}

impl DimensionScores {
    /// Same order as `ScoringWeights::as_array`
    pub fn as_array(&self) -> [f64; 9] {
        [
            self.climate,
            self.soil,
            self.water,
            self.economic,
            self.risk,
            self.sustainability,
            self.cultural,
            self.timing,
            self.phenology,
        ]
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::data::{KnowledgeBase, StaticKnowledgeBase, CropProfile};

    pub fn crop(id: &str) -> CropProfile {
        StaticKnowledgeBase::builtin().crop(id).unwrap().clone()
    }
}
