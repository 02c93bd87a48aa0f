//! Crop Advisor
//!
//! Crop viability and investment recommendations for Mozambique.
//!
//! Each requested crop is scored on seven dimensions plus seasonal timing and
//! phenology, combined with fixed weights into one overall score and a
//! viability tier, and paired with an investment projection:
//! - `data/`: crop catalog, regional and seasonal tables behind `KnowledgeBase`
//! - `context`: weather snapshot and optional field profiles
//! - `metrics/`: dimension scorers as ordered rule lists
//! - `phenology/`: season, planting verdict, degree-days, stress, guidance
//! - `investment/`: cost/revenue/risk projection and currency formatting
//! - `scorer`: `CropAdvisor`, sequential and parallel evaluation
//! - `explanation/`: narrative output and Markdown/JSON formatters
//!
//! The engine is pure: no clock reads, no I/O beyond optional JSON loading,
//! and no shared mutable state.

pub mod error;
pub mod config;
pub mod data;
pub mod context;
pub mod metrics;
pub mod phenology;
pub mod investment;
pub mod scorer;
pub mod explanation;

// Re-export commonly used types
pub use config::{AdvisorConfig, ScoringWeights, ViabilityLevel, ViabilityThresholds};
pub use context::{
    FieldContext, MarketConditions, RiskFactors, SoilAnalysis, WaterAvailability, WeatherSnapshot,
};
pub use data::{CropProfile, KnowledgeBase, RegionalFactor, SeasonalFactor, StaticKnowledgeBase};
pub use error::{AdvisorError, Result};
pub use explanation::{CropRecommendation, JsonFormatter, MarkdownFormatter};
pub use investment::{
    calculate_investments, format_currency, format_currency_with_unit, InvestmentCalculation,
    RegionalOverrides,
};
pub use metrics::{Adjustment, DimensionScore, DimensionScores};
pub use scorer::{CropAdvisor, RecommendationRequest};

use std::sync::OnceLock;

/// Built-in knowledge base, constructed on first use
pub fn builtin_knowledge_base() -> &'static StaticKnowledgeBase {
    static KB: OnceLock<StaticKnowledgeBase> = OnceLock::new();
    KB.get_or_init(StaticKnowledgeBase::builtin)
}

/// Ranked recommendations against the built-in tables and default config
pub fn recommend(request: &RecommendationRequest) -> Result<Vec<CropRecommendation>> {
    CropAdvisor::new(builtin_knowledge_base()).recommend(request)
}

/// Investment projection against the built-in tables
///
/// Unknown regions fall back to Sofala.
pub fn calculate_investment(
    crop_id: &str,
    region: &str,
    hectares: f64,
    month: u32,
    weather: Option<&WeatherSnapshot>,
) -> Result<InvestmentCalculation> {
    investment::calculate_investment(builtin_knowledge_base(), crop_id, region, hectares, month, weather)
}
