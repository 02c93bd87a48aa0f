//! Phenology & timing analysis
//!
//! - `season`: month to season and day length
//! - `timing`: timing/phenology scores, planting verdict, harvest forecast
//! - `bioclimatic`: degree-days and water balance
//! - `stress`: thermal and water stress tiers
//! - `guidance`: phase-specific actions and insights

pub mod season;
pub mod timing;
pub mod bioclimatic;
pub mod stress;
pub mod guidance;

pub use bioclimatic::{degree_days, water_balance, BioclimaticIndices, DegreeDays, WaterBalance};
pub use guidance::{phase_guidance, phenology_insights, PhaseGuidance, PhenologyInsights};
pub use season::CurrentSeason;
pub use stress::{analyze_stress, StressAnalysis, StressTier};
pub use timing::{
    analyze_timing, planting_recommendation, score_phenology, score_timing, CriticalPeriod,
    HarvestPrediction, MarketTiming, PlantingRecommendation, PlantingVerdict, TimingAnalysis,
    PHENOLOGY_RULES, TIMING_RULES,
};

use crate::context::WeatherSnapshot;
use crate::data::CropProfile;

/// Degree-days, water balance and the stress index for one crop
pub fn bioclimatic_indices(
    crop: &CropProfile,
    weather: &WeatherSnapshot,
    stress: &StressAnalysis,
) -> BioclimaticIndices {
    BioclimaticIndices {
        degree_days: degree_days(crop, weather),
        water_balance: water_balance(crop, weather),
        stress_index: stress.stress_index(),
    }
}
