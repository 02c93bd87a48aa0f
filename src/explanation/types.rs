use crate::config::ViabilityLevel;
use crate::data::Level;
use crate::investment::InvestmentCalculation;
use crate::metrics::{Adjustment, DimensionScores};
use crate::phenology::{
    BioclimaticIndices, PhaseGuidance, PhenologyInsights, StressAnalysis, TimingAnalysis,
};
use serde::{Deserialize, Serialize};

/// Complete recommendation for one crop
///
/// Built once per evaluation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub crop_id: String,
    pub crop_name: String,
    pub icon: String,
    /// Weighted score rounded to a whole number, [0, 100]
    pub overall_score: f64,
    pub viability_level: ViabilityLevel,
    pub scores: DimensionScores,
    /// Every rule that fired, in dimension order
    pub adjustments: Vec<Adjustment>,
    pub timing: TimingAnalysis,
    pub phenology_insights: PhenologyInsights,
    pub stress: StressAnalysis,
    pub bioclimatic: BioclimaticIndices,
    pub phase_guidance: PhaseGuidance,
    pub analysis: NarrativeAnalysis,
    pub timeline: Timeline,
    pub economics: EconomicsSummary,
    pub sustainability: SustainabilityNotes,
}

/// Strengths, challenges, requirements and advice in plain text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NarrativeAnalysis {
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub requirements: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub planting_window: String,
    pub critical_periods: Vec<String>,
    pub harvest_period: String,
}

/// Investment figures formatted for display, plus the raw calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicsSummary {
    pub estimated_investment: String,
    pub investment_per_ha: String,
    pub expected_return: String,
    pub expected_profit: String,
    pub profit_margin: String,
    pub payback_period: String,
    pub profitability_risk: Level,
    pub risk_adjusted_return: String,
    pub confidence_level: String,
    pub calculation: InvestmentCalculation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityNotes {
    pub environmental_impact: String,
    pub soil_health: String,
    pub rotation_benefits: Vec<String>,
}
