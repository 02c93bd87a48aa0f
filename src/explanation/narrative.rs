//! Narrative analysis and growing timeline

use crate::context::SoilAnalysis;
use crate::data::{
    CropProfile, CropSeason, InfrastructureTier, IrrigationDependency, Level, LocalKnowledge,
    PesticideUse, SoilConservation,
};
use crate::explanation::types::{NarrativeAnalysis, Timeline};
use crate::metrics::DimensionScores;
use crate::phenology::timing::window_text;

fn strengths(crop: &CropProfile, scores: &DimensionScores) -> Vec<String> {
    let mut out = Vec::new();
    if scores.climate >= 80.0 {
        out.push("Well adapted to local climate conditions".to_string());
    }
    if scores.soil >= 80.0 {
        out.push("Soil suits the crop".to_string());
    }
    if scores.economic >= 80.0 {
        out.push("Good economic viability and market demand".to_string());
    }
    if crop.cultural.local_knowledge == LocalKnowledge::Wide {
        out.push("Broad technical know-how available locally".to_string());
    }
    if crop.sustainability.soil_conservation == SoilConservation::Excellent {
        out.push("Helps conserve and improve the soil".to_string());
    }
    if crop.economic.profitability_potential == Level::High {
        out.push("High profitability potential".to_string());
    }
    out
}

fn challenges(crop: &CropProfile, scores: &DimensionScores) -> Vec<String> {
    let mut out = Vec::new();
    if scores.climate < 60.0 {
        out.push("Climate conditions may be limiting".to_string());
    }
    if scores.water < 60.0 {
        out.push("Water needs may require irrigation".to_string());
    }
    if scores.risk < 70.0 {
        out.push("Pests and diseases present in the region".to_string());
    }
    if crop.economic.investment_level == Level::High {
        out.push("Needs a significant initial investment".to_string());
    }
    if crop.economic.labor_requirement == Level::High {
        out.push("Labor intensive".to_string());
    }
    out
}

fn requirements(crop: &CropProfile, soil: &SoilAnalysis) -> Vec<String> {
    let mut out = Vec::new();
    if crop.water.irrigation_dependency == IrrigationDependency::Essential {
        out.push("Irrigation system required".to_string());
    }
    if crop.soil.fertility == Level::High && soil.fertility != Level::High {
        out.push("Fertilization to raise soil fertility".to_string());
    }
    if crop.economic.infrastructure_need == InfrastructureTier::Advanced {
        out.push("Storage and transport infrastructure".to_string());
    }
    if crop.sustainability.pesticide_use == PesticideUse::Intensive {
        out.push("Integrated pest management programme".to_string());
    }
    out
}

fn advice(crop: &CropProfile, overall_score: f64, partner_names: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    let headline = if overall_score >= 80.0 {
        "Highly recommended for the region"
    } else if overall_score >= 60.0 {
        "Viable with proper management"
    } else {
        "Needs special care and close monitoring"
    };
    out.push(headline.to_string());
    if !partner_names.is_empty() {
        out.push(format!("Consider rotation with: {}", partner_names.join(", ")));
    }
    if crop.climate.drought_tolerance == Level::Low {
        out.push("Plan supplementary irrigation".to_string());
    }
    out
}

pub fn analyze(
    crop: &CropProfile,
    scores: &DimensionScores,
    soil: &SoilAnalysis,
    overall_score: f64,
    partner_names: &[String],
) -> NarrativeAnalysis {
    NarrativeAnalysis {
        strengths: strengths(crop, scores),
        challenges: challenges(crop, scores),
        requirements: requirements(crop, soil),
        recommendations: advice(crop, overall_score, partner_names),
    }
}

/// Planting window, critical periods and harvest timing
///
/// Uses the crop's own timing and phenology records when present.
pub fn timeline(crop: &CropProfile) -> Timeline {
    let planting_window = match &crop.timing {
        Some(t) => window_text(t.primary_window.start_month, t.primary_window.end_month),
        None => match crop.season {
            CropSeason::Rainy => "October - December".to_string(),
            CropSeason::Dry => "May - July".to_string(),
            CropSeason::AllYear => "All year".to_string(),
        },
    };

    let critical_periods = match &crop.phenology {
        Some(p) => {
            let mut stages: Vec<_> = p
                .water_stress_stages
                .iter()
                .chain(&p.heat_stress_stages)
                .chain(&p.cold_stress_stages)
                .copied()
                .collect();
            stages.sort_by_key(|s| *s as u8);
            stages.dedup();
            stages.iter().map(|s| s.display_text().to_string()).collect()
        }
        None => vec![
            "Planting".to_string(),
            "Flowering".to_string(),
            "Grain filling".to_string(),
        ],
    };

    Timeline {
        planting_window,
        critical_periods,
        harvest_period: format!("{} days after planting", crop.growth_period_days),
    }
}
