//! Sustainability notes and rotation partners

use crate::data::{CropProfile, KnowledgeBase, Level, SoilConservation};
use crate::explanation::types::SustainabilityNotes;

/// Display names of the crop's rotation partners
///
/// Partners missing from the knowledge base are shown by id.
pub fn partner_names<K: KnowledgeBase + ?Sized>(kb: &K, crop: &CropProfile) -> Vec<String> {
    crop.sustainability
        .rotation_partners
        .iter()
        .map(|id| kb.crop(id).map_or_else(|_| id.clone(), |p| p.name.clone()))
        .collect()
}

pub fn notes(crop: &CropProfile, partner_names: &[String]) -> SustainabilityNotes {
    let environmental_impact = match crop.sustainability.environmental_impact {
        Level::Low => "Low environmental impact",
        Level::Medium | Level::High => "Moderate to high environmental impact",
    };
    let soil_health = match crop.sustainability.soil_conservation {
        SoilConservation::Excellent => "Improves soil health",
        SoilConservation::Poor => "Degrades soil without conservation practices",
        SoilConservation::Good | SoilConservation::Moderate => "Neutral for soil health",
    };
    SustainabilityNotes {
        environmental_impact: environmental_impact.to_string(),
        soil_health: soil_health.to_string(),
        rotation_benefits: partner_names
            .iter()
            .map(|name| format!("Benefits a following crop of {}", name))
            .collect(),
    }
}
