//! Phase-specific management guidance and phenology insights

use super::season::CurrentSeason;
use super::timing::CriticalPeriod;
use crate::context::WeatherSnapshot;
use crate::data::{CropProfile, CropSeason, IrrigationDependency, SeasonType};
use serde::{Deserialize, Serialize};

/// Management actions by growth phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseGuidance {
    pub pre_planting: Vec<String>,
    pub planting: Vec<String>,
    pub vegetative: Vec<String>,
    pub reproductive: Vec<String>,
    pub harvest: Vec<String>,
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn phase_guidance(crop: &CropProfile, weather: &WeatherSnapshot) -> PhaseGuidance {
    let mut pre_planting = lines(&[
        "Test soil pH and nutrients",
        "Source certified seed",
        "Plan irrigation if needed",
    ]);
    if crop.water.irrigation_dependency == IrrigationDependency::Essential {
        pre_planting.push("Install and test the irrigation system before planting".to_string());
    }

    let first_planting = match crop.season {
        CropSeason::Rainy => "Plant after the first consistent rains",
        CropSeason::Dry => "Pre-irrigate to field capacity before planting",
        CropSeason::AllYear => "Plant when soil moisture is adequate",
    };
    let planting = vec![
        first_planting.to_string(),
        "Use the recommended spacing for the cultivar".to_string(),
        "Apply basal fertilizer according to the soil test".to_string(),
    ];

    let mut vegetative = lines(&[
        "Scout for pests and diseases weekly",
        "Top-dress as needed",
        "Keep weeds under control",
    ]);
    if weather.temperature.map_or(false, |t| t > crop.temperature.max) {
        vegetative.push("Mulch to keep the root zone cool".to_string());
    }

    let reproductive = lines(&[
        "Increase irrigation frequency during flowering",
        "Apply micronutrients if deficiency shows",
        "Protect against pests of the reproductive stage",
    ]);

    let harvest = lines(&[
        "Determine the right harvest point",
        "Plan drying and storage",
        "Arrange immediate sale or storage",
    ]);

    PhaseGuidance { pre_planting, planting, vegetative, reproductive, harvest }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhenologyInsights {
    pub current_suitability: String,
    pub critical_upcoming: Vec<String>,
    pub seasonal_challenges: Vec<String>,
    pub optimization_tips: Vec<String>,
}

pub fn phenology_insights(
    timing_score: f64,
    season: &CurrentSeason,
    next: &CriticalPeriod,
) -> PhenologyInsights {
    let current_suitability = if timing_score >= 80.0 {
        "Ideal time to plant"
    } else if timing_score >= 60.0 {
        "Suitable with extra care"
    } else {
        "Outside the recommended season"
    };

    let seasonal_challenges = match season.season {
        SeasonType::Rainy => lines(&["Excess humidity", "Fungal disease risk", "Waterlogging"]),
        SeasonType::Dry => lines(&["Water deficit", "Heat stress"]),
        SeasonType::Transition => lines(&["Irregular rainfall onset"]),
    };

    PhenologyInsights {
        current_suitability: current_suitability.to_string(),
        critical_upcoming: vec![
            format!("{} in {} days", next.stage.display_text(), next.days_until),
            "Period of peak water demand".to_string(),
        ],
        seasonal_challenges,
        optimization_tips: lines(&[
            "Track the weather closely",
            "Match irrigation to the growth stage",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::test_support::crop;
    use crate::phenology::timing::next_critical_period;

    #[test]
    fn test_guidance_tailored_to_crop() {
        let rice = phase_guidance(&crop("rice"), &WeatherSnapshot::new(25.0, 70.0, 0.0));
        assert_eq!(rice.pre_planting.len(), 4);
        assert_eq!(rice.planting[0], "Plant after the first consistent rains");

        let tomato = phase_guidance(&crop("tomato"), &WeatherSnapshot::new(33.0, 70.0, 0.0));
        assert!(tomato.planting[0].starts_with("Pre-irrigate"));
        assert_eq!(tomato.vegetative.len(), 4);
    }

    #[test]
    fn test_insights() {
        let corn = crop("corn");
        let next = next_critical_period(&corn);
        let rainy = CurrentSeason::from_month(1).unwrap();
        let i = phenology_insights(100.0, &rainy, &next);
        assert_eq!(i.current_suitability, "Ideal time to plant");
        assert_eq!(i.critical_upcoming[0], "Flowering in 52 days");
        assert!(i.seasonal_challenges.contains(&"Waterlogging".to_string()));

        let dry = CurrentSeason::from_month(6).unwrap();
        let i = phenology_insights(60.0, &dry, &next);
        assert_eq!(i.current_suitability, "Suitable with extra care");
        assert_eq!(i.seasonal_challenges, vec!["Water deficit", "Heat stress"]);
    }
}
