//! Weather insights across a recommendation set

use crate::context::WeatherSnapshot;
use crate::data::SeasonType;
use crate::explanation::types::CropRecommendation;
use crate::phenology::{CurrentSeason, PlantingVerdict, StressTier};

pub const HOT_TEMPERATURE: f64 = 30.0;
pub const HUMID_PERCENT: f64 = 80.0;

/// General notes for the snapshot and season, then per-crop notes in the
/// order of `recommendations`
pub fn weather_insights(
    weather: &WeatherSnapshot,
    season: &CurrentSeason,
    recommendations: &[CropRecommendation],
) -> Vec<String> {
    let mut out = Vec::new();

    if weather.temperature.map_or(false, |t| t > HOT_TEMPERATURE) {
        out.push("High temperatures: watch irrigation and consider heat-tolerant crops".to_string());
    }
    if weather.humidity.map_or(false, |h| h > HUMID_PERCENT) {
        out.push("High humidity: fungal disease risk is up, scout more often".to_string());
    }

    match season.season {
        SeasonType::Rainy => {
            out.push("Rainy season: the main window for rain-fed crops".to_string());
        }
        SeasonType::Dry => {
            out.push("Dry season: a critical period for irrigation and winter crops".to_string());
            out.push("Plan efficient irrigation for crops in development".to_string());
        }
        SeasonType::Transition => {
            out.push("Transition month: wait for steady rains or irrigate before planting".to_string());
        }
    }

    for rec in recommendations {
        let name = &rec.crop_name;
        let verdict = match rec.timing.planting.verdict {
            PlantingVerdict::Ideal => format!("{}: ideal time to plant", name),
            PlantingVerdict::Adequate => format!("{}: still suitable for planting with extra care", name),
            PlantingVerdict::Late => format!("{}: late planting, expect lower yield", name),
            PlantingVerdict::OffSeason => format!("{}: out of season, wait for the right period", name),
        };
        out.push(verdict);

        if rec.stress.thermal.risk == StressTier::High {
            out.push(format!("{}: heat alert, put protection measures in place", name));
        }
        if rec.stress.water.risk == StressTier::High {
            out.push(format!("{}: critical water deficit, irrigate urgently", name));
        }
        if rec.scores.phenology < 60.0 {
            out.push(format!("{}: conditions unsuitable for optimal development", name));
        }
        for advice in rec.analysis.recommendations.iter().take(2) {
            out.push(format!("{}: {}", name, advice));
        }
    }

    out
}
