//! Climate compatibility
//!
//! Temperature, annualised precipitation, humidity and wind against the
//! crop's tolerances. Rules whose reading is absent from the snapshot do not
//! fire.

use super::{apply_rules, DimensionScore, ScoreRule, Trigger};
use crate::context::WeatherSnapshot;
use crate::data::{CropProfile, Level};

/// Wind speed above which low/medium tolerance crops are penalised
pub const HIGH_WIND_SPEED: f64 = 20.0;

/// Margin inside the temperature range treated as marginal, °C
pub const TEMPERATURE_MARGIN: f64 = 2.0;

fn temperature_out_of_range(crop: &CropProfile, w: &WeatherSnapshot) -> bool {
    w.temperature.map_or(false, |t| !crop.temperature.contains(t))
}

fn temperature_near_boundary(crop: &CropProfile, w: &WeatherSnapshot) -> bool {
    w.temperature.map_or(false, |t| {
        crop.temperature.contains(t)
            && (t < crop.temperature.min + TEMPERATURE_MARGIN
                || t > crop.temperature.max - TEMPERATURE_MARGIN)
    })
}

fn annual_precipitation(w: &WeatherSnapshot) -> Option<f64> {
    w.precipitation.map(|p| p * 12.0)
}

fn precipitation_below_range(crop: &CropProfile, w: &WeatherSnapshot) -> bool {
    annual_precipitation(w).map_or(false, |p| p < crop.climate.precipitation.min)
}

fn precipitation_above_range(crop: &CropProfile, w: &WeatherSnapshot) -> bool {
    annual_precipitation(w).map_or(false, |p| p > crop.climate.precipitation.max)
}

fn humidity_out_of_range(crop: &CropProfile, w: &WeatherSnapshot) -> bool {
    w.humidity.map_or(false, |h| !crop.climate.humidity.contains(h))
}

fn high_wind(w: &WeatherSnapshot) -> bool {
    w.wind_speed.map_or(false, |s| s > HIGH_WIND_SPEED)
}

fn wind_low_tolerance(crop: &CropProfile, w: &WeatherSnapshot) -> bool {
    high_wind(w) && crop.climate.wind_tolerance == Level::Low
}

fn wind_medium_tolerance(crop: &CropProfile, w: &WeatherSnapshot) -> bool {
    high_wind(w) && crop.climate.wind_tolerance == Level::Medium
}

pub static RULES: &[ScoreRule<WeatherSnapshot>] = &[
    ScoreRule {
        code: "climate.temperature_out_of_range",
        reason: "Temperature outside the crop's viable range",
        points: -30.0,
        trigger: Trigger::When(temperature_out_of_range),
    },
    ScoreRule {
        code: "climate.temperature_marginal",
        reason: "Temperature close to the limit of the viable range",
        points: -15.0,
        trigger: Trigger::When(temperature_near_boundary),
    },
    ScoreRule {
        code: "climate.precipitation_low",
        reason: "Annualised rainfall below the crop's requirement",
        points: -25.0,
        trigger: Trigger::When(precipitation_below_range),
    },
    ScoreRule {
        code: "climate.precipitation_high",
        reason: "Annualised rainfall above the crop's tolerance",
        points: -15.0,
        trigger: Trigger::When(precipitation_above_range),
    },
    ScoreRule {
        code: "climate.humidity_out_of_range",
        reason: "Humidity outside the crop's range",
        points: -20.0,
        trigger: Trigger::When(humidity_out_of_range),
    },
    ScoreRule {
        code: "climate.wind_low_tolerance",
        reason: "Strong wind and low wind tolerance",
        points: -25.0,
        trigger: Trigger::When(wind_low_tolerance),
    },
    ScoreRule {
        code: "climate.wind_medium_tolerance",
        reason: "Strong wind and medium wind tolerance",
        points: -10.0,
        trigger: Trigger::When(wind_medium_tolerance),
    },
];

pub fn score_climate(crop: &CropProfile, weather: &WeatherSnapshot) -> DimensionScore {
    apply_rules(crop, weather, &[], RULES)
}
