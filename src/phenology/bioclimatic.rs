//! Bioclimatic indices: degree-days and monthly water balance
//!
//! Both are single-snapshot estimates extrapolated over a 30-day month.
//! Missing readings fall back to 25 °C, 70 % humidity and 0 mm.

use crate::context::WeatherSnapshot;
use crate::data::{CropProfile, Level};
use serde::{Deserialize, Serialize};

/// Development stops below this temperature, °C
pub const BASE_TEMPERATURE: f64 = 10.0;

/// No extra development above this temperature, °C
pub const CEILING_TEMPERATURE: f64 = 30.0;

/// Degree-days a crop needs per day of its growth period
pub const DEGREE_DAYS_PER_GROWTH_DAY: f64 = 8.0;

pub const DAYS_PER_MONTH: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DegreeDays {
    pub accumulated: f64,
    pub required: f64,
    pub deficit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterBalance {
    /// mm per month
    pub supply: f64,
    /// mm per month
    pub demand: f64,
    pub deficit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BioclimaticIndices {
    pub degree_days: DegreeDays,
    pub water_balance: WaterBalance,
    /// 0 = no stress, 1 = maximum stress
    pub stress_index: f64,
}

/// Degree-days accumulated over one month at the observed temperature
pub fn degree_days(crop: &CropProfile, weather: &WeatherSnapshot) -> DegreeDays {
    let t = weather.temperature_or_default();
    let daily = (t - BASE_TEMPERATURE).clamp(0.0, CEILING_TEMPERATURE - BASE_TEMPERATURE);
    let accumulated = daily * DAYS_PER_MONTH;
    let required = f64::from(crop.growth_period_days) * DEGREE_DAYS_PER_GROWTH_DAY;
    DegreeDays {
        accumulated,
        required,
        deficit: (required - accumulated).max(0.0),
    }
}

/// Reference evapotranspiration, mm/day
pub fn reference_et0(temperature: f64, humidity: f64) -> f64 {
    2.0 + 0.1 * (temperature - 20.0) + 0.05 * (100.0 - humidity)
}

/// Crop coefficient by water requirement tier
pub fn crop_coefficient(requirement: Level) -> f64 {
    match requirement {
        Level::High => 1.2,
        Level::Medium => 0.8,
        Level::Low => 0.5,
    }
}

pub fn water_balance(crop: &CropProfile, weather: &WeatherSnapshot) -> WaterBalance {
    let et0 = reference_et0(weather.temperature_or_default(), weather.humidity_or_default());
    let demand = et0 * crop_coefficient(crop.water.requirement) * DAYS_PER_MONTH;
    let supply = weather.precipitation_or_default() * DAYS_PER_MONTH;
    WaterBalance {
        supply,
        demand,
        deficit: (demand - supply).max(0.0),
    }
}
