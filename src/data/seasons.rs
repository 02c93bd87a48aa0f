//! Seasonal factor table, one row per calendar month
//!
//! Southern-hemisphere calendar: rains from November to March, dry season
//! from May to September, April and October are transition months.

use serde::{Deserialize, Serialize};

/// Season of the calendar year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonType {
    Rainy,
    Dry,
    Transition,
}

impl SeasonType {
    pub fn display_text(&self) -> &'static str {
        match self {
            SeasonType::Rainy => "Rainy season",
            SeasonType::Dry => "Dry season",
            SeasonType::Transition => "Transition",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalFactor {
    /// 1-12
    pub month: u32,
    pub season: SeasonType,
    /// Expected monthly rainfall, mm
    pub expected_rainfall_mm: f64,
    /// Average air temperature, °C
    pub average_temperature: f64,
    /// Fraction of the labor force available, (0, 1]
    pub labor_availability: f64,
    pub input_price_multiplier: f64,
    pub market_demand_multiplier: f64,
}

impl SeasonalFactor {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=12).contains(&self.month) {
            return Err(format!("seasonal factor month {} outside 1-12", self.month));
        }
        if !(self.labor_availability > 0.0 && self.labor_availability <= 1.0) {
            return Err(format!("month {}: labor availability outside (0, 1]", self.month));
        }
        if !(self.input_price_multiplier > 0.0 && self.market_demand_multiplier > 0.0) {
            return Err(format!("month {}: multipliers must be positive", self.month));
        }
        Ok(())
    }
}

fn month(
    month: u32,
    season: SeasonType,
    rainfall: f64,
    temperature: f64,
    labor: f64,
    input_price: f64,
    demand: f64,
) -> SeasonalFactor {
    SeasonalFactor {
        month,
        season,
        expected_rainfall_mm: rainfall,
        average_temperature: temperature,
        labor_availability: labor,
        input_price_multiplier: input_price,
        market_demand_multiplier: demand,
    }
}

/// January to December
pub fn builtin_seasonal_factors() -> Vec<SeasonalFactor> {
    use SeasonType::*;
    vec![
        month(1, Rainy, 200.0, 28.0, 0.8, 1.2, 1.1),
        month(2, Rainy, 180.0, 28.0, 0.8, 1.2, 1.1),
        month(3, Rainy, 150.0, 27.0, 0.9, 1.1, 1.2),
        month(4, Transition, 80.0, 25.0, 1.0, 1.0, 1.3),
        month(5, Dry, 20.0, 23.0, 1.0, 0.9, 1.4),
        month(6, Dry, 10.0, 21.0, 1.0, 0.9, 1.3),
        month(7, Dry, 5.0, 20.0, 1.0, 0.8, 1.2),
        month(8, Dry, 10.0, 22.0, 1.0, 0.8, 1.1),
        month(9, Dry, 20.0, 25.0, 1.0, 0.9, 1.0),
        month(10, Transition, 60.0, 27.0, 0.9, 1.0, 1.0),
        month(11, Rainy, 120.0, 28.0, 0.8, 1.1, 1.0),
        month(12, Rainy, 160.0, 29.0, 0.7, 1.2, 1.0),
    ]
}
