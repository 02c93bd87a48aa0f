//! Context inputs supplied by the caller
//!
//! Weather is always supplied; soil, water, market and risk profiles fall back
//! to fixed defaults when omitted. Defaults are constants, so a call with
//! omitted context is as reproducible as a fully specified one.

use crate::data::crops::{Level, SoilDepth, SoilTexture};
use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Weather
// ============================================================================

/// Point-in-time weather observation from an external provider
///
/// Every reading is optional. Scorers skip rules whose reading is missing;
/// the bioclimatic indices substitute 25 °C, 70 % humidity and 0 mm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Air temperature, °C
    pub temperature: Option<f64>,

    /// Relative humidity, %
    pub humidity: Option<f64>,

    /// Monthly precipitation, mm
    pub precipitation: Option<f64>,

    /// Wind speed, km/h
    pub wind_speed: Option<f64>,

    /// Air pressure, hPa
    pub pressure: Option<f64>,

    /// Region the observation belongs to, if known
    pub region: Option<String>,
}

impl WeatherSnapshot {
    pub fn new(temperature: f64, humidity: f64, precipitation: f64) -> Self {
        Self {
            temperature: Some(temperature),
            humidity: Some(humidity),
            precipitation: Some(precipitation),
            ..Self::default()
        }
    }

    pub fn with_wind_speed(mut self, wind_speed: f64) -> Self {
        self.wind_speed = Some(wind_speed);
        self
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    pub fn temperature_or_default(&self) -> f64 {
        self.temperature.unwrap_or(25.0)
    }

    pub fn humidity_or_default(&self) -> f64 {
        self.humidity.unwrap_or(70.0)
    }

    pub fn precipitation_or_default(&self) -> f64 {
        self.precipitation.unwrap_or(0.0)
    }

    /// Reject NaN and infinite readings
    ///
    /// Finite but implausible readings pass; they produce degenerate scores,
    /// not errors.
    pub fn validate(&self) -> Result<()> {
        let readings = [
            ("temperature", self.temperature),
            ("humidity", self.humidity),
            ("precipitation", self.precipitation),
            ("wind_speed", self.wind_speed),
            ("pressure", self.pressure),
        ];
        for (label, value) in readings {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(AdvisorError::InvalidInput(format!(
                        "weather {} is not a finite number",
                        label
                    )));
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Soil
// ============================================================================

/// Observed drainage of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilDrainage {
    Good,
    Moderate,
    Poor,
}

/// Field soil analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilAnalysis {
    pub texture: SoilTexture,
    pub ph: f64,
    pub organic_matter: Level,
    pub drainage: SoilDrainage,
    pub depth: SoilDepth,
    pub fertility: Level,
}

impl Default for SoilAnalysis {
    /// Loam, pH 6.5, medium fertility, well drained
    fn default() -> Self {
        Self {
            texture: SoilTexture::Loam,
            ph: 6.5,
            organic_matter: Level::Medium,
            drainage: SoilDrainage::Good,
            depth: SoilDepth::Medium,
            fertility: Level::Medium,
        }
    }
}

// ============================================================================
// Water
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterSource {
    Rain,
    River,
    Well,
    Borehole,
    Dam,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterAvailability {
    pub irrigation_access: bool,
    pub sources: Vec<WaterSource>,
    pub irrigation_cost: Level,
    pub reliability: Level,
}

impl Default for WaterAvailability {
    /// Rain-fed, no irrigation
    fn default() -> Self {
        Self {
            irrigation_access: false,
            sources: vec![WaterSource::Rain],
            irrigation_cost: Level::Medium,
            reliability: Level::Medium,
        }
    }
}

impl WaterAvailability {
    /// Irrigated field with river water at medium cost
    pub fn irrigated() -> Self {
        Self {
            irrigation_access: true,
            sources: vec![WaterSource::Rain, WaterSource::River],
            ..Self::default()
        }
    }
}

// ============================================================================
// Market
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalInfrastructure {
    Poor,
    Moderate,
    Good,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaborAvailability {
    Scarce,
    Moderate,
    Abundant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditAccess {
    Difficult,
    Moderate,
    Easy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketConditions {
    pub local_demand: Level,
    pub price_level: Level,
    pub infrastructure: LocalInfrastructure,
    pub labor_availability: LaborAvailability,
    pub credit_access: CreditAccess,
}

impl Default for MarketConditions {
    fn default() -> Self {
        Self {
            local_demand: Level::Medium,
            price_level: Level::Medium,
            infrastructure: LocalInfrastructure::Moderate,
            labor_availability: LaborAvailability::Moderate,
            credit_access: CreditAccess::Moderate,
        }
    }
}

// ============================================================================
// Risks
// ============================================================================

/// Locally reported risks, free-text tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactors {
    pub climatic: Vec<String>,
    /// Matched case-insensitively against crop pest names
    pub biological: Vec<String>,
    pub market: Vec<String>,
    pub financial: Vec<String>,
}

impl Default for RiskFactors {
    fn default() -> Self {
        Self {
            climatic: vec!["drought".to_string(), "excessive_rain".to_string()],
            biological: vec!["common_pests".to_string()],
            market: vec!["price_volatility".to_string()],
            financial: vec!["limited_credit".to_string()],
        }
    }
}

/// Optional context bundle, defaults filled on demand
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldContext {
    pub soil: Option<SoilAnalysis>,
    pub water: Option<WaterAvailability>,
    pub market: Option<MarketConditions>,
    pub risks: Option<RiskFactors>,
}

/// Context with every profile resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedContext {
    pub soil: SoilAnalysis,
    pub water: WaterAvailability,
    pub market: MarketConditions,
    pub risks: RiskFactors,
}

impl FieldContext {
    pub fn resolve(&self) -> ResolvedContext {
        ResolvedContext {
            soil: self.soil.clone().unwrap_or_default(),
            water: self.water.clone().unwrap_or_default(),
            market: self.market.clone().unwrap_or_default(),
            risks: self.risks.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_defaults_for_indices() {
        let w = WeatherSnapshot::default();
        assert_eq!(w.temperature_or_default(), 25.0);
        assert_eq!(w.humidity_or_default(), 70.0);
        assert_eq!(w.precipitation_or_default(), 0.0);
    }

    #[test]
    fn test_weather_validation() {
        assert!(WeatherSnapshot::new(25.0, 70.0, 0.0).validate().is_ok());
        // Implausible but finite is accepted
        assert!(WeatherSnapshot::new(80.0, 140.0, -5.0).validate().is_ok());
        assert!(WeatherSnapshot::new(f64::NAN, 70.0, 0.0).validate().is_err());
        let windy = WeatherSnapshot::new(25.0, 70.0, 0.0).with_wind_speed(f64::INFINITY);
        assert!(windy.validate().is_err());
    }

    #[test]
    fn test_resolve_fills_documented_defaults() {
        let ctx = FieldContext::default().resolve();
        assert_eq!(ctx.soil.texture, SoilTexture::Loam);
        assert_eq!(ctx.soil.ph, 6.5);
        assert_eq!(ctx.soil.fertility, Level::Medium);
        assert!(!ctx.water.irrigation_access);
        assert_eq!(ctx.market.local_demand, Level::Medium);
        assert_eq!(ctx.risks.biological, vec!["common_pests".to_string()]);
    }

    #[test]
    fn test_resolve_keeps_supplied_profiles() {
        let ctx = FieldContext {
            water: Some(WaterAvailability::irrigated()),
            ..FieldContext::default()
        }
        .resolve();
        assert!(ctx.water.irrigation_access);
        assert_eq!(ctx.soil, SoilAnalysis::default());
    }
}
