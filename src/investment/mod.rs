//! Investment & return calculator
//!
//! Per-hectare crop costs are adjusted by the regional factors, then by the
//! month's seasonal factors, and scaled to the field size. Revenue uses the
//! nominal yield through a multiplicative yield-adjustment chain:
//!
//! ```text
//! yield_adjustment = soil_quality × season_match × weather
//!   season_match = 1.0 in season, 0.95 all-year crops, 0.7 otherwise
//!   weather      = max(0.6, 1 − 0.05 × (|T − T_opt| − 5))  when |T − T_opt| > 5
//! ```
//!
//! Risk and confidence come from the crop's market and climate risk tiers.

pub mod currency;

pub use currency::{format_currency, format_currency_with_unit, CURRENCY_CODE};

use crate::context::WeatherSnapshot;
use crate::data::{
    CostItems, CropProfile, CropSeason, InfrastructureTier, IrrigationDependency, KnowledgeBase,
    Level, RegionalFactor, SeasonType, SeasonalFactor,
};
use crate::error::{validate_hectares, validate_month, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Temperature deviation from the crop optimum tolerated without yield loss, °C
pub const TEMPERATURE_TOLERANCE: f64 = 5.0;

/// Yield lost per degree beyond the tolerance
pub const YIELD_LOSS_PER_DEGREE: f64 = 0.05;

/// Floor of the weather yield factor
pub const MIN_WEATHER_FACTOR: f64 = 0.6;

pub const MIN_CONFIDENCE: f64 = 0.3;
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Expected rainfall below which essential irrigation needs investment, mm
pub const IRRIGATION_RAINFALL_MM: f64 = 50.0;

// ============================================================================
// Types
// ============================================================================

/// Cost items for the whole field, MZN
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub seed: f64,
    pub fertilizer: f64,
    pub pesticide: f64,
    pub labor: f64,
    pub machinery: f64,
    pub other: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.seed + self.fertilizer + self.pesticide + self.labor + self.machinery + self.other
    }

    fn scaled(&self, factor: f64) -> Self {
        Self {
            seed: self.seed * factor,
            fertilizer: self.fertilizer * factor,
            pesticide: self.pesticide * factor,
            labor: self.labor * factor,
            machinery: self.machinery * factor,
            other: self.other * factor,
        }
    }
}

/// Partial replacement of a region's factors
///
/// Fields left `None` keep the table value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionalOverrides {
    pub labor_cost_multiplier: Option<f64>,
    pub transport_cost_multiplier: Option<f64>,
    pub input_availability_multiplier: Option<f64>,
    pub market_access_multiplier: Option<f64>,
    pub soil_quality_index: Option<f64>,
    pub infrastructure: Option<InfrastructureTier>,
}

impl RegionalOverrides {
    pub fn apply(&self, base: &RegionalFactor) -> RegionalFactor {
        let mut region = base.clone();
        if let Some(v) = self.labor_cost_multiplier {
            region.labor_cost_multiplier = v;
        }
        if let Some(v) = self.transport_cost_multiplier {
            region.transport_cost_multiplier = v;
        }
        if let Some(v) = self.input_availability_multiplier {
            region.input_availability_multiplier = v;
        }
        if let Some(v) = self.market_access_multiplier {
            region.market_access_multiplier = v;
        }
        if let Some(v) = self.soil_quality_index {
            region.soil_quality_index = v;
        }
        if let Some(v) = self.infrastructure {
            region.infrastructure = v;
        }
        region
    }
}

/// Financial projection for one crop, region, month and field size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentCalculation {
    pub crop_id: String,
    /// Region actually used (after fallback)
    pub region: String,
    pub month: u32,
    pub hectares: f64,

    pub total_investment: f64,
    pub breakdown: CostBreakdown,
    pub expected_revenue: f64,
    pub expected_profit: f64,
    /// Percent of revenue; 0 when revenue is 0
    pub profit_margin: f64,
    /// Harvests needed to recover the investment; infinite (JSON null) when
    /// nothing is recovered
    #[serde(deserialize_with = "infinite_if_null")]
    pub payback_period: f64,
    pub risk_adjusted_return: f64,
    /// Combined market + climate risk factor
    pub total_risk: f64,
    /// In [0.3, 0.95]
    pub confidence_level: f64,

    pub soil_quality_factor: f64,
    pub season_match_factor: f64,
    pub weather_factor: f64,
    pub yield_adjustment: f64,
    /// Seasonal input-price multiplier applied to inputs
    pub seasonal_adjustment: f64,
    /// Regional input-availability multiplier applied to inputs
    pub regional_adjustment: f64,

    pub recommendations: Vec<String>,
    pub warnings: Vec<String>,
}

fn infinite_if_null<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(d)?.unwrap_or(f64::INFINITY))
}

// ============================================================================
// Factor helpers
// ============================================================================

fn market_risk_factor(level: Level) -> f64 {
    match level {
        Level::High => 0.3,
        Level::Medium => 0.15,
        Level::Low => 0.05,
    }
}

fn climate_risk_factor(level: Level) -> f64 {
    match level {
        Level::High => 0.25,
        Level::Medium => 0.15,
        Level::Low => 0.05,
    }
}

/// Combined market and climate risk of a crop
pub fn total_risk(crop: &CropProfile) -> f64 {
    market_risk_factor(crop.risks.market_risk) + climate_risk_factor(crop.risks.climate_vulnerability)
}

/// Yield factor for planting `crop` in a month of `season`
pub fn season_match_factor(crop_season: CropSeason, season: SeasonType) -> f64 {
    match (crop_season, season) {
        (CropSeason::Rainy, SeasonType::Rainy) | (CropSeason::Dry, SeasonType::Dry) => 1.0,
        (CropSeason::AllYear, _) => 0.95,
        _ => 0.7,
    }
}

/// Yield factor for the observed temperature, 1.0 without a reading
pub fn weather_factor(crop: &CropProfile, weather: Option<&WeatherSnapshot>) -> f64 {
    let Some(t) = weather.and_then(|w| w.temperature) else {
        return 1.0;
    };
    let deviation = (t - crop.climate.optimal_temperature).abs();
    if deviation > TEMPERATURE_TOLERANCE {
        (1.0 - (deviation - TEMPERATURE_TOLERANCE) * YIELD_LOSS_PER_DEGREE).max(MIN_WEATHER_FACTOR)
    } else {
        1.0
    }
}

/// Per-hectare costs after the regional then seasonal adjustment
pub fn adjusted_costs_per_ha(
    costs: &CostItems,
    region: &RegionalFactor,
    seasonal: &SeasonalFactor,
) -> CostBreakdown {
    let inputs = region.input_availability_multiplier * seasonal.input_price_multiplier;
    CostBreakdown {
        seed: costs.seed * inputs,
        fertilizer: costs.fertilizer * inputs,
        pesticide: costs.pesticide * inputs,
        labor: costs.labor * region.labor_cost_multiplier * (1.0 / seasonal.labor_availability),
        machinery: costs.machinery * region.machinery_factor(),
        other: costs.other * region.transport_cost_multiplier,
    }
}

fn season_name(season: CropSeason) -> &'static str {
    match season {
        CropSeason::Rainy => "rainy",
        CropSeason::Dry => "dry",
        CropSeason::AllYear => "all-year",
    }
}

// ============================================================================
// Calculation
// ============================================================================

/// Projection with region and month already resolved
///
/// `hectares` must already be validated.
pub fn project(
    crop: &CropProfile,
    region: &RegionalFactor,
    seasonal: &SeasonalFactor,
    hectares: f64,
    weather: Option<&WeatherSnapshot>,
) -> InvestmentCalculation {
    let per_ha = adjusted_costs_per_ha(&crop.economic.costs_per_ha, region, seasonal);
    let breakdown = per_ha.scaled(hectares);
    let total_investment = per_ha.total() * hectares;

    let soil_quality_factor = region.soil_quality_index;
    let season_match = season_match_factor(crop.season, seasonal.season);
    let weather_adj = weather_factor(crop, weather);
    let yield_adjustment = soil_quality_factor * season_match * weather_adj;

    let adjusted_yield = crop.economic.average_yield_per_ha * yield_adjustment;
    let price = crop.economic.price_per_kg
        * region.market_access_multiplier
        * seasonal.market_demand_multiplier;
    let expected_revenue = adjusted_yield * price * hectares;

    let expected_profit = expected_revenue - total_investment;
    let profit_margin = if expected_revenue != 0.0 {
        expected_profit / expected_revenue * 100.0
    } else {
        0.0
    };
    let recovery = if expected_profit > 0.0 {
        expected_profit
    } else {
        expected_revenue * 0.1
    };
    let payback_period = if recovery > 0.0 {
        total_investment / recovery
    } else {
        f64::INFINITY
    };

    let total_risk = total_risk(crop);
    let risk_adjusted_return = expected_profit * (1.0 - total_risk);
    let confidence_level = (0.8 * yield_adjustment * region.confidence_factor() * (1.0 - total_risk))
        .clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);

    let mut recommendations = Vec::new();
    let mut warnings = Vec::new();

    if yield_adjustment < 0.8 {
        warnings.push("Conditions are not ideal for this crop in the current season and region".to_string());
    }
    if crop.season != CropSeason::AllYear && season_match < 1.0 {
        recommendations.push(format!(
            "Consider planting in the {} season for a better yield",
            season_name(crop.season)
        ));
    }
    if region.infrastructure == InfrastructureTier::Basic
        && crop.economic.infrastructure_need == InfrastructureTier::Advanced
    {
        warnings.push("Limited regional infrastructure may affect the crop".to_string());
    }
    if crop.water.irrigation_dependency == IrrigationDependency::Essential
        && seasonal.expected_rainfall_mm < IRRIGATION_RAINFALL_MM
    {
        recommendations.push("Investing in irrigation is essential this season".to_string());
    }
    if profit_margin > 30.0 {
        recommendations.push("Excellent profitability potential for this crop".to_string());
    } else if profit_margin < 10.0 {
        warnings.push("Low profit margin; consider alternative crops".to_string());
    }

    InvestmentCalculation {
        crop_id: crop.id.clone(),
        region: region.name.clone(),
        month: seasonal.month,
        hectares,
        total_investment,
        breakdown,
        expected_revenue,
        expected_profit,
        profit_margin,
        payback_period,
        risk_adjusted_return,
        total_risk,
        confidence_level,
        soil_quality_factor,
        season_match_factor: season_match,
        weather_factor: weather_adj,
        yield_adjustment,
        seasonal_adjustment: seasonal.input_price_multiplier,
        regional_adjustment: region.input_availability_multiplier,
        recommendations,
        warnings,
    }
}

/// Investment projection for `crop_id` in `region` during `month`
///
/// Unknown regions fall back to the default region. Fails on an unknown
/// crop, non-positive hectares, a month outside 1..=12 or non-finite weather.
pub fn calculate_investment<K: KnowledgeBase + ?Sized>(
    kb: &K,
    crop_id: &str,
    region: &str,
    hectares: f64,
    month: u32,
    weather: Option<&WeatherSnapshot>,
) -> Result<InvestmentCalculation> {
    calculate_investment_with_overrides(
        kb,
        crop_id,
        region,
        hectares,
        month,
        weather,
        &RegionalOverrides::default(),
    )
}

/// `calculate_investment` with caller-supplied regional factors
pub fn calculate_investment_with_overrides<K: KnowledgeBase + ?Sized>(
    kb: &K,
    crop_id: &str,
    region: &str,
    hectares: f64,
    month: u32,
    weather: Option<&WeatherSnapshot>,
    overrides: &RegionalOverrides,
) -> Result<InvestmentCalculation> {
    validate_hectares(hectares)?;
    validate_month(month)?;
    if let Some(w) = weather {
        w.validate()?;
    }
    let crop = kb.crop(crop_id)?;
    let regional = overrides.apply(kb.region_or_default(region)?);
    let seasonal = kb.seasonal_factor(month)?;
    Ok(project(crop, &regional, seasonal, hectares, weather))
}

/// One projection per crop, no weather adjustment
///
/// Fails on the first unknown crop.
pub fn calculate_investments<K, S>(
    kb: &K,
    crop_ids: &[S],
    region: &str,
    hectares: f64,
    month: u32,
) -> Result<Vec<InvestmentCalculation>>
where
    K: KnowledgeBase + ?Sized,
    S: AsRef<str>,
{
    crop_ids
        .iter()
        .map(|id| calculate_investment(kb, id.as_ref(), region, hectares, month, None))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::StaticKnowledgeBase;
    use crate::error::AdvisorError;
    use approx::assert_relative_eq;

    #[test]
    fn test_corn_sofala_january() {
        let kb = StaticKnowledgeBase::builtin();
        let w = WeatherSnapshot::new(25.0, 70.0, 0.0);
        let calc = calculate_investment(&kb, "corn", "Sofala", 1.0, 1, Some(&w)).unwrap();

        assert_relative_eq!(calc.breakdown.seed, 10_560.0, epsilon = 1e-6);
        assert_relative_eq!(calc.breakdown.labor, 18_750.0, epsilon = 1e-6);
        assert_relative_eq!(calc.total_investment, 91_150.0, epsilon = 1e-6);
        assert_relative_eq!(calc.yield_adjustment, 0.9, epsilon = 1e-12);
        assert_eq!(calc.season_match_factor, 1.0);
        assert_relative_eq!(calc.expected_revenue, 145_530.0, epsilon = 1e-6);
        assert_relative_eq!(calc.confidence_level, 0.504, epsilon = 1e-9);
        assert!(calc.recommendations.iter().any(|r| r.starts_with("Excellent")));
        assert!(calc.warnings.is_empty());
    }

    #[test]
    fn test_off_season_penalty_and_advice() {
        let kb = StaticKnowledgeBase::builtin();
        let calc = calculate_investment(&kb, "corn", "Sofala", 1.0, 6, None).unwrap();
        assert_eq!(calc.season_match_factor, 0.7);
        assert_relative_eq!(calc.yield_adjustment, 0.63, epsilon = 1e-12);
        assert!(calc.recommendations.iter().any(|r| r.contains("rainy season")));
        assert!(calc.warnings.iter().any(|w| w.starts_with("Conditions are not ideal")));
    }

    #[test]
    fn test_transition_month_counts_as_off_season() {
        let kb = StaticKnowledgeBase::builtin();
        let calc = calculate_investment(&kb, "corn", "Sofala", 1.0, 10, None).unwrap();
        assert_eq!(calc.season_match_factor, 0.7);
        let cassava = calculate_investment(&kb, "cassava", "Sofala", 1.0, 10, None).unwrap();
        assert_eq!(cassava.season_match_factor, 0.95);
    }

    #[test]
    fn test_weather_factor_floor() {
        let kb = StaticKnowledgeBase::builtin();
        let corn = kb.crop("corn").unwrap();
        assert_eq!(weather_factor(corn, None), 1.0);
        assert_eq!(weather_factor(corn, Some(&WeatherSnapshot::new(29.0, 70.0, 0.0))), 1.0);
        assert_relative_eq!(
            weather_factor(corn, Some(&WeatherSnapshot::new(33.0, 70.0, 0.0))),
            0.85,
            epsilon = 1e-12
        );
        assert_eq!(weather_factor(corn, Some(&WeatherSnapshot::new(50.0, 70.0, 0.0))), 0.6);
    }

    #[test]
    fn test_hectares_scale_linearly() {
        let kb = StaticKnowledgeBase::builtin();
        let one = calculate_investment(&kb, "peanut", "Gaza", 1.0, 12, None).unwrap();
        let five = calculate_investment(&kb, "peanut", "Gaza", 5.0, 12, None).unwrap();
        assert_relative_eq!(five.total_investment, one.total_investment * 5.0, max_relative = 1e-12);
        assert_relative_eq!(five.expected_revenue, one.expected_revenue * 5.0, max_relative = 1e-12);
        assert_relative_eq!(five.profit_margin, one.profit_margin, max_relative = 1e-9);
    }

    #[test]
    fn test_unknown_region_falls_back() {
        let kb = StaticKnowledgeBase::builtin();
        let calc = calculate_investment(&kb, "corn", "Atlantis", 1.0, 1, None).unwrap();
        assert_eq!(calc.region, "Sofala");
    }

    #[test]
    fn test_overrides() {
        let kb = StaticKnowledgeBase::builtin();
        let overrides = RegionalOverrides {
            soil_quality_index: Some(1.0),
            infrastructure: Some(InfrastructureTier::Advanced),
            ..RegionalOverrides::default()
        };
        let calc =
            calculate_investment_with_overrides(&kb, "corn", "Sofala", 1.0, 1, None, &overrides)
                .unwrap();
        assert_eq!(calc.yield_adjustment, 1.0);
        assert_relative_eq!(calc.breakdown.machinery, 9_600.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_bad_input() {
        let kb = StaticKnowledgeBase::builtin();
        assert!(matches!(
            calculate_investment(&kb, "corn", "Sofala", 0.0, 1, None),
            Err(AdvisorError::InvalidInput(_))
        ));
        assert!(matches!(
            calculate_investment(&kb, "corn", "Sofala", 1.0, 13, None),
            Err(AdvisorError::InvalidInput(_))
        ));
        assert!(matches!(
            calculate_investment(&kb, "quinoa", "Sofala", 1.0, 1, None),
            Err(AdvisorError::UnknownCrop(_))
        ));
    }

    #[test]
    fn test_batch_stops_at_unknown_crop() {
        let kb = StaticKnowledgeBase::builtin();
        let ok = calculate_investments(&kb, &["corn", "rice"], "Tete", 2.0, 1).unwrap();
        assert_eq!(ok.len(), 2);
        assert_eq!(ok[1].crop_id, "rice");
        let err = calculate_investments(&kb, &["corn", "quinoa"], "Tete", 2.0, 1).unwrap_err();
        assert_eq!(err, AdvisorError::UnknownCrop("quinoa".to_string()));
    }

    #[test]
    fn test_essential_irrigation_in_dry_month() {
        let kb = StaticKnowledgeBase::builtin();
        let calc = calculate_investment(&kb, "tomato", "Maputo", 1.0, 7, None).unwrap();
        assert!(calc.recommendations.iter().any(|r| r.contains("irrigation")));
    }

    #[test]
    fn test_unrecovered_payback_survives_json() {
        let kb = StaticKnowledgeBase::builtin();
        let mut calc = calculate_investment(&kb, "corn", "Sofala", 1.0, 1, None).unwrap();
        calc.payback_period = f64::INFINITY;
        let json = serde_json::to_string(&calc).unwrap();
        assert!(json.contains("\"payback_period\":null"));
        let back: InvestmentCalculation = serde_json::from_str(&json).unwrap();
        assert!(back.payback_period.is_infinite());
    }
}
