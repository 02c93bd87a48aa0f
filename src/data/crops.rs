//! Crop profile schema
//!
//! Every categorical attribute is a closed vocabulary enum. Ordered tiers
//! derive `Ord` so scorers can compare "actual below required" directly.

use serde::{Deserialize, Serialize};

// ============================================================================
// Closed vocabularies
// ============================================================================

/// Growing season a crop is planted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropSeason {
    Rainy,
    Dry,
    AllYear,
}

impl CropSeason {
    pub fn display_text(&self) -> &'static str {
        match self {
            CropSeason::Rainy => "Rainy season",
            CropSeason::Dry => "Dry season",
            CropSeason::AllYear => "All year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropCategory {
    Cereal,
    Legume,
    Vegetable,
    Fruit,
    Industrial,
    Tuber,
    Oilseed,
}

/// Generic low/medium/high tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn display_text(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrostTolerance {
    None,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilTexture {
    Sandy,
    Loam,
    Clay,
}

impl SoilTexture {
    pub fn display_text(&self) -> &'static str {
        match self {
            SoilTexture::Sandy => "sandy",
            SoilTexture::Loam => "loam",
            SoilTexture::Clay => "clay",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrainageRequirement {
    Good,
    Moderate,
    WaterloggingTolerant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilDepth {
    Shallow,
    Medium,
    Deep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationDependency {
    Essential,
    Recommended,
    Optional,
    Unnecessary,
}

impl IrrigationDependency {
    pub fn display_text(&self) -> &'static str {
        match self {
            IrrigationDependency::Essential => "essential",
            IrrigationDependency::Recommended => "recommended",
            IrrigationDependency::Optional => "optional",
            IrrigationDependency::Unnecessary => "unnecessary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceStability {
    Stable,
    Moderate,
    Volatile,
}

/// Infrastructure tier, used both for crop needs and regional availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfrastructureTier {
    Basic,
    Moderate,
    Advanced,
}

impl InfrastructureTier {
    pub fn display_text(&self) -> &'static str {
        match self {
            InfrastructureTier::Basic => "basic",
            InfrastructureTier::Moderate => "moderate",
            InfrastructureTier::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PesticideUse {
    Minimal,
    Moderate,
    Intensive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilConservation {
    Excellent,
    Good,
    Moderate,
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalKnowledge {
    Wide,
    Moderate,
    Limited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodSecurityRole {
    Basic,
    Important,
    Essential,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoperiodSensitivity {
    None,
    Low,
    Medium,
    High,
}

/// Development stage of the crop cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropStage {
    Germination,
    Vegetative,
    Flowering,
    Fruiting,
    Maturation,
}

impl CropStage {
    pub fn display_text(&self) -> &'static str {
        match self {
            CropStage::Germination => "Germination",
            CropStage::Vegetative => "Vegetative growth",
            CropStage::Flowering => "Flowering",
            CropStage::Fruiting => "Grain/fruit filling",
            CropStage::Maturation => "Maturation",
        }
    }
}

// ============================================================================
// Profile records
// ============================================================================

/// Inclusive numeric range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClimateNeeds {
    /// Annual precipitation, mm/year
    pub precipitation: Range,
    /// Relative humidity, %
    pub humidity: Range,
    pub frost_tolerance: FrostTolerance,
    pub drought_tolerance: Level,
    pub wind_tolerance: Level,
    /// Temperature giving nominal yield, °C
    pub optimal_temperature: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilNeeds {
    pub preferred_textures: Vec<SoilTexture>,
    pub ph: Range,
    pub organic_matter: Level,
    pub drainage: DrainageRequirement,
    pub depth: SoilDepth,
    pub fertility: Level,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterNeeds {
    pub requirement: Level,
    pub irrigation_dependency: IrrigationDependency,
    pub efficiency: Level,
}

/// Per-hectare cost line items, MZN
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostItems {
    pub seed: f64,
    pub fertilizer: f64,
    pub pesticide: f64,
    pub labor: f64,
    pub machinery: f64,
    pub other: f64,
}

impl CostItems {
    pub fn total(&self) -> f64 {
        self.seed + self.fertilizer + self.pesticide + self.labor + self.machinery + self.other
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicProfile {
    pub market_demand: Level,
    pub price_stability: PriceStability,
    pub labor_requirement: Level,
    pub infrastructure_need: InfrastructureTier,
    pub investment_level: Level,
    pub profitability_potential: Level,
    pub costs_per_ha: CostItems,
    /// kg/ha (or units/ha)
    pub average_yield_per_ha: f64,
    /// MZN per kg
    pub price_per_kg: f64,
    /// Fractional price variation
    pub price_variability: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskProfile {
    pub pests: Vec<String>,
    pub diseases: Vec<String>,
    pub climate_vulnerability: Level,
    pub market_risk: Level,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SustainabilityProfile {
    pub environmental_impact: Level,
    pub pesticide_use: PesticideUse,
    pub soil_conservation: SoilConservation,
    /// Crop ids that benefit from following this crop
    pub rotation_partners: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CulturalProfile {
    pub local_knowledge: LocalKnowledge,
    pub acceptance: Level,
    pub food_security: FoodSecurityRole,
}

/// Stage durations in days
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageDurations {
    pub germination: u32,
    pub vegetative: u32,
    pub flowering: u32,
    pub fruiting: u32,
    pub maturation: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhenologyProfile {
    pub stages: StageDurations,
    pub water_stress_stages: Vec<CropStage>,
    pub heat_stress_stages: Vec<CropStage>,
    pub cold_stress_stages: Vec<CropStage>,
    pub photoperiod: PhotoperiodSensitivity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantingWindow {
    /// Calendar month, 1-12
    pub start_month: u32,
    pub end_month: u32,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingProfile {
    pub primary_window: PlantingWindow,
    pub secondary_window: Option<PlantingWindow>,
    pub critical_months: Vec<u32>,
    pub harvest_months: Vec<u32>,
}

/// Static, read-only description of one crop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropProfile {
    pub id: String,
    pub name: String,
    pub category: CropCategory,
    pub icon: String,
    pub season: CropSeason,
    pub growth_period_days: u32,
    /// Viable air temperature, °C
    pub temperature: Range,
    pub climate: ClimateNeeds,
    pub soil: SoilNeeds,
    pub water: WaterNeeds,
    pub economic: EconomicProfile,
    pub risks: RiskProfile,
    pub sustainability: SustainabilityProfile,
    pub cultural: CulturalProfile,
    pub phenology: Option<PhenologyProfile>,
    pub timing: Option<TimingProfile>,
}

impl CropProfile {
    /// Photoperiod-sensitive crops lose timing score under short days
    pub fn is_photoperiod_sensitive(&self) -> bool {
        self.phenology
            .as_ref()
            .map_or(false, |p| p.photoperiod >= PhotoperiodSensitivity::Medium)
    }

    /// Check ranges and numeric fields; returns the first problem found
    pub fn validate(&self) -> Result<(), String> {
        let ranges = [
            ("temperature", &self.temperature),
            ("precipitation", &self.climate.precipitation),
            ("humidity", &self.climate.humidity),
            ("ph", &self.soil.ph),
        ];
        for (label, range) in ranges {
            if !range.is_valid() {
                return Err(format!(
                    "crop '{}': {} range {}-{} is not ordered",
                    self.id, label, range.min, range.max
                ));
            }
        }
        if self.growth_period_days == 0 {
            return Err(format!("crop '{}': growth period must be positive", self.id));
        }
        let econ = &self.economic;
        if econ.average_yield_per_ha < 0.0 || econ.price_per_kg < 0.0 || econ.costs_per_ha.total() < 0.0 {
            return Err(format!("crop '{}': economic figures must be non-negative", self.id));
        }
        if let Some(timing) = &self.timing {
            let months = [timing.primary_window.start_month, timing.primary_window.end_month]
                .into_iter()
                .chain(timing.critical_months.iter().copied())
                .chain(timing.harvest_months.iter().copied());
            for month in months {
                if !(1..=12).contains(&month) {
                    return Err(format!("crop '{}': month {} outside 1-12", self.id, month));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_contains_is_inclusive() {
        let r = Range::new(18.0, 35.0);
        assert!(r.contains(18.0));
        assert!(r.contains(35.0));
        assert!(!r.contains(35.1));
        assert!(!Range::new(5.0, 1.0).is_valid());
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Low < Level::Medium);
        assert!(Level::Medium < Level::High);
        assert!(InfrastructureTier::Basic < InfrastructureTier::Advanced);
    }

    #[test]
    fn test_vocabulary_serde_names() {
        let json = serde_json::to_string(&CropSeason::AllYear).unwrap();
        assert_eq!(json, "\"all_year\"");
        let dep: IrrigationDependency = serde_json::from_str("\"essential\"").unwrap();
        assert_eq!(dep, IrrigationDependency::Essential);
        assert!(serde_json::from_str::<Level>("\"extreme\"").is_err());
    }

    #[test]
    fn test_cost_total() {
        let costs = CostItems {
            seed: 8000.0,
            fertilizer: 25000.0,
            pesticide: 12000.0,
            labor: 15000.0,
            machinery: 8000.0,
            other: 5000.0,
        };
        assert_eq!(costs.total(), 73000.0);
    }
}
