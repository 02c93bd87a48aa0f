//! Built-in crop catalog for Mozambique
//!
//! Costs are per hectare in MZN, yields in kg/ha, prices in MZN/kg.

use super::crops::*;

fn costs(seed: f64, fertilizer: f64, pesticide: f64, labor: f64, machinery: f64, other: f64) -> CostItems {
    CostItems { seed, fertilizer, pesticide, labor, machinery, other }
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn window(start_month: u32, end_month: u32, description: &str) -> PlantingWindow {
    PlantingWindow { start_month, end_month, description: description.to_string() }
}

/// All built-in crops, in catalog order
pub fn builtin_crops() -> Vec<CropProfile> {
    vec![
        corn(),
        rice(),
        sorghum(),
        common_bean(),
        cowpea(),
        peanut(),
        cassava(),
        sweet_potato(),
        cashew(),
        cotton(),
        soybean(),
        sesame(),
        tomato(),
        onion(),
        cabbage(),
        sugarcane(),
    ]
}

// ============================================================================
// Cereals
// ============================================================================

fn corn() -> CropProfile {
    CropProfile {
        id: "corn".into(),
        name: "Corn".into(),
        category: CropCategory::Cereal,
        icon: "🌽".into(),
        season: CropSeason::Rainy,
        growth_period_days: 120,
        temperature: Range::new(18.0, 35.0),
        climate: ClimateNeeds {
            precipitation: Range::new(500.0, 1200.0),
            humidity: Range::new(50.0, 80.0),
            frost_tolerance: FrostTolerance::Low,
            drought_tolerance: Level::Medium,
            wind_tolerance: Level::Medium,
            optimal_temperature: 25.0,
        },
        soil: SoilNeeds {
            preferred_textures: vec![SoilTexture::Loam, SoilTexture::Clay],
            ph: Range::new(5.5, 7.0),
            organic_matter: Level::Medium,
            drainage: DrainageRequirement::Good,
            depth: SoilDepth::Medium,
            fertility: Level::Medium,
        },
        water: WaterNeeds {
            requirement: Level::Medium,
            irrigation_dependency: IrrigationDependency::Recommended,
            efficiency: Level::Medium,
        },
        economic: EconomicProfile {
            market_demand: Level::High,
            price_stability: PriceStability::Moderate,
            labor_requirement: Level::Medium,
            infrastructure_need: InfrastructureTier::Basic,
            investment_level: Level::Medium,
            profitability_potential: Level::High,
            costs_per_ha: costs(8000.0, 25000.0, 12000.0, 15000.0, 8000.0, 5000.0),
            average_yield_per_ha: 3500.0,
            price_per_kg: 35.0,
            price_variability: 0.25,
        },
        risks: RiskProfile {
            pests: names(&["Maize stalk borer", "Fall armyworm", "Aphids"]),
            diseases: names(&["Northern leaf blight", "Rust", "Maize streak virus"]),
            climate_vulnerability: Level::Medium,
            market_risk: Level::Medium,
        },
        sustainability: SustainabilityProfile {
            environmental_impact: Level::Medium,
            pesticide_use: PesticideUse::Moderate,
            soil_conservation: SoilConservation::Moderate,
            rotation_partners: names(&["common_bean", "peanut", "cassava"]),
        },
        cultural: CulturalProfile {
            local_knowledge: LocalKnowledge::Wide,
            acceptance: Level::High,
            food_security: FoodSecurityRole::Essential,
        },
        phenology: Some(PhenologyProfile {
            stages: StageDurations { germination: 7, vegetative: 45, flowering: 25, fruiting: 35, maturation: 8 },
            water_stress_stages: vec![CropStage::Flowering, CropStage::Fruiting],
            heat_stress_stages: vec![CropStage::Flowering],
            cold_stress_stages: vec![CropStage::Germination, CropStage::Fruiting],
            photoperiod: PhotoperiodSensitivity::Medium,
        }),
        timing: Some(TimingProfile {
            primary_window: window(10, 12, "Onset of the rains"),
            secondary_window: Some(window(1, 2, "Late planting")),
            critical_months: vec![12, 1, 2],
            harvest_months: vec![3, 4, 5],
        }),
    }
}

fn rice() -> CropProfile {
    CropProfile {
        id: "rice".into(),
        name: "Rice".into(),
        category: CropCategory::Cereal,
        icon: "🌾".into(),
        season: CropSeason::Rainy,
        growth_period_days: 130,
        temperature: Range::new(20.0, 35.0),
        climate: ClimateNeeds {
            precipitation: Range::new(800.0, 1800.0),
            humidity: Range::new(70.0, 90.0),
            frost_tolerance: FrostTolerance::None,
            drought_tolerance: Level::Low,
            wind_tolerance: Level::Low,
            optimal_temperature: 28.0,
        },
        soil: SoilNeeds {
            preferred_textures: vec![SoilTexture::Clay],
            ph: Range::new(5.0, 6.5),
            organic_matter: Level::High,
            drainage: DrainageRequirement::WaterloggingTolerant,
            depth: SoilDepth::Medium,
            fertility: Level::High,
        },
        water: WaterNeeds {
            requirement: Level::High,
            irrigation_dependency: IrrigationDependency::Essential,
            efficiency: Level::Low,
        },
        economic: EconomicProfile {
            market_demand: Level::High,
            price_stability: PriceStability::Stable,
            labor_requirement: Level::High,
            infrastructure_need: InfrastructureTier::Advanced,
            investment_level: Level::High,
            profitability_potential: Level::High,
            costs_per_ha: costs(12000.0, 35000.0, 18000.0, 25000.0, 15000.0, 8000.0),
            average_yield_per_ha: 4500.0,
            price_per_kg: 45.0,
            price_variability: 0.15,
        },
        risks: RiskProfile {
            pests: names(&["Stem borer", "Brown planthopper", "Rice weevil"]),
            diseases: names(&["Rice blast", "Sheath blight", "Brown spot"]),
            climate_vulnerability: Level::High,
            market_risk: Level::Low,
        },
        sustainability: SustainabilityProfile {
            environmental_impact: Level::High,
            pesticide_use: PesticideUse::Intensive,
            soil_conservation: SoilConservation::Moderate,
            rotation_partners: names(&["corn", "common_bean"]),
        },
        cultural: CulturalProfile {
            local_knowledge: LocalKnowledge::Moderate,
            acceptance: Level::High,
            food_security: FoodSecurityRole::Essential,
        },
        phenology: Some(PhenologyProfile {
            stages: StageDurations { germination: 10, vegetative: 55, flowering: 20, fruiting: 30, maturation: 15 },
            water_stress_stages: vec![CropStage::Vegetative, CropStage::Flowering],
            heat_stress_stages: vec![CropStage::Flowering],
            cold_stress_stages: vec![CropStage::Germination, CropStage::Flowering],
            photoperiod: PhotoperiodSensitivity::Low,
        }),
        timing: Some(TimingProfile {
            primary_window: window(11, 1, "Flooded fields after the first heavy rains"),
            secondary_window: None,
            critical_months: vec![1, 2],
            harvest_months: vec![4, 5],
        }),
    }
}

fn sorghum() -> CropProfile {
    CropProfile {
        id: "sorghum".into(),
        name: "Sorghum".into(),
        category: CropCategory::Cereal,
        icon: "🌾".into(),
        season: CropSeason::Rainy,
        growth_period_days: 110,
        temperature: Range::new(20.0, 40.0),
        climate: ClimateNeeds {
            precipitation: Range::new(400.0, 900.0),
            humidity: Range::new(40.0, 75.0),
            frost_tolerance: FrostTolerance::Low,
            drought_tolerance: Level::High,
            wind_tolerance: Level::Medium,
            optimal_temperature: 30.0,
        },
        soil: SoilNeeds {
            preferred_textures: vec![SoilTexture::Sandy, SoilTexture::Loam, SoilTexture::Clay],
            ph: Range::new(6.0, 8.5),
            organic_matter: Level::Low,
            drainage: DrainageRequirement::Moderate,
            depth: SoilDepth::Medium,
            fertility: Level::Low,
        },
        water: WaterNeeds {
            requirement: Level::Low,
            irrigation_dependency: IrrigationDependency::Optional,
            efficiency: Level::High,
        },
        economic: EconomicProfile {
            market_demand: Level::Medium,
            price_stability: PriceStability::Moderate,
            labor_requirement: Level::Low,
            infrastructure_need: InfrastructureTier::Basic,
            investment_level: Level::Low,
            profitability_potential: Level::Medium,
            costs_per_ha: costs(6000.0, 15000.0, 8000.0, 10000.0, 5000.0, 3000.0),
            average_yield_per_ha: 2500.0,
            price_per_kg: 30.0,
            price_variability: 0.30,
        },
        risks: RiskProfile {
            pests: names(&["Stem borer", "Aphids", "Grasshoppers"]),
            diseases: names(&["Anthracnose", "Grain mould"]),
            climate_vulnerability: Level::Low,
            market_risk: Level::High,
        },
        sustainability: SustainabilityProfile {
            environmental_impact: Level::Low,
            pesticide_use: PesticideUse::Minimal,
            soil_conservation: SoilConservation::Good,
            rotation_partners: names(&["cowpea", "peanut"]),
        },
        cultural: CulturalProfile {
            local_knowledge: LocalKnowledge::Wide,
            acceptance: Level::Medium,
            food_security: FoodSecurityRole::Important,
        },
        phenology: None,
        timing: None,
    }
}

// ============================================================================
// Legumes and oilseeds
// ============================================================================

fn common_bean() -> CropProfile {
    CropProfile {
        id: "common_bean".into(),
        name: "Common bean".into(),
        category: CropCategory::Legume,
        icon: "🫘".into(),
        season: CropSeason::Rainy,
        growth_period_days: 90,
        temperature: Range::new(15.0, 30.0),
        climate: ClimateNeeds {
            precipitation: Range::new(400.0, 800.0),
            humidity: Range::new(60.0, 80.0),
            frost_tolerance: FrostTolerance::Low,
            drought_tolerance: Level::Medium,
            wind_tolerance: Level::Medium,
            optimal_temperature: 22.0,
        },
        soil: SoilNeeds {
            preferred_textures: vec![SoilTexture::Loam, SoilTexture::Sandy],
            ph: Range::new(6.0, 7.5),
            organic_matter: Level::Medium,
            drainage: DrainageRequirement::Good,
            depth: SoilDepth::Medium,
            fertility: Level::Medium,
        },
        water: WaterNeeds {
            requirement: Level::Medium,
            irrigation_dependency: IrrigationDependency::Optional,
            efficiency: Level::High,
        },
        economic: EconomicProfile {
            market_demand: Level::High,
            price_stability: PriceStability::Moderate,
            labor_requirement: Level::Medium,
            infrastructure_need: InfrastructureTier::Basic,
            investment_level: Level::Medium,
            profitability_potential: Level::High,
            costs_per_ha: costs(15000.0, 20000.0, 15000.0, 18000.0, 6000.0, 4000.0),
            average_yield_per_ha: 1500.0,
            price_per_kg: 80.0,
            price_variability: 0.35,
        },
        risks: RiskProfile {
            pests: names(&["Whitefly", "Thrips", "Bean leaf beetle"]),
            diseases: names(&["Anthracnose", "Rust", "Golden mosaic"]),
            climate_vulnerability: Level::Medium,
            market_risk: Level::Medium,
        },
        sustainability: SustainabilityProfile {
            environmental_impact: Level::Low,
            pesticide_use: PesticideUse::Moderate,
            soil_conservation: SoilConservation::Excellent,
            rotation_partners: names(&["corn", "cassava", "cotton"]),
        },
        cultural: CulturalProfile {
            local_knowledge: LocalKnowledge::Wide,
            acceptance: Level::High,
            food_security: FoodSecurityRole::Essential,
        },
        phenology: Some(PhenologyProfile {
            stages: StageDurations { germination: 6, vegetative: 30, flowering: 15, fruiting: 30, maturation: 9 },
            water_stress_stages: vec![CropStage::Flowering],
            heat_stress_stages: vec![CropStage::Flowering],
            cold_stress_stages: vec![CropStage::Germination],
            photoperiod: PhotoperiodSensitivity::Medium,
        }),
        timing: Some(TimingProfile {
            primary_window: window(11, 1, "Main rains"),
            secondary_window: Some(window(3, 4, "Second season on residual moisture")),
            critical_months: vec![1],
            harvest_months: vec![2, 3],
        }),
    }
}

fn cowpea() -> CropProfile {
    CropProfile {
        id: "cowpea".into(),
        name: "Cowpea".into(),
        category: CropCategory::Legume,
        icon: "🫛".into(),
        season: CropSeason::Rainy,
        growth_period_days: 75,
        temperature: Range::new(20.0, 35.0),
        climate: ClimateNeeds {
            precipitation: Range::new(300.0, 900.0),
            humidity: Range::new(40.0, 80.0),
            frost_tolerance: FrostTolerance::None,
            drought_tolerance: Level::High,
            wind_tolerance: Level::Medium,
            optimal_temperature: 28.0,
        },
        soil: SoilNeeds {
            preferred_textures: vec![SoilTexture::Sandy, SoilTexture::Loam],
            ph: Range::new(5.5, 7.5),
            organic_matter: Level::Low,
            drainage: DrainageRequirement::Good,
            depth: SoilDepth::Shallow,
            fertility: Level::Low,
        },
        water: WaterNeeds {
            requirement: Level::Low,
            irrigation_dependency: IrrigationDependency::Unnecessary,
            efficiency: Level::High,
        },
        economic: EconomicProfile {
            market_demand: Level::High,
            price_stability: PriceStability::Stable,
            labor_requirement: Level::Low,
            infrastructure_need: InfrastructureTier::Basic,
            investment_level: Level::Low,
            profitability_potential: Level::Medium,
            costs_per_ha: costs(8000.0, 10000.0, 8000.0, 12000.0, 3000.0, 2000.0),
            average_yield_per_ha: 1200.0,
            price_per_kg: 60.0,
            price_variability: 0.20,
        },
        risks: RiskProfile {
            pests: names(&["Aphids", "Thrips", "Pod borer"]),
            diseases: names(&["Cowpea mosaic", "Bacterial blight"]),
            climate_vulnerability: Level::Low,
            market_risk: Level::Low,
        },
        sustainability: SustainabilityProfile {
            environmental_impact: Level::Low,
            pesticide_use: PesticideUse::Minimal,
            soil_conservation: SoilConservation::Excellent,
            rotation_partners: names(&["corn", "sorghum", "cassava"]),
        },
        cultural: CulturalProfile {
            local_knowledge: LocalKnowledge::Wide,
            acceptance: Level::High,
            food_security: FoodSecurityRole::Essential,
        },
        phenology: None,
        timing: None,
    }
}

fn peanut() -> CropProfile {
    CropProfile {
        id: "peanut".into(),
        name: "Peanut".into(),
        category: CropCategory::Legume,
        icon: "🥜".into(),
        season: CropSeason::Rainy,
        growth_period_days: 120,
        temperature: Range::new(20.0, 34.0),
        climate: ClimateNeeds {
            precipitation: Range::new(500.0, 900.0),
            humidity: Range::new(50.0, 70.0),
            frost_tolerance: FrostTolerance::Low,
            drought_tolerance: Level::Medium,
            wind_tolerance: Level::Medium,
            optimal_temperature: 27.0,
        },
        soil: SoilNeeds {
            preferred_textures: vec![SoilTexture::Sandy, SoilTexture::Loam],
            ph: Range::new(6.0, 7.0),
            organic_matter: Level::Medium,
            drainage: DrainageRequirement::Good,
            depth: SoilDepth::Medium,
            fertility: Level::Medium,
        },
        water: WaterNeeds {
            requirement: Level::Medium,
            irrigation_dependency: IrrigationDependency::Unnecessary,
            efficiency: Level::High,
        },
        economic: EconomicProfile {
            market_demand: Level::High,
            price_stability: PriceStability::Moderate,
            labor_requirement: Level::Medium,
            infrastructure_need: InfrastructureTier::Basic,
            investment_level: Level::Medium,
            profitability_potential: Level::Medium,
            costs_per_ha: costs(18000.0, 10000.0, 6000.0, 15000.0, 5000.0, 3000.0),
            average_yield_per_ha: 1200.0,
            price_per_kg: 70.0,
            price_variability: 0.25,
        },
        risks: RiskProfile {
            pests: names(&["Aphids", "Termites", "Leaf miner"]),
            diseases: names(&["Early leaf spot", "Rosette virus"]),
            climate_vulnerability: Level::Medium,
            market_risk: Level::Medium,
        },
        sustainability: SustainabilityProfile {
            environmental_impact: Level::Low,
            pesticide_use: PesticideUse::Minimal,
            soil_conservation: SoilConservation::Good,
            rotation_partners: names(&["corn", "cotton", "cassava"]),
        },
        cultural: CulturalProfile {
            local_knowledge: LocalKnowledge::Moderate,
            acceptance: Level::Medium,
            food_security: FoodSecurityRole::Important,
        },
        phenology: Some(PhenologyProfile {
            stages: StageDurations { germination: 8, vegetative: 35, flowering: 25, fruiting: 40, maturation: 12 },
            water_stress_stages: vec![CropStage::Flowering, CropStage::Fruiting],
            heat_stress_stages: vec![CropStage::Flowering],
            cold_stress_stages: vec![CropStage::Germination],
            photoperiod: PhotoperiodSensitivity::Low,
        }),
        timing: None,
    }
}

fn soybean() -> CropProfile {
    CropProfile {
        id: "soybean".into(),
        name: "Soybean".into(),
        category: CropCategory::Oilseed,
        icon: "🌱".into(),
        season: CropSeason::Rainy,
        growth_period_days: 120,
        temperature: Range::new(20.0, 32.0),
        climate: ClimateNeeds {
            precipitation: Range::new(500.0, 1000.0),
            humidity: Range::new(55.0, 80.0),
            frost_tolerance: FrostTolerance::Low,
            drought_tolerance: Level::Medium,
            wind_tolerance: Level::Medium,
            optimal_temperature: 25.0,
        },
        soil: SoilNeeds {
            preferred_textures: vec![SoilTexture::Loam, SoilTexture::Clay],
            ph: Range::new(6.0, 7.0),
            organic_matter: Level::Medium,
            drainage: DrainageRequirement::Good,
            depth: SoilDepth::Medium,
            fertility: Level::Medium,
        },
        water: WaterNeeds {
            requirement: Level::Medium,
            irrigation_dependency: IrrigationDependency::Recommended,
            efficiency: Level::Medium,
        },
        economic: EconomicProfile {
            market_demand: Level::High,
            price_stability: PriceStability::Moderate,
            labor_requirement: Level::Medium,
            infrastructure_need: InfrastructureTier::Moderate,
            investment_level: Level::Medium,
            profitability_potential: Level::High,
            costs_per_ha: costs(18000.0, 20000.0, 15000.0, 12000.0, 15000.0, 5000.0),
            average_yield_per_ha: 2800.0,
            price_per_kg: 55.0,
            price_variability: 0.30,
        },
        risks: RiskProfile {
            pests: names(&["Soybean looper", "Stink bugs", "Whitefly"]),
            diseases: names(&["Soybean rust", "Frogeye leaf spot"]),
            climate_vulnerability: Level::Medium,
            market_risk: Level::Medium,
        },
        sustainability: SustainabilityProfile {
            environmental_impact: Level::Low,
            pesticide_use: PesticideUse::Moderate,
            soil_conservation: SoilConservation::Excellent,
            rotation_partners: names(&["corn", "sorghum"]),
        },
        cultural: CulturalProfile {
            local_knowledge: LocalKnowledge::Limited,
            acceptance: Level::Medium,
            food_security: FoodSecurityRole::Important,
        },
        phenology: Some(PhenologyProfile {
            stages: StageDurations { germination: 7, vegetative: 40, flowering: 25, fruiting: 38, maturation: 10 },
            water_stress_stages: vec![CropStage::Flowering, CropStage::Fruiting],
            heat_stress_stages: vec![CropStage::Flowering],
            cold_stress_stages: vec![CropStage::Germination],
            photoperiod: PhotoperiodSensitivity::High,
        }),
        timing: None,
    }
}

fn sesame() -> CropProfile {
    CropProfile {
        id: "sesame".into(),
        name: "Sesame".into(),
        category: CropCategory::Oilseed,
        icon: "🌿".into(),
        season: CropSeason::Rainy,
        growth_period_days: 95,
        temperature: Range::new(20.0, 38.0),
        climate: ClimateNeeds {
            precipitation: Range::new(300.0, 800.0),
            humidity: Range::new(40.0, 75.0),
            frost_tolerance: FrostTolerance::None,
            drought_tolerance: Level::High,
            wind_tolerance: Level::Low,
            optimal_temperature: 30.0,
        },
        soil: SoilNeeds {
            preferred_textures: vec![SoilTexture::Sandy, SoilTexture::Loam],
            ph: Range::new(6.0, 8.0),
            organic_matter: Level::Low,
            drainage: DrainageRequirement::Good,
            depth: SoilDepth::Medium,
            fertility: Level::Low,
        },
        water: WaterNeeds {
            requirement: Level::Low,
            irrigation_dependency: IrrigationDependency::Unnecessary,
            efficiency: Level::High,
        },
        economic: EconomicProfile {
            market_demand: Level::Medium,
            price_stability: PriceStability::Stable,
            labor_requirement: Level::Medium,
            infrastructure_need: InfrastructureTier::Basic,
            investment_level: Level::Low,
            profitability_potential: Level::High,
            costs_per_ha: costs(8000.0, 12000.0, 8000.0, 15000.0, 6000.0, 3000.0),
            average_yield_per_ha: 800.0,
            price_per_kg: 120.0,
            price_variability: 0.30,
        },
        risks: RiskProfile {
            pests: names(&["Aphids", "Thrips", "Grasshoppers"]),
            diseases: names(&["Phyllody", "Bacterial leaf spot"]),
            climate_vulnerability: Level::Low,
            market_risk: Level::Medium,
        },
        sustainability: SustainabilityProfile {
            environmental_impact: Level::Low,
            pesticide_use: PesticideUse::Minimal,
            soil_conservation: SoilConservation::Excellent,
            rotation_partners: names(&["corn", "cowpea"]),
        },
        cultural: CulturalProfile {
            local_knowledge: LocalKnowledge::Moderate,
            acceptance: Level::Medium,
            food_security: FoodSecurityRole::Basic,
        },
        phenology: None,
        timing: None,
    }
}

// ============================================================================
// Roots and tubers
// ============================================================================

fn cassava() -> CropProfile {
    CropProfile {
        id: "cassava".into(),
        name: "Cassava".into(),
        category: CropCategory::Tuber,
        icon: "🍠".into(),
        season: CropSeason::AllYear,
        growth_period_days: 300,
        temperature: Range::new(20.0, 35.0),
        climate: ClimateNeeds {
            precipitation: Range::new(600.0, 1500.0),
            humidity: Range::new(50.0, 80.0),
            frost_tolerance: FrostTolerance::None,
            drought_tolerance: Level::High,
            wind_tolerance: Level::High,
            optimal_temperature: 27.0,
        },
        soil: SoilNeeds {
            preferred_textures: vec![SoilTexture::Sandy, SoilTexture::Loam],
            ph: Range::new(5.0, 7.0),
            organic_matter: Level::Low,
            drainage: DrainageRequirement::Good,
            depth: SoilDepth::Medium,
            fertility: Level::Low,
        },
        water: WaterNeeds {
            requirement: Level::Low,
            irrigation_dependency: IrrigationDependency::Unnecessary,
            efficiency: Level::High,
        },
        economic: EconomicProfile {
            market_demand: Level::High,
            price_stability: PriceStability::Stable,
            labor_requirement: Level::Medium,
            infrastructure_need: InfrastructureTier::Basic,
            investment_level: Level::Low,
            profitability_potential: Level::Medium,
            costs_per_ha: costs(12000.0, 8000.0, 5000.0, 20000.0, 4000.0, 3000.0),
            average_yield_per_ha: 15000.0,
            price_per_kg: 15.0,
            price_variability: 0.25,
        },
        risks: RiskProfile {
            pests: names(&["Green mite", "Whitefly", "Mealybug"]),
            diseases: names(&["Bacterial blight", "African cassava mosaic"]),
            climate_vulnerability: Level::Low,
            market_risk: Level::Low,
        },
        sustainability: SustainabilityProfile {
            environmental_impact: Level::Low,
            pesticide_use: PesticideUse::Minimal,
            soil_conservation: SoilConservation::Good,
            rotation_partners: names(&["corn", "common_bean", "peanut"]),
        },
        cultural: CulturalProfile {
            local_knowledge: LocalKnowledge::Wide,
            acceptance: Level::High,
            food_security: FoodSecurityRole::Essential,
        },
        phenology: None,
        timing: None,
    }
}

fn sweet_potato() -> CropProfile {
    CropProfile {
        id: "sweet_potato".into(),
        name: "Sweet potato".into(),
        category: CropCategory::Tuber,
        icon: "🍠".into(),
        season: CropSeason::Dry,
        growth_period_days: 120,
        temperature: Range::new(18.0, 30.0),
        climate: ClimateNeeds {
            precipitation: Range::new(750.0, 1000.0),
            humidity: Range::new(60.0, 80.0),
            frost_tolerance: FrostTolerance::Low,
            drought_tolerance: Level::Medium,
            wind_tolerance: Level::Medium,
            optimal_temperature: 24.0,
        },
        soil: SoilNeeds {
            preferred_textures: vec![SoilTexture::Loam, SoilTexture::Sandy],
            ph: Range::new(5.5, 6.8),
            organic_matter: Level::Medium,
            drainage: DrainageRequirement::Good,
            depth: SoilDepth::Medium,
            fertility: Level::Medium,
        },
        water: WaterNeeds {
            requirement: Level::Medium,
            irrigation_dependency: IrrigationDependency::Optional,
            efficiency: Level::High,
        },
        economic: EconomicProfile {
            market_demand: Level::High,
            price_stability: PriceStability::Moderate,
            labor_requirement: Level::Medium,
            infrastructure_need: InfrastructureTier::Basic,
            investment_level: Level::Low,
            profitability_potential: Level::High,
            costs_per_ha: costs(15000.0, 12000.0, 8000.0, 18000.0, 5000.0, 3000.0),
            average_yield_per_ha: 12000.0,
            price_per_kg: 25.0,
            price_variability: 0.30,
        },
        risks: RiskProfile {
            pests: names(&["Sweet potato weevil", "Vine borer", "Caterpillars"]),
            diseases: names(&["Foot rot", "Black rot"]),
            climate_vulnerability: Level::Medium,
            market_risk: Level::Medium,
        },
        sustainability: SustainabilityProfile {
            environmental_impact: Level::Low,
            pesticide_use: PesticideUse::Minimal,
            soil_conservation: SoilConservation::Good,
            rotation_partners: names(&["corn", "common_bean"]),
        },
        cultural: CulturalProfile {
            local_knowledge: LocalKnowledge::Wide,
            acceptance: Level::High,
            food_security: FoodSecurityRole::Important,
        },
        phenology: Some(PhenologyProfile {
            stages: StageDurations { germination: 10, vegetative: 40, flowering: 20, fruiting: 40, maturation: 10 },
            water_stress_stages: vec![CropStage::Vegetative, CropStage::Fruiting],
            heat_stress_stages: vec![CropStage::Fruiting],
            cold_stress_stages: vec![CropStage::Germination],
            photoperiod: PhotoperiodSensitivity::Medium,
        }),
        timing: Some(TimingProfile {
            primary_window: window(4, 6, "Residual moisture after the rains"),
            secondary_window: None,
            critical_months: vec![6, 7],
            harvest_months: vec![8, 9],
        }),
    }
}

// ============================================================================
// Perennials and industrial crops
// ============================================================================

fn cashew() -> CropProfile {
    CropProfile {
        id: "cashew".into(),
        name: "Cashew".into(),
        category: CropCategory::Fruit,
        icon: "🌰".into(),
        season: CropSeason::AllYear,
        growth_period_days: 1095,
        temperature: Range::new(20.0, 35.0),
        climate: ClimateNeeds {
            precipitation: Range::new(600.0, 1200.0),
            humidity: Range::new(60.0, 80.0),
            frost_tolerance: FrostTolerance::Low,
            drought_tolerance: Level::High,
            wind_tolerance: Level::Medium,
            optimal_temperature: 28.0,
        },
        soil: SoilNeeds {
            preferred_textures: vec![SoilTexture::Sandy, SoilTexture::Loam],
            ph: Range::new(5.0, 6.5),
            organic_matter: Level::Low,
            drainage: DrainageRequirement::Good,
            depth: SoilDepth::Deep,
            fertility: Level::Low,
        },
        water: WaterNeeds {
            requirement: Level::Low,
            irrigation_dependency: IrrigationDependency::Optional,
            efficiency: Level::High,
        },
        economic: EconomicProfile {
            market_demand: Level::High,
            price_stability: PriceStability::Stable,
            labor_requirement: Level::Low,
            infrastructure_need: InfrastructureTier::Moderate,
            investment_level: Level::Medium,
            profitability_potential: Level::High,
            costs_per_ha: costs(25000.0, 15000.0, 10000.0, 12000.0, 8000.0, 5000.0),
            average_yield_per_ha: 800.0,
            price_per_kg: 150.0,
            price_variability: 0.20,
        },
        risks: RiskProfile {
            pests: names(&["Nut borer moth", "Fruit fly", "Ants"]),
            diseases: names(&["Gummosis", "Powdery mildew"]),
            climate_vulnerability: Level::Low,
            market_risk: Level::Low,
        },
        sustainability: SustainabilityProfile {
            environmental_impact: Level::Low,
            pesticide_use: PesticideUse::Minimal,
            soil_conservation: SoilConservation::Excellent,
            rotation_partners: names(&["peanut", "cassava"]),
        },
        cultural: CulturalProfile {
            local_knowledge: LocalKnowledge::Wide,
            acceptance: Level::High,
            food_security: FoodSecurityRole::Important,
        },
        phenology: None,
        timing: None,
    }
}

fn cotton() -> CropProfile {
    CropProfile {
        id: "cotton".into(),
        name: "Cotton".into(),
        category: CropCategory::Industrial,
        icon: "🌼".into(),
        season: CropSeason::Rainy,
        growth_period_days: 150,
        temperature: Range::new(20.0, 35.0),
        climate: ClimateNeeds {
            precipitation: Range::new(500.0, 1200.0),
            humidity: Range::new(50.0, 75.0),
            frost_tolerance: FrostTolerance::Low,
            drought_tolerance: Level::Medium,
            wind_tolerance: Level::Low,
            optimal_temperature: 28.0,
        },
        soil: SoilNeeds {
            preferred_textures: vec![SoilTexture::Loam, SoilTexture::Clay],
            ph: Range::new(5.8, 8.0),
            organic_matter: Level::Medium,
            drainage: DrainageRequirement::Good,
            depth: SoilDepth::Medium,
            fertility: Level::High,
        },
        water: WaterNeeds {
            requirement: Level::Medium,
            irrigation_dependency: IrrigationDependency::Recommended,
            efficiency: Level::Medium,
        },
        economic: EconomicProfile {
            market_demand: Level::High,
            price_stability: PriceStability::Volatile,
            labor_requirement: Level::High,
            infrastructure_need: InfrastructureTier::Advanced,
            investment_level: Level::High,
            profitability_potential: Level::High,
            costs_per_ha: costs(8000.0, 40000.0, 35000.0, 30000.0, 20000.0, 8000.0),
            average_yield_per_ha: 1800.0,
            price_per_kg: 80.0,
            price_variability: 0.40,
        },
        risks: RiskProfile {
            pests: names(&["Pink bollworm", "Cotton leafworm", "Stink bugs"]),
            diseases: names(&["Fusarium wilt", "Ramulosis"]),
            climate_vulnerability: Level::High,
            market_risk: Level::High,
        },
        sustainability: SustainabilityProfile {
            environmental_impact: Level::High,
            pesticide_use: PesticideUse::Intensive,
            soil_conservation: SoilConservation::Moderate,
            rotation_partners: names(&["corn", "common_bean", "peanut"]),
        },
        cultural: CulturalProfile {
            local_knowledge: LocalKnowledge::Moderate,
            acceptance: Level::Medium,
            food_security: FoodSecurityRole::Basic,
        },
        phenology: Some(PhenologyProfile {
            stages: StageDurations { germination: 8, vegetative: 50, flowering: 35, fruiting: 45, maturation: 12 },
            water_stress_stages: vec![CropStage::Flowering, CropStage::Fruiting],
            heat_stress_stages: vec![CropStage::Flowering],
            cold_stress_stages: vec![CropStage::Germination],
            photoperiod: PhotoperiodSensitivity::Medium,
        }),
        timing: Some(TimingProfile {
            primary_window: window(11, 12, "Established rains"),
            secondary_window: None,
            critical_months: vec![1, 2, 3],
            harvest_months: vec![4, 5, 6],
        }),
    }
}

fn sugarcane() -> CropProfile {
    CropProfile {
        id: "sugarcane".into(),
        name: "Sugarcane".into(),
        category: CropCategory::Industrial,
        icon: "🎋".into(),
        season: CropSeason::AllYear,
        growth_period_days: 365,
        temperature: Range::new(20.0, 35.0),
        climate: ClimateNeeds {
            precipitation: Range::new(1000.0, 1800.0),
            humidity: Range::new(70.0, 85.0),
            frost_tolerance: FrostTolerance::Low,
            drought_tolerance: Level::Low,
            wind_tolerance: Level::Low,
            optimal_temperature: 28.0,
        },
        soil: SoilNeeds {
            preferred_textures: vec![SoilTexture::Loam, SoilTexture::Clay],
            ph: Range::new(6.0, 7.5),
            organic_matter: Level::High,
            drainage: DrainageRequirement::Moderate,
            depth: SoilDepth::Deep,
            fertility: Level::High,
        },
        water: WaterNeeds {
            requirement: Level::High,
            irrigation_dependency: IrrigationDependency::Essential,
            efficiency: Level::Low,
        },
        economic: EconomicProfile {
            market_demand: Level::High,
            price_stability: PriceStability::Stable,
            labor_requirement: Level::High,
            infrastructure_need: InfrastructureTier::Advanced,
            investment_level: Level::High,
            profitability_potential: Level::High,
            costs_per_ha: costs(25000.0, 60000.0, 30000.0, 80000.0, 50000.0, 15000.0),
            average_yield_per_ha: 80000.0,
            price_per_kg: 4.0,
            price_variability: 0.15,
        },
        risks: RiskProfile {
            pests: names(&["Sugarcane borer", "Termites", "Spittlebug"]),
            diseases: names(&["Rust", "Smut", "Ratoon stunting"]),
            climate_vulnerability: Level::Low,
            market_risk: Level::Low,
        },
        sustainability: SustainabilityProfile {
            environmental_impact: Level::Medium,
            pesticide_use: PesticideUse::Moderate,
            soil_conservation: SoilConservation::Moderate,
            rotation_partners: names(&["corn", "common_bean"]),
        },
        cultural: CulturalProfile {
            local_knowledge: LocalKnowledge::Limited,
            acceptance: Level::Medium,
            food_security: FoodSecurityRole::Basic,
        },
        phenology: None,
        timing: None,
    }
}

// ============================================================================
// Vegetables
// ============================================================================

fn tomato() -> CropProfile {
    CropProfile {
        id: "tomato".into(),
        name: "Tomato".into(),
        category: CropCategory::Vegetable,
        icon: "🍅".into(),
        season: CropSeason::Dry,
        growth_period_days: 110,
        temperature: Range::new(18.0, 30.0),
        climate: ClimateNeeds {
            precipitation: Range::new(600.0, 1000.0),
            humidity: Range::new(60.0, 75.0),
            frost_tolerance: FrostTolerance::None,
            drought_tolerance: Level::Low,
            wind_tolerance: Level::Low,
            optimal_temperature: 24.0,
        },
        soil: SoilNeeds {
            preferred_textures: vec![SoilTexture::Loam],
            ph: Range::new(6.0, 7.0),
            organic_matter: Level::High,
            drainage: DrainageRequirement::Good,
            depth: SoilDepth::Medium,
            fertility: Level::High,
        },
        water: WaterNeeds {
            requirement: Level::High,
            irrigation_dependency: IrrigationDependency::Essential,
            efficiency: Level::Medium,
        },
        economic: EconomicProfile {
            market_demand: Level::High,
            price_stability: PriceStability::Volatile,
            labor_requirement: Level::High,
            infrastructure_need: InfrastructureTier::Moderate,
            investment_level: Level::High,
            profitability_potential: Level::High,
            costs_per_ha: costs(25000.0, 45000.0, 35000.0, 60000.0, 15000.0, 10000.0),
            average_yield_per_ha: 35000.0,
            price_per_kg: 8.0,
            price_variability: 0.40,
        },
        risks: RiskProfile {
            pests: names(&["Whitefly", "Aphids", "Tomato leafminer"]),
            diseases: names(&["Late blight", "Early blight", "Spotted wilt"]),
            climate_vulnerability: Level::High,
            market_risk: Level::High,
        },
        sustainability: SustainabilityProfile {
            environmental_impact: Level::Medium,
            pesticide_use: PesticideUse::Intensive,
            soil_conservation: SoilConservation::Moderate,
            rotation_partners: names(&["corn", "common_bean"]),
        },
        cultural: CulturalProfile {
            local_knowledge: LocalKnowledge::Limited,
            acceptance: Level::High,
            food_security: FoodSecurityRole::Important,
        },
        phenology: Some(PhenologyProfile {
            stages: StageDurations { germination: 8, vegetative: 35, flowering: 20, fruiting: 40, maturation: 7 },
            water_stress_stages: vec![CropStage::Flowering, CropStage::Fruiting],
            heat_stress_stages: vec![CropStage::Flowering, CropStage::Fruiting],
            cold_stress_stages: vec![CropStage::Germination],
            photoperiod: PhotoperiodSensitivity::None,
        }),
        timing: Some(TimingProfile {
            primary_window: window(4, 6, "Cool dry season under irrigation"),
            secondary_window: None,
            critical_months: vec![6, 7],
            harvest_months: vec![7, 8, 9],
        }),
    }
}

fn onion() -> CropProfile {
    CropProfile {
        id: "onion".into(),
        name: "Onion".into(),
        category: CropCategory::Vegetable,
        icon: "🧅".into(),
        season: CropSeason::Dry,
        growth_period_days: 120,
        temperature: Range::new(15.0, 28.0),
        climate: ClimateNeeds {
            precipitation: Range::new(350.0, 750.0),
            humidity: Range::new(50.0, 75.0),
            frost_tolerance: FrostTolerance::Medium,
            drought_tolerance: Level::Low,
            wind_tolerance: Level::Medium,
            optimal_temperature: 22.0,
        },
        soil: SoilNeeds {
            preferred_textures: vec![SoilTexture::Loam, SoilTexture::Sandy],
            ph: Range::new(6.0, 7.5),
            organic_matter: Level::High,
            drainage: DrainageRequirement::Good,
            depth: SoilDepth::Shallow,
            fertility: Level::High,
        },
        water: WaterNeeds {
            requirement: Level::Medium,
            irrigation_dependency: IrrigationDependency::Essential,
            efficiency: Level::Medium,
        },
        economic: EconomicProfile {
            market_demand: Level::High,
            price_stability: PriceStability::Moderate,
            labor_requirement: Level::High,
            infrastructure_need: InfrastructureTier::Moderate,
            investment_level: Level::Medium,
            profitability_potential: Level::High,
            costs_per_ha: costs(30000.0, 40000.0, 20000.0, 50000.0, 10000.0, 8000.0),
            average_yield_per_ha: 25000.0,
            price_per_kg: 12.0,
            price_variability: 0.35,
        },
        risks: RiskProfile {
            pests: names(&["Onion thrips", "Leafminer", "Mites"]),
            diseases: names(&["Purple blotch", "Downy mildew"]),
            climate_vulnerability: Level::Medium,
            market_risk: Level::Medium,
        },
        sustainability: SustainabilityProfile {
            environmental_impact: Level::Medium,
            pesticide_use: PesticideUse::Moderate,
            soil_conservation: SoilConservation::Moderate,
            rotation_partners: names(&["tomato", "common_bean"]),
        },
        cultural: CulturalProfile {
            local_knowledge: LocalKnowledge::Moderate,
            acceptance: Level::High,
            food_security: FoodSecurityRole::Important,
        },
        phenology: None,
        timing: None,
    }
}

fn cabbage() -> CropProfile {
    CropProfile {
        id: "cabbage".into(),
        name: "Cabbage".into(),
        category: CropCategory::Vegetable,
        icon: "🥬".into(),
        season: CropSeason::Dry,
        growth_period_days: 90,
        temperature: Range::new(15.0, 25.0),
        climate: ClimateNeeds {
            precipitation: Range::new(400.0, 800.0),
            humidity: Range::new(60.0, 85.0),
            frost_tolerance: FrostTolerance::Medium,
            drought_tolerance: Level::Low,
            wind_tolerance: Level::Low,
            optimal_temperature: 20.0,
        },
        soil: SoilNeeds {
            preferred_textures: vec![SoilTexture::Loam, SoilTexture::Clay],
            ph: Range::new(6.0, 7.5),
            organic_matter: Level::High,
            drainage: DrainageRequirement::Good,
            depth: SoilDepth::Shallow,
            fertility: Level::High,
        },
        water: WaterNeeds {
            requirement: Level::High,
            irrigation_dependency: IrrigationDependency::Recommended,
            efficiency: Level::Medium,
        },
        economic: EconomicProfile {
            market_demand: Level::High,
            price_stability: PriceStability::Moderate,
            labor_requirement: Level::High,
            infrastructure_need: InfrastructureTier::Moderate,
            investment_level: Level::Medium,
            profitability_potential: Level::High,
            costs_per_ha: costs(20000.0, 50000.0, 30000.0, 70000.0, 12000.0, 8000.0),
            average_yield_per_ha: 40000.0,
            price_per_kg: 6.0,
            price_variability: 0.35,
        },
        risks: RiskProfile {
            pests: names(&["Aphids", "Diamondback moth", "Thrips"]),
            diseases: names(&["Downy mildew", "Alternaria leaf spot"]),
            climate_vulnerability: Level::High,
            market_risk: Level::Medium,
        },
        sustainability: SustainabilityProfile {
            environmental_impact: Level::Medium,
            pesticide_use: PesticideUse::Moderate,
            soil_conservation: SoilConservation::Moderate,
            rotation_partners: names(&["tomato", "common_bean"]),
        },
        cultural: CulturalProfile {
            local_knowledge: LocalKnowledge::Moderate,
            acceptance: Level::High,
            food_security: FoodSecurityRole::Important,
        },
        phenology: None,
        timing: None,
    }
}
