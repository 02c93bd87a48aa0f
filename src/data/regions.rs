//! Regional factor table for the provinces of Mozambique
//!
//! Multipliers scale the per-hectare cost items and the farm-gate price.
//! Sofala is the fallback when a caller passes an unrecognised region.

use super::crops::{InfrastructureTier, Range};
use serde::{Deserialize, Serialize};

/// Region used when a lookup misses
pub const DEFAULT_REGION: &str = "Sofala";

/// Cost, market and agronomic factors for one region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionalFactor {
    pub name: String,

    /// Scales labor cost
    pub labor_cost_multiplier: f64,

    /// Scales "other" costs (haulage, packaging)
    pub transport_cost_multiplier: f64,

    /// Scales seed, fertilizer and pesticide costs
    pub input_availability_multiplier: f64,

    /// Scales the farm-gate price
    pub market_access_multiplier: f64,

    /// Soil quality index in [0, 1], first factor of the yield adjustment
    pub soil_quality_index: f64,

    pub infrastructure: InfrastructureTier,

    /// Average annual rainfall, mm
    pub average_rainfall_mm: f64,

    /// Altitude span, m
    pub altitude_m: Range,
}

impl RegionalFactor {
    /// Machinery depreciation factor for the regional infrastructure tier
    pub fn machinery_factor(&self) -> f64 {
        match self.infrastructure {
            InfrastructureTier::Advanced => 1.2,
            InfrastructureTier::Moderate => 1.0,
            InfrastructureTier::Basic => 0.8,
        }
    }

    /// Infrastructure contribution to the confidence level
    pub fn confidence_factor(&self) -> f64 {
        match self.infrastructure {
            InfrastructureTier::Advanced => 1.1,
            InfrastructureTier::Moderate => 1.0,
            InfrastructureTier::Basic => 0.9,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let multipliers = [
            ("labor", self.labor_cost_multiplier),
            ("transport", self.transport_cost_multiplier),
            ("input availability", self.input_availability_multiplier),
            ("market access", self.market_access_multiplier),
        ];
        for (label, value) in multipliers {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("region '{}': {} multiplier must be positive", self.name, label));
            }
        }
        if !(0.0..=1.0).contains(&self.soil_quality_index) {
            return Err(format!("region '{}': soil quality index outside [0, 1]", self.name));
        }
        if !self.altitude_m.is_valid() {
            return Err(format!("region '{}': altitude range is not ordered", self.name));
        }
        Ok(())
    }
}

/// Normalise a region name for lookup: lowercase, common diacritics folded
pub fn region_key(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'Á' | 'À' | 'Â' | 'Ã' => 'a',
            'é' | 'ê' | 'É' | 'Ê' => 'e',
            'í' | 'Í' => 'i',
            'ó' | 'ô' | 'õ' | 'Ó' | 'Ô' | 'Õ' => 'o',
            'ú' | 'Ú' => 'u',
            'ç' | 'Ç' => 'c',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn region(
    name: &str,
    labor: f64,
    transport: f64,
    input: f64,
    market: f64,
    infrastructure: InfrastructureTier,
    rainfall: f64,
    soil_quality: f64,
    altitude: (f64, f64),
) -> RegionalFactor {
    RegionalFactor {
        name: name.to_string(),
        labor_cost_multiplier: labor,
        transport_cost_multiplier: transport,
        input_availability_multiplier: input,
        market_access_multiplier: market,
        soil_quality_index: soil_quality,
        infrastructure,
        average_rainfall_mm: rainfall,
        altitude_m: Range::new(altitude.0, altitude.1),
    }
}

/// The ten provinces
pub fn builtin_regions() -> Vec<RegionalFactor> {
    use InfrastructureTier::*;
    vec![
        region("Maputo", 1.4, 0.8, 1.2, 1.5, Advanced, 800.0, 0.7, (0.0, 200.0)),
        region("Gaza", 0.8, 1.2, 0.9, 0.9, Basic, 600.0, 0.6, (0.0, 500.0)),
        region("Inhambane", 0.9, 1.1, 1.0, 1.1, Moderate, 900.0, 0.8, (0.0, 300.0)),
        region("Sofala", 1.0, 1.0, 1.1, 1.2, Moderate, 1200.0, 0.9, (0.0, 1000.0)),
        region("Manica", 0.9, 1.3, 0.9, 0.8, Basic, 1100.0, 0.9, (200.0, 2500.0)),
        region("Tete", 0.8, 1.4, 0.8, 0.7, Basic, 800.0, 0.7, (100.0, 1500.0)),
        region("Zambézia", 0.9, 1.1, 1.0, 1.0, Moderate, 1400.0, 0.8, (0.0, 800.0)),
        region("Nampula", 1.0, 1.2, 1.1, 1.1, Moderate, 1000.0, 0.7, (0.0, 1500.0)),
        region("Cabo Delgado", 0.9, 1.3, 0.9, 0.8, Basic, 1100.0, 0.8, (0.0, 1000.0)),
        region("Niassa", 0.7, 1.5, 0.7, 0.6, Basic, 1200.0, 0.8, (300.0, 2000.0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_regions_valid() {
        let regions = builtin_regions();
        assert_eq!(regions.len(), 10);
        for r in &regions {
            assert!(r.validate().is_ok(), "{:?}", r.validate());
        }
        assert!(regions.iter().any(|r| r.name == DEFAULT_REGION));
    }

    #[test]
    fn test_region_key_folds_accents() {
        assert_eq!(region_key("Zambézia"), "zambezia");
        assert_eq!(region_key(" CABO Delgado "), "cabo delgado");
    }

    #[test]
    fn test_machinery_and_confidence_factors() {
        let regions = builtin_regions();
        let maputo = regions.iter().find(|r| r.name == "Maputo").unwrap();
        let gaza = regions.iter().find(|r| r.name == "Gaza").unwrap();
        assert_eq!(maputo.machinery_factor(), 1.2);
        assert_eq!(gaza.machinery_factor(), 0.8);
        assert_eq!(maputo.confidence_factor(), 1.1);
        assert_eq!(gaza.confidence_factor(), 0.9);
    }

    #[test]
    fn test_rejects_non_positive_multiplier() {
        let mut r = builtin_regions().remove(0);
        r.labor_cost_multiplier = 0.0;
        assert!(r.validate().is_err());
    }
}
