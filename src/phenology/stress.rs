//! Thermal and water stress tiers

use crate::context::WeatherSnapshot;
use crate::data::{CropProfile, CropStage, Level};
use serde::{Deserialize, Serialize};

/// Degrees above the crop maximum at which thermal stress is high
pub const SEVERE_HEAT_MARGIN: f64 = 5.0;

/// Monthly precipitation below which thirsty crops are in severe deficit, mm
pub const SEVERE_DRY_PRECIPITATION_MM: f64 = 20.0;

/// Monthly precipitation below which any crop needs supplementary water, mm
pub const DRY_PRECIPITATION_MM: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressTier {
    Low,
    Medium,
    High,
}

impl StressTier {
    pub fn display_text(&self) -> &'static str {
        match self {
            StressTier::Low => "low",
            StressTier::Medium => "medium",
            StressTier::High => "high",
        }
    }

    /// Contribution to the stress index
    pub fn index_value(&self) -> f64 {
        match self {
            StressTier::Low => 0.1,
            StressTier::Medium => 0.4,
            StressTier::High => 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalStress {
    pub risk: StressTier,
    pub critical_periods: Vec<String>,
    pub mitigation: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterStress {
    pub risk: StressTier,
    pub critical_periods: Vec<String>,
    pub irrigation_needs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressAnalysis {
    pub thermal: ThermalStress,
    pub water: WaterStress,
}

impl StressAnalysis {
    /// Larger of the two tier values, in [0, 1]
    pub fn stress_index(&self) -> f64 {
        self.thermal.risk.index_value().max(self.water.risk.index_value())
    }
}

fn stage_lines(stages: &[CropStage], suffix: &str) -> Vec<String> {
    stages
        .iter()
        .map(|s| format!("{} {}", s.display_text(), suffix))
        .collect()
}

fn thermal_stress(crop: &CropProfile, temperature: f64) -> ThermalStress {
    let max = crop.temperature.max;
    if temperature > max + SEVERE_HEAT_MARGIN {
        let critical_periods = match &crop.phenology {
            Some(p) if !p.heat_stress_stages.is_empty() => {
                stage_lines(&p.heat_stress_stages, "exposed to excessive heat")
            }
            _ => vec!["Excessive heat during flowering".to_string()],
        };
        ThermalStress {
            risk: StressTier::High,
            critical_periods,
            mitigation: vec![
                "Provide shading".to_string(),
                "Use sprinkler irrigation for cooling".to_string(),
            ],
        }
    } else if temperature > max {
        ThermalStress {
            risk: StressTier::Medium,
            critical_periods: Vec::new(),
            mitigation: vec![
                "Monitor soil temperature".to_string(),
                "Apply mulch".to_string(),
            ],
        }
    } else {
        ThermalStress {
            risk: StressTier::Low,
            critical_periods: Vec::new(),
            mitigation: Vec::new(),
        }
    }
}

fn water_stress(crop: &CropProfile, precipitation: f64) -> WaterStress {
    if crop.water.requirement == Level::High && precipitation < SEVERE_DRY_PRECIPITATION_MM {
        let mut critical_periods = vec!["Severe water deficit".to_string()];
        if let Some(p) = &crop.phenology {
            critical_periods.extend(stage_lines(&p.water_stress_stages, "sensitive to drought"));
        }
        WaterStress {
            risk: StressTier::High,
            critical_periods,
            irrigation_needs: vec![
                "Daily irrigation required".to_string(),
                "Drip irrigation recommended".to_string(),
            ],
        }
    } else if precipitation < DRY_PRECIPITATION_MM {
        WaterStress {
            risk: StressTier::Medium,
            critical_periods: Vec::new(),
            irrigation_needs: vec!["Supplementary irrigation recommended".to_string()],
        }
    } else {
        WaterStress {
            risk: StressTier::Low,
            critical_periods: Vec::new(),
            irrigation_needs: Vec::new(),
        }
    }
}

/// Thermal and water stress from the snapshot
///
/// Missing readings count as 25 °C and 0 mm.
pub fn analyze_stress(crop: &CropProfile, weather: &WeatherSnapshot) -> StressAnalysis {
    StressAnalysis {
        thermal: thermal_stress(crop, weather.temperature_or_default()),
        water: water_stress(crop, weather.precipitation_or_default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::test_support::crop;

    #[test]
    fn test_thermal_tiers() {
        let corn = crop("corn");
        let at = |t| analyze_stress(&corn, &WeatherSnapshot::new(t, 70.0, 100.0)).thermal.risk;
        assert_eq!(at(30.0), StressTier::Low);
        assert_eq!(at(35.0), StressTier::Low);
        assert_eq!(at(38.0), StressTier::Medium);
        assert_eq!(at(40.5), StressTier::High);
    }

    #[test]
    fn test_heat_critical_periods_from_phenology() {
        let s = analyze_stress(&crop("corn"), &WeatherSnapshot::new(42.0, 70.0, 100.0));
        assert_eq!(s.thermal.critical_periods, vec!["Flowering exposed to excessive heat"]);
        let s = analyze_stress(&crop("sorghum"), &WeatherSnapshot::new(46.0, 70.0, 100.0));
        assert_eq!(s.thermal.critical_periods, vec!["Excessive heat during flowering"]);
    }

    #[test]
    fn test_water_tiers() {
        let rice = crop("rice");
        assert_eq!(analyze_stress(&rice, &WeatherSnapshot::new(25.0, 70.0, 10.0)).water.risk, StressTier::High);
        assert_eq!(analyze_stress(&rice, &WeatherSnapshot::new(25.0, 70.0, 30.0)).water.risk, StressTier::Medium);
        assert_eq!(analyze_stress(&rice, &WeatherSnapshot::new(25.0, 70.0, 60.0)).water.risk, StressTier::Low);
        // low-requirement crop never reaches high
        let cowpea = crop("cowpea");
        assert_eq!(analyze_stress(&cowpea, &WeatherSnapshot::new(25.0, 70.0, 0.0)).water.risk, StressTier::Medium);
    }

    #[test]
    fn test_stress_index_is_max() {
        let s = analyze_stress(&crop("rice"), &WeatherSnapshot::new(25.0, 70.0, 0.0));
        assert_eq!(s.stress_index(), 0.8);
        let s = analyze_stress(&crop("corn"), &WeatherSnapshot::new(25.0, 70.0, 100.0));
        assert_eq!(s.stress_index(), 0.1);
    }
}
