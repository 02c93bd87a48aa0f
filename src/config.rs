//! Scoring configuration
//!
//! Dimension weights and viability thresholds. Defaults are the production
//! values; a JSON file can override them for experiments.

use crate::data::DEFAULT_REGION;
use crate::error::{AdvisorError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Weight of each dimension in the overall score; must sum to 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub climate: f64,
    pub soil: f64,
    pub water: f64,
    pub economic: f64,
    pub risk: f64,
    pub sustainability: f64,
    pub cultural: f64,
    pub timing: f64,
    pub phenology: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            climate: 0.15,
            soil: 0.12,
            water: 0.12,
            economic: 0.15,
            risk: 0.12,
            sustainability: 0.08,
            cultural: 0.04,
            timing: 0.12,
            phenology: 0.10,
        }
    }
}

impl ScoringWeights {
    pub fn as_array(&self) -> [f64; 9] {
        [
            self.climate,
            self.soil,
            self.water,
            self.economic,
            self.risk,
            self.sustainability,
            self.cultural,
            self.timing,
            self.phenology,
        ]
    }

    pub fn validate(&self) -> Result<()> {
        let weights = self.as_array();
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(AdvisorError::Config(
                "weights must be finite and non-negative".to_string(),
            ));
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(AdvisorError::Config(format!(
                "weights must sum to 1.0, got {:.6}",
                sum
            )));
        }
        Ok(())
    }
}

/// Tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViabilityLevel {
    High,
    Medium,
    Low,
    NotRecommended,
}

impl ViabilityLevel {
    pub fn display_text(&self) -> &'static str {
        match self {
            ViabilityLevel::High => "High",
            ViabilityLevel::Medium => "Medium",
            ViabilityLevel::Low => "Low",
            ViabilityLevel::NotRecommended => "Not Recommended",
        }
    }
}

/// Lower bounds (inclusive) of each viability tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViabilityThresholds {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for ViabilityThresholds {
    fn default() -> Self {
        Self {
            high: 80.0,
            medium: 60.0,
            low: 40.0,
        }
    }
}

impl ViabilityThresholds {
    pub fn classify(&self, score: f64) -> ViabilityLevel {
        match score {
            s if s >= self.high => ViabilityLevel::High,
            s if s >= self.medium => ViabilityLevel::Medium,
            s if s >= self.low => ViabilityLevel::Low,
            _ => ViabilityLevel::NotRecommended,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.low <= self.medium && self.medium <= self.high) {
            return Err(AdvisorError::Config(
                "thresholds must satisfy low <= medium <= high".to_string(),
            ));
        }
        Ok(())
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub weights: ScoringWeights,
    pub thresholds: ViabilityThresholds,
    /// Region used when the requested one is unknown
    pub default_region: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            thresholds: ViabilityThresholds::default(),
            default_region: DEFAULT_REGION.to_string(),
        }
    }
}

impl AdvisorConfig {
    /// Load configuration from JSON file; missing keys take defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: AdvisorConfig =
            serde_json::from_str(&contents).with_context(|| "Failed to parse config JSON")?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        self.thresholds.validate()
    }
}
