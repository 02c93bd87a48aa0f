//! Crop knowledge base
//!
//! Read-only crop, region and seasonal tables behind the `KnowledgeBase`
//! trait. The built-in tables cover Mozambique; tests and callers can load
//! their own fixtures from JSON.
//!
//! - `crops`: profile schema and vocabularies
//! - `crop_catalog`: built-in crops
//! - `regions`: provincial cost/market factors
//! - `seasons`: monthly factors

pub mod crops;
pub mod crop_catalog;
pub mod regions;
pub mod seasons;

pub use crops::*;
pub use regions::{region_key, RegionalFactor, DEFAULT_REGION};
pub use seasons::{SeasonType, SeasonalFactor};

use crate::error::{AdvisorError, Result};
use anyhow::Context;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Read-only lookups the engine needs
pub trait KnowledgeBase: Send + Sync {
    fn crop(&self, id: &str) -> Result<&CropProfile>;

    fn region(&self, name: &str) -> Result<&RegionalFactor>;

    fn seasonal_factor(&self, month: u32) -> Result<&SeasonalFactor>;

    /// Crop ids in a stable (sorted) order
    fn crop_ids(&self) -> Vec<&str>;

    /// Region names in a stable (sorted) order
    fn region_names(&self) -> Vec<&str>;

    /// Region lookup falling back to `fallback` when `name` is unknown
    fn region_or(&self, name: &str, fallback: &str) -> Result<&RegionalFactor> {
        match self.region(name) {
            Ok(region) => Ok(region),
            Err(AdvisorError::UnknownRegion(_)) => {
                tracing::warn!("Unknown region '{}', falling back to {}", name, fallback);
                self.region(fallback)
            }
            Err(e) => Err(e),
        }
    }

    /// Region lookup falling back to `DEFAULT_REGION`
    fn region_or_default(&self, name: &str) -> Result<&RegionalFactor> {
        self.region_or(name, DEFAULT_REGION)
    }
}

impl<K: KnowledgeBase + ?Sized> KnowledgeBase for &K {
    fn crop(&self, id: &str) -> Result<&CropProfile> {
        (**self).crop(id)
    }

    fn region(&self, name: &str) -> Result<&RegionalFactor> {
        (**self).region(name)
    }

    fn seasonal_factor(&self, month: u32) -> Result<&SeasonalFactor> {
        (**self).seasonal_factor(month)
    }

    fn crop_ids(&self) -> Vec<&str> {
        (**self).crop_ids()
    }

    fn region_names(&self) -> Vec<&str> {
        (**self).region_names()
    }
}

/// On-disk layout for a knowledge base fixture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBaseFile {
    pub crops: Vec<CropProfile>,
    pub regions: Vec<RegionalFactor>,
    pub seasonal_factors: Vec<SeasonalFactor>,
}

/// In-memory knowledge base
///
/// Crops keyed by id, regions by folded name (see `region_key`), months by
/// number. Immutable once built.
#[derive(Debug, Clone)]
pub struct StaticKnowledgeBase {
    crops: FxHashMap<String, CropProfile>,
    regions: FxHashMap<String, RegionalFactor>,
    seasonal: FxHashMap<u32, SeasonalFactor>,
}

impl StaticKnowledgeBase {
    /// Build from tables, validating every row
    pub fn new(
        crops: Vec<CropProfile>,
        regions: Vec<RegionalFactor>,
        seasonal_factors: Vec<SeasonalFactor>,
    ) -> Result<Self> {
        let mut crop_map = FxHashMap::default();
        for crop in crops {
            crop.validate().map_err(AdvisorError::InvalidInput)?;
            crop_map.insert(crop.id.clone(), crop);
        }

        let mut region_map = FxHashMap::default();
        for region in regions {
            region.validate().map_err(AdvisorError::InvalidInput)?;
            region_map.insert(region_key(&region.name), region);
        }

        let mut seasonal = FxHashMap::default();
        for factor in seasonal_factors {
            factor.validate().map_err(AdvisorError::InvalidInput)?;
            seasonal.insert(factor.month, factor);
        }
        for month in 1..=12 {
            if !seasonal.contains_key(&month) {
                return Err(AdvisorError::InvalidInput(format!(
                    "seasonal table is missing month {}",
                    month
                )));
            }
        }

        Ok(Self {
            crops: crop_map,
            regions: region_map,
            seasonal,
        })
    }

    /// Mozambique crop catalog, provinces and calendar
    pub fn builtin() -> Self {
        Self {
            crops: crop_catalog::builtin_crops()
                .into_iter()
                .map(|c| (c.id.clone(), c))
                .collect(),
            regions: regions::builtin_regions()
                .into_iter()
                .map(|r| (region_key(&r.name), r))
                .collect(),
            seasonal: seasons::builtin_seasonal_factors()
                .into_iter()
                .map(|s| (s.month, s))
                .collect(),
        }
    }

    /// Replace the crop table, keeping regions and months
    pub fn with_crops(&self, crops: Vec<CropProfile>) -> Result<Self> {
        Self::new(
            crops,
            self.regions.values().cloned().collect(),
            self.seasonal.values().cloned().collect(),
        )
    }

    /// Insert or replace a single crop
    pub fn with_crop(mut self, crop: CropProfile) -> Result<Self> {
        crop.validate().map_err(AdvisorError::InvalidInput)?;
        self.crops.insert(crop.id.clone(), crop);
        Ok(self)
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let file: KnowledgeBaseFile =
            serde_json::from_str(json).context("Failed to parse knowledge base JSON")?;
        Ok(Self::new(file.crops, file.regions, file.seasonal_factors)?)
    }

    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read knowledge base file: {:?}", path))?;
        Self::from_json_str(&contents)
            .with_context(|| format!("Invalid knowledge base in {:?}", path))
    }

    /// Serialise all tables, sorted for stable output
    pub fn to_file(&self) -> KnowledgeBaseFile {
        let mut crops: Vec<_> = self.crops.values().cloned().collect();
        crops.sort_by(|a, b| a.id.cmp(&b.id));
        let mut regions: Vec<_> = self.regions.values().cloned().collect();
        regions.sort_by(|a, b| a.name.cmp(&b.name));
        let mut seasonal_factors: Vec<_> = self.seasonal.values().cloned().collect();
        seasonal_factors.sort_by_key(|s| s.month);
        KnowledgeBaseFile { crops, regions, seasonal_factors }
    }
}

impl KnowledgeBase for StaticKnowledgeBase {
    fn crop(&self, id: &str) -> Result<&CropProfile> {
        self.crops
            .get(id)
            .ok_or_else(|| AdvisorError::UnknownCrop(id.to_string()))
    }

    fn region(&self, name: &str) -> Result<&RegionalFactor> {
        self.regions
            .get(&region_key(name))
            .ok_or_else(|| AdvisorError::UnknownRegion(name.to_string()))
    }

    fn seasonal_factor(&self, month: u32) -> Result<&SeasonalFactor> {
        crate::error::validate_month(month)?;
        self.seasonal
            .get(&month)
            .ok_or_else(|| AdvisorError::InvalidInput(format!("no seasonal factor for month {}", month)))
    }

    fn crop_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.crops.keys().map(|s| s.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    fn region_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.regions.values().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names
    }
}
