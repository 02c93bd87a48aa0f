//! Crop Advisor - main coordinator for crop recommendations
//!
//! Runs the seven dimension scorers plus timing and phenology for each
//! requested crop, aggregates them with the configured weights, classifies
//! the result and attaches the investment projection and explanations.
//! Includes both sequential and parallel (Rayon) implementations; both
//! return identical, identically ordered output.

use crate::config::AdvisorConfig;
use crate::context::{FieldContext, ResolvedContext, WeatherSnapshot};
use crate::data::{CropProfile, KnowledgeBase, RegionalFactor, SeasonalFactor};
use crate::error::{validate_hectares, AdvisorError, Result};
use crate::explanation::{economics, insights, narrative, sustainability, CropRecommendation};
use crate::investment;
use crate::metrics::*;
use crate::phenology::{self, CurrentSeason};
use chrono::{Datelike, NaiveDate};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use tracing::{debug, info};

/// Inputs of one recommendation call
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    pub crop_ids: Vec<String>,
    pub weather: WeatherSnapshot,
    pub region: String,
    pub hectares: f64,
    pub reference_date: NaiveDate,
    pub context: FieldContext,
}

impl RecommendationRequest {
    pub fn new<S: AsRef<str>>(
        crop_ids: &[S],
        weather: WeatherSnapshot,
        region: &str,
        hectares: f64,
        reference_date: NaiveDate,
    ) -> Self {
        Self {
            crop_ids: crop_ids.iter().map(|s| s.as_ref().to_string()).collect(),
            weather,
            region: region.to_string(),
            hectares,
            reference_date,
            context: FieldContext::default(),
        }
    }

    pub fn with_context(mut self, context: FieldContext) -> Self {
        self.context = context;
        self
    }
}

/// Everything shared by the crops of one request, resolved once
struct Evaluation<'a> {
    weather: &'a WeatherSnapshot,
    context: ResolvedContext,
    region: &'a RegionalFactor,
    seasonal: &'a SeasonalFactor,
    season: CurrentSeason,
    reference_date: NaiveDate,
    hectares: f64,
}

/// Main crop advisor
pub struct CropAdvisor<K: KnowledgeBase> {
    kb: K,
    config: AdvisorConfig,
}

impl<K: KnowledgeBase> CropAdvisor<K> {
    pub fn new(kb: K) -> Self {
        Self { kb, config: AdvisorConfig::default() }
    }

    /// Advisor with custom weights, thresholds or default region
    ///
    /// The default region must exist in the knowledge base.
    pub fn with_config(kb: K, config: AdvisorConfig) -> Result<Self> {
        config.validate()?;
        kb.region(&config.default_region).map_err(|_| {
            AdvisorError::Config(format!("unknown default region: {}", config.default_region))
        })?;
        Ok(Self { kb, config })
    }

    pub fn knowledge_base(&self) -> &K {
        &self.kb
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Weighted overall score, rounded to a whole number and kept in [0, 100]
    pub fn overall_score(&self, scores: &DimensionScores) -> f64 {
        let weighted: f64 = scores
            .as_array()
            .iter()
            .zip(self.config.weights.as_array())
            .map(|(s, w)| s * w)
            .sum();
        weighted.round().clamp(0.0, 100.0)
    }

    /// Validate the request and look up every crop before any scoring
    ///
    /// Duplicate ids keep their first occurrence.
    fn prepare<'a>(
        &'a self,
        request: &'a RecommendationRequest,
    ) -> Result<(Evaluation<'a>, Vec<&'a CropProfile>)> {
        validate_hectares(request.hectares)?;
        request.weather.validate()?;

        let mut seen = FxHashSet::default();
        let mut crops = Vec::with_capacity(request.crop_ids.len());
        for id in &request.crop_ids {
            if seen.insert(id.as_str()) {
                crops.push(self.kb.crop(id)?);
            }
        }

        let region = self.kb.region_or(&request.region, &self.config.default_region)?;
        let month = request.reference_date.month();
        let seasonal = self.kb.seasonal_factor(month)?;

        info!(
            "Evaluating {} crops for {} ({}), {} ha",
            crops.len(),
            region.name,
            request.reference_date,
            request.hectares
        );

        let eval = Evaluation {
            weather: &request.weather,
            context: request.context.resolve(),
            region,
            seasonal,
            season: CurrentSeason::from_factor(seasonal),
            reference_date: request.reference_date,
            hectares: request.hectares,
        };
        Ok((eval, crops))
    }

    fn evaluate(&self, crop: &CropProfile, eval: &Evaluation) -> Result<CropRecommendation> {
        let ctx = &eval.context;
        let dimensions = [
            score_climate(crop, eval.weather),
            score_soil(crop, &ctx.soil),
            score_water(crop, &ctx.water),
            score_economic(crop, &ctx.market),
            score_risk(crop, &ctx.risks),
            score_sustainability(crop),
            score_cultural(crop),
            phenology::score_timing(crop, &eval.season),
            phenology::score_phenology(crop, eval.weather),
        ];
        let [climate, soil, water, economic, risk, sustainability, cultural, timing, phenology_score] =
            dimensions.each_ref().map(|d| d.score);
        let scores = DimensionScores {
            climate,
            soil,
            water,
            economic,
            risk,
            sustainability,
            cultural,
            timing,
            phenology: phenology_score,
        };
        let adjustments = dimensions.iter().flat_map(|d| d.adjustments.iter().cloned()).collect();

        let overall_score = self.overall_score(&scores);
        let viability_level = self.config.thresholds.classify(overall_score);
        debug!("{}: score {} ({})", crop.id, overall_score, viability_level.display_text());

        let timing_analysis = phenology::analyze_timing(&self.kb, crop, eval.reference_date)?;
        let stress = phenology::analyze_stress(crop, eval.weather);
        let bioclimatic = phenology::bioclimatic_indices(crop, eval.weather, &stress);
        let phenology_insights = phenology::phenology_insights(
            scores.timing,
            &eval.season,
            &timing_analysis.next_critical_period,
        );

        let calculation = investment::project(
            crop,
            eval.region,
            eval.seasonal,
            eval.hectares,
            Some(eval.weather),
        );

        let partners = sustainability::partner_names(&self.kb, crop);

        Ok(CropRecommendation {
            crop_id: crop.id.clone(),
            crop_name: crop.name.clone(),
            icon: crop.icon.clone(),
            overall_score,
            viability_level,
            scores,
            adjustments,
            phenology_insights,
            phase_guidance: phenology::phase_guidance(crop, eval.weather),
            analysis: narrative::analyze(crop, &scores, &ctx.soil, overall_score, &partners),
            timeline: narrative::timeline(crop),
            economics: economics::summarize(&calculation),
            sustainability: sustainability::notes(crop, &partners),
            timing: timing_analysis,
            stress,
            bioclimatic,
        })
    }

    /// Recommendation for a single crop
    pub fn evaluate_crop(
        &self,
        crop_id: &str,
        request: &RecommendationRequest,
    ) -> Result<CropRecommendation> {
        let single = RecommendationRequest {
            crop_ids: vec![crop_id.to_string()],
            ..request.clone()
        };
        let (eval, crops) = self.prepare(&single)?;
        let crop = crops[0];
        self.evaluate(crop, &eval)
    }

    /// Rank the requested crops, best first
    ///
    /// Fails without partial output on an unknown crop, non-positive
    /// hectares or non-finite weather.
    pub fn recommend(&self, request: &RecommendationRequest) -> Result<Vec<CropRecommendation>> {
        let (eval, crops) = self.prepare(request)?;
        let mut results = crops
            .iter()
            .map(|crop| self.evaluate(crop, &eval))
            .collect::<Result<Vec<_>>>()?;
        sort_recommendations(&mut results);
        Ok(results)
    }

    /// Same as `recommend`, evaluating crops IN PARALLEL
    ///
    /// Crop evaluations share only read-only data.
    pub fn recommend_parallel(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<CropRecommendation>> {
        let (eval, crops) = self.prepare(request)?;
        let mut results = crops
            .par_iter()
            .map(|crop| self.evaluate(crop, &eval))
            .collect::<Result<Vec<_>>>()?;
        sort_recommendations(&mut results);
        Ok(results)
    }

    /// Weather insights for the request's crops
    pub fn weather_insights(&self, request: &RecommendationRequest) -> Result<Vec<String>> {
        let recommendations = self.recommend(request)?;
        let season =
            CurrentSeason::from_factor(self.kb.seasonal_factor(request.reference_date.month())?);
        Ok(insights::weather_insights(&request.weather, &season, &recommendations))
    }
}

/// Overall score descending, then crop id ascending
pub fn sort_recommendations(recommendations: &mut [CropRecommendation]) {
    recommendations.sort_by(|a, b| {
        b.overall_score
            .partial_cmp(&a.overall_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.crop_id.cmp(&b.crop_id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::WaterAvailability;
    use crate::data::{SeasonType, StaticKnowledgeBase};
    use crate::phenology::PlantingVerdict;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn advisor() -> CropAdvisor<StaticKnowledgeBase> {
        CropAdvisor::new(StaticKnowledgeBase::builtin())
    }

    fn request(ids: &[&str], d: NaiveDate) -> RecommendationRequest {
        RecommendationRequest::new(ids, WeatherSnapshot::new(25.0, 70.0, 0.0), "Sofala", 1.0, d)
    }

    #[test]
    fn test_corn_january_scores() {
        let rec = advisor()
            .evaluate_crop("corn", &request(&["corn"], date(2025, 1, 15)))
            .unwrap();
        assert_eq!(rec.scores.climate, 75.0);
        assert_eq!(rec.scores.water, 60.0);
        assert_eq!(rec.scores.timing, 100.0);
        assert_eq!(rec.economics.calculation.season_match_factor, 1.0);
        assert_eq!(rec.timing.planting.verdict, PlantingVerdict::Adequate);
    }

    #[test]
    fn test_overall_is_weighted_sum() {
        let a = advisor();
        let rec = a.evaluate_crop("corn", &request(&["corn"], date(2025, 1, 15))).unwrap();
        let expected: f64 = rec
            .scores
            .as_array()
            .iter()
            .zip(a.config().weights.as_array())
            .map(|(s, w)| s * w)
            .sum();
        assert_eq!(rec.overall_score, expected.round());
        assert_eq!(rec.viability_level, a.config().thresholds.classify(rec.overall_score));
    }

    #[test]
    fn test_sorted_and_deduplicated() {
        let recs = advisor()
            .recommend(&request(&["rice", "corn", "cassava", "corn"], date(2025, 1, 15)))
            .unwrap();
        assert_eq!(recs.len(), 3);
        assert!(recs.windows(2).all(|w| w[0].overall_score >= w[1].overall_score));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let a = advisor();
        let ids: Vec<&str> = a.knowledge_base().crop_ids();
        let req = request(&ids, date(2025, 6, 10));
        assert_eq!(a.recommend(&req).unwrap(), a.recommend_parallel(&req).unwrap());
    }

    #[test]
    fn test_unknown_crop_fails_whole_request() {
        let err = advisor()
            .recommend(&request(&["corn", "quinoa"], date(2025, 1, 15)))
            .unwrap_err();
        assert_eq!(err, AdvisorError::UnknownCrop("quinoa".to_string()));
    }

    #[test]
    fn test_irrigation_access_raises_rice() {
        let a = advisor();
        let dry = request(&["rice"], date(2025, 1, 15));
        let wet = dry.clone().with_context(FieldContext {
            water: Some(WaterAvailability::irrigated()),
            ..FieldContext::default()
        });
        let without = a.evaluate_crop("rice", &dry).unwrap();
        let with = a.evaluate_crop("rice", &wet).unwrap();
        assert_eq!(without.scores.water, 0.0);
        assert!(without.overall_score < with.overall_score);
    }

    #[test]
    fn test_configured_default_region() {
        let config = AdvisorConfig {
            default_region: "Tete".to_string(),
            ..AdvisorConfig::default()
        };
        let a = CropAdvisor::with_config(StaticKnowledgeBase::builtin(), config).unwrap();
        let mut req = request(&["corn"], date(2025, 1, 15));
        req.region = "Atlantis".to_string();
        let rec = a.evaluate_crop("corn", &req).unwrap();
        assert_eq!(rec.economics.calculation.region, "Tete");
    }

    #[test]
    fn test_unknown_default_region_rejected() {
        let config = AdvisorConfig {
            default_region: "Atlantis".to_string(),
            ..AdvisorConfig::default()
        };
        let err = CropAdvisor::with_config(StaticKnowledgeBase::builtin(), config)
            .err()
            .unwrap();
        assert_eq!(err, AdvisorError::Config("unknown default region: Atlantis".to_string()));
    }

    #[test]
    fn test_default_region_folds_diacritics() {
        let config = AdvisorConfig {
            default_region: "zambezia".to_string(),
            ..AdvisorConfig::default()
        };
        let a = CropAdvisor::with_config(StaticKnowledgeBase::builtin(), config).unwrap();
        let mut req = request(&["corn"], date(2025, 1, 15));
        req.region = "Lisboa".to_string();
        let rec = a.evaluate_crop("corn", &req).unwrap();
        assert_eq!(rec.economics.calculation.region, "Zambézia");
    }

    #[test]
    fn test_reference_date_near_calendar_end_is_rejected() {
        let a = advisor();
        let req = request(&["corn", "cassava"], NaiveDate::MAX - chrono::Duration::days(10));
        assert!(matches!(a.recommend(&req), Err(AdvisorError::InvalidInput(_))));
        assert!(matches!(a.recommend_parallel(&req), Err(AdvisorError::InvalidInput(_))));
    }

    #[test]
    fn test_relabelled_month_moves_timing_and_yield_together() {
        let mut file = StaticKnowledgeBase::builtin().to_file();
        for factor in file.seasonal_factors.iter_mut().filter(|f| f.month == 1) {
            factor.season = SeasonType::Dry;
        }
        let kb = StaticKnowledgeBase::new(file.crops, file.regions, file.seasonal_factors).unwrap();
        let rec = CropAdvisor::new(kb)
            .evaluate_crop("corn", &request(&["corn"], date(2025, 1, 15)))
            .unwrap();
        assert_eq!(rec.scores.timing, 60.0);
        assert_eq!(rec.economics.calculation.season_match_factor, 0.7);
        assert_eq!(rec.timing.planting.verdict, PlantingVerdict::OffSeason);
    }

    #[test]
    fn test_weather_insights() {
        let req = RecommendationRequest::new(
            &["corn"],
            WeatherSnapshot::new(32.0, 85.0, 0.0),
            "Sofala",
            1.0,
            date(2025, 6, 10),
        );
        let lines = advisor().weather_insights(&req).unwrap();
        assert!(lines[0].starts_with("High temperatures"));
        assert!(lines[1].starts_with("High humidity"));
        assert!(lines.iter().any(|l| l == "Corn: out of season, wait for the right period"));
    }
}
