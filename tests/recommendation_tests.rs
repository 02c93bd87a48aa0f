// Recommendation engine integration tests
//
// Purpose: End-to-end behaviour of CropAdvisor against the built-in tables
// Run with: cargo test --test recommendation_tests

use chrono::NaiveDate;
use crop_advisor::data::IrrigationDependency;
use crop_advisor::phenology::PlantingVerdict;
use crop_advisor::{
    AdvisorConfig, AdvisorError, CropAdvisor, FieldContext, KnowledgeBase, RecommendationRequest,
    StaticKnowledgeBase, ViabilityLevel, WaterAvailability, WeatherSnapshot,
};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn advisor() -> CropAdvisor<StaticKnowledgeBase> {
    CropAdvisor::new(StaticKnowledgeBase::builtin())
}

fn request(ids: &[&str], weather: WeatherSnapshot, d: NaiveDate) -> RecommendationRequest {
    RecommendationRequest::new(ids, weather, "Sofala", 1.0, d)
}

// =========================================================================
// Section 1: Corn scenarios
// =========================================================================

#[test]
fn test_corn_january_no_temperature_penalty() {
    let rec = advisor()
        .evaluate_crop(
            "corn",
            &request(&["corn"], WeatherSnapshot::new(25.0, 70.0, 0.0), date(2025, 1, 15)),
        )
        .unwrap();

    assert!(!rec.adjustments.iter().any(|a| a.code.starts_with("climate.temperature")));
    assert_eq!(rec.economics.calculation.season_match_factor, 1.0);
    approx::assert_relative_eq!(rec.economics.calculation.yield_adjustment, 0.9, epsilon = 1e-12);
}

#[test]
fn test_corn_june_off_season() {
    let weather = WeatherSnapshot::new(25.0, 70.0, 0.0);
    let a = advisor();
    let january = a.evaluate_crop("corn", &request(&["corn"], weather.clone(), date(2025, 1, 15))).unwrap();
    let june = a.evaluate_crop("corn", &request(&["corn"], weather, date(2025, 6, 15))).unwrap();

    assert_eq!(january.scores.timing, 100.0);
    assert_eq!(june.scores.timing, 60.0);
    assert_eq!(june.timing.planting.verdict, PlantingVerdict::OffSeason);
    assert!(!june.timing.planting.consequences.is_empty());
    assert_eq!(june.timing.current_stage, None);
}

#[test]
fn test_corn_favourable_january_is_high() {
    let rec = advisor()
        .evaluate_crop(
            "corn",
            &request(&["corn"], WeatherSnapshot::new(25.0, 70.0, 80.0), date(2025, 1, 15)),
        )
        .unwrap();

    assert_eq!(rec.scores.climate, 100.0);
    assert_eq!(rec.scores.soil, 100.0);
    assert_eq!(rec.scores.water, 60.0);
    assert_eq!(rec.scores.economic, 80.0);
    assert_eq!(rec.scores.risk, 80.0);
    assert_eq!(rec.overall_score, 88.0);
    assert_eq!(rec.viability_level, ViabilityLevel::High);
}

// =========================================================================
// Section 2: Water hard floor is not a veto
// =========================================================================

#[test]
fn test_essential_irrigation_without_access_scores_zero_but_stays_high() {
    let kb = StaticKnowledgeBase::builtin();
    let mut corn = kb.crop("corn").unwrap().clone();
    corn.water.irrigation_dependency = IrrigationDependency::Essential;
    let advisor = CropAdvisor::new(kb.with_crop(corn).unwrap());

    let dry = request(&["corn"], WeatherSnapshot::new(25.0, 70.0, 80.0), date(2025, 1, 15));
    let irrigated = dry.clone().with_context(FieldContext {
        water: Some(WaterAvailability::irrigated()),
        ..FieldContext::default()
    });

    let without = advisor.evaluate_crop("corn", &dry).unwrap();
    let with = advisor.evaluate_crop("corn", &irrigated).unwrap();

    assert_eq!(without.scores.water, 0.0);
    assert!(without.adjustments.iter().any(|a| a.code == "water.irrigation_required"));
    assert_eq!(with.scores.water, 100.0);
    assert!(without.overall_score < with.overall_score);
    assert_eq!(with.overall_score, 93.0);
    // Current behaviour: the other dimensions still carry the crop to High.
    assert_eq!(without.overall_score, 81.0);
    assert_eq!(without.viability_level, ViabilityLevel::High);
}

#[test]
fn test_every_essential_crop_without_access_scores_zero() {
    let a = advisor();
    let kb = a.knowledge_base();
    let essential: Vec<&str> = kb
        .crop_ids()
        .into_iter()
        .filter(|id| {
            kb.crop(id).unwrap().water.irrigation_dependency == IrrigationDependency::Essential
        })
        .collect();
    assert!(!essential.is_empty());

    let recs = a
        .recommend(&request(&essential, WeatherSnapshot::new(25.0, 70.0, 50.0), date(2025, 7, 1)))
        .unwrap();
    assert!(recs.iter().all(|r| r.scores.water == 0.0));
}

// =========================================================================
// Section 3: Determinism, ordering, batch independence
// =========================================================================

#[test]
fn test_recommend_is_idempotent() {
    let a = advisor();
    let req = request(
        &["corn", "rice", "tomato", "cassava"],
        WeatherSnapshot::new(29.0, 82.0, 140.0),
        date(2025, 12, 3),
    );
    let first = serde_json::to_string(&a.recommend(&req).unwrap()).unwrap();
    let second = serde_json::to_string(&a.recommend(&req).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_permuted_ids_same_output() {
    let a = advisor();
    let weather = WeatherSnapshot::new(24.0, 60.0, 30.0);
    let forward = a
        .recommend(&request(&["onion", "cabbage", "peanut", "sesame"], weather.clone(), date(2025, 5, 20)))
        .unwrap();
    let reversed = a
        .recommend(&request(&["sesame", "peanut", "cabbage", "onion"], weather, date(2025, 5, 20)))
        .unwrap();
    assert_eq!(forward, reversed);
}

#[test]
fn test_sorted_descending_ties_by_id() {
    let a = advisor();
    let ids = a.knowledge_base().crop_ids();
    let recs = a
        .recommend(&request(&ids, WeatherSnapshot::new(26.0, 65.0, 90.0), date(2025, 2, 1)))
        .unwrap();
    assert_eq!(recs.len(), ids.len());
    for pair in recs.windows(2) {
        assert!(
            pair[0].overall_score > pair[1].overall_score
                || (pair[0].overall_score == pair[1].overall_score
                    && pair[0].crop_id < pair[1].crop_id)
        );
    }
}

#[test]
fn test_batch_matches_single_evaluations() {
    let a = advisor();
    let ids = a.knowledge_base().crop_ids();
    let req = request(&ids, WeatherSnapshot::new(31.0, 55.0, 10.0), date(2025, 8, 12));
    let batch = a.recommend_parallel(&req).unwrap();
    for rec in &batch {
        let single = a.evaluate_crop(&rec.crop_id, &req).unwrap();
        assert_eq!(&single, rec);
    }
}

// =========================================================================
// Section 4: Errors
// =========================================================================

#[test]
fn test_non_positive_hectares_rejected() {
    let a = advisor();
    for hectares in [0.0, -1.0, f64::NAN] {
        let mut req = request(&["corn"], WeatherSnapshot::new(25.0, 70.0, 0.0), date(2025, 1, 15));
        req.hectares = hectares;
        assert!(matches!(a.recommend(&req), Err(AdvisorError::InvalidInput(_))));
        assert!(matches!(a.recommend_parallel(&req), Err(AdvisorError::InvalidInput(_))));
    }
}

#[test]
fn test_non_finite_weather_rejected() {
    let req = request(&["corn"], WeatherSnapshot::new(f64::NAN, 70.0, 0.0), date(2025, 1, 15));
    assert!(matches!(advisor().recommend(&req), Err(AdvisorError::InvalidInput(_))));
}

#[test]
fn test_reference_date_near_calendar_end_is_invalid_input() {
    let a = advisor();
    let late = NaiveDate::MAX - chrono::Duration::days(10);
    let req = request(&["corn"], WeatherSnapshot::new(25.0, 70.0, 0.0), late);
    assert!(matches!(a.recommend(&req), Err(AdvisorError::InvalidInput(_))));
    assert!(matches!(a.recommend_parallel(&req), Err(AdvisorError::InvalidInput(_))));
}

#[test]
fn test_unknown_default_region_is_config_error() {
    let config = AdvisorConfig {
        default_region: "Atlantis".to_string(),
        ..AdvisorConfig::default()
    };
    let result = CropAdvisor::with_config(StaticKnowledgeBase::builtin(), config);
    assert!(matches!(result, Err(AdvisorError::Config(_))));
}

#[test]
fn test_implausible_weather_does_not_crash() {
    let req = request(
        &["corn", "cassava"],
        WeatherSnapshot::new(70.0, 150.0, -20.0).with_wind_speed(300.0),
        date(2025, 1, 15),
    );
    let recs = advisor().recommend(&req).unwrap();
    assert!(recs.iter().all(|r| (0.0..=100.0).contains(&r.overall_score)));
}

#[test]
fn test_unknown_region_uses_default() {
    let mut req = request(&["corn"], WeatherSnapshot::new(25.0, 70.0, 0.0), date(2025, 1, 15));
    req.region = "Atlantis".to_string();
    let rec = advisor().evaluate_crop("corn", &req).unwrap();
    assert_eq!(rec.economics.calculation.region, "Sofala");
}

#[test]
fn test_free_function_uses_builtin_tables() {
    let req = request(&["cowpea"], WeatherSnapshot::new(27.0, 60.0, 60.0), date(2025, 12, 1));
    let recs = crop_advisor::recommend(&req).unwrap();
    assert_eq!(recs[0].crop_id, "cowpea");
    assert_eq!(recs[0].timing.planting.verdict, PlantingVerdict::Ideal);
}

// =========================================================================
// Section 5: Output content
// =========================================================================

#[test]
fn test_economics_follow_request_field() {
    let mut req = request(&["corn"], WeatherSnapshot::new(25.0, 70.0, 0.0), date(2025, 1, 15));
    req.hectares = 2.0;
    let rec = advisor().evaluate_crop("corn", &req).unwrap();
    assert_eq!(rec.economics.estimated_investment, "182.300 MZN");
    assert_eq!(rec.economics.investment_per_ha, "91.150 MZN/ha");
}

#[test]
fn test_weather_insights_rainy_season() {
    let req = request(&["corn"], WeatherSnapshot::new(25.0, 70.0, 80.0), date(2025, 1, 15));
    let lines = advisor().weather_insights(&req).unwrap();
    assert_eq!(lines[0], "Rainy season: the main window for rain-fed crops");
    assert!(lines.contains(&"Corn: still suitable for planting with extra care".to_string()));
    assert!(lines.contains(&"Corn: Highly recommended for the region".to_string()));
}

// =========================================================================
// Section 6: Properties
// =========================================================================

proptest! {
    #[test]
    fn scores_stay_in_range(
        crop_index in 0usize..16,
        temperature in -10.0f64..55.0,
        humidity in 0.0f64..100.0,
        precipitation in 0.0f64..400.0,
        wind in 0.0f64..60.0,
        day in 0u32..365,
    ) {
        let a = advisor();
        let ids = a.knowledge_base().crop_ids();
        let id = ids[crop_index % ids.len()];
        let d = date(2025, 1, 1) + chrono::Duration::days(day as i64);
        let weather = WeatherSnapshot::new(temperature, humidity, precipitation).with_wind_speed(wind);
        let rec = a.evaluate_crop(id, &request(&[id], weather, d)).unwrap();

        for score in rec.scores.as_array() {
            prop_assert!((0.0..=100.0).contains(&score));
        }
        prop_assert!((0.0..=100.0).contains(&rec.overall_score));
        prop_assert_eq!(rec.overall_score, rec.overall_score.round());
        prop_assert_eq!(rec.viability_level, a.config().thresholds.classify(rec.overall_score));
        prop_assert!((0.0..=1.0).contains(&rec.bioclimatic.stress_index));
    }
}
