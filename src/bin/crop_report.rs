// Crop report CLI
//
// Purpose: Rank crops for a region and date and print a Markdown report
// Usage: cargo run --features cli --bin crop_report -- <region> <YYYY-MM-DD> <hectares> <crop ids...>
//
// Environment:
//   TEMPERATURE / HUMIDITY / PRECIPITATION  weather snapshot (default 25 / 70 / 0)
//   ADVISOR_CONFIG                          optional JSON scoring config
//   OUTPUT=json                             print JSON instead of Markdown

use anyhow::{bail, Context};
use chrono::NaiveDate;
use crop_advisor::{
    builtin_knowledge_base, AdvisorConfig, CropAdvisor, JsonFormatter, MarkdownFormatter,
    RecommendationRequest, WeatherSnapshot,
};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn env_f64(name: &str, default: f64) -> anyhow::Result<f64> {
    match std::env::var(name) {
        Ok(v) => v.parse().with_context(|| format!("{} must be a number, got {:?}", name, v)),
        Err(_) => Ok(default),
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crop_advisor=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 4 {
        bail!("usage: crop_report <region> <YYYY-MM-DD> <hectares> <crop ids...>");
    }

    let region = &args[0];
    let date = NaiveDate::parse_from_str(&args[1], "%Y-%m-%d")
        .with_context(|| format!("Invalid date: {}", args[1]))?;
    let hectares: f64 = args[2]
        .parse()
        .with_context(|| format!("Invalid hectares: {}", args[2]))?;
    let crop_ids = &args[3..];

    let weather = WeatherSnapshot::new(
        env_f64("TEMPERATURE", 25.0)?,
        env_f64("HUMIDITY", 70.0)?,
        env_f64("PRECIPITATION", 0.0)?,
    );

    let config = match std::env::var("ADVISOR_CONFIG") {
        Ok(path) => AdvisorConfig::load(Path::new(&path))?,
        Err(_) => AdvisorConfig::default(),
    };
    let advisor = CropAdvisor::with_config(builtin_knowledge_base(), config)?;

    tracing::info!("Region: {}, date: {}, {} ha", region, date, hectares);

    let request = RecommendationRequest::new(crop_ids, weather, region, hectares, date);
    let recommendations = advisor.recommend_parallel(&request)?;

    if std::env::var("OUTPUT").map_or(false, |v| v == "json") {
        println!("{}", JsonFormatter::format(&recommendations)?);
    } else {
        println!("{}", MarkdownFormatter::format(&recommendations));
        println!("## Weather insights\n");
        for line in advisor.weather_insights(&request)? {
            println!("- {}", line);
        }
    }

    Ok(())
}
