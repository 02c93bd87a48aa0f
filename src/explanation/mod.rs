pub mod types;
pub mod narrative;
pub mod economics;
pub mod sustainability;
pub mod insights;
pub mod formatters;

pub use types::{
    CropRecommendation, EconomicsSummary, NarrativeAnalysis, SustainabilityNotes, Timeline,
};

pub use economics::{profitability_risk, summarize};
pub use insights::weather_insights;
pub use narrative::{analyze, timeline};
pub use sustainability::{notes, partner_names};

pub use formatters::{JsonFormatter, MarkdownFormatter};
