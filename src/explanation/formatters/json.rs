use crate::explanation::types::CropRecommendation;
use serde_json;

/// JSON formatter for recommendation lists
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format recommendations as pretty-printed JSON
    pub fn format(recommendations: &[CropRecommendation]) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(recommendations)
    }

    /// Format recommendations as compact JSON (no whitespace)
    pub fn format_compact(
        recommendations: &[CropRecommendation],
    ) -> Result<String, serde_json::Error> {
        serde_json::to_string(recommendations)
    }
}
