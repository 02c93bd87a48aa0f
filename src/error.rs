//! Error types for the recommendation engine
//!
//! Library calls return `AdvisorError`. File loading and the CLI wrap these in
//! `anyhow` with context, the same split used for calibration loading.

use thiserror::Error;

/// Errors surfaced by the engine entry points
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AdvisorError {
    /// Crop id not present in the knowledge base
    #[error("unknown crop: {0}")]
    UnknownCrop(String),

    /// Region name not present in the knowledge base (strict lookups only)
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    /// Non-positive hectares, month outside 1..=12, malformed weather
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Scoring configuration that cannot be used
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Reject non-positive or non-finite hectare counts
pub fn validate_hectares(hectares: f64) -> Result<()> {
    if !hectares.is_finite() || hectares <= 0.0 {
        return Err(AdvisorError::InvalidInput(format!(
            "hectares must be a positive number, got {}",
            hectares
        )));
    }
    Ok(())
}

/// Reject months outside 1..=12
pub fn validate_month(month: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(AdvisorError::InvalidInput(format!(
            "month must be in 1..=12, got {}",
            month
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hectares_validation() {
        assert!(validate_hectares(1.0).is_ok());
        assert!(validate_hectares(0.25).is_ok());
        assert_eq!(
            validate_hectares(0.0),
            Err(AdvisorError::InvalidInput(
                "hectares must be a positive number, got 0".to_string()
            ))
        );
        assert!(validate_hectares(-3.0).is_err());
        assert!(validate_hectares(f64::NAN).is_err());
        assert!(validate_hectares(f64::INFINITY).is_err());
    }

    #[test]
    fn test_month_validation() {
        assert!(validate_month(1).is_ok());
        assert!(validate_month(12).is_ok());
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = AdvisorError::UnknownCrop("quinoa".to_string());
        assert_eq!(err.to_string(), "unknown crop: quinoa");
    }
}
