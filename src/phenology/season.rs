//! Southern-hemisphere season calendar
//!
//! Rains run November to March, the dry season May to September, with
//! April and October as transition months. Day length is a coarse
//! per-month value, long in the rains and short in mid-winter.
//!
//! A knowledge base may relabel a month's season; `CurrentSeason::from_factor`
//! follows that label. The season spans used for planting progress stay on
//! the fixed calendar.

use crate::data::{CropSeason, SeasonType, SeasonalFactor};
use crate::error::{validate_month, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Season and day length for a calendar month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentSeason {
    pub month: u32,
    pub season: SeasonType,
    /// Hours of daylight
    pub daylength_hours: f64,
}

impl CurrentSeason {
    pub fn from_month(month: u32) -> Result<Self> {
        validate_month(month)?;
        Ok(Self::classify(month))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        // chrono months are always 1..=12
        Self::classify(date.month())
    }

    /// Season as labelled by a knowledge-base month entry
    ///
    /// Day length still follows the calendar month.
    pub fn from_factor(factor: &SeasonalFactor) -> Self {
        Self {
            month: factor.month,
            season: factor.season,
            daylength_hours: daylength_hours(factor.month),
        }
    }

    fn classify(month: u32) -> Self {
        let season = match month {
            11 | 12 | 1 | 2 | 3 => SeasonType::Rainy,
            5..=9 => SeasonType::Dry,
            _ => SeasonType::Transition,
        };
        Self { month, season, daylength_hours: daylength_hours(month) }
    }

    /// True when a rainy or dry crop is in its own season
    ///
    /// All-year crops never match a single season.
    pub fn matches(&self, crop_season: CropSeason) -> bool {
        season_of(crop_season) == Some(self.season)
    }
}

fn daylength_hours(month: u32) -> f64 {
    match month {
        12 | 1 => 13.5,
        11 | 2 | 3 => 13.0,
        6 | 7 => 11.0,
        5 | 8 | 9 => 11.5,
        _ => 12.0,
    }
}

/// Calendar season a crop is planted in, `None` for all-year crops
pub fn season_of(crop_season: CropSeason) -> Option<SeasonType> {
    match crop_season {
        CropSeason::Rainy => Some(SeasonType::Rainy),
        CropSeason::Dry => Some(SeasonType::Dry),
        CropSeason::AllYear => None,
    }
}

/// First and last day of the season span containing or following `date`
///
/// Rainy: Nov 1 to Mar 31 (crossing the year). Dry: May 1 to Sep 30.
/// Transition months have no span.
pub fn season_span(season: SeasonType, date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let year = date.year();
    match season {
        SeasonType::Rainy => {
            let start_year = if date.month() >= 11 { year } else { year - 1 };
            let start = NaiveDate::from_ymd_opt(start_year, 11, 1)?;
            let end = NaiveDate::from_ymd_opt(start_year + 1, 3, 31)?;
            Some((start, end))
        }
        SeasonType::Dry => {
            let start = NaiveDate::from_ymd_opt(year, 5, 1)?;
            let end = NaiveDate::from_ymd_opt(year, 9, 30)?;
            Some((start, end))
        }
        SeasonType::Transition => None,
    }
}

/// Fraction of the current season span already elapsed at `date`, in [0, 1]
pub fn elapsed_fraction(season: SeasonType, date: NaiveDate) -> Option<f64> {
    let (start, end) = season_span(season, date)?;
    if date < start || date > end {
        return None;
    }
    let total = (end - start).num_days() as f64;
    let elapsed = (date - start).num_days() as f64;
    Some(elapsed / total)
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{KnowledgeBase, StaticKnowledgeBase};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_season_classification() {
        for m in [11, 12, 1, 2, 3] {
            assert_eq!(CurrentSeason::from_month(m).unwrap().season, SeasonType::Rainy);
        }
        for m in 5..=9 {
            assert_eq!(CurrentSeason::from_month(m).unwrap().season, SeasonType::Dry);
        }
        assert_eq!(CurrentSeason::from_month(4).unwrap().season, SeasonType::Transition);
        assert_eq!(CurrentSeason::from_month(10).unwrap().season, SeasonType::Transition);
        assert!(CurrentSeason::from_month(0).is_err());
        assert!(CurrentSeason::from_month(13).is_err());
    }

    #[test]
    fn test_daylength() {
        assert_eq!(CurrentSeason::from_month(1).unwrap().daylength_hours, 13.5);
        assert_eq!(CurrentSeason::from_month(3).unwrap().daylength_hours, 13.0);
        assert_eq!(CurrentSeason::from_month(6).unwrap().daylength_hours, 11.0);
        assert_eq!(CurrentSeason::from_month(9).unwrap().daylength_hours, 11.5);
        assert_eq!(CurrentSeason::from_month(10).unwrap().daylength_hours, 12.0);
    }

    #[test]
    fn test_from_date_agrees_with_from_month() {
        for m in 1..=12 {
            assert_eq!(
                CurrentSeason::from_date(date(2025, m, 15)),
                CurrentSeason::from_month(m).unwrap()
            );
        }
    }

    #[test]
    fn test_from_factor_follows_table_label() {
        let kb = StaticKnowledgeBase::builtin();
        for m in 1..=12 {
            let factor = kb.seasonal_factor(m).unwrap();
            assert_eq!(CurrentSeason::from_factor(factor), CurrentSeason::from_month(m).unwrap());
        }

        let mut relabelled = kb.seasonal_factor(1).unwrap().clone();
        relabelled.season = SeasonType::Dry;
        let season = CurrentSeason::from_factor(&relabelled);
        assert_eq!(season.season, SeasonType::Dry);
        assert_eq!(season.daylength_hours, 13.5);
    }

    #[test]
    fn test_rainy_span_crosses_year() {
        let (start, end) = season_span(SeasonType::Rainy, date(2025, 1, 10)).unwrap();
        assert_eq!(start, date(2024, 11, 1));
        assert_eq!(end, date(2025, 3, 31));
        let (start, _) = season_span(SeasonType::Rainy, date(2025, 12, 1)).unwrap();
        assert_eq!(start, date(2025, 11, 1));
    }

    #[test]
    fn test_elapsed_fraction() {
        assert_eq!(elapsed_fraction(SeasonType::Dry, date(2025, 5, 1)), Some(0.0));
        assert_eq!(elapsed_fraction(SeasonType::Dry, date(2025, 9, 30)), Some(1.0));
        assert_eq!(elapsed_fraction(SeasonType::Dry, date(2025, 10, 5)), None);
        assert_eq!(elapsed_fraction(SeasonType::Transition, date(2025, 4, 5)), None);
    }
}
