use crate::explanation::types::CropRecommendation;
use crate::phenology::season::month_name;

/// Markdown formatter for recommendation reports
pub struct MarkdownFormatter;

/// Star rating for an overall score
pub fn stars(score: f64) -> &'static str {
    match score {
        s if s >= 90.0 => "★★★★★",
        s if s >= 80.0 => "★★★★☆",
        s if s >= 70.0 => "★★★☆☆",
        s if s >= 60.0 => "★★☆☆☆",
        s if s >= 50.0 => "★☆☆☆☆",
        _ => "☆☆☆☆☆",
    }
}

impl MarkdownFormatter {
    /// Format a ranked recommendation list as a markdown report
    pub fn format(recommendations: &[CropRecommendation]) -> String {
        let mut md = String::with_capacity(2048 * recommendations.len().max(1));

        md.push_str("# Crop Recommendations\n\n");
        if recommendations.is_empty() {
            md.push_str("No crops evaluated.\n");
            return md;
        }

        md.push_str("| Rank | Crop | Score | Viability | Investment | Expected profit |\n");
        md.push_str("|------|------|-------|-----------|------------|-----------------|\n");
        for (i, rec) in recommendations.iter().enumerate() {
            md.push_str(&format!(
                "| {} | {} {} | {:.0} | {} | {} | {} |\n",
                i + 1,
                rec.icon,
                rec.crop_name,
                rec.overall_score,
                rec.viability_level.display_text(),
                rec.economics.estimated_investment,
                rec.economics.expected_profit
            ));
        }
        md.push('\n');

        for rec in recommendations {
            Self::format_crop(&mut md, rec);
        }
        md
    }

    /// Format one crop's section
    pub fn format_crop(md: &mut String, rec: &CropRecommendation) {
        md.push_str(&format!(
            "## {} {} - {} {}\n\n",
            rec.icon,
            rec.crop_name,
            stars(rec.overall_score),
            rec.viability_level.display_text()
        ));
        md.push_str(&format!("**Overall Score:** {:.0}/100\n\n", rec.overall_score));

        // Dimension breakdown
        md.push_str("| Dimension | Score |\n");
        md.push_str("|-----------|-------|\n");
        let s = &rec.scores;
        for (name, score) in [
            ("Climate", s.climate),
            ("Soil", s.soil),
            ("Water", s.water),
            ("Economic", s.economic),
            ("Risk", s.risk),
            ("Sustainability", s.sustainability),
            ("Cultural", s.cultural),
            ("Timing", s.timing),
            ("Phenology", s.phenology),
        ] {
            md.push_str(&format!("| {} | {:.0} |\n", name, score));
        }
        md.push('\n');

        if !rec.adjustments.is_empty() {
            md.push_str("### Adjustments\n\n");
            for adj in &rec.adjustments {
                md.push_str(&format!("- `{}` {:+.0}: {}\n", adj.code, adj.points, adj.reason));
            }
            md.push('\n');
        }

        Self::format_list(md, "Strengths", &rec.analysis.strengths);
        Self::format_list(md, "Challenges", &rec.analysis.challenges);
        Self::format_list(md, "Requirements", &rec.analysis.requirements);
        Self::format_list(md, "Recommendations", &rec.analysis.recommendations);

        // Timing
        let timing = &rec.timing;
        md.push_str("### Timing\n\n");
        md.push_str(&format!(
            "**Planting:** {} ({})  \n",
            timing.planting.verdict.display_text(),
            timing.planting.time_window
        ));
        for consequence in &timing.planting.consequences {
            md.push_str(&format!("- {}\n", consequence));
        }
        md.push_str(&format!(
            "**Next critical period:** {} in {} days  \n",
            timing.next_critical_period.stage.display_text(),
            timing.next_critical_period.days_until
        ));
        md.push_str(&format!(
            "**Expected harvest:** {} ({}, market timing {})\n\n",
            timing.harvest.expected_date,
            month_name(timing.harvest.harvest_month),
            timing.harvest.market_timing.display_text()
        ));
        md.push_str(&format!(
            "Planting window {}, critical periods: {}, harvest {}.\n\n",
            rec.timeline.planting_window,
            rec.timeline.critical_periods.join(", "),
            rec.timeline.harvest_period
        ));

        // Stress
        md.push_str(&format!(
            "**Stress:** thermal {}, water {} (index {:.1})\n\n",
            rec.stress.thermal.risk.display_text(),
            rec.stress.water.risk.display_text(),
            rec.bioclimatic.stress_index
        ));

        // Economics
        let econ = &rec.economics;
        md.push_str("### Economics\n\n");
        md.push_str("| Item | Value |\n");
        md.push_str("|------|-------|\n");
        for (item, value) in [
            ("Investment", &econ.estimated_investment),
            ("Per hectare", &econ.investment_per_ha),
            ("Expected revenue", &econ.expected_return),
            ("Expected profit", &econ.expected_profit),
            ("Profit margin", &econ.profit_margin),
            ("Payback", &econ.payback_period),
            ("Risk-adjusted return", &econ.risk_adjusted_return),
            ("Confidence", &econ.confidence_level),
        ] {
            md.push_str(&format!("| {} | {} |\n", item, value));
        }
        md.push_str(&format!(
            "| Profitability risk | {} |\n\n",
            econ.profitability_risk.display_text()
        ));
        for warning in &econ.calculation.warnings {
            md.push_str(&format!("⚠️ {}\n\n", warning));
        }

        // Sustainability
        md.push_str("### Sustainability\n\n");
        md.push_str(&format!(
            "{}. {}.\n\n",
            rec.sustainability.environmental_impact, rec.sustainability.soil_health
        ));
        for benefit in &rec.sustainability.rotation_benefits {
            md.push_str(&format!("- {}\n", benefit));
        }
        md.push('\n');
    }

    fn format_list(md: &mut String, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        md.push_str(&format!("**{}**\n\n", title));
        for item in items {
            md.push_str(&format!("- {}\n", item));
        }
        md.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::WeatherSnapshot;
    use crate::data::StaticKnowledgeBase;
    use crate::scorer::{CropAdvisor, RecommendationRequest};
    use chrono::NaiveDate;

    fn recommendations() -> Vec<CropRecommendation> {
        let advisor = CropAdvisor::new(StaticKnowledgeBase::builtin());
        let request = RecommendationRequest::new(
            &["corn", "cassava"],
            WeatherSnapshot::new(25.0, 70.0, 80.0),
            "Sofala",
            1.0,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        );
        advisor.recommend(&request).unwrap()
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(92.0), "★★★★★");
        assert_eq!(stars(85.0), "★★★★☆");
        assert_eq!(stars(55.0), "★☆☆☆☆");
        assert_eq!(stars(10.0), "☆☆☆☆☆");
    }

    #[test]
    fn test_format_report() {
        let recs = recommendations();
        let md = MarkdownFormatter::format(&recs);
        assert!(md.starts_with("# Crop Recommendations"));
        assert!(md.contains("## 🌽 Corn"));
        assert!(md.contains("| Climate |"));
        assert!(md.contains("### Economics"));
        assert!(md.contains(&recs[0].economics.estimated_investment));
    }

    #[test]
    fn test_format_empty() {
        assert!(MarkdownFormatter::format(&[]).contains("No crops evaluated."));
    }
}
