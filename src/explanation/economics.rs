//! Display summary of an investment calculation

use crate::data::Level;
use crate::explanation::types::EconomicsSummary;
use crate::investment::{format_currency, format_currency_with_unit, InvestmentCalculation};

/// Profitability risk from the confidence level
pub fn profitability_risk(confidence_level: f64) -> Level {
    if confidence_level > 0.7 {
        Level::Low
    } else if confidence_level > 0.5 {
        Level::Medium
    } else {
        Level::High
    }
}

fn payback_text(harvests: f64) -> String {
    if harvests.is_finite() {
        format!("{:.1} harvests", (harvests * 10.0).round() / 10.0)
    } else {
        "not recovered".to_string()
    }
}

pub fn summarize(calc: &InvestmentCalculation) -> EconomicsSummary {
    EconomicsSummary {
        estimated_investment: format_currency(calc.total_investment),
        investment_per_ha: format_currency_with_unit(calc.total_investment / calc.hectares, "/ha"),
        expected_return: format_currency(calc.expected_revenue),
        expected_profit: format_currency(calc.expected_profit),
        profit_margin: format!("{:.1}%", calc.profit_margin),
        payback_period: payback_text(calc.payback_period),
        profitability_risk: profitability_risk(calc.confidence_level),
        risk_adjusted_return: format_currency(calc.risk_adjusted_return),
        confidence_level: format!("{:.0}%", calc.confidence_level * 100.0),
        calculation: calc.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::StaticKnowledgeBase;
    use crate::investment::calculate_investment;

    #[test]
    fn test_risk_tiers() {
        assert_eq!(profitability_risk(0.8), Level::Low);
        assert_eq!(profitability_risk(0.7), Level::Medium);
        assert_eq!(profitability_risk(0.504), Level::Medium);
        assert_eq!(profitability_risk(0.5), Level::High);
    }

    #[test]
    fn test_corn_summary() {
        let kb = StaticKnowledgeBase::builtin();
        let calc = calculate_investment(&kb, "corn", "Sofala", 2.0, 1, None).unwrap();
        let s = summarize(&calc);
        assert_eq!(s.estimated_investment, "182.300 MZN");
        assert_eq!(s.investment_per_ha, "91.150 MZN/ha");
        assert_eq!(s.expected_return, "291.060 MZN");
        assert_eq!(s.profit_margin, "37.4%");
        assert_eq!(s.payback_period, "1.7 harvests");
        assert_eq!(s.confidence_level, "50%");
        assert_eq!(s.profitability_risk, Level::Medium);
    }

    #[test]
    fn test_payback_not_recovered() {
        assert_eq!(payback_text(f64::INFINITY), "not recovered");
    }
}
