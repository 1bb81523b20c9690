//! Company financial snapshot and the baseline derived from it

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Reported financials and market multiples for one company ($M unless noted)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialSnapshot {
    /// Current-year revenue
    pub revenue: f64,

    /// Prior-year revenue
    pub revenue_prev_year: f64,

    /// Year-over-year revenue growth (numerator of the Commercial Ratio)
    pub revenue_growth: f64,

    pub cost_of_revenue: f64,

    /// Sales & marketing expense (denominator of the Commercial Ratio)
    pub sales_and_marketing: f64,

    pub research_and_development: f64,
    pub general_and_admin: f64,
    pub other_expenses: f64,

    /// Price to sales multiple
    pub ps_ratio: f64,

    /// Price to earnings multiple
    pub pe_ratio: f64,

    /// Shares outstanding (millions)
    pub shares_outstanding: f64,

    /// Share price ($)
    pub stock_price: f64,
}

impl FinancialSnapshot {
    /// The company the analyzer ships with
    pub fn default_company() -> Self {
        Self {
            revenue: 426.96,
            revenue_prev_year: 340.38,
            revenue_growth: 86.58,
            cost_of_revenue: 109.38,
            sales_and_marketing: 169.19,
            research_and_development: 80.79,
            general_and_admin: 65.31,
            other_expenses: 0.00,
            ps_ratio: 6.31,
            pe_ratio: 25.0, // estimated
            shares_outstanding: 100.0,
            stock_price: 26.90,
        }
    }

    /// Check every field is finite and non-negative, and that the
    /// per-share and per-dollar-of-S&M divisors are positive
    pub fn validate(&self) -> Result<(), EngineError> {
        let fields = [
            ("revenue", self.revenue),
            ("revenue_prev_year", self.revenue_prev_year),
            ("cost_of_revenue", self.cost_of_revenue),
            ("sales_and_marketing", self.sales_and_marketing),
            ("research_and_development", self.research_and_development),
            ("general_and_admin", self.general_and_admin),
            ("other_expenses", self.other_expenses),
            ("ps_ratio", self.ps_ratio),
            ("pe_ratio", self.pe_ratio),
            ("shares_outstanding", self.shares_outstanding),
            ("stock_price", self.stock_price),
        ];

        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidSnapshot { field, value });
            }
        }

        // Growth is a delta and may be negative
        if !self.revenue_growth.is_finite() {
            return Err(EngineError::InvalidSnapshot {
                field: "revenue_growth",
                value: self.revenue_growth,
            });
        }

        if self.shares_outstanding <= 0.0 {
            return Err(EngineError::InvalidSnapshot {
                field: "shares_outstanding",
                value: self.shares_outstanding,
            });
        }

        if self.sales_and_marketing <= 0.0 {
            return Err(EngineError::InvalidSnapshot {
                field: "sales_and_marketing",
                value: self.sales_and_marketing,
            });
        }

        Ok(())
    }

    /// Commercial Ratio as currently reported: revenue growth / S&M
    pub fn current_ratio(&self) -> f64 {
        self.revenue_growth / self.sales_and_marketing
    }

    /// Year-over-year revenue growth as % of prior-year revenue
    pub fn yoy_growth_pct(&self) -> Option<f64> {
        percent_of(self.revenue_growth, self.revenue_prev_year)
    }

    /// Sales & marketing expense as % of revenue
    pub fn sales_and_marketing_pct_of_revenue(&self) -> Option<f64> {
        percent_of(self.sales_and_marketing, self.revenue)
    }

    pub fn gross_margin(&self) -> f64 {
        self.revenue - self.cost_of_revenue
    }

    /// R&D + G&A + other (everything in opex except S&M)
    pub fn other_operating_expenses(&self) -> f64 {
        self.research_and_development + self.general_and_admin + self.other_expenses
    }
}

impl Default for FinancialSnapshot {
    fn default() -> Self {
        Self::default_company()
    }
}

/// `part / whole` as a percentage; `None` when the base is zero
pub fn percent_of(part: f64, whole: f64) -> Option<f64> {
    if whole == 0.0 {
        None
    } else {
        Some(part / whole * 100.0)
    }
}

/// Figures derived once from the snapshot and never mutated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedBaseline {
    /// S&M + R&D + G&A + other
    pub total_operating_expenses: f64,

    /// Revenue - cost of revenue - operating expenses
    pub ebitda: f64,

    /// Stock price * shares outstanding
    pub market_cap: f64,

    pub ebitda_per_share: f64,
}

impl DerivedBaseline {
    /// Derive the baseline, rejecting snapshots whose market cap or EBITDA
    /// would make relative impacts undefined
    pub fn from_snapshot(snapshot: &FinancialSnapshot) -> Result<Self, EngineError> {
        snapshot.validate()?;

        let total_operating_expenses = snapshot.sales_and_marketing + snapshot.other_operating_expenses();
        let ebitda = snapshot.revenue - snapshot.cost_of_revenue - total_operating_expenses;
        let market_cap = snapshot.stock_price * snapshot.shares_outstanding;

        if market_cap == 0.0 {
            return Err(EngineError::DegenerateBaseline { metric: "market cap" });
        }
        if ebitda == 0.0 {
            return Err(EngineError::DegenerateBaseline { metric: "EBITDA" });
        }

        let baseline = Self {
            total_operating_expenses,
            ebitda,
            market_cap,
            ebitda_per_share: ebitda / snapshot.shares_outstanding,
        };

        debug!(
            "Derived baseline: opex={:.2} ebitda={:.2} market_cap={:.2}",
            baseline.total_operating_expenses, baseline.ebitda, baseline.market_cap
        );

        Ok(baseline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_company_current_ratio() {
        let snapshot = FinancialSnapshot::default_company();
        let ratio = snapshot.current_ratio();

        assert_abs_diff_eq!(ratio, 86.58 / 169.19, epsilon = 1e-12);
        assert_eq!(format!("{:.2}", ratio), "0.51");
    }

    #[test]
    fn test_baseline_from_default_company() {
        let snapshot = FinancialSnapshot::default_company();
        let baseline = DerivedBaseline::from_snapshot(&snapshot).unwrap();

        assert_abs_diff_eq!(baseline.total_operating_expenses, 315.29, epsilon = 1e-9);
        assert_abs_diff_eq!(baseline.ebitda, 2.29, epsilon = 1e-9);
        assert_abs_diff_eq!(baseline.market_cap, 2690.0, epsilon = 1e-9);
        assert_abs_diff_eq!(baseline.ebitda_per_share, 0.0229, epsilon = 1e-9);
    }

    #[test]
    fn test_gross_margin_and_other_opex() {
        let snapshot = FinancialSnapshot::default_company();
        assert_abs_diff_eq!(snapshot.gross_margin(), 317.58, epsilon = 1e-9);
        assert_abs_diff_eq!(snapshot.other_operating_expenses(), 146.10, epsilon = 1e-9);
    }

    #[test]
    fn test_key_metrics_of_default_company() {
        let snapshot = FinancialSnapshot::default_company();

        assert_abs_diff_eq!(snapshot.yoy_growth_pct().unwrap(), 86.58 / 340.38 * 100.0, epsilon = 1e-12);
        assert_eq!(format!("{:.2}", snapshot.yoy_growth_pct().unwrap()), "25.44");

        let sm_pct = snapshot.sales_and_marketing_pct_of_revenue().unwrap();
        assert_abs_diff_eq!(sm_pct, 169.19 / 426.96 * 100.0, epsilon = 1e-12);
        assert_eq!(format!("{:.2}", sm_pct), "39.63");
    }

    #[test]
    fn test_key_metrics_follow_prior_year_revenue() {
        let snapshot = FinancialSnapshot {
            revenue_prev_year: 173.16,
            ..FinancialSnapshot::default_company()
        };
        assert_abs_diff_eq!(snapshot.yoy_growth_pct().unwrap(), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_key_metrics_undefined_on_zero_base() {
        let snapshot = FinancialSnapshot {
            revenue_prev_year: 0.0,
            revenue: 0.0,
            ..FinancialSnapshot::default_company()
        };
        assert_eq!(snapshot.yoy_growth_pct(), None);
        assert_eq!(snapshot.sales_and_marketing_pct_of_revenue(), None);
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(1.0, 4.0), Some(25.0));
        assert_eq!(percent_of(-3.0, 0.0), None);
    }

    #[test]
    fn test_validate_rejects_negative_money() {
        let snapshot = FinancialSnapshot {
            revenue: -5.0,
            ..FinancialSnapshot::default_company()
        };

        assert_eq!(
            snapshot.validate(),
            Err(EngineError::InvalidSnapshot { field: "revenue", value: -5.0 })
        );
    }

    #[test]
    fn test_validate_allows_negative_growth() {
        let snapshot = FinancialSnapshot {
            revenue_growth: -12.0,
            ..FinancialSnapshot::default_company()
        };
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_shares_and_nan() {
        let no_shares = FinancialSnapshot {
            shares_outstanding: 0.0,
            ..FinancialSnapshot::default_company()
        };
        assert!(matches!(
            no_shares.validate(),
            Err(EngineError::InvalidSnapshot { field: "shares_outstanding", .. })
        ));

        let nan_growth = FinancialSnapshot {
            revenue_growth: f64::NAN,
            ..FinancialSnapshot::default_company()
        };
        assert!(matches!(
            nan_growth.validate(),
            Err(EngineError::InvalidSnapshot { field: "revenue_growth", .. })
        ));
    }

    #[test]
    fn test_zero_market_cap_is_degenerate() {
        let snapshot = FinancialSnapshot {
            stock_price: 0.0,
            ..FinancialSnapshot::default_company()
        };

        assert_eq!(
            DerivedBaseline::from_snapshot(&snapshot),
            Err(EngineError::DegenerateBaseline { metric: "market cap" })
        );
    }

    #[test]
    fn test_zero_ebitda_is_degenerate() {
        // Revenue exactly covers cost of revenue and opex
        let snapshot = FinancialSnapshot {
            revenue: 100.0,
            cost_of_revenue: 40.0,
            sales_and_marketing: 30.0,
            research_and_development: 20.0,
            general_and_admin: 10.0,
            other_expenses: 0.0,
            ..FinancialSnapshot::default_company()
        };

        assert_eq!(
            DerivedBaseline::from_snapshot(&snapshot),
            Err(EngineError::DegenerateBaseline { metric: "EBITDA" })
        );
    }
}
