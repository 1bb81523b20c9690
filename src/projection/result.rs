//! Projection output structures

use serde::{Deserialize, Serialize};

use super::state::ScenarioMode;

/// The operating change implied by the target ratio
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OperatingChange {
    /// S&M held constant, revenue growth rises to target * S&M
    RevenueGrowth {
        new_revenue_growth: f64,
        /// Negative when the target is below the current ratio
        additional_revenue: f64,
    },
    /// Revenue growth held constant, S&M falls to growth / target
    CostReduction {
        new_sales_and_marketing: f64,
        /// Negative when the target is below the current ratio
        cost_reduction: f64,
    },
}

impl OperatingChange {
    /// Additional revenue or cost reduction, whichever applies
    pub fn delta(&self) -> f64 {
        match self {
            OperatingChange::RevenueGrowth { additional_revenue, .. } => *additional_revenue,
            OperatingChange::CostReduction { cost_reduction, .. } => *cost_reduction,
        }
    }
}

/// One line of the detailed financials table ($M)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub current: f64,
    pub projected: f64,
    pub change: f64,
}

impl LineItem {
    pub fn unchanged(current: f64) -> Self {
        Self::shifted(current, 0.0)
    }

    pub fn shifted(current: f64, change: f64) -> Self {
        Self {
            current,
            projected: current + change,
            change,
        }
    }
}

/// Current vs projected income statement lines
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedFinancials {
    pub revenue: LineItem,
    pub cost_of_revenue: LineItem,
    pub gross_margin: LineItem,
    pub sales_and_marketing: LineItem,
    /// R&D + G&A + other
    pub other_operating_expenses: LineItem,
    pub ebitda: LineItem,
}

/// Everything derived from one scenario input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioProjection {
    pub target_ratio: f64,
    pub mode: ScenarioMode,
    pub change: OperatingChange,

    // Market impact
    pub market_cap_impact: f64,
    pub new_market_cap: f64,
    /// Market cap impact as % of baseline market cap
    pub percentage_growth: f64,
    /// Operating delta per share ($)
    pub eps_impact: f64,

    // Investor metrics
    /// Share price scaled by the market cap growth
    pub projected_stock_price: f64,
    /// EPS impact as % of EBITDA per share
    pub eps_impact_pct: f64,
    /// Operating delta as % of baseline EBITDA
    pub ebitda_impact_pct: f64,
    /// Additional revenue as % of current growth, or cost reduction as % of
    /// current S&M; `None` when current growth is zero
    pub operating_delta_pct: Option<f64>,

    pub financials: ProjectedFinancials,
}

impl ScenarioProjection {
    /// Additional revenue or cost reduction, whichever the mode produced
    pub fn operating_delta(&self) -> f64 {
        self.change.delta()
    }
}
