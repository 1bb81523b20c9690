//! Core projection engine mapping a target Commercial Ratio to market impact

use log::trace;

use crate::error::EngineError;
use crate::financials::{percent_of, DerivedBaseline, FinancialSnapshot};
use super::result::{LineItem, OperatingChange, ProjectedFinancials, ScenarioProjection};
use super::state::{ScenarioInput, ScenarioMode, MIN_TARGET_RATIO};

/// Project the impact of moving the Commercial Ratio to `input.target_ratio`.
///
/// Pure and deterministic. The ratio is not range-checked here; callers that
/// take user input should go through [`ScenarioInput::clamped`]. A zero ratio
/// in cost-reduction mode is rejected with [`EngineError::DivisionByZero`].
pub fn compute_projection(
    snapshot: &FinancialSnapshot,
    baseline: &DerivedBaseline,
    input: &ScenarioInput,
) -> Result<ScenarioProjection, EngineError> {
    let target_ratio = input.target_ratio;
    if !target_ratio.is_finite() {
        return Err(EngineError::NonFiniteRatio { target_ratio });
    }

    // Operating delta and the multiple that capitalizes it
    let (change, multiple) = match input.mode {
        ScenarioMode::RevenueGrowth => {
            let new_revenue_growth = target_ratio * snapshot.sales_and_marketing;
            let additional_revenue = new_revenue_growth - snapshot.revenue_growth;
            (
                OperatingChange::RevenueGrowth { new_revenue_growth, additional_revenue },
                snapshot.ps_ratio,
            )
        }
        ScenarioMode::CostReduction => {
            if target_ratio.abs() < MIN_TARGET_RATIO {
                return Err(EngineError::DivisionByZero { target_ratio });
            }
            let new_sales_and_marketing = snapshot.revenue_growth / target_ratio;
            let cost_reduction = snapshot.sales_and_marketing - new_sales_and_marketing;
            (
                OperatingChange::CostReduction { new_sales_and_marketing, cost_reduction },
                snapshot.pe_ratio,
            )
        }
    };

    let delta = change.delta();
    let market_cap_impact = delta * multiple;
    let percentage_growth = market_cap_impact / baseline.market_cap * 100.0;
    let eps_impact = delta / snapshot.shares_outstanding;

    let operating_delta_pct = match change {
        OperatingChange::RevenueGrowth { .. } => percent_of(delta, snapshot.revenue_growth),
        OperatingChange::CostReduction { .. } => percent_of(delta, snapshot.sales_and_marketing),
    };

    let projection = ScenarioProjection {
        target_ratio,
        mode: input.mode,
        change,
        market_cap_impact,
        new_market_cap: baseline.market_cap + market_cap_impact,
        percentage_growth,
        eps_impact,
        projected_stock_price: snapshot.stock_price * (1.0 + percentage_growth / 100.0),
        eps_impact_pct: eps_impact / baseline.ebitda_per_share * 100.0,
        ebitda_impact_pct: delta / baseline.ebitda * 100.0,
        operating_delta_pct,
        financials: project_financials(snapshot, baseline, &change),
    };

    trace!(
        "Projected {} at CR {:.2}: delta={:.4} market_cap_impact={:.4}",
        input.mode, target_ratio, delta, market_cap_impact
    );

    Ok(projection)
}

/// Detailed financials: revenue-side changes flow through revenue, gross
/// margin and EBITDA; cost-side changes flow through S&M and EBITDA
fn project_financials(
    snapshot: &FinancialSnapshot,
    baseline: &DerivedBaseline,
    change: &OperatingChange,
) -> ProjectedFinancials {
    let (revenue_change, sm_change) = match *change {
        OperatingChange::RevenueGrowth { additional_revenue, .. } => (additional_revenue, 0.0),
        OperatingChange::CostReduction { cost_reduction, .. } => (0.0, -cost_reduction),
    };

    ProjectedFinancials {
        revenue: LineItem::shifted(snapshot.revenue, revenue_change),
        cost_of_revenue: LineItem::unchanged(snapshot.cost_of_revenue),
        gross_margin: LineItem::shifted(snapshot.gross_margin(), revenue_change),
        sales_and_marketing: LineItem::shifted(snapshot.sales_and_marketing, sm_change),
        other_operating_expenses: LineItem::unchanged(snapshot.other_operating_expenses()),
        ebitda: LineItem::shifted(baseline.ebitda, change.delta()),
    }
}

/// Projection engine bound to one company snapshot
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    snapshot: FinancialSnapshot,
    baseline: DerivedBaseline,
}

impl ProjectionEngine {
    /// Validate the snapshot and derive its baseline
    pub fn new(snapshot: FinancialSnapshot) -> Result<Self, EngineError> {
        let baseline = DerivedBaseline::from_snapshot(&snapshot)?;
        Ok(Self { snapshot, baseline })
    }

    /// Run the projection for one scenario input
    pub fn project(&self, input: &ScenarioInput) -> Result<ScenarioProjection, EngineError> {
        compute_projection(&self.snapshot, &self.baseline, input)
    }

    pub fn snapshot(&self) -> &FinancialSnapshot {
        &self.snapshot
    }

    pub fn baseline(&self) -> &DerivedBaseline {
        &self.baseline
    }
}
