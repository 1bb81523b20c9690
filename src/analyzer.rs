//! Host-owned analyzer state
//!
//! Holds the snapshot, its baseline, the current scenario input and the most
//! recent projection. Every mutation recomputes explicitly; there is no
//! subscription or deferred work.

use log::{debug, warn};
use rayon::prelude::*;

use crate::benchmark::{classify_quartile, classify_zone, BenchmarkPosition, Quartile, Zone};
use crate::error::EngineError;
use crate::financials::{DerivedBaseline, FinancialSnapshot};
use crate::projection::{
    compute_projection, snap_ratio, ScenarioInput, ScenarioMode, ScenarioProjection,
    MAX_SELECTABLE_RATIO, MIN_SELECTABLE_RATIO, RATIO_STEP,
};

/// Analyzer state for one company
///
/// # Example
/// ```
/// use commercial_ratio::{Analyzer, ScenarioMode};
///
/// let mut analyzer = Analyzer::default_company().unwrap();
/// analyzer.set_target_ratio(1.0);
/// let impact = analyzer.projection().unwrap().market_cap_impact;
/// assert!(impact > 0.0);
///
/// analyzer.set_mode(ScenarioMode::CostReduction);
/// analyzer.set_target_ratio(0.0);
/// assert!(analyzer.projection().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer {
    snapshot: FinancialSnapshot,
    baseline: DerivedBaseline,
    input: ScenarioInput,
    /// Latest result only; overwritten on every recompute
    latest: Result<ScenarioProjection, EngineError>,
}

impl Analyzer {
    /// Create an analyzer at the default input (CR 0.51, revenue growth)
    pub fn new(snapshot: FinancialSnapshot) -> Result<Self, EngineError> {
        Self::with_input(snapshot, ScenarioInput::default())
    }

    /// Create an analyzer at a specific input
    pub fn with_input(snapshot: FinancialSnapshot, input: ScenarioInput) -> Result<Self, EngineError> {
        let baseline = DerivedBaseline::from_snapshot(&snapshot)?;
        let latest = compute_projection(&snapshot, &baseline, &input);
        Ok(Self { snapshot, baseline, input, latest })
    }

    /// Analyzer for the built-in company
    pub fn default_company() -> Result<Self, EngineError> {
        Self::new(FinancialSnapshot::default_company())
    }

    /// Move the slider: clamp to [0, 2] on the 0.01 grid, then recompute
    pub fn set_target_ratio(&mut self, raw_ratio: f64) {
        self.input = ScenarioInput::clamped(raw_ratio, self.input.mode);
        self.recompute();
    }

    /// Flip the scenario toggle, then recompute
    pub fn set_mode(&mut self, mode: ScenarioMode) {
        self.input.mode = mode;
        self.recompute();
    }

    /// Fully recompute the projection from the current input
    pub fn recompute(&mut self) {
        self.latest = compute_projection(&self.snapshot, &self.baseline, &self.input);
        match &self.latest {
            Ok(p) => debug!(
                "Recomputed {} at CR {:.2}: market cap impact {:.2}",
                self.input.mode, self.input.target_ratio, p.market_cap_impact
            ),
            Err(e) => debug!("Projection undefined at CR {:.2}: {}", self.input.target_ratio, e),
        }
    }

    /// Latest projection, or the error that made it undefined
    pub fn projection(&self) -> Result<&ScenarioProjection, &EngineError> {
        self.latest.as_ref()
    }

    pub fn input(&self) -> &ScenarioInput {
        &self.input
    }

    pub fn snapshot(&self) -> &FinancialSnapshot {
        &self.snapshot
    }

    pub fn baseline(&self) -> &DerivedBaseline {
        &self.baseline
    }

    /// The company's reported Commercial Ratio
    pub fn current_ratio(&self) -> f64 {
        self.snapshot.current_ratio()
    }

    pub fn zone(&self) -> Zone {
        classify_zone(self.input.target_ratio)
    }

    pub fn benchmark(&self) -> BenchmarkPosition {
        BenchmarkPosition::of(self.input.target_ratio)
    }

    /// Project every grid point of the selectable range at `step`
    ///
    /// Points run in parallel; failures (e.g. 0.0 in cost mode) are kept
    /// in their slot rather than aborting the sweep.
    pub fn sweep(&self, mode: ScenarioMode, step: f64) -> Vec<SweepPoint> {
        let ratios = sweep_grid(step);
        debug!("Sweeping {} points in {} mode", ratios.len(), mode);

        ratios
            .par_iter()
            .map(|&target_ratio| {
                let input = ScenarioInput { target_ratio, mode };
                SweepPoint {
                    target_ratio,
                    zone: classify_zone(target_ratio),
                    quartile: classify_quartile(target_ratio),
                    outcome: compute_projection(&self.snapshot, &self.baseline, &input),
                }
            })
            .collect()
    }
}

/// One point of a ratio sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub target_ratio: f64,
    pub zone: Zone,
    pub quartile: Quartile,
    pub outcome: Result<ScenarioProjection, EngineError>,
}

/// Grid over the selectable range, each point snapped to the slider grid.
/// Steps finer than the slider resolution (or non-finite) use the resolution.
pub fn sweep_grid(step: f64) -> Vec<f64> {
    let step = if step.is_finite() && step >= RATIO_STEP {
        step
    } else {
        warn!("Sweep step {} finer than slider resolution; using {}", step, RATIO_STEP);
        RATIO_STEP
    };
    let span = MAX_SELECTABLE_RATIO - MIN_SELECTABLE_RATIO;
    // Small slack so 2.0 / 0.01 lands on 200 rather than 199.999...
    let points = (span / step + 1e-9).floor() as usize;

    (0..=points)
        .map(|i| snap_ratio(MIN_SELECTABLE_RATIO + i as f64 * step))
        .collect()
}
