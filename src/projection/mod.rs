//! Scenario input, projection engine and projection output

mod state;
mod engine;
mod result;

pub use state::{
    ScenarioInput, ScenarioMode, clamp_ratio, snap_ratio,
    DEFAULT_TARGET_RATIO, MAX_SELECTABLE_RATIO, MIN_SELECTABLE_RATIO, MIN_TARGET_RATIO,
    RATIO_SCALE, RATIO_STEP,
};
pub use engine::{ProjectionEngine, compute_projection};
pub use result::{LineItem, OperatingChange, ProjectedFinancials, ScenarioProjection};
