//! Commercial Ratio Analyzer - projects the investor impact of sales & marketing efficiency
//!
//! The Commercial Ratio (CR) is revenue growth divided by sales & marketing
//! expense. This library provides:
//! - A fixed company snapshot and its derived baseline (EBITDA, market cap)
//! - A pure projection engine for revenue-growth and cost-reduction scenarios
//! - Zone and industry quartile classification of a ratio
//! - A host-owned analyzer state with explicit recomputation and parallel sweeps

pub mod error;
pub mod financials;
pub mod projection;
pub mod benchmark;
pub mod analyzer;

// Re-export commonly used types
pub use error::{EngineError, SnapshotError};
pub use financials::{FinancialSnapshot, DerivedBaseline};
pub use projection::{
    compute_projection, ProjectionEngine, ScenarioInput, ScenarioMode, ScenarioProjection,
    OperatingChange,
};
pub use benchmark::{classify_quartile, classify_zone, BenchmarkPosition, Quartile, Zone};
pub use analyzer::{Analyzer, SweepPoint};
