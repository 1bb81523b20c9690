//! Company financial snapshot, derived baseline and snapshot loading

mod data;
pub mod loader;

pub use data::{FinancialSnapshot, DerivedBaseline, percent_of};
pub use loader::{load_snapshot, load_snapshot_from_reader, load_snapshot_or_default};
