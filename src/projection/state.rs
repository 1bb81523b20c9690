//! User-controlled scenario input

use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest selectable target ratio
pub const MIN_SELECTABLE_RATIO: f64 = 0.0;

/// Highest selectable target ratio
pub const MAX_SELECTABLE_RATIO: f64 = 2.0;

/// Slider resolution
pub const RATIO_STEP: f64 = 0.01;

/// Slider positions per unit of ratio (1 / RATIO_STEP)
pub const RATIO_SCALE: f64 = 100.0;

/// Smallest target ratio magnitude accepted in cost-reduction mode
pub const MIN_TARGET_RATIO: f64 = 1e-9;

/// Target ratio the analyzer opens at (the company's reported ratio, rounded)
pub const DEFAULT_TARGET_RATIO: f64 = 0.51;

/// How a change in the Commercial Ratio is realized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScenarioMode {
    /// Same S&M spend, more revenue growth (valued at P/S)
    #[default]
    RevenueGrowth,
    /// Same revenue growth, less S&M spend (valued at P/E)
    CostReduction,
}

impl ScenarioMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioMode::RevenueGrowth => "revenue",
            ScenarioMode::CostReduction => "cost",
        }
    }
}

impl fmt::Display for ScenarioMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "revenue" | "revenue-growth" => Ok(ScenarioMode::RevenueGrowth),
            "cost" | "cost-reduction" => Ok(ScenarioMode::CostReduction),
            other => Err(format!("Unknown scenario mode: {} (expected revenue or cost)", other)),
        }
    }
}

/// Target ratio and scenario mode chosen by the user
///
/// Fields are public so callers can bypass clamping; [`ScenarioInput::clamped`]
/// is the range-checked boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    pub target_ratio: f64,
    pub mode: ScenarioMode,
}

impl ScenarioInput {
    /// Build an input with the ratio clamped to [0, 2] and snapped to the 0.01 grid
    pub fn clamped(raw_ratio: f64, mode: ScenarioMode) -> Self {
        Self {
            target_ratio: clamp_ratio(raw_ratio),
            mode,
        }
    }
}

impl Default for ScenarioInput {
    fn default() -> Self {
        Self {
            target_ratio: DEFAULT_TARGET_RATIO,
            mode: ScenarioMode::default(),
        }
    }
}

/// Clamp a raw ratio into the selectable range and snap it to the slider grid.
/// Non-finite values fall back to the lower bound.
pub fn clamp_ratio(raw: f64) -> f64 {
    if !raw.is_finite() {
        warn!("Non-finite target ratio {}; using {}", raw, MIN_SELECTABLE_RATIO);
        return MIN_SELECTABLE_RATIO;
    }

    let bounded = raw.clamp(MIN_SELECTABLE_RATIO, MAX_SELECTABLE_RATIO);
    if bounded != raw {
        warn!("Target ratio {} outside [{}, {}]; clamped to {}",
            raw, MIN_SELECTABLE_RATIO, MAX_SELECTABLE_RATIO, bounded);
    }

    snap_ratio(bounded)
}

/// Snap a ratio to the slider grid. Dividing the whole position count keeps
/// the result equal to its two-decimal literal (0.35, not 0.35000000000000003).
pub fn snap_ratio(ratio: f64) -> f64 {
    (ratio * RATIO_SCALE).round() / RATIO_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_clamp_ratio() {
        assert_abs_diff_eq!(clamp_ratio(2.5), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(clamp_ratio(-0.3), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(clamp_ratio(1.234), 1.23, epsilon = 1e-12);
        assert_abs_diff_eq!(clamp_ratio(1.0), 1.0, epsilon = 1e-12);
        assert_eq!(clamp_ratio(f64::NAN), 0.0);
        assert_eq!(clamp_ratio(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_snapped_ratios_equal_literals() {
        assert_eq!(clamp_ratio(0.35), 0.35);
        assert_eq!(clamp_ratio(0.349), 0.35);
        assert_eq!(clamp_ratio(1.234), 1.23);
        assert_eq!(snap_ratio(0.07), 0.07);

        // Every slider position is its decimal literal
        for i in 0..=200u32 {
            let literal: f64 = format!("{}.{:02}", i / 100, i % 100).parse().unwrap();
            assert_eq!(snap_ratio(literal), literal);
        }
    }

    #[test]
    fn test_default_input() {
        let input = ScenarioInput::default();
        assert_eq!(input.target_ratio, 0.51);
        assert_eq!(input.mode, ScenarioMode::RevenueGrowth);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("revenue".parse::<ScenarioMode>(), Ok(ScenarioMode::RevenueGrowth));
        assert_eq!("Cost".parse::<ScenarioMode>(), Ok(ScenarioMode::CostReduction));
        assert_eq!("cost-reduction".parse::<ScenarioMode>(), Ok(ScenarioMode::CostReduction));
        assert!("margin".parse::<ScenarioMode>().is_err());
    }

    #[test]
    fn test_mode_display_round_trips() {
        for mode in [ScenarioMode::RevenueGrowth, ScenarioMode::CostReduction] {
            assert_eq!(mode.to_string().parse::<ScenarioMode>(), Ok(mode));
        }
    }
}
