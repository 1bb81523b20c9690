//! Zone and industry quartile classification of a Commercial Ratio

use serde::{Deserialize, Serialize};
use std::fmt;

/// Below this ratio S&M spend is not converting into growth
pub const UNSUSTAINABLE_BELOW: f64 = 0.75;

/// Above this ratio growth is being left on the table
pub const UNDERINVESTING_ABOVE: f64 = 1.25;

/// Industry quartile breakpoints; each is the inclusive lower bound of the next band
pub const QUARTILE_BREAKPOINTS: [f64; 3] = [0.40, 0.85, 1.20];

/// Efficiency zone of a Commercial Ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Zone {
    Unsustainable,
    Balanced,
    Underinvesting,
}

impl Zone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Unsustainable => "unsustainable",
            Zone::Balanced => "balanced",
            Zone::Underinvesting => "underinvesting",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position against industry benchmarks, worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quartile {
    Bottom,
    Second,
    Third,
    Top,
}

impl Quartile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quartile::Bottom => "bottom quartile",
            Quartile::Second => "second quartile",
            Quartile::Third => "third quartile",
            Quartile::Top => "top quartile",
        }
    }
}

impl fmt::Display for Quartile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a ratio into its efficiency zone. Both bounds belong to `Balanced`.
pub fn classify_zone(ratio: f64) -> Zone {
    if ratio < UNSUSTAINABLE_BELOW {
        Zone::Unsustainable
    } else if ratio > UNDERINVESTING_ABOVE {
        Zone::Underinvesting
    } else {
        Zone::Balanced
    }
}

/// Classify a ratio against the industry quartile breakpoints
pub fn classify_quartile(ratio: f64) -> Quartile {
    let [second, third, top] = QUARTILE_BREAKPOINTS;
    if ratio < second {
        Quartile::Bottom
    } else if ratio < third {
        Quartile::Second
    } else if ratio < top {
        Quartile::Third
    } else {
        Quartile::Top
    }
}

/// Zone and quartile for one ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkPosition {
    pub zone: Zone,
    pub quartile: Quartile,
}

impl BenchmarkPosition {
    pub fn of(ratio: f64) -> Self {
        Self {
            zone: classify_zone(ratio),
            quartile: classify_quartile(ratio),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_boundaries() {
        assert_eq!(classify_zone(0.7499), Zone::Unsustainable);
        assert_eq!(classify_zone(0.75), Zone::Balanced);
        assert_eq!(classify_zone(1.25), Zone::Balanced);
        assert_eq!(classify_zone(1.2501), Zone::Underinvesting);
    }

    #[test]
    fn test_zone_is_total() {
        assert_eq!(classify_zone(-3.0), Zone::Unsustainable);
        assert_eq!(classify_zone(f64::INFINITY), Zone::Underinvesting);
        assert_eq!(classify_zone(f64::NEG_INFINITY), Zone::Unsustainable);
        // NaN fails both comparisons
        assert_eq!(classify_zone(f64::NAN), Zone::Balanced);
    }

    #[test]
    fn test_quartile_boundaries() {
        assert_eq!(classify_quartile(0.39), Quartile::Bottom);
        assert_eq!(classify_quartile(0.40), Quartile::Second);
        assert_eq!(classify_quartile(0.84), Quartile::Second);
        assert_eq!(classify_quartile(0.85), Quartile::Third);
        assert_eq!(classify_quartile(1.19), Quartile::Third);
        assert_eq!(classify_quartile(1.20), Quartile::Top);
        assert_eq!(classify_quartile(2.0), Quartile::Top);
    }

    #[test]
    fn test_quartiles_ordered() {
        assert!(Quartile::Bottom < Quartile::Second);
        assert!(Quartile::Third < Quartile::Top);
        assert!(classify_quartile(0.2) < classify_quartile(1.5));
    }

    #[test]
    fn test_default_company_position() {
        // Reported ratio of 0.51
        let position = BenchmarkPosition::of(0.51);
        assert_eq!(position.zone, Zone::Unsustainable);
        assert_eq!(position.quartile, Quartile::Second);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Zone::Underinvesting.to_string(), "underinvesting");
        assert_eq!(Quartile::Top.to_string(), "top quartile");
    }
}
