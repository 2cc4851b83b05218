//! Stability report types.

use palletizer_core::Warning;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Letter grade for pallet stability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Grade {
    /// Excellent; ship with confidence.
    A,
    /// Good; normal shipping.
    B,
    /// Acceptable; monitor.
    C,
    /// Poor; needs attention.
    D,
    /// Dangerous; do not ship.
    F,
}

impl Grade {
    /// Human-readable description of the grade.
    pub fn description(&self) -> &'static str {
        match self {
            Grade::A => "Excellent",
            Grade::B => "Good",
            Grade::C => "Acceptable",
            Grade::D => "Poor",
            Grade::F => "Dangerous",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// Band for the height to narrow-footprint ratio (the 3:1 guideline).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RatioBand {
    /// Ratio at or below 2.0.
    Optimal,
    /// Ratio above 2.0, at or below 2.5.
    Acceptable,
    /// Ratio above 2.5, at or below 3.0.
    Concerning,
    /// Ratio above 3.0; fails the 3:1 guideline.
    Unsafe,
}

impl RatioBand {
    /// Classifies a height / min-footprint ratio.
    ///
    /// Band edges close on the safer side: exactly 2.0 is Optimal, exactly
    /// 2.5 is Acceptable, exactly 3.0 is Concerning.
    pub fn for_ratio(ratio: f64) -> RatioBand {
        if ratio <= 2.0 {
            RatioBand::Optimal
        } else if ratio <= 2.5 {
            RatioBand::Acceptable
        } else if ratio <= 3.0 {
            RatioBand::Concerning
        } else {
            RatioBand::Unsafe
        }
    }

    /// Returns true for the Unsafe band.
    pub fn is_unsafe(&self) -> bool {
        *self == RatioBand::Unsafe
    }
}

/// Stability analysis for one pallet configuration.
///
/// Derived and read-only; computed fresh per configuration, never cached.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StabilityReport {
    /// Center of gravity height in inches from the ground.
    pub cog_height: f64,

    /// COG as a percentage of total height, in [0, 100].
    pub cog_percentage: f64,

    /// Percentage of product weight in the bottom half of the stack.
    pub bottom_weight_pct: f64,

    /// Total height / min(footprint length, footprint width).
    pub ratio: f64,

    /// Band for the ratio check.
    pub ratio_band: RatioBand,

    /// COG above 60% of total height.
    pub top_heavy: bool,

    /// Letter grade from COG and weight distribution.
    pub grade: Grade,

    /// Warnings produced by the analysis.
    pub warnings: Vec<Warning>,

    /// Actionable suggestions (reorientation, restacking).
    pub suggestions: Vec<String>,
}

impl StabilityReport {
    /// True only for grades A-C with the ratio check not Unsafe.
    pub fn is_safe_to_ship(&self) -> bool {
        matches!(self.grade, Grade::A | Grade::B | Grade::C) && !self.ratio_band.is_unsafe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_band_edges() {
        // Edges close at the safer side; exactly 3.0 is not unsafe.
        assert_eq!(RatioBand::for_ratio(1.2), RatioBand::Optimal);
        assert_eq!(RatioBand::for_ratio(2.0), RatioBand::Optimal);
        assert_eq!(RatioBand::for_ratio(2.1), RatioBand::Acceptable);
        assert_eq!(RatioBand::for_ratio(2.5), RatioBand::Acceptable);
        assert_eq!(RatioBand::for_ratio(2.7), RatioBand::Concerning);
        assert_eq!(RatioBand::for_ratio(3.0), RatioBand::Concerning);
        assert!(RatioBand::for_ratio(3.0001).is_unsafe());
    }

    #[test]
    fn test_grade_ordering() {
        assert!(Grade::A < Grade::B);
        assert!(Grade::D < Grade::F);
        assert_eq!(Grade::A.to_string(), "A");
        assert_eq!(Grade::F.description(), "Dangerous");
    }
}
