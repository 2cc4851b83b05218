//! Density, the 75" height rule, and freight classification results.

use crate::class::FreightClass;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cubic inches per cubic foot.
const CUBIC_INCHES_PER_CUBIC_FOOT: f64 = 1728.0;

/// Any pallet at or above this actual height is billed as if it were
/// [`PENALTY_CALCULATION_HEIGHT`] tall.
pub const HEIGHT_PENALTY_THRESHOLD: f64 = 75.0;

/// Billing height used when the 75" rule applies.
pub const PENALTY_CALCULATION_HEIGHT: f64 = 96.0;

/// Carrier divisor for dimensional weight (FedEx/UPS domestic).
pub const DIMENSIONAL_WEIGHT_DIVISOR: f64 = 139.0;

/// Density in pounds per cubic foot.
///
/// Returns 0 for non-positive volumes.
pub fn density(weight_lbs: f64, volume_cubic_inches: f64) -> f64 {
    if volume_cubic_inches <= 0.0 {
        return 0.0;
    }
    weight_lbs / (volume_cubic_inches / CUBIC_INCHES_PER_CUBIC_FOOT)
}

/// Dimensional weight in pounds for parcel carriers.
pub fn dimensional_weight(length: f64, width: f64, height: f64) -> f64 {
    length * width * height / DIMENSIONAL_WEIGHT_DIVISOR
}

/// Result of classifying one pallet under NMFC tariff rules.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FreightResult {
    /// The tariff class derived from the billing density.
    pub freight_class: FreightClass,

    /// Density used for the class lookup (after the 75" rule).
    pub density: f64,

    /// Density from the actual dimensions.
    pub actual_density: f64,

    /// Volume from the actual dimensions, in cubic feet.
    pub actual_volume_cf: f64,

    /// Volume used for the class lookup, in cubic feet.
    pub calculated_volume_cf: f64,

    /// Whether the 75" height penalty was applied.
    pub penalty_applied: bool,

    /// Explanation of the calculation.
    pub notes: String,
}

/// Classifies a pallet from its weight and envelope dimensions.
///
/// Applies the 75" rule: a pallet whose actual height is at or above
/// [`HEIGHT_PENALTY_THRESHOLD`] is billed at a calculated height of
/// [`PENALTY_CALCULATION_HEIGHT`], which lowers the density and raises the
/// class for tall loads.
pub fn classify(
    weight_lbs: f64,
    length_inches: f64,
    width_inches: f64,
    actual_height_inches: f64,
) -> FreightResult {
    let actual_volume_in3 = length_inches * width_inches * actual_height_inches;
    let actual_volume_cf = actual_volume_in3 / CUBIC_INCHES_PER_CUBIC_FOOT;
    let actual_density = density(weight_lbs, actual_volume_in3);

    let penalty_applied = actual_height_inches >= HEIGHT_PENALTY_THRESHOLD;

    let (calculated_volume_cf, calc_density, notes) = if penalty_applied {
        let calc_volume_in3 = length_inches * width_inches * PENALTY_CALCULATION_HEIGHT;
        let calc_volume_cf = calc_volume_in3 / CUBIC_INCHES_PER_CUBIC_FOOT;
        let calc_density = density(weight_lbs, calc_volume_in3);
        let notes = format!(
            "75\" rule applied: height {:.0}\" >= {:.0}\", billed at {:.0}\" \
             ({:.1} cu ft actual, {:.1} cu ft for class calculation)",
            actual_height_inches,
            HEIGHT_PENALTY_THRESHOLD,
            PENALTY_CALCULATION_HEIGHT,
            actual_volume_cf,
            calc_volume_cf,
        );
        (calc_volume_cf, calc_density, notes)
    } else {
        (
            actual_volume_cf,
            actual_density,
            "Standard calculation - no height penalty".to_string(),
        )
    };

    FreightResult {
        freight_class: FreightClass::for_density(calc_density),
        density: calc_density,
        actual_density,
        actual_volume_cf,
        calculated_volume_cf,
        penalty_applied,
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_density() {
        assert_relative_eq!(density(370.0, 48.0 * 40.0 * 74.0), 4.5, epsilon = 0.001);
        assert_relative_eq!(density(100.0, 0.0), 0.0);
    }

    #[test]
    fn test_dimensional_weight() {
        assert_relative_eq!(dimensional_weight(20.0, 20.0, 20.0), 8000.0 / 139.0);
    }

    #[test]
    fn test_below_threshold_uses_actual_height() {
        let result = classify(370.0, 48.0, 40.0, 74.0);
        assert!(!result.penalty_applied);
        assert_relative_eq!(result.calculated_volume_cf, result.actual_volume_cf);
        assert_relative_eq!(result.density, 4.5, epsilon = 0.001);
        assert_eq!(result.freight_class, FreightClass::C250);
    }

    #[test]
    fn test_penalty_at_76_inches() {
        let result = classify(370.0, 48.0, 40.0, 76.0);
        assert!(result.penalty_applied);
        assert_relative_eq!(result.calculated_volume_cf, 48.0 * 40.0 * 96.0 / 1728.0);
        assert_relative_eq!(result.density, 370.0 / (48.0 * 40.0 * 96.0 / 1728.0), epsilon = 1e-9);
        assert_eq!(result.freight_class, FreightClass::C300);

        // Penalty raises the class relative to the 74" case at equal weight.
        let without = classify(370.0, 48.0, 40.0, 74.0);
        assert!(result.freight_class.rating() > without.freight_class.rating());
    }

    #[test]
    fn test_penalty_idempotent_over_height_range() {
        // Between 75" and 96" the billed density depends only on weight and
        // footprint, not on the exact actual height.
        let reference = classify(500.0, 48.0, 40.0, 75.0);
        for height in [75.0, 78.5, 84.0, 90.0, 96.0] {
            let result = classify(500.0, 48.0, 40.0, height);
            assert!(result.penalty_applied);
            assert_relative_eq!(result.density, reference.density, epsilon = 1e-9);
            assert_eq!(result.freight_class, reference.freight_class);
        }
    }

    #[test]
    fn test_notes_mention_both_volumes() {
        let result = classify(370.0, 48.0, 40.0, 76.0);
        assert!(result.notes.contains("75\" rule"));
        assert!(result.notes.contains("cu ft actual"));
        assert!(result.notes.contains("for class calculation"));
    }
}
