//! Stability analysis of pallet configurations.
//!
//! Implements the industry checks the warehouse floor actually uses: the
//! OSHA 3:1 height-to-base guideline, center-of-gravity height, and the
//! share of weight carried in the bottom half of the stack.

use palletizer_core::{PalletConfiguration, Warning};

use crate::report::{Grade, RatioBand, StabilityReport};

/// COG percentage below this grades A (with sufficient bottom weight).
pub const EXCELLENT_COG_THRESHOLD: f64 = 45.0;
/// COG percentage below this grades B.
pub const GOOD_COG_THRESHOLD: f64 = 50.0;
/// COG percentage below this grades C.
pub const ACCEPTABLE_COG_THRESHOLD: f64 = 55.0;
/// COG percentage below this grades D; above is top-heavy (F).
pub const POOR_COG_THRESHOLD: f64 = 60.0;

/// Bottom-half weight percentage required for grade A.
pub const EXCELLENT_BOTTOM_WEIGHT: f64 = 75.0;
/// Bottom-half weight percentage required for grade B.
pub const GOOD_BOTTOM_WEIGHT: f64 = 65.0;
/// Bottom-half weight percentage required for grade C.
pub const ACCEPTABLE_BOTTOM_WEIGHT: f64 = 60.0;

/// Pallets taller than this draw a height warning, in inches.
pub const TALL_PALLET_HEIGHT: f64 = 84.0;

/// Boxes with a dimension under this are considered flat, in inches.
pub const FLAT_BOX_THRESHOLD: f64 = 6.0;

/// Performs a complete stability analysis of one pallet.
///
/// Pure function of the configuration; an empty pallet reports grade A
/// with all weight in the bottom half.
pub fn analyze(pallet: &PalletConfiguration) -> StabilityReport {
    let ratio = if pallet.min_footprint() > 0.0 {
        pallet.height / pallet.min_footprint()
    } else {
        f64::INFINITY
    };
    let ratio_band = RatioBand::for_ratio(ratio);

    if pallet.box_count() == 0 {
        return StabilityReport {
            cog_height: 0.0,
            cog_percentage: 0.0,
            bottom_weight_pct: 100.0,
            ratio,
            ratio_band,
            top_heavy: false,
            grade: Grade::A,
            warnings: Vec::new(),
            suggestions: Vec::new(),
        };
    }

    let (cog_height, cog_percentage) = center_of_gravity(pallet);
    let bottom_weight_pct = bottom_half_weight(pallet);
    let top_heavy = cog_percentage > POOR_COG_THRESHOLD;
    let grade = grade_for(cog_percentage, bottom_weight_pct);

    let warnings = collect_warnings(pallet, ratio, ratio_band, cog_percentage, bottom_weight_pct, top_heavy);
    let suggestions = collect_suggestions(pallet, grade, top_heavy, bottom_weight_pct);

    StabilityReport {
        cog_height,
        cog_percentage,
        bottom_weight_pct,
        ratio,
        ratio_band,
        top_heavy,
        grade,
        warnings,
        suggestions,
    }
}

/// COG height from layer weights and layer vertical midpoints.
///
/// Returns (height in inches, percentage of total height clamped to
/// [0, 100]).
fn center_of_gravity(pallet: &PalletConfiguration) -> (f64, f64) {
    let total_weight = pallet.product_weight;
    if total_weight <= 0.0 || pallet.height <= 0.0 {
        return (0.0, 0.0);
    }

    let weighted_sum: f64 = pallet
        .layers
        .iter()
        .map(|layer| layer.weight() * layer.midpoint())
        .sum();

    let cog_height = weighted_sum / total_weight;
    let cog_percentage = (cog_height / pallet.height * 100.0).clamp(0.0, 100.0);

    (cog_height, cog_percentage)
}

/// Percentage of product weight whose vertical center sits at or below the
/// half-height line.
fn bottom_half_weight(pallet: &PalletConfiguration) -> f64 {
    let total_weight = pallet.product_weight;
    if total_weight <= 0.0 {
        return 100.0;
    }

    let half = pallet.height / 2.0;
    let bottom_weight: f64 = pallet
        .boxes()
        .filter(|pb| pb.center_z() <= half)
        .map(|pb| pb.weight())
        .sum();

    bottom_weight / total_weight * 100.0
}

/// Assigns the letter grade; the first matching, most favorable band wins.
pub fn grade_for(cog_percentage: f64, bottom_weight_pct: f64) -> Grade {
    if cog_percentage < EXCELLENT_COG_THRESHOLD && bottom_weight_pct >= EXCELLENT_BOTTOM_WEIGHT {
        Grade::A
    } else if cog_percentage < GOOD_COG_THRESHOLD && bottom_weight_pct >= GOOD_BOTTOM_WEIGHT {
        Grade::B
    } else if cog_percentage < ACCEPTABLE_COG_THRESHOLD
        && bottom_weight_pct >= ACCEPTABLE_BOTTOM_WEIGHT
    {
        Grade::C
    } else if cog_percentage < POOR_COG_THRESHOLD {
        Grade::D
    } else {
        Grade::F
    }
}

fn collect_warnings(
    pallet: &PalletConfiguration,
    ratio: f64,
    ratio_band: RatioBand,
    cog_percentage: f64,
    bottom_weight_pct: f64,
    top_heavy: bool,
) -> Vec<Warning> {
    let mut warnings = Vec::new();

    match ratio_band {
        RatioBand::Unsafe => warnings.push(Warning::critical(format!(
            "Height/width ratio {:.2}:1 fails the 3:1 guideline - high risk of tipping",
            ratio
        ))),
        RatioBand::Concerning => warnings.push(Warning::warning(format!(
            "Height/width ratio {:.2}:1 exceeds the recommended 2.5:1",
            ratio
        ))),
        _ => {}
    }

    if top_heavy {
        warnings.push(Warning::critical(format!(
            "Center of gravity at {:.1}% of height (above {:.0}%) - high risk of tipping",
            cog_percentage, POOR_COG_THRESHOLD
        )));
    } else if cog_percentage > ACCEPTABLE_COG_THRESHOLD {
        warnings.push(Warning::warning(format!(
            "Center of gravity at {:.1}% is higher than the recommended {:.0}%",
            cog_percentage, ACCEPTABLE_COG_THRESHOLD
        )));
    }

    if bottom_weight_pct < ACCEPTABLE_BOTTOM_WEIGHT {
        warnings.push(Warning::warning(format!(
            "Only {:.1}% of weight in the bottom half (recommended {:.0}%+)",
            bottom_weight_pct, ACCEPTABLE_BOTTOM_WEIGHT
        )));
    }

    if pallet.height > TALL_PALLET_HEIGHT {
        warnings.push(Warning::warning(format!(
            "Pallet height {:.0}\" exceeds {:.0}\" - consider splitting across more pallets",
            pallet.height, TALL_PALLET_HEIGHT
        )));
    }

    warnings
}

fn collect_suggestions(
    pallet: &PalletConfiguration,
    grade: Grade,
    top_heavy: bool,
    bottom_weight_pct: f64,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    // Flat boxes standing on edge: the smallest dimension is horizontal and
    // the box would sit lower laid flat.
    let on_edge = pallet
        .boxes()
        .filter(|pb| {
            let spec = &pb.instance.spec;
            spec.min_dimension() < FLAT_BOX_THRESHOLD && spec.height() > spec.min_dimension()
        })
        .count();

    if on_edge > 0 {
        suggestions.push(format!(
            "{} flat box(es) standing on edge - lay flat to lower the center of gravity",
            on_edge
        ));
    }

    if top_heavy {
        suggestions.push("Reorganize: place the heaviest boxes in the bottom layers".to_string());
        suggestions.push("Split the load across more pallets to reduce height".to_string());
    } else if bottom_weight_pct < ACCEPTABLE_BOTTOM_WEIGHT {
        suggestions.push("Restack: move heavier boxes into the bottom half".to_string());
    }

    if matches!(grade, Grade::D | Grade::F) && pallet.height > TALL_PALLET_HEIGHT {
        suggestions.push(format!(
            "Reduce height from {:.0}\" to under {:.0}\" for better stability",
            pallet.height, TALL_PALLET_HEIGHT
        ));
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use palletizer_core::{BoxInstance, BoxSpec, Layer, PlacedBox, Rotation};
    use approx::assert_relative_eq;

    /// Builds a pallet of uniform-footprint layers; one entry per layer as
    /// (box height, per-box weights).
    fn stacked_pallet(layers: &[(f64, Vec<f64>)], base_length: f64, base_width: f64) -> PalletConfiguration {
        let mut z = 0.0;
        let mut built = Vec::new();

        for (index, (height, weights)) in layers.iter().enumerate() {
            let boxes = weights
                .iter()
                .enumerate()
                .map(|(i, &w)| {
                    let spec = BoxSpec::new("SKU-1", 42.0, 20.0, *height, w);
                    PlacedBox::new(
                        BoxInstance::new(spec, index * 10 + i),
                        0.0,
                        i as f64 * 20.0,
                        z,
                        Rotation::R0,
                        index,
                    )
                })
                .collect();

            built.push(Layer {
                index,
                z,
                height: *height,
                boxes,
            });
            z += height;
        }

        let product_weight = layers.iter().flat_map(|(_, w)| w.iter()).sum();

        PalletConfiguration {
            pallet_number: 1,
            base_length,
            base_width,
            base_height: 0.0,
            length: base_length,
            width: base_width,
            height: z,
            layers: built,
            product_weight,
            tare_weight: 50.0,
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_low_flat_stack_grades_a() {
        // Six flat boxes in three 6" layers, 80% of the weight in the
        // bottom two layers, on a 48x40 base.
        let pallet = stacked_pallet(
            &[
                (6.0, vec![20.0, 20.0]),
                (6.0, vec![20.0, 20.0]),
                (6.0, vec![10.0, 10.0]),
            ],
            48.0,
            40.0,
        );

        let report = analyze(&pallet);

        // COG = (40*3 + 40*9 + 20*15) / 100 = 7.8" of 18".
        assert_relative_eq!(report.cog_height, 7.8, epsilon = 0.001);
        assert_relative_eq!(report.cog_percentage, 43.333, epsilon = 0.01);
        assert_relative_eq!(report.bottom_weight_pct, 80.0, epsilon = 0.001);
        assert_eq!(report.grade, Grade::A);
        assert_eq!(report.ratio_band, RatioBand::Optimal);
        assert!(report.is_safe_to_ship());
    }

    #[test]
    fn test_top_heavy_stack_fails() {
        // Light bottom, heavy top.
        let pallet = stacked_pallet(
            &[(10.0, vec![10.0]), (10.0, vec![10.0]), (10.0, vec![200.0])],
            48.0,
            40.0,
        );

        let report = analyze(&pallet);

        assert!(report.top_heavy);
        assert_eq!(report.grade, Grade::F);
        assert!(!report.is_safe_to_ship());
        assert!(report.warnings.iter().any(|w| w.is_critical()));
        assert!(!report.suggestions.is_empty());
    }

    #[test]
    fn test_unsafe_ratio_is_critical_independent_of_grade() {
        // Bottom-heavy narrow tower: good COG, terrible aspect ratio.
        let pallet = stacked_pallet(
            &[
                (10.0, vec![300.0]),
                (10.0, vec![20.0]),
                (10.0, vec![10.0]),
                (10.0, vec![5.0]),
            ],
            12.0,
            12.0,
        );

        let report = analyze(&pallet);

        assert!(report.ratio > 3.0);
        assert!(report.ratio_band.is_unsafe());
        assert!(matches!(report.grade, Grade::A | Grade::B | Grade::C));
        assert!(!report.is_safe_to_ship());
        assert!(report
            .warnings
            .iter()
            .any(|w| w.is_critical() && w.message.contains("3:1")));
    }

    #[test]
    fn test_grade_ladder() {
        assert_eq!(grade_for(44.9, 75.0), Grade::A);
        assert_eq!(grade_for(45.0, 80.0), Grade::B);
        assert_eq!(grade_for(44.9, 70.0), Grade::B);
        assert_eq!(grade_for(52.0, 62.0), Grade::C);
        assert_eq!(grade_for(55.0, 90.0), Grade::D);
        assert_eq!(grade_for(59.9, 10.0), Grade::D);
        assert_eq!(grade_for(60.0, 90.0), Grade::F);
    }

    #[test]
    fn test_on_edge_suggestion() {
        // 4" thick panel standing 30" tall.
        let spec = BoxSpec::new("PANEL", 40.0, 4.0, 30.0, 60.0);
        let placed = PlacedBox::new(BoxInstance::new(spec, 0), 0.0, 0.0, 0.0, Rotation::R0, 0);

        let pallet = PalletConfiguration {
            pallet_number: 1,
            base_length: 48.0,
            base_width: 40.0,
            base_height: 0.0,
            length: 48.0,
            width: 40.0,
            height: 30.0,
            layers: vec![Layer {
                index: 0,
                z: 0.0,
                height: 30.0,
                boxes: vec![placed],
            }],
            product_weight: 60.0,
            tare_weight: 50.0,
            warnings: Vec::new(),
        };

        let report = analyze(&pallet);
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.contains("standing on edge")));
    }

    #[test]
    fn test_empty_pallet() {
        let pallet = stacked_pallet(&[], 48.0, 40.0);
        let report = analyze(&pallet);

        assert_eq!(report.grade, Grade::A);
        assert_relative_eq!(report.bottom_weight_pct, 100.0);
        assert!(report.warnings.is_empty());
        assert!(report.is_safe_to_ship());
    }

    #[test]
    fn test_cog_percentage_in_range() {
        let pallet = stacked_pallet(&[(10.0, vec![50.0]), (10.0, vec![50.0])], 48.0, 40.0);
        let report = analyze(&pallet);
        assert!(report.cog_percentage >= 0.0 && report.cog_percentage <= 100.0);
    }
}
