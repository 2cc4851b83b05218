//! Grouping, sorting, and capacity estimation helpers for the builder.

use std::collections::BTreeMap;

use palletizer_core::{BoxInstance, BoxSpec, PackingConfig, Rotation};

/// Tolerance for fit comparisons in inches.
pub(crate) const EPS: f64 = 1e-9;

/// Returns true if the box footprint fits the pallet envelope in some
/// rotation: within the base, with at most one axis using the overhang.
pub fn fits_envelope(spec: &BoxSpec, config: &PackingConfig) -> bool {
    for rotation in [Rotation::R0, Rotation::R90] {
        let (l, w) = rotation.apply(spec.length(), spec.width());

        let length_in_base = l <= config.base_length + EPS;
        let width_in_base = w <= config.base_width + EPS;
        let length_with_overhang = l <= config.max_length_with_overhang() + EPS;
        let width_with_overhang = w <= config.max_width_with_overhang() + EPS;

        if (length_in_base && width_with_overhang) || (length_with_overhang && width_in_base) {
            return true;
        }
    }
    false
}

/// Sorts instances for placement: height, then weight, then footprint,
/// all descending, so tall heavy items form the bottom layers.
pub fn sort_for_packing(instances: &mut [BoxInstance]) {
    instances.sort_by(|a, b| {
        b.spec
            .height()
            .total_cmp(&a.spec.height())
            .then_with(|| b.spec.weight().total_cmp(&a.spec.weight()))
            .then_with(|| b.spec.footprint().total_cmp(&a.spec.footprint()))
    });
}

/// Height bucket key in hundredths of an inch.
pub fn height_key(height: f64) -> i64 {
    (height * 100.0).round() as i64
}

/// Partitions instances into buckets keyed by effective height.
///
/// Returned map is ordered by height ascending; values are indices into the
/// input slice. Bucketing makes capacity estimation O(groups) instead of a
/// per-placement scan over all boxes.
pub fn group_by_height(instances: &[BoxInstance]) -> BTreeMap<i64, Vec<usize>> {
    let mut groups: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
    for (idx, inst) in instances.iter().enumerate() {
        groups
            .entry(height_key(inst.spec.height()))
            .or_default()
            .push(idx);
    }
    groups
}

/// Estimates how many boxes of this blueprint fit in one layer on the base
/// footprint, trying both rotations.
pub fn boxes_per_layer_estimate(spec: &BoxSpec, config: &PackingConfig) -> usize {
    let r0 = (config.base_length / spec.length()).floor() * (config.base_width / spec.width()).floor();
    let r90 = (config.base_length / spec.width()).floor() * (config.base_width / spec.length()).floor();

    (r0.max(r90) as usize).max(1)
}

/// Estimates the pallet count for a set of stackable instances.
///
/// Walks height groups from tallest to shortest, filling layers within the
/// stack height budget, to derive a per-pallet capacity; the builder opens
/// this many pallets up front so filling balances across them.
pub fn estimate_pallets_needed(instances: &[BoxInstance], config: &PackingConfig) -> usize {
    if instances.is_empty() {
        return 0;
    }

    let groups = group_by_height(instances);

    let mut boxes_per_pallet = 0usize;
    let mut used_height = 0.0;

    for (key, members) in groups.iter().rev() {
        let height = *key as f64 / 100.0;
        let remaining = config.max_stack_height - used_height;
        let layers_possible = (remaining / height).floor() as usize;
        if layers_possible == 0 {
            break;
        }

        // Sample the smallest footprint in the group for the per-layer count.
        let sample = members
            .iter()
            .map(|&i| &instances[i].spec)
            .min_by(|a, b| a.footprint().total_cmp(&b.footprint()))
            .expect("height group is never empty");
        let per_layer = boxes_per_layer_estimate(sample, config);

        let group_fit = members.len().min(per_layer * layers_possible);
        boxes_per_pallet += group_fit;

        let layers_used = group_fit.div_ceil(per_layer);
        used_height += layers_used as f64 * height;
    }

    if boxes_per_pallet == 0 {
        return instances.len();
    }

    instances.len().div_ceil(boxes_per_pallet).max(1)
}
