//! Greedy layer-based pallet builder.

use palletizer_core::{
    BoxInstance, BoxSpec, Error, Layer, PackingConfig, PalletConfiguration, PlacedBox, Result,
    Rotation, Warning,
};
use palletizer_freight::{decide, ShipmentProfile};

use crate::packing::{self, EPS};
use crate::plan::{RejectedBox, ShipmentPlan};

/// Common LTL carrier height limit, in inches.
pub const LTL_HEIGHT_LIMIT: f64 = 72.0;

/// The axis a pallet's overhang allowance has been committed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverhangAxis {
    Length,
    Width,
}

/// A candidate position inside the active layer of a pallet.
#[derive(Debug, Clone, Copy)]
struct Spot {
    x: f64,
    y: f64,
    rotation: Rotation,
    new_row: bool,
    overhang: Option<OverhangAxis>,
}

/// Mutable state of a layer being filled, row by row along x.
#[derive(Debug)]
struct LayerState {
    z: f64,
    height: f64,
    cursor_x: f64,
    cursor_y: f64,
    row_depth: f64,
    boxes: Vec<PlacedBox>,
}

impl LayerState {
    fn new(z: f64) -> Self {
        Self {
            z,
            height: 0.0,
            cursor_x: 0.0,
            cursor_y: 0.0,
            row_depth: 0.0,
            boxes: Vec::new(),
        }
    }

    fn top(&self) -> f64 {
        self.z + self.height
    }
}

/// A pallet being filled by the builder.
#[derive(Debug)]
struct OpenPallet {
    layers: Vec<LayerState>,
    product_weight: f64,
    overhang: Option<OverhangAxis>,
    /// Oversized single-box pallets accept nothing else.
    sealed: bool,
}

impl OpenPallet {
    fn new() -> Self {
        Self {
            layers: Vec::new(),
            product_weight: 0.0,
            overhang: None,
            sealed: false,
        }
    }

    fn is_empty(&self) -> bool {
        self.layers.iter().all(|l| l.boxes.is_empty())
    }

    /// Top of the stack: the deck surface while empty.
    fn top(&self, config: &PackingConfig) -> f64 {
        self.layers
            .last()
            .map(|l| l.top())
            .unwrap_or(config.base_height)
    }

    fn remaining_height(&self, config: &PackingConfig) -> f64 {
        config.max_total_height() - self.top(config)
    }

    fn total_weight(&self, config: &PackingConfig) -> f64 {
        self.product_weight + config.tare_weight
    }

    fn weight_allows(&self, spec: &BoxSpec, config: &PackingConfig) -> bool {
        self.total_weight(config) + spec.weight() <= config.max_load_weight + EPS
    }

    /// Checks footprint extents against the base, committing the overhang
    /// axis if `allow_commit` and the placement needs it. Returns the
    /// resulting axis state, or None if the extents do not fit.
    fn check_extents(
        &self,
        x_extent: f64,
        y_extent: f64,
        config: &PackingConfig,
        allow_commit: bool,
    ) -> Option<Option<OverhangAxis>> {
        let mut axis = self.overhang;

        if x_extent > config.base_length + EPS {
            if x_extent > config.max_length_with_overhang() + EPS {
                return None;
            }
            match axis {
                None if allow_commit => axis = Some(OverhangAxis::Length),
                Some(OverhangAxis::Length) => {}
                _ => return None,
            }
        }

        if y_extent > config.base_width + EPS {
            if y_extent > config.max_width_with_overhang() + EPS {
                return None;
            }
            match axis {
                None if allow_commit => axis = Some(OverhangAxis::Width),
                Some(OverhangAxis::Width) => {}
                _ => return None,
            }
        }

        Some(axis)
    }

    /// Finds a spot for the box in the active layer: continue the current
    /// row, or open a new row. Placements that avoid committing the
    /// overhang axis are preferred.
    fn probe_active_layer(&self, spec: &BoxSpec, config: &PackingConfig) -> Option<Spot> {
        let layer = self.layers.last()?;

        // Layer height may only grow within the stack budget.
        if layer.z + layer.height.max(spec.height()) > config.max_total_height() + EPS {
            return None;
        }

        for allow_commit in [false, true] {
            for rotation in [Rotation::R0, Rotation::R90] {
                let (l, w) = rotation.apply(spec.length(), spec.width());

                // Continue the current row.
                if let Some(overhang) = self.check_extents(
                    layer.cursor_x + l,
                    layer.cursor_y + w,
                    config,
                    allow_commit,
                ) {
                    return Some(Spot {
                        x: layer.cursor_x,
                        y: layer.cursor_y,
                        rotation,
                        new_row: false,
                        overhang,
                    });
                }

                // Open a new row behind the current one.
                if layer.row_depth > 0.0 {
                    if let Some(overhang) = self.check_extents(
                        l,
                        layer.cursor_y + layer.row_depth + w,
                        config,
                        allow_commit,
                    ) {
                        return Some(Spot {
                            x: 0.0,
                            y: layer.cursor_y + layer.row_depth,
                            rotation,
                            new_row: true,
                            overhang,
                        });
                    }
                }
            }
        }

        None
    }

    /// Finds a rotation for a box starting a fresh layer at the origin.
    fn probe_origin(&self, spec: &BoxSpec, config: &PackingConfig) -> Option<(Rotation, Option<OverhangAxis>)> {
        for allow_commit in [false, true] {
            for rotation in [Rotation::R0, Rotation::R90] {
                let (l, w) = rotation.apply(spec.length(), spec.width());
                if let Some(overhang) = self.check_extents(l, w, config, allow_commit) {
                    return Some((rotation, overhang));
                }
            }
        }
        None
    }

    fn can_open_layer(&self, spec: &BoxSpec, config: &PackingConfig) -> bool {
        self.top(config) + spec.height() <= config.max_total_height() + EPS
    }

    /// Returns true if the box could be placed on this pallet.
    fn can_accept(&self, spec: &BoxSpec, config: &PackingConfig) -> bool {
        if self.sealed || !self.weight_allows(spec, config) {
            return false;
        }

        self.probe_active_layer(spec, config).is_some()
            || (self.can_open_layer(spec, config) && self.probe_origin(spec, config).is_some())
    }

    /// Places the box, preferring the active layer over a new one.
    /// Returns false if the box does not fit this pallet.
    fn place(&mut self, instance: BoxInstance, config: &PackingConfig) -> bool {
        if self.sealed || !self.weight_allows(&instance.spec, config) {
            return false;
        }

        if let Some(spot) = self.probe_active_layer(&instance.spec, config) {
            let layer_index = self.layers.len() - 1;
            let weight = instance.spec.weight();
            let height = instance.spec.height();
            let (l, w) = spot.rotation.apply(instance.spec.length(), instance.spec.width());

            let layer = self.layers.last_mut().expect("active layer exists");
            if spot.new_row {
                layer.cursor_y += layer.row_depth;
                layer.cursor_x = 0.0;
                layer.row_depth = 0.0;
            }

            let placed = PlacedBox::new(instance, spot.x, spot.y, layer.z, spot.rotation, layer_index);
            layer.boxes.push(placed);
            layer.cursor_x = spot.x + l;
            layer.row_depth = layer.row_depth.max(w);
            layer.height = layer.height.max(height);

            self.overhang = spot.overhang;
            self.product_weight += weight;
            return true;
        }

        if self.can_open_layer(&instance.spec, config) {
            if let Some((rotation, overhang)) = self.probe_origin(&instance.spec, config) {
                self.start_layer(instance, rotation, overhang, config);
                return true;
            }
        }

        false
    }

    /// Places a box taller than the stack budget on its own sealed pallet.
    fn place_oversized(&mut self, instance: BoxInstance, config: &PackingConfig) -> bool {
        debug_assert!(self.is_empty());
        match self.probe_origin(&instance.spec, config) {
            Some((rotation, overhang)) => {
                self.start_layer(instance, rotation, overhang, config);
                self.sealed = true;
                true
            }
            None => false,
        }
    }

    fn start_layer(
        &mut self,
        instance: BoxInstance,
        rotation: Rotation,
        overhang: Option<OverhangAxis>,
        config: &PackingConfig,
    ) {
        let layer_index = self.layers.len();
        let weight = instance.spec.weight();
        let height = instance.spec.height();
        let (l, w) = rotation.apply(instance.spec.length(), instance.spec.width());

        let mut layer = LayerState::new(self.top(config));
        let placed = PlacedBox::new(instance, 0.0, 0.0, layer.z, rotation, layer_index);
        layer.boxes.push(placed);
        layer.cursor_x = l;
        layer.row_depth = w;
        layer.height = height;

        self.layers.push(layer);
        self.overhang = overhang;
        self.product_weight += weight;
    }
}

/// Builds pallet configurations for an order.
///
/// The configuration is taken by value per builder and never mutated
/// mid-run; all placement is synchronous and pure.
#[derive(Debug, Clone)]
pub struct PalletBuilder {
    config: PackingConfig,
}

impl PalletBuilder {
    /// Creates a builder with the given configuration.
    pub fn new(config: PackingConfig) -> Self {
        Self { config }
    }

    /// Creates a builder with the default GMA 48x40 configuration.
    pub fn default_config() -> Self {
        Self::new(PackingConfig::default())
    }

    /// Returns the builder configuration.
    pub fn config(&self) -> &PackingConfig {
        &self.config
    }

    /// Builds the pallet configurations for `quantity` units of an order.
    ///
    /// Every valid box instance ends up in exactly one placement or in the
    /// plan's rejection list; the call fails with `InsufficientCapacity`
    /// only when no instance at all fits the configured envelope.
    pub fn build(&self, unit_boxes: &[BoxSpec], quantity: usize) -> Result<ShipmentPlan> {
        self.config.validate()?;

        if unit_boxes.is_empty() {
            return Err(Error::InvalidInput("order contains no boxes".into()));
        }
        if quantity == 0 {
            return Err(Error::InvalidInput("quantity must be at least 1".into()));
        }
        for spec in unit_boxes {
            spec.validate()?;
        }

        let instances = BoxInstance::expand_order(unit_boxes, quantity);
        let decision = decide(&profile_for(&instances));

        // Envelope check: oversized footprints are surfaced per item while
        // the rest of the order is still packed.
        let mut rejected = Vec::new();
        let mut accepted = Vec::new();
        for instance in instances {
            if packing::fits_envelope(&instance.spec, &self.config) {
                accepted.push(instance);
            } else {
                let reason = format!(
                    "footprint {:.1}x{:.1}\" does not fit the {:.0}x{:.0}\" base with {:.0}\" one-axis overhang",
                    instance.spec.length(),
                    instance.spec.width(),
                    self.config.base_length,
                    self.config.base_width,
                    self.config.max_overhang,
                );
                log::warn!("rejected {}: {}", instance, reason);
                rejected.push(RejectedBox { instance, reason });
            }
        }

        if accepted.is_empty() {
            return Err(Error::InsufficientCapacity(format!(
                "no box in the order fits the configured pallet envelope ({} rejected)",
                rejected.len()
            )));
        }

        let (mut stackable, oversized): (Vec<_>, Vec<_>) = accepted
            .into_iter()
            .partition(|i| i.spec.height() <= self.config.max_stack_height);
        packing::sort_for_packing(&mut stackable);

        // Pre-open the estimated pallet count so filling balances across
        // pallets instead of maxing out the first one.
        let estimated = packing::estimate_pallets_needed(&stackable, &self.config);
        let mut open: Vec<OpenPallet> = (0..estimated).map(|_| OpenPallet::new()).collect();

        for instance in stackable {
            // Index-based scan over open pallets: prefer the one with the
            // most remaining height, lighter pallets winning ties.
            let mut best: Option<(usize, f64)> = None;
            for (idx, pallet) in open.iter().enumerate() {
                if !pallet.can_accept(&instance.spec, &self.config) {
                    continue;
                }
                let score = pallet.remaining_height(&self.config)
                    - pallet.total_weight(&self.config) / 100.0;
                if best.is_none_or(|(_, s)| score > s) {
                    best = Some((idx, score));
                }
            }

            match best {
                Some((idx, _)) => {
                    let placed = open[idx].place(instance, &self.config);
                    debug_assert!(placed, "accepted pallet must place the box");
                }
                None => {
                    let mut fresh = OpenPallet::new();
                    if fresh.place(instance.clone(), &self.config) {
                        open.push(fresh);
                    } else {
                        // Envelope fits but the box busts the weight budget
                        // even on an empty pallet.
                        let reason = format!(
                            "box weight {:.0} lbs exceeds the {:.0} lb pallet weight budget alone",
                            instance.spec.weight(),
                            self.config.max_load_weight - self.config.tare_weight,
                        );
                        log::warn!("rejected {}: {}", instance, reason);
                        rejected.push(RejectedBox { instance, reason });
                    }
                }
            }
        }

        // Boxes taller than the stack budget each get their own pallet.
        for instance in oversized {
            let mut pallet = OpenPallet::new();
            let placed = pallet.place_oversized(instance, &self.config);
            debug_assert!(placed, "envelope-checked box must fit an empty pallet");
            open.push(pallet);
        }

        let pallets: Vec<PalletConfiguration> = open
            .into_iter()
            .filter(|p| !p.is_empty())
            .enumerate()
            .map(|(i, p)| self.finalize(p, i + 1))
            .collect();

        log::debug!(
            "packed {} boxes onto {} pallets ({} rejected)",
            pallets.iter().map(|p| p.box_count()).sum::<usize>(),
            pallets.len(),
            rejected.len(),
        );

        Ok(ShipmentPlan {
            pallets,
            rejected,
            decision,
        })
    }

    /// Converts a filled pallet into its configuration record and attaches
    /// stability and freight diagnostics.
    fn finalize(&self, pallet: OpenPallet, pallet_number: usize) -> PalletConfiguration {
        let height = pallet.top(&self.config);
        let sealed = pallet.sealed;

        let mut max_x: f64 = 0.0;
        let mut max_y: f64 = 0.0;
        for layer in &pallet.layers {
            for pb in &layer.boxes {
                let bounds = pb.bounds();
                max_x = max_x.max(bounds.max.x);
                max_y = max_y.max(bounds.max.y);
            }
        }

        let layers: Vec<Layer> = pallet
            .layers
            .into_iter()
            .enumerate()
            .map(|(index, state)| Layer {
                index,
                z: state.z,
                height: state.height,
                boxes: state.boxes,
            })
            .collect();

        let mut config = PalletConfiguration {
            pallet_number,
            base_length: self.config.base_length,
            base_width: self.config.base_width,
            base_height: self.config.base_height,
            length: max_x.max(self.config.base_length),
            width: max_y.max(self.config.base_width),
            height,
            layers,
            product_weight: pallet.product_weight,
            tare_weight: self.config.tare_weight,
            warnings: Vec::new(),
        };

        let mut warnings = Vec::new();

        if sealed {
            warnings.push(Warning::warning(format!(
                "Box taller than the {:.0}\" stack limit occupies its own pallet; nothing may be stacked on it",
                self.config.max_stack_height
            )));
        }

        let stability = palletizer_stability::analyze(&config);
        warnings.extend(stability.warnings.iter().cloned());
        for suggestion in &stability.suggestions {
            warnings.push(Warning::info(suggestion.clone()));
        }

        let freight = palletizer_freight::classify(
            config.total_weight(),
            config.length,
            config.width,
            config.height,
        );
        if freight.penalty_applied {
            warnings.push(Warning::cost(freight.notes.clone()));
        }

        if config.height > LTL_HEIGHT_LIMIT {
            warnings.push(Warning::warning(format!(
                "Pallet height {:.0}\" exceeds the common {:.0}\" LTL limit; some carriers may refuse or surcharge it",
                config.height, LTL_HEIGHT_LIMIT
            )));
        }

        config.warnings = warnings;
        config
    }
}

/// Aggregates the order figures used for the parcel/freight decision.
fn profile_for(instances: &[BoxInstance]) -> ShipmentProfile {
    ShipmentProfile {
        total_weight: instances.iter().map(|i| i.spec.weight()).sum(),
        box_count: instances.len(),
        max_box_dimension: instances
            .iter()
            .map(|i| i.spec.max_dimension())
            .fold(0.0, f64::max),
        max_box_weight: instances
            .iter()
            .map(|i| i.spec.weight())
            .fold(0.0, f64::max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_pallet_single_layer() {
        // Four 24x20 boxes tile one layer of the 48x40 base exactly.
        let unit = vec![BoxSpec::new("SKU-1", 24.0, 20.0, 12.0, 30.0)];
        let plan = PalletBuilder::default_config().build(&unit, 4).unwrap();

        assert_eq!(plan.pallets.len(), 1);
        let pallet = &plan.pallets[0];
        assert_eq!(pallet.box_count(), 4);
        assert_eq!(pallet.layers.len(), 1);
        assert_relative_eq!(pallet.height, 17.0); // 5" deck + 12"
        assert_relative_eq!(pallet.product_weight, 120.0);
        assert_relative_eq!(pallet.total_weight(), 170.0);
    }

    #[test]
    fn test_new_layer_when_footprint_full() {
        let unit = vec![BoxSpec::new("SKU-1", 24.0, 20.0, 12.0, 30.0)];
        let plan = PalletBuilder::default_config().build(&unit, 6).unwrap();

        assert_eq!(plan.pallets.len(), 1);
        let pallet = &plan.pallets[0];
        assert_eq!(pallet.layers.len(), 2);
        assert_eq!(pallet.layers[0].box_count(), 4);
        assert_eq!(pallet.layers[1].box_count(), 2);
        assert_relative_eq!(pallet.layers[1].z, 17.0);
    }

    #[test]
    fn test_rotation_used_to_fit() {
        // 40x48 boxes only fit the 48x40 base rotated.
        let unit = vec![BoxSpec::new("SKU-1", 40.0, 48.0, 10.0, 50.0)];
        let plan = PalletBuilder::default_config().build(&unit, 2).unwrap();

        assert_eq!(plan.pallets.len(), 1);
        for pb in plan.pallets[0].boxes() {
            assert_eq!(pb.rotation, Rotation::R90);
        }
    }

    #[test]
    fn test_overhang_committed_to_one_axis() {
        // 52" boxes overhang the 48" length by 4".
        let unit = vec![BoxSpec::new("SKU-1", 52.0, 20.0, 10.0, 40.0)];
        let plan = PalletBuilder::default_config().build(&unit, 4).unwrap();

        assert_eq!(plan.pallets.len(), 1);
        let pallet = &plan.pallets[0];
        assert_relative_eq!(pallet.length, 52.0);
        assert_relative_eq!(pallet.width, 40.0);
    }

    #[test]
    fn test_footprint_rejection_keeps_packing_rest() {
        let unit = vec![
            BoxSpec::new("SKU-1", 60.0, 50.0, 10.0, 40.0).with_sequence(1),
            BoxSpec::new("SKU-1", 24.0, 20.0, 10.0, 20.0).with_sequence(2),
        ];
        let plan = PalletBuilder::default_config().build(&unit, 2).unwrap();

        assert_eq!(plan.rejected.len(), 2);
        assert_eq!(plan.box_count(), 2);
        assert!(plan.rejected[0].reason.contains("does not fit"));
    }

    #[test]
    fn test_all_rejected_is_insufficient_capacity() {
        let unit = vec![BoxSpec::new("SKU-1", 60.0, 50.0, 10.0, 40.0)];
        let err = PalletBuilder::default_config().build(&unit, 1).unwrap_err();
        assert!(matches!(err, Error::InsufficientCapacity(_)));
    }

    #[test]
    fn test_invalid_input() {
        let builder = PalletBuilder::default_config();

        let zero_dim = vec![BoxSpec::new("SKU-1", 0.0, 20.0, 10.0, 40.0)];
        assert!(matches!(
            builder.build(&zero_dim, 1),
            Err(Error::InvalidInput(_))
        ));

        let zero_weight = vec![BoxSpec::new("SKU-1", 24.0, 20.0, 10.0, 0.0)];
        assert!(matches!(
            builder.build(&zero_weight, 1),
            Err(Error::InvalidInput(_))
        ));

        let good = vec![BoxSpec::new("SKU-1", 24.0, 20.0, 10.0, 40.0)];
        assert!(matches!(builder.build(&good, 0), Err(Error::InvalidInput(_))));
        assert!(matches!(builder.build(&[], 1), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_oversized_box_gets_own_pallet() {
        let unit = vec![
            BoxSpec::new("SKU-1", 24.0, 20.0, 95.0, 80.0).with_sequence(1),
            BoxSpec::new("SKU-1", 24.0, 20.0, 10.0, 20.0).with_sequence(2),
        ];
        let plan = PalletBuilder::default_config().build(&unit, 1).unwrap();

        assert_eq!(plan.pallets.len(), 2);
        let oversized = plan
            .pallets
            .iter()
            .find(|p| p.box_count() == 1 && p.height > 96.0)
            .expect("oversized pallet present");
        assert!(oversized
            .warnings
            .iter()
            .any(|w| w.message.contains("own pallet")));
    }

    #[test]
    fn test_weight_budget_splits_pallets() {
        // 10 boxes of 400 lbs: budget allows 6 per pallet (2450 of 2500).
        let unit = vec![BoxSpec::new("SKU-1", 24.0, 20.0, 10.0, 400.0)];
        let plan = PalletBuilder::default_config().build(&unit, 10).unwrap();

        assert!(plan.pallets.len() >= 2);
        for pallet in &plan.pallets {
            assert!(pallet.total_weight() <= 2500.0 + 1e-6);
        }
        assert_eq!(plan.box_count(), 10);
    }

    #[test]
    fn test_multi_pallet_height_balancing() {
        // 30 big boxes need 3 pallets; filling should spread them evenly.
        let unit = vec![BoxSpec::new("SKU-1", 24.0, 20.0, 30.0, 50.0)];
        let plan = PalletBuilder::default_config().build(&unit, 30).unwrap();

        assert_eq!(plan.pallets.len(), 3);
        let counts: Vec<usize> = plan.pallets.iter().map(|p| p.box_count()).collect();
        let min = *counts.iter().min().unwrap();
        let max = *counts.iter().max().unwrap();
        assert!(max - min <= 2, "unbalanced pallets: {:?}", counts);
    }

    #[test]
    fn test_decision_attached() {
        let unit = vec![BoxSpec::new("SKU-1", 24.0, 20.0, 10.0, 60.0)];
        let plan = PalletBuilder::default_config().build(&unit, 6).unwrap();

        use palletizer_freight::ShipmentMode;
        assert_eq!(plan.decision.mode, ShipmentMode::Freight);
        assert!(!plan.decision.reasons.is_empty());
    }
}
