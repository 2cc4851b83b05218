//! Pallet configuration records produced by a packing run.

use crate::placement::PlacedBox;
use crate::warning::Warning;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cubic inches per cubic foot.
pub const CUBIC_INCHES_PER_CUBIC_FOOT: f64 = 1728.0;

/// A horizontal slice of a pallet.
///
/// All member boxes share the same z origin; the layer height is the
/// tallest member.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layer {
    /// Layer index, 0 = bottom.
    pub index: usize,

    /// Z origin of the layer in inches.
    pub z: f64,

    /// Layer height (max member height) in inches.
    pub height: f64,

    /// Boxes placed in this layer.
    pub boxes: Vec<PlacedBox>,
}

impl Layer {
    /// Total weight of the layer's boxes.
    pub fn weight(&self) -> f64 {
        self.boxes.iter().map(|pb| pb.weight()).sum()
    }

    /// Vertical center of the layer.
    pub fn midpoint(&self) -> f64 {
        self.z + self.height / 2.0
    }

    /// Top z coordinate of the layer.
    pub fn top(&self) -> f64 {
        self.z + self.height
    }

    /// Number of boxes in the layer.
    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }
}

/// A complete configuration for a single pallet.
///
/// Owned exclusively by the shipment result of one packing run; the actual
/// footprint may exceed the base on at most one axis (overhang), and the
/// height includes the pallet deck.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PalletConfiguration {
    /// 1-based pallet index within the shipment.
    pub pallet_number: usize,

    /// Pallet base length in inches.
    pub base_length: f64,

    /// Pallet base width in inches.
    pub base_width: f64,

    /// Height of the pallet deck in inches.
    pub base_height: f64,

    /// Actual footprint length (base or overhanging boxes).
    pub length: f64,

    /// Actual footprint width (base or overhanging boxes).
    pub width: f64,

    /// Total height including the deck, in inches.
    pub height: f64,

    /// Layers from bottom to top.
    pub layers: Vec<Layer>,

    /// Weight of the product only, in pounds.
    pub product_weight: f64,

    /// Weight of the empty pallet, in pounds.
    pub tare_weight: f64,

    /// Diagnostics attached during finalization.
    pub warnings: Vec<Warning>,
}

impl PalletConfiguration {
    /// Total weight including the pallet.
    pub fn total_weight(&self) -> f64 {
        self.product_weight + self.tare_weight
    }

    /// Number of boxes on this pallet.
    pub fn box_count(&self) -> usize {
        self.layers.iter().map(|l| l.boxes.len()).sum()
    }

    /// Iterates over all placed boxes, bottom layer first.
    pub fn boxes(&self) -> impl Iterator<Item = &PlacedBox> {
        self.layers.iter().flat_map(|l| l.boxes.iter())
    }

    /// Occupied volume envelope in cubic inches (footprint x total height).
    pub fn volume_in3(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// Occupied volume envelope in cubic feet.
    pub fn volume_cuft(&self) -> f64 {
        self.volume_in3() / CUBIC_INCHES_PER_CUBIC_FOOT
    }

    /// The smaller footprint dimension, used for tip-over ratio checks.
    pub fn min_footprint(&self) -> f64 {
        self.length.min(self.width)
    }

    /// Returns true if any attached warning is CRITICAL.
    pub fn has_critical_warnings(&self) -> bool {
        self.warnings.iter().any(|w| w.is_critical())
    }
}

impl std::fmt::Display for PalletConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pallet {}: {} boxes, {:.0} lbs, {:.0}x{:.0}x{:.0}\"",
            self.pallet_number,
            self.box_count(),
            self.total_weight(),
            self.length,
            self.width,
            self.height
        )
    }
}
