//! Shipment plan: the result of one packing run.

use palletizer_core::{BoxInstance, PalletConfiguration};
use palletizer_freight::ShipmentDecision;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::summary::{summarize, PalletSummary};

/// A box instance that could not be placed, with the reason.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RejectedBox {
    /// The instance that was rejected.
    pub instance: BoxInstance,
    /// Why it could not be placed.
    pub reason: String,
}

/// The complete result of packing one order.
///
/// Owns its pallet configurations exclusively; nothing is shared across
/// runs, so independent orders may be packed concurrently.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShipmentPlan {
    /// Pallet configurations, in pallet-number order.
    pub pallets: Vec<PalletConfiguration>,

    /// Instances that could not be placed, surfaced per item.
    pub rejected: Vec<RejectedBox>,

    /// The order-level small-parcel vs freight recommendation.
    pub decision: ShipmentDecision,
}

impl ShipmentPlan {
    /// Number of pallets in the plan.
    pub fn pallet_count(&self) -> usize {
        self.pallets.len()
    }

    /// Number of boxes placed across all pallets.
    pub fn box_count(&self) -> usize {
        self.pallets.iter().map(|p| p.box_count()).sum()
    }

    /// Returns true if every instance was placed.
    pub fn all_placed(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Product weight across all pallets, in pounds.
    pub fn product_weight(&self) -> f64 {
        self.pallets.iter().map(|p| p.product_weight).sum()
    }

    /// Total shipment weight including pallet tare, in pounds.
    pub fn total_weight(&self) -> f64 {
        self.pallets.iter().map(|p| p.total_weight()).sum()
    }

    /// Returns true if any pallet carries a CRITICAL warning.
    pub fn has_critical_warnings(&self) -> bool {
        self.pallets.iter().any(|p| p.has_critical_warnings())
    }

    /// Summarizes every pallet in the plan.
    pub fn summaries(&self) -> Vec<PalletSummary> {
        self.pallets.iter().map(summarize).collect()
    }
}
