//! Structured per-pallet reports for presentation and decision layers.

use palletizer_core::{PalletConfiguration, Warning};
use palletizer_freight::FreightResult;
use palletizer_stability::StabilityReport;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A complete report for one pallet: dimensions, weight breakdown, freight
/// classification, and stability analysis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PalletSummary {
    /// 1-based pallet index within the shipment.
    pub pallet_number: usize,

    /// Actual footprint length in inches.
    pub length: f64,

    /// Actual footprint width in inches.
    pub width: f64,

    /// Total height including the deck, in inches.
    pub height: f64,

    /// Number of boxes on the pallet.
    pub box_count: usize,

    /// Product weight in pounds.
    pub product_weight: f64,

    /// Pallet tare weight in pounds.
    pub tare_weight: f64,

    /// Total weight in pounds.
    pub total_weight: f64,

    /// Freight classification under NMFC rules.
    pub freight: FreightResult,

    /// Stability analysis.
    pub stability: StabilityReport,

    /// Diagnostics attached during the build.
    pub warnings: Vec<Warning>,
}

/// Builds the structured report for one pallet.
///
/// Freight and stability are evaluated fresh from the configuration; the
/// reports are derived data and never cached on the pallet itself.
pub fn summarize(pallet: &PalletConfiguration) -> PalletSummary {
    let freight = palletizer_freight::classify(
        pallet.total_weight(),
        pallet.length,
        pallet.width,
        pallet.height,
    );
    let stability = palletizer_stability::analyze(pallet);

    PalletSummary {
        pallet_number: pallet.pallet_number,
        length: pallet.length,
        width: pallet.width,
        height: pallet.height,
        box_count: pallet.box_count(),
        product_weight: pallet.product_weight,
        tare_weight: pallet.tare_weight,
        total_weight: pallet.total_weight(),
        freight,
        stability,
        warnings: pallet.warnings.clone(),
    }
}
