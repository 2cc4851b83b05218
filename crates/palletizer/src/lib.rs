//! # Palletizer
//!
//! Pallet building, stability analysis, and NMFC freight classification.
//!
//! This crate decides how a set of shipped product boxes should be arranged
//! on one or more pallets, scores each arrangement for tip-over risk, and
//! derives its freight tariff class, including the 75" height penalty.
//!
//! ## Quick Start
//!
//! ```rust
//! use palletizer::core::{BoxSpec, PackingConfig};
//! use palletizer::engine::PalletBuilder;
//!
//! // One unit of this product ships as two cartons.
//! let unit = vec![
//!     BoxSpec::new("CHAIR-01", 24.0, 20.0, 30.0, 45.0).with_sequence(1),
//!     BoxSpec::new("CHAIR-01", 22.0, 18.0, 6.0, 12.0).with_sequence(2),
//! ];
//!
//! let builder = PalletBuilder::new(PackingConfig::default());
//! let plan = builder.build(&unit, 6).expect("valid order");
//!
//! for summary in plan.summaries() {
//!     println!(
//!         "pallet {}: class {}, grade {}",
//!         summary.pallet_number, summary.freight.freight_class, summary.stability.grade
//!     );
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support across all result types

/// Core geometry, configuration, and diagnostic types.
pub use palletizer_core as core;

/// NMFC freight classification.
pub use palletizer_freight as freight;

/// Tip-over risk analysis.
pub use palletizer_stability as stability;

/// The pallet building engine.
pub use palletizer_engine as engine;

// Re-export commonly used types at root level
pub use palletizer_core::{BoxSpec, Error, PackingConfig, PalletConfiguration, Result};
pub use palletizer_engine::{PalletBuilder, PalletSummary, ShipmentPlan};
pub use palletizer_freight::{FreightClass, FreightResult, ShipmentMode};
pub use palletizer_stability::{Grade, StabilityReport};
