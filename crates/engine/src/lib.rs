//! # Palletizer Engine
//!
//! Greedy layer-based pallet building engine.
//!
//! Assigns box instances to layers and pallets with position tracking,
//! balances height and weight across multiple pallets, and annotates each
//! finished pallet with freight classification and stability diagnostics.
//!
//! The engine is a heuristic, not an exact solver: boxes are grouped by
//! height, sorted tall/heavy/large first, and placed row by row into the
//! active layer of the best-scoring open pallet.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod builder;
pub mod packing;
pub mod plan;
pub mod summary;

// Re-exports
pub use builder::{PalletBuilder, LTL_HEIGHT_LIMIT};
pub use packing::{boxes_per_layer_estimate, estimate_pallets_needed, fits_envelope};
pub use plan::{RejectedBox, ShipmentPlan};
pub use summary::{summarize, PalletSummary};
