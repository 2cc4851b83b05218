//! # Palletizer Core
//!
//! Core types shared across the palletizer pallet optimization engine.
//!
//! This crate provides the geometry and weight primitives (box blueprints,
//! placements, layers), the pallet configuration record produced by a
//! packing run, the per-run configuration, and the diagnostic warning and
//! error types.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod boxes;
pub mod config;
pub mod error;
pub mod pallet;
pub mod placement;
pub mod warning;

// Re-exports
pub use boxes::{BoxInstance, BoxSpec};
pub use config::{PackingConfig, PalletPreset};
pub use error::{Error, Result};
pub use pallet::{Layer, PalletConfiguration, CUBIC_INCHES_PER_CUBIC_FOOT};
pub use placement::{Aabb, PlacedBox, Rotation};
pub use warning::{Severity, Warning};
