//! # Palletizer Stability
//!
//! Tip-over risk analysis for pallet configurations.
//!
//! Scores each pallet from its geometry and weight distribution: the
//! height-to-base ratio (OSHA 3:1 guideline), center-of-gravity height, and
//! bottom-half weight share, combined into an A-F grade with warnings and
//! restacking suggestions.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod analyzer;
pub mod report;

// Re-exports
pub use analyzer::{analyze, grade_for, FLAT_BOX_THRESHOLD, TALL_PALLET_HEIGHT};
pub use report::{Grade, RatioBand, StabilityReport};
