//! # Palletizer Freight
//!
//! NMFC freight classification for the palletizer engine.
//!
//! This crate converts weight and envelope dimensions into a tariff density
//! class, applies the 75" height pricing penalty, and makes the order-level
//! small-parcel vs freight decision. It is a leaf crate: pure functions over
//! plain numbers, no geometry dependencies.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod calculator;
pub mod class;
pub mod decision;

// Re-exports
pub use calculator::{
    classify, density, dimensional_weight, FreightResult, DIMENSIONAL_WEIGHT_DIVISOR,
    HEIGHT_PENALTY_THRESHOLD, PENALTY_CALCULATION_HEIGHT,
};
pub use class::FreightClass;
pub use decision::{
    decide, ShipmentDecision, ShipmentMode, ShipmentProfile, BORDERLINE_WEIGHT,
    PARCEL_BOX_LIMIT, PARCEL_DIMENSION_LIMIT, PARCEL_SINGLE_BOX_WEIGHT_LIMIT,
    PARCEL_WEIGHT_LIMIT,
};
