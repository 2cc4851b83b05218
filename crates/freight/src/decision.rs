//! Small-parcel vs freight decision for a whole order.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum total order weight for small parcel, in pounds.
pub const PARCEL_WEIGHT_LIMIT: f64 = 150.0;

/// Maximum box count for small parcel.
pub const PARCEL_BOX_LIMIT: usize = 4;

/// Maximum single-box dimension for small parcel, in inches.
pub const PARCEL_DIMENSION_LIMIT: f64 = 96.0;

/// Maximum single-box weight for small parcel, in pounds.
pub const PARCEL_SINGLE_BOX_WEIGHT_LIMIT: f64 = 150.0;

/// Lower edge of the borderline weight zone, in pounds.
pub const BORDERLINE_WEIGHT: f64 = 100.0;

/// Shipping mode recommendation for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShipmentMode {
    /// Ship via small parcel carrier.
    SmallParcel,
    /// Ship via LTL freight.
    Freight,
    /// Within parcel limits but heavy enough that freight may be cheaper.
    Borderline,
}

impl std::fmt::Display for ShipmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ShipmentMode::SmallParcel => "SMALL_PARCEL",
            ShipmentMode::Freight => "FREIGHT",
            ShipmentMode::Borderline => "BORDERLINE",
        };
        f.write_str(s)
    }
}

/// Aggregate figures for an order, used to pick the shipping mode.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShipmentProfile {
    /// Total product weight in pounds.
    pub total_weight: f64,
    /// Number of boxes in the order.
    pub box_count: usize,
    /// Largest single dimension of any box, in inches.
    pub max_box_dimension: f64,
    /// Heaviest single box, in pounds.
    pub max_box_weight: f64,
}

/// A shipping mode recommendation with the reasons that triggered it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShipmentDecision {
    /// The recommended mode.
    pub mode: ShipmentMode,
    /// Specific triggering reasons.
    pub reasons: Vec<String>,
}

/// Decides between small parcel, freight, and borderline for an order.
///
/// Any violated parcel limit forces freight; an order inside all limits but
/// with total weight in the borderline zone is flagged as such.
pub fn decide(profile: &ShipmentProfile) -> ShipmentDecision {
    let mut reasons = Vec::new();

    if profile.total_weight > PARCEL_WEIGHT_LIMIT {
        reasons.push(format!(
            "Total weight {:.0} lbs exceeds {:.0} lb parcel limit",
            profile.total_weight, PARCEL_WEIGHT_LIMIT
        ));
    }

    if profile.box_count > PARCEL_BOX_LIMIT {
        reasons.push(format!(
            "{} boxes exceeds {} box parcel limit",
            profile.box_count, PARCEL_BOX_LIMIT
        ));
    }

    if profile.max_box_dimension > PARCEL_DIMENSION_LIMIT {
        reasons.push(format!(
            "Box dimension {:.0}\" exceeds {:.0}\" parcel limit",
            profile.max_box_dimension, PARCEL_DIMENSION_LIMIT
        ));
    }

    if profile.max_box_weight > PARCEL_SINGLE_BOX_WEIGHT_LIMIT {
        reasons.push(format!(
            "Single box weight {:.0} lbs exceeds {:.0} lb parcel limit",
            profile.max_box_weight, PARCEL_SINGLE_BOX_WEIGHT_LIMIT
        ));
    }

    if !reasons.is_empty() {
        return ShipmentDecision {
            mode: ShipmentMode::Freight,
            reasons,
        };
    }

    if profile.total_weight >= BORDERLINE_WEIGHT {
        return ShipmentDecision {
            mode: ShipmentMode::Borderline,
            reasons: vec![format!(
                "Total weight {:.0} lbs is in the borderline range ({:.0}-{:.0} lbs)",
                profile.total_weight, BORDERLINE_WEIGHT, PARCEL_WEIGHT_LIMIT
            )],
        };
    }

    ShipmentDecision {
        mode: ShipmentMode::SmallParcel,
        reasons: vec![format!(
            "Within parcel limits: {} boxes, {:.0} lbs",
            profile.box_count, profile.total_weight
        )],
    }
}
