//! Placement records for boxes positioned on a pallet.

use nalgebra::Vector3;

use crate::boxes::BoxInstance;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Horizontal rotation applied to a placed box.
///
/// Boxes always stand on their length x width face; only quarter turns
/// around the vertical axis are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    /// Original orientation (length along x).
    #[default]
    R0,
    /// Rotated 90 degrees (width along x).
    R90,
}

impl Rotation {
    /// Returns the footprint dimensions after rotation.
    pub fn apply(&self, length: f64, width: f64) -> (f64, f64) {
        match self {
            Rotation::R0 => (length, width),
            Rotation::R90 => (width, length),
        }
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vector3<f64>,
    /// Maximum corner.
    pub max: Vector3<f64>,
}

impl Aabb {
    /// Creates a new AABB from corner coordinates.
    pub fn new(min: Vector3<f64>, max: Vector3<f64>) -> Self {
        Self { min, max }
    }

    /// Returns true if the interiors of the two boxes intersect.
    ///
    /// Touching faces do not count as an intersection.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
            && self.min.z < other.max.z
            && other.min.z < self.max.z
    }

    /// Returns true if the XY footprints overlap (interiors only).
    pub fn footprint_intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Returns true if the vertical ranges overlap (interiors only).
    pub fn z_intersects(&self, other: &Aabb) -> bool {
        self.min.z < other.max.z && other.min.z < self.max.z
    }
}

/// A box instance with an assigned position on a pallet.
///
/// Created exclusively by the building engine; re-placement produces a new
/// `PlacedBox` rather than mutating an existing one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedBox {
    /// The placed box instance.
    pub instance: BoxInstance,

    /// X origin in inches (along pallet length).
    pub x: f64,

    /// Y origin in inches (along pallet width).
    pub y: f64,

    /// Z origin in inches (from the ground, including the pallet deck).
    pub z: f64,

    /// Horizontal rotation.
    pub rotation: Rotation,

    /// Index of the layer this box belongs to (0 = bottom).
    pub layer: usize,
}

impl PlacedBox {
    /// Creates a new placement record.
    pub fn new(
        instance: BoxInstance,
        x: f64,
        y: f64,
        z: f64,
        rotation: Rotation,
        layer: usize,
    ) -> Self {
        Self {
            instance,
            x,
            y,
            z,
            rotation,
            layer,
        }
    }

    /// Footprint extent along x after rotation.
    pub fn placed_length(&self) -> f64 {
        self.rotation.apply(self.instance.spec.length(), self.instance.spec.width()).0
    }

    /// Footprint extent along y after rotation.
    pub fn placed_width(&self) -> f64 {
        self.rotation.apply(self.instance.spec.length(), self.instance.spec.width()).1
    }

    /// Vertical extent (rotation does not change height).
    pub fn height(&self) -> f64 {
        self.instance.spec.height()
    }

    /// Weight of the placed box.
    pub fn weight(&self) -> f64 {
        self.instance.spec.weight()
    }

    /// Top z coordinate.
    pub fn top(&self) -> f64 {
        self.z + self.height()
    }

    /// Vertical center of the box.
    pub fn center_z(&self) -> f64 {
        self.z + self.height() / 2.0
    }

    /// The bounding box of this placement.
    pub fn bounds(&self) -> Aabb {
        let (l, w) = self
            .rotation
            .apply(self.instance.spec.length(), self.instance.spec.width());
        Aabb::new(
            Vector3::new(self.x, self.y, self.z),
            Vector3::new(self.x + l, self.y + w, self.z + self.height()),
        )
    }

    /// Returns true if this placement overlaps another.
    pub fn overlaps(&self, other: &PlacedBox) -> bool {
        self.bounds().intersects(&other.bounds())
    }
}
