//! Box blueprints and per-run box instances.

use nalgebra::Vector3;

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable carton blueprint.
///
/// One `BoxSpec` describes one physical carton design of a product: its
/// dimensions in inches, its weight in pounds, and its position within a
/// multi-box product (`sequence`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxSpec {
    /// Parent product SKU.
    sku: String,

    /// Position within a multi-box product (1-based).
    sequence: u32,

    /// Dimensions (length, width, height) in inches.
    dimensions: Vector3<f64>,

    /// Weight in pounds.
    weight: f64,
}

impl BoxSpec {
    /// Creates a new box blueprint.
    pub fn new(
        sku: impl Into<String>,
        length: f64,
        width: f64,
        height: f64,
        weight: f64,
    ) -> Self {
        Self {
            sku: sku.into(),
            sequence: 1,
            dimensions: Vector3::new(length, width, height),
            weight,
        }
    }

    /// Sets the sequence number within a multi-box product.
    pub fn with_sequence(mut self, sequence: u32) -> Self {
        self.sequence = sequence;
        self
    }

    /// Returns the parent product SKU.
    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// Returns the sequence number within the product.
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Returns the dimensions (length, width, height).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns the length.
    pub fn length(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the weight in pounds.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Volume in cubic inches.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Base area (length x width) in square inches.
    pub fn footprint(&self) -> f64 {
        self.dimensions.x * self.dimensions.y
    }

    /// Largest of the three dimensions.
    pub fn max_dimension(&self) -> f64 {
        self.dimensions.x.max(self.dimensions.y).max(self.dimensions.z)
    }

    /// Smallest of the three dimensions.
    pub fn min_dimension(&self) -> f64 {
        self.dimensions.x.min(self.dimensions.y).min(self.dimensions.z)
    }

    /// Validates the blueprint.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions.x <= 0.0 || self.dimensions.y <= 0.0 || self.dimensions.z <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "All dimensions for '{}' seq {} must be positive",
                self.sku, self.sequence
            )));
        }

        if self.weight <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "Weight for '{}' seq {} must be positive",
                self.sku, self.sequence
            )));
        }

        Ok(())
    }
}

impl std::fmt::Display for BoxSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} seq {} ({:.1}x{:.1}x{:.1}\", {:.1} lbs)",
            self.sku, self.sequence, self.dimensions.x, self.dimensions.y, self.dimensions.z,
            self.weight
        )
    }
}

/// A box blueprint replicated for one unit of an order.
///
/// Instances exist only for the duration of a single packing run; the
/// `instance` field is the 0-based index of the unit the box belongs to.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxInstance {
    /// The carton blueprint.
    pub spec: BoxSpec,

    /// 0-based unit index within the order.
    pub instance: usize,
}

impl BoxInstance {
    /// Creates an instance of a blueprint for the given unit index.
    pub fn new(spec: BoxSpec, instance: usize) -> Self {
        Self { spec, instance }
    }

    /// Expands an order into `quantity x boxes-per-unit` instances.
    ///
    /// Instances are ordered unit by unit, preserving the blueprint order
    /// within each unit.
    pub fn expand_order(unit_boxes: &[BoxSpec], quantity: usize) -> Vec<BoxInstance> {
        let mut instances = Vec::with_capacity(unit_boxes.len() * quantity);
        for unit in 0..quantity {
            for spec in unit_boxes {
                instances.push(BoxInstance::new(spec.clone(), unit));
            }
        }
        instances
    }
}

impl std::fmt::Display for BoxInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (unit {})", self.spec, self.instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_volume_and_footprint() {
        let spec = BoxSpec::new("SKU-1", 42.0, 31.0, 6.0, 55.0);
        assert_relative_eq!(spec.volume(), 7812.0, epsilon = 0.001);
        assert_relative_eq!(spec.footprint(), 1302.0, epsilon = 0.001);
        assert_relative_eq!(spec.min_dimension(), 6.0);
        assert_relative_eq!(spec.max_dimension(), 42.0);
    }

    #[test]
    fn test_validation() {
        let valid = BoxSpec::new("SKU-1", 10.0, 8.0, 6.0, 12.0);
        assert!(valid.validate().is_ok());

        let zero_dim = BoxSpec::new("SKU-1", 10.0, 0.0, 6.0, 12.0);
        assert!(zero_dim.validate().is_err());

        let negative_weight = BoxSpec::new("SKU-1", 10.0, 8.0, 6.0, -1.0);
        assert!(negative_weight.validate().is_err());
    }

    #[test]
    fn test_expand_order() {
        let unit = vec![
            BoxSpec::new("SKU-1", 10.0, 8.0, 6.0, 12.0).with_sequence(1),
            BoxSpec::new("SKU-1", 20.0, 8.0, 6.0, 18.0).with_sequence(2),
        ];

        let instances = BoxInstance::expand_order(&unit, 3);
        assert_eq!(instances.len(), 6);
        assert_eq!(instances[0].instance, 0);
        assert_eq!(instances[0].spec.sequence(), 1);
        assert_eq!(instances[1].spec.sequence(), 2);
        assert_eq!(instances[5].instance, 2);
    }
}
