//! Packing run configuration.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Standard pallet base presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PalletPreset {
    /// GMA standard 48x40, the most common North American pallet.
    #[default]
    Gma48x40,
    /// GMA 48x48 for square or wide loads.
    Gma48x48,
    /// European standard (120x100 cm).
    Euro,
}

impl PalletPreset {
    /// Returns the base footprint (length, width) in inches.
    pub fn base_dimensions(&self) -> (f64, f64) {
        match self {
            PalletPreset::Gma48x40 => (48.0, 40.0),
            PalletPreset::Gma48x48 => (48.0, 48.0),
            PalletPreset::Euro => (47.24, 39.37),
        }
    }
}

/// Configuration for a single packing run.
///
/// Passed explicitly into the builder and never mutated mid-run, so
/// concurrent runs with different presets cannot interfere.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingConfig {
    /// Pallet base length in inches.
    pub base_length: f64,

    /// Pallet base width in inches.
    pub base_width: f64,

    /// Height of the pallet deck itself in inches.
    pub base_height: f64,

    /// Weight of the empty pallet in pounds.
    pub tare_weight: f64,

    /// Maximum product stack height above the deck, in inches.
    pub max_stack_height: f64,

    /// Allowed overhang beyond the base on at most one axis, in inches.
    pub max_overhang: f64,

    /// Maximum loaded weight (product + tare) in pounds.
    pub max_load_weight: f64,
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self::from_preset(PalletPreset::default())
    }
}

impl PackingConfig {
    /// Creates a configuration from a standard pallet preset.
    pub fn from_preset(preset: PalletPreset) -> Self {
        let (base_length, base_width) = preset.base_dimensions();
        Self {
            base_length,
            base_width,
            base_height: 5.0,
            tare_weight: 50.0,
            max_stack_height: 91.0,
            max_overhang: 8.0,
            max_load_weight: 2500.0,
        }
    }

    /// Creates a configuration with default values (GMA 48x40).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base footprint.
    pub fn with_base(mut self, length: f64, width: f64) -> Self {
        self.base_length = length;
        self.base_width = width;
        self
    }

    /// Sets the maximum product stack height.
    pub fn with_max_stack_height(mut self, height: f64) -> Self {
        self.max_stack_height = height;
        self
    }

    /// Sets the allowed one-axis overhang.
    pub fn with_max_overhang(mut self, overhang: f64) -> Self {
        self.max_overhang = overhang;
        self
    }

    /// Sets the pallet tare weight.
    pub fn with_tare_weight(mut self, weight: f64) -> Self {
        self.tare_weight = weight;
        self
    }

    /// Sets the maximum loaded weight.
    pub fn with_max_load_weight(mut self, weight: f64) -> Self {
        self.max_load_weight = weight;
        self
    }

    /// Maximum total pallet height (deck + product stack).
    pub fn max_total_height(&self) -> f64 {
        self.base_height + self.max_stack_height
    }

    /// Maximum extent along an axis once the overhang is committed to it.
    pub fn max_length_with_overhang(&self) -> f64 {
        self.base_length + self.max_overhang
    }

    /// Maximum extent along the width once the overhang is committed to it.
    pub fn max_width_with_overhang(&self) -> f64 {
        self.base_width + self.max_overhang
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.base_length <= 0.0 || self.base_width <= 0.0 {
            return Err(Error::ConfigError(
                "Pallet base dimensions must be positive".into(),
            ));
        }

        if self.base_height < 0.0 || self.tare_weight < 0.0 || self.max_overhang < 0.0 {
            return Err(Error::ConfigError(
                "Deck height, tare weight and overhang cannot be negative".into(),
            ));
        }

        if self.max_stack_height <= 0.0 {
            return Err(Error::ConfigError(
                "Maximum stack height must be positive".into(),
            ));
        }

        if self.max_load_weight <= self.tare_weight {
            return Err(Error::ConfigError(
                "Maximum loaded weight must exceed the tare weight".into(),
            ));
        }

        Ok(())
    }
}
