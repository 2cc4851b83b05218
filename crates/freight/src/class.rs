//! NMFC freight class tiers and the density lookup table.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An NMFC freight class tier.
///
/// Lower class numbers ship cheaper; the class is indexed by shipment
/// density in pounds per cubic foot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FreightClass {
    /// Class 500, density below 1 lb/cu ft.
    C500,
    /// Class 400, 1-2 lbs/cu ft.
    C400,
    /// Class 300, 2-4 lbs/cu ft.
    C300,
    /// Class 250, 4-6 lbs/cu ft.
    C250,
    /// Class 175, 6-8 lbs/cu ft.
    C175,
    /// Class 125, 8-10 lbs/cu ft.
    C125,
    /// Class 100, 10-12 lbs/cu ft.
    C100,
    /// Class 92.5, 12-15 lbs/cu ft.
    C92_5,
    /// Class 85, 15-22.5 lbs/cu ft.
    C85,
    /// Class 70, 22.5-30 lbs/cu ft.
    C70,
    /// Class 65, 30-35 lbs/cu ft.
    C65,
    /// Class 60, 35-50 lbs/cu ft.
    C60,
    /// Class 50, 50+ lbs/cu ft.
    C50,
}

/// Density band upper bounds (lbs/cu ft) and the class for each band.
///
/// A density `d` falls in the first band with `d < upper`; at or above the
/// last bound the class is 50.
const DENSITY_TABLE: [(f64, FreightClass); 12] = [
    (1.0, FreightClass::C500),
    (2.0, FreightClass::C400),
    (4.0, FreightClass::C300),
    (6.0, FreightClass::C250),
    (8.0, FreightClass::C175),
    (10.0, FreightClass::C125),
    (12.0, FreightClass::C100),
    (15.0, FreightClass::C92_5),
    (22.5, FreightClass::C85),
    (30.0, FreightClass::C70),
    (35.0, FreightClass::C65),
    (50.0, FreightClass::C60),
];

impl FreightClass {
    /// Looks up the class for a density in lbs/cu ft.
    ///
    /// Non-positive densities map to class 500 (unknown/invalid density is
    /// billed at the worst tier).
    pub fn for_density(density: f64) -> FreightClass {
        if density <= 0.0 {
            return FreightClass::C500;
        }

        for (upper, class) in DENSITY_TABLE {
            if density < upper {
                return class;
            }
        }

        FreightClass::C50
    }

    /// The numeric class rating (92.5 stays fractional).
    pub fn rating(&self) -> f64 {
        match self {
            FreightClass::C500 => 500.0,
            FreightClass::C400 => 400.0,
            FreightClass::C300 => 300.0,
            FreightClass::C250 => 250.0,
            FreightClass::C175 => 175.0,
            FreightClass::C125 => 125.0,
            FreightClass::C100 => 100.0,
            FreightClass::C92_5 => 92.5,
            FreightClass::C85 => 85.0,
            FreightClass::C70 => 70.0,
            FreightClass::C65 => 65.0,
            FreightClass::C60 => 60.0,
            FreightClass::C50 => 50.0,
        }
    }

    /// Typical commodities at this density tier.
    pub fn description(&self) -> &'static str {
        match self {
            FreightClass::C500 => "very low density - pillows, ping pong balls",
            FreightClass::C400 => "low density - deer antlers, light packaging",
            FreightClass::C300 => "low-medium density - wood chairs, model boats",
            FreightClass::C250 => "medium density - bamboo furniture, mattresses",
            FreightClass::C175 => "medium density - clothing, couches",
            FreightClass::C125 => "medium-high density - small appliances",
            FreightClass::C100 => "high density - boat covers, wine cases",
            FreightClass::C92_5 => "high density - computers, monitors",
            FreightClass::C85 => "very high density - crated machinery",
            FreightClass::C70 => "very high density - automobile engines",
            FreightClass::C65 => "extremely dense - bottled beverages",
            FreightClass::C60 => "extremely dense - car parts",
            FreightClass::C50 => "maximum density - steel, bricks",
        }
    }
}

impl std::fmt::Display for FreightClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FreightClass::C92_5 => f.write_str("92.5"),
            other => write!(f, "{}", other.rating() as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        // Lower bound inclusive, upper bound exclusive.
        assert_eq!(FreightClass::for_density(0.5), FreightClass::C500);
        assert_eq!(FreightClass::for_density(1.0), FreightClass::C400);
        assert_eq!(FreightClass::for_density(2.0), FreightClass::C300);
        assert_eq!(FreightClass::for_density(4.0), FreightClass::C250);
        assert_eq!(FreightClass::for_density(49.99), FreightClass::C60);
        assert_eq!(FreightClass::for_density(50.0), FreightClass::C50);
        assert_eq!(FreightClass::for_density(120.0), FreightClass::C50);
    }

    #[test]
    fn test_invalid_density() {
        assert_eq!(FreightClass::for_density(0.0), FreightClass::C500);
        assert_eq!(FreightClass::for_density(-3.0), FreightClass::C500);
    }

    #[test]
    fn test_monotonic_table() {
        // Higher density never yields a higher (worse) class rating.
        let densities = [
            0.5, 1.5, 3.0, 5.0, 7.0, 9.0, 11.0, 13.0, 20.0, 25.0, 32.0, 40.0, 60.0,
        ];

        let mut previous = f64::INFINITY;
        for d in densities {
            let rating = FreightClass::for_density(d).rating();
            assert!(
                rating <= previous,
                "class rating increased at density {}: {} > {}",
                d,
                rating,
                previous
            );
            previous = rating;
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(FreightClass::C500.to_string(), "500");
        assert_eq!(FreightClass::C92_5.to_string(), "92.5");
        assert_eq!(FreightClass::C50.to_string(), "50");
    }
}
