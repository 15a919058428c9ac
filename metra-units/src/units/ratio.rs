//! Dimensionless units.

use crate::{define_kind, define_unit, impl_unit_conversions, Dimension, Family};

define_kind!(Ratio => Family::DIMENSIONLESS);

define_unit!(
    /// Pure number, rendered without a symbol
    Unitless, Numbers {
        kind: Ratio,
        name: "unitless",
        sense: Dimension::DIMENSIONLESS,
        factor: 1.0,
        symbols: [""],
    }
);

define_unit!(Percent, Percents {
    kind: Ratio,
    name: "percent",
    sense: Dimension::DIMENSIONLESS,
    factor: 100.0,
    symbols: ["%"],
    format: "{value}{symbol}",
});

define_unit!(PartsPerMillion, PartsPerMillions {
    kind: Ratio,
    name: "parts_per_million",
    sense: Dimension::DIMENSIONLESS,
    factor: 1e6,
    symbols: ["ppm"],
});

impl_unit_conversions!(Unitless, Percent, PartsPerMillion);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Numbers::new(0.25).to::<Percent>(), Percents::new(25.0));
        assert_eq!(Percents::new(1.0).to::<PartsPerMillion>(), PartsPerMillions::new(10_000.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Numbers::new(0.5).to_string(), "0.5");
        assert_eq!(Percents::new(12.5).to_string(), "12.5%");
    }
}
