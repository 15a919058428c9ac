//! Length, area and volume units.
//!
//! Reference units are [`Meter`], [`SquareMeter`] and [`CubicMeter`]. Imperial
//! units use their exact international definitions (`1 ft = 0.3048 m`).

use crate::{define_kind, define_unit, impl_unit_conversions, Dimension, Family, Unit};

define_kind!(
    /// Distances
    Length => Family::LENGTH
);
define_kind!(Area => Family::AREA);
define_kind!(Volume => Family::VOLUME);

define_unit!(
    /// SI base unit of length
    Meter, Meters {
        kind: Length,
        name: "meter",
        sense: Dimension::LENGTH,
        factor: 1.0,
        symbols: ["m"],
    }
);

define_unit!(Millimeter, Millimeters {
    kind: Length,
    name: "millimeter",
    sense: Dimension::LENGTH,
    factor: 1000.0,
    symbols: ["mm"],
});

define_unit!(Centimeter, Centimeters {
    kind: Length,
    name: "centimeter",
    sense: Dimension::LENGTH,
    factor: 100.0,
    symbols: ["cm"],
});

define_unit!(Kilometer, Kilometers {
    kind: Length,
    name: "kilometer",
    sense: Dimension::LENGTH,
    factor: 1e-3,
    symbols: ["km"],
});

define_unit!(
    /// International inch, exactly 25.4 mm
    Inch, Inches {
        kind: Length,
        name: "inch",
        sense: Dimension::LENGTH,
        factor: 1.0 / 0.0254,
        symbols: ["in"],
    }
);

define_unit!(
    /// International foot, exactly 0.3048 m
    Foot, Feet {
        kind: Length,
        name: "foot",
        sense: Dimension::LENGTH,
        factor: 1.0 / 0.3048,
        symbols: ["ft"],
    }
);

define_unit!(Yard, Yards {
    kind: Length,
    name: "yard",
    sense: Dimension::LENGTH,
    factor: 1.0 / 0.9144,
    symbols: ["yd"],
});

define_unit!(Mile, Miles {
    kind: Length,
    name: "mile",
    sense: Dimension::LENGTH,
    factor: 1.0 / 1609.344,
    symbols: ["mi"],
});

define_unit!(
    /// International nautical mile
    NauticalMile, NauticalMiles {
        kind: Length,
        name: "nautical_mile",
        sense: Dimension::LENGTH,
        factor: 1.0 / 1852.0,
        symbols: ["nmi"],
    }
);

// ── Area ────────────────────────────────────────────────────────────────────

define_unit!(SquareMeter, SquareMeters {
    kind: Area,
    name: "square_meter",
    sense: Dimension::AREA,
    factor: 1.0,
    symbols: ["m²", "m2"],
});

define_unit!(SquareMillimeter, SquareMillimeters {
    kind: Area,
    name: "square_millimeter",
    sense: Dimension::AREA,
    factor: Millimeter::FACTOR * Millimeter::FACTOR,
    symbols: ["mm²", "mm2"],
});

define_unit!(SquareCentimeter, SquareCentimeters {
    kind: Area,
    name: "square_centimeter",
    sense: Dimension::AREA,
    factor: Centimeter::FACTOR * Centimeter::FACTOR,
    symbols: ["cm²", "cm2"],
});

define_unit!(SquareKilometer, SquareKilometers {
    kind: Area,
    name: "square_kilometer",
    sense: Dimension::AREA,
    factor: Kilometer::FACTOR * Kilometer::FACTOR,
    symbols: ["km²", "km2"],
});

define_unit!(SquareInch, SquareInches {
    kind: Area,
    name: "square_inch",
    sense: Dimension::AREA,
    factor: Inch::FACTOR * Inch::FACTOR,
    symbols: ["in²", "in2"],
});

define_unit!(SquareFoot, SquareFeet {
    kind: Area,
    name: "square_foot",
    sense: Dimension::AREA,
    factor: Foot::FACTOR * Foot::FACTOR,
    symbols: ["ft²", "ft2"],
});

define_unit!(
    /// 10 000 m²
    Hectare, Hectares {
        kind: Area,
        name: "hectare",
        sense: Dimension::AREA,
        factor: 1e-4,
        symbols: ["ha"],
    }
);

// ── Volume ──────────────────────────────────────────────────────────────────

define_unit!(CubicMeter, CubicMeters {
    kind: Volume,
    name: "cubic_meter",
    sense: Dimension::VOLUME,
    factor: 1.0,
    symbols: ["m³", "m3"],
});

define_unit!(Liter, Liters {
    kind: Volume,
    name: "liter",
    sense: Dimension::VOLUME,
    factor: 1e3,
    symbols: ["L", "l"],
});

define_unit!(Milliliter, Milliliters {
    kind: Volume,
    name: "milliliter",
    sense: Dimension::VOLUME,
    factor: 1e6,
    symbols: ["mL", "ml"],
});

define_unit!(CubicCentimeter, CubicCentimeters {
    kind: Volume,
    name: "cubic_centimeter",
    sense: Dimension::VOLUME,
    factor: Centimeter::FACTOR * Centimeter::FACTOR * Centimeter::FACTOR,
    symbols: ["cm³", "cc"],
});

define_unit!(CubicFoot, CubicFeet {
    kind: Volume,
    name: "cubic_foot",
    sense: Dimension::VOLUME,
    factor: Foot::FACTOR * Foot::FACTOR * Foot::FACTOR,
    symbols: ["ft³", "ft3"],
});

impl_unit_conversions!(Meter, Millimeter, Centimeter, Kilometer, Inch, Foot, Yard, Mile, NauticalMile);
impl_unit_conversions!(
    SquareMeter,
    SquareMillimeter,
    SquareCentimeter,
    SquareKilometer,
    SquareInch,
    SquareFoot,
    Hectare
);
impl_unit_conversions!(CubicMeter, Liter, Milliliter, CubicCentimeter, CubicFoot);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_imperial() {
        assert_relative_eq!(Feet::new(1.0).to::<Inch>().value(), 12.0, max_relative = 1e-12);
        assert_relative_eq!(Yards::new(1.0).to::<Foot>().value(), 3.0, max_relative = 1e-12);
        assert_relative_eq!(Miles::new(1.0).to::<Yard>().value(), 1760.0, max_relative = 1e-12);
        assert_relative_eq!(Inches::new(1.0).to::<Millimeter>().value(), 25.4, max_relative = 1e-12);
    }

    #[test]
    fn test_area_and_volume() {
        assert_relative_eq!(Hectares::new(1.0).to::<SquareMeter>().value(), 10_000.0, max_relative = 1e-12);
        assert_relative_eq!(SquareKilometers::new(1.0).to::<Hectare>().value(), 100.0, max_relative = 1e-12);
        assert_relative_eq!(Liters::new(1.0).to::<CubicCentimeter>().value(), 1000.0, max_relative = 1e-12);
        assert_relative_eq!(Milliliters::new(1.0).to::<CubicCentimeter>().value(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_from() {
        let cm: Centimeters = Meters::new(1.5).into();
        assert_relative_eq!(cm.value(), 150.0, max_relative = 1e-12);
        let m3: CubicMeters = Liters::new(2500.0).into();
        assert_relative_eq!(m3.value(), 2.5, max_relative = 1e-12);
    }

    #[test]
    fn test_display() {
        assert_eq!(SquareMeters::new(6.0).to_string(), "6 m²");
        assert_eq!(Feet::new(3.0).to_string(), "3 ft");
    }
}
