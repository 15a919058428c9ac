//! Mass units. The reference unit is the [`Kilogram`].

use crate::{define_kind, define_unit, impl_unit_conversions, Dimension, Family};

define_kind!(Mass => Family::MASS);

define_unit!(
    /// SI base unit of mass
    Kilogram, Kilograms {
        kind: Mass,
        name: "kilogram",
        sense: Dimension::MASS,
        factor: 1.0,
        symbols: ["kg"],
    }
);

define_unit!(Gram, Grams {
    kind: Mass,
    name: "gram",
    sense: Dimension::MASS,
    factor: 1e3,
    symbols: ["g"],
});

define_unit!(Milligram, Milligrams {
    kind: Mass,
    name: "milligram",
    sense: Dimension::MASS,
    factor: 1e6,
    symbols: ["mg"],
});

define_unit!(
    /// Metric ton
    Tonne, Tonnes {
        kind: Mass,
        name: "tonne",
        sense: Dimension::MASS,
        factor: 1e-3,
        symbols: ["t"],
    }
);

define_unit!(
    /// Avoirdupois pound, exactly 0.45359237 kg
    Pound, Pounds {
        kind: Mass,
        name: "pound",
        sense: Dimension::MASS,
        factor: 1.0 / 0.453_592_37,
        symbols: ["lb", "lbs"],
    }
);

define_unit!(Ounce, Ounces {
    kind: Mass,
    name: "ounce",
    sense: Dimension::MASS,
    factor: 16.0 / 0.453_592_37,
    symbols: ["oz"],
});

impl_unit_conversions!(Kilogram, Gram, Milligram, Tonne, Pound, Ounce);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_conversions() {
        assert_eq!(Kilograms::new(2.0).to::<Gram>(), Grams::new(2000.0));
        assert_relative_eq!(Pounds::new(1.0).to::<Ounce>().value(), 16.0, max_relative = 1e-12);
        assert_relative_eq!(Tonnes::new(1.5).to::<Kilogram>().value(), 1500.0, max_relative = 1e-12);
        assert_relative_eq!(Pounds::new(1.0).to::<Gram>().value(), 453.592_37, max_relative = 1e-12);
    }
}
