//! Mechanical units: velocity, acceleration, force, pressure, energy and
//! power.
//!
//! Derived units take their factors from the units they are built from, so
//! that the declared relations (`kilometer / hour => kilometer_per_hour`)
//! hold by construction.

use crate::{define_kind, define_unit, impl_unit_conversions, Dimension, Family, Unit};
use super::{Foot, Hour, Kilometer, Mile, NauticalMile, SquareInch};

define_kind!(Velocity => Family::VELOCITY);
define_kind!(Acceleration => Family::ACCELERATION);
define_kind!(Force => Family::FORCE);
define_kind!(Pressure => Family::PRESSURE);
define_kind!(Energy => Family::ENERGY);
define_kind!(Power => Family::POWER);

// ── Velocity ────────────────────────────────────────────────────────────────

define_unit!(MeterPerSecond, MetersPerSecond {
    kind: Velocity,
    name: "meter_per_second",
    sense: Dimension::VELOCITY,
    factor: 1.0,
    symbols: ["m/s"],
});

define_unit!(KilometerPerHour, KilometersPerHour {
    kind: Velocity,
    name: "kilometer_per_hour",
    sense: Dimension::VELOCITY,
    factor: Kilometer::FACTOR / Hour::FACTOR,
    symbols: ["km/h", "kph"],
});

define_unit!(MilePerHour, MilesPerHour {
    kind: Velocity,
    name: "mile_per_hour",
    sense: Dimension::VELOCITY,
    factor: Mile::FACTOR / Hour::FACTOR,
    symbols: ["mph"],
});

define_unit!(FootPerSecond, FeetPerSecond {
    kind: Velocity,
    name: "foot_per_second",
    sense: Dimension::VELOCITY,
    factor: Foot::FACTOR,
    symbols: ["ft/s"],
});

define_unit!(
    /// One nautical mile per hour
    Knot, Knots {
        kind: Velocity,
        name: "knot",
        sense: Dimension::VELOCITY,
        factor: NauticalMile::FACTOR / Hour::FACTOR,
        symbols: ["kn", "kt"],
    }
);

// ── Acceleration ────────────────────────────────────────────────────────────

define_unit!(MeterPerSecondSquared, MetersPerSecondSquared {
    kind: Acceleration,
    name: "meter_per_second_squared",
    sense: Dimension::ACCELERATION,
    factor: 1.0,
    symbols: ["m/s²", "m/s2"],
});

define_unit!(
    /// Standard gravity, 9.80665 m/s²
    StandardGravity, StandardGravities {
        kind: Acceleration,
        name: "standard_gravity",
        sense: Dimension::ACCELERATION,
        factor: 1.0 / 9.806_65,
        symbols: ["g0", "gn"],
    }
);

// ── Force ───────────────────────────────────────────────────────────────────

define_unit!(Newton, Newtons {
    kind: Force,
    name: "newton",
    sense: Dimension::FORCE,
    factor: 1.0,
    symbols: ["N"],
});

define_unit!(Kilonewton, Kilonewtons {
    kind: Force,
    name: "kilonewton",
    sense: Dimension::FORCE,
    factor: 1e-3,
    symbols: ["kN"],
});

define_unit!(
    /// Pound-force: standard gravity acting on one avoirdupois pound
    PoundForce, PoundsForce {
        kind: Force,
        name: "pound_force",
        sense: Dimension::FORCE,
        factor: 1.0 / (0.453_592_37 * 9.806_65),
        symbols: ["lbf"],
    }
);

// ── Pressure ────────────────────────────────────────────────────────────────

define_unit!(Pascal, Pascals {
    kind: Pressure,
    name: "pascal",
    sense: Dimension::PRESSURE,
    factor: 1.0,
    symbols: ["Pa"],
});

define_unit!(Kilopascal, Kilopascals {
    kind: Pressure,
    name: "kilopascal",
    sense: Dimension::PRESSURE,
    factor: 1e-3,
    symbols: ["kPa"],
});

define_unit!(Bar, Bars {
    kind: Pressure,
    name: "bar",
    sense: Dimension::PRESSURE,
    factor: 1e-5,
    symbols: ["bar"],
});

define_unit!(
    /// Pound-force per square inch
    Psi, Psis {
        kind: Pressure,
        name: "psi",
        sense: Dimension::PRESSURE,
        factor: PoundForce::FACTOR / SquareInch::FACTOR,
        symbols: ["psi"],
    }
);

define_unit!(
    /// Standard atmosphere, 101 325 Pa
    Atmosphere, Atmospheres {
        kind: Pressure,
        name: "atmosphere",
        sense: Dimension::PRESSURE,
        factor: 1.0 / 101_325.0,
        symbols: ["atm"],
    }
);

// ── Energy ──────────────────────────────────────────────────────────────────

define_unit!(Joule, Joules {
    kind: Energy,
    name: "joule",
    sense: Dimension::ENERGY,
    factor: 1.0,
    symbols: ["J"],
});

define_unit!(Kilojoule, Kilojoules {
    kind: Energy,
    name: "kilojoule",
    sense: Dimension::ENERGY,
    factor: 1e-3,
    symbols: ["kJ"],
});

define_unit!(WattHour, WattHours {
    kind: Energy,
    name: "watt_hour",
    sense: Dimension::ENERGY,
    factor: Hour::FACTOR,
    symbols: ["Wh"],
});

define_unit!(KilowattHour, KilowattHours {
    kind: Energy,
    name: "kilowatt_hour",
    sense: Dimension::ENERGY,
    factor: Kilowatt::FACTOR * Hour::FACTOR,
    symbols: ["kWh"],
});

define_unit!(
    /// Thermochemical calorie, exactly 4.184 J
    Calorie, Calories {
        kind: Energy,
        name: "calorie",
        sense: Dimension::ENERGY,
        factor: 1.0 / 4.184,
        symbols: ["cal"],
    }
);

define_unit!(Kilocalorie, Kilocalories {
    kind: Energy,
    name: "kilocalorie",
    sense: Dimension::ENERGY,
    factor: 1.0 / 4184.0,
    symbols: ["kcal"],
});

// ── Power ───────────────────────────────────────────────────────────────────

define_unit!(Watt, Watts {
    kind: Power,
    name: "watt",
    sense: Dimension::POWER,
    factor: 1.0,
    symbols: ["W"],
});

define_unit!(Milliwatt, Milliwatts {
    kind: Power,
    name: "milliwatt",
    sense: Dimension::POWER,
    factor: 1e3,
    symbols: ["mW"],
});

define_unit!(Kilowatt, Kilowatts {
    kind: Power,
    name: "kilowatt",
    sense: Dimension::POWER,
    factor: 1e-3,
    symbols: ["kW"],
});

define_unit!(Megawatt, Megawatts {
    kind: Power,
    name: "megawatt",
    sense: Dimension::POWER,
    factor: 1e-6,
    symbols: ["MW"],
});

define_unit!(
    /// Mechanical horsepower, 550 ft·lbf/s
    Horsepower, Horsepowers {
        kind: Power,
        name: "horsepower",
        sense: Dimension::POWER,
        factor: 1.0 / 745.699_871_582_270_2,
        symbols: ["hp"],
    }
);

impl_unit_conversions!(MeterPerSecond, KilometerPerHour, MilePerHour, FootPerSecond, Knot);
impl_unit_conversions!(MeterPerSecondSquared, StandardGravity);
impl_unit_conversions!(Newton, Kilonewton, PoundForce);
impl_unit_conversions!(Pascal, Kilopascal, Bar, Psi, Atmosphere);
impl_unit_conversions!(Joule, Kilojoule, WattHour, KilowattHour, Calorie, Kilocalorie);
impl_unit_conversions!(Watt, Milliwatt, Kilowatt, Megawatt, Horsepower);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_velocity() {
        assert_relative_eq!(MetersPerSecond::new(10.0).to::<KilometerPerHour>().value(), 36.0, max_relative = 1e-12);
        assert_relative_eq!(Knots::new(1.0).to::<KilometerPerHour>().value(), 1.852, max_relative = 1e-12);
        assert_relative_eq!(MilesPerHour::new(60.0).to::<FootPerSecond>().value(), 88.0, max_relative = 1e-12);
    }

    #[test]
    fn test_pressure() {
        assert_relative_eq!(Atmospheres::new(1.0).to::<Kilopascal>().value(), 101.325, max_relative = 1e-12);
        assert_relative_eq!(Bars::new(1.0).to::<Pascal>().value(), 100_000.0, max_relative = 1e-12);
        assert_relative_eq!(Psis::new(1.0).to::<Pascal>().value(), 6894.757_293_168, max_relative = 1e-9);
    }

    #[test]
    fn test_energy_and_power() {
        assert_relative_eq!(KilowattHours::new(1.0).to::<Joule>().value(), 3.6e6, max_relative = 1e-12);
        assert_relative_eq!(Kilocalories::new(1.0).to::<Calorie>().value(), 1000.0, max_relative = 1e-12);
        assert_relative_eq!(Horsepowers::new(1.0).to::<Watt>().value(), 745.699_871_582_270_2, max_relative = 1e-12);
        let kw: Kilowatts = Megawatts::new(1.5).into();
        assert_relative_eq!(kw.value(), 1500.0, max_relative = 1e-12);
    }

    #[test]
    fn test_force() {
        assert_relative_eq!(PoundsForce::new(1.0).to::<Newton>().value(), 4.448_221_615_260_5, max_relative = 1e-12);
        assert_relative_eq!(StandardGravities::new(1.0).to::<MeterPerSecondSquared>().value(), 9.806_65, max_relative = 1e-12);
    }
}
