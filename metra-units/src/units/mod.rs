//! Built-in unit catalogue, grouped by family.
//!
//! - [`length`]: length, area and volume
//! - [`time`]: time and frequency
//! - [`mass`]
//! - [`mechanics`]: velocity, acceleration, force, pressure, energy, power
//! - [`electric`]: current, voltage, resistance, conductance, charge
//! - [`temperature`]: degree units and the temperature scales
//! - [`angle`]
//! - [`currency`]: exchange-rate units
//! - [`ratio`]: dimensionless units
//!
//! Every unit and relation is also re-exported here.

pub mod angle;
pub mod currency;
pub mod electric;
pub mod length;
pub mod mass;
pub mod mechanics;
pub mod ratio;
pub mod temperature;
pub mod time;

pub use angle::*;
pub use currency::*;
pub use electric::*;
pub use length::*;
pub use mass::*;
pub use mechanics::*;
pub use ratio::*;
pub use temperature::*;
pub use time::*;

use crate::compose::derived_units;
use crate::{Unit, UnitProxy};

macro_rules! proxies {
    ($($unit:ty),+ $(,)?) => {
        vec![$(<$unit as Unit>::proxy()),+]
    };
}

/// Every built-in unit, reference unit of each family first
pub fn all() -> Vec<&'static dyn UnitProxy> {
    proxies![
        // length, area, volume
        Meter, Millimeter, Centimeter, Kilometer, Inch, Foot, Yard, Mile, NauticalMile,
        SquareMeter, SquareMillimeter, SquareCentimeter, SquareKilometer, SquareInch, SquareFoot, Hectare,
        CubicMeter, Liter, Milliliter, CubicCentimeter, CubicFoot,
        // time, frequency
        Second, Millisecond, Minute, Hour, Day, Week,
        Hertz, Kilohertz, Megahertz, RevolutionPerMinute,
        // mass
        Kilogram, Gram, Milligram, Tonne, Pound, Ounce,
        // mechanics
        MeterPerSecond, KilometerPerHour, MilePerHour, FootPerSecond, Knot,
        MeterPerSecondSquared, StandardGravity,
        Newton, Kilonewton, PoundForce,
        Pascal, Kilopascal, Bar, Psi, Atmosphere,
        Joule, Kilojoule, WattHour, KilowattHour, Calorie, Kilocalorie,
        Watt, Milliwatt, Kilowatt, Megawatt, Horsepower,
        // electric
        Ampere, Milliampere,
        Volt, Millivolt, Kilovolt,
        Ohm, Kiloohm,
        Siemens,
        Coulomb, AmpereHour, MilliampereHour,
        // temperature
        Kelvin, DegreeCelsius, DegreeFahrenheit, DegreeRankine,
        // angle
        Radian, Degree, Arcminute, Arcsecond, Gradian, Turn,
        // currency
        Eur, Usd, Gbp, Chf, Jpy,
        // dimensionless
        Unitless, Percent, PartsPerMillion,
    ]
}

derived_units! {
    /// Every built-in derived-unit relation
    pub fn relations;

    // geometry
    Meter * Meter => SquareMeter,
    Millimeter * Millimeter => SquareMillimeter,
    Centimeter * Centimeter => SquareCentimeter,
    Kilometer * Kilometer => SquareKilometer,
    Inch * Inch => SquareInch,
    Foot * Foot => SquareFoot,
    SquareMeter * Meter => CubicMeter,
    Meter * SquareMeter => CubicMeter,
    SquareCentimeter * Centimeter => CubicCentimeter,
    Centimeter * SquareCentimeter => CubicCentimeter,
    SquareFoot * Foot => CubicFoot,
    Foot * SquareFoot => CubicFoot,
    SquareMeter / Meter => Meter,
    CubicMeter / Meter => SquareMeter,
    CubicMeter / SquareMeter => Meter,

    // motion
    Meter / Second => MeterPerSecond,
    Kilometer / Hour => KilometerPerHour,
    Mile / Hour => MilePerHour,
    Foot / Second => FootPerSecond,
    NauticalMile / Hour => Knot,
    MeterPerSecond * Second => Meter,
    Second * MeterPerSecond => Meter,
    KilometerPerHour * Hour => Kilometer,
    Hour * KilometerPerHour => Kilometer,
    Meter / MeterPerSecond => Second,
    MeterPerSecond / Second => MeterPerSecondSquared,
    Meter * Hertz => MeterPerSecond,
    Hertz * Meter => MeterPerSecond,

    // force and pressure
    Kilogram * MeterPerSecondSquared => Newton,
    MeterPerSecondSquared * Kilogram => Newton,
    Newton / Kilogram => MeterPerSecondSquared,
    Newton / SquareMeter => Pascal,
    Kilonewton / SquareMeter => Kilopascal,
    PoundForce / SquareInch => Psi,
    Pascal * SquareMeter => Newton,
    SquareMeter * Pascal => Newton,

    // energy and power
    Newton * Meter => Joule,
    Meter * Newton => Joule,
    Pascal * CubicMeter => Joule,
    CubicMeter * Pascal => Joule,
    Watt * Second => Joule,
    Second * Watt => Joule,
    Watt * Hour => WattHour,
    Hour * Watt => WattHour,
    Kilowatt * Hour => KilowattHour,
    Hour * Kilowatt => KilowattHour,
    Joule / Second => Watt,
    Joule / Watt => Second,
    WattHour / Hour => Watt,
    KilowattHour / Hour => Kilowatt,
    Newton * MeterPerSecond => Watt,
    MeterPerSecond * Newton => Watt,

    // electricity
    Volt * Ampere => Watt,
    Ampere * Volt => Watt,
    Watt / Volt => Ampere,
    Watt / Ampere => Volt,
    Volt / Ampere => Ohm,
    Volt / Ohm => Ampere,
    Ohm * Ampere => Volt,
    Ampere * Ohm => Volt,
    Ampere / Volt => Siemens,
    Siemens * Volt => Ampere,
    Volt * Siemens => Ampere,
    Coulomb / Second => Ampere,
    Coulomb / Ampere => Second,
    Ampere * Second => Coulomb,
    Second * Ampere => Coulomb,
    Ampere * Hour => AmpereHour,
    Hour * Ampere => AmpereHour,
    Milliampere * Hour => MilliampereHour,
    Hour * Milliampere => MilliampereHour,
    Volt * Coulomb => Joule,
    Coulomb * Volt => Joule,

    // frequency
    Unitless / Second => Hertz,
    Hertz * Second => Unitless,
    Second * Hertz => Unitless,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique() {
        let mut seen = HashSet::new();
        for unit in all() {
            assert!(seen.insert(unit.name().to_lowercase()), "{} listed twice", unit.name());
        }
    }

    #[test]
    fn test_reference_units() {
        for unit in [Meter::proxy(), Second::proxy(), Kilogram::proxy(), Eur::proxy(), Radian::proxy()] {
            assert_eq!(unit.factor(), 1.0, "{}", unit.name());
        }
    }

    #[test]
    fn test_relations_hold() {
        for relation in relations() {
            assert!(relation.check().is_ok(), "{relation}");
        }
    }

    #[test]
    fn test_relation_values() {
        assert_eq!(Meters::new(2.0) * Meters::new(3.0), SquareMeters::new(6.0));
        assert_eq!(Kilowatts::new(2.0) * Hours::new(1.5), KilowattHours::new(3.0));
        assert_eq!(Kilometers::new(30.0) / Hours::new(0.5), KilometersPerHour::new(60.0));
        assert_eq!(Watts::new(60.0) / Volts::new(12.0), Amperes::new(5.0));
        assert_eq!(Numbers::new(1.0) / Seconds::new(0.5), Hertzes::new(2.0));
        assert_eq!(Kilograms::new(2.0) * MetersPerSecondSquared::new(9.0), Newtons::new(18.0));
        assert_eq!(Hertzes::new(2.0) * Meters::new(3.0), MetersPerSecond::new(6.0));
        assert_eq!(CubicMeters::new(2.0) * Pascals::new(3.0), Joules::new(6.0));
        assert_eq!(Hours::new(2.0) * KilometersPerHour::new(3.0), Kilometers::new(6.0));
        assert_eq!(Feet::new(2.0) * SquareFeet::new(3.0), CubicFeet::new(6.0));
    }
}
