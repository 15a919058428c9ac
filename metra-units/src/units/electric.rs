//! Electrical units: current, voltage, resistance, conductance and charge.

use crate::{define_kind, define_unit, impl_unit_conversions, Dimension, Family, Unit};
use super::Hour;

define_kind!(Current => Family::CURRENT);
define_kind!(Voltage => Family::VOLTAGE);
define_kind!(Resistance => Family::RESISTANCE);
define_kind!(Conductance => Family::CONDUCTANCE);
define_kind!(Charge => Family::CHARGE);

define_unit!(
    /// SI base unit of electric current
    Ampere, Amperes {
        kind: Current,
        name: "ampere",
        sense: Dimension::CURRENT,
        factor: 1.0,
        symbols: ["A", "amp"],
    }
);

define_unit!(Milliampere, Milliamperes {
    kind: Current,
    name: "milliampere",
    sense: Dimension::CURRENT,
    factor: 1e3,
    symbols: ["mA"],
});

define_unit!(Volt, Volts {
    kind: Voltage,
    name: "volt",
    sense: Dimension::VOLTAGE,
    factor: 1.0,
    symbols: ["V"],
});

define_unit!(Millivolt, Millivolts {
    kind: Voltage,
    name: "millivolt",
    sense: Dimension::VOLTAGE,
    factor: 1e3,
    symbols: ["mV"],
});

define_unit!(Kilovolt, Kilovolts {
    kind: Voltage,
    name: "kilovolt",
    sense: Dimension::VOLTAGE,
    factor: 1e-3,
    symbols: ["kV"],
});

define_unit!(Ohm, Ohms {
    kind: Resistance,
    name: "ohm",
    sense: Dimension::RESISTANCE,
    factor: 1.0,
    symbols: ["Ω", "ohm"],
});

define_unit!(Kiloohm, Kiloohms {
    kind: Resistance,
    name: "kiloohm",
    sense: Dimension::RESISTANCE,
    factor: 1e-3,
    symbols: ["kΩ", "kohm"],
});

define_unit!(Siemens, SiemensQuantity {
    kind: Conductance,
    name: "siemens",
    sense: Dimension::CONDUCTANCE,
    factor: 1.0,
    symbols: ["S"],
});

define_unit!(Coulomb, Coulombs {
    kind: Charge,
    name: "coulomb",
    sense: Dimension::CHARGE,
    factor: 1.0,
    symbols: ["C"],
});

define_unit!(AmpereHour, AmpereHours {
    kind: Charge,
    name: "ampere_hour",
    sense: Dimension::CHARGE,
    factor: Hour::FACTOR,
    symbols: ["Ah"],
});

define_unit!(MilliampereHour, MilliampereHours {
    kind: Charge,
    name: "milliampere_hour",
    sense: Dimension::CHARGE,
    factor: Milliampere::FACTOR * Hour::FACTOR,
    symbols: ["mAh"],
});

impl_unit_conversions!(Ampere, Milliampere);
impl_unit_conversions!(Volt, Millivolt, Kilovolt);
impl_unit_conversions!(Ohm, Kiloohm);
impl_unit_conversions!(Coulomb, AmpereHour, MilliampereHour);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_conversions() {
        assert_eq!(Amperes::new(1.5).to::<Milliampere>(), Milliamperes::new(1500.0));
        assert_relative_eq!(Kilovolts::new(2.0).to::<Volt>().value(), 2000.0, max_relative = 1e-12);
        assert_relative_eq!(AmpereHours::new(1.0).to::<Coulomb>().value(), 3600.0, max_relative = 1e-12);
        assert_relative_eq!(MilliampereHours::new(2000.0).to::<AmpereHour>().value(), 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_display() {
        assert_eq!(Ohms::new(220.0).to_string(), "220 Ω");
        assert_eq!(Milliamperes::new(20.0).to_string(), "20 mA");
    }
}
