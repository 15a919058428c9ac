//! Dimensional analysis types
//!
//! Each unit has a dimension represented as a 7-element vector of SI base
//! exponents, [length, mass, time, current, temperature, amount, luminosity],
//! plus an `other` exponent for quantities that are not physical (currency,
//! plane angle). A dimension with a non-zero `other` component is never equal
//! to the plain dimensionless one.

use std::fmt;
use std::ops::{Div, Mul};
use serde::{Serialize, Deserialize};

/// Dimension indices for the 7 SI base quantities
pub const LENGTH: usize = 0;
pub const MASS: usize = 1;
pub const TIME: usize = 2;
pub const CURRENT: usize = 3;
pub const TEMPERATURE: usize = 4;
pub const AMOUNT: usize = 5;
pub const LUMINOSITY: usize = 6;

const fn base(index: usize) -> Dimension {
    let mut exponents = [0i32; 7];
    exponents[index] = 1;
    Dimension { exponents, other: 0 }
}

/// Represents the dimensions of a unit as exponents of the 7 SI base
/// dimensions and of the non-physical "other" dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    /// [length, mass, time, current, temperature, amount, luminosity]
    pub exponents: [i32; 7],
    /// Exponent of the non-physical dimension
    #[serde(default)]
    pub other: i32,
}

impl Dimension {
    /// Dimensionless quantity (all exponents zero)
    pub const DIMENSIONLESS: Dimension = Dimension { exponents: [0; 7], other: 0 };

    /// Non-physical dimension shared by angles and currencies [X]
    pub const OTHER: Dimension = Dimension { exponents: [0; 7], other: 1 };

    /// Length dimension [L]
    pub const LENGTH: Dimension = base(LENGTH);

    /// Mass dimension [M]
    pub const MASS: Dimension = base(MASS);

    /// Time dimension [T]
    pub const TIME: Dimension = base(TIME);

    /// Electric current dimension [I]
    pub const CURRENT: Dimension = base(CURRENT);

    /// Temperature dimension [Θ]
    pub const TEMPERATURE: Dimension = base(TEMPERATURE);

    /// Amount of substance dimension [N]
    pub const AMOUNT: Dimension = base(AMOUNT);

    /// Luminous intensity dimension [J]
    pub const LUMINOSITY: Dimension = base(LUMINOSITY);

    /// Area [L^2]
    pub const AREA: Dimension = Self::LENGTH.power(2);

    /// Volume [L^3]
    pub const VOLUME: Dimension = Self::LENGTH.power(3);

    /// Frequency [T^-1]
    pub const FREQUENCY: Dimension = Self::TIME.invert();

    /// Velocity [L T^-1]
    pub const VELOCITY: Dimension = Self::LENGTH.divide(Self::TIME);

    /// Acceleration [L T^-2]
    pub const ACCELERATION: Dimension = Self::VELOCITY.divide(Self::TIME);

    /// Force [M L T^-2]
    pub const FORCE: Dimension = Self::MASS.multiply(Self::ACCELERATION);

    /// Energy [M L^2 T^-2]
    pub const ENERGY: Dimension = Self::FORCE.multiply(Self::LENGTH);

    /// Power [M L^2 T^-3]
    pub const POWER: Dimension = Self::ENERGY.divide(Self::TIME);

    /// Pressure [M L^-1 T^-2]
    pub const PRESSURE: Dimension = Self::FORCE.divide(Self::AREA);

    /// Electric charge [I T]
    pub const CHARGE: Dimension = Self::CURRENT.multiply(Self::TIME);

    /// Voltage [M L^2 T^-3 I^-1]
    pub const VOLTAGE: Dimension = Self::POWER.divide(Self::CURRENT);

    /// Resistance [M L^2 T^-3 I^-2]
    pub const RESISTANCE: Dimension = Self::VOLTAGE.divide(Self::CURRENT);

    /// Conductance [M^-1 L^-2 T^3 I^2]
    pub const CONDUCTANCE: Dimension = Self::RESISTANCE.invert();

    /// Create a new physical dimension from exponents
    pub const fn new(exponents: [i32; 7]) -> Self {
        Dimension { exponents, other: 0 }
    }

    /// Create a dimension with an explicit "other" exponent
    pub const fn with_other(exponents: [i32; 7], other: i32) -> Self {
        Dimension { exponents, other }
    }

    /// Check if this is a dimensionless quantity
    pub const fn is_dimensionless(&self) -> bool {
        let mut i = 0;
        while i < 7 {
            if self.exponents[i] != 0 {
                return false;
            }
            i += 1;
        }
        self.other == 0
    }

    /// Check if this dimension carries the non-physical component
    pub const fn is_other(&self) -> bool {
        self.other != 0
    }

    /// Multiply dimensions (add exponents)
    pub const fn multiply(self, other: Dimension) -> Dimension {
        let mut exponents = [0i32; 7];
        let mut i = 0;
        while i < 7 {
            exponents[i] = self.exponents[i] + other.exponents[i];
            i += 1;
        }
        Dimension { exponents, other: self.other + other.other }
    }

    /// Divide dimensions (subtract exponents)
    pub const fn divide(self, other: Dimension) -> Dimension {
        let mut exponents = [0i32; 7];
        let mut i = 0;
        while i < 7 {
            exponents[i] = self.exponents[i] - other.exponents[i];
            i += 1;
        }
        Dimension { exponents, other: self.other - other.other }
    }

    /// Raise to integer power (multiply exponents)
    pub const fn power(self, exp: i32) -> Dimension {
        let mut exponents = [0i32; 7];
        let mut i = 0;
        while i < 7 {
            exponents[i] = self.exponents[i] * exp;
            i += 1;
        }
        Dimension { exponents, other: self.other * exp }
    }

    /// Invert dimensions (negate exponents)
    pub const fn invert(self) -> Dimension {
        self.power(-1)
    }

    /// Const equality, usable when checking relations at compile time
    pub const fn const_eq(&self, other: &Dimension) -> bool {
        let mut i = 0;
        while i < 7 {
            if self.exponents[i] != other.exponents[i] {
                return false;
            }
            i += 1;
        }
        self.other == other.other
    }

    /// Get the dimension name if it matches a common dimension
    pub fn name(&self) -> Option<&'static str> {
        if self.is_other() {
            return if self.exponents == [0; 7] && self.other == 1 {
                Some("other")
            } else {
                None
            };
        }
        match self.exponents {
            [0, 0, 0, 0, 0, 0, 0] => Some("dimensionless"),
            [1, 0, 0, 0, 0, 0, 0] => Some("length"),
            [0, 1, 0, 0, 0, 0, 0] => Some("mass"),
            [0, 0, 1, 0, 0, 0, 0] => Some("time"),
            [0, 0, 0, 1, 0, 0, 0] => Some("current"),
            [0, 0, 0, 0, 1, 0, 0] => Some("temperature"),
            [0, 0, 0, 0, 0, 1, 0] => Some("amount"),
            [0, 0, 0, 0, 0, 0, 1] => Some("luminosity"),
            [1, 0, -1, 0, 0, 0, 0] => Some("velocity"),
            [1, 0, -2, 0, 0, 0, 0] => Some("acceleration"),
            [1, 1, -2, 0, 0, 0, 0] => Some("force"),
            [2, 1, -2, 0, 0, 0, 0] => Some("energy"),
            [2, 1, -3, 0, 0, 0, 0] => Some("power"),
            [-1, 1, -2, 0, 0, 0, 0] => Some("pressure"),
            [2, 0, 0, 0, 0, 0, 0] => Some("area"),
            [3, 0, 0, 0, 0, 0, 0] => Some("volume"),
            [0, 0, -1, 0, 0, 0, 0] => Some("frequency"),
            [0, 0, 1, 1, 0, 0, 0] => Some("charge"),
            [2, 1, -3, -1, 0, 0, 0] => Some("voltage"),
            [2, 1, -3, -2, 0, 0, 0] => Some("resistance"),
            [-2, -1, 3, 2, 0, 0, 0] => Some("conductance"),
            _ => None,
        }
    }
}

impl Mul for Dimension {
    type Output = Dimension;

    fn mul(self, rhs: Dimension) -> Dimension {
        self.multiply(rhs)
    }
}

impl Div for Dimension {
    type Output = Dimension;

    fn div(self, rhs: Dimension) -> Dimension {
        self.divide(rhs)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = ["L", "M", "T", "I", "Θ", "N", "J"];
        let mut parts = Vec::new();

        let exps = self.exponents.iter().copied().chain(std::iter::once(self.other));
        for (name, exp) in names.iter().chain(std::iter::once(&"X")).zip(exps) {
            match exp {
                0 => {}
                1 => parts.push(name.to_string()),
                _ => parts.push(format!("{}^{}", name, exp)),
            }
        }

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensionless() {
        assert!(Dimension::DIMENSIONLESS.is_dimensionless());
        assert!(!Dimension::LENGTH.is_dimensionless());
        assert!(!Dimension::OTHER.is_dimensionless());
    }

    #[test]
    fn test_other_is_distinct_from_dimensionless() {
        assert_ne!(Dimension::OTHER, Dimension::DIMENSIONLESS);
        assert!(Dimension::OTHER.is_other());
        assert!(!Dimension::VOLTAGE.is_other());
        // ratio of two currencies is a plain number again
        assert_eq!(Dimension::OTHER / Dimension::OTHER, Dimension::DIMENSIONLESS);
    }

    #[test]
    fn test_multiply() {
        let velocity = Dimension::LENGTH.divide(Dimension::TIME);
        assert_eq!(velocity, Dimension::VELOCITY);
        assert_eq!(Dimension::LENGTH * Dimension::LENGTH, Dimension::AREA);
    }

    #[test]
    fn test_force() {
        // Force = Mass * Acceleration = M * L * T^-2
        assert_eq!(Dimension::FORCE.exponents, [1, 1, -2, 0, 0, 0, 0]);
    }

    #[test]
    fn test_electrical() {
        assert_eq!(Dimension::VOLTAGE * Dimension::CURRENT, Dimension::POWER);
        assert_eq!(Dimension::CHARGE / Dimension::TIME, Dimension::CURRENT);
        assert_eq!(Dimension::RESISTANCE.exponents, [2, 1, -3, -2, 0, 0, 0]);
    }

    #[test]
    fn test_power() {
        assert_eq!(Dimension::LENGTH.power(2), Dimension::AREA);
        assert_eq!(Dimension::FREQUENCY.invert(), Dimension::TIME);
    }

    #[test]
    fn test_const_eq() {
        assert!(Dimension::AREA.const_eq(&Dimension::new([2, 0, 0, 0, 0, 0, 0])));
        assert!(!Dimension::OTHER.const_eq(&Dimension::DIMENSIONLESS));
    }

    #[test]
    fn test_name() {
        assert_eq!(Dimension::PRESSURE.name(), Some("pressure"));
        assert_eq!(Dimension::OTHER.name(), Some("other"));
        assert_eq!(Dimension::new([4, 0, 0, 0, 0, 0, 0]).name(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Dimension::DIMENSIONLESS), "1");
        assert_eq!(format!("{}", Dimension::LENGTH), "L");
        assert_eq!(format!("{}", Dimension::VELOCITY), "L T^-1");
        assert_eq!(format!("{}", Dimension::OTHER), "X");
    }

    #[test]
    fn test_serde_defaults_other() {
        let dim: Dimension = serde_json::from_str(r#"{"exponents":[1,0,0,0,0,0,0]}"#).unwrap();
        assert_eq!(dim, Dimension::LENGTH);
    }
}
