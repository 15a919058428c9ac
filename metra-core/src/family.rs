//! Convertibility families
//!
//! A family is a human-assigned id grouping units that convert into each
//! other through their scale factors. Every unit of a family must share one
//! dimension; the opposite does not hold (angles and currencies share the
//! "other" dimension but never convert).

use std::fmt;
use serde::{Serialize, Deserialize};

/// Identifier of a group of mutually convertible units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Family(pub u16);

impl Family {
    pub const DIMENSIONLESS: Family = Family(0);
    pub const LENGTH: Family = Family(1);
    pub const AREA: Family = Family(2);
    pub const VOLUME: Family = Family(3);
    pub const TIME: Family = Family(4);
    pub const MASS: Family = Family(5);
    pub const VELOCITY: Family = Family(6);
    pub const ACCELERATION: Family = Family(7);
    pub const FORCE: Family = Family(8);
    pub const PRESSURE: Family = Family(9);
    pub const ENERGY: Family = Family(10);
    pub const POWER: Family = Family(11);
    pub const CURRENT: Family = Family(12);
    pub const VOLTAGE: Family = Family(13);
    pub const RESISTANCE: Family = Family(14);
    pub const CONDUCTANCE: Family = Family(15);
    pub const CHARGE: Family = Family(16);
    pub const FREQUENCY: Family = Family(17);
    pub const TEMPERATURE: Family = Family(18);
    pub const ANGLE: Family = Family(19);
    pub const CURRENCY: Family = Family(20);

    /// Name of a built-in family
    pub fn name(&self) -> Option<&'static str> {
        let name = match self.0 {
            0 => "dimensionless",
            1 => "length",
            2 => "area",
            3 => "volume",
            4 => "time",
            5 => "mass",
            6 => "velocity",
            7 => "acceleration",
            8 => "force",
            9 => "pressure",
            10 => "energy",
            11 => "power",
            12 => "current",
            13 => "voltage",
            14 => "resistance",
            15 => "conductance",
            16 => "charge",
            17 => "frequency",
            18 => "temperature",
            19 => "angle",
            20 => "currency",
            _ => return None,
        };
        Some(name)
    }

    /// Look up a built-in family by name
    pub fn from_name(name: &str) -> Option<Family> {
        (0..=20u16).map(Family).find(|f| f.name() == Some(name))
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "#{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Family::LENGTH.name(), Some("length"));
        assert_eq!(Family::CURRENCY.name(), Some("currency"));
        assert_eq!(Family(900).name(), None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Family::from_name("pressure"), Some(Family::PRESSURE));
        assert_eq!(Family::from_name("flux"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Family::ANGLE.to_string(), "angle");
        assert_eq!(Family(321).to_string(), "#321");
    }
}
