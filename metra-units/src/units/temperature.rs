//! Temperature units and scales.
//!
//! The units here measure temperature differences ("degrees"). Readings on a
//! thermometer are [`Level`](crate::Level)s on one of the scales
//! [`KelvinScale`], [`Celsius`], [`Fahrenheit`] or [`RankineScale`].

use crate::{define_kind, define_unit, impl_unit_conversions, Dimension, Family, Scale, SymbolSet};

define_kind!(Temperature => Family::TEMPERATURE);

define_unit!(
    /// SI base unit of temperature
    Kelvin, Kelvins {
        kind: Temperature,
        name: "kelvin",
        sense: Dimension::TEMPERATURE,
        factor: 1.0,
        symbols: ["K"],
    }
);

define_unit!(DegreeCelsius, DegreesCelsius {
    kind: Temperature,
    name: "degree_celsius",
    sense: Dimension::TEMPERATURE,
    factor: 1.0,
    symbols: ["°C", "degC"],
    format: "{value}{symbol}",
});

define_unit!(DegreeFahrenheit, DegreesFahrenheit {
    kind: Temperature,
    name: "degree_fahrenheit",
    sense: Dimension::TEMPERATURE,
    factor: 1.8,
    symbols: ["°F", "degF"],
    format: "{value}{symbol}",
});

define_unit!(DegreeRankine, DegreesRankine {
    kind: Temperature,
    name: "degree_rankine",
    sense: Dimension::TEMPERATURE,
    factor: 1.8,
    symbols: ["°R", "degR"],
    format: "{value}{symbol}",
});

impl_unit_conversions!(Kelvin, DegreeCelsius, DegreeFahrenheit, DegreeRankine);

/// Absolute scale in kelvins
#[derive(Debug)]
pub enum KelvinScale {}

impl Scale for KelvinScale {
    type Degree = Kelvin;
    const OFFSET: f64 = 0.0;
    const NAME: &'static str = "kelvin";
    const SYMBOLS: SymbolSet = SymbolSet::new(&["K"]);
}

/// Celsius scale: water freezes at 0
#[derive(Debug)]
pub enum Celsius {}

impl Scale for Celsius {
    type Degree = DegreeCelsius;
    const OFFSET: f64 = -273.15;
    const NAME: &'static str = "celsius";
    const SYMBOLS: SymbolSet = SymbolSet::new(&["°C", "degC"]);
}

#[derive(Debug)]
pub enum Fahrenheit {}

impl Scale for Fahrenheit {
    type Degree = DegreeFahrenheit;
    const OFFSET: f64 = -459.67;
    const NAME: &'static str = "fahrenheit";
    const SYMBOLS: SymbolSet = SymbolSet::new(&["°F", "degF"]);
}

/// Absolute scale in Fahrenheit-sized degrees
#[derive(Debug)]
pub enum RankineScale {}

impl Scale for RankineScale {
    type Degree = DegreeRankine;
    const OFFSET: f64 = 0.0;
    const NAME: &'static str = "rankine";
    const SYMBOLS: SymbolSet = SymbolSet::new(&["°R", "degR"]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;

    #[test]
    fn test_degree_sizes() {
        assert_eq!(DegreesCelsius::new(10.0).to::<Kelvin>(), Kelvins::new(10.0));
        assert_eq!(DegreesCelsius::new(10.0).to::<DegreeFahrenheit>(), DegreesFahrenheit::new(18.0));
        assert_eq!(DegreesFahrenheit::new(9.0).to::<DegreeRankine>(), DegreesRankine::new(9.0));
        assert_eq!(DegreesCelsius::new(2.5).to_string(), "2.5°C");
    }

    #[test]
    fn test_freezing_point() {
        let freezing = Level::<Celsius>::new(0.0);
        assert_eq!(freezing.normalized().to::<Kelvin>(), Kelvins::new(273.15));
        assert_eq!(freezing.to::<KelvinScale>(), Level::new(273.15));
    }
}
