//! Levels on offset scales
//!
//! A [`Level`] is a point on a scale whose zero is shifted from the absolute
//! zero of its degree unit, such as the Celsius temperature scale. Levels are
//! not quantities: the difference of two levels is a [`Quantity`] of the
//! scale's degree unit, and a level moves by adding such a quantity.
//!
//! `OFFSET` is the scale's zero expressed as a level, in degree units, below
//! the absolute zero: Celsius has `OFFSET == -273.15`, so the level `0 °C`
//! normalizes to `273.15` degrees above absolute zero.
//!
//! ```rust
//! use metra_units::Level;
//! use metra_units::units::{Celsius, KelvinScale};
//!
//! let freezing = Level::<Celsius>::new(0.0);
//! assert_eq!(freezing.to::<KelvinScale>().value(), 273.15);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use metra_core::SymbolSet;

use crate::{ConversionContext, Quantity, Unit};

/// An offset scale over a degree unit
pub trait Scale: 'static {
    /// Unit of differences between levels
    type Degree: Unit;

    /// Zero of the scale relative to absolute zero, in degree units
    const OFFSET: f64;

    const NAME: &'static str;

    const SYMBOLS: SymbolSet;
}

/// A level on scale `S`
pub struct Level<S: Scale>(f64, PhantomData<S>);

impl<S: Scale> Level<S> {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value, PhantomData)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Distance above absolute zero
    pub fn normalized(self) -> Quantity<S::Degree> {
        Quantity::new(self.0 - S::OFFSET)
    }

    pub fn from_normalized(quantity: Quantity<S::Degree>) -> Self {
        Self::new(quantity.value() + S::OFFSET)
    }

    /// The same level on another scale over the same kind of degree unit
    pub fn to<T>(self) -> Level<T>
    where
        T: Scale,
        T::Degree: Unit<Kind = <S::Degree as Unit>::Kind>,
    {
        Level::from_normalized(self.normalized().to::<T::Degree>())
    }

    pub fn to_in<T>(self, ctx: &ConversionContext) -> Level<T>
    where
        T: Scale,
        T::Degree: Unit<Kind = <S::Degree as Unit>::Kind>,
    {
        Level::from_normalized(self.normalized().to_in::<T::Degree>(ctx))
    }
}

impl<S: Scale> Clone for Level<S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Scale> Copy for Level<S> {}

impl<S: Scale> fmt::Debug for Level<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Level")
            .field("value", &self.0)
            .field("scale", &S::NAME)
            .finish()
    }
}

impl<S: Scale> fmt::Display for Level<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} {}", p, self.0, S::SYMBOLS.primary()),
            None => write!(f, "{} {}", self.0, S::SYMBOLS.primary()),
        }
    }
}

impl<S: Scale> PartialEq for Level<S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<S: Scale> PartialOrd for Level<S> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<S: Scale> Sub for Level<S> {
    type Output = Quantity<S::Degree>;
    #[inline]
    fn sub(self, rhs: Self) -> Quantity<S::Degree> {
        Quantity::new(self.0 - rhs.0)
    }
}

impl<S: Scale> Add<Quantity<S::Degree>> for Level<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Quantity<S::Degree>) -> Self {
        Self::new(self.0 + rhs.value())
    }
}

impl<S: Scale> Sub<Quantity<S::Degree>> for Level<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Quantity<S::Degree>) -> Self {
        Self::new(self.0 - rhs.value())
    }
}

impl<S: Scale> AddAssign<Quantity<S::Degree>> for Level<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<S::Degree>) {
        self.0 += rhs.value();
    }
}

impl<S: Scale> SubAssign<Quantity<S::Degree>> for Level<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<S::Degree>) {
        self.0 -= rhs.value();
    }
}

impl<S: Scale> Serialize for Level<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, S: Scale> Deserialize<'de> for Level<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Level::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalized() {
        assert_eq!(Level::<Celsius>::new(0.0).normalized(), DegreesCelsius::new(273.15));
        assert_eq!(Level::<KelvinScale>::new(10.0).normalized(), Kelvins::new(10.0));
        assert_relative_eq!(
            Level::<Fahrenheit>::new(32.0).normalized().value(),
            491.67,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_round_trip() {
        for v in [-40.0, 0.0, 21.5, 100.0] {
            let level = Level::<Celsius>::new(v);
            let back = Level::<Celsius>::from_normalized(level.normalized());
            assert_relative_eq!(back.value(), v, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_between_scales() {
        let boiling = Level::<Celsius>::new(100.0);
        assert_relative_eq!(boiling.to::<Fahrenheit>().value(), 212.0, max_relative = 1e-12);
        assert_relative_eq!(boiling.to::<KelvinScale>().value(), 373.15, max_relative = 1e-12);
        assert_relative_eq!(boiling.to::<RankineScale>().value(), 671.67, max_relative = 1e-12);

        // the two scales meet at -40
        let cold = Level::<Fahrenheit>::new(-40.0).to::<Celsius>();
        assert_relative_eq!(cold.value(), -40.0, max_relative = 1e-12);

        let ctx = ConversionContext::default();
        assert_relative_eq!(boiling.to_in::<Fahrenheit>(&ctx).value(), 212.0, max_relative = 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let morning = Level::<Celsius>::new(12.0);
        let noon = morning + DegreesCelsius::new(9.5);
        assert_eq!(noon, Level::new(21.5));
        assert_eq!(noon - morning, DegreesCelsius::new(9.5));
        assert_eq!(noon - DegreesCelsius::new(1.5), Level::new(20.0));
        assert!(morning < noon);

        let mut t = noon;
        t -= DegreesCelsius::new(0.5);
        t += DegreesCelsius::new(2.0);
        assert_eq!(t, Level::new(23.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Level::<Celsius>::new(21.5).to_string(), "21.5 °C");
        assert_eq!(format!("{:.1}", Level::<Fahrenheit>::new(70.26)), "70.3 °F");
        assert_eq!(
            format!("{:?}", Level::<KelvinScale>::new(3.0)),
            r#"Level { value: 3.0, scale: "kelvin" }"#
        );
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Level::<Celsius>::new(4.0)).unwrap();
        assert_eq!(json, "4.0");
        let back: Level<Celsius> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Level::new(4.0));
    }
}
