//! Quantity type and its implementations.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::*;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use metra_core::{FormatTemplate, UnitError};

use crate::{convert, AnyQuantity, ConversionContext, Unit, UnitProxy};

/// A value tagged with a unit known at compile time.
///
/// `Quantity<U>` wraps an `f64` together with phantom type information about
/// its unit `U`. Equality and ordering compare the raw values exactly, with no
/// tolerance: two quantities of one unit are equal iff their numbers are.
///
/// ```rust
/// use metra_units::units::{Meters, Millimeter};
///
/// let d = Meters::new(1.0);
/// assert_eq!(d.to::<Millimeter>().value(), 1000.0);
/// assert_eq!(d + Meters::new(0.5), Meters::new(1.5));
/// ```
pub struct Quantity<U: Unit>(f64, PhantomData<U>);

impl<U: Unit> Quantity<U> {
    /// A constant representing NaN for this quantity type.
    pub const NAN: Self = Self::new(f64::NAN);

    /// Creates a new quantity with the given value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw numeric value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// One unit.
    #[inline]
    pub const fn one() -> Self {
        Self::new(1.0)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0)
    }

    /// The runtime proxy of this quantity's unit.
    #[inline]
    pub fn unit(&self) -> &'static dyn UnitProxy {
        U::proxy()
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.0.min(other.0))
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.0.max(other.0))
    }

    /// The quantity plus one unit.
    #[inline]
    pub fn increment(self) -> Self {
        Self::new(self.0 + 1.0)
    }

    /// The quantity minus one unit.
    #[inline]
    pub fn decrement(self) -> Self {
        Self::new(self.0 - 1.0)
    }

    /// Converts to another unit of the same kind using the compile-time
    /// factors.
    ///
    /// Volatile units (currencies) should go through [`Quantity::to_in`] so
    /// that configured rates apply.
    ///
    /// ```rust
    /// use metra_units::units::{Feet, Inch};
    /// assert!((Feet::new(1.0).to::<Inch>().value() - 12.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn to<T: Unit<Kind = U::Kind>>(self) -> Quantity<T> {
        Quantity::new(T::FACTOR / U::FACTOR * self.0)
    }

    /// Converts to another unit of the same kind using the factors in effect
    /// in `ctx`.
    pub fn to_in<T: Unit<Kind = U::Kind>>(self, ctx: &ConversionContext) -> Quantity<T> {
        Quantity::new(ctx.factor(T::proxy()) / ctx.factor(U::proxy()) * self.0)
    }

    /// Builds this quantity from one whose unit is only known at run time.
    ///
    /// Fails with [`UnitError::IncompatibleUnit`] when the families differ.
    pub fn from_any(quantity: &AnyQuantity, ctx: &ConversionContext) -> Result<Self, UnitError> {
        convert::convert(quantity.value(), quantity.unit(), U::proxy(), ctx).map(Self::new)
    }

    /// Forgets the static unit.
    #[inline]
    pub fn erase(self) -> AnyQuantity {
        AnyQuantity::new(self.0, U::proxy())
    }

    /// Renders with an explicit template and the symbol at `symbol_index`.
    pub fn format_with(&self, template: &FormatTemplate, symbol_index: usize) -> String {
        template.render(self.0, U::SYMBOLS.get(symbol_index), U::NAME, None)
    }

    /// Renders with the template configured in `ctx` for this unit.
    pub fn format_in(&self, ctx: &ConversionContext) -> String {
        ctx.template(U::proxy()).render(self.0, U::SYMBOLS.primary(), U::NAME, None)
    }
}

impl<U: Unit> Clone for Quantity<U> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit> Copy for Quantity<U> {}

impl<U: Unit> Default for Quantity<U> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<U: Unit> fmt::Debug for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.0)
            .field("unit", &U::NAME)
            .finish()
    }
}

/// Renders through the unit's format template with its primary symbol. A
/// precision given to the formatter (`{:.2}`) applies to the value.
impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = U::proxy()
            .template()
            .render(self.0, U::SYMBOLS.primary(), U::NAME, f.precision());
        f.write_str(&rendered)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> PartialEq for Quantity<U> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<U: Unit> PartialEq<f64> for Quantity<U> {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl<U: Unit> PartialOrd for Quantity<U> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<U: Unit> AddAssign for Quantity<U> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<U: Unit> SubAssign for Quantity<U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<U: Unit> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;
    #[inline]
    fn mul(self, rhs: Quantity<U>) -> Quantity<U> {
        rhs * self
    }
}

impl<U: Unit> MulAssign<f64> for Quantity<U> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.0 *= rhs;
    }
}

impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<U: Unit> DivAssign<f64> for Quantity<U> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.0 /= rhs;
    }
}

/// Same-unit division is a plain ratio.
impl<U: Unit> Div for Quantity<U> {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

impl<U: Unit> Sum for Quantity<U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, q| acc + q)
    }
}

impl<U: Unit> From<f64> for Quantity<U> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Generates `From` implementations between every pair of the listed units.
/// Only for families whose factors are physical constants.
#[macro_export]
macro_rules! impl_unit_conversions {
    ($unit:ty) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<$crate::Quantity<$first>> for $crate::Quantity<$rest> {
                fn from(value: $crate::Quantity<$first>) -> Self {
                    value.to::<$rest>()
                }
            }

            impl From<$crate::Quantity<$rest>> for $crate::Quantity<$first> {
                fn from(value: $crate::Quantity<$rest>) -> Self {
                    value.to::<$first>()
                }
            }
        )+

        $crate::impl_unit_conversions!($($rest),+);
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Serialize for Quantity<U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, U: Unit> Deserialize<'de> for Quantity<U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Quantity::new)
    }
}

/// Serde helper serialising a quantity as `{"value": 1.5, "unit": "m"}`.
///
/// ```rust
/// use metra_units::units::Meters;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Beam {
///     #[serde(with = "metra_units::serde_with_unit")]
///     length: Meters,
/// }
///
/// let json = serde_json::to_string(&Beam { length: Meters::new(2.5) }).unwrap();
/// assert_eq!(json, r#"{"length":{"value":2.5,"unit":"m"}}"#);
/// ```
pub mod serde_with_unit {
    use super::*;
    use serde::de::Error;

    #[derive(Serialize)]
    struct TaggedRef<'a> {
        value: f64,
        unit: &'a str,
    }

    #[derive(Deserialize)]
    struct Tagged {
        value: f64,
        #[serde(default)]
        unit: Option<String>,
    }

    pub fn serialize<U: Unit, S: Serializer>(quantity: &Quantity<U>, serializer: S) -> Result<S::Ok, S::Error> {
        TaggedRef { value: quantity.value(), unit: U::SYMBOLS.primary() }.serialize(serializer)
    }

    /// Accepts any of the unit's symbols; a missing unit is taken as `U`.
    pub fn deserialize<'de, U: Unit, D: Deserializer<'de>>(deserializer: D) -> Result<Quantity<U>, D::Error> {
        let tagged = Tagged::deserialize(deserializer)?;
        match tagged.unit {
            Some(unit) if !U::SYMBOLS.contains(&unit) => Err(D::Error::custom(format!(
                "unit mismatch: expected '{}', found '{}'",
                U::SYMBOLS.primary(),
                unit
            ))),
            _ => Ok(Quantity::new(tagged.value)),
        }
    }
}
