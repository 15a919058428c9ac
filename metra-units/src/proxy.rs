//! Runtime unit proxies
//!
//! A proxy is the one process-wide object standing for a unit type at run
//! time. Generic code holds `&'static dyn UnitProxy` when the concrete unit
//! is only known dynamically, and [`AnyQuantity`] pairs such a proxy with a
//! value.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::sync::OnceLock;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::error;
use metra_core::{Dimension, Family, FormatTemplate, SymbolSet, UnitError};

use crate::{convert, ConversionContext, Descriptor, Quantity, Unit};

/// Capabilities every unit exposes at run time
pub trait UnitProxy: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;
    fn sense(&self) -> Dimension;
    fn family(&self) -> Family;

    /// The unit's compile-time factor; see [`ConversionContext::factor`] for
    /// the one in effect.
    fn factor(&self) -> f64;

    fn symbols(&self) -> SymbolSet;
    fn format(&self) -> &'static str;

    /// Parsed format template
    fn template(&self) -> &FormatTemplate;

    fn is_volatile(&self) -> bool;

    /// A quantity of this unit
    fn create(&self, value: f64) -> AnyQuantity;

    /// Converts `quantity` into this unit.
    fn from_any(&self, quantity: &AnyQuantity, ctx: &ConversionContext) -> Result<AnyQuantity, UnitError> {
        let value = convert::convert(quantity.value(), quantity.unit(), self.as_dyn(), ctx)?;
        Ok(self.create(value))
    }

    fn descriptor(&self) -> Descriptor {
        Descriptor::of(self.as_dyn(), self.factor())
    }

    /// Identity is by name
    fn is(&self, other: &dyn UnitProxy) -> bool {
        self.name() == other.name()
    }

    #[doc(hidden)]
    fn as_dyn(&self) -> &dyn UnitProxy;
}

/// The proxy of unit `U`. One `static` instance per unit, created by
/// [`define_unit!`](crate::define_unit).
pub struct Proxy<U: Unit> {
    template: OnceLock<FormatTemplate>,
    _unit: PhantomData<fn() -> U>,
}

impl<U: Unit> Proxy<U> {
    pub const fn new() -> Self {
        Proxy { template: OnceLock::new(), _unit: PhantomData }
    }
}

impl<U: Unit> Default for Proxy<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: Unit> fmt::Debug for Proxy<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Proxy({})", U::NAME)
    }
}

impl<U: Unit> UnitProxy for Proxy<U> {
    fn name(&self) -> &'static str {
        U::NAME
    }

    fn sense(&self) -> Dimension {
        U::SENSE
    }

    fn family(&self) -> Family {
        U::FAMILY
    }

    fn factor(&self) -> f64 {
        U::FACTOR
    }

    fn symbols(&self) -> SymbolSet {
        U::SYMBOLS
    }

    fn format(&self) -> &'static str {
        U::FORMAT
    }

    fn template(&self) -> &FormatTemplate {
        self.template.get_or_init(|| {
            FormatTemplate::parse(U::FORMAT).unwrap_or_else(|err| {
                error!(unit = U::NAME, %err, "falling back to the default format");
                FormatTemplate::default()
            })
        })
    }

    fn is_volatile(&self) -> bool {
        U::VOLATILE
    }

    fn create(&self, value: f64) -> AnyQuantity {
        Quantity::<U>::new(value).erase()
    }

    fn as_dyn(&self) -> &dyn UnitProxy {
        self
    }
}

/// A quantity whose unit is only known at run time
#[derive(Clone, Copy)]
pub struct AnyQuantity {
    value: f64,
    unit: &'static dyn UnitProxy,
}

impl AnyQuantity {
    pub fn new(value: f64, unit: &'static dyn UnitProxy) -> Self {
        AnyQuantity { value, unit }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &'static dyn UnitProxy {
        self.unit
    }

    /// Converts into `target`, failing across families.
    pub fn convert_to(&self, target: &'static dyn UnitProxy, ctx: &ConversionContext) -> Result<AnyQuantity, UnitError> {
        let value = convert::convert(self.value, self.unit, target, ctx)?;
        Ok(AnyQuantity::new(value, target))
    }

    /// Recovers the static unit when it is `U`.
    pub fn downcast<U: Unit>(&self) -> Option<Quantity<U>> {
        self.unit.is(U::proxy()).then(|| Quantity::new(self.value))
    }

    /// Compares after expressing `other` in this quantity's unit.
    ///
    /// `Ok(None)` when either value is NaN.
    pub fn try_cmp(&self, other: &AnyQuantity, ctx: &ConversionContext) -> Result<Option<Ordering>, UnitError> {
        let other = convert::convert(other.value, other.unit, self.unit, ctx)?;
        Ok(self.value.partial_cmp(&other))
    }

    /// Renders with the template configured in `ctx`.
    pub fn format_in(&self, ctx: &ConversionContext) -> String {
        ctx.template(self.unit)
            .render(self.value, self.unit.symbols().primary(), self.unit.name(), None)
    }
}

/// Same unit and exactly equal values.
impl PartialEq for AnyQuantity {
    fn eq(&self, other: &Self) -> bool {
        self.unit.is(other.unit) && self.value == other.value
    }
}

impl fmt::Debug for AnyQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyQuantity")
            .field("value", &self.value)
            .field("unit", &self.unit.name())
            .finish()
    }
}

impl fmt::Display for AnyQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.unit.template().render(
            self.value,
            self.unit.symbols().primary(),
            self.unit.name(),
            f.precision(),
        );
        f.write_str(&rendered)
    }
}

impl Serialize for AnyQuantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AnyQuantity", 3)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("unit", self.unit.name())?;
        state.serialize_field("symbol", self.unit.symbols().primary())?;
        state.end()
    }
}

impl<U: Unit> From<Quantity<U>> for AnyQuantity {
    fn from(quantity: Quantity<U>) -> Self {
        quantity.erase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::*;

    #[test]
    fn test_proxy_descriptor() {
        let p = Watt::proxy();
        assert_eq!(p.name(), "watt");
        assert_eq!(p.sense(), Dimension::POWER);
        assert_eq!(p.family(), Family::POWER);
        assert_eq!(p.factor(), 1.0);
        assert_eq!(p.symbols().primary(), "W");
        assert_eq!(p.descriptor().name, "watt");
        assert_eq!(format!("{:?}", p), "Proxy(watt)");
    }

    #[test]
    fn test_proxy_is_singleton() {
        let a = Meter::proxy() as *const dyn UnitProxy as *const ();
        let b = Meter::proxy() as *const dyn UnitProxy as *const ();
        assert_eq!(a, b);
        assert!(Meter::proxy().is(Meters::new(3.0).unit()));
    }

    #[test]
    fn test_create_and_downcast() {
        let q = Ampere::proxy().create(3.0);
        assert_eq!(q.downcast::<Ampere>(), Some(Amperes::new(3.0)));
        assert_eq!(q.downcast::<Volt>(), None);
    }

    #[test]
    fn test_from_any_through_proxy() {
        let ctx = ConversionContext::default();
        let m = Meters::new(1.0).erase();
        let mm = Millimeter::proxy().from_any(&m, &ctx).unwrap();
        assert_eq!(mm, Millimeters::new(1000.0).erase());

        let err = Second::proxy().from_any(&Feet::new(1.0).erase(), &ctx).unwrap_err();
        assert!(err.is_incompatible());
    }

    #[test]
    fn test_try_cmp() {
        let ctx = ConversionContext::default();
        let km = Kilometers::new(1.0).erase();
        let m = Meters::new(999.0).erase();
        assert_eq!(km.try_cmp(&m, &ctx).unwrap(), Some(Ordering::Greater));
        assert!(km.try_cmp(&Seconds::new(1.0).erase(), &ctx).is_err());
        assert_eq!(Meters::NAN.erase().try_cmp(&m, &ctx).unwrap(), None);
    }

    #[test]
    fn test_equality_requires_same_unit() {
        assert_eq!(Meters::new(1.0).erase(), AnyQuantity::from(Meters::new(1.0)));
        assert_ne!(Meters::new(1.0).erase(), Millimeters::new(1.0).erase());
    }

    #[test]
    fn test_display_and_json() {
        let q = Pascals::new(101325.0).erase();
        assert_eq!(q.to_string(), "101325 Pa");
        assert_eq!(format!("{:?}", q), r#"AnyQuantity { value: 101325.0, unit: "pascal" }"#);
        let json = serde_json::to_value(q).unwrap();
        assert_eq!(json, serde_json::json!({"value": 101325.0, "unit": "pascal", "symbol": "Pa"}));
    }
}
