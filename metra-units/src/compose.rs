//! Derived-unit relations
//!
//! A [`Relation`] declares that multiplying (or dividing) a quantity of one
//! unit by a quantity of another yields a quantity of a third, e.g.
//! `volt * ampere => watt`. Declared relations obey two laws:
//!
//! - dimension: `result.sense == lhs.sense op rhs.sense`
//! - factor: `result.factor == lhs.factor op rhs.factor` (relative 1e-12)
//!
//! The value of a composed quantity is exactly `a.value op b.value`.
//! Relations are declared with `derived_units!`, which also generates the
//! statically typed `Mul`/`Div` operators on [`Quantity`](crate::Quantity).

use std::fmt;

use serde::{Serialize, Deserialize};
use metra_core::{Dimension, UnitError};

use crate::{convert, AnyQuantity, ConversionContext, Unit, UnitProxy};

/// Relative tolerance of the factor law
pub const FACTOR_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn dimension(self, lhs: Dimension, rhs: Dimension) -> Dimension {
        match self {
            Operator::Multiply => lhs.multiply(rhs),
            Operator::Divide => lhs.divide(rhs),
        }
    }

    /// Applies the operator to two numbers (values or factors)
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// `lhs op rhs => result`
#[derive(Debug, Clone, Copy)]
pub struct Relation {
    pub lhs: &'static dyn UnitProxy,
    pub op: Operator,
    pub rhs: &'static dyn UnitProxy,
    pub result: &'static dyn UnitProxy,
}

impl Relation {
    pub fn new(
        lhs: &'static dyn UnitProxy,
        op: Operator,
        rhs: &'static dyn UnitProxy,
        result: &'static dyn UnitProxy,
    ) -> Self {
        Relation { lhs, op, rhs, result }
    }

    pub fn of<A: Unit, B: Unit, C: Unit>(op: Operator) -> Self {
        Relation::new(A::proxy(), op, B::proxy(), C::proxy())
    }

    /// Checks the dimension and factor laws.
    pub fn check(&self) -> Result<(), UnitError> {
        let expected = self.op.dimension(self.lhs.sense(), self.rhs.sense());
        if self.result.sense() != expected {
            return Err(self.violation(format!(
                "dimension {} differs from {} {} {} = {}",
                self.result.sense(),
                self.lhs.sense(),
                self.op,
                self.rhs.sense(),
                expected
            )));
        }

        let factor = self.op.apply(self.lhs.factor(), self.rhs.factor());
        let scale = factor.abs().max(self.result.factor().abs());
        if !((self.result.factor() - factor).abs() <= FACTOR_TOLERANCE * scale) {
            return Err(self.violation(format!(
                "factor {} differs from {} {} {} = {}",
                self.result.factor(),
                self.lhs.factor(),
                self.op,
                self.rhs.factor(),
                factor
            )));
        }
        Ok(())
    }

    fn violation(&self, detail: String) -> UnitError {
        UnitError::RelationViolation { relation: self.to_string(), detail }
    }

    /// Exactly these operand units
    pub fn matches(&self, lhs: &dyn UnitProxy, op: Operator, rhs: &dyn UnitProxy) -> bool {
        self.op == op && self.lhs.is(lhs) && self.rhs.is(rhs)
    }

    /// Operands of the relation's families, convertible into its units
    pub fn accepts(&self, lhs: &dyn UnitProxy, op: Operator, rhs: &dyn UnitProxy) -> bool {
        self.op == op
            && convert::convertible(lhs, self.lhs)
            && convert::convertible(rhs, self.rhs)
    }

    /// Composes two quantities. Operands in other units of the right family
    /// are first converted into the declared operand units.
    pub fn apply(&self, a: &AnyQuantity, b: &AnyQuantity, ctx: &ConversionContext) -> Result<AnyQuantity, UnitError> {
        let lhs = if a.unit().is(self.lhs) {
            a.value()
        } else {
            convert::convert(a.value(), a.unit(), self.lhs, ctx)?
        };
        let rhs = if b.unit().is(self.rhs) {
            b.value()
        } else {
            convert::convert(b.value(), b.unit(), self.rhs, ctx)?
        };
        Ok(self.result.create(self.op.apply(lhs, rhs)))
    }
}

impl PartialEq for Relation {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op
            && self.lhs.is(other.lhs)
            && self.rhs.is(other.rhs)
            && self.result.is(other.result)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} => {}",
            self.lhs.name(),
            self.op,
            self.rhs.name(),
            self.result.name()
        )
    }
}

impl Serialize for Relation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Relation", 4)?;
        state.serialize_field("lhs", self.lhs.name())?;
        state.serialize_field("op", &self.op)?;
        state.serialize_field("rhs", self.rhs.name())?;
        state.serialize_field("result", self.result.name())?;
        state.end()
    }
}

/// Declares derived-unit relations.
///
/// For each `A * B => C` (or `A / B => C`) this generates the operator impl
/// on `Quantity`, a compile-time assertion of the dimension law, and an
/// entry of the relation list returned by the named function. Commutative
/// products are declared in both orders. `A / A` is already a plain ratio
/// and cannot be declared.
macro_rules! derived_units {
    (@impl $lhs:ident * $rhs:ident => $result:ident) => {
        impl ::core::ops::Mul<$crate::Quantity<$rhs>> for $crate::Quantity<$lhs> {
            type Output = $crate::Quantity<$result>;
            #[inline]
            fn mul(self, rhs: $crate::Quantity<$rhs>) -> Self::Output {
                $crate::Quantity::new(self.value() * rhs.value())
            }
        }

        const _: () = assert!(
            <$result as $crate::Unit>::SENSE
                .const_eq(&<$lhs as $crate::Unit>::SENSE.multiply(<$rhs as $crate::Unit>::SENSE)),
            concat!("dimension mismatch: ", stringify!($lhs * $rhs => $result))
        );
    };

    (@impl $lhs:ident / $rhs:ident => $result:ident) => {
        impl ::core::ops::Div<$crate::Quantity<$rhs>> for $crate::Quantity<$lhs> {
            type Output = $crate::Quantity<$result>;
            #[inline]
            fn div(self, rhs: $crate::Quantity<$rhs>) -> Self::Output {
                $crate::Quantity::new(self.value() / rhs.value())
            }
        }

        const _: () = assert!(
            <$result as $crate::Unit>::SENSE
                .const_eq(&<$lhs as $crate::Unit>::SENSE.divide(<$rhs as $crate::Unit>::SENSE)),
            concat!("dimension mismatch: ", stringify!($lhs / $rhs => $result))
        );
    };

    (@relation $lhs:ident * $rhs:ident => $result:ident) => {
        $crate::Relation::of::<$lhs, $rhs, $result>($crate::Operator::Multiply)
    };

    (@relation $lhs:ident / $rhs:ident => $result:ident) => {
        $crate::Relation::of::<$lhs, $rhs, $result>($crate::Operator::Divide)
    };

    (
        $(#[$meta:meta])*
        $vis:vis fn $fname:ident;
        $($lhs:ident $op:tt $rhs:ident => $result:ident),+ $(,)?
    ) => {
        $( $crate::compose::derived_units!(@impl $lhs $op $rhs => $result); )+

        $(#[$meta])*
        $vis fn $fname() -> Vec<$crate::Relation> {
            vec![$( $crate::compose::derived_units!(@relation $lhs $op $rhs => $result) ),+]
        }
    };
}

pub(crate) use derived_units;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::*;

    #[test]
    fn test_operator() {
        assert_eq!(Operator::Multiply.symbol(), '*');
        assert_eq!(Operator::Divide.apply(6.0, 3.0), 2.0);
        assert_eq!(
            Operator::Divide.dimension(Dimension::LENGTH, Dimension::TIME),
            Dimension::VELOCITY
        );
    }

    #[test]
    fn test_typed_operators() {
        assert_eq!(Meters::new(2.0) * Meters::new(3.0), SquareMeters::new(6.0));
        assert_eq!(Volts::new(2.0) * Amperes::new(3.0), Watts::new(6.0));
        assert_eq!(Amperes::new(3.0) * Volts::new(2.0), Watts::new(6.0));
        assert_eq!(Coulombs::new(10.0) / Seconds::new(4.0), Amperes::new(2.5));
        assert_eq!(Newtons::new(50.0) / SquareMeters::new(2.0), Pascals::new(25.0));
    }

    #[test]
    fn test_check() {
        assert!(Relation::of::<Volt, Ampere, Watt>(Operator::Multiply).check().is_ok());
        assert!(Relation::of::<Kilowatt, Hour, KilowattHour>(Operator::Multiply).check().is_ok());
        assert!(Relation::of::<Kilometer, Hour, KilometerPerHour>(Operator::Divide).check().is_ok());

        // right dimension, wrong scale
        let err = Relation::of::<Kilowatt, Second, Joule>(Operator::Multiply).check().unwrap_err();
        assert!(matches!(err, UnitError::RelationViolation { .. }));

        // wrong dimension
        let err = Relation::of::<Volt, Second, Watt>(Operator::Multiply).check().unwrap_err();
        assert!(err.to_string().contains("volt * second => watt"));
    }

    #[test]
    fn test_apply() {
        let ctx = ConversionContext::default();
        let rel = Relation::of::<Volt, Ampere, Watt>(Operator::Multiply);
        let w = rel.apply(&Volts::new(2.0).erase(), &Amperes::new(3.0).erase(), &ctx).unwrap();
        assert_eq!(w, Watts::new(6.0).erase());

        // operands are brought into the declared units first
        let w = rel
            .apply(&Kilovolts::new(0.002).erase(), &Milliamperes::new(3000.0).erase(), &ctx)
            .unwrap();
        assert!((w.value() - 6.0).abs() < 1e-12);
        assert!(w.unit().is(Watt::proxy()));

        assert!(rel.apply(&Seconds::new(1.0).erase(), &Amperes::new(1.0).erase(), &ctx).is_err());
    }

    #[test]
    fn test_matches_and_accepts() {
        let rel = Relation::of::<Volt, Ampere, Watt>(Operator::Multiply);
        assert!(rel.matches(Volt::proxy(), Operator::Multiply, Ampere::proxy()));
        assert!(!rel.matches(Ampere::proxy(), Operator::Multiply, Volt::proxy()));
        assert!(rel.accepts(Millivolt::proxy(), Operator::Multiply, Ampere::proxy()));
        assert!(!rel.accepts(Volt::proxy(), Operator::Divide, Ampere::proxy()));
    }

    #[test]
    fn test_display_and_json() {
        let rel = Relation::of::<Newton, SquareMeter, Pascal>(Operator::Divide);
        assert_eq!(rel.to_string(), "newton / square_meter => pascal");
        assert_eq!(
            serde_json::to_value(rel).unwrap(),
            serde_json::json!({"lhs": "newton", "op": "divide", "rhs": "square_meter", "result": "pascal"})
        );
    }

    #[test]
    fn test_declared_relations_hold() {
        for rel in relations() {
            rel.check().unwrap();
        }
    }
}
