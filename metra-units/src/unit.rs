//! Unit descriptors
//!
//! Every concrete unit is a zero-sized marker type implementing [`Unit`]. The
//! trait carries the unit's compile-time descriptor: dimension (`SENSE`),
//! family (through its [`Kind`]), scale `FACTOR`, symbols and format.

use std::fmt::Debug;
use serde::{Serialize, Deserialize};
use metra_core::{Dimension, Family, SymbolSet, DEFAULT_FORMAT};
use crate::UnitProxy;

/// Type-level family marker. Units sharing a `Kind` are statically
/// convertible into each other.
pub trait Kind: 'static {
    const FAMILY: Family;
}

/// Trait implemented by every unit marker type.
///
/// * `FACTOR` is how many of this unit make one reference unit of the family:
///   `Meter::FACTOR == 1.0`, `Millimeter::FACTOR == 1000.0`. Converting from
///   `A` to `B` multiplies by `B::FACTOR / A::FACTOR`.
/// * `SENSE` is the unit's dimension. Units of one family must share it.
/// * `SYMBOLS` lists the printable symbols, primary first.
/// * `VOLATILE` marks units whose factor is a configurable rate (currencies)
///   rather than a physical constant.
pub trait Unit: Copy + Debug + PartialEq + Send + Sync + 'static {
    /// Family marker type
    type Kind: Kind;

    /// Family id, always the kind's
    const FAMILY: Family = <Self::Kind as Kind>::FAMILY;

    /// Unique unit name
    const NAME: &'static str;

    const SENSE: Dimension;

    const FACTOR: f64;

    const SYMBOLS: SymbolSet;

    /// Format template, see [`metra_core::FormatTemplate`]
    const FORMAT: &'static str = DEFAULT_FORMAT;

    const VOLATILE: bool = false;

    /// The process-wide runtime proxy of this unit
    fn proxy() -> &'static dyn UnitProxy;
}

/// Owned snapshot of a unit descriptor, as exchanged with the outside world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    pub name: String,
    pub sense: Dimension,
    pub family: Family,
    pub factor: f64,
    pub symbols: Vec<String>,
    pub format: String,
    #[serde(default)]
    pub volatile: bool,
}

impl Descriptor {
    /// Snapshot of a unit, using the factor currently in effect
    pub fn of(unit: &dyn UnitProxy, factor: f64) -> Self {
        Descriptor {
            name: unit.name().to_string(),
            sense: unit.sense(),
            family: unit.family(),
            factor,
            symbols: unit.symbols().iter().map(str::to_string).collect(),
            format: unit.format().to_string(),
            volatile: unit.is_volatile(),
        }
    }
}

/// Declares a family marker type.
///
/// ```rust
/// use metra_units::{define_kind, Family, Kind};
///
/// define_kind!(
///     /// Distances
///     Distance => Family(900)
/// );
/// assert_eq!(<Distance as Kind>::FAMILY, Family(900));
/// ```
#[macro_export]
macro_rules! define_kind {
    ($(#[$meta:meta])* $name:ident => $family:expr) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub enum $name {}

        impl $crate::Kind for $name {
            const FAMILY: $crate::Family = $family;
        }
    };
}

/// Declares a unit marker type, its `Unit` implementation, its static proxy
/// and a `Quantity` alias.
///
/// ```rust
/// use metra_units::{define_kind, define_unit, Dimension, Family, Unit};
///
/// define_kind!(Distance => Family(900));
/// define_unit!(
///     /// Furlong
///     Furlong, Furlongs {
///         kind: Distance,
///         name: "furlong",
///         sense: Dimension::LENGTH,
///         factor: 1.0 / 201.168,
///         symbols: ["fur"],
///     }
/// );
///
/// assert_eq!(Furlong::NAME, "furlong");
/// assert_eq!(Furlongs::new(2.0).value(), 2.0);
/// ```
#[macro_export]
macro_rules! define_unit {
    (
        $(#[$meta:meta])*
        $name:ident, $alias:ident {
            kind: $kind:ty,
            name: $uname:expr,
            sense: $sense:expr,
            factor: $factor:expr,
            symbols: [$($sym:expr),+ $(,)?]
            $(, format: $format:expr)?
            $(, volatile: $volatile:expr)?
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
        pub struct $name;

        #[doc = concat!("A quantity measured in [`", stringify!($name), "`].")]
        pub type $alias = $crate::Quantity<$name>;

        impl $crate::Unit for $name {
            type Kind = $kind;
            const NAME: &'static str = $uname;
            const SENSE: $crate::Dimension = $sense;
            const FACTOR: f64 = $factor;
            const SYMBOLS: $crate::SymbolSet = $crate::SymbolSet::new(&[$($sym),+]);
            $(const FORMAT: &'static str = $format;)?
            $(const VOLATILE: bool = $volatile;)?

            fn proxy() -> &'static dyn $crate::UnitProxy {
                static PROXY: $crate::Proxy<$name> = $crate::Proxy::new();
                &PROXY
            }
        }
    };
}
