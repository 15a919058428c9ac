//! Metra Units - Typed quantities and unit conversion
//!
//! Every unit is a zero-sized marker type implementing [`Unit`]; a
//! [`Quantity<U>`] is an `f64` tagged with its unit. Conversion is allowed
//! only inside a family of units and is checked at compile time for typed
//! quantities (`Quantity::to`) and at run time for [`AnyQuantity`].
//!
//! Modules:
//! - `unit`: the `Unit`/`Kind` traits and the `define_unit!` macro
//! - `quantity`: `Quantity<U>` and its arithmetic
//! - `proxy`: runtime unit objects and `AnyQuantity`
//! - `convert`: family-checked conversion
//! - `context`: runtime factor and format overrides
//! - `compose`: derived-unit relations
//! - `registry`: lookup by name or symbol, startup validation
//! - `level`: levels on offset scales (temperatures)
//! - [`units`]: the built-in catalogue
//!
//! ```rust
//! use metra_units::units::{Amperes, Meters, Millimeter, Volts, Watts};
//!
//! assert_eq!(Meters::new(1.0).to::<Millimeter>().value(), 1000.0);
//! assert_eq!(Volts::new(2.0) * Amperes::new(3.0), Watts::new(6.0));
//! ```

mod unit;
mod quantity;
mod proxy;
pub mod convert;
mod context;
mod compose;
mod registry;
mod level;
pub mod units;

pub use metra_core::{
    codes, Dimension, Family, FormatTemplate, SymbolSet, UnitError, DEFAULT_FORMAT, MAX_PRECISION,
};

pub use unit::{Descriptor, Kind, Unit};
pub use quantity::{serde_with_unit, Quantity};
pub use proxy::{AnyQuantity, Proxy, UnitProxy};
pub use context::ConversionContext;
pub use compose::{Operator, Relation, FACTOR_TOLERANCE};
pub use registry::UnitRegistry;
pub use level::{Level, Scale};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        AnyQuantity, ConversionContext, Dimension, Family, Level, Quantity, Scale, Unit,
        UnitError, UnitProxy, UnitRegistry,
    };
}
