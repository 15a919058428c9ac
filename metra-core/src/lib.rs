//! Metra Core - Fundamental types
//!
//! This crate provides the unit-agnostic building blocks used throughout Metra:
//! - `Dimension`: exponent vectors over the SI base dimensions plus "other"
//! - `Family`: ids of groups of mutually convertible units
//! - `SymbolSet` and `FormatTemplate`: how quantities are rendered
//! - `UnitError`: structured errors with machine-readable codes

mod dimension;
mod family;
mod symbol;
mod format;
mod error;

pub use dimension::Dimension;
pub use family::Family;
pub use symbol::SymbolSet;
pub use format::{FormatTemplate, DEFAULT_FORMAT, MAX_PRECISION};
pub use error::{UnitError, codes};

/// Index constants for `Dimension::exponents`
pub mod base {
    pub use crate::dimension::{LENGTH, MASS, TIME, CURRENT, TEMPERATURE, AMOUNT, LUMINOSITY};
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Dimension, Family, SymbolSet, FormatTemplate, UnitError};
    pub use crate::error::codes;
}
