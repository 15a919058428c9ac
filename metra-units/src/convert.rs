//! Family-checked conversion between units
//!
//! Two units convert into each other iff they share a family. The converted
//! value is `target.factor / source.factor * value`, with the factors taken
//! from the conversion context.

use tracing::trace;
use metra_core::UnitError;

use crate::{ConversionContext, UnitProxy};

/// The error raised when `source` cannot be converted to `target`
pub fn incompatible(source: &dyn UnitProxy, target: &dyn UnitProxy) -> UnitError {
    UnitError::IncompatibleUnit {
        from: source.name().to_string(),
        to: target.name().to_string(),
        from_family: source.family(),
        to_family: target.family(),
    }
}

/// Whether a value of `source` may be converted to `target`
pub fn convertible(source: &dyn UnitProxy, target: &dyn UnitProxy) -> bool {
    source.family() == target.family()
}

/// Multiplier taking values of `source` to values of `target`
pub fn ratio(source: &dyn UnitProxy, target: &dyn UnitProxy, ctx: &ConversionContext) -> Result<f64, UnitError> {
    if !convertible(source, target) {
        return Err(incompatible(source, target));
    }
    Ok(ctx.factor(target) / ctx.factor(source))
}

/// Converts `value` from `source` to `target`
pub fn convert(
    value: f64,
    source: &dyn UnitProxy,
    target: &dyn UnitProxy,
    ctx: &ConversionContext,
) -> Result<f64, UnitError> {
    let converted = ratio(source, target, ctx)? * value;
    trace!(from = source.name(), to = target.name(), value, converted, "converted");
    Ok(converted)
}
