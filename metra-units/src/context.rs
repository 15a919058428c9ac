//! Conversion context
//!
//! Holds the settings that vary at run time: factor overrides (exchange rates
//! for currencies) and per-unit format templates. A context is a plain value
//! passed to the conversions that need it; the crate keeps no global mutable
//! state. To share one context between threads, wrap it explicitly, e.g. in
//! `Arc<RwLock<ConversionContext>>`.
//!
//! Changing a factor only affects later conversions. Quantities already built
//! keep their stored values.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};
use tracing::{debug, warn};
use metra_core::{FormatTemplate, UnitError};

use crate::{Unit, UnitProxy, UnitRegistry};

/// Runtime conversion settings, keyed by unit name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionContext {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    factors: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    formats: BTreeMap<String, FormatTemplate>,
}

fn check_factor(unit: &str, factor: f64) -> Result<(), UnitError> {
    if factor.is_finite() && factor > 0.0 {
        Ok(())
    } else {
        Err(UnitError::InvalidFactor { unit: unit.to_string(), factor })
    }
}

/// The unit `name` stands for, failing unless it is spelled exactly
fn canonical(registry: &UnitRegistry, name: &str) -> Result<&'static dyn UnitProxy, UnitError> {
    match registry.get(name) {
        Some(unit) if unit.name() == name => Ok(unit),
        Some(unit) => Err(UnitError::UnknownUnit {
            name: name.to_string(),
            suggestions: vec![unit.name().to_string()],
        }),
        None => Err(registry.unknown(name)),
    }
}

fn rekey<V: Clone>(entries: &BTreeMap<String, V>, registry: &UnitRegistry) -> Result<BTreeMap<String, V>, UnitError> {
    let mut resolved = BTreeMap::new();
    for (name, value) in entries {
        let unit = registry.get(name).ok_or_else(|| registry.unknown(name))?;
        if unit.name() != name.as_str() {
            debug!(key = name.as_str(), unit = unit.name(), "configuration key resolved");
        }
        if resolved.insert(unit.name().to_string(), value.clone()).is_some() {
            return Err(UnitError::Config(format!("unit {} configured twice", unit.name())));
        }
    }
    Ok(resolved)
}

impl ConversionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: override a factor
    pub fn with_factor<U: Unit>(mut self, factor: f64) -> Result<Self, UnitError> {
        self.set_factor::<U>(factor)?;
        Ok(self)
    }

    /// Factor in effect for `unit`
    pub fn factor(&self, unit: &dyn UnitProxy) -> f64 {
        self.factors.get(unit.name()).copied().unwrap_or_else(|| unit.factor())
    }

    pub fn factor_of<U: Unit>(&self) -> f64 {
        self.factor(U::proxy())
    }

    pub fn set_factor<U: Unit>(&mut self, factor: f64) -> Result<(), UnitError> {
        self.set_factor_for(U::proxy(), factor)
    }

    /// Override the factor of a unit known at run time
    pub fn set_factor_for(&mut self, unit: &dyn UnitProxy, factor: f64) -> Result<(), UnitError> {
        check_factor(unit.name(), factor)?;
        if !unit.is_volatile() {
            warn!(unit = unit.name(), factor, "overriding the factor of a fixed unit");
        }
        debug!(unit = unit.name(), factor, "factor set");
        self.factors.insert(unit.name().to_string(), factor);
        Ok(())
    }

    /// Back to the unit's own factor
    pub fn clear_factor<U: Unit>(&mut self) {
        self.factors.remove(U::NAME);
    }

    /// Template in effect for `unit`
    pub fn template<'a>(&'a self, unit: &'a dyn UnitProxy) -> &'a FormatTemplate {
        self.formats.get(unit.name()).unwrap_or_else(|| unit.template())
    }

    pub fn set_format<U: Unit>(&mut self, template: &str) -> Result<(), UnitError> {
        self.set_format_for(U::proxy(), template)
    }

    pub fn set_format_for(&mut self, unit: &dyn UnitProxy, template: &str) -> Result<(), UnitError> {
        let parsed = FormatTemplate::parse(template)?;
        self.formats.insert(unit.name().to_string(), parsed);
        Ok(())
    }

    pub fn clear_format<U: Unit>(&mut self) {
        self.formats.remove(U::NAME);
    }

    pub fn factors(&self) -> impl Iterator<Item = (&str, f64)> {
        self.factors.iter().map(|(name, factor)| (name.as_str(), *factor))
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty() && self.formats.is_empty()
    }

    /// Every key is the exact name of a unit of `registry` and every factor
    /// is usable. Keys differing from a unit name only by case are rejected,
    /// run [`resolve`](Self::resolve) first to accept them.
    pub fn validate(&self, registry: &UnitRegistry) -> Result<(), UnitError> {
        for (name, factor) in &self.factors {
            let unit = canonical(registry, name)?;
            check_factor(name, *factor)?;
            if !unit.is_volatile() {
                warn!(unit = name.as_str(), factor, "configured factor overrides a fixed unit");
            }
        }
        for name in self.formats.keys() {
            canonical(registry, name)?;
        }
        Ok(())
    }

    /// Rewrites every key to the registered unit name it refers to (names
    /// match case-insensitively), then validates. Leaves `self` untouched on
    /// error.
    pub fn resolve(&mut self, registry: &UnitRegistry) -> Result<(), UnitError> {
        let resolved = ConversionContext {
            factors: rekey(&self.factors, registry)?,
            formats: rekey(&self.formats, registry)?,
        };
        resolved.validate(registry)?;
        *self = resolved;
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, UnitError> {
        let ctx: ConversionContext = serde_json::from_str(json)
            .map_err(|e| UnitError::Config(e.to_string()))?;
        for (name, factor) in &ctx.factors {
            check_factor(name, *factor)?;
        }
        Ok(ctx)
    }

    pub fn from_path(path: &Path) -> Result<Self, UnitError> {
        let json = fs::read_to_string(path)
            .map_err(|e| UnitError::Config(format!("failed to read '{}': {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, UnitError> {
        serde_json::to_string_pretty(self).map_err(|e| UnitError::Config(e.to_string()))
    }
}
