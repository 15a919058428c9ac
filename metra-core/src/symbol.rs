//! Unit symbols

use std::fmt;
use serde::Serialize;

/// The symbols a unit answers to. The first one is the primary symbol used
/// when formatting; the rest are accepted alternates (e.g. "°" and "deg").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SymbolSet(&'static [&'static str]);

impl SymbolSet {
    pub const fn new(symbols: &'static [&'static str]) -> Self {
        SymbolSet(symbols)
    }

    /// Symbol used by default when rendering
    pub const fn primary(&self) -> &'static str {
        match self.0 {
            [first, ..] => *first,
            [] => "",
        }
    }

    /// Symbol at `index`, falling back to the primary one
    pub fn get(&self, index: usize) -> &'static str {
        self.0.get(index).copied().unwrap_or_else(|| self.primary())
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.0.iter().any(|s| *s == symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        self.0.iter().copied()
    }

}

impl fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary())
    }
}
