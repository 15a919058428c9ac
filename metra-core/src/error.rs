//! Structured unit errors
//!
//! Every failure is reported synchronously to the caller and never leaves a
//! partial result behind. Each variant carries a stable machine-readable code.

use thiserror::Error;
use crate::{Dimension, Family};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INCOMPATIBLE_UNIT: &str = "INCOMPATIBLE_UNIT";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const INCONSISTENT_FAMILY: &str = "INCONSISTENT_FAMILY";
    pub const INVALID_FACTOR: &str = "INVALID_FACTOR";
    pub const NO_RELATION: &str = "NO_RELATION";
    pub const RELATION_VIOLATION: &str = "RELATION_VIOLATION";
    pub const DUPLICATE_UNIT: &str = "DUPLICATE_UNIT";
    pub const FORMAT_ERROR: &str = "FORMAT_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Errors raised by conversion, composition and registry checks
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("cannot convert {from} ({from_family}) to {to} ({to_family}): incompatible units")]
    IncompatibleUnit {
        from: String,
        to: String,
        from_family: Family,
        to_family: Family,
    },

    #[error("unknown unit: {name}{}", suggestion_suffix(.suggestions))]
    UnknownUnit {
        name: String,
        suggestions: Vec<String>,
    },

    #[error("family {family} mixes {first} ({first_sense}) and {unit} ({sense})")]
    InconsistentFamily {
        family: Family,
        first: String,
        first_sense: Dimension,
        unit: String,
        sense: Dimension,
    },

    #[error("invalid factor {factor} for unit {unit}: must be finite and positive")]
    InvalidFactor { unit: String, factor: f64 },

    #[error("no derived unit for {lhs} {op} {rhs}")]
    NoRelation { lhs: String, op: char, rhs: String },

    #[error("relation {relation} is inconsistent: {detail}")]
    RelationViolation { relation: String, detail: String },

    #[error("unit registered twice: {0}")]
    DuplicateUnit(String),

    #[error("invalid format template: {0}")]
    Format(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

fn suggestion_suffix(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (similar: {})", suggestions.join(", "))
    }
}

impl UnitError {
    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            UnitError::IncompatibleUnit { .. } => codes::INCOMPATIBLE_UNIT,
            UnitError::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            UnitError::InconsistentFamily { .. } => codes::INCONSISTENT_FAMILY,
            UnitError::InvalidFactor { .. } => codes::INVALID_FACTOR,
            UnitError::NoRelation { .. } => codes::NO_RELATION,
            UnitError::RelationViolation { .. } => codes::RELATION_VIOLATION,
            UnitError::DuplicateUnit(_) => codes::DUPLICATE_UNIT,
            UnitError::Format(_) => codes::FORMAT_ERROR,
            UnitError::Config(_) => codes::CONFIG_ERROR,
        }
    }

    /// Whether this is the conversion-guard failure
    pub fn is_incompatible(&self) -> bool {
        matches!(self, UnitError::IncompatibleUnit { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incompatible_message() {
        let err = UnitError::IncompatibleUnit {
            from: "ft".to_string(),
            to: "s".to_string(),
            from_family: Family::LENGTH,
            to_family: Family::TIME,
        };
        assert_eq!(err.to_string(), "cannot convert ft (length) to s (time): incompatible units");
        assert_eq!(err.code(), codes::INCOMPATIBLE_UNIT);
        assert!(err.is_incompatible());
    }

    #[test]
    fn test_unknown_suggestions() {
        let err = UnitError::UnknownUnit { name: "mtr".to_string(), suggestions: Vec::new() };
        assert_eq!(err.to_string(), "unknown unit: mtr");
        let err = UnitError::UnknownUnit {
            name: "metr".to_string(),
            suggestions: vec!["meter".to_string(), "millimeter".to_string()],
        };
        assert_eq!(err.to_string(), "unknown unit: metr (similar: meter, millimeter)");
    }

    #[test]
    fn test_inconsistent_family_message() {
        let err = UnitError::InconsistentFamily {
            family: Family::LENGTH,
            first: "meter".to_string(),
            first_sense: Dimension::LENGTH,
            unit: "second".to_string(),
            sense: Dimension::TIME,
        };
        assert_eq!(err.to_string(), "family length mixes meter (L) and second (T)");
        assert_eq!(err.code(), codes::INCONSISTENT_FAMILY);
    }
}
