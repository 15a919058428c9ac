//! Format templates for rendering quantities
//!
//! A template is plain text with placeholders:
//! - `{value}`: the numeric value (`{value:.N}` for N fixed decimals)
//! - `{symbol}`: the unit symbol
//! - `{name}`: the unit name
//!
//! Literal braces are written `{{` and `}}`.

use std::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::UnitError;

/// Template used when a unit does not declare its own
pub const DEFAULT_FORMAT: &str = "{value} {symbol}";

/// Largest number of decimals a `{value:.N}` placeholder may ask for
pub const MAX_PRECISION: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Value(Option<usize>),
    Symbol,
    Name,
}

/// A parsed, validated format template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl FormatTemplate {
    /// Parse and validate a template
    pub fn parse(source: &str) -> Result<Self, UnitError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut placeholder = String::new();
                    let mut closed = false;
                    for p in chars.by_ref() {
                        if p == '}' {
                            closed = true;
                            break;
                        }
                        placeholder.push(p);
                    }
                    if !closed {
                        return Err(UnitError::Format(format!("unclosed placeholder in '{}'", source)));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Self::placeholder(&placeholder, source)?);
                }
                '}' => {
                    return Err(UnitError::Format(format!("unmatched '}}' in '{}'", source)));
                }
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        if !segments.iter().any(|s| matches!(s, Segment::Value(_))) {
            return Err(UnitError::Format(format!("template '{}' has no {{value}} placeholder", source)));
        }

        Ok(FormatTemplate { source: source.to_string(), segments })
    }

    fn placeholder(body: &str, source: &str) -> Result<Segment, UnitError> {
        match body {
            "value" => Ok(Segment::Value(None)),
            "symbol" => Ok(Segment::Symbol),
            "name" => Ok(Segment::Name),
            _ => {
                let digits = body
                    .strip_prefix("value:.")
                    .ok_or_else(|| UnitError::Format(format!("unknown placeholder '{{{}}}' in '{}'", body, source)))?;
                let precision = digits
                    .parse::<usize>()
                    .map_err(|_| UnitError::Format(format!("invalid precision '{}' in '{}'", digits, source)))?;
                if precision > MAX_PRECISION {
                    return Err(UnitError::Format(format!(
                        "precision {} exceeds {} in '{}'",
                        precision, MAX_PRECISION, source
                    )));
                }
                Ok(Segment::Value(Some(precision)))
            }
        }
    }

    /// Render a value. `precision` applies to `{value}` placeholders that do
    /// not carry their own, and is capped at [`MAX_PRECISION`].
    pub fn render(&self, value: f64, symbol: &str, name: &str, precision: Option<usize>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Value(own) => match own.or(precision) {
                    Some(p) => out.push_str(&format!("{:.*}", p.min(MAX_PRECISION), value)),
                    None => out.push_str(&value.to_string()),
                },
                Segment::Symbol => out.push_str(symbol),
                Segment::Name => out.push_str(name),
            }
        }
        // a unitless symbol leaves a dangling separator behind
        if symbol.is_empty() {
            out.truncate(out.trim_end().len());
        }
        out
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        FormatTemplate {
            source: DEFAULT_FORMAT.to_string(),
            segments: vec![
                Segment::Value(None),
                Segment::Literal(" ".to_string()),
                Segment::Symbol,
            ],
        }
    }
}

impl fmt::Display for FormatTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl Serialize for FormatTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for FormatTemplate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        FormatTemplate::parse(&source).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let t = FormatTemplate::default();
        assert_eq!(t, FormatTemplate::parse(DEFAULT_FORMAT).unwrap());
        assert_eq!(t.render(1.5, "m", "meter", None), "1.5 m");
    }

    #[test]
    fn test_precision() {
        let t = FormatTemplate::parse("{value:.2}{symbol}").unwrap();
        assert_eq!(t.render(3.14159, "rad", "radian", None), "3.14rad");
        // explicit precision wins over the caller's
        assert_eq!(t.render(3.14159, "rad", "radian", Some(4)), "3.14rad");

        let t = FormatTemplate::default();
        assert_eq!(t.render(2.0, "s", "second", Some(3)), "2.000 s");
    }

    #[test]
    fn test_name_and_escapes() {
        let t = FormatTemplate::parse("{{{value}}} {name}").unwrap();
        assert_eq!(t.render(4.0, "kg", "kilogram", None), "{4} kilogram");
    }

    #[test]
    fn test_empty_symbol_trims() {
        let t = FormatTemplate::default();
        assert_eq!(t.render(0.5, "", "ratio", None), "0.5");
    }

    #[test]
    fn test_invalid() {
        assert!(FormatTemplate::parse("{value").is_err());
        assert!(FormatTemplate::parse("value}").is_err());
        assert!(FormatTemplate::parse("{symbol}").is_err());
        assert!(FormatTemplate::parse("{value:.x}").is_err());
        assert!(FormatTemplate::parse("{unit} {value}").is_err());
    }

    #[test]
    fn test_precision_bound() {
        assert!(FormatTemplate::parse("{value:.32}").is_ok());
        let err = FormatTemplate::parse("{value:.70000}").unwrap_err();
        assert!(matches!(err, UnitError::Format(_)));

        // a caller's precision is capped instead of overflowing the formatter
        let t = FormatTemplate::default();
        let wide = t.render(1.0, "m", "meter", Some(70_000));
        assert_eq!(wide, t.render(1.0, "m", "meter", Some(MAX_PRECISION)));
        assert_eq!(wide, format!("1.{} m", "0".repeat(MAX_PRECISION)));
    }

    #[test]
    fn test_serde_as_string() {
        let t = FormatTemplate::parse("{value:.1}{symbol}").unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#""{value:.1}{symbol}""#);
        let back: FormatTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
        assert!(serde_json::from_str::<FormatTemplate>(r#""{symbol}""#).is_err());
    }
}
