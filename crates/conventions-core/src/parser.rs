//! Property parsing
//!
//! Raw values arrive as strings from overrides, the environment, project
//! properties or defaults. Blank or whitespace-only strings count as absent;
//! anything else must parse strictly or the setting fails with
//! [`Error::InvalidPropertyValue`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::{Error, Result};

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").expect("decimal pattern is valid")
});

/// Trim `raw` and treat blank input as absent.
pub fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

/// Parse a boolean, falling back to `default` when `raw` is absent or blank.
///
/// Only `true`/`false` are accepted, in any letter case.
pub fn parse_boolean(name: &str, raw: Option<&str>, default: bool) -> Result<bool> {
    match non_blank(raw) {
        Some(value) => boolean(name, value),
        None => Ok(default),
    }
}

/// Parse an integer, falling back to `default` when `raw` is absent or blank.
pub fn parse_integer(name: &str, raw: Option<&str>, default: i64) -> Result<i64> {
    match non_blank(raw) {
        Some(value) => integer(name, value),
        None => Ok(default),
    }
}

/// Parse a decimal, falling back to `default` when `raw` is absent or blank.
pub fn parse_decimal(name: &str, raw: Option<&str>, default: Decimal) -> Result<Decimal> {
    match non_blank(raw) {
        Some(value) => decimal(name, value),
        None => Ok(default),
    }
}

pub(crate) fn boolean(name: &str, value: &str) -> Result<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(Error::invalid_value(name, value, "'true' or 'false'"))
    }
}

pub(crate) fn integer(name: &str, value: &str) -> Result<i64> {
    let value = value.trim();
    value
        .parse::<i64>()
        .map_err(|_| Error::invalid_value(name, value, "an integer"))
}

pub(crate) fn decimal(name: &str, value: &str) -> Result<Decimal> {
    let value = value.trim();
    Decimal::parse(value).ok_or_else(|| Error::invalid_value(name, value, "a decimal number"))
}

/// A decimal number that keeps the text it was written as.
///
/// Coverage thresholds are handed to tools verbatim (`0.85`, not
/// `0.8500000000000001`), so the original spelling is retained next to the
/// numeric value. Equality compares numeric values.
#[derive(Debug, Clone)]
pub struct Decimal {
    text: String,
    value: f64,
}

impl Decimal {
    /// Parse a plain decimal literal (optional sign, fraction and exponent).
    ///
    /// `NaN`, infinities and hexadecimal forms are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if !DECIMAL.is_match(text) {
            return None;
        }
        let value = text.parse::<f64>().ok().filter(|v| v.is_finite())?;
        Some(Self {
            text: text.to_string(),
            value,
        })
    }

    /// Numeric value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The literal as written.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("true", true)]
    #[case("TRUE", true)]
    #[case("True", true)]
    #[case(" false ", false)]
    #[case("FALSE", false)]
    fn booleans_accept_true_and_false_in_any_case(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(parse_boolean("flag", Some(raw), !expected).unwrap(), expected);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    #[case(Some("\t\n"))]
    fn blank_values_fall_back_to_default(#[case] raw: Option<&str>) {
        assert!(parse_boolean("flag", raw, true).unwrap());
        assert!(!parse_boolean("flag", raw, false).unwrap());
        assert_eq!(parse_integer("version", raw, 25).unwrap(), 25);
    }

    #[rstest]
    #[case("yes")]
    #[case("1")]
    #[case("on")]
    #[case("truee")]
    fn other_boolean_spellings_are_rejected(#[case] raw: &str) {
        let err = parse_boolean("mavenLocalEnabled", Some(raw), false).unwrap_err();
        match err {
            Error::InvalidPropertyValue { name, value, .. } => {
                assert_eq!(name, "mavenLocalEnabled");
                assert_eq!(value, raw);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn integers_parse_or_report_the_raw_value() {
        assert_eq!(parse_integer("v", Some(" 21 "), 25).unwrap(), 21);
        let err = parse_integer("v", Some("21.0"), 25).unwrap_err();
        assert!(err.to_string().contains("'21.0'"));
    }

    #[rstest]
    #[case("0.85", 0.85)]
    #[case("1", 1.0)]
    #[case(".5", 0.5)]
    #[case("8.5e-1", 0.85)]
    fn decimals_keep_their_text(#[case] raw: &str, #[case] value: f64) {
        let parsed = parse_decimal("c", Some(raw), Decimal::parse("0").unwrap()).unwrap();
        assert_eq!(parsed.value(), value);
        assert_eq!(parsed.as_str(), raw);
    }

    #[rstest]
    #[case("NaN")]
    #[case("inf")]
    #[case("0x10")]
    #[case("0,85")]
    #[case("85%")]
    fn malformed_decimals_are_rejected(#[case] raw: &str) {
        assert!(decimal("minimumCoverage", raw).is_err());
    }

    proptest! {
        #[test]
        fn boolean_parsing_accepts_exactly_true_and_false(raw in "\\PC{1,8}") {
            let trimmed = raw.trim();
            let result = parse_boolean("flag", Some(&raw), false);
            if trimmed.is_empty() {
                prop_assert_eq!(result.unwrap(), false);
            } else if trimmed.eq_ignore_ascii_case("true") {
                prop_assert!(result.unwrap());
            } else if trimmed.eq_ignore_ascii_case("false") {
                prop_assert!(!result.unwrap());
            } else {
                let is_invalid = matches!(result, Err(Error::InvalidPropertyValue { .. }));
                prop_assert!(is_invalid);
            }
        }
    }
}
