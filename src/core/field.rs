//! Field value types and collation

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A polymorphic field value read off a record
///
/// Records expose their columns through [`FieldValue`] so the filter and
/// sort stages can work on any record type without knowing its schema.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    Date(IsoDate),
    List(Vec<FieldValue>),
    Null,
}

impl FieldValue {
    /// Get the value as text if it is textual (dates included)
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Date(d) => Some(d.as_str()),
            _ => None,
        }
    }

    /// Get the value as a number if it is numeric
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) if !n.is_nan() => Some(*n),
            FieldValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get the value as an ISO date string
    ///
    /// Only well-formed `Date` values qualify; empty or malformed dates and
    /// plain text give `None`.
    pub fn as_date(&self) -> Option<&str> {
        match self {
            FieldValue::Date(d) if d.is_valid() => Some(d.as_str()),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Case-insensitive substring test used by free-text search
    ///
    /// `needle` must already be lower-cased. Lists match when any element
    /// matches; numbers, booleans and nulls never match.
    pub fn contains_text(&self, needle: &str) -> bool {
        match self {
            FieldValue::List(items) => items.iter().any(|item| item.contains_text(needle)),
            other => other
                .as_text()
                .is_some_and(|text| text.to_lowercase().contains(needle)),
        }
    }

    /// Key used for set-membership checks against enum values
    pub fn membership_key(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Date(d) => Some(d.as_str().to_string()),
            FieldValue::Integer(i) => Some(i.to_string()),
            FieldValue::Boolean(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::Date(d) => write!(f, "{}", d),
            FieldValue::List(items) => {
                let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "{}", parts.join(", "))
            }
            FieldValue::Null => Ok(()),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(FieldValue::Integer)
            .unwrap_or(FieldValue::Number(value as f64))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<IsoDate> for FieldValue {
    fn from(value: IsoDate) -> Self {
        FieldValue::Date(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value.into_iter().map(FieldValue::Text).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// An ISO-8601 date kept in its string form
///
/// Dates are compared lexicographically, without timezone normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IsoDate(String);

impl IsoDate {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the string parses as `YYYY-MM-DD` or RFC 3339
    pub fn is_valid(&self) -> bool {
        is_iso_date(&self.0)
    }
}

impl From<&str> for IsoDate {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Check whether a string is an ISO date or an RFC 3339 timestamp
pub fn is_iso_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || DateTime::parse_from_rfc3339(value).is_ok()
}

/// Locale-aware string ordering
///
/// Compares case- and accent-folded forms first so that "école" sorts next
/// to "ecole" and before "Zèbre", then falls back to code-point order to keep
/// the ordering total.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a.chars().flat_map(fold_char).cmp(b.chars().flat_map(fold_char));
    folded.then_with(|| a.cmp(b))
}

fn fold_char(c: char) -> impl Iterator<Item = char> {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'a',
        'ç' | 'Ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => 'i',
        'ñ' | 'Ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => 'u',
        'ý' | 'ÿ' | 'Ý' => 'y',
        other => other,
    };
    base.to_lowercase()
}
