//! Comparator and stable sort over a single field

use crate::core::error::{Result, ViewError};
use crate::core::field::{FieldValue, collate};
use crate::core::record::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    /// The opposite direction, used when a column header is clicked twice
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// The single active sort of a view: a field plus a direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    /// Parse a sort expression
    ///
    /// # Format
    /// - `field` or `field:asc` (ascending)
    /// - `field:desc` (descending)
    pub fn parse(expression: &str) -> Result<Self> {
        let invalid = || ViewError::InvalidSort {
            expression: expression.to_string(),
        };

        let (field, direction) = match expression.trim().split_once(':') {
            None => (expression.trim(), SortDirection::Ascending),
            Some((field, "asc")) => (field, SortDirection::Ascending),
            Some((field, "desc")) => (field, SortDirection::Descending),
            Some(_) => return Err(invalid()),
        };

        let field = field.trim();
        if field.is_empty() {
            return Err(invalid());
        }

        Ok(Self::new(field, direction))
    }

    /// Compare two records on this key
    ///
    /// Records without a sortable value go after every other record in both
    /// directions.
    pub fn compare<R: Record>(&self, a: &R, b: &R) -> Ordering {
        let a = a.field_value(&self.field);
        let b = b.field_value(&self.field);

        let (ra, rb) = (rank(a.as_ref()), rank(b.as_ref()));
        if ra == UNSORTABLE || rb == UNSORTABLE {
            return ra.cmp(&rb);
        }
        self.direction.apply(compare_values(a.as_ref(), b.as_ref()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            SortDirection::Ascending => write!(f, "{}:asc", self.field),
            SortDirection::Descending => write!(f, "{}:desc", self.field),
        }
    }
}

/// Rank of values that have no place in the ordering
const UNSORTABLE: u8 = 3;

fn rank(value: Option<&FieldValue>) -> u8 {
    match value {
        Some(v) if v.as_number().is_some() => 0,
        Some(FieldValue::Boolean(_)) => 1,
        Some(v) if v.as_text().is_some() => 2,
        _ => UNSORTABLE,
    }
}

/// Compare two field values in ascending order
///
/// Numbers compare numerically, booleans with `false < true`, text and dates
/// with [`collate`]. Across kinds, numbers come first, then booleans, then
/// text. Missing, null, NaN and list values come last and are equal among
/// themselves, so the ordering stays total.
pub fn compare_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    let (ra, rb) = (rank(a), rank(b));
    if ra != rb {
        return ra.cmp(&rb);
    }

    match (a, b) {
        (Some(a), Some(b)) if ra == 0 => match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => Ordering::Equal,
        },
        (Some(FieldValue::Boolean(x)), Some(FieldValue::Boolean(y))) => x.cmp(y),
        (Some(a), Some(b)) => match (a.as_text(), b.as_text()) {
            (Some(x), Some(y)) => collate(x, y),
            _ => Ordering::Equal,
        },
        _ => Ordering::Equal,
    }
}

/// Order records by a key, stable on ties
///
/// Records comparing `Equal` keep their input order, so re-sorting an
/// unchanged collection always yields the same sequence.
pub fn sort_records<'a, R: Record>(mut records: Vec<&'a R>, key: &SortKey) -> Vec<&'a R> {
    records.sort_by(|a, b| key.compare(*a, *b));
    records
}
