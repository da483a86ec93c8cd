//! Filter predicate evaluated against one record at a time

use crate::core::error::{Result, ViewError};
use crate::core::field::{FieldValue, is_iso_date};
use crate::core::record::Record;
use indexmap::IndexMap;
use serde_json::Value;

/// Query key holding the free-text search
const TEXT_KEY: &str = "q";

/// Query key naming the fields the free-text search scans
const TEXT_FIELDS_KEY: &str = "q_fields";

/// Constraint on a single named field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldConstraint {
    /// Value must be one of these; an empty list means no restriction
    OneOf(Vec<String>),

    /// Numeric value within `[min, max]`, either bound optional
    Range { min: Option<f64>, max: Option<f64> },

    /// ISO date within `[from, to]`, compared lexicographically; empty or
    /// malformed dates never match
    DateRange {
        from: Option<String>,
        to: Option<String>,
    },
}

impl FieldConstraint {
    /// Check whether a field value satisfies this constraint
    ///
    /// A missing or wrongly-typed value never satisfies a restricting
    /// constraint.
    pub fn accepts(&self, value: Option<&FieldValue>) -> bool {
        match self {
            FieldConstraint::OneOf(allowed) if allowed.is_empty() => true,
            FieldConstraint::OneOf(allowed) => value.is_some_and(|v| is_one_of(v, allowed)),
            FieldConstraint::Range { min, max } => value
                .and_then(FieldValue::as_number)
                .is_some_and(|n| min.is_none_or(|min| n >= min) && max.is_none_or(|max| n <= max)),
            FieldConstraint::DateRange { from, to } => {
                value.and_then(FieldValue::as_date).is_some_and(|d| {
                    from.as_deref().is_none_or(|from| d >= from)
                        && to.as_deref().is_none_or(|to| d <= to)
                })
            }
        }
    }

    /// Whether this constraint lets every record through
    pub fn is_unrestricted(&self) -> bool {
        match self {
            FieldConstraint::OneOf(allowed) => allowed.is_empty(),
            FieldConstraint::Range { min, max } => min.is_none() && max.is_none(),
            FieldConstraint::DateRange { from, to } => from.is_none() && to.is_none(),
        }
    }
}

fn is_one_of(value: &FieldValue, allowed: &[String]) -> bool {
    match value {
        FieldValue::List(items) => items.iter().any(|item| is_one_of(item, allowed)),
        other => other
            .membership_key()
            .is_some_and(|key| allowed.iter().any(|a| *a == key)),
    }
}

/// The set of active constraints restricting which records are visible
///
/// Constraints combine with logical AND. The free-text query matches when
/// any one of its fields contains the query, case-insensitively.
///
/// # Example
///
/// ```rust,ignore
/// let criteria = FilterCriteria::new()
///     .with_text("edf")
///     .with_one_of("status", ["pending"])
///     .with_range("abs_amount", Some(10.0), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Free-text query; blank means unset
    pub text: Option<String>,

    /// Fields scanned by the text query; empty uses the record's search fields
    pub text_fields: Vec<String>,

    /// Per-field constraints, in the order they were added
    pub constraints: IndexMap<String, FieldConstraint>,
}

impl FilterCriteria {
    /// Criteria with every constraint unset
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, query: impl Into<String>) -> Self {
        self.text = Some(query.into());
        self
    }

    pub fn with_text_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.text_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_one_of<I, S>(mut self, field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.constraints
            .insert(field.into(), FieldConstraint::OneOf(values));
        self
    }

    pub fn with_range(mut self, field: impl Into<String>, min: Option<f64>, max: Option<f64>) -> Self {
        self.constraints
            .insert(field.into(), FieldConstraint::Range { min, max });
        self
    }

    pub fn with_date_range(
        mut self,
        field: impl Into<String>,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Self {
        self.constraints.insert(
            field.into(),
            FieldConstraint::DateRange {
                from: from.map(str::to_string),
                to: to.map(str::to_string),
            },
        );
        self
    }

    /// Drop the constraint on a field, if any
    pub fn without(mut self, field: &str) -> Self {
        self.constraints.shift_remove(field);
        self
    }

    /// The normalized text query, `None` when unset or blank
    pub fn text_query(&self) -> Option<String> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// Whether these criteria let every record through
    pub fn is_unrestricted(&self) -> bool {
        self.text_query().is_none() && self.constraints.values().all(FieldConstraint::is_unrestricted)
    }

    /// Check whether a record satisfies every configured constraint
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.matches_text(record)
            && self
                .constraints
                .iter()
                .all(|(field, constraint)| constraint.accepts(record.field_value(field).as_ref()))
    }

    fn matches_text<R: Record>(&self, record: &R) -> bool {
        let Some(needle) = self.text_query() else {
            return true;
        };

        let contains = |field: &str| {
            record
                .field_value(field)
                .is_some_and(|value| value.contains_text(&needle))
        };

        if self.text_fields.is_empty() {
            R::search_fields().iter().any(|field| contains(*field))
        } else {
            self.text_fields.iter().any(|field| contains(field.as_str()))
        }
    }

    /// Parse criteria from a JSON filter object
    ///
    /// # Format
    /// - `{"q": "edf"}`: free-text query, `{"q_fields": ["label"]}` narrows its fields
    /// - `{"status": "paid"}` or `{"status": ["paid", "late"]}`: membership
    /// - `{"amount>=": 10, "amount<=": 50}`: numeric range (`>`/`<` are aliases)
    /// - `{"date>=": "2024-01-01"}`: date range
    ///
    /// Null values are ignored.
    pub fn from_json(filter: &Value) -> Result<Self> {
        let object = filter
            .as_object()
            .ok_or_else(|| ViewError::invalid_filter("filter", "expected a JSON object"))?;

        let mut criteria = Self::new();

        for (key, value) in object {
            if value.is_null() {
                continue;
            }

            match key.as_str() {
                TEXT_KEY => {
                    let query = value
                        .as_str()
                        .ok_or_else(|| ViewError::invalid_filter(key, "expected a string"))?;
                    criteria.text = Some(query.to_string());
                }
                TEXT_FIELDS_KEY => {
                    criteria.text_fields = string_list(key, value)?;
                }
                _ => match split_bound(key) {
                    Some((field, bound)) => criteria.add_bound(key, field, bound, value)?,
                    None => {
                        let allowed = match value {
                            Value::Array(_) => string_list(key, value)?,
                            scalar => vec![scalar_key(key, scalar)?],
                        };
                        criteria
                            .constraints
                            .insert(key.clone(), FieldConstraint::OneOf(allowed));
                    }
                },
            }
        }

        Ok(criteria)
    }

    fn add_bound(&mut self, key: &str, field: &str, bound: Bound, value: &Value) -> Result<()> {
        let entry = self.constraints.get(field).cloned();

        let constraint = match (value, entry) {
            (Value::Number(n), None) => {
                number_bound(FieldConstraint::Range { min: None, max: None }, bound, n.as_f64())
            }
            (Value::Number(n), Some(existing @ FieldConstraint::Range { .. })) => {
                number_bound(existing, bound, n.as_f64())
            }
            (Value::String(s), None) => {
                date_bound(key, FieldConstraint::DateRange { from: None, to: None }, bound, s)?
            }
            (Value::String(s), Some(existing @ FieldConstraint::DateRange { .. })) => {
                date_bound(key, existing, bound, s)?
            }
            (Value::Number(_) | Value::String(_), Some(_)) => {
                return Err(ViewError::invalid_filter(
                    key,
                    format!("conflicts with another constraint on '{}'", field),
                ));
            }
            _ => {
                return Err(ViewError::invalid_filter(
                    key,
                    "expected a number or an ISO date",
                ));
            }
        };

        self.constraints.insert(field.to_string(), constraint);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum Bound {
    Lower,
    Upper,
}

fn split_bound(key: &str) -> Option<(&str, Bound)> {
    [(">=", Bound::Lower), ("<=", Bound::Upper), (">", Bound::Lower), ("<", Bound::Upper)]
        .into_iter()
        .find_map(|(suffix, bound)| key.strip_suffix(suffix).map(|field| (field, bound)))
        .filter(|(field, _)| !field.is_empty())
}

fn number_bound(constraint: FieldConstraint, bound: Bound, value: Option<f64>) -> FieldConstraint {
    match (constraint, bound) {
        (FieldConstraint::Range { max, .. }, Bound::Lower) => FieldConstraint::Range { min: value, max },
        (FieldConstraint::Range { min, .. }, Bound::Upper) => FieldConstraint::Range { min, max: value },
        (other, _) => other,
    }
}

fn date_bound(key: &str, constraint: FieldConstraint, bound: Bound, value: &str) -> Result<FieldConstraint> {
    if !is_iso_date(value) {
        return Err(ViewError::invalid_filter(
            key,
            format!("'{}' is not an ISO date", value),
        ));
    }

    let value = Some(value.to_string());
    Ok(match (constraint, bound) {
        (FieldConstraint::DateRange { to, .. }, Bound::Lower) => FieldConstraint::DateRange { from: value, to },
        (FieldConstraint::DateRange { from, .. }, Bound::Upper) => FieldConstraint::DateRange { from, to: value },
        (other, _) => other,
    })
}

fn scalar_key(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        _ => Err(ViewError::invalid_filter(
            key,
            "expected a string, an integer or a boolean",
        )),
    }
}

fn string_list(key: &str, value: &Value) -> Result<Vec<String>> {
    value
        .as_array()
        .ok_or_else(|| ViewError::invalid_filter(key, "expected an array"))?
        .iter()
        .map(|item| scalar_key(key, item))
        .collect()
}

/// Keep the records matching the criteria, in their original order
pub fn filter_records<'a, R: Record>(records: &'a [R], criteria: &FilterCriteria) -> Vec<&'a R> {
    records.iter().filter(|r| criteria.matches(*r)).collect()
}
