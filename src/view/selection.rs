//! Selection set management and aggregate totals

use crate::core::record::Record;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Which records "select all" covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectAllPolicy {
    /// Only the rows visible on the current page
    #[default]
    CurrentPage,

    /// Every record passing the filter, across all pages
    AllFiltered,
}

/// Identifiers of the records checked for a bulk action
///
/// Iteration follows the order ids were selected in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    ids: IndexSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present
    ///
    /// Returns whether the id is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.shift_remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Clear the set if every candidate is already selected, otherwise
    /// replace it with exactly the candidates
    pub fn toggle_all<'a, I>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let candidates: IndexSet<String> = candidates.into_iter().map(str::to_string).collect();

        if candidates.iter().all(|id| self.ids.contains(id)) {
            self.ids.clear();
        } else {
            self.ids = candidates;
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Aggregates over the selected records
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectionTotals {
    /// Selected records still present in the source collection
    pub count: usize,

    /// Sum per requested numeric field
    pub sums: IndexMap<String, f64>,
}

impl SelectionTotals {
    /// Sum for a field, 0 when the field was not requested
    pub fn sum(&self, field: &str) -> f64 {
        self.sums.get(field).copied().unwrap_or(0.0)
    }
}

/// Sum numeric fields over the selected records
///
/// Ids that are no longer in `records` are ignored, and so are values that
/// are missing or not numeric.
pub fn selection_totals<R: Record, S: AsRef<str>>(
    records: &[R],
    selection: &SelectionSet,
    fields: &[S],
) -> SelectionTotals {
    let mut totals = SelectionTotals {
        count: 0,
        sums: fields.iter().map(|f| (f.as_ref().to_string(), 0.0)).collect(),
    };

    if selection.is_empty() {
        return totals;
    }

    for record in records.iter().filter(|r| selection.contains(r.id())) {
        totals.count += 1;
        for (field, sum) in totals.sums.iter_mut() {
            if let Some(n) = record.field_value(field).and_then(|v| v.as_number()) {
                *sum += n;
            }
        }
    }

    totals
}
