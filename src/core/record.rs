//! Record trait defining the rows a view can display

use crate::core::field::FieldValue;

/// Base trait for every record shown in a collection view.
///
/// A record is a transaction, a dossier, a document or a catalog entry.
/// All records have:
/// - id: identifier, unique within the collection it belongs to
/// - record_type: type name (e.g., "transaction", "document")
/// - search_fields: the textual fields scanned by free-text search
/// - field_value: dynamic access to any field by name
///
/// Use the `impl_record!` macro to derive this trait for a struct.
pub trait Record: Clone + Send + Sync + 'static {
    /// The record type name (e.g., "transaction")
    fn record_type() -> &'static str
    where
        Self: Sized;

    /// Fields scanned by a free-text query when the criteria names none
    fn search_fields() -> &'static [&'static str]
    where
        Self: Sized;

    /// Get the identifier of this record
    fn id(&self) -> &str;

    /// Get the value of a specific field by name
    ///
    /// Returns `None` for unknown fields. Optional fields that are unset
    /// return `Some(FieldValue::Null)`.
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}
