//! # ledger-view
//!
//! The collection view pipeline behind the list screens of an accounting
//! front-end: bank transaction tables, cabinet dossiers, document grids and
//! sales catalogs.
//!
//! ## Features
//!
//! - **Filter**: free-text search, enum membership, numeric and date ranges
//! - **Sort**: one key at a time, locale-aware for text, stable on ties
//! - **Paginate**: fixed-size 1-based pages, out-of-range pages are empty
//! - **Select**: toggle one, toggle all (page or filter scoped), totals
//! - **Typed Records**: one explicit schema per screen via `impl_record!`
//! - **Configuration-Based**: page sizes, default sorts and totals in YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ledgerview::prelude::*;
//!
//! let records = vec![
//!     BankTransaction::new("1", "2024-01-05", "EDF", -50.0),
//!     BankTransaction::new("2", "2024-02-10", "Client A", 200.0),
//!     BankTransaction::new("3", "2024-03-15", "EDF bis", -15.0),
//! ];
//!
//! let mut view = ViewController::new("transactions", records).with_page_size(1);
//! view.set_filter(FilterCriteria::new().with_text("edf"));
//! view.set_sort(SortKey::asc("amount"));
//!
//! assert_eq!(view.visible_ids(), vec!["1"]);
//! assert_eq!(view.total_pages(), 2);
//!
//! view.toggle_select_all();
//! let totals = view.selection_totals(&["amount"]);
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod view;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{Result, ViewError},
        field::{FieldValue, IsoDate},
        query::{PaginatedResponse, PaginationMeta, QueryParams},
        record::Record,
    };

    // === Pipeline ===
    pub use crate::view::{
        FieldConstraint, FilterCriteria, Page, PageState, SelectAllPolicy, SelectionSet,
        SelectionTotals, SortDirection, SortKey, ViewController, filter_records, paginate,
        sort_records, total_pages,
    };

    // === Macros ===
    pub use crate::{impl_field_enum, impl_record};

    // === Records ===
    pub use crate::entities::{
        Attachment, BankTransaction, CatalogItem, CatalogKind, Document, DocumentKind,
        DocumentStatus, Dossier, DossierStatus, TaxRegime, TransactionStatus,
    };

    // === Config ===
    pub use crate::config::{ViewConfig, ViewsConfig};
}
