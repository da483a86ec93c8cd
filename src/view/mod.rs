//! Collection view pipeline: filter, sort, paginate, select
//!
//! Each stage is a pure function over records held in memory. The
//! [`ViewController`] chains them for one screen and keeps the selection.

pub mod controller;
pub mod filter;
pub mod paginate;
pub mod selection;
pub mod sort;

pub use controller::ViewController;
pub use filter::{FieldConstraint, FilterCriteria, filter_records};
pub use paginate::{DEFAULT_PAGE_SIZE, Page, PageState, paginate, total_pages};
pub use selection::{SelectAllPolicy, SelectionSet, SelectionTotals, selection_totals};
pub use sort::{SortDirection, SortKey, compare_values, sort_records};
