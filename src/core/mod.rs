//! Core module containing fundamental traits and types of the crate

pub mod error;
pub mod field;
pub mod query;
pub mod record;

pub use error::{Result, ViewError};
pub use field::{FieldValue, IsoDate};
pub use query::{PaginatedResponse, PaginationMeta, QueryParams};
pub use record::Record;
