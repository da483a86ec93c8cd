//! Record types of the list screens and the macros that generate them

pub mod macros;

pub mod catalog;
pub mod document;
pub mod dossier;
pub mod transaction;

pub use catalog::{CatalogItem, CatalogKind};
pub use document::{Document, DocumentKind, DocumentStatus};
pub use dossier::{Dossier, DossierStatus, TaxRegime};
pub use transaction::{Attachment, BankTransaction, TransactionStatus};
