//! Documents of the document grid (uploads, statements, tax forms)

use crate::core::field::IsoDate;
use crate::{impl_field_enum, impl_record};

impl_field_enum!(
    DocumentKind {
        Invoice => "invoice",
        Receipt => "receipt",
        BankStatement => "bank_statement",
        Contract => "contract",
        TaxForm => "tax_form",
        Other => "other",
    }
);

impl_field_enum!(
    DocumentStatus {
        ToProcess => "to_process",
        Processed => "processed",
        Archived => "archived",
    }
);

impl_record!(
    /// A stored document shown as a card in the grid
    Document,
    "document",
    ["name", "client_name", "tags"],
    {
        name: String,
        kind: DocumentKind,
        status: DocumentStatus,
        uploaded_at: IsoDate,
        size_bytes: u64,
        client_name: String,
        tags: Vec<String>,
    }
);

impl Document {
    pub fn new(id: &str, name: &str, kind: DocumentKind, uploaded_at: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            uploaded_at: IsoDate::from(uploaded_at),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: DocumentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_client(mut self, client_name: &str) -> Self {
        self.client_name = client_name.to_string();
        self
    }

    pub fn with_size(mut self, size_bytes: u64) -> Self {
        self.size_bytes = size_bytes;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}
