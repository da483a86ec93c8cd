//! Bank transaction rows of the bank-reconciliation table

use crate::core::field::{FieldValue, IsoDate};
use crate::{impl_field_enum, impl_record};
use serde::{Deserialize, Serialize};

impl_field_enum!(
    /// Reconciliation state of a bank line
    TransactionStatus {
        Pending => "pending",
        Matched => "matched",
        Ignored => "ignored",
    }
);

/// Supporting document attached to a bank line (receipt, invoice scan)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: String,
    pub document_id: Option<String>,
}

impl From<Attachment> for FieldValue {
    fn from(value: Attachment) -> Self {
        FieldValue::Text(value.file_name)
    }
}

impl_record!(
    /// One line of a bank account statement
    BankTransaction,
    "transaction",
    ["label", "counterparty", "account_number", "category", "tags"],
    {
        /// Value date
        date: IsoDate,
        label: String,
        counterparty: String,
        account_number: String,
        category: String,
        status: TransactionStatus,
        /// Signed amount: negative for debits
        amount: f64,
        tags: Vec<String>,
        attachment: Option<Attachment>,
    },
    computed { abs_amount }
);

impl BankTransaction {
    pub fn new(id: &str, date: &str, label: &str, amount: f64) -> Self {
        Self {
            id: id.to_string(),
            date: IsoDate::from(date),
            label: label.to_string(),
            amount,
            ..Self::default()
        }
    }

    /// Magnitude of the amount, used by range filters on debits and credits
    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }

    pub fn is_debit(&self) -> bool {
        self.amount < 0.0
    }

    pub fn with_counterparty(mut self, counterparty: &str) -> Self {
        self.counterparty = counterparty.to_string();
        self
    }

    pub fn with_account_number(mut self, account_number: &str) -> Self {
        self.account_number = account_number.to_string();
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    /// Set the status from its string form; unknown values leave it unchanged
    pub fn with_status(mut self, status: &str) -> Self {
        if let Some(status) = TransactionStatus::ALL.iter().find(|s| s.as_str() == status) {
            self.status = *status;
        }
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

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::Record;

    #[test]
    fn test_transaction_record_fields() {
        let tx = BankTransaction::new("t1", "2024-01-05", "Prélèvement EDF", -50.0)
            .with_counterparty("EDF")
            .with_status("matched")
            .with_tags(["energie"]);

        assert_eq!(BankTransaction::record_type(), "transaction");
        assert_eq!(tx.id(), "t1");
        assert_eq!(tx.field_value("label"), Some(FieldValue::from("Prélèvement EDF")));
        assert_eq!(tx.field_value("status"), Some(FieldValue::from("matched")));
        assert_eq!(
            tx.field_value("date"),
            Some(FieldValue::Date(IsoDate::from("2024-01-05")))
        );
        assert_eq!(tx.field_value("amount"), Some(FieldValue::Number(-50.0)));
        assert_eq!(tx.field_value("abs_amount"), Some(FieldValue::Number(50.0)));
        assert_eq!(tx.field_value("nope"), None);
        assert!(tx.is_debit());
    }

    #[test]
    fn test_unknown_status_is_ignored() {
        let tx = BankTransaction::new("t1", "2024-01-05", "EDF", -50.0).with_status("lost");
        assert_eq!(tx.status, TransactionStatus::Pending);
    }

    #[test]
    fn test_attachment_field() {
        let tx = BankTransaction::new("t1", "2024-01-05", "EDF", -50.0);
        assert_eq!(tx.field_value("attachment"), Some(FieldValue::Null));

        let tx = tx.with_attachment(Attachment {
            file_name: "facture-edf.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            document_id: None,
        });
        assert_eq!(
            tx.field_value("attachment"),
            Some(FieldValue::from("facture-edf.pdf"))
        );
    }

    #[test]
    fn test_transaction_deserializes_from_fixture_json() {
        let tx: BankTransaction = serde_json::from_value(serde_json::json!({
            "id": "t9",
            "date": "2024-04-02",
            "label": "Virement Client A",
            "counterparty": "Client A",
            "account_number": "FR76 3000 4000",
            "category": "ventes",
            "status": "pending",
            "amount": 1200.0,
            "tags": [],
            "attachment": null
        }))
        .unwrap();

        assert_eq!(tx.status, TransactionStatus::Pending);
        assert_eq!(tx.date.as_str(), "2024-04-02");
        assert!(tx.attachment.is_none());
    }
}
