//! Shared generators for bank statement collections

use ledgerview::prelude::*;
use proptest::prelude::*;

const LABELS: &[&str] = &["EDF", "Loyer", "Client A", "Orange", "URSSAF", "Café"];

fn transaction_fields() -> impl Strategy<Value = (usize, i32, u32)> {
    (0..LABELS.len(), -5_000i32..5_000, 1u32..=28)
}

/// Statements of up to 40 lines with unique ids
pub fn statement() -> impl Strategy<Value = Vec<BankTransaction>> {
    proptest::collection::vec(transaction_fields(), 0..=40).prop_map(|lines| {
        lines
            .into_iter()
            .enumerate()
            .map(|(i, (label, cents, day))| {
                BankTransaction::new(
                    &format!("tx-{:03}", i),
                    &format!("2024-03-{:02}", day),
                    LABELS[label],
                    f64::from(cents) / 100.0,
                )
            })
            .collect()
    })
}

pub fn search_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("edf".to_string()),
        Just("client".to_string()),
        Just("cafe".to_string()),
        "[a-z]{1,3}",
    ]
}

pub fn ids(records: &[&BankTransaction]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

/// Catalogs mixing products (priced) and clients (no price)
pub fn catalog() -> impl Strategy<Value = Vec<CatalogItem>> {
    proptest::collection::vec(proptest::option::weighted(0.7, 0u32..500), 0..=60).prop_map(|prices| {
        prices
            .into_iter()
            .enumerate()
            .map(|(i, price)| match price {
                Some(price) => CatalogItem::product(
                    &format!("p-{:03}", i),
                    "Produit",
                    "SKU",
                    f64::from(price),
                    20.0,
                ),
                None => CatalogItem::client(&format!("c-{:03}", i), "Client", "CLI"),
            })
            .collect()
    })
}
