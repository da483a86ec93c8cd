//! Bank transaction table driven from the command line
//!
//! Loads the fixture statement, applies the query given as arguments and
//! prints the current page with the totals of a page-wide selection.
//!
//! ```text
//! RUST_LOG=ledgerview=debug cargo run --example transactions_table -- \
//!     '{"q": "edf"}' amount:asc 1
//! ```

use anyhow::{Context, Result};
use ledgerview::prelude::*;
use tracing_subscriber::EnvFilter;

const FIXTURE: &str = include_str!("fixtures/transactions.json");

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let records: Vec<BankTransaction> =
        serde_json::from_str(FIXTURE).context("Failed to parse transaction fixtures")?;

    let config = ViewsConfig::default_config();
    let mut view = ViewController::from_config(config.find("transactions")?, records)?;

    let mut args = std::env::args().skip(1);
    let params = QueryParams {
        filter: args.next(),
        sort: args.next(),
        page: args
            .next()
            .map(|p| p.parse::<usize>())
            .transpose()
            .context("Page must be a positive integer")?
            .unwrap_or(1),
        limit: None,
    };
    view.apply_query(&params)?;

    let meta = view.page_meta();
    println!(
        "Page {}/{} ({} transactions)",
        meta.page, meta.total_pages, meta.total
    );
    println!("{:<8} {:<11} {:<24} {:<10} {:>10}", "ID", "DATE", "LABEL", "STATUS", "AMOUNT");
    for tx in view.visible() {
        println!(
            "{:<8} {:<11} {:<24} {:<10} {:>10.2}",
            tx.id, tx.date, tx.label, tx.status, tx.amount
        );
    }

    view.toggle_select_all();
    let totals = view.configured_totals();
    println!(
        "\nSelected {} line(s), total {:.2}",
        totals.count,
        totals.sum("amount")
    );

    Ok(())
}
