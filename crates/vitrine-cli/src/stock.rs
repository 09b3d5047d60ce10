//! `stock` command handlers.

use clap::Subcommand;
use vitrine_core::Catalog;
use vitrine_rules::{search_stock, stock_summary, SessionStore};

#[derive(Debug, Subcommand)]
pub(crate) enum StockCommands {
    /// List stock items with their status
    List {
        /// Only items at or below their minimum level
        #[arg(long)]
        low: bool,

        /// Match product name, SKU or platform
        #[arg(long)]
        query: Option<String>,
    },
    /// Apply a signed quantity change and print the audit record
    Adjust {
        /// Stock item id, e.g. stock-003
        id: String,

        /// Signed change, e.g. 5 or -2
        #[arg(allow_hyphen_values = true)]
        delta: i64,

        /// Why the quantity changed
        #[arg(long)]
        reason: String,
    },
}

pub(crate) fn run_stock(catalog: Catalog, command: StockCommands) -> anyhow::Result<()> {
    let mut store = SessionStore::new(catalog);

    match command {
        StockCommands::List { low, query } => {
            let summary = stock_summary(store.stock_items());
            println!(
                "{} items, {} low, {} high",
                summary.total, summary.low, summary.high
            );
            let query = query.unwrap_or_default();
            for item in search_stock(&query, store.stock_items(), low) {
                println!(
                    "{:<10} {:<16} {:<45} {:>5} [{}..{}] {}",
                    item.id,
                    item.sku,
                    item.product_name,
                    item.quantity,
                    item.min_stock_level,
                    item.max_stock_level,
                    item.status().label()
                );
            }
        }
        StockCommands::Adjust { id, delta, reason } => {
            let previous = store
                .stock_item(&id)
                .map(vitrine_core::StockItem::status);
            let record = store.adjust_stock(&id, delta, &reason)?.clone();
            let current = store.stock_item(&id).map(vitrine_core::StockItem::status);
            if let (Some(previous), Some(current)) = (previous, current) {
                println!("status: {previous} -> {current}");
            }
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}
