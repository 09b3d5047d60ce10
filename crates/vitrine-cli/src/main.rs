mod browse;
mod quote;
mod stock;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vitrine_core::{AppConfig, Catalog};

use crate::browse::{CatalogArgs, ProductsArgs};
use crate::stock::StockCommands;

#[derive(Debug, Parser)]
#[command(name = "vitrine")]
#[command(about = "Storefront catalog, cart and stock rules from the command line")]
struct Cli {
    /// Catalog YAML file; overrides VITRINE_CATALOG_PATH
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List catalog products after filtering and sorting
    Catalog(CatalogArgs),
    /// Admin product list: search by title, description or id, then paginate
    Products(ProductsArgs),
    /// Show the platform and category filter options
    Options,
    /// Quick-search product titles, categories and platforms
    Search {
        /// Search text (at least 2 characters)
        query: Option<String>,

        /// Read successive query states from stdin, debounced like the search box
        #[arg(long, conflicts_with = "query")]
        watch: bool,
    },
    /// Price a cart
    Quote {
        /// Cart line as PRODUCT_ID[:QUANTITY]; repeatable
        #[arg(
            long = "item",
            value_name = "PRODUCT_ID[:QTY]",
            required = true,
            value_parser = quote::parse_item
        )]
        items: Vec<(String, u32)>,

        /// Coupon code to apply
        #[arg(long)]
        coupon: Option<String>,

        /// Also print the prefilled checkout message
        #[arg(long)]
        summary: bool,
    },
    /// Inspect and adjust warehouse stock
    Stock {
        #[command(subcommand)]
        command: StockCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("vitrine: run with --help to list commands");
        return Ok(());
    };

    let config = vitrine_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let catalog = load_catalog(cli.catalog.as_ref(), &config)?;

    match command {
        Commands::Catalog(args) => browse::run_catalog(catalog, &args, &config)?,
        Commands::Products(args) => browse::run_products(catalog, &args, &config),
        Commands::Options => browse::run_options(catalog),
        Commands::Search { query, watch } => {
            if watch {
                browse::run_search_watch(catalog, &config).await?;
            } else {
                browse::run_search(&catalog, query.as_deref().unwrap_or_default());
            }
        }
        Commands::Quote {
            items,
            coupon,
            summary,
        } => quote::run_quote(catalog, &items, coupon.as_deref(), summary)?,
        Commands::Stock { command } => stock::run_stock(catalog, command)?,
    }

    Ok(())
}

fn load_catalog(override_path: Option<&PathBuf>, config: &AppConfig) -> anyhow::Result<Catalog> {
    let path = override_path.unwrap_or(&config.catalog_path);
    let catalog = vitrine_core::load_catalog(path)
        .with_context(|| format!("loading catalog from {}", path.display()))?;
    tracing::debug!(
        products = catalog.products.len(),
        stock_items = catalog.stock.len(),
        path = %path.display(),
        "catalog loaded"
    );
    Ok(catalog)
}
