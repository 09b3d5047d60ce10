//! `catalog`, `products`, `options` and `search` command handlers.

use clap::Args;
use rust_decimal::Decimal;
use tokio::io::{AsyncBufReadExt, BufReader};
use vitrine_core::{AppConfig, Catalog, FilterSet, Platform, PriceRange, Product, SortKey};
use vitrine_rules::{
    admin_products, browse, filter_options, format_brl, paginate, search, Debouncer, Page,
    ProductIndex,
};

/// Filter and sort options for the `catalog` command.
#[derive(Debug, Default, Args)]
pub(crate) struct CatalogArgs {
    /// Restrict to a platform; repeatable
    #[arg(long = "platform")]
    pub platforms: Vec<Platform>,

    /// Restrict to a category; repeatable
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Lowest price shown
    #[arg(long)]
    pub min_price: Option<Decimal>,

    /// Highest price shown (defaults to VITRINE_PRICE_CEILING)
    #[arg(long)]
    pub max_price: Option<Decimal>,

    #[arg(long)]
    pub in_stock: bool,

    #[arg(long)]
    pub on_sale: bool,

    #[arg(long)]
    pub featured: bool,

    #[arg(long)]
    pub new: bool,

    /// Free-text filter (ignored below 2 characters)
    #[arg(long)]
    pub query: Option<String>,

    /// featured, price-asc, price-desc, name-asc, name-desc, newest or discount
    #[arg(long, default_value = "featured")]
    pub sort: SortKey,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

impl CatalogArgs {
    pub(crate) fn to_filter_set(&self, ceiling: Decimal) -> FilterSet {
        let mut filters = FilterSet::with_ceiling(ceiling);
        filters.platforms.extend(self.platforms.iter().copied());
        filters.categories.extend(self.categories.iter().cloned());
        filters.price_range = PriceRange::new(
            self.min_price.unwrap_or(Decimal::ZERO),
            self.max_price.unwrap_or(ceiling),
        );
        filters.in_stock_only = self.in_stock;
        filters.on_sale_only = self.on_sale;
        filters.featured_only = self.featured;
        filters.new_only = self.new;
        filters.query = self.query.clone().unwrap_or_default();
        filters.sort = self.sort;
        filters
    }
}

/// Options for the admin `products` list.
#[derive(Debug, Default, Args)]
pub(crate) struct ProductsArgs {
    /// Match title, description or id; any length
    #[arg(long)]
    pub query: Option<String>,

    /// Restrict to a platform; repeatable
    #[arg(long = "platform")]
    pub platforms: Vec<Platform>,

    /// Restrict to a category; repeatable
    #[arg(long = "category")]
    pub categories: Vec<String>,

    #[arg(long)]
    pub in_stock: bool,

    #[arg(long)]
    pub on_sale: bool,

    #[arg(long)]
    pub featured: bool,

    #[arg(long)]
    pub new: bool,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

impl ProductsArgs {
    pub(crate) fn to_filter_set(&self) -> FilterSet {
        let mut filters = FilterSet::default();
        filters.platforms.extend(self.platforms.iter().copied());
        filters.categories.extend(self.categories.iter().cloned());
        filters.in_stock_only = self.in_stock;
        filters.on_sale_only = self.on_sale;
        filters.featured_only = self.featured;
        filters.new_only = self.new;
        filters.query = self.query.clone().unwrap_or_default();
        filters
    }
}

pub(crate) fn run_catalog(
    catalog: Catalog,
    args: &CatalogArgs,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let index = ProductIndex::new(catalog.products);
    let filters = args.to_filter_set(config.price_ceiling);
    let visible = browse(&index, &filters);
    print_page(&paginate(&visible, args.page, config.page_size));
    Ok(())
}

pub(crate) fn run_products(catalog: Catalog, args: &ProductsArgs, config: &AppConfig) {
    let index = ProductIndex::new(catalog.products);
    let filters = args.to_filter_set();
    print_page(&admin_products(&index, &filters, args.page, config.page_size));
}

fn print_page(page: &Page<&Product>) {
    for product in &page.items {
        println!("{}", product_row(product));
    }
    println!(
        "page {}/{} ({} of {} products)",
        page.page,
        page.total_pages,
        page.items.len(),
        page.total_items
    );
}

pub(crate) fn run_options(catalog: Catalog) {
    let index = ProductIndex::new(catalog.products);
    let options = filter_options(&index);
    let platforms: Vec<&str> = options.platforms.iter().map(|p| p.as_str()).collect();
    println!("platforms: {}", platforms.join(", "));
    println!("categories: {}", options.categories.join(", "));
}

pub(crate) fn run_search(catalog: &Catalog, query: &str) {
    if !search::is_searchable(query) {
        println!(
            "query must be at least {} characters",
            search::MIN_QUERY_CHARS
        );
        return;
    }
    print_hits(catalog, query);
}

/// Treats each stdin line as the current contents of the search box.
pub(crate) async fn run_search_watch(catalog: Catalog, config: &AppConfig) -> anyhow::Result<()> {
    let (mut debouncer, mut settled) = Debouncer::new(config.search_debounce());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(query) => debouncer.push(query),
                None => break,
            },
            Some(query) = settled.recv() => run_search(&catalog, &query),
        }
    }

    debouncer.finish().await;
    while let Some(query) = settled.recv().await {
        run_search(&catalog, &query);
    }
    Ok(())
}

fn print_hits(catalog: &Catalog, query: &str) {
    let hits = search::rank(query, &catalog.products);
    if hits.is_empty() {
        println!("no products match {query:?}");
    }
    for product in hits {
        println!("{}", product_row(product));
    }
}

pub(crate) fn product_row(product: &Product) -> String {
    let mut row = format!(
        "{:<10} {:<45} {:<10} {:>12}",
        product.id,
        product.title,
        product.platform,
        format_brl(product.price)
    );
    let discount = product.discount_percent();
    if discount > 0 {
        row.push_str(&format!("  -{discount}%"));
    }
    if product.is_new {
        row.push_str("  novo");
    }
    if !product.in_stock {
        row.push_str("  esgotado");
    }
    row
}
