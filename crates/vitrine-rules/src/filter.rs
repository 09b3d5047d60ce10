//! Catalog filter predicates. Every active selection must hold (logical AND).

use vitrine_core::{FilterSet, Product};

use crate::search;

/// Returns `true` when `product` satisfies every selection in `filters`.
///
/// Empty platform/category selections impose no restriction. A search query
/// shorter than the quick-search threshold is ignored. An inverted price
/// range matches nothing.
#[must_use]
pub fn include(product: &Product, filters: &FilterSet) -> bool {
    if !matches_selection(product, filters) || !filters.price_range.contains(product.price) {
        return false;
    }

    if search::is_searchable(&filters.query) && !search::matches(&filters.query, product) {
        return false;
    }

    true
}

/// Platform, category and flag checks only; price and query are left to the
/// caller.
#[must_use]
pub fn matches_selection(product: &Product, filters: &FilterSet) -> bool {
    if !filters.platforms.is_empty() && !filters.platforms.contains(&product.platform) {
        return false;
    }

    if !filters.categories.is_empty() && !filters.categories.contains(&product.category) {
        return false;
    }

    !((filters.in_stock_only && !product.in_stock)
        || (filters.on_sale_only && !product.is_on_sale)
        || (filters.featured_only && !product.featured)
        || (filters.new_only && !product.is_new))
}

/// Keeps the products that pass [`include`], preserving input order.
#[must_use]
pub fn filter<'a, I>(products: I, filters: &FilterSet) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let kept: Vec<&Product> = products
        .into_iter()
        .filter(|p| include(p, filters))
        .collect();
    tracing::debug!(kept = kept.len(), "catalog filter applied");
    kept
}
