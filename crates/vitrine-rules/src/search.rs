//! Quick-search matching for the storefront search box and the admin lists.

use vitrine_core::Product;

/// Queries shorter than this never trigger a storefront search.
pub const MIN_QUERY_CHARS: usize = 2;

/// Whether `query` is long enough to run a storefront search.
#[must_use]
pub fn is_searchable(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_CHARS
}

/// Case-insensitive substring match against title, category and platform.
///
/// Sub-threshold queries never match.
#[must_use]
pub fn matches(query: &str, product: &Product) -> bool {
    is_searchable(query) && matches_needle(&query.to_lowercase(), product)
}

/// Products matching `query`, in collection order.
#[must_use]
pub fn rank<'a, I>(query: &str, products: I) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    if !is_searchable(query) {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let hits: Vec<&Product> = products
        .into_iter()
        .filter(|p| matches_needle(&needle, p))
        .collect();
    tracing::debug!(query, hits = hits.len(), "quick search evaluated");
    hits
}

fn matches_needle(needle: &str, product: &Product) -> bool {
    product.title.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
        || product.platform.as_str().contains(needle)
}

/// Admin product-list search over title, description and id.
///
/// An empty query matches everything; there is no length threshold here.
#[must_use]
pub fn matches_admin(query: &str, product: &Product) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    product.title.to_lowercase().contains(&needle)
        || product
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&needle))
        || product.id.to_lowercase().contains(&needle)
}
