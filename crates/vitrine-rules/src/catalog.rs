//! The catalog screen pipeline (filter, then sort) and the admin product
//! list (search, selections, pagination).

use vitrine_core::{FilterSet, Platform, Product};

use crate::index::ProductIndex;
use crate::paginate::{paginate, Page};
use crate::{filter, search, sort};

/// Products visible under `filters`, in display order.
#[must_use]
pub fn browse<'a, I>(products: I, filters: &FilterSet) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut visible = filter::filter(products, filters);
    sort::sort_products(&mut visible, filters.sort);
    visible
}

/// One page of the admin product list.
///
/// `filters.query` is matched against title, description and id with no
/// length threshold. Platform, category and flag selections apply as on the
/// storefront; the price range and sort key do not. Supplier order is kept.
#[must_use]
pub fn admin_products<'a, I>(
    products: I,
    filters: &FilterSet,
    page: usize,
    per_page: usize,
) -> Page<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let matched: Vec<&Product> = products
        .into_iter()
        .filter(|p| {
            search::matches_admin(&filters.query, p) && filter::matches_selection(p, filters)
        })
        .collect();
    tracing::debug!(matched = matched.len(), page, "admin product list evaluated");
    paginate(&matched, page, per_page)
}

/// Choices offered by the filter sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions<'a> {
    pub platforms: Vec<Platform>,
    pub categories: Vec<&'a str>,
}

#[must_use]
pub fn filter_options(index: &ProductIndex) -> FilterOptions<'_> {
    FilterOptions {
        platforms: index.platforms(),
        categories: index.categories(),
    }
}
