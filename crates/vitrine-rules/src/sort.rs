//! Catalog ordering. All orderings are stable: products with equal keys keep
//! the order they arrived in.

use std::borrow::Borrow;
use std::cmp::{Ordering, Reverse};

use vitrine_core::{Product, SortKey};

use crate::collation::collation_key;

/// Three-way comparison of two products under `key`.
///
/// `Featured` treats every pair as equal, which leaves a stable sort untouched.
#[must_use]
pub fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::Featured => Ordering::Equal,
        SortKey::PriceAsc => a.price.cmp(&b.price),
        SortKey::PriceDesc => b.price.cmp(&a.price),
        SortKey::NameAsc => collation_key(&a.title).cmp(&collation_key(&b.title)),
        SortKey::NameDesc => collation_key(&b.title).cmp(&collation_key(&a.title)),
        SortKey::Newest => b.is_new.cmp(&a.is_new),
        SortKey::Discount => b.discount_ratio().cmp(&a.discount_ratio()),
    }
}

/// Reorders `products` in place under `key`.
pub fn sort_products<P>(products: &mut [P], key: SortKey)
where
    P: Borrow<Product>,
{
    match key {
        SortKey::Featured => {}
        SortKey::NameAsc => products.sort_by_cached_key(|p| collation_key(&p.borrow().title)),
        SortKey::NameDesc => {
            products.sort_by_cached_key(|p| Reverse(collation_key(&p.borrow().title)));
        }
        SortKey::Discount => products.sort_by_cached_key(|p| Reverse(p.borrow().discount_ratio())),
        _ => products.sort_by(|a, b| compare(a.borrow(), b.borrow(), key)),
    }
    tracing::debug!(sort = %key, count = products.len(), "catalog sorted");
}

#[cfg(test)]
mod tests {
    use vitrine_core::Platform;

    use super::*;
    use crate::test_support::{dec, ids, product};

    fn catalog() -> Vec<Product> {
        let mut gow = product("p1", "God of War Ragnarök", "299.90", Platform::Ps5, "Jogos");
        gow.original_price = Some(dec("349.90"));
        let horizon = product("p2", "Horizon Forbidden West", "249.90", Platform::Ps5, "Jogos");
        let mut halo = product("p3", "Halo Infinite", "199.90", Platform::Xbox, "Jogos");
        halo.original_price = Some(dec("249.90"));
        let mut zelda = product("p4", "Zelda", "349.90", Platform::Nintendo, "Jogos");
        zelda.is_new = true;
        let mut pad = product("p5", "Controle DualSense", "449.90", Platform::Ps5, "Acessórios");
        pad.original_price = Some(dec("499.90"));
        let mut agua = product("p6", "Água Rasa", "249.90", Platform::Ps4, "Jogos");
        agua.is_new = true;
        vec![gow, horizon, halo, zelda, pad, agua]
    }

    fn sorted(key: SortKey) -> Vec<String> {
        let products = catalog();
        let mut refs: Vec<&Product> = products.iter().collect();
        sort_products(&mut refs, key);
        refs.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn featured_keeps_supplied_order() {
        assert_eq!(sorted(SortKey::Featured), ["p1", "p2", "p3", "p4", "p5", "p6"]);
    }

    #[test]
    fn price_asc_is_non_decreasing_and_stable() {
        // p2 and p6 share a price and keep their relative order.
        assert_eq!(sorted(SortKey::PriceAsc), ["p3", "p2", "p6", "p1", "p4", "p5"]);
    }

    #[test]
    fn price_desc_is_non_increasing_and_stable() {
        assert_eq!(sorted(SortKey::PriceDesc), ["p5", "p4", "p1", "p2", "p6", "p3"]);
    }

    #[test]
    fn name_asc_files_accented_titles_alphabetically() {
        assert_eq!(sorted(SortKey::NameAsc), ["p6", "p5", "p1", "p3", "p2", "p4"]);
    }

    #[test]
    fn name_desc_reverses_name_asc() {
        assert_eq!(sorted(SortKey::NameDesc), ["p4", "p2", "p3", "p1", "p5", "p6"]);
    }

    #[test]
    fn newest_is_a_stable_partition() {
        assert_eq!(sorted(SortKey::Newest), ["p4", "p6", "p1", "p2", "p3", "p5"]);
    }

    #[test]
    fn newest_is_idempotent() {
        let products = catalog();
        let mut once: Vec<&Product> = products.iter().collect();
        sort_products(&mut once, SortKey::Newest);
        let mut twice = once.clone();
        sort_products(&mut twice, SortKey::Newest);
        assert_eq!(ids(once), ids(twice));
    }

    #[test]
    fn discount_orders_by_descending_ratio_with_stable_ties() {
        // Halo 20%, God of War 14.3%, DualSense 10%, the rest 0% in original order.
        assert_eq!(sorted(SortKey::Discount), ["p3", "p1", "p5", "p2", "p4", "p6"]);
    }

    #[test]
    fn compare_matches_sort_direction() {
        let products = catalog();
        assert_eq!(compare(&products[0], &products[1], SortKey::PriceAsc), Ordering::Greater);
        assert_eq!(compare(&products[0], &products[1], SortKey::PriceDesc), Ordering::Less);
        assert_eq!(compare(&products[3], &products[0], SortKey::Newest), Ordering::Less);
        assert_eq!(compare(&products[0], &products[4], SortKey::Featured), Ordering::Equal);
    }

    #[test]
    fn sorts_owned_products_too() {
        let mut products = catalog();
        sort_products(&mut products, SortKey::PriceAsc);
        let prices: Vec<_> = products.iter().map(|p| p.price).collect();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));
    }
}
