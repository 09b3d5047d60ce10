use std::str::FromStr;

use rust_decimal::Decimal;
use vitrine_core::{Platform, Product};

pub(crate) fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).expect("valid decimal literal")
}

pub(crate) fn product(
    id: &str,
    title: &str,
    price: &str,
    platform: Platform,
    category: &str,
) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        price: dec(price),
        original_price: None,
        platform,
        category: category.to_string(),
        image: None,
        is_new: false,
        is_on_sale: false,
        featured: false,
        in_stock: true,
        stock_quantity: 10,
    }
}

pub(crate) fn ids<'a, I>(products: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a Product>,
{
    products.into_iter().map(|p| p.id.as_str()).collect()
}
