use super::*;

const VALID: &str = r#"
products:
  - id: prod-001
    title: God of War Ragnarök
    price: "299.90"
    original_price: "349.90"
    platform: ps5
    category: Jogos
    is_on_sale: true
    featured: true
    stock_quantity: 15
  - id: prod-003
    title: Halo Infinite
    price: "199.90"
    platform: xbox
    category: Jogos
stock:
  - id: stock-003
    product_id: prod-003
    product_name: Halo Infinite
    platform: Xbox
    sku: HALO-XBX-001
    quantity: 3
    min_stock_level: 5
    max_stock_level: 20
    last_updated: "2023-10-18T11:25:00Z"
"#;

fn expect_validation(content: &str, needle: &str) {
    match parse_catalog(content) {
        Err(ConfigError::Validation(msg)) => assert!(
            msg.contains(needle),
            "expected message containing {needle:?}, got {msg:?}"
        ),
        other => panic!("expected validation error, got: {other:?}"),
    }
}

#[test]
fn parses_valid_catalog() {
    let catalog = parse_catalog(VALID).expect("catalog should parse");
    assert_eq!(catalog.products.len(), 2);
    assert_eq!(catalog.stock.len(), 1);
    assert_eq!(catalog.products[0].price, Decimal::new(29990, 2));
    assert_eq!(catalog.products[0].original_price, Some(Decimal::new(34990, 2)));
    assert_eq!(catalog.stock[0].sku, "HALO-XBX-001");
}

#[test]
fn stock_section_is_optional() {
    let content = r#"
products:
  - id: prod-001
    title: Horizon Forbidden West
    price: "249.90"
    platform: ps5
    category: Jogos
"#;
    let catalog = parse_catalog(content).unwrap();
    assert!(catalog.stock.is_empty());
}

#[test]
fn rejects_malformed_yaml() {
    let result = parse_catalog("products: [");
    assert!(matches!(result, Err(ConfigError::CatalogFileParse(_))));
}

#[test]
fn rejects_unknown_platform() {
    let content = r#"
products:
  - id: prod-001
    title: Sonic
    price: "99.90"
    platform: dreamcast
    category: Jogos
"#;
    assert!(matches!(
        parse_catalog(content),
        Err(ConfigError::CatalogFileParse(_))
    ));
}

#[test]
fn rejects_duplicate_product_ids() {
    let content = r#"
products:
  - id: prod-001
    title: A
    price: "10"
    platform: ps4
    category: Jogos
  - id: prod-001
    title: B
    price: "20"
    platform: ps4
    category: Jogos
"#;
    expect_validation(content, "duplicate product id");
}

#[test]
fn rejects_empty_title() {
    let content = r#"
products:
  - id: prod-001
    title: "  "
    price: "10"
    platform: ps4
    category: Jogos
"#;
    expect_validation(content, "empty title");
}

#[test]
fn rejects_negative_price() {
    let content = r#"
products:
  - id: prod-001
    title: A
    price: "-1"
    platform: ps4
    category: Jogos
"#;
    expect_validation(content, "negative price");
}

#[test]
fn rejects_original_price_below_price() {
    let content = r#"
products:
  - id: prod-001
    title: A
    price: "50"
    original_price: "40"
    platform: ps4
    category: Jogos
"#;
    expect_validation(content, "below price");
}

#[test]
fn rejects_stock_for_unknown_product() {
    let content = VALID.replace("product_id: prod-003", "product_id: prod-404");
    expect_validation(&content, "unknown product 'prod-404'");
}

#[test]
fn rejects_inverted_stock_thresholds() {
    let content = VALID.replace("min_stock_level: 5", "min_stock_level: 25");
    expect_validation(&content, "above max level");
}

#[test]
fn load_catalog_reports_missing_file() {
    let result = load_catalog(Path::new("/definitely/not/here/catalog.yaml"));
    assert!(matches!(
        result,
        Err(ConfigError::CatalogFileIo { ref path, .. }) if path.contains("catalog.yaml")
    ));
}
