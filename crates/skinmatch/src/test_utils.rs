use crate::catalog::memory::InMemoryCatalog;
use crate::catalog::{Catalog, CatalogFile, ItemRecord};

/// The four-concern storefront catalog used across command and CLI tests.
///
/// | id | concerns | stock | rating | price |
/// |----|----------|-------|--------|-------|
/// | p1 | ACNE, DULL | 5 | 4.2 | 2400 |
/// | p2 | ACNE, OILY | 9 | 4.8 | 1800 |
/// | p3 | DRY | 7 | 3.9 | 3100 |
/// | p4 | ACNE, DULL, OILY | 2 | 4.5 | 2900 |
pub const SAMPLE_CATALOG: &str = r#"{
  "attributes": ["ACNE", "DULL", "DRY", "OILY"],
  "items": [
    { "id": "p1", "name": "Clarifying Serum", "attributes": ["ACNE", "DULL"],
      "stock": 5, "rating": 4.2, "price_cents": 2400 },
    { "id": "p2", "name": "Oil Control Gel", "attributes": ["ACNE", "OILY"],
      "stock": 9, "rating": 4.8, "price_cents": 1800 },
    { "id": "p3", "name": "Barrier Cream", "attributes": ["DRY"],
      "stock": 7, "rating": 3.9, "price_cents": 3100 },
    { "id": "p4", "name": "Triple Fix Toner", "attributes": ["ACNE", "DULL", "OILY"],
      "stock": 2, "rating": 4.5, "price_cents": 2900 }
  ]
}"#;

pub fn sample_catalog() -> InMemoryCatalog {
    InMemoryCatalog::from_json(SAMPLE_CATALOG).expect("sample catalog is valid")
}

/// A catalog with `count` items cycling through the sample attributes.
pub fn generated_catalog(count: usize) -> InMemoryCatalog {
    let names = ["ACNE", "DULL", "DRY", "OILY"];
    let items = (0..count)
        .map(|i| ItemRecord {
            id: format!("g{i}"),
            name: format!("Generated {i}"),
            kind: "product".to_string(),
            attributes: vec![names[i % 4].to_string(), names[(i / 4) % 4].to_string()],
            stock: (i % 13) as u32,
            rating: (i % 5) as f32,
            price_cents: 1_000 + (i as u64 % 7) * 100,
            updated_at: None,
        })
        .collect();
    let file = CatalogFile {
        attributes: names.iter().map(|n| n.to_string()).collect(),
        items,
    };
    InMemoryCatalog::new(Catalog::from_file(file).expect("generated catalog is valid"))
}
