//! Line items the order form starts with.

use super::aggregate::{LineItemId, Product};
use super::catalog::{self, CatalogKind};
use crate::domain::common::SelectOption;

struct SeedRow {
    name: &'static str,
    sub_name: &'static str,
    image_src: Option<&'static str>,
    size: &'static str,
    standard: &'static str,
    pre_post: &'static str,
    quantity: i64,
    price: f64,
}

const SEED_ROWS: &[SeedRow] = &[
    SeedRow {
        name: "Plain Particle Board",
        sub_name: "PPB 18",
        image_src: Some("/images/ppb.png"),
        size: "3040x1250x18",
        standard: "standard0",
        pre_post: "pre",
        quantity: 20,
        price: 48.0,
    },
    SeedRow {
        name: "Plain Particle Board",
        sub_name: "PPB 18 E1",
        image_src: Some("/images/ppb.png"),
        size: "3040x1100x18",
        standard: "standard1",
        pre_post: "post",
        quantity: 12,
        price: 52.0,
    },
    SeedRow {
        name: "Pre-Laminated Board",
        sub_name: "PLB 20",
        image_src: None,
        size: "3040x1350x20",
        standard: "standard3",
        pre_post: "pre",
        quantity: 8,
        price: 61.5,
    },
];

/// Fresh line items with newly generated ids
pub fn seed_products() -> Vec<Product> {
    SEED_ROWS.iter().map(seed_product).collect()
}

fn seed_product(row: &SeedRow) -> Product {
    Product {
        id: LineItemId::new_v4(),
        name: row.name.to_string(),
        sub_name: row.sub_name.to_string(),
        image_src: row.image_src.map(str::to_string),
        size: choice(CatalogKind::Size, row.size),
        standard: choice(CatalogKind::Standard, row.standard),
        pre_post: choice(CatalogKind::PrePost, row.pre_post),
        quality: String::new(),
        quantity: row.quantity,
        price: row.price,
        rate: 0,
    }
}

// Seed rows are written against the catalogs; a typo falls back to the first
// member so the invariant still holds.
fn choice(kind: CatalogKind, value: &str) -> SelectOption {
    catalog::resolve(kind, value)
        .or_else(|| catalog::options(kind).first().cloned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_unique() {
        let items = seed_products();
        let ids: HashSet<_> = items.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_seed_choices_are_catalog_members() {
        for p in seed_products() {
            assert!(catalog::contains(CatalogKind::Size, &p.size));
            assert!(catalog::contains(CatalogKind::Standard, &p.standard));
            assert!(catalog::contains(CatalogKind::PrePost, &p.pre_post));
        }
    }
}
