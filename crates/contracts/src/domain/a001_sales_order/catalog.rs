//! Closed enumerations offered by the order form selectors.
//!
//! Each catalog is turned into a lookup table (value -> option) the first
//! time it is touched and then queried by exact key. Declaration order is
//! kept for rendering.

use crate::domain::common::SelectOption;
use once_cell::sync::Lazy;
use std::collections::HashMap;

// ─── Source tables ──────────────────────────────────────────────────────────

const SIZE_OPTIONS: &[(&str, &str)] = &[
    ("3040x1250x18", "3040 x 1250 x 18"),
    ("3040x1100x18", "3040 x 1100 x 18"),
    ("3040x1350x20", "3040 x 1350 x 20"),
];

const STANDARD_OPTIONS: &[(&str, &str)] = &[
    ("standard0", "Standard@0"),
    ("standard1", "Standard@1"),
    ("standard3", "Standard@3"),
];

const PRE_POST_OPTIONS: &[(&str, &str)] = &[
    ("pre", "Pre"),
    ("post", "Post"),
    ("other", "someting.."),
];

const SHIPPING_OPTIONS: &[(&str, &str)] = &[
    ("standard", "Standard Shipping"),
    ("express", "Express Shipping"),
    ("pickup", "Local Pickup"),
];

/// Dealers the order may be placed for. Label and value are the same string.
pub const VALID_DEALERS: &[&str] = &[
    "Test Dealer (Mumbai MH)",
    "Test Dealer (Pune MH)",
    "Test Dealer (Delhi DL)",
    "Test Dealer (Bangalore KA)",
    "Test Dealer (Chennai TN)",
];

// ─── Catalog kinds ──────────────────────────────────────────────────────────

/// Which closed enumeration a choice belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Size,
    Standard,
    PrePost,
    Shipping,
    Dealer,
}

impl CatalogKind {
    fn catalog(&self) -> &'static Catalog {
        match self {
            CatalogKind::Size => &*SIZES,
            CatalogKind::Standard => &*STANDARDS,
            CatalogKind::PrePost => &*PRE_POSTS,
            CatalogKind::Shipping => &*SHIPPING,
            CatalogKind::Dealer => &*DEALERS,
        }
    }
}

// ─── Lookup tables ──────────────────────────────────────────────────────────

struct Catalog {
    options: Vec<SelectOption>,
    index: HashMap<&'static str, usize>,
}

impl Catalog {
    fn build(entries: &'static [(&'static str, &'static str)]) -> Self {
        let options = entries
            .iter()
            .map(|(value, label)| SelectOption::new(*value, *label))
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (value, _))| (*value, i))
            .collect();
        Self { options, index }
    }

    fn build_same(values: &'static [&'static str]) -> Self {
        let options = values.iter().map(|v| SelectOption::same(*v)).collect();
        let index = values.iter().enumerate().map(|(i, v)| (*v, i)).collect();
        Self { options, index }
    }

    fn resolve(&self, value: &str) -> Option<&SelectOption> {
        self.index.get(value).map(|&i| &self.options[i])
    }
}

static SIZES: Lazy<Catalog> = Lazy::new(|| Catalog::build(SIZE_OPTIONS));
static STANDARDS: Lazy<Catalog> = Lazy::new(|| Catalog::build(STANDARD_OPTIONS));
static PRE_POSTS: Lazy<Catalog> = Lazy::new(|| Catalog::build(PRE_POST_OPTIONS));
static SHIPPING: Lazy<Catalog> = Lazy::new(|| Catalog::build(SHIPPING_OPTIONS));
static DEALERS: Lazy<Catalog> = Lazy::new(|| Catalog::build_same(VALID_DEALERS));

// ─── Public API ─────────────────────────────────────────────────────────────

/// All options of a catalog, in declaration order
pub fn options(kind: CatalogKind) -> &'static [SelectOption] {
    &kind.catalog().options
}

/// Resolve a selector value to its full option. `None` when the value is not
/// a member of the catalog.
pub fn resolve(kind: CatalogKind, value: &str) -> Option<SelectOption> {
    kind.catalog().resolve(value).cloned()
}

/// Whether `option` is exactly one of the catalog's members (value and label)
pub fn contains(kind: CatalogKind, option: &SelectOption) -> bool {
    kind.catalog()
        .resolve(&option.value)
        .is_some_and(|known| known == option)
}

pub fn dealer_options() -> &'static [SelectOption] {
    options(CatalogKind::Dealer)
}

pub fn is_valid_dealer(value: &str) -> bool {
    DEALERS.resolve(value).is_some()
}
