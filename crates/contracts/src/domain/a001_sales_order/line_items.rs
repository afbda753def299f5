//! Line-item list state.
//!
//! Every edit produces a new list; the previous list is never mutated.
//! Edits are best-effort: unknown ids, unparsable numbers and values outside
//! a catalog never fail, they are either coerced or dropped.

use super::aggregate::{LineItemId, Product};
use super::catalog::{self, CatalogKind};

/// Editable fields of a line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineItemField {
    Size,
    Standard,
    PrePost,
    Quality,
    Quantity,
    Rate,
}

impl LineItemField {
    /// Catalog a choice field is restricted to
    pub fn catalog(&self) -> Option<CatalogKind> {
        match self {
            LineItemField::Size => Some(CatalogKind::Size),
            LineItemField::Standard => Some(CatalogKind::Standard),
            LineItemField::PrePost => Some(CatalogKind::PrePost),
            _ => None,
        }
    }
}

/// Edits the row editor can dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum LineItemAction {
    UpdateField {
        id: LineItemId,
        field: LineItemField,
        value: String,
    },
    Delete {
        id: LineItemId,
    },
    ClearAll,
}

/// Apply one action to the list
pub fn reduce(items: &[Product], action: &LineItemAction) -> Vec<Product> {
    match action {
        LineItemAction::UpdateField { id, field, value } => {
            update_field(items, *id, *field, value)
        }
        LineItemAction::Delete { id } => delete_item(items, *id),
        LineItemAction::ClearAll => clear_all(items),
    }
}

/// Copy of `items` where the item with `id` has `field` set from the raw
/// input `value`. Other items and the order are untouched.
pub fn update_field(
    items: &[Product],
    id: LineItemId,
    field: LineItemField,
    value: &str,
) -> Vec<Product> {
    items
        .iter()
        .map(|item| {
            if item.id == id {
                with_field(item, field, value)
            } else {
                item.clone()
            }
        })
        .collect()
}

pub fn delete_item(items: &[Product], id: LineItemId) -> Vec<Product> {
    items.iter().filter(|item| item.id != id).cloned().collect()
}

pub fn clear_all(_items: &[Product]) -> Vec<Product> {
    Vec::new()
}

fn with_field(item: &Product, field: LineItemField, value: &str) -> Product {
    let mut next = item.clone();
    match field {
        LineItemField::Quality => next.quality = value.to_string(),
        LineItemField::Quantity => next.quantity = parse_quantity(value),
        LineItemField::Rate => next.rate = parse_quantity(value),
        LineItemField::Size | LineItemField::Standard | LineItemField::PrePost => {
            let Some(kind) = field.catalog() else {
                return next;
            };
            // values outside the catalog are dropped
            let Some(option) = catalog::resolve(kind, value) else {
                return next;
            };
            match field {
                LineItemField::Size => next.size = option,
                LineItemField::Standard => next.standard = option,
                _ => next.pre_post = option,
            }
        }
    }
    next
}

/// Parse a numeric input the way a browser `parseInt` does: leading
/// whitespace, optional sign, then as many digits as there are. Input with
/// no leading digits becomes 0; a digit run too long for `i64` saturates.
pub fn parse_quantity(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    rest.bytes()
        .take_while(|b| b.is_ascii_digit())
        .fold(0i64, |acc, b| {
            let digit = i64::from(b - b'0');
            if negative {
                acc.saturating_mul(10).saturating_sub(digit)
            } else {
                acc.saturating_mul(10).saturating_add(digit)
            }
        })
}

/// Whether the row at `index` starts a new run of equally named items and so
/// renders the group heading. Depends on the current order only.
pub fn shows_group_heading(items: &[Product], index: usize) -> bool {
    match (index.checked_sub(1).and_then(|i| items.get(i)), items.get(index)) {
        (_, None) => false,
        (None, Some(_)) => true,
        (Some(prev), Some(item)) => item.name != prev.name,
    }
}
