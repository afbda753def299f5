//! a001 — sales order entry

pub mod aggregate;
pub mod catalog;
pub mod line_items;
pub mod order_form;
pub mod seed;

pub use aggregate::{LineItemId, OrderFormData, Product};
pub use line_items::{LineItemAction, LineItemField};
pub use order_form::{OrderField, OrderFormAction};
