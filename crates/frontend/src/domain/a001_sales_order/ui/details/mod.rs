//! Sales Order Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - view_model.rs: ViewModel holding the form state and the single dispatch point
//! - view.rs: order-level fields (dealer, remarks, shipping & payment)
//! - line_items.rs: line-item rows card

mod line_items;
mod view;
mod view_model;

pub use line_items::LineItemsCard;
pub use view::SalesOrderDetails;
pub use view_model::SalesOrderDetailsViewModel;
