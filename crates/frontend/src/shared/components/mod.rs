pub mod date_input;
pub mod form_item;
pub mod ui;
