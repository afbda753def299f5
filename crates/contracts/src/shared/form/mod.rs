//! Typed form-state container.
//!
//! A form is an explicit record type plus a compile-time table from each of
//! its fields to a validation function. Edits go through the record's
//! reducer; the validator of the touched field runs right after.

pub mod form_state;
pub mod validation;

pub use form_state::{FormRecord, FormState, Validator};
pub use validation::{FieldError, ValidationRules};
