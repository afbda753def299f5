//! Common types shared by all domain records

pub mod aggregate_id;
pub mod select_option;

// Re-exports
pub use aggregate_id::AggregateId;
pub use select_option::SelectOption;
