use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for record identifier types
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id as a string (DOM keys, element ids, logs)
    fn as_string(&self) -> String;
}
