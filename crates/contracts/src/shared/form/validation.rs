//! Validation rules for form fields

use thiserror::Error;

/// Validation failure of a single field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    /// Field key, e.g. "dealer"
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub required: bool,
}

impl ValidationRules {
    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self { required: true }
    }

    /// Validate a string value against the rules
    pub fn validate_string(
        &self,
        value: &str,
        field: &'static str,
        field_label: &str,
    ) -> Result<(), FieldError> {
        if self.required && value.trim().is_empty() {
            return Err(FieldError::new(field, format!("{} is required", field_label)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        let rules = ValidationRules::required();
        let err = rules.validate_string("   ", "dealer", "Dealer").unwrap_err();
        assert_eq!(err.field, "dealer");
        assert_eq!(err.to_string(), "Dealer is required");
        assert!(rules.validate_string("x", "dealer", "Dealer").is_ok());
    }

    #[test]
    fn test_optional_accepts_blank() {
        let rules = ValidationRules::default();
        assert!(rules.validate_string("", "remarks", "Remarks").is_ok());
    }
}
