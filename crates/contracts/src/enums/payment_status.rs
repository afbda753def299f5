use crate::domain::common::SelectOption;
use serde::{Deserialize, Serialize};

/// Payment status of a sales order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Partial,
    Cancelled,
}

impl PaymentStatus {
    /// Wire/select code
    pub fn code(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Partial => "partial",
            PaymentStatus::Cancelled => "cancelled",
        }
    }

    /// Human readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Partial => "Partial Payment",
            PaymentStatus::Cancelled => "Cancelled",
        }
    }

    /// All statuses in selector order
    pub fn all() -> Vec<PaymentStatus> {
        vec![
            PaymentStatus::Pending,
            PaymentStatus::Paid,
            PaymentStatus::Partial,
            PaymentStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(PaymentStatus::Pending),
            "paid" => Some(PaymentStatus::Paid),
            "partial" => Some(PaymentStatus::Partial),
            "cancelled" => Some(PaymentStatus::Cancelled),
            _ => None,
        }
    }

    pub fn to_option(&self) -> SelectOption {
        SelectOption::new(self.code(), self.display_name())
    }

    /// Options for the payment status selector
    pub fn options() -> Vec<SelectOption> {
        Self::all().iter().map(PaymentStatus::to_option).collect()
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_parse_back() {
        for status in PaymentStatus::all() {
            assert_eq!(PaymentStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(PaymentStatus::from_code("refunded"), None);
    }

    #[test]
    fn test_partial_label() {
        assert_eq!(PaymentStatus::Partial.display_name(), "Partial Payment");
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }
}
