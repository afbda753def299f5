use crate::domain::common::{AggregateId, SelectOption};
use crate::enums::PaymentStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Stable identifier of a line item within one order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItemId(pub Uuid);

impl LineItemId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for LineItemId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
}

// ============================================================================
// Line item
// ============================================================================

/// One row of the order: a quantity of a specific material configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: LineItemId,
    pub name: String,
    pub sub_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,
    pub size: SelectOption,
    pub standard: SelectOption,
    pub pre_post: SelectOption,
    pub quality: String,
    pub quantity: i64,
    /// Display only, never derived from quantity/rate
    pub price: f64,
    pub rate: i64,
}

// ============================================================================
// Order record
// ============================================================================

/// The in-progress order handed to the submit callback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFormData {
    pub dealer: SelectOption,
    pub products: Vec<Product>,
    pub remarks: Option<String>,
    pub terms_and_conditions: Option<String>,
    pub shipping_method: SelectOption,
    pub po_number: Option<String>,
    pub delivery_date: NaiveDate,
    pub payment_status: PaymentStatus,
}

impl OrderFormData {
    /// Fresh record as the form shows it on mount: no dealer picked,
    /// standard shipping, payment pending.
    pub fn new(products: Vec<Product>, delivery_date: NaiveDate) -> Self {
        Self {
            dealer: SelectOption::default(),
            products,
            remarks: None,
            terms_and_conditions: None,
            shipping_method: SelectOption::new("standard", "Standard Shipping"),
            po_number: None,
            delivery_date,
            payment_status: PaymentStatus::Pending,
        }
    }

    pub fn product(&self, id: LineItemId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}
