//! Order-level form state: dealer, shipping, payment, delivery date and the
//! free-text fields, plus forwarding of line-item edits.

use super::aggregate::{OrderFormData, Product};
use super::catalog::{self, CatalogKind};
use super::line_items::{self, LineItemAction};
use crate::domain::common::SelectOption;
use crate::enums::PaymentStatus;
use crate::shared::config::FormDefaults;
use crate::shared::form::{FieldError, FormRecord, ValidationRules, Validator};
use chrono::NaiveDate;

/// Fields of [`OrderFormData`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    Dealer,
    Products,
    Remarks,
    TermsAndConditions,
    ShippingMethod,
    PoNumber,
    DeliveryDate,
    PaymentStatus,
}

const ORDER_FIELDS: &[OrderField] = &[
    OrderField::Dealer,
    OrderField::Products,
    OrderField::Remarks,
    OrderField::TermsAndConditions,
    OrderField::ShippingMethod,
    OrderField::PoNumber,
    OrderField::DeliveryDate,
    OrderField::PaymentStatus,
];

/// Edits the order form can dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum OrderFormAction {
    SetDealer(String),
    SetShippingMethod(String),
    SetPaymentStatus(PaymentStatus),
    SetDeliveryDate(NaiveDate),
    SetRemarks(String),
    SetTermsAndConditions(String),
    SetPoNumber(String),
    LineItems(LineItemAction),
}

impl OrderFormAction {
    pub fn field(&self) -> OrderField {
        match self {
            OrderFormAction::SetDealer(_) => OrderField::Dealer,
            OrderFormAction::SetShippingMethod(_) => OrderField::ShippingMethod,
            OrderFormAction::SetPaymentStatus(_) => OrderField::PaymentStatus,
            OrderFormAction::SetDeliveryDate(_) => OrderField::DeliveryDate,
            OrderFormAction::SetRemarks(_) => OrderField::Remarks,
            OrderFormAction::SetTermsAndConditions(_) => OrderField::TermsAndConditions,
            OrderFormAction::SetPoNumber(_) => OrderField::PoNumber,
            OrderFormAction::LineItems(_) => OrderField::Products,
        }
    }
}

// ============================================================================
// Reducer
// ============================================================================

pub fn reduce(state: &OrderFormData, action: &OrderFormAction) -> OrderFormData {
    match action {
        OrderFormAction::SetDealer(value) => set_dealer(state, value),
        OrderFormAction::SetShippingMethod(value) => set_shipping_method(state, value),
        OrderFormAction::SetPaymentStatus(status) => set_payment_status(state, *status),
        OrderFormAction::SetDeliveryDate(date) => set_delivery_date(state, *date),
        OrderFormAction::SetRemarks(text) => OrderFormData {
            remarks: optional_text(text),
            ..state.clone()
        },
        OrderFormAction::SetTermsAndConditions(text) => OrderFormData {
            terms_and_conditions: optional_text(text),
            ..state.clone()
        },
        OrderFormAction::SetPoNumber(text) => OrderFormData {
            po_number: optional_text(text),
            ..state.clone()
        },
        OrderFormAction::LineItems(action) => OrderFormData {
            products: line_items::reduce(&state.products, action),
            ..state.clone()
        },
    }
}

/// Dealer label and value are the same string; no lookup
pub fn set_dealer(state: &OrderFormData, value: &str) -> OrderFormData {
    OrderFormData {
        dealer: SelectOption::same(value),
        ..state.clone()
    }
}

/// Unknown shipping codes leave the previous method in place
pub fn set_shipping_method(state: &OrderFormData, value: &str) -> OrderFormData {
    match catalog::resolve(CatalogKind::Shipping, value) {
        Some(option) => OrderFormData {
            shipping_method: option,
            ..state.clone()
        },
        None => state.clone(),
    }
}

pub fn set_payment_status(state: &OrderFormData, status: PaymentStatus) -> OrderFormData {
    OrderFormData {
        payment_status: status,
        ..state.clone()
    }
}

pub fn set_delivery_date(state: &OrderFormData, date: NaiveDate) -> OrderFormData {
    OrderFormData {
        delivery_date: date,
        ..state.clone()
    }
}

fn optional_text(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Record the form mounts with
pub fn initial_state(
    defaults: &FormDefaults,
    products: Vec<Product>,
    today: NaiveDate,
) -> OrderFormData {
    let base = OrderFormData::new(products, today);
    let base = set_shipping_method(&base, &defaults.shipping_method);
    match defaults.payment_status() {
        Some(status) => set_payment_status(&base, status),
        None => base,
    }
}

// ============================================================================
// Validators
// ============================================================================

fn validate_dealer(data: &OrderFormData) -> Result<(), FieldError> {
    ValidationRules::required().validate_string(&data.dealer.value, "dealer", "Dealer")?;
    if !catalog::is_valid_dealer(&data.dealer.value) {
        return Err(FieldError::new(
            "dealer",
            format!("Unknown dealer: {}", data.dealer.value),
        ));
    }
    Ok(())
}

fn validate_shipping_method(data: &OrderFormData) -> Result<(), FieldError> {
    if catalog::contains(CatalogKind::Shipping, &data.shipping_method) {
        Ok(())
    } else {
        Err(FieldError::new("shippingMethod", "Select a shipping method"))
    }
}

fn accept(_: &OrderFormData) -> Result<(), FieldError> {
    Ok(())
}

impl FormRecord for OrderFormData {
    type Field = OrderField;
    type Action = OrderFormAction;

    fn fields() -> &'static [OrderField] {
        ORDER_FIELDS
    }

    fn validator(field: OrderField) -> Validator<Self> {
        match field {
            OrderField::Dealer => validate_dealer,
            OrderField::ShippingMethod => validate_shipping_method,
            // free-text and date fields carry no rules
            OrderField::Products
            | OrderField::Remarks
            | OrderField::TermsAndConditions
            | OrderField::PoNumber
            | OrderField::DeliveryDate
            | OrderField::PaymentStatus => accept,
        }
    }

    fn action_field(action: &OrderFormAction) -> OrderField {
        action.field()
    }

    fn apply(&self, action: &OrderFormAction) -> Self {
        reduce(self, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_sales_order::line_items::LineItemField;
    use crate::domain::a001_sales_order::seed::seed_products;
    use crate::shared::config::Config;
    use crate::shared::form::FormState;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    fn fresh() -> OrderFormData {
        initial_state(&Config::default().defaults, seed_products(), today())
    }

    #[test]
    fn test_initial_state_defaults() {
        let data = fresh();
        assert_eq!(data.dealer.value, "");
        assert_eq!(
            data.shipping_method,
            SelectOption::new("standard", "Standard Shipping")
        );
        assert_eq!(data.payment_status, PaymentStatus::Pending);
        assert_eq!(data.delivery_date, today());
        assert_eq!(data.products.len(), 3);
    }

    #[test]
    fn test_initial_state_from_config() {
        let defaults = FormDefaults {
            shipping_method: "pickup".into(),
            payment_status: "paid".into(),
        };
        let data = initial_state(&defaults, Vec::new(), today());
        assert_eq!(data.shipping_method.label, "Local Pickup");
        assert_eq!(data.payment_status, PaymentStatus::Paid);
    }

    #[test]
    fn test_set_dealer_copies_value_to_label() {
        let data = set_dealer(&fresh(), "Test Dealer (Delhi DL)");
        assert_eq!(data.dealer, SelectOption::same("Test Dealer (Delhi DL)"));
    }

    #[test]
    fn test_set_shipping_method() {
        let data = set_shipping_method(&fresh(), "express");
        assert_eq!(
            data.shipping_method,
            SelectOption::new("express", "Express Shipping")
        );
        let unchanged = set_shipping_method(&data, "bogus");
        assert_eq!(unchanged.shipping_method, data.shipping_method);
    }

    #[test]
    fn test_delivery_date_any_value() {
        let past = NaiveDate::from_ymd_opt(1999, 1, 1).unwrap();
        assert_eq!(set_delivery_date(&fresh(), past).delivery_date, past);
    }

    #[test]
    fn test_text_fields_empty_is_none() {
        let data = reduce(&fresh(), &OrderFormAction::SetPoNumber("PO-7".into()));
        assert_eq!(data.po_number.as_deref(), Some("PO-7"));
        let data = reduce(&data, &OrderFormAction::SetPoNumber(String::new()));
        assert_eq!(data.po_number, None);
    }

    #[test]
    fn test_validators() {
        let mut form = FormState::new(fresh());
        let errors = form.validate_all();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "dealer");

        form.dispatch(OrderFormAction::SetDealer("Nobody".into()));
        assert!(form.error(OrderField::Dealer).is_some());

        form.dispatch(OrderFormAction::SetDealer("Test Dealer (Pune MH)".into()));
        assert!(form.error(OrderField::Dealer).is_none());
        assert!(form.validate_all().is_empty());
    }

    #[test]
    fn test_long_free_text_still_submits() {
        let mut form = FormState::new(fresh());
        form.dispatch(OrderFormAction::SetDealer("Test Dealer (Mumbai MH)".into()));
        form.dispatch(OrderFormAction::SetPoNumber("P".repeat(33)));
        form.dispatch(OrderFormAction::SetRemarks("r".repeat(5000)));
        form.dispatch(OrderFormAction::SetTermsAndConditions("t".repeat(5000)));
        assert!(form.error(OrderField::PoNumber).is_none());

        let mut submitted = None;
        assert!(form.handle_submit(|data| submitted = Some(data)).is_ok());
        let data = submitted.unwrap();
        assert_eq!(data.po_number.map(|p| p.len()), Some(33));
        assert_eq!(data.remarks.map(|r| r.len()), Some(5000));
    }

    #[test]
    fn test_session_end_to_end() {
        let mut form = FormState::new(fresh());
        let seeded: Vec<_> = form.values().products.iter().map(|p| p.id).collect();

        form.dispatch(OrderFormAction::LineItems(LineItemAction::Delete {
            id: seeded[1],
        }));
        let ids: Vec<_> = form.values().products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![seeded[0], seeded[2]]);

        form.dispatch(OrderFormAction::LineItems(LineItemAction::ClearAll));
        assert!(form.values().products.is_empty());

        form.dispatch(OrderFormAction::LineItems(LineItemAction::UpdateField {
            id: seeded[0],
            field: LineItemField::Quantity,
            value: "5".into(),
        }));
        assert!(form.values().products.is_empty());
    }

    #[test]
    fn test_submit_carries_edited_items() {
        let mut form = FormState::new(fresh());
        let first = form.values().products[0].id;
        form.dispatch(OrderFormAction::SetDealer("Test Dealer (Chennai TN)".into()));
        form.dispatch(OrderFormAction::SetShippingMethod("express".into()));
        form.dispatch(OrderFormAction::LineItems(LineItemAction::UpdateField {
            id: first,
            field: LineItemField::Rate,
            value: "310".into(),
        }));

        let mut submitted = None;
        form.handle_submit(|data| submitted = Some(data)).unwrap();
        let data = submitted.unwrap();
        assert_eq!(data.products[0].rate, 310);
        assert_eq!(data.shipping_method.value, "express");

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["paymentStatus"], "pending");
        assert_eq!(json["deliveryDate"], "2026-10-15");
        assert_eq!(json["dealer"]["label"], "Test Dealer (Chennai TN)");
    }
}
