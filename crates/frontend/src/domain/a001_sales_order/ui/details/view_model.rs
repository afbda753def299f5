use crate::shared::date_utils::local_today;
use contracts::domain::a001_sales_order::order_form::initial_state;
use contracts::domain::a001_sales_order::seed::seed_products;
use contracts::domain::a001_sales_order::{
    LineItemAction, LineItemId, OrderField, OrderFormAction, OrderFormData, Product,
};
use contracts::shared::config::FormDefaults;
use contracts::shared::form::FormState;
use leptos::prelude::*;

/// ViewModel for the sales order form.
///
/// Every UI event turns into one [`OrderFormAction`] passed to [`Self::dispatch`];
/// the form state is replaced atomically inside the signal update.
#[derive(Clone, Copy)]
pub struct SalesOrderDetailsViewModel {
    pub form: RwSignal<FormState<OrderFormData>>,
}

impl SalesOrderDetailsViewModel {
    pub fn new(defaults: &FormDefaults) -> Self {
        let today = local_today();
        let record = initial_state(defaults, seed_products(), today);
        Self {
            form: RwSignal::new(FormState::new(record)),
        }
    }

    pub fn dispatch(&self, action: OrderFormAction) {
        log::debug!("a001 dispatch: {:?}", action);
        self.form.update(|form| form.dispatch(action));
    }

    pub fn dispatch_line_item(&self, action: LineItemAction) {
        self.dispatch(OrderFormAction::LineItems(action));
    }

    /// Read one value of the current record (tracked)
    pub fn read<R>(&self, f: impl FnOnce(&OrderFormData) -> R) -> R {
        self.form.with(|form| f(form.values()))
    }

    pub fn products(&self) -> Vec<Product> {
        self.read(|data| data.products.clone())
    }

    pub fn product(&self, id: LineItemId) -> Option<Product> {
        self.read(|data| data.product(id).cloned())
    }

    /// Validation message of a field, if any
    pub fn error(&self, field: OrderField) -> Signal<Option<String>> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.error(field).map(|e| e.to_string())))
    }

    pub fn has_error(&self, field: OrderField) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.error(field).is_some()))
    }

    /// Validate the whole record and hand it to `on_submit` if it passes.
    pub fn submit(&self, on_submit: Callback<OrderFormData>) {
        let mut accepted = None;
        let mut outcome = Ok(());
        self.form.update(|form| {
            outcome = form.handle_submit(|data| accepted = Some(data));
        });

        match outcome {
            Ok(()) => {
                if let Some(data) = accepted {
                    log::info!(
                        "a001 submit: dealer={}, {} line item(s)",
                        data.dealer.value,
                        data.products.len()
                    );
                    on_submit.run(data);
                }
            }
            Err(errors) => {
                for e in &errors {
                    log::warn!("a001 submit rejected: {}: {}", e.field, e.message);
                }
            }
        }
    }
}
