use super::line_items::LineItemsCard;
use super::view_model::SalesOrderDetailsViewModel;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::form_item::FormItem;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::domain::a001_sales_order::catalog::{self, CatalogKind};
use contracts::domain::a001_sales_order::{OrderField, OrderFormAction, OrderFormData};
use contracts::enums::PaymentStatus;
use contracts::shared::config::FormDefaults;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn SalesOrderDetails(
    defaults: FormDefaults,
    /// Receives the full order record once it passes validation
    on_submit: Callback<OrderFormData>,
) -> impl IntoView {
    let vm = SalesOrderDetailsViewModel::new(&defaults);

    let set = move |make: fn(String) -> OrderFormAction| {
        Callback::new(move |value: String| vm.dispatch(make(value)))
    };
    let text = move |f: fn(&OrderFormData) -> String| Signal::derive(move || vm.read(f));

    let on_payment_change = Callback::new(move |code: String| {
        match PaymentStatus::from_code(&code) {
            Some(status) => vm.dispatch(OrderFormAction::SetPaymentStatus(status)),
            None => log::warn!("a001: ignoring unknown payment status {:?}", code),
        }
    });

    view! {
        <form
            class="order-form"
            on:submit=move |ev: SubmitEvent| {
                ev.prevent_default();
                vm.submit(on_submit);
            }
        >
            <div class="order-form__main">
                <FormItem
                    label="Select Dealer"
                    label_for="dealer"
                    error=vm.error(OrderField::Dealer)
                    class="order-form__dealer"
                >
                    <Select
                        id="dealer"
                        value=text(|d| d.dealer.value.clone())
                        options=catalog::dealer_options().to_vec()
                        placeholder="Select a dealer"
                        invalid=vm.has_error(OrderField::Dealer)
                        on_change=set(OrderFormAction::SetDealer)
                    />
                </FormItem>
                <LineItemsCard vm=vm />
            </div>

            <hr class="order-form__separator" />

            <div class="order-form__side card">
                <section class="order-form__section">
                    <h2 class="order-form__section-title">"Remarks/Samples"</h2>
                    <FormItem error=vm.error(OrderField::Remarks)>
                        <Textarea
                            value=text(|d| d.remarks.clone().unwrap_or_default())
                            placeholder="Enter your remarks"
                            invalid=vm.has_error(OrderField::Remarks)
                            on_input=set(OrderFormAction::SetRemarks)
                        />
                    </FormItem>
                    <FormItem error=vm.error(OrderField::TermsAndConditions)>
                        <Textarea
                            value=text(|d| d.terms_and_conditions.clone().unwrap_or_default())
                            placeholder="Terms and Conditions"
                            invalid=vm.has_error(OrderField::TermsAndConditions)
                            on_input=set(OrderFormAction::SetTermsAndConditions)
                        />
                    </FormItem>
                </section>

                <hr class="order-form__separator" />

                <section class="order-form__section">
                    <h2 class="order-form__section-title">"Shipping & Payment"</h2>
                    <FormItem error=vm.error(OrderField::ShippingMethod)>
                        <Select
                            value=text(|d| d.shipping_method.value.clone())
                            options=catalog::options(CatalogKind::Shipping).to_vec()
                            placeholder="Select shipping method"
                            invalid=vm.has_error(OrderField::ShippingMethod)
                            on_change=set(OrderFormAction::SetShippingMethod)
                        />
                    </FormItem>

                    <FormItem error=vm.error(OrderField::PoNumber)>
                        <Input
                            value=text(|d| d.po_number.clone().unwrap_or_default())
                            placeholder="Enter PO number"
                            invalid=vm.has_error(OrderField::PoNumber)
                            on_input=set(OrderFormAction::SetPoNumber)
                        />
                    </FormItem>

                    <FormItem label="Delivery Date" label_for="delivery-date">
                        <DateInput
                            id="delivery-date"
                            value=Signal::derive(move || vm.read(|d| d.delivery_date))
                            on_change=Callback::new(move |date: NaiveDate| {
                                vm.dispatch(OrderFormAction::SetDeliveryDate(date))
                            })
                        />
                    </FormItem>

                    <FormItem>
                        <Select
                            value=text(|d| d.payment_status.code().to_string())
                            options=PaymentStatus::options()
                            on_change=on_payment_change
                        />
                    </FormItem>
                </section>

                <Button button_type="submit" class="order-form__submit">
                    {icon("save")}
                    "Place Order"
                </Button>
            </div>
        </form>
    }
}
