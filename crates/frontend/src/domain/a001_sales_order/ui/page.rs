use super::details::SalesOrderDetails;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a001_sales_order::OrderFormData;
use contracts::shared::config::Config;
use leptos::prelude::*;

/// Order entry screen: header with order number and operator, then the form
#[component]
pub fn SalesOrderPage(on_submit: Callback<OrderFormData>) -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();

    view! {
        <PageFrame page_id="a001_sales_order--detail">
            <div class="page__header order-header">
                <h1 class="order-header__number">
                    {format!("Order #{}", config.page.order_number)}
                </h1>
                <h1 class="order-header__operator">{config.page.operator.clone()}</h1>
            </div>
            <hr class="order-form__separator" />
            <SalesOrderDetails defaults=config.defaults.clone() on_submit=on_submit />
        </PageFrame>
    }
}
