use crate::domain::a001_sales_order::ui::SalesOrderPage;
use contracts::domain::a001_sales_order::OrderFormData;
use contracts::shared::config::{load_config, Config};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Failed to load order page config, using defaults: {:#}", e);
        Config::default()
    });

    // Provide the page configuration to the whole app via context.
    provide_context(config);

    // Orders are not persisted anywhere; the snapshot is only logged.
    let on_submit = Callback::new(|data: OrderFormData| {
        match serde_json::to_string_pretty(&data) {
            Ok(json) => log::info!("Form submitted: {}", json),
            Err(e) => log::error!("Form submitted, snapshot not serializable: {}", e),
        }
    });

    view! {
        <SalesOrderPage on_submit=on_submit />
    }
}
