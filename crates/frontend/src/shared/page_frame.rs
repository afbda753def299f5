//! PageFrame — standard root wrapper for a page.
//!
//! Sets the `id` of the root DOM element in the format `{entity}--{category}`,
//! e.g. `"a001_sales_order--detail"`, so the id copied from the DOM
//! inspector leads straight to `domain/a001_sales_order/`.

use leptos::prelude::*;

/// Centered, padded container every page is rendered in.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page container".to_string()
    } else {
        format!("page container {}", class)
    };

    view! {
        <div id=page_id class=full_class>
            {children()}
        </div>
    }
}
