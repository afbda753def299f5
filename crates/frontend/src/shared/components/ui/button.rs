use leptos::prelude::*;

/// Primary action button
#[component]
pub fn Button(
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute: "button" (default) or "submit"
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("button button--primary {}", additional_class())
        >
            {children()}
        </button>
    }
}
