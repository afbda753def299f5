use leptos::prelude::*;

/// Single-line input bound to a string signal.
///
/// Reports the raw text on every keystroke; numeric inputs are parsed by the
/// caller, never here.
#[component]
pub fn Input(
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default) or "number"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Marks the control invalid (aria-invalid)
    #[prop(optional, into)]
    invalid: Signal<bool>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <input
            class=move || format!("form__input {}", additional_class())
            type=input_t
            prop:value=move || value.get()
            placeholder=input_placeholder
            aria-invalid=move || invalid.get().to_string()
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        />
    }
}
