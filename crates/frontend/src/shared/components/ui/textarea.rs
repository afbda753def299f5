use leptos::prelude::*;

/// Multi-line text input bound to a string signal
#[component]
pub fn Textarea(
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Marks the control invalid (aria-invalid)
    #[prop(optional, into)]
    invalid: Signal<bool>,
) -> impl IntoView {
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <textarea
            class="form__textarea"
            placeholder=textarea_placeholder
            rows=3
            aria-invalid=move || invalid.get().to_string()
            prop:value=move || value.get()
            on:input=move |ev| {
                if let Some(handler) = on_input {
                    handler.run(event_target_value(&ev));
                }
            }
        />
    }
}
