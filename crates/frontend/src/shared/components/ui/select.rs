use contracts::domain::common::SelectOption;
use leptos::prelude::*;

/// Select over a closed set of options.
///
/// Reports only the chosen `value` string; resolving it back to an option is
/// the caller's job.
#[component]
pub fn Select(
    /// Currently selected value ("" = nothing selected)
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options to offer, in display order
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    /// Text shown while nothing is selected
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Marks the control invalid (aria-invalid)
    #[prop(optional, into)]
    invalid: Signal<bool>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <select
            id=select_id
            class="form__select"
            aria-invalid=move || invalid.get().to_string()
            on:change=move |ev| {
                if let Some(handler) = on_change {
                    handler.run(event_target_value(&ev));
                }
            }
        >
            {move || placeholder.get().map(|text| view! {
                <option value="" disabled=true hidden=true selected=move || value.get().is_empty()>
                    {text}
                </option>
            })}
            <For
                each=move || options.get()
                key=|option| option.value.clone()
                children=move |option| {
                    let option_value = option.value.clone();
                    let is_selected = move || value.get() == option_value;
                    view! {
                        <option value=option.value selected=is_selected>
                            {option.label}
                        </option>
                    }
                }
            />
        </select>
    }
}
