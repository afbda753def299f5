use crate::shared::date_utils::{format_long_date, parse_input_value, to_input_value};
use crate::shared::icons::icon;
use chrono::NaiveDate;
use leptos::prelude::*;

/// Date picker: shows the long date next to a calendar icon and edits it
/// through the browser's native date input.
/// Cleared or partial input is ignored, the previous date stays.
#[component]
pub fn DateInput(
    #[prop(into)]
    value: Signal<NaiveDate>,
    /// Callback when a full date is picked
    on_change: Callback<NaiveDate>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    view! {
        <div class="date-input">
            <span class="date-input__display">
                {icon("calendar")}
                {move || format_long_date(value.get())}
            </span>
            <input
                id=input_id
                type="date"
                class="date-input__native"
                prop:value=move || to_input_value(value.get())
                on:input=move |ev| {
                    if let Some(date) = parse_input_value(&event_target_value(&ev)) {
                        on_change.run(date);
                    }
                }
            />
        </div>
    }
}
