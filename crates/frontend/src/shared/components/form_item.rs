use leptos::prelude::*;

/// Labelled wrapper around one form control with its validation message
#[component]
pub fn FormItem(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// `for` attribute of the label
    #[prop(optional, into)]
    label_for: MaybeProp<String>,
    /// Current validation message of the field
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();
    let target = move || label_for.get().unwrap_or_default();

    view! {
        <div class=move || format!("form__item {}", additional_class())>
            {move || label.get().map(|l| view! {
                <label class="form__label" for=target>
                    {l}
                </label>
            })}
            {children()}
            {move || error.get().map(|message| view! {
                <p class="form__message">{message}</p>
            })}
        </div>
    }
}
