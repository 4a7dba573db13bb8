//! Labeled text input bound to one form field.

use leptos::prelude::*;

/// A labeled input row. The value is read reactively from the owning
/// form's state; edits flow back through `on_edit` so the form can
/// route them into the right field.
#[component]
pub fn TextField(
    /// DOM id, shared by the label's `for` attribute and the input.
    id: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_edit: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="auth-field">
            <label class="auth-field__label" for=id>
                {label}
            </label>
            <input
                class="auth-field__input"
                id=id
                type=input_type.unwrap_or("text")
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |ev| on_edit.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}
