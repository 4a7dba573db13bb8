//! Inline form feedback row with success/error styling.

use leptos::prelude::*;

use crate::state::form::{Feedback, FeedbackKind};

/// Renders the owning form's current feedback, if any.
///
/// The visual treatment keys off [`FeedbackKind`], never off the
/// message text.
#[component]
pub fn FeedbackNotice(#[prop(into)] feedback: Signal<Option<Feedback>>) -> impl IntoView {
    move || {
        feedback.get().map(|fb| match fb.kind {
            FeedbackKind::Success => view! {
                <div class="auth-feedback auth-feedback--success" role="alert" aria-live="polite">
                    <svg class="auth-feedback__icon" viewBox="0 0 20 20" aria-hidden="true">
                        <circle cx="10" cy="10" r="8"></circle>
                        <polyline points="6.5,10.5 9,13 13.5,7.5"></polyline>
                    </svg>
                    <span>"Success: " {fb.text}</span>
                </div>
            }
            .into_any(),
            FeedbackKind::Error => view! {
                <div class="auth-feedback auth-feedback--error" role="alert" aria-live="polite">
                    <svg class="auth-feedback__icon" viewBox="0 0 20 20" aria-hidden="true">
                        <circle cx="10" cy="10" r="8"></circle>
                        <line x1="7" y1="7" x2="13" y2="13"></line>
                        <line x1="13" y1="7" x2="7" y2="13"></line>
                    </svg>
                    <span>"Error: " {fb.text}</span>
                </div>
            }
            .into_any(),
        })
    }
}
