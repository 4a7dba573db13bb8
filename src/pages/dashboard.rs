//! Dashboard page reached after a successful login.

use leptos::prelude::*;

/// Dashboard page — the landing view of the demo.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
            </header>
            <p class="dashboard-page__intro">"You are signed in."</p>
            <a class="dashboard-page__signout" href="/">
                "Back to sign in"
            </a>
        </div>
    }
}
