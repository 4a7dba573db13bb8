//! Authentication page with login and register tabs.
//!
//! Each tab owns an independent [`FormState`]: validation runs locally
//! before any request, the request is issued with the field values
//! captured at submit time, and resolution always releases the
//! submitting flag. Login success redirects to the dashboard; register
//! success resets the form and shows a success message.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::feedback::FeedbackNotice;
use crate::components::text_field::TextField;
use crate::state::auth::{LoginForm, RegisterForm};
#[cfg(feature = "hydrate")]
use crate::state::auth::LoginResolution;
use crate::state::form::FormState;
use crate::state::ui::AuthTab;

/// Auth page — login/register tabs over two independent forms.
///
/// Form state lives here rather than in the panels so switching tabs
/// preserves whatever the user has typed in either form.
#[component]
pub fn AuthPage() -> impl IntoView {
    let tab = RwSignal::new(AuthTab::default());
    let login = RwSignal::new(FormState::<LoginForm>::default());
    let register = RwSignal::new(FormState::<RegisterForm>::default());

    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <div class="auth-tabs" role="tablist">
                    <TabTrigger tab=tab target=AuthTab::Login/>
                    <TabTrigger tab=tab target=AuthTab::Register/>
                </div>

                {move || match tab.get() {
                    AuthTab::Login => view! { <LoginPanel form=login/> }.into_any(),
                    AuthTab::Register => view! { <RegisterPanel form=register/> }.into_any(),
                }}
            </div>
        </div>
    }
}

/// One tab button; clicking it makes `target` the active tab.
#[component]
fn TabTrigger(tab: RwSignal<AuthTab>, target: AuthTab) -> impl IntoView {
    view! {
        <button
            class="auth-tabs__trigger"
            class=("auth-tabs__trigger--active", move || tab.get() == target)
            role="tab"
            on:click=move |_| tab.set(target)
        >
            {target.label()}
        </button>
    }
}

/// Login form: email and password, redirect to the dashboard on
/// success.
#[component]
fn LoginPanel(form: RwSignal<FormState<LoginForm>>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submitting = Signal::derive(move || form.get().submitting);
    let feedback = Signal::derive(move || form.get().feedback);

    let email = Signal::derive(move || form.get().fields.email.clone());
    let password = Signal::derive(move || form.get().fields.password.clone());
    let on_email = Callback::new(move |v: String| form.update(|f| f.edit(|r| r.email = v)));
    let on_password = Callback::new(move |v: String| form.update(|f| f.edit(|r| r.password = v)));

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.get_untracked().submitting {
            return;
        }

        let fields = form.get_untracked().fields;
        if let Err(err) = fields.validate() {
            form.update(|f| f.reject(err.to_string()));
            return;
        }
        form.update(FormState::begin_submit);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&fields).await;
                let mut resolution = LoginResolution::Stay;
                form.update(|f| resolution = f.resolve_login(result));
                if resolution == LoginResolution::RedirectToDashboard {
                    navigate("/dashboard", NavigateOptions::default());
                }
            });
        }
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <header class="auth-form__header">
                <h2>"Login"</h2>
                <p>"Access your dashboard"</p>
            </header>

            <TextField
                id="login-email"
                label="Email"
                input_type="email"
                placeholder="Your email"
                value=email
                on_edit=on_email
                disabled=submitting
            />
            <TextField
                id="login-password"
                label="Password"
                input_type="password"
                placeholder="Password"
                value=password
                on_edit=on_password
                disabled=submitting
            />

            <FeedbackNotice feedback=feedback/>

            <button
                class="btn btn--primary auth-form__submit"
                type="submit"
                disabled=move || submitting.get()
            >
                {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
    }
}

/// Register form: profile fields plus password confirmation, reset on
/// success.
#[component]
fn RegisterPanel(form: RwSignal<FormState<RegisterForm>>) -> impl IntoView {
    let submitting = Signal::derive(move || form.get().submitting);
    let feedback = Signal::derive(move || form.get().feedback);

    let email = Signal::derive(move || form.get().fields.email.clone());
    let password = Signal::derive(move || form.get().fields.password.clone());
    let confirm = Signal::derive(move || form.get().fields.confirm_password.clone());
    let address = Signal::derive(move || form.get().fields.address.clone());
    let phone = Signal::derive(move || form.get().fields.phone.clone());

    let on_email = Callback::new(move |v: String| form.update(|f| f.edit(|r| r.email = v)));
    let on_password = Callback::new(move |v: String| form.update(|f| f.edit(|r| r.password = v)));
    let on_confirm =
        Callback::new(move |v: String| form.update(|f| f.edit(|r| r.confirm_password = v)));
    let on_address = Callback::new(move |v: String| form.update(|f| f.edit(|r| r.address = v)));
    let on_phone = Callback::new(move |v: String| form.update(|f| f.edit(|r| r.phone = v)));

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.get_untracked().submitting {
            return;
        }

        let fields = form.get_untracked().fields;
        if let Err(err) = fields.validate() {
            form.update(|f| f.reject(err.to_string()));
            return;
        }
        form.update(FormState::begin_submit);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::register(&fields).await;
            form.update(|f| f.resolve_register(result));
        });
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <header class="auth-form__header">
                <h2>"Register"</h2>
                <p>"Register a new account"</p>
            </header>

            <TextField
                id="register-email"
                label="Email"
                input_type="email"
                placeholder="example@email.com"
                value=email
                on_edit=on_email
                disabled=submitting
            />
            <TextField
                id="register-password"
                label="Password"
                input_type="password"
                placeholder="Password"
                value=password
                on_edit=on_password
                disabled=submitting
            />
            <TextField
                id="register-confirm-password"
                label="Confirm Password"
                input_type="password"
                placeholder="Confirm Password"
                value=confirm
                on_edit=on_confirm
                disabled=submitting
            />
            <TextField
                id="register-address"
                label="Address"
                placeholder="123 Main St"
                value=address
                on_edit=on_address
                disabled=submitting
            />
            <TextField
                id="register-phone"
                label="Phone"
                input_type="tel"
                placeholder="+123 123 1234"
                value=phone
                on_edit=on_phone
                disabled=submitting
            />

            <FeedbackNotice feedback=feedback/>

            <button
                class="btn btn--primary auth-form__submit"
                type="submit"
                disabled=move || submitting.get()
            >
                {move || if submitting.get() { "Creating Account..." } else { "Create Account" }}
            </button>
        </form>
    }
}
