//! Login, register and forgot-password pages
//!
//! No credentials are checked: submitting any form moves on.

use leptos::prelude::*;
use quickdeliver_core::ScreenId;

use crate::session::use_session;

/// Labeled input bound to a local signal
#[component]
fn Field(
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label>{label}</label>
        <input
            type=kind
            prop:value=move || value.get()
            on:input=move |e| value.set(event_target_value(&e))
        />
    }
}

#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    view! {
        <div class="page auth panel">
            <h2>"Welcome Back"</h2>
            <p class="muted">"Sign in to continue ordering"</p>
            <Field label="Email" kind="email" value=email />
            <Field label="Password" kind="password" value=password />
            <button class="link" on:click=move |_| session.go(ScreenId::ForgotPassword)>
                "Forgot password?"
            </button>
            <button class="btn" on:click=move |_| session.update(|s| s.sign_in())>
                "Sign In"
            </button>
            <p class="muted">
                "Don't have an account? "
                <button class="link" on:click=move |_| session.go(ScreenId::Register)>
                    "Sign up"
                </button>
            </p>
        </div>
    }
}

#[component]
pub fn Register() -> impl IntoView {
    let session = use_session();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    view! {
        <div class="page auth panel">
            <h2>"Create Account"</h2>
            <p class="muted">"Join QuickDeliver today"</p>
            <Field label="Full Name" value=name />
            <Field label="Email" kind="email" value=email />
            <Field label="Phone Number" kind="tel" value=phone />
            <Field label="Password" kind="password" value=password />
            <Field label="Confirm Password" kind="password" value=confirm />
            <button class="btn" on:click=move |_| session.update(|s| s.sign_in())>
                "Create Account"
            </button>
            <p class="muted">
                "Already have an account? "
                <button class="link" on:click=move |_| session.go(ScreenId::Login)>
                    "Sign in"
                </button>
            </p>
        </div>
    }
}

#[component]
pub fn ForgotPassword() -> impl IntoView {
    let session = use_session();
    let email = RwSignal::new(String::new());
    let sent_to = RwSignal::new(None::<String>);

    view! {
        <div class="page auth panel">
            <h2>"Reset Password"</h2>
            <Show
                when=move || sent_to.with(Option::is_some)
                fallback=move || {
                    view! {
                        <p class="muted">"Enter your email and we'll send you a reset link"</p>
                        <Field label="Email" kind="email" value=email />
                        <button class="btn" on:click=move |_| sent_to.set(Some(email.get()))>
                            "Send Reset Link"
                        </button>
                    }
                }
            >
                <p>{move || format!("Check your inbox: a link was sent to {}", sent_to.get().unwrap_or_default())}</p>
            </Show>
            <button class="link" on:click=move |_| session.go(ScreenId::Login)>
                "Back to login"
            </button>
        </div>
    }
}
