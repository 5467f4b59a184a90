//! Login page: email/username + password against the remote API.
//!
//! A successful login persists the session; the already-signed-in effect then
//! forwards to the landing page for the user's role. Visiting the page while
//! signed in forwards the same way.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::guarded::navigation_signal;
use crate::net::api::ApiClient;
use crate::state::auth::SessionHandle;
use crate::util::auth::{AppRoute, landing_for};
use crate::util::browser::spawn_browser;

/// Trim and require both login fields.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email or username is required.");
    }
    if password.trim().is_empty() {
        return Err("Password is required.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let api = expect_context::<ApiClient>();
    let auth = session.state();
    let nav = navigation_signal();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let landing = auth.with(|s| s.session.as_ref().map(|s| landing_for(&s.subject)));
        if let Some(route) = landing {
            nav.set(Some(route.path().to_owned()));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(fields) => fields,
                Err(msg) => {
                    info.set(msg.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let api = api.clone();
        let session = session.clone();
        spawn_browser(async move {
            match api.login(&email_value, &password_value).await {
                Ok(resp) => {
                    session.sign_in(&resp.token, &resp.user);
                    info.set(format!("Welcome back, {}.", resp.user.name));
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    info.set(format!("Sign-in failed: {e}"));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"DonationHub"</h1>
                <p class="login-card__subtitle">"Sign in to continue giving"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "New here? "
                    <a href=AppRoute::Register.path()>"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
