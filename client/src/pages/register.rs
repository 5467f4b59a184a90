//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::components::guarded::navigation_signal;
use crate::net::api::ApiClient;
use crate::net::types::RegisterRequest;
use crate::util::auth::AppRoute;
use crate::util::browser::{sleep_ms, spawn_browser};

pub(crate) const MIN_PASSWORD_LEN: usize = 6;

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub admin_code: String,
}

/// Loose address check: something before `@`, and a dot inside the domain.
pub(crate) fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

pub(crate) fn validate_registration(form: &RegisterForm) -> Result<RegisterRequest, &'static str> {
    let name = form.name.trim();
    let email = form.email.trim();
    let phone = form.phone.trim();
    if name.is_empty() {
        return Err("Full name is required.");
    }
    if email.is_empty() {
        return Err("Email is required.");
    }
    if !looks_like_email(email) {
        return Err("Invalid email address.");
    }
    if phone.is_empty() {
        return Err("Phone number is required.");
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password needs at least 6 characters.");
    }
    if form.password != form.confirm_password {
        return Err("Passwords must match.");
    }
    Ok(RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        phone: phone.to_owned(),
        admin_code: form.admin_code.trim().to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let nav = navigation_signal();

    let form = RwSignal::new(RegisterForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match form.with_untracked(validate_registration) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        let api = api.clone();
        spawn_browser(async move {
            match api.register(&request).await {
                Ok(()) => {
                    info.set("Account created. Please sign in.".to_owned());
                    sleep_ms(1500).await;
                    nav.set(Some(AppRoute::Login.path().to_owned()));
                }
                Err(e) => {
                    log::warn!("registration failed: {e}");
                    info.set(format!("Registration failed: {e}"));
                }
            }
            busy.set(false);
        });
    };

    let field = move |placeholder: &'static str,
                      kind: &'static str,
                      get: fn(&RegisterForm) -> String,
                      set: fn(&mut RegisterForm, String)| {
        view! {
            <input
                class="login-input"
                type=kind
                placeholder=placeholder
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Join DonationHub"</h1>
                <p class="login-card__subtitle">"Create your donor account"</p>
                <form class="login-form" on:submit=on_submit>
                    {field("Full name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                    {field("you@example.com", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {field("Phone", "tel", |f| f.phone.clone(), |f, v| f.phone = v)}
                    {field("Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    {field("Confirm password", "password", |f| f.confirm_password.clone(), |f, v| f.confirm_password = v)}
                    {field("Admin code (optional)", "text", |f| f.admin_code.clone(), |f, v| f.admin_code = v)}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href=AppRoute::Login.path()>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
