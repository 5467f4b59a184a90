//! Top navigation bar for signed-in users.
//!
//! Donor links are always shown; admin links only for administrators. The
//! logout button is the single UI trigger for ending a session.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::guarded::navigation_signal;
use crate::state::auth::{AuthState, SessionHandle};
use crate::util::auth::AppRoute;

const MEMBER_LINKS: [(AppRoute, &str); 3] = [
    (AppRoute::Dashboard, "Dashboard"),
    (AppRoute::Campaigns, "Campaigns"),
    (AppRoute::Donate, "Donate"),
];

const ADMIN_LINKS: [(AppRoute, &str); 2] = [
    (AppRoute::AdminDashboard, "Admin Console"),
    (AppRoute::AdminCampaigns, "Manage Campaigns"),
];

#[component]
fn NavLink(route: AppRoute, label: &'static str) -> impl IntoView {
    let location = use_location();
    let active = move || location.pathname.get() == route.path();
    view! {
        <a href=route.path() class="navbar__link" class:navbar__link--active=active>
            {label}
        </a>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let auth = session.state();
    let nav = navigation_signal();

    let on_logout = move |_| {
        let target = session.sign_out();
        nav.set(Some(target.path().to_owned()));
    };

    let identity = move || {
        auth.with(|s| {
            s.session
                .as_ref()
                .map(|s| (s.subject.name.clone(), s.subject.role.label()))
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=move || auth.with(|s| s.session.is_some())>
            <nav class="navbar">
                <a href=AppRoute::Root.path() class="navbar__brand">
                    "DonationHub"
                </a>
                <div class="navbar__links">
                    {MEMBER_LINKS.into_iter().map(|(route, label)| view! { <NavLink route label/> }).collect_view()}
                    <Show when=move || auth.with(AuthState::is_admin)>
                        {ADMIN_LINKS.into_iter().map(|(route, label)| view! { <NavLink route label/> }).collect_view()}
                    </Show>
                </div>
                <div class="navbar__identity">
                    <span class="navbar__role">{move || identity().1}</span>
                    <span class="navbar__name">{move || identity().0}</span>
                    <button class="btn navbar__logout" on:click=on_logout.clone() title="Logout">
                        "Logout"
                    </button>
                </div>
            </nav>
        </Show>
    }
}
