//! Route table and navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every screen declares an access tier. Before a screen renders, the guard
//! combines that tier with the current session and answers render or redirect.
//! The decision is a plain function of its inputs so it can be exercised
//! without mounting any view; `components::guarded` applies it to the router.
//!
//! POLICY
//! ======
//! - `Public`: always render.
//! - `Authenticated`: no session goes to `/login`.
//! - `AdminOnly`: no session goes to `/login`; a signed-in donor goes to
//!   `/dashboard` since they are authenticated, just under-privileged.
//! - Unknown paths always go to `/login`.
//! - `/` never renders: it forwards to the landing page for the session's role.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, Subject};
use crate::state::auth::{AuthState, Session};

/// Access tier declared by a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoutePolicy {
    Public,
    Authenticated,
    AdminOnly,
}

/// Every navigable location in the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Root,
    Login,
    Register,
    Dashboard,
    Campaigns,
    Donate,
    AdminDashboard,
    AdminCampaigns,
}

impl AppRoute {
    pub const ALL: [Self; 8] = [
        Self::Root,
        Self::Login,
        Self::Register,
        Self::Dashboard,
        Self::Campaigns,
        Self::Donate,
        Self::AdminDashboard,
        Self::AdminCampaigns,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::Campaigns => "/campaigns",
            Self::Donate => "/donate",
            Self::AdminDashboard => "/admin/dashboard",
            Self::AdminCampaigns => "/admin/campaigns",
        }
    }

    /// Access tier for this route.
    ///
    /// `Root` is reported as `Public` because it renders nothing of its own;
    /// it is resolved through [`root_redirect`] instead.
    #[must_use]
    pub fn policy(self) -> RoutePolicy {
        match self {
            Self::Root | Self::Login | Self::Register => RoutePolicy::Public,
            Self::Dashboard | Self::Campaigns | Self::Donate => RoutePolicy::Authenticated,
            Self::AdminDashboard | Self::AdminCampaigns => RoutePolicy::AdminOnly,
        }
    }

    /// Map a location path to a route. Query strings, fragments and a single
    /// trailing slash are ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// Outcome of a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Render,
    Redirect(AppRoute),
}

/// Decide whether a route with `policy` may render for `session`.
#[must_use]
pub fn decide(policy: RoutePolicy, session: Option<&Session>) -> Decision {
    match (policy, session) {
        (RoutePolicy::Public, _) => Decision::Render,
        (RoutePolicy::Authenticated | RoutePolicy::AdminOnly, None) => Decision::Redirect(AppRoute::Login),
        (RoutePolicy::Authenticated, Some(_)) => Decision::Render,
        (RoutePolicy::AdminOnly, Some(session)) => match session.subject.role {
            Role::Admin => Decision::Render,
            Role::Donor => Decision::Redirect(AppRoute::Dashboard),
        },
    }
}

/// Landing page for a signed-in subject.
#[must_use]
pub fn landing_for(subject: &Subject) -> AppRoute {
    match subject.role {
        Role::Admin => AppRoute::AdminDashboard,
        Role::Donor => AppRoute::Dashboard,
    }
}

/// Where `/` forwards to.
#[must_use]
pub fn root_redirect(session: Option<&Session>) -> AppRoute {
    session.map_or(AppRoute::Login, |s| landing_for(&s.subject))
}

/// Decide for a raw location path, including `/` and unknown paths.
#[must_use]
pub fn decide_path(path: &str, session: Option<&Session>) -> Decision {
    match AppRoute::from_path(path) {
        None => Decision::Redirect(AppRoute::Login),
        Some(AppRoute::Root) => Decision::Redirect(root_redirect(session)),
        Some(route) => decide(route.policy(), session),
    }
}

/// Guard decision once the session has loaded; `None` while still loading.
#[must_use]
pub fn decide_when_loaded(policy: RoutePolicy, state: &AuthState) -> Option<Decision> {
    (!state.loading).then(|| decide(policy, state.session.as_ref()))
}
