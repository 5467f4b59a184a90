//! Router-facing wrappers around the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `util::auth` decides; these components apply the decision. Each waits for
//! the session to finish loading, then either mounts its children or replaces
//! the current history entry with the redirect target. While loading (always
//! the case during server rendering) a neutral placeholder is shown.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::SessionHandle;
use crate::util::auth::{AppRoute, Decision, RoutePolicy, decide_path, decide_when_loaded, root_redirect};

fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Navigation requested from event handlers and async tasks.
///
/// Setting the returned signal to a path navigates there once; handlers
/// rendered inside reactive children only need the `Copy` signal.
pub fn navigation_signal() -> RwSignal<Option<String>> {
    let target = RwSignal::new(None::<String>);
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = target.get() {
            target.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
    target
}

/// Placeholder shown until a guard decision is available.
#[component]
pub fn RoutePending() -> impl IntoView {
    view! {
        <div class="route-pending">
            <p>"Loading..."</p>
        </div>
    }
}

/// Render `children` only when `policy` admits the current session.
#[component]
pub fn Guarded(policy: RoutePolicy, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<SessionHandle>().state();
    let navigate = use_navigate();
    let decision = Memo::new(move |_| auth.with(|state| decide_when_loaded(policy, state)));

    Effect::new(move || {
        if let Some(Decision::Redirect(route)) = decision.get() {
            navigate(route.path(), replace_history());
        }
    });

    view! {
        <Show when=move || decision.get() == Some(Decision::Render) fallback=|| view! { <RoutePending/> }>
            {children()}
        </Show>
    }
}

/// `/`: forward to the landing page for the session's role, or to login.
#[component]
pub fn RootRedirect() -> impl IntoView {
    let auth = expect_context::<SessionHandle>().state();
    let navigate = use_navigate();

    Effect::new(move || {
        let target = auth.with(|state| (!state.loading).then(|| root_redirect(state.session.as_ref())));
        if let Some(route) = target {
            navigate(route.path(), replace_history());
        }
    });

    view! { <RoutePending/> }
}

/// Any path the route table does not know.
#[component]
pub fn FallbackRoute() -> impl IntoView {
    let auth = expect_context::<SessionHandle>().state();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        let decision = auth.with(|state| (!state.loading).then(|| decide_path(&path, state.session.as_ref())));
        match decision {
            Some(Decision::Redirect(route)) => navigate(route.path(), replace_history()),
            Some(Decision::Render) => {
                log::warn!("router fell through for known path {path}");
                navigate(AppRoute::Login.path(), replace_history());
            }
            None => {}
        }
    });

    view! { <RoutePending/> }
}
