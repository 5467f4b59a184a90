//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guarded::{FallbackRoute, Guarded, RootRedirect};
use crate::components::navbar::Navbar;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, campaign_management::CampaignManagementPage, campaigns::CampaignsPage,
    dashboard::DashboardPage, donate::DonatePage, login::LoginPage, register::RegisterPage,
};
use crate::state::auth::SessionHandle;
use crate::util::auth::AppRoute;
use crate::util::session_store::{BrowserSessionStore, SessionStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session handle and API client, then routes every screen
/// through its access guard. The persisted session is read after mount so
/// server rendering never redirects.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let store: Arc<dyn SessionStore> = Arc::new(BrowserSessionStore::default());
    let session = SessionHandle::new(Arc::clone(&store));
    let api = ApiClient::new(config.api_base_url, store);

    provide_context(session.clone());
    provide_context(api);

    Effect::new(move || session.load());

    view! {
        <Stylesheet id="leptos" href="/pkg/donationhub.css"/>
        <Title text="DonationHub"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| view! { <FallbackRoute/> }>
                    <Route path=StaticSegment("") view=RootRedirect/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <Guarded policy=AppRoute::Dashboard.policy()><DashboardPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("campaigns")
                        view=|| view! { <Guarded policy=AppRoute::Campaigns.policy()><CampaignsPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("donate")
                        view=|| view! { <Guarded policy=AppRoute::Donate.policy()><DonatePage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("dashboard"))
                        view=|| {
                            view! {
                                <Guarded policy=AppRoute::AdminDashboard.policy()>
                                    <AdminDashboardPage/>
                                </Guarded>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("campaigns"))
                        view=|| {
                            view! {
                                <Guarded policy=AppRoute::AdminCampaigns.policy()>
                                    <CampaignManagementPage/>
                                </Guarded>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
