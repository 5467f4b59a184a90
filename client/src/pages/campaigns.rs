//! Campaign explorer: every active campaign with its funding progress.

#[cfg(test)]
#[path = "campaigns_test.rs"]
mod campaigns_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::Campaign;
use crate::util::auth::AppRoute;
use crate::util::browser::spawn_browser;
use crate::util::format::{date_label, format_usd_whole, progress_percent};

/// Query parameter the donate page reads to preselect a campaign.
pub(crate) const CAMPAIGN_QUERY_KEY: &str = "campaign";

/// Link to the donate page with `campaign_id` preselected.
pub(crate) fn donate_href(campaign_id: &str) -> String {
    format!("{}?{CAMPAIGN_QUERY_KEY}={campaign_id}", AppRoute::Donate.path())
}

const MISSING_DESCRIPTION: &str = "No description provided.";

#[component]
pub fn CampaignsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let campaigns = RwSignal::new(Vec::<Campaign>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    spawn_browser(async move {
        match api.list_campaigns().await {
            Ok(list) => campaigns.set(list),
            Err(e) => {
                log::warn!("campaign list unavailable: {e}");
                error.set(Some(e.to_string()));
            }
        }
        loading.set(false);
    });

    view! {
        <div class="campaigns-page">
            <header class="campaigns-page__header">
                <h2>"Active Campaigns"</h2>
                <span class="campaigns-page__count">{move || campaigns.with(Vec::len)} " campaigns"</span>
            </header>
            {move || error.get().map(|msg| view! { <p class="campaigns-page__error">{msg}</p> })}
            <Show when=move || !loading.get() fallback=|| view! { <p class="campaigns-page__empty">"Loading..."</p> }>
                <Show
                    when=move || campaigns.with(|c| !c.is_empty())
                    fallback=|| view! { <p class="campaigns-page__empty">"No active campaigns right now."</p> }
                >
                    <div class="campaigns-grid">
                        {move || campaigns.get().into_iter().map(campaign_card).collect::<Vec<_>>()}
                    </div>
                </Show>
            </Show>
        </div>
    }
}

fn campaign_card(campaign: Campaign) -> impl IntoView {
    let percent = progress_percent(campaign.raised_amount, campaign.goal_amount);
    let description = campaign
        .description
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| MISSING_DESCRIPTION.to_owned());
    view! {
        <article class="campaign-card">
            <h3 class="campaign-card__title">{campaign.title}</h3>
            <p class="campaign-card__description">{description}</p>
            <div class="campaign-card__progress">
                <div class="progress">
                    <div class="progress__bar" style=format!("width: {percent}%")></div>
                </div>
                <div class="campaign-card__figures">
                    <span>{format_usd_whole(campaign.raised_amount)} " raised"</span>
                    <span>{percent} "%"</span>
                </div>
                <span class="campaign-card__goal">"Goal " {format_usd_whole(campaign.goal_amount)}</span>
            </div>
            <span class="campaign-card__deadline">"Ends " {date_label(campaign.deadline.as_deref())}</span>
            <a class="btn btn--primary" href=donate_href(&campaign.id)>"Donate"</a>
        </article>
    }
}
