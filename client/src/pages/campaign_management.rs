//! Admin campaign management: publish new campaigns, retire old ones.

#[cfg(test)]
#[path = "campaign_management_test.rs"]
mod campaign_management_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::{Campaign, Category, NewCampaign};
use crate::util::browser::{confirm, spawn_browser};
use crate::util::format::{campaign_totals, format_usd_whole, progress_percent};

/// Raw campaign form values as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct CampaignForm {
    pub title: String,
    pub goal_amount: String,
    pub description: String,
    pub deadline: String,
    pub default_category: Category,
}

pub(crate) fn validate_campaign(form: &CampaignForm) -> Result<NewCampaign, &'static str> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err("Campaign title is required.");
    }
    let goal_amount = match form.goal_amount.trim().parse::<f64>() {
        Ok(goal) if goal.is_finite() && goal > 0.0 => goal,
        _ => return Err("Goal must be an amount greater than zero."),
    };
    Ok(NewCampaign {
        title: title.to_owned(),
        goal_amount,
        description: form.description.trim().to_owned(),
        deadline: form.deadline.trim().to_owned(),
        default_category: form.default_category,
    })
}

#[derive(Clone, Copy)]
struct CampaignList {
    campaigns: RwSignal<Vec<Campaign>>,
    loading: RwSignal<bool>,
    info: RwSignal<String>,
}

fn spawn_reload(api: ApiClient, list: CampaignList) {
    spawn_browser(async move {
        match api.list_campaigns().await {
            Ok(campaigns) => list.campaigns.set(campaigns),
            Err(e) => {
                log::warn!("campaign list unavailable: {e}");
                list.info.set(format!("Could not load campaigns: {e}"));
            }
        }
        list.loading.set(false);
    });
}

#[component]
pub fn CampaignManagementPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let list = CampaignList {
        campaigns: RwSignal::new(Vec::new()),
        loading: RwSignal::new(true),
        info: RwSignal::new(String::new()),
    };
    let form = RwSignal::new(CampaignForm::default());
    let busy = RwSignal::new(false);

    spawn_reload(api.clone(), list);

    let totals = Memo::new(move |_| list.campaigns.with(|c| campaign_totals(c)));

    let publish_api = api.clone();
    let on_publish = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let campaign = match form.with_untracked(validate_campaign) {
            Ok(campaign) => campaign,
            Err(msg) => {
                list.info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        list.info.set("Publishing...".to_owned());
        let api = publish_api.clone();
        spawn_browser(async move {
            match api.create_campaign(&campaign).await {
                Ok(()) => {
                    log::info!("campaign published: {}", campaign.title);
                    form.set(CampaignForm::default());
                    list.info.set("Campaign published.".to_owned());
                    spawn_reload(api, list);
                }
                Err(e) => {
                    log::warn!("campaign publish failed: {e}");
                    list.info.set(format!("Publish failed: {e}"));
                }
            }
            busy.set(false);
        });
    };

    let on_delete = Callback::new(move |id: String| {
        if !confirm("Delete this campaign? This cannot be undone.") {
            return;
        }
        let api = api.clone();
        spawn_browser(async move {
            match api.delete_campaign(&id).await {
                Ok(()) => {
                    log::info!("campaign {id} deleted");
                    list.info.set("Campaign deleted.".to_owned());
                    spawn_reload(api, list);
                }
                Err(e) => {
                    log::warn!("campaign {id} delete failed: {e}");
                    list.info.set(format!("Delete failed: {e}"));
                }
            }
        });
    });

    view! {
        <div class="manage-page">
            <section class="manage-page__form">
                <h2>"New Campaign"</h2>
                <form class="campaign-form" on:submit=on_publish>
                    <input
                        class="campaign-form__input"
                        type="text"
                        placeholder="Title"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| f.title = v);
                        }
                    />
                    <input
                        class="campaign-form__input"
                        type="number"
                        min="1"
                        placeholder="Goal amount"
                        prop:value=move || form.with(|f| f.goal_amount.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| f.goal_amount = v);
                        }
                    />
                    <textarea
                        class="campaign-form__input"
                        placeholder="Description"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| f.description = v);
                        }
                    ></textarea>
                    <input
                        class="campaign-form__input"
                        type="date"
                        prop:value=move || form.with(|f| f.deadline.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            form.update(|f| f.deadline = v);
                        }
                    />
                    <select
                        class="campaign-form__input"
                        prop:value=move || form.with(|f| f.default_category.as_str())
                        on:change=move |ev| {
                            let category = Category::from_form_value(&event_target_value(&ev));
                            form.update(|f| f.default_category = category);
                        }
                    >
                        {Category::ALL
                            .into_iter()
                            .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Publish Campaign"
                    </button>
                </form>
                <Show when=move || !list.info.get().is_empty()>
                    <p class="manage-page__message">{move || list.info.get()}</p>
                </Show>
            </section>

            <section class="manage-page__list">
                <header class="manage-page__summary">
                    <span>{move || list.campaigns.with(Vec::len)} " campaigns"</span>
                    <span>"Raised " {move || format_usd_whole(totals.get().1)}</span>
                    <span>"of " {move || format_usd_whole(totals.get().0)}</span>
                </header>
                <Show when=move || !list.loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                    <ul class="manage-list">
                        {move || {
                            list.campaigns
                                .get()
                                .into_iter()
                                .map(|campaign| managed_campaign(campaign, on_delete))
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </section>
        </div>
    }
}

fn managed_campaign(campaign: Campaign, on_delete: Callback<String>) -> impl IntoView {
    let percent = progress_percent(campaign.raised_amount, campaign.goal_amount);
    let id = campaign.id;
    view! {
        <li class="manage-list__item">
            <div class="manage-list__info">
                <span class="manage-list__title">{campaign.title}</span>
                <span class="manage-list__figures">
                    {format_usd_whole(campaign.raised_amount)} " / " {format_usd_whole(campaign.goal_amount)}
                    " (" {percent} "%)"
                </span>
                <div class="progress">
                    <div class="progress__bar" style=format!("width: {percent}%")></div>
                </div>
            </div>
            <button class="btn btn--danger" on:click=move |_| on_delete.run(id.clone())>
                "Delete"
            </button>
        </li>
    }
}
