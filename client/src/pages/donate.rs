//! Donation form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from the navbar or from a campaign card (`/donate?campaign=<id>`).
//! A preselected campaign also seeds its default category. On success the
//! receipt is downloaded immediately and the donor is returned to the
//! dashboard after a short pause.

#[cfg(test)]
#[path = "donate_test.rs"]
mod donate_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use super::campaigns::CAMPAIGN_QUERY_KEY;
use crate::components::guarded::navigation_signal;
use crate::net::api::ApiClient;
use crate::net::types::{Campaign, Category, DonationKind, NewDonation, PaymentMethod};
use crate::state::auth::SessionHandle;
use crate::util::auth::AppRoute;
use crate::util::browser::{sleep_ms, spawn_browser};
use crate::util::receipt::download_receipt;

pub(crate) const AMOUNT_CHIPS: [&str; 4] = ["10", "50", "100", "200"];
pub(crate) const DEFAULT_AMOUNT: &str = "50";
const REDIRECT_DELAY_MS: u64 = 1500;

/// Parse the amount field; it must be a positive, finite number.
pub(crate) fn validate_amount(raw: &str) -> Result<f64, &'static str> {
    match raw.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err("Enter an amount greater than zero."),
    }
}

/// Assemble the submission. A blank campaign id means the general fund.
pub(crate) fn build_donation(
    amount: f64,
    kind: DonationKind,
    category: Category,
    payment_method: PaymentMethod,
    campaign_id: &str,
) -> NewDonation {
    let campaign_id = campaign_id.trim();
    NewDonation {
        amount,
        kind,
        category,
        payment_method,
        campaign_id: (!campaign_id.is_empty()).then(|| campaign_id.to_owned()),
    }
}

/// Default category of the campaign with `campaign_id`, if it declares one.
pub(crate) fn campaign_default_category(campaigns: &[Campaign], campaign_id: &str) -> Option<Category> {
    campaigns
        .iter()
        .find(|c| c.id == campaign_id)
        .and_then(|c| c.default_category)
}

#[component]
pub fn DonatePage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let api = expect_context::<ApiClient>();
    let auth = session.state();
    let query = use_query_map();
    let nav = navigation_signal();

    let campaigns = RwSignal::new(Vec::<Campaign>::new());
    let amount = RwSignal::new(DEFAULT_AMOUNT.to_owned());
    let kind = RwSignal::new(DonationKind::default());
    let category = RwSignal::new(Category::default());
    let payment_method = RwSignal::new(PaymentMethod::default());
    let selected = RwSignal::new(
        query
            .with_untracked(|q| q.get(CAMPAIGN_QUERY_KEY))
            .unwrap_or_default(),
    );
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let loader = api.clone();
    spawn_browser(async move {
        match loader.list_campaigns().await {
            Ok(list) => {
                if let Some(default) = campaign_default_category(&list, &selected.get_untracked()) {
                    category.set(default);
                }
                campaigns.set(list);
            }
            Err(e) => {
                log::warn!("campaign list unavailable: {e}");
                info.set("Could not load campaigns; you can still give to the general fund.".to_owned());
            }
        }
    });

    let on_campaign_change = move |ev: leptos::ev::Event| {
        let id = event_target_value(&ev);
        if let Some(default) = campaigns.with_untracked(|list| campaign_default_category(list, &id)) {
            category.set(default);
        }
        selected.set(id);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let value = match validate_amount(&amount.get_untracked()) {
            Ok(value) => value,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let request = build_donation(
            value,
            kind.get_untracked(),
            category.get_untracked(),
            payment_method.get_untracked(),
            &selected.get_untracked(),
        );
        let donor = auth
            .with_untracked(|s| s.session.as_ref().map(|s| s.subject.name.clone()))
            .unwrap_or_default();
        busy.set(true);
        info.set("Processing...".to_owned());

        let api = api.clone();
        spawn_browser(async move {
            match api.submit_donation(&request).await {
                Ok(donation) => {
                    log::info!("donation submitted: {}", donation.id.as_deref().unwrap_or("new"));
                    download_receipt(&donor, &donation);
                    info.set("Thank you! Your receipt has been downloaded.".to_owned());
                    sleep_ms(REDIRECT_DELAY_MS).await;
                    nav.set(Some(AppRoute::Dashboard.path().to_owned()));
                }
                Err(e) => {
                    log::warn!("donation failed: {e}");
                    info.set(format!("Donation failed: {e}"));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="donate-page">
            <h2>"Make a Donation"</h2>
            <form class="donate-form" on:submit=on_submit>
                <fieldset class="donate-form__section">
                    <legend>"Amount"</legend>
                    <div class="chip-row">
                        {AMOUNT_CHIPS
                            .into_iter()
                            .map(|chip| {
                                view! {
                                    <button
                                        type="button"
                                        class="chip"
                                        class:chip--active=move || amount.get() == chip
                                        on:click=move |_| amount.set(chip.to_owned())
                                    >
                                        "$" {chip}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <input
                        class="donate-form__input"
                        type="number"
                        min="1"
                        step="any"
                        placeholder="Custom amount"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                </fieldset>

                <fieldset class="donate-form__section">
                    <legend>"Donation type"</legend>
                    <div class="chip-row">
                        {DonationKind::ALL
                            .into_iter()
                            .map(|k| {
                                view! {
                                    <button
                                        type="button"
                                        class="chip"
                                        class:chip--active=move || kind.get() == k
                                        on:click=move |_| kind.set(k)
                                    >
                                        {k.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </fieldset>

                <fieldset class="donate-form__section">
                    <legend>"Campaign"</legend>
                    <select class="donate-form__input" prop:value=move || selected.get() on:change=on_campaign_change>
                        <option value="">"General Fund"</option>
                        {move || {
                            campaigns
                                .get()
                                .into_iter()
                                .map(|c| view! { <option value=c.id>{c.title}</option> })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                    <select
                        class="donate-form__input"
                        prop:value=move || category.get().as_str()
                        on:change=move |ev| category.set(Category::from_form_value(&event_target_value(&ev)))
                    >
                        {Category::ALL
                            .into_iter()
                            .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </fieldset>

                <fieldset class="donate-form__section">
                    <legend>"Payment method"</legend>
                    <div class="chip-row">
                        {PaymentMethod::ALL
                            .into_iter()
                            .map(|m| {
                                view! {
                                    <button
                                        type="button"
                                        class="chip"
                                        class:chip--active=move || payment_method.get() == m
                                        on:click=move |_| payment_method.set(m)
                                    >
                                        {m.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </fieldset>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Donate"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="donate-page__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
