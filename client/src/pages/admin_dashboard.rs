//! Admin console: platform totals and the review queue for every donation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Donations and stats are fetched together; after any status change both are
//! re-fetched so the totals and the ledger never disagree.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{AdminStats, Donation, DonationStatus};
use crate::util::auth::AppRoute;
use crate::util::browser::spawn_browser;
use crate::util::format::{filter_donations, format_usd, format_usd_whole};

/// Headline figure shown above the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub alert: bool,
}

pub(crate) fn stat_cards(stats: &AdminStats) -> [StatCard; 4] {
    [
        StatCard { label: "Total Volume", value: format_usd(stats.total_donations), alert: false },
        StatCard {
            label: "Pending Review",
            value: stats.pending_reviews.to_string(),
            alert: stats.pending_reviews > 0,
        },
        StatCard { label: "Donors", value: stats.total_donors.to_string(), alert: false },
        StatCard { label: "Average Gift", value: format_usd_whole(stats.avg_donation), alert: false },
    ]
}

/// Display-ready ledger row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LedgerRow {
    pub id: Option<String>,
    pub donor: String,
    pub email: String,
    pub destination: String,
    pub category: String,
    pub amount: String,
    pub status: DonationStatus,
}

impl LedgerRow {
    pub(crate) fn from_donation(donation: &Donation) -> Self {
        let (donor, email) = donation
            .donor
            .as_ref()
            .map(|d| (d.name.clone(), d.email.clone().unwrap_or_default()))
            .unwrap_or_else(|| ("Unknown donor".to_owned(), String::new()));
        Self {
            id: donation.id.clone(),
            donor,
            email,
            destination: donation
                .campaign
                .as_ref()
                .and_then(|c| c.title())
                .unwrap_or("General Pool")
                .to_owned(),
            category: donation.category.clone().unwrap_or_else(|| "General".to_owned()),
            amount: format_usd(donation.amount),
            status: donation.status,
        }
    }
}

#[derive(Clone, Copy)]
struct AdminData {
    donations: RwSignal<Vec<Donation>>,
    stats: RwSignal<AdminStats>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
}

async fn fetch_admin_data(api: &ApiClient) -> (Result<Vec<Donation>, ApiError>, Result<AdminStats, ApiError>) {
    #[cfg(feature = "hydrate")]
    {
        futures::join!(api.admin_donations(), api.admin_stats())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        (api.admin_donations().await, api.admin_stats().await)
    }
}

fn spawn_reload(api: ApiClient, data: AdminData) {
    spawn_browser(async move {
        let (donations, stats) = fetch_admin_data(&api).await;
        match donations {
            Ok(list) => data.donations.set(list),
            Err(e) => {
                log::warn!("admin donations unavailable: {e}");
                data.error.set(Some(e.to_string()));
            }
        }
        match stats {
            Ok(s) => data.stats.set(s),
            Err(e) => log::warn!("admin stats unavailable: {e}"),
        }
        data.loading.set(false);
    });
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let data = AdminData {
        donations: RwSignal::new(Vec::new()),
        stats: RwSignal::new(AdminStats::default()),
        loading: RwSignal::new(true),
        error: RwSignal::new(None),
    };
    let search = RwSignal::new(String::new());

    spawn_reload(api.clone(), data);

    let visible = Memo::new(move |_| {
        let term = search.get();
        data.donations.with(|list| filter_donations(list, &term))
    });

    let set_status = Callback::new(move |(id, status): (String, DonationStatus)| {
        let api = api.clone();
        data.error.set(None);
        spawn_browser(async move {
            match api.update_donation_status(&id, status).await {
                Ok(()) => {
                    log::info!("donation {id} marked {}", status.label());
                    spawn_reload(api, data);
                }
                Err(e) => {
                    log::warn!("status update for {id} failed: {e}");
                    data.error.set(Some(format!("Status update failed: {e}")));
                }
            }
        });
    });

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h2>"Admin Console"</h2>
                <a class="btn btn--primary" href=AppRoute::AdminCampaigns.path()>"Manage Campaigns"</a>
            </header>
            <Show when=move || !data.loading.get() fallback=|| view! { <p class="admin-page__empty">"Loading..."</p> }>
                <section class="admin-page__stats">
                    {move || {
                        data.stats
                            .with(stat_cards)
                            .into_iter()
                            .map(|card| {
                                view! {
                                    <div class="stat-card" class:stat-card--alert=card.alert>
                                        <span class="stat-card__label">{card.label}</span>
                                        <span class="stat-card__value">{card.value}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </section>

                <section class="admin-page__ledger">
                    <div class="admin-page__ledger-header">
                        <h3>"Transactions"</h3>
                        <input
                            class="admin-page__search"
                            type="search"
                            placeholder="Search donor or campaign..."
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                    </div>
                    {move || data.error.get().map(|msg| view! { <p class="admin-page__error">{msg}</p> })}
                    <table class="ledger">
                        <thead>
                            <tr>
                                <th>"Donor"</th>
                                <th>"Destination"</th>
                                <th>"Amount"</th>
                                <th>"Status"</th>
                                <th>"Review"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                visible
                                    .get()
                                    .iter()
                                    .map(LedgerRow::from_donation)
                                    .map(|row| ledger_row(row, set_status))
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </section>
            </Show>
        </div>
    }
}

fn ledger_row(row: LedgerRow, set_status: Callback<(String, DonationStatus)>) -> impl IntoView {
    let verified = row.status == DonationStatus::Verified;
    let actions = row.id.map(|id| {
        let verify_id = id.clone();
        view! {
            <button
                class="btn btn--ok"
                title="Verify"
                on:click=move |_| set_status.run((verify_id.clone(), DonationStatus::Verified))
            >
                "Verify"
            </button>
            <button
                class="btn btn--ghost"
                title="Return to pending"
                on:click=move |_| set_status.run((id.clone(), DonationStatus::Pending))
            >
                "Revert"
            </button>
        }
    });
    view! {
        <tr>
            <td>
                <span class="ledger__name">{row.donor}</span>
                <small class="ledger__muted">{row.email}</small>
            </td>
            <td>
                <span>{row.destination}</span>
                <small class="ledger__muted">{row.category}</small>
            </td>
            <td class="ledger__amount">{row.amount}</td>
            <td>
                <span class="status-pill" class:status-pill--verified=verified>{row.status.label()}</span>
            </td>
            <td class="ledger__actions">{actions}</td>
        </tr>
    }
}
