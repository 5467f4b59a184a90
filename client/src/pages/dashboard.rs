//! Donor dashboard: lifetime giving totals and donation history.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route for signed-in donors. History is fetched once on mount;
//! receipts are rebuilt locally from each row.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::{Donation, DonationStatus};
use crate::state::auth::{AuthState, SessionHandle};
use crate::util::auth::AppRoute;
use crate::util::browser::spawn_browser;
use crate::util::format::{date_label, donor_totals, format_usd};
use crate::util::receipt::download_receipt;

/// Display-ready history row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct HistoryRow {
    pub date: String,
    pub destination: String,
    pub category: String,
    pub amount: String,
    pub status: &'static str,
    pub verified: bool,
}

impl HistoryRow {
    pub(crate) fn from_donation(donation: &Donation) -> Self {
        Self {
            date: date_label(donation.created_at.as_deref()),
            destination: donation
                .campaign
                .as_ref()
                .and_then(|c| c.title())
                .unwrap_or("General Fund")
                .to_owned(),
            category: donation.category.clone().unwrap_or_else(|| "General".to_owned()),
            amount: format_usd(donation.amount),
            status: donation.status.label(),
            verified: donation.status == DonationStatus::Verified,
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let api = expect_context::<ApiClient>();
    let auth = session.state();

    let donations = RwSignal::new(Vec::<Donation>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let loader = session.clone();
    spawn_browser(async move {
        match api.my_donations().await {
            Ok(list) => donations.set(list),
            Err(e) if e.is_unauthorized() => {
                // Stale credential: dropping it lets the guard send us to login.
                log::warn!("stored credential rejected; signing out");
                loader.sign_out();
            }
            Err(e) => {
                log::warn!("donation history unavailable: {e}");
                error.set(Some(e.to_string()));
            }
        }
        loading.set(false);
    });

    let donor_name = move || {
        auth.with(|s| s.session.as_ref().map(|s| s.subject.name.clone()))
            .unwrap_or_default()
    };
    let totals = Memo::new(move |_| donations.with(|list| donor_totals(list)));

    view! {
        <div class="dashboard-page">
            <Show when=move || auth.with(AuthState::is_admin)>
                <div class="dashboard-page__admin-banner">
                    <span>"You have administrator access."</span>
                    <a class="btn btn--primary" href=AppRoute::AdminDashboard.path()>"Open Admin Console"</a>
                </div>
            </Show>

            <header class="dashboard-page__header">
                <h2>"Welcome, " {donor_name}</h2>
                <a class="btn btn--primary" href=AppRoute::Donate.path()>"Make a Donation"</a>
            </header>

            <section class="dashboard-page__stats">
                <div class="stat-card">
                    <span class="stat-card__label">"Lifetime Giving"</span>
                    <span class="stat-card__value">{move || format_usd(totals.get().0)}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Donations"</span>
                    <span class="stat-card__value">{move || totals.get().1}</span>
                </div>
            </section>

            <section class="dashboard-page__history">
                <h3>"Donation History"</h3>
                <Show when=move || !loading.get() fallback=|| view! { <p class="dashboard-page__empty">"Loading..."</p> }>
                    {move || error.get().map(|msg| view! { <p class="dashboard-page__error">{msg}</p> })}
                    <Show
                        when=move || donations.with(|d| !d.is_empty())
                        fallback=|| view! { <p class="dashboard-page__empty">"No donations yet."</p> }
                    >
                        <table class="ledger">
                            <thead>
                                <tr>
                                    <th>"Date"</th>
                                    <th>"Destination"</th>
                                    <th>"Amount"</th>
                                    <th>"Status"</th>
                                    <th>"Receipt"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    donations
                                        .get()
                                        .into_iter()
                                        .map(|donation| {
                                            let row = HistoryRow::from_donation(&donation);
                                            let on_receipt = move |_| download_receipt(&donor_name(), &donation);
                                            view! {
                                                <tr>
                                                    <td>{row.date}</td>
                                                    <td>
                                                        <span>{row.destination}</span>
                                                        <small class="ledger__muted">{row.category}</small>
                                                    </td>
                                                    <td class="ledger__amount">{row.amount}</td>
                                                    <td>
                                                        <span class="status-pill" class:status-pill--verified=row.verified>
                                                            {row.status}
                                                        </span>
                                                    </td>
                                                    <td>
                                                        <button class="btn btn--ghost" on:click=on_receipt>"Download"</button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </Show>
                </Show>
            </section>
        </div>
    }
}
