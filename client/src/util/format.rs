//! Display formatting for money, progress and donation lists.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::{Campaign, Donation};

/// Format as US dollars with thousands separators and cents: `$1,234.50`.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    let cents = to_cents(amount);
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Format as whole US dollars: `$1,235`.
#[must_use]
pub fn format_usd_whole(amount: f64) -> String {
    let cents = to_cents(amount);
    let sign = if cents < 0 { "-" } else { "" };
    let dollars = (cents.unsigned_abs() + 50) / 100;
    format!("{sign}${}", group_thousands(dollars))
}

#[allow(clippy::cast_possible_truncation)]
fn to_cents(amount: f64) -> i64 {
    if amount.is_finite() { (amount * 100.0).round() as i64 } else { 0 }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Funding progress as a whole percentage clamped to `0..=100`.
///
/// A campaign without a positive goal reports 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn progress_percent(raised: f64, goal: f64) -> u32 {
    if goal.is_nan() || goal <= 0.0 || !raised.is_finite() {
        return 0;
    }
    ((raised / goal) * 100.0).round().clamp(0.0, 100.0) as u32
}

/// Date portion (`YYYY-MM-DD`) of an ISO-8601 timestamp.
#[must_use]
pub fn date_label(timestamp: Option<&str>) -> String {
    match timestamp.map(str::trim) {
        Some(ts) if ts.len() >= 10 && ts.is_char_boundary(10) => ts[..10].to_owned(),
        Some(ts) if !ts.is_empty() => ts.to_owned(),
        _ => "—".to_owned(),
    }
}

/// Lifetime total and number of donations.
#[must_use]
pub fn donor_totals(donations: &[Donation]) -> (f64, usize) {
    (donations.iter().map(|d| d.amount).sum(), donations.len())
}

/// Donations whose donor name or campaign title contains `term`,
/// case-insensitively. A blank term keeps everything.
#[must_use]
pub fn filter_donations(donations: &[Donation], term: &str) -> Vec<Donation> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return donations.to_vec();
    }
    donations
        .iter()
        .filter(|d| {
            let donor = d.donor.as_ref().is_some_and(|p| p.name.to_lowercase().contains(&needle));
            let campaign = d
                .campaign
                .as_ref()
                .and_then(|c| c.title())
                .is_some_and(|t| t.to_lowercase().contains(&needle));
            donor || campaign
        })
        .cloned()
        .collect()
}

/// Sum of goals and of raised amounts across `campaigns`.
#[must_use]
pub fn campaign_totals(campaigns: &[Campaign]) -> (f64, f64) {
    campaigns
        .iter()
        .fold((0.0, 0.0), |(goal, raised), c| (goal + c.goal_amount, raised + c.raised_amount))
}
