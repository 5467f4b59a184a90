use super::*;
use crate::net::types::{Campaign, CampaignRef, DonationStatus, DonorSummary};

fn donation(amount: f64, donor: &str, campaign: Option<&str>) -> Donation {
    Donation {
        id: None,
        amount,
        kind: None,
        category: None,
        payment_method: None,
        status: DonationStatus::Pending,
        created_at: None,
        donor: Some(DonorSummary { name: donor.to_owned(), email: None }),
        campaign: campaign.map(|t| CampaignRef::Summary { id: None, title: t.to_owned() }),
    }
}

// =============================================================
// Money
// =============================================================

#[test]
fn format_usd_groups_thousands_and_pads_cents() {
    assert_eq!(format_usd(0.0), "$0.00");
    assert_eq!(format_usd(5.5), "$5.50");
    assert_eq!(format_usd(1234.5), "$1,234.50");
    assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
}

#[test]
fn format_usd_rounds_to_cents() {
    assert_eq!(format_usd(19.999), "$20.00");
}

#[test]
fn format_usd_negative_and_non_finite() {
    assert_eq!(format_usd(-42.1), "-$42.10");
    assert_eq!(format_usd(f64::NAN), "$0.00");
}

#[test]
fn format_usd_whole_rounds_to_dollars() {
    assert_eq!(format_usd_whole(1234.49), "$1,234");
    assert_eq!(format_usd_whole(1234.5), "$1,235");
    assert_eq!(format_usd_whole(999.0), "$999");
}

// =============================================================
// Progress
// =============================================================

#[test]
fn progress_percent_rounds_ratio() {
    assert_eq!(progress_percent(1250.0, 5000.0), 25);
    assert_eq!(progress_percent(1.0, 3.0), 33);
}

#[test]
fn progress_percent_clamps_overfunded_campaigns() {
    assert_eq!(progress_percent(7500.0, 5000.0), 100);
}

#[test]
fn progress_percent_zero_goal_is_zero() {
    assert_eq!(progress_percent(100.0, 0.0), 0);
    assert_eq!(progress_percent(100.0, -5.0), 0);
    assert_eq!(progress_percent(100.0, f64::NAN), 0);
}

// =============================================================
// Dates
// =============================================================

#[test]
fn date_label_takes_date_part() {
    assert_eq!(date_label(Some("2024-03-01T10:00:00.000Z")), "2024-03-01");
}

#[test]
fn date_label_handles_short_and_missing() {
    assert_eq!(date_label(Some("today")), "today");
    assert_eq!(date_label(Some("  ")), "—");
    assert_eq!(date_label(None), "—");
}

// =============================================================
// Lists
// =============================================================

#[test]
fn donor_totals_sums_amounts() {
    let list = [donation(10.0, "Sam", None), donation(32.5, "Sam", None)];
    let (total, count) = donor_totals(&list);
    assert!((total - 42.5).abs() < f64::EPSILON);
    assert_eq!(count, 2);
}

#[test]
fn donor_totals_empty() {
    assert_eq!(donor_totals(&[]), (0.0, 0));
}

#[test]
fn filter_matches_donor_or_campaign_case_insensitively() {
    let list = [
        donation(10.0, "Sam Hill", Some("Winter Meals")),
        donation(20.0, "Ada", Some("School Books")),
        donation(30.0, "Grace", None),
    ];
    let by_donor = filter_donations(&list, "sam");
    assert_eq!(by_donor.len(), 1);
    assert_eq!(by_donor[0].donor.as_ref().unwrap().name, "Sam Hill");

    let by_campaign = filter_donations(&list, "BOOKS");
    assert_eq!(by_campaign.len(), 1);
    assert!((by_campaign[0].amount - 20.0).abs() < f64::EPSILON);
}

#[test]
fn filter_blank_term_keeps_all() {
    let list = [donation(10.0, "Sam", None), donation(20.0, "Ada", None)];
    assert_eq!(filter_donations(&list, "  ").len(), 2);
}

#[test]
fn filter_no_match_is_empty() {
    let list = [donation(10.0, "Sam", Some("Winter Meals"))];
    assert!(filter_donations(&list, "zakat").is_empty());
}

#[test]
fn campaign_totals_sums_goals_and_raised() {
    let campaign = |goal: f64, raised: f64| Campaign {
        id: "c".to_owned(),
        title: "t".to_owned(),
        description: None,
        goal_amount: goal,
        raised_amount: raised,
        deadline: None,
        default_category: None,
    };
    let (goal, raised) = campaign_totals(&[campaign(1000.0, 250.0), campaign(500.0, 500.0)]);
    assert!((goal - 1500.0).abs() < f64::EPSILON);
    assert!((raised - 750.0).abs() < f64::EPSILON);
}
