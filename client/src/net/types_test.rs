use super::*;

// =============================================================
// Role / Subject
// =============================================================

#[test]
fn role_decodes_lowercase_names() {
    let admin: Role = serde_json::from_str("\"admin\"").unwrap();
    let donor: Role = serde_json::from_str("\"donor\"").unwrap();
    assert_eq!(admin, Role::Admin);
    assert_eq!(donor, Role::Donor);
}

#[test]
fn role_accepts_legacy_user_alias() {
    let role: Role = serde_json::from_str("\"user\"").unwrap();
    assert_eq!(role, Role::Donor);
}

#[test]
fn role_rejects_unknown_value() {
    assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
}

#[test]
fn subject_ignores_extra_fields() {
    let subject: Subject = serde_json::from_str(
        r#"{"_id":"u1","name":"Sam","email":"sam@example.com","role":"donor","phone":"555"}"#,
    )
    .unwrap();
    assert_eq!(subject.name, "Sam");
    assert_eq!(subject.role, Role::Donor);
    assert_eq!(subject.email.as_deref(), Some("sam@example.com"));
}

#[test]
fn subject_without_email_omits_it_when_encoded() {
    let subject = Subject { name: "Ada".to_owned(), role: Role::Admin, email: None };
    let raw = serde_json::to_string(&subject).unwrap();
    assert_eq!(raw, r#"{"name":"Ada","role":"admin"}"#);
}

#[test]
fn login_response_decodes_token_and_user() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"token":"abc","user":{"name":"Ada","role":"admin"}}"#).unwrap();
    assert_eq!(resp.token, "abc");
    assert_eq!(resp.user.role, Role::Admin);
}

// =============================================================
// Records
// =============================================================

#[test]
fn campaign_decodes_from_envelope() {
    let env: DataEnvelope<Vec<Campaign>> = serde_json::from_str(
        r#"{"data":[{"_id":"c1","title":"Winter Meals","goalAmount":5000,"raisedAmount":1250,"defaultCategory":"Meal"}]}"#,
    )
    .unwrap();
    let c = &env.data[0];
    assert_eq!(c.id, "c1");
    assert_eq!(c.title, "Winter Meals");
    assert!((c.goal_amount - 5000.0).abs() < f64::EPSILON);
    assert!((c.raised_amount - 1250.0).abs() < f64::EPSILON);
    assert_eq!(c.default_category, Some(Category::Meal));
    assert!(c.description.is_none());
}

#[test]
fn donation_with_populated_refs_decodes() {
    let d: Donation = serde_json::from_str(
        r#"{"_id":"d1","amount":50,"type":"Zakat","category":"Food","paymentMethod":"Cash",
            "status":"Verified","createdAt":"2024-03-01T10:00:00Z",
            "donor":{"name":"Sam"},"campaign":{"_id":"c1","title":"Winter Meals"}}"#,
    )
    .unwrap();
    assert_eq!(d.id.as_deref(), Some("d1"));
    assert_eq!(d.kind, Some(DonationKind::Zakat));
    assert_eq!(d.payment_method, Some(PaymentMethod::Cash));
    assert_eq!(d.status, DonationStatus::Verified);
    assert_eq!(d.donor.unwrap().name, "Sam");
    assert_eq!(d.campaign.unwrap().title(), Some("Winter Meals"));
}

#[test]
fn donation_campaign_may_be_bare_id() {
    let d: Donation = serde_json::from_str(r#"{"amount":10,"campaign":"c9"}"#).unwrap();
    assert_eq!(d.campaign, Some(CampaignRef::Id("c9".to_owned())));
    assert_eq!(d.status, DonationStatus::Pending);
}

#[test]
fn donation_unknown_status_maps_to_other() {
    let d: Donation = serde_json::from_str(r#"{"amount":10,"status":"Refunded"}"#).unwrap();
    assert_eq!(d.status, DonationStatus::Other);
}

#[test]
fn new_donation_encodes_api_field_names() {
    let body = NewDonation {
        amount: 50.0,
        kind: DonationKind::Sadqah,
        category: Category::Medical,
        payment_method: PaymentMethod::Transfer,
        campaign_id: None,
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({
            "amount": 50.0,
            "type": "Sadqah",
            "category": "Medical",
            "paymentMethod": "Transfer",
            "campaignId": null
        })
    );
}

#[test]
fn register_request_uses_camel_case_admin_code() {
    let body = RegisterRequest {
        name: "Sam".to_owned(),
        email: "sam@example.com".to_owned(),
        password: "secret1".to_owned(),
        phone: "555".to_owned(),
        admin_code: String::new(),
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["adminCode"], "");
}

#[test]
fn admin_stats_missing_fields_default_to_zero() {
    let stats: AdminStats = serde_json::from_str(r#"{"pendingReviews":3}"#).unwrap();
    assert_eq!(stats.pending_reviews, 3);
    assert_eq!(stats.total_donors, 0);
}

#[test]
fn category_from_form_value_falls_back_to_general() {
    assert_eq!(Category::from_form_value("Education"), Category::Education);
    assert_eq!(Category::from_form_value(""), Category::General);
}
