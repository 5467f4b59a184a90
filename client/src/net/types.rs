//! Shared wire DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! Field names follow the remote API's camelCase JSON. Record identifiers
//! arrive as Mongo-style `_id` strings and are renamed to `id` here so the rest
//! of the client never sees the storage convention.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Access role carried by the signed-in user.
///
/// Closed set: a stored or received role outside it fails to decode instead of
/// silently falling through to a lesser privilege.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular donor. Older API builds report this role as `"user"`.
    #[serde(alias = "user")]
    Donor,
    Admin,
}

impl Role {
    /// Display label used in the navbar badge.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Donor => "Donor",
            Self::Admin => "Administrator",
        }
    }
}

/// User descriptor returned by login and persisted alongside the credential.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// `POST /auth/login` request body.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` response body.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: Subject,
}

/// `POST /auth/register` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub admin_code: String,
}

/// Standard `{ "data": ... }` envelope wrapping most API payloads.
#[derive(Clone, Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Error body the API attaches to non-2xx responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// A fundraising campaign.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub goal_amount: f64,
    #[serde(default)]
    pub raised_amount: f64,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub default_category: Option<Category>,
}

/// `POST /campaigns/create` request body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    pub title: String,
    pub goal_amount: f64,
    pub description: String,
    pub deadline: String,
    pub default_category: Category,
}

/// Review state of a donation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DonationStatus {
    #[default]
    Pending,
    Verified,
    /// Any status this client does not know how to act on.
    #[serde(other)]
    Other,
}

impl DonationStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Verified => "Verified",
            Self::Other => "Unknown",
        }
    }
}

/// Religious/charitable classification chosen on the donation form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DonationKind {
    #[default]
    Zakat,
    Sadqah,
    Fitra,
    General,
}

impl DonationKind {
    pub const ALL: [Self; 4] = [Self::Zakat, Self::Sadqah, Self::Fitra, Self::General];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Zakat => "Zakat",
            Self::Sadqah => "Sadqah",
            Self::Fitra => "Fitra",
            Self::General => "General",
        }
    }
}

/// How the donor intends to pay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    Online,
    Transfer,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [Self; 3] = [Self::Online, Self::Transfer, Self::Cash];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "Card",
            Self::Transfer => "Bank transfer",
            Self::Cash => "Cash",
        }
    }
}

/// Spending category for a donation or a campaign's default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[default]
    General,
    Food,
    Education,
    Medical,
    Meal,
}

impl Category {
    pub const ALL: [Self; 5] = [Self::General, Self::Food, Self::Education, Self::Medical, Self::Meal];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Food => "Food",
            Self::Education => "Education",
            Self::Medical => "Medical",
            Self::Meal => "Meal",
        }
    }

    /// Parse a `<select>` value; unknown values map to `General`.
    #[must_use]
    pub fn from_form_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == value)
            .unwrap_or_default()
    }
}

/// Donor as embedded in admin donation listings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorSummary {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Campaign reference on a donation: either a bare id or a populated summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CampaignRef {
    Id(String),
    Summary {
        #[serde(rename = "_id", default)]
        id: Option<String>,
        #[serde(default)]
        title: String,
    },
}

impl CampaignRef {
    /// Title when the API populated the campaign, else `None`.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Summary { title, .. } => Some(title.as_str()),
        }
    }
}

/// A donation record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub amount: f64,
    #[serde(rename = "type", default)]
    pub kind: Option<DonationKind>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub status: DonationStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub donor: Option<DonorSummary>,
    #[serde(default)]
    pub campaign: Option<CampaignRef>,
}

/// `POST /donations/submit` request body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: DonationKind,
    pub category: Category,
    pub payment_method: PaymentMethod,
    pub campaign_id: Option<String>,
}

/// `PUT /admin/donations/{id}/status` request body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: DonationStatus,
}

/// Aggregate figures for the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminStats {
    pub total_donations: f64,
    pub pending_reviews: u64,
    pub total_donors: u64,
    pub avg_donation: f64,
}
