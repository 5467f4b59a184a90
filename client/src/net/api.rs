//! REST API client for the remote donation service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only called from the browser.
//!
//! AUTH
//! ====
//! The credential is read from the injected [`SessionStore`] at the moment each
//! request is built and sent as `Authorization: Bearer <token>`. With no stored
//! session the request goes out unauthenticated and the API decides.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use super::error::ApiError;
use super::types::{
    AdminStats, Campaign, Donation, DonationStatus, LoginResponse, NewCampaign, NewDonation, RegisterRequest,
};
use crate::util::session_store::SessionStore;

#[cfg(feature = "hydrate")]
use super::types::{DataEnvelope, LoginRequest, StatusUpdate};
#[cfg(feature = "hydrate")]
use gloo_net::http::{Request, RequestBuilder, Response};
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn bearer_header(credential: Option<&str>) -> Option<String> {
    credential.filter(|c| !c.is_empty()).map(|c| format!("Bearer {c}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn campaign_path(id: &str) -> String {
    format!("/campaigns/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn donation_status_path(id: &str) -> String {
    format!("/admin/donations/{id}/status")
}

/// Handle for issuing API calls; cheap to clone and shared through context.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    store: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, store: Arc<dyn SessionStore>) -> Self {
        Self { base_url: base_url.into(), store }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `Authorization` header value for the session stored right now.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        let session = self.store.read();
        bearer_header(session.as_ref().map(|s| s.credential.as_str()))
    }

    #[cfg(feature = "hydrate")]
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    #[cfg(feature = "hydrate")]
    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    /// Exchange credentials for a bearer token and user descriptor.
    ///
    /// # Errors
    ///
    /// Returns the server's message on rejected credentials, or a transport/decode error.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
            let resp = Request::post(&self.url("/auth/login")).json(&body)?.send().await?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }

    /// Create a donor (or, with a valid admin code, administrator) account.
    ///
    /// # Errors
    ///
    /// Returns the server's message when registration is refused.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = Request::post(&self.url("/auth/register")).json(request)?.send().await?;
            ensure_ok(resp).await.map(drop)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed.
    pub async fn list_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.authorize(Request::get(&self.url("/campaigns"))).send().await?;
            decode_data(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// # Errors
    ///
    /// Returns the server's message when the campaign is rejected.
    pub async fn create_campaign(&self, campaign: &NewCampaign) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .authorize(Request::post(&self.url("/campaigns/create")))
                .json(campaign)?
                .send()
                .await?;
            ensure_ok(resp).await.map(drop)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = campaign;
            Err(ApiError::Unavailable)
        }
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the API refuses the deletion.
    pub async fn delete_campaign(&self, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.authorize(Request::delete(&self.url(&campaign_path(id)))).send().await?;
            ensure_ok(resp).await.map(drop)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    /// Submit a donation, returning the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed.
    pub async fn submit_donation(&self, donation: &NewDonation) -> Result<Donation, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .authorize(Request::post(&self.url("/donations/submit")))
                .json(donation)?
                .send()
                .await?;
            decode_data(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = donation;
            Err(ApiError::Unavailable)
        }
    }

    /// Donations made by the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed.
    pub async fn my_donations(&self) -> Result<Vec<Donation>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .authorize(Request::get(&self.url("/donations/my-donations")))
                .send()
                .await?;
            decode_data(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// Every donation, with donor and campaign populated.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed.
    pub async fn admin_donations(&self) -> Result<Vec<Donation>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.authorize(Request::get(&self.url("/admin/donations"))).send().await?;
            decode_data(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed.
    pub async fn admin_stats(&self) -> Result<AdminStats, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.authorize(Request::get(&self.url("/admin/stats"))).send().await?;
            decode_data(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// Mark a donation verified or send it back to pending review.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API refuses the change.
    pub async fn update_donation_status(&self, id: &str, status: DonationStatus) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .authorize(Request::put(&self.url(&donation_status_path(id))))
                .json(&StatusUpdate { status })?
                .send()
                .await?;
            ensure_ok(resp).await.map(drop)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, status);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let err = ApiError::from_status(status, &body);
    log::warn!("{} -> {status}: {err}", resp.url());
    Err(err)
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let resp = ensure_ok(resp).await?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn decode_data<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    decode::<DataEnvelope<T>>(resp).await.map(|env| env.data)
}
