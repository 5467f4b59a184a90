//! Build-time client configuration.
//!
//! The hydrated bundle cannot read process environment at runtime, so the API
//! location is baked in when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API base URL used when `DONATIONHUB_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "https://donation-backend-neon.vercel.app/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    /// Configuration from the compile-time environment.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_api_url(option_env!("DONATIONHUB_API_URL"))
    }

    /// Normalize an optional base URL: surrounding whitespace and trailing
    /// slashes are trimmed; blank falls back to [`DEFAULT_API_BASE_URL`].
    #[must_use]
    pub fn from_api_url(raw: Option<&str>) -> Self {
        let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self { api_base_url: api_base_url.to_owned() }
    }
}
