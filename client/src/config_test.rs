use super::*;

#[test]
fn missing_url_uses_default() {
    assert_eq!(ClientConfig::from_api_url(None).api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn blank_url_uses_default() {
    assert_eq!(ClientConfig::from_api_url(Some("   ")).api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn url_is_trimmed_of_whitespace_and_trailing_slashes() {
    assert_eq!(
        ClientConfig::from_api_url(Some(" http://localhost:5000/api// ")).api_base_url,
        "http://localhost:5000/api"
    );
}

#[test]
fn default_url_has_no_trailing_slash() {
    assert!(!DEFAULT_API_BASE_URL.ends_with('/'));
}
