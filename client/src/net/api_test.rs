use super::*;
use crate::net::types::{Role, Subject};
use crate::util::session_store::MemorySessionStore;

fn client_with_store() -> (ApiClient, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::default());
    (ApiClient::new("https://api.example.org/api", store.clone()), store)
}

// =============================================================
// URL building
// =============================================================

#[test]
fn endpoint_joins_base_and_path_with_single_slash() {
    assert_eq!(endpoint("https://h/api", "/campaigns"), "https://h/api/campaigns");
    assert_eq!(endpoint("https://h/api/", "campaigns"), "https://h/api/campaigns");
}

#[test]
fn campaign_path_formats_id() {
    assert_eq!(campaign_path("c42"), "/campaigns/c42");
}

#[test]
fn donation_status_path_formats_id() {
    assert_eq!(donation_status_path("d7"), "/admin/donations/d7/status");
}

// =============================================================
// Bearer credential
// =============================================================

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header(Some("abc")).as_deref(), Some("Bearer abc"));
}

#[test]
fn bearer_header_absent_for_missing_or_empty_token() {
    assert_eq!(bearer_header(None), None);
    assert_eq!(bearer_header(Some("")), None);
}

#[test]
fn authorization_absent_without_session() {
    let (client, _store) = client_with_store();
    assert_eq!(client.authorization(), None);
}

#[test]
fn authorization_follows_store_at_call_time() {
    let (client, store) = client_with_store();
    store.save("abc", &Subject { name: "Sam".to_owned(), role: Role::Donor, email: None });
    assert_eq!(client.authorization().as_deref(), Some("Bearer abc"));

    store.save("xyz", &Subject { name: "Ada".to_owned(), role: Role::Admin, email: None });
    assert_eq!(client.authorization().as_deref(), Some("Bearer xyz"));

    store.clear();
    assert_eq!(client.authorization(), None);
}

#[test]
fn base_url_is_kept_verbatim() {
    let (client, _store) = client_with_store();
    assert_eq!(client.base_url(), "https://api.example.org/api");
}

// =============================================================
// Off-browser stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_off_browser() {
    let (client, _store) = client_with_store();
    let result = poll_once(client.list_campaigns());
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Poll a future that completes without ever waiting.
#[cfg(not(feature = "hydrate"))]
fn poll_once<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("stub future should complete immediately"),
    }
}
