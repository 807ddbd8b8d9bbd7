//! End-to-end tests of `Site24x7ApiClient` against a fake Site24x7 API and
//! a fake Zoho accounts server.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::json;
use site24x7_core::Site24x7Client;
use site24x7_domain::{Credentials, DataCenter, ErrorKind, ProviderConfig, RetrySettings, Tag};
use site24x7_infra::Site24x7ApiClient;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

struct Harness {
    api: MockServer,
    accounts: MockServer,
    client: Site24x7ApiClient,
    refreshes: Arc<AtomicUsize>,
}

/// Accounts server minting `tok-1`, `tok-2`, ... on every refresh.
async fn harness() -> Harness {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let api = MockServer::start().await;
    let accounts = MockServer::start().await;
    let refreshes = Arc::new(AtomicUsize::new(0));

    let counter = refreshes.clone();
    Mock::given(method("POST"))
        .and(path("/oauth/v2/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=1000.refresh"))
        .respond_with(move |_req: &Request| -> ResponseTemplate {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            ResponseTemplate::new(200).set_body_json(json!({
                "access_token": format!("tok-{n}"),
                "expires_in": 3600,
                "token_type": "Bearer"
            }))
        })
        .mount(&accounts)
        .await;

    let mut config =
        ProviderConfig::new(Credentials::new("1000.CLIENT", "secret", "1000.refresh"), DataCenter::US);
    config.api_base_url = Some(format!("{}/api", api.uri()));
    config.accounts_base_url = Some(accounts.uri());
    config.retry = RetrySettings { max_attempts: 3, base_ms: 10, max_ms: 50 };

    let client = Site24x7ApiClient::new(&config).expect("client");
    Harness { api, accounts, client, refreshes }
}

#[tokio::test]
async fn token_is_minted_lazily_and_reused() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .and(header("authorization", "Zoho-oauthtoken tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(2)
        .mount(&h.api)
        .await;

    assert_eq!(h.refreshes.load(Ordering::SeqCst), 0);
    h.client.tags().list().await.unwrap();
    h.client.tags().list().await.unwrap();
    assert_eq!(h.refreshes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn expired_token_mid_call_refreshes_once() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/api/monitors/X"))
        .and(header("authorization", "Zoho-oauthtoken tok-1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error_code": 1, "message": "Invalid OAuth token"})))
        .expect(1)
        .mount(&h.api)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/monitors/X"))
        .and(header("authorization", "Zoho-oauthtoken tok-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"monitor_id": "X", "display_name": "site", "type": "URL", "website": "https://example.com"}
        })))
        .expect(1)
        .mount(&h.api)
        .await;

    let monitor = h.client.website_monitors().get("X").await.unwrap();

    assert_eq!(monitor.display_name, "site");
    assert_eq!(h.refreshes.load(Ordering::SeqCst), 2);
    assert_eq!(h.accounts.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn rate_limited_twice_then_succeeds() {
    let h = harness().await;
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(move |_req: &Request| -> ResponseTemplate {
            if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                ResponseTemplate::new(429).set_body_json(json!({"message": "Too many requests"}))
            } else {
                ResponseTemplate::new(200).set_body_json(json!({
                    "data": [{"tag_id": "1", "tag_name": "env", "tag_value": "prod", "tag_color": "#fff"}]
                }))
            }
        })
        .expect(3)
        .mount(&h.api)
        .await;

    let tags = h.client.tags().list().await.unwrap();
    assert_eq!(tags, vec![Tag {
        tag_id: "1".to_string(),
        tag_name: "env".to_string(),
        tag_value: "prod".to_string(),
        tag_color: "#fff".to_string(),
        tag_type: None,
    }]);
}

#[tokio::test]
async fn rate_limit_exhausting_budget_surfaces_rate_limited() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "0"))
        .expect(3)
        .mount(&h.api)
        .await;

    let err = h.client.tags().list().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::RateLimited);
    assert_eq!(err.http_status, Some(429));
}

#[tokio::test]
async fn deleting_a_missing_tag_reports_not_found() {
    let h = harness().await;
    Mock::given(method("DELETE"))
        .and(path("/api/tags/abc"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error_code": 1, "message": "Tag not found"})))
        .expect(1)
        .mount(&h.api)
        .await;

    let err = h.client.tags().delete("abc").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.message, "Tag not found");
}

#[tokio::test]
async fn rejected_refresh_token_is_unauthorized_without_api_traffic() {
    let api = MockServer::start().await;
    let accounts = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/v2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "invalid_code"})))
        .mount(&accounts)
        .await;

    let mut config = ProviderConfig::new(Credentials::new("id", "secret", "revoked"), DataCenter::US);
    config.api_base_url = Some(api.uri());
    config.accounts_base_url = Some(accounts.uri());
    let client = Site24x7ApiClient::new(&config).unwrap();

    let err = client.monitor_groups().list().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthorized);
    assert!(api.received_requests().await.unwrap().is_empty());
}
