//! Provider operations over HTTP against a fake Site24x7 API and a fake
//! Zoho accounts server.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use site24x7_domain::ErrorKind;
use site24x7_provider::{Provider, ResourceData};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

struct Harness {
    api: MockServer,
    provider: Provider,
    refreshes: Arc<AtomicUsize>,
    // Keeps the accounts server alive for the whole test.
    _accounts: MockServer,
}

async fn harness() -> Harness {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let api = MockServer::start().await;
    let accounts = MockServer::start().await;
    let refreshes = Arc::new(AtomicUsize::new(0));

    let counter = refreshes.clone();
    Mock::given(method("POST"))
        .and(path("/oauth/v2/token"))
        .respond_with(move |_req: &Request| -> ResponseTemplate {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            ResponseTemplate::new(200).set_body_json(json!({
                "access_token": format!("tok-{n}"),
                "expires_in": 3600
            }))
        })
        .mount(&accounts)
        .await;

    let Value::Object(block) = json!({
        "oauth2_client_id": "1000.CLIENT",
        "oauth2_client_secret": "secret",
        "oauth2_refresh_token": "1000.refresh",
        "data_center": "US",
        "api_base_url": format!("{}/api", api.uri()),
        "accounts_base_url": accounts.uri(),
        "retry_max_attempts": 3,
        "retry_base_ms": 10,
        "retry_max_ms": 50
    }) else {
        unreachable!()
    };
    let provider = Provider::configure(&block).unwrap();

    Harness { api, provider, refreshes, _accounts: accounts }
}

fn website(id: &str) -> Value {
    json!({
        "monitor_id": id,
        "display_name": "home",
        "type": "URL",
        "website": "https://example.com",
        "check_frequency": "5",
        "timeout": 10,
        "http_method": "G"
    })
}

#[tokio::test]
async fn create_monitor_group_posts_exact_body() {
    let h = harness().await;
    Mock::given(method("POST"))
        .and(path("/api/monitor_groups"))
        .and(header("authorization", "Zoho-oauthtoken tok-1"))
        .and(body_json(json!({"display_name": "g1", "monitors": ["m1", "m2"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "message": "success",
            "data": {"group_id": "123", "display_name": "g1", "monitors": ["m1", "m2"]}
        })))
        .expect(1)
        .mount(&h.api)
        .await;

    let mut data = ResourceData::from_value(json!({"name": "g1", "monitors": ["m1", "m2"]}));
    h.provider.create("site24x7_monitor_group", &mut data).await.unwrap();

    assert_eq!(data.id(), "123");
}

#[tokio::test]
async fn delete_of_missing_tag_is_idempotent() {
    let h = harness().await;
    Mock::given(method("DELETE"))
        .and(path("/api/tags/abc"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error_code": 1101,
            "message": "Tag not found"
        })))
        .expect(1)
        .mount(&h.api)
        .await;

    let mut data = ResourceData::from_value(json!({"tag_name": "env"})).with_id("abc");
    h.provider.delete("site24x7_tag", &mut data).await.unwrap();

    assert!(data.is_gone());
}

#[tokio::test]
async fn expired_token_is_refreshed_once_mid_read() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/api/monitors/x"))
        .and(header("authorization", "Zoho-oauthtoken tok-1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error_code": 1,
            "message": "Invalid OAuth token"
        })))
        .expect(1)
        .mount(&h.api)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/monitors/x"))
        .and(header("authorization", "Zoho-oauthtoken tok-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0, "data": website("x")})))
        .expect(1)
        .mount(&h.api)
        .await;

    let mut data = ResourceData::from_value(json!({"display_name": "old", "website": "https://example.com"}))
        .with_id("x");
    h.provider.read("site24x7_website_monitor", &mut data).await.unwrap();

    assert_eq!(data.id(), "x");
    assert_eq!(data.string("display_name"), "home");
    assert_eq!(data.int("check_frequency"), 5);
    assert_eq!(h.refreshes.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn rate_limited_read_recovers_after_two_backoffs() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/api/monitors/x"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({"error_code": 429, "message": "Too many requests"})))
        .up_to_n_times(2)
        .expect(2)
        .mount(&h.api)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/monitors/x"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0, "data": website("x")})))
        .expect(1)
        .mount(&h.api)
        .await;

    let data = ResourceData::from_value(json!({"display_name": "home", "website": "https://example.com"}))
        .with_id("x");
    assert!(h.provider.exists("site24x7_website_monitor", &data).await.unwrap());
}

#[tokio::test]
async fn persistent_rate_limit_surfaces() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/api/monitors/x"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({"error_code": 429, "message": "Too many requests"})))
        .expect(3)
        .mount(&h.api)
        .await;

    let mut data = ResourceData::from_value(json!({"display_name": "home", "website": "https://example.com"}))
        .with_id("x");
    let err = h.provider.read("site24x7_website_monitor", &mut data).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RateLimited);
    assert_eq!(data.id(), "x");
}

#[tokio::test]
async fn operation_deadline_aborts_a_slow_call() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/api/tags/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"code": 0, "data": {"tag_id": "slow", "tag_name": "env"}}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&h.api)
        .await;

    let provider = h.provider.with_operation_timeout(Duration::from_millis(200));
    let mut data = ResourceData::from_value(json!({"tag_name": "env"})).with_id("slow");
    let err = provider.read("site24x7_tag", &mut data).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transient);
    assert_eq!(data.id(), "slow");
}

#[tokio::test]
async fn data_source_reads_location_template() {
    let h = harness().await;
    Mock::given(method("GET"))
        .and(path("/api/location_template"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {"locations": [
                {"location_id": "1", "display_name": "Dallas", "city": "Dallas", "country": "US"},
                {"location_id": "2", "display_name": "London", "city": "London", "country": "UK"}
            ]}
        })))
        .mount(&h.api)
        .await;

    let mut data = ResourceData::from_value(json!({"display_name": "london"}));
    h.provider.read_data_source("site24x7_location_template", &mut data).await.unwrap();

    assert_eq!(data.id(), "location_template");
    assert_eq!(data.values()["locations"][0]["location_id"], json!("2"));
}
