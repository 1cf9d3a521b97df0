//! Integration tests for the scrape pipeline
//!
//! These tests use wiremock to stand in for both the target site and the
//! third-party scraping API, and drive full scrapes end-to-end.

use contact_scout::config::{FallbackConfig, FetchConfig, ScoutConfig, UserAgentConfig};
use contact_scout::scrape::FixedUserAgent;
use contact_scout::{FetchMode, ScrapeOutcome, Scraper, SocialNetwork};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_PATH: &str = "/api/v1/scrape";

/// Creates a test configuration pointing the fallback at the mock server
fn create_test_config(server: &MockServer) -> ScoutConfig {
    ScoutConfig {
        fetch: FetchConfig {
            timeout_secs: 5,
            max_attempts: 2,
            retry_delay_ms: 10, // Very short for testing
        },
        fallback: FallbackConfig {
            endpoint: format!("{}{}", server.uri(), API_PATH),
            query_param: "url".to_string(),
        },
        user_agent: UserAgentConfig::default(),
    }
}

fn create_scraper(server: &MockServer) -> Scraper {
    Scraper::new(create_test_config(server))
        .with_user_agent_provider(FixedUserAgent::new("TestBot/1.0"))
}

fn contact_page() -> String {
    r#"<html>
    <head>
        <title>Acme Rockets</title>
        <meta name="description" content="Rockets for everyone">
        <link rel="icon" href="/favicon.ico">
    </head>
    <body>
        <p>Call us: 415-555-2671</p>
        <p>Write: <a href="mailto:sales@acme.io">sales@acme.io</a></p>
        <a href="https://facebook.com/acme-old">Old page</a>
        <a href="https://facebook.com/acme">Facebook</a>
        <a href="https://www.linkedin.com/company/acme">LinkedIn</a>
    </body>
    </html>"#
        .to_string()
}

fn api_response() -> serde_json::Value {
    json!({
        "status": 200,
        "body": {
            "title": "Acme (via API)",
            "meta": { "description": "Rockets, scraped remotely" },
            "favicon": "https://acme.io/favicon.ico",
            "content": "Reach hello@acme.io or 212-555-0199",
            "links": [
                "https://twitter.com/acme",
                "https://api.whatsapp.com/send?phone=14155552671"
            ]
        }
    })
}

#[tokio::test]
async fn test_primary_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contact"))
        .and(header("user-agent", "TestBot/1.0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(contact_page())
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    // The scraping API must not be touched
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(api_response()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let page_url = format!("{}/contact", mock_server.uri());
    let outcome = create_scraper(&mock_server)
        .scrape(&page_url, FetchMode::PrimaryFirst)
        .await;

    let record = outcome.record().expect("expected a success record");
    assert_eq!(record.url, page_url);
    assert_eq!(record.title.as_deref(), Some("Acme Rockets"));
    assert_eq!(record.description.as_deref(), Some("Rockets for everyone"));
    assert_eq!(
        record.favicon,
        Some(format!("{}/favicon.ico", mock_server.uri()))
    );
    assert_eq!(record.emails.len(), 1);
    assert!(record.emails.contains("sales@acme.io"));

    // Found by both the raw-body and the <p> scan, kept once
    assert_eq!(record.phone_numbers.len(), 1);
    assert!(record.phone_numbers.contains("415-555-2671"));

    assert_eq!(
        record.social_links.get(SocialNetwork::Facebook),
        Some("https://facebook.com/acme")
    );
    assert_eq!(
        record.social_links.get(SocialNetwork::Linkedin),
        Some("https://www.linkedin.com/company/acme")
    );
    assert!(record.original_response.is_none());
}

#[tokio::test]
async fn test_non_2xx_escalates_to_fallback_once() {
    let mock_server = MockServer::start().await;

    // Both attempts fail
    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&mock_server)
        .await;

    let page_url = format!("{}/contact", mock_server.uri());

    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("url", page_url.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(api_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = create_scraper(&mock_server)
        .scrape(&page_url, FetchMode::PrimaryFirst)
        .await;

    let record = outcome.record().expect("expected a success record");
    assert_eq!(record.url, page_url);
    assert_eq!(record.title.as_deref(), Some("Acme (via API)"));
    assert_eq!(
        record.description.as_deref(),
        Some("Rockets, scraped remotely")
    );
    assert!(record.emails.contains("hello@acme.io"));
    assert!(record.phone_numbers.contains("212-555-0199"));
    assert!(record.phone_numbers.contains("14155552671"));
    assert_eq!(
        record.social_links.get(SocialNetwork::Whatsapp),
        Some("https://api.whatsapp.com/send?phone=14155552671")
    );
    assert_eq!(
        record.social_links.get(SocialNetwork::Twitter),
        Some("https://twitter.com/acme")
    );
    assert_eq!(record.original_response, Some(api_response()));
}

#[tokio::test]
async fn test_retry_recovers_before_fallback() {
    let mock_server = MockServer::start().await;

    // First attempt fails, second succeeds
    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_string(contact_page()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(api_response()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let page_url = format!("{}/contact", mock_server.uri());
    let outcome = create_scraper(&mock_server)
        .scrape(&page_url, FetchMode::PrimaryFirst)
        .await;

    let record = outcome.record().expect("expected a success record");
    assert_eq!(record.title.as_deref(), Some("Acme Rockets"));
    assert!(record.original_response.is_none());
}

#[tokio::test]
async fn test_both_paths_fail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream down"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let page_url = format!("{}/contact", mock_server.uri());
    let outcome = create_scraper(&mock_server)
        .scrape(&page_url, FetchMode::PrimaryFirst)
        .await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.url(), page_url);
    assert!(outcome.emails().is_empty());
    assert!(outcome.phone_numbers().is_empty());
    assert!(outcome.social_links().is_empty());

    let error = outcome.error().expect("expected an error");
    assert!(error.contains("502"), "unexpected error: {}", error);
    assert!(error.contains("404"), "unexpected error: {}", error);

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["url"], page_url.as_str());
    assert!(json.get("emails").is_none());
}

#[tokio::test]
async fn test_forced_fallback_skips_primary() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_string(contact_page()))
        .expect(0)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(api_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let page_url = format!("{}/contact", mock_server.uri());
    let outcome = create_scraper(&mock_server)
        .scrape(&page_url, FetchMode::ForceFallback)
        .await;

    let record = outcome.record().expect("expected a success record");
    assert_eq!(record.title.as_deref(), Some("Acme (via API)"));
    assert!(record.original_response.is_some());
}

#[tokio::test]
async fn test_forced_fallback_failure_has_no_primary_cause() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = create_scraper(&mock_server)
        .scrape("acme.io", FetchMode::ForceFallback)
        .await;

    assert_eq!(outcome.url(), "https://acme.io");
    let error = outcome.error().expect("expected an error");
    assert!(error.contains("500"));
    assert!(!error.contains("direct fetch"));
}

#[tokio::test]
async fn test_scheme_less_url_is_normalized() {
    let mock_server = MockServer::start().await;

    // "127.0.0.1:PORT/contact" gets https:// prepended; the plain-HTTP mock
    // server cannot complete a TLS handshake, so the direct fetch fails and
    // the API is asked about the normalized URL.
    let input = format!(
        "{}/contact",
        mock_server.uri().trim_start_matches("http://")
    );
    let normalized = format!("https://{}", input);

    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("url", normalized.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(api_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = create_scraper(&mock_server)
        .scrape(&input, FetchMode::PrimaryFirst)
        .await;

    assert!(outcome.is_success());
    assert_eq!(outcome.url(), normalized);
}

#[tokio::test]
async fn test_malformed_api_payload_is_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = create_scraper(&mock_server)
        .scrape("acme.io", FetchMode::ForceFallback)
        .await;

    assert!(matches!(outcome, ScrapeOutcome::Failed(_)));
    assert!(outcome.error().unwrap().contains("not JSON"));
}

#[tokio::test]
async fn test_api_payload_with_wrong_shape_is_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "body": { "links": "nope" } })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = create_scraper(&mock_server)
        .scrape("acme.io", FetchMode::ForceFallback)
        .await;

    assert!(outcome.error().unwrap().contains("unexpected response shape"));
}

#[tokio::test]
async fn test_timeout_escalates_to_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(contact_page())
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(api_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(&mock_server);
    config.fetch.timeout_secs = 1;
    config.fetch.max_attempts = 1;
    let scraper = Scraper::new(config);

    let page_url = format!("{}/slow", mock_server.uri());
    let outcome = scraper.scrape(&page_url, FetchMode::PrimaryFirst).await;

    assert!(outcome.original_response().is_some());
}

#[tokio::test]
async fn test_concurrent_scrapes_are_independent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_string(contact_page()))
        .expect(4)
        .mount(&mock_server)
        .await;

    let scraper = create_scraper(&mock_server);
    let page_url = format!("{}/contact", mock_server.uri());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let scraper = scraper.clone();
            let page_url = page_url.clone();
            tokio::spawn(async move { scraper.scrape(&page_url, FetchMode::PrimaryFirst).await })
        })
        .collect();

    for handle in handles {
        let outcome = handle.await.expect("task panicked");
        assert!(outcome.is_success());
        assert!(outcome.original_response().is_none());
    }
}
