//! End-to-end scrape tests
//!
//! These tests use wiremock to create mock HTTP servers and run whole
//! batches through the scraper.

use parasync_scraper::crawler::FailureKind;
use parasync_scraper::{Scraper, ScraperConfig};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with the given worker and retry counts
fn create_test_config(max_workers: usize, max_retries: u32) -> ScraperConfig {
    ScraperConfig {
        max_workers,
        timeout: Duration::from_secs(2),
        max_retries,
        user_agent: "TestScraper/1.0".to_string(),
    }
}

fn html_page(title: &str, description: &str, headings: &[&str]) -> String {
    let h1s: String = headings.iter().map(|h| format!("<h1>{}</h1>", h)).collect();
    format!(
        r#"<html><head><title>{}</title><meta name="description" content="{}"></head><body>{}</body></html>"#,
        title, description, h1s
    )
}

async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_scrape_extracts_page_summary() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", html_page("Foo", "Bar", &["A", "B"])).await;

    let scraper = Scraper::new(create_test_config(2, 0)).expect("Failed to create scraper");
    let url = format!("{}/", mock_server.uri());
    let results = scraper.scrape(vec![url.clone()]).await.expect("Scrape failed");

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.url, url);
    assert_eq!(result.title, "Foo");
    assert_eq!(result.description, "Bar");
    assert_eq!(result.headings, vec!["A".to_string(), "B".to_string()]);
    assert!(result.error.is_none());
}

#[tokio::test]
async fn test_page_without_headings_has_empty_list() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/plain",
        "<html><head><title>Plain</title></head><body><p>hi</p></body></html>".to_string(),
    )
    .await;

    let scraper = Scraper::new(create_test_config(1, 0)).unwrap();
    let results = scraper
        .scrape(vec![format!("{}/plain", mock_server.uri())])
        .await
        .unwrap();

    assert_eq!(results[0].title, "Plain");
    assert_eq!(results[0].description, "");
    assert!(results[0].headings.is_empty());
    assert!(results[0].error.is_none());
}

#[tokio::test]
async fn test_status_error_names_code() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<title>Not Found</title>"))
        .mount(&mock_server)
        .await;

    let scraper = Scraper::new(create_test_config(2, 0)).unwrap();
    let results = scraper
        .scrape(vec![format!("{}/missing", mock_server.uri())])
        .await
        .unwrap();

    let result = &results[0];
    let error = result.error.as_deref().expect("expected an error");
    assert!(error.contains("404"), "error should name the status: {}", error);
    assert_eq!(result.title, "");
    assert!(result.headings.is_empty());
}

#[tokio::test]
async fn test_non_200_success_codes_are_errors() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let scraper = Scraper::new(create_test_config(1, 0)).unwrap();
    let results = scraper
        .scrape(vec![format!("{}/empty", mock_server.uri())])
        .await
        .unwrap();

    assert!(results[0].error.as_deref().unwrap().contains("204"));
}

#[tokio::test]
async fn test_retries_until_attempts_exhausted() {
    let mock_server = MockServer::start().await;

    // One initial attempt plus two retries
    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&mock_server)
        .await;

    let scraper = Scraper::new(create_test_config(1, 2)).unwrap();
    let results = scraper
        .scrape(vec![format!("{}/flaky", mock_server.uri())])
        .await
        .unwrap();

    assert!(results[0].error.as_deref().unwrap().contains("500"));
    // Wiremock verifies the expected call count when mock_server drops
}

#[tokio::test]
async fn test_retry_recovers_after_transient_failure() {
    let mock_server = MockServer::start().await;

    // First request fails, every later one succeeds
    Mock::given(method("GET"))
        .and(path("/recovering"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/recovering", html_page("Back", "Up", &["Ok"])).await;

    let scraper = Scraper::new(create_test_config(1, 1)).unwrap();
    let results = scraper
        .scrape(vec![format!("{}/recovering", mock_server.uri())])
        .await
        .unwrap();

    assert!(results[0].error.is_none());
    assert_eq!(results[0].title, "Back");
}

#[tokio::test]
async fn test_zero_retries_makes_single_attempt() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/once"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let scraper = Scraper::new(create_test_config(1, 0)).unwrap();
    let results = scraper
        .scrape(vec![format!("{}/once", mock_server.uri())])
        .await
        .unwrap();

    assert!(results[0].error.is_some());
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html_page("Slow", "", &[]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let scraper = Scraper::new(create_test_config(1, 0)).unwrap();
    let results = scraper
        .scrape(vec![format!("{}/slow", mock_server.uri())])
        .await
        .unwrap();

    let error = results[0].error.as_deref().expect("expected a timeout");
    assert!(error.starts_with("network error"), "unexpected error: {}", error);
    assert_eq!(results[0].kind, Some(FailureKind::Network));
    assert_eq!(results[0].title, "");
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Bind then drop a listener so its port is closed
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
        listener.local_addr().expect("Failed to read address").port()
    };

    let scraper = Scraper::new(create_test_config(1, 0)).unwrap();
    let results = scraper
        .scrape(vec![format!("http://127.0.0.1:{}/", port)])
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].kind, Some(FailureKind::Network));
    assert!(results[0]
        .error
        .as_deref()
        .unwrap()
        .starts_with("network error"));
    assert_eq!(results[0].title, "");
    assert_eq!(results[0].description, "");
    assert!(results[0].headings.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_mixed_batch_keeps_every_url_in_order() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    for i in 0..6 {
        mount_page(
            &mock_server,
            &format!("/ok/{}", i),
            html_page(&format!("Page {}", i), "desc", &["Heading"]),
        )
        .await;
    }
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(410))
        .mount(&mock_server)
        .await;

    let mut urls: Vec<String> = (0..6).map(|i| format!("{}/ok/{}", base_url, i)).collect();
    urls.insert(2, format!("{}/gone", base_url));
    urls.insert(4, "definitely not a url".to_string());
    urls.push(format!("{}/unmocked", base_url));

    let scraper = Scraper::new(create_test_config(3, 0)).unwrap();
    let results = scraper.scrape(urls.clone()).await.unwrap();

    assert_eq!(results.len(), urls.len());
    for (result, url) in results.iter().zip(&urls) {
        assert_eq!(&result.url, url);
    }

    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();
    assert_eq!(failed.len(), 3);
    assert!(results[2].error.as_deref().unwrap().contains("410"));
    assert!(results[4].error.as_deref().unwrap().starts_with("invalid URL"));
    assert!(results[8].error.as_deref().unwrap().contains("404"));

    for result in results.iter().filter(|r| r.error.is_none()) {
        assert!(result.title.starts_with("Page "));
        assert_eq!(result.headings, vec!["Heading".to_string()]);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_large_batch_with_slow_pages() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html_page("Same", "", &[]))
                .set_delay(Duration::from_millis(20)),
        )
        .expect(50)
        .mount(&mock_server)
        .await;

    let urls: Vec<String> = (0..50)
        .map(|i| format!("{}/page/{}", mock_server.uri(), i))
        .collect();

    let scraper = Scraper::new(create_test_config(8, 0)).unwrap();
    let results = scraper.scrape(urls).await.unwrap();

    assert_eq!(results.len(), 50);
    assert!(results.iter().all(|r| r.error.is_none() && r.title == "Same"));
}

#[tokio::test]
async fn test_zero_urls_returns_empty() {
    let scraper = Scraper::new(create_test_config(4, 3)).unwrap();
    let results = tokio::time::timeout(Duration::from_secs(1), scraper.scrape(Vec::new()))
        .await
        .expect("empty batch must not block")
        .unwrap();

    assert!(results.is_empty());
}

#[test]
fn test_invalid_worker_count_rejected_at_construction() {
    assert!(Scraper::new(create_test_config(0, 0)).is_err());
}
