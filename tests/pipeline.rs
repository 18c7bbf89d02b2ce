use proxy_scraper::{crawler, ScrapeError, ScraperConfig};

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = r#"<html><body>
    <a href="/x">one</a>
    <a href="https://y">two</a>
    <a href="">three</a>
</body></html>"#;

#[tokio::test]
async fn scrapes_links_through_the_selected_proxy() {
    let proxy_server = MockServer::start().await;
    let list_server = MockServer::start().await;

    // A single bare host:port candidate, no trailing newline, so the
    // selection is independent of the seed.
    Mock::given(method("GET"))
        .and(path("/list"))
        .respond_with(ResponseTemplate::new(200).set_body_string(proxy_server.address().to_string()))
        .mount(&list_server)
        .await;

    // The proxy end relays the absolute-form request for the target page.
    // Header matchers double as assertions on the presented identity.
    Mock::given(method("GET"))
        .and(header("user-agent", "test-agent"))
        .and(header("referer", "http://fixture.test/"))
        .and(header("accept-language", "en-US,en;q=0.9"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&proxy_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.txt");

    let config = ScraperConfig::builder()
        .proxy_source(format!("{}/list", list_server.uri()))
        .target_url("http://fixture.test/")
        .output_path(&output)
        .user_agents(vec!["test-agent"])
        .referer("http://fixture.test/")
        .delay(Duration::from_millis(10))
        .random_delay(Duration::from_millis(5))
        .request_timeout(Duration::from_secs(5))
        .build();

    let mut rng = StdRng::seed_from_u64(1);
    let report = crawler::run(&config, &mut rng).await.unwrap();

    assert_eq!(report.proxy_count, 1);
    assert_eq!(report.links_written, 3);

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, "/x\nhttps://y\n\n");
}

#[tokio::test]
async fn list_failure_stops_before_the_target_is_touched() {
    let target_server = MockServer::start().await;
    let list_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&list_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&target_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.txt");

    let config = ScraperConfig::builder()
        .proxy_source(format!("{}/list", list_server.uri()))
        .target_url(target_server.uri())
        .output_path(&output)
        .request_timeout(Duration::from_secs(5))
        .build();

    let mut rng = StdRng::seed_from_u64(1);
    let err = crawler::run(&config, &mut rng).await.unwrap_err();
    assert!(matches!(err, ScrapeError::Transport(_)));

    // The output file is created before the list fetch, so it exists but
    // holds zero link lines.
    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.is_empty());
}

#[tokio::test]
async fn blank_list_body_yields_an_unusable_candidate() {
    let list_server = MockServer::start().await;

    // Splitting an empty body produces one empty candidate, which survives
    // selection and then fails when the client is configured with it.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&list_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.txt");

    let config = ScraperConfig::builder()
        .proxy_source(list_server.uri())
        .target_url("http://fixture.test/")
        .output_path(&output)
        .request_timeout(Duration::from_secs(5))
        .build();

    let mut rng = StdRng::seed_from_u64(1);
    let err = crawler::run(&config, &mut rng).await.unwrap_err();
    assert!(matches!(err, ScrapeError::Transport(_)));
}
