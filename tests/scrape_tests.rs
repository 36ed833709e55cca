use page_scrape::config::DEFAULT_USER_AGENT;
use page_scrape::{PageExtractor, ScrapeError, Status};
use std::net::TcpListener;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title> Mock Page </title>
    <meta name="description" content="A page served by the mock server">
    <meta property="og:image" content="/og.png">
    <link rel="icon" href="/favicon.ico">
</head>
<body>
    <header><a href="/header-only">Header only</a></header>
    <div class="menu">
        <a href="/about">About</a>
        <a href="docs/intro">Intro</a>
    </div>
    <main>
        <h1>Welcome</h1>
        <p>This paragraph is comfortably longer than twenty characters.</p>
        <a href="/relative">Relative link</a>
        <img src="/hero.png" alt="Hero">
    </main>
</body>
</html>"#;

fn html_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/html; charset=utf-8")
        .set_body_string(body)
}

#[tokio::test]
async fn test_scrape_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let base = server.uri();
    let result = PageExtractor::new().scrape(&base).await;

    assert_eq!(result.status, Status::Success);
    assert_eq!(result.url.as_deref(), Some(base.as_str()));
    assert!(result.error.is_none());

    let metadata = result.metadata.unwrap();
    assert_eq!(metadata.title, "Mock Page");
    assert_eq!(metadata.description, "A page served by the mock server");
    assert_eq!(metadata.og_image, "/og.png");
    assert_eq!(metadata.favicon, format!("{}/favicon.ico", base));
    assert_eq!(metadata.domain, base.trim_start_matches("http://"));

    let content = result.content.unwrap();
    assert_eq!(content.headings.len(), 1);
    assert_eq!(content.headings[0].text, "Welcome");
    assert_eq!(content.paragraphs.len(), 1);
    // Plain content links stay as written, header links are gone
    let hrefs = content.links.iter().map(|l| l.href.as_str()).collect::<Vec<_>>();
    assert_eq!(hrefs, vec!["/about", "docs/intro", "/relative"]);
    assert_eq!(content.images[0].src, "/hero.png");
    assert_eq!(
        content.text_content,
        "Welcome This paragraph is comfortably longer than twenty characters. Relative link"
    );

    let navigation = result.navigation.unwrap();
    let nav_hrefs = navigation.iter().map(|n| n.href.clone()).collect::<Vec<_>>();
    assert_eq!(
        nav_hrefs,
        vec![format!("{}/about", base), format!("{}/docs/intro", base)]
    );
}

/// User-Agent of the single request the server received
async fn received_user_agent(server: &MockServer) -> String {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests[0]
        .headers
        .get("user-agent")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_sends_browser_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(html_response("<html><head><title>UA</title></head></html>"))
        .mount(&server)
        .await;

    let result = PageExtractor::new().scrape(&server.uri()).await;

    assert_eq!(result.status, Status::Success);
    assert_eq!(result.metadata.unwrap().title, "UA");
    assert_eq!(received_user_agent(&server).await, DEFAULT_USER_AGENT);
}

#[tokio::test]
async fn test_custom_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(html_response("<html></html>"))
        .mount(&server)
        .await;

    let result = PageExtractor::new()
        .with_user_agent("custom-agent/1.0")
        .scrape(&server.uri())
        .await;

    assert!(result.is_success());
    assert_eq!(received_user_agent(&server).await, "custom-agent/1.0");
}

#[tokio::test]
async fn test_http_error_status_is_error_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/missing", server.uri());
    let result = PageExtractor::new().scrape(&url).await;

    assert_eq!(result.status, Status::Error);
    assert_eq!(result.url.as_deref(), Some(url.as_str()));
    assert!(result.error.as_deref().unwrap().contains("404"));

    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("metadata").is_none());
    assert!(json.get("content").is_none());
    assert!(json.get("navigation").is_none());
    assert!(json["scraped_at"].is_f64());
}

#[tokio::test]
async fn test_server_error_propagates_from_try_scrape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = PageExtractor::new()
        .try_scrape(&server.uri())
        .await
        .unwrap_err();

    match err {
        ScrapeError::Status { status, .. } => assert_eq!(status.as_u16(), 503),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_redirect_is_followed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/new"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(html_response("<html><head><title>Moved</title></head></html>"))
        .mount(&server)
        .await;

    let result = PageExtractor::new()
        .scrape(&format!("{}/old", server.uri()))
        .await;

    assert!(result.is_success());
    assert_eq!(result.metadata.unwrap().title, "Moved");
}

#[tokio::test]
async fn test_timeout_is_error_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(html_response("<html></html>").set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let result = PageExtractor::new()
        .with_timeout(1)
        .scrape(&server.uri())
        .await;

    assert_eq!(result.status, Status::Error);
    assert!(result.error.is_some());
    assert!(result.content.is_none());
}

#[tokio::test]
async fn test_connection_refused_is_error_result() {
    // Reserve a free port, then release it so nothing is listening there
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let url = format!("http://127.0.0.1:{}", port);

    let result = PageExtractor::new().with_timeout(5).scrape(&url).await;

    assert_eq!(result.status, Status::Error);
    assert_eq!(result.url.as_deref(), Some(url.as_str()));
    assert!(!result.error.unwrap().is_empty());
    assert!(result.metadata.is_none());
    assert!(result.navigation.is_none());
}

#[tokio::test]
async fn test_charset_declared_in_markup() {
    let server = MockServer::start().await;
    let body = b"<html><head><meta charset=\"iso-8859-1\"><title>Caf\xE9</title></head>\
        <body><main><p>Cr\xE8me br\xFBl\xE9e for everyone today</p></main></body></html>";
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_vec(), "text/html"))
        .mount(&server)
        .await;

    let result = PageExtractor::new().scrape(&server.uri()).await;

    assert!(result.is_success());
    assert_eq!(result.metadata.unwrap().title, "Caf\u{e9}");
    assert_eq!(
        result.content.unwrap().paragraphs,
        vec!["Cr\u{e8}me br\u{fb}l\u{e9}e for everyone today".to_string()]
    );
}

#[tokio::test]
async fn test_header_charset_used_for_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(b"<title>Gr\xFC\xDFe</title>".to_vec(), "text/html; charset=windows-1252"),
        )
        .mount(&server)
        .await;

    let result = PageExtractor::new().scrape(&server.uri()).await;

    assert_eq!(result.metadata.unwrap().title, "Gr\u{fc}\u{df}e");
}
