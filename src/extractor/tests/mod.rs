use std::fs;
use std::time::Duration;
use wiremock::{
    Mock, MockServer, Request, ResponseTemplate,
    matchers::{method, path},
};

use crate::extractor::{
    ExtractionOutcome, extract_article_text,
    model::{EMPTY_TEXT, FETCH_FAILED_TEXT, MAX_TEXT_CHARS, NO_URL_TEXT},
};
use crate::fetcher::{ArticleFetcher, BROWSER_USER_AGENT};

async fn serve_html(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(html.into_bytes())
                .insert_header("Content-Type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{}", name))
        .expect("Failed to read test fixture")
}

#[tokio::test]
async fn test_extract_article() {
    let server = MockServer::start().await;
    serve_html(&server, "/article", fixture("article.html")).await;

    let fetcher = ArticleFetcher::new().unwrap();
    let url = format!("{}/article", server.uri());
    let extracted = extract_article_text(&fetcher, Some(&url)).await;

    assert_eq!(extracted.outcome(), ExtractionOutcome::Extracted);
    let lines: Vec<&str> = extracted.as_str().lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "By Jane Reporter");
    assert!(lines[1].contains("first paragraph"));
    assert!(lines[2].contains("adds three new bus"));
    assert!(!extracted.as_str().contains("newsletter"));
    assert!(!extracted.as_str().contains("tracking"));
    assert!(extracted.as_str().ends_with('\n'));
}

#[tokio::test]
async fn test_extract_blog_without_article_container() {
    let server = MockServer::start().await;
    serve_html(&server, "/post", fixture("blog.html")).await;

    let fetcher = ArticleFetcher::new().unwrap();
    let url = format!("{}/post", server.uri());
    let extracted = extract_article_text(&fetcher, Some(&url)).await;

    assert_eq!(
        extracted.as_str(),
        "Building better software starts with small, well-tested changes.\n\
         Key Principles include clear ownership, fast feedback and honest estimates.\n\
         Teams that ship often learn faster.\n"
    );
}

#[tokio::test]
async fn test_page_without_paragraphs_uses_placeholder() {
    let server = MockServer::start().await;
    serve_html(&server, "/empty", fixture("empty.html")).await;

    let fetcher = ArticleFetcher::new().unwrap();
    let url = format!("{}/empty", server.uri());
    let extracted = extract_article_text(&fetcher, Some(&url)).await;

    assert_eq!(extracted.as_str(), EMPTY_TEXT);
    assert_eq!(extracted.outcome(), ExtractionOutcome::Empty);
}

#[tokio::test]
async fn test_long_article_is_capped() {
    let server = MockServer::start().await;
    let html = format!(
        "<html><body><article>{}</article></body></html>",
        "<p>Lorem ipsum dolor sit amet, consectetur adipiscing elit.</p>".repeat(400)
    );
    serve_html(&server, "/long", html).await;

    let fetcher = ArticleFetcher::new().unwrap();
    let url = format!("{}/long", server.uri());
    let extracted = extract_article_text(&fetcher, Some(&url)).await;

    assert_eq!(extracted.as_str().chars().count(), MAX_TEXT_CHARS);
}

#[tokio::test]
async fn test_sends_browser_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ua"))
        .and(|request: &Request| {
            request
                .headers
                .get("user-agent")
                .and_then(|value| value.to_str().ok())
                == Some(BROWSER_USER_AGENT)
        })
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<p>served to browsers only</p>", "text/html"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = ArticleFetcher::new().unwrap();
    let url = format!("{}/ua", server.uri());
    let extracted = extract_article_text(&fetcher, Some(&url)).await;

    assert_eq!(extracted.as_str(), "served to browsers only\n");
}

#[tokio::test]
async fn test_stray_byte_does_not_discard_article() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cafe"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            &b"<article><p>The council approved the plan.</p><p>Caf\xe9 opens Monday.</p></article>"[..],
            "text/html; charset=utf-8",
        ))
        .mount(&server)
        .await;

    let fetcher = ArticleFetcher::new().unwrap();
    let url = format!("{}/cafe", server.uri());
    let extracted = extract_article_text(&fetcher, Some(&url)).await;

    assert_eq!(extracted.outcome(), ExtractionOutcome::Extracted);
    assert_eq!(
        extracted.as_str(),
        "The council approved the plan.\nCaf\u{FFFD} opens Monday.\n"
    );
}

#[tokio::test]
async fn test_missing_or_blank_url_uses_placeholder() {
    let fetcher = ArticleFetcher::new().unwrap();

    let extracted = extract_article_text(&fetcher, None).await;
    assert_eq!(extracted.as_str(), NO_URL_TEXT);
    assert_eq!(extracted.outcome(), ExtractionOutcome::NoUrl);

    let extracted = extract_article_text(&fetcher, Some("   ")).await;
    assert_eq!(extracted.outcome(), ExtractionOutcome::NoUrl);
}

#[tokio::test]
async fn test_http_error_is_absorbed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = ArticleFetcher::new().unwrap();
    let url = format!("{}/gone", server.uri());
    let extracted = extract_article_text(&fetcher, Some(&url)).await;

    assert_eq!(extracted.as_str(), FETCH_FAILED_TEXT);
    assert_eq!(extracted.outcome(), ExtractionOutcome::Failed);
}

#[tokio::test]
async fn test_timeout_is_absorbed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<p>too late</p>", "text/html")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let fetcher = ArticleFetcher::with_timeout(Duration::from_millis(200)).unwrap();
    let url = format!("{}/slow", server.uri());
    let extracted = extract_article_text(&fetcher, Some(&url)).await;

    assert_eq!(extracted.as_str(), FETCH_FAILED_TEXT);
}

#[tokio::test]
async fn test_malformed_url_is_absorbed() {
    let fetcher = ArticleFetcher::new().unwrap();
    let extracted = extract_article_text(&fetcher, Some("not a url")).await;
    assert_eq!(extracted.as_str(), FETCH_FAILED_TEXT);
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use crate::extractor::{ExtractedText, reader::extract_text};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*") {
            let _ = extract_text(&html);
        }

        #[test]
        fn test_extracted_text_is_bounded_and_non_empty(html in ".*") {
            let extracted = ExtractedText::from_raw(&extract_text(&html));
            prop_assert!(!extracted.as_str().is_empty());
            prop_assert!(extracted.as_str().chars().count() <= crate::extractor::model::MAX_TEXT_CHARS);
        }
    }
}
