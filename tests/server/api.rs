use crate::helpers::{gutendex_book, gutendex_page, mount_ncert_dataset, spawn_app};
use bookfinder::application::errors::ErrorResponse;
use bookfinder::domain::{BookSource, UnifiedBookRecord};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn lists_unified_gutenberg_records() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    Mock::given(method("GET"))
        .and(path("/books/"))
        .and(query_param("search", "austen"))
        .and(query_param("sort", "-id"))
        .respond_with(gutendex_page(vec![gutendex_book(
            158,
            "Emma",
            Some("Austen, Jane"),
            json!({
                "text/plain; charset=us-ascii": "https://www.gutenberg.org/ebooks/158.txt.utf-8",
                "application/pdf": "https://www.gutenberg.org/ebooks/158.pdf",
                "image/png": "https://www.gutenberg.org/cache/epub/158/pg158.cover.png"
            }),
        )]))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    let response = client
        .get(app.api_url("/books?source=gutenberg&q=austen&sort=descending"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    let records: Vec<UnifiedBookRecord> = response.json().await.unwrap();
    assert_eq!(records.len(), 1);

    let emma = &records[0];
    assert_eq!(emma.source, BookSource::Gutenberg);
    assert_eq!(emma.title, "Emma");
    assert_eq!(emma.download_label, "Download PDF");
    assert_eq!(
        emma.download_link.as_deref(),
        Some("https://www.gutenberg.org/ebooks/158.pdf")
    );
    assert_eq!(
        emma.cover_url,
        "https://www.gutenberg.org/cache/epub/158/pg158.cover.png"
    );
    assert_eq!(emma.view_link, "https://www.gutenberg.org/ebooks/158");
}

#[tokio::test]
async fn lists_ncert_records_in_class_order() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    mount_ncert_dataset(&app).await;

    let records: Vec<UnifiedBookRecord> = client
        .get(app.api_url("/books?source=ncert&q=MATH"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();

    let ids: Vec<String> = records.iter().map(|r| r.id.to_string()).collect();
    assert_eq!(ids, vec!["gemh2", "gemh1", "iemh1", "jemh1"]);
    assert!(records.iter().all(|r| r.source == BookSource::Ncert));
}

#[tokio::test]
async fn ncert_popular_sort_is_passed_through() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();
    mount_ncert_dataset(&app).await;

    let records: Vec<UnifiedBookRecord> = client
        .get(app.api_url("/books?source=ncert&q=math&sort=popular"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();

    let ids: Vec<String> = records.iter().map(|r| r.id.to_string()).collect();
    assert_eq!(ids, vec!["jemh1", "iemh1", "gemh1", "gemh2"]);
}

#[tokio::test]
async fn upstream_error_maps_to_bad_gateway() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    Mock::given(method("GET"))
        .and(path("/books/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.mock_server)
        .await;

    let response = client
        .get(app.api_url("/books?q=tolstoy"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 502);
    let error: ErrorResponse = response.json().await.unwrap();
    assert_eq!(error.message, "HTTP error! status: 500");
}

#[tokio::test]
async fn malformed_payload_maps_to_bad_gateway() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    Mock::given(method("GET"))
        .and(path("/books/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&app.mock_server)
        .await;

    let response = client
        .get(app.api_url("/books?q=tolstoy"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 502);
    let error: ErrorResponse = response.json().await.unwrap();
    assert!(error.message.starts_with("malformed catalog payload"));
}

#[tokio::test]
async fn unknown_source_is_bad_request() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.api_url("/books?source=library-of-alexandria"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 400);
    let error: ErrorResponse = response.json().await.unwrap();
    assert!(error.message.contains("library-of-alexandria"));
}
