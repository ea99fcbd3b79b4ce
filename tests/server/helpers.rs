use bookfinder::application::routes::app_router;
use bookfinder::application::state::{AppState, AppStateConfig};
use bookfinder::infrastructure::http::build_client;
use bookfinder::infrastructure::sources::CatalogLocation;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::AbortHandle;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const NCERT_PATH: &str = "/ncert_books.json";

pub struct TestApp {
    pub address: String,
    /// Stands in for both Gutendex and the host of the NCERT dataset.
    pub mock_server: MockServer,
    server_handle: AbortHandle,
}

impl TestApp {
    pub fn page_url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.address, path)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server_handle.abort();
    }
}

/// App whose NCERT dataset is fetched over HTTP from the mock server.
pub async fn spawn_app() -> TestApp {
    let mock_server = MockServer::start().await;
    let location = CatalogLocation::Url(format!("{}{NCERT_PATH}", mock_server.uri()));
    spawn_app_with_location(mock_server, location).await
}

/// App whose NCERT dataset is read from disk (and served at `/ncert_books.json`).
pub async fn spawn_app_with_file(path: std::path::PathBuf) -> TestApp {
    let mock_server = MockServer::start().await;
    spawn_app_with_location(mock_server, CatalogLocation::File(path)).await
}

async fn spawn_app_with_location(mock_server: MockServer, ncert_location: CatalogLocation) -> TestApp {
    let state = AppState::from_config(AppStateConfig {
        http_client: build_client().expect("Failed to build HTTP client"),
        gutenberg_url: mock_server.uri(),
        ncert_location,
    });

    let app = app_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let local_addr = listener.local_addr().expect("Failed to get local address");
    let address = format!("http://{local_addr}");

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Server failed to start");
    })
    .abort_handle();

    TestApp {
        address,
        mock_server,
        server_handle,
    }
}

pub fn gutendex_book(id: u64, title: &str, author: Option<&str>, formats: Value) -> Value {
    let authors = match author {
        Some(name) => json!([{ "name": name, "birth_year": null, "death_year": null }]),
        None => json!([]),
    };
    json!({
        "id": id,
        "title": title,
        "authors": authors,
        "languages": ["en"],
        "download_count": 1000,
        "formats": formats
    })
}

pub fn gutendex_page(results: Vec<Value>) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "count": results.len(),
        "next": null,
        "previous": null,
        "results": results
    }))
}

pub fn ncert_dataset() -> Value {
    json!([
        {"id": "iemh1", "title": "Mathematics", "class": "Class 9", "subject": "Maths",
         "html_link": "https://ncert.nic.in/textbook.php?iemh1=0-15",
         "epub_link": "https://ncert.nic.in/textbook/epub/iemh1.epub"},
        {"id": "gemh1", "title": "Mathematics", "class": "Class 7", "subject": "Maths",
         "cover_url": "https://ncert.nic.in/textbook/covers/gemh1.jpg",
         "html_link": "https://ncert.nic.in/textbook.php?gemh1=0-15",
         "epub_link": "https://ncert.nic.in/textbook/epub/gemh1.epub"},
        {"id": "jemh1", "title": "Mathematics", "class": "Class 10", "subject": "Maths",
         "html_link": "https://ncert.nic.in/textbook.php?jemh1=0-15",
         "epub_link": "https://ncert.nic.in/textbook/epub/jemh1.epub"},
        {"id": "gemh2", "title": "Ganita Prakash", "class": "Class 7", "subject": "MATHS",
         "html_link": "https://ncert.nic.in/textbook.php?gemh2=0-8",
         "epub_link": "https://ncert.nic.in/textbook/epub/gemh2.epub"},
        {"id": "gehc1", "title": "Honeycomb", "class": "Class 7", "subject": "English",
         "html_link": "https://ncert.nic.in/textbook.php?gehc1=0-10",
         "epub_link": "https://ncert.nic.in/textbook/epub/gehc1.epub"}
    ])
}

pub async fn mount_ncert_dataset(app: &TestApp) {
    Mock::given(method("GET"))
        .and(path(NCERT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(ncert_dataset()))
        .expect(1)
        .mount(&app.mock_server)
        .await;
}

/// Number of rendered book cards in a page or fragment.
pub fn card_count(body: &str) -> usize {
    body.matches(r#"<article class="book""#).count()
}

/// Positions of `needles` in `body`, panicking if any is missing.
pub fn positions(body: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            body.find(needle)
                .unwrap_or_else(|| panic!("expected body to contain {needle:?}"))
        })
        .collect()
}

pub fn assert_html_fragment(body: &str) {
    assert!(
        !body.contains("<!DOCTYPE"),
        "Expected HTML fragment, but found DOCTYPE declaration"
    );
    assert!(
        !body.contains("<html"),
        "Expected HTML fragment, but found <html> tag"
    );
}

pub fn assert_full_page(body: &str) {
    assert!(
        body.contains("<!DOCTYPE") || body.contains("<html"),
        "Expected full HTML page with DOCTYPE or <html> tag"
    );
}
