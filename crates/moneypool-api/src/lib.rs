//! HTTP server for the moneypool page, with HTMX support
//!
//! Routes are organized into modules:
//! - routes::pool: Pool page (full or HTMX partial) and JSON view

pub mod error;
pub mod routes;

use axum::{http::Method, routing::get, Router};
use moneypool_client::PoolSourceRef;
use moneypool_config::{ColorMode, Config};
use moneypool_utils::escape_html;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub source: PoolSourceRef,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::pool::{api_pool, page_pool};

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/pools/:id", get(api_pool))
        // Page routes
        .route("/", get(page_pool))
        .fallback(not_found)
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound { resource: uri.path().to_string() }
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, mode: ColorMode, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="{}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css">
    <style>
        .skeleton {{ animation: pulse 1.5s ease-in-out infinite; }}
        @keyframes pulse {{ 50% {{ opacity: .4; }} }}
    </style>
</head>
<body>
    {}
</body>
</html>"#,
        mode,
        escape_html(title),
        content
    )
}

/// Content area; carries the colour classes so an HTMX swap restyles it
fn main_html(mode: ColorMode, inner_content: &str) -> String {
    let colors = match mode {
        ColorMode::Light => "bg-gray-50 text-gray-900",
        ColorMode::Dark => "bg-gray-900 text-gray-100",
    };
    format!(
        r#"<main id='main' class='{} min-h-screen'><div class='max-w-xl mx-auto p-6'>{}</div></main>"#,
        colors, inner_content
    )
}

/// Check if request is from HTMX (partial page update)
fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(headers: &axum::http::HeaderMap, title: &str, mode: ColorMode, inner_content: &str) -> String {
    if is_htmx_request(headers) {
        // HTMX partial - just the content area
        main_html(mode, inner_content)
    } else {
        base_html(title, mode, &main_html(mode, inner_content))
    }
}

/// Start the HTTP server
///
/// Binds to the configured address and serves until the process stops.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `source` - Where pools are fetched from
pub async fn start_server(config: Config, source: PoolSourceRef) -> std::io::Result<()> {
    let addr = config.listen_addr();
    let state = AppState { config, source };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting moneypool server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - /?mp=<pool> (Pool page)");
    log::info!("  - /api/pools/<pool> (Pool view as JSON)");
    log::info!("  - /api/health (Health check)");

    let result = axum::serve(listener, router).await;
    match &result {
        Ok(_) => log::info!("Server stopped gracefully"),
        Err(e) => log::error!("Server error: {}", e),
    }
    result
}

// ==================== Tests ====================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use moneypool_client::{ClientError, PoolSource};
    use moneypool_core::{PoolRecord, Transaction};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    /// In-memory pool source that counts lookups
    #[derive(Default)]
    pub struct StubSource {
        pub pools: HashMap<String, PoolRecord>,
        pub calls: AtomicUsize,
    }

    #[async_trait]
    impl PoolSource for StubSource {
        async fn fetch_pool(&self, pool_id: &str) -> Result<PoolRecord, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match pool_id {
                "offline" => Err(ClientError::Network { message: "connection refused".to_string() }),
                "garbled" => Err(ClientError::Decode { message: "expected value".to_string() }),
                _ => self
                    .pools
                    .get(pool_id)
                    .cloned()
                    .ok_or_else(|| ClientError::NotFound { pool_id: pool_id.to_string() }),
            }
        }
    }

    pub fn stub_source() -> Arc<StubSource> {
        let mut pools = HashMap::new();
        pools.insert("trip".to_string(), PoolRecord {
            name: "trip".to_string(),
            title: "Summer <Trip>".to_string(),
            open: true,
            transactions: vec![
                Transaction::new("Anna", 10, 0, "01.01.2024"),
                Transaction::new("Ben", 5, 50, "15.06.2024"),
            ],
        });
        pools.insert("gift".to_string(), PoolRecord {
            name: "gift".to_string(),
            title: "Gift".to_string(),
            open: false,
            transactions: vec![Transaction::new("Cleo", 20, 5, "02.02.2023")],
        });
        pools.insert("bad-date".to_string(), PoolRecord {
            name: "bad-date".to_string(),
            title: "Bad".to_string(),
            open: true,
            transactions: vec![Transaction::new("Dan", 1, 0, "2024-02-02")],
        });
        Arc::new(StubSource { pools, calls: AtomicUsize::new(0) })
    }

    pub fn test_state(source: Arc<StubSource>) -> AppState {
        let mut config = Config::default();
        config.payment.link = "https://pay.example.com/me".to_string();
        AppState { config, source }
    }

    pub async fn get(router: Router, uri: &str, htmx: bool) -> (StatusCode, String) {
        let mut request = Request::builder().uri(uri);
        if htmx {
            request = request.header("hx-request", "true");
        }
        let response = router.oneshot(request.body(Body::empty()).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let router = create_router(test_state(stub_source()));
        let (status, body) = get(router, "/api/health", false).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let router = create_router(test_state(stub_source()));
        let (status, body) = get(router, "/nope", false).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
    }

    #[test]
    fn test_page_response_full_and_partial() {
        let mut headers = axum::http::HeaderMap::new();
        let full = page_response(&headers, "T & T", ColorMode::Dark, "<p>x</p>");
        assert!(full.starts_with("<!DOCTYPE html>"));
        assert!(full.contains("<title>T &amp; T</title>"));
        assert!(full.contains("class=\"dark\""));

        headers.insert("hx-request", "true".parse().unwrap());
        let partial = page_response(&headers, "T", ColorMode::Dark, "<p>x</p>");
        assert!(!partial.contains("<!DOCTYPE html>"));
        assert!(partial.starts_with("<main id='main' class='bg-gray-900"));
        assert!(partial.contains("<p>x</p>"));
    }
}
