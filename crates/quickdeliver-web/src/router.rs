//! Web router using Axum

use axum::{response::Html, routing::get, routing::post, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{info, warn};

use crate::api::{self, ApiState};

/// Create the web router
///
/// API routes are always mounted. The storefront itself is served from
/// `static_dir` (a Trunk `dist/` build) when it exists; otherwise `/` explains
/// how to build it.
pub fn create_router(static_dir: Option<PathBuf>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/api/health", get(api::health))
        .route("/api/stores", get(api::stores))
        .route("/api/stores/{id}", get(api::store))
        .route("/api/stores/{id}/products", get(api::store_products))
        .route("/api/orders", get(api::orders))
        .route("/api/quote", post(api::quote))
        .with_state(Arc::new(ApiState::default()));

    let router = match static_dir.filter(|dir| dir.join("index.html").is_file()) {
        Some(dir) => {
            info!(dir = %dir.display(), "serving storefront build");
            let index = ServeFile::new(dir.join("index.html"));
            api.fallback_service(ServeDir::new(dir).fallback(index))
        }
        None => {
            warn!("no storefront build found, serving setup page");
            api.route("/", get(index_handler))
        }
    };

    router.layer(cors)
}

async fn index_handler() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>QuickDeliver</title>
    <style>
        body {
            font-family: system-ui, -apple-system, sans-serif;
            background: #0f1115;
            color: #f1f3f5;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
            margin: 0;
        }
        .setup-message { max-width: 600px; padding: 2rem; border-radius: 8px; background: #181b22; }
        code { background: #0f1115; padding: 0.2rem 0.4rem; border-radius: 4px; }
        a { color: #22b8cf; }
    </style>
</head>
<body>
    <div class="setup-message">
        <h1>QuickDeliver - Build Required</h1>
        <p>The storefront WASM bundle has not been built yet.</p>
        <ol>
            <li>Install Trunk: <code>cargo install trunk</code></li>
            <li>Add WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
            <li>Build: <code>cd crates/quickdeliver-web && trunk build --release</code></li>
            <li>Restart: <code>quickdeliver web --static-dir crates/quickdeliver-web/dist</code></li>
        </ol>
        <p>API endpoints are available now:</p>
        <ul>
            <li><a href="/api/health">/api/health</a></li>
            <li><a href="/api/stores">/api/stores</a></li>
            <li><a href="/api/orders">/api/orders</a></li>
        </ul>
    </div>
</body>
</html>"#,
    )
}
