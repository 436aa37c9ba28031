//! quickdeliver-web - browser storefront for QuickDeliver using Leptos + Axum
//!
//! The Leptos components compile to WASM (`csr` feature, built with Trunk).
//! The `ssr` feature adds the Axum server that hosts the bundle and the JSON API.

#![recursion_limit = "1024"]

pub mod app;
pub mod components;
pub mod pages;
pub mod session;

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
#[cfg(feature = "ssr")]
pub use router::create_router;

#[cfg(feature = "ssr")]
mod server {
    use super::create_router;
    use anyhow::Result;
    use std::net::SocketAddr;
    use std::path::PathBuf;
    use tokio::net::TcpListener;
    use tracing::info;

    /// Run the web server
    pub async fn run(port: u16, static_dir: Option<PathBuf>) -> Result<()> {
        let router = create_router(static_dir);

        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let listener = TcpListener::bind(addr).await?;

        info!("Web server listening on http://{}", addr);
        println!("Web server listening on http://{}", addr);

        axum::serve(listener, router).await?;

        Ok(())
    }
}

#[cfg(feature = "ssr")]
pub use server::run;
