//! Axum-based HTTP server for the portfolio pages.
//!
//! Two page routes (the composed single-page view and the per-project detail
//! view), the contact-form POST, embedded static assets, and a health probe.
//! Body limits and request timeouts are applied at the router level.

mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

use crate::config::{Config, SiteConfig};
use crate::content::Catalog;
use crate::mail::{Mailer, RelayMailer};
use crate::render::SiteRenderer;
use handlers::{
    handle_contact, handle_fallback, handle_health, handle_home, handle_project,
    handle_reveal_js, handle_site_css,
};

/// Maximum request body size (64KB) — the contact form is the only POST
pub const MAX_BODY_SIZE: usize = 65_536;
/// Request timeout (30s) — prevents slow-loris attacks
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub renderer: Arc<SiteRenderer>,
    pub site: Arc<SiteConfig>,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    /// Assemble the state a running server needs from config: catalog
    /// (external file when configured, embedded otherwise), compiled
    /// templates, and the mail relay.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = match &config.site.content_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::embedded()?,
        };
        Ok(Self {
            catalog: Arc::new(catalog),
            renderer: Arc::new(SiteRenderer::new()?),
            site: Arc::new(config.site.clone()),
            mailer: Arc::new(RelayMailer::new(config.mail.clone())),
        })
    }
}

/// The full route table over a prepared state. Split out so tests can drive
/// it without binding a port.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_home))
        .route("/projects/{id}", get(handle_project))
        .route("/contact", post(handle_contact))
        .route("/assets/site.css", get(handle_site_css))
        .route("/assets/reveal.js", get(handle_reveal_js))
        .route("/health", get(handle_health))
        .fallback(handle_fallback)
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        ))
}

/// Run the site server on the configured host and port.
pub async fn run_gateway(config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    run_gateway_with_listener(listener, config).await
}

/// Run the site server from a pre-bound listener.
pub async fn run_gateway_with_listener(
    listener: tokio::net::TcpListener,
    config: Config,
) -> Result<()> {
    let state = AppState::from_config(&config)?;
    let addr = listener.local_addr()?;

    tracing::info!(
        %addr,
        projects = state.catalog.projects.len(),
        certificates = state.catalog.certificates.len(),
        "serving portfolio"
    );
    println!("◆ Listening on http://{addr}");
    println!("  GET  /                 → portfolio page");
    println!("  GET  /projects/{{id}}    → project detail");
    println!("  POST /contact          → contact form relay");
    println!("  GET  /health           → liveness probe");
    if let Some(path) = &state.site.content_path {
        println!("  content: {}", path.display());
    }
    println!("  Press Ctrl+C to stop\n");

    let app = router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn security_body_limit_is_64kb() {
        assert_eq!(MAX_BODY_SIZE, 65_536);
    }

    #[test]
    fn security_timeout_is_30_seconds() {
        assert_eq!(REQUEST_TIMEOUT_SECS, 30);
    }

    #[test]
    fn app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn app_state_builds_from_default_config() {
        let state = AppState::from_config(&Config::default()).unwrap();
        assert!(!state.catalog.projects.is_empty());
    }
}
