mod config;
mod errors;
mod preview;
mod routes;
mod skills;
mod state;
mod theme;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::skills::dictionary::{CATEGORY_FALLBACKS, SKILL_DICTIONARY};
use crate::skills::icons::{BrandIcon, GeneralIcon};
use crate::state::AppState;
use crate::theme::palette::theme_keys;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Themes: {}",
        theme_keys().collect::<Vec<_>>().join(", ")
    );
    info!(
        "Skill dictionary: {} rules, {} category fallbacks, {} icon symbols",
        SKILL_DICTIONARY.len(),
        CATEGORY_FALLBACKS.len(),
        GeneralIcon::ALL.len() + BrandIcon::ALL.len()
    );

    let cors = build_cors(&config)?;
    let state = AppState {
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Restricts CORS to `CORS_ALLOW_ORIGIN` when set; permissive otherwise (local preview).
fn build_cors(config: &Config) -> Result<CorsLayer> {
    let Some(origin) = &config.cors_allow_origin else {
        return Ok(CorsLayer::permissive());
    };

    let origin: HeaderValue = origin
        .parse()
        .with_context(|| format!("CORS_ALLOW_ORIGIN '{origin}' is not a valid header value"))?;
    info!("CORS restricted to {origin:?}");

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
