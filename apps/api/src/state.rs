use crate::config::Config;

/// Shared application state injected into route handlers via Axum extractors.
///
/// The resolvers read static tables, so configuration is the only shared state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
