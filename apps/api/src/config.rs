use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on labels accepted by the batch icon endpoint.
    pub max_batch_labels: usize,
    /// Single allowed origin for CORS. `None` keeps CORS permissive.
    pub cors_allow_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_batch_labels: parse_env("MAX_BATCH_LABELS", 256)?,
            cors_allow_origin: std::env::var("CORS_ALLOW_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_batch_labels: 256,
            cors_allow_origin: None,
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-global; each test uses its own key.

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        std::env::remove_var("FOLIO_TEST_UNSET");
        assert_eq!(parse_env::<u16>("FOLIO_TEST_UNSET", 8080).unwrap(), 8080);
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("FOLIO_TEST_PORT", " 3000 ");
        assert_eq!(parse_env::<u16>("FOLIO_TEST_PORT", 8080).unwrap(), 3000);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("FOLIO_TEST_BAD", "eighty");
        let err = parse_env::<usize>("FOLIO_TEST_BAD", 1).unwrap_err();
        assert!(err.to_string().contains("FOLIO_TEST_BAD"));
    }
}
