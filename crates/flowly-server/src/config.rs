use std::str::FromStr;
use std::time::Duration;

/// Process configuration, read from the environment after `.env` is loaded.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Artificial delay before a query is answered. Zero disables it.
    pub query_latency: Duration,
    pub recent_limit: usize,
    pub datasets_path: Option<String>,
    pub library_path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            query_latency: Duration::from_millis(1500),
            recent_limit: 2,
            datasets_path: None,
            library_path: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: std::env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: parse_env("SERVER_PORT", defaults.port),
            query_latency: Duration::from_millis(parse_env(
                "QUERY_LATENCY_MS",
                defaults.query_latency.as_millis() as u64,
            )),
            recent_limit: parse_env("RECENT_LIMIT", defaults.recent_limit),
            datasets_path: non_empty_var("DATASETS_PATH"),
            library_path: non_empty_var("LIBRARY_PATH"),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("{key}={raw:?} is not valid, using {default}");
            default
        }),
        Err(_) => default,
    }
}
