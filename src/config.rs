use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

/// Application-level constants
pub const APP_NAME: &str = "Healthdesk";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";
pub const DEFAULT_SUMMARY_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";
pub const DEFAULT_SEARCH_URL: &str = "https://en.wikipedia.org/w/api.php";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
/// Simulated "typing" pause before a canned reply.
pub const DEFAULT_THINKING_DELAY_MS: u64 = 800;
/// Upper bound on live conversations held in memory.
pub const DEFAULT_MAX_CONVERSATIONS: usize = 256;

const ENV_BIND: &str = "HEALTHDESK_BIND";
const ENV_SUMMARY_URL: &str = "HEALTHDESK_SUMMARY_URL";
const ENV_SEARCH_URL: &str = "HEALTHDESK_SEARCH_URL";
const ENV_HTTP_TIMEOUT: &str = "HEALTHDESK_HTTP_TIMEOUT_SECS";
const ENV_THINKING_DELAY: &str = "HEALTHDESK_THINKING_DELAY_MS";
const ENV_MAX_CONVERSATIONS: &str = "HEALTHDESK_MAX_CONVERSATIONS";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "healthdesk=info,healthdesk_lib=info,tower_http=warn"
}

/// User-Agent sent to the encyclopedia service.
pub fn user_agent() -> String {
    format!("{APP_NAME}/{APP_VERSION}")
}

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub summary_url: String,
    pub search_url: String,
    pub http_timeout_secs: u64,
    pub thinking_delay: Duration,
    pub max_conversations: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8787)),
            summary_url: DEFAULT_SUMMARY_URL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            thinking_delay: Duration::from_millis(DEFAULT_THINKING_DELAY_MS),
            max_conversations: DEFAULT_MAX_CONVERSATIONS,
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Missing keys use defaults. Unparseable values are logged and
    /// replaced by their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = parse_or(ENV_BIND, lookup(ENV_BIND), defaults.bind_addr);
        let http_timeout_secs = parse_or(
            ENV_HTTP_TIMEOUT,
            lookup(ENV_HTTP_TIMEOUT),
            defaults.http_timeout_secs,
        );
        let thinking_delay_ms = parse_or(
            ENV_THINKING_DELAY,
            lookup(ENV_THINKING_DELAY),
            DEFAULT_THINKING_DELAY_MS,
        );
        let max_conversations = parse_or(
            ENV_MAX_CONVERSATIONS,
            lookup(ENV_MAX_CONVERSATIONS),
            defaults.max_conversations,
        );

        Self {
            bind_addr,
            summary_url: non_blank(lookup(ENV_SUMMARY_URL)).unwrap_or(defaults.summary_url),
            search_url: non_blank(lookup(ENV_SEARCH_URL)).unwrap_or(defaults.search_url),
            http_timeout_secs,
            thinking_delay: Duration::from_millis(thinking_delay_ms),
            max_conversations,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    let Some(raw) = non_blank(raw) else {
        return default;
    };
    match raw.parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparseable configuration value");
            default
        }
    }
}
