//! Demo Configuration

use std::time::Duration;

use crate::error::CompressError;

/// Base URL of the compression service used when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8001";

/// Path of the compression endpoint under the base URL
pub const COMPRESS_PATH: &str = "/compress_prompt";

/// Path of the health endpoint under the base URL
pub const HEALTH_PATH: &str = "/health";

/// Text the demo starts with
pub const DEFAULT_INPUT: &str =
    "Could you list for me the planets in the solar system, in order from the";

const DEFAULT_DEBOUNCE_MS: u64 = 600;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Which backend answers the demo
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DemoMode {
    /// Call the compression service over HTTP
    #[default]
    Remote,

    /// Run the word-scoring heuristic in-process
    Local,
}

impl std::str::FromStr for DemoMode {
    type Err = CompressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" | "server" => Ok(Self::Remote),
            "local" | "mock" => Ok(Self::Local),
            other => Err(CompressError::Config(format!("unknown demo mode '{other}'"))),
        }
    }
}

/// Demo configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// Compression service base URL
    pub base_url: String,

    /// Quiet period before an edit triggers compression
    pub debounce: Duration,

    /// Upper bound on a single compression request
    pub timeout: Duration,

    /// Backend selection
    pub mode: DemoMode,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            mode: DemoMode::default(),
        }
    }
}

impl DemoConfig {
    /// Read `DISTILL_API_URL`, `DISTILL_DEBOUNCE_MS`, `DISTILL_TIMEOUT_SECS`
    /// and `DISTILL_DEMO_MODE`, keeping defaults for anything unset or invalid
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] over an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let base_url = lookup("DISTILL_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.base_url);
        let debounce = lookup("DISTILL_DEBOUNCE_MS")
            .and_then(|ms| ms.parse().ok())
            .map_or(defaults.debounce, Duration::from_millis);
        let timeout = lookup("DISTILL_TIMEOUT_SECS")
            .and_then(|secs| secs.parse().ok())
            .filter(|&secs: &u64| secs > 0)
            .map_or(defaults.timeout, Duration::from_secs);
        let mode = lookup("DISTILL_DEMO_MODE")
            .and_then(|mode| match mode.parse() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    tracing::warn!("Ignoring DISTILL_DEMO_MODE: {}", e);
                    None
                }
            })
            .unwrap_or(defaults.mode);

        Self {
            base_url,
            debounce,
            timeout,
            mode,
        }
    }

    /// Full URL of `POST /compress_prompt`
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, COMPRESS_PATH)
    }

    /// Full URL of `GET /health`
    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url, HEALTH_PATH)
    }
}
