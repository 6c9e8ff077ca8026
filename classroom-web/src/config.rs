//! Frontend configuration module
//!
//! Values are baked in at compile time from the build environment so the
//! bundle needs no runtime configuration endpoint.

const DEFAULT_API_BASE: &str = "/api";
const DEFAULT_TOKEN_KEY: &str = "token";
const DEFAULT_HELP_URL: &str = "https://classroom.example.com/help/exams";
const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/150?img=1";
const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Frontend configuration for the backend location and browser storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Prefix prepended to every API path, e.g. `/api` or `https://host/api`.
    pub api_base: String,
    /// `localStorage` key holding the bearer token.
    pub token_storage_key: String,
    /// Target of the dashboard's exam tips link.
    pub help_url: String,
    /// Avatar assigned when a user registers without uploading one.
    pub default_avatar_url: String,
    /// Most verbose level forwarded to the browser console.
    pub log_level: log::Level,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base: option_env!("CLASSROOM_API_BASE")
                .unwrap_or(DEFAULT_API_BASE)
                .to_string(),
            token_storage_key: option_env!("CLASSROOM_TOKEN_KEY")
                .unwrap_or(DEFAULT_TOKEN_KEY)
                .to_string(),
            help_url: option_env!("CLASSROOM_HELP_URL")
                .unwrap_or(DEFAULT_HELP_URL)
                .to_string(),
            default_avatar_url: DEFAULT_AVATAR_URL.to_string(),
            log_level: parse_log_level(option_env!("CLASSROOM_LOG_LEVEL")),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the API base, mostly useful for pointing tests at a local server.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn token_storage_key(&self) -> &str {
        &self.token_storage_key
    }

    pub fn help_url(&self) -> &str {
        &self.help_url
    }

    pub fn default_avatar_url(&self) -> &str {
        &self.default_avatar_url
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level
    }
}

/// Unknown or missing values fall back to `info`.
fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
