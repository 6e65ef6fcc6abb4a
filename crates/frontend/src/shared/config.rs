use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Explicit API origin, e.g. "https://quotes.example.com". Empty means
    /// "same host as the page, on `port`".
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_port() -> u16 {
    8000
}

fn default_level() -> String {
    "debug".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 8000

[logging]
level = "debug"
"#;

/// Parse a TOML configuration document
pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Load the application configuration
///
/// The embedded document is parsed first; a non-empty `QUOTECHECK_API_BASE`
/// set at build time then replaces `api.base_url`.
pub fn load_config() -> AppConfig {
    let mut config = match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Embedded configuration is invalid, using defaults: {}", e);
            AppConfig::default()
        }
    };
    apply_api_base_override(&mut config, option_env!("QUOTECHECK_API_BASE"));
    config
}

fn apply_api_base_override(config: &mut AppConfig, value: Option<&str>) {
    if let Some(base) = value.map(str::trim).filter(|v| !v.is_empty()) {
        config.api.base_url = base.to_string();
    }
}

impl LoggingConfig {
    /// Configured level, `Debug` when the value is not a known level name
    pub fn log_level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}
