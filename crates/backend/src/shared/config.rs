use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Overrides `upstream.base_url` when set to a non-blank value
pub const UPSTREAM_URL_ENV: &str = "EXPLORER_UPSTREAM_URL";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the built frontend (index.html, wasm, assets)
    pub static_dir: String,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Data service that answers the indicator endpoints
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_timeout_secs() -> u64 {
    60
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 3000
static_dir = "dist"

[upstream]
base_url = "http://127.0.0.1:5000"
timeout_secs = 60
"#;

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `EXPLORER_UPSTREAM_URL` is applied on top of either source.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config()?;
    apply_upstream_override(&mut config, std::env::var(UPSTREAM_URL_ENV).ok());
    tracing::info!("Upstream data service: {}", config.upstream.base_url);
    Ok(config)
}

fn read_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(contents)?;
    config.upstream.base_url = normalize_base_url(&config.upstream.base_url);
    Ok(config)
}

fn apply_upstream_override(config: &mut Config, value: Option<String>) {
    if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
        tracing::info!("{} overrides upstream.base_url", UPSTREAM_URL_ENV);
        config.upstream.base_url = normalize_base_url(&url);
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Resolve the static directory.
/// Absolute paths are used as is; relative ones are looked up next to the
/// executable first, then relative to the working directory.
pub fn resolve_static_dir(static_dir: &str) -> PathBuf {
    let path = Path::new(static_dir);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let candidate = exe_dir.join(path);
            if candidate.is_dir() {
                return candidate;
            }
        }
    }

    PathBuf::from(static_dir)
}
