//! Configuration for the skycast TUI.
//!
//! A single TOML file (theme choice + provider settings) plus a
//! credential chain for the API key: env var, system keyring, plaintext
//! config, in that order.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use skycast_core::ThemeMode;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no API key configured (set SKYCAST_API_KEY, the keyring, or provider.api_key)")]
    NoCredentials,

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Color scheme. Rewritten on every in-app toggle.
    #[serde(default)]
    pub theme: ThemeMode,

    /// Weather provider settings.
    #[serde(default)]
    pub provider: ProviderSettings,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ProviderSettings {
    /// Provider base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (plaintext, prefer keyring or env var).
    pub api_key: Option<String>,

    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,

    /// Whole-request timeout, seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            api_key_env: None,
            timeout: default_timeout(),
        }
    }
}

impl ProviderSettings {
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

fn default_base_url() -> String {
    "https://api.weatherapi.com".into()
}
fn default_timeout() -> u64 {
    30
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("dev", "skycast", "skycast").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("skycast");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the config from a specific file plus the environment.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SKYCAST_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load the config from the canonical path plus the environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config, returning defaults if loading fails for any reason.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

/// Persist a theme choice without clobbering other settings.
///
/// Reads the file back first so hand-edited provider settings survive
/// a toggle.
pub fn save_theme(mode: ThemeMode, path: &Path) -> Result<(), ConfigError> {
    let mut cfg = load_config_from(path).unwrap_or_default();
    cfg.theme = mode;
    save_config_to(&cfg, path)
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve the provider API key from the credential chain.
pub fn resolve_api_key(provider: &ProviderSettings) -> Result<SecretString, ConfigError> {
    // 1. Configured env var name
    if let Some(ref env_name) = provider.api_key_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. Conventional env var
    if let Ok(val) = std::env::var("SKYCAST_API_KEY") {
        return Ok(SecretString::from(val));
    }

    // 3. System keyring
    if let Ok(entry) = keyring::Entry::new("skycast", "api-key") {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    // 4. Plaintext in config
    if let Some(ref key) = provider.api_key {
        return Ok(SecretString::from(key.clone()));
    }

    Err(ConfigError::NoCredentials)
}
