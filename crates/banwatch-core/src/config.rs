use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::BanwatchError;

/// Top-level Banwatch configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub discord: DiscordConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// General bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Prefix that marks a message as a command.
    #[serde(default = "default_prefix")]
    pub command_prefix: String,
    /// Directory holding the result illustrations (banned.gif / notbanned.gif).
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Footer line stamped on result cards.
    #[serde(default = "default_embed_footer")]
    pub embed_footer: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            command_prefix: default_prefix(),
            assets_dir: default_assets_dir(),
            log_level: default_log_level(),
            embed_footer: default_embed_footer(),
        }
    }
}

/// Discord bot config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscordConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub bot_token: String,
    #[serde(default)]
    pub application_id: String,
}

impl DiscordConfig {
    /// Bot token from config, falling back to the `DISCORD_TOKEN` env var.
    pub fn token(&self) -> Option<String> {
        if !self.bot_token.is_empty() {
            return Some(self.bot_token.clone());
        }
        std::env::var("DISCORD_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
    }
}

/// Ban lookup service config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Base URL of the anti-cheat ban API.
    #[serde(default)]
    pub base_url: String,
    /// HTTP timeout for one lookup, in seconds.
    #[serde(default = "default_lookup_timeout")]
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_lookup_timeout(),
        }
    }
}

/// Liveness HTTP API config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_api_host")]
    pub host: String,
    #[serde(default = "default_api_port")]
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            host: default_api_host(),
            port: default_api_port(),
        }
    }
}

// --- Defaults ---

fn default_name() -> String {
    "Banwatch".to_string()
}

fn default_prefix() -> String {
    "!".to_string()
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_embed_footer() -> String {
    "DEVELOPED BY M8N\u{2022}".to_string()
}

fn default_true() -> bool {
    true
}

fn default_lookup_timeout() -> u64 {
    30
}

fn default_api_host() -> String {
    "0.0.0.0".to_string()
}

fn default_api_port() -> u16 {
    10000
}

/// Load configuration from a TOML file, falling back to defaults when the
/// file does not exist.
pub fn load(path: &str) -> Result<Config, BanwatchError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!("Config file not found at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| BanwatchError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
