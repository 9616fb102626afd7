use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and how records are fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Collection endpoint; the id is appended as the last path segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request deadline in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Event loop and loader animation timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick interval driving the loader animation (default: 50).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Delay before the loader animation starts (default: 100).
    #[serde(default = "default_loader_delay_ms")]
    pub loader_delay_ms: u64,
    /// Full length of the loader animation (default: 3000).
    #[serde(default = "default_loader_duration_ms")]
    pub loader_duration_ms: u64,
    /// Speed multiplier applied once data has arrived (default: 15).
    #[serde(default = "default_loader_fast_forward")]
    pub loader_fast_forward: f64,
    /// Id shown at startup (default: 1).
    #[serde(default = "default_start_id")]
    pub start_id: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Logging is off when unset since the TUI owns stdout.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2/pokemon".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_ms() -> u64 {
    50
}

fn default_loader_delay_ms() -> u64 {
    100
}

fn default_loader_duration_ms() -> u64 {
    3000
}

fn default_loader_fast_forward() -> f64 {
    15.0
}

fn default_start_id() -> u16 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            loader_delay_ms: default_loader_delay_ms(),
            loader_duration_ms: default_loader_duration_ms(),
            loader_fast_forward: default_loader_fast_forward(),
            start_id: default_start_id(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
