use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

/// Fact API endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the fact service (e.g., "https://catfact.ninja").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Longest fact, in characters, the service may return.
    #[serde(default = "default_max_length")]
    pub max_length: u32,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Back-navigation history settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Number of facts kept for back-navigation (default: 25).
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
}

/// Decoration settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Maximum palette distance between the two gradient colors (default: 2).
    #[serde(default = "default_max_color_distance")]
    pub max_color_distance: usize,
}

fn default_base_url() -> String {
    "https://catfact.ninja".to_string()
}

fn default_max_length() -> u32 {
    150
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_history_capacity() -> usize {
    25
}

fn default_max_color_distance() -> usize {
    2
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds as u64)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds as u64)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_length: default_max_length(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            max_color_distance: default_max_color_distance(),
        }
    }
}
