use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/helpdesk.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    /// Delay before the simulated customer starts typing, in ms.
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,
    /// Further delay between the typing indicator and the reply, in ms.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
    #[serde(default = "default_canned_reply")]
    pub canned_reply: String,
}

fn default_window_title() -> String {
    "ICT Help Desk".to_string()
}

fn default_typing_delay_ms() -> u64 {
    1000
}

fn default_reply_delay_ms() -> u64 {
    2000
}

fn default_canned_reply() -> String {
    "Thank you! That worked perfectly.".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            typing_delay_ms: default_typing_delay_ms(),
            reply_delay_ms: default_reply_delay_ms(),
            canned_reply: default_canned_reply(),
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_simulated_reply_contract() {
        let config = AppConfig::default();
        assert_eq!(config.typing_delay_ms, 1000);
        assert_eq!(config.reply_delay_ms, 2000);
        assert_eq!(config.canned_reply, "Thank you! That worked perfectly.");
    }

    #[test]
    fn partial_file_falls_back_per_field() {
        let config: AppConfig = serde_json::from_str(r#"{"typing_delay_ms": 50}"#).unwrap();
        assert_eq!(config.typing_delay_ms, 50);
        assert_eq!(config.reply_delay_ms, 2000);
        assert_eq!(config.window_title, "ICT Help Desk");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_config("config/does-not-exist.json");
        assert_eq!(config.typing_delay_ms, 1000);
    }
}
