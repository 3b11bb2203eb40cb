//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    #[serde(default)]
    pub plugins: PluginConfig,
    #[serde(default)]
    pub adapters: AdaptersConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
    pub prefix: String,
    /// Sender id allowed to run owner-only commands and to bypass admin-only mode
    pub owner_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PluginConfig {
    pub directory: PathBuf,
    pub auto_load: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("./plugins"),
            auto_load: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AdaptersConfig {
    pub telegram: Option<TelegramConfig>,
    pub console: Option<ConsoleConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TelegramConfig {
    pub enabled: bool,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConsoleConfig {
    pub enabled: bool,
    /// Sender id attached to console input
    #[serde(default = "default_console_user")]
    pub user_id: String,
}

fn default_console_user() -> String {
    "console".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "xar-bot".to_string(),
                prefix: "/".to_string(),
                owner_id: default_console_user(),
            },
            plugins: PluginConfig::default(),
            adapters: AdaptersConfig {
                telegram: Some(TelegramConfig {
                    enabled: false,
                    token: None,
                }),
                console: Some(ConsoleConfig {
                    enabled: true,
                    user_id: default_console_user(),
                }),
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Config::default();

        if let Ok(prefix) = std::env::var("BOT_PREFIX") {
            config.bot.prefix = prefix;
        }

        config.apply_env();
        config
    }

    /// Overlay secrets and identity that are usually kept out of the file
    pub fn apply_env(&mut self) {
        if let Ok(token) = std::env::var("BOT_TOKEN") {
            self.set_token(token);
        }

        if let Ok(owner_id) = std::env::var("BOT_OWNER_ID") {
            self.bot.owner_id = owner_id;
        }
    }

    pub fn set_token(&mut self, token: String) {
        match self.adapters.telegram {
            Some(ref mut tg) => {
                tg.token = Some(token);
                tg.enabled = true;
            }
            None => {
                self.adapters.telegram = Some(TelegramConfig {
                    enabled: true,
                    token: Some(token),
                });
            }
        }
    }

    /// Token of an enabled Telegram adapter
    pub fn telegram_token(&self) -> Option<&str> {
        self.adapters
            .telegram
            .as_ref()
            .filter(|tg| tg.enabled)
            .and_then(|tg| tg.token.as_deref())
    }

    pub fn console_user(&self) -> String {
        self.adapters
            .console
            .as_ref()
            .map(|c| c.user_id.clone())
            .unwrap_or_else(default_console_user)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.prefix.is_empty() {
            return Err(ConfigError::MissingField("bot.prefix".to_string()));
        }
        if self.bot.prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue(format!(
                "bot.prefix must not contain whitespace: {:?}",
                self.bot.prefix
            )));
        }
        if self.bot.owner_id.trim().is_empty() {
            return Err(ConfigError::MissingField("bot.owner-id".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid_and_round_trips() {
        let config = Config::default();
        assert!(config.validate().is_ok());

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = Config::parse(&yaml).unwrap();
        assert_eq!(parsed.bot.prefix, "/");
        assert_eq!(parsed.bot.owner_id, "console");
    }

    #[test]
    fn minimal_file_fills_sections_with_defaults() {
        let config = Config::parse("bot:\n  name: xar\n  prefix: \"!\"\n  owner-id: \"1234\"\n").unwrap();
        assert_eq!(config.bot.owner_id, "1234");
        assert!(config.plugins.auto_load);
        assert_eq!(config.plugins.directory, PathBuf::from("./plugins"));
        assert!(config.telegram_token().is_none());
        assert_eq!(config.console_user(), "console");
    }

    #[test]
    fn validate_rejects_empty_prefix_and_owner() {
        let mut config = Config::default();
        config.bot.prefix = String::new();
        assert!(matches!(config.validate(), Err(ConfigError::MissingField(_))));

        let mut config = Config::default();
        config.bot.owner_id = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::MissingField(_))));

        let mut config = Config::default();
        config.bot.prefix = "! ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn disabled_telegram_has_no_token() {
        let mut config = Config::default();
        config.adapters.telegram = Some(TelegramConfig {
            enabled: false,
            token: Some("123:abc".to_string()),
        });
        assert!(config.telegram_token().is_none());

        config.set_token("123:abc".to_string());
        assert_eq!(config.telegram_token(), Some("123:abc"));
    }
}
