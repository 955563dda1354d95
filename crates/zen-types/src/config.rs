//! Configuration loading for zen-search.
//!
//! Layered config: defaults -> config file -> env vars -> CLI flags.
//! The default config file lives at ~/.config/zen-search/config.{toml,json,yaml}.

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ZenError;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding one `<group>.json` file per group
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Groups to load, in menu order
    #[serde(default = "default_groups")]
    pub groups: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Attempts allowed per interactive question
    #[serde(default = "default_max_tries")]
    pub max_tries: u32,
}

fn default_data_dir() -> String {
    "./data".to_string()
}

fn default_groups() -> Vec<String> {
    vec![
        "organisations".to_string(),
        "tickets".to_string(),
        "users".to_string(),
    ]
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_max_tries() -> u32 {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            groups: default_groups(),
            log_level: default_log_level(),
            max_tries: default_max_tries(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/zen-search/config.*)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (ZEN_*)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, ZenError> {
        let config_dir = ProjectDirs::from("", "", "zen-search")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("data_dir", default_data_dir())
            .map_err(|e| ZenError::Config(e.to_string()))?
            .set_default("groups", default_groups())
            .map_err(|e| ZenError::Config(e.to_string()))?
            .set_default("log_level", default_log_level())
            .map_err(|e| ZenError::Config(e.to_string()))?
            .set_default("max_tries", default_max_tries() as i64)
            .map_err(|e| ZenError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // ZEN_DATA_DIR, ZEN_LOG_LEVEL, ZEN_MAX_TRIES, ZEN_GROUPS=a,b,c
        builder = builder.add_source(
            Environment::with_prefix("ZEN")
                .prefix_separator("_")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("groups"),
        );

        let settings: Settings = builder
            .build()
            .map_err(|e| ZenError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ZenError::Config(e.to_string()))?;

        settings.validate().map_err(ZenError::Config)?;
        Ok(settings)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.groups.is_empty() {
            return Err("at least one group must be configured".to_string());
        }
        if self.max_tries == 0 {
            return Err("max_tries must be > 0".to_string());
        }
        Ok(())
    }

    /// Path of the JSON file backing `group`.
    pub fn group_path(&self, group: &str) -> PathBuf {
        PathBuf::from(&self.data_dir).join(format!("{group}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.groups, vec!["organisations", "tickets", "users"]);
        assert_eq!(settings.max_tries, 3);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("zen.toml");
        std::fs::write(&path, "data_dir = \"/srv/zen\"\nmax_tries = 5\n").unwrap();

        let settings = Settings::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(settings.data_dir, "/srv/zen");
        assert_eq!(settings.max_tries, 5);
        assert_eq!(settings.groups.len(), 3);
    }

    #[test]
    fn test_missing_cli_config_is_error() {
        let result = Settings::load(Some("/nonexistent/zen-config.toml"));
        assert!(matches!(result, Err(ZenError::Config(_))));
    }

    #[test]
    fn test_validation() {
        let mut settings = Settings::default();
        assert!(settings.validate().is_ok());

        settings.max_tries = 0;
        assert!(settings.validate().is_err());

        settings.max_tries = 3;
        settings.groups.clear();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_group_path() {
        let settings = Settings {
            data_dir: "/data".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.group_path("users"), PathBuf::from("/data/users.json"));
    }
}
