//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::PathBuf;

/// NUT configuration with layered hierarchy: built-in defaults, then the
/// global user config, then environment variables. Command-line flags
/// override everything and are resolved by the commands themselves.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the dataset files
    pub data: Option<PathBuf>,

    /// YAML template file to validate against
    pub template: Option<PathBuf>,

    /// Where the run log is written
    pub log: Option<PathBuf>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/nut/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Environment variables
        if let Ok(data) = std::env::var("NUT_DATA") {
            config.data = Some(data.into());
        }
        if let Ok(template) = std::env::var("NUT_TEMPLATE") {
            config.template = Some(template.into());
        }
        if let Ok(log) = std::env::var("NUT_LOG") {
            config.log = Some(log.into());
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "nut")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.data.is_some() {
            self.data = other.data;
        }
        if other.template.is_some() {
            self.template = other.template;
        }
        if other.log.is_some() {
            self.log = other.log;
        }
    }

    /// Data directory, defaulting to `data/`
    pub fn data_dir(&self) -> PathBuf {
        self.data.clone().unwrap_or_else(|| PathBuf::from("data"))
    }

    /// Template path, defaulting to `template.yml`
    pub fn template_path(&self) -> PathBuf {
        self.template
            .clone()
            .unwrap_or_else(|| PathBuf::from("template.yml"))
    }

    /// Run log path, defaulting to `application.log`
    pub fn log_path(&self) -> PathBuf {
        self.log
            .clone()
            .unwrap_or_else(|| PathBuf::from("application.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.data_dir(), PathBuf::from("data"));
        assert_eq!(config.template_path(), PathBuf::from("template.yml"));
        assert_eq!(config.log_path(), PathBuf::from("application.log"));
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut config = Config {
            data: Some("old".into()),
            template: None,
            log: None,
        };
        config.merge(Config {
            data: Some("new".into()),
            template: Some("t.yml".into()),
            log: None,
        });

        assert_eq!(config.data_dir(), PathBuf::from("new"));
        assert_eq!(config.template_path(), PathBuf::from("t.yml"));
        assert_eq!(config.log_path(), PathBuf::from("application.log"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config: Config =
            serde_yml::from_str("data: sites\neditor: vi\n").unwrap();
        assert_eq!(config.data_dir(), PathBuf::from("sites"));
    }
}
