use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(".")
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Config::builder()
            .add_source(
                File::with_name(
                    path.as_ref()
                        .join("config/default")
                        .to_string_lossy()
                        .as_ref(),
                )
                .required(false),
            )
            .add_source(
                File::with_name(
                    path.as_ref()
                        .join("config/local")
                        .to_string_lossy()
                        .as_ref(),
                )
                .required(false),
            )
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    #[serde(default = "InputConfig::default_path")]
    pub path: String,
}

impl InputConfig {
    fn default_path() -> String {
        "data/issue_events.csv".to_string()
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "ExportConfig::default_bug_numbers_path")]
    pub bug_numbers_path: String,
    #[serde(default = "ExportConfig::default_linked_pull_requests_path")]
    pub linked_pull_requests_path: String,
}

impl ExportConfig {
    fn default_bug_numbers_path() -> String {
        "out/bug_issue_numbers.csv".to_string()
    }

    fn default_linked_pull_requests_path() -> String {
        "out/linked_pull_requests.csv".to_string()
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            bug_numbers_path: Self::default_bug_numbers_path(),
            linked_pull_requests_path: Self::default_linked_pull_requests_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "AnalysisConfig::default_bug_label")]
    pub bug_label: String,
}

impl AnalysisConfig {
    fn default_bug_label() -> String {
        "bug".to_string()
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            bug_label: Self::default_bug_label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_config_files() {
        let config = AppConfig::load_from_path("/nonexistent").expect("defaults should load");
        assert_eq!(config.analysis.bug_label, "bug");
        assert!(config.export.bug_numbers_path.ends_with(".csv"));
    }
}
