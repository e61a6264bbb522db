use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use dorm_survey_html::PageText;
use serde::Deserialize;

use crate::ServerError;

/// Prefix of environment overrides, e.g. `DORM_SURVEY__SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "DORM_SURVEY";

/// Top-level server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub survey: SurveyConfig,
    pub page: PageConfig,
    pub log: LogConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
        }
    }
}

/// Where the survey definition is read from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    /// A `.toml` or `.json` survey file.
    pub path: PathBuf,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("surveys/dormitory.toml"),
        }
    }
}

/// Presentation settings of the survey page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Overrides the title from the survey file.
    pub title: Option<String>,
    pub class_prefix: String,
    pub include_styles: bool,
    pub text: PageText,
    pub help_paragraphs: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: None,
            class_prefix: "survey".to_string(),
            include_styles: true,
            text: PageText::default(),
            help_paragraphs: Vec::new(),
        }
    }
}

/// Logging settings; `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Load the configuration from an optional file plus `DORM_SURVEY__*` environment overrides.
///
/// A missing file is not an error; every key has a default.
///
/// # Errors
/// Returns [`ServerError::Config`] if the file is malformed or a value has the wrong type.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ServerError> {
    let path = path.as_ref();

    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize::<AppConfig>()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.server.address.is_loopback());
        assert_eq!(cfg.survey.path, PathBuf::from("surveys/dormitory.toml"));
        assert_eq!(cfg.page.class_prefix, "survey");
        assert_eq!(cfg.log.level, "info");
    }
}
