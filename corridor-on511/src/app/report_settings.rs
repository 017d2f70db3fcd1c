use std::path::Path;

use config::{Config, ConfigError, File};
use corridor_core::{config::CorridorConfig, CorridorReportError};
use serde::de::DeserializeOwned;

use crate::client::ServiceConfig;

/// everything a run is configured with. both sections are optional in the
/// TOML file and fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSettings {
    pub corridor: CorridorConfig,
    pub service: ServiceConfig,
}

impl ReportSettings {
    /// loads settings from an optional TOML file. without a file the
    /// built-in Highway 401 corridor is used.
    pub fn load(configuration_file: Option<&str>) -> Result<Self, CorridorReportError> {
        let Some(configuration_file) = configuration_file else {
            log::info!("no configuration file provided, using default corridor");
            return Ok(Self::default());
        };
        let filepath = Path::new(configuration_file);
        let config = Config::builder()
            .add_source(File::from(filepath))
            .build()
            .map_err(|e| {
                let msg = format!("file '{configuration_file}' produced error: {e}");
                CorridorReportError::InvalidUserInput(msg)
            })?;
        Self::from_config(&config, configuration_file)
    }

    pub fn from_config(config: &Config, source: &str) -> Result<Self, CorridorReportError> {
        let settings = Self {
            corridor: read_section(config, "corridor", source)?.unwrap_or_default(),
            service: read_section(config, "service", source)?.unwrap_or_default(),
        };
        settings.corridor.validate()?;
        Ok(settings)
    }
}

fn read_section<T: DeserializeOwned>(
    config: &Config,
    key: &str,
    source: &str,
) -> Result<Option<T>, CorridorReportError> {
    match config.get::<Option<T>>(key) {
        Ok(section) => Ok(section),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => {
            let msg = format!("error reading '{key}' key in '{source}': {e}");
            Err(CorridorReportError::InvalidUserInput(msg))
        }
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn from_toml(toml: &str) -> Result<ReportSettings, CorridorReportError> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap();
        ReportSettings::from_config(&config, "test")
    }

    #[test]
    fn test_shipped_toml_matches_defaults() {
        let settings = from_toml(include_str!("../util/corridor-401.toml")).unwrap();
        assert_eq!(settings, ReportSettings::default());
    }

    #[test]
    fn test_partial_sections_fill_from_defaults() {
        let settings = from_toml(
            r#"
            [corridor]
            page_size = 25
            place_keywords = ["kingston"]

            [service]
            base_url = "http://localhost:8080"
            "#,
        )
        .unwrap();
        assert_eq!(settings.corridor.page_size, 25);
        assert_eq!(settings.corridor.place_keywords, vec!["kingston"]);
        assert_eq!(settings.corridor.tile_zoom, 11);
        assert_eq!(settings.service.base_url, "http://localhost:8080");
        assert_eq!(settings.service.language, "en");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let settings = from_toml("").unwrap();
        assert_eq!(settings, ReportSettings::default());
    }

    #[test]
    fn test_corridor_section_only() {
        let settings = from_toml(
            r#"
            [corridor]
            page_size = 50
            "#,
        )
        .unwrap();
        assert_eq!(settings.corridor.page_size, 50);
        assert_eq!(settings.service, ServiceConfig::default());
    }

    #[test]
    fn test_service_section_only() {
        let settings = from_toml(
            r#"
            [service]
            language = "fr"
            "#,
        )
        .unwrap();
        assert_eq!(settings.corridor, CorridorConfig::default());
        assert_eq!(settings.service.language, "fr");
    }

    #[test]
    fn test_malformed_section_rejected() {
        let result = from_toml(
            r#"
            [corridor]
            page_size = "many"
            "#,
        );
        assert!(matches!(
            result,
            Err(CorridorReportError::InvalidUserInput(_))
        ));
    }

    #[test]
    fn test_invalid_corridor_rejected() {
        let result = from_toml(
            r#"
            [corridor]
            page_size = 0
            "#,
        );
        assert!(matches!(
            result,
            Err(CorridorReportError::InvalidUserInput(_))
        ));
    }
}
