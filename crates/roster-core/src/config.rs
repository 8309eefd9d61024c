use anyhow::Result;
use chrono::NaiveDate;
use config::Config;
use serde::Deserialize;

use crate::constants::{DEFAULT_PRODID, FALLBACK_TERM_END, FALLBACK_TERM_START};
use crate::error::{CoreError, CoreResult};
use crate::model::Term;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub term: TermConfig,
    pub calendar: CalendarConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

/// Fallback term bounds, used when section rows carry no dates.
#[derive(Debug, Clone, Deserialize)]
pub struct TermConfig {
    pub start: String,
    pub end: String,
}

impl TermConfig {
    /// ## Summary
    /// Parses the configured bounds into a [`Term`].
    ///
    /// ## Errors
    /// Returns an error if either date is malformed or the range is inverted.
    pub fn term(&self) -> CoreResult<Term> {
        let start = parse_config_date("term.start", &self.start)?;
        let end = parse_config_date("term.end", &self.end)?;
        Term::new(start, end)
    }
}

fn parse_config_date(key: &str, value: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| CoreError::ConfigError(format!("{key} = {value:?}: {e}")))
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    pub prodid: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub catalog_path: String,
    pub sections_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `ROSTER_*` environment variables and an optional
    /// `roster.toml` into a `Settings`.
    ///
    /// Nested keys are separated by a double underscore, so
    /// `ROSTER_DATA__CATALOG_PATH` sets `data.catalog_path`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::environment())
    }

    fn load_from(environment: config::Environment) -> Result<Self> {
        Ok(Self::builder()?
            .add_source(environment)
            .add_source(config::File::with_name("roster.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("ROSTER")
            .prefix_separator("_")
            .separator("__")
            .ignore_empty(true)
            .try_parsing(true)
    }

    /// ## Summary
    /// Builds settings from the compiled-in defaults only.
    ///
    /// ## Errors
    /// Returns an error if the defaults fail to deserialize.
    pub fn defaults() -> Result<Self> {
        Ok(Self::builder()?.build()?.try_deserialize::<Settings>()?)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(Config::builder()
            .set_default("term.start", FALLBACK_TERM_START)?
            .set_default("term.end", FALLBACK_TERM_END)?
            .set_default("calendar.prodid", DEFAULT_PRODID)?
            .set_default("data.catalog_path", "courses.csv")?
            .set_default("data.sections_path", "sections.csv")?
            .set_default("logging.level", "info")?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn defaults_deserialize() {
        let settings = Settings::defaults().expect("defaults should load");
        assert_eq!(settings.calendar.prodid, DEFAULT_PRODID);
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.data.catalog_path, "courses.csv");
    }

    #[test]
    fn default_term_is_the_fallback_pair() {
        let settings = Settings::defaults().expect("defaults should load");
        let term = settings.term.term().expect("fallback term is valid");
        assert_eq!(term, Term::fallback());
    }

    #[test_log::test]
    fn environment_overrides_nested_keys() {
        let vars: config::Map<String, String> = [
            ("ROSTER_DATA__CATALOG_PATH", "/x/cat.csv"),
            ("ROSTER_DATA__SECTIONS_PATH", "/x/sections.json"),
            ("ROSTER_LOGGING__LEVEL", "warn"),
            ("ROSTER_TERM__START", "2025-03-31"),
            ("ROSTER_TERM__END", "2025-06-13"),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
        let settings = Settings::load_from(Settings::environment().source(Some(vars)))
            .expect("settings should load");

        assert_eq!(settings.data.catalog_path, "/x/cat.csv");
        assert_eq!(settings.data.sections_path, "/x/sections.json");
        assert_eq!(settings.logging.level, "warn");
        assert_eq!(settings.term.start, "2025-03-31");
        assert_eq!(settings.term.end, "2025-06-13");
        assert_eq!(settings.calendar.prodid, DEFAULT_PRODID);
    }

    #[test]
    fn malformed_term_date_is_a_config_error() {
        let config = TermConfig {
            start: "01/06/2025".to_string(),
            end: FALLBACK_TERM_END.to_string(),
        };
        let err = config.term().unwrap_err();
        assert!(matches!(err, CoreError::ConfigError(_)));
        assert!(err.to_string().contains("term.start"));
    }

    #[test]
    fn inverted_term_is_rejected() {
        let config = TermConfig {
            start: "2025-03-21".to_string(),
            end: "2025-01-06".to_string(),
        };
        assert!(matches!(config.term(), Err(CoreError::ValidationError(_))));
    }
}
