use core::str::FromStr;

use serde::{Deserialize, Serialize};

use clearlabel_core::DomainError;
use clearlabel_products::{FixtureError, ProductRecord, load_records, parse_records};

use crate::config::AppConfig;

/// Sample catalog used when no fixture path is configured.
pub const SAMPLE_FIXTURE: &str = include_str!("../data/products.json");

/// Display theme. A rendering hint only; no computation depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(DomainError::validation(format!("unknown theme: {other}"))),
        }
    }
}

/// Everything a page needs, passed down explicitly.
///
/// The records are loaded once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardContext {
    theme: Theme,
    records: Vec<ProductRecord>,
    top_n: usize,
    flag_limit: usize,
}

impl DashboardContext {
    pub fn new(theme: Theme, records: Vec<ProductRecord>) -> Self {
        let defaults = AppConfig::default();
        Self {
            theme,
            records,
            top_n: defaults.top_n,
            flag_limit: defaults.flag_limit,
        }
    }

    pub fn with_limits(mut self, top_n: usize, flag_limit: usize) -> Self {
        self.top_n = top_n;
        self.flag_limit = flag_limit;
        self
    }

    /// Load the configured fixture (or the embedded sample).
    pub fn from_config(config: &AppConfig) -> Result<Self, FixtureError> {
        let records = match &config.fixture_path {
            Some(path) => load_records(path)?,
            None => parse_records(SAMPLE_FIXTURE)?,
        };
        tracing::info!(
            records = records.len(),
            theme = config.theme.as_str(),
            "dashboard context ready"
        );
        Ok(Self::new(config.theme, records).with_limits(config.top_n, config.flag_limit))
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Only the theme changes; the catalog stays as loaded.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn flag_limit(&self) -> usize {
        self.flag_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_fixture_parses() {
        let records = parse_records(SAMPLE_FIXTURE).unwrap();
        assert!(!records.is_empty());
    }

    #[test]
    fn toggling_flips_between_light_and_dark() {
        let mut ctx = DashboardContext::new(Theme::Light, Vec::new());
        assert_eq!(ctx.toggle_theme(), Theme::Dark);
        assert!(ctx.theme().is_dark());
        assert_eq!(ctx.toggle_theme(), Theme::Light);
    }

    #[test]
    fn from_config_uses_limits_and_sample_fixture() {
        let config = AppConfig {
            top_n: 2,
            flag_limit: 1,
            ..AppConfig::default()
        };
        let ctx = DashboardContext::from_config(&config).unwrap();
        assert_eq!(ctx.top_n(), 2);
        assert_eq!(ctx.flag_limit(), 1);
        assert_eq!(ctx.records().len(), parse_records(SAMPLE_FIXTURE).unwrap().len());
    }

    #[test]
    fn missing_fixture_file_is_an_error() {
        let config = AppConfig {
            fixture_path: Some("/no/such/fixture.json".into()),
            ..AppConfig::default()
        };
        assert!(matches!(
            DashboardContext::from_config(&config),
            Err(FixtureError::Io { .. })
        ));
    }

    #[test]
    fn theme_parses_case_insensitively() {
        assert_eq!("DARK".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("blue".parse::<Theme>().is_err());
    }
}
