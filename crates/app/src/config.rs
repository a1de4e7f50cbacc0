//! Environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::context::Theme;

pub const ENV_FIXTURE: &str = "CLEARLABEL_FIXTURE";
pub const ENV_THEME: &str = "CLEARLABEL_THEME";
pub const ENV_SCORING_DELAY_MS: &str = "CLEARLABEL_SCORING_DELAY_MS";
pub const ENV_SCORING_TIMEOUT_MS: &str = "CLEARLABEL_SCORING_TIMEOUT_MS";
pub const ENV_TOP_N: &str = "CLEARLABEL_TOP_N";
pub const ENV_FLAG_LIMIT: &str = "CLEARLABEL_FLAG_LIMIT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `None` means the embedded sample fixture.
    pub fixture_path: Option<PathBuf>,
    pub theme: Theme,
    pub scoring_delay: Duration,
    pub scoring_timeout: Duration,
    pub top_n: usize,
    pub flag_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fixture_path: None,
            theme: Theme::Light,
            scoring_delay: Duration::from_millis(800),
            scoring_timeout: Duration::from_millis(5_000),
            top_n: 5,
            flag_limit: 5,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let fixture_path = match lookup(ENV_FIXTURE) {
            Some(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
            _ => {
                tracing::debug!("{ENV_FIXTURE} not set; using embedded sample fixture");
                None
            }
        };

        let theme = match lookup(ENV_THEME) {
            Some(raw) => raw.parse::<Theme>().map_err(|_| ConfigError::Invalid {
                key: ENV_THEME,
                value: raw,
            })?,
            None => defaults.theme,
        };

        Ok(Self {
            fixture_path,
            theme,
            scoring_delay: parse_millis(&lookup, ENV_SCORING_DELAY_MS)?
                .unwrap_or(defaults.scoring_delay),
            scoring_timeout: parse_millis(&lookup, ENV_SCORING_TIMEOUT_MS)?
                .unwrap_or(defaults.scoring_timeout),
            top_n: parse_usize(&lookup, ENV_TOP_N)?.unwrap_or(defaults.top_n),
            flag_limit: parse_usize(&lookup, ENV_FLAG_LIMIT)?.unwrap_or(defaults.flag_limit),
        })
    }
}

fn parse_usize<F>(lookup: &F, key: &'static str) -> Result<Option<usize>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::Invalid { key, value: raw })
        })
        .transpose()
}

fn parse_millis<F>(lookup: &F, key: &'static str) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(parse_usize(lookup, key)?.map(|ms| Duration::from_millis(ms as u64)))
}
