//! Configuration loading for Accessors.
//!
//! The config file lives at `~/.accessors/config.toml` unless the
//! `ACCESSORS_CONFIG` environment variable points somewhere else.
//!
//! Raw TOML structs (all `Option` fields) stay private to this crate. They are
//! resolved into [`AccessorsConfig`] at the parse boundary, where missing values
//! take their defaults and side lengths are validated.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use accessors_types::{ShapeError, SideLength};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "ACCESSORS_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid demo.{field}: {source}")]
    InvalidSideLength {
        field: &'static str,
        #[source]
        source: ShapeError,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    log: Option<RawLogConfig>,
    demo: Option<RawDemoConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLogConfig {
    level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDemoConfig {
    side_length: Option<f64>,
    eager_side_length: Option<f64>,
    eager_resized_side_length: Option<f64>,
    target_area: Option<f64>,
    rejected_area: Option<f64>,
    cube_input: Option<f64>,
    hypotenuse_legs: Option<[f64; 2]>,
    first_name: Option<String>,
    last_name: Option<String>,
    renamed_first_name: Option<String>,
}

/// Inputs for the demonstration trace.
///
/// Defaults reproduce the classic walkthrough: a 5-unit square, a 2-unit eager
/// square resized to 10, an area assignment of 64 followed by a rejected 0.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub side_length: SideLength,
    pub eager_side_length: f64,
    pub eager_resized_side_length: f64,
    pub target_area: f64,
    pub rejected_area: f64,
    pub cube_input: f64,
    pub hypotenuse_legs: (f64, f64),
    pub first_name: String,
    pub last_name: String,
    pub renamed_first_name: String,
}

impl DemoConfig {
    const DEFAULT_SIDE_LENGTH: SideLength = match SideLength::new(5.0) {
        Ok(side_length) => side_length,
        Err(_) => panic!("default side length must be positive"),
    };
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            side_length: Self::DEFAULT_SIDE_LENGTH,
            eager_side_length: 2.0,
            eager_resized_side_length: 10.0,
            target_area: 64.0,
            rejected_area: 0.0,
            cube_input: 3.0,
            hypotenuse_legs: (3.0, 4.0),
            first_name: "Carr@ol-Ann".to_string(),
            last_name: ")Freel*ing".to_string(),
            renamed_first_name: "Hea@)@(!$)ther".to_string(),
        }
    }
}

impl TryFrom<RawDemoConfig> for DemoConfig {
    type Error = ConfigError;

    fn try_from(raw: RawDemoConfig) -> Result<Self, Self::Error> {
        let defaults = Self::default();
        let side_length = match raw.side_length {
            Some(value) => SideLength::new(value).map_err(|source| {
                ConfigError::InvalidSideLength {
                    field: "side_length",
                    source,
                }
            })?,
            None => defaults.side_length,
        };
        Ok(Self {
            side_length,
            eager_side_length: raw.eager_side_length.unwrap_or(defaults.eager_side_length),
            eager_resized_side_length: raw
                .eager_resized_side_length
                .unwrap_or(defaults.eager_resized_side_length),
            target_area: raw.target_area.unwrap_or(defaults.target_area),
            rejected_area: raw.rejected_area.unwrap_or(defaults.rejected_area),
            cube_input: raw.cube_input.unwrap_or(defaults.cube_input),
            hypotenuse_legs: raw
                .hypotenuse_legs
                .map(|[a, b]| (a, b))
                .unwrap_or(defaults.hypotenuse_legs),
            first_name: raw.first_name.unwrap_or(defaults.first_name),
            last_name: raw.last_name.unwrap_or(defaults.last_name),
            renamed_first_name: raw
                .renamed_first_name
                .unwrap_or(defaults.renamed_first_name),
        })
    }
}

/// Resolved configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessorsConfig {
    log_level: Option<String>,
    demo: DemoConfig,
}

impl AccessorsConfig {
    /// Parse and resolve a TOML document.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        let log_level = raw
            .log
            .and_then(|log| log.level)
            .map(|level| level.trim().to_string())
            .filter(|level| !level.is_empty());
        let demo = DemoConfig::try_from(raw.demo.unwrap_or_default())?;
        Ok(Self { log_level, demo })
    }

    /// Load from an explicit path. A missing file is `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::parse(&content).map(Some)
    }

    /// Load from the default location.
    ///
    /// Failures are not propagated: they come back as warnings alongside `None`
    /// so the caller can report them once logging is up.
    pub fn load() -> (Option<Self>, Vec<String>) {
        let Some(path) = Self::path() else {
            return (None, vec!["No home directory; using default config".to_string()]);
        };
        match Self::load_from(&path) {
            Ok(config) => (config, Vec::new()),
            Err(err) => (
                None,
                vec![format!("Ignoring config at {}: {err}", path.display())],
            ),
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path(env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
    }

    /// Log filter directive from `[log] level`, if set.
    #[must_use]
    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }

    #[must_use]
    pub fn demo(&self) -> &DemoConfig {
        &self.demo
    }
}

fn config_path(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path.filter(|p| !p.as_os_str().is_empty()) {
        return Some(path);
    }
    dirs::home_dir().map(|home| home.join(".accessors").join("config.toml"))
}
