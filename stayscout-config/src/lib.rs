//! Loader for the Stayscout configuration with YAML + environment overlays.
//!
//! The canonical file is `stayscout.yaml` next to the binary's working
//! directory. Every field can also be supplied or overridden through
//! `STAYSCOUT_`-prefixed environment variables (`__` as the section
//! separator, e.g. `STAYSCOUT_PLACES__API_KEY`), and `${VAR}` placeholders
//! inside values expand recursively from the environment.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

/// Top-level configuration for one Stayscout session.
#[derive(Debug, Deserialize)]
pub struct StayscoutConfig {
    pub search: SearchConfig,
    pub places: PlacesConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the scrape starts.
#[derive(Debug, Deserialize)]
pub struct SearchConfig {
    /// Fully parameterised search-results URL (destination, dates, guests).
    pub results_url: String,
}

/// Places API access and nearby-search shape.
#[derive(Debug, Deserialize)]
pub struct PlacesConfig {
    pub api_key: String,
    #[serde(default = "default_places_endpoint")]
    pub endpoint: String,
    /// Radius of the nearby-places search, in meters.
    #[serde(default = "default_nearby_radius")]
    pub nearby_radius_m: u32,
    /// Place category requested from the nearby search.
    #[serde(default = "default_nearby_category")]
    pub nearby_category: String,
}

/// On-disk locations of the persisted JSON documents.
#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_listings_path")]
    pub listings_path: PathBuf,
    #[serde(default = "default_review_path")]
    pub review_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            listings_path: default_listings_path(),
            review_path: default_review_path(),
        }
    }
}

/// WebDriver session settings.
#[derive(Debug, Deserialize)]
pub struct BrowserConfig {
    /// Address of a running WebDriver service (chromedriver).
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,
    #[serde(default = "default_headless")]
    pub headless: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            headless: default_headless(),
        }
    }
}

/// Log sink settings; see `stayscout_common::observability`.
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Duplicate log events to stderr.
    #[serde(default)]
    pub stderr: bool,
    /// Encode log events as JSON instead of text.
    #[serde(default)]
    pub json: bool,
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: None,
            stderr: false,
            json: false,
            filter: default_log_filter(),
        }
    }
}

fn default_places_endpoint() -> String {
    "https://maps.googleapis.com/maps/api/place".into()
}
fn default_nearby_radius() -> u32 {
    500
}
fn default_nearby_category() -> String {
    "restaurant".into()
}
fn default_listings_path() -> PathBuf {
    "hotels_data.json".into()
}
fn default_review_path() -> PathBuf {
    "google_review_data.json".into()
}
fn default_webdriver_url() -> String {
    "http://localhost:9515".into()
}
fn default_headless() -> bool {
    true
}
fn default_log_filter() -> String {
    "info".into()
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hiding the `config` crate wiring (YAML + env overrides).
pub struct StayscoutConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for StayscoutConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl StayscoutConfigLoader {
    /// Start with the defaults: `STAYSCOUT_` env overrides, nothing else.
    pub fn new() -> Self {
        let builder =
            Config::builder().add_source(Environment::with_prefix("STAYSCOUT").separator("__"));
        Self { builder }
    }

    /// Attach a YAML/TOML/JSON file; the `config` crate infers the format
    /// from the suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self.builder.add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Merge an inline YAML snippet (used by tests and doctests).
    ///
    /// ```
    /// use stayscout_config::StayscoutConfigLoader;
    ///
    /// let cfg = StayscoutConfigLoader::new()
    ///     .with_yaml_str(
    ///         r#"
    /// search:
    ///   results_url: "https://example.com/searchresults?ss=Tokyo"
    /// places:
    ///   api_key: "demo-key"
    /// "#,
    ///     )
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(cfg.places.nearby_radius_m, 500);
    /// assert_eq!(cfg.places.nearby_category, "restaurant");
    /// assert!(cfg.browser.headless);
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources.
    ///
    /// Environment variables win over file values, and `${VAR}`
    /// placeholders are expanded before the typed structs materialise.
    pub fn load(self) -> Result<StayscoutConfig, ConfigError> {
        let cfg = self.builder.build()?;

        let mut v: Value = cfg.try_deserialize()?;
        expand_env_in_value(&mut v);

        let typed: StayscoutConfig =
            serde_json::from_value(v).map_err(|e| ConfigError::Message(e.to_string()))?;

        Ok(typed)
    }
}
