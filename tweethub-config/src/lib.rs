//! Loader for TweetHub configuration: YAML file + environment overlays.
//!
//! The expected file (default `./tweethub.yaml`) supplies an ordered
//! `accounts` list, an optional `messages` list for the predefined-message
//! modes, and optional `browser`/`site`/`selectors` sections. Values may
//! reference environment variables as `${VAR}` — handy for keeping passwords
//! out of the file.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::path::Path;

mod selectors;
pub use selectors::Selectors;

const MAX_ENV_EXPANSION_DEPTH: usize = 8;

/// One credential pair. List order is significant: the first entry is the
/// default identity for single-account runs.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub password: String,
}

// Accounts end up in per-run log context; keep the password out of it.
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// WebDriver endpoint and session settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Running WebDriver service to attach to (Chromedriver by default).
    pub webdriver_url: String,
    /// Run the browser without a visible window.
    pub headless: bool,
    /// Wall-clock budget for one authenticate-then-act session.
    pub session_deadline_secs: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            webdriver_url: "http://localhost:9515".into(),
            headless: false,
            session_deadline_secs: 120,
        }
    }
}

/// The target site. Login, profile, and tweet URLs are path-joined against
/// `base_url`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://twitter.com".into(),
        }
    }
}

/// Fully merged, strongly typed configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TweethubConfig {
    pub accounts: Vec<Account>,
    /// Predefined messages for `--use-messages` / `--random`.
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub browser: BrowserConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub selectors: Selectors,
}

/// Recursively expand `${VAR}` references in every string of the raw config
/// tree. Expansion is re-applied until it reaches a fixpoint or the depth
/// cap, so variables may reference other variables without looping forever.
fn expand_env(value: &mut Value) {
    match value {
        Value::String(s) if s.contains('$') => {
            let mut current = std::mem::take(s);
            for _ in 0..MAX_ENV_EXPANSION_DEPTH {
                let next = shellexpand::env(&current)
                    .map(|cow| cow.into_owned())
                    .unwrap_or_else(|_| current.clone());
                if next == current {
                    break;
                }
                current = next;
            }
            *s = current;
        }
        Value::Array(items) => items.iter_mut().for_each(expand_env),
        Value::Object(map) => map.values_mut().for_each(expand_env),
        _ => {}
    }
}

/// Builder that hides the `config` crate wiring (YAML + env overrides).
pub struct TweethubConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for TweethubConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl TweethubConfigLoader {
    /// Start with the defaults: `TWEETHUB_`-prefixed environment overrides,
    /// to be combined with a YAML file or inline snippet.
    pub fn new() -> Self {
        let builder =
            Config::builder().add_source(Environment::with_prefix("TWEETHUB").separator("__"));
        Self { builder }
    }

    /// Attach a config file; the `config` crate infers the format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self.builder.add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Merge an inline YAML snippet (used by tests).
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources.
    ///
    /// `${VAR}` placeholders are expanded before the typed structs are
    /// materialised. An empty `accounts` list is rejected here: every mode
    /// of the tool needs at least one identity.
    pub fn load(self) -> Result<TweethubConfig, ConfigError> {
        let merged = self.builder.build()?;

        let mut raw: Value = merged.try_deserialize()?;
        expand_env(&mut raw);

        let typed: TweethubConfig =
            serde_json::from_value(raw).map_err(|e| ConfigError::Message(e.to_string()))?;

        if typed.accounts.is_empty() {
            return Err(ConfigError::Message(
                "`accounts` must contain at least one username/password pair".into(),
            ));
        }

        Ok(typed)
    }
}
