//! Configuration loading and the sink factory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use longhand_core::session::SessionConfig;
use longhand_core::traits::ReportSink;

use crate::firebase::FirebaseSink;
use crate::memory::MemorySink;

/// Configuration for a single report sink.
///
/// Note: Custom Debug impl masks auth tokens to prevent accidental
/// exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SinkConfig {
    Firebase {
        /// Realtime-Database base URL, e.g. `https://app.firebaseio.com`.
        database_url: String,
        #[serde(default)]
        auth_token: Option<String>,
        /// Collection path reports are stored under.
        #[serde(default = "default_collection")]
        collection: String,
    },
    Memory,
}

impl std::fmt::Debug for SinkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkConfig::Firebase {
                database_url,
                auth_token: _,
                collection,
            } => f
                .debug_struct("Firebase")
                .field("database_url", database_url)
                .field("auth_token", &"***")
                .field("collection", collection)
                .finish(),
            SinkConfig::Memory => f.debug_struct("Memory").finish(),
        }
    }
}

fn default_collection() -> String {
    "sessions".to_string()
}

/// Top-level longhand configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LonghandConfig {
    /// Decimal digits per factor.
    #[serde(default = "default_digit_range")]
    pub digit_range: u32,
    /// Problems per session.
    #[serde(default = "default_total_trials")]
    pub total_trials: u32,
    /// Accuracy threshold in percent for a session to pass.
    #[serde(default = "default_required_percent")]
    pub required_percent: f64,
    /// Learner identity sent with the terminal report.
    #[serde(default)]
    pub student_id: Option<String>,
    /// Sink configurations keyed by name.
    #[serde(default)]
    pub sinks: HashMap<String, SinkConfig>,
    /// Sink to deliver to after a session, if any.
    #[serde(default)]
    pub default_sink: Option<String>,
    /// Directory session reports are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_digit_range() -> u32 {
    2
}
fn default_total_trials() -> u32 {
    5
}
fn default_required_percent() -> f64 {
    75.0
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./longhand-results")
}

impl Default for LonghandConfig {
    fn default() -> Self {
        Self {
            digit_range: default_digit_range(),
            total_trials: default_total_trials(),
            required_percent: default_required_percent(),
            student_id: None,
            sinks: HashMap::new(),
            default_sink: None,
            output_dir: default_output_dir(),
        }
    }
}

impl LonghandConfig {
    /// The session parameters this configuration describes. Validation
    /// happens at session construction.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            digit_range: self.digit_range,
            total_trials: self.total_trials,
            required_percent: self.required_percent,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Resolve env vars in a sink config.
fn resolve_sink_config(config: &SinkConfig) -> SinkConfig {
    match config {
        SinkConfig::Firebase {
            database_url,
            auth_token,
            collection,
        } => SinkConfig::Firebase {
            database_url: resolve_env_vars(database_url),
            auth_token: auth_token.as_ref().map(|t| resolve_env_vars(t)),
            collection: collection.clone(),
        },
        SinkConfig::Memory => SinkConfig::Memory,
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `longhand.toml` in the current directory
/// 2. `~/.config/longhand/config.toml`
///
/// Environment variable override: `LONGHAND_FIREBASE_TOKEN`.
pub fn load_config() -> Result<LonghandConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<LonghandConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("longhand.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<LonghandConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => LonghandConfig::default(),
    };

    // Apply env var override for the Firebase auth token
    if let Ok(token) = std::env::var("LONGHAND_FIREBASE_TOKEN") {
        for sink in config.sinks.values_mut() {
            if let SinkConfig::Firebase { auth_token, .. } = sink {
                *auth_token = Some(token.clone());
            }
        }
    }

    // Resolve env vars in all sink configs
    let resolved: HashMap<String, SinkConfig> = config
        .sinks
        .iter()
        .map(|(k, v)| (k.clone(), resolve_sink_config(v)))
        .collect();
    config.sinks = resolved;

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("longhand"))
}

/// Create a sink instance from its configuration.
pub fn create_sink(name: &str, config: &SinkConfig) -> Result<Box<dyn ReportSink>> {
    match config {
        SinkConfig::Firebase {
            database_url,
            auth_token,
            collection,
        } => Ok(Box::new(FirebaseSink::new(
            database_url,
            collection,
            auth_token.clone(),
        ))),
        SinkConfig::Memory => {
            let _ = name;
            Ok(Box::new(MemorySink::new()))
        }
    }
}
