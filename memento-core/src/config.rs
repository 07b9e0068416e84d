//! Configuration for the memento workspace.
//!
//! Maps directly to `memento.toml`. Every section and key is optional.

use serde::{Deserialize, Serialize};

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MementoConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Caretaker history settings.
    #[serde(default)]
    pub history: HistoryConfig,
    /// Demo script settings.
    #[serde(default)]
    pub demo: DemoConfig,
}

impl MementoConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `MementoError::Config` if the TOML is invalid or fails
    /// validation.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| crate::MementoError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check values that TOML typing alone cannot enforce.
    ///
    /// # Errors
    /// Returns `MementoError::Config` describing the first invalid value.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.general.log_level.trim().is_empty() {
            return Err(crate::MementoError::Config(
                "general.log_level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log filter directive: trace, debug, info, warn, error, or a full
    /// `EnvFilter` expression.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Caretaker history settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum snapshots kept; the oldest is evicted past this. 0 = unbounded.
    #[serde(default)]
    pub max_depth: usize,
}

impl HistoryConfig {
    /// The depth bound, or `None` when unbounded.
    #[must_use]
    pub fn depth_limit(&self) -> Option<usize> {
        (self.max_depth > 0).then_some(self.max_depth)
    }
}

/// Demo script settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// State the originator starts from before the first change.
    #[serde(default)]
    pub initial_state: String,
    /// States applied and saved in order before rolling back.
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            initial_state: String::new(),
            labels: default_labels(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_labels() -> Vec<String> {
    ["State 1", "State 2", "State 3"].map(String::from).to_vec()
}
