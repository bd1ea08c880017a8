//! Search configuration for notecap
//!
//! Configuration is read from `search.toml` in the data directory, or from an
//! explicit path. Every table and key is optional:
//!
//! ```toml
//! [defaults]
//! max_results = 20
//! title_weight = 3.0
//!
//! [tuning]
//! fuzzy_min_ratio = 0.75
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NotecapError, Result};
use crate::search::{ScoringTuning, SearchEngine, SearchOptions};

/// Name of the configuration file inside the data directory
pub const CONFIG_FILE_NAME: &str = "search.toml";

/// Search configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Default per-query options, overridable from the command line
    #[serde(default)]
    pub defaults: SearchOptions,

    /// Ranking constants
    #[serde(default)]
    pub tuning: ScoringTuning,
}

impl SearchConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| NotecapError::io_operation("read config", path.display(), e))?;
        let config: SearchConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `search.toml` from `data_dir`, falling back to defaults when absent
    pub fn load_or_default(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NotecapError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Build a search engine from the configured tuning
    pub fn engine(&self) -> SearchEngine {
        SearchEngine::new(self.tuning.clone())
    }

    fn validate(&self) -> Result<()> {
        let tuning = &self.tuning;
        if !(0.0..=1.0).contains(&tuning.fuzzy_min_ratio) {
            crate::bail_invalid!("tuning.fuzzy_min_ratio", tuning.fuzzy_min_ratio);
        }
        if tuning.short_text_boost < 0.0 {
            crate::bail_invalid!("tuning.short_text_boost", tuning.short_text_boost);
        }
        if self.defaults.title_weight < 0.0 {
            crate::bail_invalid!("defaults.title_weight", self.defaults.title_weight);
        }
        if self.defaults.content_weight < 0.0 {
            crate::bail_invalid!("defaults.content_weight", self.defaults.content_weight);
        }
        Ok(())
    }
}
