use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{EceError, Result};

/// Literal artifacts left behind by upstream truncation.
pub const DEFAULT_MARKERS: &[&str] = &["[Truncated]", "[...]"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EceConfig {
    pub sanitizer: SanitizerConfig,
    pub atomizer: AtomizerConfig,
    pub fingerprint: FingerprintConfig,
    pub dedup: DedupConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizerConfig {
    /// Drop box drawing, block elements, geometric shapes, misc symbols, dingbats.
    pub strip_terminal_noise: bool,
    /// Drop pictographs, emoticons, transport symbols, stars and check marks.
    pub strip_decorative_emoji: bool,
    pub markers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtomizerConfig {
    pub default_strategy: String,
    /// Tokens per atom for the `window` strategy.
    pub window_size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerprintConfig {
    /// Largest word n-gram used as a SimHash feature.
    pub max_ngram: usize,
    pub seed: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupConfig {
    /// Two fingerprints at or below this Hamming distance are duplicates.
    pub max_distance: u32,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            strip_terminal_noise: true,
            strip_decorative_emoji: true,
            markers: DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl Default for AtomizerConfig {
    fn default() -> Self {
        Self {
            default_strategy: "prose".into(),
            window_size: 32,
        }
    }
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self { max_ngram: 2, seed: 0 }
    }
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self { max_distance: 3 }
    }
}

impl EceConfig {
    /// Parse a JSON document. Missing sections fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading ece config");
        Self::from_json_str(&content)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sanitizer.markers.iter().any(|m| m.is_empty()) {
            return Err(EceError::Config("sanitizer markers must not be empty strings".into()));
        }
        if self.atomizer.window_size == 0 {
            return Err(EceError::Config("atomizer.window_size must be at least 1".into()));
        }
        if !(1..=8).contains(&self.fingerprint.max_ngram) {
            return Err(EceError::Config(format!(
                "fingerprint.max_ngram must be in 1..=8, got {}",
                self.fingerprint.max_ngram
            )));
        }
        if self.dedup.max_distance > 64 {
            return Err(EceError::Config(format!(
                "dedup.max_distance must be at most 64, got {}",
                self.dedup.max_distance
            )));
        }
        Ok(())
    }
}
