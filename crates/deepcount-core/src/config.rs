//! Deep-count configuration.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Children fetched per enumeration request.
///
/// Bounds memory and per-step latency; not correctness-critical.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Configuration for a deep count.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct CountConfig {
    /// Root path to count.
    pub root: PathBuf,

    /// Children fetched per enumeration request.
    #[builder(default = "DEFAULT_BATCH_SIZE")]
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

impl CountConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref root) = self.root {
            if root.as_os_str().is_empty() {
                return Err("Root path cannot be empty".to_string());
            }
        } else {
            return Err("Root path is required".to_string());
        }
        if let Some(0) = self.batch_size {
            return Err("Batch size must be at least 1".to_string());
        }
        Ok(())
    }
}

impl CountConfig {
    /// Create a new config builder.
    pub fn builder() -> CountConfigBuilder {
        CountConfigBuilder::default()
    }

    /// Create a simple config for counting a path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}
