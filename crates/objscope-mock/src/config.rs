use std::net::SocketAddr;
use std::path::Path;

use objscope_types::DeletionSentinel;
use serde::{Deserialize, Serialize};

use crate::error::{MockError, MockResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    pub bind_addr: SocketAddr,
    /// Convention the store uses to mark live documents in `delete_at`.
    pub deletion_sentinel: DeletionSentinel,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            deletion_sentinel: DeletionSentinel::Negative,
        }
    }
}

impl MockConfig {
    pub fn from_toml_str(raw: &str) -> MockResult<Self> {
        toml::from_str(raw).map_err(|e| MockError::Config(e.to_string()))
    }

    /// Load a TOML config file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> MockResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}
