use std::path::Path;

use objscope_types::{DeletionSentinel, Namespace};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Everything needed to bind a client, apart from the transport.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base address of the remote service, e.g. `http://127.0.0.1:3000`.
    pub target: String,
    pub namespace: Namespace,
    /// How the server marks live documents in `delete_at`. Must match the
    /// server contract; the reference service uses [`DeletionSentinel::Negative`].
    pub deletion_sentinel: DeletionSentinel,
}

impl ClientConfig {
    pub fn new(target: impl Into<String>, namespace: impl Into<Namespace>) -> Self {
        Self {
            target: target.into(),
            namespace: namespace.into(),
            deletion_sentinel: DeletionSentinel::default(),
        }
    }

    pub fn with_deletion_sentinel(mut self, sentinel: DeletionSentinel) -> Self {
        self.deletion_sentinel = sentinel;
        self
    }

    /// Reject configurations that can never produce a client.
    pub fn validate(&self) -> ClientResult<()> {
        if self.target.is_empty() {
            return Err(ClientError::Config(
                "connectivity target must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn from_toml_str(raw: &str) -> ClientResult<Self> {
        toml::from_str(raw).map_err(|e| ClientError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ClientError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }
}
