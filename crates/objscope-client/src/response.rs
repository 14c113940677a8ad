//! Translation of HTTP answers into typed results.
//!
//! Every operation accepts exactly one success status. `get` and `delete`
//! additionally treat 404 as "absent", which is returned as `Ok(None)` and
//! never as an error. Everything else becomes [`ClientError::Remote`] with the
//! status and the raw body.

use objscope_protocol::{Operation, StatusClass};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult};

/// A raw answer to one document request.
#[derive(Debug)]
pub(crate) struct Reply {
    pub op: Operation,
    pub status: u16,
    pub body: Vec<u8>,
}

impl Reply {
    fn remote(self) -> ClientError {
        ClientError::Remote {
            status: self.status,
            body: self.body,
        }
    }

    /// Decode a success body; a 404 on `get`/`delete` yields `Ok(None)`.
    pub fn into_found<T: DeserializeOwned>(self) -> ClientResult<Option<T>> {
        match self.op.classify(self.status) {
            StatusClass::Success => Ok(Some(serde_json::from_slice(&self.body)?)),
            StatusClass::NotFound => Ok(None),
            StatusClass::Unexpected => Err(self.remote()),
        }
    }

    /// Decode a success body; any other status is a remote error.
    pub fn into_success<T: DeserializeOwned>(self) -> ClientResult<T> {
        match self.op.classify(self.status) {
            StatusClass::Success => Ok(serde_json::from_slice(&self.body)?),
            StatusClass::NotFound | StatusClass::Unexpected => Err(self.remote()),
        }
    }

    /// Require a success status and ignore the body.
    pub fn into_unit(self) -> ClientResult<()> {
        match self.op.classify(self.status) {
            StatusClass::Success => Ok(()),
            StatusClass::NotFound | StatusClass::Unexpected => Err(self.remote()),
        }
    }
}
