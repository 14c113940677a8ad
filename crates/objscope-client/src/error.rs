use std::borrow::Cow;

use thiserror::Error;

/// Why the connectivity probe failed.
#[derive(Debug, Error)]
pub enum ConnectivityFailure {
    /// The endpoint could not be reached at all (DNS, refused, timeout).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Something answered, but not with the probe status: wrong service.
    #[error(
        "probe answered {status} instead of {expected}, body: {}",
        String::from_utf8_lossy(.body)
    )]
    UnexpectedStatus {
        status: u16,
        expected: u16,
        body: Vec<u8>,
    },
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("cannot connect to object store at {target}: {failure}")]
    Connectivity {
        target: String,
        #[source]
        failure: ConnectivityFailure,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// `body` holds the response bytes exactly as received.
    #[error("remote error: status={status}, body={}", String::from_utf8_lossy(.body))]
    Remote { status: u16, body: Vec<u8> },
}

impl ClientError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            Self::Connectivity {
                failure: ConnectivityFailure::UnexpectedStatus { status, .. },
                ..
            } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body carried by the error, if the server answered at all.
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            Self::Remote { body, .. } => Some(body),
            Self::Connectivity {
                failure: ConnectivityFailure::UnexpectedStatus { body, .. },
                ..
            } => Some(body),
            _ => None,
        }
    }

    /// [`body`](Self::body) as text, with invalid UTF-8 replaced.
    pub fn body_text(&self) -> Option<Cow<'_, str>> {
        self.body().map(String::from_utf8_lossy)
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
