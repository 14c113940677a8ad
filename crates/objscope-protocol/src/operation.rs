use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP status every successful document operation answers with.
pub const STATUS_OK: u16 = 200;

/// HTTP status for a missing document.
pub const STATUS_NOT_FOUND: u16 = 404;

/// The document operations of the wire contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// `POST`, JSON payload body, no query.
    Insert,
    /// `GET` with `id=<id>`.
    Get,
    /// `PUT` with `id=<id>` and a JSON payload body.
    Update,
    /// `DELETE` with `id=<id>`.
    Delete,
    /// `GET` with no query: every document in the namespace.
    List,
}

/// How an operation interprets a response status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    /// The addressed document does not exist. Not a failure.
    NotFound,
    /// Anything outside the documented set for the operation.
    Unexpected,
}

impl Operation {
    /// HTTP method name.
    pub fn method(self) -> &'static str {
        match self {
            Self::Insert => "POST",
            Self::Get | Self::List => "GET",
            Self::Update => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether the request carries `id=<id>`.
    pub fn takes_id(self) -> bool {
        matches!(self, Self::Get | Self::Update | Self::Delete)
    }

    /// Whether the request carries a JSON body.
    pub fn has_body(self) -> bool {
        matches!(self, Self::Insert | Self::Update)
    }

    /// Whether a 404 is a normal "absent" answer rather than a failure.
    ///
    /// Update has no distinguished not-found signal; a missing ID there is
    /// folded into the unexpected-status failure.
    pub fn reports_not_found(self) -> bool {
        matches!(self, Self::Get | Self::Delete)
    }

    pub fn classify(self, status: u16) -> StatusClass {
        match status {
            STATUS_OK => StatusClass::Success,
            STATUS_NOT_FOUND if self.reports_not_found() => StatusClass::NotFound,
            _ => StatusClass::Unexpected,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Insert => "insert",
            Self::Get => "get",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::List => "list",
        };
        f.write_str(name)
    }
}
