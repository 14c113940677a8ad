//! Namespace-scoped client for a schema-less HTTP/JSON object store.
//!
//! An [`ObjectClient`] is bound to a connectivity target and a [`Namespace`].
//! Binding probes a diagnostic endpoint once to make sure the target really is
//! the object store. Every document request then goes to
//! `<target>/json/<namespace>`; only the method, the `id` query parameter and
//! the JSON body vary.
//!
//! A missing document is not an error: `get_*` and [`ObjectClient::delete_by_id`]
//! return `Ok(None)` on 404. Any other unexpected status is a
//! [`ClientError::Remote`] carrying the status code and raw body.
//!
//! ```no_run
//! # async fn demo() -> objscope_client::ClientResult<()> {
//! use objscope_client::ObjectClient;
//!
//! let client = ObjectClient::connect("http://127.0.0.1:3000", "test_scope").await?;
//! let inventory = client.sub_client("inventory").await?;
//!
//! let id = inventory.insert_one(&serde_json::json!({"name": "Test"})).await?;
//! let name: Option<serde_json::Value> = inventory.get_by_id_without_envelope(&id).await?;
//! assert!(name.is_some());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
mod request;
mod response;

pub use client::ObjectClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ConnectivityFailure};

// Re-export the document model
pub use objscope_types::{
    DeletionSentinel, Document, DocumentId, Envelope, ListingEntry, Namespace,
};
