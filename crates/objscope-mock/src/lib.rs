//! In-memory reference object store for objscope clients.
//!
//! Serves the document wire contract over HTTP from a process-local store,
//! together with the diagnostic special-status endpoint clients probe on
//! connect. Used as test tooling and as a local development server.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod store;

pub use config::MockConfig;
pub use error::{MockError, MockResult};
pub use server::{MockServer, RunningMock};
pub use store::{DocumentStore, InMemoryDocumentStore, StoredDocument};
