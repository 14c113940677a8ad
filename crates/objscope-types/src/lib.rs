//! Foundation types for the objscope object store client.
//!
//! The remote store keeps schema-less JSON documents. Every stored document is
//! wrapped in a small bookkeeping envelope that only the server writes; the
//! client reads it back. Documents live under a hierarchical [`Namespace`].
//!
//! # Key Types
//!
//! - [`DocumentId`] — Server-assigned document identifier
//! - [`Envelope`] — The four bookkeeping fields (`id`, `create_at`, `update_at`, `delete_at`)
//! - [`Document`] — A payload paired with its envelope under the `data` key
//! - [`ListingEntry`] — A document whose payload schema is unknown to the caller
//! - [`DeletionSentinel`] — Convention deciding whether `delete_at` marks a live document
//! - [`Namespace`] — Ordered scope segments joined by `/`

pub mod document;
pub mod id;
pub mod namespace;

pub use document::{DeletionSentinel, Document, Envelope, ListingEntry};
pub use id::DocumentId;
pub use namespace::{Namespace, SCOPE_SEPARATOR};
