//! Wire contract for the objscope object store.
//!
//! Documents are served under `<target>/json/<namespace>`. A fixed diagnostic
//! path answers with a non-standard status code so a client can tell the
//! right service apart from any other reachable HTTP endpoint.

pub mod endpoint;
pub mod operation;

pub use endpoint::{endpoints, probe_url, request_base, ID_PARAM, PROBE_STATUS};
pub use objscope_types::SCOPE_SEPARATOR;
pub use operation::{Operation, StatusClass, STATUS_NOT_FOUND, STATUS_OK};
