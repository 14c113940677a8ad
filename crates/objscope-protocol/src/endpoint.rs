use objscope_types::Namespace;

/// HTTP endpoint paths for the object store.
pub mod endpoints {
    /// Path segment under which every namespace is mounted.
    pub const OBJECT_PREFIX: &str = "json";
    /// Diagnostic path answering with a caller-chosen status code.
    pub const SPECIAL_CODE: &str = "/mock/code/special-http-code";
    /// Connectivity probe: the special-code path asking for [`super::PROBE_STATUS`].
    pub const PROBE: &str = "/mock/code/special-http-code/997";
}

/// Status the probe endpoint always answers with.
pub const PROBE_STATUS: u16 = 997;

/// Query parameter carrying a document ID.
pub const ID_PARAM: &str = "id";

/// Base URL for every document request in `namespace`.
///
/// The root namespace yields `<target>/json` with no trailing separator.
pub fn request_base(target: &str, namespace: &Namespace) -> String {
    if namespace.is_root() {
        format!("{target}/{}", endpoints::OBJECT_PREFIX)
    } else {
        format!("{target}/{}/{namespace}", endpoints::OBJECT_PREFIX)
    }
}

/// Full URL of the connectivity probe for `target`.
pub fn probe_url(target: &str) -> String {
    format!("{target}{}", endpoints::PROBE)
}
