//! Hierarchical document scopes.
//!
//! A namespace is an ordered list of segments rendered by joining them with
//! [`SCOPE_SEPARATOR`]. The empty list is the root namespace. Namespaces only
//! grow by appending a trailing segment; they are never edited in place.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Separator placed between namespace segments.
pub const SCOPE_SEPARATOR: &str = "/";

/// An ordered, append-only sequence of scope segments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Namespace {
    segments: Vec<String>,
}

impl Namespace {
    /// The root namespace (no segments).
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a rendered namespace such as `"tenant/inventory"`.
    ///
    /// Empty segments are dropped, so `""` is the root and `"a//b"` equals
    /// `"a/b"`.
    pub fn parse(rendered: &str) -> Self {
        Self {
            segments: rendered
                .split(SCOPE_SEPARATOR)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Build a namespace from explicit segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// A new namespace with `scope` appended as the trailing segment.
    ///
    /// For a non-root parent the result renders as `parent + "/" + scope`.
    /// A child of the root renders as just `scope`, with no leading separator.
    ///
    /// `scope` is split like [`parse`](Self::parse): `"a/b"` appends two
    /// segments and empty segments are dropped, so `child("")` equals `self`.
    pub fn child(&self, scope: impl AsRef<str>) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(Self::parse(scope.as_ref()).segments);
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The enclosing namespace, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.segments.split_last()?;
        Some(Self {
            segments: rest.to_vec(),
        })
    }

    /// Segments joined by [`SCOPE_SEPARATOR`].
    pub fn render(&self) -> String {
        self.segments.join(SCOPE_SEPARATOR)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for Namespace {
    fn from(rendered: &str) -> Self {
        Self::parse(rendered)
    }
}

impl From<String> for Namespace {
    fn from(rendered: String) -> Self {
        Self::parse(&rendered)
    }
}

impl Serialize for Namespace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}

impl<'de> Deserialize<'de> for Namespace {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rendered = String::deserialize(deserializer)?;
        Ok(Self::parse(&rendered))
    }
}
