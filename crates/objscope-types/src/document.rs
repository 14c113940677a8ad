use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::id::DocumentId;

/// Server convention for the `delete_at` field of a live document.
///
/// The reference store writes a negative value into `delete_at` while a
/// document is live and the deletion time (nanoseconds) once it is deleted.
/// Other deployments mark live documents with zero. Which convention applies
/// is part of the server contract, so it is configured rather than inferred.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletionSentinel {
    /// `delete_at < 0` means live; any non-negative value is a deletion time.
    #[default]
    Negative,
    /// `delete_at <= 0` means live; only positive values are deletion times.
    NonPositive,
}

impl DeletionSentinel {
    /// Value a server following this convention writes for a live document.
    pub fn live_marker(self) -> i64 {
        match self {
            Self::Negative => -1,
            Self::NonPositive => 0,
        }
    }

    /// Returns `true` if `deleted_at` marks a deleted document.
    pub fn is_deleted(self, deleted_at: i64) -> bool {
        match self {
            Self::Negative => deleted_at >= 0,
            Self::NonPositive => deleted_at > 0,
        }
    }
}

/// Bookkeeping fields the server maintains for every stored document.
///
/// None of these are ever written by the client. `updated_at` is refreshed by
/// the server on every successful mutation. Timestamps are nanoseconds since
/// the UNIX epoch. Fields missing from a response decode as their zero value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub id: DocumentId,
    #[serde(rename = "create_at", default)]
    pub created_at: i64,
    #[serde(rename = "update_at", default)]
    pub updated_at: i64,
    #[serde(rename = "delete_at", default)]
    pub deleted_at: i64,
}

impl Envelope {
    /// Envelope of a freshly created live document.
    pub fn created(id: DocumentId, now_nanos: i64, sentinel: DeletionSentinel) -> Self {
        Self {
            id,
            created_at: now_nanos,
            updated_at: now_nanos,
            deleted_at: sentinel.live_marker(),
        }
    }

    /// Whether this document has been deleted under the given convention.
    pub fn is_deleted(&self, sentinel: DeletionSentinel) -> bool {
        sentinel.is_deleted(self.deleted_at)
    }

    pub fn created_at_utc(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_nanos(self.created_at)
    }

    pub fn updated_at_utc(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_nanos(self.updated_at)
    }

    /// Deletion time, or `None` while the document is live.
    pub fn deleted_at_utc(&self, sentinel: DeletionSentinel) -> Option<DateTime<Utc>> {
        self.is_deleted(sentinel)
            .then(|| DateTime::<Utc>::from_timestamp_nanos(self.deleted_at))
    }
}

/// A payload paired with its envelope.
///
/// On the wire the envelope fields sit at the top level and the payload sits
/// under `data`:
///
/// ```json
/// {"id": "abc-1", "create_at": 1, "update_at": 1, "delete_at": -1, "data": {"name": "Test"}}
/// ```
///
/// Callers whose own types do not carry the bookkeeping fields read and write
/// through this wrapper.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document<T> {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub data: T,
}

impl<T> Document<T> {
    pub fn new(envelope: Envelope, data: T) -> Self {
        Self { envelope, data }
    }

    pub fn id(&self) -> &DocumentId {
        &self.envelope.id
    }

    /// Drop the envelope and keep the payload.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// A listed document whose payload schema is unknown to the client.
///
/// The payload is kept as a JSON object. A `null` or absent `data` field
/// decodes as an empty object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingEntry {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default, deserialize_with = "null_as_empty_map")]
    pub data: Map<String, Value>,
}

impl ListingEntry {
    pub fn id(&self) -> &DocumentId {
        &self.envelope.id
    }

    /// Look up a top-level payload field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

impl From<ListingEntry> for Document<Map<String, Value>> {
    fn from(entry: ListingEntry) -> Self {
        Document::new(entry.envelope, entry.data)
    }
}

fn null_as_empty_map<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}
