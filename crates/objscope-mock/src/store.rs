use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use chrono::Utc;
use objscope_types::{DeletionSentinel, Document, DocumentId, Envelope, Namespace};
use serde_json::Value;

use crate::error::MockResult;

/// A stored document with an untyped payload.
pub type StoredDocument = Document<Value>;

/// Namespaced document storage behind the mock HTTP surface.
///
/// Implementations must satisfy these invariants:
/// - IDs are minted by the store and unique across all namespaces.
/// - `updated_at` strictly increases on every successful mutation.
/// - Deleted documents are invisible to `get`, `update`, `delete` and `list`.
/// - Namespaces are matched exactly; a parent does not see its children.
pub trait DocumentStore: Send + Sync {
    /// Store `data` as a new document and return it with its envelope.
    fn insert(&self, namespace: &Namespace, data: Value) -> MockResult<StoredDocument>;

    /// Read a live document. Returns `Ok(None)` if it does not exist.
    fn get(&self, namespace: &Namespace, id: &DocumentId) -> MockResult<Option<StoredDocument>>;

    /// Replace the payload of a live document.
    ///
    /// Returns `Ok(None)` if it does not exist.
    fn update(
        &self,
        namespace: &Namespace,
        id: &DocumentId,
        data: Value,
    ) -> MockResult<Option<StoredDocument>>;

    /// Mark a live document deleted and return it as it was deleted.
    ///
    /// Returns `Ok(None)` if it does not exist.
    fn delete(&self, namespace: &Namespace, id: &DocumentId) -> MockResult<Option<StoredDocument>>;

    /// All live documents in `namespace`, in creation order.
    fn list(&self, namespace: &Namespace) -> MockResult<Vec<StoredDocument>>;
}

/// In-memory, HashMap-based document store.
///
/// Documents are soft-deleted: deletion stamps `delete_at` and leaves the
/// record in place. All timestamps come from one store-wide clock that never
/// repeats a value, so `create_at` gives a total creation order.
pub struct InMemoryDocumentStore {
    state: RwLock<State>,
    sentinel: DeletionSentinel,
}

#[derive(Default)]
struct State {
    namespaces: HashMap<Namespace, BTreeMap<DocumentId, StoredDocument>>,
    clock: i64,
}

impl State {
    /// Wall-clock nanoseconds, bumped past the last issued value.
    fn tick(&mut self) -> i64 {
        let now = Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX);
        self.clock = now.max(self.clock.saturating_add(1));
        self.clock
    }

    fn live_mut(
        &mut self,
        namespace: &Namespace,
        id: &DocumentId,
        sentinel: DeletionSentinel,
    ) -> Option<&mut StoredDocument> {
        self.namespaces
            .get_mut(namespace)
            .and_then(|docs| docs.get_mut(id))
            .filter(|doc| !doc.envelope.is_deleted(sentinel))
    }
}

impl InMemoryDocumentStore {
    pub fn new(sentinel: DeletionSentinel) -> Self {
        Self {
            state: RwLock::new(State::default()),
            sentinel,
        }
    }

    /// Number of live documents across all namespaces.
    pub fn len(&self) -> usize {
        self.state
            .read()
            .expect("lock poisoned")
            .namespaces
            .values()
            .flat_map(BTreeMap::values)
            .filter(|doc| !doc.envelope.is_deleted(self.sentinel))
            .count()
    }

    /// Returns `true` if no live document exists.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every document, live or deleted.
    pub fn clear(&self) {
        self.state.write().expect("lock poisoned").namespaces.clear();
    }

    fn is_live(&self, doc: &StoredDocument) -> bool {
        !doc.envelope.is_deleted(self.sentinel)
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new(DeletionSentinel::default())
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn insert(&self, namespace: &Namespace, data: Value) -> MockResult<StoredDocument> {
        let mut state = self.state.write().expect("lock poisoned");
        let id = DocumentId::new(uuid::Uuid::now_v7().to_string());
        let envelope = Envelope::created(id.clone(), state.tick(), self.sentinel);
        let doc = Document::new(envelope, data);

        state
            .namespaces
            .entry(namespace.clone())
            .or_default()
            .insert(id, doc.clone());
        Ok(doc)
    }

    fn get(&self, namespace: &Namespace, id: &DocumentId) -> MockResult<Option<StoredDocument>> {
        let state = self.state.read().expect("lock poisoned");
        Ok(state
            .namespaces
            .get(namespace)
            .and_then(|docs| docs.get(id))
            .filter(|doc| self.is_live(doc))
            .cloned())
    }

    fn update(
        &self,
        namespace: &Namespace,
        id: &DocumentId,
        data: Value,
    ) -> MockResult<Option<StoredDocument>> {
        let mut state = self.state.write().expect("lock poisoned");
        let now = state.tick();
        let Some(doc) = state.live_mut(namespace, id, self.sentinel) else {
            return Ok(None);
        };
        doc.envelope.updated_at = now;
        doc.data = data;
        Ok(Some(doc.clone()))
    }

    fn delete(&self, namespace: &Namespace, id: &DocumentId) -> MockResult<Option<StoredDocument>> {
        let mut state = self.state.write().expect("lock poisoned");
        let now = state.tick();
        let Some(doc) = state.live_mut(namespace, id, self.sentinel) else {
            return Ok(None);
        };
        doc.envelope.updated_at = now;
        doc.envelope.deleted_at = now;
        Ok(Some(doc.clone()))
    }

    fn list(&self, namespace: &Namespace) -> MockResult<Vec<StoredDocument>> {
        let state = self.state.read().expect("lock poisoned");
        let mut docs: Vec<StoredDocument> = state
            .namespaces
            .get(namespace)
            .map(|docs| {
                docs.values()
                    .filter(|doc| self.is_live(doc))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        docs.sort_by_key(|doc| doc.envelope.created_at);
        Ok(docs)
    }
}

impl std::fmt::Debug for InMemoryDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryDocumentStore")
            .field("live_documents", &self.len())
            .field("sentinel", &self.sentinel)
            .finish()
    }
}
