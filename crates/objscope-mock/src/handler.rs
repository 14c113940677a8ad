use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use objscope_protocol::ID_PARAM;
use objscope_types::{DocumentId, Namespace};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{MockError, MockResult};
use crate::store::DocumentStore;

/// Shared handler state.
pub type SharedStore = Arc<dyn DocumentStore>;

#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

impl IdQuery {
    fn require(self) -> MockResult<DocumentId> {
        self.id.map(DocumentId::new).ok_or(MockError::MissingParam(ID_PARAM))
    }
}

fn not_found(namespace: &Namespace, id: &DocumentId) -> Response {
    (
        StatusCode::NOT_FOUND,
        format!("document {id} not found in '{namespace}'"),
    )
        .into_response()
}

/// Answers with whatever status the path asks for.
pub async fn special_code_handler(Path(code): Path<u16>) -> MockResult<StatusCode> {
    StatusCode::from_u16(code).map_err(|_| MockError::InvalidStatus(code))
}

/// `GET`: one document with `id`, otherwise the whole namespace.
pub fn get_handler(
    store: &dyn DocumentStore,
    namespace: Namespace,
    query: IdQuery,
) -> MockResult<Response> {
    match query.id {
        Some(id) => {
            let id = DocumentId::new(id);
            Ok(match store.get(&namespace, &id)? {
                Some(doc) => Json(doc).into_response(),
                None => not_found(&namespace, &id),
            })
        }
        None => Ok(Json(store.list(&namespace)?).into_response()),
    }
}

/// `POST`: store the body as a new document.
pub fn insert_handler(
    store: &dyn DocumentStore,
    namespace: Namespace,
    body: Bytes,
) -> MockResult<Response> {
    let data: Value = serde_json::from_slice(&body)?;
    let doc = store.insert(&namespace, data)?;
    tracing::debug!(namespace = %namespace, id = %doc.id(), "inserted document");
    Ok(Json(doc).into_response())
}

/// `PUT`: replace the payload of `id`.
pub fn update_handler(
    store: &dyn DocumentStore,
    namespace: Namespace,
    query: IdQuery,
    body: Bytes,
) -> MockResult<Response> {
    let id = query.require()?;
    let data: Value = serde_json::from_slice(&body)?;
    Ok(match store.update(&namespace, &id, data)? {
        Some(doc) => Json(doc).into_response(),
        None => not_found(&namespace, &id),
    })
}

/// `DELETE`: soft-delete `id` and return it.
pub fn delete_handler(
    store: &dyn DocumentStore,
    namespace: Namespace,
    query: IdQuery,
) -> MockResult<Response> {
    let id = query.require()?;
    Ok(match store.delete(&namespace, &id)? {
        Some(doc) => Json(doc).into_response(),
        None => not_found(&namespace, &id),
    })
}

// Route adapters: the root namespace is mounted at `/json`, every other one
// at `/json/*namespace`.

pub async fn root_get(
    State(store): State<SharedStore>,
    Query(query): Query<IdQuery>,
) -> MockResult<Response> {
    get_handler(store.as_ref(), Namespace::root(), query)
}

pub async fn root_post(State(store): State<SharedStore>, body: Bytes) -> MockResult<Response> {
    insert_handler(store.as_ref(), Namespace::root(), body)
}

pub async fn root_put(
    State(store): State<SharedStore>,
    Query(query): Query<IdQuery>,
    body: Bytes,
) -> MockResult<Response> {
    update_handler(store.as_ref(), Namespace::root(), query, body)
}

pub async fn root_delete(
    State(store): State<SharedStore>,
    Query(query): Query<IdQuery>,
) -> MockResult<Response> {
    delete_handler(store.as_ref(), Namespace::root(), query)
}

pub async fn scoped_get(
    State(store): State<SharedStore>,
    Path(namespace): Path<String>,
    Query(query): Query<IdQuery>,
) -> MockResult<Response> {
    get_handler(store.as_ref(), Namespace::parse(&namespace), query)
}

pub async fn scoped_post(
    State(store): State<SharedStore>,
    Path(namespace): Path<String>,
    body: Bytes,
) -> MockResult<Response> {
    insert_handler(store.as_ref(), Namespace::parse(&namespace), body)
}

pub async fn scoped_put(
    State(store): State<SharedStore>,
    Path(namespace): Path<String>,
    Query(query): Query<IdQuery>,
    body: Bytes,
) -> MockResult<Response> {
    update_handler(store.as_ref(), Namespace::parse(&namespace), query, body)
}

pub async fn scoped_delete(
    State(store): State<SharedStore>,
    Path(namespace): Path<String>,
    Query(query): Query<IdQuery>,
) -> MockResult<Response> {
    delete_handler(store.as_ref(), Namespace::parse(&namespace), query)
}
