use axum::{routing::get, Router};
use objscope_protocol::endpoints;
use tower_http::trace::TraceLayer;

use crate::handler::{self, SharedStore};

/// Build the axum router serving the document wire contract over `store`.
pub fn build_router(store: SharedStore) -> Router {
    Router::new()
        .route(
            &format!("{}/:code", endpoints::SPECIAL_CODE),
            get(handler::special_code_handler),
        )
        .route(
            &format!("/{}", endpoints::OBJECT_PREFIX),
            get(handler::root_get)
                .post(handler::root_post)
                .put(handler::root_put)
                .delete(handler::root_delete),
        )
        .route(
            &format!("/{}/*namespace", endpoints::OBJECT_PREFIX),
            get(handler::scoped_get)
                .post(handler::scoped_post)
                .put(handler::scoped_put)
                .delete(handler::scoped_delete),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
