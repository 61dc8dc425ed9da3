use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with every datastore endpoint.
///
/// `GET /` also answers `HEAD /` as the connectivity probe.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::list_databases))
        .route(
            "/:database",
            get(handler::get_database)
                .post(handler::create_database)
                .delete(handler::delete_database),
        )
        .route(
            "/:database/:collection",
            get(handler::get_collection)
                .post(handler::create_collection)
                .delete(handler::delete_collection),
        )
        .route(
            "/:database/:collection/documents",
            post(handler::insert_document),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
