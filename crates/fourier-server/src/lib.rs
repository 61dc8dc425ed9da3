//! HTTP request gateway for FourierDB.
//!
//! Maps REST-style endpoints onto the document model: databases and
//! collections are created, read, and deleted by path, and documents are
//! inserted by posting their fields. Each request runs one linear
//! load → mutate → save cycle against the store; the gateway holds no
//! cross-request state and takes no locks, so overlapping mutations of the
//! same database resolve to whichever save lands last.
//!
//! Response bodies always carry a `message` with the reason phrase of the
//! response status, plus the relevant `name`, `document`, or `databases`
//! listing.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::{ServerConfig, DEFAULT_PORT};
pub use error::{GatewayError, GatewayResult};
pub use router::build_router;
pub use server::FourierServer;
pub use state::AppState;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use fourier_store::{FileStore, MemoryStore, StorageLayout};

    use crate::router::build_router;
    use crate::state::AppState;

    fn test_app() -> Router {
        build_router(AppState::new(Arc::new(MemoryStore::new())))
    }

    async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        dispatch(app, request).await
    }

    async fn send_json(
        app: &Router,
        method: Method,
        uri: &str,
        body: Value,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        dispatch(app, request).await
    }

    async fn dispatch(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    // -----------------------------------------------------------------------
    // Root listing and probe
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn root_listing_starts_empty() {
        let app = test_app();
        let (status, body) = send(&app, Method::GET, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "OK", "databases": [] }));
    }

    #[tokio::test]
    async fn root_listing_enumerates_sorted_names() {
        let app = test_app();
        send(&app, Method::POST, "/zebra").await;
        send(&app, Method::POST, "/apple").await;

        let (status, body) = send(&app, Method::GET, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["databases"], json!(["apple", "zebra"]));
    }

    #[tokio::test]
    async fn head_probe_responds_with_an_empty_body() {
        let app = test_app();
        let (status, body) = send(&app, Method::HEAD, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Null);
    }

    // -----------------------------------------------------------------------
    // Database lifecycle
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn create_database_returns_created() {
        let app = test_app();
        let (status, body) = send(&app, Method::POST, "/shop").await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({ "message": "Created", "name": "shop" }));
    }

    #[tokio::test]
    async fn get_database_returns_the_full_snapshot() {
        let app = test_app();
        send(&app, Method::POST, "/shop").await;

        let (status, body) = send(&app, Method::GET, "/shop").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "name": "shop", "collections": {} }));
    }

    #[tokio::test]
    async fn recreating_a_database_conflicts_and_preserves_it() {
        let app = test_app();
        send(&app, Method::POST, "/shop").await;
        send(&app, Method::POST, "/shop/orders").await;

        let (status, body) = send(&app, Method::POST, "/shop").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({ "message": "Unprocessable Entity", "name": "shop" })
        );

        // The conflicting create had no effect on the stored snapshot.
        let (_, snapshot) = send(&app, Method::GET, "/shop").await;
        assert!(snapshot["collections"]["orders"].is_object());
    }

    #[tokio::test]
    async fn delete_database_lifecycle() {
        let app = test_app();
        send(&app, Method::POST, "/shop").await;

        let (status, body) = send(&app, Method::DELETE, "/shop").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "OK", "name": "shop" }));

        let (status, _) = send(&app, Method::GET, "/shop").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&app, Method::DELETE, "/shop").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Not Found", "name": "shop" }));
    }

    #[tokio::test]
    async fn missing_database_is_404_with_its_name() {
        let app = test_app();
        let (status, body) = send(&app, Method::GET, "/ghost").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Not Found", "name": "ghost" }));
    }

    // -----------------------------------------------------------------------
    // Collection lifecycle
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn create_collection_then_get_it() {
        let app = test_app();
        send(&app, Method::POST, "/shop").await;

        let (status, body) = send(&app, Method::POST, "/shop/orders").await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({ "message": "Created", "name": "orders" }));

        let (status, body) = send(&app, Method::GET, "/shop/orders").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "name": "orders", "documents": {} }));
    }

    #[tokio::test]
    async fn recreating_a_collection_conflicts() {
        let app = test_app();
        send(&app, Method::POST, "/shop").await;
        send(&app, Method::POST, "/shop/orders").await;

        let (status, body) = send(&app, Method::POST, "/shop/orders").await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, json!({ "message": "Conflict", "name": "orders" }));
    }

    #[tokio::test]
    async fn creating_a_collection_in_a_missing_database_is_404() {
        let app = test_app();
        let (status, body) = send(&app, Method::POST, "/ghost/orders").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Not Found", "name": "ghost" }));
    }

    #[tokio::test]
    async fn missing_collection_is_404_with_its_name() {
        let app = test_app();
        send(&app, Method::POST, "/shop").await;

        let (status, body) = send(&app, Method::GET, "/shop/ghost").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Not Found", "name": "ghost" }));
    }

    #[tokio::test]
    async fn delete_collection_removes_it() {
        let app = test_app();
        send(&app, Method::POST, "/shop").await;
        send(&app, Method::POST, "/shop/orders").await;
        send_json(
            &app,
            Method::POST,
            "/shop/orders/documents",
            json!({ "item": "pen" }),
        )
        .await;

        let (status, body) = send(&app, Method::DELETE, "/shop/orders").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "OK", "name": "orders" }));

        let (status, _) = send(&app, Method::GET, "/shop/orders").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, snapshot) = send(&app, Method::GET, "/shop").await;
        assert_eq!(snapshot["collections"], json!({}));
    }

    #[tokio::test]
    async fn deleting_a_missing_collection_is_404() {
        let app = test_app();
        send(&app, Method::POST, "/shop").await;

        let (status, body) = send(&app, Method::DELETE, "/shop/orders").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Not Found", "name": "orders" }));
    }

    // -----------------------------------------------------------------------
    // Document insertion
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn insert_document_assigns_an_id() {
        let app = test_app();
        send(&app, Method::POST, "/shop").await;
        send(&app, Method::POST, "/shop/orders").await;

        let (status, body) = send_json(
            &app,
            Method::POST,
            "/shop/orders/documents",
            json!({ "item": "pen" }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Created");
        assert_eq!(body["document"]["item"], "pen");
        let id = body["document"]["_id"].as_u64().unwrap();
        assert!(id > 0);

        // The collection holds exactly that document, keyed by its id.
        let (_, collection) = send(&app, Method::GET, "/shop/orders").await;
        let documents = collection["documents"].as_object().unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[&id.to_string()]["item"], "pen");
    }

    #[tokio::test]
    async fn insert_document_honors_a_supplied_id() {
        let app = test_app();
        send(&app, Method::POST, "/shop").await;
        send(&app, Method::POST, "/shop/orders").await;

        let (status, body) = send_json(
            &app,
            Method::POST,
            "/shop/orders/documents",
            json!({ "_id": 42, "item": "pen" }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["document"]["_id"], 42);

        let (_, collection) = send(&app, Method::GET, "/shop/orders").await;
        assert_eq!(collection["documents"]["42"]["item"], "pen");
    }

    #[tokio::test]
    async fn inserting_at_an_occupied_id_overwrites() {
        let app = test_app();
        send(&app, Method::POST, "/shop").await;
        send(&app, Method::POST, "/shop/orders").await;
        send_json(
            &app,
            Method::POST,
            "/shop/orders/documents",
            json!({ "_id": 42, "item": "pen" }),
        )
        .await;
        send_json(
            &app,
            Method::POST,
            "/shop/orders/documents",
            json!({ "_id": 42, "item": "ink" }),
        )
        .await;

        let (_, collection) = send(&app, Method::GET, "/shop/orders").await;
        let documents = collection["documents"].as_object().unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents["42"]["item"], "ink");
    }

    #[tokio::test]
    async fn insert_into_missing_database_is_404() {
        let app = test_app();
        let (status, body) = send_json(
            &app,
            Method::POST,
            "/ghost/orders/documents",
            json!({ "item": "pen" }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["name"], "ghost");
    }

    #[tokio::test]
    async fn insert_into_missing_collection_is_404() {
        let app = test_app();
        send(&app, Method::POST, "/shop").await;

        let (status, body) = send_json(
            &app,
            Method::POST,
            "/shop/ghost/documents",
            json!({ "item": "pen" }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["name"], "ghost");
    }

    #[tokio::test]
    async fn non_object_document_bodies_are_rejected() {
        let app = test_app();
        send(&app, Method::POST, "/shop").await;
        send(&app, Method::POST, "/shop/orders").await;

        let (status, _) = send_json(
            &app,
            Method::POST,
            "/shop/orders/documents",
            json!([1, 2, 3]),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    // -----------------------------------------------------------------------
    // Name validation
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn invalid_database_name_is_400() {
        let app = test_app();
        let (status, body) = send(&app, Method::POST, "/.hidden").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "Bad Request", "name": ".hidden" }));
    }

    #[tokio::test]
    async fn invalid_collection_name_is_400() {
        let app = test_app();
        send(&app, Method::POST, "/shop").await;

        let (status, body) = send(&app, Method::POST, "/shop/.hidden").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["name"], ".hidden");
    }

    // -----------------------------------------------------------------------
    // File-backed end to end
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn file_backed_databases_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let layout = StorageLayout::from_root(dir.path().join("store"));

        let first = build_router(AppState::new(Arc::new(
            FileStore::open(layout.clone()).unwrap(),
        )));
        send(&first, Method::POST, "/shop").await;
        send(&first, Method::POST, "/shop/orders").await;
        send_json(
            &first,
            Method::POST,
            "/shop/orders/documents",
            json!({ "item": "pen", "qty": 2 }),
        )
        .await;

        // A separate store over the same root sees the persisted state.
        let second = build_router(AppState::new(Arc::new(FileStore::open(layout).unwrap())));
        let (status, collection) = send(&second, Method::GET, "/shop/orders").await;
        assert_eq!(status, StatusCode::OK);
        let documents = collection["documents"].as_object().unwrap();
        assert_eq!(documents.len(), 1);
        let (_, doc) = documents.iter().next().unwrap();
        assert_eq!(doc["item"], "pen");
        assert_eq!(doc["qty"], 2);
    }
}
