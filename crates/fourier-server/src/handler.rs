//! Endpoint handlers.
//!
//! Every mutating handler runs one linear load → mutate → save cycle
//! against the store and renders a `{message, ...}` body. Nothing is
//! cached between requests and nothing locks around the cycle, so two
//! concurrent mutations of one database may interleave and the later save
//! wins in full.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{json, Map, Value};

use fourier_core::names::validate_name;
use fourier_core::{Collection, Database, Document};

use crate::error::{status_message, GatewayError, GatewayResult};
use crate::state::AppState;

/// `{message, name}` body shared by most endpoints.
fn named(status: StatusCode, name: &str) -> Json<Value> {
    Json(json!({ "message": status_message(status), "name": name }))
}

/// List every stored database.
pub async fn list_databases(State(state): State<AppState>) -> GatewayResult<Json<Value>> {
    let databases = state.store().list()?;
    Ok(Json(json!({
        "message": status_message(StatusCode::OK),
        "databases": databases,
    })))
}

/// Return the full snapshot of the requested database.
pub async fn get_database(
    State(state): State<AppState>,
    Path(database): Path<String>,
) -> GatewayResult<Json<Database>> {
    if !state.store().exists(&database)? {
        return Err(GatewayError::DatabaseNotFound(database));
    }
    let snapshot = state.store().load(&database)?;
    Ok(Json(snapshot))
}

/// Create a new empty database with the requested name.
pub async fn create_database(
    State(state): State<AppState>,
    Path(database): Path<String>,
) -> GatewayResult<(StatusCode, Json<Value>)> {
    if state.store().exists(&database)? {
        return Err(GatewayError::DatabaseExists(database));
    }
    state.store().save(&Database::new(&database))?;
    Ok((StatusCode::CREATED, named(StatusCode::CREATED, &database)))
}

/// Delete the database with the requested name.
pub async fn delete_database(
    State(state): State<AppState>,
    Path(database): Path<String>,
) -> GatewayResult<Json<Value>> {
    if !state.store().exists(&database)? {
        return Err(GatewayError::DatabaseNotFound(database));
    }
    state.store().delete(&database)?;
    Ok(named(StatusCode::OK, &database))
}

/// Return the full snapshot of one collection.
pub async fn get_collection(
    State(state): State<AppState>,
    Path((database, collection)): Path<(String, String)>,
) -> GatewayResult<Json<Collection>> {
    if !state.store().exists(&database)? {
        return Err(GatewayError::DatabaseNotFound(database));
    }
    let snapshot = state.store().load(&database)?;
    match snapshot.collection(&collection) {
        Some(found) => Ok(Json(found.clone())),
        None => Err(GatewayError::CollectionNotFound(collection)),
    }
}

/// Create a new empty collection in the requested database.
pub async fn create_collection(
    State(state): State<AppState>,
    Path((database, collection)): Path<(String, String)>,
) -> GatewayResult<(StatusCode, Json<Value>)> {
    if !state.store().exists(&database)? {
        return Err(GatewayError::DatabaseNotFound(database));
    }
    validate_name(&collection)?;
    let mut snapshot = state.store().load(&database)?;
    if snapshot.contains_collection(&collection) {
        return Err(GatewayError::CollectionExists(collection));
    }
    snapshot.add_collection(Collection::new(&collection, []));
    state.store().save(&snapshot)?;
    Ok((StatusCode::CREATED, named(StatusCode::CREATED, &collection)))
}

/// Remove a collection and re-persist its database.
pub async fn delete_collection(
    State(state): State<AppState>,
    Path((database, collection)): Path<(String, String)>,
) -> GatewayResult<Json<Value>> {
    if !state.store().exists(&database)? {
        return Err(GatewayError::DatabaseNotFound(database));
    }
    let mut snapshot = state.store().load(&database)?;
    snapshot.remove_collection(&collection)?;
    state.store().save(&snapshot)?;
    Ok(named(StatusCode::OK, &collection))
}

/// Insert the request body as a document into the requested collection.
///
/// The body must be a JSON object; its fields become the document, with
/// `_id` assigned when the body does not supply a usable one. The stored
/// document is echoed back under `document`.
pub async fn insert_document(
    State(state): State<AppState>,
    Path((database, collection)): Path<(String, String)>,
    Json(fields): Json<Map<String, Value>>,
) -> GatewayResult<(StatusCode, Json<Value>)> {
    if !state.store().exists(&database)? {
        return Err(GatewayError::DatabaseNotFound(database));
    }
    let mut snapshot = state.store().load(&database)?;

    let document = Document::new(fields);
    let echoed = Value::Object(document.fields().clone());
    match snapshot.collection_mut(&collection) {
        Some(target) => {
            target.insert(document);
        }
        None => return Err(GatewayError::CollectionNotFound(collection)),
    }
    state.store().save(&snapshot)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": status_message(StatusCode::CREATED),
            "document": echoed,
        })),
    ))
}
