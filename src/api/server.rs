//! # API HTTP Server
//!
//! Axum router and handlers for the shopping list resource. The store is
//! injected at construction and shared behind an `Arc`; handlers hold no
//! other state and suspend only while awaiting the store.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::model::{ItemFields, ShoppingListItem};
use crate::store::{ItemStore, StoreError};

use super::error::{ApiError, ApiResult};

/// API server state: the injected store.
pub struct ApiServer<S: ItemStore> {
    store: Arc<S>,
}

/// Shared state type
type ServerState<S> = Arc<ApiServer<S>>;

impl<S: ItemStore + 'static> ApiServer<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Build the axum router.
    pub fn router(self) -> Router {
        let state = Arc::new(self);

        // Permissive CORS; request logging via the trace layer.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/", get(welcome_handler))
            .route("/shopping-list/item", post(create_handler::<S>))
            .route("/shopping-list/items", get(list_handler::<S>))
            .route(
                "/shopping-list/items/:id",
                get(get_handler::<S>)
                    .put(update_handler::<S>)
                    .delete(delete_handler::<S>),
            )
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(state)
    }

    /// Bind and serve until the process is stopped.
    pub async fn serve(self, addr: SocketAddr) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(addr).await?;
        info!("listening on {}", addr);
        axum::serve(listener, self.router()).await
    }
}

/// Log a store failure and map it to the 500 response shape.
fn store_error(err: StoreError) -> ApiError {
    error!("store call failed: {}", err);
    ApiError::Store(err.to_string())
}

/// Root welcome route.
async fn welcome_handler() -> &'static str {
    "Welcome to the Shopping List API"
}

/// Create item: insert one row, respond 201 with the inserted record.
async fn create_handler<S: ItemStore + 'static>(
    State(server): State<ServerState<S>>,
    Json(fields): Json<ItemFields>,
) -> ApiResult<(StatusCode, Json<ShoppingListItem>)> {
    info!("inserting new item: {:?}", fields);

    let inserted = server.store.insert(fields).await.map_err(store_error)?;

    let Some(item) = inserted.into_iter().next() else {
        error!("no data returned after insertion");
        return Err(ApiError::NoDataReturned);
    };

    info!("inserted item id {}", item.id);
    Ok((StatusCode::CREATED, Json(item)))
}

/// List items: every row, ordered ascending by expiry date. Unbounded.
async fn list_handler<S: ItemStore + 'static>(
    State(server): State<ServerState<S>>,
) -> ApiResult<Json<Vec<ShoppingListItem>>> {
    let items = server.store.list().await.map_err(store_error)?;
    Ok(Json(items))
}

/// Get one item by id. The path id is coerced to a number; any failure,
/// including the store's "not a single row", collapses to 404.
async fn get_handler<S: ItemStore + 'static>(
    State(server): State<ServerState<S>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ShoppingListItem>> {
    let Ok(numeric) = id.parse::<i64>() else {
        return Err(ApiError::NotFound(id));
    };

    match server.store.get(numeric).await {
        Ok(item) => Ok(Json(item)),
        Err(err) => {
            error!("lookup of item {} failed: {}", id, err);
            Err(ApiError::NotFound(id))
        }
    }
}

/// Update item: full overwrite of the matching row(s), responding with the
/// array of updated records. The path id is passed to the store uncoerced;
/// zero matched rows yields an empty array, not an error.
async fn update_handler<S: ItemStore + 'static>(
    State(server): State<ServerState<S>>,
    Path(id): Path<String>,
    Json(fields): Json<ItemFields>,
) -> ApiResult<Json<Vec<ShoppingListItem>>> {
    let updated = server
        .store
        .update(&id, fields)
        .await
        .map_err(store_error)?;
    Ok(Json(updated))
}

/// Delete item: 204 with a plain-text confirmation. Deleting an id that
/// matches nothing still reports success.
async fn delete_handler<S: ItemStore + 'static>(
    State(server): State<ServerState<S>>,
    Path(id): Path<String>,
) -> ApiResult<(StatusCode, String)> {
    server.store.delete(&id).await.map_err(store_error)?;
    Ok((
        StatusCode::NO_CONTENT,
        format!("Item with id {} deleted", id),
    ))
}
