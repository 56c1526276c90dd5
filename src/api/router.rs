use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::api::errors::ApiError;
use crate::api::handlers::{health, users};
use crate::api::middleware::{cors_layer, json_content_type_layer};
use crate::api::state::AppState;

/// User CRUD routes, relative to the base path
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}

async fn fallback() -> ApiError {
    ApiError::not_found("Not found")
}

/// Builds the full application router
///
/// User routes are mounted under `base_path` (empty for the root); `/health`
/// always sits at the root.
pub fn build_router(state: AppState, base_path: &str) -> Router {
    let api = if base_path.is_empty() {
        user_routes()
    } else {
        Router::new().nest(base_path, user_routes())
    };

    Router::new()
        .route("/health", get(health::health_check))
        .merge(api)
        .fallback(fallback)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(json_content_type_layer())
        // Shared state
        .with_state(state)
}
