//! Versioned API endpoints

pub mod access_keys;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route(
            "/access_keys",
            get(access_keys::list_access_keys).post(access_keys::create_access_key),
        )
        .route(
            "/access_keys/validate",
            post(access_keys::validate_access_key),
        )
        .route(
            "/access_keys/{key_id}",
            get(access_keys::get_access_key).delete(access_keys::delete_access_key),
        )
}
