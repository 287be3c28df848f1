//! Auth feature router

use axum::Router;

use crate::state::AppState;

/// Router the auth feature registers its handlers on.
pub fn router() -> Router<AppState> {
    Router::new()
}
