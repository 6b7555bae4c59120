pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

// Photos are capped at 2 MiB by the upload contract; the headroom covers the
// text fields and multipart framing.
const MAX_BODY_BYTES: usize = 3 * 1024 * 1024;

/// Build the application route tree.
///
/// ```text
/// /            registration form document (GET)
/// /register    multipart submission intake (POST)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::register::show_form))
        .route("/register", post(handlers::register::submit))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
