//! Route definitions for the `/players` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::players;
use crate::state::AppState;

/// Routes mounted at `/players`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(players::list).post(players::create))
        .route("/{id}", get(players::get_by_id))
}
