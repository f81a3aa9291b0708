use axum::routing::get;
use axum::Router;

use crate::handlers::roles;
use crate::state::AppState;

/// Routes mounted at `/roles`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(roles::list))
}
