use avalon_core::roles::{self, RoleInfo};
use axum::Json;

use crate::response::DataResponse;

/// GET /api/v1/roles
pub async fn list() -> Json<DataResponse<Vec<RoleInfo>>> {
    Json(DataResponse {
        data: roles::catalog(),
    })
}
