use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use common::types::Message;
use serde::Deserialize;

use crate::{errors::ApiError, state::AppState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AdminQuery {
    /// Admin token
    pub token: Option<String>,
}

#[utoipa::path(
    get, path = "/admin/", tag = "admin",
    params(AdminQuery),
    responses(
        (status = 200, description = "Access granted", body = crate::openapi::MessageDoc),
        (status = 401, description = "Missing authentication token", body = crate::openapi::ErrorDoc),
        (status = 403, description = "Invalid admin token", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn admin(
    State(state): State<AppState>,
    query: Result<Query<AdminQuery>, QueryRejection>,
) -> Result<Json<Message>, ApiError> {
    let Query(q) = query?;
    let message = state.access.check(q.token.as_deref())?;
    Ok(Json(Message::new(message)))
}
