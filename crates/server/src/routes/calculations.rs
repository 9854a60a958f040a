use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use common::types::Message;
use service::calculation::{Calculation, CalculationRequest};

use crate::{errors::ApiError, state::AppState};

#[utoipa::path(
    post, path = "/calculate/", tag = "calculations",
    request_body = crate::openapi::CalculationRequestDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CalculationDoc),
        (status = 400, description = "Empty operation, division by zero or negative square root", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Duplicate calculation exists", body = crate::openapi::ErrorDoc),
        (status = 415, description = "Operand1 must be a number", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Unsupported operation type", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Internal calculation error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Calculation>), ApiError> {
    let Json(request) = payload?;
    let created = state.calculations.create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/calculations/", tag = "calculations",
    responses(
        (status = 200, description = "All calculations", body = [crate::openapi::CalculationDoc]),
        (status = 404, description = "No calculations found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Calculation>>, ApiError> {
    Ok(Json(state.calculations.list().await?))
}

#[utoipa::path(
    get, path = "/calculations/{id}", tag = "calculations",
    params(("id" = i32, Path, description = "Calculation ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CalculationDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Calculation>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.calculations.get(id).await?))
}

#[utoipa::path(
    delete, path = "/calculations/{id}", tag = "calculations",
    params(("id" = i32, Path, description = "Calculation ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Message>, ApiError> {
    let Path(id) = id?;
    state.calculations.delete(id).await?;
    Ok(Json(Message::new("Calculation deleted successfully")))
}
