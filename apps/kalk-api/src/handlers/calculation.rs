//! Calculation handler

use axum::{extract::State, response::IntoResponse};
use tracing::{error, info};

use crate::{
    dto::calculation::{CalculateRequest, CalculateResponse, ErrorResponse},
    extractors::calculation::ValidatedCalculation,
    response::{ApiError, JsonResponse},
    AppState,
};

/// Handle calculate requests
#[utoipa::path(
    post,
    path = "/calculate",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Factorials of both operands", body = CalculateResponse),
        (status = 400, description = "Bad request - malformed, missing or negative input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "calculation"
)]
pub async fn calculate_handler(
    State(state): State<AppState>,
    ValidatedCalculation(operands): ValidatedCalculation,
) -> impl IntoResponse {
    info!(a = operands.a(), b = operands.b(), "Received calculate request");

    match state.engine.compute(operands).await {
        Ok(factorials) => {
            info!(a = factorials.a(), b = factorials.b(), "Computed factorials");
            JsonResponse::ok(CalculateResponse::from(factorials)).into_response()
        }
        Err(err) => {
            error!(error = ?err, "Failed to compute factorials");
            ApiError::Internal.into_response()
        }
    }
}
