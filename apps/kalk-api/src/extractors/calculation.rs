//! Decode-and-validate gate for the calculate endpoint
//!
//! Runs before the handler: reads the body, decodes it as a
//! [`CalculateRequest`] and validates it. The handler only runs when this
//! succeeds, and it receives the validated [`Operands`] as a typed argument.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
};
use bytes::Bytes;
use kalk_domain::Operands;
use tracing::{error, info};

use crate::{dto::calculation::CalculateRequest, response::ApiError, AppState};

/// Validated operands of a calculate request
#[derive(Debug)]
pub struct ValidatedCalculation(pub Operands);

#[async_trait]
impl FromRequest<AppState> for ValidatedCalculation {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            error!(error = %rejection, "Failed to read calculate request body");
            ApiError::IncorrectInput
        })?;

        let payload: CalculateRequest = serde_json::from_slice(&body).map_err(|err| {
            error!(error = %err, "Failed to decode calculate request");
            ApiError::IncorrectInput
        })?;

        let operands = state
            .validator
            .validate(payload.a, payload.b)
            .map_err(|err| {
                info!(error = %err, field = %err.field(), "Calculate request failed validation");
                ApiError::IncorrectInput
            })?;

        Ok(Self(operands))
    }
}
