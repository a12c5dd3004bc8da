//! Calculation routes

use axum::{routing::post, Router};

use crate::{handlers::calculation::calculate_handler, AppState};

/// Create calculation routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate_handler))
}
