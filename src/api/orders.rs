use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::domain::order::{IntakeError, OrderIntake};
use crate::metrics::Metrics;

use super::errors::ApiError;

pub struct OrderState {
    pub intake: OrderIntake,
    pub metrics: Arc<Metrics>,
}

/// POST /orders
///
/// The body is taken raw so that malformed JSON lands in the same 400 path
/// as a failed validation.
pub async fn create_order(
    state: web::Data<OrderState>,
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, ApiError> {
    let body = body.map_err(|e| {
        tracing::warn!(error = %e, "Unreadable order body");
        state.metrics.record_order("invalid");
        ApiError::InvalidRequest
    })?;

    match state.intake.accept(&body).await {
        Ok(order) => {
            state.metrics.record_order("accepted");
            Ok(HttpResponse::Created().json(order))
        }
        Err(e) => {
            let outcome = match &e {
                IntakeError::Decode(_) | IntakeError::Invalid(_) => {
                    tracing::warn!(error = %e, "Rejected order submission");
                    "invalid"
                }
                // Already logged by the notifier.
                IntakeError::Downstream(_) => "downstream_failed",
            };
            state.metrics.record_order(outcome);
            Err(e.into())
        }
    }
}
