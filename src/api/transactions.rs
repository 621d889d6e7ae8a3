use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::domain::transaction::{LogError, TransactionLogger};
use crate::metrics::Metrics;

use super::errors::ApiError;

pub struct TransactionLogState {
    pub logger: TransactionLogger,
    pub metrics: Arc<Metrics>,
}

/// POST /transactions
pub async fn create_transaction(
    state: web::Data<TransactionLogState>,
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, ApiError> {
    let body = body.map_err(|e| {
        tracing::warn!(error = %e, "Unreadable transaction body");
        state.metrics.record_transaction("invalid");
        ApiError::InvalidRequest
    })?;

    match state.logger.accept(&body) {
        Ok(result) => {
            state.metrics.record_transaction("logged");
            Ok(HttpResponse::Created().json(result))
        }
        Err(e) => {
            let outcome = match &e {
                LogError::InjectedFailure => "injected_failure",
                LogError::Decode(_) | LogError::Invalid(_) => {
                    tracing::warn!(error = %e, "Rejected transaction submission");
                    "invalid"
                }
            };
            state.metrics.record_transaction(outcome);
            Err(e.into())
        }
    }
}
