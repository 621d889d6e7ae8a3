// ============================================================================
// HTTP API
// ============================================================================
//
// Route tables for both services. Each service also exposes /health and
// /metrics next to its one business endpoint.
//
// ============================================================================

mod errors;
mod health;
mod orders;
mod transactions;

use actix_web::web;
use std::sync::Arc;

use crate::metrics::{metrics_handler, Metrics};

pub use errors::ApiError;
pub use health::{health_handler, ServiceInfo};
pub use orders::{create_order, OrderState};
pub use transactions::{create_transaction, TransactionLogState};

pub const ORDER_SERVICE_NAME: &str = "order-service";
pub const TRANSACTION_LOG_SERVICE_NAME: &str = "transaction-log-service";

/// Request body ceiling for both services. Bodies over it are answered with
/// the generic 400.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Routes and shared state for Order Intake.
pub fn order_service(state: web::Data<OrderState>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        let metrics: Arc<Metrics> = state.metrics.clone();
        cfg.app_data(state)
            .app_data(web::Data::new(metrics))
            .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
            .app_data(web::Data::new(ServiceInfo { name: ORDER_SERVICE_NAME }))
            .route("/orders", web::post().to(create_order))
            .route("/health", web::get().to(health_handler))
            .route("/metrics", web::get().to(metrics_handler));
    }
}

/// Routes and shared state for the Transaction Logger.
pub fn transaction_log_service(
    state: web::Data<TransactionLogState>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        let metrics: Arc<Metrics> = state.metrics.clone();
        cfg.app_data(state)
            .app_data(web::Data::new(metrics))
            .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
            .app_data(web::Data::new(ServiceInfo { name: TRANSACTION_LOG_SERVICE_NAME }))
            .route("/transactions", web::post().to(create_transaction))
            .route("/health", web::get().to(health_handler))
            .route("/metrics", web::get().to(metrics_handler));
    }
}
