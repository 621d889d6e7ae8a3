use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;

use crate::api::{self, OrderState, TransactionLogState};
use crate::config::{OrderServiceConfig, TransactionLogConfig};
use crate::domain::order::OrderIntake;
use crate::domain::transaction::{FailureInjector, TransactionLogger};
use crate::messaging::HttpTransactionNotifier;
use crate::metrics::Metrics;

// ============================================================================
// Service Bootstrap
// ============================================================================
//
// Build each service's state from its configuration and serve it until the
// process is asked to stop.
//
// ============================================================================

pub fn build_notifier(
    config: &OrderServiceConfig,
    metrics: Arc<Metrics>,
) -> anyhow::Result<HttpTransactionNotifier> {
    let notifier = HttpTransactionNotifier::new(
        config.transaction_log_url.clone(),
        config.transaction_log_timeout(),
    )?;
    Ok(notifier.with_metrics(metrics))
}

pub fn build_order_state(config: &OrderServiceConfig) -> anyhow::Result<OrderState> {
    let metrics = Arc::new(Metrics::new()?);
    let notifier = build_notifier(config, metrics.clone())?;

    Ok(OrderState {
        intake: OrderIntake::new(Arc::new(notifier)),
        metrics,
    })
}

pub fn build_transaction_log_state(config: &TransactionLogConfig) -> anyhow::Result<TransactionLogState> {
    let injector = match config.failure_seed {
        Some(seed) => FailureInjector::seeded(config.might_fail, seed),
        None => FailureInjector::new(config.might_fail),
    };

    Ok(TransactionLogState {
        logger: TransactionLogger::new(injector),
        metrics: Arc::new(Metrics::new()?),
    })
}

pub async fn run_order_service(config: OrderServiceConfig) -> anyhow::Result<()> {
    let state = web::Data::new(build_order_state(&config)?);

    tracing::info!(
        transaction_log_url = %config.transaction_log_url,
        timeout_ms = ?config.transaction_log_timeout_ms,
        "Order service running on http://{}:{}",
        config.host,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(api::order_service(state.clone()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    tracing::info!("Order service stopped");
    Ok(())
}

pub async fn run_transaction_log_service(config: TransactionLogConfig) -> anyhow::Result<()> {
    let state = web::Data::new(build_transaction_log_state(&config)?);

    tracing::info!(
        "Feature toggle 'mightFail' is set to: {}",
        state.logger.failure_injection_enabled()
    );
    tracing::info!(
        "Transaction log service running on http://{}:{}",
        config.host,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(api::transaction_log_service(state.clone()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    tracing::info!("Transaction log service stopped");
    Ok(())
}
