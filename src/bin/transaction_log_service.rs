use orderflow::{server, telemetry, TransactionLogConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    tracing::info!("🚀 Starting transaction log service");

    let config = TransactionLogConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    server::run_transaction_log_service(config).await
}
