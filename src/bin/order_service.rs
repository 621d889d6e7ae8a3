use orderflow::{server, telemetry, OrderServiceConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    tracing::info!("🚀 Starting order service");

    let config = OrderServiceConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    server::run_order_service(config).await
}
