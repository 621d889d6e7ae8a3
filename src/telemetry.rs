use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging with environment-based filtering.
///
/// Defaults to INFO, with debug for this crate; RUST_LOG overrides it.
/// Example: RUST_LOG=debug cargo run --bin order_service
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,orderflow=debug")),
        )
        .init();
}
