//! Order intake and transaction log services.
//!
//! Order Intake (`POST /orders`) validates an order, assigns it an id and
//! hands a derived transaction to the Transaction Logger
//! (`POST /transactions`) in one synchronous HTTP call. The order is only
//! accepted when the logger answers 201.

pub mod api;
pub mod config;
pub mod domain;
pub mod messaging;
pub mod metrics;
pub mod server;
pub mod telemetry;

pub use config::{ConfigError, OrderServiceConfig, TransactionLogConfig};
pub use domain::order::{Order, OrderIntake};
pub use domain::transaction::{FailureInjector, Transaction, TransactionLogger, TransactionResult};
pub use messaging::{HttpTransactionNotifier, NotifyError, TransactionNotifier};
