// ============================================================================
// Messaging - outbound hand-off to the Transaction Logger
// ============================================================================
//
// Order Intake only depends on `TransactionNotifier`; the HTTP client is one
// implementation and tests substitute their own.
//
// ============================================================================

mod transaction_log_client;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::domain::transaction::{Transaction, TransactionResult};

pub use transaction_log_client::HttpTransactionNotifier;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Transaction log request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response code: {0}")]
    UnexpectedStatus(StatusCode),
}

/// Synchronously hand a transaction to the Transaction Logger.
///
/// Success means the logger answered 201. The acknowledgement body is
/// returned when it could be decoded; it is informational only.
#[async_trait]
pub trait TransactionNotifier: Send + Sync {
    async fn notify(&self, transaction: &Transaction) -> Result<Option<TransactionResult>, NotifyError>;
}
