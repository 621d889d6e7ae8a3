use crate::domain::identity;

use super::errors::LogError;
use super::failure::FailureInjector;
use super::value_objects::{Transaction, TransactionResult, TransactionSubmission};

// ============================================================================
// Transaction Logger
// ============================================================================
//
// Accept transaction submission:
//   failure injection → decode → validate → assign id → acknowledge
//
// Nothing is stored; the service only acknowledges what it received.
//
// ============================================================================

#[derive(Debug, Default)]
pub struct TransactionLogger {
    injector: FailureInjector,
}

impl TransactionLogger {
    pub fn new(injector: FailureInjector) -> Self {
        Self { injector }
    }

    pub fn failure_injection_enabled(&self) -> bool {
        self.injector.is_enabled()
    }

    /// Handle one raw request body end to end.
    pub fn accept(&self, body: &[u8]) -> Result<TransactionResult, LogError> {
        self.check_injected_failure()?;

        let submission: TransactionSubmission = serde_json::from_slice(body)?;
        self.record(submission)
    }

    /// Runs before anything about the request is looked at.
    pub fn check_injected_failure(&self) -> Result<(), LogError> {
        if self.injector.should_fail() {
            tracing::error!("Failed to create transaction log (injected failure)");
            return Err(LogError::InjectedFailure);
        }
        Ok(())
    }

    /// Validate an already decoded submission and acknowledge it.
    pub fn record(&self, submission: TransactionSubmission) -> Result<TransactionResult, LogError> {
        let mut transaction = Transaction::from_submission(submission)?;
        let transaction_id = identity::assign_if_absent(transaction.transaction_id);
        transaction.transaction_id = Some(transaction_id);

        tracing::info!(
            transaction_id = %transaction_id,
            order_id = %transaction.order_id,
            user_id = %transaction.user_id,
            items = ?transaction.items,
            "Received transaction"
        );

        Ok(TransactionResult { transaction_id })
    }
}
