// ============================================================================
// Transaction Errors
// ============================================================================

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TransactionError {
    #[error("Transaction orderId is required")]
    MissingOrderId,

    #[error("Transaction userId is required")]
    MissingUserId,

    #[error("Transaction items cannot be empty")]
    EmptyItems,

    #[error("Transaction item at position {0} is blank")]
    BlankItem(usize),
}

/// Failures of the accept-transaction operation.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to create transaction log")]
    InjectedFailure,

    #[error("Invalid request body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid transaction: {0}")]
    Invalid(#[from] TransactionError),
}
