// ============================================================================
// Order Validation Errors
// ============================================================================

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum OrderError {
    #[error("Order userId is required")]
    MissingUserId,

    #[error("Order items cannot be empty")]
    EmptyItems,

    #[error("Item at position {0} has no itemId")]
    MissingItemId(usize),

    #[error("Item at position {0} has no name")]
    MissingItemName(usize),

    #[error("Invalid quantity {quantity} for item at position {index}")]
    InvalidQuantity { index: usize, quantity: i64 },
}
