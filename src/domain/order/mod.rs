// ============================================================================
// Order Domain
// ============================================================================
//
// - Value objects (OrderSubmission, Order, OrderItem)
// - Errors (OrderError)
// - Service (OrderIntake)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod intake;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use intake::*;
