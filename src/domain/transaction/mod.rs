// ============================================================================
// Transaction Domain
// ============================================================================
//
// - Value objects (Transaction, TransactionSubmission, TransactionResult)
// - Errors (TransactionError, LogError)
// - Failure injection (FailureInjector)
// - Service (TransactionLogger)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod failure;
pub mod logger;

pub use value_objects::*;
pub use errors::*;
pub use failure::*;
pub use logger::*;
