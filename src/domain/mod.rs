// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each record type has its own subdirectory with:
// - Value objects (wire submissions and validated records)
// - Errors
// - The service that handles one submission
//
// Nothing here knows about HTTP; the api module maps results onto responses.
//
// ============================================================================

pub mod identity;
pub mod order;
pub mod transaction;
