use uuid::Uuid;

// ============================================================================
// Identifier Assignment
// ============================================================================
//
// Both services accept an optional identifier from the caller and mint one
// when it is missing. A nil UUID counts as missing.
//
// ============================================================================

/// Return the supplied identifier, or a freshly generated v4 UUID when it is
/// absent or nil.
pub fn assign_if_absent(id: Option<Uuid>) -> Uuid {
    match id {
        Some(id) if !id.is_nil() => id,
        _ => Uuid::new_v4(),
    }
}
