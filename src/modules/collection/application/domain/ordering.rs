//! Rules for the ordered `collection_products` list. Positions are always
//! the contiguous range `0..n`.

use std::collections::HashSet;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReorderError {
    #[error("expected {expected} product ids, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("product {0} appears more than once")]
    Duplicate(Uuid),

    #[error("product {0} is not in this collection")]
    Unknown(Uuid),
}

/// `requested` must be a permutation of `current`.
pub fn validate_reorder(current: &[Uuid], requested: &[Uuid]) -> Result<(), ReorderError> {
    if current.len() != requested.len() {
        return Err(ReorderError::LengthMismatch {
            expected: current.len(),
            actual: requested.len(),
        });
    }

    let known: HashSet<&Uuid> = current.iter().collect();
    let mut seen = HashSet::with_capacity(requested.len());

    for id in requested {
        if !known.contains(id) {
            return Err(ReorderError::Unknown(*id));
        }
        if !seen.insert(id) {
            return Err(ReorderError::Duplicate(*id));
        }
    }

    Ok(())
}

/// Where a new item lands in a list of `len` items. `None` appends; a
/// position past the end is clamped to the end.
pub fn insert_position(len: usize, requested: Option<i32>) -> i32 {
    let end = i32::try_from(len).unwrap_or(i32::MAX);
    match requested {
        Some(p) => p.clamp(0, end),
        None => end,
    }
}
