//! Board invariants - sanity checks that detect bugs.
//!
//! Moves and spawns should never produce a cell that is neither empty nor
//! a power of two. If these trigger, the transition code is wrong.

use crate::board::Board;

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all board invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(board: &Board) -> Vec<InvariantViolation> {
    board
        .cells()
        .filter(|&(_, value)| value != 0 && (value < 2 || !value.is_power_of_two()))
        .map(|((row, col), value)| InvariantViolation {
            message: format!("Cell ({row}, {col}) holds {value}, not a power of two"),
        })
        .collect()
}
