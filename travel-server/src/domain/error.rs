//! Domain error types.
//!
//! These errors represent violated path invariants in the domain layer.
//! They are distinct from graph loading and request validation errors.

use super::City;

/// Domain-level errors for path construction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Path has no legs
    #[error("path must have at least one leg")]
    EmptyPath,

    /// Consecutive legs don't share an endpoint
    #[error("legs do not connect: {from} then {to}")]
    Disconnected { from: City, to: City },

    /// A city appears twice in the path
    #[error("city {0} is visited more than once")]
    RepeatedCity(City),

    /// Summed cost or duration doesn't fit in a `u64`
    #[error("path totals overflow")]
    TotalOverflow,
}
