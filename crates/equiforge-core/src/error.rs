//! Error types for Equiforge

use thiserror::Error;

/// Main error type for Equiforge operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EquiforgeError {
    /// A queried symbol has no entry in the atomic weight table.
    ///
    /// Raised instead of returning a defaulted or zero weight: a wrong
    /// atomic weight corrupts every downstream mass-conservation check,
    /// so the lookup fails hard and lets the caller decide.
    #[error("Unknown element: no atomic weight table entry matches '{symbol}'")]
    UnknownElement {
        /// The symbol as supplied by the caller, before truncation.
        symbol: String,
    },

    /// A persisted integer constraint code falls outside the closed set.
    #[error("Invalid element constraint code {0} (expected -1..=6)")]
    InvalidConstraintCode(i32),
}

/// Result type alias for Equiforge operations
pub type Result<T> = std::result::Result<T, EquiforgeError>;
