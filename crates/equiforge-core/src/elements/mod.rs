//! Element identity: the atomic weight tables and their lookup service.
//!
//! The tables are process-wide constants; the derived symbol index is built
//! exactly once and never mutated, so every operation here is safe for
//! concurrent readers without locking.

mod data;
mod lookup;

#[cfg(test)]
mod tests;

pub use data::{ElementData, ELEMENT_TABLE, ISOTOPE_TABLE};
pub use lookup::{
    atomic_number, element_count, element_name, elements, isotopes, lookup_atomic_weight,
    lookup_element, weight_for_atomic_number,
};

/// Sentinel meaning "standard entropy at 298.15 K and 1 bar is not known".
///
/// Not a physically possible entropy. Callers must branch on it (see
/// [`entropy298_is_known`]) before feeding an entropy figure into any
/// arithmetic; it must never participate in a computation.
pub const ENTROPY298_UNKNOWN: f64 = -123456789.0;

/// Returns true if `entropy298` is a real value rather than the
/// [`ENTROPY298_UNKNOWN`] sentinel.
///
/// # Example
///
/// ```
/// use equiforge_core::elements::{entropy298_is_known, ENTROPY298_UNKNOWN};
///
/// assert!(entropy298_is_known(130.68));
/// assert!(!entropy298_is_known(ENTROPY298_UNKNOWN));
/// ```
#[inline]
pub fn entropy298_is_known(entropy298: f64) -> bool {
    entropy298 != ENTROPY298_UNKNOWN
}
