//! Equiforge Core - Element identity and constraint vocabulary
//!
//! This crate provides the shared scalar facts the rest of the Equiforge
//! equilibrium engine depends on:
//! - The immutable atomic weight table and its lookup service
//! - The closed element constraint taxonomy for formula-matrix rows
//! - The entropy-unknown sentinel shared with equilibrium code
//!
//! It is a leaf crate: species construction, formula-matrix assembly and
//! the equilibrium solver all consume it, and it consumes nothing. Every
//! datum here is a process-wide constant, so all operations are safe for
//! concurrent readers without locking.

pub mod constraint;
pub mod elements;
pub mod error;

pub use constraint::ConstraintKind;
pub use elements::{
    atomic_number, element_count, element_name, elements, entropy298_is_known, isotopes,
    lookup_atomic_weight, lookup_element, weight_for_atomic_number, ElementData,
    ENTROPY298_UNKNOWN,
};
pub use error::{EquiforgeError, Result};
