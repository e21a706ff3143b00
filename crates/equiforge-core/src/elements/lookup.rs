//! Symbol resolution over the atomic weight tables.
//!
//! All queries share one truncation convention: only the first 3 characters
//! of the caller's string are significant. The convention predates this
//! crate (persisted species data decorates symbols with suffixes) and is
//! kept exactly; it lives entirely inside this module so a future change
//! does not ripple through callers.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use super::data::{ElementData, ELEMENT_TABLE, ISOTOPE_TABLE};
use crate::error::{EquiforgeError, Result};

/// Symbol index over both tables, built once on first use.
///
/// Keys are the full symbols; every symbol is at most 3 characters, so the
/// truncated query space and the key space coincide. Uniqueness of keys is
/// a table invariant (checked exhaustively in tests), which makes ties
/// impossible by construction.
fn symbol_index() -> &'static HashMap<&'static str, &'static ElementData> {
    static INDEX: OnceLock<HashMap<&'static str, &'static ElementData>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index = HashMap::with_capacity(ELEMENT_TABLE.len() + ISOTOPE_TABLE.len());
        for data in ELEMENT_TABLE.iter().chain(ISOTOPE_TABLE) {
            let previous = index.insert(data.symbol, data);
            debug_assert!(previous.is_none(), "duplicate element symbol '{}'", data.symbol);
        }
        debug!(entries = index.len(), "built element symbol index");
        index
    })
}

/// Truncates a query to its first 3 characters (char-boundary safe).
fn significant_key(name: &str) -> &str {
    match name.char_indices().nth(3) {
        Some((idx, _)) => &name[..idx],
        None => name,
    }
}

/// Resolves a symbol to its full table entry.
///
/// Only the first 3 characters of `name` are significant. A key matches
/// when it equals the truncated query or is a leading substring of it,
/// longest key winning, so decorated symbols like `"Fe2O3frag"` resolve
/// to `"Fe"`. Matching is case- and content-exact, with no trimming, and
/// a query never matches a key longer than itself (`"H"` does not resolve
/// to `"He"`).
///
/// # Errors
///
/// [`EquiforgeError::UnknownElement`] if no table entry matches. There is
/// no defaulting: a missing element must surface immediately, before a
/// wrong mass can reach a conservation check.
///
/// # Example
///
/// ```
/// use equiforge_core::elements::lookup_element;
///
/// let iron = lookup_element("Fe2O3frag").unwrap();
/// assert_eq!(iron.symbol, "Fe");
/// assert_eq!(iron.atomic_number, 26);
/// ```
pub fn lookup_element(name: &str) -> Result<&'static ElementData> {
    let index = symbol_index();
    // Longest key wins: the full truncated query first, then each shorter
    // leading substring. Keys are unique strings, so ties are impossible.
    let mut candidate = significant_key(name);
    loop {
        if let Some(&data) = index.get(candidate) {
            return Ok(data);
        }
        match candidate.char_indices().last() {
            Some((idx, _)) if idx > 0 => candidate = &candidate[..idx],
            _ => break,
        }
    }
    Err(EquiforgeError::UnknownElement {
        symbol: name.to_string(),
    })
}

/// Resolves a symbol to its standard atomic weight in g/mol.
///
/// This is the unified mass source for the whole engine; see
/// [`lookup_element`] for the matching rules.
///
/// # Example
///
/// ```
/// use equiforge_core::lookup_atomic_weight;
///
/// assert_eq!(lookup_atomic_weight("O").unwrap(), 15.9994);
/// assert!(lookup_atomic_weight("Xx").is_err());
/// ```
pub fn lookup_atomic_weight(name: &str) -> Result<f64> {
    lookup_element(name).map(|data| data.weight)
}

/// Resolves a symbol to its atomic number.
pub fn atomic_number(name: &str) -> Result<u32> {
    lookup_element(name).map(|data| data.atomic_number)
}

/// Resolves a symbol to its lower-case English name.
pub fn element_name(name: &str) -> Result<&'static str> {
    lookup_element(name).map(|data| data.name)
}

/// Returns the standard atomic weight for atomic number `z`.
///
/// Resolves against the periodic table only; isotope entries share their
/// parent's atomic number and are reachable by symbol lookup alone.
///
/// # Errors
///
/// [`EquiforgeError::UnknownElement`] if `z` is outside the table range.
pub fn weight_for_atomic_number(z: u32) -> Result<f64> {
    ELEMENT_TABLE
        .iter()
        .find(|data| data.atomic_number == z)
        .map(|data| data.weight)
        .ok_or_else(|| EquiforgeError::UnknownElement {
            symbol: format!("Z={z}"),
        })
}

/// The periodic-table entries, in atomic-number order.
pub fn elements() -> &'static [ElementData] {
    ELEMENT_TABLE
}

/// The isotope and pseudo-element entries.
pub fn isotopes() -> &'static [ElementData] {
    ISOTOPE_TABLE
}

/// Number of periodic-table entries (isotope entries not included).
pub fn element_count() -> usize {
    ELEMENT_TABLE.len()
}
