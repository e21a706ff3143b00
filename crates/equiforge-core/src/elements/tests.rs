//! Tests for the atomic weight tables and lookup service

use std::collections::HashSet;

use super::*;
use crate::error::EquiforgeError;

#[test]
fn test_every_symbol_round_trips_to_its_stored_weight() {
    for data in ELEMENT_TABLE.iter().chain(ISOTOPE_TABLE) {
        assert_eq!(
            lookup_atomic_weight(data.symbol).unwrap(),
            data.weight,
            "symbol '{}' did not round-trip",
            data.symbol
        );
    }
}

#[test]
fn test_all_weights_are_positive_and_finite() {
    for data in ELEMENT_TABLE.iter().chain(ISOTOPE_TABLE) {
        assert!(data.weight > 0.0, "'{}' has non-positive weight", data.symbol);
        assert!(data.weight.is_finite(), "'{}' has non-finite weight", data.symbol);
    }
}

#[test]
fn test_symbol_key_space_is_unique() {
    let mut seen = HashSet::new();
    for data in ELEMENT_TABLE.iter().chain(ISOTOPE_TABLE) {
        assert!(data.symbol.len() <= 3, "'{}' exceeds 3 characters", data.symbol);
        assert!(seen.insert(data.symbol), "duplicate symbol '{}'", data.symbol);
    }
}

#[test]
fn test_unknown_symbol_fails() {
    for query in ["Xx", "", "h", "eF", " O", "Zz9"] {
        assert_eq!(
            lookup_atomic_weight(query),
            Err(EquiforgeError::UnknownElement {
                symbol: query.to_string()
            }),
            "query '{query}' should not resolve"
        );
    }
}

#[test]
fn test_known_weights() {
    assert_eq!(lookup_atomic_weight("O").unwrap(), 15.9994);
    assert_eq!(lookup_atomic_weight("H").unwrap(), 1.00794);
    assert_eq!(lookup_atomic_weight("Fe").unwrap(), 55.847);
    assert_eq!(lookup_atomic_weight("U").unwrap(), 238.0508);
    assert_eq!(lookup_atomic_weight("E").unwrap(), 0.000545);
}

#[test]
fn test_decorated_symbols_resolve_by_leading_key() {
    // Only the first 3 characters are significant, and within them the
    // longest matching key wins.
    assert_eq!(lookup_atomic_weight("Fe2O3frag").unwrap(), 55.847);
    assert_eq!(
        lookup_atomic_weight("H_extra").unwrap(),
        lookup_atomic_weight("H").unwrap()
    );
    assert_eq!(lookup_atomic_weight("W_xyz").unwrap(), 183.85);
    // Everything past the 3rd character is ignored outright.
    assert_eq!(
        lookup_atomic_weight("Fe2O3"),
        lookup_atomic_weight("Fe2ZZZZZ")
    );
}

#[test]
fn test_longest_key_wins_within_significant_chars() {
    // "Hel..." must resolve to He, not H.
    assert_eq!(lookup_atomic_weight("Hello").unwrap(), 4.002602);
    assert_eq!(lookup_atomic_weight("Sn(bulk)").unwrap(), 118.710);
    assert_eq!(lookup_element("Tri").unwrap().symbol, "Tr");
}

#[test]
fn test_short_query_never_matches_longer_key() {
    // "H" matches only the key "H"; it does not prefix-match "He" or "Hf".
    assert_eq!(lookup_atomic_weight("H").unwrap(), 1.00794);
    assert_eq!(lookup_atomic_weight("He").unwrap(), 4.002602);
    // "X" prefixes "Xe" but is not itself a key.
    assert!(lookup_atomic_weight("X").is_err());
}

#[test]
fn test_matching_is_case_and_content_exact() {
    // No case folding and no trimming; a leading space is significant.
    assert!(lookup_atomic_weight("fe").is_err());
    assert!(lookup_atomic_weight("hE").is_err());
    assert!(lookup_atomic_weight(" O").is_err());
    // A trailing space is suffix decoration past the key, which resolves.
    assert_eq!(lookup_atomic_weight("O ").unwrap(), 15.9994);
}

#[test]
fn test_full_record_lookup() {
    let oxygen = lookup_element("O").unwrap();
    assert_eq!(oxygen.name, "oxygen");
    assert_eq!(oxygen.atomic_number, 8);
    assert_eq!(atomic_number("Pu").unwrap(), 94);
    assert_eq!(element_name("W").unwrap(), "tungsten");
    assert_eq!(element_name("D").unwrap(), "deuterium");
}

#[test]
fn test_weight_for_atomic_number() {
    assert_eq!(weight_for_atomic_number(1).unwrap(), 1.00794);
    assert_eq!(weight_for_atomic_number(26).unwrap(), 55.847);
    assert_eq!(weight_for_atomic_number(94).unwrap(), 244.0482);
    assert!(weight_for_atomic_number(0).is_err());
    assert!(weight_for_atomic_number(95).is_err());
}

#[test]
fn test_table_shape() {
    assert_eq!(element_count(), 94);
    assert_eq!(elements().len(), 94);
    assert_eq!(isotopes().len(), 3);
    // Periodic-table entries are ordered by atomic number with no gaps.
    for (i, data) in elements().iter().enumerate() {
        assert_eq!(data.atomic_number as usize, i + 1);
    }
}

#[test]
fn test_entropy_sentinel() {
    assert_eq!(ENTROPY298_UNKNOWN, -123456789.0);
    assert!(!entropy298_is_known(ENTROPY298_UNKNOWN));
    assert!(entropy298_is_known(0.0));
    assert!(entropy298_is_known(-130.7));
    // No stored weight collides with the sentinel.
    for data in ELEMENT_TABLE.iter().chain(ISOTOPE_TABLE) {
        assert_ne!(data.weight, ENTROPY298_UNKNOWN);
    }
}

#[test]
fn test_concurrent_readers() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                for data in ELEMENT_TABLE {
                    assert_eq!(lookup_atomic_weight(data.symbol).unwrap(), data.weight);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
