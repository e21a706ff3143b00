//! Element constraint classification.
//!
//! Every row of a formula matrix carries exactly one [`ConstraintKind`]
//! telling the equilibrium layer how to interpret that row's coefficients.
//! The set is closed: equilibrium and formula-matrix code match on it
//! exhaustively, so adding a variant is a breaking change.

use std::fmt;

use crate::error::{EquiforgeError, Result};

/// Classification of an element constraint row in the formula matrix.
///
/// The default, [`ConstraintKind::AbsolutePositive`], is the ordinary
/// element-conservation case: every species has a non-negative coefficient
/// for the element. The remaining kinds cover charge bookkeeping, lattice
/// stoichiometry, kinetically frozen pseudo-elements and surface phases.
/// Rows may be reassigned between solver iterations (typically toggled to
/// [`ConstraintKind::TurnedOff`]); the assignment itself is owned by the
/// equilibrium layer, not by this crate.
///
/// # Example
///
/// ```
/// use equiforge_core::ConstraintKind;
///
/// let kind = ConstraintKind::default();
/// assert_eq!(kind, ConstraintKind::AbsolutePositive);
/// assert!(kind.is_active());
/// assert!(!kind.allows_negative_coefficients());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstraintKind {
    /// The constraint row is currently excluded from the solve.
    TurnedOff,
    /// Normal element conservation: non-negative coefficients only.
    #[default]
    AbsolutePositive,
    /// Conservation of free electrons; coefficients may carry either sign.
    ElectronCharge,
    /// Charge neutrality of a single phase; signed coefficients.
    ChargeNeutrality,
    /// Fixed lattice stoichiometry in a multi-lattice solid; signed
    /// coefficients, lattice 0 negative and higher lattices positive.
    LatticeRatio,
    /// A group of species or ionic states treated as a pseudo-element
    /// because kinetics freeze their interconversion on the problem's
    /// timescale. Rows of this kind must support addition and subtraction.
    KineticFrozen,
    /// Bounds the total quantity of a surface phase.
    SurfaceConstraint,
    /// Reserved; no constraint of this kind exists yet.
    Other,
}

impl ConstraintKind {
    /// All kinds in legacy-code order, for exhaustive iteration.
    pub const ALL: [ConstraintKind; 8] = [
        ConstraintKind::TurnedOff,
        ConstraintKind::AbsolutePositive,
        ConstraintKind::ElectronCharge,
        ConstraintKind::ChargeNeutrality,
        ConstraintKind::LatticeRatio,
        ConstraintKind::KineticFrozen,
        ConstraintKind::SurfaceConstraint,
        ConstraintKind::Other,
    ];

    /// Returns the integer code used by persisted data and older tooling.
    ///
    /// # Example
    ///
    /// ```
    /// use equiforge_core::ConstraintKind;
    ///
    /// assert_eq!(ConstraintKind::TurnedOff.legacy_code(), -1);
    /// assert_eq!(ConstraintKind::AbsolutePositive.legacy_code(), 0);
    /// assert_eq!(ConstraintKind::Other.legacy_code(), 6);
    /// ```
    #[inline]
    pub const fn legacy_code(&self) -> i32 {
        match self {
            ConstraintKind::TurnedOff => -1,
            ConstraintKind::AbsolutePositive => 0,
            ConstraintKind::ElectronCharge => 1,
            ConstraintKind::ChargeNeutrality => 2,
            ConstraintKind::LatticeRatio => 3,
            ConstraintKind::KineticFrozen => 4,
            ConstraintKind::SurfaceConstraint => 5,
            ConstraintKind::Other => 6,
        }
    }

    /// Decodes a legacy integer code.
    ///
    /// Fails with [`EquiforgeError::InvalidConstraintCode`] for any value
    /// outside `-1..=6`.
    pub const fn from_legacy_code(code: i32) -> Result<ConstraintKind> {
        match code {
            -1 => Ok(ConstraintKind::TurnedOff),
            0 => Ok(ConstraintKind::AbsolutePositive),
            1 => Ok(ConstraintKind::ElectronCharge),
            2 => Ok(ConstraintKind::ChargeNeutrality),
            3 => Ok(ConstraintKind::LatticeRatio),
            4 => Ok(ConstraintKind::KineticFrozen),
            5 => Ok(ConstraintKind::SurfaceConstraint),
            6 => Ok(ConstraintKind::Other),
            _ => Err(EquiforgeError::InvalidConstraintCode(code)),
        }
    }

    /// Returns true unless the row is [`ConstraintKind::TurnedOff`].
    #[inline]
    pub const fn is_active(&self) -> bool {
        !matches!(self, ConstraintKind::TurnedOff)
    }

    /// Returns true if formula-matrix coefficients under this constraint
    /// may be negative.
    ///
    /// # Example
    ///
    /// ```
    /// use equiforge_core::ConstraintKind;
    ///
    /// assert!(ConstraintKind::ChargeNeutrality.allows_negative_coefficients());
    /// assert!(!ConstraintKind::KineticFrozen.allows_negative_coefficients());
    /// ```
    #[inline]
    pub const fn allows_negative_coefficients(&self) -> bool {
        matches!(
            self,
            ConstraintKind::ElectronCharge
                | ConstraintKind::ChargeNeutrality
                | ConstraintKind::LatticeRatio
        )
    }

    /// Stable lower-snake label, matching [`fmt::Display`].
    pub const fn label(&self) -> &'static str {
        match self {
            ConstraintKind::TurnedOff => "turned_off",
            ConstraintKind::AbsolutePositive => "absolute_positive",
            ConstraintKind::ElectronCharge => "electron_charge",
            ConstraintKind::ChargeNeutrality => "charge_neutrality",
            ConstraintKind::LatticeRatio => "lattice_ratio",
            ConstraintKind::KineticFrozen => "kinetic_frozen",
            ConstraintKind::SurfaceConstraint => "surface_constraint",
            ConstraintKind::Other => "other",
        }
    }
}

impl TryFrom<i32> for ConstraintKind {
    type Error = EquiforgeError;

    fn try_from(code: i32) -> Result<ConstraintKind> {
        ConstraintKind::from_legacy_code(code)
    }
}

impl From<ConstraintKind> for i32 {
    fn from(kind: ConstraintKind) -> i32 {
        kind.legacy_code()
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_absolute_positive() {
        assert_eq!(ConstraintKind::default(), ConstraintKind::AbsolutePositive);
    }

    #[test]
    fn test_legacy_codes_round_trip() {
        for kind in ConstraintKind::ALL {
            assert_eq!(ConstraintKind::from_legacy_code(kind.legacy_code()), Ok(kind));
            assert_eq!(ConstraintKind::try_from(i32::from(kind)), Ok(kind));
        }
    }

    #[test]
    fn test_legacy_codes_are_contiguous() {
        let codes: Vec<i32> = ConstraintKind::ALL.iter().map(|k| k.legacy_code()).collect();
        assert_eq!(codes, vec![-1, 0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_out_of_range_codes_fail() {
        for code in [-2, 7, 42, i32::MIN, i32::MAX] {
            assert_eq!(
                ConstraintKind::from_legacy_code(code),
                Err(EquiforgeError::InvalidConstraintCode(code))
            );
        }
    }

    #[test]
    fn test_only_turned_off_is_inactive() {
        for kind in ConstraintKind::ALL {
            assert_eq!(kind.is_active(), kind != ConstraintKind::TurnedOff);
        }
    }

    #[test]
    fn test_signed_coefficient_kinds() {
        let signed: Vec<ConstraintKind> = ConstraintKind::ALL
            .into_iter()
            .filter(|k| k.allows_negative_coefficients())
            .collect();
        assert_eq!(
            signed,
            vec![
                ConstraintKind::ElectronCharge,
                ConstraintKind::ChargeNeutrality,
                ConstraintKind::LatticeRatio,
            ]
        );
    }

    #[test]
    fn test_display_labels_are_unique() {
        let mut labels: Vec<&str> = ConstraintKind::ALL.iter().map(|k| k.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), ConstraintKind::ALL.len());
        assert_eq!(ConstraintKind::LatticeRatio.to_string(), "lattice_ratio");
    }
}
