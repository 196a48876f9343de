//! Core types for QFT synthesis
//!
//! Gantree: L0_Foundation → CoreTypes
//!
//! Slot handles, control sets, and the numeric aliases used by rotation
//! operations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::f64::consts::PI;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Rotation angle in radians
/// Gantree: Angle // pub type Angle = f64
pub type Angle = f64;

/// Numerator of a dyadic rotation fraction (sign selects direction)
pub type Numerator = i64;

/// Power-of-two denominator exponent of a dyadic rotation fraction
pub type Exponent = u32;

/// Angle in radians of the dyadic rotation `numerator / 2^exponent`.
///
/// A full `numerator / 2^exponent == 1` corresponds to a phase of `π`, so the
/// gap-1 rotation emitted by the QFT builder is the controlled `S` gate.
///
/// Exponents beyond `i32::MAX` saturate, giving an angle of zero.
pub fn dyadic_angle(numerator: Numerator, exponent: Exponent) -> Angle {
    let exponent = i32::try_from(exponent).unwrap_or(i32::MAX);
    PI * numerator as f64 / 2f64.powi(exponent)
}

// ============================================================================
// SlotId
// ============================================================================

/// Opaque handle to one register slot
/// Gantree: SlotId // 슬롯 식별자
///
/// Carries identity only. The register owning the slot decides its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(pub usize);

impl SlotId {
    /// Raw identifier
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for SlotId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ControlSet
// ============================================================================

/// Order-independent set of control slots
/// Gantree: ControlSet // 제어 집합
///
/// Stored sorted, so adding controls in any order yields equal sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlSet(BTreeSet<SlotId>);

impl ControlSet {
    /// Control set with exactly one slot
    pub fn single(slot: SlotId) -> Self {
        let mut set = BTreeSet::new();
        set.insert(slot);
        Self(set)
    }

    /// Return a new set that also contains `slot`
    pub fn with(&self, slot: SlotId) -> Self {
        let mut set = self.0.clone();
        set.insert(slot);
        Self(set)
    }

    /// Check membership
    pub fn contains(&self, slot: SlotId) -> bool {
        self.0.contains(&slot)
    }

    /// Number of controls
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in ascending slot order
    pub fn iter(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.0.iter().copied()
    }

    /// Map every control through `f`
    pub fn relabel(&self, f: impl Fn(SlotId) -> SlotId) -> Self {
        self.0.iter().map(|&s| f(s)).collect()
    }
}

impl FromIterator<SlotId> for ControlSet {
    fn from_iter<I: IntoIterator<Item = SlotId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ControlSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|s| s.to_string()).collect();
        write!(f, "{{{}}}", parts.join(","))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dyadic_angle() {
        assert_relative_eq!(dyadic_angle(1, 0), PI);
        assert_relative_eq!(dyadic_angle(1, 1), PI / 2.0);
        assert_relative_eq!(dyadic_angle(1, 3), PI / 8.0);
        assert_relative_eq!(dyadic_angle(-1, 2), -PI / 4.0);
    }

    #[test]
    fn test_dyadic_angle_huge_exponent() {
        assert_eq!(dyadic_angle(1, u32::MAX), 0.0);
        assert_eq!(dyadic_angle(i64::MAX, i32::MAX as u32 + 1), 0.0);
        assert!(dyadic_angle(1, 1_000).abs() < 1e-300);
    }

    #[test]
    fn test_control_set_order_independent() {
        let a = ControlSet::single(SlotId(3)).with(SlotId(1));
        let b = ControlSet::single(SlotId(1)).with(SlotId(3));
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.to_string(), "{1,3}");
    }

    #[test]
    fn test_control_set_with_is_idempotent() {
        let set = ControlSet::single(SlotId(2)).with(SlotId(2));
        assert_eq!(set.len(), 1);
        assert!(set.contains(SlotId(2)));
    }

    #[test]
    fn test_slot_serde_transparent() {
        let json = serde_json::to_string(&SlotId(4)).unwrap();
        assert_eq!(json, "4");

        let set: ControlSet = serde_json::from_str("[2, 0]").unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![SlotId(0), SlotId(2)]);
    }
}
