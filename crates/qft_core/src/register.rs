//! Slot registers and addressing views
//!
//! Gantree: L1_Register → Register, RegisterView
//!
//! A [`Register`] owns the ordered slot list. A [`RegisterView`] borrows it
//! under one of two index conventions:
//!
//! - [`Addressing::Forward`] (big-endian): logical index 0 is the most
//!   significant slot, `slot(i) = slots[i]`
//! - [`Addressing::Reversed`] (little-endian): logical index 0 is the least
//!   significant slot, `slot(i) = slots[n - 1 - i]`
//!
//! Switching views never copies the slot list.

use crate::error::{QftError, QftResult};
use crate::types::SlotId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// ============================================================================
// Addressing
// ============================================================================

/// Index convention over a register
/// Gantree: Addressing // Forward/Reversed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Addressing {
    /// Index 0 is most significant (big-endian)
    #[default]
    Forward,
    /// Index 0 is least significant (little-endian)
    Reversed,
}

impl Addressing {
    /// The opposite convention
    pub fn flipped(&self) -> Self {
        match self {
            Addressing::Forward => Addressing::Reversed,
            Addressing::Reversed => Addressing::Forward,
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> QftResult<Self> {
        match s.to_lowercase().as_str() {
            "forward" | "big" | "big-endian" | "bigendian" => Ok(Addressing::Forward),
            "reversed" | "little" | "little-endian" | "littleendian" => {
                Ok(Addressing::Reversed)
            }
            _ => Err(QftError::InvalidAddressing(s.to_string())),
        }
    }
}

impl fmt::Display for Addressing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Addressing::Forward => write!(f, "forward"),
            Addressing::Reversed => write!(f, "reversed"),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// Ordered sequence of distinct slots
/// Gantree: Register // 레지스터
///
/// Deserialization goes through [`Register::new`], so duplicate slots are
/// rejected on load as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RegisterRepr")]
pub struct Register {
    /// Slots in forward order
    /// Gantree: slots: Vec<SlotId> // 슬롯 목록
    slots: Vec<SlotId>,
}

/// Wire shape of [`Register`] before validation
#[derive(Deserialize)]
struct RegisterRepr {
    slots: Vec<SlotId>,
}

impl TryFrom<RegisterRepr> for Register {
    type Error = QftError;

    fn try_from(repr: RegisterRepr) -> QftResult<Self> {
        Self::new(repr.slots)
    }
}

impl Register {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create from an ordered slot list (forward order)
    /// Gantree: new(slots) -> Result<Self> // 생성+중복 검사
    ///
    /// An empty list is accepted; the builder reports it.
    pub fn new(slots: Vec<SlotId>) -> QftResult<Self> {
        let mut seen = HashSet::with_capacity(slots.len());
        for &slot in &slots {
            if !seen.insert(slot) {
                return Err(QftError::DuplicateSlot(slot));
            }
        }
        Ok(Self { slots })
    }

    /// Register over slots `0..n` in order
    pub fn contiguous(n: usize) -> Self {
        Self {
            slots: (0..n).map(SlotId).collect(),
        }
    }

    /// Register over slots `start..start + n` in order
    ///
    /// Fails if `start + n` overflows the slot id space.
    pub fn range(start: usize, n: usize) -> QftResult<Self> {
        let end = start.checked_add(n).ok_or_else(|| {
            QftError::InvalidAddressing(format!("slot range {}+{} overflows", start, n))
        })?;
        Ok(Self {
            slots: (start..end).map(SlotId).collect(),
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in forward order
    pub fn slots(&self) -> &[SlotId] {
        &self.slots
    }

    /// Check whether `slot` belongs to this register
    pub fn contains(&self, slot: SlotId) -> bool {
        self.slots.contains(&slot)
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// Borrow under the given addressing
    /// Gantree: view(&self, Addressing) -> RegisterView // 뷰
    pub fn view(&self, addressing: Addressing) -> RegisterView<'_> {
        RegisterView {
            register: self,
            addressing,
        }
    }

    /// Big-endian view
    pub fn forward(&self) -> RegisterView<'_> {
        self.view(Addressing::Forward)
    }

    /// Little-endian view
    pub fn reversed(&self) -> RegisterView<'_> {
        self.view(Addressing::Reversed)
    }

    /// Slot that the reversal bijection pairs with `slot`
    ///
    /// Returns `None` if `slot` is not in the register.
    pub fn mirror(&self, slot: SlotId) -> Option<SlotId> {
        let n = self.slots.len();
        self.slots
            .iter()
            .position(|&s| s == slot)
            .map(|i| self.slots[n - 1 - i])
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.slots.iter().map(|s| s.to_string()).collect();
        write!(f, "Register[{}]", parts.join(","))
    }
}

// ============================================================================
// RegisterView
// ============================================================================

/// A register seen through one addressing convention
/// Gantree: RegisterView // 주소 지정 뷰
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterView<'a> {
    register: &'a Register,
    addressing: Addressing,
}

impl<'a> RegisterView<'a> {
    /// Underlying register
    pub fn register(&self) -> &'a Register {
        self.register
    }

    /// Addressing convention of this view
    pub fn addressing(&self) -> Addressing {
        self.addressing
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.register.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.register.is_empty()
    }

    /// Position in the underlying slot list for logical index `index`
    /// Gantree: physical_index(i) -> Result<usize> // n-1-i
    pub fn physical_index(&self, index: usize) -> QftResult<usize> {
        let len = self.len();
        if index >= len {
            return Err(QftError::IndexOutOfRange { index, len });
        }
        Ok(match self.addressing {
            Addressing::Forward => index,
            Addressing::Reversed => len - 1 - index,
        })
    }

    /// Slot at logical index `index`
    /// Gantree: slot(i) -> Result<SlotId> // 슬롯 조회
    pub fn slot(&self, index: usize) -> QftResult<SlotId> {
        let physical = self.physical_index(index)?;
        Ok(self.register.slots[physical])
    }

    /// Same register under the opposite convention
    pub fn flipped(&self) -> RegisterView<'a> {
        RegisterView {
            register: self.register,
            addressing: self.addressing.flipped(),
        }
    }

    /// Iterate slots in logical order
    pub fn iter(&self) -> impl Iterator<Item = SlotId> + 'a {
        let slots = self.register.slots.as_slice();
        let reversed = self.addressing == Addressing::Reversed;
        (0..slots.len()).map(move |i| {
            if reversed {
                slots[slots.len() - 1 - i]
            } else {
                slots[i]
            }
        })
    }
}

impl fmt::Display for RegisterView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.register, self.addressing)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Register {
        Register::new(vec![SlotId(10), SlotId(11), SlotId(12), SlotId(13)]).unwrap()
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let err = Register::new(vec![SlotId(0), SlotId(1), SlotId(0)]).unwrap_err();
        assert_eq!(err, QftError::DuplicateSlot(SlotId(0)));
    }

    #[test]
    fn test_register_allows_empty() {
        let reg = Register::new(vec![]).unwrap();
        assert!(reg.is_empty());
        assert!(reg.forward().is_empty());
    }

    #[test]
    fn test_forward_lookup() {
        let reg = sample();
        let view = reg.forward();
        assert_eq!(view.slot(0).unwrap(), SlotId(10));
        assert_eq!(view.slot(3).unwrap(), SlotId(13));
    }

    #[test]
    fn test_reversed_lookup() {
        let reg = sample();
        let view = reg.reversed();
        assert_eq!(view.slot(0).unwrap(), SlotId(13));
        assert_eq!(view.slot(3).unwrap(), SlotId(10));
        assert_eq!(view.physical_index(1).unwrap(), 2);
    }

    #[test]
    fn test_views_are_a_bijection() {
        let reg = sample();
        let n = reg.len();
        for i in 0..n {
            assert_eq!(
                reg.reversed().slot(i).unwrap(),
                reg.forward().slot(n - 1 - i).unwrap()
            );
        }
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        let reg = sample();
        for view in [reg.forward(), reg.reversed()] {
            assert_eq!(
                view.slot(4),
                Err(QftError::IndexOutOfRange { index: 4, len: 4 })
            );
        }
    }

    #[test]
    fn test_flipped_view_shares_register() {
        let reg = sample();
        let view = reg.forward().flipped();
        assert_eq!(view.addressing(), Addressing::Reversed);
        assert!(std::ptr::eq(view.register(), &reg));
        assert_eq!(view.flipped(), reg.forward());
    }

    #[test]
    fn test_iter_follows_addressing() {
        let reg = sample();
        let fwd: Vec<_> = reg.forward().iter().collect();
        let mut rev: Vec<_> = reg.reversed().iter().collect();
        rev.reverse();
        assert_eq!(fwd, rev);
        assert_eq!(fwd, reg.slots());
    }

    #[test]
    fn test_mirror() {
        let reg = sample();
        assert_eq!(reg.mirror(SlotId(10)), Some(SlotId(13)));
        assert_eq!(reg.mirror(SlotId(12)), Some(SlotId(11)));
        assert_eq!(reg.mirror(SlotId(99)), None);

        let odd = Register::contiguous(3);
        assert_eq!(odd.mirror(SlotId(1)), Some(SlotId(1)));
    }

    #[test]
    fn test_addressing_parse() {
        assert_eq!(Addressing::parse("big").unwrap(), Addressing::Forward);
        assert_eq!(Addressing::parse("Little-Endian").unwrap(), Addressing::Reversed);
        assert!(Addressing::parse("sideways").is_err());
    }

    #[test]
    fn test_range_register() {
        let reg = Register::range(5, 3).unwrap();
        assert_eq!(reg.slots(), &[SlotId(5), SlotId(6), SlotId(7)]);
        assert!(reg.contains(SlotId(6)));
        assert!(!reg.contains(SlotId(0)));
    }

    #[test]
    fn test_range_register_overflow() {
        assert!(Register::range(usize::MAX, 1).unwrap_err().is_addressing_error());
        assert_eq!(Register::range(usize::MAX, 0).unwrap().len(), 0);
    }

    #[test]
    fn test_register_json_roundtrip() {
        let reg = sample();
        let json = serde_json::to_string(&reg).unwrap();
        assert_eq!(json, r#"{"slots":[10,11,12,13]}"#);
        assert_eq!(serde_json::from_str::<Register>(&json).unwrap(), reg);
    }

    #[test]
    fn test_register_json_rejects_duplicates() {
        let err = serde_json::from_str::<Register>(r#"{"slots":[0,0,1]}"#).unwrap_err();
        assert!(err.to_string().contains("slot 0 appears more than once"));
    }
}
