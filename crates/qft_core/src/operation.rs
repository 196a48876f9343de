//! Elementary operations for QFT circuits
//!
//! Gantree: L1_Circuit → Operation
//!
//! A closed set of gate records. The adjoint and controlled forms of every
//! variant are total functions over this enum, so sequence-level
//! transformations never need to inspect gate shapes at runtime.

use crate::constants::qasm;
use crate::types::{dyadic_angle, Angle, ControlSet, Exponent, Numerator, SlotId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One elementary gate
/// Gantree: Operation // 연산 enum
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    // ========================================================================
    // Base Operations
    // ========================================================================
    /// Phase rotation by the dyadic fraction `numerator / 2^exponent`
    /// Gantree: Rotate{{t,num,exp}} // 위상 회전
    Rotate {
        /// Rotated slot
        target: SlotId,
        /// Fraction numerator (sign selects direction)
        numerator: Numerator,
        /// Fraction denominator exponent
        exponent: Exponent,
    },

    /// Phase rotation conditioned on every slot in `controls`
    /// Gantree: ControlledRotate{{cs,t,num,exp}} // 제어 회전
    ControlledRotate {
        /// Conditioning slots
        controls: ControlSet,
        /// Rotated slot
        target: SlotId,
        /// Fraction numerator (sign selects direction)
        numerator: Numerator,
        /// Fraction denominator exponent
        exponent: Exponent,
    },

    /// Hadamard gate
    /// Gantree: Hadamard(SlotId) // 하다마드
    Hadamard(SlotId),

    /// SWAP gate
    /// Gantree: Swap(SlotId, SlotId) // 스왑
    Swap(SlotId, SlotId),

    // ========================================================================
    // Lifted Operations
    // ========================================================================
    /// Hadamard conditioned on `controls`
    ControlledHadamard {
        /// Conditioning slots
        controls: ControlSet,
        /// Transformed slot
        target: SlotId,
    },

    /// SWAP conditioned on `controls` (Fredkin for a single control)
    ControlledSwap {
        /// Conditioning slots
        controls: ControlSet,
        /// First exchanged slot
        a: SlotId,
        /// Second exchanged slot
        b: SlotId,
    },
}

impl Operation {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Rotation with a single control
    pub fn controlled_rotate(
        control: SlotId,
        target: SlotId,
        numerator: Numerator,
        exponent: Exponent,
    ) -> Self {
        Operation::ControlledRotate {
            controls: ControlSet::single(control),
            target,
            numerator,
            exponent,
        }
    }

    // ========================================================================
    // Properties
    // ========================================================================

    /// Control slots, if the operation is conditioned
    pub fn controls(&self) -> Option<&ControlSet> {
        match self {
            Operation::ControlledRotate { controls, .. }
            | Operation::ControlledHadamard { controls, .. }
            | Operation::ControlledSwap { controls, .. } => Some(controls),
            Operation::Rotate { .. } | Operation::Hadamard(_) | Operation::Swap(_, _) => None,
        }
    }

    /// Slots acted upon, excluding controls
    pub fn targets(&self) -> Vec<SlotId> {
        match self {
            Operation::Rotate { target, .. }
            | Operation::ControlledRotate { target, .. }
            | Operation::ControlledHadamard { target, .. }
            | Operation::Hadamard(target) => vec![*target],
            Operation::Swap(a, b) | Operation::ControlledSwap { a, b, .. } => vec![*a, *b],
        }
    }

    /// All referenced slots, controls first
    /// Gantree: slots(&self) -> Vec<SlotId> // 관련 슬롯
    pub fn slots(&self) -> Vec<SlotId> {
        let mut slots: Vec<SlotId> = self
            .controls()
            .map(|cs| cs.iter().collect())
            .unwrap_or_default();
        slots.extend(self.targets());
        slots
    }

    /// Check whether `slot` is a control or target of this operation
    pub fn references(&self, slot: SlotId) -> bool {
        self.controls().is_some_and(|cs| cs.contains(slot)) || self.targets().contains(&slot)
    }

    /// Number of referenced slots
    pub fn arity(&self) -> usize {
        self.controls().map_or(0, |cs| cs.len()) + self.targets().len()
    }

    /// Check if operation is a (possibly controlled) rotation
    pub fn is_rotation(&self) -> bool {
        matches!(
            self,
            Operation::Rotate { .. } | Operation::ControlledRotate { .. }
        )
    }

    /// Check if operation carries controls
    pub fn is_controlled(&self) -> bool {
        self.controls().is_some()
    }

    /// Check if operation is a (possibly controlled) Hadamard
    pub fn is_hadamard(&self) -> bool {
        matches!(
            self,
            Operation::Hadamard(_) | Operation::ControlledHadamard { .. }
        )
    }

    /// Check if operation is a (possibly controlled) swap
    pub fn is_swap(&self) -> bool {
        matches!(self, Operation::Swap(_, _) | Operation::ControlledSwap { .. })
    }

    /// Rotation fraction `(numerator, exponent)`, if any
    pub fn fraction(&self) -> Option<(Numerator, Exponent)> {
        match self {
            Operation::Rotate {
                numerator,
                exponent,
                ..
            }
            | Operation::ControlledRotate {
                numerator,
                exponent,
                ..
            } => Some((*numerator, *exponent)),
            _ => None,
        }
    }

    /// Rotation angle in radians, if any
    pub fn angle(&self) -> Option<Angle> {
        self.fraction().map(|(num, exp)| dyadic_angle(num, exp))
    }

    /// Short gate name
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Rotate { .. } => "p",
            Operation::ControlledRotate { .. } => "cp",
            Operation::Hadamard(_) => "h",
            Operation::Swap(_, _) => "swap",
            Operation::ControlledHadamard { .. } => "ch",
            Operation::ControlledSwap { .. } => "cswap",
        }
    }

    // ========================================================================
    // Transformations
    // ========================================================================

    /// Inverse of this operation
    /// Gantree: adjoint(&self) -> Operation // 역연산
    ///
    /// Rotations flip direction; Hadamard and SWAP are self-inverse with or
    /// without controls. Numerators negate with wrapping, so `i64::MIN` maps
    /// to itself and the adjoint stays an involution; for exponents up to 63
    /// that is still the exact inverse, since the wrapped numerator is off by
    /// `2^64`, a whole number of turns.
    pub fn adjoint(&self) -> Operation {
        match self {
            Operation::Rotate {
                target,
                numerator,
                exponent,
            } => Operation::Rotate {
                target: *target,
                numerator: numerator.wrapping_neg(),
                exponent: *exponent,
            },
            Operation::ControlledRotate {
                controls,
                target,
                numerator,
                exponent,
            } => Operation::ControlledRotate {
                controls: controls.clone(),
                target: *target,
                numerator: numerator.wrapping_neg(),
                exponent: *exponent,
            },
            Operation::Hadamard(_)
            | Operation::Swap(_, _)
            | Operation::ControlledHadamard { .. }
            | Operation::ControlledSwap { .. } => self.clone(),
        }
    }

    /// This operation conditioned additionally on `control`
    /// Gantree: controlled_by(&self, c) -> Operation // 제어 추가
    pub fn controlled_by(&self, control: SlotId) -> Operation {
        match self {
            Operation::Rotate {
                target,
                numerator,
                exponent,
            } => Operation::ControlledRotate {
                controls: ControlSet::single(control),
                target: *target,
                numerator: *numerator,
                exponent: *exponent,
            },
            Operation::ControlledRotate {
                controls,
                target,
                numerator,
                exponent,
            } => Operation::ControlledRotate {
                controls: controls.with(control),
                target: *target,
                numerator: *numerator,
                exponent: *exponent,
            },
            Operation::Hadamard(target) => Operation::ControlledHadamard {
                controls: ControlSet::single(control),
                target: *target,
            },
            Operation::ControlledHadamard { controls, target } => Operation::ControlledHadamard {
                controls: controls.with(control),
                target: *target,
            },
            Operation::Swap(a, b) => Operation::ControlledSwap {
                controls: ControlSet::single(control),
                a: *a,
                b: *b,
            },
            Operation::ControlledSwap { controls, a, b } => Operation::ControlledSwap {
                controls: controls.with(control),
                a: *a,
                b: *b,
            },
        }
    }

    /// Map every referenced slot through `f`
    pub fn relabel(&self, f: impl Fn(SlotId) -> SlotId) -> Operation {
        match self {
            Operation::Rotate {
                target,
                numerator,
                exponent,
            } => Operation::Rotate {
                target: f(*target),
                numerator: *numerator,
                exponent: *exponent,
            },
            Operation::ControlledRotate {
                controls,
                target,
                numerator,
                exponent,
            } => Operation::ControlledRotate {
                controls: controls.relabel(&f),
                target: f(*target),
                numerator: *numerator,
                exponent: *exponent,
            },
            Operation::Hadamard(target) => Operation::Hadamard(f(*target)),
            Operation::Swap(a, b) => Operation::Swap(f(*a), f(*b)),
            Operation::ControlledHadamard { controls, target } => Operation::ControlledHadamard {
                controls: controls.relabel(&f),
                target: f(*target),
            },
            Operation::ControlledSwap { controls, a, b } => Operation::ControlledSwap {
                controls: controls.relabel(&f),
                a: f(*a),
                b: f(*b),
            },
        }
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Convert to an OpenQASM 3.0 statement
    /// Gantree: to_qasm(&self) -> String // QASM 변환
    pub fn to_qasm(&self) -> String {
        let operands: Vec<String> = self.slots().iter().map(|s| qubit_ref(*s)).collect();
        let operands = operands.join(",");

        match self {
            Operation::Rotate { .. } => format!("p({}) {};", self.angle_text(), operands),
            Operation::Hadamard(_) => format!("h {};", operands),
            Operation::Swap(_, _) => format!("swap {};", operands),
            Operation::ControlledRotate { controls, .. } if controls.is_empty() => {
                format!("p({}) {};", self.angle_text(), operands)
            }
            Operation::ControlledHadamard { controls, .. } if controls.is_empty() => {
                format!("h {};", operands)
            }
            Operation::ControlledSwap { controls, .. } if controls.is_empty() => {
                format!("swap {};", operands)
            }
            Operation::ControlledRotate { controls, .. } if controls.len() == 1 => {
                format!("cp({}) {};", self.angle_text(), operands)
            }
            Operation::ControlledHadamard { controls, .. } if controls.len() == 1 => {
                format!("ch {};", operands)
            }
            Operation::ControlledSwap { controls, .. } if controls.len() == 1 => {
                format!("cswap {};", operands)
            }
            Operation::ControlledRotate { controls, .. } => format!(
                "ctrl({}) @ p({}) {};",
                controls.len(),
                self.angle_text(),
                operands
            ),
            Operation::ControlledHadamard { controls, .. } => {
                format!("ctrl({}) @ h {};", controls.len(), operands)
            }
            Operation::ControlledSwap { controls, .. } => {
                format!("ctrl({}) @ swap {};", controls.len(), operands)
            }
        }
    }

    fn angle_text(&self) -> String {
        self.angle().map(|a| a.to_string()).unwrap_or_default()
    }
}

fn qubit_ref(slot: SlotId) -> String {
    format!("{}[{}]", qasm::REGISTER, slot)
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_qasm())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn s(i: usize) -> SlotId {
        SlotId(i)
    }

    #[test]
    fn test_operation_slots() {
        assert_eq!(Operation::Hadamard(s(0)).slots(), vec![s(0)]);
        assert_eq!(Operation::Swap(s(0), s(2)).slots(), vec![s(0), s(2)]);
        assert_eq!(
            Operation::controlled_rotate(s(2), s(0), 1, 2).slots(),
            vec![s(2), s(0)]
        );
    }

    #[test]
    fn test_operation_classification() {
        let cr = Operation::controlled_rotate(s(1), s(0), 1, 1);
        assert!(cr.is_rotation());
        assert!(cr.is_controlled());
        assert_eq!(cr.arity(), 2);

        assert!(!Operation::Hadamard(s(0)).is_rotation());
        assert!(Operation::Hadamard(s(0)).is_hadamard());
        assert!(Operation::Swap(s(0), s(1)).is_swap());
        assert!(!Operation::Swap(s(0), s(1)).is_controlled());
    }

    #[test]
    fn test_angle() {
        let cr = Operation::controlled_rotate(s(1), s(0), 1, 1);
        assert_relative_eq!(cr.angle().unwrap(), PI / 2.0);
        assert!(Operation::Hadamard(s(0)).angle().is_none());
    }

    #[test]
    fn test_adjoint_negates_rotations() {
        let rot = Operation::Rotate {
            target: s(0),
            numerator: 3,
            exponent: 4,
        };
        assert_eq!(rot.adjoint().fraction(), Some((-3, 4)));

        let cr = Operation::controlled_rotate(s(1), s(0), 1, 2);
        assert_eq!(cr.adjoint(), Operation::controlled_rotate(s(1), s(0), -1, 2));
        assert_eq!(cr.adjoint().adjoint(), cr);
    }

    #[test]
    fn test_adjoint_extreme_numerator() {
        let rot = Operation::Rotate {
            target: s(0),
            numerator: i64::MIN,
            exponent: 3,
        };
        assert_eq!(rot.adjoint(), rot);
        assert_eq!(rot.adjoint().adjoint(), rot);

        let cr = Operation::controlled_rotate(s(1), s(0), i64::MAX, 5);
        assert_eq!(cr.adjoint().fraction(), Some((-i64::MAX, 5)));
        assert_eq!(cr.adjoint().adjoint(), cr);
    }

    #[test]
    fn test_name() {
        assert_eq!(Operation::Hadamard(s(0)).name(), "h");
        assert_eq!(Operation::Swap(s(0), s(1)).name(), "swap");
        assert_eq!(Operation::controlled_rotate(s(1), s(0), 1, 1).name(), "cp");
        assert_eq!(Operation::Hadamard(s(0)).controlled_by(s(1)).name(), "ch");
        assert_eq!(Operation::Swap(s(0), s(1)).controlled_by(s(2)).name(), "cswap");
    }

    #[test]
    fn test_to_qasm_without_controls() {
        let cr = Operation::ControlledRotate {
            controls: ControlSet::default(),
            target: s(2),
            numerator: 1,
            exponent: 1,
        };
        assert_eq!(cr.to_qasm(), "p(1.5707963267948966) q[2];");
        let ch = Operation::ControlledHadamard {
            controls: ControlSet::default(),
            target: s(0),
        };
        assert_eq!(ch.to_qasm(), "h q[0];");
    }

    #[test]
    fn test_adjoint_self_inverse_gates() {
        let h = Operation::Hadamard(s(0));
        let sw = Operation::Swap(s(0), s(1));
        let ch = h.controlled_by(s(5));
        assert_eq!(h.adjoint(), h);
        assert_eq!(sw.adjoint(), sw);
        assert_eq!(ch.adjoint(), ch);
    }

    #[test]
    fn test_controlled_by() {
        let rot = Operation::Rotate {
            target: s(0),
            numerator: 1,
            exponent: 3,
        };
        assert_eq!(
            rot.controlled_by(s(4)),
            Operation::controlled_rotate(s(4), s(0), 1, 3)
        );

        let swap = Operation::Swap(s(0), s(2)).controlled_by(s(7));
        assert_eq!(swap.controls().unwrap().len(), 1);
        assert_eq!(swap.targets(), vec![s(0), s(2)]);
    }

    #[test]
    fn test_controlled_by_commutes() {
        let cr = Operation::controlled_rotate(s(1), s(0), 1, 1);
        assert_eq!(
            cr.controlled_by(s(5)).controlled_by(s(6)),
            cr.controlled_by(s(6)).controlled_by(s(5))
        );

        let h = Operation::Hadamard(s(0));
        assert_eq!(
            h.controlled_by(s(5)).controlled_by(s(6)),
            h.controlled_by(s(6)).controlled_by(s(5))
        );
    }

    #[test]
    fn test_relabel() {
        let cr = Operation::controlled_rotate(s(1), s(0), 1, 1);
        let moved = cr.relabel(|x| SlotId(x.0 + 10));
        assert_eq!(moved, Operation::controlled_rotate(s(11), s(10), 1, 1));
    }

    #[test]
    fn test_to_qasm() {
        assert_eq!(Operation::Hadamard(s(0)).to_qasm(), "h q[0];");
        assert_eq!(Operation::Swap(s(0), s(2)).to_qasm(), "swap q[0],q[2];");
        assert_eq!(
            Operation::controlled_rotate(s(1), s(0), 1, 1).to_qasm(),
            "cp(1.5707963267948966) q[1],q[0];"
        );
        assert_eq!(
            Operation::Hadamard(s(0)).controlled_by(s(3)).to_qasm(),
            "ch q[3],q[0];"
        );
        assert_eq!(
            Operation::Swap(s(0), s(1))
                .controlled_by(s(4))
                .controlled_by(s(3))
                .to_qasm(),
            "ctrl(2) @ swap q[3],q[4],q[0],q[1];"
        );
    }

    #[test]
    fn test_references() {
        let op = Operation::Swap(s(0), s(1)).controlled_by(s(9));
        assert!(op.references(s(9)));
        assert!(op.references(s(1)));
        assert!(!op.references(s(2)));
    }
}
