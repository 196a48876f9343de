//! Operation sequences
//!
//! Gantree: L1_Circuit → OperationSequence
//!
//! An ordered list of [`Operation`]s where list order is execution order.
//! Sequences are values: every transformation returns a new sequence.

use crate::constants::qasm;
use crate::error::QftResult;
use crate::operation::Operation;
use crate::types::SlotId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Ordered gate list
/// Gantree: OperationSequence // 연산 순서열
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationSequence {
    /// Operations in execution order
    /// Gantree: operations: Vec<Operation> // 연산 목록
    operations: Vec<Operation>,

    /// Optional sequence name
    name: Option<String>,
}

impl OperationSequence {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from operations in execution order
    pub fn from_operations(operations: Vec<Operation>) -> Self {
        Self {
            operations,
            name: None,
        }
    }

    /// Same operations under a new name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Load from JSON
    pub fn from_json(json: &str) -> QftResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Operations in execution order
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Iterate in execution order
    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }

    /// Sequence name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of operations
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Consume into the operation list
    pub fn into_operations(self) -> Vec<Operation> {
        self.operations
    }

    // ========================================================================
    // Composition
    // ========================================================================

    /// `self` followed by `next`, as a new sequence
    /// Gantree: then(&self, &other) -> Self // 이어 붙이기
    pub fn then(&self, next: &OperationSequence) -> OperationSequence {
        let mut operations = Vec::with_capacity(self.len() + next.len());
        operations.extend_from_slice(&self.operations);
        operations.extend_from_slice(&next.operations);
        Self {
            operations,
            name: self.name.clone(),
        }
    }

    /// Apply `f` to every operation, keeping order
    pub fn map(&self, f: impl Fn(&Operation) -> Operation) -> OperationSequence {
        Self {
            operations: self.operations.iter().map(f).collect(),
            name: self.name.clone(),
        }
    }

    /// Apply `f` to every operation, last operation first
    pub fn rev_map(&self, f: impl Fn(&Operation) -> Operation) -> OperationSequence {
        Self {
            operations: self.operations.iter().rev().map(f).collect(),
            name: self.name.clone(),
        }
    }

    /// Map every referenced slot through `f`
    pub fn relabel(&self, f: impl Fn(SlotId) -> SlotId) -> OperationSequence {
        self.map(|op| op.relabel(&f))
    }

    // ========================================================================
    // Analysis
    // ========================================================================

    /// Count Hadamards (plain and controlled)
    /// Gantree: count_hadamards(&self) -> usize // H 수
    pub fn count_hadamards(&self) -> usize {
        self.operations.iter().filter(|op| op.is_hadamard()).count()
    }

    /// Count rotations (plain and controlled)
    pub fn count_rotations(&self) -> usize {
        self.operations.iter().filter(|op| op.is_rotation()).count()
    }

    /// Count controlled rotations
    /// Gantree: count_controlled_rotations(&self) -> usize // CR 수
    pub fn count_controlled_rotations(&self) -> usize {
        self.operations
            .iter()
            .filter(|op| matches!(op, Operation::ControlledRotate { .. }))
            .count()
    }

    /// Count swaps (plain and controlled)
    /// Gantree: count_swaps(&self) -> usize // SWAP 수
    pub fn count_swaps(&self) -> usize {
        self.operations.iter().filter(|op| op.is_swap()).count()
    }

    /// All slots touched by any operation
    pub fn referenced_slots(&self) -> BTreeSet<SlotId> {
        self.operations.iter().flat_map(|op| op.slots()).collect()
    }

    /// Check whether any operation touches `slot`
    pub fn references(&self, slot: SlotId) -> bool {
        self.operations.iter().any(|op| op.references(slot))
    }

    /// Largest referenced slot id
    pub fn max_slot(&self) -> Option<SlotId> {
        self.referenced_slots().into_iter().next_back()
    }

    /// Circuit depth (longest chain of operations sharing slots)
    /// Gantree: depth(&self) -> usize // 깊이 계산
    pub fn depth(&self) -> usize {
        let mut slot_depths: HashMap<SlotId, usize> = HashMap::new();

        for op in &self.operations {
            let slots = op.slots();
            let layer = slots
                .iter()
                .filter_map(|s| slot_depths.get(s))
                .max()
                .copied()
                .unwrap_or(0)
                + 1;
            for s in slots {
                slot_depths.insert(s, layer);
            }
        }

        slot_depths.into_values().max().unwrap_or(0)
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Convert to an OpenQASM 3.0 program
    /// Gantree: to_qasm(&self) -> String // QASM3 출력
    pub fn to_qasm(&self) -> String {
        let width = self.max_slot().map_or(0, |s| s.index() + 1);
        let mut lines = Vec::with_capacity(self.operations.len() + 5);

        lines.push(qasm::HEADER.to_string());
        lines.push(qasm::INCLUDE.to_string());
        lines.push(String::new());
        lines.push(format!("qubit[{}] {};", width, qasm::REGISTER));
        lines.push(String::new());

        for op in &self.operations {
            lines.push(op.to_qasm());
        }

        lines.join("\n")
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> QftResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// Iteration
// ============================================================================

impl FromIterator<Operation> for OperationSequence {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self::from_operations(iter.into_iter().collect())
    }
}

impl IntoIterator for OperationSequence {
    type Item = Operation;
    type IntoIter = std::vec::IntoIter<Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.into_iter()
    }
}

impl<'a> IntoIterator for &'a OperationSequence {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for OperationSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "OperationSequence({}, {} ops over {} slots)",
            self.name.as_deref().unwrap_or("unnamed"),
            self.operations.len(),
            self.referenced_slots().len()
        )?;
        writeln!(f, "  Depth: {}", self.depth())?;
        writeln!(f, "  Hadamards: {}", self.count_hadamards())?;
        writeln!(f, "  Rotations: {}", self.count_rotations())?;
        writeln!(f, "  Swaps: {}", self.count_swaps())?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn s(i: usize) -> SlotId {
        SlotId(i)
    }

    fn two_slot_qft() -> OperationSequence {
        OperationSequence::from_operations(vec![
            Operation::Hadamard(s(0)),
            Operation::controlled_rotate(s(1), s(0), 1, 1),
            Operation::Hadamard(s(1)),
            Operation::Swap(s(0), s(1)),
        ])
    }

    #[test]
    fn test_sequence_new() {
        let seq = OperationSequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.depth(), 0);
        assert_eq!(seq.max_slot(), None);
    }

    #[test]
    fn test_counts() {
        let seq = two_slot_qft();
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.count_hadamards(), 2);
        assert_eq!(seq.count_rotations(), 1);
        assert_eq!(seq.count_controlled_rotations(), 1);
        assert_eq!(seq.count_swaps(), 1);
    }

    #[test]
    fn test_depth() {
        // Every operation shares a slot with its predecessor
        assert_eq!(two_slot_qft().depth(), 4);

        let parallel = OperationSequence::from_operations(vec![
            Operation::Hadamard(s(0)),
            Operation::Hadamard(s(1)),
            Operation::Hadamard(s(2)),
        ]);
        assert_eq!(parallel.depth(), 1);
    }

    #[test]
    fn test_then_preserves_order() {
        let a = two_slot_qft();
        let b = OperationSequence::from_operations(vec![Operation::Hadamard(s(5))]);
        let joined = a.then(&b);
        assert_eq!(joined.len(), 5);
        assert_eq!(joined.operations()[4], Operation::Hadamard(s(5)));
        assert_eq!(&joined.operations()[..4], a.operations());
        // inputs untouched
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn test_referenced_slots() {
        let seq = two_slot_qft();
        let slots: Vec<_> = seq.referenced_slots().into_iter().collect();
        assert_eq!(slots, vec![s(0), s(1)]);
        assert!(seq.references(s(1)));
        assert!(!seq.references(s(2)));
        assert_eq!(seq.max_slot(), Some(s(1)));
    }

    #[test]
    fn test_to_qasm() {
        let qasm = two_slot_qft().to_qasm();
        assert!(qasm.starts_with("OPENQASM 3.0;"));
        assert!(qasm.contains("qubit[2] q;"));
        assert!(qasm.contains("h q[0];"));
        assert!(qasm.contains("cp(1.5707963267948966) q[1],q[0];"));
        assert!(qasm.ends_with("swap q[0],q[1];"));
    }

    #[test]
    fn test_json_roundtrip() {
        let seq = two_slot_qft().with_name("qft2");
        let json = seq.to_json().unwrap();
        let back = OperationSequence::from_json(&json).unwrap();
        assert_eq!(back, seq);
        assert_eq!(back.name(), Some("qft2"));
    }

    #[test]
    fn test_collect_and_iterate() {
        let seq: OperationSequence = two_slot_qft().into_iter().rev().collect();
        assert_eq!(seq.operations()[0], Operation::Swap(s(0), s(1)));
        assert_eq!((&seq).into_iter().count(), 4);
    }

    #[test]
    fn test_display() {
        let text = two_slot_qft().with_name("qft2").to_string();
        assert!(text.contains("qft2"));
        assert!(text.contains("Hadamards: 2"));
    }
}
