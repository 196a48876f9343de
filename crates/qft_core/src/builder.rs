//! Operation sequence builder
//!
//! Gantree: L1_Circuit → SequenceBuilder
//!
//! Fluent builder used by the synthesis routines to grow a sequence before
//! handing it to the caller as an immutable value.

use crate::operation::Operation;
use crate::sequence::OperationSequence;
use crate::types::{Exponent, Numerator, SlotId};

/// Fluent sequence builder (consuming self pattern)
/// Gantree: SequenceBuilder // 빌더 패턴
#[derive(Debug, Default)]
pub struct SequenceBuilder {
    /// Operations collected so far
    operations: Vec<Operation>,

    /// Name given to the built sequence
    name: Option<String>,
}

impl SequenceBuilder {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create an empty builder
    /// Gantree: new() -> Self // 생성자
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with room for `capacity` operations
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            operations: Vec::with_capacity(capacity),
            name: None,
        }
    }

    /// Name the built sequence
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Add Hadamard
    /// Gantree: hadamard(self, t) -> Self // H 추가
    pub fn hadamard(self, target: SlotId) -> Self {
        self.push(Operation::Hadamard(target))
    }

    /// Add uncontrolled rotation
    pub fn rotate(self, target: SlotId, numerator: Numerator, exponent: Exponent) -> Self {
        self.push(Operation::Rotate {
            target,
            numerator,
            exponent,
        })
    }

    /// Add singly-controlled rotation
    /// Gantree: controlled_rotate(self, c, t, num, exp) -> Self // CR 추가
    pub fn controlled_rotate(
        self,
        control: SlotId,
        target: SlotId,
        numerator: Numerator,
        exponent: Exponent,
    ) -> Self {
        self.push(Operation::controlled_rotate(
            control, target, numerator, exponent,
        ))
    }

    /// Add SWAP
    /// Gantree: swap(self, a, b) -> Self // SWAP 추가
    pub fn swap(self, a: SlotId, b: SlotId) -> Self {
        self.push(Operation::Swap(a, b))
    }

    /// Add an arbitrary operation
    pub fn push(mut self, op: Operation) -> Self {
        self.operations.push(op);
        self
    }

    /// Add every operation of `seq`, in order
    pub fn append(mut self, seq: OperationSequence) -> Self {
        self.operations.extend(seq);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Number of operations collected so far
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if nothing has been added
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Build and return the sequence
    /// Gantree: build(self) -> OperationSequence // 빌드
    pub fn build(self) -> OperationSequence {
        let seq = OperationSequence::from_operations(self.operations);
        match self.name {
            Some(name) => seq.with_name(name),
            None => seq,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
