//! Derived QFT variants
//!
//! Gantree: L2_Synthesis → VariantDerivation
//!
//! Exact, little-endian, adjoint, and controlled forms. Each is a pure
//! transformation of the builder's output; none re-derives the rotation
//! ladder.

use crate::aqft;
use log::debug;
use qft_core::{Operation, OperationSequence, QftError, QftResult, Register, SlotId};

/// Approximate QFT over `register` in forward addressing
/// Gantree: approximate(reg, depth) -> Result // AQFT
pub fn approximate(register: &Register, depth: usize) -> QftResult<OperationSequence> {
    aqft::build(&register.forward(), depth)
}

/// Exact QFT: the builder at maximal depth
/// Gantree: exact(reg) -> Result // 정확한 QFT
pub fn exact(register: &Register) -> QftResult<OperationSequence> {
    aqft::build(&register.forward(), register.len())
}

/// Exact QFT with `register` read little-endian
/// Gantree: little_endian(reg) -> Result // 역순 주소
///
/// Every slot reference goes through the reversed view, so relabelling the
/// result by [`Register::mirror`] reproduces [`exact`] operation for
/// operation.
pub fn little_endian(register: &Register) -> QftResult<OperationSequence> {
    aqft::build(&register.reversed(), register.len())
}

/// Inverse sequence: reversed order, rotation numerators negated
/// Gantree: adjoint(seq) -> OperationSequence // 역회로
pub fn adjoint(seq: &OperationSequence) -> OperationSequence {
    debug!("Deriving adjoint of {} operations", seq.len());
    seq.rev_map(Operation::adjoint)
}

/// Every operation of `seq` conditioned additionally on `control`
/// Gantree: controlled(seq, c) -> Result // 제어 리프트
///
/// Fails if `control` is already referenced by `seq`.
pub fn controlled(seq: &OperationSequence, control: SlotId) -> QftResult<OperationSequence> {
    if seq.references(control) {
        return Err(QftError::ControlAlreadyReferenced(control));
    }
    debug!(
        "Lifting {} operations onto control slot {}",
        seq.len(),
        control
    );
    Ok(seq.map(|op| op.controlled_by(control)))
}

/// Lift `seq` onto each control in turn
pub fn controlled_by_all(
    seq: &OperationSequence,
    controls: &[SlotId],
) -> QftResult<OperationSequence> {
    controls
        .iter()
        .try_fold(seq.clone(), |acc, &c| controlled(&acc, c))
}

// ============================================================================
// Tests
// ============================================================================
