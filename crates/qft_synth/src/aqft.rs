//! Approximate QFT builder
//!
//! Gantree: L2_Synthesis → AqftBuilder
//!
//! Walks the register in logical order. For slot `i`, every earlier slot `j`
//! receives a rotation by `1 / 2^(i-j)` controlled on slot `i`, unless the gap
//! `i - j` reaches the pruning depth; slot `i` then gets its Hadamard. The
//! endian fix-up from [`crate::endian`] is appended before returning.
//!
//! Rotations on a target are all emitted after that target's Hadamard and
//! before the Hadamard of their control.

use crate::endian;
use log::{debug, trace};
use qft_core::{qft, Exponent, OperationSequence, QftError, QftResult, RegisterView, SequenceBuilder};

/// Check the register length and pruning depth
///
/// The two bounds are reported separately so a caller can tell which failed.
pub fn check_bounds(len: usize, depth: usize) -> QftResult<()> {
    if len == 0 {
        return Err(QftError::EmptyRegister);
    }
    if !(qft::MIN_DEPTH..=len).contains(&depth) {
        return Err(QftError::DepthOutOfRange { depth, len });
    }
    Ok(())
}

/// Whether the rotation for the pair `(i, j)`, `j < i`, survives pruning
#[inline]
pub fn keeps_rotation(i: usize, j: usize, depth: usize) -> bool {
    i - j < depth
}

/// Build the approximate QFT over `view`
/// Gantree: build(view, depth) -> Result<OperationSequence> // AQFT 생성
///
/// `depth == view.len()` gives the exact transform, `depth == 1` drops every
/// rotation.
pub fn build(view: &RegisterView<'_>, depth: usize) -> QftResult<OperationSequence> {
    let n = view.len();
    check_bounds(n, depth)?;

    debug!(
        "Building AQFT over {} slots ({} addressing), depth {}",
        n,
        view.addressing(),
        depth
    );

    let capacity = qft::pruned_rotation_count(n, depth) + n + qft::swap_count(n);
    let mut builder = SequenceBuilder::with_capacity(capacity);
    let mut pruned = 0usize;

    for i in 0..n {
        let control = view.slot(i)?;
        for j in 0..i {
            if keeps_rotation(i, j, depth) {
                builder = builder.controlled_rotate(
                    control,
                    view.slot(j)?,
                    qft::ROTATION_NUMERATOR,
                    (i - j) as Exponent,
                );
            } else {
                trace!("Pruned rotation {} -> {} (gap {})", i, j, i - j);
                pruned += 1;
            }
        }
        builder = builder.hadamard(control);
    }

    debug!(
        "Pruned {} of {} rotations",
        pruned,
        qft::exact_rotation_count(n)
    );

    let swaps = endian::normalize(view)?;
    Ok(builder.append(swaps).build())
}

// ============================================================================
// Tests
// ============================================================================
