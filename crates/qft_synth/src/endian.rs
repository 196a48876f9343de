//! Endian normalization
//!
//! Gantree: L2_Synthesis → EndianNormalizer
//!
//! The rotation/Hadamard ladder leaves the output in bit-reversed order. The
//! fix-up reverses the register with `⌊n/2⌋` swaps; an odd middle slot is
//! left in place.

use qft_core::{qft, OperationSequence, QftResult, RegisterView, SequenceBuilder};

/// Logical index pairs swapped for a register of length `n`
pub fn swap_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..qft::swap_count(n)).map(move |i| (i, n - 1 - i))
}

/// Swap network reversing `view`
/// Gantree: normalize(view) -> Result<OperationSequence> // 비트 반전
pub fn normalize(view: &RegisterView<'_>) -> QftResult<OperationSequence> {
    let n = view.len();
    let mut builder = SequenceBuilder::with_capacity(qft::swap_count(n));
    for (i, j) in swap_pairs(n) {
        builder = builder.swap(view.slot(i)?, view.slot(j)?);
    }
    Ok(builder.build())
}
