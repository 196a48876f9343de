//! Constants for QFT synthesis
//!
//! Gantree: L0_Foundation → Constants
//!
//! Fixed parameters of the QFT construction and the OpenQASM export.

// ============================================================================
// QFT Constants
// Gantree: qft // QFT 상수
// ============================================================================

pub mod qft {
    //! Parameters of the rotation ladder

    /// Numerator of every rotation emitted by the builder
    /// Gantree: ROTATION_NUMERATOR: i64 = 1
    pub const ROTATION_NUMERATOR: i64 = 1;

    /// Smallest pruning depth accepted by the builder
    pub const MIN_DEPTH: usize = 1;

    /// Number of rotations in an exact QFT over `n` slots
    #[inline]
    pub const fn exact_rotation_count(n: usize) -> usize {
        n * n.saturating_sub(1) / 2
    }

    /// Number of rotations kept for pruning depth `depth` over `n` slots
    ///
    /// Pairs with gap `g` number `n - g`, and gaps `1..depth` survive.
    pub fn pruned_rotation_count(n: usize, depth: usize) -> usize {
        (1..depth.min(n)).map(|gap| n - gap).sum()
    }

    /// Number of swaps in the endian fix-up over `n` slots
    #[inline]
    pub const fn swap_count(n: usize) -> usize {
        n / 2
    }
}

// ============================================================================
// QASM Constants
// Gantree: qasm // QASM 출력
// ============================================================================

pub mod qasm {
    //! OpenQASM 3 export settings

    /// Version header line
    pub const HEADER: &str = "OPENQASM 3.0;";

    /// Standard gate library include
    pub const INCLUDE: &str = "include \"stdgates.inc\";";

    /// Name of the exported qubit register
    pub const REGISTER: &str = "q";
}

// ============================================================================
// Tests
// ============================================================================
