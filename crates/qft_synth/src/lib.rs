//! # QFT Synth
//!
//! Approximate Quantum Fourier Transform circuit synthesis.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qft_synth // L2+L3: Synthesis + Config (완료)
//!     L2_Synthesis // 회로 합성 (완료)
//!         AqftBuilder // 회전/하다마드 생성 (완료)
//!             check_bounds() - 길이/깊이 검사
//!             build() - AQFT 생성
//!         EndianNormalizer // 비트 반전 스왑 (완료)
//!             normalize() - ⌊n/2⌋ 스왑
//!         VariantDerivation // 파생 회로 (완료)
//!             exact(), approximate(), little_endian()
//!             adjoint() - 역회로
//!             controlled() - 제어 리프트
//!     L3_Config // 설정 (완료)
//!         QftConfig // depth, addressing, inverse, controls
//!             synthesize() - 설정 기반 합성
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qft_synth::prelude::*;
//!
//! let reg = Register::contiguous(3);
//!
//! // Exact QFT: 3 Hadamards, 3 controlled rotations, 1 swap
//! let qft = exact(&reg).unwrap();
//! assert_eq!(qft.count_hadamards(), 3);
//! assert_eq!(qft.count_controlled_rotations(), 3);
//! assert_eq!(qft.count_swaps(), 1);
//!
//! // Pruned to nearest neighbours only
//! let aqft = approximate(&reg, 2).unwrap();
//! assert_eq!(aqft.count_controlled_rotations(), 2);
//!
//! // Inverse and controlled forms
//! let iqft = adjoint(&qft);
//! let cqft = controlled(&qft, SlotId(3)).unwrap();
//! assert_eq!(iqft.len(), qft.len());
//! assert!(cqft.iter().all(|op| op.is_controlled()));
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use qft_synth::prelude::*;
//!
//! let config = QftConfig::approximate(2)
//!     .little_endian()
//!     .with_inverse(true);
//!
//! let seq = config.synthesize(&Register::contiguous(4)).unwrap();
//! assert_eq!(seq.name(), Some("iaqft2_le"));
//! println!("{}", seq.to_qasm());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// AQFT builder (Gantree: L2_Synthesis → AqftBuilder)
pub mod aqft;

/// Endian normalizer (Gantree: L2_Synthesis → EndianNormalizer)
pub mod endian;

/// Derived variants (Gantree: L2_Synthesis → VariantDerivation)
pub mod variants;

/// Synthesis configuration (Gantree: L3_Config → QftConfig)
pub mod config;

#[cfg(test)]
mod statevector;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::QftConfig;
pub use variants::{adjoint, approximate, controlled, controlled_by_all, exact, little_endian};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use qft_synth::prelude::*;
    //! ```

    pub use crate::aqft::build;
    pub use crate::config::QftConfig;
    pub use crate::endian::normalize;
    pub use crate::variants::{
        adjoint, approximate, controlled, controlled_by_all, exact, little_endian,
    };
    pub use qft_core::prelude::*;
}

// ============================================================================
// Integration Tests
// ============================================================================
