//! # QFT Core
//!
//! Slots, registers, operations, and operation sequences for Quantum Fourier
//! Transform circuit synthesis.
//!
//! ## Gantree Architecture
//!
//! ```text
//! qft_core // L0+L1: Foundation + Circuit (완료)
//!     L0_Foundation // 기반 타입/상수/에러 (완료)
//!         CoreTypes // SlotId, ControlSet (완료)
//!         Constants // QFT/QASM 상수 (완료)
//!         Errors // 에러 타입 (완료)
//!     L1_Register // 주소 지정 (완료)
//!         Register // 슬롯 목록 (완료)
//!         RegisterView // Forward/Reversed 뷰 (완료)
//!     L1_Circuit // 연산 구조 (완료)
//!         Operation // 연산 enum (완료)
//!         OperationSequence // 연산 순서열 (완료)
//!         SequenceBuilder // 빌더 패턴 (완료)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use qft_core::prelude::*;
//!
//! let reg = Register::contiguous(2);
//! let view = reg.forward();
//!
//! let seq = SequenceBuilder::new()
//!     .hadamard(view.slot(0).unwrap())
//!     .controlled_rotate(view.slot(1).unwrap(), view.slot(0).unwrap(), 1, 1)
//!     .hadamard(view.slot(1).unwrap())
//!     .swap(view.slot(0).unwrap(), view.slot(1).unwrap())
//!     .build();
//!
//! assert_eq!(seq.count_hadamards(), 2);
//! println!("{}", seq.to_qasm());
//! ```
//!
//! ## Addressing
//!
//! ```rust
//! use qft_core::prelude::*;
//!
//! let reg = Register::contiguous(4);
//! assert_eq!(reg.forward().slot(0).unwrap(), SlotId(0));
//! assert_eq!(reg.reversed().slot(0).unwrap(), SlotId(3));
//! assert!(reg.forward().slot(4).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core types (Gantree: L0_Foundation → CoreTypes)
pub mod types;

/// Constants (Gantree: L0_Foundation → Constants)
pub mod constants;

/// Error types (Gantree: L0_Foundation → Errors)
pub mod error;

/// Registers and addressing views (Gantree: L1_Register)
pub mod register;

/// Elementary operations (Gantree: L1_Circuit → Operation)
pub mod operation;

/// Operation sequences (Gantree: L1_Circuit → OperationSequence)
pub mod sequence;

/// Sequence builder (Gantree: L1_Circuit → SequenceBuilder)
pub mod builder;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::SequenceBuilder;
pub use constants::{qasm, qft};
pub use error::{QftError, QftResult};
pub use operation::Operation;
pub use register::{Addressing, Register, RegisterView};
pub use sequence::OperationSequence;
pub use types::{dyadic_angle, Angle, ControlSet, Exponent, Numerator, SlotId};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use qft_core::prelude::*;
    //! ```

    pub use crate::builder::SequenceBuilder;
    pub use crate::constants::{qasm, qft};
    pub use crate::error::{QftError, QftResult};
    pub use crate::operation::Operation;
    pub use crate::register::{Addressing, Register, RegisterView};
    pub use crate::sequence::OperationSequence;
    pub use crate::types::{Angle, ControlSet, Exponent, Numerator, SlotId};
}

// ============================================================================
// Version Information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Integration Tests
// ============================================================================
