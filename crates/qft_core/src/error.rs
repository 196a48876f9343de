//! Error types for QFT synthesis
//!
//! Gantree: L0_Foundation → Errors
//!
//! Every failure is raised before the first operation is emitted, so a caller
//! either receives a complete sequence or one of these errors.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use crate::types::SlotId;
use thiserror::Error;

/// Main error type for QFT synthesis
/// Gantree: QftError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QftError {
    // ========================================================================
    // Invalid Arguments
    // ========================================================================
    /// Register has no slots
    /// Gantree: EmptyRegister // 빈 레지스터
    #[error("Invalid argument: register must contain at least 1 slot")]
    EmptyRegister,

    /// Pruning depth outside [1, len]
    /// Gantree: DepthOutOfRange{{depth,len}} // 깊이 범위
    #[error("Invalid argument: depth {depth} out of range [1, {len}]")]
    DepthOutOfRange { depth: usize, len: usize },

    /// Extra control for a lift is already used by the sequence
    #[error("Invalid argument: control slot {0} is already referenced by the sequence")]
    ControlAlreadyReferenced(SlotId),

    /// Same slot listed twice in a register or control list
    #[error("Invalid argument: slot {0} appears more than once")]
    DuplicateSlot(SlotId),

    // ========================================================================
    // Addressing Errors
    // ========================================================================
    /// Logical index outside [0, len)
    /// Gantree: IndexOutOfRange{{index,len}} // 인덱스 범위
    #[error("Index {index} out of range for register of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Unknown addressing name
    #[error("Invalid addressing '{0}': must be forward/big or reversed/little")]
    InvalidAddressing(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration rejected by validation
    #[error("QFT configuration error: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),

    /// File I/O error
    #[error("File error: {0}")]
    FileError(String),
}

/// Result type alias for QFT operations
/// Gantree: QftResult<T> // type alias
pub type QftResult<T> = Result<T, QftError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for QftError {
    fn from(err: serde_json::Error) -> Self {
        QftError::JsonError(err.to_string())
    }
}

impl From<std::io::Error> for QftError {
    fn from(err: std::io::Error) -> Self {
        QftError::FileError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl QftError {
    /// Check if the caller passed an invalid argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            QftError::EmptyRegister
                | QftError::DepthOutOfRange { .. }
                | QftError::ControlAlreadyReferenced(_)
                | QftError::DuplicateSlot(_)
        )
    }

    /// Check if error came from the addressing layer
    pub fn is_addressing_error(&self) -> bool {
        matches!(
            self,
            QftError::IndexOutOfRange { .. } | QftError::InvalidAddressing(_)
        )
    }

    /// Check if error is an I/O or serialization error
    pub fn is_io_error(&self) -> bool {
        matches!(self, QftError::JsonError(_) | QftError::FileError(_))
    }
}

// ============================================================================
// Tests
// ============================================================================
