//! QFT synthesis configuration
//!
//! Gantree: L3_Config → QftConfig
//!
//! Selects which variant to synthesize: pruning depth, addressing, inversion,
//! and extra controls. Serializable so a circuit request can be stored as JSON.

use crate::{aqft, variants};
use log::debug;
use qft_core::{Addressing, OperationSequence, QftError, QftResult, Register, SlotId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// QFT synthesis configuration
/// Gantree: QftConfig // 설정
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QftConfig {
    /// Pruning depth (None = exact)
    /// Gantree: depth: Option<usize> // 근사 깊이
    pub depth: Option<usize>,

    /// Addressing convention of the register
    /// Gantree: addressing: Addressing // forward/reversed
    pub addressing: Addressing,

    /// Emit the inverse transform
    /// Gantree: inverse: bool // 역변환
    pub inverse: bool,

    /// Extra control slots, lifted in order
    /// Gantree: controls: Vec<SlotId> // 추가 제어
    pub controls: Vec<SlotId>,

    /// Name given to the synthesized sequence
    pub name: Option<String>,
}

impl QftConfig {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Exact forward QFT
    /// Gantree: exact() -> Self // 기본값
    pub fn exact() -> Self {
        Self::default()
    }

    /// Approximate forward QFT with pruning depth `depth`
    pub fn approximate(depth: usize) -> Self {
        Self::default().with_depth(depth)
    }

    /// Exact inverse QFT
    pub fn inverse() -> Self {
        Self::default().with_inverse(true)
    }

    /// Load from JSON
    pub fn from_json(json: &str) -> QftResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> QftResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Set pruning depth
    /// Gantree: with_depth(self, a) -> Self // 깊이 설정
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Use the exact transform
    pub fn with_exact(mut self) -> Self {
        self.depth = None;
        self
    }

    /// Set addressing
    pub fn with_addressing(mut self, addressing: Addressing) -> Self {
        self.addressing = addressing;
        self
    }

    /// Read the register little-endian
    pub fn little_endian(self) -> Self {
        self.with_addressing(Addressing::Reversed)
    }

    /// Enable/disable inversion
    pub fn with_inverse(mut self, inverse: bool) -> Self {
        self.inverse = inverse;
        self
    }

    /// Add one extra control slot
    pub fn with_control(mut self, control: SlotId) -> Self {
        self.controls.push(control);
        self
    }

    /// Replace the extra control slots
    pub fn with_controls(mut self, controls: Vec<SlotId>) -> Self {
        self.controls = controls;
        self
    }

    /// Set sequence name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    // ========================================================================
    // Derived Values
    // ========================================================================

    /// Pruning depth used for a register of length `len`
    pub fn effective_depth(&self, len: usize) -> usize {
        self.depth.unwrap_or(len)
    }

    /// Check if this selects the exact transform for length `len`
    pub fn is_exact_for(&self, len: usize) -> bool {
        self.effective_depth(len) == len
    }

    /// Name used when none is set
    pub fn default_name(&self) -> String {
        let mut name = String::new();
        if !self.controls.is_empty() {
            name.push_str(&format!("c{}-", self.controls.len()));
        }
        if self.inverse {
            name.push('i');
        }
        match self.depth {
            Some(d) => name.push_str(&format!("aqft{}", d)),
            None => name.push_str("qft"),
        }
        if self.addressing == Addressing::Reversed {
            name.push_str("_le");
        }
        name
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate register-independent settings
    /// Gantree: validate(&self) -> Result // 검증
    pub fn validate(&self) -> QftResult<()> {
        if self.depth == Some(0) {
            return Err(QftError::InvalidConfig("depth must be >= 1".to_string()));
        }

        let mut seen = HashSet::with_capacity(self.controls.len());
        for &control in &self.controls {
            if !seen.insert(control) {
                return Err(QftError::DuplicateSlot(control));
            }
        }

        Ok(())
    }

    /// Validate against the register that will be transformed
    pub fn validate_for(&self, register: &Register) -> QftResult<()> {
        self.validate()?;
        aqft::check_bounds(register.len(), self.effective_depth(register.len()))?;

        if let Some(&control) = self.controls.iter().find(|&&c| register.contains(c)) {
            return Err(QftError::ControlAlreadyReferenced(control));
        }

        Ok(())
    }

    // ========================================================================
    // Synthesis
    // ========================================================================

    /// Build the configured variant over `register`
    /// Gantree: synthesize(&self, reg) -> Result<OperationSequence> // 합성
    ///
    /// Order: build under the chosen addressing, invert, then lift onto each
    /// control.
    pub fn synthesize(&self, register: &Register) -> QftResult<OperationSequence> {
        self.validate_for(register)?;
        debug!("Synthesizing {} over {}", self, register);

        let view = register.view(self.addressing);
        let mut seq = aqft::build(&view, self.effective_depth(register.len()))?;

        if self.inverse {
            seq = variants::adjoint(&seq);
        }
        seq = variants::controlled_by_all(&seq, &self.controls)?;

        let name = self.name.clone().unwrap_or_else(|| self.default_name());
        Ok(seq.with_name(name))
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> QftResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for QftConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = match self.depth {
            Some(d) => d.to_string(),
            None => "exact".to_string(),
        };
        write!(
            f,
            "QftConfig(depth={}, addressing={}, inverse={}, controls={})",
            depth,
            self.addressing,
            self.inverse,
            self.controls.len()
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
