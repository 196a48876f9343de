//! Dense state-vector interpreter used to check synthesized circuits
//!
//! Slot `k` of a `width`-slot state maps to bit `width - 1 - k` of the basis
//! index, so slot 0 is the most significant bit.

use num_complex::Complex64;
use qft_core::{Operation, OperationSequence, SlotId};
use std::f64::consts::FRAC_1_SQRT_2;

pub struct StateVector {
    width: usize,
    amps: Vec<Complex64>,
}

impl StateVector {
    /// Computational basis state `|index⟩`
    pub fn basis(width: usize, index: usize) -> Self {
        let mut amps = vec![Complex64::new(0.0, 0.0); 1 << width];
        amps[index] = Complex64::new(1.0, 0.0);
        Self { width, amps }
    }

    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amps
    }

    fn mask(&self, slot: SlotId) -> usize {
        1 << (self.width - 1 - slot.index())
    }

    pub fn run(&mut self, seq: &OperationSequence) {
        for op in seq {
            self.apply(op);
        }
    }

    pub fn apply(&mut self, op: &Operation) {
        let cmask = op
            .controls()
            .map_or(0, |cs| cs.iter().fold(0, |m, s| m | self.mask(s)));
        let active = |idx: usize| idx & cmask == cmask;

        match op {
            Operation::Rotate { target, .. } | Operation::ControlledRotate { target, .. } => {
                let tmask = self.mask(*target);
                let phase = Complex64::from_polar(1.0, op.angle().unwrap_or(0.0));
                for idx in 0..self.amps.len() {
                    if active(idx) && idx & tmask != 0 {
                        self.amps[idx] *= phase;
                    }
                }
            }
            Operation::Hadamard(target) | Operation::ControlledHadamard { target, .. } => {
                let tmask = self.mask(*target);
                for idx in 0..self.amps.len() {
                    if active(idx) && idx & tmask == 0 {
                        let a = self.amps[idx];
                        let b = self.amps[idx | tmask];
                        self.amps[idx] = (a + b) * FRAC_1_SQRT_2;
                        self.amps[idx | tmask] = (a - b) * FRAC_1_SQRT_2;
                    }
                }
            }
            Operation::Swap(a, b) | Operation::ControlledSwap { a, b, .. } => {
                let (ma, mb) = (self.mask(*a), self.mask(*b));
                for idx in 0..self.amps.len() {
                    if active(idx) && idx & ma != 0 && idx & mb == 0 {
                        self.amps.swap(idx, idx ^ ma ^ mb);
                    }
                }
            }
        }
    }
}
