//! Interactive evaluation session.
//!
//! A [`Session`] tracks the currently selected gate and its input vector.
//! Selecting a gate always discards the previous inputs: the new vector is
//! all-false with the new gate's arity. The output is evaluated afresh on
//! every call to [`Session::output`].
//!
//! ```
//! use gates_rs::gate::GateType;
//! use gates_rs::session::Session;
//!
//! let mut session = Session::default();
//! assert_eq!(session.gate(), GateType::And);
//! assert!(!session.output());
//!
//! session.toggle(0).unwrap();
//! session.toggle(1).unwrap();
//! assert!(session.output());
//!
//! session.select(GateType::Xor);
//! assert_eq!(session.inputs(), &[false, false]);
//! ```

use std::fmt::{Display, Formatter};

use log::debug;

use crate::catalog::{self, GateDefinition};
use crate::error::{GateError, Result};
use crate::gate::GateType;
use crate::table::TruthTable;
use crate::utils::{bit_char, bits_to_index, input_label};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Session {
    gate: GateType,
    inputs: Vec<bool>,
}

impl Session {
    /// Start a session on `gate` with all inputs false.
    pub fn new(gate: GateType) -> Self {
        Self {
            gate,
            inputs: vec![false; gate.arity()],
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(GateType::And)
    }
}

// Getters
impl Session {
    pub fn gate(&self) -> GateType {
        self.gate
    }

    pub fn inputs(&self) -> &[bool] {
        &self.inputs
    }

    pub fn definition(&self) -> &'static GateDefinition {
        catalog::definition(self.gate)
    }

    pub fn truth_table(&self) -> &'static TruthTable {
        catalog::truth_table(self.gate)
    }

    /// Current output of the selected gate.
    pub fn output(&self) -> bool {
        // The vector always has the gate's arity, so `apply` cannot see a mismatch.
        self.gate.apply(&self.inputs)
    }

    /// Index of the truth table row matching the current inputs.
    pub fn active_row(&self) -> usize {
        bits_to_index(&self.inputs)
    }
}

// Transitions
impl Session {
    /// Select a gate and reset the inputs to all-false.
    pub fn select(&mut self, gate: GateType) {
        debug!("select({} -> {})", self.gate, gate);
        self.gate = gate;
        self.inputs = vec![false; gate.arity()];
    }

    /// Flip the input at `index`.
    ///
    /// Fails with [`GateError::ArityMismatch`] if `index` is not below the arity;
    /// the session is left unchanged in that case.
    pub fn toggle(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.inputs[index] = !self.inputs[index];
        debug!("toggle({}) -> {:?}", index, self.inputs);
        Ok(())
    }

    /// Set the input at `index` to `value`.
    pub fn set_input(&mut self, index: usize, value: bool) -> Result<()> {
        self.check_index(index)?;
        self.inputs[index] = value;
        debug!("set_input({}, {}) -> {:?}", index, value, self.inputs);
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.inputs.len() {
            return Err(GateError::ArityMismatch {
                gate: self.gate,
                expected: self.inputs.len(),
                actual: index.saturating_add(1),
            });
        }
        Ok(())
    }
}

/// One-line summary, e.g. `AND(A=1, B=0) = 0`.
impl Display for Session {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.gate)?;
        for (j, &b) in self.inputs.iter().enumerate() {
            if j > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", input_label(j), bit_char(b))?;
        }
        write!(f, ") = {}", bit_char(self.output()))
    }
}
