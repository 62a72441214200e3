//! Error types for gate lookup and evaluation.

use thiserror::Error;

use crate::gate::GateType;

/// Result type alias for gate operations.
pub type Result<T> = std::result::Result<T, GateError>;

/// Errors that can occur when looking up or evaluating a gate.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum GateError {
    /// Input vector (or input index) does not fit the gate's arity.
    #[error("arity mismatch for {gate}: expected {expected} inputs, got {actual}")]
    ArityMismatch {
        gate: GateType,
        expected: usize,
        actual: usize,
    },

    /// Gate name outside the fixed enumeration.
    #[error("unknown gate type: {0:?}")]
    UnknownGateType(String),
}
