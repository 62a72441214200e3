use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::debug;

use crate::error::{GateError, Result};

/// The fixed set of logic gates.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum GateType {
    And,
    Or,
    Not,
    Xor,
    Nand,
    Nor,
    Xnor,
}

impl GateType {
    /// All gate types, in their stable presentation order.
    pub const ALL: [GateType; 7] = [
        GateType::And,
        GateType::Or,
        GateType::Not,
        GateType::Xor,
        GateType::Nand,
        GateType::Nor,
        GateType::Xnor,
    ];
}

// Getters
impl GateType {
    /// Upper-case tag of the gate, e.g. `"NAND"`.
    pub const fn tag(self) -> &'static str {
        match self {
            GateType::And => "AND",
            GateType::Or => "OR",
            GateType::Not => "NOT",
            GateType::Xor => "XOR",
            GateType::Nand => "NAND",
            GateType::Nor => "NOR",
            GateType::Xnor => "XNOR",
        }
    }

    /// Number of inputs the gate consumes.
    pub const fn arity(self) -> usize {
        match self {
            GateType::Not => 1,
            _ => 2,
        }
    }

    /// Whether the gate is the negation of another gate (NAND, NOR, XNOR, NOT).
    pub const fn is_inverting(self) -> bool {
        matches!(self, GateType::Not | GateType::Nand | GateType::Nor | GateType::Xnor)
    }
}

// Logic
impl GateType {
    /// Apply the gate's boolean function to `inputs` without checking the arity.
    ///
    /// NOT reads only `inputs[0]` here; use [`GateType::eval`] at the boundary.
    ///
    /// # Panics
    ///
    /// Panics if the gate is NOT and `inputs` is empty.
    pub fn apply(self, inputs: &[bool]) -> bool {
        match self {
            GateType::And => and(inputs),
            GateType::Or => or(inputs),
            GateType::Not => !inputs[0],
            GateType::Xor => xor(inputs),
            GateType::Nand => !and(inputs),
            GateType::Nor => !or(inputs),
            GateType::Xnor => !xor(inputs),
        }
    }

    /// Evaluate the gate on `inputs`, whose length must equal the gate's arity.
    pub fn eval(self, inputs: &[bool]) -> Result<bool> {
        self.check_arity(inputs.len())?;
        let output = self.apply(inputs);
        debug!("eval({}, {:?}) -> {}", self, inputs, output);
        Ok(output)
    }

    /// Check that `len` inputs fit this gate.
    pub fn check_arity(self, len: usize) -> Result<()> {
        if len != self.arity() {
            return Err(GateError::ArityMismatch {
                gate: self,
                expected: self.arity(),
                actual: len,
            });
        }
        Ok(())
    }
}

fn and(inputs: &[bool]) -> bool {
    inputs.iter().all(|&b| b)
}

fn or(inputs: &[bool]) -> bool {
    inputs.iter().any(|&b| b)
}

fn xor(inputs: &[bool]) -> bool {
    inputs.iter().fold(false, |acc, &b| acc != b)
}

impl Display for GateType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for GateType {
    type Err = GateError;

    /// Parse a gate tag, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        GateType::ALL
            .into_iter()
            .find(|g| g.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| GateError::UnknownGateType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    const T: bool = true;
    const F: bool = false;

    #[test]
    fn test_and() {
        assert!(GateType::And.eval(&[T, T]).unwrap());
        assert!(!GateType::And.eval(&[T, F]).unwrap());
        assert!(!GateType::And.eval(&[F, T]).unwrap());
        assert!(!GateType::And.eval(&[F, F]).unwrap());
    }

    #[test]
    fn test_or() {
        assert!(!GateType::Or.eval(&[F, F]).unwrap());
        assert!(GateType::Or.eval(&[T, F]).unwrap());
        assert!(GateType::Or.eval(&[F, T]).unwrap());
        assert!(GateType::Or.eval(&[T, T]).unwrap());
    }

    #[test]
    fn test_not() {
        assert!(!GateType::Not.eval(&[T]).unwrap());
        assert!(GateType::Not.eval(&[F]).unwrap());
    }

    #[test]
    fn test_xor() {
        assert!(!GateType::Xor.eval(&[T, T]).unwrap());
        assert!(GateType::Xor.eval(&[T, F]).unwrap());
        assert!(GateType::Xor.eval(&[F, T]).unwrap());
        assert!(!GateType::Xor.eval(&[F, F]).unwrap());
    }

    #[test]
    fn test_xor_is_parity() {
        assert!(xor(&[T, T, T]));
        assert!(!xor(&[T, F, T, F]));
        assert!(!xor(&[]));
    }

    #[test]
    fn test_inverted_gates() {
        for a in [F, T] {
            for b in [F, T] {
                let i = [a, b];
                assert_eq!(GateType::Nand.apply(&i), !GateType::And.apply(&i));
                assert_eq!(GateType::Nor.apply(&i), !GateType::Or.apply(&i));
                assert_eq!(GateType::Xnor.apply(&i), !GateType::Xor.apply(&i));
            }
        }
    }

    #[test]
    fn test_arity_mismatch() {
        assert_eq!(
            GateType::And.eval(&[T]),
            Err(GateError::ArityMismatch {
                gate: GateType::And,
                expected: 2,
                actual: 1,
            })
        );
        assert!(GateType::Or.eval(&[T, T, T]).is_err());
        assert!(GateType::Xor.eval(&[]).is_err());
    }

    #[test]
    fn test_not_is_strict() {
        assert_eq!(
            GateType::Not.eval(&[F, T]),
            Err(GateError::ArityMismatch {
                gate: GateType::Not,
                expected: 1,
                actual: 2,
            })
        );
        assert!(GateType::Not.eval(&[]).is_err());
    }

    #[test]
    fn test_arity() {
        for g in GateType::ALL {
            let expected = if g == GateType::Not { 1 } else { 2 };
            assert_eq!(g.arity(), expected);
        }
    }

    #[test]
    fn test_is_inverting() {
        let inverting: Vec<_> = GateType::ALL.into_iter().filter(|g| g.is_inverting()).collect();
        assert_eq!(inverting, vec![GateType::Not, GateType::Nand, GateType::Nor, GateType::Xnor]);
    }

    #[test]
    fn test_display_parse_roundtrip() {
        for g in GateType::ALL {
            assert_eq!(g.to_string().parse::<GateType>(), Ok(g));
        }
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("xnor".parse::<GateType>(), Ok(GateType::Xnor));
        assert_eq!("Nand".parse::<GateType>(), Ok(GateType::Nand));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "IMPLY".parse::<GateType>(),
            Err(GateError::UnknownGateType("IMPLY".to_string()))
        );
        assert!("".parse::<GateType>().is_err());
        assert!("AND Gate".parse::<GateType>().is_err());
    }
}
