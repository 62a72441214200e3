//! Truth tables for gates.
//!
//! A truth table for an `n`-input function lists all `2^n` input combinations
//! together with the function's output.
//!
//! # Row Ordering
//!
//! Rows are enumerated in binary counting order with the **first** input as the
//! most-significant bit. For `n = 2`:
//!
//! - Row 0 (binary 00): A=0, B=0
//! - Row 1 (binary 01): A=0, B=1
//! - Row 2 (binary 10): A=1, B=0
//! - Row 3 (binary 11): A=1, B=1
//!
//! This is the order in which tables are displayed.

use std::fmt::{Display, Formatter};
use std::ops::Index;

use crate::utils::{bit_char, index_to_bits, input_label};

/// Largest supported number of inputs.
pub const MAX_ARITY: usize = 16;

/// One row of a truth table: an input combination and the resulting output.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TruthTableRow {
    pub inputs: Vec<bool>,
    pub output: bool,
}

/// An exhaustive truth table of an `arity`-input boolean function.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct TruthTable {
    arity: usize,
    rows: Vec<TruthTableRow>,
}

impl TruthTable {
    /// Enumerate all `2^arity` input combinations and apply `f` to each.
    ///
    /// # Panics
    ///
    /// Panics if `arity` is not in the range `1..=16`.
    ///
    /// # Example
    ///
    /// ```
    /// use gates_rs::table::TruthTable;
    ///
    /// let t = TruthTable::generate(2, |x| x[0] && !x[1]);
    /// assert_eq!(t.len(), 4);
    /// assert_eq!(t[2].inputs, vec![true, false]);
    /// assert!(t[2].output);
    /// ```
    pub fn generate(arity: usize, f: impl Fn(&[bool]) -> bool) -> Self {
        assert!(
            (1..=MAX_ARITY).contains(&arity),
            "Arity should be in the range 1..={}",
            MAX_ARITY
        );

        let rows = (0..1usize << arity)
            .map(|i| {
                let inputs = index_to_bits(i, arity);
                let output = f(&inputs);
                TruthTableRow { inputs, output }
            })
            .collect();

        Self { arity, rows }
    }
}

// Getters
impl TruthTable {
    /// Number of inputs.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Number of rows (`2^arity`).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false: a table has at least two rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&TruthTableRow> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TruthTableRow> {
        self.rows.iter()
    }

    /// Outputs packed into a mask: bit `i` is the output of row `i`.
    ///
    /// AND over two inputs gives `0b1000`, OR gives `0b1110`.
    ///
    /// # Panics
    ///
    /// Panics if the table has more than 64 rows.
    pub fn output_bits(&self) -> u64 {
        assert!(self.rows.len() <= 64, "Too many rows to pack into u64");
        self.rows
            .iter()
            .enumerate()
            .fold(0, |acc, (i, row)| acc | ((row.output as u64) << i))
    }

    /// Number of rows whose output is true.
    pub fn count_ones(&self) -> usize {
        self.rows.iter().filter(|row| row.output).count()
    }
}

impl Index<usize> for TruthTable {
    type Output = TruthTableRow;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl<'a> IntoIterator for &'a TruthTable {
    type Item = &'a TruthTableRow;
    type IntoIter = std::slice::Iter<'a, TruthTableRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Renders the table as text:
///
/// ```text
/// A | B | Out
/// --+---+----
/// 0 | 0 | 0
/// 0 | 1 | 1
/// ```
impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for j in 0..self.arity {
            write!(f, "{} | ", input_label(j))?;
        }
        writeln!(f, "Out")?;

        for _ in 0..self.arity {
            write!(f, "--+-")?;
        }
        writeln!(f, "---")?;

        for row in &self.rows {
            for &b in &row.inputs {
                write!(f, "{} | ", bit_char(b))?;
            }
            writeln!(f, "{}", bit_char(row.output))?;
        }
        Ok(())
    }
}
