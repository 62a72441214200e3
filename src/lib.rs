//! # gates-rs: Logic Gates in Rust
//!
//! **`gates-rs`** is a small, strongly-typed model of the basic boolean logic gates,
//! built for teaching: pick a gate, toggle its inputs, and observe the output and the full truth table.
//!
//! ## What is a Logic Gate?
//!
//! A logic gate is a named boolean function with a fixed number of inputs (its *arity*).
//! This crate covers the seven classic gates: AND, OR, NOT, XOR, NAND, NOR and XNOR.
//! NOT takes a single input, all others take two.
//!
//! ## Key Features
//!
//! - **Closed Gate Set**: [`GateType`][crate::gate::GateType] is a plain enum, and evaluation is a `match`.
//! - **Precomputed Truth Tables**: The [`GateCatalog`][crate::catalog::GateCatalog] is built once per process
//!   and caches each gate's [`TruthTable`][crate::table::TruthTable].
//! - **Checked Boundary**: Wrong input counts and unknown gate names are reported as
//!   [`GateError`][crate::error::GateError], never silently padded or truncated.
//! - **Sessions**: [`Session`][crate::session::Session] holds a selected gate and its live inputs.
//! - **Visualization**: Sessions can be rendered as Graphviz graphs with [`dot`].
//!
//! ## Basic Usage
//!
//! ```rust
//! use gates_rs::{evaluate, truth_table, GateType, Session};
//!
//! // 1. Evaluate a gate directly
//! assert!(evaluate(GateType::Nand, &[true, false]).unwrap());
//!
//! // 2. Inspect its truth table (first input is the most-significant bit)
//! let table = truth_table(GateType::Nand);
//! assert_eq!(table.len(), 4);
//! assert_eq!(table[3].inputs, vec![true, true]);
//! assert!(!table[3].output);
//!
//! // 3. Drive a session
//! let mut session = Session::new(GateType::Xor);
//! session.toggle(0).unwrap();
//! assert!(session.output());
//! ```
//!
//! ## Core Components
//!
//! - **[`gate`]**: The gate types and their boolean functions.
//! - **[`table`]**: Truth table generation and rendering.
//! - **[`catalog`]**: Gate metadata and the process-wide catalog.
//! - **[`session`]**: Interactive evaluation state.
//! - **[`dot`]**: Utilities for visualizing a session using Graphviz.

pub mod catalog;
pub mod dot;
pub mod error;
pub mod gate;
pub mod session;
pub mod table;
pub mod utils;

pub use catalog::{definition, evaluate, get_definition, list_gate_types, truth_table, GateCatalog, GateDefinition};
pub use error::{GateError, Result};
pub use gate::GateType;
pub use session::Session;
pub use table::{TruthTable, TruthTableRow};
