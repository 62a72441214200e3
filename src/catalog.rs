//! The gate catalog: one [`GateDefinition`] per [`GateType`].
//!
//! The catalog is built once, on first access, and is read-only afterwards.
//! Truth tables are generated during construction and cached in the
//! definitions, so [`truth_table`] never recomputes anything.
//!
//! # Examples
//!
//! ```
//! use gates_rs::catalog::{evaluate, get_definition, truth_table};
//! use gates_rs::gate::GateType;
//!
//! let def = get_definition("XOR").unwrap();
//! assert_eq!(def.arity, 2);
//!
//! assert!(evaluate(GateType::Xor, &[true, false]).unwrap());
//! assert!(evaluate(GateType::And, &[true]).is_err());
//!
//! assert_eq!(truth_table(GateType::Not).len(), 2);
//! ```

use std::collections::BTreeMap;

use log::debug;
use once_cell::sync::Lazy;

use crate::error::Result;
use crate::gate::GateType;
use crate::table::TruthTable;

/// Static metadata and the precomputed truth table of a gate.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GateDefinition {
    pub gate_type: GateType,
    /// Display name, e.g. `"NAND Gate (NOT AND)"`.
    pub name: &'static str,
    pub description: &'static str,
    pub arity: usize,
    pub truth_table: TruthTable,
    /// SVG path data of the gate symbol. Opaque to this crate.
    pub svg_path: &'static str,
}

impl GateDefinition {
    fn new(gate_type: GateType) -> Self {
        let (name, description, svg_path) = metadata(gate_type);
        let arity = gate_type.arity();
        let truth_table = TruthTable::generate(arity, |inputs| gate_type.apply(inputs));
        debug!(
            "define({}): arity = {}, outputs = {:#06b}",
            gate_type,
            arity,
            truth_table.output_bits()
        );
        Self {
            gate_type,
            name,
            description,
            arity,
            truth_table,
            svg_path,
        }
    }

    /// Evaluate the gate, checking the number of inputs.
    pub fn eval(&self, inputs: &[bool]) -> Result<bool> {
        self.gate_type.eval(inputs)
    }
}

fn metadata(gate_type: GateType) -> (&'static str, &'static str, &'static str) {
    match gate_type {
        GateType::And => (
            "AND Gate",
            "Outputs true (1) only when all of its inputs are true (1).",
            "M 30 20 L 60 20 A 40 40 0 0 1 60 80 L 30 80 Z",
        ),
        GateType::Or => (
            "OR Gate",
            "Outputs true (1) if at least one of its inputs is true (1).",
            "M 20 20 Q 50 50, 20 80 L 35 80 Q 80 50, 35 20 Z",
        ),
        GateType::Not => (
            "NOT Gate (Inverter)",
            "Outputs the inverse of its single input. A true (1) input becomes false (0), and vice versa.",
            "M 25 25 L 25 75 L 75 50 Z M 75 50 h 10 m 8 0 a 8 8 0 1 1 0 -0.01",
        ),
        GateType::Xor => (
            "XOR Gate (Exclusive OR)",
            "Outputs true (1) only when its inputs are different from each other.",
            "M 25 20 Q 55 50, 25 80 L 40 80 Q 85 50, 40 20 Z M 15 20 Q 45 50, 15 80",
        ),
        GateType::Nand => (
            "NAND Gate (NOT AND)",
            "Outputs false (0) only when all of its inputs are true (1). It is the inverse of an AND gate.",
            "M 30 20 L 60 20 A 40 40 0 0 1 60 80 L 30 80 Z M 100 50 a 8 8 0 1 1 -16 0 a 8 8 0 1 1 16 0",
        ),
        GateType::Nor => (
            "NOR Gate (NOT OR)",
            "Outputs true (1) only when all of its inputs are false (0). It is the inverse of an OR gate.",
            "M 20 20 Q 50 50, 20 80 L 35 80 Q 80 50, 35 20 Z M 95 50 a 8 8 0 1 1 -16 0 a 8 8 0 1 1 16 0",
        ),
        GateType::Xnor => (
            "XNOR Gate (Exclusive NOR)",
            "Outputs true (1) only when its inputs are the same. It is the inverse of an XOR gate.",
            "M 25 20 Q 55 50, 25 80 L 40 80 Q 85 50, 40 20 Z M 15 20 Q 45 50, 15 80 M 100 50 a 8 8 0 1 1 -16 0 a 8 8 0 1 1 16 0",
        ),
    }
}

/// Mapping from every [`GateType`] to its definition.
#[derive(Debug, Clone)]
pub struct GateCatalog {
    definitions: BTreeMap<GateType, GateDefinition>,
}

static CATALOG: Lazy<GateCatalog> = Lazy::new(GateCatalog::new);

impl GateCatalog {
    /// Build all definitions, generating one truth table per gate.
    pub fn new() -> Self {
        debug!("building gate catalog");
        let definitions = GateType::ALL
            .into_iter()
            .map(|g| (g, GateDefinition::new(g)))
            .collect();
        Self { definitions }
    }

    /// The process-wide catalog, built on first use.
    pub fn global() -> &'static GateCatalog {
        &CATALOG
    }

    /// Look up a gate's definition. Total over [`GateType`].
    pub fn lookup(&self, gate_type: GateType) -> &GateDefinition {
        // Every variant is inserted in `new`.
        &self.definitions[&gate_type]
    }

    /// Definitions in the stable [`GateType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &GateDefinition> {
        self.definitions.values()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for GateCatalog {
    fn default() -> Self {
        GateCatalog::new()
    }
}

/// All gate types in presentation order: AND, OR, NOT, XOR, NAND, NOR, XNOR.
pub fn list_gate_types() -> &'static [GateType] {
    &GateType::ALL
}

/// Look up a definition by gate tag (ASCII case-insensitive).
///
/// Fails with [`GateError::UnknownGateType`][crate::error::GateError::UnknownGateType]
/// for names outside the enumeration.
pub fn get_definition(name: &str) -> Result<&'static GateDefinition> {
    let gate_type: GateType = name.parse()?;
    Ok(definition(gate_type))
}

/// Look up the definition of a gate.
pub fn definition(gate_type: GateType) -> &'static GateDefinition {
    GateCatalog::global().lookup(gate_type)
}

/// Evaluate a gate on `inputs`.
///
/// Fails with [`GateError::ArityMismatch`][crate::error::GateError::ArityMismatch]
/// if `inputs.len()` differs from the gate's arity.
pub fn evaluate(gate_type: GateType, inputs: &[bool]) -> Result<bool> {
    definition(gate_type).eval(inputs)
}

/// The precomputed truth table of a gate.
pub fn truth_table(gate_type: GateType) -> &'static TruthTable {
    &definition(gate_type).truth_table
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::error::GateError;

    #[test]
    fn test_catalog_is_total() {
        let catalog = GateCatalog::new();
        assert_eq!(catalog.len(), GateType::ALL.len());
        for g in GateType::ALL {
            assert_eq!(catalog.lookup(g).gate_type, g);
        }
    }

    #[test]
    fn test_iter_order() {
        let order: Vec<_> = GateCatalog::global().iter().map(|d| d.gate_type).collect();
        assert_eq!(order, GateType::ALL.to_vec());
    }

    #[test]
    fn test_list_gate_types() {
        assert_eq!(
            list_gate_types(),
            &[
                GateType::And,
                GateType::Or,
                GateType::Not,
                GateType::Xor,
                GateType::Nand,
                GateType::Nor,
                GateType::Xnor,
            ]
        );
    }

    #[test]
    fn test_truth_table_sizes() {
        for &g in list_gate_types() {
            let def = definition(g);
            assert_eq!(def.truth_table.len(), 1 << def.arity);
            assert_eq!(truth_table(g).len(), 1 << g.arity());
        }
    }

    #[test]
    fn test_truth_table_is_cached() {
        let a = truth_table(GateType::Nor) as *const TruthTable;
        let b = truth_table(GateType::Nor) as *const TruthTable;
        assert_eq!(a, b);
    }

    #[test]
    fn test_outputs() {
        let bits = |g| truth_table(g).output_bits();
        assert_eq!(bits(GateType::And), 0b1000);
        assert_eq!(bits(GateType::Or), 0b1110);
        assert_eq!(bits(GateType::Not), 0b01);
        assert_eq!(bits(GateType::Xor), 0b0110);
        assert_eq!(bits(GateType::Nand), 0b0111);
        assert_eq!(bits(GateType::Nor), 0b0001);
        assert_eq!(bits(GateType::Xnor), 0b1001);
    }

    #[test]
    fn test_get_definition() {
        let def = get_definition("NAND").unwrap();
        assert_eq!(def.gate_type, GateType::Nand);
        assert_eq!(def.name, "NAND Gate (NOT AND)");
        assert_eq!(get_definition("not").unwrap().arity, 1);
    }

    #[test]
    fn test_get_definition_unknown() {
        assert_eq!(
            get_definition("BUFFER"),
            Err(GateError::UnknownGateType("BUFFER".to_string()))
        );
    }

    #[test]
    fn test_evaluate_arity_mismatch() {
        assert!(matches!(
            evaluate(GateType::And, &[true]),
            Err(GateError::ArityMismatch { expected: 2, actual: 1, .. })
        ));
    }

    #[test]
    fn test_metadata_present() {
        for def in GateCatalog::global().iter() {
            assert!(def.name.starts_with(def.gate_type.tag()));
            assert!(!def.description.is_empty());
            assert!(def.svg_path.starts_with('M'));
        }
    }
}
