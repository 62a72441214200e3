//! Session to DOT (Graphviz) conversion.
//!
//! This module renders the current state of a [`Session`] as a small DOT graph:
//! one node per input, the gate itself and the output, connected by wires.
//! It can be visualized with Graphviz tools like `dot` or online viewers.
//!
//! # DOT Format
//!
//! The generated DOT output follows these conventions:
//! - **Input nodes** (`A`, `B`) are on the left (source rank), labelled with their value
//! - **The gate node** is in the middle, labelled with the gate tag
//! - **The output node** is on the right (sink rank)
//! - **Wires** carrying `1` use the active colour and a bold pen, wires carrying `0`
//!   use the inactive colour
//! - Inverting gates (NOT, NAND, NOR, XNOR) draw the output wire with an `odot`
//!   tail, the usual inversion bubble
//!
//! # Examples
//!
//! ```
//! use gates_rs::dot::to_dot;
//! use gates_rs::session::Session;
//!
//! let session = Session::default();
//! let dot = to_dot(&session).unwrap();
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! assert!(dot.starts_with("digraph"));
//! ```

use std::fmt::Write as _;

use crate::session::Session;
use crate::utils::{bit_char, input_label};

/// Configuration options for DOT output generation.
///
/// ```
/// use gates_rs::dot::{to_dot_with_config, DotConfig};
/// use gates_rs::session::Session;
///
/// let config = DotConfig {
///     active_color: "green",
///     ..DotConfig::default()
/// };
/// let dot = to_dot_with_config(&Session::default(), &config).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Layout direction (default: "LR")
    pub rankdir: &'static str,
    /// Shape for input nodes (default: "square")
    pub input_shape: &'static str,
    /// Shape for the gate node (default: "box")
    pub gate_shape: &'static str,
    /// Shape for the output node (default: "circle")
    pub output_shape: &'static str,
    /// Colour of wires carrying 1 (default: "#2dd4bf")
    pub active_color: &'static str,
    /// Colour of wires carrying 0 (default: "#9ca3af")
    pub inactive_color: &'static str,
    /// Whether to add the gate's display name as the graph label (default: true)
    pub show_name: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            rankdir: "LR",
            input_shape: "square",
            gate_shape: "box",
            output_shape: "circle",
            active_color: "#2dd4bf",
            inactive_color: "#9ca3af",
            show_name: true,
        }
    }
}

impl DotConfig {
    fn wire_style(&self, active: bool) -> String {
        if active {
            format!("color=\"{}\", penwidth=3", self.active_color)
        } else {
            format!("color=\"{}\", penwidth=1", self.inactive_color)
        }
    }
}

/// Converts a session to DOT (Graphviz) format with the default configuration.
pub fn to_dot(session: &Session) -> Result<String, std::fmt::Error> {
    to_dot_with_config(session, &DotConfig::default())
}

/// Converts a session to DOT format with custom configuration.
///
/// Node identifiers are stable: inputs are `in0`, `in1`, the gate is `gate`
/// and the output is `out`.
pub fn to_dot_with_config(session: &Session, config: &DotConfig) -> Result<String, std::fmt::Error> {
    let gate = session.gate();
    let output = session.output();

    let mut dot = String::new();
    writeln!(dot, "digraph {{")?;
    writeln!(dot, "rankdir={};", config.rankdir)?;
    if config.show_name {
        writeln!(dot, "label=\"{}\";", session.definition().name)?;
    }
    writeln!(dot, "edge [arrowhead=none];")?;

    // Inputs
    writeln!(dot, "{{ rank=source")?;
    for (j, &b) in session.inputs().iter().enumerate() {
        writeln!(
            dot,
            "in{} [shape={}, label=\"{}={}\"];",
            j,
            config.input_shape,
            input_label(j),
            bit_char(b)
        )?;
    }
    writeln!(dot, "}}")?;

    writeln!(dot, "gate [shape={}, label=\"{}\"];", config.gate_shape, gate)?;

    writeln!(dot, "{{ rank=sink")?;
    writeln!(
        dot,
        "out [shape={}, label=\"{}\", {}];",
        config.output_shape,
        bit_char(output),
        config.wire_style(output)
    )?;
    writeln!(dot, "}}")?;

    // Wires
    for (j, &b) in session.inputs().iter().enumerate() {
        writeln!(dot, "in{} -> gate [{}];", j, config.wire_style(b))?;
    }
    if gate.is_inverting() {
        writeln!(dot, "gate -> out [{}, dir=both, arrowtail=odot];", config.wire_style(output))?;
    } else {
        writeln!(dot, "gate -> out [{}];", config.wire_style(output))?;
    }

    writeln!(dot, "}}")?;
    Ok(dot)
}
