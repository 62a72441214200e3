use clap::Parser;

use gates_rs::dot::to_dot;
use gates_rs::utils::{bit_char, input_label};
use gates_rs::{list_gate_types, GateType, Session};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Gate to show (AND, OR, NOT, XOR, NAND, NOR, XNOR). Shows all gates if omitted.
    #[arg(long, value_name = "GATE")]
    gate: Option<GateType>,

    /// Input values as a bit string, first input first (e.g. "10"). Needs `--gate`.
    #[arg(long, value_name = "BITS", requires = "gate")]
    inputs: Option<String>,

    /// Print the diagram in DOT format instead of text.
    #[arg(long)]
    dot: bool,

    /// Log level.
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: simplelog::LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    log::debug!("args = {:?}", args);

    let gates = match args.gate {
        Some(gate) => vec![gate],
        None => list_gate_types().to_vec(),
    };

    for gate in gates {
        let mut session = Session::new(gate);
        if let Some(bits) = &args.inputs {
            apply_bits(&mut session, bits)?;
        }

        if args.dot {
            print!("{}", to_dot(&session)?);
        } else {
            show(&session);
        }
    }

    Ok(())
}

/// Set the session inputs from a string of '0' and '1'.
fn apply_bits(session: &mut Session, bits: &str) -> color_eyre::Result<()> {
    let arity = session.gate().arity();
    if bits.len() != arity {
        color_eyre::eyre::bail!(
            "{} takes {} input(s), but {:?} has {} bit(s)",
            session.gate(),
            arity,
            bits,
            bits.len()
        );
    }
    let values = bits
        .chars()
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            _ => Err(color_eyre::eyre::eyre!("invalid bit {:?} in {:?}", c, bits)),
        })
        .collect::<color_eyre::Result<Vec<bool>>>()?;
    for (j, value) in values.into_iter().enumerate() {
        session.set_input(j, value)?;
    }
    Ok(())
}

fn show(session: &Session) {
    let def = session.definition();
    println!("{}", def.name);
    println!("{}", def.description);
    println!();

    for (j, &b) in session.inputs().iter().enumerate() {
        println!("Input {}: {}", input_label(j), bit_char(b));
    }
    println!("Output:  {}", bit_char(session.output()));
    println!();

    let table = session.truth_table();
    println!("Output is 1 in {} of {} rows", table.count_ones(), table.len());

    let active = session.active_row();
    for (i, line) in table.to_string().lines().enumerate() {
        // Two header lines precede the rows.
        let marker = if i >= 2 && i - 2 == active { "  <" } else { "" };
        println!("{}{}", line, marker);
    }
    println!();
}
