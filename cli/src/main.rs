//! Reference sequence driver
//!
//! Thin command-line collaborator around the core generators: pick an
//! algorithm, emit N successive outputs in decimal, one per line. The
//! output of a default run is the reference vector other implementations
//! diff against, so nothing but the values may be written to stdout.

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use xorshift_oracle_core::{XorShift128, XorShift128Plus};

/// Command-line interface for the reference sequence driver
#[derive(Parser, Debug)]
#[command(name = "xorshift-oracle")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Emit reference PRNG sequences, one value per line")]
struct Cli {
    /// Generator to drive
    #[arg(value_enum)]
    algorithm: Algorithm,

    /// Number of values to emit
    #[arg(short = 'n', long, default_value_t = 250)]
    count: usize,
}

/// Available generators
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Algorithm {
    /// 32-bit xorshift128
    #[value(name = "xorshift128")]
    XorShift128,
    /// 64-bit xorshift128+
    #[value(name = "xorshift128plus")]
    XorShift128Plus,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.algorithm {
        Algorithm::XorShift128 => {
            let mut rng = XorShift128::new();
            for _ in 0..cli.count {
                writeln!(out, "{}", rng.next())?;
            }
        }
        Algorithm::XorShift128Plus => {
            let mut rng = XorShift128Plus::new();
            for _ in 0..cli.count {
                writeln!(out, "{}", rng.next())?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
