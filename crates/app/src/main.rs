//! bits-decoder: CLI front-end for the transmission decoder.
//!
//! Acquires the hexadecimal transmission (positional argument, file, or
//! stdin), strips surrounding whitespace, hands it to the core decoder, and
//! prints the requested results. On any failure the error is reported on
//! stderr and the process exits non-zero; no partial result is printed.

mod config;

use std::io::Read;

use bits_decoder_core::{decode, evaluate, Packet};
use config::{Config, Part};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run with --help for usage");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let hex = read_transmission(config)?;
    let hex = hex.trim();

    let packet = decode(hex)?;
    print!("{}", render(config.part, &packet)?);

    Ok(())
}

/// Produce the requested result lines for a decoded packet.
///
/// Every fallible step runs before anything is rendered, so a tree that
/// decodes but fails to evaluate yields no output at all, not a partial
/// version sum.
fn render(part: Part, packet: &Packet) -> Result<String, Box<dyn std::error::Error>> {
    let output = match part {
        Part::One => format!("{}\n", packet.version_sum()),
        Part::Two => format!("{}\n", evaluate(packet)?),
        Part::Both => {
            let value = evaluate(packet)?;
            format!("Version sum: {}\nValue: {}\n", packet.version_sum(), value)
        }
    };
    Ok(output)
}

/// Fetch the raw transmission text from the configured source.
fn read_transmission(config: &Config) -> Result<String, std::io::Error> {
    if let Some(hex) = &config.hex {
        return Ok(hex.clone());
    }

    if let Some(path) = &config.input_file {
        return std::fs::read_to_string(path);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
