//! Configuration for the bits-decoder CLI.
//!
//! Handles parsing command-line arguments. The tool works with minimal
//! arguments: a transmission can come from a positional hex string, a file,
//! or stdin, and by default both results are printed.

use std::path::PathBuf;

/// Which result(s) to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// Version sum only
    One,
    /// Evaluated value only
    Two,
    /// Both results
    Both,
}

/// Complete configuration for a decode run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input file path (None = positional hex or stdin)
    pub input_file: Option<PathBuf>,

    /// Transmission given directly on the command line
    pub hex: Option<String>,

    /// Which result(s) to print
    pub part: Part,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// The first non-flag argument is taken as the hex transmission itself.
    /// `--in` and a positional transmission are mutually exclusive.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut input_file: Option<PathBuf> = None;
        let mut hex: Option<String> = None;
        let mut part = Part::Both;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--part" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--part requires 1, 2, or both".to_string());
                    }
                    part = match args[i].as_str() {
                        "1" => Part::One,
                        "2" => Part::Two,
                        "both" => Part::Both,
                        other => return Err(format!("invalid part: {other}")),
                    };
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                arg if arg.starts_with('-') => {
                    return Err(format!("unknown argument: {arg}"));
                }
                arg => {
                    if hex.is_some() {
                        return Err("only one transmission may be given".to_string());
                    }
                    hex = Some(arg.to_string());
                }
            }
            i += 1;
        }

        if input_file.is_some() && hex.is_some() {
            return Err("--in and a positional transmission are mutually exclusive".to_string());
        }

        Ok(Config {
            input_file,
            hex,
            part,
        })
    }
}

fn print_help() {
    println!("bits-decoder: decode and evaluate a hex-encoded packet transmission");
    println!();
    println!("USAGE:");
    println!("    bits-decoder [OPTIONS] [HEX]");
    println!();
    println!("ARGS:");
    println!("    HEX                 Transmission as hexadecimal digits");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>         Read the transmission from a file");
    println!("    --part <1|2|both>   Print the version sum (1), the value (2),");
    println!("                        or both (default: both)");
    println!("    --help, -h          Print this help");
    println!();
    println!("With no HEX and no --in, the transmission is read from stdin.");
    println!();
    println!("EXAMPLES:");
    println!("    bits-decoder C200B40A82");
    println!("    bits-decoder --in transmission.txt --part 2");
    println!("    echo D2FE28 | bits-decoder --part 1");
    println!();
}
