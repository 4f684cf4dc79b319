//! Hide files in fp16 bit patterns, or tour the four schemes.

use clap::{Parser, Subcommand};
use notanumber::{decode, encode, Scheme, Selector};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nan")]
#[command(about = "Store bytes in fp16 zeros, infinities, NaNs and subnormals")]
#[command(after_help = "SCHEMES:\n  \
    zero       sign of ±0.0, 1 bit per value\n  \
    inf        sign of ±inf, 1 bit per value\n  \
    nan        quiet NaN payload, 9 bits per value (default)\n  \
    subnormal  subnormal mantissa, 10 bits per value\n\n\
Streams are raw little-endian fp16 values with no header.")]
struct Args {
    /// Log codec decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every scheme on a sample message
    Demo {
        /// Print the comparison table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Encode a file (or stdin) into fp16 values
    Encode {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Scheme to hide the bytes with
        #[arg(short, long, default_value_t = Scheme::Nan)]
        scheme: Scheme,
    },
    /// Decode fp16 values back into bytes
    Decode {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Scheme the stream was encoded with, or `auto`
        #[arg(short, long, default_value_t = Selector::Auto)]
        scheme: Selector,
    },
}

/// One row of the demo comparison table
#[derive(Serialize)]
struct MenuRow {
    scheme: Scheme,
    bits_per_value: u32,
    encoded_bytes: usize,
    growth: f64,
    roundtrip: bool,
}

const MESSAGE: &[u8] = b"Pure imagination";

fn read_input(path: Option<&PathBuf>) -> Result<Vec<u8>, String> {
    match path {
        Some(path) => {
            fs::read(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| format!("Failed to read stdin: {e}"))?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&PathBuf>, bytes: &[u8]) -> Result<(), String> {
    match path {
        Some(path) => {
            fs::write(path, bytes).map_err(|e| format!("Failed to write {}: {e}", path.display()))
        }
        None => io::stdout()
            .lock()
            .write_all(bytes)
            .map_err(|e| format!("Failed to write stdout: {e}")),
    }
}

fn menu() -> Result<Vec<MenuRow>, String> {
    Scheme::ALL
        .into_iter()
        .map(|scheme| {
            let encoded = encode(MESSAGE, scheme).map_err(|e| e.to_string())?;
            let roundtrip = decode(&encoded, scheme).is_ok_and(|d| d == MESSAGE);
            Ok(MenuRow {
                scheme,
                bits_per_value: scheme.bits_per_unit(),
                encoded_bytes: encoded.len(),
                growth: encoded.len() as f64 / MESSAGE.len() as f64,
                roundtrip,
            })
        })
        .collect()
}

fn demo(json: bool) -> Result<(), String> {
    let rows = menu()?;

    if json {
        let out = serde_json::to_string_pretty(&rows).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!("Welcome, welcome.\n");
    println!("Today's special: {:?}", String::from_utf8_lossy(MESSAGE));
    println!("{} bytes of possibility\n", MESSAGE.len());

    println!("The menu:");
    println!("{:<10} {:<6} {:<6} {:<8}", "Flavor", "Bits", "Size", "Growth");
    println!("{}", "-".repeat(30));
    for row in &rows {
        println!(
            "{:<10} {:<6} {:<6} {:>5.1}x",
            row.scheme.name(),
            row.bits_per_value,
            row.encoded_bytes,
            row.growth
        );
        if !row.roundtrip {
            println!("ERROR: Round trip failed!");
        }
    }

    println!("\n\nThe automatic door finder:");
    for scheme in Scheme::ALL {
        let sample = &scheme.name().as_bytes()[..3];
        let encoded = encode(sample, scheme).map_err(|e| e.to_string())?;
        let decoded = decode(&encoded, Selector::Auto).map_err(|e| e.to_string())?;
        println!("  {scheme}: '{}'", String::from_utf8_lossy(&decoded));
    }

    println!("\n\nA word of caution about the smallest ones:");
    let fragile = b"CAREFUL";
    let encoded = encode(fragile, Scheme::Subnormal).map_err(|e| e.to_string())?;
    println!("If you're gentle:");
    let decoded = decode(&encoded, Scheme::Subnormal).map_err(|e| e.to_string())?;
    println!("  Success: {:?}", String::from_utf8_lossy(&decoded));
    println!("\nIf you're not:");
    println!("  (Subnormals may vanish during arithmetic)");

    Ok(())
}

fn run(args: Args) -> Result<(), String> {
    match args.command {
        Command::Demo { json } => demo(json),
        Command::Encode { input, output, scheme } => {
            let data = read_input(input.as_ref())?;
            let encoded = encode(&data, scheme).map_err(|e| e.to_string())?;
            tracing::info!(scheme = %scheme, input = data.len(), output = encoded.len(), "encoded");
            write_output(output.as_ref(), &encoded)
        }
        Command::Decode { input, output, scheme } => {
            let data = read_input(input.as_ref())?;
            let decoded = decode(&data, scheme).map_err(|e| e.to_string())?;
            tracing::info!(
                selector = %scheme,
                input = data.len(),
                output = decoded.len(),
                "decoded"
            );
            write_output(output.as_ref(), &decoded)
        }
    }
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
