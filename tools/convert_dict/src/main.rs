//! Convert a JSON dictionary into the bincode artifact read by `Dictionary::load`
//!
//! Usage:
//!   cargo run -p convert_dict -- --input data/dict.json --output data/dict.bin
//!   cargo run -p convert_dict -- --input data/dict.json --output data/dict.bin --min-key-len 2

use anyhow::{Context, Result};
use clap::Parser;
use diacritice_core::Dictionary;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "convert_dict")]
#[command(about = "Convert a JSON diacritics dictionary to a bincode artifact")]
struct Args {
    /// JSON object mapping plain word forms to diacritic forms
    #[arg(short, long)]
    input: PathBuf,

    /// Output artifact (use a .bin or .bincode extension)
    #[arg(short, long, default_value = "dict.bin")]
    output: PathBuf,

    /// Drop keys shorter than this many characters
    #[arg(long, default_value_t = 1)]
    min_key_len: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }
    let source = Dictionary::load(&args.input)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    let kept = Dictionary::from_pairs(
        source
            .entries()
            .filter(|(key, _)| key.chars().count() >= args.min_key_len),
    );
    let dropped = source.len() - kept.len();

    kept.save_bincode(&args.output)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", args.output.display(), e))?;

    println!("Read {} entries from {}", source.len(), args.input.display());
    if dropped > 0 {
        println!("Dropped {} keys shorter than {} characters", dropped, args.min_key_len);
    }
    println!("Wrote {} entries to {}", kept.len(), args.output.display());
    Ok(())
}
