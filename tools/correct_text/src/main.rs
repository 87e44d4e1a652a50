//! Restore Romanian diacritics from the command line
//!
//! Usage:
//!   cargo run -p correct_text -- --dict data/dict.json "Romania este o tara frumoasa"
//!   cargo run -p correct_text -- --dict data/dict.json --explain "tara."
//!   echo "Tata si mama sunt in casa" | cargo run -p correct_text -- --config diacritice.toml
//!   cargo run -p correct_text -- --demo
//!
//! Without `--dict` or a config `dictionary_path`, the built-in demo
//! dictionary is used.

use anyhow::{Context, Result};
use clap::Parser;
use diacritice_core::{Config, Dictionary, Engine};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEMO_SENTENCES: [&str; 8] = [
    "Romania este o tara frumoasa",
    "Copilul merge la scoala",
    "Tata si mama sunt in casa",
    "Invatatura este importanta",
    "Bucuresti este capitala Romaniei",
    "Copilul merge la scoala cu cartile in ghiozdan",
    "Romania este o tara frumoasa cu oameni buni",
    "Invatatura este foarte importanta pentru viitor",
];

#[derive(Parser, Debug)]
#[command(name = "correct_text")]
#[command(about = "Restore Romanian diacritics in text typed without them")]
struct Args {
    /// Dictionary resource (JSON object or .bin/.bincode artifact)
    #[arg(short, long)]
    dict: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Minimum similarity for fuzzy matches (overrides the config)
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Print a per-word JSON report instead of the corrected text
    #[arg(long)]
    explain: bool,

    /// Run the built-in demo sentences
    #[arg(long)]
    demo: bool,

    /// Text to correct; read from stdin line by line when omitted
    text: Vec<String>,
}

fn build_engine(args: &Args) -> Result<Engine> {
    let mut config = match &args.config {
        Some(path) => Config::load_toml(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(dict) = &args.dict {
        config.dictionary_path = Some(dict.clone());
    }
    if let Some(threshold) = args.threshold {
        config.similarity_threshold = threshold;
    }

    if config.dictionary_path.is_some() {
        return Engine::from_config(config).context("Failed to load dictionary");
    }
    tracing::info!("no dictionary configured, using the built-in demo dictionary");
    Ok(Engine::new(Arc::new(Dictionary::load_demo()), config))
}

fn emit(engine: &Engine, text: &str, explain: bool) -> Result<()> {
    if explain {
        println!("{}", engine.explain(text).to_json_pretty()?);
    } else {
        println!("{}", engine.correct(text));
    }
    Ok(())
}

fn run_demo(engine: &Engine) {
    for (i, sentence) in DEMO_SENTENCES.iter().enumerate() {
        let report = engine.explain(sentence);
        println!("{}. {}", i + 1, report.original_text);
        println!("   {}", report.corrected_text);
        let changes = report.changed_words();
        if changes.is_empty() {
            println!("   (no changes)");
        } else {
            let listed: Vec<String> = changes
                .iter()
                .map(|(from, to)| format!("'{}' → '{}'", from, to))
                .collect();
            println!("   changes: {}", listed.join(", "));
        }
        println!();
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let engine = build_engine(&args)?;

    if args.demo {
        run_demo(&engine);
        return Ok(());
    }

    if !args.text.is_empty() {
        return emit(&engine, &args.text.join(" "), args.explain);
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        emit(&engine, &line, args.explain)?;
    }
    Ok(())
}
