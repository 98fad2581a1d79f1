//! Regenerate `crates/charref/src/table.rs` from the WHATWG entity list.
//!
//! Usage: cargo run -p charref-tablegen [-- --check]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use charref_tablegen::{parse_entities_json, render_table};
use clap::Parser;

#[derive(Parser)]
#[command(name = "charref-tablegen")]
#[command(about = "Generate charref's named character reference table")]
struct Cli {
    /// WHATWG `entities.json`
    #[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/entities.json"))]
    input: PathBuf,

    /// Generated Rust table
    #[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/../charref/src/table.rs"))]
    output: PathBuf,

    /// Fail if the output is stale instead of rewriting it
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let json = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let entries = parse_entities_json(&json)
        .with_context(|| format!("invalid entity list {}", cli.input.display()))?;
    let legacy = entries.iter().filter(|entry| entry.is_legacy()).count();
    let table = render_table(&entries);

    if cli.check {
        let current = fs::read_to_string(&cli.output)
            .with_context(|| format!("failed to read {}", cli.output.display()))?;
        if current != table {
            bail!("{} is stale; rerun charref-tablegen", cli.output.display());
        }
        log::info!("{} is up to date", cli.output.display());
        return Ok(());
    }

    fs::write(&cli.output, table)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    log::info!(
        "wrote {} entities ({legacy} legacy) to {}",
        entries.len(),
        cli.output.display()
    );
    Ok(())
}
