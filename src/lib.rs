pub mod cli;
pub mod error;
pub mod processor;
pub mod reader;
pub mod writer;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use std::fs::File;
use std::io::{self, BufWriter};

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    init_logging(args.verbose);

    // 1. ── Read ───────────────────────────────────────────────────────
    let sources = reader::sources_from_args(&args.inputs);
    let lines = reader::LineReader::new(sources);

    // 2. ── Translate + write ─────────────────────────────────────────
    let stats = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Creating {}", path.display()))?;
            writer::emit(lines, args.format, args.unknown, BufWriter::new(file))
        }
        None => writer::emit(
            lines,
            args.format,
            args.unknown,
            BufWriter::new(io::stdout().lock()),
        ),
    }
    .with_context(|| "Emitting ALU function")?;

    log::info!(
        "{} instructions, {} statements, {} inputs, {} skipped",
        stats.instructions,
        stats.statements,
        stats.inputs,
        stats.skipped
    );
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
