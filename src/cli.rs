use crate::processor::UnknownPolicy;
use crate::writer::Format;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// ALU program files, read in order (stdin if none; `-` also means stdin)
    pub inputs: Vec<PathBuf>,
    /// Write the generated code here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Output syntax
    #[arg(long, value_enum, default_value_t = Format::C)]
    pub format: Format,
    /// How to treat mnemonics other than inp/add/mul/div/mod/eql
    #[arg(long, value_enum, default_value_t = UnknownPolicy::Skip)]
    pub unknown: UnknownPolicy,
    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
