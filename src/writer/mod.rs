//! Streaming emitter: pull a line, translate it, render it, repeat.

pub mod c;
pub mod json;

use crate::processor::{Translator, UnknownPolicy, lexer};
use crate::processor::ast::Stmt;
use crate::reader::SourceLine;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// `bool alu(const int8_t digits[])` in C/C++.
    #[default]
    C,
    /// One JSON statement per line, for inspecting the translation.
    Json,
}

/// A target syntax. `emit` calls `prologue` once, `stmt` per statement,
/// then `epilogue` once.
pub trait Render {
    fn prologue(&mut self) -> io::Result<()>;
    fn stmt(&mut self, stmt: &Stmt) -> io::Result<()>;
    /// Must flush the underlying writer.
    fn epilogue(&mut self) -> io::Result<()>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmitStats {
    /// Non-blank lines that tokenised to an instruction.
    pub instructions: usize,
    pub statements: usize,
    /// `inp` instructions, i.e. the length of `digits` the code expects.
    pub inputs: usize,
    /// Unknown mnemonics dropped under `UnknownPolicy::Skip`.
    pub skipped: usize,
}

pub fn emit<I, W>(lines: I, format: Format, policy: UnknownPolicy, out: W) -> Result<EmitStats>
where
    I: IntoIterator<Item = Result<SourceLine>>,
    W: Write,
{
    match format {
        Format::C => drive(lines, policy, &mut c::CWriter::new(out)),
        Format::Json => drive(lines, policy, &mut json::JsonWriter::new(out)),
    }
}

fn drive<I, R>(lines: I, policy: UnknownPolicy, render: &mut R) -> Result<EmitStats>
where
    I: IntoIterator<Item = Result<SourceLine>>,
    R: Render,
{
    let mut translator = Translator::new(policy);
    let mut stats = EmitStats::default();

    render.prologue().context("Writing prologue")?;

    for line in lines {
        let line = line?;
        let Some(instr) =
            lexer::lex_line(&line).with_context(|| format!("Translating {}", line.origin))?
        else {
            continue;
        };
        stats.instructions += 1;

        let stmts = translator
            .translate(&instr)
            .with_context(|| format!("Translating {}", line.origin))?;
        if stmts.is_empty() {
            stats.skipped += 1;
        }
        for stmt in &stmts {
            render.stmt(stmt).context("Writing statement")?;
        }
        stats.statements += stmts.len();
    }

    render.epilogue().context("Writing epilogue")?;

    stats.inputs = translator.inputs_consumed();
    Ok(stats)
}

/// Translate an in-memory program to C text.
pub fn emit_to_string(program: &[&str], policy: UnknownPolicy) -> Result<String> {
    let lines = program
        .iter()
        .enumerate()
        .map(|(i, text)| Ok::<_, anyhow::Error>(SourceLine::new("<memory>", i + 1, text)));

    let mut buf = Vec::<u8>::new();
    emit(lines, Format::C, policy, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}
