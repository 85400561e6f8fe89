//! Render statements as the body of `bool alu(const int8_t digits[])`.
//!
//! Division and remainder use the C operators as-is, so they truncate
//! toward zero and take the dividend's sign.

use super::Render;
use crate::processor::ast::Stmt;
use std::io::{self, Write};

const INDENT: &str = "    ";

pub struct CWriter<W: Write> {
    out: W,
}

impl<W: Write> CWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Render for CWriter<W> {
    fn prologue(&mut self) -> io::Result<()> {
        writeln!(self.out, "bool alu(const int8_t digits[]) {{")?;
        writeln!(self.out, "{INDENT}long w = 0, x = 0, y = 0, z = 0;")
    }

    fn stmt(&mut self, stmt: &Stmt) -> io::Result<()> {
        match stmt {
            Stmt::Step { number } => {
                writeln!(self.out)?;
                writeln!(self.out, "{INDENT}// Step {number}")
            }
            Stmt::Load { dst, index } => {
                writeln!(self.out, "{INDENT}{dst} = digits[{index}];")
            }
            Stmt::Binary { dst, op, src } => {
                writeln!(self.out, "{INDENT}{dst} = {dst} {} {src};", op.symbol())
            }
            Stmt::Equal { dst, src } => {
                writeln!(self.out, "{INDENT}{dst} = {dst} == {src} ? 1 : 0;")
            }
        }
    }

    fn epilogue(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{INDENT}bool valid = z == 0;")?;
        writeln!(self.out, "{INDENT}return valid;")?;
        writeln!(self.out, "}}")?;
        self.out.flush()
    }
}
