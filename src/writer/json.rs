//! NDJSON dump of the statement stream.

use super::Render;
use crate::processor::ast::Stmt;
use std::io::{self, Write};

pub struct JsonWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Render for JsonWriter<W> {
    fn prologue(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn stmt(&mut self, stmt: &Stmt) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, stmt)?;
        writeln!(self.out)
    }

    fn epilogue(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
