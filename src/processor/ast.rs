//! Instruction and statement model shared by the lexer, the translator and
//! the writers.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mnemonic {
    /// `inp a` – read the next digit into `a`.
    Inp,
    /// `add a b`
    Add,
    /// `mul a b`
    Mul,
    /// `div a b` – truncates toward zero.
    Div,
    /// `mod a b`
    Mod,
    /// `eql a b` – `a = 1` if equal, else `0`.
    Eql,
    /// Anything else; carried so the translator can decide what to do.
    Unknown(String),
}

impl Mnemonic {
    pub fn parse(token: &str) -> Self {
        match token {
            "inp" => Mnemonic::Inp,
            "add" => Mnemonic::Add,
            "mul" => Mnemonic::Mul,
            "div" => Mnemonic::Div,
            "mod" => Mnemonic::Mod,
            "eql" => Mnemonic::Eql,
            other => Mnemonic::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Mnemonic::Inp => "inp",
            Mnemonic::Add => "add",
            Mnemonic::Mul => "mul",
            Mnemonic::Div => "div",
            Mnemonic::Mod => "mod",
            Mnemonic::Eql => "eql",
            Mnemonic::Unknown(s) => s.as_str(),
        }
    }

    /// Operands required; `None` for unknown mnemonics.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Mnemonic::Inp => Some(1),
            Mnemonic::Unknown(_) => None,
            _ => Some(2),
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tokenised source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub mnemonic: Mnemonic,
    /// Kept verbatim: register names and integer literals look the same.
    pub operands: Vec<String>,
    pub line: usize,
}

impl Instruction {
    /// Destination register. Callers check `Mnemonic::arity` first.
    pub fn dst(&self) -> &str {
        &self.operands[0]
    }

    pub fn src(&self) -> &str {
        &self.operands[1]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BinOp {
    Add,
    Mul,
    Div,
    Mod,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
        }
    }
}

/// Target-independent statement. Writers decide the concrete syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stmt {
    /// Marker before each input read, 1-based.
    Step { number: usize },
    /// `dst = digits[index]`
    Load { dst: String, index: usize },
    /// `dst = dst <op> src`
    Binary { dst: String, op: BinOp, src: String },
    /// `dst = dst == src ? 1 : 0`
    Equal { dst: String, src: String },
}
