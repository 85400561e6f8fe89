//! Dispatch from instructions to statements.
//!
//! The translator owns the input counter for a single run: every `inp`
//! reads `digits[counter]` and bumps it by one.

use super::ast::{BinOp, Instruction, Mnemonic, Stmt};
use crate::error::TranslateError;
use clap::ValueEnum;

/// What to do with a mnemonic outside the supported six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum UnknownPolicy {
    /// Drop the instruction silently.
    #[default]
    Skip,
    /// Stop with an error naming the line.
    Reject,
}

#[derive(Debug)]
pub struct Translator {
    next_input: usize,
    unknown: UnknownPolicy,
}

impl Translator {
    pub fn new(unknown: UnknownPolicy) -> Self {
        Self {
            next_input: 0,
            unknown,
        }
    }

    /// Number of `inp` instructions translated so far.
    pub fn inputs_consumed(&self) -> usize {
        self.next_input
    }

    pub fn translate(&mut self, instr: &Instruction) -> Result<Vec<Stmt>, TranslateError> {
        if let Some(expected) = instr.mnemonic.arity() {
            if instr.operands.len() < expected {
                return Err(TranslateError::MissingOperand {
                    line: instr.line,
                    mnemonic: instr.mnemonic.to_string(),
                    expected,
                    found: instr.operands.len(),
                });
            }
        }

        let stmts = match &instr.mnemonic {
            Mnemonic::Inp => {
                let index = self.next_input;
                self.next_input += 1;
                vec![
                    Stmt::Step { number: index + 1 },
                    Stmt::Load {
                        dst: instr.dst().to_string(),
                        index,
                    },
                ]
            }
            Mnemonic::Add => vec![binary(instr, BinOp::Add)],
            Mnemonic::Mul => vec![binary(instr, BinOp::Mul)],
            Mnemonic::Div => vec![binary(instr, BinOp::Div)],
            Mnemonic::Mod => vec![binary(instr, BinOp::Mod)],
            Mnemonic::Eql => vec![Stmt::Equal {
                dst: instr.dst().to_string(),
                src: instr.src().to_string(),
            }],
            Mnemonic::Unknown(name) => match self.unknown {
                UnknownPolicy::Skip => {
                    log::debug!("line {}: skipping unknown mnemonic `{name}`", instr.line);
                    Vec::new()
                }
                UnknownPolicy::Reject => {
                    return Err(TranslateError::UnknownMnemonic {
                        line: instr.line,
                        mnemonic: name.clone(),
                    });
                }
            },
        };
        Ok(stmts)
    }
}

fn binary(instr: &Instruction, op: BinOp) -> Stmt {
    Stmt::Binary {
        dst: instr.dst().to_string(),
        op,
        src: instr.src().to_string(),
    }
}
