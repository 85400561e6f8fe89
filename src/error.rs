//! Errors raised while turning instruction lines into statements.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    /// `add x` – a known mnemonic without enough operands.
    #[error("line {line}: `{mnemonic}` expects {expected} operand(s), found {found}")]
    MissingOperand {
        line: usize,
        mnemonic: String,
        expected: usize,
        found: usize,
    },

    /// Only raised under `UnknownPolicy::Reject`.
    #[error("line {line}: unknown mnemonic `{mnemonic}`")]
    UnknownMnemonic { line: usize, mnemonic: String },
}
