//! Line tokenizer for ALU programs.
//
//  Grammar (informal):
//
//      program ::= line*
//      line    ::= MNEMONIC operand* | '#' .* | <blank>
//      operand ::= register | integer      (kept as raw text)

use super::ast::{Instruction, Mnemonic};
use crate::error::TranslateError;
use crate::reader::SourceLine;

/// Tokenise one line. Blank lines and `#` comments yield `Ok(None)`.
///
/// Known mnemonics must carry at least their arity; extra operands are
/// ignored. Unknown mnemonics are passed through unchecked.
pub fn lex_line(line: &SourceLine) -> Result<Option<Instruction>, TranslateError> {
    let mut tokens = line.text.split_whitespace();

    let Some(first) = tokens.next() else {
        log::debug!("{}:{}: blank line", line.origin, line.number);
        return Ok(None);
    };
    if first.starts_with('#') {
        return Ok(None);
    }

    let mnemonic = Mnemonic::parse(first);
    let operands: Vec<String> = tokens.map(str::to_string).collect();

    if let Some(expected) = mnemonic.arity() {
        if operands.len() < expected {
            return Err(TranslateError::MissingOperand {
                line: line.number,
                mnemonic: mnemonic.to_string(),
                expected,
                found: operands.len(),
            });
        }
    }

    Ok(Some(Instruction {
        mnemonic,
        operands,
        line: line.number,
    }))
}
