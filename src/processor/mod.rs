//! The functional core: lines → instructions → statements.
pub mod ast;
pub mod lexer;
pub mod translator;

pub use translator::{Translator, UnknownPolicy};
