//! Instruction encoder for a two-pass WDC 65816 assembler.
//!
//! The caller owns tokenizing, expression evaluation and the output image, and hands them in
//! per line through [`Tokens`], [`Evaluate`] and [`Image`]. [`Encoder::encode_instruction`]
//! parses the operand, picks the addressing mode and opcode, and emits the bytes.

mod asm;
mod context;
mod error;
mod expr;
mod mode;
mod output;
mod parser;
mod resolver;
pub mod table;
mod tokens;

#[cfg(test)]
mod testing;

pub use asm::{Encoder, Encoding, PLACEHOLDER};
pub use context::{Context, Pass};
pub use error::{Error, ErrorKind, Range};
pub use expr::{Evaluate, ExprError};
pub use mode::{Mode, Size};
pub use output::{Image, Memory, Sink};
pub use parser::Operand;
pub use table::{Lookup, Mnemonic, Table};
pub use tokens::{Token, TokenType, Tokens};
