use std::fmt;

use crate::tokens::{Token, Tokens};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
	/// Label has no value (yet)
	Undefined(Box<str>),
	/// Token that cannot start or continue an expression
	Malformed(Token),
}

impl std::error::Error for ExprError {}

impl fmt::Display for ExprError {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Undefined(lbl) => write!(fmt, "undefined label '{lbl}'"),
			Self::Malformed(tok) => write!(fmt, "malformed expression at '{tok}' @ [{}]", tok.pos),
		}
	}
}

/// Expression evaluator sharing the operand's token stream.
///
/// Consumes tokens up to the end of one expression and pushes the terminating token back.
pub trait Evaluate {
	fn evaluate(&mut self, tokens: &mut dyn Tokens) -> Result<i64, ExprError>;
}
