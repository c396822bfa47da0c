use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
	/// End of the current source line
	Eol,
	/// Numeric literal in any radix
	Number,
	/// Label, index register letter or size suffix
	Ident,
	/// Single punctuation character
	Symbol,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Token {
	/// Token type
	pub tt: TokenType,

	/// Source text, empty for end-of-line
	pub text: Box<str>,

	/// Column in the source line
	pub pos: u32,
}

impl Token {
	pub fn new(tt: TokenType, text: &str, pos: usize) -> Self {
		Self {
			tt,
			text: text.into(),
			pos: pos as u32,
		}
	}

	pub fn eol(pos: usize) -> Self {
		Self::new(TokenType::Eol, "", pos)
	}

	pub fn is_eol(&self) -> bool {
		self.tt == TokenType::Eol
	}

	/// Punctuation match, e.g. `tok.is('#')`.
	pub fn is(&self, ch: char) -> bool {
		self.tt == TokenType::Symbol && self.text.len() == 1 && self.text.starts_with(ch)
	}

	/// Case-insensitive single letter identifier match, used for `x`, `y` and `s`.
	pub fn is_letter(&self, ch: char) -> bool {
		self.tt == TokenType::Ident
			&& self.text.len() == 1
			&& self.text.starts_with(|c: char| c.eq_ignore_ascii_case(&ch))
	}
}

impl PartialEq<TokenType> for Token {
	fn eq(&self, rhs: &TokenType) -> bool {
		self.tt == *rhs
	}
}

impl fmt::Display for Token {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		if self.is_eol() {
			write!(fmt, "end of line")
		} else {
			write!(fmt, "{}", self.text)
		}
	}
}

impl fmt::Debug for Token {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		let Token { tt, text, pos } = self;
		if text.is_empty() {
			write!(fmt, "{tt:?} [{pos}]")
		} else {
			write!(fmt, "{tt:?}({text}) [{pos}]")
		}
	}
}

/// Token stream over the current source line.
///
/// Yields [`TokenType::Eol`] once the line is exhausted, and keeps yielding it.
/// Exactly one token of pushback is required.
pub trait Tokens {
	fn next_token(&mut self) -> Token;
	fn push_back(&mut self, token: Token);
}

#[cfg(test)]
mod can_match {
	use super::*;

	#[test]
	fn symbols() {
		let tok = Token::new(TokenType::Symbol, "#", 4);
		assert!(tok.is('#'));
		assert!(!tok.is('('));
		assert!(!tok.is_letter('#'));
	}

	#[test]
	fn letters_ignore_case() {
		let tok = Token::new(TokenType::Ident, "X", 0);
		assert!(tok.is_letter('x'));
		assert!(tok.is_letter('X'));
		assert!(!tok.is_letter('y'));
		assert!(!Token::new(TokenType::Ident, "xy", 0).is_letter('x'));
	}

	#[test]
	fn eol_display() {
		assert_eq!(Token::eol(9).to_string(), "end of line");
		assert_eq!(format!("{:?}", Token::eol(9)), "Eol [9]");
		assert_eq!(format!("{:?}", Token::new(TokenType::Number, "$12", 3)), "Number($12) [3]");
	}

	#[test]
	fn wide_columns() {
		let tok = Token::new(TokenType::Symbol, ",", 70_000);
		assert_eq!(tok.pos, 70_000);
	}
}
