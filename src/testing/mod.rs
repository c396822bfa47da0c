//! Reference collaborators used by the unit tests: a line tokenizer, a label/literal
//! evaluator, a sparse memory image and a two-pass driver.

use std::collections::{BTreeMap, HashMap, VecDeque};

use pest::Parser;
use pest_derive::Parser;
use tracing::trace;

use crate::asm::Encoder;
use crate::context::{Context, Pass};
use crate::error::Error;
use crate::expr::{Evaluate, ExprError};
use crate::output::{Memory, Sink};
use crate::tokens::{Token, TokenType, Tokens};

#[derive(Parser)]
#[grammar = "testing/line.pest"]
struct LineParser;

/// Tokens of a single source line with one token of pushback.
#[derive(Debug, Clone)]
pub struct Line {
	tokens: VecDeque<Token>,
	eol: usize,
}

impl Line {
	pub fn lex(input: &str) -> Result<Self, pest::error::Error<Rule>> {
		let mut tokens = VecDeque::new();
		for pair in LineParser::parse(Rule::line, input)?.flatten() {
			let tt = match pair.as_rule() {
				Rule::number => TokenType::Number,
				Rule::ident => TokenType::Ident,
				Rule::symbol => TokenType::Symbol,
				_ => continue,
			};
			tokens.push_back(Token::new(tt, pair.as_str(), pair.as_span().start()));
		}
		Ok(Self {
			tokens,
			eol: input.len(),
		})
	}
}

impl Tokens for Line {
	fn next_token(&mut self) -> Token {
		self.tokens.pop_front()
			.unwrap_or_else(|| Token::eol(self.eol))
	}

	fn push_back(&mut self, token: Token) {
		self.tokens.push_front(token);
	}
}

fn parse_number(text: &str) -> Option<i64> {
	if let Some(hex) = text.strip_prefix('$') {
		i64::from_str_radix(hex, 16).ok()
	} else if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
		i64::from_str_radix(hex, 16).ok()
	} else if let Some(bin) = text.strip_prefix('%') {
		i64::from_str_radix(bin, 2).ok()
	} else {
		text.parse().ok()
	}
}

/// `term (('+' | '-') term)*` over literals and labels, with unary minus.
#[derive(Debug, Clone, Default)]
pub struct Symbols {
	labels: HashMap<Box<str>, i64>,
}

impl Symbols {
	pub fn define(&mut self, name: &str, value: i64) {
		self.labels.insert(name.into(), value);
	}

	fn term(&mut self, tokens: &mut dyn Tokens) -> Result<i64, ExprError> {
		let tok = tokens.next_token();
		match tok.tt {
			TokenType::Number => parse_number(&tok.text).ok_or(ExprError::Malformed(tok)),
			TokenType::Ident => self.labels.get(&tok.text)
				.copied()
				.ok_or(ExprError::Undefined(tok.text)),
			TokenType::Symbol if tok.is('-') => Ok(-self.term(tokens)?),
			_ => Err(ExprError::Malformed(tok)),
		}
	}
}

impl Evaluate for Symbols {
	fn evaluate(&mut self, tokens: &mut dyn Tokens) -> Result<i64, ExprError> {
		let mut value = self.term(tokens)?;
		loop {
			let tok = tokens.next_token();
			if tok.is('+') {
				value += self.term(tokens)?;
			} else if tok.is('-') {
				value -= self.term(tokens)?;
			} else {
				tokens.push_back(tok);
				break Ok(value);
			}
		}
	}
}

/// Sparse byte image, writes go to the cursor.
#[derive(Debug, Clone, Default)]
pub struct Image {
	bytes: BTreeMap<u32, u8>,
	cursor: u32,
}

impl Image {
	pub fn at(origin: u32) -> Self {
		Self {
			cursor: origin,
			..Self::default()
		}
	}

	/// Store `bytes` at `address` without moving the cursor.
	pub fn write(&mut self, address: u32, bytes: &[u8]) {
		for (address, byte) in (address..).zip(bytes) {
			self.bytes.insert(address, *byte);
		}
	}

	pub fn read(&self, address: u32, len: u32) -> Vec<u8> {
		(address..address + len)
			.map(|address| self.read_byte(address))
			.collect()
	}

	pub fn cursor(&self) -> u32 {
		self.cursor
	}

	pub fn seek(&mut self, address: u32) {
		self.cursor = address;
	}
}

impl Sink for Image {
	fn emit_byte(&mut self, byte: u8) {
		self.bytes.insert(self.cursor, byte);
		self.cursor += 1;
	}
}

impl Memory for Image {
	fn read_byte(&self, address: u32) -> u8 {
		self.bytes.get(&address).copied().unwrap_or(0)
	}
}

/// Minimal driver: one instruction per line, optionally preceded by `label:`.
///
/// The image is kept between passes so the second pass sees the first pass output.
#[derive(Debug, Clone)]
pub struct Assembler<'a> {
	encoder: Encoder,
	source: &'a str,
	origin: u32,
	symbols: Symbols,
	image: Image,
	sizes: HashMap<usize, usize>,
}

impl<'a> Assembler<'a> {
	pub fn new(source: &'a str, origin: u32) -> Self {
		Self {
			encoder: Encoder::new(),
			source,
			origin,
			symbols: Symbols::default(),
			image: Image::at(origin),
			sizes: HashMap::new(),
		}
	}

	pub fn pass(&mut self, pass: Pass) -> Result<(), Error> {
		self.image.seek(self.origin);
		for (idx, text) in self.source.lines().enumerate() {
			let mut line = Line::lex(text).unwrap_or_else(|e| panic!("{e}"));
			let address = self.image.cursor();

			let mut tok = line.next_token();
			if tok == TokenType::Ident {
				let next = line.next_token();
				if next.is(':') {
					trace!("{} = ${address:06X}", tok.text);
					self.symbols.define(&tok.text, address as i64);
					tok = line.next_token();
				} else {
					line.push_back(next);
				}
			}
			if tok.is_eol() {
				continue;
			}

			let ctx = Context::new(pass, address);
			let len = self.encoder.encode_instruction(
				&tok.text,
				&ctx,
				&mut line,
				&mut self.symbols,
				&mut self.image,
			)?;
			match pass {
				Pass::First => {
					self.sizes.insert(idx, len);
				}
				Pass::Second => {
					assert_eq!(self.sizes.get(&idx), Some(&len), "size changed between passes: {text}");
				}
			}
		}
		Ok(())
	}

	/// Bytes from the origin up to the cursor.
	pub fn output(&self) -> Vec<u8> {
		self.image.read(self.origin, self.image.cursor() - self.origin)
	}
}

pub fn assemble(source: &str, origin: u32) -> Result<Vec<u8>, Error> {
	let mut asm = Assembler::new(source, origin);
	asm.pass(Pass::First)?;
	asm.pass(Pass::Second)?;
	Ok(asm.output())
}

#[cfg(test)]
mod can_lex {
	use super::*;

	fn texts(input: &str) -> Vec<String> {
		let mut line = Line::lex(input).unwrap();
		let mut out = vec![];
		loop {
			let tok = line.next_token();
			if tok.is_eol() {
				break out;
			}
			out.push(format!("{tok:?}"));
		}
	}

	#[test]
	fn operand_line() {
		assert_eq!(texts("lbl:\tlda.w ($12,x) ; comment"), [
			"Ident(lbl) [0]",
			"Symbol(:) [3]",
			"Ident(lda) [5]",
			"Symbol(.) [8]",
			"Ident(w) [9]",
			"Symbol(() [11]",
			"Number($12) [12]",
			"Symbol(,) [15]",
			"Ident(x) [16]",
			"Symbol()) [17]",
		]);
	}

	#[test]
	fn eol_repeats() {
		let mut line = Line::lex("nop").unwrap();
		line.next_token();
		assert_eq!(line.next_token(), Token::eol(3));
		assert_eq!(line.next_token(), Token::eol(3));
	}

	#[test]
	fn evaluates_sums() {
		let mut symbols = Symbols::default();
		symbols.define("base", 0x8000);
		let mut line = Line::lex("base + $10 - %11 + 0x2, x").unwrap();
		assert_eq!(symbols.evaluate(&mut line), Ok(0x800F));
		assert!(line.next_token().is(','));
		let mut line = Line::lex("-5").unwrap();
		assert_eq!(symbols.evaluate(&mut line), Ok(-5));
	}

	#[test]
	fn evaluation_errors() {
		let mut symbols = Symbols::default();
		let mut line = Line::lex("later + 1").unwrap();
		assert_eq!(symbols.evaluate(&mut line), Err(ExprError::Undefined("later".into())));
		let mut line = Line::lex("#1").unwrap();
		assert_eq!(
			symbols.evaluate(&mut line),
			Err(ExprError::Malformed(Token::new(TokenType::Symbol, "#", 0)))
		);
	}
}
