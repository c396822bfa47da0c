use std::fmt;

use crate::expr::ExprError;
use crate::mode::Mode;
use crate::tokens::Token;

/// Numeric domain an operand was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Range {
	Constant8,
	Constant16,
	Branch,
	LongBranch,
	BlockSource,
	BlockDestination,
	Address,
	DirectPage,
	Absolute,
	AbsoluteLong,
	StackOffset,
}

impl Range {
	pub fn bounds(self) -> (i64, i64) {
		match self {
			Range::Constant8 => (-128, 0xFF),
			Range::Constant16 => (-32768, 0xFFFF),
			Range::Branch => (-128, 127),
			Range::LongBranch => (-32768, 32767),
			Range::BlockSource |
			Range::BlockDestination |
			Range::DirectPage |
			Range::StackOffset => (0, 0xFF),
			Range::Absolute => (0, 0xFFFF),
			Range::Address |
			Range::AbsoluteLong => (0, 0xFF_FFFF),
		}
	}

	/// `Ok(value)` when inside the bounds.
	pub fn check(self, value: i64) -> Result<i64, Error> {
		let (lo, hi) = self.bounds();
		if (lo..=hi).contains(&value) {
			Ok(value)
		} else {
			Err(Error::Range(self, value))
		}
	}
}

impl fmt::Display for Range {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		let s = match self {
			Range::Constant8 => "8-bit constant",
			Range::Constant16 => "16-bit constant",
			Range::Branch => "Relative branch",
			Range::LongBranch => "Relative long branch",
			Range::BlockSource => "Block move source address",
			Range::BlockDestination => "Block move destination address",
			Range::Address => "Address",
			Range::DirectPage => "Direct-page address",
			Range::Absolute => "Absolute address",
			Range::AbsoluteLong => "Absolute long address",
			Range::StackOffset => "Stack offset",
		};
		write!(fmt, "{s}")
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	Syntax,
	Range,
	Width,
	UnsupportedMode,
	UnknownMnemonic,
	Expression,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
	Syntax(Token),
	Range(Range, i64),
	ForcedWidth(&'static str),
	UnsupportedMode {
		mnemonic: &'static str,
		mode: Mode,
	},
	UnknownMnemonic(Box<str>),
	Expression(ExprError),
}

impl Error {
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Syntax(_) => ErrorKind::Syntax,
			Self::Range(..) => ErrorKind::Range,
			Self::ForcedWidth(_) => ErrorKind::Width,
			Self::UnsupportedMode { .. } => ErrorKind::UnsupportedMode,
			Self::UnknownMnemonic(_) => ErrorKind::UnknownMnemonic,
			Self::Expression(_) => ErrorKind::Expression,
		}
	}
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "ERROR: ")?;
		match self {
			Self::Syntax(tok) => write!(fmt, "unexpected '{tok}' @ [{}]", tok.pos),
			Self::Range(range, value) => {
				let (lo, hi) = range.bounds();
				write!(fmt, "{range} out of range: {value} not in {lo}..={hi}")
			}
			Self::ForcedWidth(msg) => write!(fmt, "{msg}"),
			Self::UnsupportedMode { mnemonic, mode } => {
				write!(fmt, "no instruction found for addressing mode {mode} ({mnemonic})")
			}
			Self::UnknownMnemonic(name) => write!(fmt, "unknown instruction '{name}'"),
			Self::Expression(e) => write!(fmt, "{e}"),
		}
	}
}

impl From<ExprError> for Error {
	fn from(other: ExprError) -> Self {
		Self::Expression(other)
	}
}

impl miette::Diagnostic for Error {
	fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
		let code = match self.kind() {
			ErrorKind::Syntax => "w65816::syntax",
			ErrorKind::Range => "w65816::range",
			ErrorKind::Width => "w65816::width",
			ErrorKind::UnsupportedMode => "w65816::mode",
			ErrorKind::UnknownMnemonic => "w65816::mnemonic",
			ErrorKind::Expression => "w65816::expression",
		};
		Some(Box::new(code))
	}

	fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
		let help = match self {
			Self::Range(Range::Branch, _) => "use brl or a jmp for targets outside -128..=127",
			Self::Range(Range::DirectPage, _) => "drop the .b suffix or use '!'/'>' to select a wider address",
			Self::ForcedWidth(_) => "remove the .l suffix",
			Self::UnsupportedMode { .. } => "check the operand syntax against the instruction's addressing modes",
			_ => return None,
		};
		Some(Box::new(help))
	}
}
