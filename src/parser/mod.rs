use tracing::{debug, trace};

use crate::context::{Context, Pass};
use crate::error::{Error, Range};
use crate::expr::Evaluate;
use crate::mode::{Mode, Size};
use crate::output::Memory;
use crate::resolver::{self, Branch};
use crate::table::Lookup;
use crate::tokens::{Token, TokenType, Tokens};

mod operand;

pub use operand::Operand;

/// Value modifier in front of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Modifier {
	/// `<` direct page / low byte
	Low,
	/// `!` absolute
	Absolute,
	/// `>` absolute long / high byte
	High,
}

impl Modifier {
	fn from_token(tok: &Token) -> Option<Self> {
		if tok.is('<') {
			Some(Self::Low)
		} else if tok.is('!') {
			Some(Self::Absolute)
		} else if tok.is('>') {
			Some(Self::High)
		} else {
			None
		}
	}
}

/// Operand parser for one instruction line, positioned after the mnemonic.
pub(crate) struct Parser<'a> {
	ctx: &'a Context,
	tokens: &'a mut dyn Tokens,
	eval: &'a mut dyn Evaluate,
	memory: &'a dyn Memory,
	size: Option<Size>,
}

impl<'a> Parser<'a> {
	pub(crate) fn new(
		ctx: &'a Context,
		tokens: &'a mut dyn Tokens,
		eval: &'a mut dyn Evaluate,
		memory: &'a dyn Memory,
	) -> Self {
		Self {
			ctx,
			tokens,
			eval,
			memory,
			size: None,
		}
	}

	fn next(&mut self) -> Token {
		let tok = self.tokens.next_token();
		trace!("{tok:?}");
		tok
	}

	fn push_back(&mut self, tok: Token) {
		self.tokens.push_back(tok);
	}

	/// Next token, which must not end the line.
	fn operand_token(&mut self) -> Result<Token, Error> {
		let tok = self.next();
		if tok.is_eol() {
			Err(Error::Syntax(tok))
		} else {
			Ok(tok)
		}
	}

	fn match_symbol(&mut self, ch: char) -> Result<(), Error> {
		let tok = self.next();
		if tok.is(ch) {
			Ok(())
		} else {
			Err(Error::Syntax(tok))
		}
	}

	fn match_letter(&mut self, ch: char) -> Result<(), Error> {
		let tok = self.next();
		if tok.is_letter(ch) {
			Ok(())
		} else {
			Err(Error::Syntax(tok))
		}
	}

	fn end(&mut self) -> Result<(), Error> {
		let tok = self.next();
		if tok.is_eol() {
			Ok(())
		} else {
			Err(Error::Syntax(tok))
		}
	}

	fn value(&mut self) -> Result<i64, Error> {
		resolver::value(self.ctx, &mut *self.tokens, &mut *self.eval)
	}

	/// Constant operand, `<` takes the low byte and `>` the high byte.
	fn number(&mut self, tok: Token) -> Result<i64, Error> {
		let modifier = Modifier::from_token(&tok)
			.filter(|m| *m != Modifier::Absolute);
		if modifier.is_none() {
			self.push_back(tok);
		}
		let value = self.value()?;
		let value = match modifier {
			Some(Modifier::Low) => value & 0xFF,
			Some(Modifier::High) => (value >> 8) & 0xFF,
			_ => return Ok(value),
		};
		self.size = Some(Size::Byte);
		Ok(value)
	}

	/// Address operand, `<` forces direct page, `!` absolute and `>` absolute long.
	fn address(&mut self, tok: Token) -> Result<i64, Error> {
		let modifier = Modifier::from_token(&tok);
		if modifier.is_none() {
			self.push_back(tok);
		}
		let value = self.value()?;
		let (size, mask) = match modifier {
			Some(Modifier::Low) => (Size::Byte, 0xFF),
			Some(Modifier::Absolute) => (Size::Word, 0xFFFF),
			Some(Modifier::High) => (Size::Long, 0xFF_FFFF),
			None => return Ok(value),
		};
		self.size = Some(size);
		Ok(value & mask)
	}

	pub(crate) fn parse(mut self, lookup: &Lookup) -> Result<Operand, Error> {
		self.size = lookup.size;

		let mut tok = self.next();
		if tok.is('.') {
			let suffix = self.next();
			match Size::from_suffix(&suffix.text) {
				Some(size) if suffix == TokenType::Ident => self.size = Some(size),
				_ => return Err(Error::Syntax(suffix)),
			}
			tok = self.next();
		}

		if tok.is_eol() {
			return Ok(Operand::new(lookup.class, 0, self.size));
		}

		let operand = match lookup.class {
			Mode::Relative => self.relative(tok)?,
			Mode::RelativeLong => self.relative_long(tok)?,
			Mode::BlockMove => self.block_move(tok)?,
			class if tok.is('#') => self.immediate(class)?,
			_ if tok.is('(') => self.indirect()?,
			_ if tok.is('[') => self.indirect_long()?,
			_ => self.direct(tok)?,
		};
		self.end()?;

		debug!("{} {operand:?}", lookup.name);
		Ok(operand)
	}

	// bra label | bra #disp
	fn relative(&mut self, tok: Token) -> Result<Operand, Error> {
		let value = if tok.is('#') {
			let tok = self.operand_token()?;
			let disp = self.number(tok)?;
			Range::Constant8.check(disp)? & 0xFF
		} else {
			let target = self.number(tok)?;
			resolver::branch(self.ctx, target, Branch::Short)?
		};
		Ok(Operand::new(Mode::Relative, value, self.size))
	}

	// brl label | brl #disp
	fn relative_long(&mut self, tok: Token) -> Result<Operand, Error> {
		let value = if tok.is('#') {
			let tok = self.operand_token()?;
			let disp = self.number(tok)?;
			Range::Constant16.check(disp)? & 0xFFFF
		} else {
			let target = self.number(tok)?;
			resolver::branch(self.ctx, target, Branch::Long)?
		};
		Ok(Operand::new(Mode::RelativeLong, value, self.size))
	}

	// mvn src,dst
	fn block_move(&mut self, tok: Token) -> Result<Operand, Error> {
		let src = self.address(tok)?;
		let src = Range::BlockSource.check(src)?;
		self.match_symbol(',')?;
		let tok = self.operand_token()?;
		let dst = self.address(tok)?;
		let dst = Range::BlockDestination.check(dst)?;
		Ok(Operand::new(Mode::BlockMove, src | dst << 8, self.size))
	}

	// #imm
	fn immediate(&mut self, class: Mode) -> Result<Operand, Error> {
		let tok = self.operand_token()?;
		let value = self.number(tok)?;
		let mode = if class == Mode::Immediate8 {
			self.size = Some(Size::Byte);
			Mode::Immediate8
		} else {
			Mode::Immediate16
		};
		let value = match self.size {
			Some(Size::Byte) => Range::Constant8.check(value)? & 0xFF,
			Some(Size::Word) | None => Range::Constant16.check(value)? & 0xFFFF,
			Some(Size::Long) => return Err(Error::ForcedWidth("cannot force long value in immediate mode")),
		};
		Ok(Operand::new(mode, value, self.size))
	}

	// (addr) | (addr),y | (addr,x) | (sr,s),y
	fn indirect(&mut self) -> Result<Operand, Error> {
		let tok = self.operand_token()?;
		let value = self.address(tok)?;
		let tok = self.operand_token()?;
		let mode = if tok.is(',') {
			let index = self.operand_token()?;
			if index.is_letter('x') {
				self.match_symbol(')')?;
				if Range::Absolute.check(value)? > 0xFF {
					Mode::XIndirect16
				} else {
					Mode::XIndirect8
				}
			} else if index.is_letter('s') {
				self.match_symbol(')')?;
				self.match_symbol(',')?;
				self.match_letter('y')?;
				Range::StackOffset.check(value)?;
				Mode::StackRelativeIndirectY
			} else {
				return Err(Error::Syntax(index));
			}
		} else if tok.is(')') {
			let tok = self.next();
			if tok.is(',') {
				self.match_letter('y')?;
				Range::DirectPage.check(value)?;
				Mode::Indirect8Y
			} else {
				self.push_back(tok);
				if Range::Absolute.check(value)? > 0xFF {
					Mode::Indirect16
				} else {
					Mode::Indirect8
				}
			}
		} else {
			return Err(Error::Syntax(tok));
		};
		Ok(Operand::new(mode, value, self.size))
	}

	// [addr] | [addr],y
	fn indirect_long(&mut self) -> Result<Operand, Error> {
		let tok = self.operand_token()?;
		let value = self.address(tok)?;
		self.match_symbol(']')?;
		let tok = self.next();
		let mode = if tok.is(',') {
			self.match_letter('y')?;
			Range::DirectPage.check(value)?;
			Mode::Indirect8YLong
		} else {
			self.push_back(tok);
			if Range::Absolute.check(value)? > 0xFF {
				Mode::Indirect16Long
			} else {
				Mode::Indirect8Long
			}
		};
		Ok(Operand::new(mode, value, self.size))
	}

	// addr | addr,x | addr,y | sr,s
	fn direct(&mut self, tok: Token) -> Result<Operand, Error> {
		let value = self.address(tok)?;
		let forward = resolver::is_forward(self.ctx, self.memory);
		let value = Range::Address.check(value)?;
		match self.size {
			Some(Size::Byte) => Range::DirectPage.check(value)?,
			Some(Size::Word) => Range::Absolute.check(value)?,
			Some(Size::Long) => Range::AbsoluteLong.check(value)?,
			None => value,
		};

		// value may still move: reserve the widest form of the class
		let wide = self.size.is_none()
			&& (forward || (self.ctx.pass == Pass::First && value == 0));

		let tok = self.next();
		let mode = if tok.is(',') {
			let index = self.operand_token()?;
			if index.is_letter('x') {
				if self.size == Some(Size::Long) || value > 0xFFFF || wide {
					Mode::Indexed24X
				} else if self.size == Some(Size::Word) || value > 0xFF {
					Mode::Indexed16X
				} else {
					Mode::Indexed8X
				}
			} else if index.is_letter('y') {
				if self.size == Some(Size::Long) {
					return Err(Error::ForcedWidth("absolute long not supported for Y indexing"));
				}
				if Range::Absolute.check(value)? > 0xFF || self.size == Some(Size::Word) || wide {
					Mode::Indexed16Y
				} else {
					Mode::Indexed8Y
				}
			} else if index.is_letter('s') {
				Range::StackOffset.check(value)?;
				Mode::StackRelative
			} else {
				return Err(Error::Syntax(index));
			}
		} else {
			self.push_back(tok);
			match self.size {
				Some(Size::Byte) => Mode::Address8,
				Some(Size::Word) => Mode::Address16,
				Some(Size::Long) => Mode::Address24,
				None if wide || value > 0xFFFF => Mode::Address24,
				None if value > 0xFF => Mode::Address16,
				None => Mode::Address8,
			}
		};

		Ok(Operand {
			mode,
			value,
			size: self.size,
			forward,
		})
	}
}
