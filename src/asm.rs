use std::fmt;

use tracing::{debug, instrument, warn};

use crate::context::Context;
use crate::error::Error;
use crate::expr::Evaluate;
use crate::mode::{Mode, Size};
use crate::output::{Image, Memory};
use crate::parser::{Operand, Parser};
use crate::table::w65816::NOP;
use crate::table::{Mnemonic, Table};
use crate::tokens::Tokens;

/// Opcode emitted on the first pass when no table row matches.
pub const PLACEHOLDER: u8 = 0xFF;

/// One encoded instruction.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Encoding {
	pub opcode: u8,
	/// Operand, emitted little-endian
	pub value: i64,
	/// Total length including the opcode, 1..=4
	pub len: usize,
}

impl Encoding {
	pub fn bytes(self) -> impl Iterator<Item = u8> {
		let value = (self.value as u32).to_le_bytes();
		std::iter::once(self.opcode)
			.chain(value)
			.take(self.len)
	}
}

impl fmt::Debug for Encoding {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		let mut first = true;
		for byte in self.bytes() {
			if !first {
				write!(fmt, " ")?;
			}
			write!(fmt, "{byte:02X}")?;
			first = false;
		}
		Ok(())
	}
}

/// Instruction encoder for one architecture.
#[derive(Debug, Clone)]
pub struct Encoder {
	table: Table,
}

impl Default for Encoder {
	fn default() -> Self {
		Self::new()
	}
}

impl Encoder {
	pub fn new() -> Self {
		Self::with_table(Table::w65816())
	}

	pub fn with_table(table: Table) -> Self {
		Self { table }
	}

	pub fn table(&self) -> &Table {
		&self.table
	}

	/// Parse the operand following `mnemonic`, emit the instruction and return its length.
	///
	/// Nothing is emitted when an error is returned.
	#[instrument(skip(self, ctx, tokens, eval, image), fields(pass = ?ctx.pass, address = ctx.address))]
	pub fn encode_instruction(
		&self,
		mnemonic: &str,
		ctx: &Context,
		tokens: &mut dyn Tokens,
		eval: &mut dyn Evaluate,
		image: &mut dyn Image,
	) -> Result<usize, Error> {
		let encoding = self.encode(mnemonic, ctx, tokens, eval, image.as_memory())?;
		debug!("{mnemonic}: {encoding:?}");
		for byte in encoding.bytes() {
			image.emit_byte(byte);
		}
		Ok(encoding.len)
	}

	/// Encode without emitting.
	pub fn encode(
		&self,
		mnemonic: &str,
		ctx: &Context,
		tokens: &mut dyn Tokens,
		eval: &mut dyn Evaluate,
		memory: &dyn Memory,
	) -> Result<Encoding, Error> {
		let lookup = self.table.mnemonic(mnemonic)
			.ok_or_else(|| Error::UnknownMnemonic(mnemonic.into()))?;
		let mut operand = Parser::new(ctx, tokens, eval, memory).parse(&lookup)?;

		if pads_with_nop(lookup.mnemonic, &operand) {
			debug!("{}: padding forward target with NOP", lookup.name);
			operand.mode = Mode::Address16;
			operand.value |= (NOP as i64) << 16;
			let opcode = self.select(lookup.name, lookup.mnemonic, &operand, ctx)?.opcode;
			return Ok(Encoding {
				opcode,
				value: operand.value,
				len: 4,
			});
		}

		self.select(lookup.name, lookup.mnemonic, &operand, ctx)
	}

	fn select(
		&self,
		name: &'static str,
		mnemonic: Mnemonic,
		operand: &Operand,
		ctx: &Context,
	) -> Result<Encoding, Error> {
		let (opcode, mode) = match self.table.select(mnemonic, operand.mode) {
			Some(selected) => (selected.opcode, selected.mode),
			None if !ctx.pass.is_final() => {
				warn!("{name}: no opcode for {}, reserving {} bytes", operand.mode, operand.mode.len());
				(PLACEHOLDER, operand.mode)
			}
			None => return Err(Error::UnsupportedMode { mnemonic: name, mode: operand.mode }),
		};

		// `.b` on a 16-bit immediate emits a single operand byte
		let len = match (mode, operand.size) {
			(Mode::Immediate16, Some(Size::Byte)) => 2,
			_ => mode.len(),
		};

		Ok(Encoding {
			opcode,
			value: operand.value,
			len,
		})
	}
}

/// Forward `jmp`/`jsr` within bank zero: absolute form plus a trailing NOP keeps the
/// four bytes reserved on the first pass.
fn pads_with_nop(mnemonic: Mnemonic, operand: &Operand) -> bool {
	matches!(mnemonic, Mnemonic::Jmp | Mnemonic::Jsr)
		&& operand.forward
		&& operand.size.is_none()
		&& operand.mode == Mode::Address24
		&& operand.value <= 0xFFFF
}
