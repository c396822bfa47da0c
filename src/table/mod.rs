use std::collections::HashMap;

use tracing::debug;

use crate::mode::{Mode, Size};

pub mod w65816;

pub use w65816::Mnemonic;

/// Static per-instruction data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
	pub mnemonic: Mnemonic,
	pub name: &'static str,
	/// Addressing-mode class selecting the operand grammar
	pub class: Mode,
}

/// Alternate spelling of an instruction with a forced operand width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alias {
	pub name: &'static str,
	pub mnemonic: Mnemonic,
	pub size: Size,
}

/// Result of a mnemonic lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup {
	pub mnemonic: Mnemonic,
	pub name: &'static str,
	pub class: Mode,
	pub size: Option<Size>,
}

/// Row picked by [`Table::select`], `mode` is the promoted mode when promotion was needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selected {
	pub opcode: u8,
	pub mode: Mode,
}

/// Lookup structures built once from an architecture's static tables.
#[derive(Debug, Clone)]
pub struct Table {
	names: HashMap<&'static str, Lookup>,
	opcodes: HashMap<(Mnemonic, Mode), u8>,
}

impl Table {
	/// `rows` is indexed by opcode; for duplicate (mnemonic, mode) pairs the lowest opcode wins.
	pub fn new(descriptors: &[Descriptor], aliases: &[Alias], rows: &[(Mnemonic, Mode)]) -> Self {
		let mut names = HashMap::with_capacity(descriptors.len() + aliases.len());
		for desc in descriptors {
			names.insert(desc.name, Lookup {
				mnemonic: desc.mnemonic,
				name: desc.name,
				class: desc.class,
				size: None,
			});
		}

		for alias in aliases {
			let class = descriptors.iter()
				.find(|desc| desc.mnemonic == alias.mnemonic)
				.map_or(Mode::Implied, |desc| desc.class);
			names.insert(alias.name, Lookup {
				mnemonic: alias.mnemonic,
				name: alias.name,
				class,
				size: Some(alias.size),
			});
		}

		let mut opcodes = HashMap::with_capacity(rows.len());
		for (opcode, row) in rows.iter().enumerate() {
			opcodes.entry(*row).or_insert(opcode as u8);
		}

		Self { names, opcodes }
	}

	pub fn w65816() -> Self {
		Self::new(w65816::INSTRUCTIONS, w65816::ALIASES, &w65816::OPCODES)
	}

	/// Case-insensitive mnemonic lookup.
	pub fn mnemonic(&self, name: &str) -> Option<Lookup> {
		self.names.get(name.to_ascii_lowercase().as_str()).copied()
	}

	/// Exact (mnemonic, mode) match.
	pub fn opcode(&self, mnemonic: Mnemonic, mode: Mode) -> Option<u8> {
		self.opcodes.get(&(mnemonic, mode)).copied()
	}

	/// Exact match, else a single promotion step along [`Mode::promoted`].
	pub fn select(&self, mnemonic: Mnemonic, mode: Mode) -> Option<Selected> {
		if let Some(opcode) = self.opcode(mnemonic, mode) {
			return Some(Selected { opcode, mode });
		}
		let wider = mode.promoted()?;
		let opcode = self.opcode(mnemonic, wider)?;
		debug!("{mnemonic:?}: promoted {mode} to {wider}");
		Some(Selected { opcode, mode: wider })
	}
}
