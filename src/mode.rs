use std::fmt;

/// Operand width forced by a `.b`/`.w`/`.l` suffix or a value modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
	Byte,
	Word,
	Long,
}

impl Size {
	pub fn from_suffix(txt: &str) -> Option<Self> {
		match txt.to_ascii_lowercase().as_str() {
			"b" => Some(Self::Byte),
			"w" => Some(Self::Word),
			"l" => Some(Self::Long),
			_ => None,
		}
	}

	pub fn bits(self) -> u32 {
		match self {
			Self::Byte => 8,
			Self::Word => 16,
			Self::Long => 24,
		}
	}
}

//    | Syntax            | Bytes |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
	/// |                   | 1     |
	Implied,
	/// | #imm8             | 2     |
	Immediate8,
	/// | #imm16            | 3     |
	Immediate16,
	/// | dp                | 2     |
	Address8,
	/// | abs               | 3     |
	Address16,
	/// | long              | 4     |
	Address24,
	/// | dp,x              | 2     |
	Indexed8X,
	/// | dp,y              | 2     |
	Indexed8Y,
	/// | abs,x             | 3     |
	Indexed16X,
	/// | abs,y             | 3     |
	Indexed16Y,
	/// | long,x            | 4     |
	Indexed24X,
	/// | (dp)              | 2     |
	Indirect8,
	/// | (dp),y            | 2     |
	Indirect8Y,
	/// | (abs)             | 3     |
	Indirect16,
	/// | [abs]             | 3     |
	Indirect16Long,
	/// | (dp,x)            | 2     |
	XIndirect8,
	/// | (abs,x)           | 3     |
	XIndirect16,
	/// | [dp]              | 2     |
	Indirect8Long,
	/// | [dp],y            | 2     |
	Indirect8YLong,
	/// | sr,s              | 2     |
	StackRelative,
	/// | (sr,s),y          | 2     |
	StackRelativeIndirectY,
	/// | rel8              | 2     |
	Relative,
	/// | rel16             | 3     |
	RelativeLong,
	/// | srcbank,dstbank   | 3     |
	BlockMove,
}

impl Mode {
	/// Encoded length in bytes, opcode included.
	pub const fn len(self) -> usize {
		match self {
			Mode::Implied => 1,
			Mode::Immediate8 => 2,
			Mode::Immediate16 => 3,
			Mode::Address8 => 2,
			Mode::Address16 => 3,
			Mode::Address24 => 4,
			Mode::Indexed8X => 2,
			Mode::Indexed8Y => 2,
			Mode::Indexed16X => 3,
			Mode::Indexed16Y => 3,
			Mode::Indexed24X => 4,
			Mode::Indirect8 => 2,
			Mode::Indirect8Y => 2,
			Mode::Indirect16 => 3,
			Mode::Indirect16Long => 3,
			Mode::XIndirect8 => 2,
			Mode::XIndirect16 => 3,
			Mode::Indirect8Long => 2,
			Mode::Indirect8YLong => 2,
			Mode::StackRelative => 2,
			Mode::StackRelativeIndirectY => 2,
			Mode::Relative => 2,
			Mode::RelativeLong => 3,
			Mode::BlockMove => 3,
		}
	}

	/// Next wider mode tried when the table has no row for `self`.
	pub const fn promoted(self) -> Option<Mode> {
		match self {
			Mode::Address8 => Some(Mode::Address16),
			Mode::Address16 => Some(Mode::Address24),
			Mode::Indirect8 => Some(Mode::Indirect16),
			Mode::Indirect8Long => Some(Mode::Indirect16Long),
			Mode::XIndirect8 => Some(Mode::XIndirect16),
			_ => None,
		}
	}
}

impl fmt::Display for Mode {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		let s = match self {
			Mode::Implied => "implied",
			Mode::Immediate8 => "#imm8",
			Mode::Immediate16 => "#imm16",
			Mode::Address8 => "dp",
			Mode::Address16 => "abs",
			Mode::Address24 => "long",
			Mode::Indexed8X => "dp,x",
			Mode::Indexed8Y => "dp,y",
			Mode::Indexed16X => "abs,x",
			Mode::Indexed16Y => "abs,y",
			Mode::Indexed24X => "long,x",
			Mode::Indirect8 => "(dp)",
			Mode::Indirect8Y => "(dp),y",
			Mode::Indirect16 => "(abs)",
			Mode::Indirect16Long => "[abs]",
			Mode::XIndirect8 => "(dp,x)",
			Mode::XIndirect16 => "(abs,x)",
			Mode::Indirect8Long => "[dp]",
			Mode::Indirect8YLong => "[dp],y",
			Mode::StackRelative => "sr,s",
			Mode::StackRelativeIndirectY => "(sr,s),y",
			Mode::Relative => "rel8",
			Mode::RelativeLong => "rel16",
			Mode::BlockMove => "src,dst",
		};
		write!(fmt, "{s}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn promotion_is_one_step() {
		assert_eq!(Mode::Address8.promoted(), Some(Mode::Address16));
		assert_eq!(Mode::Address16.promoted(), Some(Mode::Address24));
		assert_eq!(Mode::Address24.promoted(), None);
		assert_eq!(Mode::XIndirect8.promoted(), Some(Mode::XIndirect16));
		assert_eq!(Mode::Indexed8X.promoted(), None);
	}

	#[test]
	fn promotion_widens() {
		for mode in [Mode::Address8, Mode::Address16, Mode::Indirect8, Mode::Indirect8Long, Mode::XIndirect8] {
			let wider = mode.promoted().unwrap();
			assert_eq!(wider.len(), mode.len() + 1, "{mode} -> {wider}");
		}
	}

	#[test]
	fn suffixes() {
		assert_eq!(Size::from_suffix("B"), Some(Size::Byte));
		assert_eq!(Size::from_suffix("w"), Some(Size::Word));
		assert_eq!(Size::from_suffix("L"), Some(Size::Long));
		assert_eq!(Size::from_suffix("q"), None);
		assert_eq!(Size::Long.bits(), 24);
	}
}
