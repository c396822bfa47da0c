use crate::mode::{Mode, Size};

/// Parse result for one instruction line, consumed immediately by the selector.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Operand {
	pub mode: Mode,
	pub value: i64,
	/// Width forced by a suffix, a modifier or a `jml`/`jsl` alias
	pub size: Option<Size>,
	/// Forward-label heuristic fired for this operand
	pub forward: bool,
}

impl Operand {
	pub(crate) fn new(mode: Mode, value: i64, size: Option<Size>) -> Self {
		Self {
			mode,
			value,
			size,
			forward: false,
		}
	}
}

impl std::fmt::Debug for Operand {
	fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
		let Operand { mode, value, size, forward } = self;
		write!(fmt, "{mode}(${value:X})")?;
		if let Some(size) = size {
			write!(fmt, ".{}", size.bits())?;
		}
		if *forward {
			write!(fmt, " fwd")?;
		}
		Ok(())
	}
}
