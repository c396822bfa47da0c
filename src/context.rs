#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
	/// Sizing sweep, addresses are provisional
	First,
	/// Resolving sweep, addresses are final
	Second,
}

impl Pass {
	pub fn is_final(self) -> bool {
		self == Pass::Second
	}
}

/// Per-line assembly state owned by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
	pub pass: Pass,
	/// Byte address the instruction is written to
	pub address: u32,
	/// Bytes per addressable unit, label values are expressed in units
	pub bytes_per_address: u32,
}

impl Context {
	pub fn new(pass: Pass, address: u32) -> Self {
		Self {
			pass,
			address,
			bytes_per_address: 1,
		}
	}

	pub fn with_bytes_per_address(mut self, bytes: u32) -> Self {
		self.bytes_per_address = bytes.max(1);
		self
	}

	/// Program counter in address units.
	pub fn pc(&self) -> i64 {
		(self.address / self.bytes_per_address.max(1)) as i64
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pc_in_units() {
		let ctx = Context::new(Pass::First, 0x100);
		assert_eq!(ctx.pc(), 0x100);
		assert_eq!(ctx.with_bytes_per_address(2).pc(), 0x80);
		assert_eq!(ctx.with_bytes_per_address(0).bytes_per_address, 1);
	}

	#[test]
	fn zero_unit_size_counts_bytes() {
		let ctx = Context {
			pass: Pass::Second,
			address: 0x100,
			bytes_per_address: 0,
		};
		assert_eq!(ctx.pc(), 0x100);
	}

	#[test]
	fn final_pass() {
		assert!(!Pass::First.is_final());
		assert!(Pass::Second.is_final());
	}
}
