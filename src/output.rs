/// Appends instruction bytes to the growing machine-code image.
pub trait Sink {
	fn emit_byte(&mut self, byte: u8);
}

/// Read access to bytes already written to the image.
///
/// Unwritten locations read as zero.
pub trait Memory {
	fn read_byte(&self, address: u32) -> u8;
}

/// Memory image that is both written and inspected during encoding.
pub trait Image: Sink + Memory {
	fn as_memory(&self) -> &dyn Memory;
}

impl<T: Sink + Memory> Image for T {
	fn as_memory(&self) -> &dyn Memory {
		self
	}
}
