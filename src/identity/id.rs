use std::fmt::{Display, Formatter};

/// A unique handle to a [Component](crate::tree::Component).
///
/// The default handle (version `0`) is never produced by [IdAllocator](crate::identity::IdAllocator).
#[derive(Default, Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct Id {
	pub(crate) index: u32,
	pub(crate) version: u32,
}

impl Id {
	/// Builds a handle from its raw parts, for use by external allocators.
	pub const fn from_raw(index: u32, version: u32) -> Self {
		Self { index, version }
	}

	#[inline(always)]
	pub const fn index(&self) -> u32 {
		self.index
	}

	#[inline(always)]
	pub const fn version(&self) -> u32 {
		self.version
	}
}

impl Display for Id {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}v{}", self.index, self.version)
	}
}
