use std::fmt::{Display, Formatter};
use std::borrow::Borrow;
use std::sync::Arc;

/// A cheaply clonable symbolic name.
#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct Name(Arc<str>);

impl Name {
	pub fn new(name: impl AsRef<str>) -> Self {
		Self(Arc::from(name.as_ref()))
	}

	#[inline(always)]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for Name {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for Name {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<&str> for Name {
	fn from(name: &str) -> Self {
		Self(Arc::from(name))
	}
}

impl From<String> for Name {
	fn from(name: String) -> Self {
		Self(Arc::from(name))
	}
}

impl From<&Name> for Name {
	fn from(name: &Name) -> Self {
		name.clone()
	}
}

impl Display for Name {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}
