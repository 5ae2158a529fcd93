//! A unique runtime tag tied to a [Tagged] payload type.
//!
//! Developers shouldn't rely on [type tags](TypeTag), as they are not stable between program re-runs.
//! Tags are used to categorize the children of a [Component](crate::tree::Component)
//! without downcasting each of them.

use std::sync::atomic::Ordering::Relaxed;
use std::sync::atomic::AtomicUsize;
use lazy_static::lazy_static;

static NEXT_TAG: AtomicUsize = AtomicUsize::new(1);

lazy_static! {
	static ref UNIT_TAG: TypeTag = next_tag();
}

/// A globally unique tag for a type implementing the [`Tagged`] trait.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct TypeTag {
	value: usize,
}

impl TypeTag {
	/// Carried by nodes that haven't been associated with a payload type yet.
	pub const UNTAGGED: TypeTag = TypeTag { value: 0 };

	/// Get the [TypeTag] of the type `T`.
	#[inline(always)]
	pub fn of<T: Tagged>() -> TypeTag {
		T::type_tag()
	}

	#[inline(always)]
	pub const fn value(&self) -> usize {
		self.value
	}
}

/// Associates a payload type with its [TypeTag].
/// Usually implemented through #\[derive([`Tagged`](component_tree_derive::Tagged))].
pub trait Tagged: 'static {
	fn type_tag() -> TypeTag;

	/// A human readable name for the payload type, used in logs.
	fn kind_name() -> &'static str {
		std::any::type_name::<Self>()
	}
}

impl Tagged for () {
	fn type_tag() -> TypeTag {
		*UNIT_TAG
	}

	fn kind_name() -> &'static str {
		"Group"
	}
}

/// Generates a new [TypeTag]. **Should not be called from user code.**
///
/// To be called from code generated by #\[derive([`Tagged`](component_tree_derive::Tagged))].
#[doc(hidden)]
pub fn next_tag() -> TypeTag {
	let value = NEXT_TAG.fetch_add(1, Relaxed);
	debug_assert!(
		value <= u32::MAX as usize,
		"This is an insane number of payload types. Please seek help."
	);
	TypeTag { value }
}
