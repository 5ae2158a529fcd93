extern crate self as component_tree;

pub mod tree;
pub mod error;
pub mod names;
pub mod identity;
pub mod components;

#[doc(hidden)]
pub use lazy_static::lazy_static;

pub mod prelude {
	pub use crate::tree;
	pub use crate::names::{Name, NameRegistry};
	pub use crate::identity::{Id, IdAllocator};
	pub use crate::error::{ComponentError, ComponentResult, InitError};
	pub use crate::tree::{Child, Component, Group, DEFAULT_CAPACITY};
	pub use crate::components::{BaseComponent, Counted, Counter, Payload, State, Tagged, TypeTag};
}

#[cfg(test)]
mod tests;
