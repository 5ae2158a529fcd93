//! Errors raised by the component tree.

use crate::identity::Id;
use crate::names::Name;
use thiserror::Error;

/// Errors that can occur while building, initializing or querying a tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComponentError {
	/// A component, or one of its descendants, failed to prepare.
	#[error("component {id} failed to initialize: {failed} reported \"{reason}\"")]
	InitializationFailed {
		/// The component whose `init()` was called.
		id: Id,
		/// The component whose own initialization failed.
		failed: Id,
		reason: String,
	},

	/// Adding a child would exceed the component's capacity.
	#[error("component {id} is full: capacity {capacity}")]
	CapacityExceeded { id: Id, capacity: usize },

	/// No registry entry or child resolved to the key.
	#[error("no component resolves to {key}")]
	NotFound { key: Id },

	/// `init()` was called on a component that is already ready.
	#[error("component {id} is already initialized")]
	AlreadyInitialized { id: Id },

	/// No registry entry carries the name.
	#[error("no component is registered as \"{0}\"")]
	NameNotFound(Name),

	/// A child with the same id is already owned by the component.
	#[error("component {id} is already a child")]
	DuplicateChild { id: Id },
}

/// Result type for component operations.
pub type ComponentResult<T> = Result<T, ComponentError>;

/// The failure reported by a [Payload](crate::components::Payload) hook.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct InitError(String);

impl InitError {
	pub fn new(reason: impl Into<String>) -> Self {
		Self(reason.into())
	}

	pub fn reason(&self) -> &str {
		&self.0
	}
}

impl From<&str> for InitError {
	fn from(reason: &str) -> Self {
		Self(reason.to_owned())
	}
}

impl From<String> for InitError {
	fn from(reason: String) -> Self {
		Self(reason)
	}
}
