use crate::components::{State, TypeTag};
use crate::error::ComponentResult;
use crate::identity::Id;
use std::any::Any;

/// The lifecycle contract shared by every node of a tree.
///
/// Drivers and parents hold children as `Box<dyn BaseComponent>` and never need their concrete
/// type. Teardown is [Drop]: a component releases everything it owns when it is dropped.
pub trait BaseComponent: Any + Send + Sync {
	/// Prepares the component, and everything it owns, for [updates](BaseComponent::update).
	///
	/// Calling it on a [ready](State::Ready) component fails with
	/// [AlreadyInitialized](crate::error::ComponentError::AlreadyInitialized).
	fn init(&mut self) -> ComponentResult<()>;

	/// Advances the component by one tick.
	fn update(&mut self);

	fn id(&self) -> Id;

	fn state(&self) -> State;

	fn type_tag(&self) -> TypeTag;

	fn kind_name(&self) -> &'static str;

	fn as_any(&self) -> &dyn Any;

	fn as_any_mut(&mut self) -> &mut dyn Any;

	#[inline(always)]
	fn is_ready(&self) -> bool {
		self.state() == State::Ready
	}
}
