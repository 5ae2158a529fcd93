use crate::components::{BaseComponent, Counted, Payload, State, Tagged, TypeTag};
use crate::error::{ComponentError, ComponentResult};
use parking_lot::{RwLock, RwLockReadGuard};
use crate::names::{Name, NameRegistry};
use std::fmt::{Debug, Formatter};
use log::{debug, trace, warn};
use crate::identity::Id;
use std::any::Any;

/// The number of children a [Component] may own unless told otherwise.
pub const DEFAULT_CAPACITY: usize = 10;

/// A boxed child of a [Component].
pub type Child = Box<dyn BaseComponent>;

/// A [Component] without a payload, used to group other components.
pub type Group<const N: usize = DEFAULT_CAPACITY> = Component<(), N>;

/// A node of a component tree.
///
/// A [Component] carries a [Payload] of type `T`, owns at most `N` children and keeps a
/// [registry](NameRegistry) naming them. Children are initialized and updated in the order
/// they were added, and destroyed in the reverse order when their parent is dropped.
///
/// The [Id] is assigned by whoever builds the component and is only held, never released,
/// by the component itself.
pub struct Component<T: Payload, const N: usize = DEFAULT_CAPACITY> {
	id: Id,
	tag: TypeTag,
	state: State,
	hooked: bool,
	payload: T,
	children: Vec<Child>,
	names: RwLock<NameRegistry>,
	_counted: Counted<Self>,
}

impl<T: Payload, const N: usize> Component<T, N> {
	/// Creates a childless [Component].
	///
	/// # Arguments
	/// * `id` - The identity handed out by the caller's allocator
	/// * `payload` - The capability carried by the component
	pub fn new(id: Id, payload: T) -> Self {
		let mut component = Self {
			id,
			tag: TypeTag::UNTAGGED,
			state: State::Constructed,
			hooked: false,
			payload,
			children: Vec::new(),
			names: RwLock::new(NameRegistry::new()),
			_counted: Counted::new(),
		};

		component.set_type(T::type_tag());
		component
	}

	/// Creates a [Component] owning `children`, kept in iteration order.
	/// Fails with [CapacityExceeded](ComponentError::CapacityExceeded) when there are more than `N`.
	pub fn with_children(
		id: Id, payload: T, children: impl IntoIterator<Item = Child>,
	) -> ComponentResult<Self> {
		let mut component = Self::new(id, payload);
		for child in children {
			component.add_boxed(child)?;
		}
		Ok(component)
	}

	#[inline(always)]
	pub fn id(&self) -> Id {
		self.id
	}

	#[inline(always)]
	pub fn state(&self) -> State {
		self.state
	}

	pub fn payload(&self) -> &T {
		&self.payload
	}

	pub fn payload_mut(&mut self) -> &mut T {
		&mut self.payload
	}

	/// The number of children.
	pub fn len(&self) -> usize {
		self.children.len()
	}

	pub fn is_empty(&self) -> bool {
		self.children.is_empty()
	}

	/// The maximum number of children, `N`.
	pub const fn capacity(&self) -> usize {
		N
	}

	pub fn is_full(&self) -> bool {
		self.children.len() >= N
	}

	/// Resolves an identity.
	///
	/// With `lookup == false` this is the component's own [Id] and `key` is ignored.
	/// With `lookup == true`, `key` is searched among the [Ids](Id) of the name registry; the
	/// first registered entry bound to it wins. Fails with
	/// [NotFound](ComponentError::NotFound) when no entry is bound to `key`.
	pub fn the_id(&self, lookup: bool, key: Id) -> ComponentResult<Id> {
		if !lookup {
			return Ok(self.id);
		}
		self.lookup(key).map(|(_, id)| id)
	}

	/// The first registered entry bound to `key`, with the name that matched.
	pub fn lookup(&self, key: Id) -> ComponentResult<(Name, Id)> {
		match self.names.read().find_by_id(key) {
			Some((name, id)) => Ok((name.clone(), id)),
			None => Err(ComponentError::NotFound { key }),
		}
	}

	/// The [Id] registered under `name`.
	pub fn resolve_name(&self, name: &str) -> ComponentResult<Id> {
		self.names.read().get(name).ok_or_else(|| ComponentError::NameNotFound(Name::from(name)))
	}

	/// Binds `name` to `id` in this component's registry, returning the previously bound [Id].
	///
	/// The registry is locked for the duration of the call, so it may be shared across threads.
	pub fn register_name(&self, name: impl Into<Name>, id: Id) -> Option<Id> {
		self.names.write().insert(name.into(), id)
	}

	pub fn unregister_name(&self, name: &str) -> Option<Id> {
		self.names.write().remove(name)
	}

	/// Read access to the name registry. Writers are blocked while the guard is alive.
	pub fn names(&self) -> RwLockReadGuard<'_, NameRegistry> {
		self.names.read()
	}

	/// Adds `child` after the existing children.
	///
	/// A rejected child is dropped. Use [try_add_boxed](Component::try_add_boxed) to get it back.
	pub fn add_child<C: BaseComponent>(&mut self, child: C) -> ComponentResult<Id> {
		self.add_boxed(Box::new(child))
	}

	/// Adds an already boxed `child` after the existing children.
	pub fn add_boxed(&mut self, child: Child) -> ComponentResult<Id> {
		self.try_add_boxed(child).map_err(|(error, _)| error)
	}

	/// Adds `child` after the existing children, handing it back together with the error
	/// when it is rejected.
	pub fn try_add_boxed(&mut self, child: Child) -> Result<Id, (ComponentError, Child)> {
		if self.is_full() {
			return Err((self.capacity_exceeded(), child));
		}

		let id = child.id();
		if self.children.iter().any(|c| c.id() == id) {
			return Err((ComponentError::DuplicateChild { id }, child));
		}

		debug!("Attached {} {} to {}", child.kind_name(), id, self.id);
		self.children.push(child);
		Ok(id)
	}

	/// Adds `child` and registers it as `name`.
	pub fn add_named_child<C: BaseComponent>(
		&mut self, name: impl Into<Name>, child: C,
	) -> ComponentResult<Id> {
		let id = self.add_child(child)?;
		self.names.get_mut().insert(name.into(), id);
		Ok(id)
	}

	/// Detaches the child `id`, freeing its slot and dropping every name bound to it.
	pub fn remove_child(&mut self, id: Id) -> ComponentResult<Child> {
		let position = self
			.children
			.iter()
			.position(|c| c.id() == id)
			.ok_or(ComponentError::NotFound { key: id })?;

		self.names.get_mut().remove_id(id);
		let child = self.children.remove(position);
		debug!("Detached {} {} from {}", child.kind_name(), id, self.id);
		Ok(child)
	}

	/// Destroys every child, most recently added first.
	pub fn clear(&mut self) {
		self.delete_all();
	}

	/// The children, in insertion order.
	pub fn children(&self) -> impl Iterator<Item = &dyn BaseComponent> + '_ {
		self.children.iter().map(|c| &**c as &dyn BaseComponent)
	}

	pub fn child(&self, id: Id) -> Option<&dyn BaseComponent> {
		self.children.iter().find(|c| c.id() == id).map(|c| &**c)
	}

	pub fn child_mut(&mut self, id: Id) -> Option<&mut (dyn BaseComponent + 'static)> {
		self.children.iter_mut().find(|c| c.id() == id).map(|c| &mut **c)
	}

	/// The child registered as `name`.
	pub fn child_by_name(&self, name: &str) -> Option<&dyn BaseComponent> {
		let id = self.names.read().get(name)?;
		self.child(id)
	}

	/// The child `id`, if it is a `Component<U, M>`.
	pub fn child_as<U: Payload, const M: usize>(&self, id: Id) -> Option<&Component<U, M>> {
		self.child(id)?.as_any().downcast_ref()
	}

	/// The child `id`, if it is a `Component<U, M>`.
	pub fn child_as_mut<U: Payload, const M: usize>(&mut self, id: Id) -> Option<&mut Component<U, M>> {
		self.child_mut(id)?.as_any_mut().downcast_mut()
	}

	/// The children whose payload type is `U`, in insertion order.
	pub fn children_of_kind<U: Tagged>(&self) -> impl Iterator<Item = &dyn BaseComponent> + '_ {
		let tag = U::type_tag();
		self.children().filter(move |c| c.type_tag() == tag)
	}

	fn init_tree(&mut self) -> ComponentResult<()> {
		let id = self.id;
		// The hook runs once; a retry only revisits the children.
		if !self.hooked {
			self.payload.init_pro(id).map_err(|e| ComponentError::InitializationFailed {
				id,
				failed: id,
				reason: e.reason().to_owned(),
			})?;
			self.hooked = true;
		}

		// Children that are already ready were initialized on their own or by an earlier attempt.
		for child in self.children.iter_mut().filter(|c| !c.is_ready()) {
			let child_id = child.id();
			child.init().map_err(|e| match e {
				ComponentError::InitializationFailed { failed, reason, .. } => {
					ComponentError::InitializationFailed { id, failed, reason }
				},
				other => ComponentError::InitializationFailed {
					id,
					failed: child_id,
					reason: other.to_string(),
				},
			})?;
		}

		Ok(())
	}

	fn delete_all(&mut self) {
		let names = self.names.get_mut();
		while let Some(child) = self.children.pop() {
			names.remove_id(child.id());
			trace!("Destroying {} {} owned by {}", child.kind_name(), child.id(), self.id);
		}
	}

	fn set_type(&mut self, tag: TypeTag) {
		self.tag = tag;
	}

	fn capacity_exceeded(&self) -> ComponentError {
		warn!("Rejected child of {} {}: capacity {} reached", T::kind_name(), self.id, N);
		ComponentError::CapacityExceeded {
			id: self.id,
			capacity: N,
		}
	}
}

impl<T: Payload, const N: usize> BaseComponent for Component<T, N> {
	fn init(&mut self) -> ComponentResult<()> {
		if self.state == State::Ready {
			return Err(ComponentError::AlreadyInitialized { id: self.id });
		}

		match self.init_tree() {
			Ok(()) => {
				self.state = State::Ready;
				debug!("Initialized {} {}", T::kind_name(), self.id);
				Ok(())
			},
			Err(error) => {
				self.state = State::Failed;
				warn!("Failed to initialize {} {}: {}", T::kind_name(), self.id, error);
				Err(error)
			},
		}
	}

	fn update(&mut self) {
		if self.state != State::Ready {
			trace!("Skipped update of {:?} {} {}", self.state, T::kind_name(), self.id);
			return;
		}

		self.payload.update(self.id);
		self.children.iter_mut().for_each(|c| c.update());
	}

	#[inline(always)]
	fn id(&self) -> Id {
		self.id
	}

	#[inline(always)]
	fn state(&self) -> State {
		self.state
	}

	#[inline(always)]
	fn type_tag(&self) -> TypeTag {
		self.tag
	}

	fn kind_name(&self) -> &'static str {
		T::kind_name()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}

impl<T: Payload, const N: usize> Drop for Component<T, N> {
	fn drop(&mut self) {
		self.delete_all();
		debug!("Destroyed {} {}", T::kind_name(), self.id);
	}
}

impl<T: Payload, const N: usize> Debug for Component<T, N> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Component")
			.field("id", &self.id)
			.field("kind", &T::kind_name())
			.field("state", &self.state)
			.field("children", &self.children.len())
			.finish()
	}
}
