use std::hash::Hash;
use std::collections::HashMap;
use crate::identity::Id;
use crate::names::Name;
use std::borrow::Borrow;

/// Maps names to [Ids](Id), remembering the order in which names were registered.
///
/// Names are unique keys but several names may point at the same [Id].
/// Name lookups are hashed; lookups by [Id] walk the entries in registration order.
pub struct NameRegistry<K: Hash + Eq + Clone = Name> {
	entries: Vec<(K, Id)>,
	index: HashMap<K, usize>,
}

impl<K: Hash + Eq + Clone> NameRegistry<K> {
	/// Create a new [NameRegistry].
	pub fn new() -> Self {
		Self {
			entries: Vec::new(),
			index: HashMap::new(),
		}
	}

	/// Binds `name` to `id`.
	///
	/// Rebinding an existing name keeps its original registration slot and returns the
	/// previously bound [Id].
	pub fn insert(&mut self, name: K, id: Id) -> Option<Id> {
		match self.index.get(&name) {
			Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, id)),
			None => {
				self.index.insert(name.clone(), self.entries.len());
				self.entries.push((name, id));
				None
			},
		}
	}

	/// Resolves `name` without scanning.
	pub fn get<Q>(&self, name: &Q) -> Option<Id>
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.index.get(name).map(|&position| self.entries[position].1)
	}

	pub fn contains<Q>(&self, name: &Q) -> bool
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.index.contains_key(name)
	}

	/// The first entry bound to `id`, in slot order.
	///
	/// A rebound name keeps the slot of its first registration, so it still precedes names
	/// registered after it.
	pub fn find_by_id(&self, id: Id) -> Option<(&K, Id)> {
		self.entries.iter().find(|(_, v)| *v == id).map(|(k, v)| (k, *v))
	}

	/// Unbinds `name`, returning the [Id] it was bound to.
	pub fn remove<Q>(&mut self, name: &Q) -> Option<Id>
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		let position = self.index.remove(name)?;
		let (_, id) = self.entries.remove(position);
		for slot in self.index.values_mut() {
			if *slot > position {
				*slot -= 1;
			}
		}
		Some(id)
	}

	/// Unbinds every name bound to `id`, returning how many were removed.
	pub fn remove_id(&mut self, id: Id) -> usize {
		let before = self.entries.len();
		self.retain(|_, v| v != id);
		before - self.entries.len()
	}

	/// Keeps only the entries for which `keep` returns true, preserving their order.
	pub fn retain(&mut self, mut keep: impl FnMut(&K, Id) -> bool) {
		let before = self.entries.len();
		self.entries.retain(|(k, v)| keep(k, *v));
		if self.entries.len() != before {
			self.reindex();
		}
	}

	/// Iterate over the entries in registration order.
	pub fn iter(&self) -> impl Iterator<Item = (&K, Id)> {
		self.entries.iter().map(|(k, v)| (k, *v))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn clear(&mut self) {
		self.entries.clear();
		self.index.clear();
	}

	fn reindex(&mut self) {
		self.index.clear();
		for (position, (k, _)) in self.entries.iter().enumerate() {
			self.index.insert(k.clone(), position);
		}
	}
}

impl<K: Hash + Eq + Clone> Default for NameRegistry<K> {
	fn default() -> Self {
		Self::new()
	}
}
