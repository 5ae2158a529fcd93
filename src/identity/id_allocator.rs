use std::collections::BTreeSet;
use crate::identity::Id;

/// Hands out unique [Ids](Id) and recycles released ones.
///
/// Released indices are reused lowest-first, and every release bumps the index's version,
/// so a stale [Id] never compares equal to the one that replaced it.
#[derive(Default)]
pub struct IdAllocator {
	versions: Vec<u32>,
	free: BTreeSet<u32>,
}

impl IdAllocator {
	/// Create a new [IdAllocator].
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a new [IdAllocator] with room for `capacity` ids before reallocating.
	///
	/// # Arguments
	/// * `capacity` - The number of ids to reserve space for
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			versions: Vec::with_capacity(capacity),
			free: BTreeSet::new(),
		}
	}

	/// Allocate a fresh [Id].
	pub fn allocate(&mut self) -> Id {
		match self.free.pop_first() {
			Some(index) => Id {
				index,
				version: self.versions[index as usize],
			},
			None => {
				let index = self.versions.len();
				assert!(index < u32::MAX as usize, "Id space exhausted");
				self.versions.push(1);
				Id {
					index: index as u32,
					version: 1,
				}
			},
		}
	}

	/// Allocate `count` fresh [Ids](Id), in allocation order.
	pub fn allocate_many(&mut self, count: usize) -> Vec<Id> {
		(0..count).map(|_| self.allocate()).collect()
	}

	/// Return an [Id] to the allocator.
	/// This function will panic if `id` is stale or was never handed out.
	///
	/// # Arguments
	/// * `id` - The id to release. The component holding it must already be destroyed.
	pub fn free(&mut self, id: Id) {
		let index = id.index as usize;
		assert!(index < self.versions.len(), "Id {} was never allocated", id);

		let current = self.versions[index];
		assert_id_version(id.version, current);
		assert_id_not_free(self.free.contains(&id.index));

		// Version 0 is reserved for `Id::default()`.
		let next = match current.wrapping_add(1) {
			0 => 1,
			v => v,
		};
		self.versions[index] = next;
		self.free.insert(id.index);
	}

	/// Whether `id` is currently allocated.
	pub fn is_alive(&self, id: Id) -> bool {
		match self.versions.get(id.index as usize) {
			Some(version) => *version == id.version && !self.free.contains(&id.index),
			None => false,
		}
	}

	/// The number of ids currently allocated.
	pub fn live(&self) -> usize {
		self.versions.len() - self.free.len()
	}

	/// The number of distinct indices ever handed out.
	pub fn capacity(&self) -> usize {
		self.versions.len()
	}
}

#[inline(always)]
fn assert_id_version(id: u32, current: u32) {
	#[cfg(not(feature = "debug_only_assertions"))]
	assert_eq!(id, current, "Id has already been released");

	#[cfg(feature = "debug_only_assertions")]
	debug_assert_eq!(id, current, "Id has already been released");
}

#[inline(always)]
fn assert_id_not_free(free: bool) {
	#[cfg(not(feature = "debug_only_assertions"))]
	assert!(!free, "Id has already been released");

	#[cfg(feature = "debug_only_assertions")]
	debug_assert!(!free, "Id has already been released");
}
