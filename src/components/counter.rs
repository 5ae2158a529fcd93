//! Process-wide live instance counters, one per concrete component type.
//!
//! A counter is created at zero the first time its type is touched and lives for the rest of
//! the process. Nothing resets it implicitly; tests that need a clean slate call
//! [Counter::reset].

use std::sync::atomic::{AtomicUsize, Ordering};
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use lazy_static::lazy_static;
use std::marker::PhantomData;
use parking_lot::RwLock;
use std::any::TypeId;
use std::sync::Arc;

type Hasher = BuildHasherDefault<NoHashHasher<u64>>;

lazy_static! {
	static ref COUNTERS: RwLock<HashMap<TypeId, Arc<KindCounter>, Hasher>> =
		RwLock::new(HashMap::default());
}

struct KindCounter {
	name: &'static str,
	live: AtomicUsize,
}

/// Live instance count of the type `C`.
///
/// Only exact types are counted: `Counter<Component<Camera, 4>>` and
/// `Counter<Component<Camera, 8>>` are distinct.
pub struct Counter<C: 'static> {
	phantom: PhantomData<fn() -> C>,
}

impl<C: 'static> Counter<C> {
	/// The number of live instances of `C`.
	pub fn count() -> usize {
		let counters = COUNTERS.read();
		match counters.get(&TypeId::of::<C>()) {
			Some(counter) => counter.live.load(Ordering::Acquire),
			None => 0,
		}
	}

	/// Sets the count of `C` back to zero.
	pub fn reset() {
		if let Some(counter) = COUNTERS.read().get(&TypeId::of::<C>()) {
			counter.live.store(0, Ordering::Release);
		}
	}

	fn increment() {
		slot::<C>().live.fetch_add(1, Ordering::AcqRel);
	}

	fn decrement() {
		// Saturates so that a reset while instances are alive never wraps around.
		let _ = slot::<C>().live.fetch_update(Ordering::AcqRel, Ordering::Acquire, |live| {
			Some(live.saturating_sub(1))
		});
	}
}

/// A zero sized guard counting one live instance of `C`.
///
/// Embed it in a type to have [Counter] track it: the count goes up when the guard is built
/// and down when it is dropped.
pub struct Counted<C: 'static> {
	phantom: PhantomData<fn() -> C>,
}

impl<C: 'static> Counted<C> {
	pub fn new() -> Self {
		Counter::<C>::increment();
		Self { phantom: PhantomData }
	}
}

impl<C: 'static> Default for Counted<C> {
	fn default() -> Self {
		Self::new()
	}
}

impl<C: 'static> Drop for Counted<C> {
	fn drop(&mut self) {
		Counter::<C>::decrement();
	}
}

/// Names and live counts of every type counted so far, sorted by name.
pub fn snapshot() -> Vec<(&'static str, usize)> {
	let mut counts = COUNTERS
		.read()
		.values()
		.map(|c| (c.name, c.live.load(Ordering::Acquire)))
		.collect::<Vec<_>>();
	counts.sort_unstable();
	counts
}

fn slot<C: 'static>() -> Arc<KindCounter> {
	let key = TypeId::of::<C>();
	if let Some(counter) = COUNTERS.read().get(&key) {
		return counter.clone();
	}

	COUNTERS
		.write()
		.entry(key)
		.or_insert_with(|| {
			Arc::new(KindCounter {
				name: std::any::type_name::<C>(),
				live: AtomicUsize::new(0),
			})
		})
		.clone()
}
