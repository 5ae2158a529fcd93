use crate::identity::{Id, IdAllocator};
use rand::prelude::SliceRandom;
use rand::thread_rng;

#[test]
pub fn sequential_allocation() {
	let mut ids = IdAllocator::new();

	for i in 0..16 {
		let id = ids.allocate();

		assert_eq!(id, Id::from_raw(i, 1), "Allocated id does not match expected id");
		assert_eq!((i + 1) as usize, ids.live(), "Live count does not match expected count");
		assert!(ids.is_alive(id), "Freshly allocated id is not alive");
	}
}

#[test]
pub fn reserved_allocators_start_empty() {
	let mut ids = IdAllocator::with_capacity(32);
	assert_eq!(0, ids.live(), "Reserving space should not allocate ids");
	assert_eq!(0, ids.capacity(), "Reserving space should not hand out indices");

	let first = ids.allocate();
	assert_eq!(Id::from_raw(0, 1), first, "Reserved allocator does not start at index 0");
	ids.free(first);
	assert_eq!(Id::from_raw(0, 2), ids.allocate(), "Reused index was not versioned");
}

#[test]
pub fn released_indices_are_reused_lowest_first() {
	let mut ids = IdAllocator::new();
	let all = ids.allocate_many(8);

	ids.free(all[5]);
	ids.free(all[2]);
	assert_eq!(6, ids.live());

	assert_eq!(ids.allocate(), Id::from_raw(2, 2));
	assert_eq!(ids.allocate(), Id::from_raw(5, 2));
	assert_eq!(ids.allocate(), Id::from_raw(8, 1));
	assert_eq!(9, ids.capacity());
}

#[test]
pub fn fragmented_release_never_revives_stale_ids() {
	let count = 1024;

	let mut ids = IdAllocator::new();
	let mut old = ids.allocate_many(count);
	old.shuffle(&mut thread_rng());

	for (i, id) in old.iter().enumerate() {
		ids.free(*id);
		assert_eq!(count - i - 1, ids.live(), "Live count does not match expected count");
	}

	let new = ids.allocate_many(count);
	assert_eq!(count, ids.capacity(), "Released indices were not reused");

	for id in old.iter() {
		assert!(!ids.is_alive(*id), "Stale id {} is still alive", id);
		assert!(!new.contains(id), "Stale id {} was handed out again", id);
	}
	assert!(new.iter().all(|id| ids.is_alive(*id)));
}

#[test]
pub fn default_id_is_never_alive() {
	let mut ids = IdAllocator::new();
	assert!(!ids.is_alive(Id::default()));

	ids.allocate_many(4);
	assert!(!ids.is_alive(Id::default()));
}

#[test]
#[should_panic(expected = "Id has already been released")]
pub fn double_release_panics() {
	let mut ids = IdAllocator::new();
	let id = ids.allocate();
	ids.free(id);
	ids.free(id);
}

#[test]
#[should_panic(expected = "was never allocated")]
pub fn releasing_unknown_id_panics() {
	let mut ids = IdAllocator::new();
	ids.free(Id::from_raw(3, 1));
}
