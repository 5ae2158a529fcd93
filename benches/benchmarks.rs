use component_tree::prelude::*;
use criterion::*;

const WIDTH: usize = 8;

#[derive(Default, Tagged)]
struct Transform {
	position: [f32; 3],
	velocity: [f32; 3],
}

impl Payload for Transform {
	fn update(&mut self, _id: Id) {
		for i in 0..3 {
			self.position[i] += self.velocity[i];
		}
	}
}

/// A tree `depth` levels deep where every inner node has `WIDTH` children.
fn build(ids: &mut IdAllocator, depth: usize) -> Component<Transform, WIDTH> {
	let mut node = Component::new(ids.allocate(), Transform::default());
	if depth > 0 {
		for _ in 0..WIDTH {
			node.add_child(build(ids, depth - 1)).unwrap();
		}
	}
	node
}

fn build_trees(c: &mut Criterion) {
	c.bench_function("Build tree", |b| {
		b.iter_batched(
			|| IdAllocator::with_capacity(1 + WIDTH + WIDTH * WIDTH + WIDTH * WIDTH * WIDTH),
			|mut ids| build(&mut ids, 3),
			BatchSize::PerIteration,
		);
	});
}

fn update_trees(c: &mut Criterion) {
	c.bench_function("Update tree", |b| {
		let mut ids = IdAllocator::new();
		let mut root = build(&mut ids, 3);
		root.init().unwrap();

		b.iter(|| root.update());
	});
}

fn destroy_trees(c: &mut Criterion) {
	c.bench_function("Destroy tree", |b| {
		b.iter_batched(
			|| build(&mut IdAllocator::new(), 3),
			drop,
			BatchSize::PerIteration,
		);
	});
}

fn resolve_names(c: &mut Criterion) {
	let mut group = c.benchmark_group("Resolve names");
	let mut ids = IdAllocator::new();
	let mut root = Component::<Transform, 64>::new(ids.allocate(), Transform::default());
	for i in 0..64 {
		let child = Component::<Transform, 1>::new(ids.allocate(), Transform::default());
		root.add_named_child(format!("child{}", i), child).unwrap();
	}
	let last = root.resolve_name("child63").unwrap();

	group.bench_function("By name", |b| b.iter(|| root.resolve_name(black_box("child63"))));
	group.bench_function("By id", |b| b.iter(|| root.the_id(true, black_box(last))));
	group.finish();
}

criterion_group!(benches, build_trees, update_trees, destroy_trees, resolve_names);
criterion_main!(benches);
