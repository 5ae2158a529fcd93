//! Plays the part of an external driver: builds a small scene, initializes it and runs a
//! handful of ticks.
//!
//! Run with `RUST_LOG=debug` to watch the tree being built, updated and torn down.

use component_tree::components::counter;
use component_tree::prelude::*;

#[derive(Tagged)]
struct Scene {
	frame: u64,
}

impl Payload for Scene {
	fn update(&mut self, id: Id) {
		self.frame += 1;
		log::info!("Scene {} frame {}", id, self.frame);
	}
}

#[derive(Tagged)]
struct Spinner {
	angle: f32,
	speed: f32,
}

impl Payload for Spinner {
	fn init_pro(&mut self, _id: Id) -> Result<(), InitError> {
		if self.speed == 0.0 {
			return Err("a spinner must spin".into());
		}
		Ok(())
	}

	fn update(&mut self, id: Id) {
		self.angle = (self.angle + self.speed) % 360.0;
		log::debug!("Spinner {} at {:.1} degrees", id, self.angle);
	}
}

#[derive(Tagged)]
struct Light {
	intensity: f32,
}

impl Payload for Light {}

fn main() -> Result<(), ComponentError> {
	env_logger::init();

	let mut ids = IdAllocator::new();
	let mut scene = tree!(ids, Scene { frame: 0 }, capacity = 4, [
		"fan" => tree!(ids, Spinner { angle: 0.0, speed: 12.5 })?,
		"lights" => tree!(ids, (), [
			"sun" => tree!(ids, Light { intensity: 1.0 })?,
			"lamp" => tree!(ids, Light { intensity: 0.3 })?,
		])?,
	])?;

	scene.init()?;
	for _ in 0..3 {
		scene.update();
	}

	let fan = scene.resolve_name("fan")?;
	println!("fan resolves to {} ({})", fan, scene.the_id(true, fan)?);

	let lights = scene.resolve_name("lights")?;
	if let Some(lights) = scene.child_as::<(), DEFAULT_CAPACITY>(lights) {
		let total = lights
			.children()
			.filter_map(|c| c.as_any().downcast_ref::<Component<Light>>())
			.map(|l| l.payload().intensity)
			.sum::<f32>();
		println!("{} lights, total intensity {:.1}", lights.len(), total);
	}

	// A broken part is reported, the rest of the scene keeps going.
	let broken = scene.add_named_child("broken", tree!(ids, Spinner { angle: 0.0, speed: 0.0 })?)?;
	if let Some(part) = scene.child_mut(broken) {
		if let Err(error) = part.init() {
			println!("{}", error);
		}
	}
	scene.update();

	for (kind, live) in counter::snapshot() {
		println!("{:>3} live {}", live, kind);
	}

	drop(scene);
	println!("{} live scenes after teardown", Counter::<Component<Scene, 4>>::count());
	Ok(())
}
