use std::time::Instant;

use verlet::config::WorldConfig;
use verlet::pworld::PWorld;
use verlet::rope::RopeTemplate;
use verlet::V2;

fn main() {
	let mut pworld = PWorld::new(WorldConfig::default());
	pworld.set_rope(RopeTemplate::default_pose());
	pworld.throw(10, V2::new(600., 40.), 200.);
	let start = Instant::now();
	let rframes = 10_000;
	for _ in 0..rframes {
		pworld.run_frame();
	}
	let duration = start.elapsed().as_micros();
	eprintln!("{:.3}us per frame", duration as f32 / rframes as f32);
}
