/// Loop state shown next to the rope every frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateInfo {
	pub target_fps: i32,
	pub throw_force: f32,
	pub paused: bool,
	pub elapsed: f32,
	// sticks skipped by the last frame's relaxation passes
	pub degenerate: usize,
}
