//! Tunables of the world and of the interactive loop around it.

/// Physics constants and interaction steps of a [`PWorld`](crate::pworld::PWorld).
///
/// ```
/// use verlet::config::WorldConfig;
///
/// let config = WorldConfig::default()
/// 	.with_gravity(0.0)
/// 	.with_damping(1.0)
/// 	.with_iterations(8);
/// assert_eq!(config.iterations, 8);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
	/// Added to every free particle's y each frame.
	pub gravity: f32,
	/// Velocity factor per frame, 1.0 keeps all momentum.
	pub damping: f32,
	/// Fraction of the velocity kept when hitting the box.
	pub bounce: f32,
	pub width: f32,
	pub height: f32,
	/// Relaxation passes per frame.
	pub iterations: usize,
	/// Particle moved by the anchor drag.
	pub anchor: usize,
	/// Particle that is thrown, kicked and nudged; `None` is the last one.
	pub lead: Option<usize>,
	pub drag_step: f32,
	pub length_step: f32,
	pub kick: f32,
	/// Radius within which a click picks a particle.
	pub grab_radius: f32,
}

impl Default for WorldConfig {
	fn default() -> Self {
		Self {
			gravity: 2.0,
			damping: 0.999,
			bounce: 0.1,
			width: 640.,
			height: 480.,
			iterations: 120,
			anchor: 0,
			lead: None,
			drag_step: 10.,
			length_step: 2.,
			kick: 10.,
			grab_radius: 10.,
		}
	}
}

impl WorldConfig {
	pub fn with_gravity(mut self, gravity: f32) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn with_damping(mut self, damping: f32) -> Self {
		self.damping = damping;
		self
	}

	pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
		self.width = width;
		self.height = height;
		self
	}

	pub fn with_iterations(mut self, iterations: usize) -> Self {
		self.iterations = iterations;
		self
	}

	pub fn with_lead(mut self, lead: usize) -> Self {
		self.lead = Some(lead);
		self
	}
}

/// Settings of the frame loop that are not physics.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
	pub target_fps: i32,
	pub fps_step: i32,
	pub throw_force: f32,
	pub throw_step: f32,
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self {
			target_fps: 60,
			fps_step: 6,
			throw_force: 200.,
			throw_step: 5.,
		}
	}
}
