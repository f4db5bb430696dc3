use crate::particle::Particle;
use crate::stick::Stick;
use crate::V2;

/// Initial pose of a rope, turned into particles and sticks by the world.
#[derive(Clone, Debug, Default)]
pub struct RopeTemplate {
	pub particles: Vec<Particle>,
}

impl RopeTemplate {
	/// `count` particles hanging straight down from `top`, the first pinned.
	pub fn new_vertical(top: V2, count: usize, spacing: f32) -> Self {
		let particles = (0..count)
			.map(|idx| {
				let p = Particle::new(top + V2::new(0., spacing * idx as f32));
				if idx == 0 {
					p.pinned()
				} else {
					p
				}
			})
			.collect();
		Self { particles }
	}

	/// Give particle `idx` a starting velocity by moving its previous
	/// position to `ppos`.
	pub fn with_ppos(mut self, idx: usize, ppos: V2) -> Self {
		if let Some(p) = self.particles.get_mut(idx) {
			p.ppos = ppos;
		}
		self
	}

	/// The rope the viewer starts with: 11 particles hanging from (320, 210),
	/// three of them already swinging sideways.
	pub fn default_pose() -> Self {
		Self::new_vertical(V2::new(320., 210.), 11, 20.)
			.with_ppos(4, V2::new(300., 290.))
			.with_ppos(8, V2::new(300., 370.))
			.with_ppos(10, V2::new(350., 410.))
	}

	/// Sticks linking each particle to the next, at their current distance.
	pub fn build_sticks(&self) -> Vec<Stick> {
		(1..self.particles.len())
			.map(|idx| Stick::new(&self.particles, idx - 1, idx))
			.collect()
	}
}
