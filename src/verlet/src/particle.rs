use crate::V2;
use protocol::pr_model::PrParticle;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub pos: V2,
	// the velocity is implicit: pos - ppos
	pub ppos: V2,
	pub pinned: bool,
}

impl Particle {
	pub fn new(pos: V2) -> Self {
		Self {
			pos,
			ppos: pos,
			pinned: false,
		}
	}

	pub fn with_ppos(mut self, ppos: V2) -> Self {
		self.ppos = ppos;
		self
	}

	pub fn pinned(mut self) -> Self {
		self.pinned = true;
		self
	}

	pub fn velocity(&self, damping: f32) -> V2 {
		(self.pos - self.ppos) * damping
	}

	/// Position correction from the solver; pinned particles ignore it.
	pub fn add_pos(&mut self, dp: V2) {
		if !self.pinned {
			self.pos += dp;
		}
	}

	/// Teleport to `p` with zero velocity.
	pub fn reset_pos(&mut self, p: V2) {
		self.pos = p;
		self.ppos = p;
	}

	/// Shift the previous position, which the next update turns into a
	/// velocity change of `-dp`.
	pub fn push(&mut self, dp: V2) {
		self.ppos += dp;
	}

	pub fn update(&mut self, damping: f32, gravity: f32) {
		if self.pinned {
			return;
		}
		let v = self.velocity(damping);
		self.ppos = self.pos;
		self.pos += v;
		self.pos[1] += gravity;
	}

	pub fn render(&self) -> PrParticle {
		PrParticle {
			pos: [self.pos[0], self.pos[1]],
			pinned: self.pinned,
		}
	}
}
