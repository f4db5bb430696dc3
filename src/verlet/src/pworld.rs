use crate::config::WorldConfig;
use crate::geometry::{direction, distance};
use crate::particle::Particle;
use crate::posbox::PosBox;
use crate::rope::RopeTemplate;
use crate::stick::Stick;
use crate::V2;
use protocol::input::Direction;
use protocol::pr_model::PrModel;

/// A single rope: particles, the sticks between them and the box they live
/// in.
pub struct PWorld {
	config: WorldConfig,
	posbox: PosBox,
	particles: Vec<Particle>,
	sticks: Vec<Stick>,
	// skipped stick steps of the last frame
	skipped: usize,
}

impl Default for PWorld {
	fn default() -> Self {
		Self::new(WorldConfig::default())
	}
}

impl PWorld {
	pub fn new(config: WorldConfig) -> Self {
		let posbox = PosBox::new(config.width, config.height, config.bounce);
		Self {
			config,
			posbox,
			particles: Vec::new(),
			sticks: Vec::new(),
			skipped: 0,
		}
	}

	/// Replace the current rope with one built from `template`.
	pub fn set_rope(&mut self, template: RopeTemplate) {
		self.sticks = template.build_sticks();
		self.particles = template.particles;
		eprintln!(
			"INFO: rope with {} particles, {} sticks",
			self.particles.len(),
			self.sticks.len()
		);
	}

	pub fn config(&self) -> &WorldConfig {
		&self.config
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn sticks(&self) -> &[Stick] {
		&self.sticks
	}

	pub fn lead(&self) -> Option<usize> {
		match self.config.lead {
			Some(idx) if idx < self.particles.len() => Some(idx),
			Some(_) => None,
			None => self.particles.len().checked_sub(1),
		}
	}

	#[cfg(not(debug_assertions))]
	pub fn update_particles(&mut self) {
		use rayon::prelude::*;
		let (damping, gravity) = (self.config.damping, self.config.gravity);
		self.particles
			.par_iter_mut()
			.for_each(|p| p.update(damping, gravity));
	}

	#[cfg(debug_assertions)]
	pub fn update_particles(&mut self) {
		let (damping, gravity) = (self.config.damping, self.config.gravity);
		self.particles
			.iter_mut()
			.for_each(|p| p.update(damping, gravity));
	}

	#[cfg(not(debug_assertions))]
	pub fn constrain_particles(&mut self) {
		use rayon::prelude::*;
		let damping = self.config.damping;
		let posbox = &self.posbox;
		self.particles.par_iter_mut().for_each(|p| {
			posbox.apply(p, damping);
		});
	}

	#[cfg(debug_assertions)]
	pub fn constrain_particles(&mut self) {
		let damping = self.config.damping;
		for p in self.particles.iter_mut() {
			self.posbox.apply(p, damping);
		}
	}

	/// One relaxation pass over all sticks, in chain order.
	///
	/// Returns the number of sticks skipped for coincident endpoints.
	pub fn solve_constraints(&mut self) -> usize {
		let mut skipped = 0;
		for stick in self.sticks.iter() {
			if !stick.step(&mut self.particles) {
				skipped += 1;
			}
		}
		skipped
	}

	/// Advance one frame: integrate, keep inside the box, relax.
	///
	/// Returns how many stick steps were skipped over all passes.
	pub fn run_frame(&mut self) -> usize {
		self.update_particles();
		self.constrain_particles();
		let mut skipped = 0;
		for _ in 0..self.config.iterations {
			skipped += self.solve_constraints();
		}
		self.report_skipped(skipped);
		skipped
	}

	// warn when the count changes, not on every frame of a collapsed rope
	fn report_skipped(&mut self, skipped: usize) -> bool {
		if skipped == self.skipped {
			return false;
		}
		if skipped > 0 {
			eprintln!("WARN: skipping {} degenerate stick steps per frame", skipped);
		} else {
			eprintln!("INFO: no degenerate sticks left");
		}
		self.skipped = skipped;
		true
	}

	/// Teleport particle `idx` one `step` towards `dir`, dropping its velocity.
	pub fn nudge(&mut self, idx: usize, dir: Direction, step: f32) -> bool {
		match self.particles.get_mut(idx) {
			Some(p) => {
				let pos = p.pos + dir.offset() * step;
				p.reset_pos(pos);
				true
			}
			None => false,
		}
	}

	pub fn drag_anchor(&mut self, dir: Direction) -> bool {
		self.nudge(self.config.anchor, dir, self.config.drag_step)
	}

	/// Give particle `idx` a velocity of `amount` towards `dir` on the axis
	/// `dir` points along; the other axis keeps its velocity.
	pub fn kick(&mut self, idx: usize, dir: Direction, amount: f32) -> bool {
		let p = match self.particles.get_mut(idx) {
			Some(p) => p,
			None => return false,
		};
		let off = dir.offset();
		for axis in 0..2 {
			if off[axis] != 0. {
				p.ppos[axis] = p.pos[axis] - off[axis] * amount;
			}
		}
		true
	}

	/// Shift the previous position of particle `idx` away from `target`, so
	/// the next update sends it towards `target` with speed `force`.
	pub fn throw(&mut self, idx: usize, target: V2, force: f32) -> bool {
		let p = match self.particles.get_mut(idx) {
			Some(p) => p,
			None => return false,
		};
		match direction(p.pos, target) {
			Some(dir) => {
				p.push(dir * force);
				true
			}
			None => false,
		}
	}

	/// Grow (or shrink) every stick's rest length by `delta`.
	///
	/// The start of each stick is moved `delta` along the stick, so the rest
	/// length changes by exactly `delta` even when the start would pass the
	/// end. The start is then put back at its previous position: `ppos`, not
	/// where it was before the move, so a moving particle loses its velocity.
	pub fn change_rope_length(&mut self, lengthening: bool, delta: f32) {
		let step = if lengthening { delta } else { -delta };
		for stick in self.sticks.iter_mut() {
			let (s, e) = (stick.start(), stick.end());
			if direction(self.particles[s].pos, self.particles[e].pos).is_none() {
				eprintln!("WARN: stick {}-{} has no direction", s, e);
				continue;
			}
			stick.set_l0(stick.get_l0() + step);
			let start = &mut self.particles[s];
			start.pos = start.ppos;
		}
	}

	/// Pin or unpin the particle closest to `pos`, if one is within the grab
	/// radius. A newly pinned particle is frozen where it is.
	pub fn toggle_pin(&mut self, pos: V2) -> Option<usize> {
		let idx = self.select_particle(pos)?;
		let p = &mut self.particles[idx];
		p.pinned = !p.pinned;
		if p.pinned {
			let pos = p.pos;
			p.reset_pos(pos);
		}
		Some(idx)
	}

	pub fn select_particle(&self, c: V2) -> Option<usize> {
		let mut min_dist = f32::INFINITY;
		let mut min_id = None;
		for (id, p) in self.particles.iter().enumerate() {
			let dist = distance(c, p.pos);
			if dist < min_dist {
				min_id = Some(id);
				min_dist = dist;
			}
		}
		if min_dist <= self.config.grab_radius {
			min_id
		} else {
			None
		}
	}

	pub fn pr_model(&self) -> PrModel {
		PrModel {
			particles: self.particles.iter().map(|p| p.render()).collect(),
			constraints: self
				.sticks
				.iter()
				.enumerate()
				.map(|(id, s)| s.render(id))
				.collect(),
			bounds: [self.config.width, self.config.height],
		}
	}
}
