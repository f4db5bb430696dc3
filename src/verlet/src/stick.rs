use crate::geometry::{distance, MIN_DISTANCE};
use crate::particle::Particle;
use protocol::pr_model::PrConstraint;

/// Distance constraint between two particles of the world.
///
/// Particles are referenced by index into the world's particle list, so a
/// stick never outlives or aliases the particles it links.
#[derive(Clone, Debug, PartialEq)]
pub struct Stick {
	start: usize,
	end: usize,
	l0: f32,
}

impl Stick {
	pub fn new(ps: &[Particle], start: usize, end: usize) -> Self {
		let l0 = distance(ps[start].pos, ps[end].pos);
		Self::new_with_l0(start, end, l0)
	}

	pub fn new_with_l0(start: usize, end: usize, l0: f32) -> Self {
		Self {
			start,
			end,
			l0: l0.max(0.),
		}
	}

	pub fn start(&self) -> usize {
		self.start
	}

	pub fn end(&self) -> usize {
		self.end
	}

	pub fn get_l0(&self) -> f32 {
		self.l0
	}

	pub fn set_l0(&mut self, l0: f32) {
		self.l0 = l0.max(0.);
	}

	pub fn length(&self, ps: &[Particle]) -> f32 {
		distance(ps[self.start].pos, ps[self.end].pos)
	}

	/// One relaxation step, each endpoint taking half of the correction.
	///
	/// Returns `false` when the endpoints coincide and the step was skipped.
	pub fn step(&self, ps: &mut [Particle]) -> bool {
		let dp = ps[self.end].pos - ps[self.start].pos;
		let l = dp.magnitude();
		if !l.is_finite() || l < MIN_DISTANCE {
			return false;
		}
		let percent = (self.l0 - l) / l / 2.0;
		let offset = dp * percent;
		ps[self.start].add_pos(-offset);
		ps[self.end].add_pos(offset);
		true
	}

	pub fn render(&self, id: usize) -> PrConstraint {
		PrConstraint {
			id,
			particles: [self.start, self.end],
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::V2;
	use approx::assert_relative_eq;

	#[test]
	fn test_rest_length_from_positions() {
		let ps = vec![Particle::new(V2::new(0., 0.)), Particle::new(V2::new(3., 4.))];
		let stick = Stick::new(&ps, 0, 1);
		assert_relative_eq!(stick.get_l0(), 5.0);
		assert_eq!(stick.render(3).particles, [0, 1]);
	}

	#[test]
	fn test_free_ends_share_correction() {
		let mut ps =
			vec![Particle::new(V2::new(0., 0.)), Particle::new(V2::new(0., 14.))];
		let stick = Stick::new_with_l0(0, 1, 10.);
		assert!(stick.step(&mut ps));
		assert_relative_eq!(ps[0].pos, V2::new(0., 2.), epsilon = 1e-5);
		assert_relative_eq!(ps[1].pos, V2::new(0., 12.), epsilon = 1e-5);
		assert_relative_eq!(stick.length(&ps), 10., epsilon = 1e-5);
	}

	#[test]
	fn test_converges_towards_pinned_end() {
		let mut ps = vec![
			Particle::new(V2::new(0., 0.)).pinned(),
			Particle::new(V2::new(6., 17.)),
		];
		let stick = Stick::new_with_l0(0, 1, 10.);
		let mut last_err = (stick.length(&ps) - 10.).abs();
		for _ in 0..40 {
			stick.step(&mut ps);
			let err = (stick.length(&ps) - 10.).abs();
			assert!(err <= last_err + 1e-6, "{} > {}", err, last_err);
			last_err = err;
		}
		assert!(last_err < 1e-4);
		assert_eq!(ps[0].pos, V2::new(0., 0.));
	}

	#[test]
	fn test_compressed_stick_pushes_apart() {
		let mut ps = vec![
			Particle::new(V2::new(0., 0.)).pinned(),
			Particle::new(V2::new(0., 4.)),
		];
		let stick = Stick::new_with_l0(0, 1, 10.);
		stick.step(&mut ps);
		assert_relative_eq!(ps[1].pos, V2::new(0., 7.), epsilon = 1e-5);
	}

	#[test]
	fn test_coincident_ends_are_skipped() {
		let mut ps =
			vec![Particle::new(V2::new(2., 2.)), Particle::new(V2::new(2., 2.))];
		let stick = Stick::new_with_l0(0, 1, 10.);
		assert!(!stick.step(&mut ps));
		assert!(ps[0].pos[0].is_finite() && ps[1].pos[1].is_finite());
		assert_eq!(ps[0].pos, V2::new(2., 2.));
	}

	#[test]
	fn test_negative_rest_length_clamped() {
		let mut stick = Stick::new_with_l0(0, 1, -3.);
		assert_eq!(stick.get_l0(), 0.);
		stick.set_l0(-1.);
		assert_eq!(stick.get_l0(), 0.);
	}
}
