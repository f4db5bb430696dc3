use crate::particle::Particle;
use crate::V2;

/// Axis aligned box particles are kept in, with a damped bounce.
#[derive(Clone, Debug, PartialEq)]
pub struct PosBox {
	pub xmin: f32,
	pub xmax: f32,
	pub ymin: f32,
	pub ymax: f32,
	pub bounce: f32,
}

impl PosBox {
	pub fn new(width: f32, height: f32, bounce: f32) -> Self {
		Self {
			xmin: 0.,
			xmax: width,
			ymin: 0.,
			ymax: height,
			bounce,
		}
	}

	pub fn contains(&self, pos: V2) -> bool {
		pos[0] >= self.xmin
			&& pos[0] <= self.xmax
			&& pos[1] >= self.ymin
			&& pos[1] <= self.ymax
	}

	/// Clamp `p` into the box, reflecting the velocity it had before the
	/// clamp scaled by `bounce`. Returns whether anything was clamped.
	pub fn apply(&self, p: &mut Particle, damping: f32) -> bool {
		if p.pinned {
			return false;
		}
		let v = p.velocity(damping);
		let mut flag = false;
		for (axis, min, max) in
			[(0, self.xmin, self.xmax), (1, self.ymin, self.ymax)]
		{
			if p.pos[axis] > max {
				p.pos[axis] = max;
				p.ppos[axis] = max + v[axis] * self.bounce;
				flag = true;
			} else if p.pos[axis] < min {
				p.pos[axis] = min;
				p.ppos[axis] = min + v[axis] * self.bounce;
				flag = true;
			}
		}
		flag
	}
}
