// pr_model: Physical model for rendering

#[derive(Clone, Debug, PartialEq)]
pub struct PrParticle {
	pub pos: [f32; 2],
	pub pinned: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrConstraint {
	pub id: usize,
	pub particles: [usize; 2],
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrModel {
	pub particles: Vec<PrParticle>,
	pub constraints: Vec<PrConstraint>,
	// width, height of the box particles are kept in
	pub bounds: [f32; 2],
}
