use crate::V2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
	Left,
	Up,
	Right,
	Down,
}

impl Direction {
	/// Unit step in window coordinates (y grows downwards).
	pub fn offset(self) -> V2 {
		match self {
			Direction::Left => V2::new(-1., 0.),
			Direction::Up => V2::new(0., -1.),
			Direction::Right => V2::new(1., 0.),
			Direction::Down => V2::new(0., 1.),
		}
	}
}

/// Logical key actions, already decoupled from the physical keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
	TogglePause,
	FrameForward,
	Anchor(Direction),
	Nudge(Direction),
	Kick(Direction),
	ShortenRope,
	LengthenRope,
	RaiseFps,
	LowerFps,
	RaiseThrowForce,
	LowerThrowForce,
}

/// Everything the input collaborator saw since the previous poll.
///
/// Actions and clicks are edge-triggered: a held key shows up once.
#[derive(Clone, Debug, PartialEq)]
pub struct InputFrame {
	pub actions: Vec<Action>,
	pub throw_pressed: bool,
	pub pin_pressed: bool,
	pub mouse: V2,
	pub close_requested: bool,
}

impl Default for InputFrame {
	fn default() -> Self {
		Self {
			actions: Vec::new(),
			throw_pressed: false,
			pin_pressed: false,
			mouse: V2::zeros(),
			close_requested: false,
		}
	}
}

pub trait InputSource {
	fn poll(&mut self) -> InputFrame;
}
