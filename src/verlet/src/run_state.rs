use crate::controller_message::ControllerMessage;

/// Whether the loop advances physics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
	#[default]
	Running,
	Paused,
	// paused, but the next frame is simulated
	StepOnce,
}

impl RunState {
	pub fn next(self, msg: &ControllerMessage) -> Self {
		use ControllerMessage::*;
		use RunState::*;
		match (self, msg) {
			(Running, TogglePause) => Paused,
			(Paused | StepOnce, TogglePause) => Running,
			(Paused, FrameForward) => StepOnce,
			(state, _) => state,
		}
	}

	/// Whether physics runs this frame. A pending single step is consumed.
	pub fn take_step(&mut self) -> bool {
		match *self {
			RunState::Running => true,
			RunState::Paused => false,
			RunState::StepOnce => {
				*self = RunState::Paused;
				true
			}
		}
	}

	pub fn is_paused(self) -> bool {
		self != RunState::Running
	}
}
