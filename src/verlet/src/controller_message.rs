use protocol::input::Direction;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControllerMessage {
	TogglePause,
	FrameForward,
	DragAnchor(Direction),
	Nudge(Direction),
	Kick(Direction),
	ChangeRopeLength { lengthening: bool },
	Throw([f32; 2]),
	TogglePin([f32; 2]),
	AdjustTargetFps(i32),
	AdjustThrowForce(f32),
}
