use protocol::input::{Action, Direction};
use sdl2::keyboard::Keycode;

pub fn key2action(key: Keycode) -> Option<Action> {
	use Direction::*;
	let action = match key {
		Keycode::Space => Action::TogglePause,
		Keycode::F => Action::FrameForward,
		Keycode::A => Action::Anchor(Left),
		Keycode::W => Action::Anchor(Up),
		Keycode::D => Action::Anchor(Right),
		Keycode::S => Action::Anchor(Down),
		Keycode::H => Action::Nudge(Left),
		Keycode::K => Action::Nudge(Up),
		Keycode::L => Action::Nudge(Right),
		Keycode::J => Action::Nudge(Down),
		Keycode::Left => Action::Kick(Left),
		Keycode::Right => Action::Kick(Right),
		Keycode::Up => Action::ShortenRope,
		Keycode::Down => Action::LengthenRope,
		Keycode::R => Action::RaiseFps,
		Keycode::E => Action::LowerFps,
		Keycode::X => Action::RaiseThrowForce,
		Keycode::Z => Action::LowerThrowForce,
		_ => return None,
	};
	Some(action)
}
