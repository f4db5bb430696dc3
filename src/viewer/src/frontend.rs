use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::{EventPump, Sdl};

use crate::error::ViewerError;
use crate::keycode::key2action;
use crate::renderer::Renderer;
use protocol::input::{InputFrame, InputSource};
use protocol::V2;

pub struct SdlInput {
	_sdl_context: Sdl,
	event_pump: EventPump,
}

impl InputSource for SdlInput {
	fn poll(&mut self) -> InputFrame {
		let state = self.event_pump.mouse_state();
		let mut frame = InputFrame {
			mouse: V2::new(state.x() as f32, state.y() as f32),
			..Default::default()
		};
		for event in self.event_pump.poll_iter() {
			match event {
				Event::Quit { .. }
				| Event::KeyDown {
					keycode: Some(Keycode::Q),
					..
				} => frame.close_requested = true,
				Event::KeyDown {
					keycode: Some(keycode),
					repeat: false,
					..
				} => {
					if let Some(action) = key2action(keycode) {
						frame.actions.push(action);
					}
				}
				Event::MouseButtonDown {
					mouse_btn, x, y, ..
				} => {
					frame.mouse = V2::new(x as f32, y as f32);
					match mouse_btn {
						MouseButton::Left => frame.throw_pressed = true,
						MouseButton::Right => frame.pin_pressed = true,
						_ => {}
					}
				}
				_ => {}
			}
		}
		frame
	}
}

/// Open the window and hand out its drawing and input halves.
pub fn open(
	title: &str,
	width: u32,
	height: u32,
) -> Result<(Renderer, SdlInput), ViewerError> {
	let sdl_context = sdl2::init().map_err(ViewerError::Sdl)?;
	let video_subsystem = sdl_context.video().map_err(ViewerError::Sdl)?;
	let window = video_subsystem
		.window(title, width, height)
		.position_centered()
		.build()?;
	let canvas = window.into_canvas().build()?;
	let event_pump = sdl_context.event_pump().map_err(ViewerError::Sdl)?;
	eprintln!("INFO: window {}x{} open", width, height);
	Ok((
		Renderer::new(canvas),
		SdlInput {
			_sdl_context: sdl_context,
			event_pump,
		},
	))
}
