use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color as SdlColor;
use sdl2::render::Canvas as SdlCanvas;
use sdl2::video::Window;

use crate::error::ViewerError;
use protocol::canvas::{Canvas, Color};
use protocol::V2;

fn sdl_color(c: Color) -> SdlColor {
	SdlColor::RGBA(c.r, c.g, c.b, c.a)
}

// overflow is okay, SDL clips off-screen primitives
fn px(v: f32) -> i16 {
	v as i16
}

pub struct Renderer {
	canvas: SdlCanvas<Window>,
}

impl Renderer {
	pub fn new(mut canvas: SdlCanvas<Window>) -> Self {
		canvas.set_draw_color(SdlColor::RGB(0, 0, 0));
		canvas.clear();
		canvas.present();
		Self { canvas }
	}
}

impl Canvas for Renderer {
	type Error = ViewerError;

	fn begin_frame(&mut self) -> Result<(), ViewerError> {
		Ok(())
	}

	fn clear(&mut self, color: Color) -> Result<(), ViewerError> {
		self.canvas.set_draw_color(sdl_color(color));
		self.canvas.clear();
		Ok(())
	}

	fn draw_circle(
		&mut self,
		center: V2,
		radius: f32,
		color: Color,
	) -> Result<(), ViewerError> {
		self.canvas
			.filled_circle(px(center[0]), px(center[1]), px(radius), sdl_color(color))
			.map_err(ViewerError::Sdl)
	}

	fn draw_rectangle(
		&mut self,
		origin: V2,
		size: V2,
		color: Color,
	) -> Result<(), ViewerError> {
		let end = origin + size;
		self.canvas
			.box_(
				px(origin[0]),
				px(origin[1]),
				px(end[0]),
				px(end[1]),
				sdl_color(color),
			)
			.map_err(ViewerError::Sdl)
	}

	fn draw_line(
		&mut self,
		p1: V2,
		p2: V2,
		color: Color,
	) -> Result<(), ViewerError> {
		self.canvas
			.aa_line(px(p1[0]), px(p1[1]), px(p2[0]), px(p2[1]), sdl_color(color))
			.map_err(ViewerError::Sdl)
	}

	// the gfx font is a fixed 8x8 bitmap, so `size` cannot be honored
	fn draw_text(
		&mut self,
		text: &str,
		pos: V2,
		_size: u16,
		color: Color,
	) -> Result<(), ViewerError> {
		self.canvas
			.string(px(pos[0]), px(pos[1]), text, sdl_color(color))
			.map_err(ViewerError::Sdl)
	}

	fn end_frame(&mut self) -> Result<(), ViewerError> {
		self.canvas.present();
		Ok(())
	}
}
