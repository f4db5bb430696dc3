use crate::V2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: u8,
}

impl Color {
	pub const RAYWHITE: Color = Color::rgb(245, 245, 245);
	pub const RED: Color = Color::rgb(230, 41, 55);
	pub const BLUE: Color = Color::rgb(0, 121, 241);
	pub const BROWN: Color = Color::rgb(127, 106, 79);
	pub const DARKGRAY: Color = Color::rgb(80, 80, 80);
	pub const LIGHTGRAY: Color = Color::rgb(200, 200, 200);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 255 }
	}
}

/// Drawing primitives a frontend has to provide.
///
/// Every frame is bracketed by `begin_frame` and `end_frame`; positions are
/// window coordinates with y pointing down.
pub trait Canvas {
	type Error;

	fn begin_frame(&mut self) -> Result<(), Self::Error>;

	fn clear(&mut self, color: Color) -> Result<(), Self::Error>;

	fn draw_circle(
		&mut self,
		center: V2,
		radius: f32,
		color: Color,
	) -> Result<(), Self::Error>;

	fn draw_rectangle(
		&mut self,
		origin: V2,
		size: V2,
		color: Color,
	) -> Result<(), Self::Error>;

	fn draw_line(&mut self, p1: V2, p2: V2, color: Color)
		-> Result<(), Self::Error>;

	fn draw_text(
		&mut self,
		text: &str,
		pos: V2,
		size: u16,
		color: Color,
	) -> Result<(), Self::Error>;

	fn end_frame(&mut self) -> Result<(), Self::Error>;
}
