pub mod error;
pub mod frontend;
pub mod keycode;
pub mod renderer;
