use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
	#[error("sdl: {0}")]
	Sdl(String),

	#[error("window: {0}")]
	Window(#[from] sdl2::video::WindowBuildError),

	#[error("canvas: {0}")]
	Canvas(#[from] sdl2::IntegerOrSdlError),
}
