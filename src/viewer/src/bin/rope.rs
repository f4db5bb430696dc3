use protocol::scene::TITLE;
use verlet::config::{SessionConfig, WorldConfig};
use verlet::pworld::PWorld;
use verlet::rope::RopeTemplate;
use verlet::session::Session;
use verlet::time_manager::SystemClock;
use viewer::error::ViewerError;
use viewer::frontend;

fn main() -> Result<(), ViewerError> {
	let config = WorldConfig::default();
	let (mut renderer, mut input) =
		frontend::open(TITLE, config.width as u32, config.height as u32)?;
	let mut pworld = PWorld::new(config);
	pworld.set_rope(RopeTemplate::default_pose());
	let mut session =
		Session::new(pworld, SessionConfig::default(), SystemClock::default());
	if let Err(e) = session.run(&mut input, &mut renderer) {
		eprintln!("ERROR: {}", e);
		return Err(e);
	}
	Ok(())
}
