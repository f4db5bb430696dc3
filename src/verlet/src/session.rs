use crate::config::SessionConfig;
use crate::controller_message::ControllerMessage;
use crate::pworld::PWorld;
use crate::run_state::RunState;
use crate::time_manager::{Clock, SystemClock, TimeManager};
use crate::V2;
use protocol::canvas::Canvas;
use protocol::input::{Action, InputFrame, InputSource};
use protocol::scene;
use protocol::status::UpdateInfo;

/// The interactive loop around a [`PWorld`].
///
/// Each frame runs physics (unless paused), then applies the input gathered
/// since the last frame, then renders and waits for the next frame slot.
pub struct Session<C: Clock = SystemClock> {
	pworld: PWorld,
	state: RunState,
	time: TimeManager<C>,
	config: SessionConfig,
	throw_force: f32,
	degenerate: usize,
}

impl<C: Clock> Session<C> {
	pub fn new(pworld: PWorld, config: SessionConfig, clock: C) -> Self {
		let time = TimeManager::new(clock, config.target_fps);
		let throw_force = config.throw_force;
		Self {
			pworld,
			state: RunState::default(),
			time,
			config,
			throw_force,
			degenerate: 0,
		}
	}

	pub fn pworld(&self) -> &PWorld {
		&self.pworld
	}

	pub fn state(&self) -> RunState {
		self.state
	}

	pub fn throw_force(&self) -> f32 {
		self.throw_force
	}

	pub fn target_fps(&self) -> i32 {
		self.time.target_fps()
	}

	/// Translate one input snapshot into controller messages, in the order
	/// they get applied.
	pub fn messages(&self, input: &InputFrame) -> Vec<ControllerMessage> {
		use ControllerMessage as Cm;
		let mut result: Vec<Cm> = input
			.actions
			.iter()
			.map(|action| match *action {
				Action::TogglePause => Cm::TogglePause,
				Action::FrameForward => Cm::FrameForward,
				Action::Anchor(dir) => Cm::DragAnchor(dir),
				Action::Nudge(dir) => Cm::Nudge(dir),
				Action::Kick(dir) => Cm::Kick(dir),
				Action::ShortenRope => Cm::ChangeRopeLength { lengthening: false },
				Action::LengthenRope => Cm::ChangeRopeLength { lengthening: true },
				Action::RaiseFps => Cm::AdjustTargetFps(self.config.fps_step),
				Action::LowerFps => Cm::AdjustTargetFps(-self.config.fps_step),
				Action::RaiseThrowForce => {
					Cm::AdjustThrowForce(self.config.throw_step)
				}
				Action::LowerThrowForce => {
					Cm::AdjustThrowForce(-self.config.throw_step)
				}
			})
			.collect();
		let mouse = [input.mouse[0], input.mouse[1]];
		if input.throw_pressed {
			result.push(Cm::Throw(mouse));
		}
		if input.pin_pressed {
			result.push(Cm::TogglePin(mouse));
		}
		result
	}

	pub fn handle(&mut self, msg: ControllerMessage) {
		let next = self.state.next(&msg);
		if next != self.state {
			eprintln!("INFO: {:?} -> {:?}", self.state, next);
			self.state = next;
		}
		let lead = self.pworld.lead();
		let config = self.pworld.config().clone();
		match msg {
			ControllerMessage::TogglePause | ControllerMessage::FrameForward => {}
			ControllerMessage::DragAnchor(dir) => {
				self.pworld.drag_anchor(dir);
			}
			ControllerMessage::Nudge(dir) => {
				if let Some(idx) = lead {
					self.pworld.nudge(idx, dir, config.drag_step);
				}
			}
			ControllerMessage::Kick(dir) => {
				if let Some(idx) = lead {
					self.pworld.kick(idx, dir, config.kick);
				}
			}
			ControllerMessage::ChangeRopeLength { lengthening } => {
				self.pworld.change_rope_length(lengthening, config.length_step);
			}
			ControllerMessage::Throw(target) => {
				if let Some(idx) = lead {
					self.pworld.throw(idx, target.into(), self.throw_force);
				}
			}
			ControllerMessage::TogglePin(pos) => {
				if let Some(idx) = self.pworld.toggle_pin(V2::from(pos)) {
					eprintln!("INFO: toggled pin of particle {}", idx);
				}
			}
			ControllerMessage::AdjustTargetFps(delta) => {
				self.time.adjust_target_fps(delta);
			}
			ControllerMessage::AdjustThrowForce(delta) => {
				self.throw_force += delta;
			}
		}
	}

	pub fn update_info(&self) -> UpdateInfo {
		UpdateInfo {
			target_fps: self.time.target_fps(),
			throw_force: self.throw_force,
			paused: self.state.is_paused(),
			elapsed: self.time.elapsed(),
			degenerate: self.degenerate,
		}
	}

	/// Run one frame. Returns `Ok(false)` once the frontend asked to close.
	pub fn frame<I: InputSource, R: Canvas>(
		&mut self,
		input: &mut I,
		canvas: &mut R,
	) -> Result<bool, R::Error> {
		// pausing freezes the rope itself, not only the elapsed counter
		if self.state.take_step() {
			self.degenerate = self.pworld.run_frame();
		}
		let input = input.poll();
		if input.close_requested {
			return Ok(false);
		}
		for msg in self.messages(&input) {
			self.handle(msg);
		}
		if !self.state.is_paused() {
			self.time.accumulate();
		}
		scene::paint(canvas, &self.pworld.pr_model(), &self.update_info())?;
		self.time.take_time();
		Ok(true)
	}

	pub fn run<I: InputSource, R: Canvas>(
		&mut self,
		input: &mut I,
		canvas: &mut R,
	) -> Result<(), R::Error> {
		while self.frame(input, canvas)? {}
		eprintln!("INFO: close requested after {:.2}s", self.time.elapsed());
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::config::WorldConfig;
	use crate::rope::RopeTemplate;
	use crate::time_manager::test::FakeClock;
	use approx::assert_relative_eq;
	use protocol::canvas::Color;
	use protocol::input::Direction;
	use std::collections::VecDeque;

	#[derive(Default)]
	struct Script {
		frames: VecDeque<InputFrame>,
	}

	impl Script {
		fn push(mut self, frame: InputFrame) -> Self {
			self.frames.push_back(frame);
			self
		}

		fn actions(self, actions: &[Action]) -> Self {
			self.push(InputFrame {
				actions: actions.to_vec(),
				..Default::default()
			})
		}
	}

	impl InputSource for Script {
		// an exhausted script closes the window
		fn poll(&mut self) -> InputFrame {
			self.frames.pop_front().unwrap_or(InputFrame {
				close_requested: true,
				..Default::default()
			})
		}
	}

	#[derive(Default)]
	struct FrameCounter {
		frames: usize,
		circles: usize,
	}

	impl Canvas for FrameCounter {
		type Error = String;

		fn begin_frame(&mut self) -> Result<(), String> {
			self.frames += 1;
			Ok(())
		}

		fn clear(&mut self, _: Color) -> Result<(), String> {
			Ok(())
		}

		fn draw_circle(&mut self, _: V2, _: f32, _: Color) -> Result<(), String> {
			self.circles += 1;
			Ok(())
		}

		fn draw_rectangle(&mut self, _: V2, _: V2, _: Color) -> Result<(), String> {
			Ok(())
		}

		fn draw_line(&mut self, _: V2, _: V2, _: Color) -> Result<(), String> {
			Ok(())
		}

		fn draw_text(&mut self, _: &str, _: V2, _: u16, _: Color) -> Result<(), String> {
			Ok(())
		}

		fn end_frame(&mut self) -> Result<(), String> {
			Ok(())
		}
	}

	struct BrokenCanvas;

	impl Canvas for BrokenCanvas {
		type Error = String;

		fn begin_frame(&mut self) -> Result<(), String> {
			Err("lost context".to_string())
		}

		fn clear(&mut self, _: Color) -> Result<(), String> {
			Ok(())
		}

		fn draw_circle(&mut self, _: V2, _: f32, _: Color) -> Result<(), String> {
			Ok(())
		}

		fn draw_rectangle(&mut self, _: V2, _: V2, _: Color) -> Result<(), String> {
			Ok(())
		}

		fn draw_line(&mut self, _: V2, _: V2, _: Color) -> Result<(), String> {
			Ok(())
		}

		fn draw_text(&mut self, _: &str, _: V2, _: u16, _: Color) -> Result<(), String> {
			Ok(())
		}

		fn end_frame(&mut self) -> Result<(), String> {
			Ok(())
		}
	}

	fn session() -> (Session<FakeClock>, FakeClock) {
		let mut pworld = PWorld::new(WorldConfig::default());
		pworld.set_rope(RopeTemplate::default_pose());
		let clock = FakeClock::default();
		let session =
			Session::new(pworld, SessionConfig::default(), clock.clone());
		(session, clock)
	}

	#[test]
	fn test_runs_until_close() {
		let (mut session, clock) = session();
		let mut input = Script::default()
			.actions(&[])
			.actions(&[])
			.actions(&[]);
		let mut canvas = FrameCounter::default();
		session.run(&mut input, &mut canvas).unwrap();
		assert_eq!(canvas.frames, 3);
		assert_eq!(canvas.circles, 33);
		// every frame is paced to 1/60s
		assert_relative_eq!(clock.t.get(), 3. / 60., epsilon = 1e-9);
	}

	#[test]
	fn test_pause_freezes_physics() {
		let (mut session, _clock) = session();
		let mut input = Script::default()
			.actions(&[Action::TogglePause])
			.actions(&[])
			.actions(&[]);
		let mut canvas = FrameCounter::default();
		// first frame still simulates, the toggle lands after physics
		session.frame(&mut input, &mut canvas).unwrap();
		assert!(session.state().is_paused());
		let frozen = session.pworld().particles().to_vec();
		session.frame(&mut input, &mut canvas).unwrap();
		session.frame(&mut input, &mut canvas).unwrap();
		assert_eq!(session.pworld().particles(), &frozen[..]);
		assert!(session.update_info().paused);
	}

	#[test]
	fn test_frame_forward_steps_once() {
		let (mut session, _clock) = session();
		session.handle(ControllerMessage::TogglePause);
		let before = session.pworld().particles().to_vec();
		let mut input = Script::default()
			.actions(&[Action::FrameForward])
			.actions(&[])
			.actions(&[]);
		let mut canvas = FrameCounter::default();
		session.frame(&mut input, &mut canvas).unwrap();
		assert_eq!(session.pworld().particles(), &before[..]);
		assert_eq!(session.state(), RunState::StepOnce);
		session.frame(&mut input, &mut canvas).unwrap();
		let stepped = session.pworld().particles().to_vec();
		assert_ne!(stepped, before);
		session.frame(&mut input, &mut canvas).unwrap();
		assert_eq!(session.pworld().particles(), &stepped[..]);
	}

	#[test]
	fn test_elapsed_only_while_running() {
		let (mut session, _clock) = session();
		let mut canvas = FrameCounter::default();
		let mut input = Script::default()
			.actions(&[])
			.actions(&[])
			.actions(&[Action::TogglePause])
			.actions(&[])
			.actions(&[]);
		// the first frame has no measured delta yet
		for _ in 0..3 {
			session.frame(&mut input, &mut canvas).unwrap();
		}
		let paused_at = session.update_info().elapsed;
		assert!(paused_at > 0.);
		session.frame(&mut input, &mut canvas).unwrap();
		session.frame(&mut input, &mut canvas).unwrap();
		assert_eq!(session.update_info().elapsed, paused_at);
	}

	#[test]
	fn test_tunables() {
		let (mut session, _clock) = session();
		let input = InputFrame {
			actions: vec![
				Action::LowerFps,
				Action::LowerFps,
				Action::RaiseThrowForce,
			],
			..Default::default()
		};
		for msg in session.messages(&input) {
			session.handle(msg);
		}
		assert_eq!(session.target_fps(), 48);
		assert_eq!(session.throw_force(), 205.);
		for _ in 0..20 {
			session.handle(ControllerMessage::AdjustTargetFps(-6));
		}
		assert_eq!(session.target_fps(), 0);
	}

	#[test]
	fn test_click_throws_lead() {
		let (mut session, _clock) = session();
		let input = InputFrame {
			throw_pressed: true,
			mouse: V2::new(320., 0.),
			..Default::default()
		};
		let msgs = session.messages(&input);
		assert_eq!(msgs, vec![ControllerMessage::Throw([320., 0.])]);
		let before = session.pworld().particles()[10].clone();
		session.handle(msgs[0]);
		let after = &session.pworld().particles()[10];
		assert_eq!(after.pos, before.pos);
		assert_relative_eq!(after.ppos, before.ppos + V2::new(0., 200.));
	}

	#[test]
	fn test_anchor_and_rope_keys() {
		let (mut session, _clock) = session();
		let input = InputFrame {
			actions: vec![Action::Anchor(Direction::Left), Action::ShortenRope],
			..Default::default()
		};
		let msgs = session.messages(&input);
		assert_eq!(
			msgs,
			vec![
				ControllerMessage::DragAnchor(Direction::Left),
				ControllerMessage::ChangeRopeLength { lengthening: false },
			]
		);
		for msg in msgs {
			session.handle(msg);
		}
		let pworld = session.pworld();
		assert_eq!(pworld.particles()[0].pos, V2::new(310., 210.));
		assert!(pworld.sticks().iter().all(|s| s.get_l0() < 20.));
	}

	#[test]
	fn test_kick_and_nudge_lead() {
		let (mut session, _clock) = session();
		session.handle(ControllerMessage::Kick(Direction::Right));
		let lead = &session.pworld().particles()[10];
		assert_eq!(lead.ppos[0], lead.pos[0] - 10.);
		session.handle(ControllerMessage::Nudge(Direction::Up));
		let lead = &session.pworld().particles()[10];
		assert_eq!(lead.pos, V2::new(320., 400.));
		assert_eq!(lead.ppos, lead.pos);
	}

	#[test]
	fn test_right_click_pins() {
		let (mut session, _clock) = session();
		let input = InputFrame {
			pin_pressed: true,
			mouse: V2::new(322., 330.),
			..Default::default()
		};
		for msg in session.messages(&input) {
			session.handle(msg);
		}
		assert!(session.pworld().particles()[6].pinned);
	}

	#[test]
	fn test_canvas_error_stops_loop() {
		let (mut session, _clock) = session();
		let mut input = Script::default().actions(&[]);
		let err = session.run(&mut input, &mut BrokenCanvas).unwrap_err();
		assert_eq!(err, "lost context");
	}
}
