use std::time::{Duration, Instant};

/// Wall clock and blocking sleep, both in seconds.
pub trait Clock {
	fn now(&self) -> f64;

	fn sleep(&self, secs: f64);
}

pub struct SystemClock {
	origin: Instant,
}

impl Default for SystemClock {
	fn default() -> Self {
		Self {
			origin: Instant::now(),
		}
	}
}

impl Clock for SystemClock {
	fn now(&self) -> f64 {
		self.origin.elapsed().as_secs_f64()
	}

	fn sleep(&self, secs: f64) {
		std::thread::sleep(Duration::from_secs_f64(secs));
	}
}

/// Frame pacing and the elapsed-time counter.
///
/// Physics does not use the measured delta time; it only feeds `elapsed`.
pub struct TimeManager<C: Clock = SystemClock> {
	clock: C,
	// 0: unlimited
	target_fps: i32,
	start_time: f64,
	dt: f32,
	elapsed: f32,
}

impl<C: Clock> TimeManager<C> {
	pub fn new(clock: C, target_fps: i32) -> Self {
		let start_time = clock.now();
		Self {
			clock,
			target_fps: target_fps.max(0),
			start_time,
			dt: 0.,
			elapsed: 0.,
		}
	}

	pub fn target_fps(&self) -> i32 {
		self.target_fps
	}

	pub fn set_target_fps(&mut self, fps: i32) {
		self.target_fps = fps.max(0);
	}

	pub fn adjust_target_fps(&mut self, delta: i32) {
		self.set_target_fps(self.target_fps.saturating_add(delta));
	}

	pub fn dt(&self) -> f32 {
		self.dt
	}

	pub fn elapsed(&self) -> f32 {
		self.elapsed
	}

	pub fn accumulate(&mut self) {
		self.elapsed += self.dt;
	}

	/// Close the current frame: sleep off what is left of the frame budget
	/// and return the frame's duration, which becomes the next delta time.
	pub fn take_time(&mut self) -> f32 {
		let mut now = self.clock.now();
		if self.target_fps > 0 {
			let wait = 1.0 / self.target_fps as f64 - (now - self.start_time);
			if wait > 0.0 {
				self.clock.sleep(wait);
				now = self.clock.now();
			}
		}
		self.dt = (now - self.start_time) as f32;
		self.start_time = now;
		self.dt
	}
}
