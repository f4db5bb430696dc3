use crate::canvas::{Canvas, Color};
use crate::pr_model::PrModel;
use crate::status::UpdateInfo;
use crate::V2;

pub const TITLE: &str = "Verlet Interpolation";
pub const PARTICLE_RADIUS: f32 = 10.0;
const PANEL: Color = Color::rgb(235, 235, 235);

fn draw_hud<C: Canvas>(
	canvas: &mut C,
	info: &UpdateInfo,
) -> Result<(), C::Error> {
	canvas.draw_rectangle(V2::new(390., 10.), V2::new(240., 135.), PANEL)?;
	canvas.draw_text(TITLE, V2::new(400., 20.), 20, Color::BLUE)?;
	canvas.draw_text(
		&format!("Target FPS: {}", info.target_fps),
		V2::new(400., 50.),
		10,
		Color::BLUE,
	)?;
	canvas.draw_text(
		&format!("Throw Force: {}", info.throw_force),
		V2::new(400., 70.),
		10,
		Color::BROWN,
	)?;
	canvas.draw_text(
		&format!("Elapsed: {:.2}s", info.elapsed),
		V2::new(400., 90.),
		10,
		Color::DARKGRAY,
	)?;
	canvas.draw_text(
		&format!("Skipped: {}", info.degenerate),
		V2::new(400., 110.),
		10,
		Color::DARKGRAY,
	)?;
	if info.paused {
		canvas.draw_text("PAUSED", V2::new(400., 130.), 10, Color::RED)?;
	}
	Ok(())
}

/// Paint one complete frame of the rope.
pub fn paint<C: Canvas>(
	canvas: &mut C,
	model: &PrModel,
	info: &UpdateInfo,
) -> Result<(), C::Error> {
	canvas.begin_frame()?;
	canvas.clear(Color::RAYWHITE)?;

	let [w, h] = model.bounds;
	let corners = [
		V2::new(0., 0.),
		V2::new(w, 0.),
		V2::new(w, h),
		V2::new(0., h),
	];
	for idx in 0..4 {
		canvas.draw_line(corners[idx], corners[(idx + 1) % 4], Color::LIGHTGRAY)?;
	}

	draw_hud(canvas, info)?;
	for (idx, particle) in model.particles.iter().enumerate() {
		let y = 10. + idx as f32 * 30.;
		let [px, py] = particle.pos;
		canvas.draw_text(
			&format!("points x: {:.6}", px),
			V2::new(35., y),
			10,
			Color::RED,
		)?;
		canvas.draw_text(
			&format!("points y: {:.6}", py),
			V2::new(35., y + 10.),
			10,
			Color::RED,
		)?;
		canvas.draw_text(
			&format!("point pinned: {}", particle.pinned),
			V2::new(35., y + 20.),
			10,
			Color::RED,
		)?;
	}

	for constraint in model.constraints.iter() {
		let [i1, i2] = constraint.particles;
		let (p1, p2) = match (model.particles.get(i1), model.particles.get(i2)) {
			(Some(p1), Some(p2)) => (p1, p2),
			_ => continue,
		};
		canvas.draw_line(p1.pos.into(), p2.pos.into(), Color::DARKGRAY)?;
	}
	for particle in model.particles.iter() {
		let color = if particle.pinned {
			Color::BLUE
		} else {
			Color::RED
		};
		canvas.draw_circle(particle.pos.into(), PARTICLE_RADIUS, color)?;
	}
	canvas.end_frame()
}
