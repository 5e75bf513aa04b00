//! Canvas rendering for the particle background.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::ParticleSystem;
use super::style::ParticleStyle;

/// Clears the surface and draws every particle as a filled circle.
pub fn draw(ctx: &CanvasRenderingContext2d, system: &ParticleSystem, style: &ParticleStyle) {
	ctx.clear_rect(0.0, 0.0, system.width(), system.height());
	ctx.set_fill_style_str(&style.color.to_css());

	for p in &system.particles {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.fill();
	}
}
