//! Drifting background particles with reflective edges.

use super::style::ParticleStyle;

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
}

/// Owns the particles and the viewport bounds they bounce inside.
pub struct ParticleSystem {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleSystem {
	/// Seed `style.count` particles uniformly inside a `width` x `height` viewport.
	pub fn new(style: &ParticleStyle, width: f64, height: f64, rng: &mut fastrand::Rng) -> Self {
		let mut particles = Vec::with_capacity(style.count);

		for _ in 0..style.count {
			particles.push(Particle {
				x: rng.f64() * width,
				y: rng.f64() * height,
				vx: (rng.f64() * 2.0 - 1.0) * style.speed,
				vy: (rng.f64() * 2.0 - 1.0) * style.speed,
				radius: style.radius_min + rng.f64() * (style.radius_max - style.radius_min),
			});
		}

		Self {
			particles,
			width,
			height,
		}
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	/// Advance every particle by one frame.
	///
	/// A particle that ends up past an edge has that axis' velocity pointed
	/// back inside. For a particle coming from inside this is a plain sign
	/// flip; a particle stranded outside by a shrinking viewport keeps heading
	/// back instead of jittering on the edge.
	pub fn step(&mut self) {
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			if p.x < 0.0 {
				p.vx = p.vx.abs();
			} else if p.x > self.width {
				p.vx = -p.vx.abs();
			}
			if p.y < 0.0 {
				p.vy = p.vy.abs();
			} else if p.y > self.height {
				p.vy = -p.vy.abs();
			}
		}
	}

	/// Update the cached bounds. Particles keep their positions.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn system(width: f64, height: f64, seed: u64) -> ParticleSystem {
		let mut rng = fastrand::Rng::with_seed(seed);
		ParticleSystem::new(&ParticleStyle::default(), width, height, &mut rng)
	}

	fn single(x: f64, y: f64, vx: f64, vy: f64) -> ParticleSystem {
		ParticleSystem {
			particles: vec![Particle {
				x,
				y,
				vx,
				vy,
				radius: 2.0,
			}],
			width: 100.0,
			height: 50.0,
		}
	}

	#[test]
	fn seeds_particles_inside_configured_ranges() {
		let ps = system(800.0, 600.0, 7);
		assert_eq!(ps.particles.len(), 60);
		for p in &ps.particles {
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!((1.0..3.0).contains(&p.radius));
			assert!((-0.25..0.25).contains(&p.vx));
			assert!((-0.25..0.25).contains(&p.vy));
		}
	}

	#[test]
	fn step_moves_by_velocity() {
		let mut ps = single(10.0, 10.0, 0.2, -0.1);
		ps.step();
		let p = &ps.particles[0];
		assert!((p.x - 10.2).abs() < 1e-9);
		assert!((p.y - 9.9).abs() < 1e-9);
		assert_eq!((p.vx, p.vy), (0.2, -0.1));
	}

	#[test]
	fn crossing_left_edge_flips_x_only() {
		let mut ps = single(0.1, 25.0, -0.2, 0.1);
		ps.step();
		assert_eq!(ps.particles[0].vx, 0.2);
		assert_eq!(ps.particles[0].vy, 0.1);
	}

	#[test]
	fn crossing_bottom_edge_flips_y_only() {
		let mut ps = single(50.0, 49.95, 0.1, 0.2);
		ps.step();
		assert_eq!(ps.particles[0].vx, 0.1);
		assert_eq!(ps.particles[0].vy, -0.2);
	}

	#[test]
	fn corner_crossing_flips_both_axes() {
		let mut ps = single(99.9, 49.9, 0.2, 0.2);
		ps.step();
		assert_eq!(ps.particles[0].vx, -0.2);
		assert_eq!(ps.particles[0].vy, -0.2);
	}

	#[test]
	fn velocity_flips_once_per_crossing() {
		let mut ps = single(0.05, 25.0, -0.1, 0.0);
		let mut flips = 0;
		let mut last = ps.particles[0].vx;
		for _ in 0..5 {
			ps.step();
			if ps.particles[0].vx.signum() != last.signum() {
				flips += 1;
			}
			last = ps.particles[0].vx;
		}
		assert_eq!(flips, 1);
		assert!(ps.particles[0].x > 0.0);
	}

	#[test]
	fn particles_never_escape_beyond_one_frame_overshoot() {
		let mut ps = system(320.0, 240.0, 42);
		let slack = ParticleStyle::default().speed;
		for _ in 0..20_000 {
			ps.step();
			for p in &ps.particles {
				assert!(p.x >= -slack && p.x <= 320.0 + slack, "x escaped: {}", p.x);
				assert!(p.y >= -slack && p.y <= 240.0 + slack, "y escaped: {}", p.y);
			}
		}
	}

	#[test]
	fn resize_keeps_positions() {
		let mut ps = system(800.0, 600.0, 3);
		let before = ps.particles.clone();
		ps.resize(400.0, 300.0);
		assert_eq!(ps.particles, before);
		assert_eq!((ps.width(), ps.height()), (400.0, 300.0));
	}

	#[test]
	fn particles_outside_shrunk_viewport_drift_back() {
		let mut ps = single(90.0, 40.0, 0.25, 0.25);
		ps.resize(20.0, 10.0);
		for _ in 0..1_000 {
			ps.step();
		}
		let p = &ps.particles[0];
		assert!(p.x <= 20.0 + 0.25 && p.y <= 10.0 + 0.25);
	}
}
