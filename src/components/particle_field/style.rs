//! Visual configuration for the particle background.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Brand accent used for the particles and the site chrome.
pub const MAGENTA: Color = Color::rgb(255, 0, 204);

/// Particle effect configuration.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Number of particles
	pub count: usize,
	/// Particle fill color
	pub color: Color,
	/// Minimum particle radius (inclusive)
	pub radius_min: f64,
	/// Maximum particle radius (exclusive)
	pub radius_max: f64,
	/// Upper bound of each velocity component, in pixels per frame.
	/// Components are drawn from `[-speed, speed)`.
	pub speed: f64,
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			count: 60,
			color: MAGENTA.with_alpha(0.3),
			radius_min: 1.0,
			radius_max: 3.0,
			speed: 0.25,
		}
	}
}
