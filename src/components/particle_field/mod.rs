//! Decorative particle background.
//!
//! Renders drifting translucent dots on a full-viewport canvas:
//! - Particles bounce off the viewport edges
//! - The canvas follows window resizes without repositioning particles
//! - The animation loop and resize listener stop when the component unmounts
//!
//! # Example
//!
//! ```ignore
//! use portfolio_site::components::particle_field::{ParticleField, ParticleStyle};
//!
//! let style = ParticleStyle { count: 120, ..ParticleStyle::default() };
//! view! { <ParticleField style=style /> }
//! ```

mod component;
mod handles;
mod particles;
mod render;
pub mod style;

pub use component::ParticleField;
pub use particles::{Particle, ParticleSystem};
pub use style::{Color, ParticleStyle};
