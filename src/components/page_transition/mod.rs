//! Enter/exit animation around the routed page.
//!
//! [`PageTransition`] is the timer-agnostic state machine; [`AnimatedRoutes`]
//! drives it from the router location and Leptos timeouts.

mod component;
mod state;

pub use component::AnimatedRoutes;
pub use state::{PageTransition, Phase, TransitionConfig, Wait};
