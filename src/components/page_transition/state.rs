//! Enter/exit sequencing for routed pages.
//!
//! [`PageTransition`] decides which page is mounted and which animation phase
//! it is in. It owns no timers: every change that needs one returns a [`Wait`]
//! and the host reports back through [`PageTransition::timer_elapsed`] once the
//! delay has passed. Each wait carries a generation number, so a timer that
//! outlived its transition is ignored.

use std::time::Duration;

use crate::routes::Route;

/// Animation phase of the mounted page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	/// Animating from the offset, transparent pose to the neutral pose.
	Entering,
	/// At rest.
	Visible,
	/// Animating out before the next page mounts.
	Exiting,
}

/// Timing and pose of the page animations.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionConfig {
	pub enter: Duration,
	pub exit: Duration,
	/// Vertical offset of the enter/exit poses, in pixels.
	pub offset_px: f64,
	/// CSS timing function.
	pub easing: &'static str,
}

impl Default for TransitionConfig {
	fn default() -> Self {
		Self {
			enter: Duration::from_millis(600),
			exit: Duration::from_millis(600),
			offset_px: 20.0,
			easing: "ease-in-out",
		}
	}
}

impl TransitionConfig {
	/// Inline style for the page wrapper in `phase`.
	///
	/// Enter and exit use the `page-enter` / `page-exit` keyframes from the
	/// stylesheet, which read the offset from `--page-offset`.
	pub fn style(&self, phase: Phase) -> String {
		let offset = format!("--page-offset: {}px;", self.offset_px);
		match phase {
			Phase::Entering => format!(
				"{offset} animation: page-enter {}ms {} both;",
				self.enter.as_millis(),
				self.easing
			),
			Phase::Visible => format!("{offset} opacity: 1; transform: none;"),
			Phase::Exiting => format!(
				"{offset} animation: page-exit {}ms {} both;",
				self.exit.as_millis(),
				self.easing
			),
		}
	}
}

/// A delay the host must wait before calling [`PageTransition::timer_elapsed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wait {
	pub delay: Duration,
	pub generation: u64,
}

/// One mounted page and its animation phase.
#[derive(Clone, Debug)]
pub struct PageTransition {
	route: Route,
	phase: Phase,
	pending: Option<Route>,
	/// Bumped on every phase change that starts a timer.
	generation: u64,
	/// Bumped whenever a page is (re)mounted.
	mount_id: u64,
	config: TransitionConfig,
}

impl PageTransition {
	/// Mount `route` and start its enter animation.
	pub fn new(route: Route, config: TransitionConfig) -> Self {
		Self {
			route,
			phase: Phase::Entering,
			pending: None,
			generation: 0,
			mount_id: 0,
			config,
		}
	}

	pub fn route(&self) -> Route {
		self.route
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub fn mount_id(&self) -> u64 {
		self.mount_id
	}

	/// Route waiting for the running exit to finish.
	pub fn pending(&self) -> Option<Route> {
		self.pending
	}

	pub fn config(&self) -> &TransitionConfig {
		&self.config
	}

	/// The wait the current phase is running, if any.
	pub fn current_wait(&self) -> Option<Wait> {
		let delay = match self.phase {
			Phase::Entering => self.config.enter,
			Phase::Exiting => self.config.exit,
			Phase::Visible => return None,
		};
		Some(Wait {
			delay,
			generation: self.generation,
		})
	}

	/// React to the location changing to `to`.
	///
	/// While an exit is running only the target is swapped, so the latest
	/// request wins and the exit keeps its original deadline.
	pub fn navigate(&mut self, to: Route) -> Option<Wait> {
		match self.phase {
			Phase::Exiting => {
				self.pending = Some(to);
				None
			}
			Phase::Entering | Phase::Visible if to == self.route => None,
			Phase::Entering | Phase::Visible => {
				self.pending = Some(to);
				self.start(Phase::Exiting)
			}
		}
	}

	/// Advance after the wait tagged `generation` has passed.
	pub fn timer_elapsed(&mut self, generation: u64) -> Option<Wait> {
		if generation != self.generation {
			return None;
		}
		match self.phase {
			Phase::Exiting => {
				if let Some(next) = self.pending.take() {
					self.route = next;
				}
				self.mount_id += 1;
				self.start(Phase::Entering)
			}
			Phase::Entering => {
				self.phase = Phase::Visible;
				None
			}
			Phase::Visible => None,
		}
	}

	fn start(&mut self, phase: Phase) -> Option<Wait> {
		self.phase = phase;
		self.generation += 1;
		self.current_wait()
	}
}
