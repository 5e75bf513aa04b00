//! Leptos component playing page transitions on route changes.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use log::{debug, warn};

use super::state::{PageTransition, TransitionConfig, Wait};
use crate::pages::render_route;
use crate::routes::Route;

/// Schedule `wait` and keep stepping the transition until it settles.
fn schedule(
	transition: RwSignal<PageTransition>,
	timer: StoredValue<Option<TimeoutHandle>>,
	wait: Option<Wait>,
) {
	let Some(wait) = wait else {
		return;
	};
	let handle = set_timeout_with_handle(
		move || {
			let next = transition
				.try_update(|t| t.timer_elapsed(wait.generation))
				.flatten();
			schedule(transition, timer, next);
		},
		wait.delay,
	);
	match handle {
		Ok(handle) => {
			if let Some(Some(previous)) = timer.try_update_value(|t| t.replace(handle)) {
				previous.clear();
			}
		}
		Err(e) => warn!("page transition: failed to schedule timer: {:?}", e),
	}
}

/// Renders the page for the current location, animating between pages.
///
/// Only one page is mounted at a time: on navigation the outgoing page plays
/// its exit animation first and the incoming page mounts afterwards.
#[component]
pub fn AnimatedRoutes(#[prop(optional)] config: Option<TransitionConfig>) -> impl IntoView {
	let location = use_location();
	let initial = Route::from_path(&location.pathname.get_untracked());
	let transition = RwSignal::new(PageTransition::new(initial, config.unwrap_or_default()));
	let timer = StoredValue::new(None::<TimeoutHandle>);

	schedule(transition, timer, transition.with_untracked(|t| t.current_wait()));

	Effect::new(move |_| {
		let route = Route::from_path(&location.pathname.get());
		debug!("page transition: location is now {:?}", route);
		let next = transition.try_update(|t| t.navigate(route)).flatten();
		schedule(transition, timer, next);
	});

	on_cleanup(move || {
		if let Some(Some(handle)) = timer.try_get_value() {
			handle.clear();
		}
	});

	// Remount only when the page itself changes, not on every phase change.
	let mounted = Memo::new(move |_| transition.with(|t| (t.route(), t.mount_id())));
	let style = move || transition.with(|t| t.config().style(t.phase()));

	view! {
		<div class="page-transition" style=style>
			{move || render_route(mounted.get().0)}
		</div>
	}
}
