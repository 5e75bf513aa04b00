//! Top navigation bar with theme toggle and collapsible mobile menu.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::Route;
use crate::theme::ThemeController;

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
	pub open: bool,
}

impl MenuState {
	pub fn toggle(&mut self) {
		self.open = !self.open;
	}

	pub fn close(&mut self) {
		self.open = false;
	}
}

/// Site navigation: theme toggle, menu toggle and one link per page.
///
/// On narrow screens the links collapse behind the menu button. Following a
/// link or clicking anywhere outside the open menu collapses it again.
#[component]
pub fn Navbar() -> impl IntoView {
	let theme = use_context::<ThemeController>().unwrap_or_default();
	let menu = RwSignal::new(MenuState::default());
	let is_open = move || menu.with(|m| m.open);

	// The backdrop sits outside the nav: `.navbar` applies a backdrop filter,
	// which would make it the containing block of a fixed child.
	view! {
		<Show when=is_open>
			<div class="menu-backdrop" on:click=move |_| menu.update(MenuState::close)></div>
		</Show>
		<nav class="navbar">
			<button class="theme-toggle" on:click=move |_| theme.toggle()>
				{move || theme.mode().toggle_label()}
			</button>
			<button
				class="menu-toggle"
				aria-label="Toggle menu"
				aria-expanded=move || is_open().to_string()
				on:click=move |_| menu.update(MenuState::toggle)
			>
				"☰"
			</button>
			<div
				class="nav-links"
				class:open=is_open
				on:click=move |_| menu.update(MenuState::close)
			>
				{Route::NAV
					.into_iter()
					.map(|route| {
						view! {
							<A href=route.path() exact=true>
								<span>{route.label()}</span>
							</A>
						}
					})
					.collect_view()}
			</div>
		</nav>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn menu_starts_closed() {
		assert!(!MenuState::default().open);
	}

	#[test]
	fn toggle_opens_and_closes() {
		let mut menu = MenuState::default();
		menu.toggle();
		assert!(menu.open);
		menu.toggle();
		assert!(!menu.open);
	}

	/// Extract the `z-index` of the last rule for `selector` in `css`.
	fn z_index(css: &str, selector: &str) -> Option<i32> {
		let start = css.rfind(&format!("{selector} {{"))?;
		let body = &css[start..start + css[start..].find('}')?];
		let value = body.split("z-index:").nth(1)?;
		value.split(';').next()?.trim().parse().ok()
	}

	#[test]
	fn backdrop_covers_page_below_the_open_menu() {
		let css = include_str!("../../style/main.css");
		let nav = z_index(css, ".navbar").expect("navbar z-index");
		let backdrop = z_index(css, ".menu-backdrop").expect("backdrop z-index");
		assert!(backdrop > 0, "backdrop must stack above page content");
		assert!(backdrop < nav, "open menu must stay clickable above the backdrop");
	}

	#[test]
	fn clicking_outside_closes_open_menu() {
		let mut menu = MenuState::default();
		menu.toggle();
		menu.close();
		assert!(!menu.open);
	}

	#[test]
	fn close_is_idempotent() {
		let mut menu = MenuState { open: true };
		menu.close();
		menu.close();
		assert!(!menu.open);
	}
}
