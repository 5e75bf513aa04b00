//! portfolio-site: a personal portfolio rendered client-side with Leptos.
//!
//! The site is a handful of routed pages inside a shared navigation bar and
//! footer, with animated page transitions, a light/dark theme toggle and a
//! drifting particle background drawn on a canvas.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::Router;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod content;
mod pages;
pub mod routes;
pub mod theme;

pub use components::footer::Footer;
pub use components::nav::Navbar;
pub use components::page_transition::AnimatedRoutes;
pub use components::particle_field::ParticleField;
pub use content::SiteContent;
pub use routes::Route;
pub use theme::{ThemeController, ThemeMode};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-site: logging initialized");
}

/// Load a content override from a script element with id="site-content".
/// Expected format: JSON matching [`SiteContent`]; missing fields keep defaults.
pub fn load_site_content() -> Option<SiteContent> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("site-content")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match SiteContent::from_json(&json_text) {
		Ok(content) => {
			info!(
				"portfolio-site: loaded {} projects, {} faq entries",
				content.projects.len(),
				content.faq.len()
			);
			Some(content)
		}
		Err(e) => {
			warn!("portfolio-site: failed to parse site content: {}", e);
			None
		}
	}
}

/// Main application component.
/// Provides theme and content to the tree and lays out the site chrome.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let content = load_site_content().unwrap_or_default();
	let owner = content.owner.clone();
	let title_suffix = owner.clone();
	provide_context(content);

	let theme = ThemeController::new();
	provide_context(theme);
	Effect::new(move |_| {
		let mode = theme.mode();
		if theme::apply_to_document(mode).is_none() {
			warn!("portfolio-site: could not apply {} theme", mode.class_name());
		}
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title formatter=move |page: String| format!("{page} | {title_suffix}") />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleField />
		<Router>
			<div class="site">
				<Navbar />
				<main class="site-main">
					<AnimatedRoutes />
				</main>
				<Footer owner=owner />
			</div>
		</Router>
	}
}
