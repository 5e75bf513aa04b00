//! Routed page views.

mod about;
mod contact;
mod faq;
mod home;
mod not_found;
mod projects;

use leptos::prelude::*;

pub use about::About;
pub use contact::Contact;
pub use faq::Faq;
pub use home::Home;
pub use not_found::NotFound;
pub use projects::Projects;

use crate::content::SiteContent;
use crate::routes::Route;

/// Build a fresh view for `route`.
pub fn render_route(route: Route) -> AnyView {
	match route {
		Route::Home => view! { <Home /> }.into_any(),
		Route::Projects => view! { <Projects /> }.into_any(),
		Route::About => view! { <About /> }.into_any(),
		Route::Contact => view! { <Contact /> }.into_any(),
		Route::Faq => view! { <Faq /> }.into_any(),
		Route::NotFound => view! { <NotFound /> }.into_any(),
	}
}

/// Content provided by the root component, or the built-in copy.
fn site_content() -> SiteContent {
	use_context::<SiteContent>().unwrap_or_default()
}
