//! Home page with the headline and calls to action.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::site_content;
use crate::routes::Route;

/// Landing page.
#[component]
pub fn Home() -> impl IntoView {
	let content = site_content();

	view! {
		<Title text="Home" />
		<section class="page home">
			<h1 class="accent">{content.owner}"'s"<br />"Personal Portfolio"</h1>
			<p class="lead">{content.tagline}</p>
			<div class="cta">
				<A href=Route::Projects.path()>"See my work"</A>
				<A href=Route::Contact.path()>"Get in touch"</A>
			</div>
		</section>
	}
}
