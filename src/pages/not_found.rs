//! Fallback view for unmatched paths.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::routes::Route;

/// Fallback for paths that match no page.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<Title text="Page not found" />
		<section class="page not-found">
			<h2 class="accent">"404"</h2>
			<p>"There is nothing at this address."</p>
			<A href=Route::Home.path()>"Back home"</A>
		</section>
	}
}
