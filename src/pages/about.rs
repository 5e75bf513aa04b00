//! About page with portrait and résumé download.

use leptos::prelude::*;
use leptos_meta::Title;

use super::site_content;

/// Short bio, portrait and résumé link.
#[component]
pub fn About() -> impl IntoView {
	let content = site_content();

	view! {
		<Title text="About" />
		<section class="page about">
			<h2 class="accent">"About Me"</h2>
			<p>{content.about}</p>
			<img class="portrait" src=content.portrait alt="About" />
			<a class="button" href=content.resume download="">
				"Download résumé"
			</a>
		</section>
	}
}
