//! Contact details and social links.

use leptos::prelude::*;
use leptos_meta::Title;

use super::site_content;

/// Email and social profile links.
#[component]
pub fn Contact() -> impl IntoView {
	let content = site_content();
	let mailto = format!("mailto:{}", content.email);

	view! {
		<Title text="Contact" />
		<section class="page contact">
			<h2 class="accent">"Contact"</h2>
			<p>"Reach me at " <a class="accent" href=mailto>{content.email}</a></p>
			<div class="socials">
				{content
					.socials
					.into_iter()
					.map(|link| view! { <a href=link.url rel="noopener">{link.label}</a> })
					.collect_view()}
			</div>
		</section>
	}
}
