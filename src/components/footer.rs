//! Site footer.

use leptos::prelude::*;

/// Copyright line shown under every page.
#[component]
pub fn Footer(#[prop(into)] owner: String) -> impl IntoView {
	let year = js_sys::Date::new_0().get_full_year();

	view! {
		<footer class="footer">
			<p>"© " {year} " " {owner} ". Built for the Web3 era."</p>
		</footer>
	}
}
