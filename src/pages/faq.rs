//! Frequently asked questions as a single-open accordion.

use leptos::prelude::*;
use leptos_meta::Title;

use super::site_content;

/// Tracks the single expanded FAQ entry, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
	open: Option<usize>,
}

impl Accordion {
	/// Open entry `index`, closing any other. Toggling the open entry closes it.
	pub fn toggle(&mut self, index: usize) {
		self.open = if self.open == Some(index) {
			None
		} else {
			Some(index)
		};
	}

	pub fn is_open(&self, index: usize) -> bool {
		self.open == Some(index)
	}
}

/// FAQ list where opening one answer closes the others.
#[component]
pub fn Faq() -> impl IntoView {
	let entries = site_content().faq;
	let accordion = RwSignal::new(Accordion::default());

	view! {
		<Title text="FAQ" />
		<section class="page faq">
			<h2 class="accent">"Frequently Asked Questions"</h2>
			<ul class="faq-list">
				{entries
					.into_iter()
					.enumerate()
					.map(|(i, entry)| {
						let (question, answer) = (entry.question, entry.answer);
						let is_open = move || accordion.with(|a| a.is_open(i));
						view! {
							<li class="faq-entry" class:open=is_open>
								<button
									class="faq-question"
									aria-expanded=move || is_open().to_string()
									on:click=move |_| accordion.update(|a| a.toggle(i))
								>
									{question}
								</button>
								<Show when=is_open>
									<p class="faq-answer">{answer.clone()}</p>
								</Show>
							</li>
						}
					})
					.collect_view()}
			</ul>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_collapsed() {
		let accordion = Accordion::default();
		assert_eq!(accordion.open, None);
		assert!(!accordion.is_open(0));
	}

	#[test]
	fn opening_another_entry_closes_the_first() {
		let mut accordion = Accordion::default();
		accordion.toggle(1);
		accordion.toggle(3);
		assert!(!accordion.is_open(1));
		assert!(accordion.is_open(3));
	}

	#[test]
	fn toggling_the_open_entry_closes_it() {
		let mut accordion = Accordion::default();
		accordion.toggle(2);
		accordion.toggle(2);
		assert_eq!(accordion.open, None);
	}

	#[test]
	fn at_most_one_entry_is_open() {
		let mut accordion = Accordion::default();
		for i in [0, 2, 2, 1, 0, 3] {
			accordion.toggle(i);
			assert!((0..4).filter(|&j| accordion.is_open(j)).count() <= 1);
		}
	}
}
