//! Project grid with tag filtering.

use leptos::prelude::*;
use leptos_meta::Title;

use super::site_content;
use crate::content::Project;

/// Selected tag on the Projects page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TagFilter {
	#[default]
	All,
	Tag(String),
}

impl TagFilter {
	pub fn label(&self) -> &str {
		match self {
			TagFilter::All => "All",
			TagFilter::Tag(tag) => tag,
		}
	}

	pub fn matches(&self, project: &Project) -> bool {
		match self {
			TagFilter::All => true,
			TagFilter::Tag(tag) => project.tag == *tag,
		}
	}
}

/// Projects passing `filter`, in their original order.
pub fn filter_projects<'a>(projects: &'a [Project], filter: &TagFilter) -> Vec<&'a Project> {
	projects.iter().filter(|p| filter.matches(p)).collect()
}

/// `All` followed by each distinct tag in first-seen order.
pub fn project_tags(projects: &[Project]) -> Vec<TagFilter> {
	let mut tags = vec![TagFilter::All];
	for project in projects {
		let tag = TagFilter::Tag(project.tag.clone());
		if !tags.contains(&tag) {
			tags.push(tag);
		}
	}
	tags
}

fn project_card(project: Project) -> impl IntoView {
	view! {
		<article class="project-card">
			<div class="project-logo">
				<img src=project.logo alt=project.title.clone() />
			</div>
			<h3 class="accent">{project.title}</h3>
			<p>{project.description}</p>
			<span class="tag">{project.tag}</span>
		</article>
	}
}

/// Portfolio grid with a single-tag filter. The filter resets to `All`
/// whenever the page is mounted.
#[component]
pub fn Projects() -> impl IntoView {
	let projects = site_content().projects;
	let tags = project_tags(&projects);
	let filter = RwSignal::new(TagFilter::All);

	let buttons = tags
		.into_iter()
		.map(|tag| {
			let label = tag.label().to_string();
			let selected = tag.clone();
			view! {
				<button
					class="tag-filter"
					class:active=move || filter.with(|f| *f == selected)
					on:click=move |_| filter.set(tag.clone())
				>
					{label}
				</button>
			}
		})
		.collect_view();

	view! {
		<Title text="Projects" />
		<section class="page projects">
			<h2 class="accent">"Projects"</h2>
			<div class="tag-filters">{buttons}</div>
			<div class="project-grid">
				{move || {
					filter.with(|f| {
						filter_projects(&projects, f)
							.into_iter()
							.cloned()
							.map(project_card)
							.collect_view()
					})
				}}
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::content::SiteContent;

	fn titles(projects: &[&Project]) -> Vec<String> {
		projects.iter().map(|p| p.title.clone()).collect()
	}

	#[test]
	fn all_keeps_every_project_in_order() {
		let projects = SiteContent::default().projects;
		let filtered = filter_projects(&projects, &TagFilter::All);
		assert_eq!(titles(&filtered), vec!["Depined", "AxenAI", "AgentsGPT"]);
	}

	#[test]
	fn tag_selects_exact_matches() {
		let projects = SiteContent::default().projects;
		let filtered = filter_projects(&projects, &TagFilter::Tag("AI".into()));
		assert_eq!(titles(&filtered), vec!["AxenAI"]);
	}

	#[test]
	fn unknown_tag_selects_nothing() {
		let projects = SiteContent::default().projects;
		assert!(filter_projects(&projects, &TagFilter::Tag("ai".into())).is_empty());
	}

	#[test]
	fn tags_are_distinct_and_ordered() {
		let mut projects = SiteContent::default().projects;
		projects.push(projects[0].clone());
		let labels: Vec<_> = project_tags(&projects)
			.iter()
			.map(|t| t.label().to_string())
			.collect();
		assert_eq!(labels, vec!["All", "DePIN", "AI", "Infra"]);
	}

	#[test]
	fn default_filter_is_all() {
		assert_eq!(TagFilter::default(), TagFilter::All);
	}
}
