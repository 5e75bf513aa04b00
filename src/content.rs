//! Site content: copy, projects and FAQ entries.
//!
//! The built-in [`SiteContent::default`] is used unless the host page embeds a
//! JSON override (see [`crate::load_site_content`]). Fields missing from the
//! override keep their defaults.

use serde::Deserialize;

/// A portfolio entry shown on the Projects page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
	pub title: String,
	pub description: String,
	/// Single category used by the tag filter.
	pub tag: String,
	/// Logo image path.
	pub logo: String,
}

/// A question/answer pair shown on the FAQ page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FaqEntry {
	pub question: String,
	pub answer: String,
}

/// An external profile link on the Contact page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SocialLink {
	pub label: String,
	pub url: String,
}

/// Everything the pages render.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteContent {
	pub owner: String,
	pub tagline: String,
	pub about: String,
	pub portrait: String,
	pub resume: String,
	pub email: String,
	pub socials: Vec<SocialLink>,
	pub projects: Vec<Project>,
	pub faq: Vec<FaqEntry>,
}

fn project(title: &str, description: &str, tag: &str, logo: &str) -> Project {
	Project {
		title: title.into(),
		description: description.into(),
		tag: tag.into(),
		logo: logo.into(),
	}
}

fn faq(question: &str, answer: &str) -> FaqEntry {
	FaqEntry {
		question: question.into(),
		answer: answer.into(),
	}
}

fn social(label: &str, url: &str) -> SocialLink {
	SocialLink {
		label: label.into(),
		url: url.into(),
	}
}

impl Default for SiteContent {
	fn default() -> Self {
		Self {
			owner: "Razvan Paleacu".into(),
			tagline: "Creative crypto marketing specialist helping Web3 brands grow through \
			          strategy, content & community."
				.into(),
			about: "I'm a marketer who thrives in Web3. I specialize in building powerful \
			        narratives and communities for crypto startups."
				.into(),
			portrait: "/IMG_7022.JPG".into(),
			resume: "/resume.pdf".into(),
			email: "hello@razvancrypto.xyz".into(),
			socials: vec![
				social("Twitter", "https://twitter.com"),
				social("LinkedIn", "https://linkedin.com"),
				social("GitHub", "https://github.com"),
			],
			projects: vec![
				project(
					"Depined",
					"Worked with depined.org on DePIN ecosystem growth and marketing.",
					"DePIN",
					"/depin.png",
				),
				project(
					"AxenAI",
					"Brand & content strategy for axenai.com, a cutting-edge Web3 AI assistant.",
					"AI",
					"/axenai.png",
				),
				project(
					"AgentsGPT",
					"Supported agentsgpt.org with community building and product messaging.",
					"Infra",
					"/agentsgpt.png",
				),
			],
			faq: vec![
				faq(
					"What kind of projects do you take on?",
					"Early and growth-stage Web3 teams that need positioning, content and \
					 community programs.",
				),
				faq(
					"Do you work with non-crypto brands?",
					"Occasionally, when the product has a strong community angle.",
				),
				faq(
					"How do engagements usually start?",
					"With a short call to map goals, followed by a written proposal.",
				),
				faq(
					"Where can I see your résumé?",
					"There is a download link on the About page.",
				),
			],
		}
	}
}

impl SiteContent {
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}
}
