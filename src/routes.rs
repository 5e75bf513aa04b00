//! Known site routes and path matching.

/// A page of the site, selected by the current location path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
	Home,
	Projects,
	About,
	Contact,
	Faq,
	/// Any path that matches no page.
	NotFound,
}

impl Route {
	/// Routes linked from the navigation bar, in display order.
	pub const NAV: [Route; 5] = [
		Route::Home,
		Route::Projects,
		Route::About,
		Route::Contact,
		Route::Faq,
	];

	/// Match a location path. A single trailing slash is ignored.
	pub fn from_path(path: &str) -> Self {
		let trimmed = match path.strip_suffix('/') {
			Some(rest) if !rest.is_empty() => rest,
			_ => path,
		};
		match trimmed {
			"/" | "" => Route::Home,
			"/projects" => Route::Projects,
			"/about" => Route::About,
			"/contact" => Route::Contact,
			"/faq" => Route::Faq,
			_ => Route::NotFound,
		}
	}

	/// Canonical path. `NotFound` has none and points home.
	pub fn path(self) -> &'static str {
		match self {
			Route::Home | Route::NotFound => "/",
			Route::Projects => "/projects",
			Route::About => "/about",
			Route::Contact => "/contact",
			Route::Faq => "/faq",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Route::Home => "Home",
			Route::Projects => "Projects",
			Route::About => "About",
			Route::Contact => "Contact",
			Route::Faq => "FAQ",
			Route::NotFound => "Not Found",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_paths_match() {
		assert_eq!(Route::from_path("/"), Route::Home);
		assert_eq!(Route::from_path("/projects"), Route::Projects);
		assert_eq!(Route::from_path("/about"), Route::About);
		assert_eq!(Route::from_path("/contact"), Route::Contact);
		assert_eq!(Route::from_path("/faq"), Route::Faq);
	}

	#[test]
	fn trailing_slash_is_ignored() {
		assert_eq!(Route::from_path("/projects/"), Route::Projects);
		assert_eq!(Route::from_path("/faq/"), Route::Faq);
	}

	#[test]
	fn unknown_paths_fall_back_to_not_found() {
		assert_eq!(Route::from_path("/hidden"), Route::NotFound);
		assert_eq!(Route::from_path("/resources"), Route::NotFound);
		assert_eq!(Route::from_path("/projects/extra"), Route::NotFound);
		assert_eq!(Route::from_path("/Projects"), Route::NotFound);
	}

	#[test]
	fn nav_paths_round_trip() {
		for route in Route::NAV {
			assert_eq!(Route::from_path(route.path()), route);
		}
	}
}
