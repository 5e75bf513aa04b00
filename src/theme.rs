//! Light/dark display mode.
//!
//! The mode lives in a [`ThemeController`] provided through Leptos context.
//! The root component mirrors it onto `<html>` as a single `dark` or `light`
//! class, which the stylesheet keys off.

use leptos::prelude::*;

/// The site's display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
	#[default]
	Dark,
	Light,
}

impl ThemeMode {
	pub fn toggle(self) -> Self {
		match self {
			ThemeMode::Dark => ThemeMode::Light,
			ThemeMode::Light => ThemeMode::Dark,
		}
	}

	/// Class applied to the document root.
	pub fn class_name(self) -> &'static str {
		match self {
			ThemeMode::Dark => "dark",
			ThemeMode::Light => "light",
		}
	}

	/// Button label offering the other mode.
	pub fn toggle_label(self) -> &'static str {
		match self {
			ThemeMode::Dark => "Light Mode",
			ThemeMode::Light => "Dark Mode",
		}
	}
}

/// Single writer for the display mode.
#[derive(Clone, Copy)]
pub struct ThemeController {
	mode: RwSignal<ThemeMode>,
}

impl ThemeController {
	pub fn new() -> Self {
		Self {
			mode: RwSignal::new(ThemeMode::default()),
		}
	}

	/// Current mode. Tracks when read inside a reactive scope.
	pub fn mode(&self) -> ThemeMode {
		self.mode.get()
	}

	pub fn toggle(&self) {
		self.mode.update(|m| *m = m.toggle());
	}
}

impl Default for ThemeController {
	fn default() -> Self {
		Self::new()
	}
}

/// Make `mode` the only theme class on the document root.
pub fn apply_to_document(mode: ThemeMode) -> Option<()> {
	let root = web_sys::window()?.document()?.document_element()?;
	let classes = root.class_list();
	classes
		.remove_2(ThemeMode::Dark.class_name(), ThemeMode::Light.class_name())
		.ok()?;
	classes.add_1(mode.class_name()).ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_to_dark() {
		assert_eq!(ThemeMode::default(), ThemeMode::Dark);
	}

	#[test]
	fn toggle_is_its_own_inverse() {
		for mode in [ThemeMode::Dark, ThemeMode::Light] {
			assert_ne!(mode.toggle(), mode);
			assert_eq!(mode.toggle().toggle(), mode);
		}
	}

	#[test]
	fn labels_offer_the_other_mode() {
		assert_eq!(ThemeMode::Dark.toggle_label(), "Light Mode");
		assert_eq!(ThemeMode::Light.toggle_label(), "Dark Mode");
		assert_eq!(ThemeMode::Dark.class_name(), "dark");
		assert_eq!(ThemeMode::Light.class_name(), "light");
	}
}
