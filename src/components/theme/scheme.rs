use log::{debug, info};
use serde::Deserialize;

use super::store::{ClassTarget, PreferenceStore};
use super::types::*;

/// Which persisted-preference layout is in effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeKind {
	/// `colorTheme` + `darkMode`, with a palette selector.
	#[default]
	Palette,
	/// A single `theme` key toggled between `dark-theme` and `light-theme`.
	Legacy,
}

impl SchemeKind {
	pub fn scheme(self) -> Box<dyn ThemeScheme> {
		match self {
			SchemeKind::Palette => Box::new(PaletteScheme),
			SchemeKind::Legacy => Box::new(LegacyScheme),
		}
	}
}

/// A strategy for reading, applying and persisting appearance preferences.
pub trait ThemeScheme {
	/// Apply the persisted preferences to the root on startup.
	fn restore(&self, store: &mut dyn PreferenceStore, root: &mut dyn ClassTarget) -> Appearance;

	fn select_color_theme(
		&self,
		store: &mut dyn PreferenceStore,
		root: &mut dyn ClassTarget,
		theme: ColorTheme,
	) -> Appearance;

	fn toggle_dark_mode(
		&self,
		store: &mut dyn PreferenceStore,
		root: &mut dyn ClassTarget,
	) -> Appearance;

	/// Whether a palette selector should be offered.
	fn offers_palettes(&self) -> bool;
}

fn clear_theme_classes(root: &mut dyn ClassTarget) {
	for class in root.classes() {
		if class.starts_with(THEME_CLASS_PREFIX) {
			root.remove(&class);
		}
	}
}

fn apply_color_theme(root: &mut dyn ClassTarget, theme: ColorTheme) {
	clear_theme_classes(root);
	if let Some(class) = theme.class_name() {
		root.add(&class);
	}
}

fn bool_str(value: bool) -> &'static str {
	if value { "true" } else { "false" }
}

pub struct PaletteScheme;

impl PaletteScheme {
	fn appearance(root: &dyn ClassTarget) -> Appearance {
		Appearance {
			color_theme: root
				.classes()
				.iter()
				.find_map(|c| ColorTheme::from_class(c))
				.unwrap_or_default(),
			dark: root.contains(DARK_MODE_CLASS),
		}
	}

	/// Stored dark-mode flag, migrating from the legacy key when needed.
	fn stored_dark_mode(store: &mut dyn PreferenceStore) -> bool {
		if let Some(value) = store.get(DARK_MODE_KEY) {
			return value == "true";
		}
		let Some(legacy) = store.get(LEGACY_THEME_KEY) else {
			return false;
		};
		let dark = legacy != LEGACY_LIGHT;
		info!("Migrating legacy theme preference {legacy:?} to darkMode={dark}");
		store.set(DARK_MODE_KEY, bool_str(dark));
		dark
	}
}

impl ThemeScheme for PaletteScheme {
	fn restore(&self, store: &mut dyn PreferenceStore, root: &mut dyn ClassTarget) -> Appearance {
		let color_theme = store
			.get(COLOR_THEME_KEY)
			.map(|v| ColorTheme::parse_or_default(&v))
			.unwrap_or_default();
		let dark = Self::stored_dark_mode(store);

		root.assign(DARK_MODE_CLASS, dark);
		apply_color_theme(root, color_theme);
		debug!("Restored palette theme {color_theme}, dark={dark}");
		Appearance { color_theme, dark }
	}

	fn select_color_theme(
		&self,
		store: &mut dyn PreferenceStore,
		root: &mut dyn ClassTarget,
		theme: ColorTheme,
	) -> Appearance {
		apply_color_theme(root, theme);
		store.set(COLOR_THEME_KEY, theme.as_str());
		Self::appearance(root)
	}

	fn toggle_dark_mode(
		&self,
		store: &mut dyn PreferenceStore,
		root: &mut dyn ClassTarget,
	) -> Appearance {
		let dark = !root.contains(DARK_MODE_CLASS);
		root.assign(DARK_MODE_CLASS, dark);
		store.set(DARK_MODE_KEY, bool_str(dark));
		Self::appearance(root)
	}

	fn offers_palettes(&self) -> bool {
		true
	}
}

/// Dark by default; light mode is marked by a `light-theme` root class.
pub struct LegacyScheme;

impl LegacyScheme {
	fn appearance(root: &dyn ClassTarget) -> Appearance {
		Appearance {
			color_theme: ColorTheme::Default,
			dark: !root.contains(LEGACY_LIGHT),
		}
	}
}

impl ThemeScheme for LegacyScheme {
	fn restore(&self, store: &mut dyn PreferenceStore, root: &mut dyn ClassTarget) -> Appearance {
		let saved = store.get(LEGACY_THEME_KEY).unwrap_or_else(|| LEGACY_DARK.into());
		if saved == LEGACY_LIGHT {
			root.add(LEGACY_LIGHT);
		}
		debug!("Restored legacy theme {saved}");
		Self::appearance(root)
	}

	fn select_color_theme(
		&self,
		_store: &mut dyn PreferenceStore,
		root: &mut dyn ClassTarget,
		_theme: ColorTheme,
	) -> Appearance {
		Self::appearance(root)
	}

	fn toggle_dark_mode(
		&self,
		store: &mut dyn PreferenceStore,
		root: &mut dyn ClassTarget,
	) -> Appearance {
		if root.contains(LEGACY_LIGHT) {
			root.remove(LEGACY_LIGHT);
			store.set(LEGACY_THEME_KEY, LEGACY_DARK);
		} else {
			root.add(LEGACY_LIGHT);
			store.set(LEGACY_THEME_KEY, LEGACY_LIGHT);
		}
		Self::appearance(root)
	}

	fn offers_palettes(&self) -> bool {
		false
	}
}

/// Binds a scheme to a store and the document root.
pub struct ThemeController<S, C> {
	scheme: Box<dyn ThemeScheme>,
	store: S,
	root: C,
}

impl<S: PreferenceStore, C: ClassTarget> ThemeController<S, C> {
	pub fn new(kind: SchemeKind, store: S, root: C) -> Self {
		Self {
			scheme: kind.scheme(),
			store,
			root,
		}
	}

	pub fn restore(&mut self) -> Appearance {
		self.scheme.restore(&mut self.store, &mut self.root)
	}

	pub fn select_color_theme(&mut self, value: &str) -> Appearance {
		let theme = ColorTheme::parse_or_default(value);
		self.scheme
			.select_color_theme(&mut self.store, &mut self.root, theme)
	}

	pub fn toggle_dark_mode(&mut self) -> Appearance {
		self.scheme.toggle_dark_mode(&mut self.store, &mut self.root)
	}

	pub fn offers_palettes(&self) -> bool {
		self.scheme.offers_palettes()
	}

	#[cfg(test)]
	fn parts(&self) -> (&S, &C) {
		(&self.store, &self.root)
	}
}
