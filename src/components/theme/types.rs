use std::fmt;

/// Store key for the palette selection.
pub const COLOR_THEME_KEY: &str = "colorTheme";
/// Store key for the dark-mode flag, persisted as `"true"`/`"false"`.
pub const DARK_MODE_KEY: &str = "darkMode";
/// Store key used by the single-value legacy layout.
pub const LEGACY_THEME_KEY: &str = "theme";

pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const THEME_CLASS_PREFIX: &str = "theme-";

pub const LEGACY_DARK: &str = "dark-theme";
pub const LEGACY_LIGHT: &str = "light-theme";

/// Named palettes. `Default` applies no `theme-*` class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorTheme {
	#[default]
	Default,
	Solarized,
	Nord,
	Dracula,
	Forest,
}

impl ColorTheme {
	pub const ALL: [ColorTheme; 5] = [
		ColorTheme::Default,
		ColorTheme::Solarized,
		ColorTheme::Nord,
		ColorTheme::Dracula,
		ColorTheme::Forest,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			ColorTheme::Default => "default",
			ColorTheme::Solarized => "solarized",
			ColorTheme::Nord => "nord",
			ColorTheme::Dracula => "dracula",
			ColorTheme::Forest => "forest",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			ColorTheme::Default => "Default",
			ColorTheme::Solarized => "Solarized",
			ColorTheme::Nord => "Nord",
			ColorTheme::Dracula => "Dracula",
			ColorTheme::Forest => "Forest",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|t| t.as_str() == value)
	}

	/// Unrecognized values fall back to `Default`.
	pub fn parse_or_default(value: &str) -> Self {
		Self::parse(value).unwrap_or_default()
	}

	/// The root class for this palette, if any.
	pub fn class_name(self) -> Option<String> {
		match self {
			ColorTheme::Default => None,
			other => Some(format!("{THEME_CLASS_PREFIX}{}", other.as_str())),
		}
	}

	/// Recover the palette from a `theme-*` class name.
	pub fn from_class(class: &str) -> Option<Self> {
		class
			.strip_prefix(THEME_CLASS_PREFIX)
			.and_then(Self::parse)
			.filter(|t| *t != ColorTheme::Default)
	}
}

impl fmt::Display for ColorTheme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// What the document currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Appearance {
	pub color_theme: ColorTheme,
	pub dark: bool,
}

impl Appearance {
	/// Palette choices in display order, flagging the one the control shows.
	pub fn palette_options(&self) -> impl Iterator<Item = (ColorTheme, bool)> {
		let current = self.color_theme;
		ColorTheme::ALL.into_iter().map(move |t| (t, t == current))
	}
}
