//! Page-level configuration.
//!
//! Read from an optional `<script type="application/json" id="app-config">`
//! block. Every field falls back to its default when absent.

use log::Level;
use serde::Deserialize;

use crate::components::node_map::Placement;
use crate::components::theme::SchemeKind;

/// Element id of the inline JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// Runtime configuration for the app.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
	/// Endpoint returning the JSON array of node records.
	pub nodes_endpoint: String,
	/// Which preference layout the theme switcher uses.
	pub theme_scheme: SchemeKind,
	/// How node records become bubbles.
	pub placement: Placement,
	/// Console log level.
	pub log_level: Level,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			nodes_endpoint: "/json/nodes".into(),
			theme_scheme: SchemeKind::default(),
			placement: Placement::default(),
			log_level: Level::Debug,
		}
	}
}

impl AppConfig {
	/// Parse a config block. Missing keys take their defaults.
	pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
		if raw.trim().is_empty() {
			return Ok(Self::default());
		}
		serde_json::from_str(raw)
	}

	/// Load the config from the current document.
	///
	/// Returns the parse error alongside the defaults so the caller can
	/// report it once logging is up.
	pub fn from_document() -> (Self, Option<serde_json::Error>) {
		let raw = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
			.and_then(|el| el.text_content());

		match raw.as_deref().map(Self::from_json) {
			None => (Self::default(), None),
			Some(Ok(config)) => (config, None),
			Some(Err(err)) => (Self::default(), Some(err)),
		}
	}
}
