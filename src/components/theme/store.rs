//! The UI-state context the theme schemes act on: a string key/value store
//! and the class list of the document root. Browser-backed implementations
//! wrap `localStorage` and `<body>`.

use log::warn;
use thiserror::Error;
use web_sys::{Element, Storage};

#[derive(Debug, Error)]
pub enum ThemeError {
	#[error("no window available")]
	NoWindow,
	#[error("local storage is unavailable")]
	StorageUnavailable,
	#[error("document has no body")]
	NoBody,
}

/// Durable string key/value preferences.
pub trait PreferenceStore {
	fn get(&self, key: &str) -> Option<String>;
	fn set(&mut self, key: &str, value: &str);
}

/// A mutable class list.
pub trait ClassTarget {
	fn contains(&self, class: &str) -> bool;
	fn add(&mut self, class: &str);
	fn remove(&mut self, class: &str);
	fn classes(&self) -> Vec<String>;

	fn assign(&mut self, class: &str, present: bool) {
		if present {
			self.add(class);
		} else {
			self.remove(class);
		}
	}
}

pub struct BrowserStore(Storage);

impl BrowserStore {
	pub fn local() -> Result<Self, ThemeError> {
		let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
		match window.local_storage() {
			Ok(Some(storage)) => Ok(Self(storage)),
			_ => Err(ThemeError::StorageUnavailable),
		}
	}
}

impl PreferenceStore for BrowserStore {
	fn get(&self, key: &str) -> Option<String> {
		self.0.get_item(key).ok().flatten()
	}

	fn set(&mut self, key: &str, value: &str) {
		if let Err(err) = self.0.set_item(key, value) {
			warn!("Failed to persist {key}: {err:?}");
		}
	}
}

pub struct ElementClasses(Element);

impl ElementClasses {
	pub fn body() -> Result<Self, ThemeError> {
		let document = web_sys::window()
			.and_then(|w| w.document())
			.ok_or(ThemeError::NoWindow)?;
		let body = document.body().ok_or(ThemeError::NoBody)?;
		Ok(Self(body.into()))
	}
}

impl ClassTarget for ElementClasses {
	fn contains(&self, class: &str) -> bool {
		self.0.class_list().contains(class)
	}

	fn add(&mut self, class: &str) {
		let _ = self.0.class_list().add_1(class);
	}

	fn remove(&mut self, class: &str) {
		let _ = self.0.class_list().remove_1(class);
	}

	fn classes(&self) -> Vec<String> {
		let list = self.0.class_list();
		(0..list.length()).filter_map(|i| list.item(i)).collect()
	}
}

#[cfg(test)]
pub(crate) mod memory {
	use std::collections::{BTreeSet, HashMap};

	use super::{ClassTarget, PreferenceStore};

	#[derive(Default)]
	pub struct MemoryStore(pub HashMap<String, String>);

	impl MemoryStore {
		pub fn with(pairs: &[(&str, &str)]) -> Self {
			Self(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
		}
	}

	impl PreferenceStore for MemoryStore {
		fn get(&self, key: &str) -> Option<String> {
			self.0.get(key).cloned()
		}

		fn set(&mut self, key: &str, value: &str) {
			self.0.insert(key.into(), value.into());
		}
	}

	#[derive(Default)]
	pub struct MemoryClasses(pub BTreeSet<String>);

	impl MemoryClasses {
		pub fn with(classes: &[&str]) -> Self {
			Self(classes.iter().map(|c| c.to_string()).collect())
		}
	}

	impl ClassTarget for MemoryClasses {
		fn contains(&self, class: &str) -> bool {
			self.0.contains(class)
		}

		fn add(&mut self, class: &str) {
			self.0.insert(class.into());
		}

		fn remove(&mut self, class: &str) {
			self.0.remove(class);
		}

		fn classes(&self) -> Vec<String> {
			self.0.iter().cloned().collect()
		}
	}
}
