mod component;
mod scheme;
mod store;
mod types;

pub use component::ThemeSwitcher;
pub use scheme::SchemeKind;
