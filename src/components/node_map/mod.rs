mod component;
mod source;
mod state;
mod types;

pub use component::NodeMap;
pub use types::Placement;
