pub mod node_map;
pub mod theme;
