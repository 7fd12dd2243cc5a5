use rand::{Rng, RngCore};
use serde::Deserialize;
use serde_json::Value;

use crate::chart::PlotPoint;

/// Scatter coordinates are drawn from `[0, SCATTER_EXTENT)`.
pub const SCATTER_EXTENT: f64 = 100.0;
pub const BUBBLE_RADIUS: f64 = 20.0;

/// One item from the nodes endpoint. Its shape is not constrained.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct NodeRecord(pub Value);

impl NodeRecord {
	fn number(&self, field: &str) -> Option<f64> {
		self.0.get(field).and_then(Value::as_f64)
	}
}

/// Parse an endpoint body. Anything but a JSON array is rejected.
pub fn parse_nodes(body: &str) -> Result<Vec<NodeRecord>, serde_json::Error> {
	serde_json::from_str(body)
}

/// How a record becomes a bubble.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
	/// Independent uniform x and y, fixed radius; record content is ignored.
	#[default]
	Scatter,
	/// Numeric `x`, `y`, `r` fields of the record.
	Record,
}

impl Placement {
	pub fn place(self, record: &NodeRecord, rng: &mut dyn RngCore) -> PlotPoint {
		match self {
			Placement::Scatter => PlotPoint {
				x: rng.random_range(0.0..SCATTER_EXTENT),
				y: rng.random_range(0.0..SCATTER_EXTENT),
				radius: BUBBLE_RADIUS,
			},
			Placement::Record => PlotPoint {
				x: record.number("x").unwrap_or(0.0),
				y: record.number("y").unwrap_or(0.0),
				radius: record.number("r").unwrap_or(BUBBLE_RADIUS),
			},
		}
	}

	/// One point per record, in record order.
	pub fn place_all(self, records: &[NodeRecord], rng: &mut dyn RngCore) -> Vec<PlotPoint> {
		records.iter().map(|r| self.place(r, rng)).collect()
	}
}
