use log::{debug, error, info, warn};
use rand::RngCore;
use thiserror::Error;

use super::types::{NodeRecord, Placement};
use crate::chart::{ChartConfig, ChartError, Dataset};

pub const DATASET_LABEL: &str = "Nodes";

#[derive(Debug, Error)]
pub enum NodeMapError {
	#[error("request to {endpoint} failed: {source}")]
	Request {
		endpoint: String,
		#[source]
		source: gloo_net::Error,
	},
	#[error("response is not a node list: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("chart construction failed: {0}")]
	Chart(#[from] ChartError),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderPhase {
	/// No request issued yet.
	#[default]
	Idle,
	Pending,
	Rendered,
	Failed,
}

/// Whatever actually draws the chart.
pub trait ChartSurface {
	fn construct(&mut self, config: ChartConfig) -> Result<(), ChartError>;
	fn relayout(&mut self) -> Result<(), ChartError>;
}

/// Developer-facing error channel.
pub trait Diagnostics {
	fn report(&mut self, err: &NodeMapError);
}

/// Reports through `log::error!`, which lands in the browser console.
#[derive(Default)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
	fn report(&mut self, err: &NodeMapError) {
		error!("Error fetching data: {err}");
	}
}

/// One fetch, one chart. `Rendered` and `Failed` are terminal.
pub struct NodeMapRenderer<S, D> {
	surface: S,
	diagnostics: D,
	placement: Placement,
	phase: RenderPhase,
}

impl<S: ChartSurface, D: Diagnostics> NodeMapRenderer<S, D> {
	pub fn new(surface: S, diagnostics: D, placement: Placement) -> Self {
		Self {
			surface,
			diagnostics,
			placement,
			phase: RenderPhase::Idle,
		}
	}

	#[cfg(test)]
	pub fn phase(&self) -> RenderPhase {
		self.phase
	}

	/// Claim the single request. Returns `false` if one was already issued.
	pub fn begin(&mut self) -> bool {
		if self.phase != RenderPhase::Idle {
			return false;
		}
		self.phase = RenderPhase::Pending;
		true
	}

	/// Continue after the request resolves or rejects.
	pub fn settle(
		&mut self,
		outcome: Result<Vec<NodeRecord>, NodeMapError>,
		rng: &mut dyn RngCore,
	) -> RenderPhase {
		if self.phase != RenderPhase::Pending {
			warn!("Ignoring node data in phase {:?}", self.phase);
			return self.phase;
		}

		let result = outcome.and_then(|records| {
			let points = self.placement.place_all(&records, rng);
			debug!("Mapped {} node records to bubbles", points.len());
			let config = ChartConfig::bubble(Dataset::new(DATASET_LABEL, points));
			self.surface.construct(config).map_err(NodeMapError::from)
		});

		self.phase = match result {
			Ok(()) => {
				info!("Node map rendered");
				RenderPhase::Rendered
			}
			Err(err) => {
				self.diagnostics.report(&err);
				RenderPhase::Failed
			}
		};
		self.phase
	}

	/// Relayout on viewport resize. Only meaningful once rendered.
	pub fn on_resize(&mut self) {
		if self.phase != RenderPhase::Rendered {
			return;
		}
		if let Err(err) = self.surface.relayout() {
			warn!("Node map relayout failed: {err}");
		}
	}

	#[cfg(test)]
	pub(crate) fn parts(&self) -> (&S, &D) {
		(&self.surface, &self.diagnostics)
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use futures::executor::block_on;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::super::source::NodeSource;
	use super::super::types::parse_nodes;
	use super::*;
	use crate::chart::ChartKind;

	#[derive(Default)]
	struct RecordingSurface {
		constructed: Vec<ChartConfig>,
		relayouts: usize,
		fail_construct: bool,
	}

	impl ChartSurface for RecordingSurface {
		fn construct(&mut self, config: ChartConfig) -> Result<(), ChartError> {
			if self.fail_construct {
				return Err(ChartError::NoContext);
			}
			self.constructed.push(config);
			Ok(())
		}

		fn relayout(&mut self) -> Result<(), ChartError> {
			self.relayouts += 1;
			Ok(())
		}
	}

	#[derive(Default)]
	struct RecordingDiagnostics(Vec<String>);

	impl Diagnostics for RecordingDiagnostics {
		fn report(&mut self, err: &NodeMapError) {
			self.0.push(err.to_string());
		}
	}

	/// Serves a fixed body and counts requests.
	struct FixedSource {
		body: &'static str,
		requests: Cell<usize>,
	}

	impl FixedSource {
		fn new(body: &'static str) -> Self {
			Self {
				body,
				requests: Cell::new(0),
			}
		}
	}

	impl NodeSource for FixedSource {
		async fn fetch(&self) -> Result<Vec<NodeRecord>, NodeMapError> {
			self.requests.set(self.requests.get() + 1);
			Ok(parse_nodes(self.body)?)
		}
	}

	type Renderer = NodeMapRenderer<RecordingSurface, RecordingDiagnostics>;

	fn renderer() -> Renderer {
		NodeMapRenderer::new(
			RecordingSurface::default(),
			RecordingDiagnostics::default(),
			Placement::Scatter,
		)
	}

	fn load(renderer: &mut Renderer, source: &FixedSource) -> RenderPhase {
		assert!(renderer.begin());
		let outcome = block_on(source.fetch());
		renderer.settle(outcome, &mut SmallRng::seed_from_u64(42))
	}

	#[test]
	fn three_records_make_three_bubbles_and_resize_does_not_refetch() {
		let source = FixedSource::new(r#"[{"id":1},{"id":2},{"id":3}]"#);
		let mut renderer = renderer();
		assert_eq!(load(&mut renderer, &source), RenderPhase::Rendered);

		renderer.on_resize();
		renderer.on_resize();
		renderer.on_resize();

		let (surface, diagnostics) = renderer.parts();
		assert_eq!(surface.constructed.len(), 1);
		let config = &surface.constructed[0];
		assert_eq!(config.kind, ChartKind::Bubble);
		assert_eq!(config.datasets.len(), 1);
		assert_eq!(config.datasets[0].label, "Nodes");
		assert_eq!(config.datasets[0].border_width, 1.0);
		assert_eq!(config.point_count(), 3);
		assert!(config.options.x.begin_at_zero);
		assert!(config.options.y.begin_at_zero);

		assert_eq!(surface.relayouts, 3);
		assert_eq!(source.requests.get(), 1);
		assert!(diagnostics.0.is_empty());
		assert_eq!(renderer.phase(), RenderPhase::Rendered);
	}

	#[test]
	fn point_count_matches_record_count() {
		for n in [0usize, 1, 7, 64] {
			let body = serde_json::to_string(&vec![serde_json::json!({"id": 0}); n]).unwrap();
			let records = parse_nodes(&body).unwrap();
			let mut renderer = renderer();
			assert!(renderer.begin());
			renderer.settle(Ok(records), &mut SmallRng::seed_from_u64(n as u64));

			let config = &renderer.parts().0.constructed[0];
			assert_eq!(config.point_count(), n);
			for p in config.points() {
				assert!((0.0..100.0).contains(&p.x));
				assert!((0.0..100.0).contains(&p.y));
				assert_eq!(p.radius, 20.0);
			}
		}
	}

	#[test]
	fn malformed_body_logs_once_and_draws_nothing() {
		let source = FixedSource::new("<html>oops</html>");
		let mut renderer = renderer();
		assert_eq!(load(&mut renderer, &source), RenderPhase::Failed);
		renderer.on_resize();

		let (surface, diagnostics) = renderer.parts();
		assert!(surface.constructed.is_empty());
		assert_eq!(surface.relayouts, 0);
		assert_eq!(diagnostics.0.len(), 1);
		assert!(diagnostics.0[0].starts_with("response is not a node list"));
	}

	#[test]
	fn object_body_is_not_a_node_list() {
		let source = FixedSource::new(r#"{"nodes": [1, 2]}"#);
		let mut renderer = renderer();
		assert_eq!(load(&mut renderer, &source), RenderPhase::Failed);
		assert_eq!(renderer.parts().1.0.len(), 1);
	}

	#[test]
	fn rejected_request_logs_once_and_draws_nothing() {
		let mut renderer = renderer();
		assert!(renderer.begin());
		let offline = NodeMapError::Request {
			endpoint: "/json/nodes".into(),
			source: gloo_net::Error::GlooError("offline".into()),
		};
		let phase = renderer.settle(Err(offline), &mut SmallRng::seed_from_u64(0));
		renderer.on_resize();

		assert_eq!(phase, RenderPhase::Failed);
		let (surface, diagnostics) = renderer.parts();
		assert!(surface.constructed.is_empty());
		assert_eq!(surface.relayouts, 0);
		assert_eq!(diagnostics.0.len(), 1);
		assert!(diagnostics.0[0].starts_with("request to /json/nodes failed"));
	}

	#[test]
	fn chart_failure_is_reported() {
		let mut renderer = NodeMapRenderer::new(
			RecordingSurface {
				fail_construct: true,
				..Default::default()
			},
			RecordingDiagnostics::default(),
			Placement::Scatter,
		);
		assert!(renderer.begin());
		let phase = renderer.settle(Ok(Vec::new()), &mut SmallRng::seed_from_u64(0));

		assert_eq!(phase, RenderPhase::Failed);
		assert_eq!(
			renderer.parts().1.0,
			vec!["chart construction failed: canvas has no 2d context".to_string()]
		);
	}

	#[test]
	fn only_one_request_is_ever_claimed() {
		let mut renderer = renderer();
		assert_eq!(renderer.phase(), RenderPhase::Idle);
		assert!(renderer.begin());
		assert!(!renderer.begin());
		assert_eq!(renderer.phase(), RenderPhase::Pending);
	}

	#[test]
	fn terminal_states_ignore_late_results() {
		let mut renderer = renderer();
		let mut rng = SmallRng::seed_from_u64(3);
		assert!(renderer.begin());
		renderer.settle(Err(parse_nodes("nope").unwrap_err().into()), &mut rng);
		assert_eq!(renderer.phase(), RenderPhase::Failed);

		let phase = renderer.settle(Ok(Vec::new()), &mut rng);
		assert_eq!(phase, RenderPhase::Failed);
		assert!(renderer.parts().0.constructed.is_empty());
		assert_eq!(renderer.parts().1.0.len(), 1);
		assert!(!renderer.begin());
	}

	#[test]
	fn resize_before_render_is_ignored() {
		let mut renderer = renderer();
		renderer.on_resize();
		assert!(renderer.begin());
		renderer.on_resize();
		assert_eq!(renderer.parts().0.relayouts, 0);
	}

	#[test]
	fn record_placement_uses_record_fields() {
		let mut renderer = NodeMapRenderer::new(
			RecordingSurface::default(),
			RecordingDiagnostics::default(),
			Placement::Record,
		);
		assert!(renderer.begin());
		let records = parse_nodes(r#"[{"x": 250, "y": 12, "r": 5}]"#).unwrap();
		renderer.settle(Ok(records), &mut SmallRng::seed_from_u64(0));

		let point = renderer.parts().0.constructed[0].datasets[0].data[0];
		assert_eq!((point.x, point.y, point.radius), (250.0, 12.0, 5.0));
	}
}
