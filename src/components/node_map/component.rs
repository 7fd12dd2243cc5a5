use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::source::{HttpNodeSource, NodeSource};
use super::state::{ChartSurface, ConsoleDiagnostics, NodeMapRenderer, RenderPhase};
use super::types::Placement;
use crate::chart::{BubbleChart, ChartConfig, ChartError};

/// Draws into the page canvas via [`BubbleChart`].
pub struct CanvasChartSurface {
	canvas: HtmlCanvasElement,
	chart: Option<BubbleChart>,
}

impl CanvasChartSurface {
	pub fn new(canvas: HtmlCanvasElement) -> Self {
		Self { canvas, chart: None }
	}
}

impl ChartSurface for CanvasChartSurface {
	fn construct(&mut self, config: ChartConfig) -> Result<(), ChartError> {
		let chart = BubbleChart::new(self.canvas.clone(), config)?;
		debug!("Bubble chart constructed with {} points", chart.config().point_count());
		self.chart = Some(chart);
		Ok(())
	}

	fn relayout(&mut self) -> Result<(), ChartError> {
		match self.chart.as_mut() {
			Some(chart) => chart.resize(),
			None => Ok(()),
		}
	}
}

type BrowserRenderer = NodeMapRenderer<CanvasChartSurface, ConsoleDiagnostics>;

fn browser_rng() -> SmallRng {
	SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}

/// Fetches node records once and shows them as a bubble chart.
#[component]
pub fn NodeMap(
	#[prop(into)] endpoint: String,
	#[prop(default = Placement::Scatter)] placement: Placement,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let renderer: Rc<RefCell<Option<BrowserRenderer>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if renderer.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();

		let surface = CanvasChartSurface::new(canvas);
		let mut node_map = NodeMapRenderer::new(surface, ConsoleDiagnostics, placement);
		if !node_map.begin() {
			return;
		}
		*renderer.borrow_mut() = Some(node_map);

		let (renderer_task, resize_task) = (renderer.clone(), resize_cb.clone());
		let source = HttpNodeSource::new(endpoint.clone());
		spawn_local(async move {
			let outcome = source.fetch().await;
			let phase = match renderer_task.borrow_mut().as_mut() {
				Some(r) => r.settle(outcome, &mut browser_rng()),
				None => return,
			};
			if phase != RenderPhase::Rendered {
				return;
			}

			let renderer_resize = renderer_task.clone();
			let cb = Closure::<dyn FnMut()>::new(move || {
				if let Some(r) = renderer_resize.borrow_mut().as_mut() {
					r.on_resize();
				}
			});
			if let Some(window) = web_sys::window() {
				let _ = window
					.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
			*resize_task.borrow_mut() = Some(cb);
		});
	});

	view! {
		<div class="node-map">
			<canvas id="nodeMap" node_ref=canvas_ref style="display: block;" />
		</div>
	}
}
