//! A small canvas bubble chart: one or more datasets of `(x, y, radius)`
//! points drawn over linear axes that fill the container width.

mod config;
mod layout;
mod render;
mod scale;

use log::debug;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[cfg(test)]
pub use config::ChartKind;
pub use config::{ChartConfig, Dataset, PlotPoint};
use layout::{CanvasSize, ChartLayout};

#[derive(Debug, Error)]
pub enum ChartError {
	#[error("canvas has no 2d context")]
	NoContext,
	#[error("canvas call failed: {0}")]
	Canvas(String),
}

impl From<JsValue> for ChartError {
	fn from(value: JsValue) -> Self {
		ChartError::Canvas(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

/// A bubble chart bound to a canvas element.
pub struct BubbleChart {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
	config: ChartConfig,
	layout: ChartLayout,
}

impl BubbleChart {
	/// Bind to `canvas`, size it to its container and draw.
	pub fn new(canvas: HtmlCanvasElement, config: ChartConfig) -> Result<Self, ChartError> {
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or(ChartError::NoContext)?
			.dyn_into()
			.map_err(|_| ChartError::NoContext)?;
		let layout = ChartLayout::compute(&config, CanvasSize::responsive(0.0, 0.0, 1.0));
		let mut chart = Self {
			canvas,
			ctx,
			config,
			layout,
		};
		chart.resize()?;
		Ok(chart)
	}

	/// Re-measure the container, relayout and redraw.
	pub fn resize(&mut self) -> Result<(), ChartError> {
		let size = self.measure();
		self.canvas.set_width(size.backing_width());
		self.canvas.set_height(size.backing_height());
		let style = self.canvas.style();
		style.set_property("width", &format!("{}px", size.width))?;
		style.set_property("height", &format!("{}px", size.height))?;
		debug!("Chart sized to {}x{} @{}x", size.width, size.height, size.pixel_ratio);

		self.layout = ChartLayout::compute(&self.config, size);
		self.draw()
	}

	pub fn draw(&self) -> Result<(), ChartError> {
		render::render(&self.config, &self.layout, &self.ctx)
	}

	pub fn config(&self) -> &ChartConfig {
		&self.config
	}

	fn measure(&self) -> CanvasSize {
		let container_width = self
			.canvas
			.parent_element()
			.map(|p| p.client_width() as f64)
			.unwrap_or(0.0);
		let pixel_ratio = web_sys::window()
			.map(|w| w.device_pixel_ratio())
			.unwrap_or(1.0);
		CanvasSize::responsive(container_width, self.config.options.aspect_ratio, pixel_ratio)
	}
}
