use super::config::{ChartConfig, PlotPoint};
use super::scale::LinearScale;

/// Width used when the container reports no size (e.g. still hidden).
pub const FALLBACK_WIDTH: f64 = 300.0;

const LEGEND_HEIGHT: f64 = 28.0;
const Y_AXIS_WIDTH: f64 = 44.0;
const X_AXIS_HEIGHT: f64 = 28.0;
const EDGE_PADDING: f64 = 12.0;

/// Pixels per tick the axes aim for.
const X_TICK_SPACING: f64 = 60.0;
const Y_TICK_SPACING: f64 = 40.0;
const MAX_TICKS: usize = 11;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
	pub width: f64,
	pub height: f64,
	pub pixel_ratio: f64,
}

impl CanvasSize {
	/// Fill the container width and derive height from the aspect ratio.
	pub fn responsive(container_width: f64, aspect_ratio: f64, pixel_ratio: f64) -> Self {
		let width = if container_width > 0.0 {
			container_width.floor()
		} else {
			FALLBACK_WIDTH
		};
		let aspect_ratio = if aspect_ratio > 0.0 { aspect_ratio } else { 2.0 };
		Self {
			width,
			height: (width / aspect_ratio).floor(),
			pixel_ratio: if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 },
		}
	}

	pub fn backing_width(&self) -> u32 {
		(self.width * self.pixel_ratio).round() as u32
	}

	pub fn backing_height(&self) -> u32 {
		(self.height * self.pixel_ratio).round() as u32
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	pub fn right(&self) -> f64 {
		self.x + self.width
	}

	pub fn bottom(&self) -> f64 {
		self.y + self.height
	}
}

fn tick_budget(length: f64, spacing: f64) -> usize {
	((length / spacing).floor() as usize).clamp(2, MAX_TICKS)
}

/// Where everything goes for one canvas size.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
	pub size: CanvasSize,
	pub legend: Rect,
	pub plot: Rect,
	pub x_scale: LinearScale,
	pub y_scale: LinearScale,
}

impl ChartLayout {
	pub fn compute(config: &ChartConfig, size: CanvasSize) -> Self {
		let legend = Rect {
			x: 0.0,
			y: 0.0,
			width: size.width,
			height: LEGEND_HEIGHT,
		};
		let plot = Rect {
			x: Y_AXIS_WIDTH,
			y: LEGEND_HEIGHT,
			width: (size.width - Y_AXIS_WIDTH - EDGE_PADDING).max(0.0),
			height: (size.height - LEGEND_HEIGHT - X_AXIS_HEIGHT).max(0.0),
		};

		let x_scale = LinearScale::fit(
			config.points().map(|p| p.x),
			config.options.x.begin_at_zero,
			tick_budget(plot.width, X_TICK_SPACING),
		);
		let y_scale = LinearScale::fit(
			config.points().map(|p| p.y),
			config.options.y.begin_at_zero,
			tick_budget(plot.height, Y_TICK_SPACING),
		);

		Self {
			size,
			legend,
			plot,
			x_scale,
			y_scale,
		}
	}

	/// Screen position of a point's center, in CSS pixels.
	pub fn project(&self, point: &PlotPoint) -> (f64, f64) {
		(
			self.x_scale.to_pixel(point.x, self.plot.x, self.plot.right()),
			self.y_scale.to_pixel(point.y, self.plot.bottom(), self.plot.y),
		)
	}
}
