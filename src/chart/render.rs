use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::ChartError;
use super::config::ChartConfig;
use super::layout::ChartLayout;

const GRID_COLOR: &str = "rgba(0, 0, 0, 0.1)";
const TICK_COLOR: &str = "#666";
const FONT: &str = "12px sans-serif";
const LEGEND_SWATCH: f64 = 12.0;

pub fn render(
	config: &ChartConfig,
	layout: &ChartLayout,
	ctx: &CanvasRenderingContext2d,
) -> Result<(), ChartError> {
	let ratio = layout.size.pixel_ratio;
	ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)?;
	ctx.clear_rect(0.0, 0.0, layout.size.width, layout.size.height);
	ctx.set_font(FONT);

	draw_grid(layout, ctx)?;
	draw_legend(config, layout, ctx)?;
	draw_bubbles(config, layout, ctx)?;
	Ok(())
}

fn draw_grid(layout: &ChartLayout, ctx: &CanvasRenderingContext2d) -> Result<(), ChartError> {
	let plot = layout.plot;
	ctx.set_stroke_style_str(GRID_COLOR);
	ctx.set_line_width(1.0);
	ctx.set_fill_style_str(TICK_COLOR);

	ctx.set_text_align("center");
	ctx.set_text_baseline("top");
	for tick in layout.x_scale.ticks() {
		let x = layout.x_scale.to_pixel(tick, plot.x, plot.right()).round() + 0.5;
		ctx.begin_path();
		ctx.move_to(x, plot.y);
		ctx.line_to(x, plot.bottom());
		ctx.stroke();
		ctx.fill_text(&layout.x_scale.format_tick(tick), x, plot.bottom() + 6.0)?;
	}

	ctx.set_text_align("right");
	ctx.set_text_baseline("middle");
	for tick in layout.y_scale.ticks() {
		let y = layout.y_scale.to_pixel(tick, plot.bottom(), plot.y).round() + 0.5;
		ctx.begin_path();
		ctx.move_to(plot.x, y);
		ctx.line_to(plot.right(), y);
		ctx.stroke();
		ctx.fill_text(&layout.y_scale.format_tick(tick), plot.x - 6.0, y)?;
	}
	Ok(())
}

fn draw_legend(
	config: &ChartConfig,
	layout: &ChartLayout,
	ctx: &CanvasRenderingContext2d,
) -> Result<(), ChartError> {
	let Some(dataset) = config.datasets.first() else {
		return Ok(());
	};
	let text_width = ctx.measure_text(&dataset.label)?.width();
	let total = LEGEND_SWATCH + 6.0 + text_width;
	let x = layout.legend.x + (layout.legend.width - total) / 2.0;
	let y = layout.legend.y + (layout.legend.height - LEGEND_SWATCH) / 2.0;

	ctx.set_fill_style_str(&dataset.background_color);
	ctx.fill_rect(x, y, LEGEND_SWATCH, LEGEND_SWATCH);
	ctx.set_stroke_style_str(&dataset.border_color);
	ctx.set_line_width(dataset.border_width);
	ctx.stroke_rect(x, y, LEGEND_SWATCH, LEGEND_SWATCH);

	ctx.set_fill_style_str(TICK_COLOR);
	ctx.set_text_align("left");
	ctx.set_text_baseline("middle");
	ctx.fill_text(&dataset.label, x + LEGEND_SWATCH + 6.0, y + LEGEND_SWATCH / 2.0)?;
	Ok(())
}

fn draw_bubbles(
	config: &ChartConfig,
	layout: &ChartLayout,
	ctx: &CanvasRenderingContext2d,
) -> Result<(), ChartError> {
	let plot = layout.plot;
	ctx.save();
	ctx.begin_path();
	ctx.rect(plot.x, plot.y, plot.width, plot.height);
	ctx.clip();

	for dataset in &config.datasets {
		ctx.set_fill_style_str(&dataset.background_color);
		ctx.set_stroke_style_str(&dataset.border_color);
		ctx.set_line_width(dataset.border_width);
		for point in &dataset.data {
			let (x, y) = layout.project(point);
			ctx.begin_path();
			ctx.arc(x, y, point.radius.max(0.0), 0.0, 2.0 * PI)?;
			ctx.fill();
			ctx.stroke();
		}
	}

	ctx.restore();
	Ok(())
}
