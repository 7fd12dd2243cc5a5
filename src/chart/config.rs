/// One bubble: data-space position and a pixel radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotPoint {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartKind {
	#[default]
	Bubble,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
	pub label: String,
	pub data: Vec<PlotPoint>,
	pub border_width: f64,
	pub background_color: String,
	pub border_color: String,
}

impl Dataset {
	pub fn new(label: impl Into<String>, data: Vec<PlotPoint>) -> Self {
		Self {
			label: label.into(),
			data,
			border_width: 1.0,
			background_color: "rgba(54, 162, 235, 0.5)".into(),
			border_color: "rgb(54, 162, 235)".into(),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisOptions {
	pub begin_at_zero: bool,
}

impl Default for AxisOptions {
	fn default() -> Self {
		Self { begin_at_zero: true }
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartOptions {
	pub x: AxisOptions,
	pub y: AxisOptions,
	/// Width over height.
	pub aspect_ratio: f64,
}

impl Default for ChartOptions {
	fn default() -> Self {
		Self {
			x: AxisOptions::default(),
			y: AxisOptions::default(),
			aspect_ratio: 2.0,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
	pub kind: ChartKind,
	pub datasets: Vec<Dataset>,
	pub options: ChartOptions,
}

impl ChartConfig {
	/// A bubble chart over a single dataset with both axes starting at zero.
	pub fn bubble(dataset: Dataset) -> Self {
		Self {
			kind: ChartKind::Bubble,
			datasets: vec![dataset],
			options: ChartOptions::default(),
		}
	}

	pub fn points(&self) -> impl Iterator<Item = &PlotPoint> {
		self.datasets.iter().flat_map(|d| d.data.iter())
	}

	pub fn point_count(&self) -> usize {
		self.datasets.iter().map(|d| d.data.len()).sum()
	}
}
