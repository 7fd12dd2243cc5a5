//! Linear axis scale with "nice" tick steps (1, 2 or 5 times a power of ten).

/// A numeric axis domain split into evenly spaced ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
	pub min: f64,
	pub max: f64,
	pub step: f64,
}

fn nice_num(range: f64, round: bool) -> f64 {
	let exponent = range.log10().floor();
	let magnitude = 10f64.powf(exponent);
	let fraction = range / magnitude;
	let nice = if round {
		match fraction {
			f if f < 1.5 => 1.0,
			f if f < 3.0 => 2.0,
			f if f < 7.0 => 5.0,
			_ => 10.0,
		}
	} else {
		match fraction {
			f if f <= 1.0 => 1.0,
			f if f <= 2.0 => 2.0,
			f if f <= 5.0 => 5.0,
			_ => 10.0,
		}
	};
	nice * magnitude
}

impl LinearScale {
	/// Fit a scale over `values`, aiming for at most `max_ticks` ticks.
	///
	/// Non-finite values are ignored. With no values the domain is `[0, 1]`.
	pub fn fit(
		values: impl IntoIterator<Item = f64>,
		begin_at_zero: bool,
		max_ticks: usize,
	) -> Self {
		let (mut lo, mut hi) = values
			.into_iter()
			.filter(|v| v.is_finite())
			.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
		if lo > hi {
			(lo, hi) = (0.0, 1.0);
		}
		if begin_at_zero {
			lo = lo.min(0.0);
			hi = hi.max(0.0);
		}
		if hi - lo < f64::EPSILON {
			hi = lo + 1.0;
		}

		let intervals = max_ticks.max(2) as f64 - 1.0;
		let step = nice_num(nice_num(hi - lo, false) / intervals, true);
		Self {
			min: (lo / step).floor() * step,
			max: (hi / step).ceil() * step,
			step,
		}
	}

	pub fn span(&self) -> f64 {
		self.max - self.min
	}

	pub fn ticks(&self) -> Vec<f64> {
		let count = (self.span() / self.step).round() as usize;
		(0..=count)
			.map(|i| {
				let v = self.min + i as f64 * self.step;
				(v / self.step).round() * self.step
			})
			.collect()
	}

	/// Map a data value onto the pixel interval `[start, end]`.
	pub fn to_pixel(&self, value: f64, start: f64, end: f64) -> f64 {
		start + (value - self.min) / self.span() * (end - start)
	}

	/// Tick label with just enough decimals for the step.
	pub fn format_tick(&self, value: f64) -> String {
		let decimals = (-self.step.log10().floor()).max(0.0) as usize;
		let value = if value == 0.0 { 0.0 } else { value };
		format!("{value:.decimals$}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-9
	}

	#[test]
	fn scatter_extent_gives_round_ticks() {
		let scale = LinearScale::fit([3.2, 97.5, 41.0], true, 11);
		assert!(close(scale.min, 0.0));
		assert!(close(scale.max, 100.0));
		assert!(close(scale.step, 10.0));
		assert_eq!(scale.ticks().len(), 11);
	}

	#[test]
	fn empty_data_defaults_to_unit_domain() {
		let scale = LinearScale::fit(std::iter::empty(), true, 11);
		assert!(close(scale.min, 0.0));
		assert!(close(scale.max, 1.0));
		assert_eq!(scale.format_tick(0.5), "0.5");
	}

	#[test]
	fn begin_at_zero_pulls_domain_down() {
		let anchored = LinearScale::fit([50.0, 60.0], true, 6);
		assert!(close(anchored.min, 0.0));
		let floating = LinearScale::fit([50.0, 60.0], false, 6);
		assert!(floating.min >= 49.0);
		assert!(floating.max >= 60.0);
	}

	#[test]
	fn single_value_still_has_a_span() {
		let scale = LinearScale::fit([5.0], false, 5);
		assert!(scale.span() > 0.0);
		assert!(scale.min <= 5.0 + 1e-9 && scale.max >= 5.0);
	}

	#[test]
	fn non_finite_values_are_skipped() {
		let scale = LinearScale::fit([f64::NAN, 20.0, f64::INFINITY], true, 5);
		assert!(close(scale.min, 0.0));
		assert!(scale.max >= 20.0 && scale.max < 100.0);
	}

	#[test]
	fn pixels_follow_direction() {
		let scale = LinearScale::fit([0.0, 100.0], true, 11);
		assert!(close(scale.to_pixel(0.0, 40.0, 440.0), 40.0));
		assert!(close(scale.to_pixel(50.0, 40.0, 440.0), 240.0));
		// inverted for a y axis
		assert!(close(scale.to_pixel(100.0, 300.0, 20.0), 20.0));
	}

	#[test]
	fn tick_labels() {
		let scale = LinearScale::fit([0.0, 100.0], true, 11);
		assert_eq!(scale.format_tick(30.0), "30");
		let fine = LinearScale::fit([0.0, 0.3], true, 4);
		assert_eq!(fine.format_tick(0.1), "0.1");
	}
}
