//! The drawing seam between the scene and whatever paints it.
//!
//! The scene only ever talks to a [`Surface`]. In the browser that is
//! [`super::render::CanvasSurface`]; tests use a recorder.

use glam::DVec2;

use super::types::Bounds;

/// A colour stop: offset in `[0, 1]` and a CSS colour string.
pub type ColorStop = (f64, String);

/// How a shape is filled or stroked.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
	Solid(String),
	Linear {
		from: DVec2,
		to: DVec2,
		stops: Vec<ColorStop>,
	},
	Radial {
		inner: DVec2,
		inner_radius: f64,
		outer: DVec2,
		outer_radius: f64,
		stops: Vec<ColorStop>,
	},
}

impl Paint {
	pub fn solid(color: impl Into<String>) -> Self {
		Self::Solid(color.into())
	}
}

/// Blurred shadow drawn under a shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Glow {
	pub color: String,
	pub blur: f64,
}

/// A 2d drawing target measured in pixels.
pub trait Surface {
	fn width(&self) -> f64;
	fn height(&self) -> f64;

	fn bounds(&self) -> Bounds {
		Bounds::new(self.width(), self.height())
	}

	fn fill_rect(&mut self, origin: DVec2, width: f64, height: f64, paint: &Paint);
	fn fill_circle(&mut self, center: DVec2, radius: f64, paint: &Paint, glow: Option<&Glow>);
	fn stroke_line(&mut self, from: DVec2, to: DVec2, paint: &Paint, width: f64, glow: Option<&Glow>);
	/// Text centred on `at`, both horizontally and vertically.
	fn fill_text(&mut self, text: &str, at: DVec2, font: &str, color: &str);
}
