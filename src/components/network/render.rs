use std::f64::consts::PI;

use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{ColorStop, Glow, Paint, Surface};
use crate::error::SurfaceError;

/// [`Surface`] backed by a canvas 2d context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
		let ctx = canvas
			.get_context("2d")
			.map_err(|_| SurfaceError::ContextUnavailable)?
			.ok_or(SurfaceError::ContextUnavailable)?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| SurfaceError::NotCanvas2d)?;
		Ok(Self { canvas, ctx })
	}

	pub fn set_size(&self, width: f64, height: f64) {
		self.canvas.set_width(width as u32);
		self.canvas.set_height(height as u32);
	}

	fn apply_fill(&self, paint: &Paint) {
		match paint {
			Paint::Solid(color) => self.ctx.set_fill_style_str(color),
			_ => {
				if let Some(gradient) = self.gradient(paint) {
					#[allow(deprecated)]
					self.ctx.set_fill_style(&gradient);
				}
			}
		}
	}

	fn apply_stroke(&self, paint: &Paint) {
		match paint {
			Paint::Solid(color) => self.ctx.set_stroke_style_str(color),
			_ => {
				if let Some(gradient) = self.gradient(paint) {
					#[allow(deprecated)]
					self.ctx.set_stroke_style(&gradient);
				}
			}
		}
	}

	fn gradient(&self, paint: &Paint) -> Option<CanvasGradient> {
		let (gradient, stops) = match paint {
			Paint::Solid(_) => return None,
			Paint::Linear { from, to, stops } => (
				self.ctx.create_linear_gradient(from.x, from.y, to.x, to.y),
				stops,
			),
			Paint::Radial {
				inner,
				inner_radius,
				outer,
				outer_radius,
				stops,
			} => (
				self.ctx
					.create_radial_gradient(
						inner.x,
						inner.y,
						*inner_radius,
						outer.x,
						outer.y,
						*outer_radius,
					)
					.ok()?,
				stops,
			),
		};
		add_stops(&gradient, stops);
		Some(gradient)
	}

	fn apply_glow(&self, glow: Option<&Glow>) {
		match glow {
			Some(glow) => {
				self.ctx.set_shadow_color(&glow.color);
				self.ctx.set_shadow_blur(glow.blur);
			}
			None => self.ctx.set_shadow_blur(0.0),
		}
	}
}

fn add_stops(gradient: &CanvasGradient, stops: &[ColorStop]) {
	for (offset, color) in stops {
		// Rejected stops leave the gradient transparent, which is acceptable.
		let _ = gradient.add_color_stop(*offset as f32, color);
	}
}

impl Surface for CanvasSurface {
	fn width(&self) -> f64 {
		self.canvas.width() as f64
	}

	fn height(&self) -> f64 {
		self.canvas.height() as f64
	}

	fn fill_rect(&mut self, origin: DVec2, width: f64, height: f64, paint: &Paint) {
		self.apply_fill(paint);
		self.ctx.fill_rect(origin.x, origin.y, width, height);
	}

	fn fill_circle(&mut self, center: DVec2, radius: f64, paint: &Paint, glow: Option<&Glow>) {
		if radius <= 0.0 {
			return;
		}
		self.apply_fill(paint);
		self.apply_glow(glow);
		self.ctx.begin_path();
		let _ = self.ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
		self.ctx.fill();
		self.ctx.set_shadow_blur(0.0);
	}

	fn stroke_line(&mut self, from: DVec2, to: DVec2, paint: &Paint, width: f64, glow: Option<&Glow>) {
		self.apply_stroke(paint);
		self.apply_glow(glow);
		self.ctx.set_line_width(width);
		self.ctx.begin_path();
		self.ctx.move_to(from.x, from.y);
		self.ctx.line_to(to.x, to.y);
		self.ctx.stroke();
		self.ctx.set_shadow_blur(0.0);
	}

	fn fill_text(&mut self, text: &str, at: DVec2, font: &str, color: &str) {
		self.ctx.set_fill_style_str(color);
		self.ctx.set_font(font);
		self.ctx.set_text_align("center");
		self.ctx.set_text_baseline("middle");
		let _ = self.ctx.fill_text(text, at.x, at.y);
	}
}
