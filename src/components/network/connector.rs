use super::color::Rgb;
use super::entity::Entity;
use super::surface::{Glow, Paint, Surface};

const PARTICLE_RADIUS: f64 = 8.0;

/// A link between two entities, addressed by their index in the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connector {
	pub a: usize,
	pub b: usize,
	/// Fixed offset in `[0, 100)` that staggers the flow particles.
	pub phase: f64,
}

impl Connector {
	pub fn new(a: usize, b: usize, phase: f64) -> Self {
		Self { a, b, phase }
	}

	pub fn is_highlighted(&self, entities: &[Entity]) -> bool {
		let hovered = |i: usize| entities.get(i).is_some_and(|e| e.hovered);
		hovered(self.a) || hovered(self.b)
	}

	/// Fraction of the way from `a` to `b` the flow particle has travelled.
	pub fn flow_progress(&self, elapsed_ms: f64) -> f64 {
		(elapsed_ms * 0.001 + self.phase).rem_euclid(100.0) / 100.0
	}

	pub fn render(&self, surface: &mut dyn Surface, entities: &[Entity], elapsed_ms: f64) {
		let (Some(a), Some(b)) = (entities.get(self.a), entities.get(self.b)) else {
			return;
		};
		let highlighted = self.is_highlighted(entities);

		let (end_alpha, mid, width, glow) = if highlighted {
			(
				0xcc,
				"#ffffff80",
				3.0,
				Some(Glow {
					color: Rgb::WHITE.to_string(),
					blur: 10.0,
				}),
			)
		} else {
			(0x40, "#ffffff20", 1.5, None)
		};
		let paint = Paint::Linear {
			from: a.position,
			to: b.position,
			stops: vec![
				(0.0, a.color.with_alpha(end_alpha)),
				(0.5, mid.to_string()),
				(1.0, b.color.with_alpha(end_alpha)),
			],
		};
		surface.stroke_line(a.position, b.position, &paint, width, glow.as_ref());

		if highlighted {
			let at = a.position.lerp(b.position, self.flow_progress(elapsed_ms));
			let particle = Paint::Radial {
				inner: at,
				inner_radius: 0.0,
				outer: at,
				outer_radius: PARTICLE_RADIUS,
				stops: vec![(0.0, "#ffffff".to_string()), (1.0, "#ffffff00".to_string())],
			};
			surface.fill_circle(at, PARTICLE_RADIUS, &particle, None);
		}
	}
}

/// Every unordered pair of `count` entities, in `(i, j)` order with `i < j`.
pub fn complete_graph(count: usize, mut phase: impl FnMut() -> f64) -> Vec<Connector> {
	let mut connectors = Vec::with_capacity(count * count.saturating_sub(1) / 2);
	for i in 0..count {
		for j in i + 1..count {
			connectors.push(Connector::new(i, j, phase()));
		}
	}
	connectors
}
