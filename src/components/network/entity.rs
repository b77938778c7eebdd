use std::f64::consts::TAU;

use glam::DVec2;
use log::warn;

use super::color::Rgb;
use super::surface::{Glow, Paint, Surface};
use super::types::{Bounds, EntityRecord};
use crate::config::SceneConfig;

/// Below this separation two entities count as coincident.
const COINCIDENT_EPSILON: f64 = 1e-4;
const FALLBACK_COLOR: Rgb = Rgb(0xa0, 0xa0, 0xa0);

/// The other entities an entity reacts to, split around its own slot.
///
/// Coincident pairs need a direction; entities earlier in iteration order push
/// along `+x`, later ones along `-x`, so a stacked pair separates.
#[derive(Clone, Copy)]
pub struct Neighbors<'a> {
	pub before: &'a [Entity],
	pub after: &'a [Entity],
}

impl<'a> Neighbors<'a> {
	fn iter(self) -> impl Iterator<Item = (&'a Entity, DVec2)> {
		let before = self.before.iter().map(|e| (e, DVec2::new(1.0, 0.0)));
		let after = self.after.iter().map(|e| (e, DVec2::new(-1.0, 0.0)));
		before.chain(after)
	}
}

/// A node on the canvas: one studio, city or brand.
#[derive(Clone, Debug)]
pub struct Entity {
	record: &'static EntityRecord,
	pub color: Rgb,
	pub target_color: Rgb,
	pub position: DVec2,
	pub velocity: DVec2,
	pub initial_position: DVec2,
	pub target_position: DVec2,
	pub radius: f64,
	pub hovered: bool,
	pub dragging: bool,
	pulse_phase: f64,
}

impl Entity {
	/// `pulse_phase` is taken modulo a full turn.
	pub fn new(record: &'static EntityRecord, position: DVec2, radius: f64, pulse_phase: f64) -> Self {
		let color = parse_color(record);
		Self {
			record,
			color,
			target_color: color,
			position,
			velocity: DVec2::ZERO,
			initial_position: position,
			target_position: position,
			radius,
			hovered: false,
			dragging: false,
			pulse_phase: pulse_phase.rem_euclid(TAU),
		}
	}

	pub fn id(&self) -> &'static str {
		self.record.id
	}

	pub fn name(&self) -> &'static str {
		self.record.name
	}

	pub fn record(&self) -> &'static EntityRecord {
		self.record
	}

	/// Point this entity at another record, keeping its physical state.
	pub fn assign(&mut self, record: &'static EntityRecord) {
		self.record = record;
		self.target_color = parse_color(record);
	}

	/// Start an eased move from `from` to `to`.
	pub fn aim(&mut self, from: DVec2, to: DVec2) {
		self.initial_position = from;
		self.target_position = to;
	}

	pub fn contains_point(&self, x: f64, y: f64) -> bool {
		self.position.distance(DVec2::new(x, y)) < self.radius
	}

	/// One physics step: repulsion, centring, integration, damping, walls.
	pub fn step(&mut self, neighbors: Neighbors<'_>, bounds: Bounds, damping: f64, config: &SceneConfig) {
		if self.dragging {
			return;
		}

		let reach = config.interaction_radius;
		for (other, fallback) in neighbors.iter() {
			let delta = self.position - other.position;
			let distance = delta.length();
			if distance >= reach {
				continue;
			}
			let direction = if distance > COINCIDENT_EPSILON {
				delta / distance
			} else {
				fallback
			};
			self.velocity += direction * ((reach - distance) * config.repulsion_strength);
		}

		self.velocity += (bounds.center() - self.position) * config.centering_strength;

		self.position += self.velocity;
		self.velocity *= damping;

		let margin = self.radius * 2.0;
		let bounce = config.bounce_factor;
		if self.position.x < margin {
			self.position.x = margin;
			self.velocity.x *= bounce;
		}
		if self.position.x > bounds.width - margin {
			self.position.x = bounds.width - margin;
			self.velocity.x *= bounce;
		}
		if self.position.y < margin {
			self.position.y = margin;
			self.velocity.y *= bounce;
		}
		if self.position.y > bounds.height - margin {
			self.position.y = bounds.height - margin;
			self.velocity.y *= bounce;
		}
	}

	/// Per-frame colour and radius easing.
	pub fn ease_appearance(&mut self, config: &SceneConfig) {
		if self.color != self.target_color {
			self.color = self.color.approach(self.target_color, config.ease_rate);
		}

		let gap = config.nominal_radius - self.radius;
		if gap.abs() > config.radius_snap {
			self.radius += gap * config.ease_rate;
		} else {
			self.radius = config.nominal_radius;
		}
	}

	/// Cosmetic breathing factor in `[0.8, 1.0]`.
	pub fn pulse(&self, elapsed_ms: f64) -> f64 {
		(elapsed_ms * 0.002 + self.pulse_phase).sin() * 0.1 + 0.9
	}

	pub fn display_radius(&self, elapsed_ms: f64) -> f64 {
		let hover = if self.hovered { 1.2 } else { 1.0 };
		self.radius * hover * self.pulse(elapsed_ms)
	}

	/// The name broken at its first space.
	pub fn label_lines(&self) -> (&'static str, Option<&'static str>) {
		match self.record.name.split_once(' ') {
			Some((first, rest)) => (first, Some(rest)),
			None => (self.record.name, None),
		}
	}

	pub fn render(&mut self, surface: &mut dyn Surface, elapsed_ms: f64, config: &SceneConfig) {
		self.ease_appearance(config);
		self.draw(surface, elapsed_ms);
	}

	fn draw(&self, surface: &mut dyn Surface, elapsed_ms: f64) {
		let (center, r) = (self.position, self.display_radius(elapsed_ms));
		let color = self.color;

		let outer = Paint::Radial {
			inner: center,
			inner_radius: 0.0,
			outer: center,
			outer_radius: r * 2.0,
			stops: vec![
				(0.0, color.with_alpha(0x40)),
				(0.5, color.with_alpha(0x20)),
				(1.0, color.with_alpha(0x00)),
			],
		};
		surface.fill_circle(center, r * 2.0, &outer, None);

		let shadow = Glow {
			color: color.to_string(),
			blur: if self.hovered { 30.0 } else { 20.0 },
		};
		surface.fill_circle(center, r, &Paint::solid(color.to_string()), Some(&shadow));

		let highlight = Paint::Radial {
			inner: center - DVec2::new(r * 0.3, r * 0.3),
			inner_radius: 0.0,
			outer: center,
			outer_radius: r,
			stops: vec![(0.0, "#ffffff80".to_string()), (1.0, color.with_alpha(0x00))],
		};
		surface.fill_circle(center, r, &highlight, None);

		let font = format!("600 {}px Outfit, sans-serif", if self.hovered { 16 } else { 14 });
		match self.label_lines() {
			(first, Some(second)) => {
				surface.fill_text(first, center - DVec2::new(0.0, 6.0), &font, "#ffffff");
				surface.fill_text(second, center + DVec2::new(0.0, 8.0), &font, "#ffffff");
			}
			(only, None) => surface.fill_text(only, center, &font, "#ffffff"),
		}
	}
}

fn parse_color(record: &EntityRecord) -> Rgb {
	record.color.parse().unwrap_or_else(|err| {
		warn!("entity {}: {err}", record.id);
		FALLBACK_COLOR
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network::surface::recording::{DrawCall, RecordingSurface};
	use crate::components::network::types::Payload;

	static SOLO: EntityRecord = EntityRecord {
		id: "solo",
		name: "Solo",
		color: "#ef4444",
		payload: Payload::Venue {
			events: &[],
			locations: &[],
			partners: &[],
		},
	};

	static PAIR: EntityRecord = EntityRecord {
		id: "pair",
		name: "Detective Noname Returns",
		color: "#b0b0b0",
		payload: Payload::Showcase {
			description: "",
			website: None,
			products: &[],
		},
	};

	fn at(x: f64, y: f64) -> Entity {
		Entity::new(&SOLO, DVec2::new(x, y), 40.0, 0.0)
	}

	const WIDE: Bounds = Bounds::new(1000.0, 1000.0);

	#[test]
	fn containment_edges() {
		let e = at(100.0, 100.0);
		assert!(e.contains_point(100.0, 100.0));
		assert!(e.contains_point(139.9, 100.0));
		assert!(!e.contains_point(140.0 + 1e-9, 100.0));
		assert!(!e.contains_point(100.0, 141.0));
	}

	#[test]
	fn neighbour_pushes_away() {
		let cfg = SceneConfig::default();
		let other = [at(450.0, 500.0)];
		let mut e = at(500.0, 500.0);
		e.step(Neighbors { before: &other, after: &[] }, WIDE, 1.0, &cfg);
		// (200 - 50) * 0.005 along +x, centre pull is zero at the middle.
		assert!((e.velocity.x - 0.75).abs() < 1e-12);
		assert_eq!(e.velocity.y, 0.0);
		assert!((e.position.x - 500.75).abs() < 1e-12);
	}

	#[test]
	fn far_neighbour_is_ignored() {
		let cfg = SceneConfig::default();
		let other = [at(100.0, 500.0)];
		let mut e = at(500.0, 500.0);
		e.step(Neighbors { before: &[], after: &other }, WIDE, 0.92, &cfg);
		assert_eq!(e.velocity, DVec2::ZERO);
		assert_eq!(e.position, DVec2::new(500.0, 500.0));
	}

	#[test]
	fn coincident_entities_separate_without_nan() {
		let cfg = SceneConfig::default();
		let mut entities = vec![at(500.0, 500.0), at(500.0, 500.0)];
		for i in 0..entities.len() {
			let (before, rest) = entities.split_at_mut(i);
			let (me, after) = rest.split_first_mut().unwrap();
			me.step(Neighbors { before, after }, WIDE, 0.92, &cfg);
		}
		assert!(entities.iter().all(|e| e.position.x.is_finite() && e.position.y.is_finite()));
		assert!(entities[0].position.x < entities[1].position.x);
	}

	#[test]
	fn dragging_entity_does_not_move() {
		let cfg = SceneConfig::default();
		let other = [at(480.0, 500.0)];
		let mut e = at(500.0, 500.0);
		e.dragging = true;
		e.step(Neighbors { before: &other, after: &[] }, WIDE, 0.92, &cfg);
		assert_eq!(e.position, DVec2::new(500.0, 500.0));
		assert_eq!(e.velocity, DVec2::ZERO);
	}

	#[test]
	fn wall_hit_clamps_and_bounces() {
		let cfg = SceneConfig::default();
		let mut e = at(85.0, 500.0);
		e.velocity = DVec2::new(-10.0, 0.0);
		e.step(Neighbors { before: &[], after: &[] }, WIDE, 1.0, &cfg);
		assert_eq!(e.position.x, 80.0);
		assert!(e.velocity.x > 0.0);

		let mut e = at(500.0, 915.0);
		e.velocity = DVec2::new(0.0, 10.0);
		e.step(Neighbors { before: &[], after: &[] }, WIDE, 1.0, &cfg);
		assert_eq!(e.position.y, 920.0);
		assert!(e.velocity.y < 0.0);
	}

	#[test]
	fn radius_grows_and_snaps() {
		let cfg = SceneConfig::default();
		let mut e = Entity::new(&SOLO, DVec2::ZERO, 0.0, 0.0);
		e.ease_appearance(&cfg);
		assert!((e.radius - 2.0).abs() < 1e-12);
		for _ in 0..200 {
			e.ease_appearance(&cfg);
		}
		assert_eq!(e.radius, 40.0);
	}

	#[test]
	fn pulse_stays_in_band() {
		let e = Entity::new(&SOLO, DVec2::ZERO, 40.0, 1.3);
		for t in (0..10_000).step_by(37) {
			let p = e.pulse(t as f64);
			assert!((0.8 - 1e-12..=1.0 + 1e-12).contains(&p));
		}
	}

	#[test]
	fn hovered_display_radius_is_larger() {
		let mut e = at(0.0, 0.0);
		let plain = e.display_radius(500.0);
		e.hovered = true;
		assert!((e.display_radius(500.0) - plain * 1.2).abs() < 1e-9);
	}

	#[test]
	fn label_splits_on_first_space() {
		let e = Entity::new(&PAIR, DVec2::ZERO, 40.0, 0.0);
		assert_eq!(e.label_lines(), ("Detective", Some("Noname Returns")));
		assert_eq!(at(0.0, 0.0).label_lines(), ("Solo", None));
	}

	#[test]
	fn render_draws_glow_disk_highlight_then_label() {
		let cfg = SceneConfig::default();
		let mut surface = RecordingSurface::new(800.0, 600.0);
		let mut e = Entity::new(&PAIR, DVec2::new(100.0, 100.0), 40.0, 0.0);
		e.render(&mut surface, 0.0, &cfg);

		assert_eq!(surface.calls.len(), 5);
		assert!(matches!(surface.calls[0], DrawCall::Circle { paint: Paint::Radial { .. }, .. }));
		assert!(matches!(
			surface.calls[1],
			DrawCall::Circle { paint: Paint::Solid(_), glow: Some(_), .. }
		));
		assert!(matches!(surface.calls[2], DrawCall::Circle { paint: Paint::Radial { .. }, .. }));
		assert_eq!(surface.texts(), vec!["Detective", "Noname Returns"]);
		let DrawCall::Text { at, font, .. } = &surface.calls[3] else {
			panic!("expected the first label line, got {:?}", surface.calls[3]);
		};
		assert_eq!(*at, DVec2::new(100.0, 94.0));
		assert_eq!(font, "600 14px Outfit, sans-serif");
	}

	#[test]
	fn assign_retargets_color_only() {
		let mut e = at(10.0, 20.0);
		e.assign(&PAIR);
		assert_eq!(e.id(), "pair");
		assert_eq!(e.color, Rgb(0xef, 0x44, 0x44));
		assert_eq!(e.target_color, Rgb(0xb0, 0xb0, 0xb0));
		assert_eq!(e.position, DVec2::new(10.0, 20.0));
	}
}
