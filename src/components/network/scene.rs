//! The scene controller: owns entities and connectors and drives each frame.
//!
//! A frame is [`SceneController::tick`]: advance the formation animation (or
//! run physics once it has settled), then repaint connectors and entities.
//! Pointer callbacks mutate hover and drag state between frames.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_6, TAU};

use glam::DVec2;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::connector::{Connector, complete_graph};
use super::entity::{Entity, Neighbors};
use super::surface::{Paint, Surface};
use super::types::{Bounds, EntityRecord, Mode};
use crate::config::SceneConfig;
use crate::data::dataset;

/// Receives the entity the user clicked on.
pub trait DetailDisplay {
	fn show(&mut self, entity: &Entity, mode: Mode);
	fn hide(&mut self);
}

/// The studio catalogue listing, optionally narrowed to one studio.
pub trait CatalogueView {
	fn update(&mut self, mode: Mode, filter: Option<&str>);
}

/// Formation animation state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Formation {
	/// Positions are assigned along an eased path; physics is off.
	Animating,
	/// Entities move under repulsion, centring and damping.
	Settled,
}

pub fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// Start and resting slots for a set of entities on a given surface.
struct Layout {
	center: DVec2,
	ring: f64,
	triforce: f64,
}

impl Layout {
	fn new(bounds: Bounds, config: &SceneConfig) -> Self {
		let center = bounds.center();
		let ring = center.x.min(center.y) * config.ring_factor;
		Self {
			center,
			ring,
			triforce: ring * config.triforce_factor,
		}
	}

	/// Slot `index` of `count` evenly spaced on the ring, starting at the top.
	fn ring_slot(&self, index: usize, count: usize) -> DVec2 {
		let angle = index as f64 / count as f64 * TAU - FRAC_PI_2;
		self.center + DVec2::new(angle.cos(), angle.sin()) * self.ring
	}

	/// Two stacked triangles: the first three entities above centre, the
	/// rest cycling around a mirrored triangle below.
	fn triforce_slot(&self, index: usize) -> DVec2 {
		let (angle, lift) = if index < 3 {
			(index as f64 / 3.0 * TAU - FRAC_PI_2, -self.triforce)
		} else {
			((index - 3) as f64 / 3.0 * TAU + FRAC_PI_6, self.triforce)
		};
		self.center + DVec2::new(angle.cos(), angle.sin()) * self.triforce + DVec2::new(0.0, lift)
	}
}

/// Owns the entities of the active mode and runs formation, physics,
/// pointer interaction and painting.
pub struct SceneController {
	config: SceneConfig,
	mode: Mode,
	entities: Vec<Entity>,
	connectors: Vec<Connector>,
	formation: Formation,
	progress: f64,
	frame: u64,
	bounds: Bounds,
	cursor: DVec2,
	drag: Option<usize>,
	rng: SmallRng,
	details: Box<dyn DetailDisplay>,
	catalogue: Box<dyn CatalogueView>,
}

impl SceneController {
	/// Build the studios graph in its triforce start layout, ready to form.
	pub fn new(
		config: SceneConfig,
		bounds: Bounds,
		seed: u64,
		details: Box<dyn DetailDisplay>,
		catalogue: Box<dyn CatalogueView>,
	) -> Self {
		let mut scene = Self {
			config,
			mode: Mode::Studios,
			entities: Vec::new(),
			connectors: Vec::new(),
			formation: Formation::Animating,
			progress: 0.0,
			frame: 0,
			bounds,
			cursor: DVec2::ZERO,
			drag: None,
			rng: SmallRng::seed_from_u64(seed),
			details,
			catalogue,
		};
		scene.initialize();
		scene
	}

	pub fn initialize(&mut self) {
		let layout = Layout::new(self.bounds, &self.config);
		let records = dataset(Mode::Studios);
		let count = records.len();

		self.mode = Mode::Studios;
		self.drag = None;
		self.entities = records
			.iter()
			.enumerate()
			.map(|(i, record)| {
				let (start, target) = (layout.triforce_slot(i), layout.ring_slot(i, count));
				let mut entity =
					Entity::new(record, start, self.config.nominal_radius, self.rng.gen_range(0.0..TAU));
				entity.aim(start, target);
				entity
			})
			.collect();
		self.rebuild_connectors();
		self.restart_formation();
		info!("scene initialized with {count} {}", self.mode);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.bounds = Bounds::new(width, height);
	}

	/// Switch datasets. Reselecting the active mode does nothing and
	/// returns `false`.
	pub fn switch_mode(&mut self, mode: Mode) -> bool {
		if mode == self.mode {
			return false;
		}
		info!("switching {} -> {mode}", self.mode);
		self.mode = mode;
		self.details.hide();
		self.transition_to(dataset(mode));
		self.catalogue.update(mode, None);
		true
	}

	/// Morph the current entity set into `records`.
	///
	/// Entities are reused by index; surplus records bud off
	/// `entities[index % old_count]` and grow in from zero radius.
	pub fn transition_to(&mut self, records: &'static [EntityRecord]) {
		let layout = Layout::new(self.bounds, &self.config);
		let count = records.len();
		let old_count = self.entities.len();

		self.entities.truncate(count);
		for (i, record) in records.iter().enumerate() {
			let target = layout.ring_slot(i, count);
			if let Some(entity) = self.entities.get_mut(i) {
				entity.assign(record);
				entity.aim(entity.position, target);
				continue;
			}

			let parent = (old_count > 0).then(|| &self.entities[i % old_count]);
			let origin = parent.map_or(layout.center, |p| p.position);
			let parent_color = parent.map(|p| p.color);

			let half = self.config.split_jitter / 2.0;
			let start = if half > 0.0 {
				origin + DVec2::new(self.rng.gen_range(-half..half), self.rng.gen_range(-half..half))
			} else {
				origin
			};
			let mut entity = Entity::new(record, start, 0.0, self.rng.gen_range(0.0..TAU));
			if let Some(color) = parent_color {
				entity.color = color;
			}
			entity.aim(start, target);
			self.entities.push(entity);
		}

		if self.drag.is_some_and(|i| i >= count) {
			self.drag = None;
		}
		self.rebuild_connectors();
		self.restart_formation();
		debug!("transition {old_count} -> {count} entities");
	}

	/// Replay the formation from the triforce for the current entities.
	pub fn reset_layout(&mut self) {
		let layout = Layout::new(self.bounds, &self.config);
		let count = self.entities.len();
		for (i, entity) in self.entities.iter_mut().enumerate() {
			let (start, target) = (layout.triforce_slot(i), layout.ring_slot(i, count));
			entity.position = start;
			entity.velocity = DVec2::ZERO;
			entity.aim(start, target);
		}
		self.release_drag();
		self.restart_formation();
		self.details.hide();
		info!("layout reset");
	}

	/// Track the cursor: recompute hover and carry the dragged entity.
	///
	/// The last entity containing the cursor wins the hover. While a drag is
	/// active the dragged entity keeps it and no other entity is hovered.
	pub fn pointer_move(&mut self, x: f64, y: f64) {
		self.cursor = DVec2::new(x, y);
		let hit = match self.drag {
			Some(_) => None,
			None => self.entities.iter().rposition(|e| e.contains_point(x, y)),
		};
		for (i, entity) in self.entities.iter_mut().enumerate() {
			if !entity.dragging {
				entity.hovered = hit == Some(i);
			}
		}

		if let Some(entity) = self.drag.and_then(|i| self.entities.get_mut(i)) {
			entity.position = self.cursor;
			entity.velocity = DVec2::ZERO;
		}
	}

	/// Grab the first entity under the press point. The grabbed entity takes
	/// the hover from whichever entity held it.
	pub fn pointer_down(&mut self, x: f64, y: f64) {
		if let Some(i) = self.entities.iter().position(|e| e.contains_point(x, y)) {
			self.release_drag();
			for (j, entity) in self.entities.iter_mut().enumerate() {
				entity.hovered = j == i;
			}
			self.entities[i].dragging = true;
			self.drag = Some(i);
			debug!("drag start {}", self.entities[i].id());
		}
	}

	pub fn pointer_up(&mut self) {
		self.release_drag();
	}

	pub fn pointer_leave(&mut self) {
		for entity in &mut self.entities {
			entity.hovered = false;
		}
		self.release_drag();
	}

	/// Open the details of the first entity under the click, or clear them.
	pub fn click(&mut self, x: f64, y: f64) {
		let hit = self.entities.iter().find(|e| e.contains_point(x, y));
		match hit {
			Some(entity) => {
				self.details.show(entity, self.mode);
				if self.mode == Mode::Studios {
					self.catalogue.update(self.mode, Some(entity.name()));
				}
			}
			None => {
				self.details.hide();
				if self.mode == Mode::Studios {
					self.catalogue.update(self.mode, None);
				}
			}
		}
	}

	/// Advance one frame and repaint `surface`.
	pub fn tick(&mut self, surface: &mut dyn Surface, elapsed_ms: f64) {
		self.frame += 1;
		self.bounds = surface.bounds();
		self.update();
		self.render(surface, elapsed_ms);
	}

	fn update(&mut self) {
		match self.formation {
			Formation::Animating => {
				self.progress = (self.progress + self.config.formation_step).min(1.0);
				let done = self.progress >= 1.0;
				if done {
					self.formation = Formation::Settled;
					debug!("formation settled after {} frames", self.frame);
				}
				let eased = ease_out_cubic(self.progress);
				for entity in &mut self.entities {
					entity.position = if done {
						entity.target_position
					} else {
						entity.initial_position.lerp(entity.target_position, eased)
					};
					entity.velocity = DVec2::ZERO;
				}
			}
			Formation::Settled => {
				let (config, bounds) = (&self.config, self.bounds);
				for i in 0..self.entities.len() {
					let (before, rest) = self.entities.split_at_mut(i);
					if let Some((entity, after)) = rest.split_first_mut() {
						entity.step(Neighbors { before, after }, bounds, config.settled_damping, config);
					}
				}
			}
		}
	}

	fn render(&mut self, surface: &mut dyn Surface, elapsed_ms: f64) {
		let trail = Paint::solid(self.config.trail_fill.as_str());
		surface.fill_rect(DVec2::ZERO, surface.width(), surface.height(), &trail);

		for connector in &self.connectors {
			connector.render(surface, &self.entities, elapsed_ms);
		}
		for entity in &mut self.entities {
			entity.render(surface, elapsed_ms, &self.config);
		}
	}

	fn restart_formation(&mut self) {
		self.progress = 0.0;
		self.formation = Formation::Animating;
	}

	fn rebuild_connectors(&mut self) {
		let rng = &mut self.rng;
		self.connectors = complete_graph(self.entities.len(), || rng.gen_range(0.0..100.0));
	}

	fn release_drag(&mut self) {
		if let Some(entity) = self.drag.take().and_then(|i| self.entities.get_mut(i)) {
			entity.dragging = false;
			debug!("drag end {}", entity.id());
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;
	use crate::components::network::Rgb;
	use crate::components::network::surface::recording::{DrawCall, RecordingSurface};
	use crate::data::{BRANDS, CITIES, STUDIOS};

	#[derive(Default)]
	struct Calls {
		shown: Vec<(&'static str, Mode)>,
		hidden: usize,
		catalogue: Vec<(Mode, Option<String>)>,
	}

	#[derive(Clone, Default)]
	struct Recorder(Rc<RefCell<Calls>>);

	impl DetailDisplay for Recorder {
		fn show(&mut self, entity: &Entity, mode: Mode) {
			self.0.borrow_mut().shown.push((entity.id(), mode));
		}

		fn hide(&mut self) {
			self.0.borrow_mut().hidden += 1;
		}
	}

	impl CatalogueView for Recorder {
		fn update(&mut self, mode: Mode, filter: Option<&str>) {
			self.0.borrow_mut().catalogue.push((mode, filter.map(str::to_string)));
		}
	}

	const W: f64 = 1200.0;
	const H: f64 = 800.0;

	fn scene() -> (SceneController, Recorder, RecordingSurface) {
		let recorder = Recorder::default();
		let scene = SceneController::new(
			SceneConfig::default(),
			Bounds::new(W, H),
			7,
			Box::new(recorder.clone()),
			Box::new(recorder.clone()),
		);
		(scene, recorder, RecordingSurface::new(W, H))
	}

	fn settle(scene: &mut SceneController, surface: &mut RecordingSurface) {
		while scene.formation == Formation::Animating {
			scene.tick(surface, 0.0);
		}
	}

	fn close(a: DVec2, b: DVec2) -> bool {
		a.distance(b) < 1e-9
	}

	fn hovered_ids(scene: &SceneController) -> Vec<&'static str> {
		scene.entities.iter().filter(|e| e.hovered).map(Entity::id).collect()
	}

	fn dragged_id(scene: &SceneController) -> Option<&'static str> {
		scene.drag.map(|i| scene.entities[i].id())
	}

	#[test]
	fn starts_with_studios_in_triforce() {
		let (scene, _, _) = scene();
		assert_eq!(scene.mode, Mode::Studios);
		assert_eq!(scene.entities.len(), 6);
		assert_eq!(scene.connectors.len(), 15);
		assert_eq!(scene.formation, Formation::Animating);
		assert_eq!(scene.progress, 0.0);

		// centre (600, 400), ring 160, triforce 48
		let first = &scene.entities[0];
		assert!(close(first.position, DVec2::new(600.0, 304.0)));
		assert!(close(first.target_position, DVec2::new(600.0, 240.0)));
		let fourth = &scene.entities[3];
		let expected = DVec2::new(600.0 + FRAC_PI_6.cos() * 48.0, 400.0 + FRAC_PI_6.sin() * 48.0 + 48.0);
		assert!(close(fourth.position, expected));
		for e in &scene.entities {
			assert!((e.target_position.distance(DVec2::new(600.0, 400.0)) - 160.0).abs() < 1e-9);
			assert_eq!(e.radius, 40.0);
		}
	}

	#[test]
	fn formation_progress_is_monotonic_and_lands_on_target() {
		let (mut scene, _, mut surface) = scene();
		let mut last = scene.progress;
		for _ in 0..124 {
			scene.tick(&mut surface, 0.0);
			assert!(scene.progress >= last);
			assert!((0.0..=1.0).contains(&scene.progress));
			last = scene.progress;
			assert!(scene.entities.iter().all(|e| e.velocity == DVec2::ZERO));
		}
		assert_eq!(scene.formation, Formation::Animating);

		settle(&mut scene, &mut surface);
		assert_eq!(scene.progress, 1.0);
		for e in &scene.entities {
			assert_eq!(e.position, e.target_position);
		}
	}

	#[test]
	fn settled_physics_respects_walls() {
		let (mut scene, _, mut surface) = scene();
		settle(&mut scene, &mut surface);
		scene.entities[0].velocity = DVec2::new(-500.0, 900.0);
		for _ in 0..300 {
			scene.tick(&mut surface, 16.0);
			for e in &scene.entities {
				let margin = e.radius * 2.0;
				assert!(e.position.x >= margin && e.position.x <= W - margin);
				assert!(e.position.y >= margin && e.position.y <= H - margin);
			}
		}
	}

	#[test]
	fn studios_to_brands_splits_new_entities() {
		let (mut scene, recorder, mut surface) = scene();
		for _ in 0..40 {
			scene.tick(&mut surface, 0.0);
		}
		let before: Vec<(DVec2, Rgb)> =
			scene.entities.iter().map(|e| (e.position, e.color)).collect();

		assert!(scene.switch_mode(Mode::Brands));
		assert_eq!(scene.entities.len(), 13);
		assert_eq!(scene.connectors.len(), 78);
		assert_eq!(scene.formation, Formation::Animating);
		assert_eq!(scene.progress, 0.0);

		for (i, e) in scene.entities.iter().enumerate() {
			assert_eq!(e.id(), BRANDS[i].id);
			if i < 6 {
				assert_eq!(e.initial_position, before[i].0);
				assert_eq!(e.position, before[i].0);
				assert_eq!(e.color, before[i].1);
				assert_eq!(e.radius, 40.0);
			} else {
				let parent = before[i % 6];
				assert!((e.position.x - parent.0.x).abs() <= 2.5);
				assert!((e.position.y - parent.0.y).abs() <= 2.5);
				assert_eq!(e.initial_position, e.position);
				assert_eq!(e.color, parent.1);
				assert_eq!(e.radius, 0.0);
			}
			assert_eq!(e.target_color, BRANDS[i].color.parse::<Rgb>().unwrap());
		}

		let calls = recorder.0.borrow();
		assert_eq!(calls.hidden, 1);
		assert_eq!(calls.catalogue, vec![(Mode::Brands, None)]);
	}

	#[test]
	fn shrinking_drops_extra_entities() {
		let (mut scene, _, _) = scene();
		scene.switch_mode(Mode::Brands);
		scene.switch_mode(Mode::Cities);
		assert_eq!(scene.entities.len(), 6);
		assert_eq!(scene.connectors.len(), 15);
		let ids: Vec<_> = scene.entities.iter().map(Entity::id).collect();
		let expected: Vec<_> = CITIES.iter().map(|r| r.id).collect();
		assert_eq!(ids, expected);
	}

	#[test]
	fn reselecting_mode_is_a_no_op() {
		let (mut scene, recorder, _) = scene();
		let positions: Vec<_> = scene.entities.iter().map(|e| e.position).collect();
		assert!(!scene.switch_mode(Mode::Studios));
		assert_eq!(scene.entities.len(), 6);
		assert!(scene.entities.iter().zip(&positions).all(|(e, p)| e.position == *p));
		assert_eq!(recorder.0.borrow().hidden, 0);
		assert!(recorder.0.borrow().catalogue.is_empty());
	}

	#[test]
	fn click_on_entity_shows_details_and_filters_catalogue() {
		let (mut scene, recorder, mut surface) = scene();
		settle(&mut scene, &mut surface);
		let p = scene.entities[2].position;
		scene.click(p.x, p.y);

		let calls = recorder.0.borrow();
		assert_eq!(calls.shown, vec![(STUDIOS[2].id, Mode::Studios)]);
		assert_eq!(calls.catalogue, vec![(Mode::Studios, Some(STUDIOS[2].name.to_string()))]);
	}

	#[test]
	fn click_on_empty_canvas_clears_details_and_filter() {
		let (mut scene, recorder, mut surface) = scene();
		settle(&mut scene, &mut surface);
		scene.click(5.0, 5.0);

		let calls = recorder.0.borrow();
		assert!(calls.shown.is_empty());
		assert_eq!(calls.hidden, 1);
		assert_eq!(calls.catalogue, vec![(Mode::Studios, None)]);
	}

	#[test]
	fn click_outside_studios_leaves_catalogue_alone() {
		let (mut scene, recorder, mut surface) = scene();
		scene.switch_mode(Mode::Cities);
		settle(&mut scene, &mut surface);
		let p = scene.entities[0].position;
		scene.click(p.x, p.y);
		scene.click(1.0, 1.0);

		let calls = recorder.0.borrow();
		assert_eq!(calls.shown, vec![("london", Mode::Cities)]);
		assert_eq!(calls.catalogue, vec![(Mode::Cities, None)]);
	}

	#[test]
	fn hover_prefers_last_match_and_drag_prefers_first() {
		let (mut scene, _, _) = scene();
		scene.entities[0].position = DVec2::new(300.0, 300.0);
		scene.entities[1].position = DVec2::new(310.0, 300.0);

		scene.pointer_move(305.0, 300.0);
		assert_eq!(hovered_ids(&scene), vec![STUDIOS[1].id]);

		scene.pointer_down(305.0, 300.0);
		assert_eq!(dragged_id(&scene), Some(STUDIOS[0].id));
		assert_eq!(scene.entities.iter().filter(|e| e.dragging).count(), 1);
		assert_eq!(hovered_ids(&scene), vec![STUDIOS[0].id]);
	}

	#[test]
	fn dropped_entity_rests_at_drop_point() {
		let (mut scene, _, mut surface) = scene();
		settle(&mut scene, &mut surface);
		let p = scene.entities[1].position;

		scene.pointer_down(p.x, p.y);
		scene.pointer_move(W - 1.0, 200.0);
		scene.tick(&mut surface, 16.0);
		let dragged = &scene.entities[1];
		assert_eq!(dragged.position, DVec2::new(W - 1.0, 200.0));

		scene.pointer_up();
		let dropped = &scene.entities[1];
		assert!(!dropped.dragging);
		assert_eq!(dropped.velocity, DVec2::ZERO);
		assert_eq!(dropped.position, DVec2::new(W - 1.0, 200.0));
		assert_eq!(dragged_id(&scene), None);
	}

	#[test]
	fn pointer_leave_clears_hover_and_drag() {
		let (mut scene, _, mut surface) = scene();
		settle(&mut scene, &mut surface);
		let p = scene.entities[0].position;
		scene.pointer_move(p.x, p.y);
		scene.pointer_down(p.x, p.y);
		scene.pointer_leave();
		assert!(scene.entities.iter().all(|e| !e.hovered && !e.dragging));
		assert!(hovered_ids(&scene).is_empty());
		assert_eq!(dragged_id(&scene), None);
	}

	#[test]
	fn reset_restarts_formation_from_triforce() {
		let (mut scene, recorder, mut surface) = scene();
		scene.switch_mode(Mode::Brands);
		settle(&mut scene, &mut surface);
		scene.reset_layout();

		assert_eq!(scene.formation, Formation::Animating);
		assert_eq!(scene.progress, 0.0);
		assert_eq!(scene.entities.len(), 13);
		assert_eq!(scene.entities[0].id(), BRANDS[0].id);
		assert!(close(scene.entities[0].position, DVec2::new(600.0, 304.0)));
		// index 6 wraps onto the lower triangle's first vertex
		assert!(close(scene.entities[6].position, scene.entities[3].position));
		assert!(scene.entities.iter().all(|e| e.velocity == DVec2::ZERO));
		assert_eq!(recorder.0.borrow().hidden, 2);
	}

	#[test]
	fn frame_paints_trail_then_links_then_nodes() {
		let (mut scene, _, mut surface) = scene();
		scene.tick(&mut surface, 0.0);
		assert_eq!(scene.frame, 1);

		assert!(matches!(&surface.calls[0], DrawCall::Rect(Paint::Solid(fill)) if fill == "rgba(10, 10, 15, 0.3)"));
		let lines = surface.calls.iter().filter(|c| matches!(c, DrawCall::Line { .. })).count();
		assert_eq!(lines, 15);
		let first_circle = surface
			.calls
			.iter()
			.position(|c| matches!(c, DrawCall::Circle { .. }))
			.unwrap();
		assert!(surface.calls[1..first_circle].iter().all(|c| matches!(c, DrawCall::Line { .. })));
		assert_eq!(surface.texts().len(), 12);
	}

	#[test]
	fn color_morph_converges_after_switch() {
		let (mut scene, _, mut surface) = scene();
		scene.switch_mode(Mode::Cities);
		for _ in 0..400 {
			scene.tick(&mut surface, 0.0);
		}
		assert!(scene.entities.iter().all(|e| e.color == e.target_color));
	}

	#[test]
	fn press_without_prior_move_hovers_the_grabbed_entity() {
		let (mut scene, _, mut surface) = scene();
		settle(&mut scene, &mut surface);
		let p = scene.entities[4].position;

		scene.pointer_down(p.x, p.y);
		assert_eq!(dragged_id(&scene), Some(STUDIOS[4].id));
		assert_eq!(hovered_ids(&scene), vec![STUDIOS[4].id]);

		// moving over another entity while dragging does not steal the hover
		let other = scene.entities[0].position;
		scene.pointer_move(other.x, other.y);
		assert_eq!(hovered_ids(&scene), vec![STUDIOS[4].id]);
	}

	#[test]
	fn settled_step_uses_settled_damping() {
		let (mut scene, _, mut surface) = scene();
		scene.transition_to(&STUDIOS[..1]);
		settle(&mut scene, &mut surface);

		// alone at the centre: no repulsion and no centring pull
		let center = DVec2::new(W / 2.0, H / 2.0);
		scene.entities[0].position = center;
		scene.entities[0].velocity = DVec2::new(10.0, -4.0);
		scene.tick(&mut surface, 0.0);

		let e = &scene.entities[0];
		assert!(close(e.position, center + DVec2::new(10.0, -4.0)));
		assert!(close(e.velocity, DVec2::new(10.0 * 0.92, -4.0 * 0.92)));
		assert!(!close(e.velocity, DVec2::new(10.0 * 0.95, -4.0 * 0.95)));
	}

	#[test]
	fn switching_away_releases_a_dropped_drag() {
		let (mut scene, _, mut surface) = scene();
		scene.switch_mode(Mode::Brands);
		settle(&mut scene, &mut surface);
		let p = scene.entities[10].position;
		scene.pointer_down(p.x, p.y);
		assert_eq!(dragged_id(&scene), Some(BRANDS[10].id));

		scene.switch_mode(Mode::Studios);
		assert_eq!(scene.entities.len(), 6);
		assert_eq!(dragged_id(&scene), None);
		assert!(scene.entities.iter().all(|e| !e.dragging && !e.hovered));

		// the pointer no longer carries anything
		scene.pointer_move(10.0, 10.0);
		assert!(scene.entities.iter().all(|e| e.position != DVec2::new(10.0, 10.0)));
	}

	#[test]
	fn reset_releases_an_active_drag() {
		let (mut scene, _, mut surface) = scene();
		settle(&mut scene, &mut surface);
		let p = scene.entities[0].position;
		scene.pointer_down(p.x, p.y);
		assert_eq!(dragged_id(&scene), Some(STUDIOS[0].id));

		scene.reset_layout();
		assert_eq!(dragged_id(&scene), None);
		assert!(scene.entities.iter().all(|e| !e.dragging));
		assert!(close(scene.entities[0].position, DVec2::new(600.0, 304.0)));

		scene.pointer_move(10.0, 10.0);
		assert!(close(scene.entities[0].position, DVec2::new(600.0, 304.0)));
	}
}
