//! Reactive state shared between the canvas and the side panels.
//!
//! The scene reports clicks through [`DetailDisplay`] and [`CatalogueView`];
//! [`PanelSignals`] turns those calls into signal writes the panels render.

use leptos::prelude::*;

use super::network::{CatalogueView, DetailDisplay, Entity, EntityRecord, Mode, Rgb};

/// What the details panel is showing.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
	pub name: &'static str,
	/// Accent colour at the moment of the click.
	pub color: Rgb,
	pub mode: Mode,
	pub record: &'static EntityRecord,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogueFilter {
	pub mode: Mode,
	pub studio: Option<String>,
}

#[derive(Clone, Copy, Debug)]
pub struct PanelSignals {
	pub selection: RwSignal<Option<Selection>>,
	pub catalogue: RwSignal<CatalogueFilter>,
}

impl PanelSignals {
	pub fn new() -> Self {
		Self {
			selection: RwSignal::new(None),
			catalogue: RwSignal::new(CatalogueFilter::default()),
		}
	}
}

impl Default for PanelSignals {
	fn default() -> Self {
		Self::new()
	}
}

impl DetailDisplay for PanelSignals {
	fn show(&mut self, entity: &Entity, mode: Mode) {
		self.selection.set(Some(Selection {
			name: entity.name(),
			color: entity.color,
			mode,
			record: entity.record(),
		}));
	}

	fn hide(&mut self) {
		self.selection.set(None);
	}
}

impl CatalogueView for PanelSignals {
	fn update(&mut self, mode: Mode, filter: Option<&str>) {
		self.catalogue.set(CatalogueFilter {
			mode,
			studio: filter.map(str::to_string),
		});
	}
}
