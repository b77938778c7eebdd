use std::fmt;

use glam::DVec2;

/// Pixel dimensions of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	pub width: f64,
	pub height: f64,
}

impl Bounds {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	pub fn center(self) -> DVec2 {
		DVec2::new(self.width / 2.0, self.height / 2.0)
	}
}

/// The active dataset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
	#[default]
	Studios,
	Cities,
	Brands,
}

impl Mode {
	pub const ALL: [Mode; 3] = [Mode::Studios, Mode::Cities, Mode::Brands];

	pub fn as_str(self) -> &'static str {
		match self {
			Mode::Studios => "studios",
			Mode::Cities => "cities",
			Mode::Brands => "brands",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Mode::Studios => "Studios",
			Mode::Cities => "Cities",
			Mode::Brands => "Brands",
		}
	}
}

impl fmt::Display for Mode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Per-mode details attached to an entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
	/// Studios and brands: a blurb, what they make, and where to find them.
	Showcase {
		description: &'static str,
		website: Option<&'static str>,
		products: &'static [&'static str],
	},
	/// Cities: what happens there and who is involved.
	Venue {
		events: &'static [VenueEntry],
		locations: &'static [VenueEntry],
		partners: &'static [VenueEntry],
	},
}

/// One line of a city listing, optionally linked and tinted.
///
/// `notes` are rendered as smaller lines under the entry and may carry links
/// of their own (an event's venue on a map, say).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VenueEntry {
	/// Bold lead-in before the text, such as a district name.
	pub lead: Option<&'static str>,
	pub text: &'static str,
	pub link: Option<&'static str>,
	pub notes: &'static [VenueEntry],
	/// Accent colour, usually the studio the entry belongs to.
	pub color: Option<&'static str>,
}

impl VenueEntry {
	pub const fn plain(text: &'static str) -> Self {
		Self {
			lead: None,
			text,
			link: None,
			notes: &[],
			color: None,
		}
	}

	pub const fn linked(text: &'static str, link: &'static str) -> Self {
		Self {
			link: Some(link),
			..Self::plain(text)
		}
	}

	pub const fn lead(self, lead: &'static str) -> Self {
		Self {
			lead: Some(lead),
			..self
		}
	}

	pub const fn notes(self, notes: &'static [VenueEntry]) -> Self {
		Self { notes, ..self }
	}

	pub const fn color(self, color: &'static str) -> Self {
		Self {
			color: Some(color),
			..self
		}
	}
}

/// One row of a dataset, owned by the data store and shared by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityRecord {
	pub id: &'static str,
	pub name: &'static str,
	pub color: &'static str,
	pub payload: Payload,
}
