//! Hand-authored datasets behind the three modes and the studio catalogue.

use crate::components::network::{EntityRecord, Mode, Payload, VenueEntry};

const COMING_SOON: &[VenueEntry] = &[VenueEntry::plain("Coming Soon")];
const GAMES_GREEN: &str = "#10b981";
const SNACKS_PINK: &str = "#ec4899";

const SPIELEFEST_NOTES: &[VenueEntry] = &[
	VenueEntry::plain("Studios: Allmer Games"),
	VenueEntry::plain("Next Event: 11.-12. July 2026"),
	VenueEntry::linked(
		"Austria Center",
		"https://www.google.com/maps/search/?api=1&query=Austria+Center+Vienna",
	)
	.lead("Location:"),
];

const VIENNA_EVENTS: &[VenueEntry] = &[VenueEntry::linked("Spielefest", "https://spielefest.wien")
	.notes(SPIELEFEST_NOTES)
	.color(GAMES_GREEN)];

const VIENNA_LOCATIONS: &[VenueEntry] = &[
	VenueEntry::linked(
		"Kolschitzkygasse 14-18",
		"https://www.google.com/maps/search/?api=1&query=Kolschitzkygasse+14-18+Vienna",
	)
	.lead("Wieden"),
	VenueEntry::linked(
		"Krottenbachstraße 140",
		"https://www.google.com/maps/search/?api=1&query=Krottenbachstraße+140+Vienna",
	)
	.lead("Döbling"),
];

const GAMING_EVENTS: &[VenueEntry] = &[VenueEntry::plain("Gaming Events")];
const CANDY_PRODUCTION: &[VenueEntry] = &[VenueEntry::plain("Candy Production")];

const VIENNA_PARTNERS: &[VenueEntry] = &[
	VenueEntry::linked("Paradice", "https://www.paradice.wien")
		.notes(GAMING_EVENTS)
		.color(GAMES_GREEN),
	VenueEntry::linked("Zuckerlwerkstatt", "https://www.zuckerlwerkstatt.at")
		.notes(CANDY_PRODUCTION)
		.color(SNACKS_PINK),
];

pub static STUDIOS: [EntityRecord; 6] = [
	studio(
		"comics",
		"Allmer Comics",
		"#ef4444",
		"https://allmercomics.com",
		&["Comic Books", "Digital Comics"],
	),
	studio(
		"films",
		"Allmer Films",
		"#3b82f6",
		"https://allmerfilms.com",
		&["Feature Films", "Limited Series"],
	),
	studio(
		"music",
		"Allmer Music",
		"#fbbf24",
		"https://allmermusic.com",
		&["Studio Albums", "Score Albums", "Musical Instruments"],
	),
	studio(
		"games",
		"Allmer Games",
		GAMES_GREEN,
		"https://allmergames.com",
		&["Tabletop Games", "Video Games", "Toys"],
	),
	studio(
		"journals",
		"Allmer Journals",
		"#8b4513",
		"https://allmerjournals.com",
		&["Magazines", "Books"],
	),
	studio(
		"snacks",
		"Allmer Snacks",
		SNACKS_PINK,
		"https://allmersnacks.com",
		&["Food", "Beverages"],
	),
];

pub static CITIES: [EntityRecord; 6] = [
	city("london", "London", COMING_SOON, COMING_SOON, &[]),
	city("frankfurt", "Frankfurt", COMING_SOON, COMING_SOON, &[]),
	city("vienna", "Vienna", VIENNA_EVENTS, VIENNA_LOCATIONS, VIENNA_PARTNERS),
	city("milan", "Milan", COMING_SOON, COMING_SOON, &[]),
	city("madrid", "Madrid", COMING_SOON, COMING_SOON, &[]),
	city("paris", "Paris", COMING_SOON, COMING_SOON, &[]),
];

pub static BRANDS: [EntityRecord; 13] = [
	brand("american-portrait", "American Portrait", "https://simonallmer.com/americanportrait"),
	brand("believe", "Believe", "https://believegame.com"),
	brand("casino-camino", "Casino Camino", "https://casinocamino.com"),
	brand("chronicle", "Chronicle", "https://simonallmer.com/chronicle"),
	brand("colbu", "Colbu", "https://colbu.com"),
	brand("cosmographia", "Cosmographia", "https://simonallmer.com/cosmographia"),
	brand("detective-noname", "Detective Noname", "https://simonallmer.com/detectivenoname"),
	brand("elements", "Elements", "https://simonallmer.com/elements"),
	brand("futory", "Futory", "https://futory.com"),
	brand("lunyra", "Lunyra", "https://lunyra.com"),
	brand("metropole", "Metropole", "https://simonallmer.com/metropole"),
	brand("seven-wonders", "Seven Wonders", "https://sevenwondersgames.com"),
	brand("society-review", "Society Review", "https://societyreview.org"),
];

/// The records shown for `mode`, in display order.
pub fn dataset(mode: Mode) -> &'static [EntityRecord] {
	match mode {
		Mode::Studios => &STUDIOS,
		Mode::Cities => &CITIES,
		Mode::Brands => &BRANDS,
	}
}

const fn studio(
	id: &'static str,
	name: &'static str,
	color: &'static str,
	website: &'static str,
	products: &'static [&'static str],
) -> EntityRecord {
	EntityRecord {
		id,
		name,
		color,
		payload: Payload::Showcase {
			description: "Description coming soon",
			website: Some(website),
			products,
		},
	}
}

const fn city(
	id: &'static str,
	name: &'static str,
	events: &'static [VenueEntry],
	locations: &'static [VenueEntry],
	partners: &'static [VenueEntry],
) -> EntityRecord {
	EntityRecord {
		id,
		name,
		color: "#a0a0a0",
		payload: Payload::Venue {
			events,
			locations,
			partners,
		},
	}
}

const fn brand(id: &'static str, name: &'static str, website: &'static str) -> EntityRecord {
	EntityRecord {
		id,
		name,
		color: "#b0b0b0",
		payload: Payload::Showcase {
			description: "Coming soon",
			website: Some(website),
			products: &["Coming soon"],
		},
	}
}

/// A released or announced title in a studio's catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogueItem {
	pub name: &'static str,
	pub link: Option<&'static str>,
}

impl CatalogueItem {
	pub fn is_tba(&self) -> bool {
		self.name.contains("[TBA]")
	}

	/// Announced titles are never linked, even when a link is on file.
	pub fn active_link(&self) -> Option<&'static str> {
		self.link.filter(|_| !self.is_tba())
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogueSection {
	pub studio: &'static str,
	pub color: &'static str,
	pub items: &'static [CatalogueItem],
}

impl CatalogueSection {
	pub fn studio_url(&self) -> &'static str {
		STUDIOS
			.iter()
			.find(|record| record.name == self.studio)
			.and_then(|record| match record.payload {
				Payload::Showcase { website, .. } => website,
				Payload::Venue { .. } => None,
			})
			.unwrap_or("#")
	}
}

const fn item(name: &'static str) -> CatalogueItem {
	CatalogueItem { name, link: None }
}

const fn linked(name: &'static str, link: &'static str) -> CatalogueItem {
	CatalogueItem {
		name,
		link: Some(link),
	}
}

pub static CATALOGUE: [CatalogueSection; 6] = [
	CatalogueSection {
		studio: "Allmer Comics",
		color: "#ef4444",
		items: &[
			item("C001 Kissinger: A World Destroyed [TBA]"),
			item("C002 Carter: The Blood Beneath the Soil [TBA]"),
			item("C003 Futory: Dragon Kingdom [TBA]"),
		],
	},
	CatalogueSection {
		studio: "Allmer Films",
		color: "#3b82f6",
		items: &[
			item("F001 Kissinger [TBA]"),
			item("F002 Carter [TBA]"),
			item("F003 Futory: Dragon Kingdom [TBA]"),
		],
	},
	CatalogueSection {
		studio: "Allmer Music",
		color: "#fbbf24",
		items: &[
			linked("M001 American Portrait Score", "https://simonallmer.com/americanportrait"),
			linked("M002 Pentamorph", "https://simonallmer.com/pentamorph"),
			item("M003 Sin [TBA]"),
			item("M004 Futory Score [TBA]"),
		],
	},
	CatalogueSection {
		studio: "Allmer Games",
		color: "#10b981",
		items: &[
			linked("G001 Pyramid", "https://simonallmer.com/pyramid"),
			linked("G002 Nectar", "https://simonallmer.com/nectar"),
			linked("G003 Futory Cards Unity", "https://simonallmer.com/futory"),
			linked("G004 Elements", "https://simonallmer.com/elements"),
			linked("G005 Gardens", "https://simonallmer.com/gardens"),
			linked("G006 Temple", "https://simonallmer.com/temple"),
			linked("G007 Believe", "https://simonallmer.com/believe"),
			linked(
				"G008 Detective Noname and the Silent Circle",
				"https://simonallmer.com/noname",
			),
			linked("G009 Statue", "https://simonallmer.com/statue"),
			linked("G010 Mausoleum", "https://simonallmer.com/mausoleum"),
			linked("G011 Colossus", "https://simonallmer.com/colossus"),
			linked("G012 Pharos", "https://simonallmer.com/pharos"),
			item("G013 Equilibrium [TBA]"),
			linked("G014 Futory Cards Duality", "https://simonallmer.com/futory"),
			item("G015 Capital [TBA]"),
		],
	},
	CatalogueSection {
		studio: "Allmer Journals",
		color: "#8b4513",
		items: &[
			linked("J001 Simon Allmer World", "https://simonallmer.com/world"),
			linked("J002 Society Review", "https://simonallmer.com/societyreview"),
			linked("J003 Chronicle", "https://simonallmer.com/chronicle"),
			linked("J004 ACRONYM", "https://simonallmer.com/acronym"),
			linked("J005 Cosmographia", "https://simonallmer.com/cosmographia"),
		],
	},
	CatalogueSection {
		studio: "Allmer Snacks",
		color: "#ec4899",
		items: &[
			linked("S001 Solar-Soda", "https://simonallmer.com/solarsoda"),
			linked("S002 Metropole", "https://simonallmer.com/metropole"),
			item("S003 Hot Ice [TBA]"),
		],
	},
];

/// Catalogue sections to list for `mode`, optionally narrowed to one studio.
///
/// Only the studios mode has a catalogue. A filter naming no known studio
/// yields nothing.
pub fn catalogue_sections(mode: Mode, filter: Option<&str>) -> Vec<&'static CatalogueSection> {
	if mode != Mode::Studios {
		return Vec::new();
	}
	CATALOGUE
		.iter()
		.filter(|section| filter.is_none_or(|name| section.studio == name))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::network::Rgb;

	#[test]
	fn dataset_sizes() {
		assert_eq!(dataset(Mode::Studios).len(), 6);
		assert_eq!(dataset(Mode::Cities).len(), 6);
		assert_eq!(dataset(Mode::Brands).len(), 13);
	}

	#[test]
	fn ids_are_unique_and_colors_parse() {
		for mode in Mode::ALL {
			let records = dataset(mode);
			for (i, record) in records.iter().enumerate() {
				assert!(record.color.parse::<Rgb>().is_ok(), "{}", record.color);
				assert!(records[i + 1..].iter().all(|other| other.id != record.id));
			}
		}
	}

	#[test]
	fn catalogue_only_in_studios_mode() {
		assert_eq!(catalogue_sections(Mode::Studios, None).len(), 6);
		assert!(catalogue_sections(Mode::Cities, None).is_empty());
		assert!(catalogue_sections(Mode::Brands, Some("Allmer Games")).is_empty());
	}

	#[test]
	fn catalogue_filter_narrows_to_one_studio() {
		let sections = catalogue_sections(Mode::Studios, Some("Allmer Games"));
		assert_eq!(sections.len(), 1);
		assert_eq!(sections[0].items.len(), 15);
		assert_eq!(sections[0].studio_url(), "https://allmergames.com");
		assert!(catalogue_sections(Mode::Studios, Some("Nowhere Studio")).is_empty());
	}

	#[test]
	fn tba_items_are_never_linked() {
		let tba = CatalogueItem {
			name: "X001 Secret [TBA]",
			link: Some("https://example.com"),
		};
		assert!(tba.is_tba());
		assert_eq!(tba.active_link(), None);
		assert_eq!(
			linked("G001 Pyramid", "https://simonallmer.com/pyramid").active_link(),
			Some("https://simonallmer.com/pyramid")
		);
	}

	#[test]
	fn vienna_listing_keeps_its_links() {
		let Payload::Venue {
			events,
			locations,
			partners,
		} = CITIES[2].payload
		else {
			panic!("vienna is a venue");
		};
		assert_eq!(events[0].link, Some("https://spielefest.wien"));
		assert_eq!(events[0].color, Some("#10b981"));
		assert!(events[0].notes.iter().any(|n| n.link.is_some_and(|l| l.contains("Austria+Center"))));
		assert_eq!(locations.len(), 2);
		assert!(locations.iter().all(|l| l.lead.is_some() && l.link.is_some()));

		let partner_colors: Vec<_> = partners.iter().map(|p| p.color).collect();
		let studio_colors: Vec<_> = [&STUDIOS[3], &STUDIOS[5]].iter().map(|r| Some(r.color)).collect();
		assert_eq!(partner_colors, studio_colors);
	}

	#[test]
	fn other_cities_are_unlinked_placeholders() {
		for city in CITIES.iter().filter(|c| c.id != "vienna") {
			let Payload::Venue { events, partners, .. } = city.payload else {
				panic!("{} is a venue", city.id);
			};
			assert_eq!(events, COMING_SOON);
			assert!(partners.is_empty());
		}
	}
}
