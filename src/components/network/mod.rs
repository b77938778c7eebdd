mod color;
mod component;
mod connector;
mod entity;
mod render;
mod scene;
mod surface;
mod types;

pub use color::Rgb;
pub use component::NetworkCanvas;
pub use entity::Entity;
pub use scene::{CatalogueView, DetailDisplay};
pub use types::{EntityRecord, Mode, Payload, VenueEntry};
