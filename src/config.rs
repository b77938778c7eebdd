//! Runtime scene configuration loaded from `assets/scene.toml`.
//!
//! Every field defaults to the matching value in [`crate::constants`], so the
//! TOML only needs the keys it wants to override.

use log::warn;
use serde::Deserialize;

use crate::constants::*;
use crate::error::ConfigError;

const EMBEDDED_CONFIG: &str = include_str!("../assets/scene.toml");

/// Tunable physics, easing and layout parameters for the scene.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
	// physics
	pub interaction_radius: f64,
	pub repulsion_strength: f64,
	pub centering_strength: f64,
	/// Velocity retention per settled frame.
	pub settled_damping: f64,
	pub bounce_factor: f64,

	// appearance
	pub nominal_radius: f64,
	pub ease_rate: f64,
	pub radius_snap: f64,
	pub trail_fill: String,

	// formation
	pub formation_step: f64,
	pub ring_factor: f64,
	pub triforce_factor: f64,
	pub split_jitter: f64,
}

impl Default for SceneConfig {
	fn default() -> Self {
		Self {
			interaction_radius: INTERACTION_RADIUS,
			repulsion_strength: REPULSION_STRENGTH,
			centering_strength: CENTERING_STRENGTH,
			settled_damping: SETTLED_DAMPING,
			bounce_factor: BOUNCE_FACTOR,
			nominal_radius: NOMINAL_RADIUS,
			ease_rate: EASE_RATE,
			radius_snap: RADIUS_SNAP,
			trail_fill: TRAIL_FILL.to_string(),
			formation_step: FORMATION_STEP,
			ring_factor: RING_FACTOR,
			triforce_factor: TRIFORCE_FACTOR,
			split_jitter: SPLIT_JITTER,
		}
	}
}

impl SceneConfig {
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}

	/// Parse the bundled `assets/scene.toml`, falling back to defaults.
	pub fn load() -> Self {
		match Self::from_toml_str(EMBEDDED_CONFIG) {
			Ok(config) => config,
			Err(err) => {
				warn!("scene config rejected, using defaults: {err}");
				Self::default()
			}
		}
	}
}
