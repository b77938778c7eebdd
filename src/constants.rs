//! Default tuning for the network scene.
//!
//! These are the authoritative defaults behind [`crate::config::SceneConfig`].

/// Distance under which two entities push each other apart.
pub const INTERACTION_RADIUS: f64 = 200.0;
/// Impulse per unit of overlap inside the interaction radius.
pub const REPULSION_STRENGTH: f64 = 0.005;
/// Pull toward the surface centre per unit of offset.
pub const CENTERING_STRENGTH: f64 = 0.0005;
/// Velocity retention once the formation has settled.
pub const SETTLED_DAMPING: f64 = 0.92;
/// Velocity multiplier applied on a wall hit.
pub const BOUNCE_FACTOR: f64 = -0.5;

/// Resting radius every entity grows or shrinks toward.
pub const NOMINAL_RADIUS: f64 = 40.0;
/// Fraction of the remaining colour/radius gap closed per frame.
pub const EASE_RATE: f64 = 0.05;
/// Radius gap under which the radius snaps to nominal.
pub const RADIUS_SNAP: f64 = 0.5;

/// Formation progress added per frame.
pub const FORMATION_STEP: f64 = 0.008;
/// Ring radius as a fraction of the smaller half-dimension.
pub const RING_FACTOR: f64 = 0.4;
/// Triforce radius (and vertical offset) as a fraction of the ring radius.
pub const TRIFORCE_FACTOR: f64 = 0.3;
/// Full width of the random offset given to a freshly split entity.
pub const SPLIT_JITTER: f64 = 5.0;

/// Partial-opacity overpaint that leaves motion trails.
pub const TRAIL_FILL: &str = "rgba(10, 10, 15, 0.3)";
