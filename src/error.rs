//! Error types for colour parsing, surface setup and configuration.

use thiserror::Error;

/// A hex colour string that could not be read as `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
	#[error("expected 6 hex digits in {0:?}")]
	InvalidLength(String),
	#[error("non-hex digit in {0:?}")]
	InvalidDigit(String),
}

/// Failure to obtain a drawable canvas at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
	#[error("no browser window to host the network canvas")]
	NoWindow,
	#[error("canvas refused a 2d rendering context")]
	ContextUnavailable,
	#[error("canvas context is not a CanvasRenderingContext2d")]
	NotCanvas2d,
}

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("invalid scene config: {0}")]
	Parse(#[from] toml::de::Error),
}
