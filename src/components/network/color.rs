use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// A 24-bit RGB colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
	pub const WHITE: Self = Self(0xff, 0xff, 0xff);

	pub fn channels(self) -> [u8; 3] {
		[self.0, self.1, self.2]
	}

	pub fn from_channels([r, g, b]: [u8; 3]) -> Self {
		Self(r, g, b)
	}

	/// `#rrggbbaa`, the form canvas gradients take for translucent stops.
	pub fn with_alpha(self, alpha: u8) -> String {
		format!("{self}{alpha:02x}")
	}

	/// One easing step toward `target`.
	///
	/// A channel the rounded blend would leave unchanged moves one unit, so
	/// repeated steps always land exactly on `target`.
	pub fn approach(self, target: Self, amount: f64) -> Self {
		let blended = lerp_rgb(self, target, amount).channels();
		let mut out = self.channels();
		for (i, (cur, goal)) in self.channels().into_iter().zip(target.channels()).enumerate() {
			out[i] = if blended[i] != cur || cur == goal {
				blended[i]
			} else if goal > cur {
				cur + 1
			} else {
				cur - 1
			};
		}
		Self::from_channels(out)
	}
}

/// Blend each channel independently and round to the nearest integer.
pub fn lerp_rgb(a: Rgb, b: Rgb, amount: f64) -> Rgb {
	let mix = |x: u8, y: u8| {
		let v = x as f64 + amount * (y as f64 - x as f64);
		(v.round() as i64 & 0xff) as u8
	};
	Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

impl fmt::Display for Rgb {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
	}
}

impl FromStr for Rgb {
	type Err = ColorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let hex = s.trim_start_matches('#');
		if hex.len() != 6 {
			return Err(ColorError::InvalidLength(s.to_string()));
		}
		let value =
			u32::from_str_radix(hex, 16).map_err(|_| ColorError::InvalidDigit(s.to_string()))?;
		Ok(Self((value >> 16) as u8, (value >> 8) as u8, value as u8))
	}
}
