// Copyright (C) 2022 the GL playground authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
	pub r: f64,
	pub g: f64,
	pub b: f64,
}

impl Rgb {
	pub const RED: Rgb = Rgb { r: 1.0, g: 0.0, b: 0.0 };

	/// Narrowed for `glClearColor` and friends.
	pub fn to_f32(self) -> [f32; 3] {
		[self.r as f32, self.g as f32, self.b as f32]
	}
}

/// Which pair of channels is being ramped: the named channel fades out
/// while the next one fades in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	Red,
	Green,
	Blue,
}

impl Phase {
	pub fn next(self) -> Phase {
		match self {
			Self::Red => Self::Green,
			Self::Green => Self::Blue,
			Self::Blue => Self::Red,
		}
	}
}

/// Smoothly cycles red -> green -> blue -> red, one fixed step per call.
///
/// Channels are accumulated in `f64` so that a full channel is exhausted in
/// exactly `1.0 / STEP` calls. The fading channel is not clamped, so it can
/// sit slightly below zero on the step that flips the phase.
#[derive(Debug, Clone)]
pub struct ColourCycler {
	phase: Phase,
	colour: Rgb,
}

impl ColourCycler {
	pub const STEP: f64 = 0.01;

	pub fn new() -> Self {
		Self {
			phase: Phase::Red,
			colour: Rgb::RED,
		}
	}

	/// Step once and return the new colour.
	pub fn advance(&mut self) -> Rgb {
		let Rgb { r, g, b } = &mut self.colour;
		let (fading, rising) = match self.phase {
			Phase::Red => (r, g),
			Phase::Green => (g, b),
			Phase::Blue => (b, r),
		};

		*fading -= Self::STEP;
		*rising += Self::STEP;

		if *fading <= 0.0 {
			self.phase = self.phase.next();
		}

		self.colour
	}

	#[inline]
	pub fn current(&self) -> Rgb {
		self.colour
	}

	#[inline]
	pub fn phase(&self) -> Phase {
		self.phase
	}
}

impl Default for ColourCycler {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod test;
