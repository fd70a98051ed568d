// Copyright (C) 2022 the GL playground authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Per-scene input state. Keys are polled every frame, so holding a key
//! keeps nudging; [`KeyLatch`] turns a held key into a single press.

use gl_playground::clamp;

/// Step applied per frame while a movement / mix key is held.
pub const NUDGE: f32 = 0.02;

/// A value nudged by key presses and kept inside `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounded {
	value: f32,
	min: f32,
	max: f32,
}

impl Bounded {
	pub fn new(value: f32, min: f32, max: f32) -> Self {
		Self {
			value: clamp(value, min, max),
			min,
			max,
		}
	}

	/// An offset in normalised device coordinates.
	pub fn offset() -> Self {
		Self::new(0.0, -1.0, 1.0)
	}

	/// A 0..1 blend factor starting halfway.
	pub fn mix() -> Self {
		Self::new(0.5, 0.0, 1.0)
	}

	pub fn nudge(&mut self, delta: f32) -> f32 {
		self.value = clamp(self.value + delta, self.min, self.max);
		self.value
	}

	#[inline]
	pub fn get(&self) -> f32 {
		self.value
	}
}

/// Fires once per press: `update(true)` reports a press only if the key was
/// up on the previous poll.
#[derive(Debug, Clone, Copy)]
pub struct KeyLatch {
	released: bool,
}

impl KeyLatch {
	pub fn new() -> Self {
		Self { released: true }
	}

	pub fn update(&mut self, pressed: bool) -> bool {
		let fired = pressed && self.released;
		self.released = !pressed;
		fired
	}
}

impl Default for KeyLatch {
	fn default() -> Self {
		Self::new()
	}
}

/// A +1 / -1 sign, flipped on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flip(i32);

impl Flip {
	pub fn new() -> Self {
		Self(1)
	}

	pub fn toggle(&mut self) -> i32 {
		self.0 = -self.0;
		self.0
	}

	#[inline]
	pub fn sign(&self) -> i32 {
		self.0
	}
}

impl Default for Flip {
	fn default() -> Self {
		Self::new()
	}
}
