// Copyright (C) 2022 the GL playground authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use cgmath::{Deg, Matrix4, Vector3};

/// A 2D placement in the XY plane: scale, then rotate about Z, then translate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
	pub translation: Vector3<f32>,
	/// Degrees, counter-clockwise.
	pub angle: f32,
	pub scale: f32,
}

impl Transform2D {
	pub fn new() -> Self {
		Self {
			translation: Vector3::new(0.0, 0.0, 0.0),
			angle: 0.0,
			scale: 1.0,
		}
	}

	pub fn matrix(&self) -> Matrix4<f32> {
		// applied right to left
		Matrix4::from_translation(self.translation)
			* Matrix4::from_angle_z(Deg(self.angle))
			* Matrix4::from_nonuniform_scale(self.scale, self.scale, 1.0)
	}
}

impl Default for Transform2D {
	fn default() -> Self {
		Self::new()
	}
}

/// Uniform scale by `factor` around `origin`.
pub fn pulse(origin: Vector3<f32>, factor: f32) -> Matrix4<f32> {
	Matrix4::from_translation(origin) * Matrix4::from_scale(factor)
}

#[cfg(test)]
mod test {
	use cgmath::{Matrix4, SquareMatrix, Vector4};

	use super::*;

	fn approx(a: Vector4<f32>, b: Vector4<f32>) -> bool {
		(a - b).x.abs() < 1e-5 && (a - b).y.abs() < 1e-5 && (a - b).z.abs() < 1e-5 &&
			(a - b).w.abs() < 1e-5
	}

	#[test]
	fn default_is_identity() {
		assert_eq!(Transform2D::new().matrix(), Matrix4::identity());
	}

	#[test]
	fn scale_then_rotate_then_translate() {
		let transform = Transform2D {
			translation: Vector3::new(0.5, -0.25, 0.0),
			angle: 90.0,
			scale: 2.0,
		};

		// (1, 0) -> scaled (2, 0) -> rotated (0, 2) -> translated (0.5, 1.75)
		let moved = transform.matrix() * Vector4::new(1.0, 0.0, 0.0, 1.0);
		assert!(approx(moved, Vector4::new(0.5, 1.75, 0.0, 1.0)), "{moved:?}");
	}

	#[test]
	fn scale_leaves_depth_alone() {
		let transform = Transform2D {
			scale: 3.0,
			..Transform2D::new()
		};

		let moved = transform.matrix() * Vector4::new(0.0, 0.0, 1.0, 1.0);
		assert!(approx(moved, Vector4::new(0.0, 0.0, 1.0, 1.0)));
	}

	#[test]
	fn pulse_scales_around_origin() {
		let matrix = pulse(Vector3::new(-0.5, 0.5, 0.0), 0.5);
		let corner = matrix * Vector4::new(0.5, 0.5, 0.0, 1.0);
		assert!(approx(corner, Vector4::new(-0.25, 0.75, 0.0, 1.0)));

		// a zero factor collapses the quad onto its centre
		let collapsed = pulse(Vector3::new(-0.5, 0.5, 0.0), 0.0) * Vector4::new(0.5, 0.5, 0.0, 1.0);
		assert!(approx(collapsed, Vector4::new(-0.5, 0.5, 0.0, 1.0)));
	}
}
