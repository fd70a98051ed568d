// Copyright (C) 2022 the GL playground authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::ffi::c_void;

use gl::types::{GLenum, GLint, GLsizei, GLuint};

use crate::image::Image;

/// GL pixel format for a tightly packed 8 bit image with `channels` channels.
pub fn pixel_format(channels: u8) -> Option<GLenum> {
	match channels {
		1 => Some(gl::RED),
		2 => Some(gl::RG),
		3 => Some(gl::RGB),
		4 => Some(gl::RGBA),
		_ => None,
	}
}

pub struct Texture {
	texture_object: GLuint,
}

impl Texture {
	/// Create a 2D texture with trilinear filtering and repeat wrapping,
	/// filled from `image`.
	///
	/// An empty image leaves the texture without storage (sampling it
	/// returns black) and logs a warning.
	///
	/// # SAFETY
	/// * must be called from GL thread
	///
	/// # SIDE EFFECTS
	/// * leaves the new texture bound to `GL_TEXTURE_2D` on the active unit
	pub unsafe fn from_image(image: &Image) -> Self {
		let mut texture = 0;
		gl::GenTextures(1, &mut texture);
		gl::BindTexture(gl::TEXTURE_2D, texture);

		gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::REPEAT as GLint);
		gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::REPEAT as GLint);
		gl::TexParameteri(
			gl::TEXTURE_2D,
			gl::TEXTURE_MIN_FILTER,
			gl::LINEAR_MIPMAP_LINEAR as GLint,
		);
		gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as GLint);

		match (image.pixels(), pixel_format(image.channels())) {
			(Some(pixels), Some(format)) => {
				// rows of RGB images are not 4 byte aligned in general
				gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
				gl::TexImage2D(
					gl::TEXTURE_2D,
					0,
					format as GLint,
					image.width() as GLsizei,
					image.height() as GLsizei,
					0,
					format,
					gl::UNSIGNED_BYTE,
					pixels.as_ptr() as *const c_void,
				);
				gl::GenerateMipmap(gl::TEXTURE_2D);
				gl::PixelStorei(gl::UNPACK_ALIGNMENT, 4);
			},
			(Some(_), None) =>
				log::warn!("Texture: unsupported channel count {}", image.channels()),
			(None, _) => log::warn!("Texture: no pixel data, leaving texture {texture} empty"),
		}

		Self {
			texture_object: texture,
		}
	}

	/// Bind to texture unit `unit` (0 is `GL_TEXTURE0`).
	///
	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn bind(&self, unit: u32) {
		gl::ActiveTexture(gl::TEXTURE0 + unit);
		gl::BindTexture(gl::TEXTURE_2D, self.texture_object);
	}

	#[inline]
	pub fn handle(&self) -> GLuint {
		self.texture_object
	}
}

impl Drop for Texture {
	fn drop(&mut self) {
		if self.texture_object != 0 {
			unsafe { gl::DeleteTextures(1, &self.texture_object) };
		}
	}
}
