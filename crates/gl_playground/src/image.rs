// Copyright (C) 2022 the GL playground authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::{
	path::{Path, PathBuf},
	sync::atomic::{AtomicBool, Ordering},
};

use image::{ColorType, DynamicImage, GenericImageView};
use thiserror::Error;

static FLIP_VERTICALLY_ON_LOAD: AtomicBool = AtomicBool::new(true);

/// Flip decoded images so the first row is the bottom one, matching GL's
/// texture coordinate origin. Applies to every subsequent load in the process.
pub fn set_flip_vertically_on_load(flip: bool) {
	FLIP_VERTICALLY_ON_LOAD.store(flip, Ordering::Relaxed);
}

pub fn flip_vertically_on_load() -> bool {
	FLIP_VERTICALLY_ON_LOAD.load(Ordering::Relaxed)
}

#[derive(Debug, Error)]
pub enum ImageError {
	#[error("path {0:?} is not a file")]
	NotAFile(PathBuf),
	#[error("could not decode {path:?}: {source}")]
	Decode {
		path: PathBuf,
		source: image::ImageError,
	},
}

/// A decoded image, 8 bits per channel, rows tightly packed.
///
/// An image that failed to load has zero dimensions and no pixels; check
/// [`Image::pixels`] before uploading.
#[derive(Debug, Default)]
pub struct Image {
	width: u32,
	height: u32,
	channels: u8,
	pixels: Option<Vec<u8>>,
}

impl Image {
	/// Decode `path`, logging and returning an empty image on failure.
	pub fn load(path: impl AsRef<Path>) -> Self {
		Self::try_load(path).unwrap_or_else(|e| {
			log::error!("Image: {e}");
			Self::default()
		})
	}

	pub fn try_load(path: impl AsRef<Path>) -> Result<Self, ImageError> {
		let path = path.as_ref();
		if !path.is_file() {
			return Err(ImageError::NotAFile(path.to_owned()))
		}

		let decoded = image::open(path).map_err(|source| ImageError::Decode {
			path: path.to_owned(),
			source,
		})?;

		Ok(Self::from_dynamic(decoded, flip_vertically_on_load()))
	}

	fn from_dynamic(decoded: DynamicImage, flip: bool) -> Self {
		// anything wider than 8 bits per channel is narrowed to RGBA8
		let decoded = match decoded.color() {
			ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => decoded,
			_ => DynamicImage::ImageRgba8(decoded.into_rgba8()),
		};
		let decoded = match flip {
			true => decoded.flipv(),
			false => decoded,
		};

		let (width, height) = decoded.dimensions();
		let channels = decoded.color().channel_count();

		Self {
			width,
			height,
			channels,
			pixels: Some(decoded.into_bytes()),
		}
	}

	#[inline]
	pub fn width(&self) -> u32 {
		self.width
	}

	#[inline]
	pub fn height(&self) -> u32 {
		self.height
	}

	#[inline]
	pub fn channels(&self) -> u8 {
		self.channels
	}

	#[inline]
	pub fn pixels(&self) -> Option<&[u8]> {
		self.pixels.as_deref()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.pixels.is_none()
	}
}
