// Copyright (C) 2022 the GL playground authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

/// Window and context settings used by [`crate::app::GlfwPlatform`].
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
	pub width: u32,
	pub height: u32,
	pub title: String,
	/// (major, minor); always a core profile context.
	pub gl_version: (u32, u32),
	pub resizable: bool,
	pub vsync: bool,
	pub visible: bool,
	/// Forward driver debug messages to `log` when the driver supports it.
	pub debug_output: bool,
}

impl WindowConfig {
	pub const DEFAULT_WIDTH: u32 = 800;
	pub const DEFAULT_HEIGHT: u32 = 600;

	pub fn with_title(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			..Self::default()
		}
	}
}

impl Default for WindowConfig {
	fn default() -> Self {
		Self {
			width: Self::DEFAULT_WIDTH,
			height: Self::DEFAULT_HEIGHT,
			title: "GL playground".to_owned(),
			gl_version: (3, 3),
			resizable: true,
			vsync: true,
			visible: true,
			debug_output: false,
		}
	}
}

#[cfg(test)]
mod test {
	use super::WindowConfig;

	#[test]
	fn defaults_match_playground_window() {
		let config = WindowConfig::default();
		assert_eq!((config.width, config.height), (800, 600));
		assert_eq!(config.gl_version, (3, 3));
		assert!(config.resizable);
	}

	#[test]
	fn with_title_keeps_other_defaults() {
		let config = WindowConfig::with_title("shading");
		assert_eq!(config.title, "shading");
		assert_eq!(config, WindowConfig {
			title: "shading".to_owned(),
			..WindowConfig::default()
		});
	}
}
