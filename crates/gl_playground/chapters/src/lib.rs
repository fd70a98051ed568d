// Copyright (C) 2022 the GL playground authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use gl_playground::{app::GlfwPlatform, Application, Scene, WindowConfig};
use glfw::{Action, Key, Window};

pub mod controls;
pub mod transform;

/// Absolute path of a file shipped with the chapters crate.
#[macro_export]
macro_rules! chapter_file {
	($path:literal) => {
		concat!(env!("CARGO_MANIFEST_DIR"), "/", $path)
	};
}

/// Keys a chapter reacts to, paired with what they do.
pub type Bindings = &'static [(&'static str, &'static str)];

/// One line listing every binding, e.g. `Escape: quit, Space: flip`.
pub fn describe_bindings(bindings: Bindings) -> String {
	bindings
		.iter()
		.map(|(keys, action)| format!("{keys}: {action}"))
		.collect::<Vec<_>>()
		.join(", ")
}

/// Install logging and run `scene` in a window titled `title`, exiting the
/// process with the application's status.
pub fn run_chapter<S: Scene<Window>>(title: &str, bindings: Bindings, mut scene: S) -> ! {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	log::info!("{title}: Escape: quit");
	if !bindings.is_empty() {
		log::info!("{title}: {}", describe_bindings(bindings));
	}

	let config = WindowConfig {
		// debug output only exists on 4.3+ drivers, ask for it in debug builds
		debug_output: cfg!(debug_assertions),
		..WindowConfig::with_title(title)
	};

	let status = Application::<GlfwPlatform>::new(config).run(&mut scene);
	std::process::exit(status)
}

#[inline]
pub fn is_held(window: &Window, key: Key) -> bool {
	window.get_key(key) == Action::Press
}

/// Escape closes every chapter.
pub fn close_on_escape(window: &mut Window) {
	if is_held(window, Key::Escape) {
		window.set_should_close(true);
	}
}

#[cfg(test)]
mod test {
	use super::describe_bindings;

	#[test]
	fn bindings_listed_in_order() {
		let bindings = &[("H/L", "move"), ("Space", "flip")];
		assert_eq!(describe_bindings(bindings), "H/L: move, Space: flip");
	}

	#[test]
	fn no_bindings_is_empty() {
		assert_eq!(describe_bindings(&[]), "");
	}
}
