// Copyright (C) 2022 the GL playground authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::{marker::PhantomData, sync::mpsc::Receiver};

use gl::types::GLsizei;
use glfw::{Context, OpenGlProfileHint, WindowEvent, WindowHint};
use thiserror::Error;

use crate::{config::WindowConfig, debug};

/// The four hooks a chapter provides. `W` is the platform window, so a
/// scene can poll keys, close the window or read the clock.
pub trait Scene<W> {
	/// Called once, after the context is current.
	fn setup(&mut self, window: &mut W);
	fn process_inputs(&mut self, window: &mut W);
	fn render(&mut self, window: &mut W);
	/// Called once, before the context is destroyed.
	fn teardown(&mut self);
}

/// Window + GL context provider driven by [`Application`].
///
/// Dropping the platform releases the window and context.
pub trait Platform: Sized {
	type Window;

	fn init(config: &WindowConfig) -> Result<Self, InitError>;
	fn window(&mut self) -> &mut Self::Window;
	fn should_close(&self) -> bool;
	fn swap_buffers(&mut self);
	/// Drain pending platform events, resizing the viewport as needed.
	fn poll_events(&mut self);
}

#[derive(Debug, Error)]
pub enum InitError {
	#[error("failed to initialise GLFW: {0:?}")]
	Glfw(glfw::InitError),
	#[error("failed to create GLFW window")]
	CreateWindow,
	#[error("failed to load OpenGL functions")]
	LoadGl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
	Uninitialized,
	Running,
	Closing,
	Terminated,
}

/// Resize the viewport to a new framebuffer size.
pub fn framebuffer_size_callback(width: i32, height: i32) {
	unsafe { gl::Viewport(0, 0, width as GLsizei, height as GLsizei) };
}

/// Drives a [`Scene`] through init, setup, the frame loop, teardown and
/// cleanup on a platform `P`.
pub struct Application<P: Platform = GlfwPlatform> {
	config: WindowConfig,
	state: Lifecycle,
	_platform: PhantomData<P>,
}

impl<P: Platform> Application<P> {
	pub fn new(config: WindowConfig) -> Self {
		Self {
			config,
			state: Lifecycle::Uninitialized,
			_platform: PhantomData,
		}
	}

	#[inline]
	pub fn state(&self) -> Lifecycle {
		self.state
	}

	#[inline]
	pub fn config(&self) -> &WindowConfig {
		&self.config
	}

	fn transition(&mut self, to: Lifecycle) {
		log::debug!("application: {:?} -> {:?}", self.state, to);
		self.state = to;
	}

	/// Run `scene` to completion. Returns 0 after a clean run, -1 if the
	/// platform could not be initialised.
	///
	/// A finished application stays [`Lifecycle::Terminated`]; running it
	/// again returns -1 without touching the platform.
	pub fn run<S: Scene<P::Window>>(&mut self, scene: &mut S) -> i32 {
		if self.state != Lifecycle::Uninitialized {
			log::error!("run: application already ran ({:?})", self.state);
			return -1
		}

		let mut platform = match P::init(&self.config) {
			Ok(platform) => platform,
			Err(e) => {
				log::error!("init: {e}");
				// partially created resources were released with the error
				self.transition(Lifecycle::Terminated);
				return -1
			},
		};
		self.transition(Lifecycle::Running);

		scene.setup(platform.window());

		while !platform.should_close() {
			scene.process_inputs(platform.window());
			scene.render(platform.window());
			platform.swap_buffers();
			platform.poll_events();
		}
		self.transition(Lifecycle::Closing);

		scene.teardown();

		drop(platform);
		self.transition(Lifecycle::Terminated);

		0
	}
}

pub struct GlfwPlatform {
	// field order matters: the window must go before the library handle
	window: glfw::Window,
	events: Receiver<(f64, WindowEvent)>,
	glfw: glfw::Glfw,
}

impl Platform for GlfwPlatform {
	type Window = glfw::Window;

	fn init(config: &WindowConfig) -> Result<Self, InitError> {
		let mut glfw = glfw::init(glfw::LOG_ERRORS).map_err(InitError::Glfw)?;

		let (major, minor) = config.gl_version;
		glfw.window_hint(WindowHint::ContextVersion(major, minor));
		glfw.window_hint(WindowHint::OpenGlProfile(OpenGlProfileHint::Core));
		#[cfg(target_os = "macos")]
		glfw.window_hint(WindowHint::OpenGlForwardCompat(true));
		glfw.window_hint(WindowHint::OpenGlDebugContext(config.debug_output));
		glfw.window_hint(WindowHint::Resizable(config.resizable));
		glfw.window_hint(WindowHint::Visible(config.visible));

		let (mut window, events) = glfw
			.create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
			.ok_or(InitError::CreateWindow)?;

		window.make_current();

		gl::load_with(|p| window.get_proc_address(p));
		if !gl::Viewport::is_loaded() {
			return Err(InitError::LoadGl)
		}

		glfw.set_swap_interval(match config.vsync {
			true => glfw::SwapInterval::Sync(1),
			false => glfw::SwapInterval::None,
		});

		if config.debug_output && !debug::setup_gl_debug() {
			log::warn!("init: driver does not support debug output");
		}

		let (width, height) = window.get_framebuffer_size();
		framebuffer_size_callback(width, height);
		window.set_framebuffer_size_polling(true);

		log::info!(
			"init: {}x{} window {:?}, OpenGL {major}.{minor} core",
			config.width,
			config.height,
			config.title,
		);

		Ok(Self {
			window,
			events,
			glfw,
		})
	}

	#[inline]
	fn window(&mut self) -> &mut glfw::Window {
		&mut self.window
	}

	#[inline]
	fn should_close(&self) -> bool {
		self.window.should_close()
	}

	#[inline]
	fn swap_buffers(&mut self) {
		self.window.swap_buffers();
	}

	fn poll_events(&mut self) {
		self.glfw.poll_events();
		for (_, event) in glfw::flush_messages(&self.events) {
			if let WindowEvent::FramebufferSize(width, height) = event {
				framebuffer_size_callback(width, height);
			}
		}
	}
}

#[cfg(test)]
mod test;
