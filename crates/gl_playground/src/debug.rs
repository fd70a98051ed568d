// Copyright (C) 2022 the GL playground authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::ffi::{c_char, c_void, CStr};

use gl::types::{GLenum, GLsizei, GLuint};

/// Route driver debug messages to `log` under the `OpenGL` target.
///
/// Returns false if the driver does not expose `glDebugMessageCallback`
/// (it is core only from 4.3).
pub fn setup_gl_debug() -> bool {
	if !gl::DebugMessageCallback::is_loaded() || !gl::DebugMessageControl::is_loaded() {
		return false
	}

	unsafe {
		gl::Enable(gl::DEBUG_OUTPUT);
		gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
		gl::DebugMessageCallback(Some(gl_debug), std::ptr::null());
		gl::DebugMessageControl(
			gl::DONT_CARE,
			gl::DONT_CARE,
			gl::DONT_CARE,
			0,
			std::ptr::null(),
			gl::TRUE,
		);
	}

	true
}

fn source_name(source: GLenum) -> &'static str {
	match source {
		gl::DEBUG_SOURCE_API => "API",
		gl::DEBUG_SOURCE_WINDOW_SYSTEM => "Window System",
		gl::DEBUG_SOURCE_SHADER_COMPILER => "Shader Compiler",
		gl::DEBUG_SOURCE_THIRD_PARTY => "Third Party",
		gl::DEBUG_SOURCE_APPLICATION => "Application",
		_ => "Other",
	}
}

fn type_name(ty: GLenum) -> &'static str {
	match ty {
		gl::DEBUG_TYPE_ERROR => "Error",
		gl::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "Deprecated Behavior",
		gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "Undefined Behavior",
		gl::DEBUG_TYPE_PORTABILITY => "Portability",
		gl::DEBUG_TYPE_PERFORMANCE => "Performance",
		gl::DEBUG_TYPE_MARKER => "Marker",
		gl::DEBUG_TYPE_PUSH_GROUP => "Push Group",
		gl::DEBUG_TYPE_POP_GROUP => "Pop Group",
		_ => "Other",
	}
}

fn severity_level(severity: GLenum) -> log::Level {
	match severity {
		gl::DEBUG_SEVERITY_HIGH => log::Level::Error,
		gl::DEBUG_SEVERITY_MEDIUM => log::Level::Warn,
		gl::DEBUG_SEVERITY_LOW => log::Level::Debug,
		_ => log::Level::Trace,
	}
}

extern "system" fn gl_debug(
	source: GLenum,
	ty: GLenum,
	_id: GLuint,
	severity: GLenum,
	_length: GLsizei,
	message: *const c_char,
	_user_param: *mut c_void,
) {
	if message.is_null() {
		return
	}

	// must not unwind across the driver
	let message = unsafe { CStr::from_ptr(message) }.to_string_lossy();
	log::log!(
		target: "OpenGL",
		severity_level(severity),
		"{}: {}: {message}",
		type_name(ty),
		source_name(source),
	);
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn severities_map_to_log_levels() {
		assert_eq!(severity_level(gl::DEBUG_SEVERITY_HIGH), log::Level::Error);
		assert_eq!(severity_level(gl::DEBUG_SEVERITY_MEDIUM), log::Level::Warn);
		assert_eq!(severity_level(gl::DEBUG_SEVERITY_LOW), log::Level::Debug);
		assert_eq!(severity_level(gl::DEBUG_SEVERITY_NOTIFICATION), log::Level::Trace);
	}

	#[test]
	fn unknown_enums_fall_back_to_other() {
		assert_eq!(source_name(0xdead), "Other");
		assert_eq!(type_name(0xbeef), "Other");
		assert_eq!(source_name(gl::DEBUG_SOURCE_SHADER_COMPILER), "Shader Compiler");
	}
}
