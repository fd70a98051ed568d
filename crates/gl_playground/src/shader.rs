// Copyright (C) 2022 the GL playground authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::{
	ffi::CString,
	fmt, fs, io, mem,
	path::{Path, PathBuf},
};

use cgmath::{Matrix2, Matrix3, Matrix4, Vector2, Vector3, Vector4};
use gl::types::{GLchar, GLenum, GLfloat, GLint, GLsizei, GLuint};
use seq_macro::seq;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderType {
	Vertex,
	Fragment,
}

/// A single compiled stage. Deleted on drop; the driver keeps the backing
/// object alive for as long as a program still references it.
pub struct Shader {
	ty: ShaderType,
	shader_object: GLuint,
}

/// A linked vertex + fragment program.
///
/// The handle is exclusively owned: there is no `Clone`, and [`ShaderProgram::take`]
/// moves the handle out while leaving `0` behind, which GL silently ignores.
#[derive(Debug, Default)]
pub struct ShaderProgram {
	program_object: GLuint,
}

#[derive(Debug, Error)]
pub enum ShaderError {
	#[error("failed to open shader source {path:?}: {source}")]
	ReadSource { path: PathBuf, source: io::Error },
	#[error("could not create {0} (glCreate* returned 0)")]
	CreateObject(&'static str),
	#[error("could not compile {ty} shader - driver log:\n{log}")]
	Compile { ty: ShaderType, log: String },
	#[error("could not link shader program - driver log:\n{0}")]
	Link(String),
}

impl ShaderType {
	#[inline]
	pub fn gl_type(&self) -> GLenum {
		match self {
			Self::Vertex => gl::VERTEX_SHADER,
			Self::Fragment => gl::FRAGMENT_SHADER,
		}
	}
}

impl fmt::Display for ShaderType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Vertex => "vertex",
			Self::Fragment => "fragment",
		})
	}
}

#[derive(Clone, Copy)]
enum InfoLogKind {
	Shader,
	Program,
}

impl InfoLogKind {
	fn status(self, object: GLuint) -> bool {
		let mut status = gl::FALSE as GLint;
		unsafe {
			match self {
				Self::Shader => gl::GetShaderiv(object, gl::COMPILE_STATUS, &mut status),
				Self::Program => gl::GetProgramiv(object, gl::LINK_STATUS, &mut status),
			}
		}
		status == gl::TRUE as GLint
	}

	fn info_log(self, object: GLuint) -> String {
		let mut log_length = 0 as GLint;
		unsafe {
			match self {
				Self::Shader => gl::GetShaderiv(object, gl::INFO_LOG_LENGTH, &mut log_length),
				Self::Program => gl::GetProgramiv(object, gl::INFO_LOG_LENGTH, &mut log_length),
			}
		}

		if log_length <= 0 {
			return String::new()
		}

		let mut log = vec![0u8; log_length as usize];
		let mut written = 0 as GLsizei;
		unsafe {
			let ptr = log.as_mut_ptr() as *mut GLchar;
			match self {
				Self::Shader => gl::GetShaderInfoLog(object, log_length, &mut written, ptr),
				Self::Program => gl::GetProgramInfoLog(object, log_length, &mut written, ptr),
			}
		}
		// `written` excludes the null terminator.
		log.truncate(written.max(0) as usize);

		String::from_utf8_lossy(&log).trim_end().to_owned()
	}
}

impl Shader {
	/// Compile `source` as a `ty` stage.
	///
	/// Always returns the stage object, even if compilation failed; check
	/// [`Shader::compile_status`] for the driver's verdict.
	pub fn compile(ty: ShaderType, source: &str) -> Self {
		unsafe {
			let shader = gl::CreateShader(ty.gl_type());
			if shader != 0 {
				let src_ptr = source.as_bytes().as_ptr() as *const GLchar;
				let len = source.len() as GLint;
				gl::ShaderSource(shader, 1, &src_ptr, &len);
				gl::CompileShader(shader);
			}

			Shader {
				ty,
				shader_object: shader,
			}
		}
	}

	pub fn compile_status(&self) -> Result<(), ShaderError> {
		if self.shader_object == 0 {
			return Err(ShaderError::CreateObject("shader"))
		}

		match InfoLogKind::Shader.status(self.shader_object) {
			true => Ok(()),
			false => Err(ShaderError::Compile {
				ty: self.ty,
				log: InfoLogKind::Shader.info_log(self.shader_object),
			}),
		}
	}

	#[inline]
	pub fn ty(&self) -> ShaderType {
		self.ty
	}
}

impl Drop for Shader {
	fn drop(&mut self) {
		if self.shader_object != 0 {
			unsafe { gl::DeleteShader(self.shader_object) };
		}
	}
}

fn read_source(path: &Path) -> Result<String, ShaderError> {
	fs::read_to_string(path).map_err(|source| ShaderError::ReadSource {
		path: path.to_owned(),
		source,
	})
}

impl ShaderProgram {
	/// The zero program. Binding it unbinds any program, and dropping it
	/// makes no GL call.
	pub const fn null() -> Self {
		Self { program_object: 0 }
	}

	/// Adopt an existing program object.
	///
	/// # SAFETY
	/// * `program_object` must be a program name (or 0) not owned by anything else
	pub unsafe fn from_raw(program_object: GLuint) -> Self {
		Self { program_object }
	}

	/// Read, compile and link the two source files.
	///
	/// Failures are logged and never abort: an unreadable file compiles as
	/// empty source, a failed stage is still attached, and a program that
	/// failed to link is still returned.
	pub fn build(vertex_path: impl AsRef<Path>, fragment_path: impl AsRef<Path>) -> Self {
		let read_or_empty = |path: &Path| {
			read_source(path).unwrap_or_else(|e| {
				log::error!("{e}");
				String::new()
			})
		};

		let vertex_source = read_or_empty(vertex_path.as_ref());
		let fragment_source = read_or_empty(fragment_path.as_ref());

		Self::from_sources(&vertex_source, &fragment_source)
	}

	/// [`ShaderProgram::build`], minus the file reading.
	pub fn from_sources(vertex_source: &str, fragment_source: &str) -> Self {
		let vertex_shader = Shader::compile(ShaderType::Vertex, vertex_source);
		if let Err(e) = vertex_shader.compile_status() {
			log::error!("{e}");
		}

		let fragment_shader = Shader::compile(ShaderType::Fragment, fragment_source);
		if let Err(e) = fragment_shader.compile_status() {
			log::error!("{e}");
		}

		let program = Self::link(&[&vertex_shader, &fragment_shader]);
		if let Err(e) = program.link_status() {
			log::error!("{e}");
		}

		// stage objects are released here, linked or not
		program
	}

	/// Like [`ShaderProgram::build`], but stops at the first failure.
	pub fn try_build(
		vertex_path: impl AsRef<Path>,
		fragment_path: impl AsRef<Path>,
	) -> Result<Self, ShaderError> {
		let vertex_source = read_source(vertex_path.as_ref())?;
		let fragment_source = read_source(fragment_path.as_ref())?;

		let vertex_shader = Shader::compile(ShaderType::Vertex, &vertex_source);
		vertex_shader.compile_status()?;
		let fragment_shader = Shader::compile(ShaderType::Fragment, &fragment_source);
		fragment_shader.compile_status()?;

		let program = Self::link(&[&vertex_shader, &fragment_shader]);
		program.link_status()?;

		Ok(program)
	}

	/// Attach every created stage and link. Does not check the result.
	pub fn link(shaders: &[&Shader]) -> Self {
		unsafe {
			let program = gl::CreateProgram();
			if program == 0 {
				return Self::null()
			}

			let attached = shaders.iter().filter(|s| s.shader_object != 0).collect::<Vec<_>>();

			for shader in &attached {
				gl::AttachShader(program, shader.shader_object);
			}

			gl::LinkProgram(program);

			// allows the stage objects to be deleted right away.
			for shader in &attached {
				gl::DetachShader(program, shader.shader_object);
			}

			Self {
				program_object: program,
			}
		}
	}

	pub fn link_status(&self) -> Result<(), ShaderError> {
		if self.program_object == 0 {
			return Err(ShaderError::CreateObject("program"))
		}

		match InfoLogKind::Program.status(self.program_object) {
			true => Ok(()),
			false => Err(ShaderError::Link(InfoLogKind::Program.info_log(self.program_object))),
		}
	}

	#[inline]
	pub fn handle(&self) -> GLuint {
		self.program_object
	}

	#[inline]
	pub fn is_null(&self) -> bool {
		self.program_object == 0
	}

	pub fn is_linked(&self) -> bool {
		self.link_status().is_ok()
	}

	/// Move the handle out of a `&mut` place (a scene field, say), leaving the
	/// null program behind. Scenes use it to free their program in teardown
	/// while the context is still current.
	pub fn take(&mut self) -> Self {
		mem::take(self)
	}

	/// Make this the current program for subsequent draw calls.
	pub fn bind(&self) {
		unsafe { gl::UseProgram(self.program_object) };
	}

	/// Location of `name`, or -1 if it is not an active uniform.
	pub fn uniform_location(&self, name: &str) -> GLint {
		match CString::new(name) {
			Ok(name) => unsafe { gl::GetUniformLocation(self.program_object, name.as_ptr()) },
			Err(_) => -1,
		}
	}

	/// Look `name` up and upload `value` to it.
	///
	/// The program must be bound. Unknown names resolve to -1, which GL
	/// treats as a no-op.
	pub fn set_uniform<U: Uniform + ?Sized>(&self, name: &str, value: &U) {
		let location = self.uniform_location(name);
		unsafe { value.upload(location) };
	}
}

impl Drop for ShaderProgram {
	fn drop(&mut self) {
		if self.program_object != 0 {
			unsafe { gl::DeleteProgram(self.program_object) };
		}
	}
}

/// A value that can be written to a uniform location of the bound program.
pub trait Uniform {
	/// # SAFETY
	/// * must be called from GL thread with the target program bound
	unsafe fn upload(&self, location: GLint);
}

impl Uniform for GLint {
	unsafe fn upload(&self, location: GLint) {
		gl::Uniform1i(location, *self);
	}
}

impl Uniform for bool {
	unsafe fn upload(&self, location: GLint) {
		gl::Uniform1i(location, *self as GLint);
	}
}

impl Uniform for GLfloat {
	unsafe fn upload(&self, location: GLint) {
		gl::Uniform1f(location, *self);
	}
}

macro_rules! vector_uniforms {
	($($n:tt => $vector:ident),* $(,)?) => {
		$(
			impl Uniform for $vector<GLfloat> {
				unsafe fn upload(&self, location: GLint) {
					let v: &[GLfloat; $n] = self.as_ref();
					paste::paste! { gl::[<Uniform $n fv>](location, 1, v.as_ptr()) };
				}
			}

			impl Uniform for [GLfloat; $n] {
				unsafe fn upload(&self, location: GLint) {
					paste::paste! { gl::[<Uniform $n fv>](location, 1, self.as_ptr()) };
				}
			}
		)*
	};
}

vector_uniforms! {
	2 => Vector2,
	3 => Vector3,
	4 => Vector4,
}

// cgmath matrices are stored column by column, which is what GL expects
// with `transpose` set to false.
seq!(N in 2..=4 {
	impl Uniform for Matrix~N<GLfloat> {
		unsafe fn upload(&self, location: GLint) {
			let columns: &[[GLfloat; N]; N] = self.as_ref();
			paste::paste! {
				gl::[<UniformMatrix N fv>](location, 1, gl::FALSE, columns.as_ptr() as *const GLfloat)
			};
		}
	}
});
