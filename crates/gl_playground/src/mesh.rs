// Copyright (C) 2022 the GL playground authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

use std::ffi::c_void;

use gl::types::{GLenum, GLsizei, GLsizeiptr, GLuint};

use crate::util::data_size;

/// One vertex shader input, `count` components of a GL scalar type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
	pub ty: GLenum,
	pub count: usize,
	pub ty_size: usize,
	pub is_integer: bool,
}

impl VertexAttribute {
	pub const fn new<T: GLtype>(count: usize) -> Self {
		VertexAttribute {
			ty: T::GL_TYPE,
			count,
			ty_size: std::mem::size_of::<T>(),
			is_integer: T::IS_INTEGER,
		}
	}

	#[inline]
	pub const fn size(&self) -> usize {
		self.count * self.ty_size
	}
}

pub trait GLtype: Sized {
	const GL_TYPE: GLenum;
	const IS_INTEGER: bool;
}

macro_rules! gl_types {
	($($type:ident($gltype:expr, int: $int:literal);)*) => {
		$(
			impl GLtype for $type {
				const GL_TYPE: GLenum = $gltype;
				const IS_INTEGER: bool = $int;
			}
		)*
	}
}

gl_types! {
	f32(gl::FLOAT, int: false);

	u32(gl::UNSIGNED_INT, int: true);
	u16(gl::UNSIGNED_SHORT, int: true);
	u8(gl::UNSIGNED_BYTE, int: true);

	i32(gl::INT, int: true);
	i16(gl::SHORT, int: true);
	i8(gl::BYTE, int: true);
}

/// Byte stride of one interleaved vertex.
pub fn stride(attributes: &[VertexAttribute]) -> usize {
	attributes.iter().map(VertexAttribute::size).sum()
}

/// Byte offset of each attribute inside an interleaved vertex.
pub fn offsets(attributes: &[VertexAttribute]) -> Vec<usize> {
	attributes
		.iter()
		.scan(0, |offset, attribute| {
			let current = *offset;
			*offset += attribute.size();
			Some(current)
		})
		.collect()
}

/// Indexed geometry: a VAO with its vertex and element buffers.
pub struct Mesh {
	vao: GLuint,
	vbo: GLuint,
	ebo: GLuint,
	index_count: GLsizei,
}

impl Mesh {
	/// Upload `vertices` and `indices` as static data and describe the
	/// interleaved layout with `attributes` (locations 0, 1, ...).
	///
	/// # SAFETY
	/// * must be called from GL thread
	///
	/// # SIDE EFFECTS
	/// * leaves the new VAO bound
	pub unsafe fn new<V: bytemuck::Pod>(
		vertices: &[V],
		indices: &[u32],
		attributes: &[VertexAttribute],
	) -> Self {
		debug_assert_eq!(
			stride(attributes),
			std::mem::size_of::<V>(),
			"attribute layout does not cover the vertex type",
		);

		let mut mesh = Self {
			vao: 0,
			vbo: 0,
			ebo: 0,
			index_count: indices.len() as GLsizei,
		};

		gl::GenVertexArrays(1, &mut mesh.vao);
		gl::GenBuffers(1, &mut mesh.vbo);
		gl::GenBuffers(1, &mut mesh.ebo);

		// everything below is recorded into the VAO
		gl::BindVertexArray(mesh.vao);

		gl::BindBuffer(gl::ARRAY_BUFFER, mesh.vbo);
		gl::BufferData(
			gl::ARRAY_BUFFER,
			data_size(vertices) as GLsizeiptr,
			bytemuck::cast_slice::<V, u8>(vertices).as_ptr() as *const c_void,
			gl::STATIC_DRAW,
		);

		gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, mesh.ebo);
		gl::BufferData(
			gl::ELEMENT_ARRAY_BUFFER,
			data_size(indices) as GLsizeiptr,
			indices.as_ptr() as *const c_void,
			gl::STATIC_DRAW,
		);

		Self::set_vertex_attributes(attributes);

		mesh
	}

	/// # SAFETY
	/// * VAO and VBO must be bound
	unsafe fn set_vertex_attributes(attributes: &[VertexAttribute]) {
		let stride = stride(attributes) as GLsizei;

		for (i, (attribute, offset)) in attributes.iter().zip(offsets(attributes)).enumerate() {
			if attribute.is_integer {
				gl::VertexAttribIPointer(
					i as u32,
					attribute.count as GLsizei,
					attribute.ty,
					stride,
					offset as *const c_void,
				);
			} else {
				gl::VertexAttribPointer(
					i as u32,
					attribute.count as GLsizei,
					attribute.ty,
					gl::FALSE,
					stride,
					offset as *const c_void,
				);
			}

			gl::EnableVertexAttribArray(i as u32);
		}
	}

	/// # SAFETY
	/// * must be called from GL thread
	pub unsafe fn bind(&self) {
		gl::BindVertexArray(self.vao);
	}

	/// Bind and draw every index as triangles.
	///
	/// # SAFETY
	/// * must be called from GL thread with a program bound
	pub unsafe fn draw(&self) {
		self.bind();
		gl::DrawElements(gl::TRIANGLES, self.index_count, gl::UNSIGNED_INT, std::ptr::null());
	}

	#[inline]
	pub fn index_count(&self) -> usize {
		self.index_count as usize
	}
}

impl Drop for Mesh {
	fn drop(&mut self) {
		unsafe {
			if self.vao != 0 {
				gl::DeleteVertexArrays(1, &self.vao);
			}
			for buffer in [self.vbo, self.ebo] {
				if buffer != 0 {
					gl::DeleteBuffers(1, &buffer);
				}
			}
		}
	}
}
