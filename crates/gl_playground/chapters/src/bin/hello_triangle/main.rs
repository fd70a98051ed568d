// Copyright (C) 2022 the GL playground authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Two indexed bow-ties from the same vertex shader: one filled, one in
//! wireframe.

use chapters::chapter_file;
use gl_playground::{
	mesh::{Mesh, VertexAttribute},
	Scene,
	ShaderProgram,
};
use glfw::Window;

const VERTEX_SHADER: &str = chapter_file!("src/bin/hello_triangle/vertex.glsl");
const HORIZONTAL_FRAGMENT_SHADER: &str = chapter_file!("src/bin/hello_triangle/horizontal.frag.glsl");
const VERTICAL_FRAGMENT_SHADER: &str = chapter_file!("src/bin/hello_triangle/vertical.frag.glsl");

#[rustfmt::skip]
const HORIZONTAL_VERTICES: [[f32; 3]; 5] = [
	[0.0, 0.0, 0.0],   // center
	[-0.6, 0.5, 0.0],  // left-up
	[-0.6, -0.5, 0.0], // left-down
	[0.6, 0.5, 0.0],   // right-up
	[0.6, -0.5, 0.0],  // right-down
];

#[rustfmt::skip]
const VERTICAL_VERTICES: [[f32; 3]; 5] = [
	[0.0, 0.0, 0.0],   // center
	[-0.5, 0.6, 0.0],  // top-left
	[0.5, 0.6, 0.0],   // top-right
	[-0.5, -0.6, 0.0], // bottom-left
	[0.5, -0.6, 0.0],  // bottom-right
];

const BOW_TIE_INDICES: [u32; 6] = [0, 1, 2, 0, 3, 4];

const POSITION: &[VertexAttribute] = &[VertexAttribute::new::<f32>(3)];

#[derive(Default)]
struct HelloTriangle {
	horizontal: Option<(Mesh, ShaderProgram)>,
	vertical: Option<(Mesh, ShaderProgram)>,
}

impl Scene<Window> for HelloTriangle {
	fn setup(&mut self, _: &mut Window) {
		unsafe {
			self.horizontal = Some((
				Mesh::new(&HORIZONTAL_VERTICES, &BOW_TIE_INDICES, POSITION),
				ShaderProgram::build(VERTEX_SHADER, HORIZONTAL_FRAGMENT_SHADER),
			));
			self.vertical = Some((
				Mesh::new(&VERTICAL_VERTICES, &BOW_TIE_INDICES, POSITION),
				ShaderProgram::build(VERTEX_SHADER, VERTICAL_FRAGMENT_SHADER),
			));
		}
	}

	fn process_inputs(&mut self, window: &mut Window) {
		chapters::close_on_escape(window);
	}

	fn render(&mut self, _: &mut Window) {
		unsafe {
			gl::ClearColor(0.9, 0.0, 0.7, 1.0);
			gl::Clear(gl::COLOR_BUFFER_BIT);

			if let Some((mesh, shader)) = &self.horizontal {
				shader.bind();
				gl::PolygonMode(gl::FRONT_AND_BACK, gl::FILL);
				mesh.draw();
			}

			if let Some((mesh, shader)) = &self.vertical {
				shader.bind();
				gl::PolygonMode(gl::FRONT_AND_BACK, gl::LINE);
				mesh.draw();
			}

			gl::PolygonMode(gl::FRONT_AND_BACK, gl::FILL);
		}
	}

	fn teardown(&mut self) {
		self.horizontal = None;
		self.vertical = None;
	}
}

fn main() {
	chapters::run_chapter("hello triangle", &[], HelloTriangle::default());
}
