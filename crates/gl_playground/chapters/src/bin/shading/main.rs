// Copyright (C) 2022 the GL playground authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! A per-vertex coloured triangle over a cycling background.
//!
//! H/L/J/K move the triangle, Space flips it upside down.

use chapters::{
	chapter_file,
	Bindings,
	controls::{Bounded, Flip, KeyLatch, NUDGE},
	is_held,
};
use gl_playground::{
	mesh::{Mesh, VertexAttribute},
	ColourCycler,
	Scene,
	ShaderProgram,
};
use glfw::{Key, Window};

const VERTEX_SHADER: &str = chapter_file!("src/bin/shading/vertex.glsl");
const FRAGMENT_SHADER: &str = chapter_file!("src/bin/shading/fragment.glsl");

#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
struct Vertex {
	position: [f32; 3],
	colour: [f32; 3],
}

const VERTICES: [Vertex; 3] = [
	Vertex {
		position: [-0.5, -0.5, 0.0],
		colour: [1.0, 0.0, 0.0],
	},
	Vertex {
		position: [0.5, -0.5, 0.0],
		colour: [0.0, 1.0, 0.0],
	},
	Vertex {
		position: [0.0, 0.5, 0.0],
		colour: [0.0, 0.0, 1.0],
	},
];

const INDICES: [u32; 3] = [0, 1, 2];

const LAYOUT: &[VertexAttribute] = &[VertexAttribute::new::<f32>(3), VertexAttribute::new::<f32>(3)];

struct Shading {
	triangle: Option<Mesh>,
	shader: ShaderProgram,
	background: ColourCycler,
	horizontal: Bounded,
	vertical: Bounded,
	flip: Flip,
	flip_key: KeyLatch,
}

impl Shading {
	fn new() -> Self {
		Self {
			triangle: None,
			shader: ShaderProgram::null(),
			background: ColourCycler::new(),
			horizontal: Bounded::offset(),
			vertical: Bounded::offset(),
			flip: Flip::new(),
			flip_key: KeyLatch::new(),
		}
	}
}

impl Scene<Window> for Shading {
	fn setup(&mut self, _: &mut Window) {
		self.triangle = Some(unsafe { Mesh::new(&VERTICES, &INDICES, LAYOUT) });
		self.shader = ShaderProgram::build(VERTEX_SHADER, FRAGMENT_SHADER);
	}

	fn process_inputs(&mut self, window: &mut Window) {
		chapters::close_on_escape(window);

		if is_held(window, Key::H) {
			self.horizontal.nudge(-NUDGE);
		}
		if is_held(window, Key::L) {
			self.horizontal.nudge(NUDGE);
		}
		if is_held(window, Key::J) {
			self.vertical.nudge(-NUDGE);
		}
		if is_held(window, Key::K) {
			self.vertical.nudge(NUDGE);
		}

		if self.flip_key.update(is_held(window, Key::Space)) {
			self.flip.toggle();
		}
	}

	fn render(&mut self, _: &mut Window) {
		let [r, g, b] = self.background.advance().to_f32();

		unsafe {
			gl::ClearColor(r, g, b, 1.0);
			gl::Clear(gl::COLOR_BUFFER_BIT);
		}

		self.shader.bind();
		self.shader.set_uniform("hOffset", &self.horizontal.get());
		self.shader.set_uniform("vOffset", &self.vertical.get());
		self.shader.set_uniform("flip", &self.flip.sign());

		if let Some(triangle) = &self.triangle {
			unsafe { triangle.draw() };
		}
	}

	fn teardown(&mut self) {
		self.triangle = None;
		drop(self.shader.take());
	}
}

const BINDINGS: Bindings = &[("H/L/J/K", "move"), ("Space", "flip upside down")];

fn main() {
	chapters::run_chapter("shading", BINDINGS, Shading::new());
}
