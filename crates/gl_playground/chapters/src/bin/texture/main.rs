// Copyright (C) 2022 the GL playground authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! A quad blending two textures.
//!
//! H/L/J/K move the quad, Space mirrors the texture horizontally and
//! Up/Down shift the blend between the two images.

use chapters::{
	chapter_file,
	Bindings,
	controls::{Bounded, Flip, KeyLatch, NUDGE},
	is_held,
};
use gl_playground::{
	mesh::{Mesh, VertexAttribute},
	texture::Texture,
	ColourCycler,
	Image,
	Scene,
	ShaderProgram,
};
use glfw::{Key, Window};

const VERTEX_SHADER: &str = chapter_file!("src/bin/texture/vertex.glsl");
const FRAGMENT_SHADER: &str = chapter_file!("src/bin/texture/fragment.glsl");
const CHECKER_IMAGE: &str = chapter_file!("assets/checker.png");
const GRADIENT_IMAGE: &str = chapter_file!("assets/gradient.png");

#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
struct Vertex {
	position: [f32; 3],
	tex_coord: [f32; 2],
}

const fn vertex(x: f32, y: f32, s: f32, t: f32) -> Vertex {
	Vertex {
		position: [x, y, 0.0],
		tex_coord: [s, t],
	}
}

const VERTICES: [Vertex; 4] = [
	vertex(0.5, 0.5, 1.0, 1.0),   // top right
	vertex(0.5, -0.5, 1.0, 0.0),  // bottom right
	vertex(-0.5, -0.5, 0.0, 0.0), // bottom left
	vertex(-0.5, 0.5, 0.0, 1.0),  // top left
];

const INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

const LAYOUT: &[VertexAttribute] = &[VertexAttribute::new::<f32>(3), VertexAttribute::new::<f32>(2)];

struct Textured {
	quad: Option<Mesh>,
	textures: Vec<Texture>,
	shader: ShaderProgram,
	background: ColourCycler,
	horizontal: Bounded,
	vertical: Bounded,
	mix: Bounded,
	flip: Flip,
	flip_key: KeyLatch,
}

impl Textured {
	fn new() -> Self {
		Self {
			quad: None,
			textures: Vec::new(),
			shader: ShaderProgram::null(),
			background: ColourCycler::new(),
			horizontal: Bounded::offset(),
			vertical: Bounded::offset(),
			mix: Bounded::mix(),
			flip: Flip::new(),
			flip_key: KeyLatch::new(),
		}
	}
}

impl Scene<Window> for Textured {
	fn setup(&mut self, _: &mut Window) {
		// images are only needed until their pixels are on the GPU
		self.textures = [CHECKER_IMAGE, GRADIENT_IMAGE]
			.iter()
			.enumerate()
			.map(|(unit, path)| unsafe {
				gl::ActiveTexture(gl::TEXTURE0 + unit as u32);
				Texture::from_image(&Image::load(path))
			})
			.collect();

		self.quad = Some(unsafe { Mesh::new(&VERTICES, &INDICES, LAYOUT) });

		self.shader = ShaderProgram::build(VERTEX_SHADER, FRAGMENT_SHADER);
		self.shader.bind();
		self.shader.set_uniform("texture0", &0);
		self.shader.set_uniform("texture1", &1);
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

		if is_held(window, Key::Up) {
			self.mix.nudge(NUDGE);
		}
		if is_held(window, Key::Down) {
			self.mix.nudge(-NUDGE);
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
		self.shader.set_uniform("mixer", &self.mix.get());

		unsafe {
			for (unit, texture) in self.textures.iter().enumerate() {
				texture.bind(unit as u32);
			}

			if let Some(quad) = &self.quad {
				quad.draw();
			}
		}
	}

	fn teardown(&mut self) {
		self.quad = None;
		self.textures.clear();
		drop(self.shader.take());
	}
}

const BINDINGS: Bindings = &[("H/L/J/K", "move"), ("Space", "mirror"), ("Up/Down", "blend")];

fn main() {
	chapters::run_chapter("texture", BINDINGS, Textured::new());
}
