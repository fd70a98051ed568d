// Copyright (C) 2022 the GL playground authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Textured quads placed with transformation matrices.
//!
//! H/L/J/K translate (H/L also face the texture left or right), Space flips
//! the texture vertically, Up/Down blend the images, =/- scale and
//! Left/Right rotate. A second quad pulses in the top left corner.

use std::time::Instant;

use cgmath::{Vector2, Vector3};
use chapters::{
	chapter_file,
	Bindings,
	controls::{Bounded, KeyLatch, NUDGE},
	is_held,
	transform::{pulse, Transform2D},
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

const VERTEX_SHADER: &str = chapter_file!("src/bin/matrix/vertex.glsl");
const FRAGMENT_SHADER: &str = chapter_file!("src/bin/matrix/fragment.glsl");
const CHECKER_IMAGE: &str = chapter_file!("assets/checker.png");
const GRADIENT_IMAGE: &str = chapter_file!("assets/gradient.png");

/// Degrees per frame while Left/Right is held.
const ROTATION_STEP: f32 = 2.0;

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

struct Matrix {
	quad: Option<Mesh>,
	textures: Vec<Texture>,
	shader: ShaderProgram,
	background: ColourCycler,
	started: Instant,
	horizontal: Bounded,
	vertical: Bounded,
	mix: Bounded,
	transform: Transform2D,
	/// Texture coordinate signs, x set by facing, y toggled.
	flips: Vector2<f32>,
	flip_key: KeyLatch,
}

impl Matrix {
	fn new() -> Self {
		Self {
			quad: None,
			textures: Vec::new(),
			shader: ShaderProgram::null(),
			background: ColourCycler::new(),
			started: Instant::now(),
			horizontal: Bounded::offset(),
			vertical: Bounded::offset(),
			mix: Bounded::mix(),
			transform: Transform2D::new(),
			flips: Vector2::new(1.0, 1.0),
			flip_key: KeyLatch::new(),
		}
	}
}

impl Scene<Window> for Matrix {
	fn setup(&mut self, _: &mut Window) {
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
		self.shader.set_uniform("mixer", &self.mix.get());

		self.started = Instant::now();
	}

	fn process_inputs(&mut self, window: &mut Window) {
		chapters::close_on_escape(window);

		if is_held(window, Key::H) {
			self.transform.translation.x = self.horizontal.nudge(-NUDGE);
			self.flips.x = -1.0;
		}
		if is_held(window, Key::L) {
			self.transform.translation.x = self.horizontal.nudge(NUDGE);
			self.flips.x = 1.0;
		}
		if is_held(window, Key::J) {
			self.transform.translation.y = self.vertical.nudge(-NUDGE);
		}
		if is_held(window, Key::K) {
			self.transform.translation.y = self.vertical.nudge(NUDGE);
		}

		if self.flip_key.update(is_held(window, Key::Space)) {
			self.flips.y = -self.flips.y;
		}

		if is_held(window, Key::Up) {
			self.mix.nudge(NUDGE);
		}
		if is_held(window, Key::Down) {
			self.mix.nudge(-NUDGE);
		}

		if is_held(window, Key::Equal) {
			self.transform.scale += NUDGE;
		}
		if is_held(window, Key::Minus) {
			self.transform.scale -= NUDGE;
		}
		if is_held(window, Key::Left) {
			self.transform.angle += ROTATION_STEP;
		}
		if is_held(window, Key::Right) {
			self.transform.angle -= ROTATION_STEP;
		}
	}

	fn render(&mut self, _: &mut Window) {
		let [r, g, b] = self.background.advance().to_f32();

		unsafe {
			gl::ClearColor(r, g, b, 1.0);
			gl::Clear(gl::COLOR_BUFFER_BIT);
		}

		self.shader.bind();
		self.shader.set_uniform("transform", &self.transform.matrix());
		self.shader.set_uniform("flips", &self.flips);
		self.shader.set_uniform("mixer", &self.mix.get());

		let Some(quad) = &self.quad else { return };

		unsafe {
			for (unit, texture) in self.textures.iter().enumerate() {
				texture.bind(unit as u32);
			}

			quad.draw();

			let factor = self.started.elapsed().as_secs_f32().sin();
			self.shader
				.set_uniform("transform", &pulse(Vector3::new(-0.5, 0.5, 0.0), factor));
			quad.draw();
		}
	}

	fn teardown(&mut self) {
		self.quad = None;
		self.textures.clear();
		drop(self.shader.take());
	}
}

const BINDINGS: Bindings = &[
	("H/L/J/K", "translate"),
	("Space", "flip"),
	("Up/Down", "blend"),
	("=/-", "scale"),
	("Left/Right", "rotate"),
];

fn main() {
	chapters::run_chapter("matrix", BINDINGS, Matrix::new());
}
