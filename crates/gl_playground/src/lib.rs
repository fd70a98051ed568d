// Copyright (C) 2022 the GL playground authors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/./

//! Shared building blocks for the OpenGL learning chapters.
//!
//! Every chapter is a [`app::Scene`] driven by [`app::Application`], which owns
//! the GLFW window and GL context for the lifetime of the run.

pub mod app;
pub mod colour;
pub mod config;
pub mod debug;
pub mod image;
pub mod mesh;
pub mod shader;
pub mod texture;
pub mod util;

pub use app::{Application, Lifecycle, Platform, Scene};
pub use colour::{ColourCycler, Rgb};
pub use config::WindowConfig;
pub use self::image::Image;
pub use shader::{ShaderProgram, Uniform};
pub use util::clamp;
