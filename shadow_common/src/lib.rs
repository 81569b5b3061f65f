// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate includes the data model and geometry shared by the shadow renderers in
//! [`shadow_cpu`][shadow_cpu].
//!
//! # Usage
//!
//! This crate does not rasterize anything on its own. It describes *what* a rounded-rectangle
//! drop shadow looks like: the validated [`ShadowConfig`][crate::config::ShadowConfig], the
//! even-normalized canvas size, the inner rectangle and edge lengths, and the single corner
//! wedge plus edge gradient from which the whole shadow frame is stamped.
//!
//! # Contents
//!
//! - [`config`]: validated shadow parameters.
//! - [`geometry`]: canvas size normalization and derived rectangles.
//! - [`corner`]: the reusable corner wedge path and its gradients.
//! - [`paint`]: solid, gradient and blurred-rectangle paints.
//! - [`pixmap`]: a premultiplied RGBA8 pixel buffer.
//!
//! [shadow_cpu]: https://docs.rs/shadow_cpu
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![forbid(unsafe_code)]

pub mod config;
pub mod corner;
mod error;
pub mod geometry;
pub mod math;
pub mod paint;
pub mod pixmap;

pub use error::{Error, Result};
pub use peniko;
pub use peniko::kurbo;
