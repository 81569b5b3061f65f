// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate rasterizes rounded-rectangle drop shadows on the CPU.
//!
//! Two renderers are provided, both implementing [`ShadowRenderer`]:
//!
//! - [`ShadowSynthesizer`] draws a frame of radial corner wedges and linear edge gradients,
//!   stamped into the four quadrants from a single cached corner, with the flat panel on top.
//! - [`BlurredShadow`] draws the Gaussian blur of a rounded rectangle.
//!
//! [`ShadowHost`] keeps a rendered background in sync with the size of a host view.
//!
//! Drawing goes through [`RenderContext`], a small immediate-mode canvas with a save/restore
//! transform stack.
//!
//! ```
//! use shadow_common::config::ShadowConfig;
//! use shadow_common::peniko::Color;
//! use shadow_cpu::{ShadowRenderer, ShadowSynthesizer};
//!
//! let config = ShadowConfig::new(20.0, 20.0, Color::rgba8(0, 0, 0, 128))?;
//! let pixmap = ShadowSynthesizer::new().render(&config, 201, 100)?;
//! assert_eq!((pixmap.width(), pixmap.height()), (200, 100));
//! # Ok::<(), shadow_common::Error>(())
//! ```
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

mod blurred;
mod cache;
pub mod compositor;
mod fine;
mod flatten;
mod host;
mod raster;
mod render;
mod synth;

pub use blurred::BlurredShadow;
pub use cache::CornerCache;
pub use compositor::QuadrantCompositor;
pub use host::ShadowHost;
pub use render::{RenderContext, Saved};
pub use shadow_common::pixmap::Pixmap;
pub use synth::ShadowSynthesizer;

use shadow_common::config::ShadowConfig;
use shadow_common::Result;

/// Something that renders a shadow config into a pixmap of a requested size.
pub trait ShadowRenderer {
    /// Render `config` for a host of `width` by `height` pixels.
    ///
    /// The returned pixmap may be smaller than requested, and is empty when there is nothing
    /// to draw on.
    fn render(&mut self, config: &ShadowConfig, width: u32, height: u32) -> Result<Pixmap>;
}
