// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors that can occur while configuring or synthesizing a shadow.
///
/// Degenerate geometry (a zero-sized canvas, or a corner and blur radius that are both zero) is
/// not an error: it is handled where it occurs and yields an empty or flat result.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A configuration value has no geometric meaning, e.g. a negative radius, or is out of
    /// range, e.g. a radius larger than [`MAX_RADIUS`](crate::config::MAX_RADIUS).
    ///
    /// This is raised when the [`ShadowConfig`](crate::config::ShadowConfig) is built, never
    /// in the middle of rendering.
    #[error("Invalid shadow configuration: `{field}` is out of range, got {value}")]
    InvalidConfig {
        /// The name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The pixel buffer for the requested dimensions could not be allocated.
    ///
    /// Either a dimension exceeds what a [`Pixmap`](crate::pixmap::Pixmap) can address, or the
    /// allocator refused the request. Nothing is drawn in that case.
    #[error("Couldn't allocate a {width}x{height} pixmap")]
    Allocation {
        /// The requested width in pixels.
        width: u32,
        /// The requested height in pixels.
        height: u32,
    },
}

/// A `Result` defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
