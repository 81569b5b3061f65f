// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoizing the corner wedge across renders.

use log::debug;
use shadow_common::corner::{CornerShadow, CornerShadowBuilder};
use shadow_common::peniko::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CornerKey {
    corner_radius: u64,
    blur_radius: u64,
    color: [u8; 4],
}

impl CornerKey {
    fn new(corner_radius: f64, blur_radius: f64, color: Color) -> Self {
        Self {
            corner_radius: corner_radius.to_bits(),
            blur_radius: blur_radius.to_bits(),
            color: [color.r, color.g, color.b, color.a],
        }
    }
}

/// Holds the [`CornerShadow`] of the most recently requested radii and color.
///
/// Radii are compared bit for bit, so any change, however small, rebuilds the corner.
#[derive(Debug, Default)]
pub struct CornerCache {
    entry: Option<(CornerKey, Option<CornerShadow>)>,
    rebuilt: bool,
}

impl CornerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the corner for the given radii and color, building it if they changed.
    ///
    /// Returns `None` for radii that produce no corner, see [`CornerShadowBuilder::build`].
    pub fn get_or_build(
        &mut self,
        corner_radius: f64,
        blur_radius: f64,
        color: Color,
    ) -> Option<&CornerShadow> {
        let key = CornerKey::new(corner_radius, blur_radius, color);
        self.rebuilt = !matches!(&self.entry, Some((cached, _)) if *cached == key);

        if self.rebuilt {
            debug!(
                "Building corner shadow for radius {corner_radius}, blur {blur_radius}, \
                 color {color:?}."
            );
            let corner = CornerShadowBuilder::build(corner_radius, blur_radius, color);
            self.entry = Some((key, corner));
        }

        self.entry.as_ref().and_then(|(_, corner)| corner.as_ref())
    }

    /// Whether the last call to [`get_or_build`](Self::get_or_build) built a new corner.
    pub fn last_lookup_rebuilt(&self) -> bool {
        self.rebuilt
    }

    /// Drop the cached corner.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
