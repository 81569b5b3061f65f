// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas size normalization and the rectangles derived from it.

use crate::config::ShadowConfig;
use crate::kurbo::Rect;

/// The size of a shadow canvas in pixels. Both dimensions are even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasSize {
    width: u32,
    height: u32,
}

impl CanvasSize {
    /// The width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Round each requested dimension down to the nearest even number.
///
/// The frame is mirrored about the exact center of the canvas; with an odd dimension that center
/// falls on a half pixel and the mirrored edges leave a one pixel seam.
pub fn resolve(width: u32, height: u32) -> CanvasSize {
    CanvasSize {
        width: width & !1,
        height: height & !1,
    }
}

/// The geometry of one shadow frame, derived from a config and a canvas size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowGeometry {
    /// The rounded rectangle the shadow sits behind, inset by the blur radius on every side.
    ///
    /// When the blur band is wider than half the canvas this rect is inverted.
    pub inner_rect: Rect,
    /// The length of the straight top and bottom edges between two corners.
    pub horizontal_edge: f64,
    /// The length of the straight left and right edges between two corners.
    pub vertical_edge: f64,
}

impl ShadowGeometry {
    /// Derive the frame geometry for `config` on a canvas of `size`.
    pub fn new(config: &ShadowConfig, size: CanvasSize) -> Self {
        let blur = config.blur_radius();
        let corner = config.corner_radius();
        let inner_rect = Rect::new(
            blur,
            blur,
            f64::from(size.width) - blur,
            f64::from(size.height) - blur,
        );

        Self {
            inner_rect,
            horizontal_edge: inner_rect.width() - 2.0 * corner,
            vertical_edge: inner_rect.height() - 2.0 * corner,
        }
    }

    /// Whether the inner rectangle has a positive extent on both axes.
    pub fn has_inner_rect(&self) -> bool {
        self.inner_rect.width() > 0.0 && self.inner_rect.height() > 0.0
    }

    /// Whether the top and bottom edges are long enough to draw.
    pub fn draws_horizontal_edges(&self) -> bool {
        self.horizontal_edge > 0.0
    }

    /// Whether the left and right edges are long enough to draw.
    pub fn draws_vertical_edges(&self) -> bool {
        self.vertical_edge > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peniko::Color;

    #[test]
    fn resolve_rounds_odd_down() {
        assert_eq!(resolve(201, 100), resolve(200, 100));
        assert_eq!(resolve(201, 100).width(), 200);
        assert_eq!(resolve(7, 9).height(), 8);
        assert_eq!(resolve(1, 1), resolve(0, 0));
        assert!(resolve(1, 40).is_empty());
    }

    #[test]
    fn resolve_is_even_and_not_larger() {
        for w in 0..64 {
            for h in [0, 1, 2, 33, 1000, u32::MAX] {
                let size = resolve(w, h);
                assert_eq!(size.width() % 2, 0);
                assert_eq!(size.height() % 2, 0);
                assert!(size.width() <= w && size.height() <= h);
                assert!(w - size.width() <= 1 && h - size.height() <= 1);
                assert_eq!(size, resolve(w, h));
            }
        }
    }

    #[test]
    fn geometry_of_wide_panel() {
        let config = ShadowConfig::new(20.0, 20.0, Color::rgba8(0, 0, 0, 128)).unwrap();
        let geometry = ShadowGeometry::new(&config, resolve(200, 100));

        assert_eq!(geometry.inner_rect, Rect::new(20.0, 20.0, 180.0, 80.0));
        assert_eq!(geometry.horizontal_edge, 120.0);
        assert_eq!(geometry.vertical_edge, 20.0);
        assert!(geometry.has_inner_rect());
        assert!(geometry.draws_horizontal_edges());
        assert!(geometry.draws_vertical_edges());
    }

    #[test]
    fn geometry_suppresses_short_edges() {
        let config = ShadowConfig::new(20.0, 10.0, Color::BLACK).unwrap();
        let geometry = ShadowGeometry::new(&config, resolve(60, 200));

        assert_eq!(geometry.horizontal_edge, 0.0);
        assert!(!geometry.draws_horizontal_edges());
        assert!(geometry.draws_vertical_edges());
    }

    #[test]
    fn geometry_inverts_for_wide_blur() {
        let config = ShadowConfig::new(0.0, 30.0, Color::BLACK).unwrap();
        let geometry = ShadowGeometry::new(&config, resolve(40, 100));

        assert!(geometry.inner_rect.width() < 0.0);
        assert!(!geometry.has_inner_rect());
    }
}
