// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reusable corner wedge and edge gradient of a shadow frame.
//!
//! A shadow frame is made of four identical corners and two pairs of identical edges. Only one
//! corner and one edge paint are built; the compositor stamps them at four rotated positions.
//!
//! All coordinates here are relative to the corner's own center, i.e. the point that would be
//! the corner of the rectangle if the corner radius were zero. The corner built here is the
//! top-left one: it occupies the quadrant of negative `x` and `y`.

use crate::config::transparent;
use crate::kurbo::{Arc, BezPath, Point, Rect, Vec2};
use crate::paint::{LinearGradient, RadialGradient};
use crate::peniko::{Color, Extend, Fill};
use core::f64::consts::{FRAC_PI_2, PI};

/// Tolerance used when converting arcs to cubic Béziers.
const ARC_TOLERANCE: f64 = 0.1;

/// One corner wedge and the edge paint that continues it.
#[derive(Debug, Clone, PartialEq)]
pub struct CornerShadow {
    /// The quarter annulus between the inner and outer corner arcs.
    pub path: BezPath,
    /// The fill rule of [`path`](Self::path).
    pub fill_rule: Fill,
    /// The radial falloff filling the wedge.
    pub corner_paint: RadialGradient,
    /// The linear falloff filling a straight edge attached to the corner.
    pub edge_paint: LinearGradient,
    corner_radius: f64,
    blur_radius: f64,
}

impl CornerShadow {
    /// The corner radius this shadow was built for.
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// The blur radius this shadow was built for.
    pub fn blur_radius(&self) -> f64 {
        self.blur_radius
    }

    /// The offset of the corner gradient's middle stop, where the falloff starts.
    pub fn falloff_start(&self) -> f32 {
        self.corner_paint.stops[1].offset
    }

    /// The edge rectangle extending `length` to the right of the corner, spanning the blur band
    /// above the panel.
    ///
    /// Returns `None` when `length` is not positive.
    pub fn edge_rect(&self, length: f64) -> Option<Rect> {
        (length > 0.0).then(|| {
            Rect::new(
                0.0,
                -self.corner_radius - self.blur_radius,
                length,
                -self.corner_radius,
            )
        })
    }
}

/// Builds [`CornerShadow`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct CornerShadowBuilder;

impl CornerShadowBuilder {
    /// Build the corner wedge and edge paint for the given radii and shadow color.
    ///
    /// Returns `None` if `corner_radius + blur_radius` is zero, since both gradients would have
    /// a zero-length axis.
    pub fn build(corner_radius: f64, blur_radius: f64, color: Color) -> Option<CornerShadow> {
        let outer_radius = corner_radius + blur_radius;
        if outer_radius <= 0.0 {
            return None;
        }

        let end_color = transparent(color);
        let falloff_start = (corner_radius / outer_radius) as f32;

        let corner_paint = RadialGradient::new(Point::ZERO, outer_radius)
            .with_stops([(0.0, color), (falloff_start, color), (1.0, end_color)])
            .with_extend(Extend::Pad);

        let edge_paint = LinearGradient::new(
            (0.0, -corner_radius + blur_radius),
            (0.0, -corner_radius - blur_radius),
        )
        .with_stops([(0.0, color), (0.5, color), (1.0, end_color)])
        .with_extend(Extend::Pad);

        Some(CornerShadow {
            path: wedge(corner_radius, blur_radius),
            fill_rule: Fill::EvenOdd,
            corner_paint,
            edge_paint,
            corner_radius,
            blur_radius,
        })
    }
}

/// The top-left quarter annulus with inner radius `corner_radius` and outer radius
/// `corner_radius + blur_radius`.
fn wedge(corner_radius: f64, blur_radius: f64) -> BezPath {
    let outer_radius = corner_radius + blur_radius;
    let mut path = BezPath::new();

    path.move_to((-corner_radius, 0.0));
    path.line_to((-outer_radius, 0.0));

    // Outer arc, clockwise from 180° to 270°.
    let outer = Arc {
        center: Point::ZERO,
        radii: Vec2::new(outer_radius, outer_radius),
        start_angle: PI,
        sweep_angle: FRAC_PI_2,
        x_rotation: 0.0,
    };
    path.extend(outer.append_iter(ARC_TOLERANCE));

    // Inner arc, counter-clockwise back from 270° to 180°.
    path.line_to((0.0, -corner_radius));
    if corner_radius > 0.0 {
        let inner = Arc {
            center: Point::ZERO,
            radii: Vec2::new(corner_radius, corner_radius),
            start_angle: 1.5 * PI,
            sweep_angle: -FRAC_PI_2,
            x_rotation: 0.0,
        };
        path.extend(inner.append_iter(ARC_TOLERANCE));
    }
    path.close_path();

    path
}
