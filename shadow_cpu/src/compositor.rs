// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stamping one corner wedge and one edge into the four quadrants of a shadow frame.

use crate::render::RenderContext;
use log::trace;
use shadow_common::corner::CornerShadow;
use shadow_common::kurbo::Vec2;
use shadow_common::peniko::Fill;

/// One of the four corners of a shadow frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    BottomRight,
    BottomLeft,
    TopRight,
}

/// The transform and edge of one quadrant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadrantPass {
    pub quadrant: Quadrant,
    /// Offset of the corner center from the frame center.
    pub translation: Vec2,
    /// Clockwise rotation in degrees, applied after the translation.
    pub rotation: f64,
    /// Length of the edge extending from the corner.
    pub edge_length: f64,
}

impl QuadrantPass {
    /// Whether this pass draws an edge next to its corner.
    pub fn draws_edge(&self) -> bool {
        self.edge_length > 0.0
    }
}

/// The four passes for a frame whose straight edges have the given lengths, in drawing order.
///
/// Horizontal edges are drawn by the top-left and bottom-right passes, vertical edges by the
/// other two.
pub fn passes(horizontal_edge: f64, vertical_edge: f64) -> [QuadrantPass; 4] {
    let half_h = horizontal_edge / 2.0;
    let half_v = vertical_edge / 2.0;
    let pass = |quadrant, x, y, rotation, edge_length| QuadrantPass {
        quadrant,
        translation: Vec2::new(x, y),
        rotation,
        edge_length,
    };

    [
        pass(Quadrant::TopLeft, -half_h, -half_v, 0.0, horizontal_edge),
        pass(Quadrant::BottomRight, half_h, half_v, 180.0, horizontal_edge),
        pass(Quadrant::BottomLeft, -half_h, half_v, 270.0, vertical_edge),
        pass(Quadrant::TopRight, half_h, -half_v, 90.0, vertical_edge),
    ]
}

/// Draws the translucent frame of a shadow from a single [`CornerShadow`].
#[derive(Debug)]
pub struct QuadrantCompositor<'a> {
    corner: &'a CornerShadow,
}

impl<'a> QuadrantCompositor<'a> {
    pub fn new(corner: &'a CornerShadow) -> Self {
        Self { corner }
    }

    /// Draw all four corners and the edges between them.
    ///
    /// The context's origin must be at the center of the frame. The transform is left as it
    /// was found; the paint, fill rule and anti-aliasing are not.
    pub fn composite(&self, ctx: &mut RenderContext, horizontal_edge: f64, vertical_edge: f64) {
        self.composite_passes(ctx, &passes(horizontal_edge, vertical_edge));
    }

    /// Draw the corner, and its edge if it has one, for each of `passes` in order.
    pub fn composite_passes(&self, ctx: &mut RenderContext, passes: &[QuadrantPass]) {
        for pass in passes {
            trace!("Compositing {:?} corner, edge {}.", pass.quadrant, pass.edge_length);

            let mut ctx = ctx.saved();
            ctx.translate(pass.translation);
            ctx.rotate(pass.rotation);
            self.draw_corner(&mut ctx, pass.edge_length);
        }
    }

    fn draw_corner(&self, ctx: &mut RenderContext, edge_length: f64) {
        ctx.set_anti_aliasing(true);
        ctx.set_fill_rule(self.corner.fill_rule);
        ctx.set_paint(self.corner.corner_paint.clone());
        ctx.fill_path(&self.corner.path);

        if let Some(edge) = self.corner.edge_rect(edge_length) {
            ctx.set_anti_aliasing(false);
            ctx.set_fill_rule(Fill::NonZero);
            ctx.set_paint(self.corner.edge_paint.clone());
            ctx.fill_rect(&edge);
        }
    }
}
