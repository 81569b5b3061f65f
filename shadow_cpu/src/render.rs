// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic render operations.

use crate::fine::{blend, Shader};
use crate::flatten::{self, Line, TOLERANCE};
use crate::raster::Rasterizer;
use core::ops::{Deref, DerefMut};
use log::{trace, warn};
use shadow_common::kurbo::{Affine, BezPath, Rect, RoundedRect, Shape, Vec2};
use shadow_common::paint::{BlurredRoundedRect, Paint};
use shadow_common::peniko::{Color, Fill};
use shadow_common::pixmap::Pixmap;
use shadow_common::Result;

/// How far, in standard deviations, a blurred rectangle is painted beyond its edges.
///
/// The response of the Gaussian is cut off there, where it is close to zero.
const BLUR_EXTENT: f64 = 2.5;

/// A render context.
///
/// Drawing happens immediately into the context's own pixmap, which starts out fully
/// transparent. Like a canvas, the context carries a current transform which can be saved
/// and restored; the current paint, fill rule and anti-aliasing are not part of the saved
/// state.
#[derive(Debug)]
pub struct RenderContext {
    width: u16,
    pixmap: Pixmap,
    rasterizer: Rasterizer,
    line_buf: Vec<Line>,
    paint: Paint,
    transform: Affine,
    fill_rule: Fill,
    anti_alias: bool,
    state_stack: Vec<Affine>,
}

impl RenderContext {
    /// Create a new render context with the given width and height in pixels.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height)?;
        let rasterizer = Rasterizer::new(pixmap.width(), pixmap.height())?;

        Ok(Self {
            width: pixmap.width(),
            pixmap,
            rasterizer,
            line_buf: vec![],
            paint: Color::BLACK.into(),
            transform: Affine::IDENTITY,
            fill_rule: Fill::NonZero,
            anti_alias: true,
            state_stack: vec![],
        })
    }

    /// Save the current transform.
    ///
    /// Returns the number of saved states before this call, to be passed to
    /// [`restore_to_count`](Self::restore_to_count).
    pub fn save(&mut self) -> usize {
        self.state_stack.push(self.transform);
        self.state_stack.len() - 1
    }

    /// Restore the most recently saved transform.
    pub fn restore(&mut self) {
        match self.state_stack.pop() {
            Some(transform) => self.transform = transform,
            None => warn!("Restoring a render context without saved states."),
        }
    }

    /// Restore saved transforms until only `count` saved states remain.
    pub fn restore_to_count(&mut self, count: usize) {
        while self.state_stack.len() > count {
            self.restore();
        }
    }

    /// The number of saved states.
    pub fn save_count(&self) -> usize {
        self.state_stack.len()
    }

    /// Save the current transform, restoring it when the returned guard is dropped.
    ///
    /// The guard dereferences to the render context, so everything drawn through it is
    /// drawn into this context.
    pub fn saved(&mut self) -> Saved<'_> {
        let count = self.save();
        Saved { ctx: self, count }
    }

    /// Translate the current transform, in its local space.
    pub fn translate(&mut self, offset: impl Into<Vec2>) {
        self.transform *= Affine::translate(offset);
    }

    /// Rotate the current transform clockwise by `degrees`, in its local space.
    pub fn rotate(&mut self, degrees: f64) {
        self.transform *= Affine::rotate(degrees.to_radians());
    }

    /// Set the current transform.
    pub fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    /// Reset the current transform.
    pub fn reset_transform(&mut self) {
        self.transform = Affine::IDENTITY;
    }

    /// Return the current transform.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Set the current paint.
    pub fn set_paint(&mut self, paint: impl Into<Paint>) {
        self.paint = paint.into();
    }

    /// Set the current fill rule.
    pub fn set_fill_rule(&mut self, fill_rule: Fill) {
        self.fill_rule = fill_rule;
    }

    /// Set whether edges are anti-aliased.
    ///
    /// Without anti-aliasing, a pixel is painted fully if at least half of it is covered.
    pub fn set_anti_aliasing(&mut self, anti_alias: bool) {
        self.anti_alias = anti_alias;
    }

    /// Fill a path.
    pub fn fill_path(&mut self, path: &BezPath) {
        self.fill_shape(path);
    }

    /// Fill a rectangle.
    ///
    /// A rectangle with an inverted or empty extent on either axis draws nothing.
    pub fn fill_rect(&mut self, rect: &Rect) {
        if !has_area(rect) {
            trace!("Skipping degenerate rect {rect:?}.");
            return;
        }
        self.fill_shape(rect);
    }

    /// Fill a rounded rectangle.
    ///
    /// A rectangle with an inverted or empty extent on either axis draws nothing.
    pub fn fill_rounded_rect(&mut self, rect: &Rect, radius: f64) {
        if !has_area(rect) {
            trace!("Skipping degenerate rounded rect {rect:?}.");
            return;
        }
        self.fill_shape(&RoundedRect::from_rect(*rect, radius));
    }

    /// Fill the Gaussian blur of a rounded rectangle, using the color of the current paint.
    ///
    /// Only solid paints carry a color; with any other paint this draws nothing.
    pub fn fill_blurred_rounded_rect(&mut self, rect: &Rect, radius: f64, std_dev: f64) {
        let Paint::Solid(color) = self.paint else {
            warn!("Blurred rounded rects can only be filled with a solid color.");
            return;
        };

        let blurred = BlurredRoundedRect {
            rect: *rect,
            radius,
            std_dev,
            color,
        };
        let extent = BLUR_EXTENT * std_dev;
        let area = rect.abs().inflate(extent, extent);

        let previous = core::mem::replace(&mut self.paint, blurred.into());
        self.fill_shape(&area);
        self.paint = previous;
    }

    /// Return the pixmap drawn so far.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Consume the context, returning its pixmap.
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    fn fill_shape(&mut self, shape: &impl Shape) {
        flatten::fill(
            shape.path_elements(TOLERANCE),
            self.transform,
            &mut self.line_buf,
        );
        self.render_path();
    }

    // Assumes that `line_buf` contains the flattened path.
    fn render_path(&mut self) {
        if self.line_buf.is_empty() {
            return;
        }

        let shader = Shader::new(&self.paint, self.transform);
        let width = usize::from(self.width);
        let pixels = self.pixmap.data_mut();

        self.rasterizer.rasterize(&self.line_buf);
        self.rasterizer
            .drain(self.fill_rule, self.anti_alias, |x, y, coverage| {
                let idx = usize::from(y) * width + usize::from(x);
                blend(&mut pixels[idx], shader.shade(x, y), coverage);
            });
    }
}

fn has_area(rect: &Rect) -> bool {
    rect.width() > 0.0 && rect.height() > 0.0
}

/// A saved render context state, restored on drop.
///
/// Created by [`RenderContext::saved`].
#[derive(Debug)]
pub struct Saved<'a> {
    ctx: &'a mut RenderContext,
    count: usize,
}

impl Deref for Saved<'_> {
    type Target = RenderContext;

    fn deref(&self) -> &RenderContext {
        self.ctx
    }
}

impl DerefMut for Saved<'_> {
    fn deref_mut(&mut self) -> &mut RenderContext {
        self.ctx
    }
}

impl Drop for Saved<'_> {
    fn drop(&mut self) {
        self.ctx.restore_to_count(self.count);
    }
}
