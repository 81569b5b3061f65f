// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gradient shadow: a frame of corner wedges and edge gradients under a flat panel.

use crate::cache::CornerCache;
use crate::compositor::QuadrantCompositor;
use crate::render::RenderContext;
use crate::ShadowRenderer;
use log::warn;
use shadow_common::config::ShadowConfig;
use shadow_common::geometry::{resolve, CanvasSize, ShadowGeometry};
use shadow_common::peniko::Fill;
use shadow_common::pixmap::Pixmap;
use shadow_common::Result;

/// Synthesizes gradient shadow bitmaps.
///
/// The corner wedge is cached between calls and only rebuilt when the radii or the color
/// change.
#[derive(Debug, Default)]
pub struct ShadowSynthesizer {
    corners: CornerCache,
}

impl ShadowSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the shadow described by `config` into a new pixmap of `size`.
    ///
    /// `size` is used as is; see [`resolve`] for the even-normalized size used by
    /// [`ShadowRenderer::render`]. An empty size gives an empty pixmap.
    pub fn synthesize(&mut self, config: &ShadowConfig, size: CanvasSize) -> Result<Pixmap> {
        if size.is_empty() {
            warn!("Synthesizing a shadow of empty size {size:?}.");
            return Ok(Pixmap::empty());
        }

        let geometry = ShadowGeometry::new(config, size);
        let mut ctx = RenderContext::new(size.width(), size.height())?;

        match self.corners.get_or_build(
            config.corner_radius(),
            config.blur_radius(),
            config.color(),
        ) {
            Some(corner) => {
                let mut ctx = ctx.saved();
                ctx.translate((
                    f64::from(size.width()) / 2.0,
                    f64::from(size.height()) / 2.0,
                ));
                QuadrantCompositor::new(corner).composite(
                    &mut ctx,
                    geometry.horizontal_edge,
                    geometry.vertical_edge,
                );
            }
            None => warn!("Shadow without corner or blur radius, drawing the panel only."),
        }

        if geometry.has_inner_rect() {
            ctx.set_anti_aliasing(true);
            ctx.set_fill_rule(Fill::NonZero);
            ctx.set_paint(config.color());
            ctx.fill_rounded_rect(&geometry.inner_rect, config.corner_radius());
        } else {
            warn!("Shadow panel {:?} has no area.", geometry.inner_rect);
        }

        Ok(ctx.into_pixmap())
    }

    /// Whether the last synthesis had to rebuild the corner wedge.
    pub fn rebuilt_corner(&self) -> bool {
        self.corners.last_lookup_rebuilt()
    }
}

impl ShadowRenderer for ShadowSynthesizer {
    fn render(&mut self, config: &ShadowConfig, width: u32, height: u32) -> Result<Pixmap> {
        self.synthesize(config, resolve(width, height))
    }
}
