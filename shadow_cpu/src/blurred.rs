// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The blurred shadow: a single Gaussian-blurred rounded rectangle.

use crate::render::RenderContext;
use crate::ShadowRenderer;
use log::warn;
use shadow_common::config::ShadowConfig;
use shadow_common::kurbo::Rect;
use shadow_common::math::radius_to_std_dev;
use shadow_common::pixmap::Pixmap;
use shadow_common::Result;

/// Renders a shadow as the blur of a rounded rectangle inset by the blur radius.
///
/// Unlike [`ShadowSynthesizer`](crate::ShadowSynthesizer) the canvas is used at the requested
/// size, and only the blurred halo is drawn; the panel itself is left to the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlurredShadow;

impl BlurredShadow {
    pub fn new() -> Self {
        Self
    }
}

impl ShadowRenderer for BlurredShadow {
    fn render(&mut self, config: &ShadowConfig, width: u32, height: u32) -> Result<Pixmap> {
        if width == 0 || height == 0 {
            warn!("Rendering a blurred shadow of empty size {width}x{height}.");
            return Ok(Pixmap::empty());
        }

        let mut ctx = RenderContext::new(width, height)?;
        let blur = config.blur_radius();
        let rect = Rect::new(blur, blur, f64::from(width) - blur, f64::from(height) - blur);
        let std_dev = radius_to_std_dev(blur);

        if std_dev <= 0.0 || rect.width() <= 0.0 || rect.height() <= 0.0 {
            warn!("Blurred shadow has nothing to draw, blur {blur}, rect {rect:?}.");
            return Ok(ctx.into_pixmap());
        }

        ctx.set_paint(config.capped_color());
        ctx.fill_blurred_rounded_rect(&rect, config.corner_radius(), std_dev);

        Ok(ctx.into_pixmap())
    }
}
