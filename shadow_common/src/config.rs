// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated shadow parameters.

use crate::kurbo::Vec2;
use crate::peniko::Color;
use crate::{Error, Result};

/// The largest alpha the blurred variant is allowed to use.
///
/// A shadow layer treats a fully opaque shadow color as "use the paint's alpha instead", so the
/// color is kept just below opaque.
pub const MAX_SHADOW_LAYER_ALPHA: u8 = 254;

/// The largest corner or blur radius a config accepts.
///
/// A pixmap is at most `u16::MAX` pixels wide, so no larger radius can be seen on it.
pub const MAX_RADIUS: f64 = 2.0 * u16::MAX as f64;

/// The parameters of a rounded-rectangle drop shadow.
///
/// A config is immutable once built and every radius in it is finite, non-negative and at most
/// [`MAX_RADIUS`]; the constructors reject anything else with [`Error::InvalidConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowConfig {
    corner_radius: f64,
    blur_radius: f64,
    color: Color,
    offset: Vec2,
    padding: Padding,
}

/// Insets that shrink the region the shadow occupies, per side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Padding {
    /// Inset from the left edge.
    pub left: f64,
    /// Inset from the right edge.
    pub right: f64,
    /// Inset from the top edge.
    pub top: f64,
    /// Inset from the bottom edge.
    pub bottom: f64,
}

impl ShadowConfig {
    /// Create a new config with no offset and no padding.
    pub fn new(corner_radius: f64, blur_radius: f64, color: Color) -> Result<Self> {
        Ok(Self {
            corner_radius: radius("corner_radius", corner_radius)?,
            blur_radius: radius("blur_radius", blur_radius)?,
            color,
            offset: Vec2::ZERO,
            padding: Padding::default(),
        })
    }

    /// Set the displacement of the shadow relative to the panel.
    ///
    /// The offset is consumed by the host's layout; the synthesizers draw the shadow centered.
    pub fn with_offset(mut self, offset: impl Into<Vec2>) -> Result<Self> {
        let offset = offset.into();
        if !offset.is_finite() {
            let value = if offset.x.is_finite() { offset.y } else { offset.x };
            return Err(Error::InvalidConfig {
                field: "offset",
                value,
            });
        }
        self.offset = offset;
        Ok(self)
    }

    /// Set the per-side padding of the shadow region.
    pub fn with_padding(mut self, padding: Padding) -> Result<Self> {
        self.padding = Padding {
            left: non_negative("padding.left", padding.left)?,
            right: non_negative("padding.right", padding.right)?,
            top: non_negative("padding.top", padding.top)?,
            bottom: non_negative("padding.bottom", padding.bottom)?,
        };
        Ok(self)
    }

    /// The radius of the rounded corners of the panel.
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// The width of the falloff band around the panel.
    pub fn blur_radius(&self) -> f64 {
        self.blur_radius
    }

    /// The shadow color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The shadow color with its alpha capped at [`MAX_SHADOW_LAYER_ALPHA`].
    pub fn capped_color(&self) -> Color {
        let Color { r, g, b, a } = self.color;
        Color::rgba8(r, g, b, a.min(MAX_SHADOW_LAYER_ALPHA))
    }

    /// The shadow displacement.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// The per-side padding.
    pub fn padding(&self) -> Padding {
        self.padding
    }
}

fn radius(field: &'static str, value: f64) -> Result<f64> {
    match non_negative(field, value)? {
        value if value <= MAX_RADIUS => Ok(value),
        value => Err(Error::InvalidConfig { field, value }),
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidConfig { field, value })
    }
}

/// The same color with its alpha forced to zero.
///
/// Gradients fade to this rather than to a fixed transparent color so that only the alpha
/// changes across the falloff band.
pub fn transparent(color: Color) -> Color {
    Color::rgba8(color.r, color.g, color.b, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_radii() {
        let black = Color::rgba8(0, 0, 0, 128);
        assert_eq!(
            ShadowConfig::new(-1.0, 4.0, black),
            Err(Error::InvalidConfig {
                field: "corner_radius",
                value: -1.0
            })
        );
        assert!(matches!(
            ShadowConfig::new(4.0, -0.5, black),
            Err(Error::InvalidConfig {
                field: "blur_radius",
                ..
            })
        ));
        assert!(ShadowConfig::new(f64::NAN, 4.0, black).is_err());
        assert!(ShadowConfig::new(0.0, 0.0, black).is_ok());
    }

    #[test]
    fn rejects_huge_radii() {
        let black = Color::rgba8(0, 0, 0, 128);
        assert_eq!(
            ShadowConfig::new(0.0, 1e39, black),
            Err(Error::InvalidConfig {
                field: "blur_radius",
                value: 1e39
            })
        );
        assert!(matches!(
            ShadowConfig::new(1e300, 1e300, black),
            Err(Error::InvalidConfig {
                field: "corner_radius",
                ..
            })
        ));
        assert!(ShadowConfig::new(MAX_RADIUS, MAX_RADIUS, black).is_ok());
        assert!(ShadowConfig::new(MAX_RADIUS + 1.0, 0.0, black).is_err());
    }

    #[test]
    fn rejects_negative_padding() {
        let config = ShadowConfig::new(4.0, 4.0, Color::BLACK).unwrap();
        let padding = Padding {
            top: -2.0,
            ..Padding::default()
        };
        assert!(matches!(
            config.with_padding(padding),
            Err(Error::InvalidConfig {
                field: "padding.top",
                ..
            })
        ));
    }

    #[test]
    fn offset_may_be_negative() {
        let config = ShadowConfig::new(4.0, 4.0, Color::BLACK)
            .unwrap()
            .with_offset((-3.0, 2.0))
            .unwrap();
        assert_eq!(config.offset(), Vec2::new(-3.0, 2.0));
        assert!(config.with_offset((f64::INFINITY, 0.0)).is_err());
    }

    #[test]
    fn capped_color_only_touches_opaque_alpha() {
        let opaque = ShadowConfig::new(0.0, 1.0, Color::rgba8(10, 20, 30, 255)).unwrap();
        assert_eq!(opaque.capped_color(), Color::rgba8(10, 20, 30, 254));

        let translucent = ShadowConfig::new(0.0, 1.0, Color::rgba8(10, 20, 30, 100)).unwrap();
        assert_eq!(translucent.capped_color(), translucent.color());
    }

    #[test]
    fn transparent_keeps_hue() {
        assert_eq!(
            transparent(Color::rgba8(12, 34, 56, 200)),
            Color::rgba8(12, 34, 56, 0)
        );
    }
}
