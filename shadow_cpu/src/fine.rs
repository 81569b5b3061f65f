// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shading pixels and compositing them into the pixmap.
//!
//! Colors are handled as premultiplied `[r, g, b, a]` arrays of `f32` in `[0, 1]`. Gradients
//! interpolate their stops with straight alpha and premultiply the result.

use shadow_common::kurbo::{Affine, Point, Rect};
use shadow_common::math::compute_erf7;
use shadow_common::paint::{BlurredRoundedRect, Paint, Stop};
use shadow_common::peniko::{Color, Extend};
use shadow_common::pixmap::PremulRgba8;

pub(crate) const COLOR_COMPONENTS: usize = 4;

/// A premultiplied color.
pub(crate) type PremulF32 = [f32; COLOR_COMPONENTS];

/// Evaluates a paint at device pixels.
#[derive(Debug)]
pub(crate) enum Shader<'a> {
    Solid(PremulF32),
    Linear {
        /// Maps device pixel centers into the paint's local space.
        inverse: Affine,
        start: Point,
        /// The gradient axis, scaled by its inverse squared length.
        axis: (f64, f64),
        stops: &'a [Stop],
        extend: Extend,
    },
    Radial {
        inverse: Affine,
        center: Point,
        radius: f64,
        stops: &'a [Stop],
        extend: Extend,
    },
    BlurredRoundedRect {
        inverse: Affine,
        rect: BlurredRectShape,
        color: PremulF32,
    },
}

impl<'a> Shader<'a> {
    /// Prepare `paint`, drawn with `transform`, for per-pixel evaluation.
    pub(crate) fn new(paint: &'a Paint, transform: Affine) -> Self {
        let inverse = transform.inverse();
        match paint {
            Paint::Solid(color) => Self::Solid(premultiply(straight(*color))),
            Paint::LinearGradient(gradient) => {
                let d = gradient.end - gradient.start;
                let len2 = d.hypot2();
                // A degenerate axis maps every pixel to the start of the gradient.
                let axis = if len2 > 0.0 {
                    (d.x / len2, d.y / len2)
                } else {
                    (0.0, 0.0)
                };
                Self::Linear {
                    inverse,
                    start: gradient.start,
                    axis,
                    stops: &gradient.stops,
                    extend: gradient.extend,
                }
            }
            Paint::RadialGradient(gradient) => Self::Radial {
                inverse,
                center: gradient.center,
                radius: gradient.radius,
                stops: &gradient.stops,
                extend: gradient.extend,
            },
            Paint::BlurredRoundedRect(blurred) => Self::BlurredRoundedRect {
                inverse,
                rect: BlurredRectShape::new(blurred),
                color: premultiply(straight(blurred.color)),
            },
        }
    }

    /// The premultiplied color at the center of the device pixel `(x, y)`.
    pub(crate) fn shade(&self, x: u16, y: u16) -> PremulF32 {
        let device = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
        match self {
            Self::Solid(color) => *color,
            Self::Linear {
                inverse,
                start,
                axis,
                stops,
                extend,
            } => {
                let p = *inverse * device - *start;
                let t = p.x * axis.0 + p.y * axis.1;
                premultiply(color_at(stops, apply_extend(t as f32, *extend)))
            }
            Self::Radial {
                inverse,
                center,
                radius,
                stops,
                extend,
            } => {
                let dist = (*inverse * device - *center).hypot();
                let t = if *radius > 0.0 { dist / radius } else { 1.0 };
                premultiply(color_at(stops, apply_extend(t as f32, *extend)))
            }
            Self::BlurredRoundedRect {
                inverse,
                rect,
                color,
            } => {
                let alpha = rect.alpha_at(*inverse * device);
                color.map(|c| c * alpha)
            }
        }
    }
}

/// Composite `src` with the given coverage over `dst` (source-over).
pub(crate) fn blend(dst: &mut PremulRgba8, src: PremulF32, coverage: f32) {
    let inv_src_a = 1.0 - src[3] * coverage;
    let compose = |d: u8, s: f32| to_u8(s * coverage + f32::from(d) / 255.0 * inv_src_a);

    *dst = PremulRgba8 {
        r: compose(dst.r, src[0]),
        g: compose(dst.g, src[1]),
        b: compose(dst.b, src[2]),
        a: compose(dst.a, src[3]),
    };
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

fn straight(color: Color) -> PremulF32 {
    [color.r, color.g, color.b, color.a].map(|c| f32::from(c) / 255.0)
}

fn premultiply([r, g, b, a]: PremulF32) -> PremulF32 {
    [r * a, g * a, b * a, a]
}

fn apply_extend(t: f32, extend: Extend) -> f32 {
    match extend {
        Extend::Pad => t.clamp(0.0, 1.0),
        Extend::Repeat => t - t.floor(),
        Extend::Reflect => {
            let t = t.rem_euclid(2.0);
            if t > 1.0 {
                2.0 - t
            } else {
                t
            }
        }
    }
}

/// The straight-alpha color of the sorted `stops` at position `t`.
fn color_at(stops: &[Stop], t: f32) -> PremulF32 {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return [0.0; COLOR_COMPONENTS];
    };
    if t <= first.offset {
        return straight(first.color);
    }

    for pair in stops.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= 0.0 {
                return straight(b.color);
            }
            let frac = (t - a.offset) / span;
            let (ca, cb) = (straight(a.color), straight(b.color));
            return core::array::from_fn(|i| ca[i] + (cb[i] - ca[i]) * frac);
        }
    }

    straight(last.color)
}

/// A rounded rectangle blurred by a Gaussian, evaluated as an approximate distance field.
///
/// Implementation is adapted from: <https://git.sr.ht/~raph/blurrr/tree/master/src/distfield.rs>.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BlurredRectShape {
    origin: Point,
    width: f32,
    height: f32,
    w: f32,
    h: f32,
    r1: f32,
    exponent: f32,
    recip_exponent: f32,
    scale: f32,
    std_dev_inv: f32,
    min_edge: f32,
}

impl BlurredRectShape {
    fn new(blurred: &BlurredRoundedRect) -> Self {
        // Ensure rectangle has positive width/height.
        let rect: Rect = blurred.rect.abs();

        let width = rect.width() as f32;
        let height = rect.height() as f32;
        let radius = (blurred.radius as f32).min(0.5 * width.min(height));

        // To avoid divide by 0; potentially should be a bigger number for antialiasing.
        let std_dev = (blurred.std_dev as f32).max(1e-6);

        let min_edge = width.min(height);
        let rmax = 0.5 * min_edge;
        let r0 = radius.hypot(std_dev * 1.15).min(rmax);
        let r1 = radius.hypot(std_dev * 2.0).min(rmax);

        let exponent = 2.0 * r1 / r0;

        let std_dev_inv = std_dev.recip();

        // Pull in long end (make less eccentric).
        let delta = 1.25
            * std_dev
            * ((-(0.5 * std_dev_inv * width).powi(2)).exp()
                - (-(0.5 * std_dev_inv * height).powi(2)).exp());
        let w = width + delta.min(0.0);
        let h = height - delta.max(0.0);

        let scale = 0.5 * compute_erf7(std_dev_inv * 0.5 * (w.max(h) - 0.5 * radius));

        Self {
            origin: rect.origin(),
            width,
            height,
            w,
            h,
            r1,
            exponent,
            recip_exponent: exponent.recip(),
            scale,
            std_dev_inv,
            min_edge,
        }
    }

    /// The blurred coverage at `p`, in the rectangle's local space.
    fn alpha_at(&self, p: Point) -> f32 {
        let x = (p.x - self.origin.x) as f32 - 0.5 * self.width;
        let y = (p.y - self.origin.y) as f32 - 0.5 * self.height;

        let x0 = x.abs() - 0.5 * self.w + self.r1;
        let y0 = y.abs() - 0.5 * self.h + self.r1;
        let x1 = x0.max(0.0);
        let y1 = y0.max(0.0);

        let d_pos = (x1.powf(self.exponent) + y1.powf(self.exponent)).powf(self.recip_exponent);
        let d_neg = x0.max(y0).min(0.0);
        let d = d_pos + d_neg - self.r1;

        let z = self.scale
            * (compute_erf7(self.std_dev_inv * (self.min_edge + d))
                - compute_erf7(self.std_dev_inv * d));
        z.clamp(0.0, 1.0)
    }
}
