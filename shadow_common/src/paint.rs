// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paints that can be used for filling shapes.
//!
//! All geometry in a paint is expressed in the local coordinate space of the shape it fills,
//! i.e. it is transformed together with the shape.

use crate::kurbo::{Point, Rect};
use crate::peniko::{Color, Extend};
use smallvec::SmallVec;

/// A color stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop {
    /// The normalized offset of the stop.
    pub offset: f32,
    /// The color of the stop.
    pub color: Color,
}

impl From<(f32, Color)> for Stop {
    fn from((offset, color): (f32, Color)) -> Self {
        Self { offset, color }
    }
}

/// The color stops of a gradient, sorted by offset.
pub type Stops = SmallVec<[Stop; 3]>;

/// A linear gradient running from `start` to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    /// The point at offset `0.0`.
    pub start: Point,
    /// The point at offset `1.0`.
    pub end: Point,
    /// The color stops of the linear gradient.
    pub stops: Stops,
    /// How positions outside of `[0, 1]` are mapped.
    pub extend: Extend,
}

impl LinearGradient {
    /// Create a padded gradient without stops.
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            stops: Stops::new(),
            extend: Extend::Pad,
        }
    }

    /// Replace the stops of the gradient.
    ///
    /// Stops are sorted by offset; stops with equal offsets keep their relative order.
    #[must_use]
    pub fn with_stops(mut self, stops: impl IntoIterator<Item = (f32, Color)>) -> Self {
        self.stops = sorted(stops);
        self
    }

    /// Set the extend mode.
    #[must_use]
    pub fn with_extend(mut self, extend: Extend) -> Self {
        self.extend = extend;
        self
    }
}

/// A radial gradient centered on `center`, reaching offset `1.0` at `radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    /// The center of the gradient.
    pub center: Point,
    /// The radius at offset `1.0`.
    pub radius: f64,
    /// The color stops of the radial gradient.
    pub stops: Stops,
    /// How positions outside of `[0, 1]` are mapped.
    pub extend: Extend,
}

impl RadialGradient {
    /// Create a padded gradient without stops.
    pub fn new(center: impl Into<Point>, radius: f64) -> Self {
        Self {
            center: center.into(),
            radius,
            stops: Stops::new(),
            extend: Extend::Pad,
        }
    }

    /// Replace the stops of the gradient.
    #[must_use]
    pub fn with_stops(mut self, stops: impl IntoIterator<Item = (f32, Color)>) -> Self {
        self.stops = sorted(stops);
        self
    }

    /// Set the extend mode.
    #[must_use]
    pub fn with_extend(mut self, extend: Extend) -> Self {
        self.extend = extend;
        self
    }
}

/// A rounded rectangle convolved with a Gaussian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurredRoundedRect {
    /// The base rectangle to use for the blur effect.
    pub rect: Rect,
    /// The radius of the rounded rectangle's corners.
    pub radius: f64,
    /// The standard deviation of the blur effect.
    pub std_dev: f64,
    /// The color of the blurred rectangle.
    pub color: Color,
}

/// A paint.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// A single color.
    Solid(Color),
    /// A linear gradient.
    LinearGradient(LinearGradient),
    /// A radial gradient.
    RadialGradient(RadialGradient),
    /// A blurred rounded rectangle. The shape being filled acts as a clip.
    BlurredRoundedRect(BlurredRoundedRect),
}

impl From<Color> for Paint {
    fn from(value: Color) -> Self {
        Self::Solid(value)
    }
}

impl From<LinearGradient> for Paint {
    fn from(value: LinearGradient) -> Self {
        Self::LinearGradient(value)
    }
}

impl From<RadialGradient> for Paint {
    fn from(value: RadialGradient) -> Self {
        Self::RadialGradient(value)
    }
}

impl From<BlurredRoundedRect> for Paint {
    fn from(value: BlurredRoundedRect) -> Self {
        Self::BlurredRoundedRect(value)
    }
}

fn sorted(stops: impl IntoIterator<Item = (f32, Color)>) -> Stops {
    let mut stops: Stops = stops.into_iter().map(Stop::from).collect();
    // `sort_by` is stable, so hard stops at the same offset stay in order.
    stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
    stops
}
