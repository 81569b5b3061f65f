// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattening filled bezier paths into device-space lines.

use log::warn;
use shadow_common::kurbo::{self, Affine, PathEl};

/// The tolerance, in device pixels, of the polyline approximation of curves.
pub(crate) const TOLERANCE: f64 = 0.1;

/// A point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Point {
    /// The x coordinate of the point.
    pub(crate) x: f32,
    /// The y coordinate of the point.
    pub(crate) y: f32,
}

impl Point {
    /// Create a new point.
    pub(crate) const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn from_kurbo(p: kurbo::Point) -> Self {
        Self::new(p.x as f32, p.y as f32)
    }
}

/// A line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Line {
    /// The start point of the line.
    pub(crate) p0: Point,
    /// The end point of the line.
    pub(crate) p1: Point,
}

impl Line {
    /// Create a new line.
    pub(crate) fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }
}

/// Flatten a filled bezier path into line segments.
///
/// Every subpath is implicitly closed, since it is going to be filled.
pub(crate) fn fill(
    path: impl IntoIterator<Item = PathEl>,
    affine: Affine,
    line_buf: &mut Vec<Line>,
) {
    line_buf.clear();

    let mut lb = FlattenerCallback {
        line_buf,
        start: Point::new(0.0, 0.0),
        p0: Point::new(0.0, 0.0),
        is_nan: false,
    };

    kurbo::flatten(path.into_iter().map(|el| affine * el), TOLERANCE, |el| {
        lb.callback(el);
    });
    lb.close();

    // A path that contains NaN is ill-defined, so ignore it.
    if lb.is_nan {
        warn!("A path contains NaN, ignoring it.");

        line_buf.clear();
    }
}

struct FlattenerCallback<'a> {
    line_buf: &'a mut Vec<Line>,
    start: Point,
    p0: Point,
    is_nan: bool,
}

impl FlattenerCallback<'_> {
    fn callback(&mut self, el: PathEl) {
        match el {
            PathEl::MoveTo(p) => {
                self.is_nan |= p.is_nan();

                self.close();
                self.start = Point::from_kurbo(p);
                self.p0 = self.start;
            }
            PathEl::LineTo(p) => {
                self.is_nan |= p.is_nan();

                let p = Point::from_kurbo(p);
                self.line_buf.push(Line::new(self.p0, p));
                self.p0 = p;
            }
            PathEl::ClosePath => self.close(),
            // `kurbo::flatten` only emits lines.
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
        }
    }

    fn close(&mut self) {
        if self.p0 != self.start {
            self.line_buf.push(Line::new(self.p0, self.start));
        }
        self.p0 = self.start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shadow_common::kurbo::{Rect, Shape};

    #[test]
    fn rect_is_closed() {
        let mut lines = vec![];
        let rect = Rect::new(1.0, 2.0, 5.0, 7.0);
        fill(rect.path_elements(TOLERANCE), Affine::IDENTITY, &mut lines);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].p0, lines[3].p1);
        for pair in lines.windows(2) {
            assert_eq!(pair[0].p1, pair[1].p0);
        }
    }

    #[test]
    fn transform_is_applied() {
        let mut lines = vec![];
        let rect = Rect::new(0.0, 0.0, 1.0, 1.0);
        fill(
            rect.path_elements(TOLERANCE),
            Affine::translate((10.0, 20.0)),
            &mut lines,
        );

        assert!(lines.iter().all(|l| l.p0.x >= 10.0 && l.p0.y >= 20.0));
    }

    #[test]
    fn nan_path_is_ignored() {
        let mut lines = vec![];
        let rect = Rect::new(0.0, 0.0, f64::NAN, 1.0);
        fill(rect.path_elements(TOLERANCE), Affine::IDENTITY, &mut lines);

        assert!(lines.is_empty());
    }
}
