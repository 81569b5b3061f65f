// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Computing per-pixel coverage of flattened paths.
//!
//! The winding of a pixel is the integral of the winding number over its square area. Every
//! line adds, to each pixel it crosses, the area to the right of the line within that pixel,
//! and to the pixel after it the remaining height it spans; a prefix sum along each row then
//! turns these deltas into the accumulated (fractional) winding of every pixel. Lines moving
//! downwards (in a y-down coordinate system) add to the winding, lines moving upwards subtract
//! from it.

use crate::flatten::{Line, Point};
use shadow_common::peniko::Fill;
use shadow_common::{Error, Result};

/// Accumulates the winding area of lines and turns it into coverage.
#[derive(Debug)]
pub(crate) struct Rasterizer {
    width: u16,
    height: u16,
    /// Row-major winding deltas. Each row has two extra cells, which receive the contribution
    /// of lines lying on or beyond the right edge and are never read.
    area: Vec<f32>,
    /// The first and last row touched since the last drain.
    dirty: Option<(u16, u16)>,
}

impl Rasterizer {
    pub(crate) fn new(width: u16, height: u16) -> Result<Self> {
        let len = (usize::from(width) + 2) * usize::from(height);
        let mut area = Vec::new();
        area.try_reserve_exact(len)
            .map_err(|_| Error::Allocation {
                width: u32::from(width),
                height: u32::from(height),
            })?;
        area.resize(len, 0.0);

        Ok(Self {
            width,
            height,
            area,
            dirty: None,
        })
    }

    fn stride(&self) -> usize {
        usize::from(self.width) + 2
    }

    /// Accumulate the winding area of all lines.
    pub(crate) fn rasterize(&mut self, lines: &[Line]) {
        for line in lines {
            self.clip_and_draw(*line);
        }
    }

    /// Visit every pixel with a non-zero coverage, then reset the touched rows.
    ///
    /// Without anti-aliasing a pixel is either fully covered or skipped, depending on whether
    /// at least half of it is covered.
    pub(crate) fn drain(
        &mut self,
        fill_rule: Fill,
        anti_alias: bool,
        mut f: impl FnMut(u16, u16, f32),
    ) {
        let Some((y0, y1)) = self.dirty.take() else {
            return;
        };
        let stride = self.stride();
        let width = usize::from(self.width);

        for y in y0..=y1 {
            let start = usize::from(y) * stride;
            let row = &mut self.area[start..start + stride];
            let mut winding = 0.0_f32;

            for (x, cell) in row[..width].iter().enumerate() {
                winding += *cell;
                let coverage = coverage(winding, fill_rule);
                let coverage = if anti_alias {
                    coverage
                } else if coverage >= 0.5 {
                    1.0
                } else {
                    0.0
                };

                if coverage > 0.0 {
                    f(x as u16, y, coverage);
                }
            }

            row.fill(0.0);
        }
    }

    /// Split a line at the left and right edges of the pixmap and draw the pieces.
    ///
    /// Pieces to the left of the pixmap are moved onto its left edge, where they still add their
    /// full winding to every pixel of the row. Pieces to the right are moved onto the right edge
    /// and only reach the unread extra cells.
    fn clip_and_draw(&mut self, line: Line) {
        let Line { p0, p1 } = line;
        let right = f32::from(self.width);

        let mut splits = [0.0_f32, 1.0, 1.0, 1.0];
        let mut n = 2;
        let dx = p1.x - p0.x;
        if dx != 0.0 {
            for edge in [0.0, right] {
                let t = (edge - p0.x) / dx;
                if t > 0.0 && t < 1.0 {
                    splits[n] = t;
                    n += 1;
                }
            }
        }
        let splits = &mut splits[..n];
        splits.sort_by(f32::total_cmp);

        let at = |t: f32| {
            let x = if t == 0.0 {
                p0.x
            } else if t == 1.0 {
                p1.x
            } else {
                p0.x + dx * t
            };
            let y = p0.y + (p1.y - p0.y) * t;
            Point::new(x.clamp(0.0, right), y)
        };

        for pair in splits.windows(2) {
            self.draw_line(at(pair[0]), at(pair[1]));
        }
    }

    fn draw_line(&mut self, p0: Point, p1: Point) {
        if (p0.y - p1.y).abs() <= f32::EPSILON {
            return;
        }
        let (dir, p0, p1) = if p0.y < p1.y {
            (1.0, p0, p1)
        } else {
            (-1.0, p1, p0)
        };
        let height = f32::from(self.height);
        if p1.y <= 0.0 || p0.y >= height {
            return;
        }

        let right = f32::from(self.width);
        let stride = self.stride();
        let dxdy = (p1.x - p0.x) / (p1.y - p0.y);
        let mut x = p0.x;
        if p0.y < 0.0 {
            x -= p0.y * dxdy;
        }

        let y_start = p0.y.max(0.0) as u16;
        let y_end = p1.y.ceil().min(height) as u16;
        self.mark_dirty(y_start, y_end.saturating_sub(1));

        for y in y_start..y_end {
            let row = usize::from(y) * stride;
            let yf = f32::from(y);
            let dy = (yf + 1.0).min(p1.y) - yf.max(p0.y);
            let x_next = (x + dxdy * dy).clamp(0.0, right);
            let d = dy * dir;
            let (x0, x1) = if x < x_next { (x, x_next) } else { (x_next, x) };
            let x0_floor = x0.floor();
            let x0i = x0_floor as usize;
            let x1_ceil = x1.ceil();
            let x1i = x1_ceil as usize;

            if x1i <= x0i + 1 {
                // The line stays within a single pixel of this row.
                let xmf = 0.5 * (x + x_next) - x0_floor;
                self.area[row + x0i] += d - d * xmf;
                self.area[row + x0i + 1] += d * xmf;
            } else {
                let s = (x1 - x0).recip();
                let x0f = x0 - x0_floor;
                let a0 = 0.5 * s * (1.0 - x0f) * (1.0 - x0f);
                let x1f = x1 - x1_ceil + 1.0;
                let am = 0.5 * s * x1f * x1f;
                self.area[row + x0i] += d * a0;
                if x1i == x0i + 2 {
                    self.area[row + x0i + 1] += d * (1.0 - a0 - am);
                } else {
                    let a1 = s * (1.5 - x0f);
                    self.area[row + x0i + 1] += d * (a1 - a0);
                    for xi in x0i + 2..x1i - 1 {
                        self.area[row + xi] += d * s;
                    }
                    let a2 = a1 + (x1i - x0i - 3) as f32 * s;
                    self.area[row + x1i - 1] += d * (1.0 - a2 - am);
                }
                self.area[row + x1i] += d * am;
            }

            x = x_next;
        }
    }

    fn mark_dirty(&mut self, y0: u16, y1: u16) {
        self.dirty = Some(match self.dirty {
            Some((a, b)) => (a.min(y0), b.max(y1)),
            None => (y0, y1),
        });
    }
}

/// Turn an accumulated winding into a coverage in `[0, 1]`.
fn coverage(winding: f32, fill_rule: Fill) -> f32 {
    let winding = winding.abs();
    match fill_rule {
        Fill::NonZero => winding.min(1.0),
        // Fold the winding so that odd windings are covered and even windings are not.
        Fill::EvenOdd => (winding - 2.0 * (0.5 * winding).round()).abs().min(1.0),
    }
}
