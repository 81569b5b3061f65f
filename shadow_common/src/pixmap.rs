// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simple pixmap type.

use crate::peniko::Color;
use crate::{Error, Result};
use bytemuck::{Pod, Zeroable};

/// A premultiplied RGBA8 pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct PremulRgba8 {
    /// Red, multiplied by alpha.
    pub r: u8,
    /// Green, multiplied by alpha.
    pub g: u8,
    /// Blue, multiplied by alpha.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl PremulRgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Premultiply a straight-alpha color.
    pub fn from_color(color: Color) -> Self {
        let premul = |c: u8| ((u16::from(c) * u16::from(color.a) + 127) / 255) as u8;
        Self {
            r: premul(color.r),
            g: premul(color.g),
            b: premul(color.b),
            a: color.a,
        }
    }

    /// Undo the premultiplication.
    ///
    /// Fully transparent pixels become transparent black.
    pub fn unpremultiply(self) -> Color {
        if self.a == 0 {
            return Color::rgba8(0, 0, 0, 0);
        }
        let a = u16::from(self.a);
        let unpremul = |c: u8| ((u16::from(c) * 255 + a / 2) / a).min(255) as u8;
        Color::rgba8(unpremul(self.r), unpremul(self.g), unpremul(self.b), self.a)
    }
}

/// A pixmap of premultiplied RGBA8 values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    /// Width of the pixmap in pixels.
    width: u16,
    /// Height of the pixmap in pixels.
    height: u16,
    /// Buffer of the pixmap in row-major order.
    buf: Vec<PremulRgba8>,
}

impl Pixmap {
    /// Create a new pixmap with the given width and height in pixels.
    ///
    /// All pixels are initialized to transparent black. Fails with [`Error::Allocation`] if a
    /// dimension does not fit in a `u16` or if the buffer cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let too_large = Error::Allocation { width, height };
        let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
            return Err(too_large);
        };

        let len = usize::from(w) * usize::from(h);
        let mut buf = Vec::new();
        buf.try_reserve_exact(len).map_err(|_| too_large)?;
        buf.resize(len, PremulRgba8::TRANSPARENT);

        Ok(Self {
            width: w,
            height: h,
            buf,
        })
    }

    /// An empty, zero-sized pixmap.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            buf: Vec::new(),
        }
    }

    /// Return the width of the pixmap.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Return the height of the pixmap.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Whether the pixmap has no pixels.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns a reference to the underlying data as premultiplied RGBA8.
    pub fn data(&self) -> &[PremulRgba8] {
        &self.buf
    }

    /// Returns a mutable reference to the underlying data as premultiplied RGBA8.
    pub fn data_mut(&mut self) -> &mut [PremulRgba8] {
        &mut self.buf
    }

    /// Returns the underlying data as premultiplied bytes.
    pub fn data_as_u8_slice(&self) -> &[u8] {
        bytemuck::cast_slice(&self.buf)
    }

    /// Sample a pixel from the pixmap.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline(always)]
    pub fn sample(&self, x: u16, y: u16) -> PremulRgba8 {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.buf[usize::from(self.width) * usize::from(y) + usize::from(x)]
    }

    /// Consume the pixmap, returning the data as straight-alpha RGBA8 bytes.
    pub fn take_unpremultiplied(self) -> Vec<u8> {
        self.buf
            .into_iter()
            .flat_map(|pixel| {
                let Color { r, g, b, a } = pixel.unpremultiply();
                [r, g, b, a]
            })
            .collect()
    }
}
