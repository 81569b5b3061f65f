// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions shared across different tests.

use shadow_common::config::ShadowConfig;
use shadow_common::peniko::Color;
use shadow_cpu::{Pixmap, ShadowRenderer, ShadowSynthesizer};

pub(crate) const HALF_BLACK: Color = Color::rgba8(0, 0, 0, 128);

pub(crate) fn config(corner_radius: f64, blur_radius: f64, color: Color) -> ShadowConfig {
    ShadowConfig::new(corner_radius, blur_radius, color).unwrap()
}

pub(crate) fn render_gradient(config: &ShadowConfig, width: u32, height: u32) -> Pixmap {
    ShadowSynthesizer::new()
        .render(config, width, height)
        .unwrap()
}

pub(crate) fn alpha(pixmap: &Pixmap, x: u16, y: u16) -> u8 {
    pixmap.sample(x, y).a
}

/// Assert that rotating the pixmap by 90° about its center leaves it unchanged, up to
/// `tolerance` per alpha value.
pub(crate) fn assert_quarter_turn_symmetric(pixmap: &Pixmap, tolerance: u8) {
    assert_eq!(pixmap.width(), pixmap.height(), "pixmap must be square");
    let last = pixmap.width() - 1;

    for y in 0..pixmap.height() {
        for x in 0..pixmap.width() {
            let a = alpha(pixmap, x, y);
            let rotated = alpha(pixmap, last - y, x);
            assert!(
                a.abs_diff(rotated) <= tolerance,
                "alpha at ({x}, {y}) is {a}, but {rotated} at ({}, {x})",
                last - y
            );
        }
    }
}
