// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the blurred shadow.

use crate::util::{alpha, config};
use shadow_common::peniko::Color;
use shadow_cpu::{BlurredShadow, ShadowRenderer};

#[test]
fn blurred_falloff() {
    let config = config(8.0, 10.0, Color::BLACK);
    let pixmap = BlurredShadow::new().render(&config, 200, 100).unwrap();

    assert!(alpha(&pixmap, 100, 50) >= 250);
    assert!(alpha(&pixmap, 0, 0) <= 3);

    let edge = alpha(&pixmap, 10, 50);
    assert!((100..=160).contains(&edge), "{edge}");
    for x in 0..20 {
        assert!(alpha(&pixmap, x, 50) <= alpha(&pixmap, x + 1, 50), "{x}");
    }
}

#[test]
fn blurred_is_symmetric() {
    let config = config(8.0, 10.0, Color::rgba8(0, 0, 0, 160));
    let pixmap = BlurredShadow::new().render(&config, 80, 60).unwrap();

    for y in 0..60 {
        for x in 0..40 {
            let a = alpha(&pixmap, x, y);
            let mirrored = alpha(&pixmap, 79 - x, y);
            assert!(a.abs_diff(mirrored) <= 1, "({x}, {y})");
        }
    }
}
