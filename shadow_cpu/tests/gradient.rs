// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the gradient shadow.

use crate::util::{alpha, assert_quarter_turn_symmetric, config, render_gradient, HALF_BLACK};
use shadow_common::geometry::resolve;
use shadow_common::peniko::Color;
use shadow_common::pixmap::PremulRgba8;
use shadow_common::Error;
use shadow_cpu::{ShadowRenderer, ShadowSynthesizer};

#[test]
fn panel_frame_and_background() {
    let pixmap = render_gradient(&config(20.0, 20.0, HALF_BLACK), 200, 100);

    assert_eq!((pixmap.width(), pixmap.height()), (200, 100));
    assert_eq!(pixmap.sample(100, 50), PremulRgba8::from_color(HALF_BLACK));
    assert_eq!(pixmap.sample(0, 0), PremulRgba8::TRANSPARENT);
    assert_eq!(pixmap.sample(199, 99), PremulRgba8::TRANSPARENT);

    // Halfway through the falloff of the left edge.
    let left = alpha(&pixmap, 10, 50);
    assert!(left > 0 && left < 128, "{left}");
    assert!((60..=75).contains(&left), "{left}");
    // The top edge falls off the same way.
    assert_eq!(alpha(&pixmap, 100, 10), left);
}

#[test]
fn edges_are_continuous() {
    let pixmap = render_gradient(&config(20.0, 20.0, HALF_BLACK), 200, 100);

    for y in 0..20 {
        let expected = pixmap.sample(40, y);
        for x in 40..160 {
            assert_eq!(pixmap.sample(x, y), expected, "({x}, {y})");
        }
    }
}

#[test]
fn falloff_fades_outwards() {
    let pixmap = render_gradient(&config(20.0, 20.0, HALF_BLACK), 200, 100);

    for x in 0..19 {
        assert!(alpha(&pixmap, x, 50) <= alpha(&pixmap, x + 1, 50), "{x}");
    }
    // Along the diagonal of the top-left corner.
    for d in 0..24 {
        assert!(alpha(&pixmap, d, d) <= alpha(&pixmap, d + 1, d + 1), "{d}");
    }
}

#[test]
fn odd_size_is_rounded_down() {
    assert_eq!(resolve(201, 101).width(), 200);
    let pixmap = render_gradient(&config(20.0, 20.0, HALF_BLACK), 201, 101);
    assert_eq!((pixmap.width(), pixmap.height()), (200, 100));
}

#[test]
fn corners_are_rotations_of_each_other() {
    let color = Color::rgba8(20, 40, 60, 200);
    // Fractional radii put the aliased edges next to partially covered wedge pixels.
    for (corner_radius, blur_radius) in [(16.0, 12.0), (7.3, 5.6), (9.25, 6.1)] {
        let pixmap = render_gradient(&config(corner_radius, blur_radius, color), 120, 120);
        assert_quarter_turn_symmetric(&pixmap, 6);
    }
}

#[test]
fn rendering_is_deterministic() {
    let config = config(12.0, 9.0, HALF_BLACK);
    let first = render_gradient(&config, 90, 64);
    let second = render_gradient(&config, 90, 64);
    assert_eq!(first.data_as_u8_slice(), second.data_as_u8_slice());

    // A cached corner draws the same as a fresh one.
    let mut synth = ShadowSynthesizer::new();
    synth.render(&config, 30, 30).unwrap();
    let cached = synth.render(&config, 90, 64).unwrap();
    assert!(!synth.rebuilt_corner());
    assert_eq!(first, cached);
}

#[test]
fn square_corners_without_radius() {
    let color = Color::rgba8(0, 0, 0, 200);
    let pixmap = render_gradient(&config(0.0, 10.0, color), 100, 100);

    // The panel has square corners.
    assert_eq!(alpha(&pixmap, 10, 10), 200);
    assert_eq!(alpha(&pixmap, 89, 89), 200);
    // The corner falloff starts right at the panel's corner.
    let corner = alpha(&pixmap, 9, 9);
    assert!(corner > 0 && corner < 200, "{corner}");
    assert_eq!(alpha(&pixmap, 0, 0), 0);
}

#[test]
fn no_radii_is_a_flat_fill() {
    let color = Color::rgba8(30, 60, 90, 255);
    let pixmap = render_gradient(&config(0.0, 0.0, color), 100, 50);

    let expected = PremulRgba8::from_color(color);
    assert!(pixmap.data().iter().all(|p| *p == expected));
}

#[test]
fn empty_canvas() {
    let pixmap = render_gradient(&config(20.0, 20.0, HALF_BLACK), 1, 100);
    assert!(pixmap.is_empty());
    let pixmap = render_gradient(&config(20.0, 20.0, HALF_BLACK), 100, 0);
    assert!(pixmap.is_empty());
}

#[test]
fn oversized_canvas_is_an_error() {
    let result = ShadowSynthesizer::new().render(&config(20.0, 20.0, HALF_BLACK), 70_000, 100);
    assert_eq!(
        result,
        Err(Error::Allocation {
            width: 70_000,
            height: 100
        })
    );
}

#[test]
fn negative_radius_is_rejected() {
    assert!(matches!(
        shadow_common::config::ShadowConfig::new(-1.0, 4.0, HALF_BLACK),
        Err(Error::InvalidConfig {
            field: "corner_radius",
            ..
        })
    ));
}

#[test]
fn huge_radius_is_rejected() {
    assert!(matches!(
        shadow_common::config::ShadowConfig::new(0.0, 1e39, HALF_BLACK),
        Err(Error::InvalidConfig {
            field: "blur_radius",
            ..
        })
    ));
}
