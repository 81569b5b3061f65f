// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mathematical helpers.

// See https://raphlinus.github.io/audio/2018/09/05/sigmoid.html for a little
// explanation of this approximation to the erf function.
/// Approximate the erf function.
pub fn compute_erf7(x: f32) -> f32 {
    // For large `x` the terms below overflow to `inf` and the result becomes `NaN`.
    // `erf(±10) ≈ ±1` well within `f32` precision, so clamping loses nothing.
    let x = x.clamp(-10.0, 10.0) * core::f32::consts::FRAC_2_SQRT_PI;
    let xx = x * x;
    let x = x + (0.24295 + (0.03395 + 0.0104 * xx) * xx) * (x * xx);
    x / (1.0 + x * x).sqrt()
}

/// Convert a shadow layer's blur radius into the standard deviation of its Gaussian.
pub fn radius_to_std_dev(radius: f64) -> f64 {
    if radius > 0.0 {
        0.57735 * radius + 0.5
    } else {
        0.0
    }
}
