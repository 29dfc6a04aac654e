//! Waveform kernels addressed by phase.
//!
//! All phase arguments are normalized, one cycle spans `[0.0, 1.0)`. Outputs are in
//! `[-1.0, 1.0]` unless stated otherwise.

#[allow(unused_imports)]
use num_traits::float::Float;

use core::f32::consts::TAU;

const FOUR_OVER_PI: f32 = 1.273_239_5;
const FOUR_OVER_PI_SQ: f32 = 0.405_284_73;
const Q: f32 = 0.776_330_23;
const P: f32 = 0.223_085_1;

/// Reference sine.
#[inline]
pub fn sine(phase: f32) -> f32 {
    (TAU * phase).sin()
}

/// Parabolic sine approximation with one correction step.
///
/// Valid for `x` in `[-PI, PI]`, maximum error is below 0.002.
#[inline]
pub fn faster_sin(x: f32) -> f32 {
    let q = FOUR_OVER_PI * x - FOUR_OVER_PI_SQ * x * x.abs();
    q * (Q + P.copysign(x) * q)
}

/// Fast sine addressed by phase.
///
/// The phase is folded into `[-PI, PI]` around the centre of the cycle, so
/// `wave_sine(x) ≈ sine(x)` for any `x`.
#[inline]
pub fn wave_sine(phase: f32) -> f32 {
    let k = phase as i32;
    let half = if phase < 0.0 { -0.5 } else { 0.5 };
    faster_sin(((half + k as f32) - phase) * TAU)
}

/// Rising sawtooth, `-1.0` at phase 0.
#[inline]
pub fn saw(phase: f32) -> f32 {
    2.0 * phase - 1.0
}

/// Rising sawtooth centred on the integral part of the phase.
#[inline]
pub fn saw_up(phase: f32) -> f32 {
    let k = phase as i32;
    2.0 * (phase - k as f32 - 0.5)
}

/// Falling sawtooth, `1.0` at phase 0.
#[inline]
pub fn saw_down(phase: f32) -> f32 {
    -saw_up(phase)
}

/// Square starting high, like the sign of a sine.
#[inline]
pub fn square(phase: f32) -> f32 {
    if phase < 0.5 {
        1.0
    } else {
        -1.0
    }
}

/// Square starting low.
#[inline]
pub fn square_up(phase: f32) -> f32 {
    -square(phase)
}

/// Square starting high.
#[inline]
pub fn square_down(phase: f32) -> f32 {
    square(phase)
}

/// Parabolic wave, `1.0` at phase 0 and `-1.0` at phase 0.5.
///
/// The integral of a sawtooth; its first difference is a sawtooth scaled by the phase
/// increment.
#[inline]
pub fn parabola(phase: f32) -> f32 {
    let s = 2.0 * phase - 1.0;
    2.0 * s * s - 1.0
}

