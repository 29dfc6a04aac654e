//! Utility functions.
//!
//! Numeric helpers shared by the oscillator: fixed-point conversion, fast waveform kernels,
//! pitch conversion, random numbers and parameter ramps.

pub mod fast_math;
pub mod fixed;
pub mod parameter_interpolator;
pub mod random;
pub mod units;

/// Reads a single-cycle wave at `phase` with linear interpolation.
///
/// The table is treated as cyclic: the neighbour of the last sample is the first one.
/// `phase` is expected in `[0.0, 1.0)`, values outside are wrapped.
#[inline]
pub fn wave_scan(wave: &[f32], phase: f32) -> f32 {
    let size = wave.len();
    if size == 0 {
        return 0.0;
    }

    let p = wrap(phase) * size as f32;
    let p_integral = p as usize;
    let p_fractional = p - (p_integral as f32);

    let a = wave[p_integral % size];
    let b = wave[(p_integral + 1) % size];

    a + (b - a) * p_fractional
}

/// Removes the integral part of `x`, keeping the result in `[0.0, 1.0)`.
#[inline]
pub fn wrap(x: f32) -> f32 {
    let integral = x as i32 as f32;
    let mut fractional = x - integral;

    if fractional < 0.0 {
        fractional += 1.0;
    }

    // A tiny negative fraction rounds up to exactly 1.0 when shifted.
    if fractional >= 1.0 {
        0.0
    } else {
        fractional
    }
}
