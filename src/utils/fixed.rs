//! Fixed-point conversions used at the host boundary.

/// Scale of a Q31 value.
const Q31_SCALE: f32 = 2147483647.0;

/// Maximum raw value of a 10-bit host parameter.
pub const PARAM_MAX: u16 = 1023;

/// Converts a float to Q31.
///
/// Values outside of `[-1.0, 1.0]` saturate at the Q31 limits.
#[inline]
pub fn f32_to_q31(x: f32) -> i32 {
    (x * Q31_SCALE) as i32
}

/// Converts a Q31 value to a float in `[-1.0, 1.0]`.
#[inline]
pub fn q31_to_f32(x: i32) -> f32 {
    x as f32 / Q31_SCALE
}

/// Normalizes a 10-bit host parameter value to `[0.0, 1.0]`.
///
/// The host is expected to stay within `0..=1023`; larger values map above 1.0.
#[inline]
pub fn param_val_to_f32(value: u16) -> f32 {
    value as f32 / PARAM_MAX as f32
}
