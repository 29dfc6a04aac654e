//! Process-wide linear congruential noise source.
//!
//! Shared by all oscillator instances. Successive calls from different instances simply
//! consume the same sequence, which is fine for noise and detuning.

use core::sync::atomic::{AtomicU32, Ordering};

static RNG_STATE: AtomicU32 = AtomicU32::new(0x21);

/// Restarts the sequence from `seed`.
#[inline]
pub fn seed(seed: u32) {
    RNG_STATE.store(seed, Ordering::Relaxed);
}

#[inline]
pub fn get_word() -> u32 {
    let next = RNG_STATE
        .load(Ordering::Relaxed)
        .wrapping_mul(1664525)
        .wrapping_add(1013904223);
    RNG_STATE.store(next, Ordering::Relaxed);
    next
}

/// Uniform value in `[0.0, 1.0)`.
#[inline]
pub fn get_float() -> f32 {
    (get_word() >> 8) as f32 * (1.0 / 16777216.0)
}

/// White noise sample in `[-1.0, 1.0)`.
#[inline]
pub fn white() -> f32 {
    2.0 * get_float() - 1.0
}
