//! Built-in wave banks.
//!
//! Six banks of single-cycle waves, each bank sorted from dark to bright:
//! - Bank A: sawtooth build-up, adding one harmonic per wave.
//! - Bank B: square build-up, adding one odd harmonic per wave.
//! - Bank C: fundamental plus one partial of increasing order (drawbar-like).
//! - Bank D: ring-modulated partial pairs.
//! - Bank E: band-limited pulse, width sweeping from 1/32 to 15/32.
//! - Bank F: sine frequency-modulated by itself with increasing index.
//!
//! The banks are computed on first use and then shared by all oscillators.

#[allow(unused_imports)]
use num_traits::float::Float;
use spin::Once;

use core::f32::consts::TAU;

use super::{Wave, WAVE_SIZE};

pub const WAVES_A_COUNT: usize = 16;
pub const WAVES_B_COUNT: usize = 16;
pub const WAVES_C_COUNT: usize = 14;
pub const WAVES_D_COUNT: usize = 13;
pub const WAVES_E_COUNT: usize = 15;
pub const WAVES_F_COUNT: usize = 16;

/// Number of stored banks.
pub const NUM_WAVE_BANKS: usize = 6;

const PULSE_HARMONICS: usize = 32;

static WAVE_BANKS: Once<WaveBanks> = Once::new();

/// Storage for the built-in banks.
#[derive(Debug)]
pub struct WaveBanks {
    a: [Wave; WAVES_A_COUNT],
    b: [Wave; WAVES_B_COUNT],
    c: [Wave; WAVES_C_COUNT],
    d: [Wave; WAVES_D_COUNT],
    e: [Wave; WAVES_E_COUNT],
    f: [Wave; WAVES_F_COUNT],
}

impl WaveBanks {
    /// Returns the shared banks, computing them on the first call.
    pub fn get() -> &'static Self {
        WAVE_BANKS.call_once(Self::generate)
    }

    fn generate() -> Self {
        log::debug!("Generating built-in wave banks");

        Self {
            a: core::array::from_fn(|n| {
                build(|x| (1..=n + 1).map(|k| partial(k, x) / k as f32).sum())
            }),
            b: core::array::from_fn(|n| {
                build(|x| {
                    (0..=n)
                        .map(|j| 2 * j + 1)
                        .map(|k| partial(k, x) / k as f32)
                        .sum()
                })
            }),
            c: core::array::from_fn(|n| build(|x| partial(1, x) + 0.5 * partial(n + 2, x))),
            d: core::array::from_fn(|n| build(|x| partial(1, x) * partial(n + 2, x))),
            e: core::array::from_fn(|n| {
                let width = (n + 1) as f32 / PULSE_HARMONICS as f32;
                build(|x| {
                    (1..=PULSE_HARMONICS)
                        .map(|k| (partial(k, x) - partial(k, x - width)) / k as f32)
                        .sum()
                })
            }),
            f: core::array::from_fn(|n| {
                let index = n as f32 * 0.4;
                build(|x| (TAU * x + index * partial(1, x)).sin())
            }),
        }
    }

    /// Waves of bank `index` (0 to 5), `None` for any other index.
    pub fn bank(&self, index: usize) -> Option<&[Wave]> {
        match index {
            0 => Some(&self.a),
            1 => Some(&self.b),
            2 => Some(&self.c),
            3 => Some(&self.d),
            4 => Some(&self.e),
            5 => Some(&self.f),
            _ => None,
        }
    }

    /// All banks in selection order.
    pub fn banks(&self) -> [&[Wave]; NUM_WAVE_BANKS] {
        [&self.a, &self.b, &self.c, &self.d, &self.e, &self.f]
    }
}

#[inline]
fn partial(harmonic: usize, phase: f32) -> f32 {
    (TAU * harmonic as f32 * phase).sin()
}

/// Samples one cycle of `f` and normalizes it to a peak of 1.0.
fn build(f: impl Fn(f32) -> f32) -> Wave {
    let mut wave: Wave = core::array::from_fn(|i| f(i as f32 / WAVE_SIZE as f32));
    let peak = wave.iter().fold(0.0f32, |peak, s| peak.max(s.abs()));

    if peak > 0.0 {
        let scale = 1.0 / peak;
        for s in wave.iter_mut() {
            *s *= scale;
        }
    }

    wave
}
