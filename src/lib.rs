#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

pub mod oscillator;
pub mod resources;
pub mod utils;

/// Audio sample rate in Hz.
pub const SAMPLE_RATE: f32 = 48000.0;
