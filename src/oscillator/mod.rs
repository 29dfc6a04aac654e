//! Oscillator engine and its wave sources.

pub mod pseudo_wave;
pub mod wave_directory;
pub mod waves_oscillator;
