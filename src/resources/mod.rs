//! Resources definitions.

pub mod waves;

/// Number of samples in one stored single-cycle wave.
pub const WAVE_SIZE: usize = 128;

/// A single-cycle wave.
pub type Wave = [f32; WAVE_SIZE];
