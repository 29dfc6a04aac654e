//! Closed-form waves of the pseudo bank.

use crate::utils::fast_math::{
    parabola, saw, saw_down, saw_up, sine, square, square_down, square_up, wave_sine,
};
use crate::utils::random;

/// Number of waves in the pseudo bank.
pub const PSEUDO_WAVE_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PseudoWave {
    Sine,
    FastSine,
    Saw,
    SawDown,
    SawUp,
    Square,
    SquareDown,
    SquareUp,
    /// First difference of a parabolic wave. Keeps the previous parabola value as state.
    DifferencedParabolic,
    WhiteNoise,
}

impl PseudoWave {
    /// Wave at position `index` of the pseudo bank, taken modulo the bank size.
    pub fn from_index(index: usize) -> Self {
        match index % PSEUDO_WAVE_COUNT {
            0 => Self::Sine,
            1 => Self::FastSine,
            2 => Self::Saw,
            3 => Self::SawDown,
            4 => Self::SawUp,
            5 => Self::Square,
            6 => Self::SquareDown,
            7 => Self::SquareUp,
            8 => Self::DifferencedParabolic,
            _ => Self::WhiteNoise,
        }
    }

    /// Evaluates the wave at `phase`.
    ///
    /// `previous_parabola` is read and updated by [`PseudoWave::DifferencedParabolic`] only.
    #[inline]
    pub fn render(self, phase: f32, previous_parabola: &mut f32) -> f32 {
        match self {
            Self::Sine => sine(phase),
            Self::FastSine => wave_sine(phase),
            Self::Saw => saw(phase),
            Self::SawDown => saw_down(phase),
            Self::SawUp => saw_up(phase),
            Self::Square => square(phase),
            Self::SquareDown => square_down(phase),
            Self::SquareUp => square_up(phase),
            Self::DifferencedParabolic => {
                let z = *previous_parabola;
                *previous_parabola = parabola(phase);
                *previous_parabola - z
            }
            Self::WhiteNoise => random::white(),
        }
    }
}
