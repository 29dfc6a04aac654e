//! Pitch conversions.

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::SAMPLE_RATE;

/// Highest note accepted by the pitch conversion.
pub const NOTE_MAX: u8 = 151;

/// Frequency ratio for an interval in semitones.
#[inline]
pub fn semitones_to_ratio(semitones: f32) -> f32 {
    (semitones * (1.0 / 12.0)).exp2()
}

/// Frequency in Hz of a note, 69 being A4 at 440 Hz.
#[inline]
pub fn note_to_frequency(note: f32) -> f32 {
    440.0 * semitones_to_ratio(note - 69.0)
}

/// Phase increment per sample for a note and a fine offset.
///
/// `fine` moves the pitch linearly between `note` and `note + 1` in steps of 1/256.
/// Notes above [`NOTE_MAX`] are clamped and the result never exceeds Nyquist.
#[inline]
pub fn note_to_phase_increment(note: u8, fine: u8) -> f32 {
    let note = note.min(NOTE_MAX);
    let f0 = note_to_frequency(note as f32);
    let f1 = note_to_frequency(note as f32 + 1.0);
    let f = f0 + (f1 - f0) * (fine as f32 * (1.0 / 256.0));

    (f / SAMPLE_RATE).min(0.5)
}

/// Splits a packed host pitch into note (upper byte) and fine offset (lower byte).
#[inline]
pub fn unpack_pitch(pitch: u16) -> (u8, u8) {
    ((pitch >> 8) as u8, (pitch & 0xFF) as u8)
}
