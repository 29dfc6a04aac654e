//! Morphing wavetable oscillator.
//!
//! Plays one wave out of a bank of stored single-cycle waves, or one of the closed-form
//! waves of the pseudo bank.
//!
//! Parameters:
//! - *SHAPE:* wave selection inside the active bank.
//! - *SHIFT-SHAPE:* bank selection, 6 stored banks followed by the pseudo bank.
//!   Changing the bank always selects its first wave.
//!
//! Control events never touch the waveform being played. They record what has to change
//! and the next call to [`WavesOscillator::render`] applies everything at once, before its
//! first sample, so a buffer is always rendered with a single binding.

#[allow(unused_imports)]
use num_traits::float::Float;

use super::pseudo_wave::PseudoWave;
use super::wave_directory::{Bank, WaveDirectory, PSEUDO_BANK};
use crate::resources::Wave;
use crate::utils::fixed::{f32_to_q31, param_val_to_f32, q31_to_f32};
use crate::utils::parameter_interpolator::ParameterInterpolator;
use crate::utils::units::{note_to_phase_increment, unpack_pitch};
use crate::utils::{random, wave_scan, wrap};
use crate::SAMPLE_RATE;

/// Gain applied before conversion to Q31.
pub const OUTPUT_GAIN: f32 = 2.0;

/// Depth of the per-instance detuning, +/- 0.05 Hz at 48 kHz.
pub const IMPERFECTION_DEPTH: f32 = 1.0417e-6;

/// Host id of the SHAPE parameter.
pub const PARAM_SHAPE: u16 = 6;

/// Host id of the SHIFT-SHAPE parameter.
pub const PARAM_SHIFT_SHAPE: u16 = 7;

const DEFAULT_PHASE_INCREMENT: f32 = 440.0 / SAMPLE_RATE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamId {
    Shape,
    ShiftShape,
}

impl ParamId {
    /// Maps a host parameter id, `None` for ids this oscillator does not use.
    pub fn from_index(index: u16) -> Option<Self> {
        match index {
            PARAM_SHAPE => Some(Self::Shape),
            PARAM_SHIFT_SHAPE => Some(Self::ShiftShape),
            _ => None,
        }
    }
}

/// Values supplied by the host with every render cycle.
#[derive(Debug, Default, Clone, Copy)]
pub struct CycleParameters {
    /// Note in the upper byte (0 - 151), fine offset towards the next note in the lower byte.
    pub pitch: u16,

    /// Modulation value in Q31, ramped across the buffer.
    pub shape_lfo: i32,
}

/// Last values set by the host.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Wave position inside the active bank.
    /// Range: 0.0 - 1.0
    pub shape: f32,

    /// Bank position.
    /// Range: 0.0 - 1.0
    pub shift_shape: f32,

    /// Wave index derived from `shape` and the size of the active bank.
    pub wave_index: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct PendingChanges {
    wave: bool,
    reset: bool,
}

impl PendingChanges {
    #[inline]
    fn take(&mut self) -> Self {
        core::mem::take(self)
    }
}

/// Waveform bound for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Binding<'a> {
    Table(&'a Wave),
    Pseudo(PseudoWave),
}

impl<'a> Binding<'a> {
    /// Resolves `wave_index` inside `bank`, wrapping it around the bank size.
    pub fn resolve(bank: Bank<'a>, wave_index: usize) -> Self {
        match bank {
            Bank::Table(waves) => waves
                .get(wave_index % waves.len().max(1))
                .map_or(Self::Pseudo(PseudoWave::from_index(wave_index)), Self::Table),
            Bank::Pseudo => Self::Pseudo(PseudoWave::from_index(wave_index)),
        }
    }
}

#[derive(Debug, Clone)]
struct State<'a> {
    binding: Binding<'a>,

    // Bank selected by the host. Becomes effective with the next binding.
    bank: Bank<'a>,
    bank_index: usize,

    phase: f32,
    phase_increment: f32,

    lfo: f32,
    lfo_ramped: f32,

    previous_parabola: f32,
    imperfection: f32,

    pending: PendingChanges,
}

impl<'a> State<'a> {
    fn new(directory: &WaveDirectory<'a>) -> Self {
        let bank = directory.bank(0);

        Self {
            binding: Binding::resolve(bank, 0),
            bank,
            bank_index: 0,
            phase: 0.0,
            phase_increment: DEFAULT_PHASE_INCREMENT,
            lfo: 0.0,
            lfo_ramped: 0.0,
            previous_parabola: 0.0,
            imperfection: random::white() * IMPERFECTION_DEPTH,
            pending: PendingChanges::default(),
        }
    }

    fn reset(&mut self) {
        // Only the carrier restarts, the modulation ramp continues from `lfo_ramped`.
        self.phase = 0.0;
        self.previous_parabola = 0.0;
    }
}

#[derive(Debug, Clone)]
pub struct WavesOscillator<'a> {
    directory: WaveDirectory<'a>,
    parameters: Parameters,
    state: State<'a>,
}

impl Default for WavesOscillator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl WavesOscillator<'static> {
    /// Oscillator playing the built-in banks.
    pub fn new() -> Self {
        Self::with_directory(WaveDirectory::builtin())
    }
}

impl<'a> WavesOscillator<'a> {
    pub fn with_directory(directory: WaveDirectory<'a>) -> Self {
        Self {
            state: State::new(&directory),
            parameters: Parameters::default(),
            directory,
        }
    }

    /// Returns to the first wave of the first bank with phase 0 and draws a new detuning.
    pub fn init(&mut self) {
        self.state = State::new(&self.directory);
        self.parameters = Parameters::default();

        log::debug!("Oscillator init, detuning {:e}", self.state.imperfection);
    }

    /// Requests a phase reset at the start of the next render cycle.
    pub fn note_on(&mut self) {
        self.state.pending.reset = true;
    }

    pub fn note_off(&mut self) {}

    /// Handles a host parameter change. Unknown ids are ignored.
    pub fn param_change(&mut self, index: u16, value: u16) {
        match ParamId::from_index(index) {
            Some(ParamId::Shape) => self.set_shape(value),
            Some(ParamId::ShiftShape) => self.set_bank(value),
            None => log::trace!("Ignoring parameter {index}"),
        }
    }

    /// Selects the wave inside the active bank from a 10-bit value.
    pub fn set_shape(&mut self, value: u16) {
        let shape = param_val_to_f32(value);
        let last_wave = self.state.bank.count().saturating_sub(1);

        self.parameters.shape = shape;
        self.parameters.wave_index = (shape * last_wave as f32).round() as usize;
        self.state.pending.wave = true;

        log::debug!("Wave {} selected", self.parameters.wave_index);
    }

    /// Selects the bank from a 10-bit value and rewinds to its first wave.
    pub fn set_bank(&mut self, value: u16) {
        let shift_shape = param_val_to_f32(value);
        let bank_index = (shift_shape * PSEUDO_BANK as f32).round() as usize;
        let bank_index = bank_index % self.directory.len();

        self.parameters.shift_shape = shift_shape;
        self.parameters.wave_index = 0;
        self.state.bank = self.directory.bank(bank_index);
        self.state.bank_index = bank_index;
        self.state.pending.wave = true;

        log::debug!("Bank {} selected, {} waves", bank_index, self.state.bank.count());
    }

    /// Sets the phase increment of the played note plus the detuning of this instance.
    #[inline]
    pub fn update_pitch(&mut self, phase_increment: f32) {
        self.state.phase_increment = phase_increment + self.state.imperfection;
    }

    /// Renders one buffer for the host pitch and modulation in `parameters`.
    #[inline]
    pub fn render(&mut self, parameters: &CycleParameters, out: &mut [i32]) {
        let (note, fine) = unpack_pitch(parameters.pitch);

        self.render_with_increment(
            note_to_phase_increment(note, fine),
            q31_to_f32(parameters.shape_lfo),
            out,
        );
    }

    /// Renders one buffer with a phase increment already resolved from the pitch.
    ///
    /// Pending changes are applied first, then `out.len()` samples are written while the
    /// modulation value ramps linearly to `lfo`.
    pub fn render_with_increment(&mut self, phase_increment: f32, lfo: f32, out: &mut [i32]) {
        let pending = self.state.pending.take();

        self.update_pitch(phase_increment);

        if pending.wave {
            self.state.binding = Binding::resolve(self.state.bank, self.parameters.wave_index);
        }

        if pending.reset {
            self.state.reset();
        }

        self.state.lfo = lfo;

        let binding = self.state.binding;
        let increment = self.state.phase_increment;
        let mut phase = self.state.phase;
        let mut previous_parabola = self.state.previous_parabola;
        let mut lfo_ramp = ParameterInterpolator::new(&mut self.state.lfo_ramped, lfo, out.len());

        for out_sample in out.iter_mut() {
            let sig = match binding {
                Binding::Table(wave) => wave_scan(wave, phase),
                Binding::Pseudo(wave) => wave.render(phase, &mut previous_parabola),
            };

            *out_sample = f32_to_q31(sig * OUTPUT_GAIN);

            phase = wrap(phase + increment);
            lfo_ramp.next();
        }

        self.state.phase = phase;
        self.state.previous_parabola = previous_parabola;
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn directory(&self) -> &WaveDirectory<'a> {
        &self.directory
    }

    /// Waveform used by the last render cycle.
    pub fn binding(&self) -> Binding<'a> {
        self.state.binding
    }

    pub fn wave_index(&self) -> usize {
        self.parameters.wave_index
    }

    /// Index of the bank selected by the host.
    pub fn bank_index(&self) -> usize {
        self.state.bank_index
    }

    /// Number of waves in the bank selected by the host.
    pub fn bank_count(&self) -> usize {
        self.state.bank.count()
    }

    pub fn phase(&self) -> f32 {
        self.state.phase
    }

    /// Phase increment including the detuning.
    pub fn phase_increment(&self) -> f32 {
        self.state.phase_increment
    }

    /// Modulation value reached at the end of the last buffer.
    ///
    /// Kept for continuity between buffers; the render loop itself does not consume it.
    pub fn lfo(&self) -> f32 {
        self.state.lfo_ramped
    }

    /// Last modulation target received.
    pub fn lfo_target(&self) -> f32 {
        self.state.lfo
    }

    pub fn imperfection(&self) -> f32 {
        self.state.imperfection
    }

    /// Overrides the detuning drawn at init, e.g. to render several voices identically.
    pub fn set_imperfection(&mut self, imperfection: f32) {
        self.state.imperfection = imperfection;
    }
}
