//! Single oscillator with MIDI parameter control.

use audio_midi_shell::{AudioGenerator, AudioMidiShell};
use simple_logger::SimpleLogger;

use waves_osc::oscillator::waves_oscillator::{
    CycleParameters, WavesOscillator, PARAM_SHAPE, PARAM_SHIFT_SHAPE,
};
use waves_osc::utils::fixed::{f32_to_q31, q31_to_f32, PARAM_MAX};

const SAMPLE_RATE: u32 = 48000;
const BLOCK_SIZE: usize = 32;

fn main() -> ! {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .unwrap();

    AudioMidiShell::run_forever(SAMPLE_RATE, BLOCK_SIZE, App::new());
}

#[derive(Debug)]
struct App {
    osc: WavesOscillator<'static>,
    parameters: CycleParameters,
    level: f32,
    volume: f32,
}

impl App {
    pub fn new() -> Self {
        Self {
            osc: WavesOscillator::new(),
            parameters: CycleParameters::default(),
            level: 0.0,
            volume: 0.5,
        }
    }
}

impl AudioGenerator for App {
    fn init(&mut self, _block_size: usize) {
        self.osc.init();
        self.parameters.pitch = 60 << 8;
    }

    fn process(&mut self, samples_left: &mut [f32], samples_right: &mut [f32]) {
        let mut out = [0; BLOCK_SIZE];

        self.osc.render(&self.parameters, &mut out);

        for (frame, sample) in out.iter().enumerate() {
            // The oscillator output is hot, bring it back into range.
            let value = q31_to_f32(*sample) * 0.5 * self.level * self.volume;
            samples_left[frame] = value;
            samples_right[frame] = value;
        }
    }

    fn process_midi(&mut self, message: Vec<u8>) {
        match message[0] & 0xF0 {
            0x80 => {
                // Note off
                self.osc.note_off();
                self.level = 0.0;
                log::info!("Note off: {}", message[1]);
            }
            0x90 if message[2] != 0 => {
                // Note on
                self.parameters.pitch = (message[1] as u16) << 8;
                self.level = message[2] as f32 / 127.0;
                self.osc.note_on();
                log::info!("Note on: {}", message[1]);
            }
            0xB0 => {
                // Control change
                let value = message[2] as f32 / 127.0;
                let raw = (value * PARAM_MAX as f32) as u16;
                match message[1] {
                    21 => {
                        self.osc.param_change(PARAM_SHIFT_SHAPE, raw);
                        log::info!("Bank: {}", self.osc.bank_index());
                    }
                    22 => {
                        self.osc.param_change(PARAM_SHAPE, raw);
                        log::info!("Wave: {}", self.osc.wave_index());
                    }
                    23 => {
                        let fine = (value * 255.0) as u16;
                        self.parameters.pitch = (self.parameters.pitch & 0xFF00) | fine;
                        log::info!("Fine: {}", fine);
                    }
                    24 => {
                        self.parameters.shape_lfo = f32_to_q31(value);
                        log::info!("LFO: {}", value);
                    }
                    28 => {
                        self.volume = value;
                        log::info!("Volume: {}", self.volume);
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}
