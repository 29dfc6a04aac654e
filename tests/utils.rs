//! Tests for the numeric utilities

use core::f32::consts::PI;

use waves_osc::utils::fast_math::*;
use waves_osc::utils::fixed::*;
use waves_osc::utils::parameter_interpolator::ParameterInterpolator;
use waves_osc::utils::units::*;
use waves_osc::utils::{random, wave_scan, wrap};
use waves_osc::SAMPLE_RATE;

#[test]
fn faster_sin_tracks_sine() {
    for i in 0..=1000 {
        let x = -PI + 2.0 * PI * i as f32 / 1000.0;
        assert!((faster_sin(x) - x.sin()).abs() < 2e-3, "x = {x}");
    }
}

#[test]
fn wave_sine_tracks_sine() {
    for i in 0..1000 {
        let phase = i as f32 / 1000.0;
        assert!(
            (wave_sine(phase) - sine(phase)).abs() < 2e-3,
            "phase = {phase}"
        );
    }
}

#[test]
fn sine_reference_values() {
    assert_eq!(sine(0.0), 0.0);
    assert!((sine(0.25) - 1.0).abs() < 1e-6);
    assert!(sine(0.5).abs() < 1e-6);
    assert!((sine(0.75) + 1.0).abs() < 1e-6);
}

#[test]
fn saw_and_square_orientation() {
    assert_eq!(saw_up(0.0), -1.0);
    assert_eq!(saw_down(0.0), 1.0);
    assert_eq!(saw_up(0.5), 0.0);
    assert_eq!(square_up(0.25), -1.0);
    assert_eq!(square_up(0.75), 1.0);
    assert_eq!(square_down(0.25), 1.0);
    assert_eq!(square_down(0.75), -1.0);

    for i in 0..64 {
        let phase = i as f32 / 64.0;
        assert!((saw(phase) - saw_up(phase)).abs() < 1e-6);
        assert_eq!(square(phase), square_down(phase));
        assert_eq!(saw_down(phase), -saw_up(phase));
    }
}

#[test]
fn parabola_range() {
    assert_eq!(parabola(0.0), 1.0);
    assert_eq!(parabola(0.5), -1.0);
    assert_eq!(parabola(0.25), -0.5);

    for i in 0..128 {
        let p = parabola(i as f32 / 128.0);
        assert!((-1.0..=1.0).contains(&p));
    }
}

#[test]
fn q31_conversion() {
    assert_eq!(f32_to_q31(0.0), 0);
    assert_eq!(f32_to_q31(0.5), 1 << 30);
    assert_eq!(f32_to_q31(2.0), i32::MAX);
    assert_eq!(f32_to_q31(-2.0), i32::MIN);

    assert_eq!(q31_to_f32(0), 0.0);
    assert!((q31_to_f32(1 << 30) - 0.5).abs() < 1e-6);
    assert!((q31_to_f32(i32::MAX) - 1.0).abs() < 1e-6);
}

#[test]
fn parameter_values_are_normalized() {
    assert_eq!(param_val_to_f32(0), 0.0);
    assert_eq!(param_val_to_f32(PARAM_MAX), 1.0);
    assert!((param_val_to_f32(512) - 0.5005).abs() < 1e-3);
}

#[test]
fn note_to_phase_increment_follows_equal_temperament() {
    let a4 = note_to_phase_increment(69, 0);
    assert!((a4 - 440.0 / SAMPLE_RATE).abs() < 1e-7);

    let a5 = note_to_phase_increment(81, 0);
    assert!((a5 / a4 - 2.0).abs() < 1e-4);

    let almost_b_flat = note_to_phase_increment(69, 255);
    let b_flat = note_to_phase_increment(70, 0);
    assert!(almost_b_flat > a4 && almost_b_flat < b_flat);

    assert_eq!(note_to_phase_increment(255, 0), note_to_phase_increment(NOTE_MAX, 0));
    assert!(note_to_phase_increment(NOTE_MAX, 255) <= 0.5);
}

#[test]
fn pitch_unpacking() {
    assert_eq!(unpack_pitch((60 << 8) | 128), (60, 128));
    assert_eq!(unpack_pitch(0xFFFF), (255, 255));
}

#[test]
fn wave_scan_interpolates_cyclically() {
    let wave = [0.0, 1.0, 0.0, -1.0];

    assert_eq!(wave_scan(&wave, 0.0), 0.0);
    assert_eq!(wave_scan(&wave, 0.25), 1.0);
    assert!((wave_scan(&wave, 0.125) - 0.5).abs() < 1e-6);
    // Between the last and the first sample.
    assert!((wave_scan(&wave, 0.875) + 0.5).abs() < 1e-6);
    assert_eq!(wave_scan(&[], 0.3), 0.0);
}

#[test]
fn wrap_stays_in_unit_interval() {
    assert_eq!(wrap(1.25), 0.25);
    assert_eq!(wrap(3.5), 0.5);
    assert_eq!(wrap(-0.25), 0.75);
    assert_eq!(wrap(-1e-10), 0.0);

    for x in [0.0, 0.999_999_9, 1.0, 7.000_001, -3.3, 1e6 + 0.5] {
        let w = wrap(x);
        assert!((0.0..1.0).contains(&w), "wrap({x}) = {w}");
    }
}

#[test]
fn parameter_interpolator_is_linear() {
    let mut state = 0.25;
    let target = 1.0;
    let size = 8;

    {
        let mut ramp = ParameterInterpolator::new(&mut state, target, size);
        assert_eq!(ramp.increment(), 0.75 / 8.0);

        for k in 0..size {
            let expected = 0.25 + k as f32 * (target - 0.25) / size as f32;
            assert!((ramp.next() - expected).abs() < 1e-6);
        }
    }

    assert_eq!(state, target);
}

#[test]
fn parameter_interpolator_lands_on_target() {
    for size in [3, 7, 100, 4096] {
        let mut state = -0.2;
        let target = 0.7;
        {
            let mut ramp = ParameterInterpolator::new(&mut state, target, size);
            for k in 0..size {
                let expected = -0.2 + k as f32 * ramp.increment();
                assert_eq!(ramp.next(), expected);
            }
            assert_eq!(ramp.value(), target);
        }
        assert_eq!(state, target);
    }
}

#[test]
fn parameter_interpolator_partial_ramp() {
    let mut state = 0.0;
    {
        let mut ramp = ParameterInterpolator::new(&mut state, 1.0, 4);
        ramp.next();
        ramp.next();
    }
    assert_eq!(state, 0.5);
}

#[test]
fn parameter_interpolator_without_samples_keeps_state() {
    let mut state = 0.3;
    {
        let ramp = ParameterInterpolator::new(&mut state, 0.9, 0);
        assert_eq!(ramp.increment(), 0.0);
        assert_eq!(ramp.value(), 0.3);
    }
    assert_eq!(state, 0.3);
}

#[test]
fn white_noise_range() {
    for _ in 0..10000 {
        let x = random::white();
        assert!((-1.0..1.0).contains(&x));
    }
}
