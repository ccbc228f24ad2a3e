// Host-side checks of the animation periodicity of curve and color.

use glam::Vec3;
use heart_core::color::{hue, rainbow};
use heart_core::curve::{heart_point, sample_window};
use heart_core::{HeartConfig, HEART_EXTENT};
use std::f32::consts::TAU;

#[test]
fn window_repeats_every_unit_of_scroll() {
    // speed -0.5: speed * t moves one whole unit every 2 s
    let config = HeartConfig::default();
    for &phase in &[0.0f32, 3.4] {
        let a = sample_window(0.25, phase, &config);
        let b = sample_window(2.25, phase, &config);
        let c = sample_window(6.25, phase, &config);
        assert_eq!(a, b);
        assert_eq!(a, c);
    }
}

#[test]
fn window_samples_are_evenly_spaced_in_parameter() {
    let config = HeartConfig::default();
    let window = sample_window(0.0, 0.0, &config);
    for (i, p) in window.iter().enumerate() {
        let expected = heart_point(i as f32 * config.segment_len);
        assert!((*p - expected).length() < 1e-4, "sample {i}");
    }
}

#[test]
fn window_scrolls_backwards_over_time() {
    let config = HeartConfig::default();
    let window = sample_window(0.5, 0.0, &config);
    // frac(-0.25) = 0.75 of a turn
    let expected = heart_point(0.75 * TAU);
    assert!((window[0] - expected).length() < 1e-4);
}

#[test]
fn outline_stays_within_its_extent() {
    for i in 0..720 {
        let p = heart_point(i as f32 * TAU / 720.0);
        assert!(p.abs().max_element() <= HEART_EXTENT + 1e-3, "{p:?}");
    }
}

#[test]
fn hue_cycles_every_ten_seconds() {
    let config = HeartConfig::default();
    for &t in &[0.0f32, 1.5, 4.2, 9.9] {
        let a = rainbow(t, config.hue_rate);
        let b = rainbow(t + 10.0, config.hue_rate);
        assert!((a - b).abs().max_element() < 1e-5, "t={t}: {a:?} vs {b:?}");
    }
    assert!(hue(2.5, config.hue_rate) > hue(2.0, config.hue_rate));
}

#[test]
fn rainbow_is_always_fully_saturated() {
    for i in 0..100 {
        let c = rainbow(i as f32 * 0.173, 0.1);
        assert!((c.max_element() - 1.0).abs() < 1e-5);
        assert!(c.min_element() < 1e-5);
        assert!(c.cmpge(Vec3::ZERO).all());
    }
}
