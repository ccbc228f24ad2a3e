// Host-side end-to-end checks of per-pixel composition and the frame clock.

use glam::{Vec2, Vec3};
use heart_core::color::{glow, max_glow};
use heart_core::curve::sample_window;
use heart_core::raster::render_frame;
use heart_core::segments::{instance_distance, segments};
use heart_core::{
    tone_map, AnimationClock, Compositor, FrameParams, HeartConfig, HeartError, HeartUniforms,
    Viewport, HEART_EXTENT, MAX_HEART_INSTANCES,
};
use std::time::Duration;

// Inverse of `Viewport::position`.
fn frag_for(viewport: Viewport, pos: Vec2, vertical_offset: f32) -> Vec2 {
    let uv = Vec2::new(
        0.5 - pos.x,
        0.5 - (pos.y - vertical_offset) * viewport.aspect(),
    );
    uv * viewport.resolution()
}

#[test]
fn first_sample_glows_at_its_cap() {
    let config = HeartConfig::default();
    let compositor = Compositor::new(config.clone()).unwrap();
    let frame = FrameParams::new(Viewport::new(800, 600), 0.0);
    let scale = frame.curve_scale(config.viewport_scale);

    // the first rendered point of the outline: where piece 0 starts
    let window = sample_window(0.0, 0.0, &config);
    let start = segments(&window, scale)[0].start;

    let d = instance_distance(0.0, 0.0, start, scale, &config);
    assert!(d < 1e-5, "distance {d}");
    let g = glow(d, config.glow_radius, config.glow_intensity);
    assert!(g.is_finite());
    assert!(g <= max_glow(config.glow_radius, config.glow_intensity));
    assert!(g > 1000.0, "glow {g}");

    // hue 0 is red; the pixel is saturated in that channel
    let color = compositor.shade(&frame, frag_for(frame.viewport, start, config.vertical_offset));
    assert!(color.x > 0.99, "{color:?}");
    assert_eq!(color.w, 1.0);
}

#[test]
fn far_field_glow_vanishes_at_any_time() {
    let config = HeartConfig::default();
    let far = Vec2::splat(10.0 * HEART_EXTENT);
    for i in 0..40 {
        let time = i as f32 * 0.73;
        for &phase in config.phase_offsets.iter() {
            let d = instance_distance(time, phase, far, 1.0, &config);
            let g = glow(d, config.glow_radius, config.glow_intensity);
            assert!(g < 1e-4, "t={time}: glow {g}");
        }
    }
}

#[test]
fn far_off_screen_position_collects_no_light() {
    let compositor = Compositor::default();
    for i in 0..10 {
        let frame = FrameParams::new(Viewport::new(640, 480), i as f32 * 1.9);
        let pos = Vec2::new(40.0, -40.0);
        assert!(compositor.glow_sum(&frame, pos) < 1e-4);
        assert!(compositor.accumulate(&frame, pos).max_element() < 1e-4);
    }
}

#[test]
fn equal_wall_clock_deltas_give_identical_frames() {
    let compositor = Compositor::default();
    let viewport = Viewport::new(40, 30);
    let mut a = AnimationClock::new();
    let mut b = AnimationClock::new();
    let mut previous = None;
    for _ in 0..3 {
        a.advance(Duration::from_millis(16));
        b.advance(Duration::from_millis(16));
        let fa = a.frame_params(viewport);
        let fb = b.frame_params(viewport);
        assert_eq!(fa, fb);
        let pixels = render_frame(&compositor, &fa).unwrap();
        assert_eq!(pixels, render_frame(&compositor, &fb).unwrap());
        if let Some(prev) = previous.replace(fa.time) {
            assert!(fa.time > prev);
        }
    }
    // one advance later only time has moved, by exactly the delta
    let before = a.frame_params(viewport);
    a.advance(Duration::from_millis(16));
    let after = a.frame_params(viewport);
    assert_eq!(after.viewport, before.viewport);
    assert_eq!(after.scale_height, before.scale_height);
    assert!((after.time - before.time - 0.016).abs() < 1e-6);
}

#[test]
fn tone_map_is_strictly_increasing_below_saturation() {
    let mut last = -1.0f32;
    for i in 0..=48 {
        let x = i as f32 * 0.25;
        let c = tone_map(Vec3::splat(x));
        assert!(c.x >= 0.0 && c.x < 1.0, "x={x}: {}", c.x);
        assert!(c.x > last, "x={x}: {} after {last}", c.x);
        last = c.x;
    }
    assert_eq!(tone_map(Vec3::ZERO), Vec3::ZERO);
}

#[test]
fn tone_map_saturates_to_one_in_f32() {
    assert!(tone_map(Vec3::splat(16.0)).x < 1.0);
    assert_eq!(tone_map(Vec3::splat(17.0)).x, 1.0);
    assert_eq!(tone_map(Vec3::splat(1e9)), Vec3::ONE);
    // the glow core sits far past saturation
    let peak = max_glow(heart_core::GLOW_RADIUS, heart_core::GLOW_INTENSITY);
    assert!(peak > 17.0);
    assert_eq!(tone_map(Vec3::new(peak, 0.0, 0.0)).x, 1.0);
}

#[test]
fn config_validation_rejects_bad_setups() {
    assert_eq!(
        HeartConfig::default().with_phase_offsets(&[]).validate(),
        Err(HeartError::NoInstances)
    );
    assert_eq!(
        HeartConfig::default()
            .with_phase_offsets(&[0.0, 1.0, 2.0, 3.0, 4.0])
            .validate(),
        Err(HeartError::TooManyInstances {
            count: 5,
            max: MAX_HEART_INSTANCES
        })
    );
    let bad_speed = HeartConfig {
        scroll_speed: f32::NAN,
        ..HeartConfig::default()
    };
    assert!(matches!(
        bad_speed.validate(),
        Err(HeartError::NotFinite {
            name: "scroll_speed",
            ..
        })
    ));
    let no_radius = HeartConfig {
        glow_radius: 0.0,
        ..HeartConfig::default()
    };
    assert_eq!(
        Compositor::new(no_radius).map(|_| ()),
        Err(HeartError::NotPositive {
            name: "glow_radius",
            value: 0.0
        })
    );
    assert!(HeartConfig::default().validate().is_ok());
}

#[test]
fn extra_instances_add_light() {
    let single = Compositor::new(HeartConfig::default().with_phase_offsets(&[0.0])).unwrap();
    let double = Compositor::default();
    let frame = FrameParams::new(Viewport::new(320, 240), 1.25);
    let pos = Vec2::new(0.05, 0.03);
    assert!(double.glow_sum(&frame, pos) > single.glow_sum(&frame, pos));
}

#[test]
fn uniform_block_mirrors_config_and_frame() {
    assert_eq!(std::mem::size_of::<HeartUniforms>(), 64);
    let config = HeartConfig::default();
    let frame = FrameParams::new(Viewport::new(1280, 720), 3.5);
    let u = HeartUniforms::new(&config, &frame);
    assert_eq!(u.resolution, [1280.0, 720.0]);
    assert_eq!(u.time, 3.5);
    assert_eq!(u.phase_count, 2);
    assert_eq!(u.phases, [0.0, 3.4, 0.0, 0.0]);
    assert_eq!(u.glow_radius, config.glow_radius);
    assert_eq!(u.hue_rate, config.hue_rate);
    assert_eq!(u.as_bytes().len(), 64);
}

#[test]
fn rendered_frame_has_light_and_dark() {
    let compositor = Compositor::default();
    let frame = FrameParams::new(Viewport::new(96, 72), 0.6);
    let pixels = render_frame(&compositor, &frame).unwrap();
    let brightest = pixels.chunks_exact(4).map(|p| p[0].max(p[1]).max(p[2])).max();
    assert!(brightest.unwrap_or(0) > 128);
    // corners are far from the outline
    assert!(pixels[0] < 128 && pixels[1] < 128 && pixels[2] < 128);
}

#[test]
fn empty_viewport_is_an_error() {
    let compositor = Compositor::default();
    let frame = FrameParams::new(Viewport::new(0, 10), 0.0);
    assert_eq!(
        render_frame(&compositor, &frame),
        Err(HeartError::EmptyViewport {
            width: 0,
            height: 10
        })
    );
}
