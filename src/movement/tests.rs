//! Movement domain: tests for input sampling and the locomotion state machine.

use bevy::prelude::Vec2;

use super::locomotion::angle_between_deg;
use super::sampler::{distance_to_line, sanitize_axes};
use super::{InputSample, InputSampler, Locomotion, LocomotionState, MovementTuning};
use crate::core::TimerSet;

fn approx_eq(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-4
}

fn sample(move_vector: Vec2) -> InputSample {
    InputSample {
        move_vector,
        previous_move: Vec2::ZERO,
        has_neutral_reset: false,
    }
}

// -----------------------------------------------------------------------------
// Geometry helpers
// -----------------------------------------------------------------------------

#[test]
fn test_distance_to_line_perpendicular() {
    let distance = distance_to_line(Vec2::new(1.0, 1.0), Vec2::new(1.0, -1.0));
    assert!((distance - 1.0).abs() < 1e-6);
}

#[test]
fn test_distance_to_line_through_origin_is_zero() {
    let distance = distance_to_line(Vec2::new(0.0, 1.0), Vec2::new(0.0, -1.0));
    assert_eq!(distance, 0.0);
}

#[test]
fn test_distance_to_line_coincident_points() {
    let distance = distance_to_line(Vec2::new(0.6, 0.8), Vec2::new(0.6, 0.8));
    assert!((distance - 1.0).abs() < 1e-6);
}

#[test]
fn test_angle_between_handles_zero_vectors() {
    assert_eq!(angle_between_deg(Vec2::ZERO, Vec2::X), 0.0);
    assert_eq!(angle_between_deg(Vec2::Y, Vec2::ZERO), 0.0);
    assert!((angle_between_deg(Vec2::X, Vec2::NEG_X) - 180.0).abs() < 1e-3);
    assert!((angle_between_deg(Vec2::X, Vec2::new(1.0, 1.0)) - 45.0).abs() < 1e-3);
}

// -----------------------------------------------------------------------------
// Input sampler tests
// -----------------------------------------------------------------------------

#[test]
fn test_sanitize_clamps_and_drops_nan() {
    assert_eq!(sanitize_axes(Vec2::new(2.0, -3.0)), Vec2::new(1.0, -1.0));
    assert_eq!(sanitize_axes(Vec2::new(f32::NAN, 0.5)), Vec2::new(0.0, 0.5));
    assert_eq!(
        sanitize_axes(Vec2::new(f32::INFINITY, 0.0)),
        Vec2::new(0.0, 0.0)
    );
}

#[test]
fn test_dead_zone_zeroes_small_input() {
    let mut sampler = InputSampler::default();
    let result = sampler.sample(Vec2::new(0.1, 0.1), 0.2, 0.4);
    assert_eq!(result.move_vector, Vec2::ZERO);
}

#[test]
fn test_input_outside_dead_zone_passes_through() {
    let mut sampler = InputSampler::default();
    let result = sampler.sample(Vec2::new(0.5, 0.0), 0.2, 0.4);
    assert_eq!(result.move_vector, Vec2::new(0.5, 0.0));
}

#[test]
fn test_previous_move_is_last_frame_after_dead_zone() {
    let mut sampler = InputSampler::default();

    sampler.sample(Vec2::new(1.0, 0.0), 0.2, 0.4);
    let second = sampler.sample(Vec2::new(0.1, 0.0), 0.2, 0.4);
    assert_eq!(second.previous_move, Vec2::new(1.0, 0.0));

    let third = sampler.sample(Vec2::new(0.0, 1.0), 0.2, 0.4);
    assert_eq!(third.previous_move, Vec2::ZERO);
}

#[test]
fn test_neutral_line_starts_from_raw_previous_sample() {
    let mut sampler = InputSampler::default();

    // Inside a wide dead zone: moves nothing but is still the line's start
    let first = sampler.sample(Vec2::new(0.3, 0.5), 0.6, 0.1);
    assert_eq!(first.move_vector, Vec2::ZERO);
    sampler.clear_neutral_reset();

    // Sliding sideways stays 0.5 from the center even though the
    // previous move vector was zero
    let second = sampler.sample(Vec2::new(0.5, 0.5), 0.6, 0.1);
    assert_eq!(second.previous_move, Vec2::ZERO);
    assert_eq!(second.move_vector, Vec2::new(0.5, 0.5));
    assert!(!second.has_neutral_reset);
}

#[test]
fn test_neutral_reset_latches_until_cleared() {
    let mut sampler = InputSampler::default();

    // From rest to full right: the path starts at the origin
    let first = sampler.sample(Vec2::new(1.0, 0.0), 0.2, 0.4);
    assert!(first.has_neutral_reset);

    sampler.clear_neutral_reset();
    assert!(!sampler.has_neutral_reset());

    // Holding steady does not pass through the center
    let held = sampler.sample(Vec2::new(1.0, 0.0), 0.2, 0.4);
    assert!(!held.has_neutral_reset);

    // Rolling around the rim stays far from the center
    let rolled = sampler.sample(Vec2::new(0.0, 1.0), 0.2, 0.4);
    assert!(!rolled.has_neutral_reset);

    // Flicking straight through the center re-arms
    let flicked = sampler.sample(Vec2::new(0.0, -1.0), 0.2, 0.4);
    assert!(flicked.has_neutral_reset);

    // And it stays armed on later frames
    let later = sampler.sample(Vec2::new(0.0, -1.0), 0.2, 0.4);
    assert!(later.has_neutral_reset);
}

// -----------------------------------------------------------------------------
// Locomotion tests
// -----------------------------------------------------------------------------

#[test]
fn test_dash_from_rest() {
    let tuning = MovementTuning::default();
    let mut locomotion = Locomotion::default();
    let mut timers = TimerSet::default();

    let step = locomotion.step(&sample(Vec2::X), Vec2::ZERO, &mut timers, &tuning);

    assert_eq!(step.state, LocomotionState::Dash);
    assert!(step.dashed);
    assert_eq!(step.velocity, Vec2::new(tuning.dash_speed, 0.0));
    assert_eq!(locomotion.velocity, Vec2::new(tuning.dash_speed, 0.0));
    assert_eq!(locomotion.last_dash, Vec2::X);
    assert_eq!(timers.dash, tuning.dash_window);
    assert_eq!(timers.dash_adjust, tuning.dash_adjust_window);
}

#[test]
fn test_dash_velocity_is_normalized() {
    let tuning = MovementTuning::default();
    let mut locomotion = Locomotion::default();
    let mut timers = TimerSet::default();

    let step = locomotion.step(
        &sample(Vec2::new(0.7, 0.7)),
        Vec2::ZERO,
        &mut timers,
        &tuning,
    );

    assert!((step.velocity.length() - tuning.dash_speed).abs() < 1e-4);
}

#[test]
fn test_no_input_at_rest_is_stationary() {
    let tuning = MovementTuning::default();
    let mut locomotion = Locomotion::default();
    let mut timers = TimerSet::default();

    let step = locomotion.step(&sample(Vec2::ZERO), Vec2::ZERO, &mut timers, &tuning);

    assert_eq!(step.state, LocomotionState::Stationary);
    assert!(!step.dashed);
    assert_eq!(step.velocity, Vec2::ZERO);
    assert_eq!(timers, TimerSet::default());
}

#[test]
fn test_dash_adjust_redirects_without_restarting_timers() {
    let tuning = MovementTuning::default();
    let mut locomotion = Locomotion {
        velocity: Vec2::new(16.0, 0.0),
        last_dash: Vec2::X,
        ..Default::default()
    };
    let mut timers = TimerSet {
        dash: 0.45,
        dash_adjust: 0.03,
        ..Default::default()
    };

    let step = locomotion.step(
        &sample(Vec2::Y),
        Vec2::new(16.0, 0.0),
        &mut timers,
        &tuning,
    );

    assert_eq!(step.state, LocomotionState::DashAdjust);
    assert!(step.dashed);
    assert!(approx_eq(step.velocity, Vec2::new(0.0, tuning.dash_speed)));
    assert_eq!(locomotion.last_dash, Vec2::Y);
    assert_eq!(timers.dash, 0.45);
    assert_eq!(timers.dash_adjust, 0.03);
}

#[test]
fn test_sharp_reversal_with_neutral_reset_redashes() {
    let tuning = MovementTuning::default();
    let mut locomotion = Locomotion {
        velocity: Vec2::new(16.0, 0.0),
        last_dash: Vec2::X,
        ..Default::default()
    };
    let mut timers = TimerSet {
        dash: 0.3,
        ..Default::default()
    };
    let reversal = InputSample {
        move_vector: Vec2::NEG_X,
        previous_move: Vec2::ZERO,
        has_neutral_reset: true,
    };

    let step = locomotion.step(&reversal, Vec2::new(16.0, 0.0), &mut timers, &tuning);

    assert_eq!(step.state, LocomotionState::Dash);
    assert!(approx_eq(step.velocity, Vec2::new(-tuning.dash_speed, 0.0)));
    assert_eq!(locomotion.last_dash, Vec2::NEG_X);
    assert_eq!(timers.dash, tuning.dash_window);
    assert_eq!(timers.dash_adjust, tuning.dash_adjust_window);
}

#[test]
fn test_sharp_reversal_without_neutral_reset_holds_dash() {
    let tuning = MovementTuning::default();
    let mut locomotion = Locomotion {
        velocity: Vec2::new(16.0, 0.0),
        last_dash: Vec2::X,
        ..Default::default()
    };
    let mut timers = TimerSet {
        dash: 0.3,
        ..Default::default()
    };

    let step = locomotion.step(
        &sample(Vec2::NEG_X),
        Vec2::new(16.0, 0.0),
        &mut timers,
        &tuning,
    );

    assert_eq!(step.state, LocomotionState::Hold);
    assert!(!step.dashed);
    assert_eq!(step.velocity, Vec2::new(16.0, 0.0));
    assert_eq!(locomotion.last_dash, Vec2::X);
    assert_eq!(timers.dash, 0.3);
}

#[test]
fn test_shallow_turn_during_dash_holds() {
    let tuning = MovementTuning::default();
    let mut locomotion = Locomotion {
        velocity: Vec2::new(16.0, 0.0),
        last_dash: Vec2::X,
        ..Default::default()
    };
    let mut timers = TimerSet {
        dash: 0.3,
        ..Default::default()
    };
    let turn = InputSample {
        move_vector: Vec2::new(1.0, 0.2),
        previous_move: Vec2::X,
        has_neutral_reset: true,
    };

    let step = locomotion.step(&turn, Vec2::new(16.0, 0.0), &mut timers, &tuning);

    assert_eq!(step.state, LocomotionState::Hold);
    assert_eq!(step.velocity, Vec2::new(16.0, 0.0));
}

#[test]
fn test_steer_blends_toward_run_speed() {
    let tuning = MovementTuning::default();
    let mut locomotion = Locomotion::default();
    let mut timers = TimerSet::default();
    let v = Vec2::new(12.0, 0.0);

    let step = locomotion.step(&sample(Vec2::new(1.0, 1.0)), v, &mut timers, &tuning);

    let target = Vec2::new(1.0, 1.0).normalize() * tuning.run_speed;
    assert_eq!(step.state, LocomotionState::Steer);
    assert!(approx_eq(step.velocity, v.lerp(target, tuning.steer_lerp)));
}

#[test]
fn test_pivot_blends_slowly_on_reversal() {
    let tuning = MovementTuning::default();
    let mut locomotion = Locomotion::default();
    let mut timers = TimerSet::default();

    let step = locomotion.step(
        &sample(Vec2::NEG_X),
        Vec2::new(12.0, 0.0),
        &mut timers,
        &tuning,
    );

    assert_eq!(step.state, LocomotionState::Pivot);
    assert!(approx_eq(step.velocity, Vec2::new(10.8, 0.0)));
}

#[test]
fn test_stop_decelerates_without_input() {
    let tuning = MovementTuning::default();
    let mut locomotion = Locomotion::default();
    let mut timers = TimerSet::default();

    let step = locomotion.step(
        &sample(Vec2::ZERO),
        Vec2::new(10.0, 0.0),
        &mut timers,
        &tuning,
    );

    assert_eq!(step.state, LocomotionState::Stop);
    assert!(approx_eq(step.velocity, Vec2::new(4.0, 0.0)));
}

#[test]
fn test_snap_to_zero_is_exact() {
    let tuning = MovementTuning::default();
    let mut locomotion = Locomotion::default();
    let mut timers = TimerSet::default();

    let step = locomotion.step(
        &sample(Vec2::ZERO),
        Vec2::new(0.2, 0.1),
        &mut timers,
        &tuning,
    );

    assert_eq!(step.state, LocomotionState::Stationary);
    assert_eq!(step.velocity, Vec2::ZERO);
}

#[test]
fn test_snap_to_zero_applies_inside_dash_window() {
    let tuning = MovementTuning::default();
    let mut locomotion = Locomotion {
        velocity: Vec2::new(16.0, 0.0),
        ..Default::default()
    };
    let mut timers = TimerSet {
        dash: 0.2,
        ..Default::default()
    };

    let step = locomotion.step(
        &sample(Vec2::ZERO),
        Vec2::new(0.1, 0.0),
        &mut timers,
        &tuning,
    );

    assert_eq!(step.velocity, Vec2::ZERO);
}

#[test]
fn test_trot_flag_is_computed_but_does_not_gate_blending() {
    let tuning = MovementTuning::default();
    let v = Vec2::new(10.0, 0.0);

    let mut trotting = Locomotion::default();
    let mut trot_timers = TimerSet {
        trot: tuning.trot_window,
        ..Default::default()
    };
    let trot_step = trotting.step(&sample(Vec2::ZERO), v, &mut trot_timers, &tuning);
    assert!(trotting.is_trot);

    let mut plain = Locomotion::default();
    let mut plain_timers = TimerSet::default();
    let plain_step = plain.step(&sample(Vec2::ZERO), v, &mut plain_timers, &tuning);
    assert!(!plain.is_trot);

    assert_eq!(trot_step.velocity, plain_step.velocity);
    assert_eq!(trot_step.state, plain_step.state);
}

#[test]
fn test_trot_flag_requires_released_input() {
    let tuning = MovementTuning::default();
    let mut locomotion = Locomotion::default();
    let mut timers = TimerSet {
        trot: tuning.trot_window,
        ..Default::default()
    };
    let held = InputSample {
        move_vector: Vec2::ZERO,
        previous_move: Vec2::X,
        has_neutral_reset: false,
    };

    locomotion.step(&held, Vec2::new(10.0, 0.0), &mut timers, &tuning);

    assert!(!locomotion.is_trot);
}
