//! Movement domain: the dash/steer/pivot/stop state machine.
//!
//! Each frame, after the timer bank has advanced, [`Locomotion::step`] picks
//! exactly one state and produces the commanded velocity for the physics
//! body. Dash conditions are evaluated first and short-circuit the blends.

use bevy::prelude::*;

use crate::core::TimerSet;
use crate::movement::{InputSample, MovementTuning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocomotionState {
    /// A fresh dash started (or reset) this frame
    Dash,
    /// Direction corrected inside the dash-adjust window
    DashAdjust,
    /// Dash velocity carried over while the dash window runs
    Hold,
    /// Small correction toward the input at run speed
    Steer,
    /// Sharp turn, slow blend toward the input
    Pivot,
    /// No input, decelerating
    Stop,
    /// Forced to rest
    #[default]
    Stationary,
}

/// Result of a single locomotion step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionStep {
    pub state: LocomotionState,
    pub velocity: Vec2,
    /// A dash (or dash adjustment) fired, consuming the neutral reset latch
    pub dashed: bool,
}

/// Locomotion record owned by the controlled avatar.
#[derive(Debug, Clone, Default)]
pub struct Locomotion {
    pub state: LocomotionState,
    /// Commanded velocity, applied on the next physics tick
    pub velocity: Vec2,
    /// Move vector that started the most recent dash
    pub last_dash: Vec2,
    /// Post-dash trot flag; informational only, no blend consults it
    pub is_trot: bool,
}

impl Locomotion {
    /// Run one frame of the state machine.
    ///
    /// `physics_velocity` is the body's current velocity as reported by the
    /// physics host, which may lag `self.velocity` by one physics step.
    pub fn step(
        &mut self,
        sample: &InputSample,
        physics_velocity: Vec2,
        timers: &mut TimerSet,
        tuning: &MovementTuning,
    ) -> LocomotionStep {
        let m = sample.move_vector;
        let v = physics_velocity;
        let has_input = m != Vec2::ZERO;

        self.is_trot = timers.trot > 0.0 && sample.previous_move == Vec2::ZERO;

        let in_adjust = timers.in_dash_adjust();
        let sharp_turn = angle_between_deg(self.last_dash, m) >= tuning.dash_angle;
        let redash =
            v == Vec2::ZERO || (timers.is_dashing() && sharp_turn && sample.has_neutral_reset);
        let dash = has_input && (in_adjust || redash);

        let mut state = LocomotionState::Hold;
        let mut velocity = self.velocity;

        if dash {
            velocity = m.normalize_or_zero() * tuning.dash_speed;
            self.last_dash = m;
            if in_adjust {
                state = LocomotionState::DashAdjust;
            } else {
                timers.dash = tuning.dash_window;
                timers.dash_adjust = tuning.dash_adjust_window;
                state = LocomotionState::Dash;
            }
        } else if !timers.is_dashing() && v != Vec2::ZERO {
            let target = m.normalize_or_zero() * tuning.run_speed;
            if !has_input {
                velocity = v.lerp(target, tuning.stop_lerp);
                state = LocomotionState::Stop;
            } else if angle_between_deg(v, m) <= tuning.steer_angle {
                velocity = v.lerp(target, tuning.steer_lerp);
                state = LocomotionState::Steer;
            } else {
                velocity = v.lerp(target, tuning.pivot_lerp);
                state = LocomotionState::Pivot;
            }
        }

        // steer_lerp doubles as the rest speed threshold
        if !has_input && v.length() <= tuning.steer_lerp {
            velocity = Vec2::ZERO;
            state = LocomotionState::Stationary;
        }

        if state != self.state {
            debug!("Locomotion {:?} -> {:?}, velocity={}", self.state, state, velocity);
        }

        self.state = state;
        self.velocity = velocity;

        LocomotionStep {
            state,
            velocity,
            dashed: dash,
        }
    }
}

/// Unsigned angle between two vectors in degrees; 0 when either is zero.
pub fn angle_between_deg(a: Vec2, b: Vec2) -> f32 {
    let denominator = (a.length_squared() * b.length_squared()).sqrt();
    if denominator <= f32::EPSILON {
        return 0.0;
    }
    (a.dot(b) / denominator).clamp(-1.0, 1.0).acos().to_degrees()
}
