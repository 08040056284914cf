//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub run_speed: f32,
    pub dash_speed: f32,
    /// How long a dash holds its velocity
    pub dash_window: f32,
    /// Grace period after a dash starts in which the direction may be corrected
    pub dash_adjust_window: f32,
    pub trot_window: f32,
    /// Minimum turn (degrees) from the last dash that allows re-dashing mid-dash
    pub dash_angle: f32,
    /// Turns up to this many degrees steer, sharper turns pivot
    pub steer_angle: f32,
    pub dead_zone: f32,
    pub neutral_zone: f32,
    pub steer_lerp: f32,
    pub pivot_lerp: f32,
    pub stop_lerp: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            run_speed: 12.0,
            dash_speed: 16.0,
            dash_window: 0.5,
            dash_adjust_window: 0.05,
            trot_window: 0.1,
            dash_angle: 60.0,
            steer_angle: 90.0,
            dead_zone: 0.2,
            neutral_zone: 0.4,
            steer_lerp: 0.3,
            pivot_lerp: 0.05,
            stop_lerp: 0.6,
        }
    }
}

/// Raw directional input polled this frame, each axis in [-1, 1].
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
}
