//! Combat domain: firing tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FireTuning {
    /// Seconds between shots once the charge has been spent
    pub fire_rate: f32,
    /// Delay from pressing fire to the first discharge
    pub charge_window: f32,
    /// Total spread of a burst, in degrees
    pub burst_angle: f32,
    /// Projectiles per burst, must be at least 2
    pub burst_num: u32,
    pub bullet_speed: f32,
    /// Seconds a projectile lives before despawning
    pub projectile_lifetime: f32,
}

impl Default for FireTuning {
    fn default() -> Self {
        Self {
            fire_rate: 0.1,
            charge_window: 0.4,
            burst_angle: 45.0,
            burst_num: 5,
            bullet_speed: 32.0,
            projectile_lifetime: 1.0,
        }
    }
}

/// Fire button edges and pointer position polled this frame.
#[derive(Resource, Debug, Default)]
pub struct FireInput {
    pub pressed: bool,
    pub released: bool,
    /// Fire held on any device as of this frame
    pub held: bool,
    /// Pointer in world space, if it is over the window
    pub pointer: Option<Vec2>,
}

impl FireInput {
    /// Derive this frame's edges from the combined held state of every
    /// fire device, so one device letting go while another still holds
    /// is not a release.
    pub fn update_held(&mut self, held: bool) {
        self.pressed = held && !self.held;
        self.released = !held && self.held;
        self.held = held;
    }
}
