//! Combat domain: charge and burst firing.
//!
//! Pressing fire starts the charge window. When the charge timer reaches zero
//! while the button is still held, the blaster discharges: a fan of
//! `burst_num` projectiles if a burst is armed, otherwise a single shot.
//! Every discharge rearms the timer with `fire_rate`, so holding fire keeps
//! shooting single shots. Releasing the button arms the next burst.

use bevy::prelude::*;

use crate::combat::FireTuning;
use crate::core::TimerSet;

/// Outcome of a discharge, with spawn angles in degrees.
#[derive(Debug, Clone, PartialEq)]
pub enum Discharge {
    Single { angle: f32 },
    Burst { angles: Vec<f32> },
}

impl Discharge {
    pub fn angles(&self) -> &[f32] {
        match self {
            Self::Single { angle } => std::slice::from_ref(angle),
            Self::Burst { angles } => angles,
        }
    }
}

/// Firing state owned by the controlled avatar.
#[derive(Debug, Clone)]
pub struct Blaster {
    pub firing: bool,
    /// The next discharge is a burst
    pub is_burst: bool,
    /// Facing in degrees, counter-clockwise from +X
    pub aim_angle: f32,
}

impl Default for Blaster {
    fn default() -> Self {
        Self {
            firing: false,
            is_burst: true,
            aim_angle: 0.0,
        }
    }
}

impl Blaster {
    pub fn press(&mut self, timers: &mut TimerSet, tuning: &FireTuning) {
        self.firing = true;
        timers.fire_charge = tuning.charge_window;
    }

    pub fn release(&mut self) {
        self.firing = false;
        self.is_burst = true;
    }

    /// Apply this frame's button edges, press before release.
    pub fn apply_edges(
        &mut self,
        pressed: bool,
        released: bool,
        timers: &mut TimerSet,
        tuning: &FireTuning,
    ) {
        if pressed {
            self.press(timers, tuning);
        }
        if released {
            self.release();
        }
    }

    /// Turn to face `pointer`. A pointer on top of the avatar gives no
    /// direction, so the previous aim is kept.
    pub fn aim(&mut self, position: Vec2, pointer: Option<Vec2>) -> f32 {
        if let Some(angle) = pointer.and_then(|pointer| aim_angle(position, pointer)) {
            self.aim_angle = angle;
        }
        self.aim_angle
    }

    /// Discharge if the charge has run out while fire is held.
    pub fn try_discharge(
        &mut self,
        timers: &mut TimerSet,
        tuning: &FireTuning,
    ) -> Option<Discharge> {
        if timers.is_charging() || !self.firing {
            return None;
        }

        let discharge = if self.is_burst {
            self.is_burst = false;
            Discharge::Burst {
                angles: burst_angles(self.aim_angle, tuning.burst_angle, tuning.burst_num),
            }
        } else {
            Discharge::Single {
                angle: self.aim_angle,
            }
        };
        timers.fire_charge = tuning.fire_rate;

        Some(discharge)
    }
}

/// Evenly spaced angles spanning `spread` degrees centered on `aim`,
/// endpoints included, in ascending order.
pub fn burst_angles(aim: f32, spread: f32, count: u32) -> Vec<f32> {
    if count < 2 {
        return vec![aim];
    }
    let start = aim - spread / 2.0;
    let increment = spread / (count - 1) as f32;
    (0..count).map(|i| start + increment * i as f32).collect()
}

/// Facing angle, in degrees within (-180, 180], for an avatar at `position`
/// looking at `pointer`. `None` when the two coincide.
pub fn aim_angle(position: Vec2, pointer: Vec2) -> Option<f32> {
    let away = position - pointer;
    if away.length_squared() <= f32::EPSILON * f32::EPSILON {
        return None;
    }
    // Rotate the away-from-pointer angle half a turn so the avatar faces it
    let angle = away.y.atan2(away.x).to_degrees() + 180.0;
    Some(if angle > 180.0 { angle - 360.0 } else { angle })
}

/// Unit vector for an angle in degrees.
pub fn direction(angle: f32) -> Vec2 {
    Vec2::from_angle(angle.to_radians())
}
