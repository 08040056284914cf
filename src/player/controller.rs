//! Player domain: the avatar controller and its two host entry points.
//!
//! [`AvatarController::on_tick`] runs once per frame and computes the
//! commanded velocity and any projectile spawns. The physics host picks the
//! velocity up later through [`AvatarController::on_physics_sync`], so the
//! body reads a velocity that is up to one physics step old.

use bevy::prelude::*;

use crate::combat::blaster::direction;
use crate::combat::{Blaster, Discharge, FireTuning, ProjectileSpawner};
use crate::core::TimerSet;
use crate::movement::{InputSampler, Locomotion, LocomotionState, MovementTuning};

/// Everything the host hands the controller for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Seconds since the previous frame
    pub dt: f32,
    /// Raw movement axes
    pub axis: Vec2,
    pub fire_pressed: bool,
    pub fire_released: bool,
    /// Avatar position, also the projectile spawn point
    pub position: Vec2,
    /// Pointer in the same space as `position`
    pub pointer: Option<Vec2>,
    /// Body velocity as last integrated by physics
    pub physics_velocity: Vec2,
}

/// Rotation that faces the avatar along `aim_angle` degrees.
pub fn facing(aim_angle: f32) -> Quat {
    Quat::from_rotation_z(aim_angle.to_radians())
}

/// What a frame tick decided.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub state: LocomotionState,
    pub velocity: Vec2,
    pub aim_angle: f32,
    pub discharge: Option<Discharge>,
}

#[derive(Component, Debug, Clone, Default)]
pub struct AvatarController {
    pub sampler: InputSampler,
    pub timers: TimerSet,
    pub locomotion: Locomotion,
    pub blaster: Blaster,
}

impl AvatarController {
    /// Frame tick: sample input, advance timers, step locomotion, then
    /// discharge if the blaster is ready.
    pub fn on_tick(
        &mut self,
        frame: &FrameInput,
        movement: &MovementTuning,
        fire: &FireTuning,
        spawner: &mut impl ProjectileSpawner,
    ) -> FrameReport {
        let sample = self
            .sampler
            .sample(frame.axis, movement.dead_zone, movement.neutral_zone);

        self.blaster.apply_edges(
            frame.fire_pressed,
            frame.fire_released,
            &mut self.timers,
            fire,
        );
        let aim_angle = self.blaster.aim(frame.position, frame.pointer);

        let expiry = self.timers.advance_all(frame.dt);
        if expiry.dash && sample.previous_move == Vec2::ZERO {
            self.timers.trot = movement.trot_window;
            debug!("Dash ended, trot window {}s", movement.trot_window);
        }

        let step = self.locomotion.step(
            &sample,
            frame.physics_velocity,
            &mut self.timers,
            movement,
        );
        if step.dashed {
            self.sampler.clear_neutral_reset();
            debug!(
                "{:?} toward {} at {}",
                step.state, sample.move_vector, step.velocity
            );
        }

        let discharge = self.blaster.try_discharge(&mut self.timers, fire);
        if let Some(discharge) = &discharge {
            for &angle in discharge.angles() {
                spawner.spawn(frame.position, angle, direction(angle) * fire.bullet_speed);
            }
            debug!(
                "Discharged {} projectile(s) around {}deg",
                discharge.angles().len(),
                aim_angle
            );
        }

        FrameReport {
            state: step.state,
            velocity: step.velocity,
            aim_angle,
            discharge,
        }
    }

    /// Physics tick: the velocity the body should carry.
    pub fn on_physics_sync(&self) -> Vec2 {
        self.locomotion.velocity
    }

    /// Sprite tint while a burst is charging, fading from white to cyan as
    /// the charge completes.
    pub fn charge_tint(&self, fire: &FireTuning) -> Color {
        let charge = self.timers.fire_charge;
        let charging = self.blaster.is_burst && self.blaster.firing && charge > 0.0;
        if charging && fire.charge_window > 0.0 {
            Color::srgb(charge / fire.charge_window, 1.0, 1.0)
        } else {
            Color::WHITE
        }
    }
}
