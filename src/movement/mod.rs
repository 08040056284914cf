//! Movement domain: input sampling and the locomotion state machine.

mod components;
mod dev;
pub mod locomotion;
mod resources;
pub mod sampler;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{GameLayer, Player, Wall};
pub use locomotion::{Locomotion, LocomotionState, LocomotionStep};
pub use resources::{MovementInput, MovementTuning};
pub use sampler::{InputSample, InputSampler};

use bevy::prelude::*;

use crate::core::ControllerSet;
use crate::movement::dev::spawn_test_arena;
use crate::movement::systems::read_move_input;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, spawn_test_arena)
            .add_systems(Update, read_move_input.in_set(ControllerSet::Input));
    }
}
