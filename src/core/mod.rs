//! Core domain: frame scheduling, the timer bank, and the camera.

mod camera;
pub mod timers;


pub use camera::{CameraTuning, MainCamera};
pub use timers::{TimerExpiry, TimerSet};

use bevy::prelude::*;

use crate::core::camera::{follow_player, spawn_camera};

/// Ordering of the per-frame controller work inside `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    /// Poll devices into the raw input resources
    Input,
    /// Sample, advance timers, step locomotion, discharge
    Simulate,
    /// Cosmetic and lifetime bookkeeping
    Presentation,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .configure_sets(
                Update,
                (
                    ControllerSet::Input,
                    ControllerSet::Simulate,
                    ControllerSet::Presentation,
                )
                    .chain(),
            )
            .add_systems(Startup, spawn_camera)
            .add_systems(PostUpdate, follow_player);
    }
}
