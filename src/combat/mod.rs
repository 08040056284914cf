//! Combat domain: charged burst fire and projectiles.

pub mod blaster;
mod components;
mod resources;
mod spawn;
mod systems;


pub use blaster::{Blaster, Discharge};
pub use components::{Projectile, ProjectileLifetime};
pub use resources::{FireInput, FireTuning};
pub use spawn::{CommandSpawner, ProjectileSpawner};

use bevy::prelude::*;

use crate::combat::systems::{expire_projectiles, read_fire_input};
use crate::core::ControllerSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FireTuning>()
            .init_resource::<FireInput>()
            .add_systems(Update, read_fire_input.in_set(ControllerSet::Input))
            .add_systems(
                Update,
                expire_projectiles.in_set(ControllerSet::Presentation),
            );
    }
}
