//! Player domain: the single controlled avatar.

mod bootstrap;
mod controller;
mod systems;


pub use controller::{AvatarController, FrameInput, FrameReport, facing};

use bevy::prelude::*;

use crate::core::ControllerSet;
use crate::player::bootstrap::spawn_player;
use crate::player::systems::{sync_player_velocity, tick_player};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_player)
            .add_systems(Update, tick_player.in_set(ControllerSet::Simulate))
            .add_systems(FixedUpdate, sync_player_velocity);
    }
}
