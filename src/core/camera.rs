//! Core domain: camera setup and pointer-led follow.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::FireInput;
use crate::movement::Player;

/// Marker for the gameplay camera
#[derive(Component, Debug)]
pub struct MainCamera;

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraTuning {
    /// Fraction of the player-to-pointer offset the camera leads by
    pub lead: f32,
    /// Per-frame blend toward the lead point
    pub lerp: f32,
    /// Screen pixels per world unit
    pub pixels_per_unit: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            lead: 0.3,
            lerp: 0.4,
            pixels_per_unit: 32.0,
        }
    }
}

impl CameraTuning {
    /// Point the camera should settle on for a player at `position`.
    pub fn follow_target(&self, position: Vec2, pointer: Option<Vec2>) -> Vec2 {
        match pointer {
            Some(pointer) => position + (pointer - position) * self.lead,
            None => position,
        }
    }
}

pub(crate) fn spawn_camera(mut commands: Commands, tuning: Res<CameraTuning>) {
    commands.spawn((
        MainCamera,
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / tuning.pixels_per_unit,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

pub(crate) fn follow_player(
    tuning: Res<CameraTuning>,
    fire_input: Res<FireInput>,
    player_query: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    let Ok(mut camera) = camera_query.single_mut() else {
        return;
    };

    let target = tuning.follow_target(player.translation.truncate(), fire_input.pointer);
    let next = camera.translation.truncate().lerp(target, tuning.lerp);
    camera.translation.x = next.x;
    camera.translation.y = next.y;
}
