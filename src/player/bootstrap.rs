//! Player domain: spawning the controlled avatar.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Player};
use crate::player::AvatarController;

const PLAYER_RADIUS: f32 = 0.4;

pub(crate) fn spawn_player(mut commands: Commands, existing_player: Query<Entity, With<Player>>) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    commands.spawn((
        // Identity & control
        (Player, AvatarController::default()),
        // Rendering
        Sprite {
            color: Color::WHITE,
            custom_size: Some(Vec2::new(PLAYER_RADIUS * 2.5, PLAYER_RADIUS * 1.5)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::circle(PLAYER_RADIUS),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Wall]),
        ),
    ));

    info!("Spawned player at origin");
}
