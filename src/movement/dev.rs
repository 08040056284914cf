//! Movement domain: walled test arena for the top-down controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Wall};

const ARENA_HALF_WIDTH: f32 = 24.0;
const ARENA_HALF_HEIGHT: f32 = 14.0;
const WALL_THICKNESS: f32 = 1.0;

pub(crate) fn spawn_test_arena(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let wall_layers =
        CollisionLayers::new(GameLayer::Wall, [GameLayer::Player, GameLayer::Projectile]);

    let horizontal = Vec2::new(ARENA_HALF_WIDTH * 2.0 + WALL_THICKNESS, WALL_THICKNESS);
    let vertical = Vec2::new(WALL_THICKNESS, ARENA_HALF_HEIGHT * 2.0 + WALL_THICKNESS);

    let walls = [
        // Top and bottom
        (Vec2::new(0.0, ARENA_HALF_HEIGHT), horizontal),
        (Vec2::new(0.0, -ARENA_HALF_HEIGHT), horizontal),
        // Left and right
        (Vec2::new(-ARENA_HALF_WIDTH, 0.0), vertical),
        (Vec2::new(ARENA_HALF_WIDTH, 0.0), vertical),
    ];

    for (position, size) in walls {
        commands.spawn((
            Wall,
            Sprite {
                color: wall_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
        ));
    }

    info!(
        "Spawned test arena {}x{}",
        ARENA_HALF_WIDTH * 2.0,
        ARENA_HALF_HEIGHT * 2.0
    );
}
