//! Combat domain: projectile spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{Projectile, ProjectileLifetime};
use crate::movement::GameLayer;

/// Hands new projectiles to whoever owns them afterwards. The caller keeps
/// no handle once `spawn` returns.
pub trait ProjectileSpawner {
    fn spawn(&mut self, position: Vec2, angle: f32, velocity: Vec2);
}

/// Spawns projectiles as physics entities through `Commands`.
pub struct CommandSpawner<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub lifetime: f32,
}

impl ProjectileSpawner for CommandSpawner<'_, '_, '_> {
    fn spawn(&mut self, position: Vec2, angle: f32, velocity: Vec2) {
        self.commands.spawn((
            Projectile,
            ProjectileLifetime(self.lifetime),
            Sprite {
                color: Color::srgb(1.0, 0.9, 0.4),
                custom_size: Some(Vec2::new(0.5, 0.2)),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 1.0)
                .with_rotation(Quat::from_rotation_z(angle.to_radians())),
            RigidBody::Kinematic,
            Collider::circle(0.15),
            Sensor,
            LinearVelocity(velocity),
            CollisionLayers::new(GameLayer::Projectile, [GameLayer::Wall]),
        ));
    }
}
