//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Arena boundaries
    Wall,
    /// The controlled avatar
    Player,
    /// Player projectiles - sensors that overlap walls and expire by lifetime
    Projectile,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
