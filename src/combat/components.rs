//! Combat domain: projectile components.

use bevy::prelude::*;

/// Marks a fired projectile
#[derive(Component, Debug)]
pub struct Projectile;

/// Seconds left before the projectile despawns
#[derive(Component, Debug)]
pub struct ProjectileLifetime(pub f32);
