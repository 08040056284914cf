//! Combat domain: fire input polling and projectile cleanup.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::combat::{FireInput, ProjectileLifetime};
use crate::core::MainCamera;

pub(crate) fn read_fire_input(
    mouse: Res<ButtonInput<MouseButton>>,
    gamepads: Query<&Gamepad>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut input: ResMut<FireInput>,
) {
    let held = mouse.pressed(MouseButton::Left)
        || gamepads
            .iter()
            .any(|gamepad| gamepad.pressed(GamepadButton::RightTrigger2));
    input.update_held(held);

    let cursor = windows.single().ok().and_then(|window| window.cursor_position());
    input.pointer = match (cursor, cameras.single()) {
        (Some(cursor), Ok((camera, camera_transform))) => {
            camera.viewport_to_world_2d(camera_transform, cursor).ok()
        }
        _ => None,
    };
}

pub(crate) fn expire_projectiles(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut ProjectileLifetime)>,
) {
    let dt = time.delta_secs();
    for (entity, mut lifetime) in &mut query {
        lifetime.0 -= dt;
        if lifetime.0 <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}
