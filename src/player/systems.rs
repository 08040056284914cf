//! Player domain: frame and physics tick systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{CommandSpawner, FireInput, FireTuning};
use crate::movement::{MovementInput, MovementTuning, Player};
use crate::player::{AvatarController, FrameInput, facing};

/// Frame tick for the avatar. The aim is applied to the transform right
/// away, the velocity waits for [`sync_player_velocity`].
pub(crate) fn tick_player(
    mut commands: Commands,
    time: Res<Time>,
    move_input: Res<MovementInput>,
    fire_input: Res<FireInput>,
    movement: Res<MovementTuning>,
    fire: Res<FireTuning>,
    mut query: Query<
        (
            &mut AvatarController,
            &mut Transform,
            &LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let mut spawner = CommandSpawner {
        commands: &mut commands,
        lifetime: fire.projectile_lifetime,
    };

    for (mut controller, mut transform, velocity) in &mut query {
        let frame = FrameInput {
            dt,
            axis: move_input.axis,
            fire_pressed: fire_input.pressed,
            fire_released: fire_input.released,
            position: transform.translation.truncate(),
            pointer: fire_input.pointer,
            physics_velocity: velocity.0,
        };

        let report = controller.on_tick(&frame, &movement, &fire, &mut spawner);
        transform.rotation = facing(report.aim_angle);
    }
}

/// Physics tick: hand the last computed velocity to the body.
pub(crate) fn sync_player_velocity(
    mut query: Query<(&AvatarController, &mut LinearVelocity), With<Player>>,
) {
    for (controller, mut velocity) in &mut query {
        velocity.0 = controller.on_physics_sync();
    }
}
