//! Movement domain: input polling for locomotion.

use bevy::prelude::*;

use crate::movement::MovementInput;

pub(crate) fn read_move_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut input: ResMut<MovementInput>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    let mut axis = Vec2::new(x, y);

    // Analog stick wins when pushed further than the keys
    for gamepad in &gamepads {
        let stick = gamepad.left_stick();
        if stick.length_squared() > axis.length_squared() {
            axis = stick;
        }
    }

    input.axis = axis;
}
