//! Debug tooling for tuning the controller by feel.
//!
//! Features:
//! - Charge tint on the avatar while a burst is charging
//! - Toggleable overlay (F3 or backtick) with locomotion and timer state

use bevy::prelude::*;

use crate::combat::FireTuning;
use crate::core::ControllerSet;
use crate::movement::Player;
use crate::player::AvatarController;

// ============================================================================
// Debug State Resource
// ============================================================================

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether to show the controller info overlay
    pub show_info: bool,
}

/// Marker for the controller info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

// ============================================================================
// Plugin
// ============================================================================

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_debug_info, tint_charging_player, update_debug_info_overlay)
                .chain()
                .in_set(ControllerSet::Presentation),
        );
    }
}

// ============================================================================
// Systems
// ============================================================================

fn toggle_debug_info(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F3) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_info = !debug_state.show_info;
        info!("Debug overlay: {}", debug_state.show_info);
    }
}

fn tint_charging_player(
    fire: Res<FireTuning>,
    mut query: Query<(&AvatarController, &mut Sprite), With<Player>>,
) {
    for (controller, mut sprite) in &mut query {
        sprite.color = controller.charge_tint(&fire);
    }
}

fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<(&Transform, &AvatarController), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((transform, controller)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let pos = transform.translation;
        let timers = &controller.timers;
        let locomotion = &controller.locomotion;
        **text = format!(
            "Pos: ({:.1}, {:.1})\nState: {:?}\nVelocity: ({:.2}, {:.2})\nDash: {:.2} Adjust: {:.2} Trot: {:.2}\nCharge: {:.2}\nNeutral reset: {}\nTrotting: {}\nBurst armed: {} Aim: {:.0}",
            pos.x,
            pos.y,
            locomotion.state,
            locomotion.velocity.x,
            locomotion.velocity.y,
            timers.dash,
            timers.dash_adjust,
            timers.trot,
            timers.fire_charge,
            controller.sampler.has_neutral_reset(),
            locomotion.is_trot,
            controller.blaster.is_burst,
            controller.blaster.aim_angle
        );
    }
}

// ============================================================================
// UI Spawning Helpers
// ============================================================================

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
