//! Content domain: data-driven tuning for the avatar controller.

mod data;
mod loader;
mod validation;


pub use data::{ControllerTuningDef, TUNING_SCHEMA_VERSION};
pub use loader::{TuningLoadError, load_tuning, parse_tuning};
pub use validation::{TuningValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

pub const TUNING_PATH: &str = "assets/data/controller_tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_controller_tuning);
    }
}

/// Load, validate and publish the tuning resources. Any failure keeps the
/// built-in defaults that the domain plugins already registered.
fn load_controller_tuning(mut commands: Commands) {
    let def = match load_tuning(Path::new(TUNING_PATH)) {
        Ok(def) => def,
        Err(e) => {
            warn!("{}; using default tuning", e);
            return;
        }
    };

    let errors = validate_tuning(&def);
    if !errors.is_empty() {
        for error in &errors {
            error!("Tuning validation: {}", error);
        }
        warn!(
            "Rejected {} with {} invalid values; using default tuning",
            TUNING_PATH,
            errors.len()
        );
        return;
    }

    info!(
        "Loaded tuning from {}: run_speed={}, dash_speed={}, burst={}x{}deg, fire_rate={}",
        TUNING_PATH,
        def.movement.run_speed,
        def.movement.dash_speed,
        def.fire.burst_num,
        def.fire.burst_angle,
        def.fire.fire_rate
    );

    commands.insert_resource(def.movement);
    commands.insert_resource(def.fire);
    commands.insert_resource(def.camera);
}
