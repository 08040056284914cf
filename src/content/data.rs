//! Content domain: on-disk shape of the controller tuning file.

use serde::{Deserialize, Serialize};

use crate::combat::FireTuning;
use crate::core::CameraTuning;
use crate::movement::MovementTuning;

pub const TUNING_SCHEMA_VERSION: u32 = 1;

/// Every tunable constant of the avatar controller. Sections left out of
/// the file fall back to their defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerTuningDef {
    pub schema_version: u32,
    pub movement: MovementTuning,
    pub fire: FireTuning,
    pub camera: CameraTuning,
}

impl Default for ControllerTuningDef {
    fn default() -> Self {
        Self {
            schema_version: TUNING_SCHEMA_VERSION,
            movement: MovementTuning::default(),
            fire: FireTuning::default(),
            camera: CameraTuning::default(),
        }
    }
}
