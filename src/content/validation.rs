//! Validation for tuning values that would break the controller at runtime.

use super::data::{ControllerTuningDef, TUNING_SCHEMA_VERSION};

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub value: f32,
    pub rule: &'static str,
}

impl std::fmt::Display for TuningValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{} = {} violates rule '{}'",
            self.section, self.field, self.value, self.rule
        )
    }
}

const NON_NEGATIVE: &str = "x >= 0";
const POSITIVE: &str = "x > 0";
const UNIT: &str = "0 <= x <= 1";
const ANGLE: &str = "0 <= x <= 180";

/// Helper macro for checking a value against a rule
macro_rules! check {
    ($errors:expr, $section:expr, $def:expr, $field:ident, $rule:expr, |$v:ident| $ok:expr) => {
        let $v = $def.$field as f32;
        if !($v.is_finite() && $ok) {
            $errors.push(TuningValidationError {
                section: $section,
                field: stringify!($field),
                value: $v,
                rule: $rule,
            });
        }
    };
}

/// Validate every tuning value.
/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_tuning(def: &ControllerTuningDef) -> Vec<TuningValidationError> {
    let mut errors = Vec::new();

    if def.schema_version != TUNING_SCHEMA_VERSION {
        errors.push(TuningValidationError {
            section: "tuning",
            field: "schema_version",
            value: def.schema_version as f32,
            rule: "supported schema version",
        });
    }

    // Movement
    let movement = &def.movement;
    check!(errors, "movement", movement, run_speed, NON_NEGATIVE, |v| v >= 0.0);
    check!(errors, "movement", movement, dash_speed, NON_NEGATIVE, |v| v >= 0.0);
    check!(errors, "movement", movement, dash_window, NON_NEGATIVE, |v| v >= 0.0);
    check!(errors, "movement", movement, dash_adjust_window, NON_NEGATIVE, |v| v >= 0.0);
    check!(errors, "movement", movement, trot_window, NON_NEGATIVE, |v| v >= 0.0);
    check!(errors, "movement", movement, dead_zone, NON_NEGATIVE, |v| v >= 0.0);
    check!(errors, "movement", movement, neutral_zone, NON_NEGATIVE, |v| v >= 0.0);
    check!(errors, "movement", movement, dash_angle, ANGLE, |v| v >= 0.0 && v <= 180.0);
    check!(errors, "movement", movement, steer_angle, ANGLE, |v| v >= 0.0 && v <= 180.0);
    check!(errors, "movement", movement, steer_lerp, UNIT, |v| v >= 0.0 && v <= 1.0);
    check!(errors, "movement", movement, pivot_lerp, UNIT, |v| v >= 0.0 && v <= 1.0);
    check!(errors, "movement", movement, stop_lerp, UNIT, |v| v >= 0.0 && v <= 1.0);

    // Fire
    let fire = &def.fire;
    check!(errors, "fire", fire, fire_rate, POSITIVE, |v| v > 0.0);
    check!(errors, "fire", fire, charge_window, NON_NEGATIVE, |v| v >= 0.0);
    check!(errors, "fire", fire, burst_angle, NON_NEGATIVE, |v| v >= 0.0);
    check!(errors, "fire", fire, burst_num, "x >= 2", |v| v >= 2.0);
    check!(errors, "fire", fire, bullet_speed, NON_NEGATIVE, |v| v >= 0.0);
    check!(errors, "fire", fire, projectile_lifetime, POSITIVE, |v| v > 0.0);

    // Camera
    let camera = &def.camera;
    check!(errors, "camera", camera, lead, UNIT, |v| v >= 0.0 && v <= 1.0);
    check!(errors, "camera", camera, lerp, UNIT, |v| v >= 0.0 && v <= 1.0);
    check!(errors, "camera", camera, pixels_per_unit, POSITIVE, |v| v > 0.0);

    errors
}
