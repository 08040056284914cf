//! Movement domain: normalizes raw axes into a per-frame move sample.

use bevy::prelude::*;

/// One frame of sampled directional input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    /// Current direction, zeroed inside the dead zone
    pub move_vector: Vec2,
    /// Last frame's `move_vector` (after its dead zone was applied)
    pub previous_move: Vec2,
    /// Latched neutral reset, as of this frame
    pub has_neutral_reset: bool,
}

/// Carries the cross-frame input history needed for neutral-zone detection.
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    previous_raw: Vec2,
    previous_move: Vec2,
    has_neutral_reset: bool,
}

impl InputSampler {
    pub fn sample(&mut self, raw: Vec2, dead_zone: f32, neutral_zone: f32) -> InputSample {
        let raw = sanitize_axes(raw);

        if distance_to_line(self.previous_raw, raw) <= neutral_zone {
            self.has_neutral_reset = true;
        }

        let move_vector = if raw.length() <= dead_zone {
            Vec2::ZERO
        } else {
            raw
        };

        let sample = InputSample {
            move_vector,
            previous_move: self.previous_move,
            has_neutral_reset: self.has_neutral_reset,
        };

        self.previous_raw = raw;
        self.previous_move = move_vector;
        sample
    }

    pub fn has_neutral_reset(&self) -> bool {
        self.has_neutral_reset
    }

    /// Consumed when a dash begins.
    pub fn clear_neutral_reset(&mut self) {
        self.has_neutral_reset = false;
    }
}

/// Clamp each axis to [-1, 1]; non-finite values read as centered.
pub fn sanitize_axes(raw: Vec2) -> Vec2 {
    let clean = |value: f32| {
        if value.is_finite() {
            value.clamp(-1.0, 1.0)
        } else {
            0.0
        }
    };
    Vec2::new(clean(raw.x), clean(raw.y))
}

/// Perpendicular distance from the origin to the line through `a` and `b`.
/// Degenerates to `|b|` when both points coincide.
pub fn distance_to_line(a: Vec2, b: Vec2) -> f32 {
    let direction = a - b;
    let length = direction.length();
    if length <= f32::EPSILON {
        return b.length();
    }
    b.perp_dot(direction).abs() / length
}
