//! Core domain: the countdown timer bank shared by locomotion and firing.

/// Advance a single countdown by `elapsed` seconds.
///
/// Idle timers (exactly zero) are left untouched, and an active timer that
/// would go negative is clamped to exactly zero. Returns `true` when the
/// timer went from active to idle during this call.
pub fn advance(timer: &mut f32, elapsed: f32) -> bool {
    if *timer > 0.0 {
        *timer -= elapsed;
        if *timer <= 0.0 {
            *timer = 0.0;
            return true;
        }
    }
    false
}

/// Which timers expired during a single [`TimerSet::advance_all`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerExpiry {
    pub dash: bool,
    pub dash_adjust: bool,
    pub trot: bool,
    pub fire_charge: bool,
}

/// Four independent countdowns, in seconds.
///
/// Every value is either strictly positive (active) or exactly zero (idle).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimerSet {
    pub dash: f32,
    pub dash_adjust: f32,
    pub trot: f32,
    pub fire_charge: f32,
}

impl TimerSet {
    /// Advance all four timers by one frame.
    pub fn advance_all(&mut self, elapsed: f32) -> TimerExpiry {
        // Negative or non-finite frame times would break the non-negative contract
        let elapsed = if elapsed.is_finite() {
            elapsed.max(0.0)
        } else {
            0.0
        };

        TimerExpiry {
            dash: advance(&mut self.dash, elapsed),
            dash_adjust: advance(&mut self.dash_adjust, elapsed),
            trot: advance(&mut self.trot, elapsed),
            fire_charge: advance(&mut self.fire_charge, elapsed),
        }
    }

    pub fn is_dashing(&self) -> bool {
        self.dash > 0.0
    }

    pub fn in_dash_adjust(&self) -> bool {
        self.dash_adjust > 0.0
    }

    pub fn is_charging(&self) -> bool {
        self.fire_charge > 0.0
    }
}
