//! The hydration meter: fill it to the top, but not so fast that it is
//! obvious nobody actually went to get water.

use crate::clock::Millis;

/// The top of the meter.
pub const FULL: u8 = 100;

/// Prompt before the first attempt.
pub const PROMPT: &str = "Slide to fill \u{1F4A7}";
/// Shown when the meter fills too quickly.
pub const TOO_FAST: &str = "Error: This meter senses lies. Try again. \u{1F612}\u{1F602}";
/// Shown after the meter drained.
pub const RETRY: &str = "Actually go get water! \u{1F4A7}";
/// Shown once the meter filled slowly enough.
pub const HYDRATED: &str = "Hydration successful. You may continue. \u{1F964}\u{2728}";

/// Meter lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeterState {
    /// Accepting input.
    Filling,
    /// Filled too fast; waiting to drain.
    Busted,
    /// Filled slowly enough; waiting for confirmation.
    Hydrated,
}

/// What a slide did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    /// The meter is not accepting input.
    Ignored,
    /// The level changed.
    Moved,
    /// The meter hit the top before the threshold.
    TooFast,
    /// The meter hit the top at or after the threshold.
    Hydrated,
}

/// State of the hydration meter.
#[derive(Debug, Clone)]
pub struct HydrationMeter {
    level: u8,
    entered_at: Millis,
    state: MeterState,
    message: &'static str,
}

impl HydrationMeter {
    /// A fresh, empty meter for a stage entered at `entered_at`.
    pub fn new(entered_at: Millis) -> Self {
        Self {
            level: 0,
            entered_at,
            state: MeterState::Filling,
            message: PROMPT,
        }
    }

    /// Set the level to `value` (clamped to [`FULL`]) at time `now`.
    ///
    /// Reaching the top before `threshold` has elapsed since stage entry
    /// busts the meter; reaching it later fills it for good.
    pub fn slide(&mut self, value: u8, now: Millis, threshold: Millis) -> Slide {
        if self.state != MeterState::Filling {
            return Slide::Ignored;
        }
        self.level = value.min(FULL);
        if self.level < FULL {
            return Slide::Moved;
        }
        if now.saturating_sub(self.entered_at) < threshold {
            self.state = MeterState::Busted;
            self.message = TOO_FAST;
            Slide::TooFast
        } else {
            self.state = MeterState::Hydrated;
            self.message = HYDRATED;
            Slide::Hydrated
        }
    }

    /// Drain a busted meter back to zero.
    pub fn reset(&mut self) {
        if self.state == MeterState::Busted {
            self.level = 0;
            self.state = MeterState::Filling;
            self.message = RETRY;
        }
    }

    /// Current level, 0-100.
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Current state.
    pub fn state(&self) -> MeterState {
        self.state
    }

    /// Message under the meter.
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Whether the stage can be confirmed.
    pub fn is_hydrated(&self) -> bool {
        self.state == MeterState::Hydrated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: Millis = 10_000;

    #[test]
    fn partial_fill_moves() {
        let mut meter = HydrationMeter::new(0);
        assert_eq!(meter.slide(40, 100, THRESHOLD), Slide::Moved);
        assert_eq!(meter.level(), 40);
        assert_eq!(meter.message(), PROMPT);
    }

    #[test]
    fn too_fast_busts() {
        let mut meter = HydrationMeter::new(1_000);
        assert_eq!(meter.slide(100, 10_999, THRESHOLD), Slide::TooFast);
        assert_eq!(meter.state(), MeterState::Busted);
        assert_eq!(meter.message(), TOO_FAST);
        assert_eq!(meter.slide(10, 11_000, THRESHOLD), Slide::Ignored);
    }

    #[test]
    fn reset_drains() {
        let mut meter = HydrationMeter::new(0);
        meter.slide(100, 0, THRESHOLD);
        meter.reset();
        assert_eq!(meter.level(), 0);
        assert_eq!(meter.state(), MeterState::Filling);
        assert_eq!(meter.message(), RETRY);
    }

    #[test]
    fn exactly_at_threshold_succeeds() {
        let mut meter = HydrationMeter::new(500);
        assert_eq!(meter.slide(100, 10_500, THRESHOLD), Slide::Hydrated);
        assert!(meter.is_hydrated());
        assert_eq!(meter.message(), HYDRATED);
        assert_eq!(meter.slide(0, 20_000, THRESHOLD), Slide::Ignored);
        assert_eq!(meter.level(), 100);
    }

    #[test]
    fn overfill_clamps() {
        let mut meter = HydrationMeter::new(0);
        assert_eq!(meter.slide(250, 60_000, THRESHOLD), Slide::Hydrated);
        assert_eq!(meter.level(), FULL);
    }

    #[test]
    fn reset_only_when_busted() {
        let mut meter = HydrationMeter::new(0);
        meter.slide(30, 10, THRESHOLD);
        meter.reset();
        assert_eq!(meter.level(), 30);
        assert_eq!(meter.message(), PROMPT);
    }
}
