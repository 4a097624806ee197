//! Logical time and stage-scoped timers.
//!
//! The engine never sleeps. Callers move time forward explicitly and the
//! engine fires whatever fell due. A [`TimerSet`] belongs to exactly one
//! stage: entering a new stage replaces it, which drops every pending
//! timer of the old one.

/// Milliseconds on the engine's logical clock.
pub type Millis = u64;

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Move to the next stage of the itinerary.
    Advance,
    /// Settle the two face-up memory cards.
    ResolveMatch,
    /// Drain the hydration meter after a failed attempt.
    ResetMeter,
    /// Count the cake countdown down by one.
    CakeTick,
    /// Cut the cake after the candle went out.
    CakeCut,
    /// Show the gift sparkles.
    GiftSparkle,
}

#[derive(Debug, Clone)]
struct Timer {
    due: Millis,
    seq: u64,
    cue: Cue,
}

/// Pending timers for the active stage.
#[derive(Debug, Default)]
pub struct TimerSet {
    pending: Vec<Timer>,
    next_seq: u64,
}

impl TimerSet {
    /// Create an empty timer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `cue` to fire at `due`.
    pub fn schedule(&mut self, due: Millis, cue: Cue) {
        self.pending.push(Timer {
            due,
            seq: self.next_seq,
            cue,
        });
        self.next_seq = self.next_seq.wrapping_add(1);
    }

    /// Schedule `cue` to fire `delay` after `now`. Saturates at the end of
    /// time instead of wrapping.
    pub fn schedule_after(&mut self, now: Millis, delay: Millis, cue: Cue) {
        self.schedule(now.saturating_add(delay), cue);
    }

    /// Remove and return the earliest timer due at or before `now`.
    ///
    /// Timers with the same deadline come out in scheduling order.
    pub fn pop_due(&mut self, now: Millis) -> Option<(Millis, Cue)> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, _)| i)?;
        let timer = self.pending.swap_remove(idx);
        Some((timer.due, timer.cue))
    }

    /// The earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.pending.iter().map(|t| t.due).min()
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set() {
        let mut timers = TimerSet::new();
        assert!(timers.is_empty());
        assert_eq!(timers.next_deadline(), None);
        assert_eq!(timers.pop_due(10_000), None);
    }

    #[test]
    fn nothing_fires_early() {
        let mut timers = TimerSet::new();
        timers.schedule(500, Cue::ResolveMatch);
        assert_eq!(timers.pop_due(499), None);
        assert_eq!(timers.pop_due(500), Some((500, Cue::ResolveMatch)));
        assert!(timers.is_empty());
    }

    #[test]
    fn fires_in_deadline_order() {
        let mut timers = TimerSet::new();
        timers.schedule(3500, Cue::Advance);
        timers.schedule(500, Cue::GiftSparkle);
        assert_eq!(timers.next_deadline(), Some(500));
        assert_eq!(timers.pop_due(5000), Some((500, Cue::GiftSparkle)));
        assert_eq!(timers.pop_due(5000), Some((3500, Cue::Advance)));
    }

    #[test]
    fn ties_fire_in_scheduling_order() {
        let mut timers = TimerSet::new();
        timers.schedule(1000, Cue::CakeTick);
        timers.schedule(1000, Cue::CakeCut);
        timers.schedule(1000, Cue::Advance);
        assert_eq!(timers.pop_due(1000), Some((1000, Cue::CakeTick)));
        assert_eq!(timers.pop_due(1000), Some((1000, Cue::CakeCut)));
        assert_eq!(timers.pop_due(1000), Some((1000, Cue::Advance)));
    }

    #[test]
    fn delay_saturates_at_end_of_time() {
        let mut timers = TimerSet::new();
        timers.schedule_after(Millis::MAX - 10, 3000, Cue::Advance);
        assert_eq!(timers.next_deadline(), Some(Millis::MAX));
    }

    #[test]
    fn pending_count() {
        let mut timers = TimerSet::new();
        assert!(timers.is_empty());
        timers.schedule(2000, Cue::ResetMeter);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.pop_due(1999), None);
        assert_eq!(timers.pop_due(2000), Some((2000, Cue::ResetMeter)));
        assert!(timers.is_empty());
    }
}
