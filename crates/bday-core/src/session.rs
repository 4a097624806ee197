//! Per-run session state: where we are, how often things were retried,
//! and what the collaborator has produced so far.

use std::collections::BTreeMap;

use crate::clock::Millis;
use crate::content::GeneratedContent;
use crate::stage::Stage;

/// Retry counters, one per stage that has retry semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttemptCounters {
    counts: BTreeMap<Stage, u32>,
}

impl AttemptCounters {
    /// Attempts recorded for `stage`.
    pub fn get(&self, stage: Stage) -> u32 {
        self.counts.get(&stage).copied().unwrap_or(0)
    }

    /// Record one more attempt for `stage` and return the new count.
    pub fn bump(&mut self, stage: Stage) -> u32 {
        let count = self.counts.entry(stage).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Attempts across all stages.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }
}

/// The single live session.
#[derive(Debug, Clone)]
pub struct Session {
    stage: Stage,
    entered_at: Millis,
    attempts: AttemptCounters,
    generated: GeneratedContent,
}

impl Session {
    /// Start a session at `stage`.
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            entered_at: 0,
            attempts: AttemptCounters::default(),
            generated: GeneratedContent::default(),
        }
    }

    /// The current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// When the current stage was entered.
    pub fn entered_at(&self) -> Millis {
        self.entered_at
    }

    /// Retry counters.
    pub fn attempts(&self) -> &AttemptCounters {
        &self.attempts
    }

    /// Generated content received so far.
    pub fn generated(&self) -> &GeneratedContent {
        &self.generated
    }

    pub(crate) fn enter(&mut self, stage: Stage, at: Millis) {
        self.stage = stage;
        self.entered_at = at;
    }

    pub(crate) fn attempts_mut(&mut self) -> &mut AttemptCounters {
        &mut self.attempts
    }

    pub(crate) fn generated_mut(&mut self) -> &mut GeneratedContent {
        &mut self.generated
    }
}
