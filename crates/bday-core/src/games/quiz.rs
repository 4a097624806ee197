//! Mission 3: "Who is the favorite child?"
//!
//! The correct target always works. The evasive one jumps to a random
//! offset whenever the player goes for it and can never be hit.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Evasive attempts after which the taunt appears.
pub const TAUNT_AFTER: u32 = 2;

/// Shown once the player keeps chasing the evasive target.
pub const TAUNT: &str = "Stop trying to click \"Me\". It's physically impossible.";

/// Resamples tried before the evasive target falls back to its anchor.
const MAX_SAMPLES: usize = 16;

/// Displacement of the evasive target from its anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    /// Horizontal displacement.
    pub dx: i32,
    /// Vertical displacement.
    pub dy: i32,
}

/// Geometry of the two quiz targets.
///
/// The correct target is centred at the origin, the evasive target's
/// anchor sits `anchor_gap` to its right, and both are
/// `target_width` x `target_height` boxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizLayout {
    /// Maximum displacement on each axis.
    pub range: i32,
    /// Horizontal distance between the two anchors.
    pub anchor_gap: i32,
    /// Width of a target.
    pub target_width: i32,
    /// Height of a target.
    pub target_height: i32,
}

impl Default for QuizLayout {
    fn default() -> Self {
        Self {
            range: 100,
            anchor_gap: 240,
            target_width: 120,
            target_height: 40,
        }
    }
}

impl QuizLayout {
    /// Check that the range is sane and the anchors do not overlap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.range < 0 {
            return Err(ConfigError::NegativeRange(self.range));
        }
        if self.overlaps_correct(Offset::default()) {
            return Err(ConfigError::QuizOverlap {
                gap: self.anchor_gap,
                width: self.target_width,
            });
        }
        Ok(())
    }

    /// Whether the evasive target at `offset` would cover the correct one.
    pub fn overlaps_correct(&self, offset: Offset) -> bool {
        (self.anchor_gap + offset.dx).abs() < self.target_width
            && offset.dy.abs() < self.target_height
    }

    /// Whether `offset` lies inside the configured range.
    pub fn in_range(&self, offset: Offset) -> bool {
        offset.dx.abs() <= self.range && offset.dy.abs() <= self.range
    }
}

/// State of the quiz card.
#[derive(Debug, Clone, Default)]
pub struct RiggedQuiz {
    offset: Offset,
}

impl RiggedQuiz {
    /// Move the evasive target to a fresh offset sampled uniformly in
    /// `[-range, range]` on each axis, avoiding the correct target.
    pub fn dodge<R: Rng>(&mut self, layout: &QuizLayout, rng: &mut R) -> Offset {
        let range = layout.range;
        self.offset = (0..MAX_SAMPLES)
            .map(|_| Offset {
                dx: rng.random_range(-range..=range),
                dy: rng.random_range(-range..=range),
            })
            .find(|o| !layout.overlaps_correct(*o))
            .unwrap_or_default();
        self.offset
    }

    /// Current displacement of the evasive target.
    pub fn offset(&self) -> Offset {
        self.offset
    }
}

/// The taunt to show after `attempts` evasive attempts, if any.
pub fn taunt_for(attempts: u32) -> Option<&'static str> {
    (attempts > TAUNT_AFTER).then_some(TAUNT)
}
