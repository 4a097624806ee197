//! Configuration for a surprise session.

use serde::{Deserialize, Serialize};

use crate::clock::Millis;
use crate::error::ConfigError;
use crate::games::quiz::QuizLayout;
use crate::games::riddle::ACCEPTED_TOKENS;
use crate::games::unlock::DEFAULT_SECRET;
use crate::stage::{Itinerary, Stage};

/// Durations of every hold and animation, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings {
    /// How long the emoji reaction stays up before moving on.
    pub reaction_hold: Millis,
    /// Delay before a matching pair locks in.
    pub match_hold: Millis,
    /// Delay before a mismatched pair flips back.
    pub mismatch_hold: Millis,
    /// Delay between the last match and leaving the board.
    pub memory_win_hold: Millis,
    /// Minimum time on the hydration stage before a full meter counts.
    pub hydration_threshold: Millis,
    /// How long the "senses lies" error shows before the meter drains.
    pub hydration_error_hold: Millis,
    /// Curtain opening animation.
    pub curtain_open: Millis,
    /// Party lights before the cake.
    pub party_hold: Millis,
    /// Length of one cake countdown step.
    pub cake_tick: Millis,
    /// Countdown start value.
    pub cake_countdown: u8,
    /// Hold after the candle goes out.
    pub cake_blown_hold: Millis,
    /// Hold after the cake is cut.
    pub cake_cut_hold: Millis,
    /// Delay before the gift sparkles.
    pub gift_sparkle: Millis,
    /// Delay between opening the gift and the reveal.
    pub gift_open: Millis,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            reaction_hold: 3000,
            match_hold: 500,
            mismatch_hold: 1000,
            memory_win_hold: 1500,
            hydration_threshold: 10_000,
            hydration_error_hold: 2000,
            curtain_open: 5000,
            party_hold: 8000,
            cake_tick: 1000,
            cake_countdown: 3,
            cake_blown_hold: 2500,
            cake_cut_hold: 4000,
            gift_sparkle: 500,
            gift_open: 3500,
        }
    }
}

/// Configuration for one session.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for the card shuffle and the evasive target.
    pub seed: u64,
    /// Stages played, in order.
    pub itinerary: Itinerary,
    /// Password for the unlock stage.
    pub secret: String,
    /// Answers the riddle accepts (substring, case-insensitive).
    pub riddle_tokens: Vec<String>,
    /// Photo labels for memory match; each becomes two cards.
    pub memory_photos: Vec<String>,
    /// Captions of the reveal gallery.
    pub gallery: Vec<String>,
    /// Text of the gift coupon on the reveal.
    pub coupon: String,
    /// Hold and animation durations.
    pub timings: Timings,
    /// Quiz target geometry.
    pub quiz: QuizLayout,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            itinerary: Itinerary::default(),
            secret: DEFAULT_SECRET.to_string(),
            riddle_tokens: ACCEPTED_TOKENS.iter().map(|t| t.to_string()).collect(),
            memory_photos: (1..=4).map(|i| format!("game{i}.jpg")).collect(),
            gallery: vec![
                "Remember this?".to_string(),
                "Besties Forever".to_string(),
                "Chaos Duo".to_string(),
            ],
            coupon: "Redeem for: 1 Free Lunch & 30 mins of no annoying jokes.".to_string(),
            timings: Timings::default(),
            quiz: QuizLayout::default(),
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the itinerary.
    pub fn with_itinerary(mut self, itinerary: Itinerary) -> Self {
        self.itinerary = itinerary;
        self
    }

    /// Set the unlock password.
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = secret.into();
        self
    }

    /// Set the memory-match photo labels.
    pub fn with_photos(mut self, photos: Vec<String>) -> Self {
        self.memory_photos = photos;
        self
    }

    /// Set the hold and animation durations.
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.trim().is_empty() {
            return Err(ConfigError::BlankSecret);
        }
        if self.itinerary.contains(Stage::Riddle)
            && self.riddle_tokens.iter().all(|t| t.trim().is_empty())
        {
            return Err(ConfigError::NoRiddleTokens);
        }
        if self.itinerary.contains(Stage::MemoryMatch) && self.memory_photos.is_empty() {
            return Err(ConfigError::NoPhotos);
        }
        self.quiz.validate()
    }
}
