//! Error types for the stage engine.
//!
//! Gameplay failures (a wrong riddle answer, a wrong password, a slider
//! pushed too fast) are not errors: they come back as
//! [`Outcome::Rejected`](crate::Outcome::Rejected). These types cover
//! misconfiguration and out-of-order driving of the engine.

use thiserror::Error;

use crate::stage::Stage;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised while validating an [`EngineConfig`](crate::EngineConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The itinerary has no stages.
    #[error("itinerary is empty")]
    EmptyItinerary,

    /// The itinerary does not begin with the intro.
    #[error("itinerary must start at {expected}, found {found}")]
    BadFirstStage {
        /// The stage every itinerary must start with.
        expected: Stage,
        /// The stage that was configured first.
        found: Stage,
    },

    /// The itinerary does not end with the reveal.
    #[error("itinerary must end at {expected}, found {found}")]
    BadLastStage {
        /// The stage every itinerary must end with.
        expected: Stage,
        /// The stage that was configured last.
        found: Stage,
    },

    /// Two stages appear out of enumeration order, or one appears twice.
    #[error("{later} cannot follow {earlier} in an itinerary")]
    Unordered {
        /// The stage listed first.
        earlier: Stage,
        /// The stage listed after it.
        later: Stage,
    },

    /// An itinerary name did not match any preset.
    #[error("unknown itinerary '{0}', use: full, classic, minimal")]
    UnknownItinerary(String),

    /// The riddle stage has no acceptable answers.
    #[error("riddle needs at least one accepted token")]
    NoRiddleTokens,

    /// The unlock secret is blank.
    #[error("unlock secret must not be blank")]
    BlankSecret,

    /// The memory-match stage is enabled without photos.
    #[error("memory match needs at least one photo")]
    NoPhotos,

    /// The quiz targets would overlap at their resting positions.
    #[error("quiz targets overlap: gap {gap} is narrower than target width {width}")]
    QuizOverlap {
        /// Horizontal distance between the two target anchors.
        gap: i32,
        /// Width of one target.
        width: i32,
    },

    /// The quiz offset range is negative.
    #[error("quiz dodge range must not be negative, got {0}")]
    NegativeRange(i32),
}

/// Errors that can occur while driving the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Configuration rejected at construction.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A transition was requested to a stage that is not the next one.
    #[error("cannot advance from {from} to {to}")]
    OutOfOrder {
        /// The current stage.
        from: Stage,
        /// The requested target.
        to: Stage,
    },

    /// The session is already at its final stage.
    #[error("{0} is the final stage")]
    Terminal(Stage),
}
