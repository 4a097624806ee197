//! Inputs the engine accepts, what it answers, and what it announces.

use serde::{Deserialize, Serialize};

use crate::clock::Millis;
use crate::stage::Stage;

/// One player action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Accept the challenge on the intro card.
    Begin,
    /// Submit a riddle answer.
    SubmitRiddle(String),
    /// Toggle the palette entry at this index.
    ToggleEmoji(usize),
    /// Submit the three picked emojis.
    SubmitEmojis,
    /// Click the memory card at this grid index.
    FlipCard(usize),
    /// Move the hydration slider to this value.
    Slide(u8),
    /// Confirm a full meter.
    ConfirmHydration,
    /// Pick the correct quiz target.
    ChooseCorrect,
    /// Go for the evasive quiz target (hover or click).
    ChooseEvasive,
    /// Submit the unlock password.
    SubmitPassword(String),
    /// Tap the curtain.
    OpenCurtain,
    /// Tap the gift box.
    OpenGift,
}

/// The engine's answer to one [`Input`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The stage advanced to the given stage.
    Advanced(Stage),
    /// Stage state changed; the stage did not.
    Accepted,
    /// The input failed the stage's predicate. Retry freely.
    Rejected {
        /// Inline hint for the player.
        hint: String,
    },
    /// A collaborator call or a timed hold is now in flight.
    Pending,
    /// The input does not apply right now.
    Ignored,
}

/// Something the engine announces to whoever is presenting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageEvent {
    /// A stage was entered.
    Entered {
        /// The stage left, if any.
        from: Option<Stage>,
        /// The stage entered.
        to: Stage,
        /// Clock time of the transition.
        at: Millis,
    },
    /// An input failed its stage's predicate.
    Rejected {
        /// The stage that rejected it.
        stage: Stage,
        /// The hint shown.
        hint: String,
    },
}
