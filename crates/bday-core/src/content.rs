//! Messages exchanged with the text-generation collaborator.
//!
//! The engine only ever asks for content ([`Request`]) and later receives
//! it ([`Generated`]). Who answers, and how failures turn into fallback
//! text, is up to the caller.

use serde::{Deserialize, Serialize};

/// A riddle and the hint shown after a wrong answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiddleContent {
    /// The riddle text.
    pub riddle: String,
    /// The hint text.
    pub hint: String,
}

impl RiddleContent {
    /// Create riddle content.
    pub fn new(riddle: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            riddle: riddle.into(),
            hint: hint.into(),
        }
    }
}

/// Content the engine wants generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Request {
    /// A riddle with a hint, asked for as soon as the session starts.
    Riddle,
    /// A one-line reaction to the chosen emojis.
    Reaction {
        /// The selected symbols, in selection order.
        symbols: Vec<String>,
    },
    /// The closing birthday poem.
    ClosingWish,
}

/// Content delivered back to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Generated {
    /// Answer to [`Request::Riddle`].
    Riddle(RiddleContent),
    /// Answer to [`Request::Reaction`].
    Reaction(String),
    /// Answer to [`Request::ClosingWish`].
    ClosingWish(String),
}

/// The session's cache of generated content.
///
/// Each slot is filled at most once and never invalidated.
#[derive(Debug, Clone, Default)]
pub struct GeneratedContent {
    riddle: Option<RiddleContent>,
    reaction: Option<String>,
    closing_wish: Option<String>,
}

impl GeneratedContent {
    /// The riddle, once it has arrived.
    pub fn riddle(&self) -> Option<&RiddleContent> {
        self.riddle.as_ref()
    }

    /// The emoji reaction, once it has arrived.
    pub fn reaction(&self) -> Option<&str> {
        self.reaction.as_deref()
    }

    /// The closing wish, once it has arrived.
    pub fn closing_wish(&self) -> Option<&str> {
        self.closing_wish.as_deref()
    }

    /// Store delivered content. Returns `false` if the slot was already filled.
    pub fn store(&mut self, content: Generated) -> bool {
        match content {
            Generated::Riddle(r) => fill(&mut self.riddle, r),
            Generated::Reaction(text) => fill(&mut self.reaction, text),
            Generated::ClosingWish(text) => fill(&mut self.closing_wish, text),
        }
    }
}

fn fill<T>(slot: &mut Option<T>, value: T) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(value);
    true
}
