//! Mission 1: the riddle.

/// Answers accepted by default. Any answer containing one of these
/// (case-insensitively) passes.
pub const ACCEPTED_TOKENS: [&str; 9] = [
    "cake", "sister", "birthday", "sibling", "love", "gift", "candle", "party", "me",
];

/// Whether `answer` contains any of `tokens`, ignoring case.
pub fn is_accepted<S: AsRef<str>>(answer: &str, tokens: &[S]) -> bool {
    let answer = answer.to_lowercase();
    tokens
        .iter()
        .map(|t| t.as_ref().to_lowercase())
        .any(|t| !t.is_empty() && answer.contains(&t))
}

/// The inline error shown after a wrong answer.
pub fn miss_message(hint: Option<&str>) -> String {
    match hint {
        Some(hint) => format!("Nope! Here's a hint: {hint}"),
        None => "Nope! Try again.".to_string(),
    }
}

/// State of the riddle card.
#[derive(Debug, Clone, Default)]
pub struct RiddleDesk {
    error: Option<String>,
}

impl RiddleDesk {
    /// The error from the last wrong answer, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Hide the error, as when the player starts typing again.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
