//! The final door: a password, checked exactly.

/// The default secret.
pub const DEFAULT_SECRET: &str = "SISTER";

/// Shown when the password is wrong.
pub const WRONG_PASSWORD: &str = "Wrong password! Hint: What are you to me?";

/// Whether `input` opens the door: trimmed, case-insensitive, exact.
///
/// Unlike the riddle there is no substring matching, so "sisters" does
/// not open a door locked with "SISTER".
pub fn unlocks(input: &str, secret: &str) -> bool {
    input.trim().to_uppercase() == secret.trim().to_uppercase()
}

/// State of the unlock card.
#[derive(Debug, Clone, Default)]
pub struct Vault {
    awaiting_wish: bool,
}

impl Vault {
    /// Whether the door is open and the closing wish is on its way.
    pub fn is_awaiting_wish(&self) -> bool {
        self.awaiting_wish
    }

    pub(crate) fn await_wish(&mut self) {
        self.awaiting_wish = true;
    }
}
