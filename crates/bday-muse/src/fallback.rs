//! Fixed text used whenever generation fails.

use bday_core::{Generated, Request, RiddleContent};

use crate::error::MuseError;

/// Riddle used when there is nothing to ask the service with.
pub const RIDDLE_OFFLINE: &str =
    "I have icing but no snow. I have candles but no light bulb. What am I?";
/// Hint for [`RIDDLE_OFFLINE`].
pub const HINT_OFFLINE: &str = "Yummy!";
/// Riddle used when the service failed.
pub const RIDDLE_ERROR: &str = "We grew up together, we fight and we play. I'm the one annoying you on your special day. Who am I?";
/// Hint for [`RIDDLE_ERROR`].
pub const HINT_ERROR: &str = "Your Sibling!";

/// Reaction used when there is nothing to ask the service with.
pub const REACTION_OFFLINE: &str = "Wow, really? That's how you see me? Okay, fair enough.";
/// Reaction used when the service failed.
pub const REACTION_ERROR: &str = "Interesting choice of emojis... I'll allow it.";

/// Closing wish when no API key is configured.
pub const WISH_NO_KEY: &str = "Happy Birthday! You are the best sister anyone could ask for. (API Key missing, but my love is real!)";
/// Closing wish when the service answered with nothing.
pub const WISH_EMPTY: &str =
    "Happy Birthday to the best sister in the world! (Even though I'm the favorite child).";
/// Closing wish when the service failed.
pub const WISH_ERROR: &str = "Happy Birthday! You are the best sister anyone could ask for. Here is to another year of laughing at our own jokes and keeping each other sane!";

/// Fallback riddle for `err`.
pub fn riddle(err: &MuseError) -> RiddleContent {
    if err.is_silent() {
        RiddleContent::new(RIDDLE_OFFLINE, HINT_OFFLINE)
    } else {
        RiddleContent::new(RIDDLE_ERROR, HINT_ERROR)
    }
}

/// Fallback emoji reaction for `err`.
pub fn reaction(err: &MuseError) -> String {
    if err.is_silent() {
        REACTION_OFFLINE.to_string()
    } else {
        REACTION_ERROR.to_string()
    }
}

/// Fallback closing wish for `err`.
pub fn closing_wish(err: &MuseError) -> String {
    match err {
        MuseError::MissingKey => WISH_NO_KEY,
        MuseError::Empty => WISH_EMPTY,
        _ => WISH_ERROR,
    }
    .to_string()
}

/// The fallback content answering `request` after `err`.
pub fn generated(request: &Request, err: &MuseError) -> Generated {
    match request {
        Request::Riddle => Generated::Riddle(riddle(err)),
        Request::Reaction { .. } => Generated::Reaction(reaction(err)),
        Request::ClosingWish => Generated::ClosingWish(closing_wish(err)),
    }
}
