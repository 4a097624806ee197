//! Prompts sent to the text model.

/// Asks for a short rhyming riddle as JSON.
pub const RIDDLE: &str = "Generate a cute, rhyming riddle where the answer is related to 'Sister', 'Birthday', or 'Cake'. Keep it short (4 lines max) and playful. Output JSON.";

/// Asks for a one-line reaction to the chosen emojis.
pub fn reaction(symbols: &[String]) -> String {
    format!(
        "My sister described me with these emojis: {}. Give a sassy, funny 1-sentence reaction to her choice.",
        symbols.join(" ")
    )
}

/// Asks for the closing poem addressed to `recipient`.
pub fn closing_wish(recipient: &str) -> String {
    format!(
        "Write a short, heartwarming, and slightly funny birthday poem for my sister named {recipient}. Mention shared memories, being the better sibling, and love. Max 60 words."
    )
}
