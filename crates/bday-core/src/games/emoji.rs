//! Mission 2: describe me in exactly three emojis.

/// One entry of the emoji palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiItem {
    /// The emoji itself.
    pub symbol: &'static str,
    /// A short label for it.
    pub label: &'static str,
}

/// The fixed palette offered on the describe-me card.
pub const PALETTE: [EmojiItem; 8] = [
    EmojiItem { symbol: "\u{1F451}", label: "Bossy" },
    EmojiItem { symbol: "\u{1F921}", label: "Clown" },
    EmojiItem { symbol: "\u{1F970}", label: "Sweet" },
    EmojiItem { symbol: "\u{1F479}", label: "Monster" },
    EmojiItem { symbol: "\u{1F913}", label: "Nerd" },
    EmojiItem { symbol: "\u{1F984}", label: "Unique" },
    EmojiItem { symbol: "\u{1F4A4}", label: "Sleepy" },
    EmojiItem { symbol: "\u{1F355}", label: "Hungry" },
];

/// How many emojis must be picked before submitting.
pub const REQUIRED_PICKS: usize = 3;

/// Where the picker is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerPhase {
    /// Selection is open.
    Choosing,
    /// Submitted; waiting for the reaction text.
    AwaitingReaction,
    /// Showing the reaction before moving on.
    Reacting(String),
}

/// State of the emoji picker.
#[derive(Debug, Clone)]
pub struct EmojiPicker {
    selected: Vec<usize>,
    phase: PickerPhase,
}

impl Default for EmojiPicker {
    fn default() -> Self {
        Self {
            selected: Vec::with_capacity(REQUIRED_PICKS),
            phase: PickerPhase::Choosing,
        }
    }
}

impl EmojiPicker {
    /// Toggle the palette entry at `index`.
    ///
    /// Selecting a picked entry unpicks it. Picking a fourth entry while
    /// three are held does nothing. Returns whether the selection changed.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.phase != PickerPhase::Choosing || index >= PALETTE.len() {
            return false;
        }
        if let Some(pos) = self.selected.iter().position(|&i| i == index) {
            self.selected.remove(pos);
            return true;
        }
        if self.selected.len() >= REQUIRED_PICKS {
            return false;
        }
        self.selected.push(index);
        true
    }

    /// Whether submission is enabled.
    pub fn can_submit(&self) -> bool {
        self.phase == PickerPhase::Choosing && self.selected.len() == REQUIRED_PICKS
    }

    /// Whether the palette entry at `index` is picked.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Picked palette indices, in the order they were picked.
    pub fn selection(&self) -> &[usize] {
        &self.selected
    }

    /// Picked symbols, in the order they were picked.
    pub fn symbols(&self) -> Vec<String> {
        self.selected
            .iter()
            .map(|&i| PALETTE[i].symbol.to_string())
            .collect()
    }

    /// Current phase.
    pub fn phase(&self) -> &PickerPhase {
        &self.phase
    }

    /// Lock the selection for submission and return the picked symbols.
    pub(crate) fn submit(&mut self) -> Option<Vec<String>> {
        if !self.can_submit() {
            return None;
        }
        self.phase = PickerPhase::AwaitingReaction;
        Some(self.symbols())
    }

    /// Show the reaction. Returns `false` unless a reaction was awaited.
    pub(crate) fn react(&mut self, text: &str) -> bool {
        if self.phase != PickerPhase::AwaitingReaction {
            return false;
        }
        self.phase = PickerPhase::Reacting(text.to_string());
        true
    }
}
