//! The active stage's state, as views see it.

use crate::games::emoji::EmojiPicker;
use crate::games::hydration::HydrationMeter;
use crate::games::memory::MemoryBoard;
use crate::games::quiz::RiggedQuiz;
use crate::games::riddle::RiddleDesk;
use crate::games::show::{CakePhase, Curtain, GiftPhase};
use crate::games::unlock::Vault;
use crate::stage::Stage;

/// Per-stage state. Replaced wholesale on every stage change, which is
/// what discards the previous stage's transient inputs.
#[derive(Debug, Clone)]
pub enum Scene {
    /// Landing card.
    Intro,
    /// Riddle card.
    Riddle(RiddleDesk),
    /// Emoji picker.
    DescribeMe(EmojiPicker),
    /// Memory board.
    MemoryMatch(MemoryBoard),
    /// Rigged quiz.
    Quiz(RiggedQuiz),
    /// Hydration meter.
    Hydration(HydrationMeter),
    /// Password door.
    Unlock(Vault),
    /// Curtain overlay.
    Curtain(Curtain),
    /// Party lights.
    Party,
    /// Cake scene.
    Cake(CakePhase),
    /// Gift box.
    Gift(GiftPhase),
    /// Final reveal.
    Reveal,
}

impl Scene {
    /// The stage this scene belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Intro => Stage::Intro,
            Self::Riddle(_) => Stage::Riddle,
            Self::DescribeMe(_) => Stage::DescribeMe,
            Self::MemoryMatch(_) => Stage::MemoryMatch,
            Self::Quiz(_) => Stage::Quiz,
            Self::Hydration(_) => Stage::Hydration,
            Self::Unlock(_) => Stage::Unlock,
            Self::Curtain(_) => Stage::Curtain,
            Self::Party => Stage::Party,
            Self::Cake(_) => Stage::Cake,
            Self::Gift(_) => Stage::Gift,
            Self::Reveal => Stage::Reveal,
        }
    }
}
