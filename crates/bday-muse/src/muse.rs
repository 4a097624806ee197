//! The collaborator seam: something that writes riddles, reactions and
//! birthday poems.

use std::future::Future;

use bday_core::RiddleContent;

use crate::error::MuseResult;
use crate::fallback;

/// A source of generated text.
pub trait Muse {
    /// A riddle with a hint.
    fn riddle(&self) -> impl Future<Output = MuseResult<RiddleContent>> + Send;

    /// A one-line reaction to the chosen emoji symbols.
    fn reaction(&self, symbols: &[String]) -> impl Future<Output = MuseResult<String>> + Send;

    /// The closing birthday poem.
    fn closing_wish(&self) -> impl Future<Output = MuseResult<String>> + Send;
}

/// Answers with fixed offline text and never touches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedMuse;

impl Muse for CannedMuse {
    async fn riddle(&self) -> MuseResult<RiddleContent> {
        Ok(RiddleContent::new(
            fallback::RIDDLE_OFFLINE,
            fallback::HINT_OFFLINE,
        ))
    }

    async fn reaction(&self, _symbols: &[String]) -> MuseResult<String> {
        Ok(fallback::REACTION_OFFLINE.to_string())
    }

    async fn closing_wish(&self) -> MuseResult<String> {
        Ok(fallback::WISH_NO_KEY.to_string())
    }
}
