//! Turning engine requests into delivered content.

use bday_core::{Generated, Request};
use tracing::{debug, warn};

use crate::error::{MuseError, MuseResult};
use crate::fallback;
use crate::muse::Muse;

/// Ask `muse` for the content behind `request`.
///
/// Never fails: any error, and any blank answer, is logged and replaced
/// with the fixed fallback for its kind.
pub async fn fulfil<M: Muse>(muse: &M, request: Request) -> Generated {
    debug!(?request, "fulfilling request");
    match request {
        Request::Riddle => {
            let content = muse.riddle().await.and_then(|content| {
                if content.riddle.trim().is_empty() {
                    Err(MuseError::Empty)
                } else {
                    Ok(content)
                }
            });
            Generated::Riddle(content.unwrap_or_else(|err| {
                warn!(%err, "riddle unavailable, using fallback");
                fallback::riddle(&err)
            }))
        }
        Request::Reaction { symbols } => {
            let text = non_blank(muse.reaction(&symbols).await);
            Generated::Reaction(text.unwrap_or_else(|err| {
                warn!(%err, "reaction unavailable, using fallback");
                fallback::reaction(&err)
            }))
        }
        Request::ClosingWish => {
            let text = non_blank(muse.closing_wish().await);
            Generated::ClosingWish(text.unwrap_or_else(|err| {
                warn!(%err, "closing wish unavailable, using fallback");
                fallback::closing_wish(&err)
            }))
        }
    }
}

fn non_blank(text: MuseResult<String>) -> MuseResult<String> {
    match text {
        Ok(text) if text.trim().is_empty() => Err(MuseError::Empty),
        other => other,
    }
}
