//! Text generation for the birthday surprise.
//!
//! [`Muse`] is the seam the engine's [`Request`](bday_core::Request)s are
//! fulfilled through. [`GeminiMuse`] talks to the Gemini REST API and
//! [`CannedMuse`] stays offline. [`fulfil`] wraps either one so that a
//! failure never blocks the session: it falls back to fixed text.

pub mod error;
pub mod fallback;
pub mod fulfil;
pub mod gemini;
pub mod muse;
pub mod prompt;

pub use error::{MuseError, MuseResult};
pub use fulfil::fulfil;
pub use gemini::GeminiMuse;
pub use muse::{CannedMuse, Muse};
