//! Stage progression engine for a birthday surprise.
//!
//! A session walks a fixed, ordered itinerary of stages: a riddle, an
//! emoji description, a rigged quiz, a password door, and a short party
//! sequence ending in a reveal. Each stage has a completion predicate or
//! a timer that moves the session on.
//!
//! The engine is sans-IO. It queues [`Request`]s for generated text and
//! takes the results back as [`Generated`] values, and it only sees time
//! through [`Engine::advance_clock`].

pub mod clock;
pub mod config;
pub mod content;
pub mod engine;
pub mod error;
pub mod event;
pub mod games;
pub mod scene;
pub mod session;
pub mod stage;

pub use clock::{Cue, Millis, TimerSet};
pub use config::{EngineConfig, Timings};
pub use content::{Generated, GeneratedContent, Request, RiddleContent};
pub use engine::Engine;
pub use error::{ConfigError, EngineError, EngineResult};
pub use event::{Input, Outcome, StageEvent};
pub use scene::Scene;
pub use session::{AttemptCounters, Session};
pub use stage::{Itinerary, Stage};
