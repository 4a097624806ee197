//! Background thread that fulfils content requests.
//!
//! The UI thread never blocks on the network. Requests go to a worker
//! thread that owns a current-thread tokio runtime and the muse, and the
//! generated content comes back over a std channel the UI polls.

use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use bday_core::{Generated, Request, RiddleContent};
use bday_muse::{CannedMuse, GeminiMuse, Muse, MuseResult, fulfil};
use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};
use tracing::{debug, info};

/// The muse the worker talks to.
#[derive(Debug, Clone)]
pub enum Backend {
    /// Offline text only.
    Canned(CannedMuse),
    /// The Gemini API.
    Gemini(GeminiMuse),
}

impl Backend {
    /// Short name for logs and the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Canned(_) => "offline",
            Self::Gemini(_) => "gemini",
        }
    }
}

impl Muse for Backend {
    async fn riddle(&self) -> MuseResult<RiddleContent> {
        match self {
            Self::Canned(m) => m.riddle().await,
            Self::Gemini(m) => m.riddle().await,
        }
    }

    async fn reaction(&self, symbols: &[String]) -> MuseResult<String> {
        match self {
            Self::Canned(m) => m.reaction(symbols).await,
            Self::Gemini(m) => m.reaction(symbols).await,
        }
    }

    async fn closing_wish(&self) -> MuseResult<String> {
        match self {
            Self::Canned(m) => m.closing_wish().await,
            Self::Gemini(m) => m.closing_wish().await,
        }
    }
}

/// Handle to the worker thread.
///
/// Dropping it closes the request channel, which ends the thread and
/// abandons any request still in flight.
#[derive(Debug)]
pub struct Worker {
    requests: UnboundedSender<Request>,
    done: Receiver<Generated>,
}

impl Worker {
    /// Start the worker thread.
    pub fn spawn(backend: Backend) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let (request_tx, mut request_rx) = unbounded_channel::<Request>();
        let (done_tx, done_rx) = mpsc::channel::<Generated>();

        info!(backend = backend.label(), "starting muse worker");
        thread::Builder::new()
            .name("muse".to_string())
            .spawn(move || {
                runtime.block_on(async move {
                    // Requests run concurrently, so a slow riddle never
                    // holds back a reaction.
                    while let Some(request) = request_rx.recv().await {
                        let backend = backend.clone();
                        let done = done_tx.clone();
                        tokio::spawn(async move {
                            let generated = fulfil(&backend, request).await;
                            if done.send(generated).is_err() {
                                debug!("UI is gone, dropping generated content");
                            }
                        });
                    }
                });
                debug!("muse worker stopped");
            })?;

        Ok(Self {
            requests: request_tx,
            done: done_rx,
        })
    }

    /// Queue a request. Hands it back if the worker is gone.
    pub fn submit(&self, request: Request) -> Result<(), Request> {
        self.requests.send(request).map_err(|err| err.0)
    }

    /// Take one finished result, if any is ready.
    pub fn try_recv(&self) -> Option<Generated> {
        self.done.try_recv().ok()
    }

    /// A worker whose thread already stopped.
    #[cfg(test)]
    pub(crate) fn stopped() -> Self {
        let (requests, _) = unbounded_channel();
        let (_, done) = mpsc::channel();
        Self { requests, done }
    }
}
