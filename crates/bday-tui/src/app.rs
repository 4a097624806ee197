//! Application state: the engine plus everything the views need that the
//! engine does not own (typed text, cursors, popups).

use bday_core::games::emoji::PALETTE;
use bday_core::games::hydration::FULL;
use bday_core::{Engine, Generated, Input, Millis, Scene, Stage, StageEvent};
use bday_muse::{MuseError, fallback};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, warn};

use crate::input::TextInput;
use crate::worker::Worker;

/// Columns in the emoji palette and the memory board.
pub const GRID_COLUMNS: usize = 4;
/// How far one key press moves the hydration slider.
pub const SLIDER_STEP: u8 = 5;

/// Which quiz answer has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizFocus {
    /// "You (User)".
    Correct,
    /// "Me (Sister)", the one that runs away.
    Evasive,
}

/// Main application state.
pub struct App {
    /// The stage engine.
    pub engine: Engine,
    /// Riddle answer or password being typed.
    pub input: TextInput,
    /// Highlighted emoji.
    pub emoji_cursor: usize,
    /// Highlighted memory card.
    pub card_cursor: usize,
    /// Focused quiz answer.
    pub quiz_focus: QuizFocus,
    /// Blocking message that must be dismissed.
    pub notice: Option<String>,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Which muse answers requests, for the status bar.
    pub backend: &'static str,
}

impl App {
    /// Wrap a freshly created engine.
    pub fn new(engine: Engine, backend: &'static str) -> Self {
        let mut app = Self {
            engine,
            input: TextInput::default(),
            emoji_cursor: 0,
            card_cursor: 0,
            quiz_focus: QuizFocus::Correct,
            notice: None,
            show_help: false,
            should_quit: false,
            backend,
        };
        app.sync();
        app
    }

    /// The current stage.
    pub fn stage(&self) -> Stage {
        self.engine.stage()
    }

    /// Whether the current stage takes typed text.
    pub fn is_typing(&self) -> bool {
        matches!(self.stage(), Stage::Riddle | Stage::Unlock)
    }

    /// Send the engine's requests to `worker` and deliver whatever it
    /// finished. A request the worker can no longer take is answered
    /// with its fallback text on the spot.
    pub fn exchange(&mut self, worker: &Worker) {
        for request in self.engine.take_requests() {
            if let Err(request) = worker.submit(request) {
                warn!(?request, "muse worker is gone, using fallback");
                let err = MuseError::Transport("muse worker stopped".to_string());
                self.deliver(fallback::generated(&request, &err));
            }
        }
        while let Some(content) = worker.try_recv() {
            self.deliver(content);
        }
    }

    /// Hand generated content to the engine.
    pub fn deliver(&mut self, content: Generated) {
        self.engine.deliver(content);
        self.sync();
    }

    /// Move the engine clock forward.
    pub fn tick(&mut self, elapsed: Millis) {
        self.engine.advance_clock(elapsed);
        self.sync();
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.notice = None;
            }
            return;
        }
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }
        if self.is_typing() {
            self.handle_text_key(key);
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            _ => self.handle_stage_key(key),
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let text = self.input.text().to_string();
                let input = match self.stage() {
                    Stage::Riddle => Input::SubmitRiddle(text),
                    _ => Input::SubmitPassword(text),
                };
                self.apply(input);
            }
            KeyCode::Left => self.input.cursor_left(),
            KeyCode::Right => self.input.cursor_right(),
            KeyCode::Home => self.input.cursor_home(),
            KeyCode::End => self.input.cursor_end(),
            KeyCode::Esc => self.edit(TextInput::clear),
            KeyCode::Backspace => self.edit(TextInput::backspace),
            KeyCode::Delete => self.edit(TextInput::delete_char),
            KeyCode::Char(c) => self.edit(|input| input.push_char(c)),
            _ => {}
        }
    }

    /// Change the typed text. Any edit hides the last riddle miss.
    fn edit(&mut self, change: impl FnOnce(&mut TextInput)) {
        change(&mut self.input);
        self.engine.clear_riddle_error();
    }

    fn handle_stage_key(&mut self, key: KeyEvent) {
        let activate = matches!(key.code, KeyCode::Enter | KeyCode::Char(' '));
        match self.stage() {
            Stage::Intro if activate => {
                self.apply(Input::Begin);
            }
            Stage::DescribeMe => self.handle_emoji_key(key.code),
            Stage::MemoryMatch => self.handle_memory_key(key.code),
            Stage::Quiz => self.handle_quiz_key(key.code),
            Stage::Hydration => self.handle_hydration_key(key.code),
            Stage::Curtain if activate => {
                self.apply(Input::OpenCurtain);
            }
            Stage::Gift if activate => {
                self.apply(Input::OpenGift);
            }
            _ => {}
        }
    }

    fn handle_emoji_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(' ') => {
                self.apply(Input::ToggleEmoji(self.emoji_cursor));
            }
            KeyCode::Enter => {
                self.apply(Input::SubmitEmojis);
            }
            other => self.emoji_cursor = move_in_grid(self.emoji_cursor, PALETTE.len(), other),
        }
    }

    fn handle_memory_key(&mut self, code: KeyCode) {
        let cards = match self.engine.scene() {
            Scene::MemoryMatch(board) => board.cards().len(),
            _ => return,
        };
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.apply(Input::FlipCard(self.card_cursor));
            }
            other => self.card_cursor = move_in_grid(self.card_cursor, cards, other),
        }
    }

    fn handle_quiz_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') => self.quiz_focus = QuizFocus::Correct,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                // Merely reaching for "Me" is enough to make it run.
                self.quiz_focus = QuizFocus::Evasive;
                self.apply(Input::ChooseEvasive);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let input = match self.quiz_focus {
                    QuizFocus::Correct => Input::ChooseCorrect,
                    QuizFocus::Evasive => Input::ChooseEvasive,
                };
                self.apply(input);
            }
            _ => {}
        }
    }

    fn handle_hydration_key(&mut self, code: KeyCode) {
        let level = match self.engine.scene() {
            Scene::Hydration(meter) => meter.level(),
            _ => return,
        };
        let value = match code {
            KeyCode::Up | KeyCode::Right | KeyCode::Char('k') | KeyCode::Char('l') => {
                level.saturating_add(SLIDER_STEP)
            }
            KeyCode::Down | KeyCode::Left | KeyCode::Char('j') | KeyCode::Char('h') => {
                level.saturating_sub(SLIDER_STEP)
            }
            KeyCode::PageUp | KeyCode::End => FULL,
            KeyCode::PageDown | KeyCode::Home => 0,
            KeyCode::Enter => {
                self.apply(Input::ConfirmHydration);
                return;
            }
            _ => return,
        };
        self.apply(Input::Slide(value));
    }

    fn apply(&mut self, input: Input) {
        let outcome = self.engine.handle(input);
        debug!(?outcome, "input applied");
        self.sync();
    }

    /// React to everything the engine announced since the last call.
    fn sync(&mut self) {
        for event in self.engine.take_events() {
            match event {
                StageEvent::Entered { .. } => self.reset_transients(),
                StageEvent::Rejected {
                    stage: Stage::Unlock,
                    hint,
                } => self.notice = Some(hint),
                StageEvent::Rejected { .. } => {}
            }
        }
    }

    fn reset_transients(&mut self) {
        self.input.clear();
        self.emoji_cursor = 0;
        self.card_cursor = 0;
        self.quiz_focus = QuizFocus::Correct;
        self.notice = None;
    }
}

/// Move a cursor around a grid of `len` cells, `GRID_COLUMNS` wide.
fn move_in_grid(cursor: usize, len: usize, code: KeyCode) -> usize {
    if len == 0 {
        return 0;
    }
    let next = match code {
        KeyCode::Left | KeyCode::Char('h') => cursor.saturating_sub(1),
        KeyCode::Right | KeyCode::Char('l') => cursor + 1,
        KeyCode::Up | KeyCode::Char('k') => cursor.saturating_sub(GRID_COLUMNS),
        KeyCode::Down | KeyCode::Char('j') => cursor + GRID_COLUMNS,
        _ => cursor,
    };
    next.min(len - 1)
}
