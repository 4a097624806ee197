//! The stage progression engine.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use crate::clock::{Cue, Millis, TimerSet};
use crate::config::EngineConfig;
use crate::content::{Generated, Request};
use crate::error::{EngineError, EngineResult};
use crate::event::{Input, Outcome, StageEvent};
use crate::games::emoji::EmojiPicker;
use crate::games::hydration::{self, HydrationMeter, Slide};
use crate::games::memory::{Flip, MemoryBoard};
use crate::games::quiz::{self, RiggedQuiz};
use crate::games::riddle::{self, RiddleDesk};
use crate::games::show::{CakePhase, Curtain, GiftPhase};
use crate::games::unlock::{self, Vault};
use crate::scene::Scene;
use crate::session::Session;
use crate::stage::{Itinerary, Stage};

/// Drives one surprise session through its itinerary.
///
/// The engine performs no I/O. Content it needs is queued as [`Request`]s
/// for the caller to fulfil and hand back through [`Engine::deliver`].
/// Time only moves when the caller calls [`Engine::advance_clock`].
pub struct Engine {
    config: EngineConfig,
    session: Session,
    scene: Scene,
    timers: TimerSet,
    now: Millis,
    rng: StdRng,
    requests: Vec<Request>,
    events: Vec<StageEvent>,
    wish_requested: bool,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("stage", &self.session.stage())
            .field("now", &self.now)
            .field("timers", &self.timers.len())
            .field("requests", &self.requests.len())
            .finish()
    }
}

impl Engine {
    /// Validate `config` and start a session at the first itinerary stage.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let first = config.itinerary.first();
        let rng = StdRng::seed_from_u64(config.seed);
        let mut engine = Self {
            session: Session::new(first),
            scene: Scene::Intro,
            timers: TimerSet::new(),
            now: 0,
            rng,
            requests: Vec::new(),
            events: Vec::new(),
            wish_requested: false,
            config,
        };
        if engine.config.itinerary.contains(Stage::Riddle) {
            engine.requests.push(Request::Riddle);
        }
        engine.enter(None, first);
        Ok(engine)
    }

    /// Apply one player input.
    pub fn handle(&mut self, input: Input) -> Outcome {
        let stage = self.stage();
        let outcome = match input {
            Input::Begin => self.begin(),
            Input::SubmitRiddle(answer) => self.submit_riddle(&answer),
            Input::ToggleEmoji(index) => self.toggle_emoji(index),
            Input::SubmitEmojis => self.submit_emojis(),
            Input::FlipCard(index) => self.flip_card(index),
            Input::Slide(value) => self.slide(value),
            Input::ConfirmHydration => self.confirm_hydration(),
            Input::ChooseCorrect => self.choose_correct(),
            Input::ChooseEvasive => self.choose_evasive(),
            Input::SubmitPassword(text) => self.submit_password(&text),
            Input::OpenCurtain => self.open_curtain(),
            Input::OpenGift => self.open_gift(),
        };
        debug!(%stage, ?outcome, "input handled");
        outcome
    }

    /// Hand back content for an earlier [`Request`].
    ///
    /// A slot that is already filled keeps its first value.
    pub fn deliver(&mut self, content: Generated) {
        if !self.session.generated_mut().store(content.clone()) {
            debug!(?content, "duplicate content ignored");
            return;
        }
        match content {
            Generated::Riddle(_) => debug!("riddle arrived"),
            Generated::Reaction(text) => {
                let Scene::DescribeMe(picker) = &mut self.scene else {
                    return;
                };
                if picker.react(&text) {
                    let hold = self.config.timings.reaction_hold;
                    self.timers.schedule_after(self.now, hold, Cue::Advance);
                }
            }
            Generated::ClosingWish(_) => {
                if matches!(&self.scene, Scene::Unlock(vault) if vault.is_awaiting_wish()) {
                    self.step();
                }
            }
        }
    }

    /// Move the clock forward by `elapsed` and fire every timer that fell
    /// due, in deadline order. Returns the new stage if it changed.
    pub fn advance_clock(&mut self, elapsed: Millis) -> Option<Stage> {
        let before = self.stage();
        let target = self.now.saturating_add(elapsed);
        while let Some((due, cue)) = self.timers.pop_due(target) {
            self.now = self.now.max(due);
            trace!(?cue, at = due, "timer fired");
            self.fire(cue);
        }
        self.now = target;
        let after = self.stage();
        (after != before).then_some(after)
    }

    /// Unconditionally move to `to`, which must be the next itinerary stage.
    pub fn advance(&mut self, to: Stage) -> EngineResult<()> {
        let from = self.stage();
        match self.config.itinerary.successor(from) {
            None => Err(EngineError::Terminal(from)),
            Some(next) if next == to => {
                self.enter(Some(from), to);
                Ok(())
            }
            Some(_) => Err(EngineError::OutOfOrder { from, to }),
        }
    }

    /// Drain queued content requests.
    pub fn take_requests(&mut self) -> Vec<Request> {
        std::mem::take(&mut self.requests)
    }

    /// Drain emitted events.
    pub fn take_events(&mut self) -> Vec<StageEvent> {
        std::mem::take(&mut self.events)
    }

    /// The current stage.
    pub fn stage(&self) -> Stage {
        self.session.stage()
    }

    /// State of the current stage.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The itinerary being played.
    pub fn itinerary(&self) -> &Itinerary {
        &self.config.itinerary
    }

    /// Current logical time.
    pub fn now(&self) -> Millis {
        self.now
    }

    /// When the next timer is due, if any.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    /// The quiz taunt, once the player has chased the evasive target enough.
    pub fn taunt(&self) -> Option<&'static str> {
        if self.stage() != Stage::Quiz {
            return None;
        }
        quiz::taunt_for(self.session.attempts().get(Stage::Quiz))
    }

    /// Whether the session reached its final stage.
    pub fn is_finished(&self) -> bool {
        self.stage() == self.config.itinerary.last()
    }

    /// Hide the riddle's miss message, as soon as the player types again.
    pub fn clear_riddle_error(&mut self) {
        if let Scene::Riddle(desk) = &mut self.scene {
            desk.clear_error();
        }
    }

    fn enter(&mut self, from: Option<Stage>, to: Stage) {
        self.timers = TimerSet::new();
        self.session.enter(to, self.now);
        self.scene = self.build_scene(to);
        info!(from = ?from, %to, at = self.now, "stage entered");
        self.events.push(StageEvent::Entered {
            from,
            to,
            at: self.now,
        });

        let timings = &self.config.timings;
        match to {
            Stage::Party => self.timers.schedule_after(self.now, timings.party_hold, Cue::Advance),
            Stage::Cake => match self.scene {
                Scene::Cake(CakePhase::Countdown(_)) => {
                    self.timers.schedule_after(self.now, timings.cake_tick, Cue::CakeTick)
                }
                _ => self.timers.schedule_after(self.now, timings.cake_blown_hold, Cue::CakeCut),
            },
            Stage::Reveal => self.request_wish(),
            _ => {}
        }
    }

    fn build_scene(&mut self, stage: Stage) -> Scene {
        match stage {
            Stage::Intro => Scene::Intro,
            Stage::Riddle => Scene::Riddle(RiddleDesk::default()),
            Stage::DescribeMe => Scene::DescribeMe(EmojiPicker::default()),
            Stage::MemoryMatch => Scene::MemoryMatch(MemoryBoard::shuffled(
                self.config.memory_photos.len(),
                &mut self.rng,
            )),
            Stage::Quiz => Scene::Quiz(RiggedQuiz::default()),
            Stage::Hydration => Scene::Hydration(HydrationMeter::new(self.now)),
            Stage::Unlock => Scene::Unlock(Vault::default()),
            Stage::Curtain => Scene::Curtain(Curtain::default()),
            Stage::Party => Scene::Party,
            Stage::Cake => match self.config.timings.cake_countdown {
                0 => Scene::Cake(CakePhase::Blown),
                n => Scene::Cake(CakePhase::Countdown(n)),
            },
            Stage::Gift => Scene::Gift(GiftPhase::Closed),
            Stage::Reveal => Scene::Reveal,
        }
    }

    /// Move to the next itinerary stage.
    fn step(&mut self) -> Outcome {
        let from = self.stage();
        match self.config.itinerary.successor(from) {
            Some(to) => {
                self.enter(Some(from), to);
                Outcome::Advanced(to)
            }
            None => Outcome::Ignored,
        }
    }

    fn reject(&mut self, hint: String) -> Outcome {
        let stage = self.stage();
        debug!(%stage, %hint, "input rejected");
        self.events.push(StageEvent::Rejected {
            stage,
            hint: hint.clone(),
        });
        Outcome::Rejected { hint }
    }

    fn request_wish(&mut self) {
        if self.wish_requested || self.session.generated().closing_wish().is_some() {
            return;
        }
        self.wish_requested = true;
        self.requests.push(Request::ClosingWish);
    }

    fn fire(&mut self, cue: Cue) {
        let timings = &self.config.timings;
        match cue {
            Cue::Advance => {
                self.step();
            }
            Cue::ResolveMatch => {
                if let Scene::MemoryMatch(board) = &mut self.scene {
                    board.resolve();
                    if board.is_complete() {
                        self.timers.schedule_after(self.now, timings.memory_win_hold, Cue::Advance);
                    }
                }
            }
            Cue::ResetMeter => {
                if let Scene::Hydration(meter) = &mut self.scene {
                    meter.reset();
                }
            }
            Cue::CakeTick => {
                if let Scene::Cake(phase) = &mut self.scene {
                    *phase = phase.tick();
                    match phase {
                        CakePhase::Countdown(_) => {
                            self.timers.schedule_after(self.now, timings.cake_tick, Cue::CakeTick)
                        }
                        CakePhase::Blown => {
                            self.timers
                                .schedule_after(self.now, timings.cake_blown_hold, Cue::CakeCut)
                        }
                        CakePhase::Cut => {}
                    }
                }
            }
            Cue::CakeCut => {
                if let Scene::Cake(phase) = &mut self.scene {
                    *phase = CakePhase::Cut;
                    self.timers.schedule_after(self.now, timings.cake_cut_hold, Cue::Advance);
                }
            }
            Cue::GiftSparkle => {
                if let Scene::Gift(phase @ GiftPhase::Opening) = &mut self.scene {
                    *phase = GiftPhase::Sparkling;
                }
            }
        }
    }

    fn begin(&mut self) -> Outcome {
        match self.scene {
            Scene::Intro => self.step(),
            _ => Outcome::Ignored,
        }
    }

    fn submit_riddle(&mut self, answer: &str) -> Outcome {
        if !matches!(self.scene, Scene::Riddle(_)) {
            return Outcome::Ignored;
        }
        if riddle::is_accepted(answer, &self.config.riddle_tokens) {
            return self.step();
        }
        let hint = riddle::miss_message(
            self.session
                .generated()
                .riddle()
                .map(|content| content.hint.as_str()),
        );
        self.session.attempts_mut().bump(Stage::Riddle);
        if let Scene::Riddle(desk) = &mut self.scene {
            desk.set_error(hint.clone());
        }
        self.reject(hint)
    }

    fn toggle_emoji(&mut self, index: usize) -> Outcome {
        let Scene::DescribeMe(picker) = &mut self.scene else {
            return Outcome::Ignored;
        };
        if picker.toggle(index) {
            Outcome::Accepted
        } else {
            Outcome::Ignored
        }
    }

    fn submit_emojis(&mut self) -> Outcome {
        let Scene::DescribeMe(picker) = &mut self.scene else {
            return Outcome::Ignored;
        };
        match picker.submit() {
            Some(symbols) => {
                self.requests.push(Request::Reaction { symbols });
                Outcome::Pending
            }
            None => Outcome::Ignored,
        }
    }

    fn flip_card(&mut self, index: usize) -> Outcome {
        let Scene::MemoryMatch(board) = &mut self.scene else {
            return Outcome::Ignored;
        };
        match board.flip(index) {
            Flip::Ignored => Outcome::Ignored,
            Flip::Revealed => Outcome::Accepted,
            Flip::Compare { matched } => {
                let timings = &self.config.timings;
                let hold = if matched {
                    timings.match_hold
                } else {
                    timings.mismatch_hold
                };
                self.timers.schedule_after(self.now, hold, Cue::ResolveMatch);
                Outcome::Pending
            }
        }
    }

    fn slide(&mut self, value: u8) -> Outcome {
        let Scene::Hydration(meter) = &mut self.scene else {
            return Outcome::Ignored;
        };
        let timings = &self.config.timings;
        match meter.slide(value, self.now, timings.hydration_threshold) {
            Slide::Ignored => Outcome::Ignored,
            Slide::Moved | Slide::Hydrated => Outcome::Accepted,
            Slide::TooFast => {
                self.timers.schedule_after(self.now, timings.hydration_error_hold, Cue::ResetMeter);
                self.session.attempts_mut().bump(Stage::Hydration);
                self.reject(hydration::TOO_FAST.to_string())
            }
        }
    }

    fn confirm_hydration(&mut self) -> Outcome {
        if matches!(&self.scene, Scene::Hydration(meter) if meter.is_hydrated()) {
            self.step()
        } else {
            Outcome::Ignored
        }
    }

    fn choose_correct(&mut self) -> Outcome {
        match self.scene {
            Scene::Quiz(_) => self.step(),
            _ => Outcome::Ignored,
        }
    }

    fn choose_evasive(&mut self) -> Outcome {
        let Scene::Quiz(quiz) = &mut self.scene else {
            return Outcome::Ignored;
        };
        let offset = quiz.dodge(&self.config.quiz, &mut self.rng);
        let attempts = self.session.attempts_mut().bump(Stage::Quiz);
        debug!(dx = offset.dx, dy = offset.dy, attempts, "evasive target moved");
        Outcome::Accepted
    }

    fn submit_password(&mut self, text: &str) -> Outcome {
        let Scene::Unlock(vault) = &mut self.scene else {
            return Outcome::Ignored;
        };
        if vault.is_awaiting_wish() {
            return Outcome::Ignored;
        }
        if !unlock::unlocks(text, &self.config.secret) {
            self.session.attempts_mut().bump(Stage::Unlock);
            return self.reject(unlock::WRONG_PASSWORD.to_string());
        }
        if self.session.generated().closing_wish().is_some() {
            return self.step();
        }
        vault.await_wish();
        self.request_wish();
        Outcome::Pending
    }

    fn open_curtain(&mut self) -> Outcome {
        let Scene::Curtain(curtain) = &mut self.scene else {
            return Outcome::Ignored;
        };
        if !curtain.open() {
            return Outcome::Ignored;
        }
        self.timers.schedule_after(self.now, self.config.timings.curtain_open, Cue::Advance);
        Outcome::Pending
    }

    fn open_gift(&mut self) -> Outcome {
        match &mut self.scene {
            Scene::Gift(phase @ GiftPhase::Closed) => {
                *phase = GiftPhase::Opening;
                let timings = &self.config.timings;
                self.timers.schedule_after(self.now, timings.gift_sparkle, Cue::GiftSparkle);
                self.timers.schedule_after(self.now, timings.gift_open, Cue::Advance);
                Outcome::Pending
            }
            _ => Outcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::RiddleContent;
    use crate::games::emoji::PickerPhase;
    use crate::games::hydration::MeterState;
    use crate::games::memory::Half;

    fn engine(itinerary: Itinerary) -> Engine {
        Engine::new(EngineConfig::default().with_itinerary(itinerary)).unwrap()
    }

    fn engine_at(itinerary: Itinerary, stage: Stage) -> Engine {
        let mut engine = engine(itinerary);
        while engine.stage() != stage {
            let next = engine.itinerary().successor(engine.stage()).unwrap();
            engine.advance(next).unwrap();
        }
        engine
    }

    #[test]
    fn starts_at_intro_and_asks_for_a_riddle() {
        let mut e = engine(Itinerary::classic());
        assert_eq!(e.stage(), Stage::Intro);
        assert_eq!(e.now(), 0);
        assert_eq!(e.take_requests(), vec![Request::Riddle]);
        assert_eq!(
            e.take_events(),
            vec![StageEvent::Entered {
                from: None,
                to: Stage::Intro,
                at: 0
            }]
        );
        assert!(e.take_requests().is_empty());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = EngineConfig::default().with_secret("");
        assert!(matches!(Engine::new(cfg), Err(EngineError::Config(_))));
    }

    #[test]
    fn begin_advances_only_from_intro() {
        let mut e = engine(Itinerary::classic());
        assert_eq!(e.handle(Input::Begin), Outcome::Advanced(Stage::Riddle));
        assert_eq!(e.handle(Input::Begin), Outcome::Ignored);
    }

    #[test]
    fn inputs_for_other_stages_are_ignored() {
        let mut e = engine(Itinerary::classic());
        assert_eq!(e.handle(Input::SubmitRiddle("cake".into())), Outcome::Ignored);
        assert_eq!(e.handle(Input::ChooseCorrect), Outcome::Ignored);
        assert_eq!(e.handle(Input::OpenGift), Outcome::Ignored);
        assert_eq!(e.stage(), Stage::Intro);
    }

    #[test]
    fn riddle_miss_before_and_after_content() {
        let mut e = engine_at(Itinerary::classic(), Stage::Riddle);
        assert_eq!(
            e.handle(Input::SubmitRiddle("a horse".into())),
            Outcome::Rejected {
                hint: "Nope! Try again.".into()
            }
        );
        e.deliver(Generated::Riddle(RiddleContent::new("What am I?", "Yummy!")));
        assert_eq!(
            e.handle(Input::SubmitRiddle("a horse".into())),
            Outcome::Rejected {
                hint: "Nope! Here's a hint: Yummy!".into()
            }
        );
        assert_eq!(e.session().attempts().get(Stage::Riddle), 2);
        match e.scene() {
            Scene::Riddle(desk) => assert_eq!(desk.error(), Some("Nope! Here's a hint: Yummy!")),
            other => panic!("unexpected scene {other:?}"),
        }
        e.clear_riddle_error();
        match e.scene() {
            Scene::Riddle(desk) => assert_eq!(desk.error(), None),
            other => panic!("unexpected scene {other:?}"),
        }
        assert_eq!(
            e.handle(Input::SubmitRiddle("It's about the CAKE!".into())),
            Outcome::Advanced(Stage::DescribeMe)
        );
    }

    #[test]
    fn emoji_reaction_holds_then_advances() {
        let mut e = engine_at(Itinerary::classic(), Stage::DescribeMe);
        e.take_requests();
        assert_eq!(e.handle(Input::SubmitEmojis), Outcome::Ignored);
        for i in [0, 3, 5] {
            assert_eq!(e.handle(Input::ToggleEmoji(i)), Outcome::Accepted);
        }
        assert_eq!(e.handle(Input::ToggleEmoji(6)), Outcome::Ignored);
        assert_eq!(e.handle(Input::SubmitEmojis), Outcome::Pending);
        assert_eq!(e.handle(Input::ToggleEmoji(0)), Outcome::Ignored);
        assert_eq!(e.handle(Input::SubmitEmojis), Outcome::Ignored);

        let requests = e.take_requests();
        assert!(matches!(&requests[..], [Request::Reaction { symbols }] if symbols.len() == 3));

        // Nothing happens until the reaction is in.
        assert_eq!(e.advance_clock(10_000), None);
        e.deliver(Generated::Reaction("Fair.".into()));
        match e.scene() {
            Scene::DescribeMe(p) => assert_eq!(p.phase(), &PickerPhase::Reacting("Fair.".into())),
            other => panic!("unexpected scene {other:?}"),
        }
        assert_eq!(e.advance_clock(2999), None);
        assert_eq!(e.advance_clock(1), Some(Stage::Quiz));
    }

    #[test]
    fn memory_match_resolves_and_wins() {
        let mut e = engine_at(Itinerary::full(), Stage::MemoryMatch);
        let pairs: Vec<(usize, usize)> = match e.scene() {
            Scene::MemoryMatch(board) => (0..4)
                .map(|photo| {
                    (
                        board.position_of(photo, Half::Left).unwrap(),
                        board.position_of(photo, Half::Right).unwrap(),
                    )
                })
                .collect(),
            other => panic!("unexpected scene {other:?}"),
        };

        // A mismatch flips back after a second.
        let (a, _) = pairs[0];
        let (b, _) = pairs[1];
        assert_eq!(e.handle(Input::FlipCard(a)), Outcome::Accepted);
        assert_eq!(e.handle(Input::FlipCard(b)), Outcome::Pending);
        assert_eq!(e.handle(Input::FlipCard(pairs[2].0)), Outcome::Ignored);
        e.advance_clock(999);
        assert_eq!(e.handle(Input::FlipCard(pairs[2].0)), Outcome::Ignored);
        e.advance_clock(1);
        if let Scene::MemoryMatch(board) = e.scene() {
            assert!(board.cards().iter().all(|c| !c.face_up));
        }

        for (i, &(left, right)) in pairs.iter().enumerate() {
            e.handle(Input::FlipCard(left));
            assert_eq!(e.handle(Input::FlipCard(right)), Outcome::Pending);
            e.advance_clock(500);
            if let Scene::MemoryMatch(board) = e.scene() {
                assert_eq!(board.matched_count(), (i + 1) * 2);
            }
            assert_eq!(e.handle(Input::FlipCard(left)), Outcome::Ignored);
        }
        assert_eq!(e.stage(), Stage::MemoryMatch);
        assert_eq!(e.advance_clock(1499), None);
        assert_eq!(e.advance_clock(1), Some(Stage::Quiz));
    }

    #[test]
    fn hydration_too_fast_then_patient() {
        let mut e = engine_at(Itinerary::full(), Stage::Hydration);
        assert_eq!(e.handle(Input::Slide(40)), Outcome::Accepted);
        assert_eq!(
            e.handle(Input::Slide(100)),
            Outcome::Rejected {
                hint: hydration::TOO_FAST.into()
            }
        );
        assert_eq!(e.handle(Input::Slide(50)), Outcome::Ignored);
        assert_eq!(e.handle(Input::ConfirmHydration), Outcome::Ignored);
        e.advance_clock(2000);
        match e.scene() {
            Scene::Hydration(m) => {
                assert_eq!(m.level(), 0);
                assert_eq!(m.state(), MeterState::Filling);
                assert_eq!(m.message(), hydration::RETRY);
            }
            other => panic!("unexpected scene {other:?}"),
        }
        e.advance_clock(8000);
        assert_eq!(e.handle(Input::Slide(250)), Outcome::Accepted);
        assert_eq!(e.handle(Input::Slide(10)), Outcome::Ignored);
        assert_eq!(
            e.handle(Input::ConfirmHydration),
            Outcome::Advanced(Stage::Unlock)
        );
        assert_eq!(e.session().attempts().get(Stage::Hydration), 1);
    }

    #[test]
    fn evasive_target_counts_and_taunts() {
        let mut e = engine_at(Itinerary::classic(), Stage::Quiz);
        for n in 1..=3 {
            assert_eq!(e.handle(Input::ChooseEvasive), Outcome::Accepted);
            assert_eq!(e.session().attempts().get(Stage::Quiz), n);
            assert_eq!(e.stage(), Stage::Quiz);
        }
        assert_eq!(e.taunt(), Some(quiz::TAUNT));
        assert_eq!(e.handle(Input::ChooseCorrect), Outcome::Advanced(Stage::Unlock));
        assert_eq!(e.taunt(), None);
    }

    #[test]
    fn password_waits_for_the_wish() {
        let mut e = engine_at(Itinerary::classic(), Stage::Unlock);
        e.take_requests();
        assert_eq!(
            e.handle(Input::SubmitPassword("sisters".into())),
            Outcome::Rejected {
                hint: unlock::WRONG_PASSWORD.into()
            }
        );
        assert_eq!(e.handle(Input::SubmitPassword(" sister ".into())), Outcome::Pending);
        assert_eq!(e.take_requests(), vec![Request::ClosingWish]);
        assert_eq!(e.handle(Input::SubmitPassword("SISTER".into())), Outcome::Ignored);
        e.deliver(Generated::ClosingWish("Happy birthday!".into()));
        assert_eq!(e.stage(), Stage::Curtain);
        assert_eq!(e.session().attempts().get(Stage::Unlock), 1);
    }

    #[test]
    fn cached_wish_unlocks_immediately() {
        let mut e = engine_at(Itinerary::minimal(), Stage::Unlock);
        e.deliver(Generated::ClosingWish("early".into()));
        assert_eq!(
            e.handle(Input::SubmitPassword("Sister".into())),
            Outcome::Advanced(Stage::Reveal)
        );
        assert!(!e.take_requests().contains(&Request::ClosingWish));
        assert!(e.is_finished());
    }

    #[test]
    fn curtain_and_party_run_on_timers() {
        let mut e = engine_at(Itinerary::classic(), Stage::Curtain);
        assert_eq!(e.next_deadline(), None);
        assert_eq!(e.handle(Input::OpenCurtain), Outcome::Pending);
        assert_eq!(e.handle(Input::OpenCurtain), Outcome::Ignored);
        assert_eq!(e.advance_clock(5000), Some(Stage::Party));
        assert_eq!(e.advance_clock(7999), None);
        assert_eq!(e.advance_clock(1), Some(Stage::Cake));
    }

    #[test]
    fn party_runs_its_own_eight_seconds() {
        let mut e = engine_at(Itinerary::classic(), Stage::Curtain);
        e.handle(Input::OpenCurtain);
        assert_eq!(e.advance_clock(12_999), Some(Stage::Party));
        assert_eq!(e.session().entered_at(), 5000);
        assert_eq!(e.advance_clock(1), Some(Stage::Cake));
        assert_eq!(e.session().entered_at(), 13_000);
    }

    #[test]
    fn holds_near_the_end_of_time_do_not_overflow() {
        let mut e = engine_at(Itinerary::classic(), Stage::DescribeMe);
        assert_eq!(e.advance_clock(Millis::MAX), None);
        for i in 0..3 {
            e.handle(Input::ToggleEmoji(i));
        }
        assert_eq!(e.handle(Input::SubmitEmojis), Outcome::Pending);
        e.deliver(Generated::Reaction("ok".into()));
        assert_eq!(e.next_deadline(), Some(Millis::MAX));
        assert_eq!(e.advance_clock(1), Some(Stage::Quiz));
    }

    #[test]
    fn cake_phases_follow_the_countdown() {
        let mut e = engine_at(Itinerary::classic(), Stage::Cake);
        let phase = |e: &Engine| match e.scene() {
            Scene::Cake(p) => *p,
            other => panic!("unexpected scene {other:?}"),
        };
        assert_eq!(phase(&e), CakePhase::Countdown(3));
        e.advance_clock(1000);
        assert_eq!(phase(&e), CakePhase::Countdown(2));
        e.advance_clock(2000);
        assert_eq!(phase(&e), CakePhase::Blown);
        e.advance_clock(2500);
        assert_eq!(phase(&e), CakePhase::Cut);
        assert_eq!(e.advance_clock(3999), None);
        assert_eq!(e.advance_clock(1), Some(Stage::Gift));
    }

    #[test]
    fn gift_sparkles_then_reveals() {
        let mut e = engine_at(Itinerary::classic(), Stage::Gift);
        assert_eq!(e.handle(Input::OpenGift), Outcome::Pending);
        assert_eq!(e.handle(Input::OpenGift), Outcome::Ignored);
        e.advance_clock(500);
        assert!(matches!(e.scene(), Scene::Gift(GiftPhase::Sparkling)));
        assert_eq!(e.advance_clock(3000), Some(Stage::Reveal));
        assert!(e.is_finished());
    }

    #[test]
    fn reveal_asks_for_a_missing_wish_once() {
        let mut e = engine_at(Itinerary::classic(), Stage::Reveal);
        let wishes = e
            .take_requests()
            .into_iter()
            .filter(|r| *r == Request::ClosingWish)
            .count();
        assert_eq!(wishes, 1);
    }

    #[test]
    fn manual_advance_checks_order() {
        let mut e = engine(Itinerary::minimal());
        assert_eq!(
            e.advance(Stage::Quiz),
            Err(EngineError::OutOfOrder {
                from: Stage::Intro,
                to: Stage::Quiz
            })
        );
        let mut e = engine_at(Itinerary::minimal(), Stage::Reveal);
        assert_eq!(
            e.advance(Stage::Reveal),
            Err(EngineError::Terminal(Stage::Reveal))
        );
    }

    #[test]
    fn leaving_a_stage_defuses_its_timers() {
        let mut e = engine_at(Itinerary::classic(), Stage::DescribeMe);
        for i in 0..3 {
            e.handle(Input::ToggleEmoji(i));
        }
        e.handle(Input::SubmitEmojis);
        e.deliver(Generated::Reaction("ok".into()));
        assert!(e.next_deadline().is_some());
        e.advance(Stage::Quiz).unwrap();
        assert_eq!(e.next_deadline(), None);
        assert_eq!(e.advance_clock(3000), None);
        assert_eq!(e.stage(), Stage::Quiz);
    }

    #[test]
    fn second_delivery_keeps_the_first() {
        let mut e = engine(Itinerary::classic());
        e.deliver(Generated::Riddle(RiddleContent::new("one", "a")));
        e.deliver(Generated::Riddle(RiddleContent::new("two", "b")));
        assert_eq!(e.session().generated().riddle().unwrap().riddle, "one");
    }
}
