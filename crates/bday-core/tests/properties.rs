//! Property tests for the stage predicates and retry loops.

use bday_core::games::emoji::{PALETTE, REQUIRED_PICKS};
use bday_core::games::quiz::QuizLayout;
use bday_core::games::riddle;
use bday_core::{Engine, EngineConfig, Input, Itinerary, Outcome, Scene, Stage};
use proptest::collection::vec;
use proptest::prelude::*;

fn engine_at(stage: Stage) -> Engine {
    let mut engine =
        Engine::new(EngineConfig::default().with_itinerary(Itinerary::full())).expect("config");
    while engine.stage() != stage {
        let next = engine
            .itinerary()
            .successor(engine.stage())
            .expect("successor");
        engine.advance(next).expect("advance");
    }
    engine
}

fn mixed_case(word: &str, upper: &[bool]) -> String {
    word.chars()
        .zip(upper.iter().cycle())
        .map(|(c, &up)| if up { c.to_ascii_uppercase() } else { c })
        .collect()
}

proptest! {
    /// Any casing of an accepted token, anywhere in the answer, passes.
    #[test]
    fn riddle_accepts_token_anywhere(
        prefix in "[a-z ,!']{0,12}",
        suffix in "[a-z ,!']{0,12}",
        token in prop::sample::select(riddle::ACCEPTED_TOKENS.to_vec()),
        upper in vec(any::<bool>(), 1..8),
    ) {
        let answer = format!("{prefix}{}{suffix}", mixed_case(token, &upper));
        prop_assert!(riddle::is_accepted(&answer, &riddle::ACCEPTED_TOKENS));
    }

    /// Wrong answers keep the riddle up and only count against the riddle.
    #[test]
    fn riddle_misses_stay_put(answers in vec("[qxzvw]{1,12}", 1..10)) {
        let mut engine = engine_at(Stage::Riddle);
        for answer in &answers {
            let outcome = engine.handle(Input::SubmitRiddle(answer.clone()));
            prop_assert!(matches!(outcome, Outcome::Rejected { .. }), "wanted a rejection");
            prop_assert_eq!(engine.stage(), Stage::Riddle);
        }
        let attempts = engine.session().attempts();
        prop_assert_eq!(attempts.get(Stage::Riddle), answers.len() as u32);
        prop_assert_eq!(attempts.total(), answers.len() as u32);
    }

    /// The picker never holds more than three distinct entries, and submit
    /// is enabled exactly at three.
    #[test]
    fn emoji_selection_stays_bounded(toggles in vec(0usize..PALETTE.len() + 2, 0..40)) {
        let mut engine = engine_at(Stage::DescribeMe);
        for index in toggles {
            engine.handle(Input::ToggleEmoji(index));
            let Scene::DescribeMe(picker) = engine.scene() else {
                panic!("left the picker");
            };
            let selection = picker.selection();
            prop_assert!(selection.len() <= REQUIRED_PICKS);
            let mut distinct = selection.to_vec();
            distinct.sort_unstable();
            distinct.dedup();
            prop_assert_eq!(distinct.len(), selection.len());
            prop_assert_eq!(picker.can_submit(), selection.len() == REQUIRED_PICKS);
        }
    }

    /// Matched cards stay matched, and the stage only moves on once the
    /// whole board is paired.
    #[test]
    fn memory_matches_are_permanent(
        steps in vec((0usize..8, 0u64..1200), 1..80),
    ) {
        let mut engine = engine_at(Stage::MemoryMatch);
        let mut matched = 0;
        for (index, wait) in steps {
            engine.handle(Input::FlipCard(index));
            let Scene::MemoryMatch(board) = engine.scene() else {
                break;
            };
            prop_assert!(board.matched_count() >= matched);
            matched = board.matched_count();
            let complete = board.is_complete();
            if engine.advance_clock(wait).is_some() {
                prop_assert!(complete);
            }
        }
        if engine.stage() != Stage::MemoryMatch {
            prop_assert_eq!(engine.stage(), Stage::Quiz);
        }
    }

    /// Every evasive activation counts, never advances, and stays in range
    /// without covering the correct target.
    #[test]
    fn evasive_target_never_yields(n in 1usize..60, seed in any::<u64>()) {
        let config = EngineConfig::default()
            .with_seed(seed)
            .with_itinerary(Itinerary::classic());
        let mut engine = Engine::new(config).expect("config");
        for stage in [Stage::Riddle, Stage::DescribeMe, Stage::Quiz] {
            engine.advance(stage).expect("advance");
        }
        let layout = QuizLayout::default();
        for i in 1..=n {
            prop_assert_eq!(engine.handle(Input::ChooseEvasive), Outcome::Accepted);
            prop_assert_eq!(engine.stage(), Stage::Quiz);
            prop_assert_eq!(engine.session().attempts().get(Stage::Quiz), i as u32);
            let Scene::Quiz(quiz) = engine.scene() else {
                panic!("left the quiz");
            };
            prop_assert!(layout.in_range(quiz.offset()));
            prop_assert!(!layout.overlaps_correct(quiz.offset()));
        }
    }

    /// Padding and casing do not matter; anything else does.
    #[test]
    fn password_is_trimmed_and_case_blind(
        left in "[ \t]{0,4}",
        right in "[ \t]{0,4}",
        upper in vec(any::<bool>(), 1..6),
        extra in "[a-z]{1,3}",
    ) {
        let word = mixed_case("sister", &upper);

        let mut engine = engine_at(Stage::Unlock);
        let wrong = engine.handle(Input::SubmitPassword(format!("{left}{word}{extra}{right}")));
        prop_assert!(matches!(wrong, Outcome::Rejected { .. }), "wanted a rejection");
        prop_assert_eq!(engine.stage(), Stage::Unlock);

        let right_answer = engine.handle(Input::SubmitPassword(format!("{left}{word}{right}")));
        prop_assert_eq!(right_answer, Outcome::Pending);
    }

    /// Filling the meter before the threshold always busts it.
    #[test]
    fn hydration_rejects_early_fills(wait in 0u64..10_000, value in 100u8..=255) {
        let mut engine = engine_at(Stage::Hydration);
        engine.advance_clock(wait);
        let outcome = engine.handle(Input::Slide(value));
        prop_assert!(matches!(outcome, Outcome::Rejected { .. }), "wanted a rejection");
        prop_assert_eq!(engine.stage(), Stage::Hydration);
        prop_assert_eq!(engine.session().attempts().get(Stage::Hydration), 1);
    }
}
