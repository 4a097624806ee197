//! Whole-session walkthroughs driven purely through the public API.

use bday_core::{
    Engine, EngineConfig, Generated, Input, Itinerary, Outcome, Request, RiddleContent, Scene,
    Stage, StageEvent,
};

fn answer(engine: &mut Engine, request: Request) {
    let content = match request {
        Request::Riddle => Generated::Riddle(RiddleContent::new("What am I?", "Yummy!")),
        Request::Reaction { .. } => Generated::Reaction("Okay, fair enough.".into()),
        Request::ClosingWish => Generated::ClosingWish("Happy birthday, Sis!".into()),
    };
    engine.deliver(content);
}

fn answer_all(engine: &mut Engine) {
    for request in engine.take_requests() {
        answer(engine, request);
    }
}

#[test]
fn minimal_session_end_to_end() {
    let mut e = Engine::new(EngineConfig::default().with_itinerary(Itinerary::minimal()))
        .expect("config");
    answer_all(&mut e);

    assert_eq!(e.handle(Input::Begin), Outcome::Advanced(Stage::Riddle));
    assert_eq!(
        e.handle(Input::SubmitRiddle("my sister".into())),
        Outcome::Advanced(Stage::DescribeMe)
    );

    for index in [1, 4, 7] {
        e.handle(Input::ToggleEmoji(index));
    }
    assert_eq!(e.handle(Input::SubmitEmojis), Outcome::Pending);
    answer_all(&mut e);
    assert_eq!(e.advance_clock(3000), Some(Stage::Quiz));

    assert_eq!(e.handle(Input::ChooseCorrect), Outcome::Advanced(Stage::Unlock));
    assert_eq!(e.handle(Input::SubmitPassword("sister".into())), Outcome::Pending);
    answer_all(&mut e);

    assert_eq!(e.stage(), Stage::Reveal);
    assert!(e.is_finished());
    assert_eq!(
        e.session().generated().closing_wish(),
        Some("Happy birthday, Sis!")
    );
    assert_eq!(e.handle(Input::Begin), Outcome::Ignored);

    let entered: Vec<Stage> = e
        .take_events()
        .into_iter()
        .filter_map(|event| match event {
            StageEvent::Entered { to, .. } => Some(to),
            StageEvent::Rejected { .. } => None,
        })
        .collect();
    assert_eq!(entered, Itinerary::minimal().stages());
}

#[test]
fn full_session_with_choreography() {
    let mut e = Engine::new(EngineConfig::default().with_itinerary(Itinerary::full()))
        .expect("config");
    answer_all(&mut e);

    e.handle(Input::Begin);
    e.handle(Input::SubmitRiddle("CANDLE".into()));
    for index in 0..3 {
        e.handle(Input::ToggleEmoji(index));
    }
    e.handle(Input::SubmitEmojis);
    answer_all(&mut e);
    e.advance_clock(3000);
    assert_eq!(e.stage(), Stage::MemoryMatch);

    let Scene::MemoryMatch(board) = e.scene() else {
        panic!("expected the memory board");
    };
    let mut by_photo: Vec<(usize, usize)> = board
        .cards()
        .iter()
        .enumerate()
        .map(|(i, card)| (card.photo, i))
        .collect();
    by_photo.sort_unstable();
    for pair in by_photo.chunks(2) {
        e.handle(Input::FlipCard(pair[0].1));
        e.handle(Input::FlipCard(pair[1].1));
        e.advance_clock(500);
    }
    assert_eq!(e.advance_clock(1500), Some(Stage::Quiz));

    e.handle(Input::ChooseEvasive);
    e.handle(Input::ChooseCorrect);
    assert_eq!(e.stage(), Stage::Hydration);
    e.advance_clock(10_000);
    e.handle(Input::Slide(100));
    assert_eq!(
        e.handle(Input::ConfirmHydration),
        Outcome::Advanced(Stage::Unlock)
    );

    e.handle(Input::SubmitPassword("SISTER".into()));
    answer_all(&mut e);
    assert_eq!(e.stage(), Stage::Curtain);

    e.handle(Input::OpenCurtain);
    assert_eq!(e.advance_clock(13_000), Some(Stage::Cake));
    assert_eq!(e.advance_clock(9500), Some(Stage::Gift));
    e.handle(Input::OpenGift);
    assert_eq!(e.advance_clock(3500), Some(Stage::Reveal));
    assert!(e.take_requests().is_empty());
    assert_eq!(e.next_deadline(), None);
}

#[test]
fn reveal_without_unlock_still_gets_a_wish() {
    let itinerary =
        Itinerary::new(vec![Stage::Intro, Stage::Riddle, Stage::Reveal]).expect("itinerary");
    let mut e = Engine::new(EngineConfig::default().with_itinerary(itinerary)).expect("config");
    e.take_requests();
    e.handle(Input::Begin);
    e.handle(Input::SubmitRiddle("love".into()));
    assert_eq!(e.take_requests(), vec![Request::ClosingWish]);
}

#[test]
fn same_seed_deals_the_same_board() {
    let deal = |seed| {
        let mut e = Engine::new(
            EngineConfig::default()
                .with_seed(seed)
                .with_itinerary(Itinerary::full()),
        )
        .expect("config");
        for stage in [Stage::Riddle, Stage::DescribeMe, Stage::MemoryMatch] {
            e.advance(stage).expect("advance");
        }
        match e.scene() {
            Scene::MemoryMatch(board) => board.cards().to_vec(),
            _ => unreachable!(),
        }
    };
    assert_eq!(deal(7), deal(7));
}
