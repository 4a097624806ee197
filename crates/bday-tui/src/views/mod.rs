//! Drawing: one module per group of stages.

pub mod games;
pub mod missions;
pub mod party;

use bday_core::Scene;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::shared;

/// Draw the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Progress
            Constraint::Min(0),    // Stage
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let stage = app.stage();
    shared::draw_progress(frame, app.engine.itinerary(), stage, chunks[0]);

    // The party sequence gets the whole stage; missions sit on a card.
    let area = if stage.is_party() {
        chunks[1]
    } else {
        shared::centered_rect(80, 90, chunks[1])
    };
    match app.engine.scene() {
        Scene::Intro => missions::draw_intro(frame, area),
        Scene::Riddle(desk) => missions::draw_riddle(frame, app, desk, area),
        Scene::DescribeMe(picker) => missions::draw_describe_me(frame, app, picker, area),
        Scene::MemoryMatch(board) => games::draw_memory(frame, app, board, area),
        Scene::Quiz(quiz) => missions::draw_quiz(frame, app, quiz, area),
        Scene::Hydration(meter) => games::draw_hydration(frame, meter, area),
        Scene::Unlock(vault) => missions::draw_unlock(frame, app, vault, area),
        Scene::Curtain(curtain) => party::draw_curtain(frame, curtain, area),
        Scene::Party => party::draw_party(frame, area),
        Scene::Cake(phase) => party::draw_cake(frame, *phase, area),
        Scene::Gift(phase) => party::draw_gift(frame, *phase, area),
        Scene::Reveal => party::draw_reveal(frame, app, area),
    }

    let hint = format!("{}  [{}]", shared::status_hint(stage), app.backend);
    let status = Paragraph::new(hint).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[2]);

    if let Some(notice) = &app.notice {
        shared::draw_notice(frame, notice);
    }
    if app.show_help {
        shared::draw_help_popup(frame);
    }
}
