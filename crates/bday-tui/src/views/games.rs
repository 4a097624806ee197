//! The optional extra stages: memory match and the hydration meter.

use bday_core::games::hydration::{HydrationMeter, MeterState};
use bday_core::games::memory::{Card, Half, MemoryBoard};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap};

use crate::app::{App, GRID_COLUMNS};
use crate::shared::card;

/// Draw the memory board as a grid of cards.
pub fn draw_memory(frame: &mut Frame, app: &App, board: &MemoryBoard, area: Rect) {
    let block = card("Mission 2: Complete the Memory", Color::Magenta);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);
    let intro = if board.is_resolving() {
        Paragraph::new("Hmm, let's see...").style(Style::default().fg(Color::Yellow).italic())
    } else {
        Paragraph::new("Find the two halves of our photos to complete the memory!")
            .style(Style::default().fg(Color::Gray))
    }
    .alignment(Alignment::Center);
    frame.render_widget(intro, chunks[0]);

    let cards = board.cards();
    let rows = cards.len().div_ceil(GRID_COLUMNS).max(1);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(chunks[1]);

    let photos = &app.engine.config().memory_photos;
    for (r, row) in cards.chunks(GRID_COLUMNS).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(row_areas[r]);
        for (c, item) in row.iter().enumerate() {
            let index = r * GRID_COLUMNS + c;
            let label = photos.get(item.photo).map(String::as_str).unwrap_or("?");
            draw_card(frame, item, label, index == app.card_cursor, cells[c]);
        }
    }
}

fn draw_card(frame: &mut Frame, item: &Card, photo: &str, highlighted: bool, area: Rect) {
    let border = if item.matched {
        Color::Green
    } else if highlighted {
        Color::Yellow
    } else {
        Color::LightMagenta
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if highlighted {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(border));

    let text = if item.face_up || item.matched {
        let half = match item.half {
            Half::Left => "\u{25E7} left",
            Half::Right => "right \u{25E8}",
        };
        vec![
            Line::from(photo.to_string()).bold(),
            Line::from(half).style(Style::default().fg(Color::Gray)),
        ]
    } else {
        vec![Line::from(" ? ").style(Style::default().fg(Color::White).bold())]
    };
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Draw the hydration meter.
pub fn draw_hydration(frame: &mut Frame, meter: &HydrationMeter, area: Rect) {
    let block = card("Hydration Check", Color::LightBlue);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Prompt
            Constraint::Length(3), // Gauge
            Constraint::Length(3), // Message
            Constraint::Min(0),    // Continue
        ])
        .split(inner);

    let prompt = Paragraph::new(vec![
        Line::from(""),
        Line::from("Have you had enough water today? Fill the glass."),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(prompt, chunks[0]);

    let color = match meter.state() {
        MeterState::Filling => Color::LightBlue,
        MeterState::Busted => Color::Red,
        MeterState::Hydrated => Color::Green,
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .percent(u16::from(meter.level()));
    frame.render_widget(gauge, chunks[1]);

    let message = Paragraph::new(meter.message())
        .style(Style::default().fg(color).bold())
        .alignment(Alignment::Center);
    frame.render_widget(message, chunks[2]);

    if meter.is_hydrated() {
        let button = Paragraph::new(Span::styled(
            "[ Brought with love \u{1F495} ]",
            Style::default().fg(Color::Black).bg(Color::LightBlue).bold(),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(button, chunks[3]);
    }
}
