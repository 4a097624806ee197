//! The intro card, the three missions and the final door.

use bday_core::games::emoji::{EmojiPicker, PALETTE, PickerPhase, REQUIRED_PICKS};
use bday_core::games::quiz::RiggedQuiz;
use bday_core::games::riddle::RiddleDesk;
use bday_core::games::unlock::Vault;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{App, GRID_COLUMNS, QuizFocus};
use crate::shared::card;

/// Offset units per terminal column when drawing the evasive button.
const DODGE_SCALE_X: i32 = 8;
/// Offset units per terminal row when drawing the evasive button.
const DODGE_SCALE_Y: i32 = 25;

/// Draw the landing card.
pub fn draw_intro(frame: &mut Frame, area: Rect) {
    let block = card("Surprise", Color::Magenta);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Uh oh...",
            Style::default().fg(Color::Magenta).bold(),
        )),
        Line::from(""),
        Line::from("You've been digitally kidnapped!"),
        Line::from(""),
        Line::from(Span::styled(
            "To unlock your birthday surprise, you must prove you are my true sister by passing 3 challenges.",
            Style::default().fg(Color::LightMagenta),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[ I Accept the Challenge! ]",
            Style::default().fg(Color::Black).bg(Color::LightMagenta).bold(),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// Draw mission 1.
pub fn draw_riddle(frame: &mut Frame, app: &App, desk: &RiddleDesk, area: Rect) {
    let block = card("Mission 1: The Riddle", Color::LightRed);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),    // Riddle
            Constraint::Length(3), // Answer
            Constraint::Length(2), // Error
        ])
        .split(inner);

    let riddle = match app.engine.session().generated().riddle() {
        Some(content) => Line::from(Span::styled(
            content.riddle.clone(),
            Style::default().fg(Color::Yellow).italic(),
        )),
        None => Line::from(Span::styled(
            "Consulting the oracle...",
            Style::default().fg(Color::DarkGray).slow_blink(),
        )),
    };
    let riddle = Paragraph::new(vec![Line::from(""), riddle])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(riddle, chunks[0]);

    draw_text_input(
        frame,
        app.input.text().to_string(),
        app.input.cursor_column(),
        "Type your answer...",
        chunks[1],
    );

    if let Some(error) = desk.error() {
        let error = Paragraph::new(error.to_string())
            .style(Style::default().fg(Color::Red).bold())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(error, chunks[2]);
    }
}

/// Draw mission 2.
pub fn draw_describe_me(frame: &mut Frame, app: &App, picker: &EmojiPicker, area: Rect) {
    let block = card("Mission 2: Describe Me", Color::Magenta);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from("Pick exactly 3 emojis that describe your favorite sibling."),
        Line::from(""),
    ];

    match picker.phase() {
        PickerPhase::Choosing => {
            for (r, items) in PALETTE.chunks(GRID_COLUMNS).enumerate() {
                let spans: Vec<Span<'static>> = items
                    .iter()
                    .enumerate()
                    .map(|(c, item)| {
                        let index = r * GRID_COLUMNS + c;
                        let mut style = if picker.is_selected(index) {
                            Style::default().fg(Color::Black).bg(Color::LightMagenta)
                        } else {
                            Style::default().fg(Color::White)
                        };
                        if index == app.emoji_cursor {
                            style = style.underlined().bold();
                        }
                        Span::styled(format!(" {} {:<8}", item.symbol, item.label), style)
                    })
                    .collect();
                lines.push(Line::from(spans));
                lines.push(Line::from(""));
            }
            let ready = picker.can_submit();
            let button = format!(
                "[ Analyze My Choices ] {}/{}",
                picker.selection().len(),
                REQUIRED_PICKS
            );
            let style = if ready {
                Style::default().fg(Color::Black).bg(Color::LightMagenta).bold()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            lines.push(Line::from(Span::styled(button, style)));
        }
        PickerPhase::AwaitingReaction => {
            lines.push(Line::from(picker.symbols().join(" ")));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Analyzing...",
                Style::default().fg(Color::DarkGray).slow_blink(),
            )));
        }
        PickerPhase::Reacting(text) => {
            lines.push(Line::from(picker.symbols().join(" ")));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("\"{text}\""),
                Style::default().fg(Color::LightMagenta).italic(),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "(Moving to next level...)",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// Draw mission 3. The "Me" button is drawn displaced by the dodge offset.
pub fn draw_quiz(frame: &mut Frame, app: &App, quiz: &RiggedQuiz, area: Rect) {
    let block = card("Mission 3: The Truth", Color::LightBlue);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Question
            Constraint::Min(8),    // Buttons
            Constraint::Length(2), // Taunt
        ])
        .split(inner);

    let question = Paragraph::new("Who is the favorite child?")
        .style(Style::default().bold())
        .alignment(Alignment::Center);
    frame.render_widget(question, chunks[0]);

    let arena = chunks[1];
    let focused = |focus| {
        if app.quiz_focus == focus {
            Color::White
        } else {
            Color::DarkGray
        }
    };
    let button_w = 16.min(arena.width / 2);
    let button_h = 3.min(arena.height);
    let mid_y = arena.y + arena.height.saturating_sub(button_h) / 2;

    let correct = Rect::new(arena.x + 2.min(arena.width), mid_y, button_w, button_h);
    draw_button(frame, "You (User)", Color::Green, focused(QuizFocus::Correct), correct);

    let offset = quiz.offset();
    let home_x = i32::from(arena.right()) - i32::from(button_w) - 2;
    let min_x = i32::from(correct.right()) + 1;
    let max_x = i32::from(arena.right()) - i32::from(button_w);
    let x = (home_x + offset.dx / DODGE_SCALE_X).clamp(min_x.min(max_x), max_x.max(min_x));
    let min_y = i32::from(arena.y);
    let max_y = i32::from(arena.bottom()) - i32::from(button_h);
    let y = (i32::from(mid_y) + offset.dy / DODGE_SCALE_Y).clamp(min_y, max_y.max(min_y));
    let evasive = Rect::new(
        u16::try_from(x).unwrap_or(arena.x),
        u16::try_from(y).unwrap_or(arena.y),
        button_w,
        button_h,
    )
    .intersection(arena);
    draw_button(frame, "Me (Sister)", Color::LightRed, focused(QuizFocus::Evasive), evasive);

    if let Some(taunt) = app.engine.taunt() {
        let taunt = Paragraph::new(taunt)
            .style(Style::default().fg(Color::Gray).italic())
            .alignment(Alignment::Center);
        frame.render_widget(taunt, chunks[2]);
    }
}

/// Draw the password door.
pub fn draw_unlock(frame: &mut Frame, app: &App, vault: &Vault, area: Rect) {
    let block = card("The Final Door", Color::Gray);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Locks and hint
            Constraint::Length(3), // Password
            Constraint::Min(0),    // Status
        ])
        .split(inner);

    let lock = "\u{1F513}";
    let top = Paragraph::new(vec![
        Line::from(""),
        Line::from(format!("{lock} {lock} {lock}")),
        Line::from(""),
        Line::from("Password Hint: What are you to me?"),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(top, chunks[0]);

    let masked = "*".repeat(app.input.text().chars().count());
    draw_text_input(
        frame,
        masked,
        app.input.cursor_column(),
        "Enter Password",
        chunks[1],
    );

    let footer = if vault.is_awaiting_wish() {
        Line::from(Span::styled(
            "Unlocking...",
            Style::default().fg(Color::DarkGray).slow_blink(),
        ))
    } else {
        Line::from(Span::styled(
            "[ UNLOCK SURPRISE ]",
            Style::default().fg(Color::Black).bg(Color::LightMagenta).bold(),
        ))
    };
    frame.render_widget(
        Paragraph::new(vec![Line::from(""), footer]).alignment(Alignment::Center),
        chunks[2],
    );
}

fn draw_button(frame: &mut Frame, label: &str, fill: Color, border: Color, area: Rect) {
    if area.width < 3 || area.height == 0 {
        return;
    }
    let button = Paragraph::new(label.to_string())
        .style(Style::default().fg(fill).bold())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(button, area);
}

fn draw_text_input(frame: &mut Frame, shown: String, cursor: usize, placeholder: &str, area: Rect) {
    let text = if shown.is_empty() {
        Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(shown)
    };
    let input = Paragraph::new(Line::from(vec![Span::raw("> "), text])).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(input, area);

    // Offset by 2 for "> " plus 1 for the left border.
    let cursor_x = u16::try_from(cursor)
        .map(|c| area.x.saturating_add(3).saturating_add(c))
        .unwrap_or(u16::MAX);
    if cursor_x < area.right().saturating_sub(1) {
        frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}
