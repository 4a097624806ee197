//! Shared drawing helpers: layout, the progress bar, and popups.

use bday_core::{Itinerary, Stage};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Number of numbered missions shown in the progress bar.
pub const MISSIONS: u8 = 3;

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// A rounded card block with a title.
pub fn card(title: &str, color: Color) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

/// Draw the top bar: mission progress while missions run, otherwise the
/// position in the itinerary.
pub fn draw_progress(frame: &mut Frame, itinerary: &Itinerary, stage: Stage, area: Rect) {
    let mut spans = Vec::new();
    if let Some(current) = stage.mission() {
        for n in 1..=MISSIONS {
            if n > 1 {
                spans.push(Span::styled(" \u{2500}\u{2500} ", Style::default().fg(Color::DarkGray)));
            }
            let style = if n < current {
                Style::default().fg(Color::Green)
            } else if n == current {
                Style::default().fg(Color::Magenta).bold()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let mark = if n < current { "\u{2714}" } else { "\u{25CF}" };
            spans.push(Span::styled(format!("{mark} Mission {n}"), style));
        }
    } else {
        let position = itinerary.position(stage).map_or(0, |p| p + 1);
        spans.push(Span::styled(
            format!("{stage}"),
            Style::default().fg(Color::Magenta).bold(),
        ));
        spans.push(Span::styled(
            format!("  ({position}/{})", itinerary.stages().len()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), area);
}

/// Draw a blocking notice that must be dismissed.
pub fn draw_notice(frame: &mut Frame, text: &str) {
    let area = centered_rect(50, 30, frame.area());
    let popup = Paragraph::new(vec![
        Line::from(text.to_string()).style(Style::default().fg(Color::Red).bold()),
        Line::from(""),
        Line::from("Press Enter to try again").style(Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(card("Locked", Color::Red));
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// Draw the help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("  Enter / Space  Accept, submit, open"),
        Line::from("  Arrow keys     Move the highlight"),
        Line::from("  Space          Pick an emoji"),
        Line::from("  Up / Down      Fill or drain the water meter"),
        Line::from(""),
        Line::from("While typing:"),
        Line::from("  Enter          Submit"),
        Line::from("  Esc            Clear input"),
        Line::from(""),
        Line::from("  ?              Toggle this help"),
        Line::from("  q / Esc        Quit"),
        Line::from("  Ctrl+C         Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// Status bar text for a stage.
pub fn status_hint(stage: Stage) -> &'static str {
    match stage {
        Stage::Intro => "Enter:accept the challenge  ?:help  q:quit",
        Stage::Riddle => "type your answer  Enter:unlock  Esc:clear  Ctrl+C:quit",
        Stage::DescribeMe => {
            "\u{2190}\u{2191}\u{2192}\u{2193}:move  Space:pick  Enter:analyze  ?:help  q:quit"
        }
        Stage::MemoryMatch => "\u{2190}\u{2191}\u{2192}\u{2193}:move  Enter:flip  ?:help  q:quit",
        Stage::Quiz => "\u{2190}/\u{2192}:choose  Enter:answer  ?:help  q:quit",
        Stage::Hydration => "\u{2191}/\u{2193}:slide  Enter:continue  ?:help  q:quit",
        Stage::Unlock => "type the password  Enter:unlock  Esc:clear  Ctrl+C:quit",
        Stage::Curtain => "Enter:start the show  q:quit",
        Stage::Gift => "Enter:open  q:quit",
        Stage::Party | Stage::Cake | Stage::Reveal => "q:quit",
    }
}
