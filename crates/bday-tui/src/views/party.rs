//! The party sequence: curtain, lights, cake, gift and the final reveal.

use bday_core::games::show::{CakePhase, Curtain, GiftPhase};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::App;
use crate::shared::card;

const CANDLE: &str = "\u{1F56F}";
const CAKE: &str = "\u{1F382}";
const GIFT: &str = "\u{1F381}";
const SPARKLES: &str = "\u{2728}";

fn centered(frame: &mut Frame, lines: Vec<Line<'static>>, title: &str, color: Color, area: Rect) {
    let block = card(title, color);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let top = inner.height.saturating_sub(lines.len() as u16) / 2;
    let mut padded = vec![Line::from(""); usize::from(top)];
    padded.extend(lines);
    let paragraph = Paragraph::new(padded)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// Draw the curtain.
pub fn draw_curtain(frame: &mut Frame, curtain: &Curtain, area: Rect) {
    let lines = if curtain.is_opening() {
        vec![Line::from("The curtain rises...").style(Style::default().fg(Color::Yellow).italic())]
    } else {
        vec![
            Line::from("\u{2593}".repeat(20)).style(Style::default().fg(Color::Red)),
            Line::from(""),
            Line::from("Tap to Start the Show!").style(Style::default().fg(Color::Yellow).bold()),
            Line::from(""),
            Line::from("\u{2593}".repeat(20)).style(Style::default().fg(Color::Red)),
        ]
    };
    centered(frame, lines, "Curtain", Color::Red, area);
}

/// Draw the party lights.
pub fn draw_party(frame: &mut Frame, area: Rect) {
    let lights = "\u{25CF} ".repeat(10);
    let lines = vec![
        Line::from(lights.clone()).style(Style::default().fg(Color::Yellow)),
        Line::from(""),
        Line::from("Party Time!").style(Style::default().fg(Color::White).bold()),
        Line::from("LET'S CELEBRATE!").style(Style::default().fg(Color::LightMagenta)),
        Line::from(""),
        Line::from(lights).style(Style::default().fg(Color::Cyan)),
    ];
    centered(frame, lines, "Party", Color::Magenta, area);
}

/// Draw the cake.
pub fn draw_cake(frame: &mut Frame, phase: CakePhase, area: Rect) {
    let lines = match phase {
        CakePhase::Countdown(n) => vec![
            Line::from("Make a Wish!").style(Style::default().fg(Color::Yellow).bold()),
            Line::from(n.to_string()).style(Style::default().fg(Color::White).bold()),
            Line::from(""),
            Line::from(CANDLE),
            Line::from(CAKE),
        ],
        CakePhase::Blown => vec![
            Line::from(format!("Yay! {CAKE}")).style(Style::default().fg(Color::LightMagenta).bold()),
            Line::from(""),
            Line::from("~ smoke ~").style(Style::default().fg(Color::DarkGray).italic()),
            Line::from(CAKE),
        ],
        CakePhase::Cut => vec![
            Line::from(format!("Yay! {CAKE}")).style(Style::default().fg(Color::LightMagenta).bold()),
            Line::from(""),
            Line::from(format!("{CAKE}   {CAKE}")),
        ],
    };
    centered(frame, lines, "Cake", Color::LightYellow, area);
}

/// Draw the gift box.
pub fn draw_gift(frame: &mut Frame, phase: GiftPhase, area: Rect) {
    let lines = match phase {
        GiftPhase::Closed => vec![
            Line::from("Tap the Gift!").style(Style::default().fg(Color::Yellow).bold()),
            Line::from(""),
            Line::from(GIFT),
        ],
        GiftPhase::Opening => vec![
            Line::from("Here it comes...").style(Style::default().fg(Color::Yellow).bold()),
            Line::from(""),
            Line::from(GIFT),
        ],
        GiftPhase::Sparkling => vec![
            Line::from("Here it comes...").style(Style::default().fg(Color::Yellow).bold()),
            Line::from(""),
            Line::from(format!("{SPARKLES} {GIFT} {SPARKLES}")),
        ],
    };
    centered(frame, lines, "Gift", Color::LightMagenta, area);
}

/// Draw the reveal: the poem, the gallery and the coupon.
pub fn draw_reveal(frame: &mut Frame, app: &App, area: Rect) {
    let config = app.engine.config();
    let wish = app
        .engine
        .session()
        .generated()
        .closing_wish()
        .unwrap_or("Loading your poem...")
        .to_string();

    let mut lines = vec![
        Line::from("Happy Birthday!").style(Style::default().fg(Color::LightMagenta).bold()),
        Line::from(""),
    ];
    lines.extend(
        wish.lines()
            .map(|l| Line::from(l.to_string()).style(Style::default().fg(Color::White).italic())),
    );
    lines.push(Line::from(""));
    lines.push(Line::from("\u{1F4F8} Our Memories:").style(Style::default().fg(Color::Gray).bold()));
    let gallery: Vec<Span<'static>> = config
        .gallery
        .iter()
        .map(|caption| {
            Span::styled(
                format!(" [{caption}] "),
                Style::default().fg(Color::LightCyan),
            )
        })
        .collect();
    lines.push(Line::from(gallery));
    lines.push(Line::from(""));
    lines.push(Line::from("GIFT COUPON").style(Style::default().fg(Color::Gray)));
    lines.push(
        Line::from(format!("- - {} - -", config.coupon))
            .style(Style::default().fg(Color::Yellow).bold()),
    );
    lines.push(Line::from(""));
    lines.push(Line::from("Love you! \u{2764}\u{FE0F}").style(Style::default().fg(Color::LightRed)));

    centered(frame, lines, "Surprise!", Color::LightMagenta, area);
}
