//! Splash screen rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph},
    Frame,
};

use crate::model::{SplashPhase, SplashTimeline};
use super::theme::Palette;
use super::utils::centered_rect;

const SLIDE_ROWS: f64 = 4.0;

pub fn render_splash(frame: &mut Frame, splash: &SplashTimeline, palette: &Palette) {
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let phase = splash.phase();
    let (offset, bar, dimmed) = match phase {
        SplashPhase::Entrance(p) => ((SLIDE_ROWS * (1.0 - p)).round() as u16, 0.0, false),
        SplashPhase::Loading(p) => (0, p, false),
        SplashPhase::Exit(p) => (0, 1.0, p > 0.5),
        SplashPhase::Finished => return,
    };

    let content = centered_rect(area, 40, 6);
    let content = Rect {
        y: (content.y + offset).min(area.bottom().saturating_sub(content.height)),
        ..content
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(2), // Tagline
            Constraint::Length(1), // Loading bar
        ])
        .split(content);

    let title_style = if dimmed {
        Style::default().fg(palette.muted)
    } else {
        palette.title()
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled("🍸 Cocktails", title_style))).centered(),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Discover your next drink",
            Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC),
        )))
        .centered(),
        chunks[1],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(palette.accent).bg(palette.bg))
        .ratio(bar.clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, chunks[2]);
}
