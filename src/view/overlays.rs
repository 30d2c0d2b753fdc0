//! Overlay rendering (help popup)

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::theme::Palette;
use super::utils::centered_rect;

pub fn render_help_popup(frame: &mut Frame, palette: &Palette) {
    let keybindings = vec![
        ("", "── Browse ──"),
        ("← → ↑ ↓", "Move between cards"),
        ("Enter", "View recipe"),
        ("F / Space", "Favorite / unfavorite"),
        ("R", "New random cocktails"),
        ("G / Home", "Home"),
        ("", ""),
        ("", "── Views ──"),
        ("/", "Search by name (Esc leaves)"),
        ("Ctrl+F", "Favorite while searching"),
        ("V", "Favorites"),
        ("T", "Light / dark theme"),
        ("", ""),
        ("", "── Recipe ──"),
        ("F", "Favorite / unfavorite"),
        ("Esc / Enter", "Close"),
        ("", ""),
        ("", "── General ──"),
        ("?", "Toggle this help"),
        ("Q / Ctrl+C", "Quit"),
    ];

    let area = frame.area();
    let popup_area = centered_rect(area, 52, keybindings.len() as u16 + 2);

    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                Line::from(Span::styled(
                    format!("{:^48}", desc),
                    palette.title(),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>14}", key),
                        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(palette.fg)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(true))
            .title(" Help (? or Esc to close) ")
            .title_style(palette.title())
            .style(palette.base()),
    );

    frame.render_widget(help_text, popup_area);
}
