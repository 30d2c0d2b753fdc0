//! Layout rendering (top bar, status bar)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{ContentState, UiState, ViewMode};
use super::theme::Palette;

pub fn render_top_bar(frame: &mut Frame, area: Rect, ui_state: &UiState, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(22), // App title
            Constraint::Min(0),     // Search input
            Constraint::Length(16), // Mode badge
        ])
        .split(area);

    let title = Paragraph::new(Span::styled("🍸 Cocktails", palette.title()))
        .block(Block::default().borders(Borders::ALL).border_style(palette.border(false)));
    frame.render_widget(title, chunks[0]);

    let searching = ui_state.is_search_mode();
    let (search_text, search_style) = if !searching {
        ("Press / to search".to_string(), Style::default().fg(palette.muted))
    } else if ui_state.search_query.is_empty() {
        ("Type a cocktail name...".to_string(), Style::default().fg(palette.muted))
    } else {
        (format!("{}▏", ui_state.search_query), Style::default().fg(palette.fg))
    };

    let search = Paragraph::new(search_text).style(search_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .padding(Padding::horizontal(1))
            .border_style(palette.border(searching)),
    );
    frame.render_widget(search, chunks[1]);

    let mode = match ui_state.mode {
        ViewMode::Browse => "Discover",
        ViewMode::Search => "Search",
        ViewMode::Favorites => "Favorites",
    };
    let badge = Paragraph::new(Span::styled(mode, palette.title()))
        .centered()
        .block(Block::default().borders(Borders::ALL).border_style(palette.border(false)));
    frame.render_widget(badge, chunks[2]);
}

pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    content_state: &ContentState,
    palette: &Palette,
) {
    let mut spans = vec![Span::styled(
        format!(
            " {} shown | {} favorites | {} theme ",
            content_state.visible(ui_state.mode).len(),
            content_state.favorites.len(),
            ui_state.theme.as_str()
        ),
        Style::default().fg(palette.fg),
    )];

    if content_state.is_loading || content_state.is_searching {
        spans.push(Span::styled(
            "| Loading... ",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ));
    }

    if let Some(ref error) = ui_state.error_message {
        spans.push(Span::styled(
            format!("| {} ", error),
            Style::default().fg(palette.error).add_modifier(Modifier::BOLD),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border(ui_state.error_message.is_some()))
            .title_bottom(Line::from(" ? help | q quit ").right_aligned()),
    );
    frame.render_widget(status, area);
}
