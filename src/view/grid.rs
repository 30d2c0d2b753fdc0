//! Card grid rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{Cocktail, ContentState, UiState, ViewMode};
use super::theme::Palette;
use super::utils::truncate_string;

pub const CARD_WIDTH: u16 = 30;
pub const CARD_HEIGHT: u16 = 6;

/// Number of card columns that fit in a terminal `width` cells wide
pub fn columns_for_width(width: u16) -> usize {
    // Two cells of the grid's own border
    (width.saturating_sub(2) / CARD_WIDTH).max(1) as usize
}

/// First row to draw so that `selected_row` stays visible
fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    selected_row.saturating_sub(visible_rows.saturating_sub(1))
}

pub fn render_grid(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    content_state: &ContentState,
    palette: &Palette,
) {
    let cocktails = content_state.visible(ui_state.mode);
    let title = match ui_state.mode {
        ViewMode::Browse => " Random picks (r to refresh) ".to_string(),
        ViewMode::Search => format!(" Results ({}) ", cocktails.len()),
        ViewMode::Favorites => format!(" Your favorites ({}) ", cocktails.len()),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(palette.title())
        .border_style(palette.border(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if cocktails.is_empty() {
        render_placeholder(frame, inner, ui_state, content_state, palette);
        return;
    }

    let columns = columns_for_width(area.width);
    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
    let selected = ui_state.grid_selected.min(cocktails.len() - 1);
    let first_row = first_visible_row(selected / columns, visible_rows);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(inner);

    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let start = (first_row + row_offset) * columns;
        if start >= cocktails.len() {
            break;
        }
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(CARD_WIDTH); columns])
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = start + col;
            let Some(cocktail) = cocktails.get(index) else {
                break;
            };
            let is_favorite = content_state.is_favorite(&cocktail.id);
            render_card(frame, *cell, cocktail, index == selected, is_favorite, palette);
        }
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    cocktail: &Cocktail,
    focused: bool,
    is_favorite: bool,
    palette: &Palette,
) {
    let name_width = area.width.saturating_sub(6) as usize;
    let heart = if is_favorite {
        Span::styled("♥ ", Style::default().fg(palette.favorite))
    } else {
        Span::styled("♡ ", Style::default().fg(palette.muted))
    };

    let detail = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    let lines = vec![
        Line::from(Span::styled(
            detail(&cocktail.category),
            Style::default().fg(palette.fg),
        )),
        Line::from(Span::styled(
            detail(&cocktail.alcoholic),
            Style::default().fg(palette.muted),
        )),
        Line::from(Span::styled(
            if focused { "Enter: view recipe" } else { "" },
            Style::default().fg(palette.accent).add_modifier(Modifier::ITALIC),
        )),
    ];

    let name_style = if focused {
        palette.title()
    } else {
        Style::default().fg(palette.fg).add_modifier(Modifier::BOLD)
    };

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .padding(Padding::horizontal(1))
            .title(Line::from(vec![
                Span::raw(" "),
                heart,
                Span::styled(truncate_string(&cocktail.name, name_width), name_style),
                Span::raw(" "),
            ]))
            .border_style(palette.border(focused)),
    );
    frame.render_widget(card, area);
}

fn render_placeholder(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    content_state: &ContentState,
    palette: &Palette,
) {
    let text = match ui_state.mode {
        _ if content_state.is_loading || content_state.is_searching => "Loading cocktails...",
        ViewMode::Browse => "No cocktails loaded. Press r to try again.",
        ViewMode::Search if ui_state.search_query.trim().is_empty() => {
            "Start typing to search cocktails by name."
        }
        ViewMode::Search => "No cocktails match your search.",
        ViewMode::Favorites => "No favorites yet. Press f on a card to save it.",
    };
    let placeholder = Paragraph::new(text)
        .style(Style::default().fg(palette.muted))
        .block(Block::default().padding(Padding::uniform(1)));
    frame.render_widget(placeholder, area);
}
