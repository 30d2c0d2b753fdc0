//! Cocktail detail modal

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::Cocktail;
use super::theme::Palette;
use super::utils::centered_rect;

pub fn render_cocktail_modal(frame: &mut Frame, cocktail: &Cocktail, is_favorite: bool, palette: &Palette) {
    let area = frame.area();
    let popup_area = centered_rect(
        area,
        (area.width * 3 / 4).max(40),
        (area.height * 4 / 5).max(12),
    );

    frame.render_widget(Clear, popup_area);

    let bold = Style::default().fg(palette.fg).add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = Vec::new();

    if let Some(tags) = cocktail.tag_line() {
        lines.push(Line::from(Span::styled(tags, Style::default().fg(palette.muted))));
    }

    let badges: Vec<Span> = [&cocktail.category, &cocktail.alcoholic, &cocktail.glass]
        .into_iter()
        .flatten()
        .flat_map(|badge| {
            [
                Span::styled(
                    format!(" {} ", badge),
                    Style::default().fg(palette.bg).bg(palette.accent),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    if !badges.is_empty() {
        lines.push(Line::from(badges));
    }
    lines.push(Line::default());

    if !cocktail.ingredients.is_empty() {
        lines.push(Line::from(Span::styled("Ingredients", bold)));
        for line in &cocktail.ingredients {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(palette.accent)),
                Span::styled(
                    format!("{:<14}", line.measure),
                    Style::default().fg(palette.muted),
                ),
                Span::styled(line.ingredient.clone(), Style::default().fg(palette.fg)),
            ]));
        }
        lines.push(Line::default());
    }

    if let Some(ref instructions) = cocktail.instructions {
        lines.push(Line::from(Span::styled("Instructions", bold)));
        lines.push(Line::from(Span::styled(
            instructions.clone(),
            Style::default().fg(palette.fg),
        )));
        lines.push(Line::default());
    }

    if let Some(ref video) = cocktail.video {
        lines.push(Line::from(vec![
            Span::styled("▶ Watch on YouTube: ", bold),
            Span::styled(
                video.clone(),
                Style::default().fg(palette.accent).add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    if let Some(ref thumbnail) = cocktail.thumbnail {
        lines.push(Line::from(Span::styled(
            format!("Image: {}", thumbnail),
            Style::default().fg(palette.muted),
        )));
    }

    let heart = if is_favorite {
        Span::styled(" ♥ ", Style::default().fg(palette.favorite))
    } else {
        Span::styled(" ♡ ", Style::default().fg(palette.muted))
    };

    let modal = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(palette.base())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .padding(Padding::new(2, 2, 1, 0))
                .border_style(palette.border(true))
                .title(Line::from(vec![
                    heart,
                    Span::styled(format!("{} ", cocktail.name), palette.title()),
                ]))
                .title_bottom(Line::from(" f favorite | Esc close ").right_aligned())
                .style(palette.base()),
        );

    frame.render_widget(modal, popup_area);
}
