//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! Every renderer is a pure function of model snapshots.
//!
//! - `theme`: Light and dark palettes
//! - `utils`: Shared helpers (truncation, centering)
//! - `layout`: Top bar and status bar
//! - `grid`: Cocktail card grid
//! - `modal`: Cocktail detail modal
//! - `splash`: Splash screen
//! - `overlays`: Help popup

mod theme;
mod utils;
mod layout;
mod grid;
mod modal;
mod splash;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    Frame,
};

use crate::model::{ContentState, UiState};
use theme::Palette;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, ui_state: &UiState, content_state: &ContentState) {
        let palette = Palette::for_theme(ui_state.theme);

        if ui_state.show_splash {
            splash::render_splash(frame, &ui_state.splash, &palette);
            return;
        }

        frame.render_widget(Block::default().style(palette.base()), frame.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title + search + mode
                Constraint::Min(0),    // Card grid
                Constraint::Length(3), // Status
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], ui_state, &palette);
        grid::render_grid(frame, chunks[1], ui_state, content_state, &palette);
        layout::render_status_bar(frame, chunks[2], ui_state, content_state, &palette);

        if let Some(ref cocktail) = ui_state.selected_cocktail {
            let is_favorite = content_state.is_favorite(&cocktail.id);
            modal::render_cocktail_modal(frame, cocktail, is_favorite, &palette);
        }

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame, &palette);
        }
    }

    /// Card columns the grid lays out for a terminal of this width
    pub fn grid_columns(width: u16) -> usize {
        grid::columns_for_width(width)
    }
}
