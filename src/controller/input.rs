//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            self.model.set_should_quit(true).await;
            return Ok(());
        }

        // The splash is non-interactive apart from quitting
        if self.model.is_splash_visible().await {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
                self.model.set_should_quit(true).await;
            }
            return Ok(());
        }

        if self.model.is_help_popup_open().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.model.toggle_help_popup().await;
            }
            return Ok(());
        }

        // Detail modal
        if let Some(selected) = self.model.selected_cocktail().await {
            match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => {
                    self.close_details().await;
                }
                KeyCode::Char('f') | KeyCode::Char('F') => {
                    self.toggle_favorite(&selected).await;
                }
                _ => {}
            }
            return Ok(());
        }

        let ui_state = self.model.get_ui_state().await;

        // Search input owns printable keys while search mode is active
        if ui_state.is_search_mode() {
            match key.code {
                KeyCode::Esc => {
                    self.toggle_search_mode().await;
                    return Ok(());
                }
                KeyCode::Backspace => {
                    let query = self.model.backspace_search().await;
                    self.on_search_input(query).await;
                    return Ok(());
                }
                KeyCode::Char('f') if ctrl => {
                    if let Some(cocktail) = self.model.focused_cocktail().await {
                        self.toggle_favorite(&cocktail).await;
                    }
                    return Ok(());
                }
                KeyCode::Char(c) if !ctrl => {
                    let query = self.model.append_to_search(c).await;
                    self.on_search_input(query).await;
                    return Ok(());
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Left => self.model.move_grid_cursor(-1).await,
            KeyCode::Right => self.model.move_grid_cursor(1).await,
            KeyCode::Up => self.model.move_grid_row(false).await,
            KeyCode::Down => self.model.move_grid_row(true).await,
            KeyCode::Enter => {
                if let Some(cocktail) = self.model.focused_cocktail().await {
                    self.show_details(cocktail).await;
                }
            }
            KeyCode::Char('f') | KeyCode::Char('F') | KeyCode::Char(' ') => {
                if let Some(cocktail) = self.model.focused_cocktail().await {
                    self.toggle_favorite(&cocktail).await;
                }
            }
            KeyCode::Char('/') => {
                self.toggle_search_mode().await;
            }
            KeyCode::Char('v') | KeyCode::Char('V') => {
                self.toggle_favorites().await;
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.toggle_theme().await;
            }
            // Network actions run in the background so the render loop keeps going
            KeyCode::Char('r') | KeyCode::Char('R') => {
                let controller = self.clone();
                tokio::spawn(async move {
                    controller.refresh().await;
                });
            }
            KeyCode::Char('g') | KeyCode::Char('G') | KeyCode::Home => {
                let controller = self.clone();
                tokio::spawn(async move {
                    controller.go_home().await;
                });
            }
            KeyCode::Char('?') => {
                self.model.toggle_help_popup().await;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.model.set_should_quit(true).await;
            }
            _ => {}
        }
        Ok(())
    }
}
